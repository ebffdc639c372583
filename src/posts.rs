// Post dataset
//
// The fixed set of blog posts the app searches over. Records are static and
// immutable for the lifetime of the process; everything else in the crate
// refers to them by index or by `PostId`.

use serde::Serialize;

/// Unique identifier of a post
pub type PostId = u32;

/// A single blog post preview
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Post {
    pub id: PostId,
    pub title: &'static str,
    pub excerpt: &'static str,
    /// Ordered tags; the same tag may appear on several posts
    pub tags: &'static [&'static str],
    pub author: &'static str,
}

impl Post {
    /// Whether any of this post's tags satisfies `pred`
    pub fn has_tag_where(&self, pred: impl Fn(&str) -> bool) -> bool {
        self.tags.iter().any(|tag| pred(tag))
    }

    /// Plain-text rendering used for clipboard copy and headless output
    pub fn to_plain_text(&self) -> String {
        format!(
            "{}\n{}\nTags: {}\nBy {}",
            self.title,
            self.excerpt,
            self.tags.join(", "),
            self.author
        )
    }
}

static POSTS: [Post; 4] = [
    Post {
        id: 1,
        title: "Introduction to React Hooks",
        excerpt:
            "Discover the power of React Hooks and how they revolutionize state management...",
        tags: &["react", "javascript", "programming"],
        author: "Jane Doe",
    },
    Post {
        id: 2,
        title: "Tailwind CSS Best Practices",
        excerpt: "Learn how to create efficient and responsive designs with Tailwind CSS...",
        tags: &["css", "design", "tailwind"],
        author: "John Smith",
    },
    Post {
        id: 3,
        title: "Advanced JavaScript Techniques",
        excerpt: "Explore advanced JavaScript methods and functional programming concepts...",
        tags: &["javascript", "programming"],
        author: "Alice Johnson",
    },
    Post {
        id: 4,
        title: "Web Performance Optimization",
        excerpt: "Strategies to improve your web application's speed and efficiency...",
        tags: &["performance", "web", "optimization"],
        author: "Bob Williams",
    },
];

/// All posts, in display order
pub fn all() -> &'static [Post] {
    &POSTS
}

/// Unique tags across the dataset, in first-seen order
pub fn available_tags() -> Vec<&'static str> {
    let mut tags: Vec<&'static str> = Vec::new();
    for tag in POSTS.iter().flat_map(|post| post.tags.iter().copied()) {
        if !tags.contains(&tag) {
            tags.push(tag);
        }
    }
    tags
}
