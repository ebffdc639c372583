//! Filter engine
//!
//! A post matches a [`FilterQuery`] when both predicates hold:
//! - the search term occurs (case-insensitively) in its title, excerpt or author
//! - no tags are selected, or at least one of its tags is selected
//!
//! Filtering never fails; an empty result is a normal outcome.

use crate::posts::Post;
use std::collections::BTreeSet;

/// Search text plus the set of selected tags
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterQuery {
    pub search_term: String,
    pub selected_tags: BTreeSet<String>,
}

impl FilterQuery {
    pub fn new(search_term: impl Into<String>) -> Self {
        Self {
            search_term: search_term.into(),
            selected_tags: BTreeSet::new(),
        }
    }

    /// Builder-style tag selection
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.selected_tags.insert(tag.into());
        self
    }

    /// Add the tag if absent, remove it if present.
    /// Returns whether the tag is selected afterwards.
    pub fn toggle_tag(&mut self, tag: &str) -> bool {
        if self.selected_tags.remove(tag) {
            false
        } else {
            self.selected_tags.insert(tag.to_string());
            true
        }
    }

    pub fn is_tag_selected(&self, tag: &str) -> bool {
        self.selected_tags.contains(tag)
    }

    fn matches_tags(&self, post: &Post) -> bool {
        self.selected_tags.is_empty()
            || post.has_tag_where(|tag| self.selected_tags.contains(tag))
    }
}

/// `needle` must already be lowercased
fn matches_search(post: &Post, needle: &str) -> bool {
    [post.title, post.excerpt, post.author]
        .iter()
        .any(|field| field.to_lowercase().contains(needle))
}

/// Filter posts, preserving their original order.
///
/// Takes any iterator of post references so an already-filtered result can
/// be filtered again.
pub fn filter_posts<'a, I>(posts: I, query: &FilterQuery) -> Vec<&'a Post>
where
    I: IntoIterator<Item = &'a Post>,
{
    let needle = query.search_term.to_lowercase();
    posts
        .into_iter()
        .filter(|post| matches_search(post, &needle) && query.matches_tags(post))
        .collect()
}

/// Same as [`filter_posts`] but yields indices into `posts`
pub fn filter_indices(posts: &[Post], query: &FilterQuery) -> Vec<usize> {
    let needle = query.search_term.to_lowercase();
    posts
        .iter()
        .enumerate()
        .filter(|(_, post)| matches_search(post, &needle) && query.matches_tags(post))
        .map(|(idx, _)| idx)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::posts;

    fn ids(result: &[&Post]) -> Vec<u32> {
        result.iter().map(|p| p.id).collect()
    }

    #[test]
    fn empty_query_returns_everything_in_order() {
        let result = filter_posts(posts::all(), &FilterQuery::default());
        assert_eq!(ids(&result), vec![1, 2, 3, 4]);
    }

    #[test]
    fn search_react_finds_only_hooks_post() {
        let result = filter_posts(posts::all(), &FilterQuery::new("react"));
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].title, "Introduction to React Hooks");
    }

    #[test]
    fn search_is_case_insensitive() {
        let upper = filter_posts(posts::all(), &FilterQuery::new("TAILWIND"));
        let lower = filter_posts(posts::all(), &FilterQuery::new("tailwind"));
        assert_eq!(ids(&upper), vec![2]);
        assert_eq!(ids(&upper), ids(&lower));
    }

    #[test]
    fn search_matches_author() {
        let result = filter_posts(posts::all(), &FilterQuery::new("bob w"));
        assert_eq!(ids(&result), vec![4]);
    }

    #[test]
    fn search_matches_excerpt() {
        let result = filter_posts(posts::all(), &FilterQuery::new("functional programming"));
        assert_eq!(ids(&result), vec![3]);
    }

    #[test]
    fn no_match_yields_empty() {
        let result = filter_posts(posts::all(), &FilterQuery::new("zzz-no-match"));
        assert!(result.is_empty());
    }

    #[test]
    fn javascript_tag_selects_posts_one_and_three() {
        let query = FilterQuery::default().with_tag("javascript");
        assert_eq!(ids(&filter_posts(posts::all(), &query)), vec![1, 3]);
    }

    #[test]
    fn tags_are_or_combined() {
        let query = FilterQuery::default().with_tag("css").with_tag("web");
        assert_eq!(ids(&filter_posts(posts::all(), &query)), vec![2, 4]);
    }

    #[test]
    fn search_and_tags_are_and_combined() {
        let query = FilterQuery::new("advanced").with_tag("react");
        assert!(filter_posts(posts::all(), &query).is_empty());

        let query = FilterQuery::new("advanced").with_tag("programming");
        assert_eq!(ids(&filter_posts(posts::all(), &query)), vec![3]);
    }

    #[test]
    fn every_result_satisfies_both_predicates() {
        let terms = ["", "a", "java", "SCRIPT", "web", "doe", "...", "zzz"];
        let tag_sets: Vec<Vec<&str>> = vec![
            vec![],
            vec!["javascript"],
            vec!["design", "performance"],
            vec!["programming", "web", "react"],
        ];

        for term in terms {
            for tags in &tag_sets {
                let mut query = FilterQuery::new(term);
                for tag in tags {
                    query.toggle_tag(tag);
                }
                let result = filter_posts(posts::all(), &query);
                let needle = term.to_lowercase();

                assert!(result.len() <= posts::all().len());
                for post in &result {
                    assert!(posts::all().contains(*post));
                    assert!(
                        post.title.to_lowercase().contains(&needle)
                            || post.excerpt.to_lowercase().contains(&needle)
                            || post.author.to_lowercase().contains(&needle)
                    );
                    if !tags.is_empty() {
                        assert!(post.tags.iter().any(|t| tags.contains(t)));
                    }
                }
            }
        }
    }

    #[test]
    fn filtering_is_idempotent() {
        let query = FilterQuery::new("a").with_tag("programming").with_tag("css");
        let once = filter_posts(posts::all(), &query);
        let twice = filter_posts(once.iter().copied(), &query);
        assert_eq!(ids(&once), ids(&twice));
    }

    #[test]
    fn indices_agree_with_references() {
        let query = FilterQuery::new("e").with_tag("javascript");
        let by_ref = ids(&filter_posts(posts::all(), &query));
        let by_idx: Vec<u32> = filter_indices(posts::all(), &query)
            .into_iter()
            .map(|i| posts::all()[i].id)
            .collect();
        assert_eq!(by_ref, by_idx);
    }

    #[test]
    fn toggling_twice_restores_membership() {
        let mut query = FilterQuery::default().with_tag("css");
        let before = query.selected_tags.clone();

        assert!(query.toggle_tag("web"));
        assert!(!query.toggle_tag("web"));
        assert_eq!(query.selected_tags, before);

        assert!(!query.toggle_tag("css"));
        assert!(query.toggle_tag("css"));
        assert_eq!(query.selected_tags, before);
    }
}
