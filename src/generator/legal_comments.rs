//! # Legal comment extraction
//!
//! Collects `/*! ... */` and `//!`-prefixed comments the printer walks past,
//! deduplicating identical text (the same license banner often appears once
//! per copy of a vendored file) and tracking the order they were first seen
//! so `EndOfFile` placement is deterministic.

use std::collections::HashSet;

#[derive(Debug, Default)]
pub struct LegalCommentCollector {
    seen: HashSet<String>,
    ordered: Vec<String>,
}

impl LegalCommentCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a legal comment's text if it hasn't been seen before.
    /// Returns `true` if this was a new comment.
    pub fn record(&mut self, text: &str) -> bool {
        if self.seen.contains(text) {
            return false;
        }
        self.seen.insert(text.to_string());
        self.ordered.push(text.to_string());
        true
    }

    pub fn into_ordered(self) -> Vec<String> {
        self.ordered
    }

    /// Non-consuming `into_ordered`, for reading the comments collected so
    /// far without giving up ownership of the collector.
    pub fn peek_ordered(&self) -> Vec<String> {
        self.ordered.clone()
    }
}

/// Renders the collected comments as an end-of-file trailer, one block
/// comment per entry (spec §6 `LegalCommentsMode::EndOfFile`).
pub fn render_end_of_file_trailer(comments: &[String]) -> String {
    comments.iter().map(|c| format!("/*! {c} */\n")).collect()
}

/// Renders the side-file contents for `Linked`/`External` legal-comment
/// modes: one block comment per entry, same shape as the end-of-file
/// trailer, just written to its own file instead of appended to the code.
pub fn render_side_file(comments: &[String]) -> String {
    render_end_of_file_trailer(comments)
}

/// The reference comment `Linked` mode leaves behind in the main output,
/// pointing at the side file holding the extracted comments.
pub fn render_linked_reference(side_file_name: &str) -> String {
    format!("/*! For license information please see {side_file_name} */\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_banners_are_recorded_once() {
        let mut collector = LegalCommentCollector::new();
        assert!(collector.record("Copyright 2024"));
        assert!(!collector.record("Copyright 2024"));
        assert_eq!(collector.into_ordered(), vec!["Copyright 2024".to_string()]);
    }

    #[test]
    fn trailer_wraps_each_entry_as_a_block_comment() {
        let rendered = render_end_of_file_trailer(&["a".to_string(), "b".to_string()]);
        assert_eq!(rendered, "/*! a */\n/*! b */\n");
    }
}
