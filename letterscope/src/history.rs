//! Append-only result history
//!
//! Entries are kept in insertion order. Remote results are pushed when they
//! complete, so concurrent requests land in completion order.

use crate::domain::AnalysisResult;

/// Ordered, append-only list of analysis results
#[derive(Debug, Default)]
pub struct History {
    entries: Vec<AnalysisResult>,
}

impl History {
    /// Create an empty history
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a result and return its index
    pub fn push(&mut self, result: AnalysisResult) -> usize {
        self.entries.push(result);
        self.entries.len() - 1
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&AnalysisResult> {
        self.entries.get(index)
    }

    #[must_use]
    pub fn latest(&self) -> Option<&AnalysisResult> {
        self.entries.last()
    }

    pub fn iter(&self) -> impl Iterator<Item = &AnalysisResult> {
        self.entries.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Category, Source};
    use letterscope_common::analyze;

    #[test]
    fn test_push_preserves_order() {
        let mut history = History::new();
        assert!(history.is_empty());

        let first = history.push(AnalysisResult::new(
            "one",
            Source::Local,
            analyze("one", Category::Vowels),
        ));
        let second = history.push(AnalysisResult::new(
            "two",
            Source::Remote,
            analyze("two", Category::Consonants),
        ));

        assert_eq!((first, second), (0, 1));
        assert_eq!(history.len(), 2);
        let inputs: Vec<&str> = history.iter().map(AnalysisResult::input).collect();
        assert_eq!(inputs, vec!["one", "two"]);
        assert_eq!(history.latest().map(AnalysisResult::input), Some("two"));
        assert_eq!(history.get(0).map(AnalysisResult::source), Some(Source::Local));
        assert!(history.get(2).is_none());
    }
}
