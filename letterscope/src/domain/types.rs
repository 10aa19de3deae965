//! Analysis result records

use chrono::{DateTime, Local};
use letterscope_common::{Category, FrequencyMap};
use serde::Serialize;

/// Where a tally was computed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Source {
    /// Counted in-process
    #[default]
    Local,
    /// Delegated to the counting service
    Remote,
}

impl Source {
    /// The other source
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Source::Local => Source::Remote,
            Source::Remote => Source::Local,
        }
    }

    /// Suffix shown after the category label, if any
    #[must_use]
    pub const fn annotation(self) -> Option<&'static str> {
        match self {
            Source::Local => None,
            Source::Remote => Some("(online)"),
        }
    }
}

/// One completed analysis.
///
/// Built once when an analysis finishes and never mutated afterwards; all
/// fields are read through accessors.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisResult {
    timestamp: DateTime<Local>,
    category: Category,
    source: Source,
    input: String,
    counts: FrequencyMap,
}

impl AnalysisResult {
    /// Record a result completed now
    #[must_use]
    pub fn new(input: impl Into<String>, source: Source, counts: FrequencyMap) -> Self {
        Self::with_timestamp(Local::now(), input, source, counts)
    }

    /// Record a result with an explicit completion time
    #[must_use]
    pub fn with_timestamp(
        timestamp: DateTime<Local>,
        input: impl Into<String>,
        source: Source,
        counts: FrequencyMap,
    ) -> Self {
        Self { timestamp, category: counts.category(), source, input: input.into(), counts }
    }

    #[must_use]
    pub fn timestamp(&self) -> DateTime<Local> {
        self.timestamp
    }

    #[must_use]
    pub fn category(&self) -> Category {
        self.category
    }

    #[must_use]
    pub fn source(&self) -> Source {
        self.source
    }

    /// Analyzed text, verbatim
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    #[must_use]
    pub fn counts(&self) -> &FrequencyMap {
        &self.counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use letterscope_common::analyze;

    #[test]
    fn test_category_follows_counts() {
        let result = AnalysisResult::new("Hello", Source::Local, analyze("Hello", Category::Vowels));
        assert_eq!(result.category(), Category::Vowels);
        assert_eq!(result.input(), "Hello");
        assert_eq!(result.counts().get('E'), Some(1));
    }

    #[test]
    fn test_source_annotation() {
        assert_eq!(Source::Local.annotation(), None);
        assert_eq!(Source::Remote.annotation(), Some("(online)"));
        assert_eq!(Source::Local.toggled(), Source::Remote);
    }

    #[test]
    fn test_serializes_counts_as_letter_object() {
        let result = AnalysisResult::new("ae", Source::Remote, analyze("ae", Category::Vowels));
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["category"], "vowels");
        assert_eq!(json["source"], "remote");
        assert_eq!(json["input"], "ae");
        assert_eq!(json["counts"]["A"], 1);
        assert_eq!(json["counts"]["U"], 0);
    }
}
