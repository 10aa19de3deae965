//! Result Formatter
//!
//! Renders one [`AnalysisResult`] as a single summary line:
//!
//! ```text
//! 14:03:27: "Hello World" Vowels = E: 1 O: 2
//! 14:03:31: "Hello World" Consonants (online) = D: 1 H: 1 L: 3 R: 1 W: 1
//! ```
//!
//! With zero display enabled every key of the category is listed, in key order.

use crate::domain::{AnalysisResult, FrequencyMap};

/// Short local time, hours:minutes:seconds
pub const TIME_FORMAT: &str = "%H:%M:%S";

/// Render `result` as one human-readable line
#[must_use]
pub fn format_result(result: &AnalysisResult, show_zeros: bool) -> String {
    let mut line = format!(
        "{}: \"{}\" {}",
        result.timestamp().format(TIME_FORMAT),
        result.input(),
        result.category().label()
    );
    if let Some(annotation) = result.source().annotation() {
        line.push(' ');
        line.push_str(annotation);
    }
    line.push_str(" =");
    line.push_str(&format_counts(result.counts(), show_zeros));
    line
}

/// Render the ` <letter>: <count>` listing, each entry prefixed by a space
#[must_use]
pub fn format_counts(counts: &FrequencyMap, show_zeros: bool) -> String {
    counts
        .iter()
        .filter(|&(_, count)| show_zeros || count > 0)
        .map(|(letter, count)| format!(" {letter}: {count}"))
        .collect()
}
