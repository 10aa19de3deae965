//! Domain model for letterscope
//!
//! This module contains the analysis record types and errors that provide:
//! - Immutable result records shared by the TUI and headless mode
//! - A tagged local/remote source instead of a boolean flag
//! - Structured error handling

pub mod errors;
pub mod types;

// Re-export common types for convenience
pub use letterscope_common::{Category, FrequencyMap};
pub use types::{AnalysisResult, Source};

pub use errors::{ConfigError, FailureKind, RemoteError, TuiError};
