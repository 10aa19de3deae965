//! # letterscope - Vowel and Consonant Counter
//!
//! letterscope counts how often each vowel or each consonant occurs in a
//! text, either in-process or by delegating to a remote counting service, and
//! keeps a running history of the results.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                  TUI (ratatui)  /  Headless                      │
//! │        text input · toggles · history · notices                  │
//! └───────────────────────┬─────────────────────────────────────────┘
//!                         │ submit(text)
//!                         ▼
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                         Session                                 │
//! │  ┌──────────────┐   ┌──────────────┐   ┌──────────────┐         │
//! │  │   Analyzer   │   │   History    │──▶│  Formatter   │         │
//! │  │   (local)    │──▶│ (append-only)│   │  (one line)  │         │
//! │  └──────────────┘   └──────▲───────┘   └──────────────┘         │
//! │                            │ complete()                          │
//! │                     ┌──────┴───────┐                            │
//! │                     │    Remote    │  POST /analyzeVowels        │
//! │                     │  (reqwest)   │  POST /analyzeConsonants    │
//! │                     └──────────────┘                            │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Structure
//!
//! - [`domain`]: Result records, local/remote source tag, error types
//! - [`formatter`]: One-line rendering of a result, with or without zero counts
//! - [`history`]: Append-only, ordered result list
//! - [`remote`]: Counting service client and response adapter
//! - [`session`]: Toggles, empty-input validation, remote completion handling
//! - [`headless`]: Non-interactive mode printing one line per text
//! - [`tui`]: Interactive terminal UI
//! - [`cli`] / [`config`]: Argument parsing and validated configuration
//!
//! The letter key sets and the analyzer itself live in `letterscope-common`.
//!
//! ## Typical Usage
//!
//! ```bash
//! # Interactive UI, counting locally
//! letterscope
//!
//! # One-shot, vowels, via the counting service
//! letterscope --headless --vowels --online "Hello World"
//! ```

pub mod cli;
pub mod config;
pub mod domain;
pub mod formatter;
pub mod headless;
pub mod history;
pub mod remote;
pub mod session;
pub mod tui;
