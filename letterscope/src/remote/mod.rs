//! Remote delegation to the counting service
//!
//! The service exposes one endpoint per category. Each accepts the raw text as
//! a `text/plain` body and answers with a JSON object mapping letters to
//! counts:
//!
//! ```text
//! POST /analyzeVowels        "Hello World"
//! 200 OK                     {"A":0,"E":1,"I":0,"O":2,"U":0}
//! ```
//!
//! - `client` - reqwest transport and failure classification
//! - `adapter` - turns the JSON answer into a complete [`FrequencyMap`]
//!
//! [`FrequencyMap`]: letterscope_common::FrequencyMap

pub mod adapter;
pub mod client;

pub use adapter::adapt_response;
pub use client::HttpAnalyzer;
