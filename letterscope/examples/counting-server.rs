//! Stand-in counting service for trying online mode
//!
//! ## Usage
//!
//! ```bash
//! cargo run --example counting-server
//!
//! # In another terminal
//! letterscope --online
//! letterscope --headless --online --vowels "Hello World"
//!
//! # Or by hand
//! curl -X POST -H "Content-Type: text/plain" -d 'Hello World' http://localhost:8080/analyzeVowels
//! ```

use axum::{routing::post, Json, Router};
use letterscope_common::{analyze, Category, FrequencyMap};

async fn analyze_vowels(body: String) -> Json<FrequencyMap> {
    Json(analyze(&body, Category::Vowels))
}

async fn analyze_consonants(body: String) -> Json<FrequencyMap> {
    Json(analyze(&body, Category::Consonants))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let app = Router::new()
        .route("/analyzeVowels", post(analyze_vowels))
        .route("/analyzeConsonants", post(analyze_consonants));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:8080").await?;
    println!("Counting server listening on http://localhost:8080");
    println!("POST /analyzeVowels or /analyzeConsonants with a plain-text body");
    axum::serve(listener, app).await?;
    Ok(())
}
