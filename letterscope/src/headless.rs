//! Headless mode: analyze command-line texts and print one line per result
//!
//! Local results print as soon as they are computed. Remote requests run
//! concurrently and print in completion order. Failures go to stderr.

use std::io::Write;

use anyhow::{Context, Result};
use log::info;
use tokio::task::JoinSet;

use crate::config::Config;
use crate::domain::AnalysisResult;
use crate::formatter::format_result;
use crate::remote::HttpAnalyzer;
use crate::session::{Notice, Session, Submission};

/// How results are written to stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Formatted summary line
    Text,
    /// One JSON object per line
    Json,
}

/// Totals for the exit status
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct HeadlessSummary {
    pub printed: usize,
    pub failed: usize,
}

/// Analyze every text in `texts` and write results to `out`.
///
/// # Errors
/// Returns an error if writing to `out` fails, the HTTP client cannot be
/// built, or a remote task panics.
pub async fn run<W: Write>(
    config: &Config,
    texts: &[String],
    format: OutputFormat,
    out: &mut W,
) -> Result<HeadlessSummary> {
    let mut session = Session::new(config.settings);
    let mut summary = HeadlessSummary::default();
    let mut in_flight = JoinSet::new();
    let mut analyzer: Option<HttpAnalyzer> = None;

    for text in texts {
        match session.submit(text) {
            Submission::Rejected(notice) => {
                report(&notice);
                summary.failed += 1;
            }
            Submission::Completed(index) => {
                emit(&session, index, format, out)?;
                summary.printed += 1;
            }
            Submission::Pending(request) => {
                let client = match &analyzer {
                    Some(client) => client.clone(),
                    None => {
                        let client = HttpAnalyzer::new(&config.remote)
                            .context("Failed to set up counting service client")?;
                        analyzer = Some(client.clone());
                        client
                    }
                };
                in_flight.spawn(async move {
                    let outcome = client.analyze(&request.text, request.category).await;
                    (request, outcome)
                });
            }
        }
    }

    if !in_flight.is_empty() {
        info!("Waiting for {} remote analyses", in_flight.len());
    }
    while let Some(joined) = in_flight.join_next().await {
        let (request, outcome) = joined.context("Remote analysis task failed")?;
        match session.complete(request, outcome) {
            Ok(index) => {
                emit(&session, index, format, out)?;
                summary.printed += 1;
            }
            Err(notice) => {
                report(&notice);
                summary.failed += 1;
            }
        }
    }

    out.flush()?;
    Ok(summary)
}

fn emit<W: Write>(session: &Session, index: usize, format: OutputFormat, out: &mut W) -> Result<()> {
    let Some(result) = session.history().get(index) else {
        return Ok(());
    };
    writeln!(out, "{}", render(result, session.settings().show_zeros, format)?)?;
    Ok(())
}

fn render(result: &AnalysisResult, show_zeros: bool, format: OutputFormat) -> Result<String> {
    Ok(match format {
        OutputFormat::Text => format_result(result, show_zeros),
        OutputFormat::Json => serde_json::to_string(result)?,
    })
}

fn report(notice: &Notice) {
    eprintln!("{}: {}", notice.title, notice.message);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RemoteConfig;
    use crate::session::Settings;
    use letterscope_common::Category;
    use std::time::Duration;

    fn local_config(category: Category, show_zeros: bool) -> Config {
        Config {
            remote: RemoteConfig::new("http://127.0.0.1:9", Duration::from_secs(1)).unwrap(),
            settings: Settings { category, show_zeros, ..Settings::default() },
        }
    }

    #[tokio::test]
    async fn test_prints_one_line_per_text() {
        let config = local_config(Category::Vowels, false);
        let texts = vec!["Hello".to_string(), "World".to_string()];
        let mut out = Vec::new();

        let summary = run(&config, &texts, OutputFormat::Text, &mut out).await.unwrap();

        let stdout = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = stdout.lines().collect();
        assert_eq!(summary, HeadlessSummary { printed: 2, failed: 0 });
        assert!(lines[0].ends_with("\"Hello\" Vowels = E: 1 O: 1"));
        assert!(lines[1].ends_with("\"World\" Vowels = O: 1"));
    }

    #[tokio::test]
    async fn test_empty_text_counts_as_failure() {
        let config = local_config(Category::Consonants, false);
        let texts = vec![String::new(), "b".to_string()];
        let mut out = Vec::new();

        let summary = run(&config, &texts, OutputFormat::Text, &mut out).await.unwrap();

        assert_eq!(summary, HeadlessSummary { printed: 1, failed: 1 });
        assert_eq!(String::from_utf8(out).unwrap().lines().count(), 1);
    }

    #[tokio::test]
    async fn test_json_output() {
        let config = local_config(Category::Vowels, true);
        let texts = vec!["aa".to_string()];
        let mut out = Vec::new();

        run(&config, &texts, OutputFormat::Json, &mut out).await.unwrap();

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["source"], "local");
        assert_eq!(value["counts"]["A"], 2);
        assert_eq!(value["counts"]["E"], 0);
    }
}
