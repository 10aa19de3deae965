//! # letterscope - Main Entry Point
//!
//! Supports two operational modes:
//! - **Interactive TUI** (default): type texts, toggle options, browse history
//! - **Headless** (`--headless TEXT...`): print one result line per text

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use letterscope::cli::Args;
use letterscope::domain::ConfigError;
use letterscope::headless::{self, OutputFormat};
use letterscope::remote::HttpAnalyzer;
use letterscope::session::Session;
use letterscope::tui;

// Exit codes
const EXIT_SUCCESS: i32 = 0;
const EXIT_ERROR: i32 = 1;
const EXIT_USAGE: i32 = 2;

fn main() {
    env_logger::init();
    std::process::exit(match run() {
        Ok(code) => code,
        Err(e) => {
            let code = exit_code_for(&e);
            eprintln!("error: {e:#}");
            code
        }
    });
}

fn exit_code_for(err: &anyhow::Error) -> i32 {
    if err.downcast_ref::<ConfigError>().is_some_and(ConfigError::is_usage) {
        EXIT_USAGE
    } else {
        EXIT_ERROR
    }
}

#[tokio::main]
async fn run() -> Result<i32> {
    let args = Args::parse();
    let config = args.to_config()?;

    if args.headless {
        let format = if args.json { OutputFormat::Json } else { OutputFormat::Text };
        let mut stdout = std::io::stdout().lock();
        let summary = headless::run(&config, &args.texts, format, &mut stdout).await?;

        if !args.quiet {
            info!("{} printed, {} failed", summary.printed, summary.failed);
        }
        return Ok(if summary.failed > 0 { EXIT_ERROR } else { EXIT_SUCCESS });
    }

    let analyzer = HttpAnalyzer::new(&config.remote)?;
    let session = Session::new(config.settings);
    let runtime = tokio::runtime::Handle::current();

    // The UI loop blocks on terminal input, keep it off the async workers
    let session = tokio::task::spawn_blocking(move || tui::run(session, analyzer, runtime))
        .await
        .context("TUI thread panicked")?
        .context("Terminal UI failed")?;

    if !args.quiet {
        println!("{} results analyzed", session.history().len());
    }
    Ok(EXIT_SUCCESS)
}
