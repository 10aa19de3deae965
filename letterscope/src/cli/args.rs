//! CLI argument definitions

use std::time::Duration;

use clap::Parser;
use letterscope_common::Category;

use crate::config::{Config, RemoteConfig, DEFAULT_SERVER, DEFAULT_TIMEOUT_SECS};
use crate::domain::{ConfigError, Source};
use crate::session::Settings;

#[derive(Parser, Debug)]
#[command(
    name = "letterscope",
    version,
    about = "Count vowels or consonants in text, locally or via a counting service",
    after_help = "\
EXAMPLES:
    letterscope                                   Interactive terminal UI
    letterscope --headless \"Hello World\"          Count consonants, print one line
    letterscope --headless --vowels --online text  Ask the counting service for vowels
    letterscope --server http://host:8080 --online Start the UI in online mode"
)]
pub struct Args {
    /// Texts to analyze (headless mode)
    #[arg(value_name = "TEXT")]
    pub texts: Vec<String>,

    /// Base URL of the counting service
    #[arg(long, default_value = DEFAULT_SERVER, value_name = "URL")]
    pub server: String,

    /// Delegate counting to the counting service
    #[arg(long)]
    pub online: bool,

    /// Count vowels instead of consonants
    #[arg(long)]
    pub vowels: bool,

    /// List letters with a zero count too
    #[arg(long)]
    pub show_zeros: bool,

    /// Request timeout for the counting service, in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS, value_name = "SECS")]
    pub timeout: u64,

    /// Run without TUI and print one line per TEXT
    #[arg(long)]
    pub headless: bool,

    /// Print results as JSON objects (headless mode)
    #[arg(long, requires = "headless")]
    pub json: bool,

    /// Suppress non-essential output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    /// Validate arguments into a [`Config`]
    ///
    /// # Errors
    /// Returns a [`ConfigError`] for an invalid server URL, a zero timeout, or
    /// `--headless` without any TEXT.
    pub fn to_config(&self) -> Result<Config, ConfigError> {
        if self.headless && self.texts.is_empty() {
            return Err(ConfigError::MissingText);
        }

        let remote = RemoteConfig::new(&self.server, Duration::from_secs(self.timeout))?;
        let settings = Settings {
            category: if self.vowels { Category::Vowels } else { Category::Consonants },
            source: if self.online { Source::Remote } else { Source::Local },
            show_zeros: self.show_zeros,
        };

        Ok(Config { remote, settings })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::parse_from(["letterscope"]);
        let config = args.to_config().unwrap();
        assert_eq!(config.settings, Settings::default());
        assert_eq!(config.remote.timeout, Duration::from_secs(DEFAULT_TIMEOUT_SECS));
        assert!(!args.headless);
    }

    #[test]
    fn test_toggles() {
        let args = Args::parse_from([
            "letterscope",
            "--online",
            "--vowels",
            "--show-zeros",
            "--headless",
            "abc",
        ]);
        let config = args.to_config().unwrap();
        assert_eq!(config.settings.category, Category::Vowels);
        assert_eq!(config.settings.source, Source::Remote);
        assert!(config.settings.show_zeros);
        assert_eq!(args.texts, vec!["abc".to_string()]);
    }

    #[test]
    fn test_headless_requires_text() {
        let args = Args::parse_from(["letterscope", "--headless"]);
        assert!(matches!(args.to_config(), Err(ConfigError::MissingText)));
    }

    #[test]
    fn test_json_requires_headless() {
        assert!(Args::try_parse_from(["letterscope", "--json"]).is_err());
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let args = Args::parse_from(["letterscope", "--timeout", "0"]);
        assert!(matches!(args.to_config(), Err(ConfigError::InvalidTimeout)));
    }
}
