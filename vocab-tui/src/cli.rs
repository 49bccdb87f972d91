//! Command line interface
//!
//! Flags override the configuration file; logging flags fall back to the
//! `VOCAB_LOG_*` environment variables.

use std::path::PathBuf;

use clap::Parser;
use libvocab::config::{expand_path, Config};
use libvocab::logging::{default_log_file, LogFormat, LoggingConfig};
use libvocab::AppVariant;

#[derive(Parser, Debug, Clone, Default)]
#[command(name = "vocab-tui")]
#[command(version, about = "Translate vocabulary words in the terminal", long_about = None)]
pub struct Cli {
    /// Configuration file (default: $VOCAB_CONFIG or ~/.config/vocab/config.toml)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<String>,

    /// Base URL of the vocabulary service
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,

    /// Language code sent to the service
    #[arg(long, value_name = "CODE")]
    pub lang: Option<String>,

    /// Quiz flavour: plain, styled or workflow
    #[arg(long, value_name = "VARIANT")]
    pub variant: Option<AppVariant>,

    /// Path to open on startup, e.g. /word/3
    #[arg(long, value_name = "PATH")]
    pub start: Option<String>,

    /// Use the built-in word list instead of a server
    #[arg(long)]
    pub mock: bool,

    /// Log format: text, json or pretty
    #[arg(long, value_name = "FORMAT", env = "VOCAB_LOG_FORMAT")]
    pub log_format: Option<LogFormat>,

    /// Minimum log level
    #[arg(long, value_name = "LEVEL", env = "VOCAB_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Log file (default: <data dir>/vocab/vocab-tui.log)
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Load the configuration this invocation asks for, with flags applied
    pub fn load_config(&self) -> libvocab::Result<Config> {
        let mut config = match self.config {
            Some(ref path) => Config::load_from_path(&expand_path(path))?,
            None => Config::load_or_default()?,
        };
        self.apply(&mut config);
        config.validate()?;
        Ok(config)
    }

    /// Override configuration values given on the command line
    pub fn apply(&self, config: &mut Config) {
        if let Some(ref base_url) = self.base_url {
            config.backend.base_url = base_url.clone();
        }
        if let Some(ref lang) = self.lang {
            config.backend.lang = lang.clone();
        }
        if let Some(variant) = self.variant {
            config.app.variant = variant;
        }
        if let Some(ref start) = self.start {
            config.app.start = start.clone();
        }
    }

    /// Logging setup; always writes to a file since the TUI owns the screen
    pub fn logging(&self) -> libvocab::Result<LoggingConfig> {
        let file = match self.log_file {
            Some(ref path) => path.clone(),
            None => default_log_file("vocab-tui")?,
        };
        let level = self.log_level.clone().unwrap_or_else(|| "info".to_string());

        Ok(
            LoggingConfig::new(self.log_format.unwrap_or(LogFormat::Text), level, self.verbose)
                .with_file(file),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override_config() {
        let cli = Cli::parse_from([
            "vocab-tui",
            "--base-url",
            "https://vocab.example.org",
            "--lang",
            "fr",
            "--variant",
            "plain",
            "--start",
            "/word/9",
        ]);
        let mut config = Config::default_config();
        cli.apply(&mut config);

        assert_eq!(config.backend.base_url, "https://vocab.example.org");
        assert_eq!(config.backend.lang, "fr");
        assert_eq!(config.app.variant, AppVariant::Plain);
        assert_eq!(config.app.start, "/word/9");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_no_flags_keeps_config() {
        let cli = Cli::default();
        let mut config = Config::default_config();
        cli.apply(&mut config);
        assert_eq!(config, Config::default_config());
    }

    #[test]
    fn test_invalid_variant_is_rejected() {
        let result = Cli::try_parse_from(["vocab-tui", "--variant", "fancy"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_base_url_flag_repairs_bad_config_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[backend]\nbase_url = \"ftp://files.example.org\"\n").unwrap();
        let path = path.to_string_lossy().into_owned();

        let bad = Cli::parse_from(["vocab-tui", "--config", path.as_str()]);
        assert!(bad.load_config().is_err());

        let fixed = Cli::parse_from([
            "vocab-tui",
            "--config",
            path.as_str(),
            "--base-url",
            "http://localhost:8000",
        ]);
        let config = fixed.load_config().unwrap();
        assert_eq!(config.backend.base_url, "http://localhost:8000");
    }

    #[test]
    fn test_explicit_log_file() {
        let cli = Cli::parse_from(["vocab-tui", "--log-file", "/tmp/vocab.log", "--verbose"]);
        let logging = cli.logging().unwrap();
        assert_eq!(logging.file, Some(PathBuf::from("/tmp/vocab.log")));
        assert!(logging.verbose);
    }
}
