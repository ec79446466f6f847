//! Command-line options and the resolved application configuration.

use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, ValueEnum};
use log::LevelFilter;
use readme_engine::{ServiceSettings, DEFAULT_SERVICE_URL};

#[derive(Debug, Parser)]
#[command(
    name = "readme-studio",
    version,
    about = "Generate a README.md for a GitHub repository from your terminal"
)]
pub struct Cli {
    /// Repository URL to prefill the input with.
    #[arg(long)]
    pub url: Option<String>,

    /// Base address of the README generation service.
    #[arg(long, env = "README_SERVICE_URL", default_value = DEFAULT_SERVICE_URL)]
    pub service_url: String,

    /// Directory that downloads are written to.
    #[arg(long, env = "README_OUTPUT_DIR", default_value = ".")]
    pub output_dir: PathBuf,

    /// Give up on a generation request after this many seconds.
    #[arg(long)]
    pub timeout_secs: Option<u64>,

    #[arg(long, default_value = "./readme_studio.log")]
    pub log_file: PathBuf,

    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

#[derive(Debug, Clone)]
pub struct LogConfig {
    pub path: PathBuf,
    pub level: LevelFilter,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub service: ServiceSettings,
    pub output_dir: PathBuf,
    pub initial_url: Option<String>,
    pub log: LogConfig,
}

impl Cli {
    pub fn into_config(self) -> AppConfig {
        AppConfig {
            service: ServiceSettings {
                service_url: self.service_url,
                request_timeout: self.timeout_secs.map(Duration::from_secs),
            },
            output_dir: self.output_dir,
            initial_url: self.url,
            log: LogConfig {
                path: self.log_file,
                level: self.log_level.into(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn explicit_flags_map_onto_config() {
        let cli = Cli::try_parse_from([
            "readme-studio",
            "--url",
            "https://github.com/acme/widgets",
            "--service-url",
            "http://localhost:9000",
            "--output-dir",
            "docs",
            "--timeout-secs",
            "90",
            "--log-level",
            "debug",
        ])
        .unwrap();

        let config = cli.into_config();
        assert_eq!(config.service.service_url, "http://localhost:9000");
        assert_eq!(config.service.request_timeout, Some(Duration::from_secs(90)));
        assert_eq!(config.output_dir, PathBuf::from("docs"));
        assert_eq!(
            config.initial_url.as_deref(),
            Some("https://github.com/acme/widgets")
        );
        assert_eq!(config.log.level, LevelFilter::Debug);
    }

    #[test]
    fn timeout_defaults_to_transport_default() {
        let cli = Cli::try_parse_from(["readme-studio", "--service-url", "http://x"]).unwrap();
        let config = cli.into_config();
        assert_eq!(config.service.request_timeout, None);
        assert_eq!(config.log.level, LevelFilter::Info);
        assert_eq!(config.initial_url, None);
    }

    #[test]
    fn unknown_log_level_is_rejected() {
        assert!(Cli::try_parse_from(["readme-studio", "--log-level", "loud"]).is_err());
    }
}
