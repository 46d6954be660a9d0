use clap::Parser;
use std::path::PathBuf;

use live_scoreboard::script::OutputFormat;

/// Replay a scoreboard command script and print ranked summaries
#[derive(Parser, Debug, Clone)]
#[command(name = "live-scoreboard", version, about)]
pub struct Config {
    /// Script file to run (reads stdin when omitted)
    #[arg(long, env = "SCOREBOARD_SCRIPT")]
    pub script: Option<PathBuf>,

    /// Summary output format: "text" or "json"
    #[arg(long, env = "SCOREBOARD_FORMAT", default_value = "text")]
    pub format: String,

    /// Default log filter when RUST_LOG is unset
    #[arg(long, env = "SCOREBOARD_LOG", default_value = "info")]
    pub log_level: String,

    /// Abort on the first failing command instead of reporting and continuing
    #[arg(long, env = "SCOREBOARD_FAIL_FAST", default_value = "false")]
    pub fail_fast: bool,
}

impl Config {
    pub fn validate(&self) -> anyhow::Result<()> {
        if let Some(path) = &self.script {
            if !path.is_file() {
                anyhow::bail!("script file not found: {}", path.display());
            }
        }
        if let Err(e) = self.format.parse::<OutputFormat>() {
            anyhow::bail!(e);
        }
        if self.log_level.trim().is_empty() {
            anyhow::bail!("log_level must not be empty");
        }
        Ok(())
    }

    pub fn output_format(&self) -> OutputFormat {
        self.format.parse().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(args: &[&str]) -> Config {
        let mut argv = vec!["live-scoreboard"];
        argv.extend_from_slice(args);
        Config::parse_from(argv)
    }

    #[test]
    fn test_defaults() {
        let cfg = config(&[]);
        assert!(cfg.script.is_none());
        assert_eq!(cfg.output_format(), OutputFormat::Text);
        assert!(!cfg.fail_fast);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn test_json_format() {
        let cfg = config(&["--format", "json", "--fail-fast"]);
        assert_eq!(cfg.output_format(), OutputFormat::Json);
        assert!(cfg.fail_fast);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn test_rejects_unknown_format() {
        let cfg = config(&["--format", "xml"]);
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn test_rejects_missing_script() {
        let cfg = config(&["--script", "/definitely/not/here.txt"]);
        assert!(cfg.validate().is_err());
    }
}
