//! Command line and environment configuration

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{bail, Result};
use clap::{Parser, ValueEnum};

pub const DEFAULT_SPLASH_MS: u64 = 2500;
pub const DEFAULT_TICK_MS: u64 = 1000;

/// Visual token set. Both themes drive the same behavior.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum Theme {
    #[default]
    Midnight,
    Zinc,
}

#[derive(Parser, Debug)]
#[command(name = "sublyme", version, about = "Layer your intentions: a terminal Sublyme client")]
pub struct Cli {
    /// Color theme
    #[arg(long, value_enum, env = "SUBLYME_THEME", default_value_t = Theme::Midnight)]
    pub theme: Theme,

    /// JSON catalog to use instead of the built-in one
    #[arg(long, env = "SUBLYME_CATALOG")]
    pub catalog: Option<PathBuf>,

    /// How long the splash screen stays up, in milliseconds
    #[arg(long, env = "SUBLYME_SPLASH_MS", default_value_t = DEFAULT_SPLASH_MS)]
    pub splash_ms: u64,

    /// Progress tick period while playing, in milliseconds
    #[arg(long, env = "SUBLYME_TICK_MS", default_value_t = DEFAULT_TICK_MS)]
    pub tick_ms: u64,

    /// Directory for rotated log files
    #[arg(long, env = "SUBLYME_LOG_DIR", default_value = ".logs")]
    pub log_dir: PathBuf,

    /// Start on the home screen, skipping splash and onboarding
    #[arg(long)]
    pub skip_intro: bool,

    /// Print the effective catalog as JSON and exit
    #[arg(long)]
    pub dump_catalog: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub theme: Theme,
    pub catalog: Option<PathBuf>,
    pub splash_delay: Duration,
    pub tick_period: Duration,
    pub log_dir: PathBuf,
    pub skip_intro: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            catalog: None,
            splash_delay: Duration::from_millis(DEFAULT_SPLASH_MS),
            tick_period: Duration::from_millis(DEFAULT_TICK_MS),
            log_dir: PathBuf::from(".logs"),
            skip_intro: false,
        }
    }
}

impl TryFrom<&Cli> for Config {
    type Error = anyhow::Error;

    fn try_from(cli: &Cli) -> Result<Self> {
        if cli.tick_ms == 0 {
            bail!("--tick-ms must be greater than zero");
        }
        if cli.splash_ms == 0 {
            bail!("--splash-ms must be greater than zero");
        }
        Ok(Self {
            theme: cli.theme,
            catalog: cli.catalog.clone(),
            splash_delay: Duration::from_millis(cli.splash_ms),
            tick_period: Duration::from_millis(cli.tick_ms),
            log_dir: cli.log_dir.clone(),
            skip_intro: cli.skip_intro,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_reference_timings() {
        let cli = Cli::parse_from(["sublyme"]);
        let config = Config::try_from(&cli).unwrap();
        assert_eq!(config.splash_delay, Duration::from_millis(2500));
        assert_eq!(config.tick_period, Duration::from_secs(1));
        assert_eq!(config.theme, Theme::Midnight);
        assert!(!config.skip_intro);
    }

    #[test]
    fn flags_override_defaults() {
        let cli = Cli::parse_from([
            "sublyme",
            "--theme",
            "zinc",
            "--tick-ms",
            "250",
            "--skip-intro",
            "--catalog",
            "mine.json",
        ]);
        let config = Config::try_from(&cli).unwrap();
        assert_eq!(config.theme, Theme::Zinc);
        assert_eq!(config.tick_period, Duration::from_millis(250));
        assert!(config.skip_intro);
        assert_eq!(config.catalog, Some(PathBuf::from("mine.json")));
    }

    #[test]
    fn zero_periods_are_rejected() {
        let cli = Cli::parse_from(["sublyme", "--tick-ms", "0"]);
        assert!(Config::try_from(&cli).is_err());
        let cli = Cli::parse_from(["sublyme", "--splash-ms", "0"]);
        assert!(Config::try_from(&cli).is_err());
    }

    #[test]
    fn unknown_theme_fails_to_parse() {
        assert!(Cli::try_parse_from(["sublyme", "--theme", "neon"]).is_err());
    }
}
