use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::i18n::{Locale, detect_locale};
use crate::validate::DEFAULT_MAX_AGE_YEARS;

/// Environment variables consulted, in order, when no locale is given.
const LOCALE_ENV_VARS: [&str; 3] = ["LANGUAGE", "LC_ALL", "LANG"];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Your life in surprising numbers.
#[derive(Debug, Parser)]
#[command(name = "lifestats", version)]
pub struct Args {
    /// Birth date (YYYY-MM-DD)
    #[arg(short, long, env = "LIFESTATS_BIRTH")]
    pub birth: String,

    /// Display language (en, es, pt, hi, fr); detected from the environment when omitted
    #[arg(short, long, env = "LIFESTATS_LOCALE")]
    pub locale: Option<Locale>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Write dark_mode.svg and light_mode.svg share cards into this directory
    #[arg(long, value_name = "DIR")]
    pub svg_dir: Option<PathBuf>,

    /// Seed for a reproducible fun-fact selection
    #[arg(long)]
    pub seed: Option<u64>,

    /// Oldest accepted birth date, in years before today
    #[arg(long, default_value_t = DEFAULT_MAX_AGE_YEARS)]
    pub max_age: u32,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

/// Resolved run settings.
#[derive(Debug, Clone)]
pub struct Config {
    pub birth: String,
    pub locale: Locale,
    pub format: OutputFormat,
    pub svg_dir: Option<PathBuf>,
    pub seed: Option<u64>,
    pub max_age_years: u32,
    pub verbose: bool,
}

impl Config {
    /// Resolves the locale from `lookup` (normally `std::env::var`) when not given explicitly.
    pub fn resolve<F>(args: Args, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let locale = args.locale.unwrap_or_else(|| {
            // LANGUAGE holds a colon-separated preference list
            let values: Vec<String> = LOCALE_ENV_VARS.iter().filter_map(|var| lookup(var)).collect();
            detect_locale(values.iter().flat_map(|value| value.split(':')))
        });

        Self {
            birth: args.birth,
            locale,
            format: args.format,
            svg_dir: args.svg_dir,
            seed: args.seed,
            max_age_years: args.max_age,
            verbose: args.verbose,
        }
    }

    pub fn from_env(args: Args) -> Self {
        Self::resolve(args, |var| std::env::var(var).ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(argv: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("lifestats").chain(argv.iter().copied())).unwrap()
    }

    #[test]
    fn defaults() {
        let args = parse(&["--birth", "1992-06-14", "--locale", "en"]);
        let config = Config::resolve(args, |_| None);
        assert_eq!(config.birth, "1992-06-14");
        assert_eq!(config.locale, Locale::En);
        assert_eq!(config.format, OutputFormat::Text);
        assert_eq!(config.max_age_years, 150);
        assert!(config.svg_dir.is_none());
        assert!(config.seed.is_none());
    }

    #[test]
    fn explicit_locale_wins_over_environment() {
        let args = parse(&["-b", "1992-06-14", "-l", "fr"]);
        let config = Config::resolve(args, |_| Some("es_ES.UTF-8".to_string()));
        assert_eq!(config.locale, Locale::Fr);
    }

    #[test]
    fn locale_detected_from_language_list() {
        let args = parse(&["-b", "1992-06-14"]);
        let config = Config::resolve(args, |var| match var {
            "LANGUAGE" => Some("de_DE:pt_BR:en".to_string()),
            "LANG" => Some("hi_IN.UTF-8".to_string()),
            _ => None,
        });
        assert_eq!(config.locale, Locale::Pt);
    }

    #[test]
    fn unknown_environment_falls_back_to_english() {
        let args = parse(&["-b", "1992-06-14"]);
        let config = Config::resolve(args, |_| Some("C.UTF-8".to_string()));
        assert_eq!(config.locale, Locale::En);
    }

    #[test]
    fn json_and_seed() {
        let args = parse(&["-b", "2000-01-01", "-l", "en", "--format", "json", "--seed", "9"]);
        let config = Config::resolve(args, |_| None);
        assert_eq!(config.format, OutputFormat::Json);
        assert_eq!(config.seed, Some(9));
    }

    #[test]
    fn rejects_unknown_locale() {
        let result = Args::try_parse_from(["lifestats", "-b", "2000-01-01", "-l", "xx"]);
        assert!(result.is_err());
    }
}
