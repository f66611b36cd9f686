use std::fs;
use std::process::ExitCode;

use anyhow::Context;
use chrono::Local;
use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

use lifestats::config::{Args, Config, OutputFormat};
use lifestats::engine::calculate_life_stats_at;
use lifestats::i18n::catalog;
use lifestats::report::render_text;
use lifestats::svg::{Theme, generate_svg};
use lifestats::validate::validate_birth_date;

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn run(config: &Config) -> anyhow::Result<ExitCode> {
    let t = catalog(config.locale);
    let now = Local::now();

    let birth = match validate_birth_date(&config.birth, now.date_naive(), config.max_age_years) {
        Ok(date) => date,
        Err(e) => {
            eprintln!("{} ({e})", t.validation_error(&e));
            return Ok(ExitCode::FAILURE);
        }
    };
    debug!(%birth, locale = %config.locale, "computing life stats");

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let stats = calculate_life_stats_at(birth, &now, &mut rng);

    match config.format {
        OutputFormat::Text => print!("{}", render_text(&stats, birth, t)),
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&stats).context("serializing life stats")?;
            println!("{json}");
        }
    }

    if let Some(dir) = &config.svg_dir {
        fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
        for theme in [Theme::Dark, Theme::Light] {
            let path = dir.join(theme.file_name());
            fs::write(&path, generate_svg(&stats, birth, t, theme))
                .with_context(|| format!("writing {}", path.display()))?;
            info!(path = %path.display(), "wrote share card");
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn main() -> ExitCode {
    let config = Config::from_env(Args::parse());
    init_tracing(config.verbose);

    match run(&config) {
        Ok(code) => code,
        Err(e) => {
            error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}
