use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use colored::*;
use eyre::{Context, Result};
use log::{debug, info};
use rand::SeedableRng;
use rand::rngs::StdRng;

use articlecontrol::cli::{Cli, Command, OutputFormat};
use articlecontrol::config::Config;
use articlecontrol::shell::ShellSession;
use articlecontrol::{Desk, Validator, render, reports};

/// Exit code for a count that was validated and rejected
const EXIT_REJECTED: u8 = 2;

fn setup_logging(cli_log_level: Option<&str>, config_log_level: Option<&str>) -> Result<()> {
    // Priority: CLI --log-level > config file > default (INFO); RUST_LOG refines it
    let level = match cli_log_level.or(config_log_level).map(str::to_uppercase).as_deref() {
        None | Some("INFO") => log::LevelFilter::Info,
        Some("TRACE") => log::LevelFilter::Trace,
        Some("DEBUG") => log::LevelFilter::Debug,
        Some("WARN") | Some("WARNING") => log::LevelFilter::Warn,
        Some("ERROR") => log::LevelFilter::Error,
        Some("OFF") => log::LevelFilter::Off,
        Some(other) => {
            eprintln!("Warning: Unknown log-level '{}', defaulting to INFO", other);
            log::LevelFilter::Info
        }
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .try_init()
        .context("Logger already initialized")?;
    Ok(())
}

fn load_desk(config: &Config, data: &[PathBuf]) -> Result<Desk> {
    let mut desk = Desk::new(Validator::new(config.validation));
    for path in data {
        desk.load(path)
            .with_context(|| format!("Failed to load historical data from {}", path.display()))?;
    }
    Ok(desk)
}

fn rng_from(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let config_log_level = Config::load_log_level(cli.config.as_ref());
    setup_logging(cli.log_level.as_deref(), config_log_level.as_deref()).context("Failed to setup logging")?;

    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;
    info!("articlecontrol starting");
    debug!("dispatching command: {:?}", cli.command);

    match cli.command {
        Command::Validate {
            data,
            publication,
            count,
            format,
        } => {
            let mut desk = load_desk(&config, &data)?;
            let today = chrono::Local::now().date_naive();
            let decision = desk.submit(&publication, &count, today)?;

            match format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&decision)?),
                OutputFormat::Text if decision.is_accepted() => {
                    println!("{} {} articles for {} accepted", "✓".green(), count.trim(), publication);
                    println!("{}", render::records_table(desk.records().records()));
                }
                OutputFormat::Text => {
                    println!("{} {} articles for {} rejected: {}", "✗".red(), count.trim(), publication, decision);
                }
            }

            if !decision.is_accepted() {
                return Ok(ExitCode::from(EXIT_REJECTED));
            }
        }
        Command::Publications { data } => {
            let desk = load_desk(&config, &data)?;
            let publications = desk.history().publications();
            if publications.is_empty() {
                println!("No publications found");
            }
            for name in publications {
                println!("{}", name);
            }
        }
        Command::History { data, weeks } => {
            let desk = load_desk(&config, &data)?;
            let weeks = weeks.unwrap_or(config.reports.grid_weeks);
            let rows = reports::historical_grid(desk.history(), weeks)?;
            println!("{}", render::grid_table(&rows));
        }
        Command::Report { data, seed } => {
            let desk = load_desk(&config, &data)?;
            let rows = reports::weekly_report(desk.history(), &mut rng_from(seed))?;
            println!("{}", render::weekly_table(&rows));
        }
        Command::Predict { data, seed } => {
            let desk = load_desk(&config, &data)?;
            let rows = reports::predictions(desk.history(), &mut rng_from(seed), config.reports.prediction_jitter)?;
            println!("{}", render::predictions_table(&rows));
        }
        Command::Shell { data } => {
            let desk = load_desk(&config, &data)?;
            ShellSession::new(desk, config.reports.clone()).run()?;
        }
    }

    Ok(ExitCode::SUCCESS)
}
