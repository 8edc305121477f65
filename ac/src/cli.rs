//! CLI argument parsing for articlecontrol

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "ac")]
#[command(author, version, about = "Validate newspaper article counts against circulation history", long_about = None)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Validate a proposed article count for a publication
    Validate {
        /// Historical CSV file(s) with periodico, fecha and cantidad columns
        #[arg(short, long = "data", required = true)]
        data: Vec<PathBuf>,

        /// Publication name
        #[arg(short, long)]
        publication: String,

        /// Proposed article count
        #[arg(short = 'n', long)]
        count: String,

        /// Output format (text, json)
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },

    /// List publications with historical data
    Publications {
        /// Historical CSV file(s)
        #[arg(short, long = "data", required = true)]
        data: Vec<PathBuf>,
    },

    /// Show the historical grid, Monday to Sunday per week
    History {
        /// Historical CSV file(s)
        #[arg(short, long = "data", required = true)]
        data: Vec<PathBuf>,

        /// Number of weeks to show (default from config: 6)
        #[arg(short, long)]
        weeks: Option<usize>,
    },

    /// Show a randomly sampled report for the last week
    Report {
        /// Historical CSV file(s)
        #[arg(short, long = "data", required = true)]
        data: Vec<PathBuf>,

        /// Seed for reproducible sampling
        #[arg(short, long)]
        seed: Option<u64>,
    },

    /// Show naive predictions from the historical mean
    Predict {
        /// Historical CSV file(s)
        #[arg(short, long = "data", required = true)]
        data: Vec<PathBuf>,

        /// Seed for reproducible predictions
        #[arg(short, long)]
        seed: Option<u64>,
    },

    /// Start an interactive session
    Shell {
        /// Historical CSV file(s) to load at startup
        #[arg(short, long = "data")]
        data: Vec<PathBuf>,
    },
}

/// Output format for decisions
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "plain" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(format!("Unknown format: {}. Use: text or json", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_validate() {
        let cli = Cli::try_parse_from([
            "ac",
            "validate",
            "-d",
            "a.csv",
            "-d",
            "b.csv",
            "-p",
            "El Sol",
            "-n",
            "120",
            "--format",
            "json",
        ])
        .unwrap();

        match cli.command {
            Command::Validate {
                data,
                publication,
                count,
                format,
            } => {
                assert_eq!(data.len(), 2);
                assert_eq!(publication, "El Sol");
                assert_eq!(count, "120");
                assert_eq!(format, OutputFormat::Json);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_data_required() {
        assert!(Cli::try_parse_from(["ac", "report"]).is_err());
        assert!(Cli::try_parse_from(["ac", "shell"]).is_ok());
    }

    #[test]
    fn test_output_format_parse() {
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("plain".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
        assert!("yaml".parse::<OutputFormat>().is_err());
    }
}
