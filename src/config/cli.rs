use crate::config::parse_search_request;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, Validate};
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Debug, Clone, Parser)]
#[command(name = "vaccine-registry")]
#[command(about = "Query and book vaccination slots against a seeded center registry")]
pub struct CliConfig {
    #[arg(short, long, default_value = "centers.toml", help = "Seed file (TOML, or JSON by extension)")]
    pub seed: String,

    #[arg(long, value_enum, default_value = "json")]
    pub format: OutputFormat,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Csv,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Print one center
    Show {
        #[arg(long)]
        center: String,
    },
    /// Centers offering a vaccine/dose pair
    Search {
        #[arg(long)]
        vaccine: String,
        #[arg(long)]
        dose: String,
    },
    /// Concatenated results of several searches
    MultiSearch {
        #[arg(long = "request", value_name = "VACCINE:DOSE", required = true)]
        requests: Vec<String>,
    },
    /// Book one slot and print the updated center
    Book {
        #[arg(long)]
        center: String,
        #[arg(long)]
        vaccine: String,
        #[arg(long)]
        dose: String,
    },
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("seed", &self.seed)?;
        if let Command::MultiSearch { requests } = &self.command {
            for request in requests {
                parse_search_request(request)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parsing() {
        let config = CliConfig::parse_from([
            "vaccine-registry",
            "--seed",
            "seed.json",
            "--format",
            "csv",
            "multi-search",
            "--request",
            "COVAXIN:FIRST_DOSE",
            "--request",
            "COVISHIELD:SECOND_DOSE",
        ]);

        assert_eq!(config.format, OutputFormat::Csv);
        assert!(config.validate().is_ok());
        match config.command {
            Command::MultiSearch { requests } => assert_eq!(requests.len(), 2),
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
