use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "persona", version, about = "Personality questionnaire scoring")]
pub struct Args {
    /// Configuration file (defaults to ./persona.toml when present)
    #[arg(long, global = true, env = "PERSONA_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Score a JSON array of answers
    Score {
        answers: PathBuf,
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
        /// Question bank file; overrides the config file
        #[arg(long)]
        bank: Option<PathBuf>,
        /// Refuse to score answers that violate the input contract
        #[arg(long, default_value_t = false)]
        strict: bool,
    },
    /// Print the question bank layout
    Bank {
        #[arg(long)]
        bank: Option<PathBuf>,
    },
    /// Show the role name of a type code such as ENFJ-T
    Describe { type_code: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}
