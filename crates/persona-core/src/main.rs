use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use persona_bank::Answer;
use persona_engine::{violations, ScoringEngine, TypeCode};

mod cli;
mod config;
mod report;

use cli::{Args, OutputFormat};
use config::PersonaConfig;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(std::env::var("PERSONA_LOG").unwrap_or_else(|_| "persona=info".into()))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    tracing::debug!(version = env!("CARGO_PKG_VERSION"), "persona starting");

    match args.command {
        cli::Command::Score {
            answers,
            format,
            bank,
            strict,
        } => score(&answers, format, args.config.as_deref(), bank.as_deref(), strict),
        cli::Command::Bank { bank } => show_bank(args.config.as_deref(), bank.as_deref()),
        cli::Command::Describe { type_code } => describe(&type_code),
    }
}

fn score(
    answers_path: &Path,
    format: OutputFormat,
    config_path: Option<&Path>,
    bank_path: Option<&Path>,
    strict: bool,
) -> Result<()> {
    let config = PersonaConfig::load(config_path)?;
    let bank = config.question_bank(bank_path)?;

    let source = std::fs::read_to_string(answers_path)
        .with_context(|| format!("reading answers {}", answers_path.display()))?;
    let answers: Vec<Answer> = serde_json::from_str(&source)
        .with_context(|| format!("parsing answers {}", answers_path.display()))?;

    let problems = violations(&answers, &bank);
    if let Some(first) = problems.first() {
        if strict {
            anyhow::bail!("invalid answers: {first} ({} violation(s) in total)", problems.len());
        }
        for problem in &problems {
            tracing::warn!(error = %problem, "scoring despite invalid answer");
        }
    }

    let engine = ScoringEngine::new(bank, config.scoring);
    let result = engine.score(&answers);
    tracing::info!(
        path = %answers_path.display(),
        type_code = %result.type_code,
        "scored answers"
    );

    match format {
        OutputFormat::Text => print!(
            "{}",
            report::ResultReport {
                result: &result,
                bank: engine.bank(),
                answered: answers.len(),
            }
        ),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&result)?),
    }
    Ok(())
}

fn show_bank(config_path: Option<&Path>, bank_path: Option<&Path>) -> Result<()> {
    let config = PersonaConfig::load(config_path)?;
    let bank = config.question_bank(bank_path)?;
    print!("{}", report::BankReport(&bank));
    Ok(())
}

fn describe(raw: &str) -> Result<()> {
    let type_code: TypeCode = raw.parse()?;
    println!("{type_code}: {}", type_code.role());
    Ok(())
}
