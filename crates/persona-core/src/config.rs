use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use persona_bank::banks;
use persona_bank::QuestionBank;
use persona_engine::ScoringConfig;
use serde::Deserialize;

const DEFAULT_CONFIG_FILE: &str = "persona.toml";

/// Contents of `persona.toml`. Every key is optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PersonaConfig {
    /// Path to a bank file; the built-in bank is used when unset.
    pub bank: Option<PathBuf>,
    pub scoring: ScoringConfig,
}

impl PersonaConfig {
    /// Reads `explicit`, or `./persona.toml` if it exists, or falls back to defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let path = match explicit {
            Some(path) => path.to_path_buf(),
            None => {
                let fallback = PathBuf::from(DEFAULT_CONFIG_FILE);
                if !fallback.exists() {
                    tracing::debug!("no config file; using defaults");
                    return Ok(Self::default());
                }
                fallback
            }
        };

        let source = std::fs::read_to_string(&path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let mut config: PersonaConfig =
            toml::from_str(&source).with_context(|| format!("parsing config {}", path.display()))?;
        config
            .scoring
            .validate()
            .with_context(|| format!("invalid [scoring] in {}", path.display()))?;

        // Bank paths are relative to the config file.
        if let (Some(bank), Some(dir)) = (config.bank.as_mut(), path.parent()) {
            if bank.is_relative() {
                *bank = dir.join(&*bank);
            }
        }

        tracing::info!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// `override_path` wins over the configured bank.
    pub fn question_bank(&self, override_path: Option<&Path>) -> Result<QuestionBank> {
        match override_path.or(self.bank.as_deref()) {
            Some(path) => QuestionBank::load(path)
                .with_context(|| format!("loading question bank {}", path.display())),
            None => Ok(banks::standard_60::bank()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_nested_scoring_tables() {
        let config: PersonaConfig = toml::from_str(
            r#"
bank = "banks/custom.toml"

[scoring]
confidence_amplification = 1.5

[scoring.anomaly]
extreme_ratio = 0.9
"#,
        )
        .unwrap();
        assert_eq!(config.bank, Some(PathBuf::from("banks/custom.toml")));
        assert_eq!(config.scoring.confidence_amplification, 1.5);
        assert_eq!(config.scoring.anomaly.extreme_ratio, 0.9);
        assert_eq!(config.scoring.anomaly.min_mean_gap_ms, 2000.0);
    }

    #[test]
    fn default_bank_is_builtin() {
        let bank = PersonaConfig::default().question_bank(None).unwrap();
        assert_eq!(bank.name, banks::DEFAULT_BANK);
    }

    #[test]
    fn bank_path_resolves_against_config_dir() {
        let dir = std::env::temp_dir().join(format!("persona-config-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("persona.toml");
        std::fs::write(&path, "bank = \"custom.toml\"\n").unwrap();

        let config = PersonaConfig::load(Some(&path)).unwrap();
        assert_eq!(config.bank, Some(dir.join("custom.toml")));

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn load_rejects_negative_amplification() {
        let path = std::env::temp_dir().join(format!("persona-bad-config-{}.toml", std::process::id()));
        std::fs::write(&path, "[scoring]\nconfidence_amplification = -1.0\n").unwrap();

        let err = PersonaConfig::load(Some(&path)).unwrap_err();
        let _ = std::fs::remove_file(&path);
        assert!(format!("{err:#}").contains("confidence_amplification must be"), "{err:#}");
    }
}
