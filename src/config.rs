use std::env;
use std::path::PathBuf;

use anyhow::Result;

use crate::pipeline::analysis::Analyzer;
use crate::scoring::risk::RiskWeights;
use crate::signals::vocabulary::Vocabulary;

/// How the CLI prints an analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Colored report (default)
    Terminal,
    /// Pretty-printed JSON on stdout
    Json,
}

/// Central configuration loaded from environment variables.
///
/// Everything is optional. The .env file is loaded automatically at
/// startup via dotenvy.
#[derive(Debug, Clone)]
pub struct Config {
    /// Replacement phrase list (WHATSAFE_VOCABULARY_PATH), one phrase per line
    pub vocabulary_path: Option<PathBuf>,
    pub weights: RiskWeights,
    pub output_format: OutputFormat,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self> {
        let output_format = match env::var("WHATSAFE_OUTPUT").as_deref() {
            Ok("json") => OutputFormat::Json,
            // "terminal" or unset
            _ => OutputFormat::Terminal,
        };

        let defaults = RiskWeights::default();
        let weights = RiskWeights {
            keyword_weight: weight_var("WHATSAFE_KEYWORD_WEIGHT", defaults.keyword_weight)?,
            concentration_weight: weight_var(
                "WHATSAFE_CONCENTRATION_WEIGHT",
                defaults.concentration_weight,
            )?,
        };

        Ok(Self {
            vocabulary_path: env::var("WHATSAFE_VOCABULARY_PATH")
                .ok()
                .filter(|p| !p.trim().is_empty())
                .map(PathBuf::from),
            weights,
            output_format,
        })
    }

    /// The active vocabulary: the configured file, or the built-in phrases.
    pub fn vocabulary(&self) -> Result<Vocabulary> {
        match &self.vocabulary_path {
            Some(path) => Vocabulary::from_file(path),
            None => Ok(Vocabulary::default()),
        }
    }

    /// Build an analyzer from the configured vocabulary and weights.
    pub fn analyzer(&self) -> Result<Analyzer> {
        Ok(Analyzer::new(self.vocabulary()?, self.weights))
    }
}

/// Read an optional f64 weight, falling back to `default` when unset.
fn weight_var(name: &str, default: f64) -> Result<f64> {
    match env::var(name) {
        Ok(raw) => parse_weight(name, &raw),
        Err(_) => Ok(default),
    }
}

fn parse_weight(name: &str, raw: &str) -> Result<f64> {
    let value: f64 = raw
        .trim()
        .parse()
        .map_err(|_| anyhow::anyhow!("{name} must be a number, got {raw:?}"))?;
    if !value.is_finite() {
        anyhow::bail!("{name} must be a finite number, got {raw:?}");
    }
    Ok(value)
}
