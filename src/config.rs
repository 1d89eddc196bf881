// src/config.rs
//! Engine tunables loaded from TOML with env overrides.
//!
//! Resolution order:
//! 1) `$OUTFIT_ENGINE_CONFIG_PATH` (must exist if set)
//! 2) `config/engine.toml` (defaults if missing)
//! 3) `OUTFIT_OPTIONAL_PROBABILITY` / `OUTFIT_STRICT_REQUIRED` override the file

use anyhow::{anyhow, Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::recommend::generator::GeneratorParams;

pub const DEFAULT_ENGINE_CONFIG_PATH: &str = "config/engine.toml";
pub const ENV_ENGINE_CONFIG_PATH: &str = "OUTFIT_ENGINE_CONFIG_PATH";
pub const ENV_OPTIONAL_PROBABILITY: &str = "OUTFIT_OPTIONAL_PROBABILITY";
pub const ENV_STRICT_REQUIRED: &str = "OUTFIT_STRICT_REQUIRED";

pub const DEFAULT_ATTEMPTS: usize = 5;
pub const DEFAULT_OPTIONAL_PROBABILITY: f64 = 0.5;

fn default_attempts() -> usize {
    DEFAULT_ATTEMPTS
}
fn default_optional_probability() -> f64 {
    DEFAULT_OPTIONAL_PROBABILITY
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct EngineConfig {
    #[serde(default)]
    pub generator: GeneratorSection,
    #[serde(default)]
    pub ranking: RankingSection,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GeneratorSection {
    /// Independent draws per call; also the candidate cap.
    #[serde(default = "default_attempts")]
    pub attempts: usize,
    /// Chance of adding each available optional category.
    #[serde(default = "default_optional_probability")]
    pub optional_probability: f64,
}

impl Default for GeneratorSection {
    fn default() -> Self {
        Self {
            attempts: DEFAULT_ATTEMPTS,
            optional_probability: DEFAULT_OPTIONAL_PROBABILITY,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RankingSection {
    /// Drop candidates missing a required category instead of ranking them low.
    #[serde(default)]
    pub strict_required: bool,
}

impl EngineConfig {
    /// Resolve path from env/defaults, parse, then apply env overrides.
    pub fn load() -> Result<Self> {
        let mut cfg = match std::env::var(ENV_ENGINE_CONFIG_PATH) {
            Ok(p) => {
                let path = PathBuf::from(p);
                if !path.exists() {
                    return Err(anyhow!(
                        "{ENV_ENGINE_CONFIG_PATH} points to non-existent path {}",
                        path.display()
                    ));
                }
                Self::from_path(&path)?
            }
            Err(_) => {
                let path = PathBuf::from(DEFAULT_ENGINE_CONFIG_PATH);
                if path.exists() {
                    Self::from_path(&path)?
                } else {
                    warn!(path = %path.display(), "engine config not found, using defaults");
                    Self::default()
                }
            }
        };

        if let Some(p) = parse_probability_env(std::env::var(ENV_OPTIONAL_PROBABILITY).ok()) {
            cfg.generator.optional_probability = p;
        }
        if let Some(strict) = parse_flag_env(std::env::var(ENV_STRICT_REQUIRED).ok()) {
            cfg.ranking.strict_required = strict;
        }

        info!(
            attempts = cfg.generator.attempts,
            optional_probability = cfg.generator.optional_probability,
            strict_required = cfg.ranking.strict_required,
            "engine config loaded"
        );
        Ok(cfg)
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading engine config from {}", path.display()))?;
        Self::from_toml_str(&content)
            .with_context(|| format!("parsing engine config {}", path.display()))
    }

    pub fn from_toml_str(s: &str) -> Result<Self> {
        let mut cfg: EngineConfig = toml::from_str(s)?;
        let p = cfg.generator.optional_probability;
        cfg.generator.optional_probability = if p.is_finite() {
            p.clamp(0.0, 1.0)
        } else {
            DEFAULT_OPTIONAL_PROBABILITY
        };
        Ok(cfg)
    }

    pub fn generator_params(&self) -> GeneratorParams {
        GeneratorParams {
            attempts: self.generator.attempts,
            optional_probability: self.generator.optional_probability,
        }
    }
}

// parse optional float env and clamp to <0.0..=1.0>
fn parse_probability_env(raw: Option<String>) -> Option<f64> {
    raw.and_then(|s| s.trim().parse::<f64>().ok())
        .filter(|v| v.is_finite())
        .map(|v| v.clamp(0.0, 1.0))
}

fn parse_flag_env(raw: Option<String>) -> Option<bool> {
    match raw?.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
