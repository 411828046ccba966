use anyhow::{bail, Context, Result};

use crate::keywords::matcher::DEFAULT_FUZZY_THRESHOLD;
use crate::models::{Industry, JobLevel};
use crate::scoring::weights::{QualityWeights, ScoringWeights};

pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 5 * 1024 * 1024;

/// Application configuration loaded from environment variables.
/// Fails at startup if a variable is present but malformed.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub fuzzy_threshold: f64,
    pub default_industry: Industry,
    pub github_api_url: String,
    pub github_token: Option<String>,
    pub max_upload_bytes: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let fuzzy_threshold = env_or("FUZZY_THRESHOLD", &DEFAULT_FUZZY_THRESHOLD.to_string())
            .parse::<f64>()
            .context("FUZZY_THRESHOLD must be a number")?;
        validate_threshold(fuzzy_threshold).context("FUZZY_THRESHOLD is out of range")?;

        Ok(Config {
            port: env_or("PORT", "8080")
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: env_or("RUST_LOG", "info"),
            fuzzy_threshold,
            default_industry: env_or("DEFAULT_INDUSTRY", "general")
                .parse::<Industry>()
                .map_err(anyhow::Error::msg)
                .context("DEFAULT_INDUSTRY must name a known industry")?,
            github_api_url: env_or("GITHUB_API_URL", "https://api.github.com")
                .trim_end_matches('/')
                .to_string(),
            github_token: std::env::var("GITHUB_TOKEN").ok().filter(|t| !t.is_empty()),
            max_upload_bytes: env_or("MAX_UPLOAD_BYTES", &DEFAULT_MAX_UPLOAD_BYTES.to_string())
                .parse::<usize>()
                .context("MAX_UPLOAD_BYTES must be a positive integer")?,
        })
    }

    pub fn analysis(&self) -> AnalysisConfig {
        AnalysisConfig {
            industry: self.default_industry,
            fuzzy_threshold: self.fuzzy_threshold,
            ..Default::default()
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            rust_log: "info".to_string(),
            fuzzy_threshold: DEFAULT_FUZZY_THRESHOLD,
            default_industry: Industry::General,
            github_api_url: "https://api.github.com".to_string(),
            github_token: None,
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
        }
    }
}

/// The one knob set every analysis reads: target industry and level, fuzzy
/// match threshold, and the weights of both scorers.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisConfig {
    pub industry: Industry,
    pub job_level: JobLevel,
    pub fuzzy_threshold: f64,
    pub weights: ScoringWeights,
    pub quality_weights: QualityWeights,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            industry: Industry::General,
            job_level: JobLevel::Mid,
            fuzzy_threshold: DEFAULT_FUZZY_THRESHOLD,
            weights: ScoringWeights::default(),
            quality_weights: QualityWeights::default(),
        }
    }
}

impl AnalysisConfig {
    /// Copy with per-request overrides applied.
    pub fn with_overrides(
        &self,
        industry: Option<Industry>,
        job_level: Option<JobLevel>,
        fuzzy_threshold: Option<f64>,
    ) -> Self {
        Self {
            industry: industry.unwrap_or(self.industry),
            job_level: job_level.unwrap_or(self.job_level),
            fuzzy_threshold: fuzzy_threshold.unwrap_or(self.fuzzy_threshold),
            ..self.clone()
        }
    }
}

/// Thresholds must lie in (0, 1].
pub fn validate_threshold(threshold: f64) -> Result<()> {
    if !(threshold > 0.0 && threshold <= 1.0) {
        bail!("threshold {threshold} must be greater than 0 and at most 1");
    }
    Ok(())
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
