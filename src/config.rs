use crate::models::MatchingCriteria;
use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

/// Engine configuration for an embedding application
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub matching: MatchingSettings,
    #[serde(default)]
    pub scoring: ScoringSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MatchingSettings {
    #[serde(default = "default_limit")]
    pub default_limit: usize,
    #[serde(default = "default_max_limit")]
    pub max_limit: usize,
}

impl Default for MatchingSettings {
    fn default() -> Self {
        Self {
            default_limit: default_limit(),
            max_limit: default_max_limit(),
        }
    }
}

fn default_limit() -> usize { 10 }
fn default_max_limit() -> usize { 100 }

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScoringSettings {
    #[serde(default)]
    pub weights: WeightsConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeightsConfig {
    #[serde(default = "default_location_weight")]
    pub location: f64,
    #[serde(default = "default_skills_weight")]
    pub skills: f64,
    #[serde(default = "default_rating_weight")]
    pub rating: f64,
    #[serde(default = "default_availability_weight")]
    pub availability: f64,
    #[serde(default = "default_responsiveness_weight")]
    pub responsiveness: f64,
    #[serde(default = "default_verification_weight")]
    pub verification: f64,
    #[serde(default = "default_completion_weight")]
    pub completion: f64,
}

impl Default for WeightsConfig {
    fn default() -> Self {
        Self {
            location: default_location_weight(),
            skills: default_skills_weight(),
            rating: default_rating_weight(),
            availability: default_availability_weight(),
            responsiveness: default_responsiveness_weight(),
            verification: default_verification_weight(),
            completion: default_completion_weight(),
        }
    }
}

impl WeightsConfig {
    /// Materialize the criteria value handed to the engine
    pub fn to_criteria(&self) -> MatchingCriteria {
        MatchingCriteria {
            location: self.location,
            skills: self.skills,
            rating: self.rating,
            availability: self.availability,
            responsiveness: self.responsiveness,
            verification: self.verification,
            completion: self.completion,
        }
    }
}

fn default_location_weight() -> f64 { 0.25 }
fn default_skills_weight() -> f64 { 0.20 }
fn default_rating_weight() -> f64 { 0.15 }
fn default_availability_weight() -> f64 { 0.15 }
fn default_responsiveness_weight() -> f64 { 0.10 }
fn default_verification_weight() -> f64 { 0.10 }
fn default_completion_weight() -> f64 { 0.05 }

impl Settings {
    /// Load configuration from files and environment variables
    ///
    /// Sources, later overrides earlier:
    /// 1. Defaults baked into the structs
    /// 2. config/default.toml
    /// 3. config/local.toml (development overrides)
    /// 4. Environment variables prefixed with KHIDMA
    ///    e.g., KHIDMA__SCORING__WEIGHTS__LOCATION -> scoring.weights.location
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            .add_source(
                Environment::with_prefix("KHIDMA")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("KHIDMA")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }

    /// The effective matching criteria from this configuration
    pub fn criteria(&self) -> MatchingCriteria {
        self.scoring.weights.to_criteria()
    }
}
