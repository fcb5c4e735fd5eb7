//! Serializable pipeline configuration.
//!
//! This module lets a windowed-aggregation pipeline be described as
//! data, saved alongside an experiment, and rebuilt later:
//!
//! - **Unified configuration**: window geometry, windowing strategy and
//!   aggregate in one struct
//! - **Serialization**: save/load to TOML or JSON for reproducibility
//! - **Validation**: geometry checked before any sequence is processed
//!
//! # Example
//!
//! ```ignore
//! use seqcomb::config::AggregationConfig;
//!
//! let config = AggregationConfig::load_toml("experiment.toml")?;
//! let run = config.build()?;
//! let per_window = run(&samples);
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::reduce::{average, max, sum};
use crate::window::{sequential_windows_with, windows_with, WindowError, WindowSpec};

/// How the sequence is sliced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WindowStrategy {
    /// Strided walk: one output per window, `step` elements apart.
    Chunked,
    /// Per-element windows: one output per input element.
    Sequential,
}

/// How each window is reduced to a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Aggregate {
    Sum,
    Average,
    Max,
}

/// Free-form experiment annotations carried with a saved configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperimentMetadata {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Complete description of a windowed-aggregation pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregationConfig {
    /// Window geometry.
    pub window: WindowSpec,

    /// Slicing strategy.
    pub strategy: WindowStrategy,

    /// Per-window aggregate.
    pub aggregate: Aggregate,

    /// Experiment metadata (optional).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<ExperimentMetadata>,
}

impl Default for AggregationConfig {
    fn default() -> Self {
        Self {
            window: WindowSpec::new(1),
            strategy: WindowStrategy::Sequential,
            aggregate: Aggregate::Average,
            metadata: None,
        }
    }
}

impl AggregationConfig {
    /// Validates window geometry without building anything.
    pub fn validate(&self) -> Result<(), WindowError> {
        self.window.validate()
    }

    /// Materializes the configured combinator for numeric sequences.
    ///
    /// Validation runs first; an invalid geometry fails here, before
    /// any input is touched.
    pub fn build(&self) -> Result<Box<dyn Fn(&[f64]) -> Vec<f64>>, WindowError> {
        self.validate()?;
        let aggregate: fn(&[f64]) -> f64 = match self.aggregate {
            Aggregate::Sum => sum,
            Aggregate::Average => average,
            Aggregate::Max => max,
        };
        match self.strategy {
            WindowStrategy::Chunked => {
                let run = windows_with(self.window, aggregate)?;
                Ok(Box::new(run))
            }
            WindowStrategy::Sequential => {
                if self.window.step != self.window.size {
                    // Sequential windows always advance one element at a time.
                    log::warn!(
                        "sequential strategy ignores window step {} (advances per element)",
                        self.window.step
                    );
                }
                let run = sequential_windows_with(self.window.size, aggregate)?;
                Ok(Box::new(run))
            }
        }
    }

    /// Saves configuration to a TOML file.
    pub fn save_toml<P: AsRef<Path>>(&self, path: P) -> Result<(), Box<dyn std::error::Error>> {
        let toml_string = toml::to_string_pretty(self)?;
        fs::write(path, toml_string)?;
        Ok(())
    }

    /// Loads configuration from a TOML file.
    pub fn load_toml<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn std::error::Error>> {
        let contents = fs::read_to_string(path)?;
        let config: AggregationConfig = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Saves configuration to a JSON file.
    pub fn save_json<P: AsRef<Path>>(&self, path: P) -> Result<(), Box<dyn std::error::Error>> {
        let json_string = serde_json::to_string_pretty(self)?;
        fs::write(path, json_string)?;
        Ok(())
    }

    /// Loads configuration from a JSON file.
    pub fn load_json<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn std::error::Error>> {
        let contents = fs::read_to_string(path)?;
        let config: AggregationConfig = serde_json::from_str(&contents)?;
        Ok(config)
    }
}
