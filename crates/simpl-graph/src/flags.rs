use serde::{Deserialize, Serialize};
use simpl_core::SimplError;

/// Options selecting the shape of a [`simplicial_pairs`](crate::simplicial_pairs) result.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PairFlags {
    /// Return a size-stratified matrix instead of a scalar.
    #[serde(default)]
    pub as_matrix: bool,
    /// Split counts by which edge of a containing pair arrived first.
    #[serde(default)]
    pub edge_order: bool,
}

/// Controls how the null-model sampler builds each edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NullModelConfig {
    /// Allow repeated vertices within a sampled edge.
    #[serde(default = "default_multisets")]
    pub multisets: bool,
    /// Upper bound on pool draws spent on a single distinct-vertex edge.
    #[serde(default = "default_max_draw_attempts")]
    pub max_draw_attempts: usize,
}

impl Default for NullModelConfig {
    fn default() -> Self {
        Self {
            multisets: default_multisets(),
            max_draw_attempts: default_max_draw_attempts(),
        }
    }
}

/// Parameters of a simpliciality measurement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeasureConfig {
    /// Number of independent null-model draws averaged into the expectation.
    #[serde(default = "default_samples")]
    pub samples: usize,
    /// Split the observed counts by edge arrival order.
    #[serde(default)]
    pub edge_order: bool,
    /// Allow repeated vertices within sampled edges.
    #[serde(default = "default_multisets")]
    pub multisets: bool,
    /// Upper bound on pool draws spent on a single distinct-vertex edge.
    #[serde(default = "default_max_draw_attempts")]
    pub max_draw_attempts: usize,
}

fn default_samples() -> usize {
    1
}

fn default_multisets() -> bool {
    true
}

fn default_max_draw_attempts() -> usize {
    10_000
}

impl Default for MeasureConfig {
    fn default() -> Self {
        Self {
            samples: default_samples(),
            edge_order: false,
            multisets: default_multisets(),
            max_draw_attempts: default_max_draw_attempts(),
        }
    }
}

impl MeasureConfig {
    /// Decodes and validates a configuration from JSON.
    pub fn from_json_str(raw: &str) -> Result<Self, SimplError> {
        let config: MeasureConfig = serde_json::from_str(raw).map_err(|err| {
            SimplError::config("invalid-config", "failed to decode measure configuration")
                .with_context("reason", err)
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects configurations that would divide by zero or never draw.
    pub fn validate(&self) -> Result<(), SimplError> {
        if self.samples == 0 {
            return Err(
                SimplError::input("invalid-samples", "at least one null-model sample is required")
                    .with_context("samples", self.samples),
            );
        }
        if self.max_draw_attempts == 0 {
            return Err(SimplError::config(
                "invalid-config",
                "max_draw_attempts must be positive",
            ));
        }
        Ok(())
    }

    /// Sampler settings implied by this measurement.
    pub fn null_model(&self) -> NullModelConfig {
        NullModelConfig {
            multisets: self.multisets,
            max_draw_attempts: self.max_draw_attempts,
        }
    }
}
