//! Configuration for training runs.

use serde::{Deserialize, Serialize};

use crate::induction::{Id3Inducer, Impurity};

/// Configuration for [`Trainer`](crate::trainer::Trainer).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainerConfig {
    /// Impurity measure used by the default inducer.
    pub impurity: Impurity,

    /// Maximum tree depth. If None, the tree grows until leaves are pure
    /// or no field separates them further.
    pub max_depth: Option<usize>,

    /// Minimum impurity decrease a split must achieve.
    pub min_gain: f64,

    /// Whether to center thresholds after conversion.
    pub center_thresholds: bool,
}

impl Default for TrainerConfig {
    fn default() -> Self {
        Self {
            impurity: Impurity::Entropy,
            max_depth: None,
            min_gain: 0.0,
            center_thresholds: true,
        }
    }
}

impl TrainerConfig {
    /// Set the impurity measure.
    pub fn with_impurity(mut self, impurity: Impurity) -> Self {
        self.impurity = impurity;
        self
    }

    /// Set the maximum tree depth.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = Some(max_depth);
        self
    }

    /// Set the minimum gain for a split.
    pub fn with_min_gain(mut self, min_gain: f64) -> Self {
        self.min_gain = min_gain;
        self
    }

    /// Enable or disable threshold centering.
    pub fn with_centering(mut self, center_thresholds: bool) -> Self {
        self.center_thresholds = center_thresholds;
        self
    }

    /// Default inducer configured from these settings.
    pub fn inducer(&self) -> Id3Inducer {
        Id3Inducer::new()
            .with_impurity(self.impurity)
            .with_max_depth(self.max_depth)
            .with_min_gain(self.min_gain)
    }
}
