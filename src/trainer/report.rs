//! Statistics collected during a training run.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::classifier::CenteringReport;

/// Wall-clock time spent in each pipeline stage.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct StageTimings {
    pub entries: Duration,
    pub fields: Duration,
    pub induction: Duration,
    pub conversion: Duration,
    pub centering: Duration,
}

impl StageTimings {
    pub fn total(&self) -> Duration {
        self.entries + self.fields + self.induction + self.conversion + self.centering
    }
}

/// Summary of a training run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrainingReport {
    /// Number of training samples.
    pub samples: usize,
    /// Number of distinct class labels.
    pub classes: usize,
    /// Number of vocabulary words.
    pub vocabulary_size: usize,
    /// Number of synthesized threshold features.
    pub features: usize,
    /// Branch nodes in the final tree.
    pub branches: usize,
    /// Leaves in the final tree.
    pub leaves: usize,
    /// Leaves labelled as unknown.
    pub unknown_leaves: usize,
    /// Centering summary, absent when centering was disabled.
    pub centering: Option<CenteringReport>,
    pub timings: StageTimings,
}
