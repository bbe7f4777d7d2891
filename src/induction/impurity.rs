//! Node impurity measures used to score candidate splits.

use serde::{Deserialize, Serialize};

/// Impurity of a class distribution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Impurity {
    /// Shannon entropy in bits; splits maximize information gain.
    #[default]
    Entropy,
    /// Gini impurity.
    Gini,
}

impl Impurity {
    /// Impurity of a distribution given its per-class counts.
    pub fn measure<I>(self, counts: I, total: usize) -> f64
    where
        I: IntoIterator<Item = usize>,
    {
        if total == 0 {
            return 0.0;
        }
        let total = total as f64;
        match self {
            Impurity::Entropy => counts
                .into_iter()
                .filter(|&c| c > 0)
                .map(|c| {
                    let p = c as f64 / total;
                    -p * p.log2()
                })
                .sum(),
            Impurity::Gini => {
                1.0 - counts
                    .into_iter()
                    .map(|c| {
                        let p = c as f64 / total;
                        p * p
                    })
                    .sum::<f64>()
            }
        }
    }
}
