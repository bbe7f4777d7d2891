//! Greedy top-down induction over boolean fields (ID3).

use std::collections::BTreeMap;

use crate::dataset::DataSet;
use crate::error::Result;
use crate::induction::{Impurity, InducedNode, TreeInducer};

/// Gains at or below this are treated as rounding noise.
const GAIN_EPSILON: f64 = 1e-12;

/// Default tree inducer.
///
/// At every node the field with the largest impurity decrease is chosen,
/// entries are partitioned by that field's outcome and both halves are
/// induced recursively. A node becomes a leaf when its entries agree on a
/// class, when no field improves on it, or when `max_depth` is reached.
#[derive(Debug, Clone)]
pub struct Id3Inducer {
    impurity: Impurity,
    max_depth: Option<usize>,
    min_gain: f64,
}

impl Default for Id3Inducer {
    fn default() -> Self {
        Self::new()
    }
}

impl Id3Inducer {
    /// Create an information-gain inducer without depth limit.
    pub fn new() -> Self {
        Self {
            impurity: Impurity::Entropy,
            max_depth: None,
            min_gain: 0.0,
        }
    }

    pub fn with_impurity(mut self, impurity: Impurity) -> Self {
        self.impurity = impurity;
        self
    }

    pub fn with_max_depth(mut self, max_depth: Option<usize>) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_min_gain(mut self, min_gain: f64) -> Self {
        self.min_gain = min_gain;
        self
    }

    fn build(&self, dataset: &DataSet, indices: &[usize], depth: usize) -> InducedNode {
        if indices.is_empty() {
            return InducedNode::empty_leaf();
        }

        let counts = class_counts(dataset, indices);
        if counts.len() == 1 || self.max_depth.is_some_and(|max| depth >= max) {
            return InducedNode::leaf(majority(&counts));
        }

        let Some(field) = self.best_field(dataset, indices, &counts) else {
            return InducedNode::leaf(majority(&counts));
        };

        let (true_indices, false_indices): (Vec<usize>, Vec<usize>) = indices
            .iter()
            .copied()
            .partition(|&i| dataset.entries()[i].field_values()[field]);

        InducedNode::branch(
            dataset.fields()[field].label(),
            self.build(dataset, &true_indices, depth + 1),
            self.build(dataset, &false_indices, depth + 1),
        )
    }

    /// Field with the largest impurity decrease, lowest index on ties.
    fn best_field(
        &self,
        dataset: &DataSet,
        indices: &[usize],
        counts: &BTreeMap<&str, usize>,
    ) -> Option<usize> {
        let total = indices.len();
        let parent = self.impurity.measure(counts.values().copied(), total);

        let mut best: Option<(usize, f64)> = None;
        for field in 0..dataset.fields().len() {
            let mut true_counts: BTreeMap<&str, usize> = BTreeMap::new();
            let mut false_counts: BTreeMap<&str, usize> = BTreeMap::new();
            let mut n_true = 0;
            for &i in indices {
                let entry = &dataset.entries()[i];
                if entry.field_values()[field] {
                    *true_counts.entry(entry.label()).or_insert(0) += 1;
                    n_true += 1;
                } else {
                    *false_counts.entry(entry.label()).or_insert(0) += 1;
                }
            }
            let n_false = total - n_true;
            if n_true == 0 || n_false == 0 {
                continue;
            }

            let weighted = (n_true as f64 / total as f64)
                * self.impurity.measure(true_counts.into_values(), n_true)
                + (n_false as f64 / total as f64)
                    * self.impurity.measure(false_counts.into_values(), n_false);
            let gain = parent - weighted;
            if gain - self.min_gain <= GAIN_EPSILON {
                continue;
            }
            if best.is_none_or(|(_, best_gain)| gain > best_gain) {
                best = Some((field, gain));
            }
        }
        best.map(|(field, _)| field)
    }
}

impl TreeInducer for Id3Inducer {
    fn induce(&self, dataset: &DataSet) -> Result<Option<InducedNode>> {
        if dataset.is_empty() {
            return Ok(None);
        }
        dataset.check_alignment()?;

        let indices: Vec<usize> = (0..dataset.len()).collect();
        Ok(Some(self.build(dataset, &indices, 0)))
    }

    fn name(&self) -> &str {
        match self.impurity {
            Impurity::Entropy => "id3-entropy",
            Impurity::Gini => "id3-gini",
        }
    }
}

fn class_counts<'a>(dataset: &'a DataSet, indices: &[usize]) -> BTreeMap<&'a str, usize> {
    let mut counts = BTreeMap::new();
    for &i in indices {
        *counts.entry(dataset.entries()[i].label()).or_insert(0) += 1;
    }
    counts
}

/// Most frequent class; the lexicographically smallest one wins ties.
fn majority(counts: &BTreeMap<&str, usize>) -> String {
    let mut best: Option<(&str, usize)> = None;
    for (&label, &count) in counts {
        if best.is_none_or(|(_, best_count)| count > best_count) {
            best = Some((label, count));
        }
    }
    best.map(|(label, _)| label.to_string()).unwrap_or_default()
}
