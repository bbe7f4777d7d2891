//! Margin centering of branch thresholds.
//!
//! Bisection places each threshold halfway between two values that were
//! neighbours across the *whole* corpus. Once a branch only sees the subset
//! of samples that reach it, the actual gap between its two sides is usually
//! much wider. Centering walks the tree top-down with the full training set,
//! moves each threshold to the middle of the gap between the largest value
//! on its false side and the smallest value on its true side, and passes the
//! repartitioned samples on to the children.
//!
//! When a branch sees no samples on one side, that side falls back to the
//! current threshold, so the threshold only moves halfway towards the
//! populated side. Such branches are counted in
//! [`CenteringReport::one_sided`]; running centering again on them moves the
//! threshold again.

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::classifier::{Classifier, ClassifierNode};
use crate::frequency::{Frequencies, WordCounts, normalize};

/// Summary of a centering pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CenteringReport {
    /// Branch nodes visited.
    pub branches: usize,
    /// Branches whose threshold changed.
    pub moved: usize,
    /// Branches with samples on only one side.
    pub one_sided: usize,
    /// Branches that no sample reached.
    pub unreached: usize,
}

/// Re-center every threshold of `classifier` against raw training samples.
///
/// Samples are normalized over the classifier's own keywords first. This
/// must be given the complete training set; centering is not incremental.
pub fn center_thresholds<'a, I>(classifier: &mut Classifier, samples: I) -> CenteringReport
where
    I: IntoIterator<Item = &'a WordCounts>,
{
    let vectors: Vec<Frequencies> = samples
        .into_iter()
        .map(|sample| normalize(sample, &classifier.keywords))
        .collect();
    center_tree(&mut classifier.root, &vectors)
}

/// Re-center every threshold under `root` against normalized vectors.
pub fn center_tree(root: &mut ClassifierNode, vectors: &[Frequencies]) -> CenteringReport {
    let reaching: Vec<&Frequencies> = vectors.iter().collect();
    let mut report = CenteringReport::default();
    center_node(root, &reaching, &mut report);
    report
}

fn center_node(node: &mut ClassifierNode, vectors: &[&Frequencies], report: &mut CenteringReport) {
    let ClassifierNode::Branch {
        keyword,
        threshold,
        true_branch,
        false_branch,
    } = node
    else {
        return;
    };
    report.branches += 1;
    let keyword = keyword.as_str();

    let (lower, upper) = margin(vectors, keyword, *threshold);
    let lower_side = lower.unwrap_or(*threshold);
    let upper_side = upper.unwrap_or(*threshold);

    let mut centered = (lower_side + upper_side) / 2.0;
    if upper.is_some() && centered >= upper_side {
        // Adjacent floats: rounding landed on the true side's value.
        centered = lower_side;
    }

    match (lower, upper) {
        (None, None) => report.unreached += 1,
        (None, Some(_)) | (Some(_), None) => {
            report.one_sided += 1;
            warn!(
                "{keyword} > {threshold}: samples on one side only, holding the other side at the threshold"
            );
        }
        _ => {}
    }
    if centered != *threshold {
        debug!("{keyword}: threshold {threshold} -> {centered}");
        report.moved += 1;
        *threshold = centered;
    }

    let (when_true, when_false): (Vec<&Frequencies>, Vec<&Frequencies>) = vectors
        .iter()
        .copied()
        .partition(|v| v.get(keyword) > centered);

    center_node(true_branch, &when_true, report);
    center_node(false_branch, &when_false, report);
}

/// Largest value `<= threshold` and smallest value `> threshold` of `keyword`.
fn margin(vectors: &[&Frequencies], keyword: &str, threshold: f64) -> (Option<f64>, Option<f64>) {
    let mut lower: Option<f64> = None;
    let mut upper: Option<f64> = None;
    for vector in vectors {
        let value = vector.get(keyword);
        if value <= threshold {
            lower = Some(lower.map_or(value, |l| l.max(value)));
        } else {
            upper = Some(upper.map_or(value, |u| u.min(value)));
        }
    }
    (lower, upper)
}
