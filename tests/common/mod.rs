#![allow(dead_code)]

use langtree::classifier::{Classifier, ClassifierNode};
use langtree::frequency::{Frequencies, WordCounts, normalize};
use langtree::trainer::Corpus;

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn sample(pairs: &[(&str, f64)]) -> WordCounts {
    pairs.iter().map(|(w, c)| (*w, *c)).collect()
}

/// Walk the tree the way an inference routine would.
pub fn classify<'a>(classifier: &'a Classifier, counts: &WordCounts) -> &'a str {
    let frequencies = normalize(counts, &classifier.keywords);
    let mut node = &classifier.root;
    loop {
        match node {
            ClassifierNode::Leaf(label) => return label,
            ClassifierNode::Branch {
                keyword,
                threshold,
                true_branch,
                false_branch,
            } => {
                node = if frequencies.get(keyword) > *threshold {
                    true_branch
                } else {
                    false_branch
                };
            }
        }
    }
}

/// Normalized training vectors of a corpus.
pub fn training_vectors(classifier: &Classifier, corpus: &Corpus) -> Vec<Frequencies> {
    corpus
        .values()
        .flatten()
        .map(|sample| normalize(sample, &classifier.keywords))
        .collect()
}

/// Branches whose threshold does not sit strictly inside the gap between the
/// reaching samples' false side and true side.
pub fn margin_violations(node: &ClassifierNode, vectors: &[&Frequencies]) -> Vec<String> {
    let mut violations = Vec::new();
    collect_margin_violations(node, vectors, &mut violations);
    violations
}

fn collect_margin_violations(
    node: &ClassifierNode,
    vectors: &[&Frequencies],
    violations: &mut Vec<String>,
) {
    let ClassifierNode::Branch {
        keyword,
        threshold,
        true_branch,
        false_branch,
    } = node
    else {
        return;
    };

    let (when_true, when_false): (Vec<&Frequencies>, Vec<&Frequencies>) = vectors
        .iter()
        .copied()
        .partition(|v| v.get(keyword) > *threshold);

    if !when_true.is_empty() && !when_false.is_empty() {
        let max_false = when_false
            .iter()
            .map(|v| v.get(keyword))
            .fold(f64::NEG_INFINITY, f64::max);
        let min_true = when_true
            .iter()
            .map(|v| v.get(keyword))
            .fold(f64::INFINITY, f64::min);
        if !(max_false < *threshold && *threshold < min_true) {
            violations.push(format!(
                "{keyword} > {threshold}: false side up to {max_false}, true side from {min_true}"
            ));
        }
    }

    collect_margin_violations(true_branch, &when_true, violations);
    collect_margin_violations(false_branch, &when_false, violations);
}

/// Every `(keyword, threshold)` pair in the tree, depth first.
pub fn branches(node: &ClassifierNode) -> Vec<(String, f64)> {
    let mut out = Vec::new();
    let mut stack = vec![node];
    while let Some(node) = stack.pop() {
        if let ClassifierNode::Branch {
            keyword,
            threshold,
            true_branch,
            false_branch,
        } = node
        {
            out.push((keyword.clone(), *threshold));
            stack.push(false_branch);
            stack.push(true_branch);
        }
    }
    out
}
