//! Runtime classifier representation.
//!
//! A [`Classifier`] is the vocabulary it was trained on plus a strict binary
//! tree of [`ClassifierNode`]s. Branches test `frequency(keyword) > threshold`;
//! leaves carry a class label. The value is built once per training run and
//! handed to whatever persists or evaluates it.

pub mod center;
pub mod convert;

pub use center::{CenteringReport, center_thresholds, center_tree};
pub use convert::convert_tree;

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::frequency::Vocabulary;

/// Label of a leaf that induction left without a class.
pub const UNKNOWN_LABEL: &str = "Unknown";

/// Node of a trained classifier tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClassifierNode {
    Leaf(String),
    Branch {
        keyword: String,
        threshold: f64,
        true_branch: Box<ClassifierNode>,
        false_branch: Box<ClassifierNode>,
    },
}

impl ClassifierNode {
    pub fn leaf<S: Into<String>>(label: S) -> Self {
        ClassifierNode::Leaf(label.into())
    }

    pub fn branch<S: Into<String>>(
        keyword: S,
        threshold: f64,
        true_branch: ClassifierNode,
        false_branch: ClassifierNode,
    ) -> Self {
        ClassifierNode::Branch {
            keyword: keyword.into(),
            threshold,
            true_branch: Box::new(true_branch),
            false_branch: Box::new(false_branch),
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, ClassifierNode::Leaf(_))
    }

    pub fn branch_count(&self) -> usize {
        match self {
            ClassifierNode::Leaf(_) => 0,
            ClassifierNode::Branch {
                true_branch,
                false_branch,
                ..
            } => 1 + true_branch.branch_count() + false_branch.branch_count(),
        }
    }

    pub fn leaf_count(&self) -> usize {
        match self {
            ClassifierNode::Leaf(_) => 1,
            ClassifierNode::Branch {
                true_branch,
                false_branch,
                ..
            } => true_branch.leaf_count() + false_branch.leaf_count(),
        }
    }

    /// Number of branches on the longest root-to-leaf path.
    pub fn depth(&self) -> usize {
        match self {
            ClassifierNode::Leaf(_) => 0,
            ClassifierNode::Branch {
                true_branch,
                false_branch,
                ..
            } => 1 + true_branch.depth().max(false_branch.depth()),
        }
    }

    fn collect_labels<'a>(&'a self, labels: &mut BTreeSet<&'a str>) {
        match self {
            ClassifierNode::Leaf(label) => {
                labels.insert(label.as_str());
            }
            ClassifierNode::Branch {
                true_branch,
                false_branch,
                ..
            } => {
                true_branch.collect_labels(labels);
                false_branch.collect_labels(labels);
            }
        }
    }
}

/// Trained keyword decision-tree classifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Classifier {
    /// Words the frequency vectors are normalized over.
    pub keywords: Vocabulary,
    pub root: ClassifierNode,
}

impl Classifier {
    pub fn new(keywords: Vocabulary, root: ClassifierNode) -> Self {
        Self { keywords, root }
    }

    pub fn branch_count(&self) -> usize {
        self.root.branch_count()
    }

    pub fn leaf_count(&self) -> usize {
        self.root.leaf_count()
    }

    pub fn depth(&self) -> usize {
        self.root.depth()
    }

    /// Distinct labels found at the leaves.
    pub fn leaf_labels(&self) -> BTreeSet<&str> {
        let mut labels = BTreeSet::new();
        self.root.collect_labels(&mut labels);
        labels
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_tree() -> ClassifierNode {
        ClassifierNode::branch(
            "func",
            0.25,
            ClassifierNode::leaf("go"),
            ClassifierNode::branch(
                "class",
                0.1,
                ClassifierNode::leaf("java"),
                ClassifierNode::leaf(UNKNOWN_LABEL),
            ),
        )
    }

    #[test]
    fn test_structure_helpers() {
        let classifier = Classifier::new(Vocabulary::from_words(["class", "func"]), sample_tree());

        assert_eq!(classifier.branch_count(), 2);
        assert_eq!(classifier.leaf_count(), 3);
        assert_eq!(classifier.depth(), 2);
        assert_eq!(
            classifier.leaf_labels().into_iter().collect::<Vec<_>>(),
            vec!["Unknown", "go", "java"]
        );
    }

    #[test]
    fn test_serde_round_trip() {
        let classifier = Classifier::new(Vocabulary::from_words(["class", "func"]), sample_tree());

        let json = serde_json::to_string(&classifier).unwrap();
        let restored: Classifier = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, classifier);
    }
}
