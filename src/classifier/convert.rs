//! Conversion from induced trees to classifier trees.

use log::warn;

use crate::classifier::{ClassifierNode, UNKNOWN_LABEL};
use crate::dataset::Feature;
use crate::error::{LangTreeError, Result};
use crate::induction::InducedNode;

/// Rewrite an induced tree into classifier nodes.
///
/// Branch labels are parsed back into `(keyword, threshold)`. A label that
/// does not parse means feature synthesis and conversion disagree, and the
/// whole conversion fails, as does a leaf whose class is the empty string.
/// Leaves without a class become [`UNKNOWN_LABEL`].
pub fn convert_tree(node: &InducedNode) -> Result<ClassifierNode> {
    match node {
        InducedNode::Leaf(Some(class)) if class.is_empty() => Err(LangTreeError::EmptyLeafClass),
        InducedNode::Leaf(Some(class)) => Ok(ClassifierNode::leaf(class.as_str())),
        InducedNode::Leaf(None) => {
            warn!("induced leaf without a class, labelling it {UNKNOWN_LABEL:?}");
            Ok(ClassifierNode::leaf(UNKNOWN_LABEL))
        }
        InducedNode::Branch {
            field,
            when_true,
            when_false,
        } => {
            let (keyword, threshold) = Feature::parse_label(field)?;
            let false_branch = convert_tree(when_false)?;
            let true_branch = convert_tree(when_true)?;
            Ok(ClassifierNode::branch(
                keyword,
                threshold,
                true_branch,
                false_branch,
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_converts_branches_and_leaves() {
        let induced = InducedNode::branch(
            "func > 0.125",
            InducedNode::leaf("go"),
            InducedNode::branch("class > 0.2", InducedNode::leaf("java"), InducedNode::empty_leaf()),
        );

        let converted = convert_tree(&induced).unwrap();
        assert_eq!(
            converted,
            ClassifierNode::branch(
                "func",
                0.125,
                ClassifierNode::leaf("go"),
                ClassifierNode::branch(
                    "class",
                    0.2,
                    ClassifierNode::leaf("java"),
                    ClassifierNode::leaf("Unknown"),
                ),
            )
        );
    }

    #[test]
    fn test_round_trips_synthesized_labels() {
        let feature = Feature::new("=>", 1.0 / 7.0).unwrap();
        let induced = InducedNode::branch(
            feature.label(),
            InducedNode::leaf("a"),
            InducedNode::leaf("b"),
        );

        match convert_tree(&induced).unwrap() {
            ClassifierNode::Branch {
                keyword, threshold, ..
            } => {
                assert_eq!(keyword, feature.word());
                assert_eq!(threshold.to_bits(), feature.threshold().to_bits());
            }
            other => panic!("Expected a branch, got {other:?}"),
        }
    }

    #[test]
    fn test_malformed_label_is_fatal() {
        let induced = InducedNode::branch(
            "func",
            InducedNode::leaf("a"),
            InducedNode::branch("x >= 1", InducedNode::leaf("b"), InducedNode::leaf("c")),
        );

        let err = convert_tree(&induced).unwrap_err();
        assert!(matches!(err, LangTreeError::MalformedFieldLabel(ref l) if l == "func"));
        assert!(err.is_internal());
    }

    #[test]
    fn test_empty_leaf_class_is_fatal() {
        let induced = InducedNode::branch(
            "func > 0.5",
            InducedNode::leaf("go"),
            InducedNode::leaf(""),
        );

        let err = convert_tree(&induced).unwrap_err();
        assert!(matches!(err, LangTreeError::EmptyLeafClass));
        assert!(err.is_internal());
    }
}
