//! Decision tree induction over boolean fields.
//!
//! Induction only sees entry labels, boolean field values and field labels.
//! It knows nothing about words or thresholds; the [`TreeInducer`] trait is
//! the seam where the splitting heuristic can be swapped without touching
//! the rest of the pipeline.

pub mod id3;
pub mod impurity;

pub use id3::Id3Inducer;
pub use impurity::Impurity;

use std::fmt;

use crate::dataset::DataSet;
use crate::error::Result;

/// Tree produced by induction.
#[derive(Debug, Clone, PartialEq)]
pub enum InducedNode {
    /// Class held by the leaf, `None` when no entry reached it.
    Leaf(Option<String>),
    /// Split on a field, identified by its label.
    Branch {
        field: String,
        when_true: Box<InducedNode>,
        when_false: Box<InducedNode>,
    },
}

impl InducedNode {
    pub fn leaf<S: Into<String>>(class: S) -> Self {
        InducedNode::Leaf(Some(class.into()))
    }

    pub fn empty_leaf() -> Self {
        InducedNode::Leaf(None)
    }

    pub fn branch<S: Into<String>>(field: S, when_true: InducedNode, when_false: InducedNode) -> Self {
        InducedNode::Branch {
            field: field.into(),
            when_true: Box::new(when_true),
            when_false: Box::new(when_false),
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, InducedNode::Leaf(_))
    }

    /// Number of branch nodes in the tree.
    pub fn branch_count(&self) -> usize {
        match self {
            InducedNode::Leaf(_) => 0,
            InducedNode::Branch {
                when_true,
                when_false,
                ..
            } => 1 + when_true.branch_count() + when_false.branch_count(),
        }
    }

    /// Number of leaves that no entry reached.
    pub fn empty_leaf_count(&self) -> usize {
        match self {
            InducedNode::Leaf(class) => usize::from(class.is_none()),
            InducedNode::Branch {
                when_true,
                when_false,
                ..
            } => when_true.empty_leaf_count() + when_false.empty_leaf_count(),
        }
    }

    fn fmt_indented(&self, f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
        match self {
            InducedNode::Leaf(Some(class)) => writeln!(f, "{class}"),
            InducedNode::Leaf(None) => writeln!(f, "<none>"),
            InducedNode::Branch {
                field,
                when_true,
                when_false,
            } => {
                writeln!(f, "{field}?")?;
                let pad = "  ".repeat(depth + 1);
                write!(f, "{pad}true: ")?;
                when_true.fmt_indented(f, depth + 1)?;
                write!(f, "{pad}false: ")?;
                when_false.fmt_indented(f, depth + 1)
            }
        }
    }
}

impl fmt::Display for InducedNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_indented(f, 0)
    }
}

/// Builds a decision tree from a data set.
///
/// Implementations return `Ok(None)` when no tree can be built at all (for
/// example when there are no entries); the caller treats that as fatal.
pub trait TreeInducer: Send + Sync {
    fn induce(&self, dataset: &DataSet) -> Result<Option<InducedNode>>;

    /// Get the name of this inducer for logging.
    fn name(&self) -> &str;
}
