//! # langtree
//!
//! Trains compact decision-tree classifiers that predict a label, such as a
//! programming language, from the relative frequencies of keywords in a
//! sample.
//!
//! ## Pipeline
//!
//! - [`frequency`]: raw word counts, vocabulary and normalization
//! - [`dataset`]: labeled entries and bisecting threshold features
//! - [`induction`]: pluggable decision tree induction (ID3 by default)
//! - [`classifier`]: classifier tree, conversion and threshold centering
//! - [`trainer`]: the end-to-end training run
//!
//! Extracting word counts from source files, persisting the classifier and
//! walking the tree at prediction time are left to the caller.

pub mod classifier;
pub mod dataset;
pub mod error;
pub mod frequency;
pub mod induction;
pub mod trainer;

pub mod prelude {
    pub use crate::classifier::{Classifier, ClassifierNode, UNKNOWN_LABEL};
    pub use crate::error::{LangTreeError, Result};
    pub use crate::frequency::{Frequencies, Vocabulary, WordCounts, normalize};
    pub use crate::induction::{Id3Inducer, Impurity, InducedNode, TreeInducer};
    pub use crate::trainer::{Corpus, Trainer, TrainerConfig, generate_classifier};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
