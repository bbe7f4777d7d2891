//! Error types for the langtree library.
//!
//! All fallible operations return [`Result`], whose error side is the
//! [`LangTreeError`] enum. Errors fall in two groups: problems with the
//! training corpus (empty corpus, unusable words or counts) and internal
//! contract violations between pipeline stages (misaligned entries, feature
//! labels that no longer parse). Both are fatal for a training run.
//!
//! # Examples
//!
//! ```
//! use langtree::error::{LangTreeError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(LangTreeError::induction_failed("no entries"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use thiserror::Error;

/// The main error type for langtree operations.
#[derive(Error, Debug)]
pub enum LangTreeError {
    /// The corpus contained no samples at all.
    #[error("Corpus is empty: at least one sample is required")]
    EmptyCorpus,

    /// A class label in the corpus is empty.
    #[error("Class labels must not be empty")]
    EmptyClassLabel,

    /// A class label collides with the label given to leaves without a class.
    #[error("Class label {0:?} is reserved")]
    ReservedClassLabel(String),

    /// A vocabulary word cannot be encoded in a feature label.
    #[error("Invalid word {word:?}: {reason}")]
    InvalidWord { word: String, reason: String },

    /// A raw count or frequency is not a finite, non-negative number.
    #[error("Invalid frequency for {word:?}: {value}")]
    InvalidFrequency { word: String, value: f64 },

    /// Tree induction produced no tree.
    #[error("Tree induction failed: {0}")]
    InductionFailed(String),

    /// An entry's field values are out of step with the field list.
    #[error("Entry {index} has {actual} field values, expected {expected}")]
    MisalignedEntry {
        index: usize,
        expected: usize,
        actual: usize,
    },

    /// A branch field label does not follow the `<word> > <threshold>` convention.
    #[error("Malformed field label: {0:?}")]
    MalformedFieldLabel(String),

    /// An induced leaf carries a class that is present but empty.
    #[error("Induced leaf carries an empty class")]
    EmptyLeafClass,

    /// Errors surfaced by custom tree inducers
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with LangTreeError.
pub type Result<T> = std::result::Result<T, LangTreeError>;

impl LangTreeError {
    /// Create a new invalid word error.
    pub fn invalid_word<W: Into<String>, R: Into<String>>(word: W, reason: R) -> Self {
        LangTreeError::InvalidWord {
            word: word.into(),
            reason: reason.into(),
        }
    }

    /// Create a new invalid frequency error.
    pub fn invalid_frequency<W: Into<String>>(word: W, value: f64) -> Self {
        LangTreeError::InvalidFrequency {
            word: word.into(),
            value,
        }
    }

    /// Create a new induction failure.
    pub fn induction_failed<S: Into<String>>(msg: S) -> Self {
        LangTreeError::InductionFailed(msg.into())
    }

    /// Create a new malformed label error.
    pub fn malformed_label<S: Into<String>>(label: S) -> Self {
        LangTreeError::MalformedFieldLabel(label.into())
    }

    /// Whether this error signals that two pipeline stages disagree with each other
    /// rather than a problem with the supplied corpus.
    pub fn is_internal(&self) -> bool {
        match self {
            LangTreeError::MisalignedEntry { .. }
            | LangTreeError::MalformedFieldLabel(_)
            | LangTreeError::EmptyLeafClass => true,
            _ => false,
        }
    }
}
