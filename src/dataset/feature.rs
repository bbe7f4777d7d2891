//! Threshold features of the form `<word> > <threshold>`.

use crate::error::{LangTreeError, Result};
use crate::frequency::Frequencies;

/// Boolean predicate "frequency of `word` is greater than `threshold`".
///
/// The feature is identified by its label, which is the only thing the
/// generic induction machinery sees. [`Feature::parse_label`] recovers the
/// exact `(word, threshold)` pair from a label.
#[derive(Debug, Clone, PartialEq)]
pub struct Feature {
    word: String,
    threshold: f64,
}

impl Feature {
    /// Create a feature, rejecting words that cannot round-trip through a label.
    pub fn new<S: Into<String>>(word: S, threshold: f64) -> Result<Self> {
        let word = word.into();
        validate_word(&word)?;
        if !threshold.is_finite() {
            return Err(LangTreeError::invalid_frequency(word, threshold));
        }
        Ok(Self { word, threshold })
    }

    pub fn word(&self) -> &str {
        &self.word
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Canonical label, e.g. `func > 0.25`.
    ///
    /// `f64`'s `Display` is the shortest representation that parses back to
    /// the same value, so the label loses nothing.
    pub fn label(&self) -> String {
        format!("{} > {}", self.word, self.threshold)
    }

    /// Evaluate the predicate on a frequency vector.
    pub fn evaluate(&self, frequencies: &Frequencies) -> bool {
        frequencies.get(&self.word) > self.threshold
    }

    /// Parse a canonical label back into `(word, threshold)`.
    ///
    /// Exactly three space-separated tokens are accepted: a non-empty word,
    /// the `>` operator and a finite number.
    pub fn parse_label(label: &str) -> Result<(String, f64)> {
        let tokens: Vec<&str> = label.split(' ').collect();
        let [word, op, threshold] = tokens.as_slice() else {
            return Err(LangTreeError::malformed_label(label));
        };
        if word.is_empty() || *op != ">" {
            return Err(LangTreeError::malformed_label(label));
        }
        let threshold: f64 = threshold
            .parse()
            .map_err(|_| LangTreeError::malformed_label(label))?;
        if !threshold.is_finite() {
            return Err(LangTreeError::malformed_label(label));
        }
        Ok((word.to_string(), threshold))
    }
}

/// Check that a vocabulary word can be used as the first token of a label.
pub fn validate_word(word: &str) -> Result<()> {
    if word.is_empty() {
        return Err(LangTreeError::invalid_word(word, "word is empty"));
    }
    if word.chars().any(char::is_whitespace) {
        return Err(LangTreeError::invalid_word(word, "word contains whitespace"));
    }
    Ok(())
}
