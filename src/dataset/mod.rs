//! Labeled entries and synthesized features consumed by tree induction.
//!
//! A [`DataSet`] pairs every training sample with a sequence of boolean
//! field values. The `i`-th value of every entry is the outcome of the
//! `i`-th feature in [`DataSet::fields`]; [`synthesizer`] keeps the two in
//! step while it generates features.

pub mod feature;
pub mod synthesizer;

pub use feature::{Feature, validate_word};
pub use synthesizer::{bisecting_thresholds, synthesize_features, synthesize_word_features};

use crate::error::{LangTreeError, Result};
use crate::frequency::Frequencies;

/// One training sample prepared for induction.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    label: String,
    frequencies: Frequencies,
    field_values: Vec<bool>,
}

impl Entry {
    /// Create an entry with no field values yet.
    pub fn new<S: Into<String>>(label: S, frequencies: Frequencies) -> Self {
        Self {
            label: label.into(),
            frequencies,
            field_values: Vec::new(),
        }
    }

    /// Class label of the sample.
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn frequencies(&self) -> &Frequencies {
        &self.frequencies
    }

    pub fn field_values(&self) -> &[bool] {
        &self.field_values
    }

    /// Append the outcome of the next feature.
    pub fn push_field_value(&mut self, value: bool) {
        self.field_values.push(value);
    }
}

/// Entries plus the features whose outcomes they carry.
#[derive(Debug, Clone, Default)]
pub struct DataSet {
    entries: Vec<Entry>,
    fields: Vec<Feature>,
}

impl DataSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(entries: usize) -> Self {
        Self {
            entries: Vec::with_capacity(entries),
            fields: Vec::new(),
        }
    }

    pub fn push_entry(&mut self, entry: Entry) {
        self.entries.push(entry);
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn fields(&self) -> &[Feature] {
        &self.fields
    }

    /// Register a feature and append its outcome to every entry.
    pub fn add_field(&mut self, feature: Feature) {
        for entry in &mut self.entries {
            let value = feature.evaluate(&entry.frequencies);
            entry.push_field_value(value);
        }
        self.fields.push(feature);
    }

    /// Verify that every entry carries exactly one value per field.
    pub fn check_alignment(&self) -> Result<()> {
        let expected = self.fields.len();
        for (index, entry) in self.entries.iter().enumerate() {
            let actual = entry.field_values.len();
            if actual != expected {
                return Err(LangTreeError::MisalignedEntry {
                    index,
                    expected,
                    actual,
                });
            }
        }
        Ok(())
    }

    /// Frequency vectors of all entries, in entry order.
    pub fn frequencies(&self) -> impl Iterator<Item = &Frequencies> {
        self.entries.iter().map(Entry::frequencies)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
