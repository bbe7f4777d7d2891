//! Bisecting feature synthesis.
//!
//! Every word's frequency is continuous, while induction works on boolean
//! fields. For each word we take the distinct values it takes across all
//! entries and place one threshold between every pair of neighbours: the
//! fewest thresholds that still put any two distinct values on opposite
//! sides of at least one feature.

use log::debug;

use crate::dataset::{DataSet, Feature};
use crate::error::{LangTreeError, Result};
use crate::frequency::Vocabulary;

/// Thresholds separating every pair of distinct values.
///
/// Values must be finite. The result is ascending and has one element fewer
/// than the number of distinct values.
pub fn bisecting_thresholds(values: &[f64]) -> Vec<f64> {
    let mut distinct: Vec<f64> = values.to_vec();
    distinct.sort_by(f64::total_cmp);
    // -0.0 and 0.0 compare equal under `>`, so they must not be split apart.
    distinct.dedup_by(|a, b| a == b);

    distinct
        .windows(2)
        .map(|pair| {
            let (low, high) = (pair[0], pair[1]);
            let mid = low + (high - low) / 2.0;
            if mid < high { mid } else { low }
        })
        .collect()
}

/// Generate the bisecting features for one word and append their outcomes to
/// every entry. Returns the number of features added.
pub fn synthesize_word_features(dataset: &mut DataSet, word: &str) -> Result<usize> {
    let mut values = Vec::with_capacity(dataset.len());
    for frequencies in dataset.frequencies() {
        let value = frequencies.get(word);
        if !value.is_finite() {
            return Err(LangTreeError::invalid_frequency(word, value));
        }
        values.push(value);
    }

    let thresholds = bisecting_thresholds(&values);
    let added = thresholds.len();
    for threshold in thresholds {
        dataset.add_field(Feature::new(word, threshold)?);
    }
    Ok(added)
}

/// Generate bisecting features for every vocabulary word, in vocabulary order.
pub fn synthesize_features(dataset: &mut DataSet, vocabulary: &Vocabulary) -> Result<usize> {
    let mut total = 0;
    for word in vocabulary.iter() {
        let added = synthesize_word_features(dataset, word)?;
        if added > 0 {
            debug!("{word}: {added} threshold feature(s)");
        }
        total += added;
    }
    Ok(total)
}
