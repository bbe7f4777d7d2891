//! Word counts, vocabularies and relative frequency vectors.
//!
//! A training sample arrives as raw [`WordCounts`]. The [`Vocabulary`] is
//! the sorted union of every word seen in any sample, and [`normalize`]
//! turns a sample's counts into [`Frequencies`] over that vocabulary. The
//! same normalization has to be applied when classifying new samples.

use std::collections::BTreeSet;

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

/// Raw per-sample word counts.
///
/// Counts are plain `f64` so that pre-weighted extractors can feed fractional
/// counts. Missing words count as zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WordCounts(AHashMap<String, f64>);

impl WordCounts {
    /// Create an empty count map.
    pub fn new() -> Self {
        Self(AHashMap::new())
    }

    /// Set the count for a word, replacing any previous count.
    pub fn insert<S: Into<String>>(&mut self, word: S, count: f64) {
        self.0.insert(word.into(), count);
    }

    /// Add to the count for a word.
    pub fn add<S: Into<String>>(&mut self, word: S, count: f64) {
        *self.0.entry(word.into()).or_insert(0.0) += count;
    }

    /// Count for a word, zero when the word was never seen.
    pub fn get(&self, word: &str) -> f64 {
        self.0.get(word).copied().unwrap_or(0.0)
    }

    /// Iterate over `(word, count)` pairs in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.0.iter().map(|(word, count)| (word.as_str(), *count))
    }

    /// Words present in this sample, including ones with a zero count.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, f64)> for WordCounts {
    fn from_iter<I: IntoIterator<Item = (S, f64)>>(iter: I) -> Self {
        let mut counts = WordCounts::new();
        for (word, count) in iter {
            counts.add(word, count);
        }
        counts
    }
}

/// Ordered, duplicate-free word list.
///
/// Words are kept in lexicographic byte order so that training twice on the
/// same corpus yields identical classifiers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Vocabulary(Vec<String>);

impl Vocabulary {
    /// Build a vocabulary from arbitrary words, sorting and deduplicating them.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let set: BTreeSet<String> = words.into_iter().map(Into::into).collect();
        Self(set.into_iter().collect())
    }

    /// Union of the words of every sample.
    pub fn from_samples<'a, I>(samples: I) -> Self
    where
        I: IntoIterator<Item = &'a WordCounts>,
    {
        let mut set = BTreeSet::new();
        for sample in samples {
            for word in sample.words() {
                if !set.contains(word) {
                    set.insert(word.to_string());
                }
            }
        }
        Self(set.into_iter().collect())
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn contains(&self, word: &str) -> bool {
        self.0
            .binary_search_by(|probe| probe.as_str().cmp(word))
            .is_ok()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Relative frequency of every vocabulary word in one sample.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Frequencies(AHashMap<String, f64>);

impl Frequencies {
    /// Frequency of a word, zero for words outside the vector.
    pub fn get(&self, word: &str) -> f64 {
        self.0.get(word).copied().unwrap_or(0.0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.0.iter().map(|(word, value)| (word.as_str(), *value))
    }

    /// Sum of all frequencies; 1.0 for any sample with a positive total count.
    pub fn sum(&self) -> f64 {
        self.0.values().sum()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, f64)> for Frequencies {
    fn from_iter<I: IntoIterator<Item = (S, f64)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(word, value)| (word.into(), value))
                .collect(),
        )
    }
}

/// Convert raw counts into relative frequencies over `vocabulary`.
///
/// Every vocabulary word gets an entry. Counts for words outside the
/// vocabulary are ignored. A sample whose vocabulary words total zero is
/// divided by one, which yields an all-zero vector.
///
/// Counts must be finite and non-negative. When finite counts overflow on
/// summation, they are first scaled down by the largest count.
pub fn normalize(counts: &WordCounts, vocabulary: &Vocabulary) -> Frequencies {
    let mut total: f64 = vocabulary.iter().map(|word| counts.get(word)).sum();
    let mut prescale = 1.0;
    if total.is_infinite() {
        let largest = vocabulary
            .iter()
            .map(|word| counts.get(word))
            .fold(0.0, f64::max);
        prescale = 1.0 / largest;
        total = vocabulary
            .iter()
            .map(|word| counts.get(word) * prescale)
            .sum();
    }
    if total == 0.0 {
        total = 1.0;
    }

    vocabulary
        .iter()
        .map(|word| (word, counts.get(word) * prescale / total))
        .collect()
}
