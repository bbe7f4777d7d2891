//! Training pipeline.
//!
//! [`Trainer::train`] runs the stages in order:
//!
//! 1. normalize every sample over the corpus vocabulary,
//! 2. synthesize bisecting threshold features,
//! 3. induce a decision tree through a [`TreeInducer`],
//! 4. convert the induced tree into classifier nodes,
//! 5. center every threshold against the full training set.
//!
//! A run either yields one [`Classifier`] or fails as a whole.
//!
//! # Example
//!
//! ```
//! use langtree::frequency::WordCounts;
//! use langtree::trainer::{Corpus, generate_classifier};
//!
//! # fn main() -> langtree::error::Result<()> {
//! let mut corpus = Corpus::new();
//! corpus.insert(
//!     "go".to_string(),
//!     vec![[("func", 2.0), ("if", 2.0)].into_iter().collect::<WordCounts>()],
//! );
//! corpus.insert(
//!     "java".to_string(),
//!     vec![[("class", 2.0), ("if", 2.0)].into_iter().collect::<WordCounts>()],
//! );
//!
//! let classifier = generate_classifier(&corpus)?;
//! assert_eq!(classifier.branch_count(), 1);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod report;

pub use config::TrainerConfig;
pub use report::{StageTimings, TrainingReport};

use std::collections::BTreeMap;
use std::time::Instant;

use log::{debug, info};

use crate::classifier::{Classifier, UNKNOWN_LABEL, center_tree, convert_tree};
use crate::dataset::{DataSet, Entry, synthesize_features, validate_word};
use crate::error::{LangTreeError, Result};
use crate::frequency::{Frequencies, Vocabulary, WordCounts, normalize};
use crate::induction::TreeInducer;

/// Training samples grouped by class label.
pub type Corpus = BTreeMap<String, Vec<WordCounts>>;

/// Classifier together with the statistics of the run that produced it.
#[derive(Debug, Clone)]
pub struct TrainedClassifier {
    pub classifier: Classifier,
    pub report: TrainingReport,
}

/// Runs the training pipeline with a configurable inducer.
pub struct Trainer {
    config: TrainerConfig,
    inducer: Box<dyn TreeInducer>,
}

impl std::fmt::Debug for Trainer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Trainer")
            .field("config", &self.config)
            .field("inducer", &self.inducer.name())
            .finish()
    }
}

impl Default for Trainer {
    fn default() -> Self {
        Self::new(TrainerConfig::default())
    }
}

impl Trainer {
    /// Create a trainer using the default inducer configured from `config`.
    pub fn new(config: TrainerConfig) -> Self {
        let inducer = Box::new(config.inducer());
        Self { config, inducer }
    }

    /// Create a trainer that delegates induction to a custom inducer.
    pub fn with_inducer(config: TrainerConfig, inducer: Box<dyn TreeInducer>) -> Self {
        Self { config, inducer }
    }

    pub fn config(&self) -> &TrainerConfig {
        &self.config
    }

    /// Train a classifier on `corpus`.
    pub fn train(&self, corpus: &Corpus) -> Result<TrainedClassifier> {
        validate_corpus(corpus)?;
        let mut timings = StageTimings::default();

        let vocabulary = Vocabulary::from_samples(corpus.values().flatten());
        for word in vocabulary.iter() {
            validate_word(word)?;
        }

        info!("Generating entries...");
        let started = Instant::now();
        let mut dataset = build_dataset(corpus, &vocabulary);
        timings.entries = started.elapsed();

        info!("Generating fields...");
        let started = Instant::now();
        let features = synthesize_features(&mut dataset, &vocabulary)?;
        timings.fields = started.elapsed();
        info!(
            "{} entries, {} words, {} fields",
            dataset.len(),
            vocabulary.len(),
            features
        );

        info!("Generating tree with {}...", self.inducer.name());
        let started = Instant::now();
        let tree = self.inducer.induce(&dataset)?.ok_or_else(|| {
            LangTreeError::induction_failed(format!("{} produced no tree", self.inducer.name()))
        })?;
        timings.induction = started.elapsed();
        debug!("Tree is:\n{tree}");

        let started = Instant::now();
        let root = convert_tree(&tree)?;
        timings.conversion = started.elapsed();
        let mut classifier = Classifier::new(vocabulary, root);

        let centering = if self.config.center_thresholds {
            info!("Centering thresholds...");
            let started = Instant::now();
            let vectors: Vec<Frequencies> = dataset.frequencies().cloned().collect();
            let report = center_tree(&mut classifier.root, &vectors);
            timings.centering = started.elapsed();
            debug!(
                "centered {} of {} branches ({} one-sided)",
                report.moved, report.branches, report.one_sided
            );
            Some(report)
        } else {
            None
        };

        let report = TrainingReport {
            samples: dataset.len(),
            classes: corpus.values().filter(|samples| !samples.is_empty()).count(),
            vocabulary_size: classifier.keywords.len(),
            features,
            branches: classifier.branch_count(),
            leaves: classifier.leaf_count(),
            unknown_leaves: tree.empty_leaf_count(),
            centering,
            timings,
        };
        info!(
            "Trained classifier: {} branches, {} leaves, depth {} in {:?}",
            report.branches,
            report.leaves,
            classifier.depth(),
            report.timings.total()
        );

        Ok(TrainedClassifier { classifier, report })
    }
}

/// Train a classifier on `corpus` with the default configuration.
pub fn generate_classifier(corpus: &Corpus) -> Result<Classifier> {
    Trainer::default()
        .train(corpus)
        .map(|trained| trained.classifier)
}

fn validate_corpus(corpus: &Corpus) -> Result<()> {
    if corpus.values().all(Vec::is_empty) {
        return Err(LangTreeError::EmptyCorpus);
    }
    for (label, samples) in corpus {
        if samples.is_empty() {
            continue;
        }
        if label.is_empty() {
            return Err(LangTreeError::EmptyClassLabel);
        }
        if label == UNKNOWN_LABEL {
            return Err(LangTreeError::ReservedClassLabel(label.clone()));
        }
        for sample in samples {
            for (word, count) in sample.iter() {
                if !count.is_finite() || count < 0.0 {
                    return Err(LangTreeError::invalid_frequency(word, count));
                }
            }
        }
    }
    Ok(())
}

fn build_dataset(corpus: &Corpus, vocabulary: &Vocabulary) -> DataSet {
    let sample_count = corpus.values().map(Vec::len).sum();
    let mut dataset = DataSet::with_capacity(sample_count);
    for (label, samples) in corpus {
        for sample in samples {
            dataset.push_entry(Entry::new(label.as_str(), normalize(sample, vocabulary)));
        }
    }
    dataset
}
