mod common;

use common::{branches, margin_violations, training_vectors};
use langtree::classifier::{UNKNOWN_LABEL, center_thresholds};
use langtree::dataset::{Feature, bisecting_thresholds};
use langtree::frequency::{Frequencies, Vocabulary, WordCounts, normalize};
use langtree::trainer::{Corpus, Trainer};
use proptest::prelude::*;

const WORDS: [&str; 4] = ["class", "func", "if", "return"];

/// Classes of samples, each sample a count per entry of `WORDS`.
fn corpus_strategy() -> impl Strategy<Value = Corpus> {
    prop::collection::vec(
        prop::collection::vec(prop::collection::vec(0u32..8, WORDS.len()), 1..5),
        2..4,
    )
    .prop_map(|classes| {
        classes
            .into_iter()
            .enumerate()
            .map(|(i, samples)| {
                let samples = samples
                    .into_iter()
                    .map(|counts| {
                        WORDS
                            .iter()
                            .zip(counts)
                            .filter(|(_, count)| *count > 0)
                            .map(|(word, count)| (*word, f64::from(count)))
                            .collect::<WordCounts>()
                    })
                    .collect();
                (format!("lang{i}"), samples)
            })
            .collect()
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_normalized_frequencies_sum_to_one(counts in prop::collection::vec(0u32..1000, 1..8)) {
        let words: Vec<String> = (0..counts.len()).map(|i| format!("w{i}")).collect();
        let sample: WordCounts = words
            .iter()
            .zip(&counts)
            .map(|(word, count)| (word.as_str(), f64::from(*count)))
            .collect();
        let vocabulary = Vocabulary::from_words(words.iter().map(String::as_str));

        let frequencies = normalize(&sample, &vocabulary);
        prop_assert_eq!(frequencies.len(), vocabulary.len());
        if counts.iter().all(|count| *count == 0) {
            prop_assert!(frequencies.iter().all(|(_, value)| value == 0.0));
        } else {
            prop_assert!((frequencies.sum() - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn prop_large_counts_still_sum_to_one(counts in prop::collection::vec(1.0e300f64..f64::MAX, 1..8)) {
        let words: Vec<String> = (0..counts.len()).map(|i| format!("w{i}")).collect();
        let sample: WordCounts = words
            .iter()
            .zip(&counts)
            .map(|(word, count)| (word.as_str(), *count))
            .collect();
        let vocabulary = Vocabulary::from_words(words.iter().map(String::as_str));

        let frequencies = normalize(&sample, &vocabulary);
        prop_assert!((frequencies.sum() - 1.0).abs() < 1e-9);
        prop_assert!(frequencies.iter().all(|(_, value)| value > 0.0));
    }

    #[test]
    fn prop_bisections_separate_distinct_values(values in prop::collection::vec(0.0f64..1.0, 0..20)) {
        let thresholds = bisecting_thresholds(&values);

        let mut distinct = values.clone();
        distinct.sort_by(f64::total_cmp);
        distinct.dedup();
        prop_assert_eq!(thresholds.len(), distinct.len().saturating_sub(1));

        for pair in distinct.windows(2) {
            let (low, high) = (pair[0], pair[1]);
            prop_assert!(thresholds.iter().any(|t| low <= *t && *t < high));
        }
    }

    #[test]
    fn prop_feature_label_round_trips(word in "[a-z_%{}]{1,10}", threshold in -1.0e6f64..1.0e6) {
        let feature = Feature::new(word.clone(), threshold).unwrap();
        let (parsed_word, parsed_threshold) = Feature::parse_label(&feature.label()).unwrap();
        prop_assert_eq!(parsed_word, word);
        prop_assert_eq!(parsed_threshold.to_bits(), threshold.to_bits());
    }

    #[test]
    fn prop_trained_classifier_invariants(corpus in corpus_strategy()) {
        let trained = Trainer::default().train(&corpus).unwrap();
        let classifier = &trained.classifier;

        for label in classifier.leaf_labels() {
            prop_assert!(!label.is_empty());
            prop_assert!(label != UNKNOWN_LABEL);
            prop_assert!(corpus.contains_key(label));
        }

        let vectors = training_vectors(classifier, &corpus);
        let reaching: Vec<&Frequencies> = vectors.iter().collect();
        let violations = margin_violations(&classifier.root, &reaching);
        prop_assert!(violations.is_empty(), "{:?}", violations);

        let centering = trained.report.centering.unwrap();
        prop_assert_eq!(centering.one_sided, 0);
        prop_assert_eq!(centering.unreached, 0);
    }

    #[test]
    fn prop_trained_branch_labels_round_trip(corpus in corpus_strategy()) {
        let classifier = Trainer::default().train(&corpus).unwrap().classifier;

        for (keyword, threshold) in branches(&classifier.root) {
            let label = format!("{keyword} > {threshold}");
            let (parsed_keyword, parsed_threshold) = Feature::parse_label(&label).unwrap();
            prop_assert_eq!(parsed_keyword, keyword);
            prop_assert_eq!(parsed_threshold.to_bits(), threshold.to_bits());
        }
    }

    #[test]
    fn prop_centering_trained_classifier_is_idempotent(corpus in corpus_strategy()) {
        let classifier = Trainer::default().train(&corpus).unwrap().classifier;

        let mut recentered = classifier.clone();
        let report = center_thresholds(&mut recentered, corpus.values().flatten());
        prop_assert_eq!(report.moved, 0);
        prop_assert_eq!(recentered, classifier);
    }
}
