use linfa::prelude::*;
use linfa_logistic::LogisticRegression;
use linfa_trees::DecisionTree;
use ndarray::{Array1, Array2, Axis};
use rand::{Rng, SeedableRng, rngs::StdRng, seq::SliceRandom};

use crate::domain::{
    common::entities::app_errors::CoreError,
    health::entities::HealthCondition,
    suitability::{
        entities::{ArtifactMetadata, TrainedArtifact},
        features,
        model::{BinaryClassifier, LabelVector, ModelFamily, MultiOutputModel},
        scaler::StandardScaler,
    },
    training::entities::{CandidateEvaluation, ConditionAccuracy, DatasetRow, TrainingReport},
};

/// A raw 1-10 score at or above this is "suitable". Policy constant, not a
/// tunable: changing it changes the meaning of every stored prediction.
pub const SUITABILITY_THRESHOLD: f64 = 7.0;

pub const TEST_FRACTION: f64 = 0.2;
pub const SPLIT_SEED: u64 = 42;

const BAGGING_ROUNDS: usize = 100;
const BAGGED_TREE_MAX_DEPTH: usize = 10;
const BAGGED_MIN_WEIGHT_SPLIT: f32 = 5.0;
const SINGLE_TREE_MAX_DEPTH: usize = 8;
const LOGISTIC_MAX_ITERATIONS: u64 = 150;

pub fn binarize(score: f64) -> u8 {
    u8::from(score >= SUITABILITY_THRESHOLD)
}

fn label_vector(row: &DatasetRow) -> LabelVector {
    let mut labels = [0u8; HealthCondition::COUNT];
    for condition in HealthCondition::ALL {
        labels[condition.index()] = binarize(row.score(condition));
    }
    labels
}

fn feature_matrix(rows: &[DatasetRow], columns: &[String]) -> Result<Array2<f64>, CoreError> {
    let mut data = Vec::with_capacity(rows.len() * features::FEATURE_COUNT);
    for row in rows {
        data.extend(features::encode(
            columns,
            &row.nutritional_info(),
            &row.category,
        ));
    }
    Array2::from_shape_vec((rows.len(), features::FEATURE_COUNT), data)
        .map_err(|e| CoreError::TrainingData(format!("feature matrix shape: {e}")))
}

/// Deterministic shuffled 80/20 split. Returns (train, test) row indices.
pub fn split_indices(total: usize) -> (Vec<usize>, Vec<usize>) {
    let mut indices: Vec<usize> = (0..total).collect();
    indices.shuffle(&mut StdRng::seed_from_u64(SPLIT_SEED));
    let test_len = ((total as f64) * TEST_FRACTION).ceil() as usize;
    let test = indices[..test_len].to_vec();
    let train = indices[test_len..].to_vec();
    (train, test)
}

/// Fraction of rows whose six predicted labels all match the truth.
pub fn exact_match_accuracy(predicted: &[LabelVector], truth: &[LabelVector]) -> f64 {
    if truth.is_empty() {
        return 0.0;
    }
    let matches = predicted
        .iter()
        .zip(truth)
        .filter(|(p, t)| p == t)
        .count();
    matches as f64 / truth.len() as f64
}

fn per_condition_accuracy(predicted: &[LabelVector], truth: &[LabelVector]) -> Vec<ConditionAccuracy> {
    HealthCondition::ALL
        .iter()
        .map(|condition| {
            let index = condition.index();
            let correct = predicted
                .iter()
                .zip(truth)
                .filter(|(p, t)| p[index] == t[index])
                .count();
            ConditionAccuracy {
                condition: condition.key().to_string(),
                accuracy: if truth.is_empty() {
                    0.0
                } else {
                    correct as f64 / truth.len() as f64
                },
            }
        })
        .collect()
}

fn fit_tree(
    x: &Array2<f64>,
    targets: &[u8],
    max_depth: usize,
    min_weight_split: f32,
) -> Result<DecisionTree<f64, usize>, CoreError> {
    let y = Array1::from_iter(targets.iter().map(|&t| t as usize));
    let dataset = Dataset::new(x.clone(), y);
    DecisionTree::params()
        .max_depth(Some(max_depth))
        .min_weight_split(min_weight_split)
        .fit(&dataset)
        .map_err(|e| CoreError::TrainingData(format!("decision tree fit: {e}")))
}

fn fit_logistic(x: &Array2<f64>, targets: &[u8]) -> Result<BinaryClassifier, CoreError> {
    let y = Array1::from_iter(targets.iter().map(|&t| i32::from(t)));
    let dataset = Dataset::new(x.clone(), y);
    let fitted = LogisticRegression::default()
        .max_iterations(LOGISTIC_MAX_ITERATIONS)
        .fit(&dataset)
        .map_err(|e| CoreError::TrainingData(format!("logistic regression fit: {e}")))?;

    let mut classifier = BinaryClassifier::Logistic {
        weights: fitted.params().to_vec(),
        intercept: fitted.intercept(),
    };

    // The library's internal class mapping decides which side of the plane
    // is the positive label; flip the extracted rule if it disagrees with
    // the training labels.
    let predictions = classifier.predict_batch(x);
    let agreement = predictions.iter().zip(targets).filter(|(p, t)| p == t).count();
    if (agreement * 2) < targets.len()
        && let BinaryClassifier::Logistic { weights, intercept } = &mut classifier
    {
        for weight in weights.iter_mut() {
            *weight = -*weight;
        }
        *intercept = -*intercept;
    }
    Ok(classifier)
}

fn fit_bagged_trees(
    x: &Array2<f64>,
    targets: &[u8],
    seed: u64,
) -> Result<BinaryClassifier, CoreError> {
    let rows = x.nrows();
    let mut rng = StdRng::seed_from_u64(seed);
    let mut trees = Vec::with_capacity(BAGGING_ROUNDS);
    for _ in 0..BAGGING_ROUNDS {
        let sample: Vec<usize> = (0..rows).map(|_| rng.gen_range(0..rows)).collect();
        let sample_x = x.select(Axis(0), &sample);
        let sample_y: Vec<u8> = sample.iter().map(|&i| targets[i]).collect();
        trees.push(fit_tree(
            &sample_x,
            &sample_y,
            BAGGED_TREE_MAX_DEPTH,
            BAGGED_MIN_WEIGHT_SPLIT,
        )?);
    }
    Ok(BinaryClassifier::BaggedTrees(trees))
}

fn fit_binary(
    family: ModelFamily,
    x: &Array2<f64>,
    targets: &[u8],
    label_index: usize,
) -> Result<BinaryClassifier, CoreError> {
    // Single-class labels cannot be fit by every family; they carry no
    // signal anyway, so they become a constant decision.
    if let Some(first) = targets.first()
        && targets.iter().all(|t| t == first)
    {
        return Ok(BinaryClassifier::Constant(*first));
    }

    match family {
        ModelFamily::BaggedTrees => {
            fit_bagged_trees(x, targets, SPLIT_SEED.wrapping_add(label_index as u64))
        }
        ModelFamily::DecisionTree => Ok(BinaryClassifier::Tree(fit_tree(
            x,
            targets,
            SINGLE_TREE_MAX_DEPTH,
            2.0,
        )?)),
        ModelFamily::LogisticRegression => fit_logistic(x, targets),
    }
}

fn fit_family(
    family: ModelFamily,
    x: &Array2<f64>,
    labels: &[LabelVector],
) -> Result<MultiOutputModel, CoreError> {
    let classifiers = HealthCondition::ALL
        .iter()
        .map(|condition| {
            let index = condition.index();
            let targets: Vec<u8> = labels.iter().map(|l| l[index]).collect();
            fit_binary(family, x, &targets, index)
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(MultiOutputModel::new(family, classifiers))
}

/// Full training pipeline: binarize labels, split, fit the scaler on the
/// training partition, fit every candidate family, select by exact-match
/// accuracy on the held-out partition.
///
/// Nothing is persisted here; the artifact is emitted only when the whole
/// pipeline has succeeded.
pub fn train(rows: &[DatasetRow]) -> Result<(TrainedArtifact, TrainingReport), CoreError> {
    if rows.is_empty() {
        return Err(CoreError::TrainingData("dataset is empty".to_string()));
    }

    let feature_columns = features::feature_columns();
    let x = feature_matrix(rows, &feature_columns)?;
    let labels: Vec<LabelVector> = rows.iter().map(label_vector).collect();

    let (train_idx, test_idx) = split_indices(rows.len());
    if train_idx.is_empty() {
        return Err(CoreError::TrainingData(
            "dataset too small to hold out a test partition".to_string(),
        ));
    }

    let select_labels = |idx: &[usize]| -> Vec<LabelVector> {
        idx.iter().map(|&i| labels[i]).collect()
    };
    let train_x = x.select(Axis(0), &train_idx);
    let test_x = x.select(Axis(0), &test_idx);
    let train_labels = select_labels(&train_idx);
    let test_labels = select_labels(&test_idx);

    let scaler = StandardScaler::fit(&train_x);
    let scaled_train = scaler.transform(&train_x);
    let scaled_test = scaler.transform(&test_x);

    let mut candidates = Vec::with_capacity(ModelFamily::CANDIDATES.len());
    let mut best: Option<(MultiOutputModel, f64)> = None;
    for family in ModelFamily::CANDIDATES {
        let model = fit_family(family, &scaled_train, &train_labels)?;
        let accuracy = exact_match_accuracy(&model.predict_batch(&scaled_test), &test_labels);
        tracing::info!(
            family = family.name(),
            exact_match_accuracy = accuracy,
            "candidate evaluated"
        );
        candidates.push(CandidateEvaluation {
            family,
            exact_match_accuracy: accuracy,
        });
        // Ties keep the earlier candidate.
        let improves = best.as_ref().is_none_or(|(_, current)| accuracy > *current);
        if improves {
            best = Some((model, accuracy));
        }
    }

    let (model, accuracy) = best.ok_or(CoreError::InternalServerError)?;
    let per_condition = per_condition_accuracy(&model.predict_batch(&scaled_test), &test_labels);
    let family = model.family();

    let artifact = TrainedArtifact {
        metadata: ArtifactMetadata::new(family, accuracy),
        model,
        scaler,
        feature_columns,
    };
    let report = TrainingReport {
        total_rows: rows.len(),
        train_rows: train_idx.len(),
        test_rows: test_idx.len(),
        candidates,
        selected: family,
        exact_match_accuracy: accuracy,
        per_condition,
    };
    Ok((artifact, report))
}
