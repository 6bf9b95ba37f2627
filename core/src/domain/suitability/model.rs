use linfa::prelude::*;
use linfa_trees::DecisionTree;
use ndarray::{Array1, Array2, Axis};
use serde::{Deserialize, Serialize};

use crate::domain::health::entities::HealthCondition;

/// One binary suitability flag per condition, in `HealthCondition::ALL`
/// order.
pub type LabelVector = [u8; HealthCondition::COUNT];

/// The candidate classifier families, in selection tie-break order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ModelFamily {
    BaggedTrees,
    DecisionTree,
    LogisticRegression,
}

impl ModelFamily {
    pub const CANDIDATES: [ModelFamily; 3] = [
        ModelFamily::BaggedTrees,
        ModelFamily::DecisionTree,
        ModelFamily::LogisticRegression,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ModelFamily::BaggedTrees => "Bagged Trees",
            ModelFamily::DecisionTree => "Decision Tree",
            ModelFamily::LogisticRegression => "Logistic Regression",
        }
    }
}

/// A single per-condition binary decision function over the scaled
/// four-dimensional feature space.
///
/// `Constant` covers labels that were single-class in the training
/// partition; logistic fitting rejects those outright and a tree would
/// only reproduce the same constant with more machinery.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum BinaryClassifier {
    Constant(u8),
    Tree(DecisionTree<f64, usize>),
    BaggedTrees(Vec<DecisionTree<f64, usize>>),
    Logistic { weights: Vec<f64>, intercept: f64 },
}

fn sigmoid(z: f64) -> f64 {
    1.0 / (1.0 + (-z).exp())
}

fn single_row(features: &[f64]) -> Array2<f64> {
    Array1::from(features.to_vec()).insert_axis(Axis(0))
}

impl BinaryClassifier {
    pub fn predict(&self, features: &[f64]) -> u8 {
        match self {
            BinaryClassifier::Constant(value) => *value,
            BinaryClassifier::Tree(tree) => {
                let prediction = tree.predict(&single_row(features));
                prediction[0] as u8
            }
            BinaryClassifier::BaggedTrees(trees) => {
                let row = single_row(features);
                let votes = trees
                    .iter()
                    .map(|tree| tree.predict(&row)[0] as usize)
                    .sum::<usize>();
                u8::from(votes * 2 > trees.len())
            }
            BinaryClassifier::Logistic { weights, intercept } => {
                let z = intercept
                    + weights
                        .iter()
                        .zip(features)
                        .map(|(w, x)| w * x)
                        .sum::<f64>();
                u8::from(sigmoid(z) >= 0.5)
            }
        }
    }

    pub fn predict_batch(&self, x: &Array2<f64>) -> Vec<u8> {
        match self {
            BinaryClassifier::Constant(value) => vec![*value; x.nrows()],
            BinaryClassifier::Tree(tree) => {
                tree.predict(x).iter().map(|&label| label as u8).collect()
            }
            BinaryClassifier::BaggedTrees(trees) => {
                let mut votes = vec![0usize; x.nrows()];
                for tree in trees {
                    for (count, label) in votes.iter_mut().zip(tree.predict(x).iter()) {
                        *count += *label;
                    }
                }
                votes
                    .into_iter()
                    .map(|count| u8::from(count * 2 > trees.len()))
                    .collect()
            }
            BinaryClassifier::Logistic { .. } => x
                .axis_iter(Axis(0))
                .map(|row| self.predict(&row.to_vec()))
                .collect(),
        }
    }
}

/// Six independent binary classifiers behind one multi-output interface.
///
/// Inference is pure: the same scaled feature vector always yields the
/// same label vector.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MultiOutputModel {
    family: ModelFamily,
    classifiers: Vec<BinaryClassifier>,
}

impl MultiOutputModel {
    pub fn new(family: ModelFamily, classifiers: Vec<BinaryClassifier>) -> Self {
        debug_assert_eq!(classifiers.len(), HealthCondition::COUNT);
        Self {
            family,
            classifiers,
        }
    }

    pub fn family(&self) -> ModelFamily {
        self.family
    }

    pub fn predict(&self, scaled: &[f64]) -> LabelVector {
        let mut labels = [0u8; HealthCondition::COUNT];
        for (label, classifier) in labels.iter_mut().zip(&self.classifiers) {
            *label = classifier.predict(scaled);
        }
        labels
    }

    pub fn predict_batch(&self, scaled: &Array2<f64>) -> Vec<LabelVector> {
        let per_label: Vec<Vec<u8>> = self
            .classifiers
            .iter()
            .map(|classifier| classifier.predict_batch(scaled))
            .collect();

        (0..scaled.nrows())
            .map(|row| {
                let mut labels = [0u8; HealthCondition::COUNT];
                for (label, predictions) in labels.iter_mut().zip(&per_label) {
                    *label = predictions[row];
                }
                labels
            })
            .collect()
    }
}
