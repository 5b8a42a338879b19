//! Pre-trained Model Artifacts
//!
//! Loads and validates the two externally produced models: a Gaussian Naive
//! Bayes classifier and a K-Means cluster model. Both are serialized as JSON
//! parameter files and loaded once at startup; nothing here trains or
//! updates them.

pub mod classifier;
pub mod kmeans;

pub use classifier::NaiveBayesClassifier;
pub use kmeans::KMeansModel;

use std::path::Path;

use anyhow::{Context, Result};
use thiserror::Error;

/// Classifier parameter file name inside the model directory
pub const CLASSIFIER_FILE: &str = "heart_classifier.json";

/// Cluster parameter file name inside the model directory
pub const CLUSTERS_FILE: &str = "heart_clusters.json";

/// Structural defect in a loaded parameter file
#[derive(Debug, Error, PartialEq)]
pub enum ModelError {
    #[error("model has no parameters")]
    EmptyModel,

    #[error("parameter shape mismatch: {message}")]
    ShapeMismatch { message: String },

    #[error("variance for class {class}, feature {feature} is {value} (must be > 0)")]
    InvalidVariance {
        class: usize,
        feature: usize,
        value: f64,
    },

    #[error("feature vector has {got} values, model expects {expected}")]
    FeatureWidth { got: usize, expected: usize },
}

/// Both pre-trained models, loaded and shape-checked
#[derive(Debug)]
pub struct ModelBundle {
    pub classifier: NaiveBayesClassifier,
    pub clusters: KMeansModel,
}

impl ModelBundle {
    /// Load both parameter files from a model directory.
    ///
    /// Fails if either file is missing, unparseable, or structurally
    /// invalid, or if the two models disagree on feature count.
    pub fn load(dir: &Path) -> Result<Self> {
        let classifier = NaiveBayesClassifier::load(&dir.join(CLASSIFIER_FILE))?;
        let clusters = KMeansModel::load(&dir.join(CLUSTERS_FILE))?;

        if classifier.n_features() != clusters.n_features() {
            return Err(ModelError::ShapeMismatch {
                message: format!(
                    "classifier expects {} features, cluster model expects {}",
                    classifier.n_features(),
                    clusters.n_features()
                ),
            })
            .context("model bundle is inconsistent");
        }

        Ok(ModelBundle {
            classifier,
            clusters,
        })
    }
}
