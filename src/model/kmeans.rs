//! K-Means Cluster Model
//!
//! Inference-only rendition of the fitted clustering model: the centroids
//! alone. Prediction assigns a sample to its nearest centroid by squared
//! Euclidean distance.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use super::ModelError;

/// Fitted K-Means centroids, `[n_clusters][n_features]`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KMeansModel {
    pub centroids: Vec<Vec<f64>>,
}

impl KMeansModel {
    /// Load and validate from a JSON parameter file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read cluster file: {:?}", path))?;

        let model: KMeansModel = serde_json::from_str(&contents)
            .with_context(|| "Failed to parse cluster JSON")?;

        model
            .validate()
            .with_context(|| format!("Invalid cluster parameters in {:?}", path))?;

        Ok(model)
    }

    /// Check that centroids exist and all have the same width
    pub fn validate(&self) -> Result<(), ModelError> {
        if self.centroids.is_empty() {
            return Err(ModelError::EmptyModel);
        }

        let width = self.centroids[0].len();
        for (i, centroid) in self.centroids.iter().enumerate() {
            if centroid.len() != width {
                return Err(ModelError::ShapeMismatch {
                    message: format!(
                        "centroid {} has {} features, expected {}",
                        i,
                        centroid.len(),
                        width
                    ),
                });
            }
        }

        Ok(())
    }

    /// Number of clusters
    pub fn n_clusters(&self) -> usize {
        self.centroids.len()
    }

    /// Number of features the model expects
    pub fn n_features(&self) -> usize {
        self.centroids.first().map_or(0, Vec::len)
    }

    /// Index of the nearest centroid. Ties resolve to the lowest index.
    pub fn predict(&self, features: &[f64]) -> Result<usize, ModelError> {
        let expected = self.n_features();
        if features.len() != expected {
            return Err(ModelError::FeatureWidth {
                got: features.len(),
                expected,
            });
        }

        let mut best = 0;
        let mut best_dist = f64::INFINITY;
        for (idx, centroid) in self.centroids.iter().enumerate() {
            let dist: f64 = centroid
                .iter()
                .zip(features)
                .map(|(c, x)| (c - x).powi(2))
                .sum();
            if dist < best_dist {
                best = idx;
                best_dist = dist;
            }
        }

        Ok(best)
    }
}
