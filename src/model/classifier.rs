//! Gaussian Naive Bayes Classifier
//!
//! Inference-only rendition of the fitted classifier: per-class priors plus
//! per-class, per-feature Gaussian means and variances. Prediction computes
//! the joint log-likelihood of each class and normalizes with log-sum-exp.

use std::f64::consts::PI;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use super::ModelError;

/// Fitted Gaussian Naive Bayes parameters.
///
/// Class 0 is "not at risk", class 1 is "at risk"; `predict_proba` reports
/// the probability of class 1.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NaiveBayesClassifier {
    /// Prior probability per class
    pub class_priors: Vec<f64>,

    /// Feature means, `[n_classes][n_features]`
    pub means: Vec<Vec<f64>>,

    /// Feature variances, `[n_classes][n_features]`
    pub variances: Vec<Vec<f64>>,
}

impl NaiveBayesClassifier {
    /// Load and validate from a JSON parameter file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read classifier file: {:?}", path))?;

        let model: NaiveBayesClassifier = serde_json::from_str(&contents)
            .with_context(|| "Failed to parse classifier JSON")?;

        model
            .validate()
            .with_context(|| format!("Invalid classifier parameters in {:?}", path))?;

        Ok(model)
    }

    /// Check parameter shapes and positivity of variances
    pub fn validate(&self) -> Result<(), ModelError> {
        if self.class_priors.is_empty() {
            return Err(ModelError::EmptyModel);
        }

        let n_classes = self.class_priors.len();
        if self.means.len() != n_classes || self.variances.len() != n_classes {
            return Err(ModelError::ShapeMismatch {
                message: format!(
                    "priors for {} classes, means for {}, variances for {}",
                    n_classes,
                    self.means.len(),
                    self.variances.len()
                ),
            });
        }

        let n_features = self.means[0].len();
        for (class, (means, variances)) in self.means.iter().zip(&self.variances).enumerate() {
            if means.len() != n_features || variances.len() != n_features {
                return Err(ModelError::ShapeMismatch {
                    message: format!(
                        "class {} has {} means and {} variances, expected {}",
                        class,
                        means.len(),
                        variances.len(),
                        n_features
                    ),
                });
            }
            for (feature, &v) in variances.iter().enumerate() {
                if !(v > 0.0) {
                    return Err(ModelError::InvalidVariance {
                        class,
                        feature,
                        value: v,
                    });
                }
            }
        }

        Ok(())
    }

    /// Number of features the model expects
    pub fn n_features(&self) -> usize {
        self.means.first().map_or(0, Vec::len)
    }

    /// Joint log-likelihood of each class for one sample:
    /// ln P(c) + Σ_i ln N(x_i; μ_ci, σ²_ci)
    fn joint_log_likelihood(&self, features: &[f64]) -> Vec<f64> {
        self.class_priors
            .iter()
            .zip(self.means.iter().zip(&self.variances))
            .map(|(&prior, (means, variances))| {
                let mut ll = prior.ln();
                for ((&x, &mean), &var) in features.iter().zip(means).zip(variances) {
                    ll += -0.5 * (2.0 * PI * var).ln() - (x - mean).powi(2) / (2.0 * var);
                }
                ll
            })
            .collect()
    }

    /// Predicted class label (argmax of joint log-likelihood)
    pub fn predict(&self, features: &[f64]) -> Result<usize, ModelError> {
        self.check_width(features)?;

        let ll = self.joint_log_likelihood(features);
        let mut best = 0;
        for (idx, &value) in ll.iter().enumerate() {
            if value > ll[best] {
                best = idx;
            }
        }
        Ok(best)
    }

    /// Probability of the positive (at-risk) class.
    ///
    /// Log-sum-exp normalization keeps the result finite even when the raw
    /// likelihoods underflow.
    pub fn predict_proba(&self, features: &[f64]) -> Result<f64, ModelError> {
        self.check_width(features)?;

        let ll = self.joint_log_likelihood(features);
        let max = ll.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        let total: f64 = ll.iter().map(|&v| (v - max).exp()).sum();

        // Binary model: index 1 is the positive class
        let positive = ll.get(1).copied().unwrap_or(ll[0]);
        Ok((positive - max).exp() / total)
    }

    fn check_width(&self, features: &[f64]) -> Result<(), ModelError> {
        let expected = self.n_features();
        if features.len() != expected {
            return Err(ModelError::FeatureWidth {
                got: features.len(),
                expected,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    /// Two classes, two features, well-separated means
    fn separable_model() -> NaiveBayesClassifier {
        NaiveBayesClassifier {
            class_priors: vec![0.5, 0.5],
            means: vec![vec![0.0, 0.0], vec![10.0, 10.0]],
            variances: vec![vec![1.0, 1.0], vec![1.0, 1.0]],
        }
    }

    #[test]
    fn test_predict_separable_classes() {
        let model = separable_model();
        assert_eq!(model.predict(&[0.5, -0.5]).unwrap(), 0);
        assert_eq!(model.predict(&[9.5, 10.5]).unwrap(), 1);
    }

    #[test]
    fn test_proba_bounds_and_symmetry() {
        let model = separable_model();

        // Far into class 0 territory: near zero positive probability
        let p = model.predict_proba(&[0.0, 0.0]).unwrap();
        assert!(p < 0.001, "p = {}", p);

        // Equidistant point with equal priors: exactly 0.5
        let p = model.predict_proba(&[5.0, 5.0]).unwrap();
        assert_relative_eq!(p, 0.5, epsilon = 1e-9);

        // Far into class 1 territory
        let p = model.predict_proba(&[10.0, 10.0]).unwrap();
        assert!(p > 0.999, "p = {}", p);
    }

    #[test]
    fn test_priors_shift_decision() {
        let mut model = separable_model();
        model.class_priors = vec![0.99, 0.01];

        // Midpoint now tips toward the heavily weighted class
        assert_eq!(model.predict(&[5.0, 5.0]).unwrap(), 0);
        assert!(model.predict_proba(&[5.0, 5.0]).unwrap() < 0.5);
    }

    #[test]
    fn test_extreme_values_stay_finite() {
        let model = separable_model();
        let p = model.predict_proba(&[1e6, -1e6]).unwrap();
        assert!(p.is_finite());
        assert!((0.0..=1.0).contains(&p));
    }

    #[test]
    fn test_validate_rejects_bad_shapes() {
        let mut model = separable_model();
        model.means[1].pop();
        assert!(matches!(
            model.validate(),
            Err(ModelError::ShapeMismatch { .. })
        ));

        let mut model = separable_model();
        model.variances[0][1] = 0.0;
        assert_eq!(
            model.validate(),
            Err(ModelError::InvalidVariance {
                class: 0,
                feature: 1,
                value: 0.0,
            })
        );

        let empty = NaiveBayesClassifier {
            class_priors: vec![],
            means: vec![],
            variances: vec![],
        };
        assert_eq!(empty.validate(), Err(ModelError::EmptyModel));
    }

    #[test]
    fn test_wrong_width_rejected() {
        let model = separable_model();
        assert_eq!(
            model.predict(&[1.0]),
            Err(ModelError::FeatureWidth {
                got: 1,
                expected: 2,
            })
        );
    }
}
