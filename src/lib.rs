//! Cardiorisk
//!
//! Form-driven heart-disease risk screening over two pre-trained models.
//!
//! Pipeline: intake form → categorical encoding → inference → report.
//! - `intake`: patient form fields with range validation
//! - `encode`: fixed label-encoding tables and the ordered feature vector
//! - `model`: Gaussian Naive Bayes classifier and K-Means cluster model,
//!   loaded from serialized parameter files
//! - `report`: verdict/cluster messaging and markdown report assembly

pub mod encode;
pub mod intake;
pub mod model;
pub mod report;

// Re-export commonly used types
pub use encode::FeatureVector;
pub use intake::PatientIntake;
pub use model::{KMeansModel, ModelBundle, NaiveBayesClassifier};
pub use report::{ClusterProfile, RiskAssessment, RiskVerdict};
