//! Risk Messaging
//!
//! Maps the classifier label and the cluster index to static
//! natural-language strings and assembles the markdown report shown to the
//! user.

use anyhow::Result;

use crate::encode::FeatureVector;
use crate::model::ModelBundle;

/// Shown at the bottom of every report
pub const DISCLAIMER: &str =
    "This model is for educational purposes only and does not replace a professional medical diagnosis.";

/// Binary classifier outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiskVerdict {
    /// Classifier label 0
    NotAtRisk,
    /// Classifier label 1
    AtRisk,
}

impl RiskVerdict {
    /// Map the classifier's integer label to a verdict
    pub fn from_label(label: usize) -> Self {
        if label == 1 {
            RiskVerdict::AtRisk
        } else {
            RiskVerdict::NotAtRisk
        }
    }

    pub fn display_text(&self) -> &'static str {
        match self {
            RiskVerdict::NotAtRisk => "Likely not at risk of heart disease",
            RiskVerdict::AtRisk => "Likely at risk of heart disease",
        }
    }

    /// Lifestyle advice line accompanying the verdict
    pub fn advice(&self) -> &'static str {
        match self {
            RiskVerdict::NotAtRisk => {
                "Keep up a balanced diet, regular exercise, and routine health checks."
            }
            RiskVerdict::AtRisk => {
                "Consult a doctor and consider starting a healthier lifestyle."
            }
        }
    }
}

/// Descriptive profile for each cluster index
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClusterProfile {
    /// Cluster 0
    Healthy,
    /// Cluster 1
    Vulnerable,
    /// Cluster 2
    HighRisk,
    /// Any index outside 0..=2
    Unknown,
}

impl ClusterProfile {
    /// Map a cluster index to its profile. Out-of-range indexes map to
    /// Unknown rather than failing; the report still renders.
    pub fn from_index(index: usize) -> Self {
        match index {
            0 => ClusterProfile::Healthy,
            1 => ClusterProfile::Vulnerable,
            2 => ClusterProfile::HighRisk,
            _ => ClusterProfile::Unknown,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ClusterProfile::Healthy => "Healthy Cluster",
            ClusterProfile::Vulnerable => "Vulnerable Cluster",
            ClusterProfile::HighRisk => "High-Risk Cluster",
            ClusterProfile::Unknown => "Unknown Cluster",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ClusterProfile::Healthy => {
                "Measurements resemble patients with no elevated risk markers"
            }
            ClusterProfile::Vulnerable => {
                "Measurements resemble patients with early warning signs worth monitoring"
            }
            ClusterProfile::HighRisk => {
                "Measurements resemble patients with multiple elevated risk markers"
            }
            ClusterProfile::Unknown => "Cluster characteristics not available",
        }
    }
}

/// Combined output of both models for one patient
#[derive(Debug, Clone)]
pub struct RiskAssessment {
    /// Binary classifier verdict
    pub verdict: RiskVerdict,

    /// Probability of the at-risk class
    pub probability: f64,

    /// Cluster assignment profile
    pub cluster: ClusterProfile,
}

/// Run both models on an encoded feature vector
pub fn assess(bundle: &ModelBundle, features: &FeatureVector) -> Result<RiskAssessment> {
    let label = bundle.classifier.predict(features.as_slice())?;
    let probability = bundle.classifier.predict_proba(features.as_slice())?;
    let cluster_index = bundle.clusters.predict(features.as_slice())?;

    Ok(RiskAssessment {
        verdict: RiskVerdict::from_label(label),
        probability,
        cluster: ClusterProfile::from_index(cluster_index),
    })
}

/// Render the full markdown report: processed features, verdict with
/// probability, advice, cluster blurb, and the disclaimer footer.
pub fn generate_report(features: &FeatureVector, assessment: &RiskAssessment) -> String {
    let mut lines = Vec::new();

    lines.push("# Heart Disease Risk Assessment".to_string());
    lines.push(String::new());

    // Echo the encoded data so the user can see what the models received
    lines.push("## Processed Data".to_string());
    lines.push(String::new());
    lines.push("| Feature | Value |".to_string());
    lines.push("|---------|-------|".to_string());
    for (name, value) in features.named_values() {
        lines.push(format!("| {} | {} |", name, format_value(value)));
    }
    lines.push(String::new());

    lines.push("## Prediction".to_string());
    lines.push(String::new());
    lines.push(format!(
        "**{}** (probability score: {:.2})",
        assessment.verdict.display_text(),
        assessment.probability
    ));
    lines.push(String::new());
    lines.push(assessment.verdict.advice().to_string());
    lines.push(String::new());

    lines.push(format!(
        "This profile falls in the **{}**.",
        assessment.cluster.display_name()
    ));
    lines.push(format!("{}.", assessment.cluster.description()));
    lines.push(String::new());

    lines.push("---".to_string());
    lines.push(DISCLAIMER.to_string());

    lines.join("\n")
}

/// Integers print without a trailing ".0"; oldpeak keeps one decimal
fn format_value(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        format!("{:.1}", value)
    }
}
