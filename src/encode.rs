//! Categorical Encoding
//!
//! Fixed label-encoding tables mapping the form's categorical fields to the
//! integer codes both models were fitted against, plus the ordered feature
//! vector passed to inference.
//!
//! The codes follow the alphabetical label encoding of the training data and
//! must never change: a re-ordered table would silently shift every
//! prediction.

use serde::{Deserialize, Serialize};

use crate::intake::PatientIntake;

/// Patient sex
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sex {
    /// Female (code 0)
    F,
    /// Male (code 1)
    M,
}

impl Sex {
    /// Integer code used in the training data
    pub fn code(&self) -> u8 {
        match self {
            Sex::F => 0,
            Sex::M => 1,
        }
    }

    /// Friendly name for display
    pub fn display_name(&self) -> &'static str {
        match self {
            Sex::F => "Female",
            Sex::M => "Male",
        }
    }
}

/// Chest pain type (dataset spelling)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChestPainType {
    /// Asymptomatic (code 0)
    ASY,
    /// Atypical angina (code 1)
    ATA,
    /// Non-anginal pain (code 2)
    NAP,
    /// Typical angina (code 3)
    TA,
}

impl ChestPainType {
    pub fn code(&self) -> u8 {
        match self {
            ChestPainType::ASY => 0,
            ChestPainType::ATA => 1,
            ChestPainType::NAP => 2,
            ChestPainType::TA => 3,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ChestPainType::ASY => "Asymptomatic",
            ChestPainType::ATA => "Atypical Angina",
            ChestPainType::NAP => "Non-Anginal Pain",
            ChestPainType::TA => "Typical Angina",
        }
    }
}

/// Resting electrocardiogram result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RestingEcg {
    /// Left ventricular hypertrophy (code 0)
    LVH,
    /// Normal (code 1)
    Normal,
    /// ST-T wave abnormality (code 2)
    ST,
}

impl RestingEcg {
    pub fn code(&self) -> u8 {
        match self {
            RestingEcg::LVH => 0,
            RestingEcg::Normal => 1,
            RestingEcg::ST => 2,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            RestingEcg::LVH => "Left Ventricular Hypertrophy",
            RestingEcg::Normal => "Normal",
            RestingEcg::ST => "ST-T Abnormality",
        }
    }
}

/// Exercise-induced angina
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExerciseAngina {
    /// No (code 0)
    N,
    /// Yes (code 1)
    Y,
}

impl ExerciseAngina {
    pub fn code(&self) -> u8 {
        match self {
            ExerciseAngina::N => 0,
            ExerciseAngina::Y => 1,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ExerciseAngina::N => "No",
            ExerciseAngina::Y => "Yes",
        }
    }
}

/// Slope of the peak exercise ST segment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StSlope {
    /// Downsloping (code 0)
    Down,
    /// Flat (code 1)
    Flat,
    /// Upsloping (code 2)
    Up,
}

impl StSlope {
    pub fn code(&self) -> u8 {
        match self {
            StSlope::Down => 0,
            StSlope::Flat => 1,
            StSlope::Up => 2,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            StSlope::Down => "Downsloping",
            StSlope::Flat => "Flat",
            StSlope::Up => "Upsloping",
        }
    }
}

/// Number of features both models expect
pub const N_FEATURES: usize = 11;

/// Column names in model fitting order
pub const FEATURE_NAMES: [&str; N_FEATURES] = [
    "Age",
    "Sex",
    "ChestPainType",
    "RestingBP",
    "Cholesterol",
    "FastingBS",
    "RestingECG",
    "MaxHR",
    "ExerciseAngina",
    "Oldpeak",
    "ST_Slope",
];

/// Ordered numeric encoding of the eleven patient attributes.
///
/// The order matches `FEATURE_NAMES` and is the order both models were
/// fitted with.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureVector([f64; N_FEATURES]);

impl FeatureVector {
    /// Encode a validated intake form into the model feature vector
    pub fn from_intake(intake: &PatientIntake) -> Self {
        FeatureVector([
            intake.age as f64,
            intake.sex.code() as f64,
            intake.chest_pain_type.code() as f64,
            intake.resting_bp as f64,
            intake.cholesterol as f64,
            if intake.fasting_bs { 1.0 } else { 0.0 },
            intake.resting_ecg.code() as f64,
            intake.max_hr as f64,
            intake.exercise_angina.code() as f64,
            intake.oldpeak,
            intake.st_slope.code() as f64,
        ])
    }

    /// Feature values as a slice in model order
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    /// (name, value) pairs for echoing the processed data back to the user
    pub fn named_values(&self) -> impl Iterator<Item = (&'static str, f64)> + '_ {
        FEATURE_NAMES.iter().copied().zip(self.0.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::intake::PatientIntake;

    #[test]
    fn test_label_codes_match_training_encoding() {
        // Sex: F=0, M=1
        assert_eq!(Sex::F.code(), 0);
        assert_eq!(Sex::M.code(), 1);

        // ChestPainType: ASY=0, ATA=1, NAP=2, TA=3
        assert_eq!(ChestPainType::ASY.code(), 0);
        assert_eq!(ChestPainType::ATA.code(), 1);
        assert_eq!(ChestPainType::NAP.code(), 2);
        assert_eq!(ChestPainType::TA.code(), 3);

        // RestingECG: LVH=0, Normal=1, ST=2
        assert_eq!(RestingEcg::LVH.code(), 0);
        assert_eq!(RestingEcg::Normal.code(), 1);
        assert_eq!(RestingEcg::ST.code(), 2);

        // ExerciseAngina: N=0, Y=1
        assert_eq!(ExerciseAngina::N.code(), 0);
        assert_eq!(ExerciseAngina::Y.code(), 1);

        // ST_Slope: Down=0, Flat=1, Up=2
        assert_eq!(StSlope::Down.code(), 0);
        assert_eq!(StSlope::Flat.code(), 1);
        assert_eq!(StSlope::Up.code(), 2);
    }

    #[test]
    fn test_categorical_deserialization() {
        let cp: ChestPainType = serde_json::from_str("\"ATA\"").unwrap();
        assert_eq!(cp, ChestPainType::ATA);

        let ecg: RestingEcg = serde_json::from_str("\"Normal\"").unwrap();
        assert_eq!(ecg, RestingEcg::Normal);

        // Unknown labels are rejected
        assert!(serde_json::from_str::<StSlope>("\"Sideways\"").is_err());
    }

    #[test]
    fn test_feature_vector_order() {
        let intake = PatientIntake {
            age: 54,
            sex: Sex::M,
            chest_pain_type: ChestPainType::ATA,
            resting_bp: 130,
            cholesterol: 220,
            fasting_bs: false,
            resting_ecg: RestingEcg::Normal,
            max_hr: 150,
            exercise_angina: ExerciseAngina::N,
            oldpeak: 1.0,
            st_slope: StSlope::Up,
        };

        let features = FeatureVector::from_intake(&intake);
        assert_eq!(
            features.as_slice(),
            &[54.0, 1.0, 1.0, 130.0, 220.0, 0.0, 1.0, 150.0, 0.0, 1.0, 2.0]
        );
    }

    #[test]
    fn test_named_values_alignment() {
        let intake = PatientIntake::sample();
        let features = FeatureVector::from_intake(&intake);

        let pairs: Vec<_> = features.named_values().collect();
        assert_eq!(pairs.len(), N_FEATURES);
        assert_eq!(pairs[0].0, "Age");
        assert_eq!(pairs[10].0, "ST_Slope");
    }
}
