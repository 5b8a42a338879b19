//! Patient Intake Form
//!
//! Defines the PatientIntake struct representing the eleven health
//! measurements collected from the user, with the same range constraints as
//! the original form.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::encode::{ChestPainType, ExerciseAngina, RestingEcg, Sex, StSlope};

/// Allowed range for age (years)
pub const AGE_RANGE: (i64, i64) = (1, 120);

/// Allowed range for resting blood pressure (mmHg)
pub const RESTING_BP_RANGE: (i64, i64) = (80, 200);

/// Allowed range for serum cholesterol (mg/dL)
pub const CHOLESTEROL_RANGE: (i64, i64) = (100, 600);

/// Allowed range for maximum heart rate (BPM)
pub const MAX_HR_RANGE: (i64, i64) = (60, 250);

/// Allowed range for oldpeak (ST depression)
pub const OLDPEAK_RANGE: (f64, f64) = (0.0, 6.0);

/// A field value outside its form constraint
#[derive(Debug, Error, PartialEq)]
pub enum IntakeError {
    #[error("{field} = {value} outside allowed range {min}..={max}")]
    OutOfRange {
        field: &'static str,
        value: i64,
        min: i64,
        max: i64,
    },

    #[error("{field} = {value} outside allowed range {min}..={max}")]
    OutOfRangeFloat {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("{field} is not a finite number")]
    NotFinite { field: &'static str },
}

/// One completed intake form.
///
/// Categorical fields deserialize from the dataset spellings ("ATA",
/// "Normal", "Up", ...); unknown labels are rejected by serde. Numeric
/// bounds are checked separately by `validate`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatientIntake {
    /// Age in years
    pub age: u32,

    /// Patient sex
    pub sex: Sex,

    /// Chest pain type
    pub chest_pain_type: ChestPainType,

    /// Resting blood pressure (mmHg)
    pub resting_bp: u32,

    /// Serum cholesterol (mg/dL)
    pub cholesterol: u32,

    /// Fasting blood sugar > 120 mg/dL
    pub fasting_bs: bool,

    /// Resting ECG result
    pub resting_ecg: RestingEcg,

    /// Maximum heart rate achieved (BPM)
    pub max_hr: u32,

    /// Exercise-induced angina
    pub exercise_angina: ExerciseAngina,

    /// ST depression induced by exercise relative to rest
    pub oldpeak: f64,

    /// Slope of the peak exercise ST segment
    pub st_slope: StSlope,
}

impl PatientIntake {
    /// Check all numeric fields against their form constraints.
    ///
    /// Bounds are inclusive on both ends. Returns the first violation found,
    /// in field order.
    pub fn validate(&self) -> Result<(), IntakeError> {
        check_range("age", self.age as i64, AGE_RANGE)?;
        check_range("resting_bp", self.resting_bp as i64, RESTING_BP_RANGE)?;
        check_range("cholesterol", self.cholesterol as i64, CHOLESTEROL_RANGE)?;
        check_range("max_hr", self.max_hr as i64, MAX_HR_RANGE)?;

        if !self.oldpeak.is_finite() {
            return Err(IntakeError::NotFinite { field: "oldpeak" });
        }
        let (min, max) = OLDPEAK_RANGE;
        if self.oldpeak < min || self.oldpeak > max {
            return Err(IntakeError::OutOfRangeFloat {
                field: "oldpeak",
                value: self.oldpeak,
                min,
                max,
            });
        }

        Ok(())
    }

    /// Intake pre-filled with the original form defaults
    pub fn sample() -> Self {
        PatientIntake {
            age: 50,
            sex: Sex::M,
            chest_pain_type: ChestPainType::ATA,
            resting_bp: 120,
            cholesterol: 200,
            fasting_bs: false,
            resting_ecg: RestingEcg::Normal,
            max_hr: 150,
            exercise_angina: ExerciseAngina::N,
            oldpeak: 1.0,
            st_slope: StSlope::Up,
        }
    }
}

fn check_range(field: &'static str, value: i64, range: (i64, i64)) -> Result<(), IntakeError> {
    let (min, max) = range;
    if value < min || value > max {
        return Err(IntakeError::OutOfRange {
            field,
            value,
            min,
            max,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_is_valid() {
        assert_eq!(PatientIntake::sample().validate(), Ok(()));
    }

    #[test]
    fn test_boundaries_inclusive() {
        let mut intake = PatientIntake::sample();

        intake.age = 1;
        assert!(intake.validate().is_ok());
        intake.age = 120;
        assert!(intake.validate().is_ok());

        intake.oldpeak = 0.0;
        assert!(intake.validate().is_ok());
        intake.oldpeak = 6.0;
        assert!(intake.validate().is_ok());
    }

    #[test]
    fn test_out_of_range_reports_field() {
        let mut intake = PatientIntake::sample();
        intake.cholesterol = 700;

        let err = intake.validate().unwrap_err();
        assert_eq!(
            err,
            IntakeError::OutOfRange {
                field: "cholesterol",
                value: 700,
                min: 100,
                max: 600,
            }
        );
        assert!(err.to_string().contains("cholesterol"));
    }

    #[test]
    fn test_nan_oldpeak_rejected() {
        let mut intake = PatientIntake::sample();
        intake.oldpeak = f64::NAN;
        assert_eq!(
            intake.validate(),
            Err(IntakeError::NotFinite { field: "oldpeak" })
        );
    }

    #[test]
    fn test_deserialize_form_document() {
        let json = r#"{
            "age": 61,
            "sex": "M",
            "chest_pain_type": "ASY",
            "resting_bp": 148,
            "cholesterol": 203,
            "fasting_bs": true,
            "resting_ecg": "Normal",
            "max_hr": 161,
            "exercise_angina": "N",
            "oldpeak": 0.0,
            "st_slope": "Up"
        }"#;

        let intake: PatientIntake = serde_json::from_str(json).unwrap();
        assert_eq!(intake.age, 61);
        assert_eq!(intake.chest_pain_type, ChestPainType::ASY);
        assert!(intake.fasting_bs);
        assert!(intake.validate().is_ok());
    }
}
