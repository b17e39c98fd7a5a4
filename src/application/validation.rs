use crate::domain::clinical::{
    ChestPain, ExerciseAngina, FastingBloodSugar, FeatureRecord, MajorVessels, NumericField,
    RestEcg, SexChoice, StSlope, Thalassemia,
};
use crate::domain::errors::ValidationError;
use std::num::IntErrorKind;
use std::str::FromStr;
use tracing::debug;

/// Form contents exactly as the user left them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawClinicalInput {
    pub age: String,
    pub trestbps: String,
    pub chol: String,
    pub thalach: String,
    pub oldpeak: String,
    pub sex: Option<SexChoice>,
    pub cp: ChestPain,
    pub fbs: FastingBloodSugar,
    pub restecg: RestEcg,
    pub exang: ExerciseAngina,
    pub slope: StSlope,
    pub ca: MajorVessels,
    pub thal: Thalassemia,
}

impl RawClinicalInput {
    pub fn numeric(&self, field: NumericField) -> &str {
        match field {
            NumericField::Age => &self.age,
            NumericField::RestingBloodPressure => &self.trestbps,
            NumericField::Cholesterol => &self.chol,
            NumericField::MaxHeartRate => &self.thalach,
            NumericField::StDepression => &self.oldpeak,
        }
    }

    pub fn numeric_mut(&mut self, field: NumericField) -> &mut String {
        match field {
            NumericField::Age => &mut self.age,
            NumericField::RestingBloodPressure => &mut self.trestbps,
            NumericField::Cholesterol => &mut self.chol,
            NumericField::MaxHeartRate => &mut self.thalach,
            NumericField::StDepression => &mut self.oldpeak,
        }
    }
}

/// Turns raw form input into a [`FeatureRecord`], stopping at the first problem.
///
/// Order of checks:
/// 1. every numeric field is non-blank after trimming
/// 2. age, trestbps, chol, thalach, oldpeak are each parsed and range-checked in turn
/// 3. sex resolves to 0 when nothing is chosen
///
/// Categorical selections are closed enums and need no checking.
pub fn validate_input(input: &RawClinicalInput) -> Result<FeatureRecord, ValidationError> {
    let result = build_record(input);
    if let Err(err) = &result {
        debug!("Input rejected on {}: {}", err.field().key(), err);
    }
    result
}

fn build_record(input: &RawClinicalInput) -> Result<FeatureRecord, ValidationError> {
    if let Some(field) = NumericField::ALL
        .into_iter()
        .find(|field| input.numeric(*field).trim().is_empty())
    {
        return Err(ValidationError::MissingNumericField { field });
    }

    let age = parse_integer(input, NumericField::Age)?;
    let trestbps = parse_integer(input, NumericField::RestingBloodPressure)?;
    let chol = parse_integer(input, NumericField::Cholesterol)?;
    let thalach = parse_integer(input, NumericField::MaxHeartRate)?;
    let oldpeak = parse_decimal(input, NumericField::StDepression)?;

    Ok(FeatureRecord {
        age,
        trestbps,
        chol,
        thalach,
        oldpeak,
        sex: SexChoice::code(input.sex),
        cp: input.cp,
        fbs: input.fbs,
        restecg: input.restecg,
        exang: input.exang,
        slope: input.slope,
        ca: input.ca,
        thal: input.thal,
    })
}

fn parse_integer(input: &RawClinicalInput, field: NumericField) -> Result<i32, ValidationError> {
    let text = input.numeric(field).trim();
    let value = i32::from_str(text).map_err(|e| match e.kind() {
        // Digits that overflow are still a whole number, just far outside the bounds.
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => ValidationError::OutOfRange {
            field,
            input: text.to_string(),
        },
        _ => ValidationError::MalformedNumber {
            field,
            input: text.to_string(),
        },
    })?;
    check_range(field, text, f64::from(value))?;
    Ok(value)
}

fn parse_decimal(input: &RawClinicalInput, field: NumericField) -> Result<f64, ValidationError> {
    let text = input.numeric(field).trim();
    let value = f64::from_str(text).map_err(|_| ValidationError::MalformedNumber {
        field,
        input: text.to_string(),
    })?;
    check_range(field, text, value)?;
    Ok(value)
}

fn check_range(field: NumericField, text: &str, value: f64) -> Result<(), ValidationError> {
    if field.range().contains(value) {
        Ok(())
    } else {
        Err(ValidationError::OutOfRange {
            field,
            input: text.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_input() -> RawClinicalInput {
        RawClinicalInput {
            age: "45".to_string(),
            trestbps: "130".to_string(),
            chol: "250".to_string(),
            thalach: "150".to_string(),
            oldpeak: "1.0".to_string(),
            sex: Some(SexChoice::Male),
            cp: ChestPain::NonAnginalPain,
            fbs: FastingBloodSugar::False,
            restecg: RestEcg::StTAbnormality,
            exang: ExerciseAngina::No,
            slope: StSlope::Flat,
            ca: MajorVessels::Zero,
            thal: Thalassemia::ReversibleDefect,
        }
    }

    fn with_field(field: NumericField, value: &str) -> RawClinicalInput {
        let mut input = valid_input();
        *input.numeric_mut(field) = value.to_string();
        input
    }

    #[test]
    fn test_valid_input_builds_record() {
        let record = validate_input(&valid_input()).unwrap();
        assert_eq!(record.age, 45);
        assert_eq!(record.trestbps, 130);
        assert_eq!(record.chol, 250);
        assert_eq!(record.thalach, 150);
        assert!((record.oldpeak - 1.0).abs() < f64::EPSILON);
        assert_eq!(record.sex, 1);
        assert_eq!(record.cp, ChestPain::NonAnginalPain);
        assert_eq!(record.thal, Thalassemia::ReversibleDefect);
    }

    #[test]
    fn test_whitespace_is_trimmed() {
        let input = with_field(NumericField::Age, "  45 \t");
        assert_eq!(validate_input(&input).unwrap().age, 45);
    }

    #[test]
    fn test_blank_field_reports_missing() {
        for field in NumericField::ALL {
            let input = with_field(field, "   ");
            let err = validate_input(&input).unwrap_err();
            assert_eq!(err.to_string(), "Please fill all numeric fields.");
            assert_eq!(err.field(), field);
        }
    }

    #[test]
    fn test_missing_check_runs_before_parsing() {
        let mut input = with_field(NumericField::Age, "abc");
        input.oldpeak = String::new();
        let err = validate_input(&input).unwrap_err();
        assert!(matches!(err, ValidationError::MissingNumericField { .. }));
    }

    #[test]
    fn test_overflowing_integer_is_out_of_range() {
        for text in ["99999999999", "-99999999999"] {
            let err = validate_input(&with_field(NumericField::Age, text)).unwrap_err();
            assert_eq!(
                err,
                ValidationError::OutOfRange {
                    field: NumericField::Age,
                    input: text.to_string()
                }
            );
            assert_eq!(err.to_string(), "Age must be 29-77.");
        }

        let err = validate_input(&with_field(NumericField::Cholesterol, "12345678901234567890"))
            .unwrap_err();
        assert_eq!(err.to_string(), "chol must be 126-564.");
    }

    #[test]
    fn test_bounds_are_inclusive() {
        let cases = [
            (NumericField::Age, "29", "77", "28", "78"),
            (NumericField::RestingBloodPressure, "94", "200", "93", "201"),
            (NumericField::Cholesterol, "126", "564", "125", "565"),
            (NumericField::MaxHeartRate, "71", "202", "70", "203"),
            (NumericField::StDepression, "0.0", "6.2", "-0.1", "6.3"),
        ];

        for (field, low, high, below, above) in cases {
            assert!(validate_input(&with_field(field, low)).is_ok(), "{field} {low}");
            assert!(validate_input(&with_field(field, high)).is_ok(), "{field} {high}");

            for bad in [below, above] {
                let err = validate_input(&with_field(field, bad)).unwrap_err();
                assert_eq!(
                    err,
                    ValidationError::OutOfRange {
                        field,
                        input: bad.to_string()
                    }
                );
            }
        }
    }

    #[test]
    fn test_age_message() {
        let err = validate_input(&with_field(NumericField::Age, "78")).unwrap_err();
        assert_eq!(err.to_string(), "Age must be 29-77.");
    }

    #[test]
    fn test_fail_fast_reports_first_field() {
        let mut input = with_field(NumericField::Age, "10");
        input.trestbps = "500".to_string();
        input.oldpeak = "9".to_string();
        let err = validate_input(&input).unwrap_err();
        assert_eq!(err.to_string(), "Age must be 29-77.");

        let mut input = with_field(NumericField::Cholesterol, "1000");
        input.thalach = "1".to_string();
        let err = validate_input(&input).unwrap_err();
        assert_eq!(err.to_string(), "chol must be 126-564.");
    }

    #[test]
    fn test_malformed_numbers_are_validation_errors() {
        let err = validate_input(&with_field(NumericField::Age, "forty")).unwrap_err();
        assert_eq!(err.to_string(), "Age must be a whole number.");

        let err = validate_input(&with_field(NumericField::MaxHeartRate, "150.5")).unwrap_err();
        assert_eq!(err.to_string(), "thalach must be a whole number.");

        let err = validate_input(&with_field(NumericField::StDepression, "1,5")).unwrap_err();
        assert_eq!(err.to_string(), "oldpeak must be a number.");
    }

    #[test]
    fn test_range_violation_before_later_malformed_field() {
        let mut input = with_field(NumericField::Age, "90");
        input.chol = "lots".to_string();
        let err = validate_input(&input).unwrap_err();
        assert_eq!(err.to_string(), "Age must be 29-77.");
    }

    #[test]
    fn test_non_finite_oldpeak_is_out_of_range() {
        for text in ["NaN", "inf", "-infinity"] {
            let err = validate_input(&with_field(NumericField::StDepression, text)).unwrap_err();
            assert_eq!(err.to_string(), "oldpeak must be 0.0-6.2.");
        }
    }

    #[test]
    fn test_sex_defaults_to_zero_without_choice() {
        let mut input = valid_input();
        input.sex = None;
        assert_eq!(validate_input(&input).unwrap().sex, 0);

        input.sex = Some(SexChoice::Female);
        assert_eq!(validate_input(&input).unwrap().sex, 0);
    }

    #[test]
    fn test_sex_from_option_label() {
        let mut input = valid_input();
        input.sex = SexChoice::from_label("Male");
        assert_eq!(validate_input(&input).unwrap().sex, 1);
    }
}
