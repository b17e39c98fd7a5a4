use rust_decimal::{Decimal, RoundingStrategy};
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// Classification returned by the model server
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagnosisClass {
    NoHeartDisease,
    HeartDisease,
}

impl DiagnosisClass {
    /// Coerces the raw `prediction` number the way the server's integer
    /// class is read back: truncate toward zero, then only 1 is positive.
    pub fn from_raw(prediction: f64) -> Self {
        if prediction.is_finite() && prediction.trunc() == 1.0 {
            DiagnosisClass::HeartDisease
        } else {
            DiagnosisClass::NoHeartDisease
        }
    }

    pub fn class_code(self) -> u8 {
        match self {
            DiagnosisClass::NoHeartDisease => 0,
            DiagnosisClass::HeartDisease => 1,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DiagnosisClass::NoHeartDisease => "NO HEART DISEASE",
            DiagnosisClass::HeartDisease => "HEART DISEASE",
        }
    }
}

impl fmt::Display for DiagnosisClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Body of a successful `/predict` reply
#[derive(Debug, Clone, Deserialize)]
pub struct PredictionResponse {
    pub prediction: f64,
    pub probability: f64,
}

/// Successful outcome of one prediction request
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Prediction {
    pub class: DiagnosisClass,
    /// Probability of the positive class, whatever `class` says
    pub probability: f64,
}

impl Prediction {
    pub fn new(class: DiagnosisClass, probability: f64) -> Self {
        Self { class, probability }
    }

    pub fn result_text(&self) -> String {
        format!(
            "Model predicts: {} (class={})",
            self.class.label(),
            self.class.class_code()
        )
    }

    /// The caption differs by class; the number is always P(disease).
    pub fn probability_text(&self) -> String {
        let value = format_probability(self.probability);
        match self.class {
            DiagnosisClass::HeartDisease => format!("Probability: {}", value),
            DiagnosisClass::NoHeartDisease => {
                format!("Probability of heart disease: {}", value)
            }
        }
    }
}

impl From<PredictionResponse> for Prediction {
    fn from(response: PredictionResponse) -> Self {
        Self::new(
            DiagnosisClass::from_raw(response.prediction),
            response.probability,
        )
    }
}

/// Two decimals, ties rounded away from zero.
///
/// Goes through the shortest decimal form of the float so that 0.145 rounds
/// to 0.15 rather than following the binary expansion below the tie.
pub fn format_probability(probability: f64) -> String {
    match Decimal::from_str(&probability.to_string()) {
        Ok(value) => {
            let mut rounded =
                value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
            rounded.rescale(2);
            rounded.to_string()
        }
        Err(_) => format!("{:.2}", probability),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_probability_two_decimals() {
        assert_eq!(format_probability(0.5), "0.50");
        assert_eq!(format_probability(0.999), "1.00");
        assert_eq!(format_probability(0.82), "0.82");
        assert_eq!(format_probability(0.0), "0.00");
        assert_eq!(format_probability(1.0), "1.00");
    }

    #[test]
    fn test_format_probability_half_up() {
        assert_eq!(format_probability(0.125), "0.13");
        assert_eq!(format_probability(0.145), "0.15");
        assert_eq!(format_probability(0.005), "0.01");
        assert_eq!(format_probability(0.1234), "0.12");
    }

    #[test]
    fn test_class_coercion() {
        assert_eq!(DiagnosisClass::from_raw(1.0), DiagnosisClass::HeartDisease);
        assert_eq!(DiagnosisClass::from_raw(0.0), DiagnosisClass::NoHeartDisease);
        assert_eq!(DiagnosisClass::from_raw(2.0), DiagnosisClass::NoHeartDisease);
        assert_eq!(DiagnosisClass::from_raw(-1.0), DiagnosisClass::NoHeartDisease);
        assert_eq!(DiagnosisClass::from_raw(1.7), DiagnosisClass::HeartDisease);
        assert_eq!(DiagnosisClass::from_raw(0.9), DiagnosisClass::NoHeartDisease);
    }

    #[test]
    fn test_disease_label_ignores_probability() {
        let prediction = Prediction::new(DiagnosisClass::HeartDisease, 0.03);
        assert_eq!(prediction.result_text(), "Model predicts: HEART DISEASE (class=1)");
        assert_eq!(prediction.probability_text(), "Probability: 0.03");
    }

    #[test]
    fn test_no_disease_caption() {
        let prediction = Prediction::new(DiagnosisClass::NoHeartDisease, 0.12);
        assert_eq!(
            prediction.result_text(),
            "Model predicts: NO HEART DISEASE (class=0)"
        );
        assert_eq!(
            prediction.probability_text(),
            "Probability of heart disease: 0.12"
        );
    }
}
