use std::fmt;

/// Free-text numeric inputs, in validation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericField {
    Age,
    RestingBloodPressure,
    Cholesterol,
    MaxHeartRate,
    StDepression,
}

impl NumericField {
    pub const ALL: [NumericField; 5] = [
        NumericField::Age,
        NumericField::RestingBloodPressure,
        NumericField::Cholesterol,
        NumericField::MaxHeartRate,
        NumericField::StDepression,
    ];

    /// JSON key sent to the server
    pub fn key(self) -> &'static str {
        match self {
            NumericField::Age => "age",
            NumericField::RestingBloodPressure => "trestbps",
            NumericField::Cholesterol => "chol",
            NumericField::MaxHeartRate => "thalach",
            NumericField::StDepression => "oldpeak",
        }
    }

    /// Name used in user-facing messages
    pub fn display_name(self) -> &'static str {
        match self {
            NumericField::Age => "Age",
            other => other.key(),
        }
    }

    /// Form caption
    pub fn caption(self) -> &'static str {
        match self {
            NumericField::Age => "Age (years)",
            NumericField::RestingBloodPressure => "Resting blood pressure (mm Hg)",
            NumericField::Cholesterol => "Serum cholesterol (mg/dl)",
            NumericField::MaxHeartRate => "Max heart rate achieved",
            NumericField::StDepression => "ST depression (oldpeak)",
        }
    }

    pub fn is_integer(self) -> bool {
        !matches!(self, NumericField::StDepression)
    }

    /// Expected input shape, for malformed-input messages
    pub fn value_kind(self) -> &'static str {
        if self.is_integer() { "whole number" } else { "number" }
    }

    pub fn range(self) -> FieldRange {
        match self {
            NumericField::Age => FieldRange::new(29.0, 77.0),
            NumericField::RestingBloodPressure => FieldRange::new(94.0, 200.0),
            NumericField::Cholesterol => FieldRange::new(126.0, 564.0),
            NumericField::MaxHeartRate => FieldRange::new(71.0, 202.0),
            NumericField::StDepression => FieldRange::new(0.0, 6.2),
        }
    }

    /// Bounds as shown in messages: "29-77" for integers, "0.0-6.2" for oldpeak
    pub fn bounds_text(self) -> String {
        let range = self.range();
        if self.is_integer() {
            format!("{}-{}", range.min as i64, range.max as i64)
        } else {
            format!("{:.1}-{:.1}", range.min, range.max)
        }
    }
}

impl fmt::Display for NumericField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Inclusive physiological range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldRange {
    pub min: f64,
    pub max: f64,
}

impl FieldRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// NaN and infinities never fall inside a range.
    pub fn contains(&self, value: f64) -> bool {
        (self.min..=self.max).contains(&value)
    }
}
