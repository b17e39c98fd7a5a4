//! Closed option sets for the categorical clinical inputs.
//!
//! Every selection is a position-indexed enum: the discriminant is the code
//! sent to the prediction server and matches the option's place in the
//! dropdown.

use serde::{Serialize, Serializer};
use std::fmt;

/// Common surface of the categorical selections, used by form widgets and the CLI.
pub trait Categorical: Copy + Sized + 'static {
    /// JSON key and short field name
    const FIELD: &'static str;
    /// Human-readable caption for form rendering
    const CAPTION: &'static str;
    /// All options in dropdown order
    const OPTIONS: &'static [Self];

    fn index(self) -> u8;
    fn label(self) -> &'static str;

    fn from_index(index: usize) -> Option<Self> {
        Self::OPTIONS.get(index).copied()
    }
}

macro_rules! categorical {
    (
        $(#[$meta:meta])*
        $name:ident, field = $field:literal, caption = $caption:literal {
            $($variant:ident = $idx:literal => $label:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        pub enum $name {
            #[default]
            $($variant = $idx),+
        }

        impl Categorical for $name {
            const FIELD: &'static str = $field;
            const CAPTION: &'static str = $caption;
            const OPTIONS: &'static [Self] = &[$($name::$variant),+];

            fn index(self) -> u8 {
                self as u8
            }

            fn label(self) -> &'static str {
                match self {
                    $($name::$variant => $label),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_u8(self.index())
            }
        }
    };
}

// `#[default]` must sit on the first variant only, so each set lists index 0 first.
categorical! {
    /// Chest pain type (`cp`)
    ChestPain, field = "cp", caption = "Chest pain type" {
        TypicalAngina = 0 => "0: Typical angina",
        AtypicalAngina = 1 => "1: Atypical angina",
        NonAnginalPain = 2 => "2: Non-anginal pain",
        Asymptomatic = 3 => "3: Asymptomatic",
    }
}

categorical! {
    /// Fasting blood sugar above 120 mg/dl (`fbs`)
    FastingBloodSugar, field = "fbs", caption = "Fasting blood sugar > 120 mg/dl" {
        False = 0 => "0: False",
        True = 1 => "1: True",
    }
}

categorical! {
    /// Resting electrocardiographic result (`restecg`)
    RestEcg, field = "restecg", caption = "Resting ECG" {
        Normal = 0 => "0: Normal",
        StTAbnormality = 1 => "1: ST-T abnormality",
        LvHypertrophy = 2 => "2: LV hypertrophy",
    }
}

categorical! {
    /// Exercise-induced angina (`exang`)
    ExerciseAngina, field = "exang", caption = "Exercise induced angina" {
        No = 0 => "0: No",
        Yes = 1 => "1: Yes",
    }
}

categorical! {
    /// Slope of the peak exercise ST segment (`slope`)
    StSlope, field = "slope", caption = "ST slope" {
        Upsloping = 0 => "0: Upsloping",
        Flat = 1 => "1: Flat",
        Downsloping = 2 => "2: Downsloping",
    }
}

categorical! {
    /// Number of major vessels colored by fluoroscopy (`ca`)
    MajorVessels, field = "ca", caption = "Major vessels (fluoroscopy)" {
        Zero = 0 => "0",
        One = 1 => "1",
        Two = 2 => "2",
        Three = 3 => "3",
        Four = 4 => "4",
    }
}

categorical! {
    /// Thalassemia (`thal`)
    Thalassemia, field = "thal", caption = "Thalassemia" {
        Normal = 0 => "0: Normal",
        FixedDefect = 1 => "1: Fixed defect",
        ReversibleDefect = 2 => "2: Reversible defect",
        Other = 3 => "3: Other",
    }
}

/// Exclusive sex choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SexChoice {
    Female,
    Male,
}

impl SexChoice {
    pub const ALL: [SexChoice; 2] = [SexChoice::Female, SexChoice::Male];

    pub fn label(self) -> &'static str {
        match self {
            SexChoice::Female => "Female",
            SexChoice::Male => "Male",
        }
    }

    /// Resolves a free-text option label. "female" is tested before "male"
    /// because the latter is a substring of the former.
    pub fn from_label(label: &str) -> Option<Self> {
        let lower = label.trim().to_lowercase();
        if lower.contains("female") {
            Some(SexChoice::Female)
        } else if lower.contains("male") {
            Some(SexChoice::Male)
        } else {
            None
        }
    }

    /// Wire code for an optional choice; no selection falls back to 0.
    pub fn code(choice: Option<SexChoice>) -> u8 {
        match choice {
            Some(SexChoice::Male) => 1,
            Some(SexChoice::Female) | None => 0,
        }
    }
}

impl fmt::Display for SexChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_option_sets_match_wire_ranges() {
        assert_eq!(ChestPain::OPTIONS.len(), 4);
        assert_eq!(FastingBloodSugar::OPTIONS.len(), 2);
        assert_eq!(RestEcg::OPTIONS.len(), 3);
        assert_eq!(ExerciseAngina::OPTIONS.len(), 2);
        assert_eq!(StSlope::OPTIONS.len(), 3);
        assert_eq!(MajorVessels::OPTIONS.len(), 5);
        assert_eq!(Thalassemia::OPTIONS.len(), 4);
    }

    #[test]
    fn test_index_is_dropdown_position() {
        for (pos, option) in Thalassemia::OPTIONS.iter().enumerate() {
            assert_eq!(option.index() as usize, pos);
        }
        assert_eq!(ChestPain::from_index(2), Some(ChestPain::NonAnginalPain));
        assert_eq!(ChestPain::from_index(4), None);
        assert_eq!(MajorVessels::from_index(4), Some(MajorVessels::Four));
    }

    #[test]
    fn test_labels_carry_code_prefix() {
        assert_eq!(ChestPain::Asymptomatic.label(), "3: Asymptomatic");
        assert_eq!(MajorVessels::Two.to_string(), "2");
        assert_eq!(RestEcg::StTAbnormality.label(), "1: ST-T abnormality");
    }

    #[test]
    fn test_sex_from_label() {
        assert_eq!(SexChoice::from_label("Male"), Some(SexChoice::Male));
        assert_eq!(SexChoice::from_label("  MALE (M) "), Some(SexChoice::Male));
        assert_eq!(SexChoice::from_label("Female"), Some(SexChoice::Female));
        assert_eq!(SexChoice::from_label("FEMALE"), Some(SexChoice::Female));
        assert_eq!(SexChoice::from_label("Other"), None);
    }

    #[test]
    fn test_sex_code_defaults_to_zero() {
        assert_eq!(SexChoice::code(Some(SexChoice::Male)), 1);
        assert_eq!(SexChoice::code(Some(SexChoice::Female)), 0);
        assert_eq!(SexChoice::code(None), 0);
    }
}
