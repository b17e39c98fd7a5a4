use super::categorical::{
    ChestPain, ExerciseAngina, FastingBloodSugar, MajorVessels, RestEcg, StSlope, Thalassemia,
};
use serde::Serialize;

/// Validated clinical payload for one prediction request.
///
/// Field order matches the wire layout. Only `validate_input` builds one, so
/// every value is already inside its physiological range.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeatureRecord {
    pub age: i32,
    pub trestbps: i32,
    pub chol: i32,
    pub thalach: i32,
    pub oldpeak: f64,
    pub sex: u8,
    pub cp: ChestPain,
    pub fbs: FastingBloodSugar,
    pub restecg: RestEcg,
    pub exang: ExerciseAngina,
    pub slope: StSlope,
    pub ca: MajorVessels,
    pub thal: Thalassemia,
}

impl FeatureRecord {
    /// Keys of the serialized object, in wire order
    pub const KEYS: [&'static str; 13] = [
        "age", "trestbps", "chol", "thalach", "oldpeak", "sex", "cp", "fbs", "restecg", "exang",
        "slope", "ca", "thal",
    ];

    pub fn to_json(&self) -> serde_json::Result<Vec<u8>> {
        serde_json::to_vec(self)
    }
}
