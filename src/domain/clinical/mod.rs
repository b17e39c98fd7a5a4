pub mod categorical;
pub mod feature_record;
pub mod numeric;

pub use categorical::{
    Categorical, ChestPain, ExerciseAngina, FastingBloodSugar, MajorVessels, RestEcg, SexChoice,
    StSlope, Thalassemia,
};
pub use feature_record::FeatureRecord;
pub use numeric::{FieldRange, NumericField};
