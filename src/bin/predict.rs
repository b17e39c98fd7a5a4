//! heartcheck CLI - one prediction from the command line
//!
//! Runs the same validation and request as the desktop screen, without a UI.
//!
//! # Usage
//! ```sh
//! cargo run --bin predict -- --age 45 --trestbps 130 --chol 250 --thalach 150 \
//!     --oldpeak 1.0 --sex male --cp 2 --restecg 1 --slope 1 --thal 2
//! ```
//!
//! # Environment Variables
//! - `PREDICTION_URL` - Prediction endpoint (default: http://127.0.0.1:5000/predict)
//! - `PREDICTION_TIMEOUT_SECS` - Optional request timeout

use anyhow::Result;
use clap::Parser;
use heartcheck::application::predict_action::PredictAction;
use heartcheck::application::validation::RawClinicalInput;
use heartcheck::config::Config;
use heartcheck::domain::clinical::{
    Categorical, ChestPain, ExerciseAngina, FastingBloodSugar, MajorVessels, RestEcg, SexChoice,
    StSlope, Thalassemia,
};
use heartcheck::infrastructure::HttpPredictionClient;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{Level, info};
use tracing_subscriber::prelude::*;

#[derive(Parser)]
#[command(author, version, about = "Heart disease prediction client", long_about = None)]
struct Cli {
    /// Age in years (29-77)
    #[arg(long)]
    age: String,

    /// Resting blood pressure in mm Hg (94-200)
    #[arg(long)]
    trestbps: String,

    /// Serum cholesterol in mg/dl (126-564)
    #[arg(long)]
    chol: String,

    /// Maximum heart rate achieved (71-202)
    #[arg(long)]
    thalach: String,

    /// ST depression induced by exercise (0.0-6.2)
    #[arg(long)]
    oldpeak: String,

    /// Option label for sex, e.g. "male" or "female"; omitted means 0
    #[arg(long)]
    sex: Option<String>,

    /// Chest pain type index (0-3)
    #[arg(long, default_value_t = 0)]
    cp: usize,

    /// Fasting blood sugar > 120 mg/dl index (0-1)
    #[arg(long, default_value_t = 0)]
    fbs: usize,

    /// Resting ECG index (0-2)
    #[arg(long, default_value_t = 0)]
    restecg: usize,

    /// Exercise induced angina index (0-1)
    #[arg(long, default_value_t = 0)]
    exang: usize,

    /// ST slope index (0-2)
    #[arg(long, default_value_t = 0)]
    slope: usize,

    /// Major vessels index (0-4)
    #[arg(long, default_value_t = 0)]
    ca: usize,

    /// Thalassemia index (0-3)
    #[arg(long, default_value_t = 0)]
    thal: usize,

    /// Override PREDICTION_URL
    #[arg(long)]
    url: Option<String>,
}

impl Cli {
    fn to_input(&self) -> Result<RawClinicalInput> {
        Ok(RawClinicalInput {
            age: self.age.clone(),
            trestbps: self.trestbps.clone(),
            chol: self.chol.clone(),
            thalach: self.thalach.clone(),
            oldpeak: self.oldpeak.clone(),
            sex: self.sex.as_deref().and_then(SexChoice::from_label),
            cp: option::<ChestPain>(self.cp)?,
            fbs: option::<FastingBloodSugar>(self.fbs)?,
            restecg: option::<RestEcg>(self.restecg)?,
            exang: option::<ExerciseAngina>(self.exang)?,
            slope: option::<StSlope>(self.slope)?,
            ca: option::<MajorVessels>(self.ca)?,
            thal: option::<Thalassemia>(self.thal)?,
        })
    }
}

/// Selections are closed sets; an index outside one is a usage error, not a validation message.
fn option<T: Categorical>(index: usize) -> Result<T> {
    T::from_index(index).ok_or_else(|| {
        let labels: Vec<&str> = T::OPTIONS.iter().map(|o| o.label()).collect();
        anyhow::anyhow!(
            "Invalid --{} index {}. Options: {}",
            T::FIELD,
            index,
            labels.join(", ")
        )
    })
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    dotenvy::dotenv().ok();

    let stdout_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .compact()
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive(Level::WARN.into()))
        .with(stdout_layer)
        .init();

    let cli = Cli::parse();
    let input = cli.to_input()?;

    let mut config = Config::from_env()?;
    if let Some(url) = &cli.url {
        config.client = config.client.with_endpoint(url)?;
    }
    let service = HttpPredictionClient::new(&config.client);
    info!("Prediction endpoint: {}", service.endpoint());

    let action = PredictAction::new(Arc::new(service));

    match action.run(&input).await {
        Ok(prediction) => {
            println!("{}", prediction.result_text());
            println!("{}", prediction.probability_text());
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            eprintln!("[{}] {}", err.kind(), err);
            Ok(ExitCode::FAILURE)
        }
    }
}
