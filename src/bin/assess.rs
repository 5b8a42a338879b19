// Assessment binary entry point
//
// Usage: cargo run --bin assess [intake.json]
// With no argument a built-in sample patient is assessed.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cardiorisk::{report, FeatureVector, ModelBundle, PatientIntake};

fn main() -> Result<()> {
    // Initialize tracing (structured logging)
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cardiorisk=info,warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Configuration from environment variables
    let model_dir = PathBuf::from(
        std::env::var("MODEL_DIR").unwrap_or_else(|_| "models".to_string()),
    );

    tracing::info!("Loading models from {:?}", model_dir);
    let bundle = ModelBundle::load(&model_dir)?;
    tracing::info!(
        "Loaded classifier ({} classes) and cluster model ({} clusters)",
        bundle.classifier.class_priors.len(),
        bundle.clusters.n_clusters()
    );

    // Intake: JSON form document from the first argument, or the sample
    let intake = match std::env::args().nth(1) {
        Some(path) => {
            tracing::info!("Reading intake form: {}", path);
            let contents = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read intake file: {}", path))?;
            serde_json::from_str::<PatientIntake>(&contents)
                .with_context(|| format!("Failed to parse intake file: {}", path))?
        }
        None => {
            tracing::info!("No intake file given, using the built-in sample patient");
            PatientIntake::sample()
        }
    };

    intake
        .validate()
        .context("Intake form failed validation")?;

    let features = FeatureVector::from_intake(&intake);
    let assessment = report::assess(&bundle, &features)?;

    tracing::info!(
        "Verdict: {:?}, probability {:.2}, cluster {:?}",
        assessment.verdict,
        assessment.probability,
        assessment.cluster
    );

    println!("{}", report::generate_report(&features, &assessment));

    Ok(())
}
