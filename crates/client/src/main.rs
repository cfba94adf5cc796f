//! Bridgeworld client binary.
//!
//! Plays a headless session configured from the environment (see
//! [`bridgeworld_client::ClientConfig::from_env`]) and prints the report.
//!
//! ```bash
//! BRIDGEWORLD_SEED=42 BRIDGEWORLD_CLASS=reaper cargo run -p bridgeworld-client
//! ```

use anyhow::Result;
use bridgeworld_client::{ClientConfig, ReportFormat, logging, run_session};
use bridgeworld_content::{ContentBundle, ContentFactory};

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let config = ClientConfig::from_env()?;
    let _guard = logging::setup_logging(config.session_id.as_deref(), config.log_to_file)?;

    let content = match &config.content_dir {
        Some(dir) => ContentFactory::load_dir(dir)?,
        None => ContentBundle::builtin(),
    };
    let seed = config.seed.unwrap_or_else(rand::random);
    tracing::debug!(?config, seed, "Starting Bridgeworld session");

    let report = run_session(&config, &content, seed)?;
    match config.report {
        ReportFormat::Text => println!("{report}"),
        ReportFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }

    Ok(())
}
