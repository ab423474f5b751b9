//! Renders the BI application settings as JSON.
//!
//! ```bash
//! edrak-settings --env-file .env --pretty > superset_config.json
//! ```
//!
//! Exits 1 when required configuration is missing or invalid.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::{error, info};

use edrak_core::env::EnvSnapshot;
use edrak_core::tracing::init_tracing;
use edrak_settings::Settings;

#[derive(Parser)]
#[command(about = "Render Edrak Analytics settings as JSON")]
struct Args {
    /// Dotenv file merged under the process environment
    #[arg(long)]
    env_file: Option<PathBuf>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,
}

fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();

    let mut env = EnvSnapshot::from_process();
    let built = match &args.env_file {
        Some(path) => env.merge_env_file(path),
        None => Ok(()),
    }
    .and_then(|()| Settings::from_snapshot(&env));

    let settings = match built {
        Ok(settings) => settings,
        Err(e) => {
            error!(kind = e.kind(), "failed to build settings");
            eprintln!("ERROR: {e}");
            std::process::exit(1);
        }
    };

    let json = if args.pretty {
        serde_json::to_string_pretty(&settings)?
    } else {
        serde_json::to_string(&settings)?
    };
    println!("{json}");
    info!(flags = settings.feature_flags.len(), "rendered settings");
    Ok(())
}
