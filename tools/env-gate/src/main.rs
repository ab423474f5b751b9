//! Environment gate — run before starting the BI application.
//!
//! # Usage
//!
//! ```bash
//! # Check the process environment
//! env-gate
//!
//! # Also read a dotenv file (process variables win)
//! env-gate --env-file .env
//! ```
//!
//! Exits 0 when every required variable is set, exits 1 otherwise.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{error, info, warn};

use edrak_core::env::EnvSnapshot;
use edrak_core::tracing::init_tracing;
use env_gate::gate::{self, REQUIRED_VARIABLES};
use env_gate::reporter;

#[derive(Parser)]
#[command(about = "Verify required environment variables before deployment")]
struct Args {
    /// Dotenv file merged under the process environment
    #[arg(long)]
    env_file: Option<PathBuf>,

    /// Replace the default required list (repeatable)
    #[arg(long = "require", value_name = "NAME")]
    require: Vec<String>,
}

fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();

    let mut env = EnvSnapshot::from_process();
    if let Some(path) = &args.env_file {
        env.merge_env_file(path)
            .inspect_err(|e| error!(kind = e.kind(), "env file rejected"))
            .with_context(|| format!("cannot check environment with {}", path.display()))?;
    }

    let required: Vec<&str> = if args.require.is_empty() {
        REQUIRED_VARIABLES.to_vec()
    } else {
        args.require.iter().map(String::as_str).collect()
    };

    let result = gate::check(&required, &env);
    println!("{}", reporter::render(&result));

    if result.passed() {
        info!(checked = required.len(), "environment gate passed");
        Ok(())
    } else {
        warn!(missing = result.missing().len(), "environment gate failed");
        std::process::exit(result.exit_code());
    }
}
