//! esper-cli - Clone Esper custom roles across tenants.
//!
//! Responsibilities:
//! - Parse command-line arguments and environment variables.
//! - Load the tenants file and drive the clone/list/export commands.
//! - Translate errors into structured exit codes.
//!
//! Does NOT handle:
//! - REST API details or reconciliation logic (see `crates/client`).
//!
//! Invariants:
//! - `load_dotenv()` is called BEFORE CLI parsing so `.env` can provide
//!   env-backed argument defaults.
//! - `sample-config` requires no tenants file.

mod args;
mod commands;
mod error;

use std::time::Duration;

use args::{Cli, Commands};
use clap::Parser;
use error::{ExitCode, ExitCodeExt};
use tracing_subscriber::EnvFilter;

use esper_config::constants::DEFAULT_TIMEOUT_SECS;

#[tokio::main]
async fn main() {
    esper_config::load_dotenv();

    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("esper_cli=debug,esper_client=debug,esper_config=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let exit_code = match run(cli).await {
        Ok(()) => ExitCode::Success,
        Err(e) => {
            eprintln!("{:#}", e);
            e.exit_code()
        }
    };

    std::process::exit(exit_code.as_i32());
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let timeout = Duration::from_secs(cli.timeout.unwrap_or(DEFAULT_TIMEOUT_SECS));

    match cli.command {
        Commands::SampleConfig => {
            commands::sample_config::run();
            Ok(())
        }
        Commands::Clone {
            source,
            role,
            targets,
            all_targets,
            dry_run,
        } => {
            let tenants = esper_config::load_tenants(&cli.config)?;
            commands::clone::run(
                &tenants,
                &cli.config,
                &source,
                &role,
                &targets,
                all_targets,
                dry_run,
                timeout,
            )
            .await
        }
        Commands::ListRoles { source } => {
            let tenants = esper_config::load_tenants(&cli.config)?;
            commands::list_roles::run(&tenants, &cli.config, &source, timeout).await
        }
        Commands::Export {
            source,
            role,
            output,
        } => {
            let tenants = esper_config::load_tenants(&cli.config)?;
            commands::export::run(&tenants, &cli.config, &source, &role, &output, timeout).await
        }
    }
}
