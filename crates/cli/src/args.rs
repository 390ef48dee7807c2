//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Parse command-line arguments and environment variables.
//!
//! Non-responsibilities:
//! - Does not execute commands (see the `commands` modules).
//! - Does not load the tenants file (see `main`).

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use esper_config::constants::DEFAULT_CONFIG_PATH;

#[derive(Parser)]
#[command(name = "esper-cli")]
#[command(about = "Clone Esper custom roles across tenants", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  esper-cli clone --source acme-master --role 'Field Tech' --targets acme-region-east,acme-region-west\n  esper-cli clone --source acme-master --role 'Field Tech' --all-targets --dry-run\n  esper-cli list-roles --source acme-master\n  esper-cli export --source acme-master --role 'Field Tech' --output field-tech.json\n  esper-cli sample-config > tenants.json\n"
)]
pub struct Cli {
    /// Path to the tenants configuration file
    #[arg(
        short,
        long,
        global = true,
        env = "ESPER_CONFIG_PATH",
        default_value = DEFAULT_CONFIG_PATH,
        value_name = "FILE"
    )]
    pub config: PathBuf,

    /// HTTP request timeout in seconds
    #[arg(long, global = true, env = "ESPER_TIMEOUT")]
    pub timeout: Option<u64>,

    /// Show detailed API call logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Clone a custom role from a source tenant to target tenants
    Clone {
        /// Friendly name of the source tenant (from the tenants file)
        #[arg(short, long)]
        source: String,

        /// Name of the custom role to clone
        #[arg(short, long)]
        role: String,

        /// Comma-separated list of target tenant names
        #[arg(short, long, value_delimiter = ',', conflicts_with = "all_targets")]
        targets: Vec<String>,

        /// Clone to every other tenant in the tenants file
        #[arg(long)]
        all_targets: bool,

        /// Preview decisions without making any changes
        #[arg(long)]
        dry_run: bool,
    },

    /// List the custom roles in a tenant
    ListRoles {
        /// Friendly name of the tenant (from the tenants file)
        #[arg(short, long)]
        source: String,
    },

    /// Export a fetched role definition to a JSON file
    Export {
        /// Friendly name of the source tenant (from the tenants file)
        #[arg(short, long)]
        source: String,

        /// Name of the custom role to export
        #[arg(short, long)]
        role: String,

        /// Output file path
        #[arg(short, long, value_name = "FILE")]
        output: PathBuf,
    },

    /// Print a sample tenants file and exit
    SampleConfig,
}
