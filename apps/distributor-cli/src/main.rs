use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;
mod config;
mod error;

use error::CliResult;

#[derive(Parser)]
#[command(name = "distributor")]
#[command(about = "Merkle distributor CLI - compile eligibility sets and gate claims on proofs")]
#[command(version)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace). RUST_LOG wins.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a deterministic eligibility set
    GenerateFixtures {
        /// Number of identities to generate
        #[arg(short, long)]
        count: usize,

        /// Seed for deterministic generation
        #[arg(short, long, default_value = "42")]
        seed: u64,

        /// Output eligibility CSV
        #[arg(short, long, default_value = "eligibility.csv")]
        output: PathBuf,
    },

    /// Compile a distribution (root + per-identity proofs) from its config
    Compile {
        /// Distribution configuration file (YAML)
        #[arg(short, long)]
        config: PathBuf,

        /// Output distribution file
        #[arg(short, long, default_value = "distribution.json")]
        output: PathBuf,

        /// Also write per-identity proofs as CSV
        #[arg(long)]
        proofs_csv: Option<PathBuf>,
    },

    /// Print the proof for an identity
    Proof {
        /// Compiled distribution file
        #[arg(short, long, default_value = "distribution.json")]
        distribution: PathBuf,

        /// Identity (hex)
        #[arg(short, long)]
        identity: String,
    },

    /// Verify a proof against a root
    Verify {
        /// Expected root (hex)
        #[arg(short, long)]
        root: String,

        /// Identity (hex)
        #[arg(short, long)]
        identity: String,

        /// Proof elements (hex), bottom to top; repeat the flag per element
        #[arg(short, long)]
        proof: Vec<String>,
    },

    /// Claim for an identity against the persisted claim state
    Claim {
        /// Compiled distribution file
        #[arg(short, long, default_value = "distribution.json")]
        distribution: PathBuf,

        /// Claim state file
        #[arg(short, long, default_value = "claims.json")]
        state: PathBuf,

        /// Identity (hex)
        #[arg(short, long)]
        identity: String,

        /// Proof elements (hex); defaults to the proof in the distribution
        #[arg(short, long)]
        proof: Vec<String>,
    },

    /// Check membership and claimed status for an identity
    CheckEligibility {
        /// Compiled distribution file
        #[arg(short, long, default_value = "distribution.json")]
        distribution: PathBuf,

        /// Claim state file
        #[arg(short, long, default_value = "claims.json")]
        state: PathBuf,

        /// Identity (hex)
        #[arg(short, long)]
        identity: String,
    },
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();
}

fn main() -> CliResult<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::GenerateFixtures {
            count,
            seed,
            output,
        } => commands::generate_fixtures::execute(count, seed, output),

        Commands::Compile {
            config,
            output,
            proofs_csv,
        } => commands::compile::execute(config, output, proofs_csv),

        Commands::Proof {
            distribution,
            identity,
        } => commands::proof::execute(distribution, identity),

        Commands::Verify {
            root,
            identity,
            proof,
        } => commands::verify::execute(root, identity, proof),

        Commands::Claim {
            distribution,
            state,
            identity,
            proof,
        } => commands::claim::execute(distribution, state, identity, proof),

        Commands::CheckEligibility {
            distribution,
            state,
            identity,
        } => commands::check_eligibility::execute(distribution, state, identity),
    }
}
