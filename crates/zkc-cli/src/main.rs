mod commands;
mod output;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{filter::EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use commands::calldata::Format;

#[derive(Parser)]
#[command(name = "zkc", about = "Groth16/BN254 proofs to EVM verifyProof call data")]
struct Cli {
    /// Output machine-readable JSON on stdout
    #[arg(long, global = true)]
    json: bool,
    #[command(subcommand)]
    command: Cmd,
}

#[derive(Subcommand)]
enum Cmd {
    /// Assemble call data from snarkjs proof.json / public.json
    Calldata {
        /// proof.json, or a fullProve bundle with publicSignals
        #[arg(long)]
        proof: PathBuf,
        /// public.json (not needed for a bundle)
        #[arg(long)]
        public: Option<PathBuf>,
        #[arg(long, value_enum, default_value_t = Format::Json)]
        format: Format,
    },
    /// Run snarkjs on the configured circuit and print call data
    Prove {
        /// Circuit input (defaults to <base_path>/input.json)
        #[arg(long)]
        input: Option<PathBuf>,
        #[arg(long, value_enum, default_value_t = Format::Json)]
        format: Format,
    },
    /// Prove, assemble and ask the verifier
    Verify {
        /// Reuse existing proof.json / public.json instead of proving
        #[arg(long)]
        artifacts: bool,
        /// Verify off-chain with an arkworks verifying key instead of `cast call`
        #[arg(long)]
        offchain_vk: Option<PathBuf>,
        #[arg(long)]
        input: Option<PathBuf>,
    },
    /// Native demo: prove a*b and a+b, assemble, verify off-chain
    Demo {
        #[arg(long)]
        a: u64,
        #[arg(long)]
        b: u64,
        /// Fixed seed for setup and proving
        #[arg(long)]
        seed: Option<u64>,
        /// Write proof.json, public.json and vk.bin under <dir>/out
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Show or update configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Show effective configuration
    Show,
    /// Set a config value
    Set { key: String, value: String },
}

fn init_tracing(json: bool) {
    let default = if json { "zkc=warn" } else { "zkc=info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::Registry::default()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .with(filter)
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    output::set_json_mode(cli.json);
    init_tracing(cli.json);

    match cli.command {
        Cmd::Calldata { proof, public, format } => {
            commands::calldata::run(&proof, public.as_deref(), format)?
        }
        Cmd::Prove { input, format } => commands::prove::run(input.as_deref(), format).await?,
        Cmd::Verify {
            artifacts,
            offchain_vk,
            input,
        } => commands::verify::run(artifacts, offchain_vk.as_deref(), input.as_deref()).await?,
        Cmd::Demo { a, b, seed, out } => commands::demo::run(a, b, seed, out.as_deref()).await?,
        Cmd::Config { action } => match action {
            ConfigAction::Show => commands::config::show()?,
            ConfigAction::Set { key, value } => commands::config::set(&key, &value)?,
        },
    }
    Ok(())
}
