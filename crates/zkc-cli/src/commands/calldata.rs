use std::path::Path;

use anyhow::{Context, Result};
use clap::ValueEnum;
use zkc_sdk::config::load_config;
use zkc_sdk::{abi, assemble_with, snarkjs, CallData};

use crate::output;

/// How call data is printed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// `{ pi_a, pi_b, pi_c, input }` with hex words
    Json,
    /// snarkjs `exportSolidityCallData` style argument list
    Solidity,
    /// ABI-encoded transaction data, selector included
    Abi,
}

pub fn run(proof: &Path, public: Option<&Path>, format: Format) -> Result<()> {
    let cfg = load_config()?;
    let (raw, bundled) = snarkjs::load_proof_bundle(proof)
        .with_context(|| format!("cannot load proof from {}", proof.display()))?;

    let signals = match (public, bundled) {
        (Some(path), bundled) => {
            if bundled.is_some() {
                output::warn("proof bundle carries publicSignals; using --public instead");
            }
            snarkjs::load_public_signals(path)?
        }
        (None, Some(signals)) => signals,
        (None, None) => {
            return Err(output::fail_with_hint(
                "no public signals",
                "pass --public <public.json> or a { proof, publicSignals } bundle",
            ))
        }
    };

    let cd = assemble_with(&raw, &signals, &cfg.assemble_options())?;
    render(&cd, format)
}

/// Print call data in the requested format.
pub fn render(cd: &CallData, format: Format) -> Result<()> {
    match format {
        Format::Json => output::result("calldata", cd),
        Format::Solidity => output::result("solidity", &cd.to_solidity_args()),
        Format::Abi => output::result("data", &abi::encode_verify_proof_hex(cd)),
    }
}
