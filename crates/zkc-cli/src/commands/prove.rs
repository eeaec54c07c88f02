use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use zkc_sdk::config::load_config;
use zkc_sdk::flow;
use zkc_sdk::prover::SnarkjsProver;

use super::calldata::{render, Format};
use crate::output;

pub async fn run(input: Option<&Path>, format: Format) -> Result<()> {
    let cfg = load_config()?;
    let artifacts = cfg.artifacts();
    if !artifacts.zkey.exists() {
        return Err(output::fail_with_hint(
            &format!("proving key not found at {}", artifacts.zkey.display()),
            "build the circuit first or run `zkc config set base_path <dir>`",
        ));
    }

    let input = read_input(input, &artifacts.input)?;
    let prover = SnarkjsProver::new(cfg.snarkjs_bin.clone(), artifacts);
    let sp = output::spinner("generating proof with snarkjs...");
    let cd = flow::generate_call_data(&prover, &input, &cfg.assemble_options()).await;
    sp.finish_and_clear();
    let cd = cd?;

    output::success(&format!(
        "proof generated ({} public signal{})",
        cd.input.len(),
        if cd.input.len() == 1 { "" } else { "s" }
    ));
    render(&cd, format)
}

/// Circuit input JSON from `path`, or from `default` when none was given.
pub fn read_input(path: Option<&Path>, default: &Path) -> Result<serde_json::Value> {
    let path: PathBuf = path.unwrap_or(default).to_path_buf();
    let text = std::fs::read_to_string(&path)
        .with_context(|| format!("cannot read circuit input {}", path.display()))?;
    serde_json::from_str(&text).context("circuit input is not valid JSON")
}
