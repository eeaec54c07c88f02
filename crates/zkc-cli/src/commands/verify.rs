use std::path::Path;

use anyhow::Result;
use serde_json::Value;
use zkc_sdk::chain::CastClient;
use zkc_sdk::config::{load_config, ZkConfig};
use zkc_sdk::prover::{ArtifactProver, ProverOracle, SnarkjsProver};
use zkc_sdk::verify::OffchainVerifier;
use zkc_sdk::{flow, CallData, ZkError, ZkResult};

use super::prove::read_input;
use crate::output;

pub async fn run(artifacts: bool, offchain_vk: Option<&Path>, input: Option<&Path>) -> Result<()> {
    let cfg = load_config()?;
    let paths = cfg.artifacts();

    let input = if artifacts {
        Value::Null
    } else {
        read_input(input, &paths.input)?
    };

    let sp = output::spinner(if artifacts {
        "verifying existing proof..."
    } else {
        "proving and verifying..."
    });
    let result = if artifacts {
        let prover = ArtifactProver::from_artifacts(&paths);
        against(&prover, &cfg, offchain_vk, &input).await
    } else {
        let prover = SnarkjsProver::new(cfg.snarkjs_bin.clone(), paths);
        against(&prover, &cfg, offchain_vk, &input).await
    };
    sp.finish_and_clear();

    let verifier = match offchain_vk {
        Some(path) => path.display().to_string(),
        None => cfg.verifier_address.clone(),
    };

    let cd = match result {
        Ok(cd) => cd,
        Err(ZkError::VerificationFailed) => {
            if output::is_json() {
                output::json(&serde_json::json!({
                    "verified": false,
                    "verifier": verifier,
                }))?;
            } else {
                output::error_msg("verifier rejected the proof");
            }
            return Err(output::fail_with_hint(
                "proof verification failed",
                "check `g2_order` (verifiers expect `swapped`) and the public signal order",
            ));
        }
        Err(ZkError::Config(msg)) => {
            return Err(output::fail_with_hint(
                &msg,
                "run `zkc config set verifier_address <addr>` or pass --offchain-vk <file>",
            ))
        }
        Err(e) => return Err(e.into()),
    };

    if output::is_json() {
        output::json(&serde_json::json!({
            "verified": true,
            "verifier": verifier,
            "calldata": cd,
        }))?;
    } else {
        output::describe(&cd);
        output::label("verifier", &verifier);
        output::success("proof verified");
    }
    Ok(())
}

async fn against<P: ProverOracle>(
    prover: &P,
    cfg: &ZkConfig,
    offchain_vk: Option<&Path>,
    input: &Value,
) -> ZkResult<CallData> {
    let opts = cfg.assemble_options();
    match offchain_vk {
        Some(path) => {
            let verifier = OffchainVerifier::from_file(path)?;
            flow::verify_with(prover, &verifier, input, &opts).await
        }
        None => {
            let client = CastClient::from_config(cfg)?;
            flow::verify_with(prover, &client, input, &opts).await
        }
    }
}
