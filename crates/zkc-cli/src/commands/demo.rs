use std::path::Path;

use anyhow::{Context, Result};
use ark_std::rand::{rngs::StdRng, SeedableRng};
use zkc_sdk::chain::ChainClient;
use zkc_sdk::config::CircuitArtifacts;
use zkc_sdk::prover::{crypto_rng, NativeProver, ProverOracle};
use zkc_sdk::snarkjs::ProofJson;
use zkc_sdk::verify::{ensure_verified, save_verifying_key, OffchainVerifier};
use zkc_sdk::{assemble_with, AssembleOptions};

use crate::output;

pub async fn run(a: u64, b: u64, seed: Option<u64>, out: Option<&Path>) -> Result<()> {
    let mut rng = match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => crypto_rng(),
    };

    let sp = output::spinner("running groth16 setup...");
    let (prover, vk) = NativeProver::setup(&mut rng)?;
    sp.finish_and_clear();
    let prover = match seed {
        Some(s) => prover.with_seed(s.wrapping_add(1)),
        None => prover,
    };

    let input = serde_json::json!({ "a": a, "b": b });
    let sp = output::spinner("proving...");
    let proved = prover.prove(&input).await;
    sp.finish_and_clear();
    let proved = proved?;

    let cd = assemble_with(&proved.proof, &proved.public_signals, &AssembleOptions::strict())?;
    let verifier = OffchainVerifier::new(vk);
    let accepted = verifier.verify_proof(&cd).await?;

    if let Some(dir) = out {
        let artifacts = CircuitArtifacts::under(dir);
        write_artifacts(&artifacts, &proved.proof, &proved.public_signals)?;
        let vk_path = artifacts.proof.with_file_name("vk.bin");
        save_verifying_key(verifier.verifying_key(), &vk_path)?;
        output::label("artifacts", &artifacts.proof.parent().unwrap_or(dir).display().to_string());
        output::info(&format!(
            "replay with: ZKC_BASE_PATH={} zkc verify --artifacts --offchain-vk {}",
            dir.display(),
            vk_path.display()
        ));
    }

    if output::is_json() {
        output::json(&serde_json::json!({
            "a": a,
            "b": b,
            "verified": accepted,
            "calldata": cd,
            "solidity": cd.to_solidity_args(),
        }))?;
    } else {
        output::describe(&cd);
    }
    ensure_verified(accepted)?;
    if let [product, sum] = proved.public_signals.as_slice() {
        output::success(&format!("proof of a*b = {product} and a+b = {sum} verified"));
    }
    Ok(())
}

fn write_artifacts(
    artifacts: &CircuitArtifacts,
    proof: &zkc_sdk::RawProof,
    signals: &zkc_sdk::PublicSignals,
) -> Result<()> {
    if let Some(parent) = artifacts.proof.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let proof_json = serde_json::to_string_pretty(&ProofJson::from_raw(proof))?;
    std::fs::write(&artifacts.proof, proof_json)
        .with_context(|| format!("cannot write {}", artifacts.proof.display()))?;
    let signals: Vec<String> = signals.iter().map(|s| s.to_string()).collect();
    std::fs::write(&artifacts.public, serde_json::to_string_pretty(&signals)?)
        .with_context(|| format!("cannot write {}", artifacts.public.display()))?;
    Ok(())
}
