// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Prove → assemble → verify, wired over the collaborator seams.

use serde_json::Value;
use tracing::{info, instrument};

use crate::calldata::{assemble_with, AssembleOptions, CallData};
use crate::chain::ChainClient;
use crate::error::ZkResult;
use crate::prover::ProverOracle;
use crate::verify::ensure_verified;

/// Run the prover on `input` and assemble its output. Nothing is submitted.
#[instrument(skip_all)]
pub async fn generate_call_data<P: ProverOracle>(
    prover: &P,
    input: &Value,
    opts: &AssembleOptions,
) -> ZkResult<CallData> {
    let out = prover.prove(input).await?;
    let calldata = assemble_with(&out.proof, &out.public_signals, opts)?;
    info!(inputs = calldata.input.len(), "call data assembled");
    Ok(calldata)
}

/// Generate call data and have `chain` verify it. A `false` verdict is
/// [`ZkError::VerificationFailed`](crate::error::ZkError::VerificationFailed).
#[instrument(skip_all)]
pub async fn verify_with<P: ProverOracle, C: ChainClient>(
    prover: &P,
    chain: &C,
    input: &Value,
    opts: &AssembleOptions,
) -> ZkResult<CallData> {
    let calldata = generate_call_data(prover, input, opts).await?;
    let accepted = chain.verify_proof(&calldata).await?;
    info!(accepted, "verifier answered");
    ensure_verified(accepted)?;
    Ok(calldata)
}
