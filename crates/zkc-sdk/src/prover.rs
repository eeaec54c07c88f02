// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Proof generation behind the [`ProverOracle`] seam.
//!
//! | adapter | source of the proof |
//! |---|---|
//! | [`SnarkjsProver`] | `snarkjs wtns calculate` + `snarkjs groth16 prove` |
//! | [`ArtifactProver`] | existing `proof.json` / `public.json` |
//! | [`NativeProver`] | arkworks Groth16 on the `zkc-circuit` demo circuit |
//!
//! Every adapter returns prover-native integers; none of them encode.

use std::path::PathBuf;

use ark_bn254::{Bn254, Fr};
use ark_groth16::{ProvingKey, VerifyingKey};
use ark_std::rand::{rngs::StdRng, SeedableRng};
use serde_json::Value;
use tokio::process::Command;
use tracing::{debug, info, instrument};
use zkc_types::{encode, PublicSignals, RawProof};

use crate::config::CircuitArtifacts;
use crate::error::{ArtifactError, ZkError, ZkResult};
use crate::serialize::{element_to_field, proof_to_raw, signals_from_fr};
use crate::snarkjs::{self, IntRepr};

/// Proving randomness seeded from the OS entropy source.
pub fn crypto_rng() -> StdRng {
    StdRng::from_entropy()
}

/// What a prover hands back for one proving session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProverOutput {
    pub proof: RawProof,
    pub public_signals: PublicSignals,
}

#[allow(async_fn_in_trait)]
pub trait ProverOracle {
    async fn prove(&self, input: &Value) -> ZkResult<ProverOutput>;
}

// ---------------------------------------------------------------------------
// snarkjs
// ---------------------------------------------------------------------------

/// Drives the `snarkjs` CLI over a compiled circom circuit.
#[derive(Clone, Debug)]
pub struct SnarkjsProver {
    pub bin: String,
    pub artifacts: CircuitArtifacts,
}

impl SnarkjsProver {
    pub fn new(bin: impl Into<String>, artifacts: CircuitArtifacts) -> Self {
        Self {
            bin: bin.into(),
            artifacts,
        }
    }

    fn witness_input_path(&self) -> PathBuf {
        self.artifacts.witness.with_file_name("witness_input.json")
    }
}

impl ProverOracle for SnarkjsProver {
    #[instrument(skip_all, fields(zkey = %self.artifacts.zkey.display()))]
    async fn prove(&self, input: &Value) -> ZkResult<ProverOutput> {
        let a = &self.artifacts;
        let input_path = self.witness_input_path();
        if let Some(parent) = input_path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        let input_json = serde_json::to_string_pretty(input).map_err(anyhow::Error::from)?;
        tokio::fs::write(&input_path, input_json).await?;

        run_snarkjs(
            &self.bin,
            &[
                "wtns".into(),
                "calculate".into(),
                a.wasm.display().to_string(),
                input_path.display().to_string(),
                a.witness.display().to_string(),
            ],
        )
        .await?;
        debug!("witness calculated");

        run_snarkjs(
            &self.bin,
            &[
                "groth16".into(),
                "prove".into(),
                a.zkey.display().to_string(),
                a.witness.display().to_string(),
                a.proof.display().to_string(),
                a.public.display().to_string(),
            ],
        )
        .await?;
        info!(proof = %a.proof.display(), "proof written");

        Ok(ProverOutput {
            proof: snarkjs::load_proof(&a.proof)?,
            public_signals: snarkjs::load_public_signals(&a.public)?,
        })
    }
}

/// Run a `snarkjs` subcommand, returning stdout.
pub async fn run_snarkjs(bin: &str, args: &[String]) -> ZkResult<String> {
    let output = Command::new(bin)
        .args(args)
        .output()
        .await
        .map_err(|e| ZkError::Prover(format!("failed to run `{bin}` ({e}), is snarkjs installed?")))?;

    if output.status.success() {
        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    } else {
        let stderr = String::from_utf8_lossy(&output.stderr);
        let sub = args.iter().take(2).cloned().collect::<Vec<_>>().join(" ");
        Err(ZkError::Prover(format!("{bin} {sub} failed: {}", stderr.trim())))
    }
}

// ---------------------------------------------------------------------------
// Existing artifacts
// ---------------------------------------------------------------------------

/// Replays a proof that was generated earlier. The input is ignored.
#[derive(Clone, Debug)]
pub struct ArtifactProver {
    pub proof: PathBuf,
    pub public: PathBuf,
}

impl ArtifactProver {
    pub fn new(proof: impl Into<PathBuf>, public: impl Into<PathBuf>) -> Self {
        Self {
            proof: proof.into(),
            public: public.into(),
        }
    }

    pub fn from_artifacts(artifacts: &CircuitArtifacts) -> Self {
        Self::new(&artifacts.proof, &artifacts.public)
    }
}

impl ProverOracle for ArtifactProver {
    async fn prove(&self, _input: &Value) -> ZkResult<ProverOutput> {
        Ok(ProverOutput {
            proof: snarkjs::load_proof(&self.proof)?,
            public_signals: snarkjs::load_public_signals(&self.public)?,
        })
    }
}

// ---------------------------------------------------------------------------
// Native arkworks
// ---------------------------------------------------------------------------

/// Proves the `zkc-circuit` multiplication circuit in-process.
///
/// Input: `{ "a": <int>, "b": <int> }`. Public signals: `[a*b, a+b]`.
pub struct NativeProver {
    pk: ProvingKey<Bn254>,
    seed: Option<u64>,
}

impl NativeProver {
    pub fn new(pk: ProvingKey<Bn254>) -> Self {
        Self { pk, seed: None }
    }

    /// Fixed proving randomness, for reproducible proofs.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Fresh circuit-specific setup.
    pub fn setup(rng: &mut StdRng) -> ZkResult<(Self, VerifyingKey<Bn254>)> {
        let (pk, vk) = zkc_circuit::setup(rng)
            .map_err(|e| ZkError::Prover(format!("setup failed: {e}")))?;
        Ok((Self::new(pk), vk))
    }

    pub fn verifying_key(&self) -> &VerifyingKey<Bn254> {
        &self.pk.vk
    }

    fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => crypto_rng(),
        }
    }
}

fn scalar_input(input: &Value, name: &str) -> ZkResult<Fr> {
    let raw = input
        .get(name)
        .ok_or_else(|| ZkError::Prover(format!("input is missing `{name}`")))?;
    let repr: IntRepr = serde_json::from_value(raw.clone()).map_err(ArtifactError::from)?;
    let n = repr.to_biguint(name)?;
    let fe = encode(&n)?;
    element_to_field::<Fr>(&fe)
        .ok_or_else(|| ZkError::Prover(format!("`{name}` is not below the scalar field modulus")))
}

impl ProverOracle for NativeProver {
    #[instrument(skip_all)]
    async fn prove(&self, input: &Value) -> ZkResult<ProverOutput> {
        let a = scalar_input(input, "a")?;
        let b = scalar_input(input, "b")?;
        let mut rng = self.rng();
        let (proof, pi) = zkc_circuit::prove(&self.pk, a, b, &mut rng)
            .map_err(|e| ZkError::Prover(format!("proving failed: {e}")))?;
        debug!("native proof generated");
        Ok(ProverOutput {
            proof: proof_to_raw(&proof),
            public_signals: signals_from_fr(&pi.to_vec()),
        })
    }
}
