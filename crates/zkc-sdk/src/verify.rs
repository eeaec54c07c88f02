// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Off-chain verification of assembled call data.
//!
//! [`verify_calldata`] runs the Groth16 check on exactly the words that would
//! be sent to the contract, read back in the EVM convention. A call-data bug
//! (wrong width, unswapped `pi_b`, reordered inputs) therefore shows up here
//! the same way it would on-chain: as a rejected proof.

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use ark_bn254::Bn254;
use ark_groth16::{Groth16, PreparedVerifyingKey, VerifyingKey};
use ark_serialize::{CanonicalDeserialize, CanonicalSerialize};
use ark_snark::SNARK;
use tracing::{debug, warn};

use crate::calldata::CallData;
use crate::chain::ChainClient;
use crate::error::{ZkError, ZkResult};
use crate::serialize::{inputs_from_calldata, proof_from_calldata};

/// `Ok(false)` for anything an EVM verifier would reject, including
/// off-curve points and out-of-field inputs.
pub fn verify_calldata(vk: &VerifyingKey<Bn254>, calldata: &CallData) -> ZkResult<bool> {
    let proof = match proof_from_calldata(calldata) {
        Ok(proof) => proof,
        Err(ZkError::InvalidPoint(field)) => {
            warn!(%field, "call data holds an invalid curve point");
            return Ok(false);
        }
        Err(ZkError::Field(err)) => {
            warn!(%err, "call data coordinate outside the base field");
            return Ok(false);
        }
        Err(other) => return Err(other),
    };
    let inputs = match inputs_from_calldata(calldata) {
        Ok(inputs) => inputs,
        Err(ZkError::Field(err)) => {
            warn!(%err, "public input outside the scalar field");
            return Ok(false);
        }
        Err(other) => return Err(other),
    };
    if inputs.len() + 1 != vk.gamma_abc_g1.len() {
        warn!(
            got = inputs.len(),
            expected = vk.gamma_abc_g1.len().saturating_sub(1),
            "public input count does not match verifying key"
        );
        return Ok(false);
    }

    let pvk = PreparedVerifyingKey::from(vk.clone());
    let accepted = Groth16::<Bn254>::verify_with_processed_vk(&pvk, &inputs, &proof).unwrap_or(false);
    debug!(accepted, "off-chain groth16 check");
    Ok(accepted)
}

/// Turn a verifier verdict into a hard failure.
pub fn ensure_verified(accepted: bool) -> ZkResult<()> {
    if accepted {
        Ok(())
    } else {
        Err(ZkError::VerificationFailed)
    }
}

/// Verifies with a local verifying key. Stands in for the deployed contract
/// in dry runs.
pub struct OffchainVerifier {
    vk: VerifyingKey<Bn254>,
}

impl OffchainVerifier {
    pub fn new(vk: VerifyingKey<Bn254>) -> Self {
        Self { vk }
    }

    pub fn from_file(path: &Path) -> ZkResult<Self> {
        Ok(Self::new(load_verifying_key(path)?))
    }

    pub fn verifying_key(&self) -> &VerifyingKey<Bn254> {
        &self.vk
    }
}

impl ChainClient for OffchainVerifier {
    async fn verify_proof(&self, calldata: &CallData) -> ZkResult<bool> {
        verify_calldata(&self.vk, calldata)
    }
}

/// Load a verifying key from a binary file (uncompressed arkworks encoding)
pub fn load_verifying_key(path: &Path) -> ZkResult<VerifyingKey<Bn254>> {
    let file = File::open(path)?;
    let vk = VerifyingKey::<Bn254>::deserialize_uncompressed(BufReader::new(file))?;
    Ok(vk)
}

pub fn save_verifying_key(vk: &VerifyingKey<Bn254>, path: &Path) -> ZkResult<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let mut writer = BufWriter::new(File::create(path)?);
    vk.serialize_uncompressed(&mut writer)?;
    writer.flush()?;
    Ok(())
}
