// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! End to end: native Groth16 proof → call data → off-chain verifier.
//! All imports go through `zkc_sdk::`.

use ark_std::rand::{rngs::StdRng, SeedableRng};
use serde_json::json;
use zkc_sdk::abi;
use zkc_sdk::calldata::CallData;
use zkc_sdk::chain::ChainClient;
use zkc_sdk::flow;
use zkc_sdk::prover::{ArtifactProver, NativeProver, ProverOracle};
use zkc_sdk::snarkjs::ProofJson;
use zkc_sdk::verify::{load_verifying_key, save_verifying_key, verify_calldata, OffchainVerifier};
use zkc_sdk::{AssembleOptions, BigUint, G2Order, ZkError};

fn setup() -> (NativeProver, OffchainVerifier) {
    let mut rng = StdRng::seed_from_u64(2026);
    let (prover, vk) = NativeProver::setup(&mut rng).unwrap();
    (prover.with_seed(7), OffchainVerifier::new(vk))
}

#[tokio::test]
async fn native_proof_verifies_through_the_flow() {
    let (prover, verifier) = setup();
    let cd = flow::verify_with(&prover, &verifier, &json!({"a": 3, "b": 11}), &AssembleOptions::strict())
        .await
        .unwrap();

    assert_eq!(cd.input.len(), 2);
    assert_eq!(cd.input[0].to_biguint(), BigUint::from(33u32));
    assert_eq!(cd.input[1].to_biguint(), BigUint::from(14u32));
    for word in cd.pi_a.iter().chain(cd.pi_b.iter().flatten()).chain(cd.pi_c.iter()) {
        let hex = word.to_hex();
        assert_eq!(hex.len(), 66);
        assert!(hex.starts_with("0x"));
    }
}

#[tokio::test]
async fn unswapped_g2_is_rejected() {
    let (prover, verifier) = setup();
    let opts = AssembleOptions {
        g2_order: G2Order::AsIs,
        strict: true,
    };
    let err = flow::verify_with(&prover, &verifier, &json!({"a": 3, "b": 11}), &opts)
        .await
        .unwrap_err();
    assert!(matches!(err, ZkError::VerificationFailed));
}

#[tokio::test]
async fn reordered_inputs_are_rejected() {
    let (prover, verifier) = setup();
    let mut cd = flow::generate_call_data(&prover, &json!({"a": 5, "b": 6}), &AssembleOptions::default())
        .await
        .unwrap();
    assert!(verifier.verify_proof(&cd).await.unwrap());

    cd.input.swap(0, 1);
    assert!(!verifier.verify_proof(&cd).await.unwrap());

    cd.input.pop();
    assert!(!verify_calldata(verifier.verifying_key(), &cd).unwrap());
}

#[tokio::test]
async fn snarkjs_shaped_artifacts_verify() {
    let (prover, verifier) = setup();
    let out = prover.prove(&json!({"a": "0x10", "b": "2"})).await.unwrap();

    let dir = tempfile::tempdir().unwrap();
    let proof_path = dir.path().join("proof.json");
    let public_path = dir.path().join("public.json");
    let proof_json = ProofJson::from_raw(&out.proof);
    std::fs::write(&proof_path, serde_json::to_string_pretty(&proof_json).unwrap()).unwrap();
    let signals: Vec<String> = out.public_signals.iter().map(|s| s.to_string()).collect();
    std::fs::write(&public_path, serde_json::to_string(&signals).unwrap()).unwrap();

    let replay = ArtifactProver::new(&proof_path, &public_path);
    let cd = flow::verify_with(&replay, &verifier, &json!({}), &AssembleOptions::strict())
        .await
        .unwrap();
    assert_eq!(cd.input[0].to_biguint(), BigUint::from(32u32));
}

#[tokio::test]
async fn assembly_is_idempotent_and_serde_stable() {
    let (prover, _) = setup();
    let out = prover.prove(&json!({"a": 9, "b": 9})).await.unwrap();
    let first = zkc_sdk::assemble(&out.proof, &out.public_signals).unwrap();
    let second = zkc_sdk::assemble(&out.proof, &out.public_signals).unwrap();
    assert_eq!(first, second);
    assert_eq!(abi::encode_verify_proof(&first), abi::encode_verify_proof(&second));

    let json = serde_json::to_string(&first).unwrap();
    let back: CallData = serde_json::from_str(&json).unwrap();
    assert_eq!(back, first);
}

#[tokio::test]
async fn verifying_key_survives_disk() {
    let (prover, verifier) = setup();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("keys").join("vk.bin");
    save_verifying_key(verifier.verifying_key(), &path).unwrap();
    assert_eq!(&load_verifying_key(&path).unwrap(), verifier.verifying_key());

    let from_disk = OffchainVerifier::from_file(&path).unwrap();
    flow::verify_with(&prover, &from_disk, &json!({"a": 1, "b": 0}), &AssembleOptions::strict())
        .await
        .unwrap();
}
