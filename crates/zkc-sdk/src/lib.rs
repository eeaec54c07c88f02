// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! # zkc-sdk
//!
//! Turns a Groth16/BN254 proof and its public signals into the argument
//! tuple of an EVM verifier's
//! `verifyProof(uint256[2],uint256[2][2],uint256[2],uint256[])`.
//!
//! Every element is emitted as a canonical `0x`-prefixed, 64-hex-digit,
//! big-endian word, and `pi_b` is swapped into the `[c1, c0]` limb order the
//! `ecPairing` precompile expects.
//!
//! ## Crate layout
//!
//! | Module | Purpose |
//! |---|---|
//! | *crate root* | Re-exports the encoder and assembler entry points |
//! | [`calldata`] | `assemble`: limb swap, shape checks, field encoding |
//! | [`abi`] | Selector and full ABI encoding of `verifyProof` |
//! | [`snarkjs`] | `proof.json` / `public.json` loading |
//! | [`serialize`] | Arkworks ↔ call-data conversion |
//! | [`prover`] | `ProverOracle` seam: snarkjs, artifact and native adapters |
//! | [`chain`] | `ChainClient` seam: `cast call` against a verifier |
//! | [`verify`] | Off-chain Groth16 check of assembled call data |
//! | [`flow`] | Prove → assemble → verify |
//! | [`config`] | `~/.zkc/config.json` persistence |
//!
//! ## Typical integration flow
//!
//! ```rust,no_run
//! use std::path::Path;
//! use zkc_sdk::{assemble, snarkjs, abi};
//!
//! # fn example() -> anyhow::Result<()> {
//! // 1. Load what snarkjs wrote
//! let proof = snarkjs::load_proof(Path::new("out/proof.json"))?;
//! let signals = snarkjs::load_public_signals(Path::new("out/public.json"))?;
//!
//! // 2. Assemble
//! let cd = assemble(&proof, &signals)?;
//! println!("{}", cd.to_solidity_args());
//!
//! // 3. Raw transaction data
//! println!("{}", abi::encode_verify_proof_hex(&cd));
//! # Ok(())
//! # }
//! ```

pub use zkc_types::{encode, BigUint, FieldElement, FieldError, PublicSignals, RawProof};

pub mod abi;
pub mod calldata;
pub mod chain;
pub mod config;
pub mod error;
pub mod flow;
pub mod prover;
pub mod serialize;
pub mod snarkjs;
pub mod verify;

pub use calldata::{assemble, assemble_with, AssembleOptions, CallData, G2Order};
pub use error::{ArtifactError, CallDataError, ZkError, ZkResult};
