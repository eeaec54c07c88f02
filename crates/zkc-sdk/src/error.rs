// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Typed errors for call-data assembly and the prove → verify flow.

use std::path::PathBuf;

use zkc_types::{FieldError, Modulus};

/// Local validation failures while assembling call data. Nothing is
/// produced when one of these is returned.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CallDataError {
    #[error("shape mismatch in {field}: expected {expected} elements, found {found}")]
    ShapeMismatch {
        field: String,
        expected: usize,
        found: usize,
    },

    #[error("encoding overflow at {field}: {source}")]
    EncodingOverflow {
        field: String,
        #[source]
        source: FieldError,
    },

    #[error("{field} is outside the {modulus}")]
    OutOfField { field: String, modulus: Modulus },
}

impl CallDataError {
    /// Path of the offending element, e.g. `pi_b[1][0]` or `input[3]`.
    pub fn field(&self) -> &str {
        match self {
            CallDataError::ShapeMismatch { field, .. }
            | CallDataError::EncodingOverflow { field, .. }
            | CallDataError::OutOfField { field, .. } => field,
        }
    }
}

/// Malformed prover artifacts (`proof.json`, `public.json`).
#[derive(Debug, thiserror::Error)]
pub enum ArtifactError {
    #[error("invalid artifact JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("cannot read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{field}: negative value {value} is not a field element")]
    Negative { field: String, value: String },

    #[error("{field}: not an integer: {value}")]
    NotAnInteger { field: String, value: String },

    #[error("{field}: projective point is not normalized")]
    NonAffine { field: String },

    #[error("unsupported {what}: {found}")]
    Unsupported { what: &'static str, found: String },
}

#[derive(Debug, thiserror::Error)]
pub enum ZkError {
    #[error(transparent)]
    CallData(#[from] CallDataError),

    #[error(transparent)]
    Artifact(#[from] ArtifactError),

    #[error(transparent)]
    Field(#[from] FieldError),

    #[error("invalid curve point in {0}")]
    InvalidPoint(String),

    #[error("proof verification failed: verifier returned false")]
    VerificationFailed,

    #[error("prover: {0}")]
    Prover(String),

    #[error("chain: {0}")]
    Chain(String),

    #[error("config: {0}")]
    Config(String),

    #[error("serialization: {0}")]
    Serialization(#[from] ark_serialize::SerializationError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type ZkResult<T> = Result<T, ZkError>;
