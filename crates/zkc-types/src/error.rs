// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

use crate::field::Modulus;

/// Failures constructing a [`FieldElement`](crate::FieldElement).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    #[error("integer needs {bits} bits, field elements hold at most 256")]
    Overflow { bits: u64 },

    #[error("invalid hex field element: {0:?}")]
    InvalidHex(String),

    #[error("{value} is not below the {modulus} modulus")]
    NotInField { value: String, modulus: Modulus },
}
