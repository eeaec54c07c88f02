// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

pub mod error;
pub mod field;
pub mod proof;

pub use error::FieldError;
pub use field::{encode, FieldElement, Modulus, FIELD_BITS, FIELD_BYTES, FIELD_HEX_DIGITS};
pub use proof::{G1Point, G2Point, PublicSignals, RawProof};

pub use num_bigint::BigUint;
