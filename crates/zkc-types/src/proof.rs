// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

use num_bigint::BigUint;

use crate::field::FieldElement;

/// Affine G1 point as emitted to the verifier: `[x, y]`.
pub type G1Point = [FieldElement; 2];

/// Affine G2 point as emitted to the verifier: `[[x1, x0], [y1, y0]]`.
pub type G2Point = [[FieldElement; 2]; 2];

/// Public signals in circuit declaration order.
pub type PublicSignals = Vec<BigUint>;

/// Groth16 proof exactly as a prover hands it over: prover-native integers,
/// shape not yet checked. `pi_b` keeps the prover's limb order
/// `[[x0, x1], [y0, y1]]`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RawProof {
    pub pi_a: Vec<BigUint>,
    pub pi_b: Vec<Vec<BigUint>>,
    pub pi_c: Vec<BigUint>,
}

impl RawProof {
    /// Build a well-shaped proof.
    pub fn new(pi_a: [BigUint; 2], pi_b: [[BigUint; 2]; 2], pi_c: [BigUint; 2]) -> Self {
        Self {
            pi_a: pi_a.into(),
            pi_b: pi_b.into_iter().map(Vec::from).collect(),
            pi_c: pi_c.into(),
        }
    }

    pub fn from_u64(pi_a: [u64; 2], pi_b: [[u64; 2]; 2], pi_c: [u64; 2]) -> Self {
        Self::new(
            pi_a.map(BigUint::from),
            pi_b.map(|pair| pair.map(BigUint::from)),
            pi_c.map(BigUint::from),
        )
    }
}
