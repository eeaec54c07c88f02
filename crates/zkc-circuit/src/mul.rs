// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

use ark_bn254::Fr;
use ark_r1cs_std::{alloc::AllocVar, eq::EqGadget, fields::fp::FpVar};
use ark_relations::r1cs::{ConstraintSynthesizer, ConstraintSystemRef, SynthesisError};

/// Knowledge of `a`, `b` with `a * b = product` and `a + b = sum`.
///
/// Two public inputs so that their order is observable to the verifier.
#[derive(Clone)]
pub struct MulCircuit {
    // Private witnesses
    pub a: Option<Fr>,
    pub b: Option<Fr>,
}

impl MulCircuit {
    /// Create a circuit with None witnesses (for setup)
    pub fn empty() -> Self {
        Self { a: None, b: None }
    }

    pub fn new(a: Fr, b: Fr) -> Self {
        Self {
            a: Some(a),
            b: Some(b),
        }
    }
}

impl ConstraintSynthesizer<Fr> for MulCircuit {
    fn generate_constraints(self, cs: ConstraintSystemRef<Fr>) -> Result<(), SynthesisError> {
        // === Public inputs ===
        // Order: product, sum
        let product_pub = FpVar::new_input(cs.clone(), || {
            let a = self.a.ok_or(SynthesisError::AssignmentMissing)?;
            let b = self.b.ok_or(SynthesisError::AssignmentMissing)?;
            Ok(a * b)
        })?;
        let sum_pub = FpVar::new_input(cs.clone(), || {
            let a = self.a.ok_or(SynthesisError::AssignmentMissing)?;
            let b = self.b.ok_or(SynthesisError::AssignmentMissing)?;
            Ok(a + b)
        })?;

        // === Private witnesses ===
        let a = FpVar::new_witness(cs.clone(), || self.a.ok_or(SynthesisError::AssignmentMissing))?;
        let b = FpVar::new_witness(cs, || self.b.ok_or(SynthesisError::AssignmentMissing))?;

        (&a * &b).enforce_equal(&product_pub)?;
        (&a + &b).enforce_equal(&sum_pub)?;

        Ok(())
    }
}
