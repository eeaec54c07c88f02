// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

pub mod mul;

use ark_bn254::{Bn254, Fr};
use ark_groth16::{Groth16, PreparedVerifyingKey, ProvingKey, VerifyingKey};
use ark_relations::r1cs::{ConstraintSynthesizer, ConstraintSystem, SynthesisError};
use ark_snark::SNARK;
use ark_std::rand::{CryptoRng, RngCore};

pub use mul::MulCircuit;

/// Public inputs for a multiplication proof
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PublicInputs {
    pub product: Fr,
    pub sum: Fr,
}

impl PublicInputs {
    pub fn new(a: Fr, b: Fr) -> Self {
        Self {
            product: a * b,
            sum: a + b,
        }
    }

    pub fn to_vec(&self) -> Vec<Fr> {
        vec![self.product, self.sum]
    }
}

/// Run Groth16 trusted setup for the multiplication circuit
pub fn setup<R: RngCore + CryptoRng>(
    rng: &mut R,
) -> Result<(ProvingKey<Bn254>, VerifyingKey<Bn254>), SynthesisError> {
    Groth16::<Bn254>::circuit_specific_setup(MulCircuit::empty(), rng)
}

/// Generate a Groth16 proof of knowledge of `a`, `b`
pub fn prove<R: RngCore + CryptoRng>(
    pk: &ProvingKey<Bn254>,
    a: Fr,
    b: Fr,
    rng: &mut R,
) -> Result<(ark_groth16::Proof<Bn254>, PublicInputs), SynthesisError> {
    let proof = Groth16::<Bn254>::prove(pk, MulCircuit::new(a, b), rng)?;
    Ok((proof, PublicInputs::new(a, b)))
}

/// Verify a proof off-chain
pub fn verify_offchain(
    vk: &VerifyingKey<Bn254>,
    proof: &ark_groth16::Proof<Bn254>,
    public_inputs: &PublicInputs,
) -> bool {
    let pvk = PreparedVerifyingKey::from(vk.clone());
    Groth16::<Bn254>::verify_with_processed_vk(&pvk, &public_inputs.to_vec(), proof)
        .unwrap_or(false)
}

/// Count constraints in the multiplication circuit
pub fn constraint_count() -> Result<usize, SynthesisError> {
    let cs = ConstraintSystem::<Fr>::new_ref();
    cs.set_optimization_goal(ark_relations::r1cs::OptimizationGoal::Constraints);
    cs.set_mode(ark_relations::r1cs::SynthesisMode::Setup);
    MulCircuit::empty().generate_constraints(cs.clone())?;
    Ok(cs.num_constraints())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ark_std::rand::{rngs::StdRng, SeedableRng};

    fn test_rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    #[test]
    fn test_valid_proof() {
        let mut rng = test_rng();
        let (pk, vk) = setup(&mut rng).unwrap();
        let (proof, pi) = prove(&pk, Fr::from(3u64), Fr::from(4u64), &mut rng).unwrap();
        assert_eq!(pi.product, Fr::from(12u64));
        assert_eq!(pi.sum, Fr::from(7u64));
        assert!(verify_offchain(&vk, &proof, &pi));
    }

    #[test]
    fn test_swapped_public_inputs_rejected() {
        let mut rng = test_rng();
        let (pk, vk) = setup(&mut rng).unwrap();
        let (proof, pi) = prove(&pk, Fr::from(3u64), Fr::from(4u64), &mut rng).unwrap();
        let swapped = PublicInputs {
            product: pi.sum,
            sum: pi.product,
        };
        assert!(!verify_offchain(&vk, &proof, &swapped), "input order must matter");
    }

    #[test]
    fn test_honest_witness_satisfies() {
        let cs = ConstraintSystem::<Fr>::new_ref();
        MulCircuit::new(Fr::from(3u64), Fr::from(4u64))
            .generate_constraints(cs.clone())
            .unwrap();
        assert!(cs.is_satisfied().unwrap());
    }

    #[test]
    fn test_wrong_product_rejected() {
        let mut rng = test_rng();
        let (pk, vk) = setup(&mut rng).unwrap();
        let (proof, mut pi) = prove(&pk, Fr::from(3u64), Fr::from(4u64), &mut rng).unwrap();
        pi.product = Fr::from(13u64);
        assert!(!verify_offchain(&vk, &proof, &pi), "should fail: wrong product");
    }

    #[test]
    fn test_constraint_count() {
        assert!(constraint_count().unwrap() >= 2);
    }
}
