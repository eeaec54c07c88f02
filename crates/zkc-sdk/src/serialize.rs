// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Arkworks ↔ call-data conversion for BN254.
//!
//! Outbound, an arkworks proof is flattened into a [`RawProof`] in the same
//! convention snarkjs uses (`pi_b = [[x.c0, x.c1], [y.c0, y.c1]]`), so it goes
//! through exactly the same assembly path as a snarkjs proof.
//!
//! Inbound, [`proof_from_calldata`] reads assembled call data the way an EVM
//! verifier does (`pi_b[i] = [c1, c0]`) and rebuilds checked curve points.
//!
//! # Byte order
//!
//! arkworks limbs are little-endian `u64`s; every [`FieldElement`] is
//! big-endian bytes. Conversion goes through `to_bytes_be` and a manual
//! BE-bytes → LE-limbs split.

use ark_bn254::{Bn254, Fq, Fq2, Fr, G1Affine, G2Affine};
use ark_ff::{BigInt, BigInteger, PrimeField};
use ark_groth16::Proof;
use num_bigint::BigUint;
use zkc_types::{FieldElement, FieldError, Modulus, PublicSignals, RawProof};

use crate::calldata::CallData;
use crate::error::{ZkError, ZkResult};

/// Prime field element → canonical 32-byte word
pub fn field_to_element<F: PrimeField>(f: &F) -> FieldElement {
    let bytes = f.into_bigint().to_bytes_be();
    let n = bytes.len().min(32);
    let mut out = [0u8; 32];
    out[32 - n..].copy_from_slice(&bytes[bytes.len() - n..]);
    FieldElement::from_be_bytes(out)
}

pub fn field_to_biguint<F: PrimeField>(f: &F) -> BigUint {
    field_to_element(f).to_biguint()
}

/// Canonical word → prime field element; `None` when the word is not below
/// the field modulus.
pub fn element_to_field<F: PrimeField<BigInt = BigInt<4>>>(fe: &FieldElement) -> Option<F> {
    let bytes = fe.to_be_bytes();
    let mut limbs = [0u64; 4];
    // BE bytes -> LE limbs
    for (i, chunk) in bytes.rchunks(8).enumerate() {
        let mut buf = [0u8; 8];
        buf.copy_from_slice(chunk);
        limbs[i] = u64::from_be_bytes(buf);
    }
    F::from_bigint(BigInt::new(limbs))
}

/// Flatten an arkworks proof into prover-native (snarkjs-ordered) integers
pub fn proof_to_raw(proof: &Proof<Bn254>) -> RawProof {
    RawProof::new(
        [field_to_biguint(&proof.a.x), field_to_biguint(&proof.a.y)],
        [
            [field_to_biguint(&proof.b.x.c0), field_to_biguint(&proof.b.x.c1)],
            [field_to_biguint(&proof.b.y.c0), field_to_biguint(&proof.b.y.c1)],
        ],
        [field_to_biguint(&proof.c.x), field_to_biguint(&proof.c.y)],
    )
}

pub fn signals_from_fr(inputs: &[Fr]) -> PublicSignals {
    inputs.iter().map(field_to_biguint).collect()
}

fn fq_at(fe: &FieldElement, field: &str) -> ZkResult<Fq> {
    element_to_field::<Fq>(fe).ok_or_else(|| {
        ZkError::Field(FieldError::NotInField {
            value: format!("{field}={fe}"),
            modulus: Modulus::Base,
        })
    })
}

fn g1_from_words(words: &[FieldElement; 2], field: &str) -> ZkResult<G1Affine> {
    // (0, 0) is how the EVM spells the point at infinity
    if words.iter().all(FieldElement::is_zero) {
        return Ok(G1Affine::identity());
    }
    let point = G1Affine::new_unchecked(fq_at(&words[0], field)?, fq_at(&words[1], field)?);
    if point.is_on_curve() && point.is_in_correct_subgroup_assuming_on_curve() {
        Ok(point)
    } else {
        Err(ZkError::InvalidPoint(field.to_string()))
    }
}

fn g2_from_words(words: &[[FieldElement; 2]; 2], field: &str) -> ZkResult<G2Affine> {
    if words.iter().flatten().all(FieldElement::is_zero) {
        return Ok(G2Affine::identity());
    }
    // verifier order is [c1, c0]
    let [[x1, x0], [y1, y0]] = words;
    let x = Fq2::new(fq_at(x0, field)?, fq_at(x1, field)?);
    let y = Fq2::new(fq_at(y0, field)?, fq_at(y1, field)?);
    let point = G2Affine::new_unchecked(x, y);
    if point.is_on_curve() && point.is_in_correct_subgroup_assuming_on_curve() {
        Ok(point)
    } else {
        Err(ZkError::InvalidPoint(field.to_string()))
    }
}

/// Rebuild the arkworks proof an EVM verifier would see from this call data
pub fn proof_from_calldata(calldata: &CallData) -> ZkResult<Proof<Bn254>> {
    Ok(Proof {
        a: g1_from_words(&calldata.pi_a, "pi_a")?,
        b: g2_from_words(&calldata.pi_b, "pi_b")?,
        c: g1_from_words(&calldata.pi_c, "pi_c")?,
    })
}

pub fn inputs_from_calldata(calldata: &CallData) -> ZkResult<Vec<Fr>> {
    calldata
        .input
        .iter()
        .map(|fe| {
            element_to_field::<Fr>(fe).ok_or_else(|| {
                ZkError::Field(FieldError::NotInField {
                    value: fe.to_hex(),
                    modulus: Modulus::Scalar,
                })
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calldata::{assemble, assemble_with, AssembleOptions, G2Order};
    use ark_ec::{AffineRepr, CurveGroup};
    use ark_ff::UniformRand;
    use ark_std::rand::{rngs::StdRng, SeedableRng};

    fn random_proof(rng: &mut StdRng) -> Proof<Bn254> {
        Proof {
            a: (G1Affine::generator() * Fr::rand(rng)).into_affine(),
            b: (G2Affine::generator() * Fr::rand(rng)).into_affine(),
            c: (G1Affine::generator() * Fr::rand(rng)).into_affine(),
        }
    }

    #[test]
    fn element_field_round_trip() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..10 {
            let fr = Fr::rand(&mut rng);
            let fe = field_to_element(&fr);
            assert_eq!(element_to_field::<Fr>(&fe), Some(fr));
            let limbs: BigUint = fr.into_bigint().into();
            assert_eq!(field_to_biguint(&fr), limbs);
        }
    }

    #[test]
    fn element_to_field_rejects_modulus() {
        let r = FieldElement::from_be_bytes(*Modulus::Scalar.be_bytes());
        assert_eq!(element_to_field::<Fr>(&r), None);
        // r is below q, so it is a valid coordinate
        assert!(element_to_field::<Fq>(&r).is_some());
    }

    #[test]
    fn raw_proof_uses_prover_limb_order() {
        let mut rng = StdRng::seed_from_u64(7);
        let proof = random_proof(&mut rng);
        let raw = proof_to_raw(&proof);
        assert_eq!(raw.pi_b[0][0], field_to_biguint(&proof.b.x.c0));
        assert_eq!(raw.pi_b[0][1], field_to_biguint(&proof.b.x.c1));
        assert_eq!(raw.pi_b[1][0], field_to_biguint(&proof.b.y.c0));
    }

    #[test]
    fn swapped_calldata_rebuilds_the_same_proof() {
        let mut rng = StdRng::seed_from_u64(11);
        let proof = random_proof(&mut rng);
        let cd = assemble(&proof_to_raw(&proof), &[]).unwrap();
        let rebuilt = proof_from_calldata(&cd).unwrap();
        assert_eq!(rebuilt, proof);
    }

    #[test]
    fn unswapped_calldata_does_not_rebuild_the_proof() {
        let mut rng = StdRng::seed_from_u64(11);
        let proof = random_proof(&mut rng);
        let opts = AssembleOptions {
            g2_order: G2Order::AsIs,
            strict: false,
        };
        let cd = assemble_with(&proof_to_raw(&proof), &[], &opts).unwrap();
        match proof_from_calldata(&cd) {
            Err(ZkError::InvalidPoint(field)) => assert_eq!(field, "pi_b"),
            Ok(rebuilt) => assert_ne!(rebuilt.b, proof.b),
            Err(other) => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn off_curve_g1_is_rejected() {
        let mut rng = StdRng::seed_from_u64(3);
        let proof = random_proof(&mut rng);
        let mut cd = assemble(&proof_to_raw(&proof), &[]).unwrap();
        cd.pi_a[1] = FieldElement::from(5);
        assert!(matches!(proof_from_calldata(&cd), Err(ZkError::InvalidPoint(f)) if f == "pi_a"));
    }

    #[test]
    fn zero_words_are_the_identity() {
        let cd = CallData {
            pi_a: [FieldElement::ZERO; 2],
            pi_b: [[FieldElement::ZERO; 2]; 2],
            pi_c: [FieldElement::ZERO; 2],
            input: vec![],
        };
        let proof = proof_from_calldata(&cd).unwrap();
        assert!(proof.a.is_zero());
        assert!(proof.b.is_zero());
    }

    #[test]
    fn inputs_round_trip_through_calldata() {
        let inputs = vec![Fr::from(12u64), Fr::from(7u64)];
        let mut rng = StdRng::seed_from_u64(5);
        let proof = random_proof(&mut rng);
        let cd = assemble(&proof_to_raw(&proof), &signals_from_fr(&inputs)).unwrap();
        assert_eq!(inputs_from_calldata(&cd).unwrap(), inputs);
    }
}
