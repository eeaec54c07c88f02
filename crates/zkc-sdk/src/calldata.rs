// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Prover output → `verifyProof` call data.
//!
//! Turns a [`RawProof`] and its public signals into the argument tuple of
//! `verifyProof(uint256[2] a, uint256[2][2] b, uint256[2] c, uint256[] input)`.
//!
//! # G2 limb order
//!
//! Provers such as snarkjs emit `pi_b` as `[[x0, x1], [y0, y1]]` (real part
//! first). The EVM `ecPairing` precompile, and every verifier built on it,
//! reads `[[x1, x0], [y1, y0]]`. [`assemble`] always swaps within each pair.
//! An unswapped `pi_b` still type-checks on-chain and simply fails the
//! pairing check.
//!
//! # Example
//!
//! ```rust
//! use num_bigint::BigUint;
//! use zkc_sdk::calldata::assemble;
//! use zkc_types::RawProof;
//!
//! let proof = RawProof::from_u64([1, 2], [[5, 6], [7, 8]], [3, 4]);
//! let cd = assemble(&proof, &[BigUint::from(42u32)]).unwrap();
//! assert_eq!(cd.pi_b[0][0].to_biguint(), BigUint::from(6u32));
//! assert!(cd.input[0].to_hex().ends_with("2a"));
//! ```

use std::fmt;

use num_bigint::BigUint;
use serde::{Deserialize, Serialize};
use zkc_types::{encode, FieldElement, G1Point, G2Point, Modulus, RawProof};

use crate::error::CallDataError;

/// Limb order of the emitted `pi_b`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum G2Order {
    /// `[[x1, x0], [y1, y0]]`, the EVM precompile convention.
    #[default]
    Swapped,
    /// Keep the prover's `[[x0, x1], [y0, y1]]`.
    AsIs,
}

impl fmt::Display for G2Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            G2Order::Swapped => "swapped",
            G2Order::AsIs => "as_is",
        })
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AssembleOptions {
    pub g2_order: G2Order,
    /// Also require coordinates `< q` and public signals `< r`.
    pub strict: bool,
}

impl AssembleOptions {
    pub fn strict() -> Self {
        Self {
            g2_order: G2Order::Swapped,
            strict: true,
        }
    }
}

/// Arguments for `verifyProof`, every element a canonical 256-bit word.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CallData {
    pub pi_a: G1Point,
    pub pi_b: G2Point,
    pub pi_c: G1Point,
    pub input: Vec<FieldElement>,
}

/// Assemble call data with the EVM limb order and width-only checks.
pub fn assemble(proof: &RawProof, public_signals: &[BigUint]) -> Result<CallData, CallDataError> {
    assemble_with(proof, public_signals, &AssembleOptions::default())
}

pub fn assemble_with(
    proof: &RawProof,
    public_signals: &[BigUint],
    opts: &AssembleOptions,
) -> Result<CallData, CallDataError> {
    // shapes first so nothing is encoded for a malformed proof
    check_arity("pi_a", proof.pi_a.len(), 2)?;
    check_arity("pi_b", proof.pi_b.len(), 2)?;
    for (i, pair) in proof.pi_b.iter().enumerate() {
        check_arity(&format!("pi_b[{i}]"), pair.len(), 2)?;
    }
    check_arity("pi_c", proof.pi_c.len(), 2)?;

    let (coord, scalar) = if opts.strict {
        (Some(Modulus::Base), Some(Modulus::Scalar))
    } else {
        (None, None)
    };

    let pi_a = encode_pair("pi_a", &proof.pi_a, coord)?;
    let pi_c = encode_pair("pi_c", &proof.pi_c, coord)?;

    let b0 = encode_pair("pi_b[0]", &proof.pi_b[0], coord)?;
    let b1 = encode_pair("pi_b[1]", &proof.pi_b[1], coord)?;
    let pi_b = match opts.g2_order {
        G2Order::Swapped => [swap_limbs(b0), swap_limbs(b1)],
        G2Order::AsIs => [b0, b1],
    };

    let input = public_signals
        .iter()
        .enumerate()
        .map(|(i, n)| encode_at(n, scalar, || format!("input[{i}]")))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(CallData {
        pi_a,
        pi_b,
        pi_c,
        input,
    })
}

fn check_arity(field: &str, found: usize, expected: usize) -> Result<(), CallDataError> {
    if found == expected {
        Ok(())
    } else {
        Err(CallDataError::ShapeMismatch {
            field: field.to_string(),
            expected,
            found,
        })
    }
}

fn encode_pair(
    field: &str,
    values: &[BigUint],
    modulus: Option<Modulus>,
) -> Result<[FieldElement; 2], CallDataError> {
    match values {
        [x, y] => Ok([
            encode_at(x, modulus, || format!("{field}[0]"))?,
            encode_at(y, modulus, || format!("{field}[1]"))?,
        ]),
        _ => Err(CallDataError::ShapeMismatch {
            field: field.to_string(),
            expected: 2,
            found: values.len(),
        }),
    }
}

fn encode_at(
    n: &BigUint,
    modulus: Option<Modulus>,
    field: impl Fn() -> String,
) -> Result<FieldElement, CallDataError> {
    let fe = encode(n).map_err(|source| CallDataError::EncodingOverflow {
        field: field(),
        source,
    })?;
    if let Some(modulus) = modulus {
        fe.check_below(modulus)
            .map_err(|_| CallDataError::OutOfField {
                field: field(),
                modulus,
            })?;
    }
    Ok(fe)
}

fn swap_limbs([c0, c1]: [FieldElement; 2]) -> [FieldElement; 2] {
    [c1, c0]
}

impl CallData {
    /// The snarkjs `exportSolidityCallData` rendering:
    /// `["a0", "a1"],[["b00", "b01"],["b10", "b11"]],["c0", "c1"],["i0","i1",...]`.
    pub fn to_solidity_args(&self) -> String {
        let pair = |p: &[FieldElement; 2]| format!("[\"{}\", \"{}\"]", p[0], p[1]);
        let input = self
            .input
            .iter()
            .map(|fe| format!("\"{fe}\""))
            .collect::<Vec<_>>()
            .join(",");
        format!(
            "{},[{},{}],{},[{}]",
            pair(&self.pi_a),
            pair(&self.pi_b[0]),
            pair(&self.pi_b[1]),
            pair(&self.pi_c),
            input
        )
    }

    /// The four positional arguments in the bracket syntax `cast call` takes.
    pub fn to_cast_args(&self) -> [String; 4] {
        let pair = |p: &[FieldElement; 2]| format!("[{},{}]", p[0], p[1]);
        let input = self
            .input
            .iter()
            .map(FieldElement::to_hex)
            .collect::<Vec<_>>()
            .join(",");
        [
            pair(&self.pi_a),
            format!("[{},{}]", pair(&self.pi_b[0]), pair(&self.pi_b[1])),
            pair(&self.pi_c),
            format!("[{input}]"),
        ]
    }
}
