// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Solidity ABI encoding of a `verifyProof` call.
//!
//! Layout after the 4-byte selector:
//!
//! | words | content |
//! |---|---|
//! | 0..2 | `a` |
//! | 2..6 | `b` (row-major) |
//! | 6..8 | `c` |
//! | 8 | offset of `input` = 288 |
//! | 9 | `input.len()` |
//! | 10.. | `input[i]` |

use alloy_primitives::U256;
use alloy_sol_types::{sol, SolCall};
use zkc_types::FieldElement;

use crate::calldata::CallData;

sol! {
    function verifyProof(
        uint256[2] a,
        uint256[2][2] b,
        uint256[2] c,
        uint256[] input
    ) external view returns (bool);
}

pub const VERIFY_PROOF_SIGNATURE: &str = verifyProofCall::SIGNATURE;

pub fn verify_proof_selector() -> [u8; 4] {
    verifyProofCall::SELECTOR
}

fn word(fe: &FieldElement) -> U256 {
    U256::from_be_bytes(fe.to_be_bytes())
}

fn pair(p: &[FieldElement; 2]) -> [U256; 2] {
    [word(&p[0]), word(&p[1])]
}

impl From<&CallData> for verifyProofCall {
    fn from(cd: &CallData) -> Self {
        verifyProofCall {
            a: pair(&cd.pi_a),
            b: [pair(&cd.pi_b[0]), pair(&cd.pi_b[1])],
            c: pair(&cd.pi_c),
            input: cd.input.iter().map(word).collect(),
        }
    }
}

/// Full transaction input: selector followed by the encoded arguments.
pub fn encode_verify_proof(calldata: &CallData) -> Vec<u8> {
    verifyProofCall::from(calldata).abi_encode()
}

pub fn encode_verify_proof_hex(calldata: &CallData) -> String {
    format!("0x{}", hex::encode(encode_verify_proof(calldata)))
}

/// Decode the `bool` a verifier returns. Anything but a clean 0/1 word is `None`.
pub fn decode_bool(data: &[u8]) -> Option<bool> {
    verifyProofCall::abi_decode_returns_validate(data).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calldata::assemble;
    use alloy_primitives::keccak256;
    use num_bigint::BigUint;
    use zkc_types::RawProof;

    const WORD: usize = 32;

    fn word_at(bytes: &[u8], i: usize) -> &[u8] {
        &bytes[4 + i * WORD..4 + (i + 1) * WORD]
    }

    #[test]
    fn selector_is_keccak_of_signature() {
        assert_eq!(
            VERIFY_PROOF_SIGNATURE,
            "verifyProof(uint256[2],uint256[2][2],uint256[2],uint256[])"
        );
        assert_eq!(verify_proof_selector(), keccak256(VERIFY_PROOF_SIGNATURE)[..4]);
    }

    #[test]
    fn encodes_head_and_dynamic_tail() {
        let proof = RawProof::from_u64([1, 2], [[5, 6], [7, 8]], [3, 4]);
        let signals = [BigUint::from(42u32), BigUint::from(9u32)];
        let cd = assemble(&proof, &signals).unwrap();
        let bytes = encode_verify_proof(&cd);

        assert_eq!(bytes.len(), 4 + WORD * 12);
        assert_eq!(&bytes[..4], &verify_proof_selector());

        let expected_head = [1u64, 2, 6, 5, 8, 7, 3, 4];
        for (i, v) in expected_head.iter().enumerate() {
            assert_eq!(word_at(&bytes, i), FieldElement::from(*v).as_bytes(), "word {i}");
        }
        assert_eq!(word_at(&bytes, 8), FieldElement::from(288).as_bytes());
        assert_eq!(word_at(&bytes, 9), FieldElement::from(2).as_bytes());
        assert_eq!(word_at(&bytes, 10), FieldElement::from(42).as_bytes());
        assert_eq!(word_at(&bytes, 11), FieldElement::from(9).as_bytes());
    }

    #[test]
    fn full_width_words_survive_encoding() {
        let mut cd = assemble(&RawProof::from_u64([1, 2], [[5, 6], [7, 8]], [3, 4]), &[]).unwrap();
        let top = FieldElement::from_be_bytes([0xff; 32]);
        cd.pi_a[0] = top;
        cd.input.push(top);
        let bytes = encode_verify_proof(&cd);
        assert_eq!(word_at(&bytes, 0), top.as_bytes());
        assert_eq!(word_at(&bytes, 10), top.as_bytes());
    }

    #[test]
    fn empty_input_still_has_length_word() {
        let proof = RawProof::from_u64([1, 2], [[5, 6], [7, 8]], [3, 4]);
        let cd = assemble(&proof, &[]).unwrap();
        let bytes = encode_verify_proof(&cd);
        assert_eq!(bytes.len(), 4 + WORD * 10);
        assert_eq!(word_at(&bytes, 9), &[0u8; WORD]);
    }

    #[test]
    fn hex_form_is_prefixed() {
        let proof = RawProof::from_u64([1, 2], [[5, 6], [7, 8]], [3, 4]);
        let cd = assemble(&proof, &[]).unwrap();
        let hex = encode_verify_proof_hex(&cd);
        assert!(hex.starts_with("0x"));
        assert_eq!(hex.len(), 2 + 2 * (4 + WORD * 10));
    }

    #[test]
    fn decode_bool_words() {
        let mut w = [0u8; 32];
        assert_eq!(decode_bool(&w), Some(false));
        w[31] = 1;
        assert_eq!(decode_bool(&w), Some(true));
        w[31] = 2;
        assert_eq!(decode_bool(&w), None);
        w[31] = 1;
        w[0] = 1;
        assert_eq!(decode_bool(&w), None);
        assert_eq!(decode_bool(&[1u8]), None);
    }
}
