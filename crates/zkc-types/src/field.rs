// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Canonical 256-bit field elements.
//!
//! A [`FieldElement`] is always exactly 32 big-endian bytes. Its textual form
//! is `0x` followed by 64 lowercase hex digits, left-zero-padded, which is the
//! shape a Solidity `uint256` argument takes.
//!
//! [`encode`] is the only way in from an arbitrary-precision integer and
//! refuses anything wider than 256 bits instead of wrapping.
//!
//! ```rust
//! use num_bigint::BigUint;
//! use zkc_types::field::encode;
//!
//! let fe = encode(&BigUint::from(42u32)).unwrap();
//! assert_eq!(fe.to_hex().len(), 66);
//! assert!(fe.to_hex().ends_with("2a"));
//! ```

use std::fmt;

use num_bigint::BigUint;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::FieldError;

/// Width of an encoded element in bytes.
pub const FIELD_BYTES: usize = 32;

/// Width of an encoded element in bits.
pub const FIELD_BITS: u64 = 256;

/// Width of an encoded element in hex digits (without the `0x` prefix).
pub const FIELD_HEX_DIGITS: usize = 64;

/// BN254 base field modulus q (curve coordinates), big-endian.
pub const BN254_BASE_MODULUS: [u8; 32] = [
    0x30, 0x64, 0x4e, 0x72, 0xe1, 0x31, 0xa0, 0x29, 0xb8, 0x50, 0x45, 0xb6, 0x81, 0x81, 0x58, 0x5d,
    0x97, 0x81, 0x6a, 0x91, 0x68, 0x71, 0xca, 0x8d, 0x3c, 0x20, 0x8c, 0x16, 0xd8, 0x7c, 0xfd, 0x47,
];

/// BN254 scalar field modulus r (public signals), big-endian.
pub const BN254_SCALAR_MODULUS: [u8; 32] = [
    0x30, 0x64, 0x4e, 0x72, 0xe1, 0x31, 0xa0, 0x29, 0xb8, 0x50, 0x45, 0xb6, 0x81, 0x81, 0x58, 0x5d,
    0x28, 0x33, 0xe8, 0x48, 0x79, 0xb9, 0x70, 0x91, 0x43, 0xe1, 0xf5, 0x93, 0xf0, 0x00, 0x00, 0x01,
];

/// Which BN254 modulus a value is checked against.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Modulus {
    /// q: coordinates of G1/G2 points
    Base,
    /// r: public signals
    Scalar,
}

impl Modulus {
    pub fn be_bytes(self) -> &'static [u8; 32] {
        match self {
            Modulus::Base => &BN254_BASE_MODULUS,
            Modulus::Scalar => &BN254_SCALAR_MODULUS,
        }
    }

    pub fn to_biguint(self) -> BigUint {
        BigUint::from_bytes_be(self.be_bytes())
    }
}

impl fmt::Display for Modulus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Modulus::Base => f.write_str("BN254 base field"),
            Modulus::Scalar => f.write_str("BN254 scalar field"),
        }
    }
}

/// A 256-bit unsigned integer held as 32 big-endian bytes.
///
/// Ordering compares the bytes lexicographically, which for a fixed-width
/// big-endian value is numeric order.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FieldElement([u8; FIELD_BYTES]);

impl FieldElement {
    pub const ZERO: FieldElement = FieldElement([0u8; FIELD_BYTES]);

    pub const fn from_be_bytes(bytes: [u8; FIELD_BYTES]) -> Self {
        Self(bytes)
    }

    pub const fn to_be_bytes(&self) -> [u8; FIELD_BYTES] {
        self.0
    }

    pub fn as_bytes(&self) -> &[u8; FIELD_BYTES] {
        &self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|b| *b == 0)
    }

    /// Decode back to an arbitrary-precision integer.
    pub fn to_biguint(&self) -> BigUint {
        BigUint::from_bytes_be(&self.0)
    }

    /// `0x`-prefixed, 64 lowercase hex digits.
    pub fn to_hex(&self) -> String {
        format!("0x{}", hex::encode(self.0))
    }

    /// Parse hex with or without `0x`. Short input is left-padded; input
    /// wider than 256 bits is rejected.
    pub fn from_hex(s: &str) -> Result<Self, FieldError> {
        let digits = s
            .strip_prefix("0x")
            .or_else(|| s.strip_prefix("0X"))
            .unwrap_or(s);
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(FieldError::InvalidHex(s.to_string()));
        }
        if digits.len() > FIELD_HEX_DIGITS {
            // leading zeros are harmless, anything else overflows
            let n = BigUint::parse_bytes(digits.as_bytes(), 16)
                .ok_or_else(|| FieldError::InvalidHex(s.to_string()))?;
            return encode(&n);
        }
        let padded = format!("{digits:0>width$}", width = FIELD_HEX_DIGITS);
        let mut out = [0u8; FIELD_BYTES];
        hex::decode_to_slice(&padded, &mut out)
            .map_err(|_| FieldError::InvalidHex(s.to_string()))?;
        Ok(Self(out))
    }

    /// Require `self < modulus`.
    pub fn check_below(&self, modulus: Modulus) -> Result<(), FieldError> {
        if &self.0 < modulus.be_bytes() {
            Ok(())
        } else {
            Err(FieldError::NotInField {
                value: self.to_hex(),
                modulus,
            })
        }
    }
}

/// Encode an arbitrary-precision integer as a canonical field element.
///
/// Fails with [`FieldError::Overflow`] when `n` does not fit in 256 bits.
/// Zero encodes to 32 zero bytes.
pub fn encode(n: &BigUint) -> Result<FieldElement, FieldError> {
    let bits = n.bits();
    if bits > FIELD_BITS {
        return Err(FieldError::Overflow { bits });
    }
    let bytes = n.to_bytes_be();
    let mut out = [0u8; FIELD_BYTES];
    out[FIELD_BYTES - bytes.len()..].copy_from_slice(&bytes);
    Ok(FieldElement(out))
}

impl From<u64> for FieldElement {
    fn from(v: u64) -> Self {
        let mut out = [0u8; FIELD_BYTES];
        out[FIELD_BYTES - 8..].copy_from_slice(&v.to_be_bytes());
        Self(out)
    }
}

impl TryFrom<&BigUint> for FieldElement {
    type Error = FieldError;

    fn try_from(n: &BigUint) -> Result<Self, Self::Error> {
        encode(n)
    }
}

impl fmt::Display for FieldElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Debug for FieldElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FieldElement({})", self.to_hex())
    }
}

impl Serialize for FieldElement {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for FieldElement {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        FieldElement::from_hex(&s).map_err(serde::de::Error::custom)
    }
}
