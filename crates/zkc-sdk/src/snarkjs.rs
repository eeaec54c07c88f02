// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! snarkjs artifact parsing.
//!
//! snarkjs writes `proof.json` with projective points: `pi_a` and `pi_c`
//! carry a third coordinate `"1"`, `pi_b` a third pair `["1", "0"]`. The
//! loader strips that affine marker and hands the assembler a proof in the
//! two-coordinate shape. Any other arity is left alone so that
//! [`assemble`](crate::calldata::assemble) reports it as a shape mismatch.
//!
//! Integers may be decimal strings, `0x` hex strings or plain JSON numbers.

use std::fs;
use std::path::Path;

use num_bigint::BigUint;
use num_traits::{One, Zero};
use serde::de::Error as _;
use serde::ser::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Number, Value};
use zkc_types::{PublicSignals, RawProof};

use crate::error::ArtifactError;

/// A prover-native integer as it appears in JSON.
///
/// Unquoted numbers keep the exact digits from the document (serde_json's
/// `arbitrary_precision`), so 254-bit values survive without rounding.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum IntRepr {
    /// Quoted: decimal, or hex after `0x`.
    Text(String),
    /// Unquoted JSON number, as written.
    Number(String),
}

impl IntRepr {
    pub fn to_biguint(&self, field: &str) -> Result<BigUint, ArtifactError> {
        match self {
            IntRepr::Text(s) => parse_int_text(s, field),
            // JSON numbers have no hex form
            IntRepr::Number(s) if s.starts_with("0x") || s.starts_with("0X") => {
                Err(not_an_integer(field, s))
            }
            IntRepr::Number(s) => parse_int_text(s, field),
        }
    }
}

impl From<&BigUint> for IntRepr {
    fn from(n: &BigUint) -> Self {
        IntRepr::Text(n.to_str_radix(10))
    }
}

impl Serialize for IntRepr {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            IntRepr::Text(s) => serializer.serialize_str(s),
            IntRepr::Number(s) => s
                .parse::<Number>()
                .map_err(S::Error::custom)?
                .serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for IntRepr {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match Value::deserialize(deserializer)? {
            Value::String(s) => Ok(IntRepr::Text(s)),
            Value::Number(n) => Ok(IntRepr::Number(n.to_string())),
            other => Err(D::Error::custom(format!("expected an integer, found {other}"))),
        }
    }
}

fn not_an_integer(field: &str, value: &str) -> ArtifactError {
    ArtifactError::NotAnInteger {
        field: field.to_string(),
        value: value.to_string(),
    }
}

/// Strict integer text: ASCII decimal digits, or hex digits after `0x`.
/// Whitespace, signs and digit separators are corruption, not formatting.
fn parse_int_text(s: &str, field: &str) -> Result<BigUint, ArtifactError> {
    if s.starts_with('-') {
        return Err(ArtifactError::Negative {
            field: field.to_string(),
            value: s.to_string(),
        });
    }
    let (digits, radix) = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => (hex, 16),
        None => (s, 10),
    };
    let well_formed = !digits.is_empty()
        && digits.bytes().all(|b| match radix {
            16 => b.is_ascii_hexdigit(),
            _ => b.is_ascii_digit(),
        });
    if !well_formed {
        return Err(not_an_integer(field, s));
    }
    BigUint::parse_bytes(digits.as_bytes(), radix).ok_or_else(|| not_an_integer(field, s))
}

/// `proof.json` as written by `snarkjs groth16 prove`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ProofJson {
    pub pi_a: Vec<IntRepr>,
    pub pi_b: Vec<Vec<IntRepr>>,
    pub pi_c: Vec<IntRepr>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protocol: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub curve: Option<String>,
}

/// `{ proof, publicSignals }` as returned by `snarkjs.groth16.fullProve`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FullProveJson {
    pub proof: ProofJson,
    #[serde(rename = "publicSignals")]
    pub public_signals: Vec<IntRepr>,
}

impl ProofJson {
    pub fn into_raw(self) -> Result<RawProof, ArtifactError> {
        if let Some(protocol) = &self.protocol {
            if protocol != "groth16" {
                return Err(ArtifactError::Unsupported {
                    what: "protocol",
                    found: protocol.clone(),
                });
            }
        }
        if let Some(curve) = &self.curve {
            if !matches!(curve.as_str(), "bn128" | "bn254") {
                return Err(ArtifactError::Unsupported {
                    what: "curve",
                    found: curve.clone(),
                });
            }
        }

        let pi_a = strip_g1_marker("pi_a", ints("pi_a", &self.pi_a)?)?;
        let pi_c = strip_g1_marker("pi_c", ints("pi_c", &self.pi_c)?)?;
        let pi_b = self
            .pi_b
            .iter()
            .enumerate()
            .map(|(i, pair)| ints(&format!("pi_b[{i}]"), pair))
            .collect::<Result<Vec<_>, _>>()?;
        let pi_b = strip_g2_marker(pi_b)?;

        Ok(RawProof { pi_a, pi_b, pi_c })
    }

    /// snarkjs-shaped JSON for a proof, affine markers included.
    pub fn from_raw(proof: &RawProof) -> Self {
        let g1 = |coords: &[BigUint]| -> Vec<IntRepr> {
            coords
                .iter()
                .map(IntRepr::from)
                .chain(std::iter::once(IntRepr::Text("1".into())))
                .collect()
        };
        let mut pi_b: Vec<Vec<IntRepr>> = proof
            .pi_b
            .iter()
            .map(|pair| pair.iter().map(IntRepr::from).collect())
            .collect();
        pi_b.push(vec![IntRepr::Text("1".into()), IntRepr::Text("0".into())]);

        Self {
            pi_a: g1(&proof.pi_a),
            pi_b,
            pi_c: g1(&proof.pi_c),
            protocol: Some("groth16".into()),
            curve: Some("bn128".into()),
        }
    }
}

fn ints(field: &str, values: &[IntRepr]) -> Result<Vec<BigUint>, ArtifactError> {
    values
        .iter()
        .enumerate()
        .map(|(i, v)| v.to_biguint(&format!("{field}[{i}]")))
        .collect()
}

fn strip_g1_marker(field: &str, mut coords: Vec<BigUint>) -> Result<Vec<BigUint>, ArtifactError> {
    if coords.len() == 3 {
        if !coords[2].is_one() {
            return Err(ArtifactError::NonAffine {
                field: field.to_string(),
            });
        }
        coords.truncate(2);
    }
    Ok(coords)
}

fn strip_g2_marker(mut coords: Vec<Vec<BigUint>>) -> Result<Vec<Vec<BigUint>>, ArtifactError> {
    if coords.len() == 3 {
        let affine = matches!(coords[2].as_slice(), [one, zero] if one.is_one() && zero.is_zero());
        if !affine {
            return Err(ArtifactError::NonAffine {
                field: "pi_b".to_string(),
            });
        }
        coords.truncate(2);
    }
    Ok(coords)
}

pub fn parse_proof(json: &str) -> Result<RawProof, ArtifactError> {
    let proof: ProofJson = serde_json::from_str(json)?;
    proof.into_raw()
}

pub fn parse_public_signals(json: &str) -> Result<PublicSignals, ArtifactError> {
    let signals: Vec<IntRepr> = serde_json::from_str(json)?;
    ints("publicSignals", &signals)
}

pub fn parse_full_prove(json: &str) -> Result<(RawProof, PublicSignals), ArtifactError> {
    let full: FullProveJson = serde_json::from_str(json)?;
    let signals = ints("publicSignals", &full.public_signals)?;
    Ok((full.proof.into_raw()?, signals))
}

pub fn load_proof(path: &Path) -> Result<RawProof, ArtifactError> {
    parse_proof(&read(path)?)
}

pub fn load_public_signals(path: &Path) -> Result<PublicSignals, ArtifactError> {
    parse_public_signals(&read(path)?)
}

/// Accepts either a bare `proof.json` or a combined `{ proof, publicSignals }`
/// file. A bare proof comes back with no signals.
pub fn load_proof_bundle(path: &Path) -> Result<(RawProof, Option<PublicSignals>), ArtifactError> {
    let text = read(path)?;
    let value: serde_json::Value = serde_json::from_str(&text)?;
    if value.get("publicSignals").is_some() {
        let (proof, signals) = parse_full_prove(&text)?;
        Ok((proof, Some(signals)))
    } else {
        Ok((parse_proof(&text)?, None))
    }
}

fn read(path: &Path) -> Result<String, ArtifactError> {
    fs::read_to_string(path).map_err(|source| ArtifactError::Read {
        path: path.to_path_buf(),
        source,
    })
}
