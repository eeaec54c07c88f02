// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Verifier contract access.
//!
//! [`ChainClient`] is the seam between assembled call data and whatever
//! answers `verifyProof`. [`CastClient`] shells out to Foundry's `cast`;
//! [`OffchainVerifier`](crate::verify::OffchainVerifier) answers locally.

use tokio::process::Command;
use tracing::{debug, instrument};

use crate::abi;
use crate::calldata::CallData;
use crate::config::ZkConfig;
use crate::error::{ZkError, ZkResult};

/// Signature passed to `cast call`, return type included.
pub const VERIFY_PROOF_CALL: &str =
    "verifyProof(uint256[2],uint256[2][2],uint256[2],uint256[])(bool)";

#[allow(async_fn_in_trait)]
pub trait ChainClient {
    /// Ask the verifier about this call data. `Ok(false)` is a rejection,
    /// `Err` means the question could not be asked.
    async fn verify_proof(&self, calldata: &CallData) -> ZkResult<bool>;
}

/// `cast call` against a deployed verifier.
#[derive(Clone, Debug)]
pub struct CastClient {
    pub bin: String,
    pub rpc_url: String,
    pub verifier_address: String,
}

impl CastClient {
    pub fn from_config(cfg: &ZkConfig) -> ZkResult<Self> {
        if !cfg.verifier_configured() {
            return Err(ZkError::Config(
                "verifier_address not set; run `zkc config set verifier_address <addr>`".into(),
            ));
        }
        Ok(Self {
            bin: cfg.cast_bin.clone(),
            rpc_url: cfg.rpc_url.clone(),
            verifier_address: cfg.verifier_address.clone(),
        })
    }
}

impl ChainClient for CastClient {
    #[instrument(skip_all, fields(verifier = %self.verifier_address))]
    async fn verify_proof(&self, calldata: &CallData) -> ZkResult<bool> {
        let args = calldata.to_cast_args();
        let out = call_contract(
            &self.bin,
            &self.verifier_address,
            &self.rpc_url,
            VERIFY_PROOF_CALL,
            &args,
        )
        .await?;
        parse_bool_output(&out)
    }
}

/// Read-only contract call via the `cast` CLI.
///
/// `args` are passed positionally after the function signature.
pub async fn call_contract(
    bin: &str,
    address: &str,
    rpc_url: &str,
    signature: &str,
    args: &[String],
) -> ZkResult<String> {
    let mut cmd = Command::new(bin);
    cmd.arg("call")
        .arg(address)
        .arg(signature)
        .args(args)
        .arg("--rpc-url")
        .arg(rpc_url);

    debug!(%bin, %address, %signature, "calling contract");
    let output = cmd
        .output()
        .await
        .map_err(|e| ZkError::Chain(format!("failed to run `{bin}` ({e}), is Foundry installed?")))?;

    if output.status.success() {
        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    } else {
        let stderr = String::from_utf8_lossy(&output.stderr);
        Err(ZkError::Chain(format!("{bin} call failed: {}", stderr.trim())))
    }
}

/// Accepts `cast`'s decoded `true`/`false` or a raw 32-byte ABI word.
pub fn parse_bool_output(out: &str) -> ZkResult<bool> {
    let s = out.trim();
    match s {
        "true" => return Ok(true),
        "false" => return Ok(false),
        _ => {}
    }
    let digits = s.strip_prefix("0x").unwrap_or(s);
    hex::decode(digits)
        .ok()
        .and_then(|bytes| abi::decode_bool(&bytes))
        .ok_or_else(|| ZkError::Chain(format!("unexpected verifyProof output: {s:?}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PLACEHOLDER;

    #[test]
    fn parses_decoded_bools() {
        assert!(parse_bool_output("true\n").unwrap());
        assert!(!parse_bool_output("false").unwrap());
    }

    #[test]
    fn parses_raw_words() {
        let one = format!("0x{}1", "0".repeat(63));
        let zero = format!("0x{}", "0".repeat(64));
        assert!(parse_bool_output(&one).unwrap());
        assert!(!parse_bool_output(&zero).unwrap());
    }

    #[test]
    fn rejects_anything_else() {
        assert!(matches!(parse_bool_output(""), Err(ZkError::Chain(_))));
        assert!(matches!(parse_bool_output("0x02"), Err(ZkError::Chain(_))));
        assert!(matches!(parse_bool_output("Error: revert"), Err(ZkError::Chain(_))));
    }

    #[test]
    fn cast_client_needs_an_address() {
        let cfg = ZkConfig::default();
        assert_eq!(cfg.verifier_address, PLACEHOLDER);
        assert!(matches!(CastClient::from_config(&cfg), Err(ZkError::Config(_))));

        let cfg = ZkConfig {
            verifier_address: "0x5FbDB2315678afecb367f032d93F642f64180aa3".into(),
            ..ZkConfig::default()
        };
        let client = CastClient::from_config(&cfg).unwrap();
        assert_eq!(client.bin, "cast");
    }

    #[tokio::test]
    async fn missing_binary_is_a_chain_error() {
        let err = call_contract(
            "zkc-definitely-not-installed",
            "0x00",
            "http://127.0.0.1:1",
            VERIFY_PROOF_CALL,
            &[],
        )
        .await
        .unwrap_err();
        assert!(matches!(err, ZkError::Chain(_)));
    }
}
