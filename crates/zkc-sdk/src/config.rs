// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Configuration persistence.
//!
//! Stored as JSON at `~/.zkc/config.json`. A missing file means defaults.
//! `ZKC_BASE_PATH`, `ZKC_RPC_URL` and `ZKC_VERIFIER_ADDRESS` override the
//! stored values.
//!
//! Circuit artifact locations all hang off [`ZkConfig::base_path`]:
//!
//! | file | path |
//! |---|---|
//! | circuit input | `<base>/input.json` |
//! | witness generator | `<base>/out/circuit.wasm` |
//! | witness | `<base>/out/circuit.wtns` |
//! | proving key | `<base>/out/circuit.zkey` |
//! | proof | `<base>/out/proof.json` |
//! | public signals | `<base>/out/public.json` |
//!
//! # Example
//!
//! ```rust,no_run
//! use zkc_sdk::config::{load_config, save_config};
//!
//! # fn example() -> anyhow::Result<()> {
//! let mut cfg = load_config()?;
//! cfg.set("rpc_url", "http://127.0.0.1:8545")?;
//! save_config(&cfg)?;
//! # Ok(())
//! # }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

use crate::calldata::{AssembleOptions, G2Order};

pub const PLACEHOLDER: &str = "PLACEHOLDER";

pub const ALLOWED_KEYS: &[&str] = &[
    "base_path",
    "rpc_url",
    "verifier_address",
    "g2_order",
    "strict",
    "snarkjs_bin",
    "cast_bin",
];

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct ZkConfig {
    pub base_path: PathBuf,
    pub rpc_url: String,
    pub verifier_address: String,
    pub g2_order: G2Order,
    pub strict: bool,
    pub snarkjs_bin: String,
    pub cast_bin: String,
}

impl Default for ZkConfig {
    fn default() -> Self {
        Self {
            base_path: PathBuf::from("./circuits/zkcircuit/"),
            rpc_url: "http://127.0.0.1:8545".into(),
            verifier_address: PLACEHOLDER.into(),
            g2_order: G2Order::Swapped,
            strict: true,
            snarkjs_bin: "snarkjs".into(),
            cast_bin: "cast".into(),
        }
    }
}

/// Where a circuit's build outputs live.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CircuitArtifacts {
    pub input: PathBuf,
    pub wasm: PathBuf,
    pub witness: PathBuf,
    pub zkey: PathBuf,
    pub proof: PathBuf,
    pub public: PathBuf,
}

impl CircuitArtifacts {
    pub fn under(base: &Path) -> Self {
        let out = base.join("out");
        Self {
            input: base.join("input.json"),
            wasm: out.join("circuit.wasm"),
            witness: out.join("circuit.wtns"),
            zkey: out.join("circuit.zkey"),
            proof: out.join("proof.json"),
            public: out.join("public.json"),
        }
    }
}

impl ZkConfig {
    pub fn artifacts(&self) -> CircuitArtifacts {
        CircuitArtifacts::under(&self.base_path)
    }

    pub fn assemble_options(&self) -> AssembleOptions {
        AssembleOptions {
            g2_order: self.g2_order,
            strict: self.strict,
        }
    }

    pub fn verifier_configured(&self) -> bool {
        !self.verifier_address.is_empty() && self.verifier_address != PLACEHOLDER
    }

    /// Apply overrides from a variable lookup (normally the process env).
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(v) = lookup("ZKC_BASE_PATH") {
            self.base_path = PathBuf::from(v);
        }
        if let Some(v) = lookup("ZKC_RPC_URL") {
            self.rpc_url = v;
        }
        if let Some(v) = lookup("ZKC_VERIFIER_ADDRESS") {
            self.verifier_address = v;
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "base_path" => self.base_path = PathBuf::from(value),
            "rpc_url" => self.rpc_url = value.to_string(),
            "verifier_address" => self.verifier_address = value.to_string(),
            "g2_order" => {
                self.g2_order = match value {
                    "swapped" => G2Order::Swapped,
                    "as_is" => G2Order::AsIs,
                    other => bail!("g2_order must be `swapped` or `as_is`, got `{other}`"),
                }
            }
            "strict" => {
                self.strict = value
                    .parse()
                    .with_context(|| format!("strict must be true or false, got `{value}`"))?
            }
            "snarkjs_bin" => self.snarkjs_bin = value.to_string(),
            "cast_bin" => self.cast_bin = value.to_string(),
            other => bail!("unknown config key: {other}"),
        }
        Ok(())
    }
}

pub fn config_path() -> Result<PathBuf> {
    let home = dirs::home_dir().context("cannot determine home directory")?;
    Ok(home.join(".zkc").join("config.json"))
}

/// Stored config (or defaults) with environment overrides applied.
pub fn load_config() -> Result<ZkConfig> {
    let mut cfg = load_config_from(&config_path()?)?;
    cfg.apply_overrides(|key| std::env::var(key).ok());
    Ok(cfg)
}

pub fn load_config_from(path: &Path) -> Result<ZkConfig> {
    if !path.exists() {
        return Ok(ZkConfig::default());
    }
    let data = fs::read_to_string(path)
        .with_context(|| format!("cannot read config at {}", path.display()))?;
    serde_json::from_str(&data).context("invalid config JSON")
}

pub fn save_config(cfg: &ZkConfig) -> Result<()> {
    save_config_to(cfg, &config_path()?)
}

pub fn save_config_to(cfg: &ZkConfig, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(cfg)?;
    fs::write(path, json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = load_config_from(&dir.path().join("nope.json")).unwrap();
        assert_eq!(cfg, ZkConfig::default());
        assert!(!cfg.verifier_configured());
    }

    #[test]
    fn save_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");
        let mut cfg = ZkConfig::default();
        cfg.set("verifier_address", "0x5FbDB2315678afecb367f032d93F642f64180aa3").unwrap();
        cfg.set("g2_order", "as_is").unwrap();
        cfg.set("strict", "false").unwrap();
        save_config_to(&cfg, &path).unwrap();

        let loaded = load_config_from(&path).unwrap();
        assert_eq!(loaded, cfg);
        assert!(loaded.verifier_configured());
        assert_eq!(loaded.assemble_options().g2_order, G2Order::AsIs);
        assert!(!loaded.assemble_options().strict);
    }

    #[test]
    fn partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{"rpc_url": "http://node:8545", "g2_order": "swapped"}"#).unwrap();
        let cfg = load_config_from(&path).unwrap();
        assert_eq!(cfg.rpc_url, "http://node:8545");
        assert_eq!(cfg.snarkjs_bin, "snarkjs");
        assert!(cfg.strict);
    }

    #[test]
    fn env_overrides_win() {
        let mut cfg = ZkConfig::default();
        cfg.apply_overrides(|key| match key {
            "ZKC_BASE_PATH" => Some("/tmp/circ".into()),
            "ZKC_RPC_URL" => Some("http://other:8545".into()),
            _ => None,
        });
        assert_eq!(cfg.base_path, PathBuf::from("/tmp/circ"));
        assert_eq!(cfg.rpc_url, "http://other:8545");
        assert_eq!(cfg.verifier_address, PLACEHOLDER);
    }

    #[test]
    fn set_rejects_bad_values() {
        let mut cfg = ZkConfig::default();
        assert!(cfg.set("colour", "blue").is_err());
        assert!(cfg.set("g2_order", "sideways").is_err());
        assert!(cfg.set("strict", "maybe").is_err());
        for key in ALLOWED_KEYS {
            assert!(ZkConfig::default().set(key, "true").is_ok() || *key == "g2_order");
        }
    }

    #[test]
    fn artifacts_hang_off_base_path() {
        let cfg = ZkConfig {
            base_path: PathBuf::from("circuits/zk"),
            ..ZkConfig::default()
        };
        let a = cfg.artifacts();
        assert_eq!(a.input, PathBuf::from("circuits/zk/input.json"));
        assert_eq!(a.wasm, PathBuf::from("circuits/zk/out/circuit.wasm"));
        assert_eq!(a.zkey, PathBuf::from("circuits/zk/out/circuit.zkey"));
        assert_eq!(a.proof, PathBuf::from("circuits/zk/out/proof.json"));
    }
}
