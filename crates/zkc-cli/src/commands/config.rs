use anyhow::Result;
use zkc_sdk::config::{config_path, load_config, load_config_from, save_config, ALLOWED_KEYS, PLACEHOLDER};

use crate::output;

pub fn set(key: &str, value: &str) -> Result<()> {
    if !ALLOWED_KEYS.contains(&key) {
        return Err(output::fail_with_hint(
            &format!("unknown config key: {key}"),
            &format!("allowed keys: {}", ALLOWED_KEYS.join(", ")),
        ));
    }

    // stored values only, env overrides must not leak into the file
    let mut cfg = load_config_from(&config_path()?)?;
    cfg.set(key, value)?;
    save_config(&cfg)?;

    if output::is_json() {
        output::json(&serde_json::json!({ "key": key, "value": value }))?;
    } else {
        output::success(&format!("{key} updated"));
    }
    Ok(())
}

pub fn show() -> Result<()> {
    let path = config_path()?;
    let cfg = load_config()?;

    if output::is_json() {
        output::json(&serde_json::json!({
            "path": path.display().to_string(),
            "config": serde_json::to_value(&cfg)?,
        }))?;
    } else {
        output::label("path", &path.display().to_string());
        output::label("base_path", &cfg.base_path.display().to_string());
        output::label("rpc_url", &cfg.rpc_url);
        output::label("verifier_address", &cfg.verifier_address);
        output::label("g2_order", &cfg.g2_order.to_string());
        output::label("strict", &cfg.strict.to_string());
        output::label("snarkjs_bin", &cfg.snarkjs_bin);
        output::label("cast_bin", &cfg.cast_bin);
        if cfg.verifier_address == PLACEHOLDER {
            output::warn("verifier_address not set, on-chain verify is unavailable");
        }
    }
    Ok(())
}
