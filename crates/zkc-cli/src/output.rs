//! Terminal rendering. Status lines go to stderr; stdout carries only the
//! command's result, which under `--json` is a single JSON document.

use std::sync::atomic::{AtomicBool, Ordering};

use anyhow::Result;
use colored::{ColoredString, Colorize};
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use serde_json::Value;
use zkc_sdk::{CallData, FieldElement};

static JSON_MODE: AtomicBool = AtomicBool::new(false);

pub fn set_json_mode(enabled: bool) {
    JSON_MODE.store(enabled, Ordering::Relaxed);
}

pub fn is_json() -> bool {
    JSON_MODE.load(Ordering::Relaxed)
}

#[derive(Clone, Copy)]
enum Tone {
    Plain,
    Good,
    Caution,
    Bad,
}

fn status(tone: Tone, msg: &str) {
    if is_json() {
        return;
    }
    let line: ColoredString = match tone {
        Tone::Plain => msg.normal(),
        Tone::Good => msg.green(),
        Tone::Caution => msg.yellow(),
        Tone::Bad => msg.red(),
    };
    eprintln!("{line}");
}

pub fn success(msg: &str) {
    status(Tone::Good, msg);
}

pub fn warn(msg: &str) {
    status(Tone::Caution, msg);
}

pub fn error_msg(msg: &str) {
    status(Tone::Bad, msg);
}

pub fn info(msg: &str) {
    status(Tone::Plain, msg);
}

pub fn label(key: &str, val: &str) {
    status(Tone::Plain, &format!("{} {}", format!("{key}:").bold(), val));
}

/// Every call-data word with its argument path, in ABI order.
pub fn labelled_words(cd: &CallData) -> Vec<(String, FieldElement)> {
    let mut words = Vec::with_capacity(8 + cd.input.len());
    for (i, fe) in cd.pi_a.iter().enumerate() {
        words.push((format!("pi_a[{i}]"), *fe));
    }
    for (i, pair) in cd.pi_b.iter().enumerate() {
        for (j, fe) in pair.iter().enumerate() {
            words.push((format!("pi_b[{i}][{j}]"), *fe));
        }
    }
    for (i, fe) in cd.pi_c.iter().enumerate() {
        words.push((format!("pi_c[{i}]"), *fe));
    }
    for (i, fe) in cd.input.iter().enumerate() {
        words.push((format!("input[{i}]"), *fe));
    }
    words
}

/// Split a word's 64 hex digits into zero padding and significant digits.
/// A zero word keeps its last digit significant.
fn split_padding(fe: &FieldElement) -> (String, String) {
    let hex = fe.to_hex();
    let digits = &hex[2..];
    let at = digits.find(|c| c != '0').unwrap_or(digits.len() - 1);
    let (pad, sig) = digits.split_at(at);
    (pad.to_string(), sig.to_string())
}

/// Human-readable dump of every word, padding dimmed.
pub fn describe(cd: &CallData) {
    for (key, fe) in labelled_words(cd) {
        let (pad, sig) = split_padding(&fe);
        label(&key, &format!("0x{}{}", pad.dimmed(), sig));
    }
}

pub fn json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// A command's result on stdout: `{ key: value }` under `--json`, otherwise
/// strings bare and everything else as pretty JSON.
pub fn result<T: Serialize>(key: &str, value: &T) -> Result<()> {
    let value = serde_json::to_value(value)?;
    if is_json() {
        return json(&serde_json::json!({ key: value }));
    }
    match value {
        Value::String(text) => println!("{text}"),
        other => json(&other)?,
    }
    Ok(())
}

pub fn spinner(msg: &str) -> ProgressBar {
    if is_json() {
        return ProgressBar::hidden();
    }
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner()
        .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏")
        .template("{spinner:.cyan} {msg}")
    {
        pb.set_style(style);
    }
    pb.set_message(msg.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(100));
    pb
}

pub fn fail_with_hint(error: &str, hint: &str) -> anyhow::Error {
    anyhow::anyhow!("{}\n{} {}", error.red(), "hint:".bold(), hint)
}

#[cfg(test)]
mod tests {
    use super::*;
    use zkc_sdk::{assemble, BigUint, RawProof};

    fn sample() -> CallData {
        let proof = RawProof::from_u64([1, 2], [[5, 6], [7, 8]], [3, 4]);
        assemble(&proof, &[BigUint::from(42u32), BigUint::from(0u32)]).unwrap()
    }

    #[test]
    fn words_follow_abi_order() {
        let words = labelled_words(&sample());
        let keys: Vec<&str> = words.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(
            keys,
            [
                "pi_a[0]", "pi_a[1]", "pi_b[0][0]", "pi_b[0][1]", "pi_b[1][0]", "pi_b[1][1]",
                "pi_c[0]", "pi_c[1]", "input[0]", "input[1]",
            ]
        );
        // pi_b pairs arrive already swapped
        assert_eq!(words[2].1, FieldElement::from(6));
        assert_eq!(words[8].1, FieldElement::from(42));
    }

    #[test]
    fn padding_split() {
        let (pad, sig) = split_padding(&FieldElement::from(42));
        assert_eq!((pad.len(), sig.as_str()), (62, "2a"));

        let (pad, sig) = split_padding(&FieldElement::from(0));
        assert_eq!((pad.len(), sig.as_str()), (63, "0"));

        let (pad, sig) = split_padding(&FieldElement::from_be_bytes([0xff; 32]));
        assert!(pad.is_empty());
        assert_eq!(sig.len(), 64);
    }
}
