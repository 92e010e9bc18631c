// crates/sharedex-cli/src/io/deck_file.rs

use anyhow::{Context, Result};

/// Read a deck list: either a JSON array of card keys, or plain text with one
/// key per line (blank lines and `#` comments skipped).
pub fn load_deck(path: &str) -> Result<Vec<String>> {
    let text = std::fs::read_to_string(path).with_context(|| format!("read deck {path}"))?;
    parse_deck(&text).with_context(|| format!("parse deck {path}"))
}

pub fn parse_deck(text: &str) -> Result<Vec<String>> {
    if text.trim_start().starts_with('[') {
        return Ok(serde_json::from_str(text)?);
    }
    Ok(text
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty() && !l.starts_with('#'))
        .map(str::to_string)
        .collect())
}
