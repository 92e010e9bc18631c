// crates/sharedex-cli/src/io/catalog_file.rs

use anyhow::{Context, Result};
use sharedex_core::catalog::builder;
use sharedex_core::CardCatalog;

/// Load the card list (`{"<id>": "<card key>"}`) from disk.
pub fn load_catalog(path: &str) -> Result<CardCatalog> {
    let json = std::fs::read_to_string(path).with_context(|| format!("read card list {path}"))?;
    let catalog =
        CardCatalog::from_json_map(&json).with_context(|| format!("parse card list {path}"))?;
    log::info!("card list {path}: entries={}", catalog.len());
    Ok(catalog)
}

/// Write a catalog in the card list format.
pub fn save_catalog(path: &str, catalog: &CardCatalog) -> Result<()> {
    let json = catalog.to_json_map()?;
    std::fs::write(path, json).with_context(|| format!("write card list {path}"))?;
    Ok(())
}

/// Build a catalog from the raw card database (array of card records).
pub fn build_from_raw(path: &str) -> Result<CardCatalog> {
    let json =
        std::fs::read_to_string(path).with_context(|| format!("read raw card details {path}"))?;
    let catalog = builder::build_from_raw_json(&json)
        .with_context(|| format!("build card list from {path}"))?;
    Ok(catalog)
}
