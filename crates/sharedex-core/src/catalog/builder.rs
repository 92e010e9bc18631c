// crates/sharedex-core/src/catalog/builder.rs
//
// Derives the card list (id map) from the raw card database.
//
// Layout:
//   regular cards  1..PROMO_ID_BASE       ordered by (expansion, number)
//   promo cards    PROMO_ID_BASE..        same ordering, expansion "P-*"

use serde::Deserialize;

use crate::catalog::{CardCatalog, CardId};
use crate::codec::MAX_CARD_ID;
use crate::error::{DeckError, Result};

pub const PROMO_ID_BASE: u32 = 8192;

const PROMO_PREFIX: &str = "P-";

/// One record of the raw card database. Everything except the key is ignored.
#[derive(Debug, Deserialize)]
struct RawCard {
    card_id: String,
}

/// A card key split into its expansion code and collector number.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct CardKeyParts<'a> {
    pub expansion: &'a str,
    pub number: u32,
}

/// Promo cards are recognised by the whole key, so `"P-5"` is a promo even
/// though its expansion parses as `"P"`.
pub fn is_promo_key(key: &str) -> bool {
    key.starts_with(PROMO_PREFIX)
}

/// Split `"A2a-95"` into `("A2a", 95)`. The number follows the last `-`,
/// so promo keys such as `"P-A-5"` keep their full expansion `"P-A"`.
pub fn parse_card_key(key: &str) -> Result<CardKeyParts<'_>> {
    let (expansion, number) = key
        .rsplit_once('-')
        .ok_or_else(|| DeckError::CatalogFormat(format!("card key without number: {key:?}")))?;
    if expansion.is_empty() {
        return Err(DeckError::CatalogFormat(format!("card key without expansion: {key:?}")));
    }
    let number = number
        .parse::<u32>()
        .map_err(|_| DeckError::CatalogFormat(format!("bad card number in {key:?}")))?;
    Ok(CardKeyParts { expansion, number })
}

/// Build from the raw card database JSON (an array of card records).
pub fn build_from_raw_json(json: &str) -> Result<CardCatalog> {
    let raw: Vec<RawCard> = serde_json::from_str(json)?;
    build_from_keys(raw.iter().map(|c| c.card_id.as_str()))
}

/// Order and number an unordered set of card keys.
pub fn build_from_keys<'a, I>(keys: I) -> Result<CardCatalog>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut parsed = keys
        .into_iter()
        .map(|k| parse_card_key(k).map(|p| (p, k)))
        .collect::<Result<Vec<_>>>()?;
    parsed.sort();
    parsed.dedup();

    let (promos, regular): (Vec<_>, Vec<_>) = parsed.into_iter().partition(|(_, k)| is_promo_key(k));

    if regular.len() as u64 >= PROMO_ID_BASE as u64 {
        return Err(DeckError::CatalogFormat(format!(
            "{} regular cards overflow into the promo block at {}",
            regular.len(),
            PROMO_ID_BASE
        )));
    }
    if PROMO_ID_BASE as u64 + promos.len() as u64 > MAX_CARD_ID as u64 + 1 {
        return Err(DeckError::CatalogFormat(format!(
            "{} promo cards exceed the card id range",
            promos.len()
        )));
    }

    log::debug!(
        "catalog build: regular={} promo={}",
        regular.len(),
        promos.len()
    );

    let regular_ids = regular
        .into_iter()
        .enumerate()
        .map(|(i, (_, k))| (CardId(i as u32 + 1), k));
    let promo_ids = promos
        .into_iter()
        .enumerate()
        .map(|(i, (_, k))| (CardId(PROMO_ID_BASE + i as u32), k));

    CardCatalog::from_entries(regular_ids.chain(promo_ids))
}
