// crates/sharedex-core/src/catalog/mod.rs
//
// Read-only mapping between card keys ("A1-1", "P-A-5", ...) and the small
// integer ids carried inside deck tokens.

pub mod builder;

use std::collections::{BTreeMap, HashMap};
use std::fmt;

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::error::{DeckError, Result};

/// Surrogate id for a card key. Tokens can only carry 1..=32767, but the
/// catalog itself is not limited so oversized catalogs fail at encode time
/// instead of wrapping.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CardId(pub u32);

impl CardId {
    #[inline]
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Immutable bidirectional key <-> id map. Built once, then shared (`Arc`) by
/// every encode/decode call.
#[derive(Clone, Debug, Default)]
pub struct CardCatalog {
    by_id: BTreeMap<CardId, String>,
    by_key: HashMap<String, CardId>,
}

impl CardCatalog {
    /// Number the keys in order, starting from 1.
    pub fn from_keys<I, S>(keys: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::from_entries(
            keys.into_iter()
                .enumerate()
                .map(|(i, k)| (CardId(i as u32 + 1), k)),
        )
    }

    /// Build from explicit (id, key) pairs. Both sides must be unique.
    pub fn from_entries<I, S>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (CardId, S)>,
        S: Into<String>,
    {
        let mut cat = CardCatalog::default();
        for (id, key) in entries {
            let key: String = key.into();
            if cat.by_id.contains_key(&id) {
                return Err(DeckError::DuplicateId(id));
            }
            if cat.by_key.contains_key(&key) {
                return Err(DeckError::DuplicateKey(key));
            }
            cat.by_key.insert(key.clone(), id);
            cat.by_id.insert(id, key);
        }
        log::info!(
            "catalog loaded: entries={} fingerprint={}",
            cat.len(),
            cat.fingerprint()
        );
        Ok(cat)
    }

    /// Parse the card list file: a JSON object of `"<decimal id>": "<key>"`.
    pub fn from_json_map(json: &str) -> Result<Self> {
        let raw: BTreeMap<String, String> = serde_json::from_str(json)?;
        let mut entries = Vec::with_capacity(raw.len());
        for (id, key) in raw {
            let v: u32 = id
                .trim()
                .parse()
                .map_err(|_| DeckError::CatalogFormat(format!("bad card id {id:?} for {key}")))?;
            entries.push((CardId(v), key));
        }
        Self::from_entries(entries)
    }

    /// Inverse of `from_json_map`, ids in ascending numeric order.
    pub fn to_json_map(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn resolve(&self, key: &str) -> Result<CardId> {
        self.by_key
            .get(key)
            .copied()
            .ok_or_else(|| DeckError::UnknownCard(key.to_string()))
    }

    pub fn reverse(&self, id: CardId) -> Result<&str> {
        self.by_id
            .get(&id)
            .map(String::as_str)
            .ok_or(DeckError::UnknownCardId(id))
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }

    /// (lowest, highest) id, or None for an empty catalog.
    pub fn id_range(&self) -> Option<(CardId, CardId)> {
        let lo = *self.by_id.keys().next()?;
        let hi = *self.by_id.keys().next_back()?;
        Some((lo, hi))
    }

    /// Entries in ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = (CardId, &str)> {
        self.by_id.iter().map(|(id, k)| (*id, k.as_str()))
    }

    /// blake3 over the (id, key) entries in id order, truncated to 16 bytes, as hex.
    /// Two catalogs with the same fingerprint decode every token identically.
    pub fn fingerprint(&self) -> String {
        let mut h = blake3::Hasher::new();
        for (id, key) in self.iter() {
            h.update(&id.0.to_le_bytes());
            h.update(&(key.len() as u32).to_le_bytes());
            h.update(key.as_bytes());
        }
        let digest = h.finalize();
        hex16(&digest.as_bytes()[0..16])
    }
}

impl Serialize for CardCatalog {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.by_id.len()))?;
        for (id, key) in self.iter() {
            map.serialize_entry(&id.0.to_string(), key)?;
        }
        map.end()
    }
}

fn hex16(id: &[u8]) -> String {
    const HEX: &[u8; 16] = b"0123456789abcdef";
    let mut s = String::with_capacity(id.len() * 2);
    for &b in id {
        s.push(HEX[(b >> 4) as usize] as char);
        s.push(HEX[(b & 0x0F) as usize] as char);
    }
    s
}
