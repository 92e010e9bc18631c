// crates/sharedex-core/src/codec/mod.rs
//
// Deck token codec.
//
// encode: keys -> ids (catalog) -> pair collapse -> 16-bit BE fields -> base64url
// decode: base64url -> 16-bit fields -> pair expand -> keys (catalog) -> counts
//
// Token wire format (stable, previously issued links must keep decoding):
//   2 bytes per collapsed entry, big-endian
//   bit 15     pair flag (entry stands for two adjacent copies)
//   bits 0..=14 card id, 1..=32767
//   at most 20 entries, base64url without padding

pub mod b64;
pub mod pack;
pub mod runs;

use std::collections::HashMap;
use std::fmt;

use serde::Serialize;

use crate::catalog::{CardCatalog, CardId};
use crate::error::{DeckError, Result};

pub use self::runs::RunEntry;

/// Upper bound on collapsed entries per token.
pub const MAX_ENTRIES: usize = 20;
pub const MAX_CARD_ID: u32 = 0x7FFF;
pub const PAIR_FLAG: u16 = 0x8000;
/// Cards in a complete deck.
pub const DECK_SIZE: u32 = 20;

/// URL-safe deck token.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Token(String);

impl Token {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Token {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// One distinct card of a decoded deck.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeckCard {
    pub card_id: String,
    pub count: u32,
}

/// Total number of cards across a decoded deck.
pub fn total_cards(cards: &[DeckCard]) -> u32 {
    cards.iter().map(|c| c.count).sum()
}

#[derive(Copy, Clone, Debug)]
pub struct DeckCodec<'a> {
    catalog: &'a CardCatalog,
}

impl<'a> DeckCodec<'a> {
    pub fn new(catalog: &'a CardCatalog) -> Self {
        Self { catalog }
    }

    /// Encode an ordered deck list. Order matters only for pairing: two
    /// copies of a card share one entry when they are adjacent.
    pub fn encode<S: AsRef<str>>(&self, keys: &[S]) -> Result<Token> {
        if keys.is_empty() {
            return Err(DeckError::EmptyDeck);
        }

        let ids = keys
            .iter()
            .map(|k| self.catalog.resolve(k.as_ref()))
            .collect::<Result<Vec<_>>>()?;

        let entries = runs::collapse(&ids);
        let bytes = pack::pack_entries(&entries)?;
        let token = Token(b64::encode(&bytes));

        log::debug!(
            "encode: cards={} entries={} bytes={} token={}",
            ids.len(),
            entries.len(),
            bytes.len(),
            token
        );
        Ok(token)
    }

    /// Decode a token into (card, count) pairs, in order of first appearance.
    pub fn decode(&self, token: &str) -> Result<Vec<DeckCard>> {
        let ids = decode_ids(token)?;

        let mut cards: Vec<DeckCard> = Vec::new();
        let mut slot_of: HashMap<CardId, usize> = HashMap::new();

        for id in ids {
            if let Some(&slot) = slot_of.get(&id) {
                cards[slot].count += 1;
                continue;
            }
            let key = self.catalog.reverse(id).map_err(|e| {
                log::warn!("decode: token {token:?} references id {id} missing from catalog");
                e
            })?;
            slot_of.insert(id, cards.len());
            cards.push(DeckCard {
                card_id: key.to_string(),
                count: 1,
            });
        }

        Ok(cards)
    }

    /// Like `decode`, but anything other than exactly `DECK_SIZE` cards is
    /// treated as an invalid token.
    pub fn decode_complete(&self, token: &str) -> Result<Vec<DeckCard>> {
        let cards = self.decode(token)?;
        let total = total_cards(&cards);
        if total != DECK_SIZE {
            return Err(DeckError::InvalidToken(format!(
                "deck has {total} cards, expected {DECK_SIZE}"
            )));
        }
        Ok(cards)
    }
}

/// Decode a token down to its collapsed entries. Needs no catalog.
pub fn decode_entries(token: &str) -> Result<Vec<RunEntry>> {
    let bytes = b64::decode(token)?;
    if bytes.is_empty() {
        return Err(DeckError::InvalidToken("no cards".into()));
    }
    let entries = pack::unpack_entries(&bytes)?;
    log::debug!("decode: bytes={} entries={}", bytes.len(), entries.len());
    Ok(entries)
}

/// Decode a token to its positional card id stream (pairs expanded).
pub fn decode_ids(token: &str) -> Result<Vec<CardId>> {
    Ok(runs::expand(&decode_entries(token)?))
}
