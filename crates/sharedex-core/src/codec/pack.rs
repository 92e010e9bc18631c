// crates/sharedex-core/src/codec/pack.rs

use crate::catalog::CardId;
use crate::codec::runs::RunEntry;
use crate::codec::{MAX_CARD_ID, MAX_ENTRIES, PAIR_FLAG};
use crate::error::{DeckError, Result};

/// Pack run entries into 16-bit fields, 2 bytes each, big-endian.
///
/// Field layout (MSB first):
/// - bit 15: pair flag
/// - bits 0..=14: card id (1..=32767)
pub fn pack_entries(entries: &[RunEntry]) -> Result<Vec<u8>> {
    if entries.len() > MAX_ENTRIES {
        return Err(DeckError::TooManyCards(entries.len()));
    }

    let mut out = Vec::with_capacity(entries.len() * 2);
    for &e in entries {
        out.extend_from_slice(&to_field(e)?.to_be_bytes());
    }
    Ok(out)
}

/// Inverse of `pack_entries`. Card ids are not checked against any catalog
/// here; a zero id comes back as-is.
pub fn unpack_entries(bytes: &[u8]) -> Result<Vec<RunEntry>> {
    if bytes.len() % 2 != 0 {
        return Err(DeckError::InvalidToken(format!(
            "odd byte length {}",
            bytes.len()
        )));
    }
    if bytes.len() > MAX_ENTRIES * 2 {
        return Err(DeckError::InvalidToken(format!(
            "{} entries, at most {} allowed",
            bytes.len() / 2,
            MAX_ENTRIES
        )));
    }

    Ok(bytes
        .chunks_exact(2)
        .map(|c| from_field(u16::from_be_bytes([c[0], c[1]])))
        .collect())
}

pub fn to_field(e: RunEntry) -> Result<u16> {
    let id = e.id();
    if id.0 == 0 || id.0 > MAX_CARD_ID {
        return Err(DeckError::CardIdOutOfRange(id));
    }
    let v = id.0 as u16;
    Ok(if e.is_pair() { v | PAIR_FLAG } else { v })
}

pub fn from_field(v: u16) -> RunEntry {
    let id = CardId((v & !PAIR_FLAG) as u32);
    if v & PAIR_FLAG != 0 {
        RunEntry::Pair(id)
    } else {
        RunEntry::Single(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pair_sets_high_bit_big_endian() {
        let bytes = pack_entries(&[RunEntry::Pair(CardId(1)), RunEntry::Single(CardId(2))]).unwrap();
        assert_eq!(bytes, vec![0x80, 0x01, 0x00, 0x02]);
    }

    #[test]
    fn largest_id_fills_low_fifteen_bits() {
        let bytes = pack_entries(&[RunEntry::Pair(CardId(32767))]).unwrap();
        assert_eq!(bytes, vec![0xFF, 0xFF]);
        assert_eq!(unpack_entries(&bytes).unwrap(), vec![RunEntry::Pair(CardId(32767))]);
    }

    #[test]
    fn out_of_range_ids_never_wrap() {
        for bad in [0u32, 32768, 40000] {
            let err = pack_entries(&[RunEntry::Single(CardId(bad))]).unwrap_err();
            assert!(matches!(err, DeckError::CardIdOutOfRange(CardId(v)) if v == bad));
        }
    }

    #[test]
    fn more_than_twenty_entries_rejected() {
        let entries: Vec<_> = (1..=21).map(|i| RunEntry::Single(CardId(i))).collect();
        assert!(matches!(pack_entries(&entries), Err(DeckError::TooManyCards(21))));
        assert!(pack_entries(&entries[..20]).is_ok());
    }

    #[test]
    fn unpack_rejects_odd_and_oversized_input() {
        assert!(matches!(unpack_entries(&[0x00, 0x01, 0x02]), Err(DeckError::InvalidToken(_))));
        assert!(matches!(unpack_entries(&[0u8; 42]), Err(DeckError::InvalidToken(_))));
    }
}
