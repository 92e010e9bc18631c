// crates/sharedex-core/src/codec/b64.rs
//
// URL-safe base64 (RFC 4648 §5). Encoding never pads; decoding accepts the
// token with or without trailing '=' and tolerates non-zero trailing bits,
// matching what browsers' atob() lets through.

use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use base64::Engine;

use crate::error::{DeckError, Result};

const TOKEN_ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    GeneralPurposeConfig::new()
        .with_encode_padding(false)
        .with_decode_padding_mode(DecodePaddingMode::Indifferent)
        .with_decode_allow_trailing_bits(true),
);

pub fn encode(bytes: &[u8]) -> String {
    TOKEN_ENGINE.encode(bytes)
}

pub fn decode(token: &str) -> Result<Vec<u8>> {
    TOKEN_ENGINE
        .decode(token.trim())
        .map_err(|e| DeckError::InvalidToken(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uses_url_safe_alphabet_without_padding() {
        assert_eq!(encode(&[0xFB, 0xFF]), "-_8");
        assert_eq!(encode(&[0x80, 0x01, 0x00, 0x02]), "gAEAAg");
    }

    #[test]
    fn decode_accepts_padded_and_unpadded() {
        assert_eq!(decode("gAEAAg").unwrap(), vec![0x80, 0x01, 0x00, 0x02]);
        assert_eq!(decode("gAEAAg==").unwrap(), vec![0x80, 0x01, 0x00, 0x02]);
    }

    #[test]
    fn decode_rejects_standard_alphabet_and_garbage() {
        assert!(decode("+/8").is_err());
        assert!(decode("gA!A").is_err());
        assert!(decode("gAEAA").is_err());
    }
}
