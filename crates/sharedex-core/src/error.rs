// crates/sharedex-core/src/error.rs

use thiserror::Error;

use crate::catalog::CardId;

pub type Result<T> = std::result::Result<T, DeckError>;

#[derive(Debug, Error)]
pub enum DeckError {
    #[error("unknown card: {0}")]
    UnknownCard(String),

    #[error("card id must be between 1 and 32767, got: {0}")]
    CardIdOutOfRange(CardId),

    #[error("deck cannot contain more than 20 entries, got: {0}")]
    TooManyCards(usize),

    #[error("deck is empty")]
    EmptyDeck,

    #[error("invalid token: {0}")]
    InvalidToken(String),

    #[error("unknown card id: {0}")]
    UnknownCardId(CardId),

    #[error("duplicate card key in catalog: {0}")]
    DuplicateKey(String),

    #[error("duplicate card id in catalog: {0}")]
    DuplicateId(CardId),

    #[error("catalog format error: {0}")]
    CatalogFormat(String),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl DeckError {
    /// Failures caused by the deck a caller asked to encode.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            DeckError::UnknownCard(_)
                | DeckError::CardIdOutOfRange(_)
                | DeckError::TooManyCards(_)
                | DeckError::EmptyDeck
        )
    }

    /// Failures that mean a token does not name a deck under the loaded catalog.
    pub fn is_not_found(&self) -> bool {
        matches!(self, DeckError::InvalidToken(_) | DeckError::UnknownCardId(_))
    }
}
