pub mod error;

pub mod catalog;
pub mod codec;

pub use crate::catalog::{CardCatalog, CardId};
pub use crate::codec::{DeckCard, DeckCodec, Token};
pub use crate::error::{DeckError, Result};
