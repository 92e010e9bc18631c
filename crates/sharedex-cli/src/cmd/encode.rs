use clap::Args;
use sharedex_core::DeckCodec;

use crate::io::{catalog_file, deck_file};

#[derive(Args)]
pub struct EncodeArgs {
    /// Card list JSON (`{"<id>": "<card key>"}`)
    #[arg(long, env = "CARD_LIST_PATH")]
    pub catalog: String,

    /// Deck file: JSON array of card keys, or one key per line.
    /// Mutually exclusive with positional keys.
    #[arg(long, conflicts_with = "cards")]
    pub deck: Option<String>,

    /// Card keys in deck order (e.g. A1-1 A1-1 P-A-5)
    #[arg(required_unless_present = "deck")]
    pub cards: Vec<String>,
}

pub fn run(args: EncodeArgs) -> anyhow::Result<()> {
    let catalog = catalog_file::load_catalog(&args.catalog)?;

    let cards = match args.deck.as_deref() {
        Some(path) => deck_file::load_deck(path)?,
        None => args.cards,
    };

    let token = DeckCodec::new(&catalog).encode(&cards)?;
    println!("{token}");

    eprintln!(
        "encode ok: cards={} token_len={} catalog={}",
        cards.len(),
        token.as_str().len(),
        catalog.fingerprint()
    );
    Ok(())
}
