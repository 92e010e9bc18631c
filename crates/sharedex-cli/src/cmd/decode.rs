use clap::Args;
use sharedex_core::codec::total_cards;
use sharedex_core::DeckCodec;

use crate::io::catalog_file;

#[derive(Args)]
pub struct DecodeArgs {
    /// Card list JSON (`{"<id>": "<card key>"}`)
    #[arg(long, env = "CARD_LIST_PATH")]
    pub catalog: String,

    /// Deck token (URL-safe base64)
    pub token: String,

    /// Print the `[{"cardId": .., "count": ..}]` JSON the deck page consumes
    #[arg(long)]
    pub json: bool,

    /// Fail unless the token holds a complete 20-card deck
    #[arg(long)]
    pub require_complete: bool,
}

pub fn run(args: DecodeArgs) -> anyhow::Result<()> {
    let catalog = catalog_file::load_catalog(&args.catalog)?;
    let codec = DeckCodec::new(&catalog);

    let cards = if args.require_complete {
        codec.decode_complete(&args.token)?
    } else {
        codec.decode(&args.token)?
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&cards)?);
    } else {
        for c in &cards {
            println!("{} {}", c.count, c.card_id);
        }
    }

    eprintln!(
        "decode ok: distinct={} cards={} catalog={}",
        cards.len(),
        total_cards(&cards),
        catalog.fingerprint()
    );
    Ok(())
}
