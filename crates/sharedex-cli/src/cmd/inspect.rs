use clap::Args;
use sharedex_core::codec::{decode_entries, pack};

#[derive(Args, Debug)]
pub struct InspectArgs {
    /// Deck token (URL-safe base64)
    pub token: String,
}

pub fn run(args: InspectArgs) -> anyhow::Result<()> {
    let entries = decode_entries(&args.token)?;

    println!("slot  field   pair  card_id");
    let mut cards = 0u32;
    for (slot, e) in entries.iter().enumerate() {
        // Zero ids still decode here; only a catalog lookup rejects them.
        let field = pack::to_field(*e).map(|v| format!("0x{v:04x}")).unwrap_or_else(|_| "-".into());
        println!("{:>4}  {:<6}  {:<4}  {}", slot, field, e.is_pair(), e.id());
        cards += e.copies();
    }

    eprintln!("inspect ok: entries={} cards={}", entries.len(), cards);
    Ok(())
}
