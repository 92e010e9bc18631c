use clap::{Args, Subcommand};

use crate::io::catalog_file;

#[derive(Args)]
pub struct CatalogArgs {
    #[command(subcommand)]
    pub cmd: CatalogCmd,
}

#[derive(Subcommand)]
pub enum CatalogCmd {
    /// Number the raw card database into a card list
    Build(BuildArgs),
    /// Print entry count, id range and fingerprint of a card list
    Info(InfoArgs),
}

#[derive(Args)]
pub struct BuildArgs {
    /// Raw card details JSON (array of records with `card_id`)
    #[arg(long, env = "RAW_CARD_DETAILS_PATH")]
    pub raw: String,

    /// Output card list path
    #[arg(long)]
    pub out: String,
}

#[derive(Args)]
pub struct InfoArgs {
    #[arg(long, env = "CARD_LIST_PATH")]
    pub catalog: String,
}

pub fn run(args: CatalogArgs) -> anyhow::Result<()> {
    match args.cmd {
        CatalogCmd::Build(a) => cmd_build(a),
        CatalogCmd::Info(a) => cmd_info(a),
    }
}

fn cmd_build(a: BuildArgs) -> anyhow::Result<()> {
    let catalog = catalog_file::build_from_raw(&a.raw)?;
    catalog_file::save_catalog(&a.out, &catalog)?;
    eprintln!(
        "catalog build ok: out={} entries={} fingerprint={}",
        a.out,
        catalog.len(),
        catalog.fingerprint()
    );
    Ok(())
}

fn cmd_info(a: InfoArgs) -> anyhow::Result<()> {
    let catalog = catalog_file::load_catalog(&a.catalog)?;

    println!("catalog_path = {}", a.catalog);
    println!("entries      = {}", catalog.len());
    match catalog.id_range() {
        Some((lo, hi)) => println!("id_range     = [{lo}, {hi}]"),
        None => println!("id_range     = (empty)"),
    }
    println!("fingerprint  = {}", catalog.fingerprint());

    let unencodable = catalog
        .iter()
        .filter(|(id, _)| id.get() == 0 || id.get() > sharedex_core::codec::MAX_CARD_ID)
        .count();
    if unencodable > 0 {
        eprintln!("WARNING: {unencodable} card ids fall outside 1..=32767 and cannot be encoded");
    }
    Ok(())
}
