// crates/sharedex-cli/src/main.rs

use clap::{ArgAction, Parser, Subcommand};

mod cmd;
mod io;

#[derive(Parser)]
#[command(name = "sharedex")]
#[command(about = "Pokemon TCG Pocket deck token CLI", long_about = None)]
pub struct Cli {
    /// Raise log verbosity (-v info, -vv debug). RUST_LOG overrides.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Encode a deck list into a shareable token
    Encode(cmd::encode::EncodeArgs),

    /// Decode a token back into cards and counts
    Decode(cmd::decode::DecodeArgs),

    /// Dump the raw entries of a token (no catalog needed)
    Inspect(cmd::inspect::InspectArgs),

    /// Card list tools (build from raw card data, info)
    Catalog(cmd::catalog::CatalogArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.cmd {
        Commands::Encode(args) => cmd::encode::run(args),
        Commands::Decode(args) => cmd::decode::run(args),
        Commands::Inspect(args) => cmd::inspect::run(args),
        Commands::Catalog(args) => cmd::catalog::run(args),
    }
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default))
        .format_timestamp(None)
        .init();
}
