// crates/chromacipher-cli/src/main.rs

use clap::{Parser, Subcommand};

mod cmd;
mod io;

#[derive(Parser)]
#[command(name = "chromacipher-cli")]
#[command(about = "ChromaCipher text <-> color codec CLI", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Encode text into a color sample stream (JSONL)
    Encode(cmd::encode::EncodeArgs),

    /// Decode a color sample stream (JSONL) back to text
    Decode(cmd::decode::DecodeArgs),

    /// Dump the canonical character table (entries, hex, table id)
    Table(cmd::table::TableArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.cmd {
        Commands::Encode(args) => cmd::encode::run(args),
        Commands::Decode(args) => cmd::decode::run(args),
        Commands::Table(args) => cmd::table::run(args),
    }
}
