use anyhow::Context;
use chromacipher_core::{decode, CharColorTable};
use clap::Args;

use crate::io::jsonl;

#[derive(Args)]
pub struct DecodeArgs {
    /// Input JSONL sample stream
    #[arg(long)]
    pub r#in: String,

    /// Output text path. Omit to write to stdout.
    #[arg(long)]
    pub out: Option<String>,
}

pub fn run(args: DecodeArgs) -> anyhow::Result<()> {
    let records = jsonl::read_records_file(&args.r#in)?;

    let table = CharColorTable::shared();
    let text = decode(table, &records);

    match args.out.as_deref() {
        Some(path) => {
            std::fs::write(path, &text).with_context(|| format!("write decoded text: {path}"))?
        }
        None => println!("{text}"),
    }

    eprintln!(
        "decode ok: records={} chars={}",
        records.len(),
        text.chars().count()
    );
    Ok(())
}
