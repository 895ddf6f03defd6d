use anyhow::{bail, Context};
use chromacipher_core::{encode, CharColorTable, EncodeOptions};
use clap::Args;

use crate::io::jsonl;

#[derive(Args)]
pub struct EncodeArgs {
    /// Text to encode, given inline
    #[arg(long, conflicts_with = "in")]
    pub text: Option<String>,

    /// Input text file to encode
    #[arg(long)]
    pub r#in: Option<String>,

    /// Output JSONL path. Omit to write to stdout.
    #[arg(long)]
    pub out: Option<String>,

    /// Drop characters outside the table instead of emitting the gray
    /// sentinel. Lossy: the sample stream gets shorter than the input.
    #[arg(long, default_value_t = false)]
    pub skip_unmapped: bool,
}

pub fn run(args: EncodeArgs) -> anyhow::Result<()> {
    let text = match (args.text, args.r#in.as_deref()) {
        (Some(t), None) => t,
        (None, Some(p)) => {
            std::fs::read_to_string(p).with_context(|| format!("read input text: {p}"))?
        }
        (None, None) => bail!("one of --text or --in is required"),
        (Some(_), Some(_)) => unreachable!("clap enforces the conflict"),
    };

    let table = CharColorTable::shared();
    let opts = EncodeOptions {
        include_unmapped: !args.skip_unmapped,
    };

    let samples = encode(table, &text, &opts);
    let dropped = text.chars().count() - samples.len();

    match args.out.as_deref() {
        Some(path) => jsonl::write_samples_file(path, &samples)?,
        None => jsonl::write_samples_stdout(&samples)?,
    }

    eprintln!(
        "encode ok: samples={} dropped={} table_id={}",
        samples.len(),
        dropped,
        table.table_id_hex()
    );
    Ok(())
}
