// crates/chromacipher-cli/src/io/mod.rs

pub mod jsonl;
