// crates/chromacipher-cli/src/io/jsonl.rs
//
// Sample stream IO: one JSON object per line.
// Format: {"ch":"H","h":234,"s":84,"v":65,"hex":"1b28a6"}
// h/s/v are the decode key and are required on input; ch and hex are
// optional metadata (ch doubles as the decode fallback).

use anyhow::Context;
use chromacipher_core::{ColorSample, DecodeRecord, Hsv};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize)]
pub struct SampleLine {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ch: Option<String>,
    pub h: u16,
    pub s: u8,
    pub v: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hex: Option<String>,
}

impl SampleLine {
    fn from_sample(s: &ColorSample) -> Self {
        Self {
            ch: Some(s.ch.to_string()),
            h: s.hsv.h,
            s: s.hsv.s,
            v: s.hsv.v,
            hex: Some(s.hex.clone()),
        }
    }

    fn into_record(self) -> DecodeRecord {
        DecodeRecord {
            hsv: Hsv::new(self.h, self.s, self.v),
            ch: self.ch.and_then(|s| s.chars().next()),
        }
    }
}

fn render(samples: &[ColorSample]) -> anyhow::Result<String> {
    let mut out = String::new();
    for s in samples {
        out.push_str(&serde_json::to_string(&SampleLine::from_sample(s))?);
        out.push('\n');
    }
    Ok(out)
}

pub fn write_samples_file(path: &str, samples: &[ColorSample]) -> anyhow::Result<()> {
    let s = render(samples)?;
    std::fs::write(path, s).with_context(|| format!("write samples jsonl: {path}"))?;
    Ok(())
}

pub fn write_samples_stdout(samples: &[ColorSample]) -> anyhow::Result<()> {
    print!("{}", render(samples)?);
    Ok(())
}

pub fn read_records_file(path: &str) -> anyhow::Result<Vec<DecodeRecord>> {
    let s = std::fs::read_to_string(path).with_context(|| format!("read samples jsonl: {path}"))?;
    let mut out = Vec::new();
    for (lineno, line) in s.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let parsed: SampleLine = serde_json::from_str(line)
            .with_context(|| format!("{path}:{}: bad sample line", lineno + 1))?;
        out.push(parsed.into_record());
    }
    Ok(out)
}
