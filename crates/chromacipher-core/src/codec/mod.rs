// crates/chromacipher-core/src/codec/mod.rs
//
// Stateless encode/decode over the canonical table. Pure functions of their
// inputs; the table is the only persistent state and it is read-only.

use crate::color::convert::hsv_to_rgb;
use crate::color::hsv::Hsv;
use crate::color::rgb::Rgb;
use crate::table::{CharColorTable, UNKNOWN_CHAR, UNMAPPED_HSV};

/// One encoded character. `hsv` is the canonical identity used to decode;
/// `rgb` and `hex` are derived from it for rendering.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColorSample {
    pub ch: char,
    pub hsv: Hsv,
    pub rgb: Rgb,
    pub hex: String,
}

impl ColorSample {
    pub fn to_record(&self) -> DecodeRecord {
        DecodeRecord {
            hsv: self.hsv,
            ch: Some(self.ch),
        }
    }
}

/// Decode input: the stored HSV plus the original character as optional
/// fallback metadata. The character is never treated as ground truth.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DecodeRecord {
    pub hsv: Hsv,
    pub ch: Option<char>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EncodeOptions {
    /// When false, characters absent from the table are dropped from the
    /// output instead of becoming sentinel samples. Lossy: the output gets
    /// shorter than the input.
    pub include_unmapped: bool,
}

impl Default for EncodeOptions {
    fn default() -> Self {
        Self {
            include_unmapped: true,
        }
    }
}

/// Encode text into color samples, one per retained character, input order
/// preserved. Characters outside the table become the gray sentinel (or are
/// dropped, per options). Empty input yields an empty vector.
pub fn encode(table: &CharColorTable, text: &str, opts: &EncodeOptions) -> Vec<ColorSample> {
    let mut out = Vec::with_capacity(text.chars().count());
    for ch in text.chars() {
        let hsv = match table.lookup(ch) {
            Some(hsv) => hsv,
            None if opts.include_unmapped => UNMAPPED_HSV,
            None => continue,
        };
        let rgb = hsv_to_rgb(hsv);
        let hex = rgb.to_hex();
        out.push(ColorSample { ch, hsv, rgb, hex });
    }
    out
}

/// Decode records back to text, keyed on each record's exact HSV triple.
/// On an inverse-table miss: the record's carried character if present,
/// else `?`. Never errors; degradation is per-element.
pub fn decode(table: &CharColorTable, records: &[DecodeRecord]) -> String {
    let mut out = String::with_capacity(records.len());
    for rec in records {
        match table.reverse_lookup(rec.hsv) {
            Some(ch) => out.push(ch),
            None => out.push(rec.ch.unwrap_or(UNKNOWN_CHAR)),
        }
    }
    out
}

/// Decode freshly-encoded samples (carries each sample's character as the
/// fallback, so sentinel samples reproduce their original character).
pub fn decode_samples(table: &CharColorTable, samples: &[ColorSample]) -> String {
    let records: Vec<DecodeRecord> = samples.iter().map(ColorSample::to_record).collect();
    decode(table, &records)
}
