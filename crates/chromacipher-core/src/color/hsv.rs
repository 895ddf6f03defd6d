// crates/chromacipher-core/src/color/hsv.rs

/// Integer HSV triple, the canonical color identity of the codec.
///
/// Hue is degrees in [0,360) (wraps at 360). Saturation is percent 0..=100.
/// Value is a percent-like raw scalar: true HSV caps it at 100, but the
/// character table assigns values up to 165 and the conversion passes them
/// through unclamped. Decoding keys on the exact integer triple, so this
/// type is `Eq + Hash` and comparisons never use tolerance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Hsv {
    pub h: u16,
    pub s: u8,
    pub v: u8,
}

impl Hsv {
    /// Build a triple, wrapping hue at 360.
    #[inline]
    pub const fn new(h: u16, s: u8, v: u8) -> Hsv {
        Hsv { h: h % 360, s, v }
    }
}
