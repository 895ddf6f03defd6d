// crates/chromacipher-core/src/color/rgb.rs

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Lowercase 6-hex-digit rendering, two digits per channel.
    /// Channels are already confined to [0,255] by the type; the conversion
    /// clamps before constructing an `Rgb`.
    pub fn to_hex(self) -> String {
        format!("{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}
