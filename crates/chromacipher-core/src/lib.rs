pub mod error;
pub mod validate;

pub mod codec;
pub mod color;
pub mod table;

pub use crate::codec::{decode, decode_samples, encode, ColorSample, DecodeRecord, EncodeOptions};
pub use crate::color::hsv::Hsv;
pub use crate::color::rgb::Rgb;
pub use crate::table::CharColorTable;
