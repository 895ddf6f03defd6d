pub mod convert;
pub mod hsv;
pub mod rgb;
