// crates/chromacipher-core/src/color/convert.rs
//
// HSV -> RGB, chroma/hue-sector form. Deterministic: fixed op order, one
// rounding step per channel, clamp after rounding.

use crate::color::hsv::Hsv;
use crate::color::rgb::Rgb;

/// Convert an integer HSV triple to an RGB triple.
///
/// h/360, s/100 and v/100 are normalized before use. The character table
/// assigns raw values above 100 (letters/digits run up to 165); those are
/// passed through unclamped, so channels can exceed 255 before rounding and
/// are clamped after. Clamping earlier would change the emitted colors.
///
/// Preconditions (table-bypassing callers): hue < 360, saturation <= 100.
pub fn hsv_to_rgb(hsv: Hsv) -> Rgb {
    assert!(hsv.h < 360, "hue out of range: {}", hsv.h);
    assert!(hsv.s <= 100, "saturation out of range: {}", hsv.s);

    let hn = f64::from(hsv.h) / 360.0;
    let sn = f64::from(hsv.s) / 100.0;
    let vn = f64::from(hsv.v) / 100.0;

    let c = vn * sn;
    let h6 = hn * 6.0;
    let x = c * (1.0 - ((h6 % 2.0) - 1.0).abs());
    let m = vn - c;

    // six 60-degree sectors; h6 < 6.0 because h < 360
    let (r, g, b) = match h6 as u8 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };

    Rgb::new(channel(r, m), channel(g, m), channel(b, m))
}

/// Round to nearest (half away from zero), then clamp to [0,255].
#[inline]
fn channel(component: f64, m: f64) -> u8 {
    let q = ((component + m) * 255.0).round();
    q.clamp(0.0, 255.0) as u8
}
