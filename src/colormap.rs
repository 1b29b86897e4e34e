/*
 * Colour Ramp Module
 *
 * Maps a normalized scalar onto an RGBA colour. Two ramps are provided:
 * - hsv: a cyclic hue ramp, red -> yellow -> green -> cyan -> blue -> magenta -> red
 * - yl_or_rd: a heat ramp from pale yellow through orange to dark red
 *
 * All colours are fully opaque; the renderer applies layer transparency.
 */

use nannou::color::{self, rgba, Rgba, Srgb};

// Nine-class yellow/orange/red sequential scheme
const YL_OR_RD_STOPS: [[u8; 3]; 9] = [
    [0xff, 0xff, 0xcc],
    [0xff, 0xed, 0xa0],
    [0xfe, 0xd9, 0x76],
    [0xfe, 0xb2, 0x4c],
    [0xfd, 0x8d, 0x3c],
    [0xfc, 0x4e, 0x2a],
    [0xe3, 0x1a, 0x1c],
    [0xbd, 0x00, 0x26],
    [0x80, 0x00, 0x26],
];

/// Full-saturation, full-value colour for hue `x`.
///
/// The ramp is cyclic, so values outside `[0, 1]` wrap around instead of
/// clamping. This keeps hue bands of later arms valid when they run past 1.
pub fn hsv(x: f32) -> Rgba {
    let rgb: Srgb = color::hsv(x.rem_euclid(1.0), 1.0, 1.0).into();
    rgba(rgb.red, rgb.green, rgb.blue, 1.0)
}

/// Heat ramp colour for `x`, clamped to `[0, 1]`.
pub fn yl_or_rd(x: f32) -> Rgba {
    let x = if x.is_nan() { 0.0 } else { x.clamp(0.0, 1.0) };
    let segments = (YL_OR_RD_STOPS.len() - 1) as f32;
    let scaled = x * segments;
    let lower = (scaled.floor() as usize).min(YL_OR_RD_STOPS.len() - 2);
    let frac = scaled - lower as f32;

    let a = YL_OR_RD_STOPS[lower];
    let b = YL_OR_RD_STOPS[lower + 1];
    let channel = |i: usize| {
        let from = a[i] as f32 / 255.0;
        let to = b[i] as f32 / 255.0;
        from + (to - from) * frac
    };

    rgba(channel(0), channel(1), channel(2), 1.0)
}
