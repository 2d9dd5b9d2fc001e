//! Brand palette for the social-preview card.

use image::Rgba;

/// Deep navy used for the gradient edges.
pub const NAVY_DARK: &str = "#0a1628";
/// Lighter navy at the gradient midpoint.
pub const NAVY_MID: &str = "#172b4a";
/// Gold accent for the divider rule.
pub const GOLD: &str = "#caa86a";

/// Parses a `#rrggbb` color into an opaque RGBA pixel.
///
/// Malformed components fall back to zero so a bad constant produces a
/// visibly wrong (black) channel instead of a panic.
pub fn hex_to_rgba(hex: &str) -> Rgba<u8> {
    let hex = hex.trim_start_matches('#');
    let r = u8::from_str_radix(hex.get(0..2).unwrap_or(""), 16).unwrap_or(0);
    let g = u8::from_str_radix(hex.get(2..4).unwrap_or(""), 16).unwrap_or(0);
    let b = u8::from_str_radix(hex.get(4..6).unwrap_or(""), 16).unwrap_or(0);
    Rgba([r, g, b, 255])
}

/// Returns `color` with its alpha channel scaled by `alpha` in `[0, 1]`.
pub fn with_alpha(color: Rgba<u8>, alpha: f32) -> Rgba<u8> {
    let Rgba([r, g, b, _]) = color;
    Rgba([r, g, b, (alpha.clamp(0.0, 1.0) * 255.0) as u8])
}

/// Linear interpolation between two colors.
pub fn lerp(from: Rgba<u8>, to: Rgba<u8>, t: f32) -> Rgba<u8> {
    let t = t.clamp(0.0, 1.0);
    let mix = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
    Rgba([
        mix(from[0], to[0]),
        mix(from[1], to[1]),
        mix(from[2], to[2]),
        mix(from[3], to[3]),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_parsing() {
        assert_eq!(hex_to_rgba("#0a1628"), Rgba([10, 22, 40, 255]));
        assert_eq!(hex_to_rgba("caa86a"), Rgba([202, 168, 106, 255]));
    }

    #[test]
    fn test_malformed_hex_falls_back_to_black_channels() {
        assert_eq!(hex_to_rgba("#zz"), Rgba([0, 0, 0, 255]));
    }

    #[test]
    fn test_lerp_endpoints() {
        let a = hex_to_rgba(NAVY_DARK);
        let b = hex_to_rgba(NAVY_MID);

        assert_eq!(lerp(a, b, 0.0), a);
        assert_eq!(lerp(a, b, 1.0), b);
    }

    #[test]
    fn test_with_alpha_scales_channel() {
        let c = with_alpha(Rgba([255, 255, 255, 255]), 0.5);
        assert_eq!(c[3], 127);
    }
}
