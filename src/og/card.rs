//! Composition of the E4X social-preview card.

use std::io::Cursor;

use ab_glyph::{FontVec, PxScale};
use anyhow::{Context, Result};
use image::{ImageFormat, Rgba, RgbaImage};
use imageproc::drawing::{Blend, draw_filled_circle_mut, draw_filled_rect_mut, draw_text_mut, text_size};
use imageproc::rect::Rect;
use tracing::warn;

use super::palette::{self, GOLD, NAVY_DARK, NAVY_MID};

/// Open Graph card dimensions.
pub const CARD_WIDTH: u32 = 1200;
pub const CARD_HEIGHT: u32 = 630;

/// Horizontal padding of the decorative band.
const BAND_PADDING: i32 = 80;
/// Number of dots in the decorative band.
const DOT_COUNT: usize = 40;
/// Gap between dots.
const DOT_GAP: i32 = 12;

/// Renderer for the fixed-layout 1200x630 book-promotion card.
///
/// The composition is deterministic: gradient background, fading dot band,
/// centered title stack, gold rule, subtitle and footer. When no usable font
/// is available the text layers are skipped and the card degrades to its
/// graphic layers; composition itself never fails.
pub struct OgCard {
    font: Option<FontVec>,
}

impl OgCard {
    /// Builds a card renderer from optional font bytes.
    ///
    /// Font data that cannot be parsed is logged and discarded, leaving a
    /// text-less renderer.
    pub fn new(font_data: Option<Vec<u8>>) -> Self {
        let font = font_data.and_then(|bytes| match FontVec::try_from_vec(bytes) {
            Ok(font) => Some(font),
            Err(e) => {
                warn!("Failed to parse OG card font: {}. Text layers disabled.", e);
                None
            }
        });

        Self { font }
    }

    /// Whether text layers will be rendered.
    pub fn has_font(&self) -> bool {
        self.font.is_some()
    }

    /// Composes the card into an RGBA image.
    pub fn compose(&self) -> RgbaImage {
        let mut img = gradient_background();
        draw_dot_band(&mut img);

        let mut canvas = Blend(img);

        // Gold rule under the title stack.
        let rule_width = (CARD_WIDTH as f32 * 0.7) as u32;
        let rule_x = ((CARD_WIDTH - rule_width) / 2) as i32;
        draw_filled_rect_mut(
            &mut canvas,
            Rect::at(rule_x, 470).of_size(rule_width, 2),
            palette::hex_to_rgba(GOLD),
        );

        if let Some(font) = &self.font {
            let white = Rgba([255, 255, 255, 255]);
            let soft_white = palette::with_alpha(white, 0.9);
            let faint_white = palette::with_alpha(white, 0.7);

            draw_centered_text(&mut canvas, font, "DR. GREGOR JENZER", 84, 42.0, white);
            draw_centered_text(&mut canvas, font, "ENGAGE", 140, 110.0, white);
            draw_centered_text(&mut canvas, font, "for", 262, 72.0, soft_white);
            draw_centered_text(&mut canvas, font, "EXCELLENCE", 330, 110.0, white);
            draw_centered_text(
                &mut canvas,
                font,
                "A Practical Leadership Playbook for High-Hazard Industries",
                500,
                30.0,
                soft_white,
            );
            draw_centered_text(&mut canvas, font, "jenzeradvisory.com/e4x", 560, 26.0, faint_white);
        }

        canvas.0
    }

    /// Composes the card and encodes it as PNG.
    ///
    /// # Errors
    ///
    /// Returns an error when PNG encoding fails.
    pub fn render_png(&self) -> Result<Vec<u8>> {
        let img = self.compose();
        let mut buffer = Cursor::new(Vec::new());
        img.write_to(&mut buffer, ImageFormat::Png)
            .context("Failed to encode OG card as PNG")?;
        Ok(buffer.into_inner())
    }
}

/// 135-degree three-stop navy gradient covering the whole card.
fn gradient_background() -> RgbaImage {
    let dark = palette::hex_to_rgba(NAVY_DARK);
    let mid = palette::hex_to_rgba(NAVY_MID);
    let span = (CARD_WIDTH + CARD_HEIGHT - 2) as f32;

    RgbaImage::from_fn(CARD_WIDTH, CARD_HEIGHT, |x, y| {
        // Diagonal progress, stops at 0%, 60% and 100%.
        let t = (x + y) as f32 / span;
        if t < 0.6 {
            palette::lerp(dark, mid, t / 0.6)
        } else {
            palette::lerp(mid, dark, (t - 0.6) / 0.4)
        }
    })
}

/// Decorative band of fading white dots across the top of the card.
fn draw_dot_band(img: &mut RgbaImage) {
    let mut canvas = Blend(std::mem::take(img));
    let white = Rgba([255, 255, 255, 255]);

    let right_edge = CARD_WIDTH as i32 - BAND_PADDING;
    let mut x = BAND_PADDING;
    let mut y = 60;

    for i in 0..DOT_COUNT {
        let diameter = 8 + (i as i32 % 3) * 4;
        if x + diameter > right_edge {
            x = BAND_PADDING;
            y += 16 + DOT_GAP;
        }

        // Dots fade towards the end of the band; the whole layer sits at
        // 30% opacity over the gradient.
        let fade = 0.6 - (i as f32 / DOT_COUNT as f32) * 0.4;
        let radius = diameter / 2;
        draw_filled_circle_mut(
            &mut canvas,
            (x + radius, y + radius),
            radius,
            palette::with_alpha(white, fade * 0.3),
        );

        x += diameter + DOT_GAP;
    }

    *img = canvas.0;
}

/// Draws one horizontally centered text line.
fn draw_centered_text(
    canvas: &mut Blend<RgbaImage>,
    font: &FontVec,
    text: &str,
    y: i32,
    size: f32,
    color: Rgba<u8>,
) {
    let scale = PxScale::from(size);
    let (text_width, _) = text_size(scale, font, text);
    let x = (CARD_WIDTH as i32 - text_width as i32) / 2;
    draw_text_mut(canvas, color, x, y, scale, font, text);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_dimensions() {
        let card = OgCard::new(None);
        let img = card.compose();

        assert_eq!(img.width(), CARD_WIDTH);
        assert_eq!(img.height(), CARD_HEIGHT);
    }

    #[test]
    fn test_gradient_corners_are_dark_navy() {
        let img = gradient_background();

        assert_eq!(*img.get_pixel(0, 0), palette::hex_to_rgba(NAVY_DARK));
        assert_eq!(
            *img.get_pixel(CARD_WIDTH - 1, CARD_HEIGHT - 1),
            palette::hex_to_rgba(NAVY_DARK)
        );
    }

    #[test]
    fn test_gradient_midpoint_is_lighter() {
        let img = gradient_background();
        let corner = *img.get_pixel(0, 0);
        let mid = *img.get_pixel(CARD_WIDTH * 3 / 10, CARD_HEIGHT * 3 / 10);

        assert!(mid[0] >= corner[0] && mid[2] > corner[2]);
    }

    #[test]
    fn test_render_png_is_decodable() {
        let card = OgCard::new(None);
        let png = card.render_png().unwrap();

        let decoded = image::load_from_memory(&png).unwrap();
        assert_eq!(decoded.width(), CARD_WIDTH);
        assert_eq!(decoded.height(), CARD_HEIGHT);
    }

    #[test]
    fn test_composition_is_deterministic() {
        let card = OgCard::new(None);

        assert_eq!(card.compose().as_raw(), card.compose().as_raw());
    }

    #[test]
    fn test_invalid_font_data_degrades_to_no_text() {
        let card = OgCard::new(Some(vec![0u8; 16]));

        assert!(!card.has_font());
        assert_eq!(card.compose().width(), CARD_WIDTH);
    }
}
