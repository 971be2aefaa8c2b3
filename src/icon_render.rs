use crate::artwork::{symbol, Canvas, Gradient, Rect, Rgb};
use anyhow::{anyhow, Context, Result};
use image::{
    codecs::png::{CompressionType, FilterType as PngFilterType, PngEncoder},
    ColorType, ImageEncoder, RgbaImage,
};
use std::{fs, path::Path};

/// Canvas edge length in pixels.
pub const CANVAS_SIZE: u32 = 1024;

/// Inset of the card overlay from each canvas edge.
const CARD_INSET: f32 = 90.0;
/// Corner radius of the card overlay.
const CARD_RADIUS: f32 = 210.0;
/// Card fill opacity over the background.
const CARD_OPACITY: f32 = 0.08;

/// First gradient stop (deep blue), also the flat-fill fallback color.
const BACKGROUND_START: Rgb = Rgb::new(0.09, 0.28, 0.72);
/// Second gradient stop (dark indigo).
const BACKGROUND_END: Rgb = Rgb::new(0.16, 0.12, 0.33);

/// Name of the foreground symbol to look up.
const SYMBOL_NAME: &str = "sparkles";
/// Square the symbol is centered in.
const SYMBOL_RECT: Rect = Rect::new(292.0, 292.0, 440.0, 440.0);

/// Text drawn when the symbol is unavailable.
const FALLBACK_TEXT: &str = "APP";
/// Rectangle the fallback text fills.
const FALLBACK_RECT: Rect = Rect::new(210.0, 404.0, 604.0, 260.0);

/// Render the default icon and write it to `output_path` as a PNG,
/// creating missing parent directories first.
pub fn render(output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).context("Can't create output directory")?;
        }
    }

    let pixels = compose_icon();
    let png = encode_png(&pixels).map_err(|_| anyhow!("Failed to render icon image."))?;

    fs::write(output_path, png).context("Failed to write icon")?;

    Ok(())
}

/// Paint the icon: gradient background, card overlay, foreground glyph.
///
/// The draw context borrow ends before the pixels are handed back for
/// encoding. The two `match`es are graceful-degradation branches, not
/// error paths: a failed gradient capability means a flat fill, and an
/// unknown symbol name means fallback text.
fn compose_icon() -> RgbaImage {
    let mut canvas = Canvas::new(CANVAS_SIZE);
    {
        let mut ctx = canvas.context();

        match Gradient::new(&[BACKGROUND_START, BACKGROUND_END]) {
            Some(gradient) => ctx.fill_diagonal_gradient(&gradient),
            None => ctx.fill_flat(BACKGROUND_START),
        }

        let card = Rect::inset_from(CANVAS_SIZE, CARD_INSET);
        ctx.fill_rounded_rect(card, CARD_RADIUS, Rgb::WHITE, CARD_OPACITY);

        match symbol(SYMBOL_NAME) {
            Some(glyph) => ctx.draw_glyph(&glyph, SYMBOL_RECT, Rgb::WHITE),
            None => ctx.draw_block_text(FALLBACK_TEXT, FALLBACK_RECT, Rgb::WHITE),
        }
    }
    canvas.into_pixels()
}

// Encode the finished surface as PNG bytes with compression.
fn encode_png(pixels: &RgbaImage) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    let encoder =
        PngEncoder::new_with_quality(&mut buf, CompressionType::Best, PngFilterType::Adaptive);
    encoder.write_image(pixels.as_raw(), pixels.width(), pixels.height(), ColorType::Rgba8)?;
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn composed_icon_has_the_fixed_dimensions() {
        let pixels = compose_icon();
        assert_eq!(pixels.dimensions(), (CANVAS_SIZE, CANVAS_SIZE));
    }

    #[test]
    fn background_corners_carry_the_gradient_stops() {
        let pixels = compose_icon();

        // Both corners sit outside the card inset, so they show the
        // raw gradient endpoints.
        let top_left = pixels.get_pixel(0, 0);
        assert_eq!(top_left[0], 23);
        assert_eq!(top_left[1], 71);
        assert_eq!(top_left[2], 184);
        assert_eq!(top_left[3], 255);

        let bottom_right = pixels.get_pixel(CANVAS_SIZE - 1, CANVAS_SIZE - 1);
        assert_eq!(bottom_right[0], 41);
        assert_eq!(bottom_right[1], 31);
        assert_eq!(bottom_right[2], 84);
        assert_eq!(bottom_right[3], 255);
    }

    #[test]
    fn foreground_glyph_is_white_at_the_canvas_center() {
        let pixels = compose_icon();
        let center = pixels.get_pixel(CANVAS_SIZE / 2, CANVAS_SIZE / 2);
        assert!(
            center[0] >= 250 && center[1] >= 250 && center[2] >= 250,
            "expected white glyph at center, got {center:?}"
        );
    }

    #[test]
    fn card_lightens_the_background_inside_the_inset() {
        let pixels = compose_icon();

        // Same gradient position, one sample inside the card and one
        // outside it (above the inset).
        let inside = pixels.get_pixel(600, 150);
        let outside = pixels.get_pixel(700, 50);
        assert!(
            inside[0] > outside[0] && inside[1] > outside[1] && inside[2] > outside[2],
            "card should lighten pixels: inside {inside:?}, outside {outside:?}"
        );
    }

    #[test]
    fn encode_png_emits_a_png_signature() {
        let png = encode_png(&compose_icon()).expect("encoding should succeed");
        assert_eq!(&png[..8], &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A]);
    }

    #[test]
    fn render_creates_missing_parent_directories() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let output = temp_dir.path().join("assets").join("icons").join("icon.png");

        render(&output).expect("render should succeed");

        let written = image::open(&output).expect("Failed to open written icon");
        assert_eq!(written.width(), CANVAS_SIZE);
        assert_eq!(written.height(), CANVAS_SIZE);
    }

    #[test]
    fn render_fails_when_the_target_is_a_directory() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");

        let err = render(temp_dir.path()).expect_err("writing over a directory should fail");
        assert!(format!("{err:#}").starts_with("Failed to write icon:"));
    }
}
