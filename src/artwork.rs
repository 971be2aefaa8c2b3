//! Procedural drawing primitives for the default icon.
//!
//! Everything here renders into a plain `RgbaImage` with per-pixel
//! coverage math; there is no font or vector-graphics backend. The two
//! capability-dependent pieces (gradient construction and named-symbol
//! lookup) return `Option` so callers can degrade to their fallbacks.

use image::{Rgba, RgbaImage};

/// RGB color with components in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb::new(1.0, 1.0, 1.0);

    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Rgb { r, g, b }
    }

    fn lerp(self, other: Rgb, t: f32) -> Rgb {
        Rgb::new(
            self.r + (other.r - self.r) * t,
            self.g + (other.g - self.g) * t,
            self.b + (other.b - self.b) * t,
        )
    }

    fn to_rgba(self) -> Rgba<u8> {
        Rgba([
            (self.r * 255.0).round() as u8,
            (self.g * 255.0).round() as u8,
            (self.b * 255.0).round() as u8,
            255,
        ])
    }
}

/// Axis-aligned rectangle in canvas coordinates.
#[derive(Debug, Clone, Copy)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Rect { x, y, w, h }
    }

    /// The full canvas rectangle shrunk by `margin` on every side.
    pub fn inset_from(size: u32, margin: f32) -> Self {
        let size = size as f32;
        Rect::new(margin, margin, size - 2.0 * margin, size - 2.0 * margin)
    }

    fn center(&self) -> (f32, f32) {
        (self.x + self.w / 2.0, self.y + self.h / 2.0)
    }

    /// Anti-aliased coverage of the point `(px, py)` by this rectangle
    /// with rounded corners of the given radius. 1.0 well inside,
    /// 0.0 well outside, a one-pixel ramp across the edge.
    fn rounded_coverage(&self, px: f32, py: f32, radius: f32) -> f32 {
        let (cx, cy) = self.center();
        let qx = (px - cx).abs() - (self.w / 2.0 - radius);
        let qy = (py - cy).abs() - (self.h / 2.0 - radius);
        let outside = (qx.max(0.0).powi(2) + qy.max(0.0).powi(2)).sqrt();
        let dist = outside + qx.max(qy).min(0.0) - radius;
        (0.5 - dist).clamp(0.0, 1.0)
    }
}

/// Two-stop linear gradient.
///
/// Construction is the capability check: it fails (returns `None`) when
/// fewer than two stops are supplied, and the caller falls back to a
/// flat fill of the first color.
#[derive(Debug)]
pub struct Gradient {
    start: Rgb,
    end: Rgb,
}

impl Gradient {
    pub fn new(stops: &[Rgb]) -> Option<Gradient> {
        let (&start, rest) = stops.split_first()?;
        let &end = rest.last()?;
        Some(Gradient { start, end })
    }

    fn at(&self, t: f32) -> Rgb {
        self.start.lerp(self.end, t.clamp(0.0, 1.0))
    }
}

/// Fixed-size drawing surface.
///
/// All drawing goes through a [`DrawContext`] borrowed from the canvas;
/// the borrow must end before the pixels can be taken for encoding,
/// which gives the acquire/draw/release shape of the render pass.
pub struct Canvas {
    pixels: RgbaImage,
}

impl Canvas {
    pub fn new(size: u32) -> Canvas {
        Canvas {
            pixels: RgbaImage::from_pixel(size, size, Rgba([0, 0, 0, 0])),
        }
    }

    pub fn context(&mut self) -> DrawContext<'_> {
        DrawContext {
            pixels: &mut self.pixels,
        }
    }

    pub fn into_pixels(self) -> RgbaImage {
        self.pixels
    }
}

/// Scoped handle through which shapes are composited onto a [`Canvas`].
pub struct DrawContext<'a> {
    pixels: &'a mut RgbaImage,
}

impl DrawContext<'_> {
    /// Fill the whole surface with one opaque color.
    pub fn fill_flat(&mut self, color: Rgb) {
        let fill = color.to_rgba();
        for pixel in self.pixels.pixels_mut() {
            *pixel = fill;
        }
    }

    /// Fill the whole surface with `gradient` blended along the
    /// diagonal, first stop at the top-left corner, last stop at the
    /// bottom-right corner.
    pub fn fill_diagonal_gradient(&mut self, gradient: &Gradient) {
        let (w, h) = self.pixels.dimensions();
        let span = (w + h).saturating_sub(2).max(1) as f32;
        for (x, y, pixel) in self.pixels.enumerate_pixels_mut() {
            let t = (x + y) as f32 / span;
            *pixel = gradient.at(t).to_rgba();
        }
    }

    /// Composite a rounded rectangle over the surface at the given
    /// opacity, anti-aliasing the edges.
    pub fn fill_rounded_rect(&mut self, rect: Rect, radius: f32, color: Rgb, opacity: f32) {
        for (x, y, pixel) in self.pixels.enumerate_pixels_mut() {
            let coverage = rect.rounded_coverage(x as f32 + 0.5, y as f32 + 0.5, radius);
            if coverage > 0.0 {
                blend(pixel, color, opacity * coverage);
            }
        }
    }

    /// Composite an axis-aligned filled rectangle at the given opacity.
    pub fn fill_rect(&mut self, rect: Rect, color: Rgb, opacity: f32) {
        let (w, h) = self.pixels.dimensions();
        let x0 = rect.x.max(0.0) as u32;
        let y0 = rect.y.max(0.0) as u32;
        let x1 = (rect.x + rect.w).min(w as f32).ceil() as u32;
        let y1 = (rect.y + rect.h).min(h as f32).ceil() as u32;
        for y in y0..y1 {
            for x in x0..x1 {
                blend(self.pixels.get_pixel_mut(x, y), color, opacity);
            }
        }
    }

    /// Draw `glyph` in `color`, scaled to fill `rect`.
    pub fn draw_glyph(&mut self, glyph: &Glyph, rect: Rect, color: Rgb) {
        let (w, h) = self.pixels.dimensions();
        let x0 = rect.x.max(0.0) as u32;
        let y0 = rect.y.max(0.0) as u32;
        let x1 = (rect.x + rect.w).min(w as f32).ceil() as u32;
        let y1 = (rect.y + rect.h).min(h as f32).ceil() as u32;
        for y in y0..y1 {
            for x in x0..x1 {
                let ux = (x as f32 + 0.5 - rect.x) / rect.w;
                let uy = (y as f32 + 0.5 - rect.y) / rect.h;
                let coverage = glyph.coverage(ux, uy);
                if coverage > 0.0 {
                    blend(self.pixels.get_pixel_mut(x, y), color, coverage);
                }
            }
        }
    }

    /// Draw `text` in heavy blocky letterforms filling `rect`, one cell
    /// per character. Characters without a letterform are skipped.
    pub fn draw_block_text(&mut self, text: &str, rect: Rect, color: Rgb) {
        let count = text.chars().count();
        if count == 0 {
            return;
        }
        let gap = rect.w * 0.08;
        let cell_w = (rect.w - gap * (count - 1) as f32) / count as f32;
        for (i, c) in text.chars().enumerate() {
            let Some(bars) = letter_bars(c) else {
                continue;
            };
            let cell_x = rect.x + i as f32 * (cell_w + gap);
            for bar in bars {
                let segment = Rect::new(
                    cell_x + bar.x * cell_w,
                    rect.y + bar.y * rect.h,
                    bar.w * cell_w,
                    bar.h * rect.h,
                );
                self.fill_rect(segment, color, 1.0);
            }
        }
    }
}

// Source-over blend of an opacity-weighted color onto one pixel.
fn blend(pixel: &mut Rgba<u8>, color: Rgb, alpha: f32) {
    let a = alpha.clamp(0.0, 1.0);
    let mix = |dst: u8, src: f32| -> u8 {
        let dst = dst as f32 / 255.0;
        ((dst + (src - dst) * a) * 255.0).round() as u8
    };
    pixel[0] = mix(pixel[0], color.r);
    pixel[1] = mix(pixel[1], color.g);
    pixel[2] = mix(pixel[2], color.b);
    pixel[3] = pixel[3].max((a * 255.0).round() as u8);
}

/// A vector glyph expressed as coverage over the unit square.
#[derive(Debug)]
pub struct Glyph {
    sparks: &'static [Spark],
}

impl Glyph {
    fn coverage(&self, ux: f32, uy: f32) -> f32 {
        self.sparks
            .iter()
            .map(|spark| spark.coverage(ux, uy))
            .fold(0.0, f32::max)
    }
}

/// One four-pointed spark, positioned in unit-square coordinates.
#[derive(Debug)]
struct Spark {
    cx: f32,
    cy: f32,
    radius: f32,
}

impl Spark {
    /// Coverage of the astroid `|dx|^(2/3) + |dy|^(2/3) <= r^(2/3)`,
    /// with a soft edge band.
    fn coverage(&self, ux: f32, uy: f32) -> f32 {
        let dx = (ux - self.cx).abs() / self.radius;
        let dy = (uy - self.cy).abs() / self.radius;
        let f = dx.powf(2.0 / 3.0) + dy.powf(2.0 / 3.0);
        ((1.0 - f) * 40.0 + 0.5).clamp(0.0, 1.0)
    }
}

// Large spark centered, medium companion upper-right, small lower-left.
const SPARKLES: &[Spark] = &[
    Spark {
        cx: 0.46,
        cy: 0.54,
        radius: 0.42,
    },
    Spark {
        cx: 0.80,
        cy: 0.20,
        radius: 0.17,
    },
    Spark {
        cx: 0.16,
        cy: 0.18,
        radius: 0.10,
    },
];

/// Look up a named vector symbol. Returns `None` when the name is not
/// in the built-in set, in which case callers draw fallback text.
pub fn symbol(name: &str) -> Option<Glyph> {
    match name {
        "sparkles" => Some(Glyph { sparks: SPARKLES }),
        _ => None,
    }
}

/// One filled bar of a blocky letterform, in unit-cell coordinates.
struct Bar {
    x: f32,
    y: f32,
    w: f32,
    h: f32,
}

const LETTER_A: &[Bar] = &[
    Bar { x: 0.0, y: 0.0, w: 1.0, h: 0.18 },
    Bar { x: 0.0, y: 0.0, w: 0.24, h: 1.0 },
    Bar { x: 0.76, y: 0.0, w: 0.24, h: 1.0 },
    Bar { x: 0.0, y: 0.5, w: 1.0, h: 0.16 },
];

const LETTER_P: &[Bar] = &[
    Bar { x: 0.0, y: 0.0, w: 0.24, h: 1.0 },
    Bar { x: 0.0, y: 0.0, w: 1.0, h: 0.18 },
    Bar { x: 0.76, y: 0.0, w: 0.24, h: 0.62 },
    Bar { x: 0.0, y: 0.46, w: 1.0, h: 0.16 },
];

fn letter_bars(c: char) -> Option<&'static [Bar]> {
    match c {
        'A' => Some(LETTER_A),
        'P' => Some(LETTER_P),
        _ => None,
    }
}
