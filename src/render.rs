//! Centered-label renderer.
//!
//! Draws one `IconSpec`: background fill, optional shape inscribed in the
//! margin rectangle, then the label centered on its measured glyph bounding
//! box. Glyph outlines report an origin that is not the visual top-left of
//! the drawn marks, so centering works on the union pixel bbox and
//! compensates for its offset.

use ab_glyph::{point, Font, FontArc, Glyph, PxScale, ScaleFont};
use anyhow::{bail, Result};
use image::{DynamicImage, Rgba, RgbaImage};

use crate::assets::{Background, IconSpec, Rgb, ShapeKind};

/// Laid-out glyphs plus their union pixel bounds relative to the layout
/// origin at (0, baseline).
struct TextLayout {
    glyphs: Vec<Glyph>,
    min_x: f32,
    min_y: f32,
    width: f32,
    height: f32,
}

/// Compose one placeholder image. Opaque backgrounds produce an RGB
/// raster, a transparent background produces RGBA.
pub fn render(spec: &IconSpec, font: &FontArc) -> Result<DynamicImage> {
    if spec.width == 0 || spec.height == 0 {
        bail!("canvas {}x{} is empty", spec.width, spec.height);
    }
    if spec.font_px == 0 {
        bail!("font size must be positive");
    }
    if spec.shape != ShapeKind::None
        && (spec.margin_x * 2 >= spec.width || spec.margin_y * 2 >= spec.height)
    {
        bail!(
            "margins {}x{} leave no shape area on a {}x{} canvas",
            spec.margin_x,
            spec.margin_y,
            spec.width,
            spec.height
        );
    }

    let mut canvas = match spec.background {
        Background::Solid(c) => {
            RgbaImage::from_pixel(spec.width, spec.height, Rgba([c[0], c[1], c[2], 255]))
        }
        Background::Transparent => {
            RgbaImage::from_pixel(spec.width, spec.height, Rgba([0, 0, 0, 0]))
        }
    };

    match spec.shape {
        ShapeKind::Circle => fill_ellipse(&mut canvas, spec.margin_x, spec.margin_y, spec.shape_fill),
        ShapeKind::Rectangle => fill_rect(&mut canvas, spec.margin_x, spec.margin_y, spec.shape_fill),
        ShapeKind::None => {}
    }

    draw_text_centered(
        &mut canvas,
        font,
        &spec.text,
        spec.font_px as f32,
        spec.text_color,
    );

    Ok(match spec.background {
        Background::Solid(_) => DynamicImage::ImageRgb8(DynamicImage::ImageRgba8(canvas).to_rgb8()),
        Background::Transparent => DynamicImage::ImageRgba8(canvas),
    })
}

/// Filled ellipse inscribed in the margin rectangle.
fn fill_ellipse(canvas: &mut RgbaImage, margin_x: u32, margin_y: u32, fill: Rgb) {
    let (w, h) = canvas.dimensions();
    let cx = w as f32 * 0.5;
    let cy = h as f32 * 0.5;
    let rx = (w - margin_x * 2) as f32 * 0.5;
    let ry = (h - margin_y * 2) as f32 * 0.5;
    let px = Rgba([fill[0], fill[1], fill[2], 255]);
    for y in margin_y..h - margin_y {
        for x in margin_x..w - margin_x {
            // Sample at the pixel center.
            let dx = (x as f32 + 0.5 - cx) / rx;
            let dy = (y as f32 + 0.5 - cy) / ry;
            if dx * dx + dy * dy <= 1.0 {
                canvas.put_pixel(x, y, px);
            }
        }
    }
}

fn fill_rect(canvas: &mut RgbaImage, margin_x: u32, margin_y: u32, fill: Rgb) {
    let (w, h) = canvas.dimensions();
    let px = Rgba([fill[0], fill[1], fill[2], 255]);
    for y in margin_y..h - margin_y {
        for x in margin_x..w - margin_x {
            canvas.put_pixel(x, y, px);
        }
    }
}

/// Layout glyphs along a single baseline starting at x=0 and measure the
/// union of their pixel bounds. Returns `None` for text with no visible
/// marks (empty string, whitespace only).
fn layout_text(font: &FontArc, text: &str, px: f32) -> Option<TextLayout> {
    let scaled = font.as_scaled(PxScale::from(px));
    let mut glyphs: Vec<Glyph> = Vec::with_capacity(text.chars().count());
    let mut caret = point(0.0, scaled.ascent());
    let mut last: Option<Glyph> = None;
    for ch in text.chars() {
        let mut glyph = scaled.scaled_glyph(ch);
        if let Some(prev) = last.take() {
            caret.x += scaled.kern(prev.id, glyph.id);
        }
        glyph.position = caret;
        caret.x += scaled.h_advance(glyph.id);
        last = Some(glyph.clone());
        glyphs.push(glyph);
    }

    let mut min_x = f32::MAX;
    let mut min_y = f32::MAX;
    let mut max_x = f32::MIN;
    let mut max_y = f32::MIN;
    for glyph in &glyphs {
        if let Some(outlined) = scaled.outline_glyph(glyph.clone()) {
            let b = outlined.px_bounds();
            min_x = min_x.min(b.min.x);
            min_y = min_y.min(b.min.y);
            max_x = max_x.max(b.max.x);
            max_y = max_y.max(b.max.y);
        }
    }
    if min_x > max_x {
        return None;
    }
    Some(TextLayout {
        glyphs,
        min_x,
        min_y,
        width: max_x - min_x,
        height: max_y - min_y,
    })
}

/// Offset that moves the layout's bbox center onto the canvas center.
fn centering_offset(canvas_w: u32, canvas_h: u32, layout: &TextLayout) -> (f32, f32) {
    (
        (canvas_w as f32 - layout.width) * 0.5 - layout.min_x,
        (canvas_h as f32 - layout.height) * 0.5 - layout.min_y,
    )
}

fn draw_text_centered(canvas: &mut RgbaImage, font: &FontArc, text: &str, px: f32, color: Rgb) {
    let Some(layout) = layout_text(font, text, px) else {
        return;
    };
    let (w, h) = canvas.dimensions();
    let (dx, dy) = centering_offset(w, h, &layout);
    let scaled = font.as_scaled(PxScale::from(px));
    for glyph in layout.glyphs {
        let Some(outlined) = scaled.outline_glyph(glyph) else {
            continue;
        };
        let b = outlined.px_bounds();
        outlined.draw(|gx, gy, coverage| {
            let x = (b.min.x + gx as f32 + dx).round() as i64;
            let y = (b.min.y + gy as f32 + dy).round() as i64;
            if coverage <= 0.0 || x < 0 || y < 0 || x >= w as i64 || y >= h as i64 {
                return;
            }
            blend_pixel(canvas.get_pixel_mut(x as u32, y as u32), color, coverage);
        });
    }
}

/// Coverage blend of `color` over the destination; alpha only ever grows.
fn blend_pixel(dst: &mut Rgba<u8>, color: Rgb, coverage: f32) {
    let a = coverage.clamp(0.0, 1.0);
    for i in 0..3 {
        dst.0[i] = (dst.0[i] as f32 * (1.0 - a) + color[i] as f32 * a).round() as u8;
    }
    dst.0[3] = dst.0[3].max((a * 255.0).round() as u8);
}
