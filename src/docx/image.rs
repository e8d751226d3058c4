//! Screen image loading and sizing.
//!
//! Images are decoded up front so a broken file surfaces as one skipped
//! image instead of a corrupt document, and re-encoded as PNG because that
//! is the one raster format every word processor accepts.

use anyhow::{Context, Result};
use image::GenericImageView;
use std::fs;
use std::io::Cursor;
use std::path::Path;

/// Display width used when the specification gives none (or zero).
pub const DEFAULT_WIDTH_PT: f32 = 400.0;

const EMU_PER_POINT: f32 = 12700.0;

/// A decoded screen image ready to embed: PNG bytes, pixel dimensions, and
/// the resolved display size in points.
#[derive(Debug, Clone)]
pub struct EmbeddedImage {
    pub png: Vec<u8>,
    pub px_width: u32,
    pub px_height: u32,
    pub width_pt: f32,
    pub height_pt: f32,
}

/// Read and decode an image file, scaling its display height to preserve
/// the intrinsic aspect ratio at the requested width.
pub fn load(path: &Path, requested_width: u32) -> Result<EmbeddedImage> {
    let bytes =
        fs::read(path).with_context(|| format!("read image file {}", path.display()))?;
    let decoded = image::load_from_memory(&bytes)
        .with_context(|| format!("decode image file {}", path.display()))?;
    let (px_width, px_height) = decoded.dimensions();

    let mut png = Cursor::new(Vec::new());
    decoded
        .write_to(&mut png, image::ImageFormat::Png)
        .with_context(|| format!("re-encode image file {}", path.display()))?;

    let width_pt = display_width(requested_width);
    Ok(EmbeddedImage {
        png: png.into_inner(),
        px_width,
        px_height,
        width_pt,
        height_pt: scaled_height(width_pt, px_width, px_height),
    })
}

/// Requested width in points, falling back to the default when unset.
pub fn display_width(requested: u32) -> f32 {
    if requested == 0 {
        DEFAULT_WIDTH_PT
    } else {
        requested as f32
    }
}

/// Aspect-preserving display height for a target width.
pub fn scaled_height(width_pt: f32, px_width: u32, px_height: u32) -> f32 {
    width_pt / px_width as f32 * px_height as f32
}

/// Points to English Metric Units, the length unit of embedded drawings.
pub fn emu(points: f32) -> u32 {
    (points * EMU_PER_POINT) as u32
}
