//! Rasterizes [`QrSettings`] into an RGBA image and PNG bytes.

use image::{ImageFormat, Rgba, RgbaImage};
use qrcode::QrCode;

use crate::{MAX_MARGIN, QrSettings};

/// Side length used for downloads and clipboard copies.
pub const EXPORT_SIZE_PX: u32 = 1024;

/// Side length of the on-screen preview.
pub const PREVIEW_SIZE_PX: u32 = 256;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RenderError {
    #[error("Nothing to encode")]
    EmptyData,
    #[error("Invalid color '{0}'")]
    InvalidColor(String),
    #[error("Failed to encode QR code: {0}")]
    Encode(String),
    #[error("Failed to encode PNG: {0}")]
    Png(String),
    #[error("Margin of {0} modules is too large, at most {max} is supported", max = MAX_MARGIN)]
    MarginTooLarge(u32),
}

/// Renders `settings.url` as a QR code no larger than `target_px`.
///
/// The quiet zone is `settings.margin` modules wide on every side. Modules are
/// scaled by a whole factor of at least one, so a symbol with more modules
/// than `target_px` comes out at one pixel per module. Margins above
/// [`MAX_MARGIN`] are rejected.
pub fn render_qr(settings: &QrSettings, target_px: u32) -> Result<RgbaImage, RenderError> {
    if settings.url.is_empty() {
        return Err(RenderError::EmptyData);
    }
    let margin = settings.margin;
    if margin > MAX_MARGIN {
        return Err(RenderError::MarginTooLarge(margin));
    }
    let dark = settings
        .primary_rgb()
        .ok_or_else(|| RenderError::InvalidColor(settings.primary_color.clone()))?;
    let light = settings
        .secondary_rgb()
        .ok_or_else(|| RenderError::InvalidColor(settings.secondary_color.clone()))?;

    let code = QrCode::with_error_correction_level(
        settings.url.as_bytes(),
        settings.error_correction_level.to_ec_level(),
    )
    .map_err(|e| RenderError::Encode(e.to_string()))?;

    let modules = code.width() as u32;
    let too_large = || RenderError::MarginTooLarge(margin);
    let total = margin
        .checked_mul(2)
        .and_then(|quiet| quiet.checked_add(modules))
        .ok_or_else(too_large)?;
    let scale = (target_px / total).max(1);
    let side = total.checked_mul(scale).ok_or_else(too_large)?;

    let dark = Rgba([dark[0], dark[1], dark[2], 255]);
    let mut img = RgbaImage::from_pixel(side, side, Rgba([light[0], light[1], light[2], 255]));

    for (y, row) in code.to_colors().chunks(modules as usize).enumerate() {
        for (x, color) in row.iter().enumerate() {
            if *color != qrcode::Color::Dark {
                continue;
            }
            let left = (x as u32 + margin) * scale;
            let top = (y as u32 + margin) * scale;
            for dy in 0..scale {
                for dx in 0..scale {
                    img.put_pixel(left + dx, top + dy, dark);
                }
            }
        }
    }

    Ok(img)
}

pub fn encode_png(img: &RgbaImage) -> Result<Vec<u8>, RenderError> {
    let mut cursor = std::io::Cursor::new(Vec::new());
    img.write_to(&mut cursor, ImageFormat::Png)
        .map_err(|e| RenderError::Png(e.to_string()))?;
    Ok(cursor.into_inner())
}

/// [`render_qr`] followed by [`encode_png`].
pub fn render_png(settings: &QrSettings, target_px: u32) -> Result<Vec<u8>, RenderError> {
    encode_png(&render_qr(settings, target_px)?)
}
