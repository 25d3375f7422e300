use std::io::Cursor;

use image::{DynamicImage, GrayImage, ImageFormat, Luma};
use qrcode::Color;
use tracing::debug;

use crate::error::RenderError;
use crate::{check_size, encode, QUIET_ZONE};

const DARK: Luma<u8> = Luma([0]);
const LIGHT: Luma<u8> = Luma([255]);

/// Rasterizes `content` into a square grayscale image at least `size` pixels
/// wide.
///
/// Modules are scaled by a whole number of pixels so every module stays
/// crisp; the result is therefore a multiple of `modules + 2 * QUIET_ZONE`.
pub fn render_image(content: &str, size: u32) -> Result<GrayImage, RenderError> {
    check_size(size)?;
    let code = encode(content)?;

    let modules = code.width() as u32;
    let span = modules + 2 * QUIET_ZONE;
    let scale = size.div_ceil(span).max(1);
    let edge = span * scale;
    let colors = code.to_colors();

    let image = GrayImage::from_fn(edge, edge, |x, y| {
        let (mx, my) = (x / scale, y / scale);
        let inside = (QUIET_ZONE..QUIET_ZONE + modules).contains(&mx)
            && (QUIET_ZONE..QUIET_ZONE + modules).contains(&my);
        if !inside {
            return LIGHT;
        }
        let index = ((my - QUIET_ZONE) * modules + (mx - QUIET_ZONE)) as usize;
        match colors[index] {
            Color::Dark => DARK,
            Color::Light => LIGHT,
        }
    });

    debug!(modules, scale, edge, "rendered qr image");
    Ok(image)
}

/// Renders `content` as PNG bytes.
pub fn render_png(content: &str, size: u32) -> Result<Vec<u8>, RenderError> {
    let image = render_image(content, size)?;

    let mut png = Vec::new();
    DynamicImage::ImageLuma8(image)
        .write_to(&mut Cursor::new(&mut png), ImageFormat::Png)
        .map_err(|e| RenderError::Image(e.to_string()))?;

    Ok(png)
}
