//! # qr-render
//!
//! Turns a payload string into a scannable QR image: grayscale PNG bytes,
//! SVG markup, a `data:` URL ready for an `<img>` tag or an image view, or
//! block characters for a terminal.

pub mod data_url;
pub mod error;
pub mod png;
pub mod svg;
pub mod terminal;

pub use data_url::{png_data_url, svg_data_url};
pub use error::RenderError;
pub use png::{render_image, render_png};
pub use svg::render_svg;
pub use terminal::render_terminal;

/// Default rendered edge length in pixels.
pub const DEFAULT_SIZE: u32 = 300;

/// Largest edge length accepted, in pixels.
pub const MAX_SIZE: u32 = 4096;

/// Quiet zone around the symbol, in modules.
pub const QUIET_ZONE: u32 = 4;

/// Encodes `content` at error-correction level M.
pub(crate) fn encode(content: &str) -> Result<qrcode::QrCode, RenderError> {
    qrcode::QrCode::with_error_correction_level(content.as_bytes(), qrcode::EcLevel::M)
        .map_err(|e| RenderError::Encode(e.to_string()))
}

pub(crate) fn check_size(size: u32) -> Result<(), RenderError> {
    if size == 0 || size > MAX_SIZE {
        return Err(RenderError::InvalidSize(format!(
            "{size} px, expected 1..={MAX_SIZE}"
        )));
    }
    Ok(())
}
