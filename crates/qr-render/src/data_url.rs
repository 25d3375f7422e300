use base64::{engine::general_purpose::STANDARD, Engine as _};

use crate::error::RenderError;
use crate::png::render_png;
use crate::svg::render_svg;

/// Renders `content` as a `data:image/png;base64,...` URL.
pub fn png_data_url(content: &str, size: u32) -> Result<String, RenderError> {
    let png = render_png(content, size)?;
    Ok(format!("data:image/png;base64,{}", STANDARD.encode(png)))
}

/// Renders `content` as a `data:image/svg+xml;base64,...` URL.
pub fn svg_data_url(content: &str, size: u32) -> Result<String, RenderError> {
    let svg = render_svg(content, size)?;
    Ok(format!("data:image/svg+xml;base64,{}", STANDARD.encode(svg.as_bytes())))
}
