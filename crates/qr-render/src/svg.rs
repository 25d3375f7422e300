use qrcode::render::svg;

use crate::error::RenderError;
use crate::{check_size, encode};

/// Renders `content` as a standalone SVG document.
pub fn render_svg(content: &str, size: u32) -> Result<String, RenderError> {
    check_size(size)?;
    let code = encode(content)?;

    Ok(code
        .render::<svg::Color>()
        .min_dimensions(size, size)
        .dark_color(svg::Color("#000000"))
        .light_color(svg::Color("#ffffff"))
        .build())
}
