use qrcode::render::unicode::Dense1x2;

use crate::encode;
use crate::error::RenderError;

/// Renders `content` with half-block characters for a terminal.
///
/// Colors are inverted so the code scans on a dark background.
pub fn render_terminal(content: &str) -> Result<String, RenderError> {
    let code = encode(content)?;
    Ok(code
        .render::<Dense1x2>()
        .dark_color(Dense1x2::Light)
        .light_color(Dense1x2::Dark)
        .quiet_zone(true)
        .build())
}
