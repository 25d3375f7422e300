//! Renderers and text output for the terminal front end.

use std::fs;
use std::path::PathBuf;

use qr_render::RenderError;
use tagihan_core::display::format_rupiah;
use tagihan_core::renderer::QrRenderer;
use tagihan_core::types::{ConversionResult, MerchantDetails};

/// Writes the QR code to a file, SVG when the extension says so, PNG
/// otherwise. Returns the path written.
pub struct FileRenderer {
    pub path: PathBuf,
    pub size: u32,
}

impl QrRenderer for FileRenderer {
    fn render(&self, payload: &str) -> Result<String, RenderError> {
        let is_svg = self
            .path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("svg"));

        let bytes = if is_svg {
            qr_render::render_svg(payload, self.size)?.into_bytes()
        } else {
            qr_render::render_png(payload, self.size)?
        };

        fs::write(&self.path, bytes)
            .map_err(|e| RenderError::Image(format!("{}: {e}", self.path.display())))?;
        Ok(self.path.display().to_string())
    }
}

/// Renders the QR code as block characters.
pub struct TerminalRenderer;

impl QrRenderer for TerminalRenderer {
    fn render(&self, payload: &str) -> Result<String, RenderError> {
        qr_render::render_terminal(payload)
    }
}

/// The bill breakdown shown under the QR code.
pub fn bill_summary(result: &ConversionResult, merchant: &MerchantDetails) -> String {
    let mut lines = vec!["Tagihan QRIS".to_string()];
    match (&merchant.name, &merchant.city) {
        (Some(name), Some(city)) => lines.push(format!("{name}, {city}")),
        (Some(name), None) => lines.push(name.clone()),
        _ => {}
    }
    lines.push(format!("{:<7}{}", "Biaya:", format_rupiah(result.amount)));
    lines.push(format!("{:<7}{}", "Fee:", format_rupiah(result.fee)));
    lines.push(format!("{:<7}{}", "Total:", format_rupiah(result.total)));
    lines.join("\n")
}
