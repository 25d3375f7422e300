use qr_render::RenderError;

/// Turns a payload into something the front end can display.
pub trait QrRenderer {
    fn render(&self, payload: &str) -> Result<String, RenderError>;
}

/// Renders a PNG `data:` URL.
#[derive(Debug, Clone, Copy)]
pub struct PngDataUrlRenderer {
    pub size: u32,
}

impl Default for PngDataUrlRenderer {
    fn default() -> Self {
        Self {
            size: qr_render::DEFAULT_SIZE,
        }
    }
}

impl QrRenderer for PngDataUrlRenderer {
    fn render(&self, payload: &str) -> Result<String, RenderError> {
        qr_render::png_data_url(payload, self.size)
    }
}

/// Renders an SVG `data:` URL.
#[derive(Debug, Clone, Copy)]
pub struct SvgDataUrlRenderer {
    pub size: u32,
}

impl QrRenderer for SvgDataUrlRenderer {
    fn render(&self, payload: &str) -> Result<String, RenderError> {
        qr_render::svg_data_url(payload, self.size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn png_renderer_produces_png_url() {
        let url = PngDataUrlRenderer::default().render("hello").unwrap();
        assert!(url.starts_with("data:image/png;base64,"));
    }

    #[test]
    fn svg_renderer_produces_svg_url() {
        let url = SvgDataUrlRenderer { size: 100 }.render("hello").unwrap();
        assert!(url.starts_with("data:image/svg+xml;base64,"));
    }

    #[test]
    fn renderer_is_object_safe() {
        let renderers: Vec<Box<dyn QrRenderer>> = vec![
            Box::new(PngDataUrlRenderer { size: 50 }),
            Box::new(SvgDataUrlRenderer { size: 50 }),
        ];
        for renderer in &renderers {
            assert!(renderer.render("x").is_ok());
        }
    }
}
