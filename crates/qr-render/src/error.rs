use thiserror::Error;

/// QR rendering errors.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("qr encoding failed: {0}")]
    Encode(String),

    #[error("image encoding failed: {0}")]
    Image(String),

    #[error("invalid size: {0}")]
    InvalidSize(String),
}
