use thiserror::Error;

/// Message shown to the payer for any failed conversion.
pub const CONVERSION_FAILED_MESSAGE: &str =
    "Terjadi kesalahan saat mengkonversi QRIS. Pastikan data yang dimasukkan benar.";

#[derive(Debug, Error, uniffi::Error)]
#[uniffi(flat_error)]
pub enum TagihanError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid payload: {0}")]
    InvalidPayload(String),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("Rendering failed: {0}")]
    RenderFailed(String),

    #[error("Conversion failed: {0}")]
    ConversionFailed(String),
}

impl TagihanError {
    /// The single user-facing message; the variant detail is for logs only.
    pub fn user_message(&self) -> &'static str {
        CONVERSION_FAILED_MESSAGE
    }
}

impl From<qris_codec::QrisError> for TagihanError {
    fn from(e: qris_codec::QrisError) -> Self {
        match &e {
            qris_codec::QrisError::InvalidAmount(_) | qris_codec::QrisError::InvalidFee(_) => {
                TagihanError::InvalidInput(e.to_string())
            }
            _ => TagihanError::InvalidPayload(e.to_string()),
        }
    }
}

impl From<qr_render::RenderError> for TagihanError {
    fn from(e: qr_render::RenderError) -> Self {
        TagihanError::RenderFailed(e.to_string())
    }
}

impl From<serde_json::Error> for TagihanError {
    fn from(e: serde_json::Error) -> Self {
        TagihanError::InvalidConfig(e.to_string())
    }
}
