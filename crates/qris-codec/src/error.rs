use thiserror::Error;

/// QRIS payload errors.
#[derive(Debug, Error)]
pub enum QrisError {
    #[error("malformed payload: {0}")]
    MalformedPayload(String),

    #[error("missing field: {0}")]
    MissingField(String),

    #[error("field too long: {0}")]
    FieldTooLong(String),

    #[error("invalid amount: {0}")]
    InvalidAmount(String),

    #[error("invalid fee: {0}")]
    InvalidFee(String),
}
