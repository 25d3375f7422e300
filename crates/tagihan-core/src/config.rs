use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::TagihanError;

/// Static QRIS code of the deployed merchant.
pub const DEFAULT_STATIC_PAYLOAD: &str = "00020101021126570011ID.DANA.WWW011893600915336094826302093609482630303UMI51440014ID.CO.QRIS.WWW0215ID10222329023150303UMI5204737253033605802ID5922Ahmad Zakaria Fathoni 6013Kota Semarang61055021863045D82";

/// Deployment settings. Missing keys fall back to the defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, uniffi::Record)]
#[serde(default)]
pub struct MerchantConfig {
    /// The merchant's static QRIS payload, CRC included.
    pub static_payload: String,
    /// Edge length of the rendered QR image in pixels.
    pub qr_size: u32,
}

impl Default for MerchantConfig {
    fn default() -> Self {
        Self {
            static_payload: DEFAULT_STATIC_PAYLOAD.to_string(),
            qr_size: qr_render::DEFAULT_SIZE,
        }
    }
}

impl MerchantConfig {
    /// Parses and validates a JSON config document.
    pub fn from_json(json: &str) -> Result<Self, TagihanError> {
        let config: MerchantConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks the payload can be converted and the image size is sane.
    ///
    /// A stale CRC on the static payload is only logged: it is recomputed on
    /// every conversion anyway.
    pub fn validate(&self) -> Result<(), TagihanError> {
        let fields = qris_codec::parse(&self.static_payload)
            .map_err(|e| TagihanError::InvalidConfig(format!("static_payload: {e}")))?;

        if !fields
            .iter()
            .any(|field| field.tag == qris_codec::payload::TAG_COUNTRY_CODE)
        {
            return Err(TagihanError::InvalidConfig(
                "static_payload has no country code field".into(),
            ));
        }

        if self.qr_size == 0 || self.qr_size > qr_render::MAX_SIZE {
            return Err(TagihanError::InvalidConfig(format!(
                "qr_size must be between 1 and {}, got {}",
                qr_render::MAX_SIZE,
                self.qr_size
            )));
        }

        if !qris_codec::verify_checksum(&self.static_payload) {
            warn!("static_payload checksum is stale");
        }

        debug!(fields = fields.len(), qr_size = self.qr_size, "config validated");
        Ok(())
    }
}
