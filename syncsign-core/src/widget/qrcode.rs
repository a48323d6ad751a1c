//! QR codes (`QRCODE`), encoded on the device.

use serde::{Deserialize, Serialize};

use crate::primitives::vocabulary;
use crate::{LayoutError, LayoutResult, Point};

/// Largest QR symbol version.
pub const MAX_QR_VERSION: u8 = 40;
/// Largest module scale the renderer accepts.
pub const MAX_QR_SCALE: u8 = 16;

vocabulary! {
    /// QR error-correction level.
    EccLevel, InvalidEccLevel {
        /// ~7% recovery.
        Low => "low",
        /// ~15% recovery.
        Medium => "medium",
        /// ~25% recovery.
        Quartile => "quartile",
        /// ~30% recovery.
        High => "high",
    }
}

/// A QR code; the renderer does the encoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QrCode {
    position: Point,
    scale: u8,
    version: u8,
    ecc_level: EccLevel,
    text: String,
}

impl QrCode {
    /// Create a version 2 code at scale 4 with medium error correction.
    #[must_use]
    pub fn new(x: i32, y: i32, text: impl Into<String>) -> Self {
        Self {
            position: Point::new(x, y),
            scale: 4,
            version: 2,
            ecc_level: EccLevel::Medium,
            text: text.into(),
        }
    }

    /// Set the pixel size of one module.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::OutOfRange`] outside `1..=16`.
    pub fn with_scale(mut self, scale: u8) -> LayoutResult<Self> {
        check_range("scale", scale, MAX_QR_SCALE)?;
        self.scale = scale;
        Ok(self)
    }

    /// Set the QR symbol version (its size parameter).
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::OutOfRange`] outside `1..=40`.
    pub fn with_version(mut self, version: u8) -> LayoutResult<Self> {
        check_range("version", version, MAX_QR_VERSION)?;
        self.version = version;
        Ok(self)
    }

    /// Set the error-correction level.
    #[must_use]
    pub fn with_ecc_level(mut self, ecc_level: EccLevel) -> Self {
        self.ecc_level = ecc_level;
        self
    }

    /// Top-left corner.
    #[must_use]
    pub fn position(&self) -> Point {
        self.position
    }

    /// Encoded text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    pub(crate) fn to_data(&self) -> QrCodeData {
        QrCodeData {
            scale: self.scale,
            ecc_level: self.ecc_level,
            version: self.version,
            position: self.position,
            text: self.text.clone(),
        }
    }
}

fn check_range(field: &'static str, value: u8, max: u8) -> LayoutResult<()> {
    if value == 0 || value > max {
        return Err(LayoutError::OutOfRange {
            widget: "QRCode",
            field,
            value: i64::from(value),
            min: 1,
            max: i64::from(max),
        });
    }
    Ok(())
}

/// Wire payload of a `QRCODE` item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QrCodeData {
    /// Module size in pixels.
    pub scale: u8,
    /// Error-correction level.
    pub ecc_level: EccLevel,
    /// Symbol version.
    pub version: u8,
    /// Top-left corner.
    pub position: Point,
    /// Encoded text.
    pub text: String,
}
