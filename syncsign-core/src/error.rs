//! Error types for layout construction, directory lookups and routing.

use thiserror::Error;

/// Result type for layout operations.
pub type LayoutResult<T> = Result<T, LayoutError>;

/// Errors raised while building widgets or serializing templates.
///
/// Every constraint variant carries the rejected value together with the
/// values (or rule) that would have been accepted.
#[derive(Debug, Error)]
pub enum LayoutError {
    /// Geometry violates the display's 8-pixel packing rule.
    #[error("{widget}: {rule} (got x={x}, y={y}, width={width}, height={height})")]
    Misaligned {
        /// Widget kind that rejected the geometry.
        widget: &'static str,
        /// Human readable alignment rule.
        rule: &'static str,
        /// Requested x position.
        x: i32,
        /// Requested y position.
        y: i32,
        /// Requested width.
        width: u32,
        /// Requested height.
        height: u32,
    },

    /// Unknown colour name.
    #[error("invalid colour {value:?}: must be one of {allowed}")]
    InvalidColor {
        /// Rejected value.
        value: String,
        /// Accepted values.
        allowed: String,
    },

    /// Unknown fill/stroke pattern name.
    #[error("invalid pattern {value:?}: must be one of {allowed}")]
    InvalidPattern {
        /// Rejected value.
        value: String,
        /// Accepted values.
        allowed: String,
    },

    /// Unknown text alignment.
    #[error("invalid text alignment {value:?}: must be one of {allowed}")]
    InvalidTextAlign {
        /// Rejected value.
        value: String,
        /// Accepted values.
        allowed: String,
    },

    /// Unknown QR error-correction level.
    #[error("invalid error-correction level {value:?}: must be one of {allowed}")]
    InvalidEccLevel {
        /// Rejected value.
        value: String,
        /// Accepted values.
        allowed: String,
    },

    /// Unknown symbol set for a symbol box.
    #[error("invalid symbol set {value:?}: must be one of {allowed}")]
    InvalidSymbolSet {
        /// Rejected value.
        value: String,
        /// Accepted values.
        allowed: String,
    },

    /// Symbol name not present in the requested set.
    #[error("no such symbol {symbol:?} in set {set}")]
    UnknownSymbol {
        /// Requested symbol name.
        symbol: String,
        /// Symbol set that was searched.
        set: &'static str,
    },

    /// Font identifier not present in the font table.
    #[error("{font:?} is not a valid font. Available fonts: {available}")]
    UnknownFont {
        /// Requested font.
        font: String,
        /// Every known font.
        available: String,
    },

    /// Known font requested at a size it does not ship in.
    #[error("{font} is not available in size {size}. Available sizes for this font: {available}")]
    UnsupportedFontSize {
        /// Requested font.
        font: &'static str,
        /// Requested point size.
        size: u16,
        /// Sizes the font supports.
        available: String,
    },

    /// More button slots than the hardware has.
    #[error("button labels: got {count} {what}, at most {max} allowed")]
    TooManyButtons {
        /// Which list overflowed (labels or styles).
        what: &'static str,
        /// Number supplied.
        count: usize,
        /// Slots available.
        max: usize,
    },

    /// Button label exceeds the per-slot character limit.
    #[error("button label {label:?} is {len} characters, at most {max} allowed")]
    LabelTooLong {
        /// Rejected label.
        label: String,
        /// Its length in characters.
        len: usize,
        /// Character limit.
        max: usize,
    },

    /// Numeric parameter outside its legal range.
    #[error("{widget}: {field} must be within {min}..={max} (got {value})")]
    OutOfRange {
        /// Widget kind that rejected the value.
        widget: &'static str,
        /// Field name.
        field: &'static str,
        /// Rejected value.
        value: i64,
        /// Lower bound.
        min: i64,
        /// Upper bound.
        max: i64,
    },

    /// Wire document serialization failed.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl LayoutError {
    /// Returns true if this error describes a rejected widget or template
    /// value rather than an encoding failure.
    #[must_use]
    pub fn is_constraint_violation(&self) -> bool {
        !matches!(self, Self::Serialization(_))
    }
}

/// Errors returned by a [`crate::DeviceDirectory`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DirectoryError {
    /// No node with the given id.
    #[error("node not found: {0}")]
    NodeNotFound(String),

    /// No hub with the given serial number.
    #[error("hub not found: {0}")]
    HubNotFound(String),

    /// The directory backend could not be reached.
    #[error("directory unavailable: {0}")]
    Unavailable(String),
}

/// Errors raised when configuring a [`crate::RenderRouter`].
#[derive(Debug, Error)]
pub enum RouterError {
    /// The cloud API root or derived endpoint is not a valid URL.
    #[error("invalid endpoint URL {url:?}: {source}")]
    InvalidUrl {
        /// Offending URL text.
        url: String,
        /// Parser error.
        #[source]
        source: url::ParseError,
    },
}
