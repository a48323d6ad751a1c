//! Widgets - the drawable building blocks of a template.
//!
//! Every variant validates its geometry and vocabulary when it is built, so
//! a [`Widget`] value is always renderable. Turning a widget into its wire
//! fragment ([`Widget::to_wire`]) is a pure function of its current fields.

mod buttons;
mod circle;
mod line;
mod qrcode;
mod rectangle;
mod symbolbox;
mod textbox;

pub use buttons::{ButtonLabel, ButtonLabels, ButtonLabelsData, ButtonStyle};
pub use circle::{Circle, CircleData};
pub use line::{Line, LineData, LineEnds};
pub use qrcode::{EccLevel, QrCode, QrCodeData};
pub use rectangle::{Rectangle, RectangleData};
pub use symbolbox::Symbolbox;
pub use textbox::{TextData, Textbox, DEFAULT_LINE_SPACING};

use serde::{Deserialize, Serialize};

/// A wire fragment: `{"type": <TAG>, "data": {...}}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum WireItem {
    /// Stroked and/or filled box.
    #[serde(rename = "RECTANGLE")]
    Rectangle(RectangleData),
    /// Straight line.
    #[serde(rename = "LINE")]
    Line(LineData),
    /// Circle around a centre point.
    #[serde(rename = "CIRCLE")]
    Circle(CircleData),
    /// Text drawn in a font; symbol boxes use this tag with an icon font.
    #[serde(rename = "TEXT")]
    Text(TextData),
    /// QR code.
    #[serde(rename = "QRCODE")]
    QrCode(QrCodeData),
    /// Labels above the hardware buttons.
    #[serde(rename = "BOTTOM_CUSTOM_BUTTONS")]
    ButtonLabels(ButtonLabelsData),
}

impl WireItem {
    /// The fragment's type tag as it appears on the wire.
    #[must_use]
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Rectangle(_) => "RECTANGLE",
            Self::Line(_) => "LINE",
            Self::Circle(_) => "CIRCLE",
            Self::Text(_) => "TEXT",
            Self::QrCode(_) => "QRCODE",
            Self::ButtonLabels(_) => "BOTTOM_CUSTOM_BUTTONS",
        }
    }
}

/// Any drawable element.
#[derive(Debug, Clone, PartialEq)]
pub enum Widget {
    /// See [`Rectangle`].
    Rectangle(Rectangle),
    /// See [`Line`].
    Line(Line),
    /// See [`Circle`].
    Circle(Circle),
    /// See [`Textbox`].
    Textbox(Textbox),
    /// See [`Symbolbox`].
    Symbolbox(Symbolbox),
    /// See [`QrCode`].
    QrCode(QrCode),
    /// See [`ButtonLabels`].
    ButtonLabels(ButtonLabels),
}

impl Widget {
    /// Short variant name, used in logs and error messages.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Rectangle(_) => "rectangle",
            Self::Line(_) => "line",
            Self::Circle(_) => "circle",
            Self::Textbox(_) => "textbox",
            Self::Symbolbox(_) => "symbolbox",
            Self::QrCode(_) => "qrcode",
            Self::ButtonLabels(_) => "button_labels",
        }
    }

    /// Build the wire fragment for this widget.
    #[must_use]
    pub fn to_wire(&self) -> WireItem {
        match self {
            Self::Rectangle(w) => WireItem::Rectangle(w.to_data()),
            Self::Line(w) => WireItem::Line(w.to_data()),
            Self::Circle(w) => WireItem::Circle(w.to_data()),
            Self::Textbox(w) => WireItem::Text(w.to_data()),
            Self::Symbolbox(w) => WireItem::Text(w.to_data()),
            Self::QrCode(w) => WireItem::QrCode(w.to_data()),
            Self::ButtonLabels(w) => WireItem::ButtonLabels(w.to_data()),
        }
    }
}

impl Serialize for Widget {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_wire().serialize(serializer)
    }
}

macro_rules! widget_from {
    ($($variant:ident),+) => {
        $(
            impl From<$variant> for Widget {
                fn from(widget: $variant) -> Self {
                    Self::$variant(widget)
                }
            }
        )+
    };
}

widget_from!(Rectangle, Line, Circle, Textbox, Symbolbox, QrCode, ButtonLabels);
