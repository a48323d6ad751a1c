//! Declarative, string-typed template descriptions.
//!
//! A blueprint is what a user writes in a layout file. Converting it into a
//! [`Template`] runs the same widget constructors as the typed API, so bad
//! colours, fonts or geometry are rejected with the same errors.

use serde::{Deserialize, Serialize};

use crate::widget::{ButtonLabels, Circle, Line, QrCode, Rectangle, Symbolbox, Textbox, Widget};
use crate::{Block, Color, LayoutResult, Template, DEFAULT_POLL_RATE_MS};

fn black() -> String {
    "black".to_string()
}

fn white() -> String {
    "white".to_string()
}

fn solid() -> String {
    "solid".to_string()
}

fn no_pattern() -> String {
    "none".to_string()
}

fn left() -> String {
    "left".to_string()
}

fn medium() -> String {
    "medium".to_string()
}

const fn one() -> u16 {
    1
}

const fn line_spacing() -> u8 {
    crate::widget::DEFAULT_LINE_SPACING
}

const fn qr_scale() -> u8 {
    4
}

const fn qr_version() -> u8 {
    2
}

const fn poll_rate() -> u32 {
    DEFAULT_POLL_RATE_MS
}

/// A template as written in a layout file.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TemplateBlueprint {
    /// Page colour name.
    #[serde(default = "white")]
    pub background: String,
    /// Button-zone flag for the background.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub button_zone: Option<bool>,
    /// Poll interval in milliseconds.
    #[serde(default = "poll_rate")]
    pub poll_rate: u32,
    /// Widgets in drawing order.
    #[serde(default)]
    pub widgets: Vec<WidgetBlueprint>,
}

/// One widget as written in a layout file.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case", deny_unknown_fields)]
#[allow(missing_docs)]
pub enum WidgetBlueprint {
    /// See [`Rectangle`].
    Rectangle {
        x: i32,
        y: i32,
        width: u32,
        height: u32,
        #[serde(default = "black")]
        stroke_color: String,
        #[serde(default = "white")]
        fill_color: String,
        #[serde(default = "no_pattern")]
        fill_pattern: String,
        #[serde(default = "solid")]
        stroke_pattern: String,
        #[serde(default = "one")]
        pen_width: u16,
    },
    /// See [`Line`].
    Line {
        x0: i32,
        y0: i32,
        x1: i32,
        y1: i32,
        #[serde(default = "black")]
        color: String,
        #[serde(default = "white")]
        background_color: String,
        #[serde(default = "solid")]
        pattern: String,
    },
    /// See [`Circle`].
    Circle {
        x: i32,
        y: i32,
        radius: u32,
        #[serde(default = "black")]
        stroke_color: String,
        #[serde(default = "white")]
        fill_color: String,
        #[serde(default = "no_pattern")]
        fill_pattern: String,
        #[serde(default = "solid")]
        stroke_pattern: String,
        #[serde(default = "one")]
        pen_width: u16,
    },
    /// See [`Textbox`].
    Textbox {
        x: i32,
        y: i32,
        width: u32,
        height: u32,
        font: String,
        size: u16,
        text: String,
        #[serde(default = "black")]
        color: String,
        #[serde(default = "left")]
        align: String,
        #[serde(default = "line_spacing")]
        line_spacing: u8,
    },
    /// See [`Symbolbox`].
    Symbolbox {
        x: i32,
        y: i32,
        width: u32,
        height: u32,
        set: String,
        symbols: Vec<String>,
        #[serde(default = "black")]
        color: String,
    },
    /// See [`QrCode`].
    Qrcode {
        x: i32,
        y: i32,
        text: String,
        #[serde(default = "qr_scale")]
        scale: u8,
        #[serde(default = "qr_version")]
        version: u8,
        #[serde(default = "medium")]
        ecc_level: String,
    },
    /// See [`ButtonLabels`].
    ButtonLabels {
        #[serde(default)]
        labels: Vec<String>,
        #[serde(default)]
        reversed: Vec<bool>,
    },
}

impl WidgetBlueprint {
    /// Run the widget's constructor.
    ///
    /// # Errors
    ///
    /// Returns the constructor's [`crate::LayoutError`].
    pub fn build(&self) -> LayoutResult<Widget> {
        let widget: Widget = match self {
            Self::Rectangle {
                x,
                y,
                width,
                height,
                stroke_color,
                fill_color,
                fill_pattern,
                stroke_pattern,
                pen_width,
            } => Rectangle::new(Block::new(*x, *y, *width, *height))?
                .with_stroke_color(stroke_color.parse()?)
                .with_fill_color(fill_color.parse()?)
                .with_fill_pattern(fill_pattern.parse()?)
                .with_stroke_pattern(stroke_pattern.parse()?)
                .with_pen_width(*pen_width)
                .into(),
            Self::Line {
                x0,
                y0,
                x1,
                y1,
                color,
                background_color,
                pattern,
            } => Line::new(*x0, *y0, *x1, *y1)
                .with_line_color(color.parse()?)
                .with_background_color(background_color.parse()?)
                .with_pattern(pattern.parse()?)
                .into(),
            Self::Circle {
                x,
                y,
                radius,
                stroke_color,
                fill_color,
                fill_pattern,
                stroke_pattern,
                pen_width,
            } => Circle::new(*x, *y, *radius)
                .with_stroke_color(stroke_color.parse()?)
                .with_fill_color(fill_color.parse()?)
                .with_fill_pattern(fill_pattern.parse()?)
                .with_stroke_pattern(stroke_pattern.parse()?)
                .with_pen_width(*pen_width)
                .into(),
            Self::Textbox {
                x,
                y,
                width,
                height,
                font,
                size,
                text,
                color,
                align,
                line_spacing,
            } => Textbox::new(Block::new(*x, *y, *width, *height), font, *size, text.as_str())?
                .with_color(color.parse()?)
                .with_align(align.parse()?)
                .with_line_spacing(*line_spacing)
                .into(),
            Self::Symbolbox {
                x,
                y,
                width,
                height,
                set,
                symbols,
                color,
            } => Symbolbox::new(
                Block::new(*x, *y, *width, *height),
                set.parse()?,
                symbols.iter().map(String::as_str),
            )?
            .with_color(color.parse()?)
            .into(),
            Self::Qrcode {
                x,
                y,
                text,
                scale,
                version,
                ecc_level,
            } => QrCode::new(*x, *y, text.as_str())
                .with_scale(*scale)?
                .with_version(*version)?
                .with_ecc_level(ecc_level.parse()?)
                .into(),
            Self::ButtonLabels { labels, reversed } => {
                ButtonLabels::new(labels.iter().map(String::as_str))?
                    .with_reversed(reversed)?
                    .into()
            }
        };
        Ok(widget)
    }
}

impl TemplateBlueprint {
    /// Parse a blueprint from JSON.
    ///
    /// # Errors
    ///
    /// Returns [`crate::LayoutError::Serialization`] for malformed input.
    pub fn from_json(json: &str) -> LayoutResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Build every widget and assemble the template.
    ///
    /// # Errors
    ///
    /// Returns the first widget's [`crate::LayoutError`], or an invalid
    /// background colour.
    pub fn build(&self) -> LayoutResult<Template> {
        let background: Color = self.background.parse()?;
        let mut template = Template::new()
            .with_background(background)
            .with_poll_rate(self.poll_rate);
        if let Some(enabled) = self.button_zone {
            template = template.with_button_zone(enabled);
        }
        for widget in &self.widgets {
            template.append(widget.build()?);
        }
        Ok(template)
    }
}

impl TryFrom<&TemplateBlueprint> for Template {
    type Error = crate::LayoutError;

    fn try_from(blueprint: &TemplateBlueprint) -> Result<Self, Self::Error> {
        blueprint.build()
    }
}
