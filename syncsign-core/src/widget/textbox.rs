//! Text boxes (`TEXT`) drawn in one of the device fonts.

use serde::{Deserialize, Serialize};

use crate::fonts::Font;
use crate::primitives::check_text_alignment;
use crate::{Block, Color, LayoutResult, TextAlign};

/// Default gap between lines, in pixels.
pub const DEFAULT_LINE_SPACING: u8 = 2;

/// A block of text in one of the renderer's fonts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Textbox {
    block: Block,
    font: Font,
    text: String,
    color: Color,
    align: TextAlign,
    line_spacing: u8,
}

impl Textbox {
    /// Create left-aligned black text.
    ///
    /// The font is checked before the geometry so a typo in the font name is
    /// reported even when the block is also wrong.
    ///
    /// # Errors
    ///
    /// Returns [`crate::LayoutError::UnknownFont`] or
    /// [`crate::LayoutError::UnsupportedFontSize`] for a bad font, and
    /// [`crate::LayoutError::Misaligned`] for a bad block.
    pub fn new(block: Block, font: &str, size: u16, text: impl Into<String>) -> LayoutResult<Self> {
        let font = Font::new(font, size)?;
        check_text_alignment("Textbox", block)?;
        Ok(Self {
            block,
            font,
            text: text.into(),
            color: Color::Black,
            align: TextAlign::Left,
            line_spacing: DEFAULT_LINE_SPACING,
        })
    }

    /// Set the text colour.
    #[must_use]
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Set the horizontal alignment.
    #[must_use]
    pub fn with_align(mut self, align: TextAlign) -> Self {
        self.align = align;
        self
    }

    /// Set the gap between lines.
    #[must_use]
    pub fn with_line_spacing(mut self, line_spacing: u8) -> Self {
        self.line_spacing = line_spacing;
        self
    }

    /// Recolour the text after construction.
    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    /// Position and size.
    #[must_use]
    pub fn block(&self) -> Block {
        self.block
    }

    /// Validated font.
    #[must_use]
    pub fn font(&self) -> Font {
        self.font
    }

    /// Text content.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Text colour.
    #[must_use]
    pub fn color(&self) -> Color {
        self.color
    }

    /// Horizontal alignment.
    #[must_use]
    pub fn align(&self) -> TextAlign {
        self.align
    }

    pub(crate) fn to_data(&self) -> TextData {
        TextData {
            block: self.block,
            text_color: self.color,
            text_align: Some(self.align),
            font: self.font.wire_name(),
            line_space: Some(self.line_spacing),
            text: self.text.clone(),
        }
    }
}

/// Wire payload of a `TEXT` item.
///
/// Symbol boxes share this payload without alignment or line spacing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextData {
    /// Position and size.
    pub block: Block,
    /// Glyph colour.
    pub text_color: Color,
    /// Horizontal alignment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_align: Option<TextAlign>,
    /// Renderer font identifier.
    pub font: String,
    /// Gap between lines.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_space: Option<u8>,
    /// Characters to draw.
    pub text: String,
}
