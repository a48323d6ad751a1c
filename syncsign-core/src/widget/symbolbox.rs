//! Icon boxes: a `TEXT` item whose glyphs come from an icon font.

use crate::primitives::check_text_alignment;
use crate::widget::TextData;
use crate::{Block, Color, LayoutResult, SymbolSet};

/// A row of icons drawn from one of the symbol fonts.
///
/// Every symbol is resolved against its set when the box is built; the wire
/// fragment is a `TEXT` item whose text is the icons' code points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Symbolbox {
    block: Block,
    set: SymbolSet,
    symbols: Vec<String>,
    color: Color,
}

impl Symbolbox {
    /// Create a black symbol box.
    ///
    /// # Errors
    ///
    /// Returns [`crate::LayoutError::Misaligned`] for a bad block and
    /// [`crate::LayoutError::UnknownSymbol`] for a name missing from `set`.
    pub fn new<I, S>(block: Block, set: SymbolSet, symbols: I) -> LayoutResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        check_text_alignment("Symbolbox", block)?;
        let symbols: Vec<String> = symbols.into_iter().map(Into::into).collect();
        for symbol in &symbols {
            set.glyph(symbol)?;
        }
        Ok(Self {
            block,
            set,
            symbols,
            color: Color::Black,
        })
    }

    /// Set the icon colour.
    #[must_use]
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Recolour the icons after construction.
    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    /// Position and size.
    #[must_use]
    pub fn block(&self) -> Block {
        self.block
    }

    /// Symbol set.
    #[must_use]
    pub fn set(&self) -> SymbolSet {
        self.set
    }

    /// Requested symbol names in drawing order.
    #[must_use]
    pub fn symbols(&self) -> &[String] {
        &self.symbols
    }

    /// Icon colour.
    #[must_use]
    pub fn color(&self) -> Color {
        self.color
    }

    /// The icons as a string of code points in the symbol font.
    #[must_use]
    pub fn glyphs(&self) -> String {
        // names were checked in `new`
        self.symbols
            .iter()
            .filter_map(|symbol| self.set.glyph(symbol).ok())
            .collect()
    }

    pub(crate) fn to_data(&self) -> TextData {
        TextData {
            block: self.block,
            text_color: self.color,
            text_align: None,
            font: self.set.font_name().to_string(),
            line_space: None,
            text: self.glyphs(),
        }
    }
}
