//! Axis-aligned rectangles (`RECTANGLE`).
//!
//! Position and size must sit on the 8-pixel grid.

use serde::{Deserialize, Serialize};

use crate::primitives::check_shape_alignment;
use crate::{Block, Color, LayoutResult, Pattern};

/// A box with an outline and an optional fill.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rectangle {
    block: Block,
    stroke_color: Color,
    fill_color: Color,
    fill_pattern: Pattern,
    stroke_pattern: Pattern,
    pen_width: u16,
}

impl Rectangle {
    /// Create a one pixel black outline with no fill.
    ///
    /// # Errors
    ///
    /// Returns [`crate::LayoutError::Misaligned`] unless `x` and `width` are
    /// multiples of 8.
    pub fn new(block: Block) -> LayoutResult<Self> {
        check_shape_alignment("Rectangle", block)?;
        Ok(Self {
            block,
            stroke_color: Color::Black,
            fill_color: Color::White,
            fill_pattern: Pattern::None,
            stroke_pattern: Pattern::Solid,
            pen_width: 1,
        })
    }

    /// Set the outline colour.
    #[must_use]
    pub fn with_stroke_color(mut self, color: Color) -> Self {
        self.stroke_color = color;
        self
    }

    /// Set the fill colour.
    #[must_use]
    pub fn with_fill_color(mut self, color: Color) -> Self {
        self.fill_color = color;
        self
    }

    /// Set the fill pattern.
    #[must_use]
    pub fn with_fill_pattern(mut self, pattern: Pattern) -> Self {
        self.fill_pattern = pattern;
        self
    }

    /// Set the outline pattern.
    #[must_use]
    pub fn with_stroke_pattern(mut self, pattern: Pattern) -> Self {
        self.stroke_pattern = pattern;
        self
    }

    /// Set the outline thickness in pixels.
    #[must_use]
    pub fn with_pen_width(mut self, pen_width: u16) -> Self {
        self.pen_width = pen_width;
        self
    }

    /// Recolour the outline after construction.
    pub fn set_stroke_color(&mut self, color: Color) {
        self.stroke_color = color;
    }

    /// Recolour the fill after construction.
    pub fn set_fill_color(&mut self, color: Color) {
        self.fill_color = color;
    }

    /// Position and size.
    #[must_use]
    pub fn block(&self) -> Block {
        self.block
    }

    /// Outline colour.
    #[must_use]
    pub fn stroke_color(&self) -> Color {
        self.stroke_color
    }

    /// Fill colour.
    #[must_use]
    pub fn fill_color(&self) -> Color {
        self.fill_color
    }

    /// Outline thickness.
    #[must_use]
    pub fn pen_width(&self) -> u16 {
        self.pen_width
    }

    pub(crate) fn to_data(&self) -> RectangleData {
        RectangleData {
            block: self.block,
            fill_color: self.fill_color,
            fill_pattern: self.fill_pattern,
            stroke_color: self.stroke_color,
            stroke_pattern: self.stroke_pattern,
            stroke_thickness: self.pen_width,
        }
    }
}

/// Wire payload of a `RECTANGLE` item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RectangleData {
    /// Position and size.
    pub block: Block,
    /// Fill colour.
    pub fill_color: Color,
    /// Fill pattern.
    pub fill_pattern: Pattern,
    /// Outline colour.
    pub stroke_color: Color,
    /// Outline pattern.
    pub stroke_pattern: Pattern,
    /// Outline thickness.
    pub stroke_thickness: u16,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::LayoutError;
    use serde_json::json;

    #[test]
    fn test_rectangle_rejects_unaligned_x_and_width() {
        assert!(matches!(
            Rectangle::new(Block::new(3, 8, 208, 60)),
            Err(LayoutError::Misaligned { widget: "Rectangle", .. })
        ));
        assert!(Rectangle::new(Block::new(8, 8, 207, 60)).is_err());
        // y and height are free
        assert!(Rectangle::new(Block::new(8, 3, 208, 61)).is_ok());
    }

    #[test]
    fn test_rectangle_wire_fields() {
        let rect = Rectangle::new(Block::new(8, 8, 208, 60))
            .expect("aligned")
            .with_pen_width(2)
            .with_fill_pattern(Pattern::Interleave);
        let value = serde_json::to_value(rect.to_data()).expect("serialize");
        assert_eq!(
            value,
            json!({
                "block": {"x": 8, "y": 8, "w": 208, "h": 60},
                "fillColor": "WHITE",
                "fillPattern": "INTERLEAVE",
                "strokeColor": "BLACK",
                "strokePattern": "SOLID",
                "strokeThickness": 2
            })
        );
    }

    #[test]
    fn test_rectangle_colour_can_change_later() {
        let mut rect = Rectangle::new(Block::new(0, 0, 8, 8)).expect("aligned");
        rect.set_stroke_color(Color::Red);
        assert_eq!(rect.stroke_color(), Color::Red);
        assert_eq!(rect.to_data().stroke_color, Color::Red);
    }
}
