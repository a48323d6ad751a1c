//! Straight lines between two points (`LINE`).

use serde::{Deserialize, Serialize};

use crate::{Color, Pattern, Point};

/// A straight line between two free-form endpoints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    start: Point,
    end: Point,
    line_color: Color,
    background_color: Color,
    pattern: Pattern,
}

impl Line {
    /// Create a solid black line from `(x0, y0)` to `(x1, y1)`.
    #[must_use]
    pub fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self {
            start: Point::new(x0, y0),
            end: Point::new(x1, y1),
            line_color: Color::Black,
            background_color: Color::White,
            pattern: Pattern::Solid,
        }
    }

    /// Set the line colour.
    #[must_use]
    pub fn with_line_color(mut self, color: Color) -> Self {
        self.line_color = color;
        self
    }

    /// Set the colour drawn between dashes.
    #[must_use]
    pub fn with_background_color(mut self, color: Color) -> Self {
        self.background_color = color;
        self
    }

    /// Set the dash pattern.
    #[must_use]
    pub fn with_pattern(mut self, pattern: Pattern) -> Self {
        self.pattern = pattern;
        self
    }

    /// Recolour the line after construction.
    pub fn set_line_color(&mut self, color: Color) {
        self.line_color = color;
    }

    /// Start point.
    #[must_use]
    pub fn start(&self) -> Point {
        self.start
    }

    /// End point.
    #[must_use]
    pub fn end(&self) -> Point {
        self.end
    }

    /// Line colour.
    #[must_use]
    pub fn line_color(&self) -> Color {
        self.line_color
    }

    pub(crate) fn to_data(&self) -> LineData {
        LineData {
            block: LineEnds {
                x0: self.start.x,
                y0: self.start.y,
                x1: self.end.x,
                y1: self.end.y,
            },
            background_color: self.background_color,
            line_color: self.line_color,
            line_pattern: self.pattern,
        }
    }
}

/// Endpoints as sent on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineEnds {
    /// Start x.
    pub x0: i32,
    /// Start y.
    pub y0: i32,
    /// End x.
    pub x1: i32,
    /// End y.
    pub y1: i32,
}

/// Wire payload of a `LINE` item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineData {
    /// Endpoints.
    pub block: LineEnds,
    /// Colour between dashes.
    pub background_color: Color,
    /// Line colour.
    pub line_color: Color,
    /// Dash pattern.
    pub line_pattern: Pattern,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_line_has_no_alignment_rule() {
        let line = Line::new(71, 3, 95, 91).with_pattern(Pattern::DashMedium);
        let value = serde_json::to_value(line.to_data()).expect("serialize");
        assert_eq!(
            value,
            json!({
                "block": {"x0": 71, "y0": 3, "x1": 95, "y1": 91},
                "backgroundColor": "WHITE",
                "lineColor": "BLACK",
                "linePattern": "DASH_MEDIUM"
            })
        );
    }
}
