//! Circles by centre and radius (`CIRCLE`).

use serde::{Deserialize, Serialize};

use crate::{Color, Pattern, Point};

/// A circle around a centre point. Circles are not byte-aligned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Circle {
    center: Point,
    radius: u32,
    stroke_color: Color,
    fill_color: Color,
    fill_pattern: Pattern,
    stroke_pattern: Pattern,
    pen_width: u16,
}

impl Circle {
    /// Create a one pixel black outline centred on `(x, y)`.
    #[must_use]
    pub fn new(x: i32, y: i32, radius: u32) -> Self {
        Self {
            center: Point::new(x, y),
            radius,
            stroke_color: Color::Black,
            fill_color: Color::White,
            fill_pattern: Pattern::None,
            stroke_pattern: Pattern::Solid,
            pen_width: 1,
        }
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

    /// Centre point.
    #[must_use]
    pub fn center(&self) -> Point {
        self.center
    }

    /// Radius in pixels.
    #[must_use]
    pub fn radius(&self) -> u32 {
        self.radius
    }

    pub(crate) fn to_data(&self) -> CircleData {
        CircleData {
            center: self.center,
            radius: self.radius,
            fill_color: self.fill_color,
            fill_pattern: self.fill_pattern,
            stroke_color: self.stroke_color,
            stroke_pattern: self.stroke_pattern,
            stroke_thickness: self.pen_width,
        }
    }
}

/// Wire payload of a `CIRCLE` item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CircleData {
    /// Centre point.
    pub center: Point,
    /// Radius.
    pub radius: u32,
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
