//! Geometry and style primitives shared by every widget.
//!
//! The panels pack eight horizontal pixels per byte, so anything drawn as a
//! box must start and end on a byte boundary. The helpers here enforce that
//! rule and parse the closed colour/pattern/alignment vocabularies.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{LayoutError, LayoutResult};

/// Pixel packing width of the display controllers.
pub const PIXEL_ALIGNMENT: i64 = 8;

/// An integer pixel coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Point {
    /// Horizontal position.
    pub x: i32,
    /// Vertical position.
    pub y: i32,
}

impl Point {
    /// Create a point.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// A positioned rectangle, serialized as `{x, y, w, h}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Block {
    /// Left edge.
    pub x: i32,
    /// Top edge.
    pub y: i32,
    /// Width in pixels.
    #[serde(rename = "w")]
    pub width: u32,
    /// Height in pixels.
    #[serde(rename = "h")]
    pub height: u32,
}

impl Block {
    /// Create a block. No alignment is checked here; widgets decide which
    /// rule applies to them.
    #[must_use]
    pub const fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    fn misaligned(self, widget: &'static str, rule: &'static str) -> LayoutError {
        LayoutError::Misaligned {
            widget,
            rule,
            x: self.x,
            y: self.y,
            width: self.width,
            height: self.height,
        }
    }
}

fn aligned(value: i64) -> bool {
    value.rem_euclid(PIXEL_ALIGNMENT) == 0
}

/// Validate a block drawn as a filled or stroked shape.
///
/// # Errors
///
/// Returns [`LayoutError::Misaligned`] unless `x` and `width` are both
/// multiples of 8.
pub fn check_shape_alignment(widget: &'static str, block: Block) -> LayoutResult<()> {
    if !aligned(i64::from(block.x)) || !aligned(i64::from(block.width)) {
        return Err(block.misaligned(widget, "x and width must both be a multiple of 8"));
    }
    Ok(())
}

/// Validate a block that holds glyphs (text or symbols).
///
/// Text blocks obey the shape rule and additionally need either `y` or
/// `height` on a multiple of 8.
///
/// # Errors
///
/// Returns [`LayoutError::Misaligned`] naming the first rule that failed.
pub fn check_text_alignment(widget: &'static str, block: Block) -> LayoutResult<()> {
    if !aligned(i64::from(block.y)) && !aligned(i64::from(block.height)) {
        return Err(block.misaligned(widget, "either y or height must be a multiple of 8"));
    }
    if !aligned(i64::from(block.width)) {
        return Err(block.misaligned(widget, "width must be a multiple of 8"));
    }
    if !aligned(i64::from(block.x)) {
        return Err(block.misaligned(widget, "x must be a multiple of 8"));
    }
    Ok(())
}

/// Render a list of names the way error messages enumerate legal values.
pub(crate) fn join_names<T: fmt::Display>(items: &[T]) -> String {
    items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Declares a closed, case-insensitive vocabulary that serializes uppercase
/// and parses back through [`FromStr`](std::str::FromStr) so serde input is checked the same
/// way as programmatic input.
macro_rules! vocabulary {
    (
        $(#[$meta:meta])*
        $name:ident, $error:ident {
            $($(#[$vmeta:meta])* $variant:ident => $text:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, ::serde::Serialize, ::serde::Deserialize,
        )]
        #[serde(try_from = "String", into = "String")]
        pub enum $name {
            $($(#[$vmeta])* $variant),+
        }

        impl $name {
            /// Every accepted value, in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// Lowercase name as accepted by [`FromStr`](::std::str::FromStr).
            #[must_use]
            pub const fn name(self) -> &'static str {
                match self {
                    $(Self::$variant => $text),+
                }
            }

            /// Uppercase form used on the wire.
            #[must_use]
            pub fn wire_name(self) -> String {
                self.name().to_ascii_uppercase()
            }

            /// Comma separated list of accepted names.
            #[must_use]
            pub fn allowed() -> String {
                $crate::primitives::join_names(
                    &Self::ALL.iter().map(|v| v.name()).collect::<Vec<_>>(),
                )
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::LayoutError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let lowered = s.trim().to_ascii_lowercase();
                Self::ALL
                    .iter()
                    .copied()
                    .find(|v| v.name() == lowered)
                    .ok_or_else(|| $crate::LayoutError::$error {
                        value: s.to_string(),
                        allowed: Self::allowed(),
                    })
            }
        }

        impl TryFrom<String> for $name {
            type Error = $crate::LayoutError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                value.parse()
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.wire_name()
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.name())
            }
        }
    };
}

pub(crate) use vocabulary;

vocabulary! {
    /// Ink colours. Red only shows on colour-capable panels; see
    /// [`crate::Node::has_colour`].
    Color, InvalidColor {
        /// Black ink.
        Black => "black",
        /// Paper white.
        White => "white",
        /// Red ink.
        Red => "red",
    }
}

vocabulary! {
    /// Fill and stroke patterns understood by the renderer.
    Pattern, InvalidPattern {
        /// Continuous.
        Solid => "solid",
        /// Alternating pixels.
        Interleave => "interleave",
        /// Short dashes.
        DashTiny => "dash_tiny",
        /// Medium dashes.
        DashMedium => "dash_medium",
        /// Long dashes.
        DashWide => "dash_wide",
        /// Not drawn.
        None => "none",
    }
}

vocabulary! {
    /// Horizontal text alignment inside a text block.
    TextAlign, InvalidTextAlign {
        /// Flush left.
        Left => "left",
        /// Centred.
        Center => "center",
        /// Flush right.
        Right => "right",
    }
}
