//! Font catalogue of the remote renderer.
//!
//! Each font only exists at the point sizes baked into the renderer, so a
//! text block names a `(font, size)` pair that must appear in [`FONTS`].

use serde::Serialize;

use crate::primitives::join_names;
use crate::{LayoutError, LayoutResult};

/// One renderer font and the sizes it ships in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FontFace {
    /// Lowercase identifier, e.g. `roboto_slab`.
    pub name: &'static str,
    /// Supported point sizes, ascending.
    pub sizes: &'static [u16],
    /// Extra suffix the renderer expects after the size.
    pub wire_suffix: Option<&'static str>,
}

impl FontFace {
    const fn new(name: &'static str, sizes: &'static [u16]) -> Self {
        Self {
            name,
            sizes,
            wire_suffix: None,
        }
    }

    /// Check whether this face ships in `size`.
    #[must_use]
    pub fn supports(&self, size: u16) -> bool {
        self.sizes.contains(&size)
    }
}

/// Every font the renderer knows.
pub const FONTS: &[FontFace] = &[
    FontFace::new("ddin", &[16, 24, 32, 48, 64, 128]),
    FontFace::new("ddin_condensed", &[16, 24, 32, 48, 64]),
    FontFace::new("charriot", &[10]),
    FontFace::new("aprilsans", &[10, 16, 24]),
    FontFace::new("roboto_condensed", &[24, 48]),
    FontFace::new("roboto_slab", &[24, 48]),
    // Only the bold cut is installed, and it is addressed as `_B`.
    FontFace {
        name: "yanone_kaffeesatz",
        sizes: &[24, 44],
        wire_suffix: Some("_B"),
    },
    FontFace::new("kaushan_script", &[20, 32]),
    FontFace::new("sriracha", &[24]),
    FontFace::new("dorsa", &[32]),
    FontFace::new("londrina_outline", &[36]),
    FontFace::new("bungee_shade", &[36]),
    FontFace::new("noto_serif", &[16]),
    FontFace::new("noto_sans", &[24, 40]),
];

/// Look up a font face by name (case-insensitive).
#[must_use]
pub fn find_face(name: &str) -> Option<&'static FontFace> {
    let lowered = name.trim().to_ascii_lowercase();
    FONTS.iter().find(|face| face.name == lowered)
}

/// A validated font/size pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Font {
    face: &'static FontFace,
    size: u16,
}

impl Font {
    /// Resolve `name` at `size` against [`FONTS`].
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::UnknownFont`] listing every font when `name` is
    /// not in the table, or [`LayoutError::UnsupportedFontSize`] listing the
    /// face's sizes when `size` is not one of them.
    pub fn new(name: &str, size: u16) -> LayoutResult<Self> {
        let face = find_face(name).ok_or_else(|| LayoutError::UnknownFont {
            font: name.to_string(),
            available: join_names(&FONTS.iter().map(|f| f.name).collect::<Vec<_>>()),
        })?;

        if !face.supports(size) {
            return Err(LayoutError::UnsupportedFontSize {
                font: face.name,
                size,
                available: join_names(face.sizes),
            });
        }

        Ok(Self { face, size })
    }

    /// The font face.
    #[must_use]
    pub fn face(&self) -> &'static FontFace {
        self.face
    }

    /// Point size.
    #[must_use]
    pub fn size(&self) -> u16 {
        self.size
    }

    /// Renderer identifier, e.g. `ROBOTO_SLAB_24`.
    #[must_use]
    pub fn wire_name(&self) -> String {
        format!(
            "{}_{}{}",
            self.face.name.to_ascii_uppercase(),
            self.size,
            self.face.wire_suffix.unwrap_or_default()
        )
    }
}

impl Serialize for Font {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.wire_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roboto_slab_sizes() {
        assert!(Font::new("roboto_slab", 24).is_ok());
        assert!(Font::new("roboto_slab", 48).is_ok());

        let err = Font::new("roboto_slab", 99).expect_err("99pt is not shipped");
        match err {
            LayoutError::UnsupportedFontSize {
                font,
                size,
                available,
            } => {
                assert_eq!(font, "roboto_slab");
                assert_eq!(size, 99);
                assert_eq!(available, "24, 48");
            }
            other => panic!("Expected UnsupportedFontSize, got {other:?}"),
        }
    }

    #[test]
    fn test_unknown_font_lists_catalogue() {
        let err = Font::new("doesnotexist", 24).expect_err("unknown font");
        let msg = err.to_string();
        assert!(msg.contains("doesnotexist"));
        assert!(msg.contains("roboto_slab"));
        assert!(msg.contains("noto_sans"));
    }

    #[test]
    fn test_wire_names() {
        let font = Font::new("ROBOTO_SLAB", 24).expect("case-insensitive");
        assert_eq!(font.wire_name(), "ROBOTO_SLAB_24");

        let yanone = Font::new("yanone_kaffeesatz", 44).expect("yanone 44");
        assert_eq!(yanone.wire_name(), "YANONE_KAFFEESATZ_44_B");
    }

    #[test]
    fn test_table_is_sorted_and_unique() {
        for face in FONTS {
            assert!(!face.sizes.is_empty(), "{} has no sizes", face.name);
            assert!(face.sizes.windows(2).all(|w| w[0] < w[1]));
            assert_eq!(FONTS.iter().filter(|f| f.name == face.name).count(), 1);
        }
    }
}
