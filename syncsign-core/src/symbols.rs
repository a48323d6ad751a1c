//! Icon tables for the renderer's symbol fonts.
//!
//! Icons are drawn as text: every symbol is a private-use code point in one
//! of three icon fonts, and a symbol box sends the concatenated characters
//! with the matching font name.

use crate::primitives::vocabulary;
use crate::LayoutError;

vocabulary! {
    /// The icon fonts available to symbol boxes.
    SymbolSet, InvalidSymbolSet {
        /// Weather Icons.
        Weather => "weather",
        /// Font Awesome solid.
        Solid => "solid",
        /// Font Awesome brands.
        Brands => "brands",
    }
}

impl SymbolSet {
    /// Font identifier sent to the renderer.
    #[must_use]
    pub const fn font_name(self) -> &'static str {
        match self {
            Self::Weather => "ICON_WEATHER",
            Self::Solid => "ICON_FA_SOLID",
            Self::Brands => "ICON_FA_BRANDS",
        }
    }

    /// `(name, code point)` pairs of this set.
    #[must_use]
    pub const fn table(self) -> &'static [(&'static str, u32)] {
        match self {
            Self::Weather => WEATHER,
            Self::Solid => SOLID,
            Self::Brands => BRANDS,
        }
    }

    /// Find the glyph for `symbol` in this set.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::UnknownSymbol`] if the set has no such symbol.
    pub fn glyph(self, symbol: &str) -> Result<char, LayoutError> {
        self.table()
            .iter()
            .find(|(name, _)| *name == symbol)
            .and_then(|&(_, code)| char::from_u32(code))
            .ok_or_else(|| LayoutError::UnknownSymbol {
                symbol: symbol.to_string(),
                set: self.name(),
            })
    }

    /// Names of every symbol in this set.
    #[must_use]
    pub fn symbol_names(self) -> impl Iterator<Item = &'static str> {
        self.table().iter().map(|(name, _)| *name)
    }
}

const WEATHER: &[(&str, u32)] = &[
    ("day_cloudy", 0xf002),
    ("day_cloudy_gusts", 0xf000),
    ("day_cloudy_windy", 0xf001),
    ("day_fog", 0xf003),
    ("day_hail", 0xf004),
    ("day_haze", 0xf0b6),
    ("day_lightning", 0xf005),
    ("day_rain", 0xf008),
    ("day_rain_mix", 0xf006),
    ("day_rain_wind", 0xf007),
    ("day_showers", 0xf009),
    ("day_sleet", 0xf0b2),
    ("day_sleet_storm", 0xf068),
    ("day_snow", 0xf00a),
    ("day_snow_thunderstorm", 0xf06b),
    ("day_snow_wind", 0xf065),
    ("day_sprinkle", 0xf00b),
    ("day_storm_showers", 0xf00e),
    ("day_sunny", 0xf00d),
    ("day_sunny_overcast", 0xf00c),
    ("day_thunderstorm", 0xf010),
    ("day_windy", 0xf085),
    ("night_clear", 0xf02e),
    ("night_cloudy", 0xf031),
    ("night_fog", 0xf04a),
    ("night_rain", 0xf036),
    ("night_snow", 0xf038),
    ("night_thunderstorm", 0xf03b),
    ("cloud", 0xf041),
    ("cloudy", 0xf013),
    ("fog", 0xf014),
    ("rain", 0xf019),
    ("snow", 0xf01b),
    ("thunderstorm", 0xf01e),
    ("strong_wind", 0xf050),
    ("sunrise", 0xf051),
    ("sunset", 0xf052),
    ("thermometer", 0xf055),
    ("hot", 0xf072),
    ("snowflake_cold", 0xf076),
    ("raindrop", 0xf078),
    ("barometer", 0xf079),
    ("humidity", 0xf07a),
    ("na", 0xf07b),
    ("umbrella", 0xf084),
];

const SOLID: &[(&str, u32)] = &[
    ("music", 0xf001),
    ("search", 0xf002),
    ("heart", 0xf004),
    ("star", 0xf005),
    ("user", 0xf007),
    ("check", 0xf00c),
    ("times", 0xf00d),
    ("power_off", 0xf011),
    ("cog", 0xf013),
    ("home", 0xf015),
    ("clock", 0xf017),
    ("lock", 0xf023),
    ("map_marker", 0xf041),
    ("tint", 0xf043),
    ("info_circle", 0xf05a),
    ("exclamation_triangle", 0xf071),
    ("phone", 0xf095),
    ("unlock", 0xf09c),
    ("cloud", 0xf0c2),
    ("envelope", 0xf0e0),
    ("bolt", 0xf0e7),
    ("umbrella", 0xf0e9),
    ("lightbulb", 0xf0eb),
    ("bell", 0xf0f3),
    ("coffee", 0xf0f4),
    ("calendar", 0xf133),
    ("sun", 0xf185),
    ("moon", 0xf186),
    ("car", 0xf1b9),
    ("plug", 0xf1e6),
    ("wifi", 0xf1eb),
    ("trash", 0xf1f8),
    ("bus", 0xf207),
    ("venus_double", 0xf226),
    ("battery_full", 0xf240),
    ("battery_half", 0xf242),
    ("battery_empty", 0xf244),
    ("thermometer_half", 0xf2c9),
    ("snowflake", 0xf2dc),
    ("wind", 0xf72e),
];

const BRANDS: &[(&str, u32)] = &[
    ("twitter", 0xf099),
    ("facebook", 0xf09a),
    ("github", 0xf09b),
    ("stack_overflow", 0xf16c),
    ("youtube", 0xf167),
    ("instagram", 0xf16d),
    ("apple", 0xf179),
    ("windows", 0xf17a),
    ("android", 0xf17b),
    ("linux", 0xf17c),
    ("slack", 0xf198),
    ("google", 0xf1a0),
    ("reddit", 0xf1a1),
    ("spotify", 0xf1bc),
    ("paypal", 0xf1ed),
    ("chrome", 0xf268),
    ("firefox", 0xf269),
    ("amazon", 0xf270),
    ("bluetooth", 0xf293),
    ("gitlab", 0xf296),
    ("bitcoin", 0xf379),
    ("docker", 0xf395),
    ("node_js", 0xf3d3),
    ("python", 0xf3e2),
    ("ethereum", 0xf42e),
    ("raspberry_pi", 0xf7bb),
    ("ubuntu", 0xf7df),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glyph_lookup() {
        assert_eq!(SymbolSet::Weather.glyph("day_sunny").expect("sunny"), '\u{f00d}');
        assert_eq!(SymbolSet::Brands.glyph("github").expect("github"), '\u{f09b}');
        assert_eq!(SymbolSet::Solid.glyph("wifi").expect("wifi"), '\u{f1eb}');
    }

    #[test]
    fn test_symbol_is_scoped_to_its_set() {
        let err = SymbolSet::Weather.glyph("github").expect_err("github is a brand");
        assert!(err.to_string().contains("weather"));
    }

    #[test]
    fn test_parse_symbol_set() {
        assert_eq!("Brands".parse::<SymbolSet>().expect("brands"), SymbolSet::Brands);
        let err = "emoji".parse::<SymbolSet>().expect_err("emoji");
        assert!(err.to_string().contains("weather, solid, brands"));
    }

    #[test]
    fn test_tables_have_unique_names_and_valid_code_points() {
        for set in SymbolSet::ALL {
            let table = set.table();
            for (name, code) in table {
                assert!(char::from_u32(*code).is_some(), "{name} in {set}");
                assert_eq!(table.iter().filter(|(n, _)| n == name).count(), 1);
            }
        }
    }
}
