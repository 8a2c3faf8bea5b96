//! Color scale generation.
//!
//! A [`ColorScale`] is the ten-step ramp (50..900) derived from a single
//! base hex color. Shade 500 echoes the caller's input verbatim; lighter
//! shades interpolate toward white and darker shades toward black with
//! fixed factors, so the same base always yields the same ramp.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A ten-step color ramp keyed 50 through 900.
///
/// Declaration order matches serialized key order, so `"50"` comes first
/// in JSON output even though lexicographic order would put `"100"` there.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ColorScale {
    #[serde(rename = "50")]
    pub s50: String,
    #[serde(rename = "100")]
    pub s100: String,
    #[serde(rename = "200")]
    pub s200: String,
    #[serde(rename = "300")]
    pub s300: String,
    #[serde(rename = "400")]
    pub s400: String,
    #[serde(rename = "500")]
    pub s500: String,
    #[serde(rename = "600")]
    pub s600: String,
    #[serde(rename = "700")]
    pub s700: String,
    #[serde(rename = "800")]
    pub s800: String,
    #[serde(rename = "900")]
    pub s900: String,
}

/// Shade keys in ramp order.
pub const SHADE_KEYS: [&str; 10] =
    ["50", "100", "200", "300", "400", "500", "600", "700", "800", "900"];

impl ColorScale {
    /// Look up a shade by its key, e.g. `"500"`.
    pub fn shade(&self, key: &str) -> Option<&str> {
        let value = match key {
            "50" => &self.s50,
            "100" => &self.s100,
            "200" => &self.s200,
            "300" => &self.s300,
            "400" => &self.s400,
            "500" => &self.s500,
            "600" => &self.s600,
            "700" => &self.s700,
            "800" => &self.s800,
            "900" => &self.s900,
            _ => return None,
        };
        Some(value)
    }
}

/// Base colors for the primary, secondary and gray ramps of one industry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndustryPalette {
    pub primary: &'static str,
    pub secondary: &'static str,
    pub gray: &'static str,
}

/// Predefined base palettes by industry key.
pub const INDUSTRY_PALETTES: [(&str, IndustryPalette); 8] = [
    ("finance", IndustryPalette { primary: "#0052CC", secondary: "#00875A", gray: "#42526E" }),
    ("ecommerce", IndustryPalette { primary: "#FF6B35", secondary: "#F7931E", gray: "#4A5568" }),
    ("healthcare", IndustryPalette { primary: "#00A9E0", secondary: "#7AC142", gray: "#5A6C7D" }),
    ("tech", IndustryPalette { primary: "#6366F1", secondary: "#8B5CF6", gray: "#64748B" }),
    ("education", IndustryPalette { primary: "#3B82F6", secondary: "#10B981", gray: "#6B7280" }),
    ("food", IndustryPalette { primary: "#EF4444", secondary: "#F59E0B", gray: "#6B7280" }),
    ("fashion", IndustryPalette { primary: "#EC4899", secondary: "#8B5CF6", gray: "#64748B" }),
    ("real_estate", IndustryPalette { primary: "#0891B2", secondary: "#059669", gray: "#64748B" }),
];

/// Look up the predefined base palette for an industry key.
pub fn industry_palette(key: &str) -> Option<IndustryPalette> {
    INDUSTRY_PALETTES
        .iter()
        .find(|(name, _)| *name == key)
        .map(|(_, palette)| *palette)
}

/// Generate the ten-step ramp for a base hex color.
///
/// Shade 500 is the input string unchanged. An unparseable base degrades
/// the derived shades to a black-based ramp but still echoes the input at
/// 500, so generation never fails.
pub fn generate_color_scale(base_hex: &str) -> ColorScale {
    let (r, g, b) = parse_hex(base_hex).unwrap_or((0, 0, 0));

    ColorScale {
        s50: lighten(r, g, b, 0.95),
        s100: lighten(r, g, b, 0.90),
        s200: lighten(r, g, b, 0.75),
        s300: lighten(r, g, b, 0.60),
        s400: lighten(r, g, b, 0.40),
        s500: base_hex.to_string(),
        s600: darken(r, g, b, 0.15),
        s700: darken(r, g, b, 0.30),
        s800: darken(r, g, b, 0.45),
        s900: darken(r, g, b, 0.60),
    }
}

/// Parse `RRGGBB` with an optional leading `#`. Exactly six hex digits.
fn parse_hex(hex: &str) -> Option<(u8, u8, u8)> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let r = u8::from_str_radix(&digits[0..2], 16).ok()?;
    let g = u8::from_str_radix(&digits[2..4], 16).ok()?;
    let b = u8::from_str_radix(&digits[4..6], 16).ok()?;
    Some((r, g, b))
}

fn lighten(r: u8, g: u8, b: u8, factor: f64) -> String {
    to_hex(
        f64::from(r) + (255.0 - f64::from(r)) * factor,
        f64::from(g) + (255.0 - f64::from(g)) * factor,
        f64::from(b) + (255.0 - f64::from(b)) * factor,
    )
}

fn darken(r: u8, g: u8, b: u8, factor: f64) -> String {
    to_hex(
        f64::from(r) * (1.0 - factor),
        f64::from(g) * (1.0 - factor),
        f64::from(b) * (1.0 - factor),
    )
}

/// Clamp each channel to 0..=255, round, format as lowercase `#rrggbb`.
fn to_hex(r: f64, g: f64, b: f64) -> String {
    let channel = |x: f64| x.clamp(0.0, 255.0).round() as u8;
    format!("#{:02x}{:02x}{:02x}", channel(r), channel(g), channel(b))
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn base_is_echoed_verbatim_at_500() {
        assert_eq!(generate_color_scale("#0052CC").s500, "#0052CC");
        assert_eq!(generate_color_scale("0052cc").s500, "0052cc");
        assert_eq!(generate_color_scale("not-a-color").s500, "not-a-color");
    }

    #[test]
    fn derived_shades_are_lowercase_hex() {
        let scale = generate_color_scale("#A855F7");
        for key in SHADE_KEYS {
            if key == "500" {
                continue;
            }
            let shade = scale.shade(key).unwrap();
            assert_eq!(shade.len(), 7);
            assert!(shade.starts_with('#'));
            assert!(shade[1..].bytes().all(|b| b.is_ascii_hexdigit()));
            assert_eq!(shade, shade.to_lowercase());
        }
    }

    #[test]
    fn mid_gray_produces_known_ramp_values() {
        let scale = generate_color_scale("#808080");
        assert_eq!(scale.s50, "#f9f9f9");
        assert_eq!(scale.s600, "#6d6d6d");
        assert_eq!(scale.s800, "#464646");
    }

    #[test]
    fn invalid_base_degrades_to_black_ramp() {
        let scale = generate_color_scale("#12345");
        assert_eq!(scale.s500, "#12345");
        assert_eq!(scale.s50, "#f2f2f2");
        assert_eq!(scale.s900, "#000000");
    }

    #[test]
    fn hash_prefix_is_optional() {
        let with = generate_color_scale("#3B82F6");
        let without = generate_color_scale("3B82F6");
        assert_eq!(with.s100, without.s100);
        assert_eq!(with.s900, without.s900);
    }

    #[test]
    fn palette_lookup_by_key() {
        let finance = industry_palette("finance").unwrap();
        assert_eq!(finance.primary, "#0052CC");
        assert!(industry_palette("aerospace").is_none());
    }

    fn channel(shade: &str, idx: usize) -> u8 {
        u8::from_str_radix(&shade[1 + idx * 2..3 + idx * 2], 16).unwrap()
    }

    proptest! {
        #[test]
        fn scale_is_deterministic(r in 0u8..=255, g in 0u8..=255, b in 0u8..=255) {
            let base = format!("#{r:02x}{g:02x}{b:02x}");
            prop_assert_eq!(generate_color_scale(&base), generate_color_scale(&base));
        }

        #[test]
        fn lighter_shades_never_darken(r in 0u8..=255, g in 0u8..=255, b in 0u8..=255) {
            let base = format!("#{r:02x}{g:02x}{b:02x}");
            let scale = generate_color_scale(&base);
            let light = ["50", "100", "200", "300", "400"];
            for window in light.windows(2) {
                let a = scale.shade(window[0]).unwrap();
                let b = scale.shade(window[1]).unwrap();
                for idx in 0..3 {
                    prop_assert!(channel(a, idx) >= channel(b, idx));
                }
            }
        }

        #[test]
        fn darker_shades_never_lighten(r in 0u8..=255, g in 0u8..=255, b in 0u8..=255) {
            let base = format!("#{r:02x}{g:02x}{b:02x}");
            let scale = generate_color_scale(&base);
            let dark = ["600", "700", "800", "900"];
            for window in dark.windows(2) {
                let a = scale.shade(window[0]).unwrap();
                let b = scale.shade(window[1]).unwrap();
                for idx in 0..3 {
                    prop_assert!(channel(a, idx) >= channel(b, idx));
                }
            }
        }
    }
}
