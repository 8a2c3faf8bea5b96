//! Data model for generated design system specifications.
//!
//! A [`DesignSystemSpec`] is the root aggregate produced by the generator:
//! one fully-populated, immutable document per call. Field declaration order
//! matches the serialized key order, so pretty-printed JSON output is stable
//! and diffable across runs.

use std::collections::BTreeMap;
use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::color::ColorScale;

/// Brand tone modifier applied to a preset.
///
/// Serialized as the Korean tone label used throughout the preset copy
/// (e.g. `"신뢰"` for [`BrandTone::Trust`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum BrandTone {
    /// 신뢰 - trust
    #[serde(rename = "신뢰")]
    Trust,
    /// 프리미엄 - premium
    #[serde(rename = "프리미엄")]
    Premium,
    /// 친근 - friendly
    #[serde(rename = "친근")]
    Friendly,
    /// 테크 - tech
    #[serde(rename = "테크")]
    Tech,
    /// 미니멀 - minimal
    #[serde(rename = "미니멀")]
    Minimal,
    /// 활기찬 - vibrant
    #[serde(rename = "활기찬")]
    Vibrant,
    /// 고급 - luxury
    #[serde(rename = "고급")]
    Luxury,
}

impl BrandTone {
    /// The Korean label used in generated documents.
    pub fn as_str(&self) -> &'static str {
        match self {
            BrandTone::Trust => "신뢰",
            BrandTone::Premium => "프리미엄",
            BrandTone::Friendly => "친근",
            BrandTone::Tech => "테크",
            BrandTone::Minimal => "미니멀",
            BrandTone::Vibrant => "활기찬",
            BrandTone::Luxury => "고급",
        }
    }

    /// Parse a tone from its Korean label or English alias.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "신뢰" | "trust" => Some(Self::Trust),
            "프리미엄" | "premium" => Some(Self::Premium),
            "친근" | "friendly" => Some(Self::Friendly),
            "테크" | "tech" => Some(Self::Tech),
            "미니멀" | "minimal" => Some(Self::Minimal),
            "활기찬" | "vibrant" => Some(Self::Vibrant),
            "고급" | "luxury" => Some(Self::Luxury),
            _ => None,
        }
    }
}

impl fmt::Display for BrandTone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Caller input for one generation call. Not persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GeneratorInput {
    /// Free-text industry description, matched against the keyword table.
    pub industry: String,
    /// Tone override; when absent the generator falls back to 신뢰 (trust).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand_tone: Option<BrandTone>,
}

impl From<&str> for GeneratorInput {
    fn from(industry: &str) -> Self {
        Self { industry: industry.to_string(), brand_tone: None }
    }
}

impl From<String> for GeneratorInput {
    fn from(industry: String) -> Self {
        Self { industry, brand_tone: None }
    }
}

impl<S: Into<String>> From<(S, BrandTone)> for GeneratorInput {
    fn from((industry, tone): (S, BrandTone)) -> Self {
        Self { industry: industry.into(), brand_tone: Some(tone) }
    }
}

/// Document identity: which industry and tone this spec was generated for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Meta {
    pub industry: String,
    pub brand_tone: String,
    pub style_keywords: Vec<String>,
    pub target_feeling: String,
}

/// Figma workspace guidance: page list, layer naming, auto-layout scales.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct FigmaGuide {
    pub pages: Vec<String>,
    pub naming_rule: String,
    pub auto_layout_rules: AutoLayoutRules,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct AutoLayoutRules {
    pub grid: String,
    pub spacing_scale: Vec<u32>,
    pub radius_scale: Vec<u32>,
    pub type_scale_tokens: Vec<String>,
    pub breakpoints: Vec<String>,
}

/// Page skeleton: header, hero, footer plus the landing sections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Layout {
    pub header: LayoutHeader,
    pub hero: LayoutHero,
    pub footer: LayoutFooter,
    pub sections: Vec<Section>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct LayoutHeader {
    pub height_px: u32,
    pub structure: Vec<String>,
    pub sticky_behavior: String,
    pub desktop: HeaderDesktop,
    pub mobile: HeaderMobile,
    pub tailwind_example: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct HeaderDesktop {
    pub padding_x: String,
    pub max_width: String,
    pub nav_items: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct HeaderMobile {
    pub pattern: String,
    pub height_px: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct LayoutHero {
    pub structure: Vec<String>,
    pub desktop_grid: String,
    pub mobile_stack: String,
    pub padding: String,
    pub background: String,
    pub image_style: String,
    pub tailwind_example: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct LayoutFooter {
    pub structure: Vec<String>,
    pub legal_items: Vec<String>,
    pub tailwind_example: String,
}

/// One landing-page section with its goal and layout rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    pub name: String,
    pub goal: String,
    pub layout_rule: String,
    pub tailwind_example: String,
}

impl Section {
    pub fn new(
        name: impl Into<String>,
        goal: impl Into<String>,
        layout_rule: impl Into<String>,
        tailwind_example: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            goal: goal.into(),
            layout_rule: layout_rule.into(),
            tailwind_example: tailwind_example.into(),
        }
    }
}

/// The three color ramps plus usage rules and accessibility notes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Colors {
    pub primary: ColorScale,
    pub secondary: ColorScale,
    pub gray: ColorScale,
    pub usage_rules: UsageRules,
    pub accessibility_notes: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct UsageRules {
    pub primary_use: String,
    pub secondary_use: String,
    pub surface_bg: String,
    pub border: String,
    pub text_strong: String,
    pub text_weak: String,
}

/// Font choices and the five-step type scale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Typography {
    pub font_family: FontFamily,
    pub scale: TypeScale,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct FontFamily {
    pub primary: String,
    pub fallback: String,
    pub alt_suggestion: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TypeScale {
    pub h1: TypographyScale,
    pub h2: TypographyScale,
    pub h3: TypographyScale,
    pub body: TypographyScale,
    pub caption: TypographyScale,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TypographyScale {
    pub font_size: String,
    pub font_weight: u16,
    pub line_height: String,
    pub letter_spacing: String,
}

impl TypographyScale {
    pub fn new(
        font_size: impl Into<String>,
        font_weight: u16,
        line_height: impl Into<String>,
        letter_spacing: impl Into<String>,
    ) -> Self {
        Self {
            font_size: font_size.into(),
            font_weight,
            line_height: line_height.into(),
            letter_spacing: letter_spacing.into(),
        }
    }
}

/// Component style descriptors for the three core components.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Components {
    pub button: ButtonSet,
    pub input: Input,
    pub card: Card,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ButtonSet {
    pub primary: PrimaryButton,
    pub secondary: SecondaryButton,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PrimaryButton {
    pub height_px: u32,
    pub padding: String,
    pub radius: String,
    pub bg: String,
    pub text: String,
    pub hover: String,
    pub disabled: String,
    pub tailwind: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SecondaryButton {
    pub height_px: u32,
    pub padding: String,
    pub radius: String,
    pub border: String,
    /// Filled secondary buttons only (media preset); skipped otherwise.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bg: Option<String>,
    pub text: String,
    pub hover: String,
    pub disabled: String,
    pub tailwind: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Input {
    pub height_px: u32,
    pub radius: String,
    pub border: String,
    pub placeholder: String,
    pub focus_ring: String,
    pub tailwind: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub radius: String,
    pub padding: String,
    pub shadow: String,
    pub border: String,
    pub tailwind: String,
}

/// Tailwind adoption hints: config extension and ready-made class snippets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TailwindMapping {
    pub tailwind_config_extend: TailwindConfigExtend,
    pub class_snippets: ClassSnippets,
    pub implementation_notes: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TailwindConfigExtend {
    pub colors: TailwindColors,
    pub font_family: TailwindFontFamily,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aspect_ratio: Option<BTreeMap<String, String>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TailwindColors {
    pub primary: String,
    pub secondary: String,
    pub gray: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TailwindFontFamily {
    pub sans: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ClassSnippets {
    pub container: String,
    pub header: String,
    pub hero: String,
    pub primary_button: String,
    pub secondary_button: String,
    pub card: String,
    pub input: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub poster: Option<String>,
}

/// What this preset changed versus the shared baseline, and why.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct VariationSummary {
    pub changed_points: Vec<VariationPoint>,
    pub unchanged_principles: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct VariationPoint {
    pub category: String,
    pub field: String,
    pub reason: String,
}

impl VariationPoint {
    pub fn new(
        category: impl Into<String>,
        field: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self { category: category.into(), field: field.into(), reason: reason.into() }
    }
}

/// The root aggregate: one complete design system specification.
///
/// Every field is fully populated at construction time; presets never
/// produce partial documents. Instances are value objects with no shared
/// state, safe to move across threads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DesignSystemSpec {
    pub meta: Meta,
    pub figma_guide: FigmaGuide,
    pub layout: Layout,
    pub colors: Colors,
    pub typography: Typography,
    pub components: Components,
    pub tailwind_mapping: TailwindMapping,
    pub variation_summary: VariationSummary,
}

/// Convert a slice of string literals into owned strings.
pub(crate) fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn brand_tone_from_name_accepts_aliases() {
        assert_eq!(BrandTone::from_name("신뢰"), Some(BrandTone::Trust));
        assert_eq!(BrandTone::from_name("Trust"), Some(BrandTone::Trust));
        assert_eq!(BrandTone::from_name(" premium "), Some(BrandTone::Premium));
        assert_eq!(BrandTone::from_name("테크"), Some(BrandTone::Tech));
        assert_eq!(BrandTone::from_name("unknown"), None);
    }

    #[test]
    fn brand_tone_serializes_as_korean_label() {
        let json = serde_json::to_string(&BrandTone::Trust).unwrap();
        assert_eq!(json, "\"신뢰\"");
        let back: BrandTone = serde_json::from_str(&json).unwrap();
        assert_eq!(back, BrandTone::Trust);
    }

    #[test]
    fn generator_input_conversions() {
        let from_str: GeneratorInput = "금융".into();
        assert_eq!(from_str.industry, "금융");
        assert_eq!(from_str.brand_tone, None);

        let from_pair: GeneratorInput = ("게임", BrandTone::Tech).into();
        assert_eq!(from_pair.industry, "게임");
        assert_eq!(from_pair.brand_tone, Some(BrandTone::Tech));
    }
}
