//! Industry resolution.
//!
//! Maps free-text industry descriptions ("FinTech bank", "  이커머스  ")
//! onto the fixed set of supported industries via an ordered substring
//! keyword table. Matching is first-match-wins over the table order, so
//! overlapping keywords resolve predictably: "헬스장" hits healthcare's
//! "헬스" before fitness, "쇼핑몰" hits e-commerce's "쇼핑" before fashion.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::spec::BrandTone;

/// The industries with a dedicated preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum Industry {
    Finance,
    Ecommerce,
    Healthcare,
    Tech,
    Education,
    Food,
    RealEstate,
    Fashion,
    Gaming,
    Travel,
    Fitness,
    Hotel,
    Automotive,
    Media,
}

/// All supported industries, in keyword-table order.
pub const ALL_INDUSTRIES: [Industry; 14] = [
    Industry::Finance,
    Industry::Ecommerce,
    Industry::Healthcare,
    Industry::Tech,
    Industry::Education,
    Industry::Food,
    Industry::RealEstate,
    Industry::Fashion,
    Industry::Gaming,
    Industry::Travel,
    Industry::Fitness,
    Industry::Hotel,
    Industry::Automotive,
    Industry::Media,
];

/// Substring keywords per industry. Earlier entries win on overlap.
const INDUSTRY_KEYWORDS: [(Industry, &[&str]); 14] = [
    (Industry::Finance, &["금융", "finance", "bank"]),
    (Industry::Ecommerce, &["이커머스", "ecommerce", "쇼핑", "커머스", "shopping"]),
    (Industry::Healthcare, &["헬스", "health", "의료", "병원", "medical"]),
    (Industry::Tech, &["테크", "tech", "saas", "software", "it"]),
    (Industry::Education, &["교육", "education", "학습", "강의"]),
    (Industry::Food, &["음식", "food", "배달", "delivery", "맛집"]),
    (Industry::RealEstate, &["부동산", "real", "estate", "집", "property"]),
    (Industry::Fashion, &["패션", "fashion", "의류", "쇼핑몰"]),
    (Industry::Gaming, &["게임", "gaming", "게이밍", "엔터"]),
    (Industry::Travel, &["여행", "travel", "관광", "투어"]),
    (Industry::Fitness, &["피트니스", "fitness", "운동", "헬스장", "스포츠"]),
    (Industry::Hotel, &["호텔", "hotel", "숙박", "리조트", "hospitality"]),
    (Industry::Automotive, &["자동차", "automotive", "카", "차량", "car"]),
    (Industry::Media, &["미디어", "media", "ott", "스트리밍", "streaming"]),
];

impl Industry {
    /// Stable kebab-case identifier, used for export file names.
    pub fn slug(&self) -> &'static str {
        match self {
            Industry::Finance => "finance",
            Industry::Ecommerce => "ecommerce",
            Industry::Healthcare => "healthcare",
            Industry::Tech => "tech",
            Industry::Education => "education",
            Industry::Food => "food",
            Industry::RealEstate => "real-estate",
            Industry::Fashion => "fashion",
            Industry::Gaming => "gaming",
            Industry::Travel => "travel",
            Industry::Fitness => "fitness",
            Industry::Hotel => "hotel",
            Industry::Automotive => "automotive",
            Industry::Media => "media",
        }
    }

    /// The tone each preset was designed around.
    pub fn default_tone(&self) -> BrandTone {
        match self {
            Industry::Finance | Industry::Healthcare => BrandTone::Trust,
            Industry::Ecommerce
            | Industry::Education
            | Industry::Food
            | Industry::Travel => BrandTone::Friendly,
            Industry::RealEstate | Industry::Fashion | Industry::Hotel => BrandTone::Premium,
            Industry::Tech
            | Industry::Gaming
            | Industry::Fitness
            | Industry::Automotive
            | Industry::Media => BrandTone::Tech,
        }
    }
}

/// Outcome of resolving a free-text industry description.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// A keyword matched.
    Matched(Industry),
    /// Nothing matched; the default industry was substituted.
    Fallback(Industry),
}

impl Resolution {
    pub fn industry(&self) -> Industry {
        match self {
            Resolution::Matched(industry) | Resolution::Fallback(industry) => *industry,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Resolution::Fallback(_))
    }
}

/// Resolve a description to an industry, falling back to tech/SaaS.
///
/// Input is trimmed and lowercased before matching. A fallback emits a
/// `tracing` warning with the unmatched input.
pub fn resolve_industry(input: &str) -> Resolution {
    let normalized = input.trim().to_lowercase();

    for (industry, keywords) in INDUSTRY_KEYWORDS {
        if keywords.iter().any(|keyword| normalized.contains(keyword)) {
            return Resolution::Matched(industry);
        }
    }

    warn!(industry = %input, "no preset matched industry description, using tech preset");
    Resolution::Fallback(Industry::Tech)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_korean_and_english_keywords() {
        assert_eq!(resolve_industry("금융"), Resolution::Matched(Industry::Finance));
        assert_eq!(resolve_industry("FinTech bank"), Resolution::Matched(Industry::Finance));
        assert_eq!(resolve_industry("  이커머스  "), Resolution::Matched(Industry::Ecommerce));
        assert_eq!(resolve_industry("OTT 서비스"), Resolution::Matched(Industry::Media));
    }

    #[test]
    fn matching_is_case_insensitive() {
        assert_eq!(resolve_industry("HEALTHCARE"), Resolution::Matched(Industry::Healthcare));
        assert_eq!(resolve_industry("SaaS startup"), Resolution::Matched(Industry::Tech));
    }

    #[test]
    fn overlapping_keywords_resolve_in_table_order() {
        // "헬스장" contains healthcare's "헬스" which is checked first.
        assert_eq!(resolve_industry("헬스장"), Resolution::Matched(Industry::Healthcare));
        // "쇼핑몰" contains e-commerce's "쇼핑" which is checked first.
        assert_eq!(resolve_industry("쇼핑몰"), Resolution::Matched(Industry::Ecommerce));
    }

    #[test]
    fn unknown_industry_falls_back_to_tech() {
        let resolution = resolve_industry("양봉업");
        assert_eq!(resolution, Resolution::Fallback(Industry::Tech));
        assert!(resolution.is_fallback());
        assert_eq!(resolution.industry(), Industry::Tech);
    }

    #[test]
    fn every_industry_resolves_from_its_own_slug_keyword() {
        assert_eq!(resolve_industry("real estate listing"), Resolution::Matched(Industry::RealEstate));
        assert_eq!(resolve_industry("자동차"), Resolution::Matched(Industry::Automotive));
        assert_eq!(resolve_industry("호텔 예약"), Resolution::Matched(Industry::Hotel));
    }

    #[test]
    fn default_tones_follow_preset_design() {
        assert_eq!(Industry::Finance.default_tone(), BrandTone::Trust);
        assert_eq!(Industry::Fashion.default_tone(), BrandTone::Premium);
        assert_eq!(Industry::Gaming.default_tone(), BrandTone::Tech);
        assert_eq!(Industry::Food.default_tone(), BrandTone::Friendly);
    }
}
