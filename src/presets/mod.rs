//! Industry preset constructors.
//!
//! One module per industry, each exposing a single constructor that
//! builds a complete [`DesignSystemSpec`] for the given tone. All content
//! is static data; only the color ramps are derived at construction time.

mod automotive;
mod ecommerce;
mod education;
mod fashion;
mod finance;
mod fitness;
mod food;
mod gaming;
mod healthcare;
mod hotel;
mod media;
mod realestate;
mod tech;
mod travel;

pub use automotive::automotive_preset;
pub use ecommerce::ecommerce_preset;
pub use education::education_preset;
pub use fashion::fashion_preset;
pub use finance::finance_preset;
pub use fitness::fitness_preset;
pub use food::food_preset;
pub use gaming::gaming_preset;
pub use healthcare::healthcare_preset;
pub use hotel::hotel_preset;
pub use media::media_preset;
pub use realestate::realestate_preset;
pub use tech::tech_preset;
pub use travel::travel_preset;

use crate::resolve::Industry;
use crate::spec::{BrandTone, DesignSystemSpec};

/// Build the preset for a resolved industry with an explicit tone.
pub fn industry_preset(industry: Industry, tone: BrandTone) -> DesignSystemSpec {
    match industry {
        Industry::Finance => finance_preset(tone),
        Industry::Ecommerce => ecommerce_preset(tone),
        Industry::Healthcare => healthcare_preset(tone),
        Industry::Tech => tech_preset(tone),
        Industry::Education => education_preset(tone),
        Industry::Food => food_preset(tone),
        Industry::RealEstate => realestate_preset(tone),
        Industry::Fashion => fashion_preset(tone),
        Industry::Gaming => gaming_preset(tone),
        Industry::Travel => travel_preset(tone),
        Industry::Fitness => fitness_preset(tone),
        Industry::Hotel => hotel_preset(tone),
        Industry::Automotive => automotive_preset(tone),
        Industry::Media => media_preset(tone),
    }
}

/// Build a preset with the tone its industry was designed around.
pub fn default_preset(industry: Industry) -> DesignSystemSpec {
    industry_preset(industry, industry.default_tone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolve::ALL_INDUSTRIES;
    use crate::validate::validate_spec;

    #[test]
    fn every_preset_validates_clean() {
        for industry in ALL_INDUSTRIES {
            let spec = default_preset(industry);
            let result = validate_spec(&spec);
            assert!(
                result.valid,
                "{} preset failed validation: {:?}",
                industry.slug(),
                result.errors
            );
        }
    }

    #[test]
    fn preset_tone_is_reflected_in_meta() {
        let spec = industry_preset(Industry::Finance, BrandTone::Premium);
        assert_eq!(spec.meta.brand_tone, "프리미엄");
    }

    #[test]
    fn default_preset_uses_design_tone() {
        let spec = default_preset(Industry::Fashion);
        assert_eq!(spec.meta.brand_tone, "프리미엄");

        let spec = default_preset(Industry::Gaming);
        assert_eq!(spec.meta.brand_tone, "테크");
    }

    #[test]
    fn only_media_fills_the_secondary_button_background() {
        for industry in ALL_INDUSTRIES {
            let spec = default_preset(industry);
            let has_bg = spec.components.button.secondary.bg.is_some();
            assert_eq!(has_bg, industry == Industry::Media, "{}", industry.slug());
        }
    }

    #[test]
    fn known_base_colors_reach_the_ramps() {
        let gaming = default_preset(Industry::Gaming);
        assert_eq!(gaming.colors.primary.s500, "#A855F7");

        let media = default_preset(Industry::Media);
        assert_eq!(media.colors.primary.s500, "#E50914");

        let finance = default_preset(Industry::Finance);
        assert_eq!(finance.colors.primary.s500, "#0052CC");
    }
}
