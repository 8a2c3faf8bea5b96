//! Structural validation of generated specs.
//!
//! Validation accumulates every finding instead of stopping at the first,
//! so callers get the complete picture in one pass. An invalid document is
//! a reportable outcome, not an error.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::color::SHADE_KEYS;
use crate::spec::DesignSystemSpec;

/// Outcome of validating one spec: all findings, in check order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub valid: bool,
    pub errors: Vec<String>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.valid
    }
}

/// Validate a spec against the structural rules every preset must satisfy.
pub fn validate_spec(spec: &DesignSystemSpec) -> ValidationResult {
    let mut errors = Vec::new();

    if spec.meta.industry.is_empty() {
        errors.push("meta.industry is required".to_string());
    }
    if spec.meta.brand_tone.is_empty() {
        errors.push("meta.brandTone is required".to_string());
    }
    if spec.meta.style_keywords.is_empty() {
        errors.push("meta.styleKeywords must have at least one item".to_string());
    }

    let scales = [
        ("primary", &spec.colors.primary),
        ("secondary", &spec.colors.secondary),
        ("gray", &spec.colors.gray),
    ];
    for (name, scale) in scales {
        for level in SHADE_KEYS {
            let value = scale.shade(level).unwrap_or("");
            if value.is_empty() {
                errors.push(format!("colors.{name}.{level} is required"));
            }
            if !value.is_empty() && !is_valid_hex(value) {
                errors.push(format!("colors.{name}.{level} must be a valid HEX color"));
            }
        }
    }

    if spec.colors.accessibility_notes.len() < 3 {
        errors.push("colors.accessibilityNotes must have at least 3 items".to_string());
    }

    if spec.layout.sections.len() < 4 {
        errors.push("layout.sections must have at least 4 items".to_string());
    }

    if spec.variation_summary.changed_points.len() < 3 {
        errors.push("variationSummary.changedPoints must have at least 3 items".to_string());
    }

    if spec.figma_guide.pages.is_empty() {
        errors.push("figmaGuide.pages must have at least one page".to_string());
    }
    if spec.figma_guide.naming_rule.is_empty() {
        errors.push("figmaGuide.namingRule is required".to_string());
    }

    ValidationResult { valid: errors.is_empty(), errors }
}

/// `#RRGGBB`, exactly. The leading `#` is mandatory here.
fn is_valid_hex(color: &str) -> bool {
    let Some(digits) = color.strip_prefix('#') else {
        return false;
    };
    digits.len() == 6 && digits.bytes().all(|b| b.is_ascii_hexdigit())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presets;
    use crate::resolve::Industry;
    use crate::spec::BrandTone;

    #[test]
    fn preset_specs_validate_clean() {
        let spec = presets::industry_preset(Industry::Finance, BrandTone::Trust);
        let result = validate_spec(&spec);
        assert!(result.valid, "unexpected errors: {:?}", result.errors);
        assert!(result.errors.is_empty());
    }

    #[test]
    fn findings_accumulate_in_check_order() {
        let mut spec = presets::industry_preset(Industry::Tech, BrandTone::Tech);
        spec.figma_guide.naming_rule.clear();
        spec.layout.sections.truncate(2);

        let result = validate_spec(&spec);
        assert!(!result.valid);
        assert_eq!(
            result.errors,
            vec![
                "layout.sections must have at least 4 items".to_string(),
                "figmaGuide.namingRule is required".to_string(),
            ]
        );
    }

    #[test]
    fn missing_shade_reports_both_findings_paths() {
        let mut spec = presets::industry_preset(Industry::Gaming, BrandTone::Tech);
        spec.colors.primary.s500.clear();
        spec.colors.gray.s900 = "not-hex".to_string();

        let errors = validate_spec(&spec).errors;
        assert!(errors.contains(&"colors.primary.500 is required".to_string()));
        assert!(errors.contains(&"colors.gray.900 must be a valid HEX color".to_string()));
    }

    #[test]
    fn hex_check_requires_hash_and_six_digits() {
        assert!(is_valid_hex("#0052CC"));
        assert!(is_valid_hex("#a855f7"));
        assert!(!is_valid_hex("0052CC"));
        assert!(!is_valid_hex("#0052C"));
        assert!(!is_valid_hex("#0052CCC"));
        assert!(!is_valid_hex("#0052CG"));
    }
}
