//! Generation façade.
//!
//! The entry points accept anything convertible to [`GeneratorInput`]:
//! a bare industry string, an `(industry, tone)` pair, or an explicit
//! input struct. Generation itself never fails; only serializing the
//! result can.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::presets;
use crate::resolve::resolve_industry;
use crate::spec::{BrandTone, DesignSystemSpec, GeneratorInput};
use crate::validate::{validate_spec, ValidationResult};

/// Everything produced by one [`generate_and_validate`] call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GenerationOutput {
    pub spec: DesignSystemSpec,
    pub validation: ValidationResult,
    pub json: String,
}

/// Generate the design system spec for an industry description.
///
/// Unknown industries fall back to the tech preset; a missing tone falls
/// back to 신뢰 (trust).
pub fn generate_design_system(input: impl Into<GeneratorInput>) -> DesignSystemSpec {
    let input = input.into();
    let tone = input.brand_tone.unwrap_or(BrandTone::Trust);
    let industry = resolve_industry(&input.industry).industry();
    presets::industry_preset(industry, tone)
}

/// Generate a spec, validate it, and serialize it in one call.
///
/// Validation findings are reported in the output, never as an error;
/// the `Result` covers JSON serialization only.
pub fn generate_and_validate(input: impl Into<GeneratorInput>) -> Result<GenerationOutput> {
    let spec = generate_design_system(input);
    let validation = validate_spec(&spec);
    let json = format_json(&spec)?;

    Ok(GenerationOutput { spec, validation, json })
}

/// Generate a spec and return it as pretty-printed JSON.
pub fn generate_json(input: impl Into<GeneratorInput>) -> Result<String> {
    let spec = generate_design_system(input);
    format_json(&spec)
}

/// Pretty-print a spec with two-space indentation.
pub fn format_json(spec: &DesignSystemSpec) -> Result<String> {
    Ok(serde_json::to_string_pretty(spec)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_string_input_defaults_to_trust_tone() {
        let spec = generate_design_system("금융");
        assert_eq!(spec.meta.industry, "금융");
        assert_eq!(spec.meta.brand_tone, "신뢰");
    }

    #[test]
    fn tone_override_is_applied() {
        let spec = generate_design_system(("게임", BrandTone::Tech));
        assert_eq!(spec.meta.industry, "게임");
        assert_eq!(spec.meta.brand_tone, "테크");
    }

    #[test]
    fn unknown_industry_uses_tech_preset() {
        let spec = generate_design_system("완전히 알 수 없는 업종");
        assert_eq!(spec.meta.industry, "테크/SaaS");
    }

    #[test]
    fn validation_findings_do_not_fail_the_call() {
        let output = generate_and_validate("이커머스").unwrap();
        assert!(output.validation.valid);
        assert!(output.json.contains("\"meta\""));
    }

    #[test]
    fn json_output_is_pretty_printed_and_stable() {
        let first = generate_json("호텔").unwrap();
        let second = generate_json("호텔").unwrap();
        assert_eq!(first, second);
        assert!(first.starts_with("{\n  \"meta\""));
    }
}
