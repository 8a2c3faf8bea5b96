//! End-to-end tests covering resolution, generation, validation and
//! serialization through the public API.

use brandkit::{
    BrandTone, DesignSystemSpec, GeneratorInput, Industry, Resolution, generate_and_validate,
    generate_color_scale, generate_design_system, generate_json, resolve_industry, validate_spec,
    write_spec_json,
};

#[test]
fn gaming_scenario_end_to_end() {
    let input = GeneratorInput {
        industry: "게임".to_string(),
        brand_tone: Some(BrandTone::Tech),
    };
    let spec = generate_design_system(input);

    assert_eq!(spec.meta.industry, "게임");
    assert_eq!(spec.meta.brand_tone, "테크");
    assert_eq!(spec.colors.primary.s500, "#A855F7");
    assert!(spec.layout.sections.len() >= 4);

    let result = validate_spec(&spec);
    assert!(result.valid, "unexpected errors: {:?}", result.errors);
}

#[test]
fn free_text_resolves_through_keywords() {
    assert_eq!(
        generate_design_system("FinTech bank").meta.industry,
        "금융"
    );
    assert_eq!(
        generate_design_system(("  이커머스  ", BrandTone::Friendly)).meta.industry,
        "이커머스"
    );
    assert_eq!(
        generate_design_system("스트리밍 서비스").meta.industry,
        "미디어"
    );
}

#[test]
fn unknown_industry_falls_back_without_error() {
    let resolution = resolve_industry("zzz-unknown-industry-zzz");
    assert_eq!(resolution, Resolution::Fallback(Industry::Tech));

    let spec = generate_design_system("zzz-unknown-industry-zzz");
    assert_eq!(spec.meta.industry, "테크/SaaS");
}

#[test]
fn json_round_trips_to_the_same_spec() {
    let json = generate_json(("호텔", BrandTone::Premium)).unwrap();
    let parsed: DesignSystemSpec = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, generate_design_system(("호텔", BrandTone::Premium)));
}

#[test]
fn json_key_order_follows_construction_order() {
    let json = generate_json("교육").unwrap();

    let meta = json.find("\"meta\"").unwrap();
    let figma = json.find("\"figmaGuide\"").unwrap();
    let layout = json.find("\"layout\"").unwrap();
    let colors = json.find("\"colors\"").unwrap();
    let variation = json.find("\"variationSummary\"").unwrap();
    assert!(meta < figma && figma < layout && layout < colors && colors < variation);

    // Shade keys serialize in ramp order, not lexicographic order.
    let s50 = json.find("\"50\"").unwrap();
    let s100 = json.find("\"100\"").unwrap();
    let s900 = json.find("\"900\"").unwrap();
    assert!(s50 < s100 && s100 < s900);
}

#[test]
fn generate_and_validate_reports_everything() {
    let output = generate_and_validate("부동산").unwrap();
    assert_eq!(output.spec.meta.industry, "부동산");
    assert!(output.validation.valid);
    assert!(output.validation.errors.is_empty());

    let parsed: DesignSystemSpec = serde_json::from_str(&output.json).unwrap();
    assert_eq!(parsed, output.spec);
}

#[test]
fn validator_reports_multiple_findings_at_once() {
    let mut spec = generate_design_system("피트니스");
    spec.figma_guide.naming_rule.clear();
    spec.layout.sections.truncate(2);

    let result = validate_spec(&spec);
    assert!(!result.valid);
    assert_eq!(result.errors.len(), 2);
    assert!(result.errors[0].contains("layout.sections"));
    assert!(result.errors[1].contains("figmaGuide.namingRule"));
}

#[test]
fn color_scale_matches_known_derivation() {
    // #A855F7 lightened by 0.95 and darkened by 0.60.
    let scale = generate_color_scale("#A855F7");
    assert_eq!(scale.s50, "#fbf7ff");
    assert_eq!(scale.s500, "#A855F7");
    assert_eq!(scale.s900, "#432263");
}

#[test]
fn export_writes_generated_spec_to_disk() {
    let dir = tempfile::tempdir().unwrap();
    let spec = generate_design_system("자동차");

    let path = write_spec_json(dir.path(), Industry::Automotive.slug(), &spec).unwrap();
    assert!(path.ends_with("automotive-design-system.json"));

    let contents = std::fs::read_to_string(path).unwrap();
    let parsed: DesignSystemSpec = serde_json::from_str(&contents).unwrap();
    assert_eq!(parsed.meta.industry, "자동차");
}
