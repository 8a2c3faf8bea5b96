//! # brandkit
//!
//! Industry-aware design system specification generator.
//!
//! ## Overview
//!
//! `brandkit` produces complete, pre-authored design system documents
//! (colors, typography, layout rules, component styling and Tailwind
//! mappings) keyed by industry vertical and brand tone. A free-text
//! industry description is matched against an ordered keyword table to
//! select one of fourteen presets; the color palette is the only part
//! derived programmatically, from a per-industry base hex value.
//!
//! ## Key Features
//!
//! - **Color scales**: a ten-step tint/shade ramp derived from one base
//!   color, with the base echoed verbatim at shade 500.
//! - **Industry resolution**: first-match-wins keyword matching over
//!   Korean and English industry terms, with a logged fallback to the
//!   tech/SaaS preset when nothing matches.
//! - **Validation**: structural checks over a generated spec that
//!   accumulate every finding instead of failing fast.
//! - **Stable JSON**: pretty-printed output with deterministic key order,
//!   suitable for diff-based workflows.
//!
//! ## Quick Start
//!
//! ```rust
//! use brandkit::{generate_and_validate, BrandTone};
//!
//! let output = generate_and_validate(("게임", BrandTone::Tech)).unwrap();
//! assert_eq!(output.spec.meta.industry, "게임");
//! assert!(output.validation.valid);
//! ```
//!
//! A bare industry string works too; the tone then defaults to 신뢰
//! (trust):
//!
//! ```rust
//! let json = brandkit::generate_json("FinTech bank").unwrap();
//! assert!(json.contains("금융"));
//! ```

pub mod color;
pub mod error;
pub mod export;
pub mod generator;
pub mod presets;
pub mod resolve;
pub mod spec;
pub mod validate;

pub use color::{ColorScale, IndustryPalette, SHADE_KEYS, generate_color_scale, industry_palette};
pub use error::{Error, Result};
pub use export::write_spec_json;
pub use generator::{
    GenerationOutput, format_json, generate_and_validate, generate_design_system, generate_json,
};
pub use presets::{default_preset, industry_preset};
pub use resolve::{ALL_INDUSTRIES, Industry, Resolution, resolve_industry};
pub use spec::{BrandTone, DesignSystemSpec, GeneratorInput};
pub use validate::{ValidationResult, validate_spec};
