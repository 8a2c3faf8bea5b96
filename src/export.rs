//! Writing generated specs to disk.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::generator::format_json;
use crate::spec::DesignSystemSpec;

/// Write a spec to `<dir>/<slug>-design-system.json` and return the path.
///
/// The directory is created if it does not exist.
pub fn write_spec_json(dir: impl AsRef<Path>, slug: &str, spec: &DesignSystemSpec) -> Result<PathBuf> {
    let dir = dir.as_ref();
    fs::create_dir_all(dir)?;

    let path = dir.join(format!("{slug}-design-system.json"));
    let json = format_json(spec)?;
    fs::write(&path, json)?;

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::generate_design_system;
    use crate::resolve::Industry;

    #[test]
    fn writes_named_file_and_returns_path() {
        let dir = tempfile::tempdir().unwrap();
        let spec = generate_design_system("게임");

        let path = write_spec_json(dir.path(), Industry::Gaming.slug(), &spec).unwrap();
        assert_eq!(path.file_name().unwrap(), "gaming-design-system.json");

        let contents = fs::read_to_string(&path).unwrap();
        let parsed: crate::spec::DesignSystemSpec = serde_json::from_str(&contents).unwrap();
        assert_eq!(parsed, spec);
    }

    #[test]
    fn creates_missing_directories() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("out").join("specs");
        let spec = generate_design_system("호텔");

        let path = write_spec_json(&nested, "hotel", &spec).unwrap();
        assert!(path.exists());
    }
}
