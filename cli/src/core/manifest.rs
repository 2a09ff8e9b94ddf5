//! # nail Manifest Editing
//!
//! File: cli/src/core/manifest.rs
//!
//! ## Overview
//!
//! Every generated project gets its own `package.json`. The template's
//! manifest is never copied verbatim: it is parsed, stamped with the project
//! name and author, optionally stripped of end-to-end testing entries, and
//! written back out with two-space indentation.
//!
//! Key order is kept exactly as the template author wrote it (`serde_json`
//! with `preserve_order`), so a generated manifest diffs cleanly against the
//! template.
//!
use crate::core::error::{NailError, Result};
use anyhow::Context;
use serde_json::{Map, Value};
use std::path::Path;
use tracing::debug;

/// A parsed `package.json` document.
#[derive(Debug, Clone, PartialEq)]
pub struct Manifest {
    root: Map<String, Value>,
}

impl Manifest {
    /// Reads and parses the manifest at `path`.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.is_file() {
            anyhow::bail!(NailError::Manifest(format!(
                "Template has no manifest at {}",
                path.display()
            )));
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read manifest {}", path.display()))?;
        Self::parse(&content).with_context(|| format!("Invalid manifest {}", path.display()))
    }

    /// Parses manifest text. The document must be a JSON object.
    pub fn parse(content: &str) -> Result<Self> {
        match serde_json::from_str::<Value>(content) {
            Ok(Value::Object(root)) => Ok(Self { root }),
            Ok(_) => Err(NailError::Manifest("top-level value is not an object".into()).into()),
            Err(e) => Err(NailError::Manifest(e.to_string()).into()),
        }
    }

    /// Sets a top-level string field, keeping its position if it already exists.
    pub fn set_str(&mut self, key: &str, value: &str) {
        self.root
            .insert(key.to_string(), Value::String(value.to_string()));
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.root.get(key)
    }

    /// Drops `keys` from the nested mapping `section`.
    ///
    /// A missing section, or one that is not an object, is left untouched.
    /// Returns how many keys were removed.
    pub fn remove_section_keys(&mut self, section: &str, keys: &[String]) -> usize {
        let Some(Value::Object(map)) = self.root.get_mut(section) else {
            debug!("Manifest has no '{}' mapping, nothing to strip", section);
            return 0;
        };
        let before = map.len();
        *map = without_keys(std::mem::take(map), keys);
        let removed = before - map.len();
        debug!("Removed {} key(s) from '{}'", removed, section);
        removed
    }

    /// Two-space indented JSON, without a trailing newline.
    pub fn to_pretty_string(&self) -> Result<String> {
        serde_json::to_string_pretty(&self.root).context("Failed to serialize manifest")
    }

    pub fn write(&self, path: &Path) -> Result<()> {
        let content = self.to_pretty_string()?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write manifest {}", path.display()))
    }
}

/// Copies every entry of `map` except the ones named in `keys`, keeping order.
pub fn without_keys(map: Map<String, Value>, keys: &[String]) -> Map<String, Value> {
    map.into_iter()
        .filter(|(k, _)| !keys.iter().any(|excluded| excluded == k))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    const TEMPLATE_MANIFEST: &str = r#"{
  "name": "nail-app",
  "version": "1.0.0",
  "author": "OwlAford",
  "scripts": {
    "dev": "webpack serve",
    "cy:run": "cypress run",
    "build": "webpack",
    "cy:open": "cypress open"
  },
  "devDependencies": {
    "webpack": "^5.0.0",
    "cypress": "^3.1.0",
    "eslint": "^8.0.0"
  }
}"#;

    fn e2e_scripts() -> Vec<String> {
        vec!["cy:run".into(), "cy:open".into()]
    }

    #[test]
    fn test_set_identity_keeps_key_order() {
        let mut manifest = Manifest::parse(TEMPLATE_MANIFEST).unwrap();
        manifest.set_str("name", "demo-app");
        manifest.set_str("author", "owl_aford");

        let keys: Vec<&String> = manifest.root.keys().collect();
        assert_eq!(
            keys,
            ["name", "version", "author", "scripts", "devDependencies"]
        );
        assert_eq!(manifest.get("name").unwrap(), "demo-app");
        assert_eq!(manifest.get("author").unwrap(), "owl_aford");
    }

    #[test]
    fn test_remove_section_keys() {
        let mut manifest = Manifest::parse(TEMPLATE_MANIFEST).unwrap();
        assert_eq!(
            manifest.remove_section_keys("devDependencies", &["cypress".into()]),
            1
        );
        assert_eq!(manifest.remove_section_keys("scripts", &e2e_scripts()), 2);

        let scripts = manifest.get("scripts").unwrap().as_object().unwrap();
        assert_eq!(scripts.keys().collect::<Vec<_>>(), ["dev", "build"]);
        let dev_deps = manifest.get("devDependencies").unwrap().as_object().unwrap();
        assert_eq!(dev_deps.keys().collect::<Vec<_>>(), ["webpack", "eslint"]);
        assert_eq!(dev_deps["eslint"], "^8.0.0");
    }

    #[test]
    fn test_remove_from_missing_or_scalar_section() {
        let mut manifest = Manifest::parse(r#"{"name": "x", "scripts": "nope"}"#).unwrap();
        assert_eq!(manifest.remove_section_keys("devDependencies", &e2e_scripts()), 0);
        assert_eq!(manifest.remove_section_keys("scripts", &e2e_scripts()), 0);
        assert_eq!(manifest.get("scripts").unwrap(), "nope");
    }

    #[test]
    fn test_parse_rejects_non_objects() {
        assert!(Manifest::parse("[1, 2]").is_err());
        assert!(Manifest::parse("{ not json").is_err());
    }

    #[test]
    fn test_pretty_output_uses_two_spaces() {
        let manifest = Manifest::parse(r#"{"name":"a","scripts":{"dev":"x"}}"#).unwrap();
        assert_eq!(
            manifest.to_pretty_string().unwrap(),
            "{\n  \"name\": \"a\",\n  \"scripts\": {\n    \"dev\": \"x\"\n  }\n}"
        );
    }

    #[test]
    fn test_load_missing_file_is_manifest_error() {
        let temp_dir = tempdir().unwrap();
        let err = Manifest::load(&temp_dir.path().join("package.json")).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<NailError>(),
            Some(NailError::Manifest(_))
        ));
    }
}
