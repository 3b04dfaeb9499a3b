use serde::{Deserialize, Serialize};
use std::{collections::HashMap, path::Path};

use vendorfs_error::Result;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct PackageEntry {
    pub version: String,
    pub hash: String,
    #[serde(rename = "replaced", default, skip_serializing_if = "Option::is_none")]
    pub replaced_path: Option<String>,
}

/// Package list keyed by Go import path.
#[derive(Serialize, Deserialize, Debug, Default, Clone)]
#[serde(transparent)]
pub struct Manifest {
    pub packages: HashMap<String, PackageEntry>,
}

impl Manifest {
    pub fn load(path: &Path) -> Result<Self> {
        crate::read_json(path)
    }

    #[must_use]
    pub fn get(&self, import_path: &str) -> Option<&PackageEntry> {
        self.packages.get(import_path)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.packages.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }

    pub fn import_paths(&self) -> impl Iterator<Item = &str> {
        self.packages.keys().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use vendorfs_error::VendorError;

    #[test]
    fn test_load_manifest() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gomod2nix.json");
        fs::write(
            &path,
            r#"{
  "pkg/foo": {"version": "1.0", "hash": "x"},
  "pkg/bar": {"version": "v0.2.1", "hash": "sha256-abc", "replaced": "../bar"}
}"#,
        )
        .unwrap();

        let manifest = Manifest::load(&path).unwrap();
        assert_eq!(manifest.len(), 2);

        let foo = manifest.get("pkg/foo").unwrap();
        assert_eq!(foo.version, "1.0");
        assert_eq!(foo.hash, "x");
        assert_eq!(foo.replaced_path, None);

        let bar = manifest.get("pkg/bar").unwrap();
        assert_eq!(bar.replaced_path.as_deref(), Some("../bar"));
    }

    #[test]
    fn test_missing_manifest() {
        let dir = tempfile::tempdir().unwrap();
        let err = Manifest::load(&dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, VendorError::ManifestNotFound(_)));
    }

    #[test]
    fn test_malformed_manifest() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, r#"{"pkg/foo": {"version": 1}}"#).unwrap();

        let err = Manifest::load(&path).unwrap_err();
        assert!(matches!(err, VendorError::ManifestParseFailed(..)));
    }

    #[test]
    fn test_replaced_is_omitted_when_absent() {
        let entry = PackageEntry {
            version: "1.0".to_string(),
            hash: "x".to_string(),
            replaced_path: None,
        };
        let json = serde_json::to_string(&entry).unwrap();
        assert_eq!(json, r#"{"version":"1.0","hash":"x"}"#);
    }
}
