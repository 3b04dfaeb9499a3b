use serde::{Deserialize, Serialize};
use std::{
    collections::HashMap,
    path::{Path, PathBuf},
};

use vendorfs_error::{Result, VendorError};

/// Where each import path's real content lives on disk.
#[derive(Serialize, Deserialize, Debug, Default, Clone)]
#[serde(transparent)]
pub struct SourceMap {
    pub sources: HashMap<String, PathBuf>,
}

impl SourceMap {
    pub fn load(path: &Path) -> Result<Self> {
        crate::read_json(path)
    }

    pub fn resolve(&self, import_path: &str) -> Result<&Path> {
        self.sources
            .get(import_path)
            .map(PathBuf::as_path)
            .ok_or_else(|| VendorError::SourceNotFound(import_path.to_string()))
    }

    pub fn insert(&mut self, import_path: &str, source: impl Into<PathBuf>) {
        self.sources.insert(import_path.to_string(), source.into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_load_and_resolve() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sources.json");
        fs::write(&path, r#"{"pkg/foo": "/tmp/src/foo", "pkg/bar": "rel/bar"}"#).unwrap();

        let sources = SourceMap::load(&path).unwrap();
        assert_eq!(sources.resolve("pkg/foo").unwrap(), Path::new("/tmp/src/foo"));
        assert_eq!(sources.resolve("pkg/bar").unwrap(), Path::new("rel/bar"));
    }

    #[test]
    fn test_resolve_unknown_key() {
        let sources = SourceMap::default();
        let err = sources.resolve("pkg/missing").unwrap_err();
        assert!(matches!(err, VendorError::SourceNotFound(key) if key == "pkg/missing"));
    }

    #[test]
    fn test_non_string_value_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sources.json");
        fs::write(&path, r#"{"pkg/foo": 3}"#).unwrap();

        assert!(matches!(
            SourceMap::load(&path),
            Err(VendorError::ManifestParseFailed(..))
        ));
    }
}
