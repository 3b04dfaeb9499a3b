pub mod package;
pub mod sources;

pub use package::{Manifest, PackageEntry};
pub use sources::SourceMap;

use serde::de::DeserializeOwned;
use std::{fs, io, path::Path};
use vendorfs_error::{Result, VendorError};

/// Reads and deserializes one JSON manifest file.
pub(crate) fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let display = path.display().to_string();
    let content = fs::read_to_string(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => VendorError::ManifestNotFound(display.clone()),
        _ => VendorError::ManifestParseFailed(display.clone(), e.to_string()),
    })?;
    serde_json::from_str(&content).map_err(|e| VendorError::ManifestParseFailed(display, e.to_string()))
}
