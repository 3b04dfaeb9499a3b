use std::path::{Path, PathBuf};

use vendorfs_constants::VENDOR_DIR;

/// Inputs of a single run, resolved once at startup.
#[derive(Debug, Clone)]
pub struct BuildConfig {
    pub manifest_path: PathBuf,
    pub sources_path: PathBuf,
    pub vendor_dir: PathBuf,
    pub debug: bool,
}

impl BuildConfig {
    pub fn new(manifest_path: impl Into<PathBuf>, sources_path: impl Into<PathBuf>) -> Self {
        Self {
            manifest_path: manifest_path.into(),
            sources_path: sources_path.into(),
            vendor_dir: PathBuf::from(VENDOR_DIR),
            debug: false,
        }
    }

    #[must_use]
    pub fn with_vendor_dir(mut self, vendor_dir: impl Into<PathBuf>) -> Self {
        self.vendor_dir = vendor_dir.into();
        self
    }

    #[must_use]
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    #[must_use]
    pub fn vendor_dir(&self) -> &Path {
        &self.vendor_dir
    }
}
