pub mod builder;
pub mod config;
pub mod list;
pub mod report;

pub use builder::VendorBuilder;
pub use config::BuildConfig;
pub use list::{ListManager, ListedPackage};
pub use report::{BuildReport, ConflictWarning, ProcessedPackage, VendorMode, WarningKind};

use vendorfs_error::Result;
use vendorfs_manifest::{Manifest, SourceMap};

/// Loads both manifests named by `config` and vendors every package.
pub fn vendor_all(config: &BuildConfig) -> Result<BuildReport> {
    let manifest = Manifest::load(&config.manifest_path)?;
    let sources = SourceMap::load(&config.sources_path)?;

    vendorfs_logger::debug(
        &format!(
            "Loaded {} packages from {}",
            manifest.len(),
            config.manifest_path.display()
        ),
        config.debug,
    );

    VendorBuilder::new(config.vendor_dir(), config.debug).build(&manifest, &sources)
}

pub fn build_vendor_tree(config: &BuildConfig) -> anyhow::Result<BuildReport> {
    vendor_all(config).map_err(|e| anyhow::anyhow!(e))
}

pub fn list_packages(config: &BuildConfig) -> anyhow::Result<()> {
    let manager = ListManager;
    manager
        .list_packages(config)
        .map_err(|e| anyhow::anyhow!(e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use vendorfs_error::VendorError;

    #[test]
    fn test_vendor_all_from_manifest_files() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("src/foo");
        fs::create_dir_all(src.join("internal")).unwrap();
        fs::write(src.join("go.mod"), "module pkg/foo\n").unwrap();
        fs::write(src.join("internal/x.go"), "package internal\n").unwrap();

        let manifest_path = dir.path().join("gomod2nix.json");
        let sources_path = dir.path().join("sources.json");
        fs::write(
            &manifest_path,
            r#"{"pkg/foo": {"version": "1.0", "hash": "x"}}"#,
        )
        .unwrap();
        fs::write(
            &sources_path,
            format!(r#"{{"pkg/foo": {:?}}}"#, src.display().to_string()),
        )
        .unwrap();

        let vendor = dir.path().join("vendor");
        let config = BuildConfig::new(&manifest_path, &sources_path).with_vendor_dir(&vendor);
        let report = vendor_all(&config).unwrap();

        assert_eq!(report.processed_paths(), vec!["pkg/foo"]);
        assert_eq!(
            fs::read(vendor.join("pkg/foo/go.mod")).unwrap(),
            fs::read(src.join("go.mod")).unwrap()
        );
        assert_eq!(
            fs::read(vendor.join("pkg/foo/internal/x.go")).unwrap(),
            fs::read(src.join("internal/x.go")).unwrap()
        );
    }

    #[test]
    fn test_vendor_all_missing_manifest() {
        let dir = tempfile::tempdir().unwrap();
        let config = BuildConfig::new(dir.path().join("nope.json"), dir.path().join("s.json"));

        assert!(matches!(
            vendor_all(&config),
            Err(VendorError::ManifestNotFound(_))
        ));
    }
}
