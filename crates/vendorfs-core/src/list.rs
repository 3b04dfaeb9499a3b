use owo_colors::OwoColorize;
use std::path::PathBuf;

use vendorfs_error::Result;
use vendorfs_manifest::{Manifest, SourceMap};
use vendorfs_utils::descending_keys;

use crate::config::BuildConfig;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListedPackage {
    pub import_path: String,
    pub version: String,
    pub replaced_path: Option<String>,
    pub source: Option<PathBuf>,
}

pub struct ListManager;

impl ListManager {
    pub fn list_packages(&self, config: &BuildConfig) -> Result<()> {
        let manifest = Manifest::load(&config.manifest_path)?;
        let sources = SourceMap::load(&config.sources_path)?;

        let listing = self.collect(&manifest, &sources);
        if listing.is_empty() {
            vendorfs_logger::info("No packages in manifest.");
            return Ok(());
        }

        self.show(&listing);
        Ok(())
    }

    /// Packages in the order a build would vendor them.
    #[must_use]
    pub fn collect(&self, manifest: &Manifest, sources: &SourceMap) -> Vec<ListedPackage> {
        descending_keys(manifest.import_paths())
            .into_iter()
            .filter_map(|import_path| {
                let entry = manifest.get(&import_path)?;
                Some(ListedPackage {
                    version: entry.version.clone(),
                    replaced_path: entry.replaced_path.clone(),
                    source: sources.resolve(&import_path).ok().map(PathBuf::from),
                    import_path,
                })
            })
            .collect()
    }

    fn show(&self, listing: &[ListedPackage]) {
        vendorfs_logger::info(&format!("{} packages, in processing order:", listing.len()));

        for pkg in listing {
            let source = match &pkg.source {
                Some(path) => path.display().to_string().bright_black().to_string(),
                None => "missing source".bright_red().to_string(),
            };
            let replaced = pkg
                .replaced_path
                .as_ref()
                .map(|path| format!(" => {path}").bright_yellow().to_string())
                .unwrap_or_default();

            println!(
                "  {} {}{} {}",
                pkg.import_path.bright_white(),
                pkg.version.bright_cyan(),
                replaced,
                source
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use vendorfs_manifest::PackageEntry;

    fn entry(version: &str, replaced: Option<&str>) -> PackageEntry {
        PackageEntry {
            version: version.to_string(),
            hash: "sha256-x".to_string(),
            replaced_path: replaced.map(String::from),
        }
    }

    #[test]
    fn test_collect_orders_and_flags_missing_sources() {
        let manifest = Manifest {
            packages: HashMap::from([
                ("a/b".to_string(), entry("v1.0.0", None)),
                ("a/b/c".to_string(), entry("v0.3.0", Some("../c"))),
            ]),
        };
        let mut sources = SourceMap::default();
        sources.insert("a/b", "/src/ab");

        let listing = ListManager.collect(&manifest, &sources);

        assert_eq!(
            listing,
            vec![
                ListedPackage {
                    import_path: "a/b/c".to_string(),
                    version: "v0.3.0".to_string(),
                    replaced_path: Some("../c".to_string()),
                    source: None,
                },
                ListedPackage {
                    import_path: "a/b".to_string(),
                    version: "v1.0.0".to_string(),
                    replaced_path: None,
                    source: Some(PathBuf::from("/src/ab")),
                },
            ]
        );
    }
}
