use std::fs;
use std::io;
use std::path::Path;

use vendorfs_error::{Result, VendorError};
use vendorfs_manifest::{Manifest, SourceMap};
use vendorfs_store::{PathResolver, reconcile};
use vendorfs_utils::{descending_keys, ensure_parent_dir, import_path_violation};

use crate::report::{BuildReport, ConflictWarning, ProcessedPackage, VendorMode, WarningKind};

pub struct VendorBuilder<'a> {
    vendor_dir: &'a Path,
    debug: bool,
}

impl<'a> VendorBuilder<'a> {
    pub fn new(vendor_dir: &'a Path, debug: bool) -> Self {
        Self { vendor_dir, debug }
    }

    /// Vendors every manifest package, greatest import path first.
    pub fn build(&self, manifest: &Manifest, sources: &SourceMap) -> Result<BuildReport> {
        let keys = descending_keys(manifest.import_paths());
        self.build_keys(&keys, sources)
    }

    /// Vendors `keys` in the order given.
    pub fn build_keys(&self, keys: &[String], sources: &SourceMap) -> Result<BuildReport> {
        let mut report = BuildReport::default();
        let total = keys.len();

        for (index, import_path) in keys.iter().enumerate() {
            vendorfs_logger::progress(&format!("Vendoring {import_path}"), index + 1, total);
            let mode = self.vendor_package(import_path, sources, &mut report)?;
            report.processed.push(ProcessedPackage {
                import_path: import_path.clone(),
                mode,
            });
        }

        Ok(report)
    }

    fn vendor_package(
        &self,
        import_path: &str,
        sources: &SourceMap,
        report: &mut BuildReport,
    ) -> Result<VendorMode> {
        if let Some(reason) = import_path_violation(import_path) {
            return Err(VendorError::InvalidImportPath(
                import_path.to_string(),
                reason.to_string(),
            ));
        }

        let source = sources.resolve(import_path)?;
        let destination = PathResolver::vendor_destination(self.vendor_dir, import_path);

        ensure_parent_dir(&destination).map_err(|e| {
            VendorError::DirectoryCreationFailed(
                destination
                    .parent()
                    .unwrap_or(self.vendor_dir)
                    .display()
                    .to_string(),
                e.to_string(),
            )
        })?;

        if fs::symlink_metadata(&destination).is_ok() {
            vendorfs_logger::debug(
                &format!(
                    "{} already exists, merging {} into it",
                    destination.display(),
                    source.display()
                ),
                self.debug,
            );
            self.merge_into_existing(source, &destination, report)?;
            return Ok(VendorMode::Merged);
        }

        reconcile(source, &destination).map_err(|e| {
            VendorError::ReconcileFailed(
                source.display().to_string(),
                destination.display().to_string(),
                e.to_string(),
            )
        })?;

        Ok(VendorMode::Fresh)
    }

    /// Reconciles each top-level source entry separately. An entry that fails is retried
    /// one level down, child by child; anything still failing is recorded and skipped.
    fn merge_into_existing(
        &self,
        source: &Path,
        destination: &Path,
        report: &mut BuildReport,
    ) -> Result<()> {
        let entries = fs::read_dir(source).map_err(|e| {
            VendorError::ReconcileFailed(
                source.display().to_string(),
                destination.display().to_string(),
                e.to_string(),
            )
        })?;

        for entry in entries {
            let name = match entry {
                Ok(entry) => entry.file_name(),
                Err(e) => {
                    Self::record(report, WarningKind::UnlistableEntry, source, destination, &e);
                    continue;
                }
            };

            let inner_source = source.join(&name);
            let inner_destination = destination.join(&name);

            if let Err(e) = reconcile(&inner_source, &inner_destination) {
                vendorfs_logger::debug(
                    &format!(
                        "Conflict at {}: {e}; retrying its children",
                        inner_destination.display()
                    ),
                    self.debug,
                );
                Self::merge_children(&inner_source, &inner_destination, &e, report);
            }
        }

        Ok(())
    }

    // TODO: recurse further instead of stopping at the second level once nested
    // conflicting layouts show up in real manifests.
    fn merge_children(
        source: &Path,
        destination: &Path,
        conflict: &io::Error,
        report: &mut BuildReport,
    ) {
        let children = match fs::read_dir(source) {
            Ok(children) => children,
            Err(_) => {
                Self::record(
                    report,
                    WarningKind::UnlistableEntry,
                    source,
                    destination,
                    conflict,
                );
                return;
            }
        };

        for child in children {
            let name = match child {
                Ok(child) => child.file_name(),
                Err(e) => {
                    Self::record(report, WarningKind::UnlistableEntry, source, destination, &e);
                    continue;
                }
            };

            let child_source = source.join(&name);
            let child_destination = destination.join(&name);

            if let Err(e) = reconcile(&child_source, &child_destination) {
                Self::record(
                    report,
                    WarningKind::UnsupportedConflict,
                    &child_source,
                    &child_destination,
                    &e,
                );
            }
        }
    }

    fn record(
        report: &mut BuildReport,
        kind: WarningKind,
        source: &Path,
        destination: &Path,
        err: &io::Error,
    ) {
        let label = match kind {
            WarningKind::UnlistableEntry => "Skipping conflicting entry",
            WarningKind::UnsupportedConflict => "Unsupported nested conflict",
        };
        vendorfs_logger::warn(&format!(
            "{label} {} -> {}: {err}",
            source.display(),
            destination.display()
        ));

        report.warnings.push(ConflictWarning {
            kind,
            source: source.to_path_buf(),
            destination: destination.to_path_buf(),
            reason: err.to_string(),
        });
    }
}
