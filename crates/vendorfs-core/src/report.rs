use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VendorMode {
    /// The destination did not exist and was reconciled as a whole.
    Fresh,
    /// The destination already existed and was merged entry by entry.
    Merged,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessedPackage {
    pub import_path: String,
    pub mode: VendorMode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WarningKind {
    /// A conflicting entry could not be opened as a directory for the fallback pass.
    UnlistableEntry,
    /// A conflict one level below a top-level entry; no deeper fallback is attempted.
    UnsupportedConflict,
}

#[derive(Debug, Clone)]
pub struct ConflictWarning {
    pub kind: WarningKind,
    pub source: PathBuf,
    pub destination: PathBuf,
    pub reason: String,
}

#[derive(Debug, Default)]
pub struct BuildReport {
    pub processed: Vec<ProcessedPackage>,
    pub warnings: Vec<ConflictWarning>,
}

impl BuildReport {
    #[must_use]
    pub fn processed_paths(&self) -> Vec<&str> {
        self.processed
            .iter()
            .map(|pkg| pkg.import_path.as_str())
            .collect()
    }

    #[must_use]
    pub fn mode_of(&self, import_path: &str) -> Option<VendorMode> {
        self.processed
            .iter()
            .find(|pkg| pkg.import_path == import_path)
            .map(|pkg| pkg.mode)
    }

    #[must_use]
    pub fn merged_count(&self) -> usize {
        self.processed
            .iter()
            .filter(|pkg| pkg.mode == VendorMode::Merged)
            .count()
    }
}
