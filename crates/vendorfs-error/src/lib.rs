use std::fmt;

#[derive(Debug)]
pub enum VendorError {
    ManifestNotFound(String),
    ManifestParseFailed(String, String),
    MissingConfig(String),
    SourceNotFound(String),
    InvalidImportPath(String, String),
    DirectoryCreationFailed(String, String),
    ReconcileFailed(String, String, String),
}

impl fmt::Display for VendorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ManifestNotFound(path) => {
                write!(f, "Manifest not found at {path}")
            }
            Self::ManifestParseFailed(path, reason) => {
                write!(f, "Failed to parse manifest {path}: {reason}")
            }
            Self::MissingConfig(what) => {
                write!(f, "Missing configuration: {what}")
            }
            Self::SourceNotFound(import_path) => {
                write!(f, "No source path recorded for '{import_path}'")
            }
            Self::InvalidImportPath(import_path, reason) => {
                write!(f, "Invalid import path '{import_path}': {reason}")
            }
            Self::DirectoryCreationFailed(path, reason) => {
                write!(f, "Failed to create directory '{path}': {reason}")
            }
            Self::ReconcileFailed(src, dst, reason) => {
                write!(f, "Failed to vendor {src} -> {dst}: {reason}")
            }
        }
    }
}

impl std::error::Error for VendorError {}

pub type Result<T> = std::result::Result<T, VendorError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reconcile_failure_names_both_paths() {
        let err = VendorError::ReconcileFailed(
            "/src/foo".to_string(),
            "vendor/foo".to_string(),
            "File exists".to_string(),
        );
        assert_eq!(
            err.to_string(),
            "Failed to vendor /src/foo -> vendor/foo: File exists"
        );
    }
}
