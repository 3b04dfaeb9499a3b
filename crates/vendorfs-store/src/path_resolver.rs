use std::path::{Path, PathBuf};

pub struct PathResolver;

impl PathResolver {
    /// `<vendor_dir>/<import_path>`, one component per `/`-separated segment.
    #[must_use]
    pub fn vendor_destination(vendor_dir: &Path, import_path: &str) -> PathBuf {
        import_path
            .split('/')
            .filter(|segment| !segment.is_empty() && *segment != ".")
            .fold(vendor_dir.to_path_buf(), |path, segment| path.join(segment))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vendor_destination() {
        assert_eq!(
            PathResolver::vendor_destination(Path::new("vendor"), "github.com/foo/bar"),
            PathBuf::from("vendor/github.com/foo/bar")
        );
    }

    #[test]
    fn test_vendor_destination_cleans_segments() {
        assert_eq!(
            PathResolver::vendor_destination(Path::new("vendor"), "./pkg//foo/"),
            PathBuf::from("vendor/pkg/foo")
        );
    }
}
