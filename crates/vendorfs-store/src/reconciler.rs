use std::{
    fs::{self, OpenOptions},
    io,
    path::Path,
};

pub struct Reconciler;

impl Reconciler {
    /// Makes `dst` mirror `src`.
    ///
    /// Directories are merged into an existing destination directory, symlinks are
    /// recreated with their verbatim target, and everything else is byte-copied into a
    /// newly created file. An existing file or symlink at `dst` is never overwritten and
    /// surfaces as an `AlreadyExists` error. The first error aborts the walk; work that
    /// already completed stays on disk.
    pub fn reconcile(src: &Path, dst: &Path) -> io::Result<()> {
        let metadata = fs::symlink_metadata(src).map_err(|e| annotate(e, "inspect", src))?;
        let file_type = metadata.file_type();

        if file_type.is_dir() {
            Self::ensure_directory(dst)?;
            Self::reconcile_entries(src, dst)
        } else if file_type.is_symlink() {
            Self::copy_symlink(src, dst)
        } else {
            Self::copy_file(src, dst)
        }
    }

    fn reconcile_entries(src: &Path, dst: &Path) -> io::Result<()> {
        for entry in fs::read_dir(src).map_err(|e| annotate(e, "read directory", src))? {
            let entry = entry.map_err(|e| annotate(e, "read directory", src))?;
            let name = entry.file_name();
            Self::reconcile(&src.join(&name), &dst.join(&name))?;
        }
        Ok(())
    }

    fn ensure_directory(dst: &Path) -> io::Result<()> {
        match fs::symlink_metadata(dst) {
            Ok(metadata) if metadata.is_dir() => return Ok(()),
            Ok(_) => {
                return Err(annotate(
                    io::Error::new(io::ErrorKind::AlreadyExists, "not a directory"),
                    "create directory",
                    dst,
                ));
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => return Err(annotate(e, "inspect", dst)),
        }

        vendorfs_logger::status(&format!("Creating {}", dst.display()));
        Self::create_dir_all(dst).map_err(|e| annotate(e, "create directory", dst))
    }

    #[cfg(target_family = "unix")]
    fn create_dir_all(dst: &Path) -> io::Result<()> {
        use std::os::unix::fs::DirBuilderExt;

        fs::DirBuilder::new()
            .recursive(true)
            .mode(vendorfs_constants::DIR_MODE)
            .create(dst)
    }

    #[cfg(not(target_family = "unix"))]
    fn create_dir_all(dst: &Path) -> io::Result<()> {
        fs::create_dir_all(dst)
    }

    fn copy_symlink(src: &Path, dst: &Path) -> io::Result<()> {
        let target = fs::read_link(src).map_err(|e| annotate(e, "read link", src))?;
        vendorfs_logger::status(&format!(
            "Linking {} -> {}",
            dst.display(),
            target.display()
        ));

        #[cfg(target_family = "unix")]
        std::os::unix::fs::symlink(&target, dst).map_err(|e| annotate(e, "create symlink", dst))?;

        #[cfg(target_family = "windows")]
        {
            let points_to_dir = fs::metadata(src).map(|m| m.is_dir()).unwrap_or(false);
            let result = if points_to_dir {
                std::os::windows::fs::symlink_dir(&target, dst)
            } else {
                std::os::windows::fs::symlink_file(&target, dst)
            };
            result.map_err(|e| annotate(e, "create symlink", dst))?;
        }

        Ok(())
    }

    fn copy_file(src: &Path, dst: &Path) -> io::Result<()> {
        vendorfs_logger::status(&format!("Copying {} -> {}", src.display(), dst.display()));

        let mut input = fs::File::open(src).map_err(|e| annotate(e, "open", src))?;
        let mut out = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(dst)
            .map_err(|e| annotate(e, "create", dst))?;

        io::copy(&mut input, &mut out).map_err(|e| annotate(e, "copy into", dst))?;
        Ok(())
    }
}

fn annotate(err: io::Error, action: &str, path: &Path) -> io::Error {
    io::Error::new(err.kind(), format!("{action} {}: {err}", path.display()))
}

pub fn reconcile(src: &Path, dst: &Path) -> io::Result<()> {
    Reconciler::reconcile(src, dst)
}
