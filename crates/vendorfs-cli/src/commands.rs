use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use vendorfs_constants::{MANIFEST_ENV, SOURCES_ENV, VENDOR_DIR};
use vendorfs_core::BuildConfig;
use vendorfs_error::{Result, VendorError};

#[derive(Parser)]
#[command(name = "vendorfs")]
#[command(version)]
#[command(propagate_version = true)]
#[command(about = "Materializes a Go vendor/ tree from package and source manifests", long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
#[command(disable_help_subcommand = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Options used when no subcommand is given (same as `build`)
    #[command(flatten)]
    pub build: BuildArgs,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Builds the vendor tree from the manifest and source map
    #[command(alias = "link")]
    Build(BuildArgs),
    /// Lists manifest packages in processing order
    #[command(alias = "ls")]
    List(ManifestArgs),
    /// Shows help information for vendorfs or a specific command
    Help {
        /// The command to show help for (optional)
        #[arg()]
        command: Option<String>,
    },
}

#[derive(Args, Debug, Clone)]
pub struct ManifestArgs {
    /// Package manifest JSON (import path -> version/hash)
    #[arg(long = "manifest", env = MANIFEST_ENV, value_name = "PATH")]
    pub manifest: Option<PathBuf>,
    /// Source map JSON (import path -> source directory)
    #[arg(long = "sources", env = SOURCES_ENV, value_name = "PATH")]
    pub sources: Option<PathBuf>,
}

#[derive(Args, Debug, Clone)]
pub struct BuildArgs {
    #[command(flatten)]
    pub manifests: ManifestArgs,
    /// Directory the vendor tree is written to
    #[arg(long = "vendor-dir", value_name = "DIR", default_value = VENDOR_DIR)]
    pub vendor_dir: PathBuf,
    /// Enable debug mode for verbose output
    #[arg(long)]
    pub debug: bool,
    /// Only print errors
    #[arg(short = 'q', long)]
    pub quiet: bool,
}

impl ManifestArgs {
    /// Resolves both manifest locations, failing on whichever is unset.
    pub fn into_config(self) -> Result<BuildConfig> {
        let manifest = self.manifest.ok_or_else(|| {
            VendorError::MissingConfig(format!("package manifest (--manifest or ${MANIFEST_ENV})"))
        })?;
        let sources = self.sources.ok_or_else(|| {
            VendorError::MissingConfig(format!("source map (--sources or ${SOURCES_ENV})"))
        })?;
        Ok(BuildConfig::new(manifest, sources))
    }
}

impl BuildArgs {
    pub fn into_config(self) -> Result<BuildConfig> {
        Ok(self
            .manifests
            .into_config()?
            .with_vendor_dir(self.vendor_dir)
            .with_debug(self.debug))
    }
}
