pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const DESCRIPTION: &str = "Materializes a Go vendor/ tree from package and source manifests";
pub const REPOSITORY_URL: &str = "https://github.com/vendorfs/vendorfs";
pub const BIN_NAME: &str = "vendorfs";

/// Environment variable naming the package manifest JSON file.
pub const MANIFEST_ENV: &str = "jsonPath";
/// Environment variable naming the source map JSON file.
pub const SOURCES_ENV: &str = "sourcesPath";

pub const VENDOR_DIR: &str = "vendor";
pub const DIR_MODE: u32 = 0o755;

pub const COMMANDS: &[(&str, &str, &[&str])] = &[
    (
        "build",
        "Builds the vendor tree from the manifest and source map",
        &["link"],
    ),
    (
        "list",
        "Lists manifest packages in processing order",
        &["ls"],
    ),
    (
        "help",
        "Shows help information for vendorfs or a specific command",
        &[],
    ),
];
pub const EXAMPLES: &[(&str, &str)] = &[
    ("vendorfs", "Build vendor/ using $jsonPath and $sourcesPath"),
    (
        "vendorfs build --manifest gomod2nix.json --sources sources.json",
        "Build with explicit manifest paths",
    ),
    ("vendorfs build --vendor-dir out/vendor", "Build into another directory"),
    ("vendorfs list", "Show the processing order"),
];
