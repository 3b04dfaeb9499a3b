use anyhow::Result;

use crate::commands::ManifestArgs;

pub struct ListHandler;

impl ListHandler {
    pub fn handle_list_packages(args: ManifestArgs) -> Result<()> {
        vendorfs_logger::init_logger(false);
        let config = args.into_config()?;
        vendorfs_core::list_packages(&config)
    }
}
