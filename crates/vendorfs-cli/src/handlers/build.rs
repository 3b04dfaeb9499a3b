use anyhow::Result;
use owo_colors::OwoColorize;

use vendorfs_core::BuildReport;

use crate::commands::BuildArgs;

pub struct BuildHandler;

impl BuildHandler {
    pub fn handle_build(args: BuildArgs) -> Result<()> {
        vendorfs_logger::init_logger(args.quiet);
        if !args.quiet {
            Self::print_header();
        }

        let config = args.into_config()?;
        let report = vendorfs_core::build_vendor_tree(&config)?;

        Self::print_summary(&report);
        Ok(())
    }

    fn print_summary(report: &BuildReport) {
        if !report.warnings.is_empty() {
            vendorfs_logger::warn(&format!(
                "{} conflicting entries were left untouched",
                report.warnings.len()
            ));
        }

        vendorfs_logger::finish(&format!(
            "Vendored {} packages ({} merged into existing directories)",
            report.processed.len(),
            report.merged_count()
        ));
    }

    fn print_header() {
        println!(
            "{} {}",
            "vendorfs".bright_cyan().bold(),
            "build".bright_white()
        );
        println!();
    }
}
