use std::process::ExitCode;

fn main() -> ExitCode {
    match vendorfs_cli::run_cli() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            vendorfs_logger::error(&format!("{e:#}"));
            ExitCode::FAILURE
        }
    }
}
