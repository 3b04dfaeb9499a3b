pub mod build;
pub mod help;
pub mod list;

pub use build::BuildHandler;
pub use help::HelpHandler;
pub use list::ListHandler;
