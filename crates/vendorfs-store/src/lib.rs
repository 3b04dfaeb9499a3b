pub mod path_resolver;
pub mod reconciler;

pub use path_resolver::PathResolver;
pub use reconciler::Reconciler;

pub use reconciler::reconcile;
