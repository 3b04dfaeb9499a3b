pub mod key_order;
pub mod path_utils;

pub use key_order::descending_keys;
pub use path_utils::*;
