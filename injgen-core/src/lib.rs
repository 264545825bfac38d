//! Core utilities and types for the injgen generator.
//!
//! This crate provides the string helpers and Go identifier rules shared
//! across the injgen crates.

mod go;
mod utils;

// Go identifier rules
pub use go::{
    GO_KEYWORDS, go_package_name, is_go_identifier, is_go_keyword, sanitize_package_segment,
};
// String utilities
pub use utils::{lower_first, to_pascal_case, upper_first};
