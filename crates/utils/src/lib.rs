//! Common utility for extended `std` types
//!
//! These are left public for convenience.
//!
//! For example, fixed-precision decimal formatting is useful to every writer
//! in the toolkit.

// Alias for the format! macro
pub use std::format as f;

// Modules
mod value_ext;

// Flatten
pub use value_ext::ValueExt;
