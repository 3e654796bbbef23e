//! `sptools` is a small toolkit for preparing input data tables and steering
//! files for the Spectrum plotting tool
//!
#![doc = include_str!("../readme.md")]
#![deny(missing_docs, missing_debug_implementations)]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

// Re-exports of toolkit crates.
#[doc(inline)]
pub use sptools_utils as utils;

#[cfg(feature = "table")]
#[cfg_attr(docsrs, doc(cfg(feature = "table")))]
#[doc(inline)]
pub use sptools_table as table;

#[cfg(feature = "steering")]
#[cfg_attr(docsrs, doc(cfg(feature = "steering")))]
#[doc(inline)]
pub use sptools_steering as steering;
