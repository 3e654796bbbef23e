//! Steering-file configuration model for the Spectrum plotting tool
//!
//! A steering file is bracketed sections of `key = value` lines. Each section
//! is modelled as a plain struct with typed fields ([Gen], [Graph], [Plot])
//! whose serialization writes only the fields that differ from their type
//! default (`false`, `0`, empty); the plotting tool applies its own defaults
//! for omitted keys, so a sparse file is the compatible form.
//!
//! Fields are emitted in declaration order, deterministically, to keep the
//! generated files diffable.
//!
//! # Quickstart example
//!
//! ```rust
//! use sptools_steering::{Gen, Graph, Plot, Steering};
//!
//! let mut graph = Graph::default();
//! graph.x_legend = 0.45;
//!
//! let mut plot = Plot::new(0);
//! plot.plot_type = "data".to_string();
//! plot.push_ratio("data / !data", "data_0 / data_0").unwrap();
//!
//! // Any Write target: a steering file, a buffer, ...
//! let mut out = Vec::new();
//! Gen::default().write(&mut out).unwrap();
//! graph.write(&mut out).unwrap();
//! plot.write(&mut out).unwrap();
//! ```

mod error;
mod gen;
mod graph;
mod plot;
mod section;
mod value;

#[doc(inline)]
pub use error::{Error, Result};

#[doc(inline)]
pub use gen::Gen;

#[doc(inline)]
pub use graph::Graph;

#[doc(inline)]
pub use plot::{BandStyle, Plot, Ratio, MAX_RATIOS};

#[doc(inline)]
pub use section::{Section, Steering};

#[doc(inline)]
pub use value::Value;
