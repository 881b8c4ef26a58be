//! Report runner for the storcat device catalog
//!
//! This crate drives the device crates through a single entry point: it
//! owns an ordered list of devices and renders the catalog report into any
//! writable sink.
//!
//! # Examples
//!
//! ```rust
//! use storcat_report::{builtin_catalog, ReportRunner};
//!
//! # fn example() -> storcat_types::Result<()> {
//! let runner = ReportRunner::new(builtin_catalog());
//! let mut out = Vec::new();
//! runner.write_report(&mut out)?;
//! # Ok(())
//! # }
//! ```

#![deny(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod catalog;
pub mod runner;

pub use catalog::builtin_catalog;
pub use runner::{ReportRunner, COPY_DATA_SIZE_MB};
