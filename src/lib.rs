//! # Named Collector
//!
//! A named, insertion-ordered collection of text items and a small CLI that
//! prints one.
//!
//! ## Features
//!
//! - `json` (default) - serde support for [`NamedCollector`] and a JSON report format
//!
//! ## Example
//!
//! ```rust
//! use named_collector::NamedCollector;
//!
//! let mut example = NamedCollector::new("test");
//! for i in 0..5 {
//!     example.add_item(format!("item_{i}"));
//! }
//!
//! assert_eq!(example.items().len(), 5);
//! assert_eq!(
//!     example.to_string(),
//!     "Items in test:\n  - item_0\n  - item_1\n  - item_2\n  - item_3\n  - item_4\n"
//! );
//! ```

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod collections;
pub mod driver;
pub mod error;
pub mod report;

pub use collections::NamedCollector;
pub use driver::{build_collector, item_label, DriverConfig};
pub use error::{CollectorError, Result};
pub use report::{render_report, write_report, ReportFormat};
