//! `class-report` runs filter/map/reduce pipelines over an in-memory [`types::Roster`] of
//! students and prints the results, next to the same queries written as plain loops.
//!
//! The roster is fixed and immutable; every pipeline is an independent, order-preserving view
//! over it. The only edge case is averaging a grade nobody has, which yields `None` (and a
//! fallback line in the report) instead of dividing by zero.
//!
//! ## Modules
//!
//! - [`types`]: the [`types::Student`] record and the ordered [`types::Roster`]
//! - [`dataset`]: the built-in eight-student roster
//! - [`processing`]: filter/map/reduce primitives, predicates and loop-based equivalents
//! - [`report`]: the report generator, line emission, the full report and observer hooks
//! - [`logging`]: `tracing` subscriber setup for the binary
//! - [`error`]: error types
//!
//! ## Example
//!
//! ```rust
//! use class_report::dataset::class_roster;
//! use class_report::report::ReportGenerator;
//!
//! let roster = class_roster();
//! let report = ReportGenerator::new(&roster);
//!
//! assert_eq!(report.names_with_grade("4"), vec!["Anna", "Olle", "Tomas"]);
//! assert_eq!(report.count("3"), 2);
//! assert_eq!(report.total_age("3"), 50);
//! assert_eq!(report.average_age("3"), Some(25.0));
//! assert_eq!(report.average_age("X"), None);
//! ```
//!
//! ### Reduce operations
//!
//! - [`processing::ReduceOp::Count`] and [`processing::ReduceOp::Sum`]: always present, `0` on
//!   empty input
//! - [`processing::ReduceOp::Min`], [`processing::ReduceOp::Max`] and
//!   [`processing::ReduceOp::Mean`]: `None` on empty input

pub mod dataset;
pub mod error;
pub mod logging;
pub mod processing;
pub mod report;
pub mod types;

pub use error::{ReportError, ReportResult};
