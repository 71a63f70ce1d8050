//! In-memory roster transformations.
//!
//! Currently implemented:
//!
//! - [`filter()`]: student filtering by predicate
//! - [`map()`]: projection by user function
//! - [`reduce()`]: common reductions (count/sum/min/max/mean)
//! - [`predicate`]: reusable, composable predicates such as [`has_grade`]
//! - [`imperative`]: the same grade queries written as plain loops
//!
//! ## Example: filter → map → reduce
//!
//! ```rust
//! use class_report::processing::{filter, has_grade, map, reduce, ReduceOp, Value};
//! use class_report::types::{Roster, Student};
//!
//! let roster = Roster::new(vec![
//!     Student::new("Kalle", 29, "3"),
//!     Student::new("Max", 22, "U"),
//!     Student::new("Per", 21, "3"),
//! ]);
//!
//! let graded = filter(&roster, has_grade("3"));
//! let ages = map(&graded, |s| s.age);
//!
//! assert_eq!(reduce(ages.iter().copied(), ReduceOp::Sum), Some(Value::Int64(50)));
//! assert_eq!(reduce(ages, ReduceOp::Mean), Some(Value::Float64(25.0)));
//! ```

pub mod filter;
pub mod imperative;
pub mod map;
pub mod predicate;
pub mod reduce;

pub use filter::filter;
pub use map::map;
pub use predicate::{has_grade, StudentPredicate};
pub use reduce::{reduce, AgeSummary, ReduceOp, Value};
