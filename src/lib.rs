//! Sequence and set algorithms over single-pass forward sequences.
//!
//! Every operation visits its input(s) at most once, front to back,
//! and returns either a scalar or a freshly allocated `Vec` that does
//! not alias the inputs. The equality-sensitive operators take a
//! pluggable [`Equivalence`] rule; the plain forms fall back to the
//! element type's own `Eq + Hash`.
//!
//! ```rust
//! use onepass::{distinct_by, except, single, AsciiCaseless};
//!
//! assert_eq!(except([1, 2, 2, 3, 4], [3, 4, 4, 5]), vec![1, 2]);
//! assert_eq!(distinct_by(["a", "b", "B", "c"], &AsciiCaseless), vec!["a", "b", "c"]);
//! assert_eq!(single([1, 2, 3], |n| *n == 2), Ok(2));
//! ```

pub mod algebra;
pub mod compare;
pub mod error;
pub mod filter;
pub mod quantify;
pub mod rule;
pub mod select;

mod seen;

pub use algebra::{
    distinct, distinct_by, except, except_by, intersect, intersect_by, union, union_by,
};
pub use compare::{sequence_equal, sequence_equal_by};
pub use error::{Result, SelectError};
pub use filter::{filter, skip_while, take_while};
pub use quantify::{all, any, contains, contains_by, count};
pub use rule::{ascii::AsciiCaseless, intrinsic::Intrinsic, keyed::ByKey, Equivalence};
pub use select::{element_at, first, last, single};
