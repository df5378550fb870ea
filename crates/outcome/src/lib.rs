//! # Tessera Outcome
//!
//! A result container that refuses to lose information:
//!
//! - a failure always carries **at least one** error, so callers can report
//!   every problem at once instead of fixing them one by one;
//! - either variant may carry warnings, and warnings are either absent or
//!   non-empty, never an empty list.
//!
//! ```rust
//! use tessera_outcome::{NonEmpty, Outcome};
//!
//! let clamped: Outcome<u32, &str, &str> = Outcome::ok(100, ["value clamped to 100"]);
//! assert!(clamped.is_ok());
//! assert_eq!(clamped.warnings().map(NonEmpty::len), Some(1));
//!
//! let failed: Outcome<u32, &str> = Outcome::err("too large", None);
//! assert_eq!(failed.errors().map(NonEmpty::len), Some(1));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms)]

pub mod error;
pub mod non_empty;
pub mod outcome;

pub use error::InvariantViolation;
pub use non_empty::{NonEmpty, ensure, is_non_empty, make, nonempty, try_from_vec};
pub use outcome::{Errors, Never, Outcome};
