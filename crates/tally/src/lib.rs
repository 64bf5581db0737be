//! # Tally
//!
//! Small collection utilities with precise contracts.
//!
//! The two core operations are:
//!
//! - **Extremum search** ([`find_max_by_key`], [`try_find_max_by_key`]) -
//!   the first element with the greatest key, or `None` for empty input
//! - **Prefixed printing** ([`PrefixedLinePrinter`], [`print_with_prefix`]) -
//!   one `"<prefix> <line>"` line per input string, in order
//!
//! Alongside them sit a few leaf helpers for joining collections, splitting
//! text, counting insertions and validating users before they are saved.
//!
//! # Quick Start
//!
//! ```
//! use tally::{PrefixedLinePrinter, find_oldest};
//! use tally_types::Person;
//!
//! let people = vec![Person::new("Alice", 29), Person::new("Bob", 31)];
//! assert_eq!(find_oldest(&people), Some(&people[1]));
//!
//! let mut printer = PrefixedLinePrinter::new(Vec::new(), "P");
//! printer.print_all(["x", "y"]).unwrap();
//! assert_eq!(printer.into_inner(), b"P x\nP y\n");
//! ```

mod error;

pub mod counter;
pub mod counting;
pub mod extremum;
pub mod join;
pub mod lines;
pub mod logging;
pub mod text;
pub mod user;

pub use error::{Error, Result};
pub use extremum::{find_max_by_key, find_oldest, try_find_max_by_key};
pub use join::{JoinFormat, join_to_string};
pub use lines::{PrefixedLinePrinter, format_prefixed, print_with_prefix};

pub use tally_types::{Person, User, UserId};

#[cfg(test)]
mod tests;
