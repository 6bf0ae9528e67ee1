//! Strong-password edit counting.
//!
//! Computes the minimum number of single-character inserts, deletes and
//! replacements that turn an arbitrary string into one that
//!
//! - is between the policy's minimum and maximum length (6 and 20 by default),
//! - contains an ASCII lowercase letter, uppercase letter and digit,
//! - has no run of three or more identical consecutive characters.
//!
//! # Architecture
//!
//! - [`length`] -- Inserts or deletes forced by the length bounds
//! - [`classes`] -- Missing required character classes
//! - [`runs`] -- Maximal runs of identical characters and their replacement cost
//! - [`combine`] -- Merges the three signals, sharing operations where one edit fixes several problems
//! - [`checker`] -- `PasswordChecker` handle and the serializable `Assessment`
//!
//! ```
//! assert_eq!(passfix_check::evaluate(""), 6);
//! assert_eq!(passfix_check::evaluate("1337C0d3"), 0);
//! ```

pub mod checker;
pub mod classes;
pub mod combine;
pub mod length;
pub mod runs;

pub use checker::{Assessment, PasswordChecker, evaluate};
pub use passfix_core::{CharClass, LengthPolicy, PolicyError};
