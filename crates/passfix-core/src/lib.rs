//! Shared types for the passfix password checker.
//!
//! - [`character`] -- ASCII classification into the required character classes
//! - [`policy`] -- Length bounds a strong password must respect

pub mod character;
pub mod policy;

pub use character::CharClass;
pub use policy::{LengthPolicy, PolicyError};
