//! # Number types
//!
//! Exact number types and the traits describing them.
pub mod rational;
pub mod traits;
