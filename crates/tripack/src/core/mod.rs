//! Core constants and the shared error type.
//!
//! - [`constants`]: codec alphabet layout and capacity limits
//! - [`error`]: [`error::Error`] and the [`error::Result`] alias

pub mod constants;
pub mod error;
