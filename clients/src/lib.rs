//! `tripack-clients`: command-line front end for the `tripack` crate.
//!
//! - [`config`]: bound resolution from flag, environment and TOML file
//! - [`commands`]: encode, decode, build, query, triples and demo

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod commands;
pub mod config;
