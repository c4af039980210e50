//! Built-in site knowledge.
//!
//! Goal: keep the probed-site list centralized so the checker and the CLI
//! behave consistently (convention over configuration).

pub mod registry;

pub use registry::builtin_sites;
