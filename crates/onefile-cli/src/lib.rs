//! Library surface of the onefile CLI.
//!
//! Exposed so integration tests (and embedders) can drive the same code path
//! as the binary.

pub mod cli;
pub mod dist;
pub mod error;
pub mod logger;
pub mod run;
