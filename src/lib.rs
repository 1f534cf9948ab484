//! Library backing the `nimbus` server administration tool.
//!
//! The binary in `src/main.rs` is a thin clap wrapper; all maintenance
//! operations live here so they can be driven directly from tests.

pub mod config;
pub mod mimetype;

pub use config::ServerPaths;
