//! Common infrastructure shared by the cryypt digest crates
//!
//! This crate currently provides the structured logging setup used by
//! library code and test binaries alike.

pub mod logging;

pub use logging::LoggingTransformer;
