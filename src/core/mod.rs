//! Core library components.
//!
//! Payload parsing, environment targets and rendering, independent of the
//! command line.

pub mod constants;
pub mod credentials;
pub mod environment;
pub mod exporter;
pub mod format;
