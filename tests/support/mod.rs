//! Test support utilities for stsenv integration tests.
//!
//! Provides payload fixtures and helper commands.

#![allow(dead_code)]

pub mod assertions;
pub mod commands;
pub mod fixtures;

#[allow(unused_imports)]
pub use assertions::*;
#[allow(unused_imports)]
pub use fixtures::*;

/// Test environment for driving the stsenv binary.
///
/// Every command it builds starts from a clean slate: inherited stsenv and
/// AWS variables are removed so the host cannot leak into assertions.
#[derive(Default)]
pub struct Test;

impl Test {
    pub fn new() -> Self {
        Self
    }
}
