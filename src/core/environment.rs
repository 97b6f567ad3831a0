//! Environment targets.
//!
//! Abstracts where exported variables land so the exporter can write to the
//! current process, a child command, or a plain map.

use std::collections::BTreeMap;
use std::process::Command;

/// A writable table of environment variables.
pub trait Environment {
    /// Set `key` to `value`, replacing any previous value.
    fn set_var(&mut self, key: &str, value: &str);
}

/// The current process's environment.
///
/// Changes are inherited by children spawned afterwards and vanish when the
/// process exits. `std::env::set_var` panics on a NUL byte; records coming
/// from [`CredentialRecord`](crate::core::credentials::CredentialRecord)
/// never contain one.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessEnv;

impl Environment for ProcessEnv {
    fn set_var(&mut self, key: &str, value: &str) {
        std::env::set_var(key, value);
    }
}

/// An in-memory, name-ordered environment.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MemoryEnv {
    vars: BTreeMap<String, String>,
}

impl MemoryEnv {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.vars.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl Environment for MemoryEnv {
    fn set_var(&mut self, key: &str, value: &str) {
        self.vars.insert(key.to_string(), value.to_string());
    }
}

/// A child process that has not been spawned yet.
impl Environment for Command {
    fn set_var(&mut self, key: &str, value: &str) {
        self.env(key, value);
    }
}
