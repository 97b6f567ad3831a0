//! Run command.
//!
//! Executes a command with the exported credentials injected as environment
//! variables.

use std::io;
use std::process::Command;

use tracing::debug;

use crate::core::credentials::Schema;
use crate::core::exporter::export_credentials;
use crate::error::{Error, Result};

/// Read credentials from stdin and run `command` with them.
///
/// Returns the child's exit code. The child is never started if the payload
/// cannot be extracted.
pub fn execute(command: &[String], schema: Schema) -> Result<i32> {
    let (program, args) = command.split_first().ok_or(Error::NoCommand)?;

    let mut cmd = Command::new(program);
    cmd.args(args);
    export_credentials(io::stdin().lock(), &mut cmd, schema)?;

    debug!(program = program.as_str(), args = args.len(), "spawning");
    let status = cmd.status().map_err(|source| Error::Spawn {
        program: program.clone(),
        source,
    })?;

    // Killed by a signal: no code to pass through
    Ok(status.code().unwrap_or(1))
}
