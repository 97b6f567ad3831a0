//! Default command.
//!
//! Exports the credentials into this process's environment and optionally
//! prints them for the calling shell.

use std::io::{self, Write};

use console::Term;

use crate::cli::output;
use crate::core::credentials::Schema;
use crate::core::environment::ProcessEnv;
use crate::core::exporter::export_credentials;
use crate::core::format::{self, Format};
use crate::error::Result;

/// Read credentials from stdin and export them.
pub fn execute(schema: Schema, print: Option<Format>) -> Result<()> {
    let record = export_credentials(io::stdin().lock(), &mut ProcessEnv, schema)?;

    if let Some(fmt) = print {
        if Term::stdout().is_term() {
            output::warn("printing credentials to a terminal");
        }
        let rendered = format::render(&record, fmt)?;
        let mut stdout = io::stdout().lock();
        stdout.write_all(rendered.as_bytes())?;
        stdout.flush()?;
    }

    Ok(())
}
