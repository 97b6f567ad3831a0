//! Rendering exported variables for a calling shell.
//!
//! A child process cannot change its parent's environment, so pipelines that
//! need the credentials in their own shell re-source this output instead:
//!
//! ```text
//! eval "$(provider | stsenv --print sh)"
//! ```

use std::collections::BTreeMap;

use crate::core::credentials::CredentialRecord;
use crate::error::Result;

/// Output syntax for `--print`.
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// POSIX `export KEY='value'` lines
    Sh,
    /// fish `set -gx KEY 'value';` lines
    Fish,
    /// `.env` style `KEY=value` lines (dotenvy / docker compose quoting)
    Dotenv,
    /// A single JSON object
    Json,
}

/// Render the record's variables in `format`, one trailing newline included.
pub fn render(record: &CredentialRecord, format: Format) -> Result<String> {
    let vars = record.vars();
    let mut output = String::new();

    match format {
        Format::Sh => {
            for (key, value) in vars {
                output.push_str(&format!("export {}={}\n", key, sh_quote(value)));
            }
        }
        Format::Fish => {
            for (key, value) in vars {
                output.push_str(&format!("set -gx {} {};\n", key, fish_quote(value)));
            }
        }
        Format::Dotenv => {
            for (key, value) in vars {
                if needs_quotes(value) {
                    output.push_str(&format!("{}=\"{}\"\n", key, escape_env_value(value)));
                } else {
                    output.push_str(&format!("{}={}\n", key, value));
                }
            }
        }
        Format::Json => {
            let map: BTreeMap<&str, &str> = vars.into_iter().collect();
            output = serde_json::to_string_pretty(&map).map_err(std::io::Error::from)?;
            output.push('\n');
        }
    }

    Ok(output)
}

/// Single-quote for POSIX sh. Embedded quotes become `'\''`.
fn sh_quote(value: &str) -> String {
    format!("'{}'", value.replace('\'', r"'\''"))
}

/// Single-quote for fish, where `\` and `'` are the only escapes.
fn fish_quote(value: &str) -> String {
    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('\'');
    for ch in value.chars() {
        if ch == '\\' || ch == '\'' {
            quoted.push('\\');
        }
        quoted.push(ch);
    }
    quoted.push('\'');
    quoted
}

/// Values that a dotenv loader would split, strip or interpolate when bare.
fn needs_quotes(value: &str) -> bool {
    value.is_empty()
        || value.chars().any(|ch| ch.is_whitespace())
        || value.contains('#')
        || value.contains('=')
        || value.contains('"')
        || value.contains('\'')
        || value.contains('\\')
        || value.contains('$')
        || value.contains('`')
}

/// Escape for a double-quoted dotenv value. `$` is escaped so loaders that
/// interpolate `${VAR}` keep it literal.
fn escape_env_value(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());

    for ch in value.chars() {
        match ch {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            '$' => escaped.push_str("\\$"),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            _ => escaped.push(ch),
        }
    }

    escaped
}
