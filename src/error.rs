//! Error types for stsenv.

use thiserror::Error;

use crate::core::credentials::Schema;

#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid JSON on stdin: {0}")]
    Parse(#[source] serde_json::Error),

    #[error("missing or invalid credential field ({schema} schema): {source}")]
    MissingField {
        schema: Schema,
        #[source]
        source: serde_json::Error,
    },

    #[error("credential payload must be a JSON object, got {0}")]
    NotAnObject(&'static str),

    #[error("credential value for {0} contains a NUL byte")]
    NulInValue(&'static str),

    #[error("no command specified after `--`")]
    NoCommand,

    #[error("failed to run `{program}`: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Suggestion shown under the error message, if any.
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            Error::Parse(_) | Error::NotAnObject(_) => {
                Some("pipe the credential provider's JSON output into stsenv")
            }
            Error::MissingField {
                schema: Schema::Flat,
                ..
            } => Some("expected AccessKeyId, SecretAccessKey and Token"),
            Error::MissingField {
                schema: Schema::Nested,
                ..
            } => Some(
                "expected Credentials.AccessKeyId, Credentials.SecretAccessKey \
                 and Credentials.SessionToken",
            ),
            Error::MissingField { .. } => None,
            Error::NulInValue(_) => Some("environment values cannot contain NUL bytes"),
            Error::NoCommand => Some("usage: stsenv -- <command> [args...]"),
            Error::Spawn { .. } => Some("check that the command exists and is on PATH"),
            Error::Io(_) => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
