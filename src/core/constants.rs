//! Constants used throughout stsenv.
//!
//! Centralizes variable names and JSON keys.

/// Variable receiving the access key id.
pub const ACCESS_KEY_ID_VAR: &str = "AWS_ACCESS_KEY_ID";

/// Variable receiving the secret access key.
pub const SECRET_ACCESS_KEY_VAR: &str = "AWS_SECRET_ACCESS_KEY";

/// Variable receiving the session token.
pub const SESSION_TOKEN_VAR: &str = "AWS_SESSION_TOKEN";

/// Top-level key wrapping the nested (STS) payload.
pub const NESTED_KEY: &str = "Credentials";

/// Log filter override (e.g. `STSENV_LOG=debug`).
pub const LOG_ENV: &str = "STSENV_LOG";

/// Schema override for `--schema`.
pub const SCHEMA_ENV: &str = "STSENV_SCHEMA";
