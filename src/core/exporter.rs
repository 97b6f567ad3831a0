//! Credential export.
//!
//! Reads one payload, extracts the record, then writes all three variables.
//! Nothing is written unless extraction succeeded.

use std::io::Read;

use tracing::debug;
use zeroize::Zeroizing;

use crate::core::credentials::{CredentialRecord, Schema};
use crate::core::environment::Environment;
use crate::error::Result;

/// Read a credential payload from `input` and export it into `env`.
///
/// The input is read to the end before parsing. Values are copied verbatim.
/// The raw payload buffer is zeroed before returning.
///
/// # Errors
///
/// Returns `Io` if reading fails, otherwise any error from
/// [`CredentialRecord::from_slice`]. On error `env` is untouched.
pub fn export_credentials<R, E>(
    mut input: R,
    env: &mut E,
    schema: Schema,
) -> Result<CredentialRecord>
where
    R: Read,
    E: Environment + ?Sized,
{
    let mut buf = Zeroizing::new(Vec::new());
    input.read_to_end(&mut buf)?;
    debug!(bytes = buf.len(), "read credential payload");

    let record = CredentialRecord::from_slice(&buf, schema)?;
    debug!(
        schema = %record.schema(),
        access_key_id = record.access_key_id(),
        "parsed credentials"
    );
    if let Some(expiration) = record.expiration() {
        debug!(expiration, "credentials expire");
    }

    apply(&record, env);
    Ok(record)
}

/// Write an already extracted record into `env`.
pub fn apply<E: Environment + ?Sized>(record: &CredentialRecord, env: &mut E) {
    for (key, value) in record.vars() {
        env.set_var(key, value);
        debug!(key, "set");
    }
}
