//! Credential payload parsing.
//!
//! Credential providers print one of two JSON shapes:
//!
//! ```text
//! flat:    {"AccessKeyId": "..", "SecretAccessKey": "..", "Token": ".."}
//! nested:  {"Credentials": {"AccessKeyId": "..", "SecretAccessKey": "..", "SessionToken": ".."}}
//! ```
//!
//! The flat shape is what the container credentials endpoint returns, the
//! nested one is `aws sts assume-role` output.

use std::fmt;

use serde::Deserialize;
use serde_json::Value;
use zeroize::{Zeroize, Zeroizing};

use crate::core::constants::{
    ACCESS_KEY_ID_VAR, NESTED_KEY, SECRET_ACCESS_KEY_VAR, SESSION_TOKEN_VAR,
};
use crate::error::{Error, Result};

/// Which JSON shape to read the credentials from.
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Schema {
    /// Nested if a top-level `Credentials` key exists, flat otherwise
    #[default]
    Auto,
    /// Top-level `AccessKeyId`, `SecretAccessKey`, `Token`
    Flat,
    /// `Credentials.AccessKeyId`, `Credentials.SecretAccessKey`, `Credentials.SessionToken`
    Nested,
}

impl Schema {
    /// Resolve `Auto` against a parsed document.
    ///
    /// # Errors
    ///
    /// Returns `NotAnObject` if the document is not a JSON object.
    pub fn resolve(self, doc: &Value) -> Result<Schema> {
        let obj = doc
            .as_object()
            .ok_or_else(|| Error::NotAnObject(json_kind(doc)))?;

        Ok(match self {
            Schema::Auto if obj.contains_key(NESTED_KEY) => Schema::Nested,
            Schema::Auto => Schema::Flat,
            explicit => explicit,
        })
    }
}

impl fmt::Display for Schema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Schema::Auto => "auto",
            Schema::Flat => "flat",
            Schema::Nested => "nested",
        };
        f.write_str(name)
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "PascalCase")]
struct FlatPayload {
    access_key_id: String,
    secret_access_key: String,
    token: String,
    #[serde(default)]
    expiration: Option<Value>,
}

#[derive(Deserialize)]
#[serde(rename_all = "PascalCase")]
struct NestedPayload {
    credentials: StsCredentials,
}

#[derive(Deserialize)]
#[serde(rename_all = "PascalCase")]
struct StsCredentials {
    access_key_id: String,
    secret_access_key: String,
    session_token: String,
    #[serde(default)]
    expiration: Option<Value>,
}

/// Temporary credentials extracted from one payload.
///
/// Secret material is wiped from memory on drop.
#[derive(Clone)]
pub struct CredentialRecord {
    access_key_id: Zeroizing<String>,
    secret_access_key: Zeroizing<String>,
    session_token: Zeroizing<String>,
    expiration: Option<String>,
    schema: Schema,
}

impl CredentialRecord {
    /// Parse a raw payload.
    ///
    /// All fields are extracted before anything is returned, so a failure
    /// leaves the caller with nothing to apply.
    ///
    /// # Errors
    ///
    /// - `Parse` if `bytes` is not well-formed JSON
    /// - `NotAnObject` if the document is not an object
    /// - `MissingField` if a required field is absent or not a string
    /// - `NulInValue` if a value cannot be stored in an environment table
    pub fn from_slice(bytes: &[u8], schema: Schema) -> Result<Self> {
        let mut doc: Value = serde_json::from_slice(bytes).map_err(Error::Parse)?;
        let record = Self::from_value(&doc, schema);
        wipe(&mut doc);
        record
    }

    /// Extract from an already parsed document.
    pub fn from_value(doc: &Value, schema: Schema) -> Result<Self> {
        let schema = schema.resolve(doc)?;
        let shape_err = |source| Error::MissingField { schema, source };

        let record = match schema {
            Schema::Nested => {
                let payload = NestedPayload::deserialize(doc).map_err(shape_err)?;
                let creds = payload.credentials;
                Self {
                    access_key_id: Zeroizing::new(creds.access_key_id),
                    secret_access_key: Zeroizing::new(creds.secret_access_key),
                    session_token: Zeroizing::new(creds.session_token),
                    expiration: as_string(creds.expiration),
                    schema,
                }
            }
            // resolve() never yields Auto
            Schema::Flat | Schema::Auto => {
                let payload = FlatPayload::deserialize(doc).map_err(shape_err)?;
                Self {
                    access_key_id: Zeroizing::new(payload.access_key_id),
                    secret_access_key: Zeroizing::new(payload.secret_access_key),
                    session_token: Zeroizing::new(payload.token),
                    expiration: as_string(payload.expiration),
                    schema,
                }
            }
        };

        for (var, value) in record.vars() {
            if value.contains('\0') {
                return Err(Error::NulInValue(var));
            }
        }

        Ok(record)
    }

    pub fn access_key_id(&self) -> &str {
        &self.access_key_id
    }

    pub fn secret_access_key(&self) -> &str {
        &self.secret_access_key
    }

    pub fn session_token(&self) -> &str {
        &self.session_token
    }

    /// Expiration timestamp as reported by the provider, unparsed.
    pub fn expiration(&self) -> Option<&str> {
        self.expiration.as_deref()
    }

    /// The schema the payload was actually read with (never `Auto`).
    pub fn schema(&self) -> Schema {
        self.schema
    }

    /// Variable name and value pairs, in export order.
    pub fn vars(&self) -> [(&'static str, &str); 3] {
        [
            (ACCESS_KEY_ID_VAR, self.access_key_id()),
            (SECRET_ACCESS_KEY_VAR, self.secret_access_key()),
            (SESSION_TOKEN_VAR, self.session_token()),
        ]
    }
}

impl fmt::Debug for CredentialRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CredentialRecord")
            .field("access_key_id", &self.access_key_id())
            .field("secret_access_key", &"<redacted>")
            .field("session_token", &"<redacted>")
            .field("expiration", &self.expiration)
            .field("schema", &self.schema)
            .finish()
    }
}

fn as_string(value: Option<Value>) -> Option<String> {
    match value {
        Some(Value::String(s)) => Some(s),
        _ => None,
    }
}

/// Zero every string in a parsed document once the record owns its copies.
fn wipe(value: &mut Value) {
    match value {
        Value::String(s) => s.zeroize(),
        Value::Array(items) => items.iter_mut().for_each(wipe),
        Value::Object(map) => map.values_mut().for_each(wipe),
        _ => {}
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
