//! stsenv - Export temporary AWS credentials from a JSON payload.
//!
//! Reads the JSON that a credential provider prints (the container
//! credentials endpoint or `aws sts assume-role`) and sets
//! `AWS_ACCESS_KEY_ID`, `AWS_SECRET_ACCESS_KEY` and `AWS_SESSION_TOKEN`.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── export        # Export into this process, optionally --print
//! │   ├── run           # Run a command with credentials injected
//! │   └── output        # stderr message helpers
//! └── core/             # Core library components
//!     ├── constants     # Variable names and JSON keys
//!     ├── credentials   # Payload schemas and CredentialRecord
//!     ├── environment   # Environment trait and targets
//!     ├── exporter      # Read, extract, then assign
//!     └── format        # sh/fish/dotenv/json rendering
//! ```
//!
//! # Example
//!
//! ```
//! use stsenv::core::credentials::Schema;
//! use stsenv::core::environment::MemoryEnv;
//! use stsenv::core::exporter::export_credentials;
//!
//! let json = r#"{"AccessKeyId":"AK1","SecretAccessKey":"SK1","Token":"TK1"}"#;
//! let mut env = MemoryEnv::new();
//! export_credentials(json.as_bytes(), &mut env, Schema::Auto).unwrap();
//! assert_eq!(env.get("AWS_SESSION_TOKEN"), Some("TK1"));
//! ```

pub mod cli;
pub mod core;
pub mod error;
