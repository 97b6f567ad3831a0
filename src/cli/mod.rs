//! Command-line interface.

pub mod export;
pub mod output;
pub mod run;

use clap::Parser;

use crate::core::constants::SCHEMA_ENV;
use crate::core::credentials::Schema;
use crate::core::format::Format;

/// stsenv - Export temporary AWS credentials from a JSON payload.
#[derive(Parser, Debug)]
#[command(
    name = "stsenv",
    about = "Export temporary AWS credentials from a JSON payload on stdin",
    version,
    after_help = "Examples:\n  \
        curl -s \"169.254.170.2$AWS_CONTAINER_CREDENTIALS_RELATIVE_URI\" \\\n      \
        | stsenv -- make deploy\n  \
        eval \"$(aws sts assume-role --role-arn ARN --role-session-name ci \\\n      \
        | stsenv --print sh)\""
)]
pub struct Cli {
    /// JSON shape of the payload
    #[arg(long, value_enum, env = SCHEMA_ENV, default_value_t = Schema::Auto)]
    pub schema: Schema,

    /// Also print the variables to stdout in this syntax
    #[arg(long, value_enum, value_name = "FORMAT", conflicts_with = "command")]
    pub print: Option<Format>,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Command to run with the credentials in its environment
    #[arg(last = true, value_name = "COMMAND")]
    pub command: Vec<String>,
}

/// Execute the parsed command line, returning the process exit code.
pub fn execute(cli: Cli) -> crate::error::Result<i32> {
    if cli.command.is_empty() {
        export::execute(cli.schema, cli.print)?;
        Ok(0)
    } else {
        run::execute(&cli.command, cli.schema)
    }
}
