//! CLI domain: parse, route, help, output, and presentation only.
//! No domain orchestration; single route table dispatches to the run API.

mod help;
mod output;
mod parse;
mod presentation;
mod route;

pub use help::{command_name, command_policy};
pub use output::{
    exit_code, map_error, EXIT_AUDIT_FAILED, EXIT_FATAL, EXIT_MALFORMED, EXIT_MISMATCH, EXIT_OK,
};
pub use parse::{Cli, Commands};
pub use presentation::{
    format_create_json, format_create_text, format_verify_json, format_verify_text,
};
pub use route::{RunContext, RunOutcome};
