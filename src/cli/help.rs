//! CLI command-name contract for logging spans.

use crate::cli::parse::Commands;
use crate::manifest::VerifyPolicy;

/// Command name string for logs (e.g. "create", "analyze").
pub fn command_name(command: &Commands) -> &'static str {
    match command {
        Commands::Create { .. } => "create",
        Commands::Manufacture { .. } => "manufacture",
        Commands::Analyze { .. } => "analyze",
    }
}

/// Verification policy a command runs under; `None` for creation.
pub fn command_policy(command: &Commands) -> Option<VerifyPolicy> {
    match command {
        Commands::Create { .. } => None,
        Commands::Manufacture { .. } => Some(VerifyPolicy::Strict),
        Commands::Analyze { .. } => Some(VerifyPolicy::Audit),
    }
}
