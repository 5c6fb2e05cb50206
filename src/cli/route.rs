//! CLI route: single route table and run context. Dispatches to the run API and presentation.

use crate::api::IntegrityApi;
use crate::cli::output::{EXIT_AUDIT_FAILED, EXIT_OK};
use crate::cli::parse::Commands;
use crate::cli::presentation::{
    format_create_json, format_create_text, format_verify_json, format_verify_text,
};
use crate::cli::{command_name, command_policy};
use crate::config::HcompareConfig;
use crate::error::HcompareError;
use std::path::Path;
use std::time::Instant;
use tracing::info;

/// What a finished command prints and how the process should exit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOutcome {
    pub output: String,
    pub exit_code: i32,
}

/// Runtime context for CLI execution: resolved config plus presentation flags.
pub struct RunContext {
    config: HcompareConfig,
    format: String,
    color: bool,
    echo_records: bool,
}

impl RunContext {
    /// Build a run context. `format` must be "text" or "json".
    pub fn new(config: HcompareConfig, format: &str) -> Result<Self, HcompareError> {
        if format != "text" && format != "json" {
            return Err(HcompareError::ConfigError(format!(
                "Invalid output format '{}'. Must be 'text' or 'json'",
                format
            )));
        }
        let color = config.logging.color;
        Ok(Self {
            config,
            format: format.to_string(),
            color,
            echo_records: false,
        })
    }

    /// Echo created records to stdout as they are written (-vv)
    pub fn with_record_echo(mut self, echo: bool) -> Self {
        self.echo_records = echo;
        self
    }

    /// Execute a command.
    pub fn execute(&self, command: &Commands) -> Result<RunOutcome, HcompareError> {
        let started = Instant::now();
        let result = self.dispatch(command);
        let ok = result.is_ok();
        info!(
            command = command_name(command),
            ok,
            duration_ms = started.elapsed().as_millis() as u64,
            "Command finished"
        );
        result
    }

    fn dispatch(&self, command: &Commands) -> Result<RunOutcome, HcompareError> {
        match command {
            Commands::Create {
                dir,
                file,
                no_recursive,
                follow_symlinks,
            } => self.handle_create(dir, file, *no_recursive, *follow_symlinks),
            Commands::Manufacture { file } | Commands::Analyze { file } => {
                let policy = command_policy(command).ok_or_else(|| {
                    HcompareError::ConfigError("Command has no verification policy".to_string())
                })?;
                self.handle_verify(file, policy)
            }
        }
    }

    fn handle_create(
        &self,
        dir: &Path,
        file: &Path,
        no_recursive: bool,
        follow_symlinks: bool,
    ) -> Result<RunOutcome, HcompareError> {
        let mut config = self.config.clone();
        if no_recursive {
            config.walk.recursive = false;
        }
        if follow_symlinks {
            config.walk.follow_symlinks = true;
        }

        let api = IntegrityApi::new(config)?.with_record_echo(self.echo_records);
        let summary = api.create_manifest(dir, file)?;
        let output = if self.format == "json" {
            format_create_json(&summary)?
        } else {
            format_create_text(&summary, self.color)
        };
        Ok(RunOutcome {
            output,
            exit_code: EXIT_OK,
        })
    }

    fn handle_verify(
        &self,
        file: &Path,
        policy: crate::manifest::VerifyPolicy,
    ) -> Result<RunOutcome, HcompareError> {
        let api = IntegrityApi::new(self.config.clone())?;
        let report = api.verify_manifest(file, policy)?;
        let exit_code = if report.is_clean() {
            EXIT_OK
        } else {
            EXIT_AUDIT_FAILED
        };
        let output = if self.format == "json" {
            format_verify_json(&report)?
        } else {
            format_verify_text(&report, self.color)
        };
        Ok(RunOutcome { output, exit_code })
    }
}
