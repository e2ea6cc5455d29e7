//! `mimeo check` command implementation.

use std::path::{Path, PathBuf};

use clap::Args;
use mimeo_config::{CliSettings, Config};
use mimeo_markdown::validate_submission;

use super::read_input;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the check command.
#[derive(Args)]
pub(crate) struct CheckArgs {
    /// Markdown file to validate (default: stdin).
    file: Option<PathBuf>,

    /// Maximum article size in bytes (overrides config).
    #[arg(long)]
    max_bytes: Option<usize>,
}

impl CheckArgs {
    /// Execute the check command.
    ///
    /// Prints the derived title on stdout when the article is accepted.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails, the input cannot be read,
    /// or the article is rejected.
    pub(crate) fn execute(
        self,
        config_path: Option<&Path>,
        output: &Output,
    ) -> Result<(), CliError> {
        let cli_settings = CliSettings {
            max_bytes: self.max_bytes,
            ..Default::default()
        };
        let config = Config::load(config_path, Some(&cli_settings))?;

        let markdown = read_input(self.file.as_deref())?;
        let summary = validate_submission(&markdown, &config.submission.limits())?;

        output.success("Article accepted");
        output.print_line(&summary.title)?;
        Ok(())
    }
}
