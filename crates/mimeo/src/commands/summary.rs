//! `mimeo summary` command implementation.

use std::path::PathBuf;

use clap::Args;
use mimeo_markdown::{Summary, extract_summary};

use super::read_input;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the summary command.
#[derive(Args)]
pub(crate) struct SummaryArgs {
    /// Markdown file to summarize (default: stdin).
    file: Option<PathBuf>,

    /// Print the summary as a JSON object.
    #[arg(long)]
    json: bool,
}

impl SummaryArgs {
    /// Execute the summary command.
    ///
    /// # Errors
    ///
    /// Returns an error if the input cannot be read or has no summary.
    pub(crate) fn execute(self, output: &Output) -> Result<(), CliError> {
        let markdown = read_input(self.file.as_deref())?;
        let summary = extract_summary(&markdown)?;
        output.print_line(&format_summary(&summary, self.json)?)?;
        Ok(())
    }
}

fn format_summary(summary: &Summary, json: bool) -> Result<String, CliError> {
    if json {
        return Ok(serde_json::to_string_pretty(summary)?);
    }
    Ok(format!("{}\n\n{}", summary.title, summary.preview))
}
