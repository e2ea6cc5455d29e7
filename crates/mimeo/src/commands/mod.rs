//! CLI command implementations.

pub(crate) mod check;
pub(crate) mod render;
pub(crate) mod summary;

use std::io::Read;
use std::path::Path;

pub(crate) use check::CheckArgs;
pub(crate) use render::RenderArgs;
pub(crate) use summary::SummaryArgs;

use crate::error::CliError;

/// Read article Markdown from `path`, or from stdin when absent or `-`.
pub(crate) fn read_input(path: Option<&Path>) -> Result<String, CliError> {
    match path {
        Some(path) if path != Path::new("-") => {
            tracing::debug!(path = %path.display(), "Reading article");
            Ok(std::fs::read_to_string(path)?)
        }
        _ => {
            let mut markdown = String::new();
            std::io::stdin().read_to_string(&mut markdown)?;
            Ok(markdown)
        }
    }
}
