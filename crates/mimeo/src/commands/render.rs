//! `mimeo render` command implementation.

use std::path::{Path, PathBuf};

use clap::Args;
use mimeo_config::{CliSettings, Config};

use super::read_input;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the render command.
#[derive(Args)]
pub(crate) struct RenderArgs {
    /// Markdown file to render (default: stdin).
    file: Option<PathBuf>,

    /// Class attribute for rendered images (overrides config).
    #[arg(long)]
    image_class: Option<String>,
}

impl RenderArgs {
    /// Execute the render command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails or the input cannot be read.
    pub(crate) fn execute(
        self,
        config_path: Option<&Path>,
        output: &Output,
    ) -> Result<(), CliError> {
        let cli_settings = CliSettings {
            image_class: self.image_class,
            ..Default::default()
        };
        let config = Config::load(config_path, Some(&cli_settings))?;

        let markdown = read_input(self.file.as_deref())?;
        let html = config.markdown.renderer().render(&markdown);
        output.print(&html)?;
        Ok(())
    }
}
