//! HTML to PDF through a paged-media renderer

use crate::tool::{ToolCommand, prepare_output_dir, require_input, require_tool, verify_output};
use crate::types::*;
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PagedRendererOptions {
    /// Executable looked up on PATH
    pub tool: String,
    pub timeout: Duration,
}

impl Default for PagedRendererOptions {
    fn default() -> Self {
        Self {
            tool: "pagedjs-cli".to_string(),
            timeout: Duration::from_secs(60),
        }
    }
}

#[derive(Debug, Clone)]
pub struct PagedRenderer {
    program: PathBuf,
    options: PagedRendererOptions,
}

impl PagedRenderer {
    pub fn new() -> Result<Self> {
        Self::with_options(PagedRendererOptions::default())
    }

    pub fn with_options(options: PagedRendererOptions) -> Result<Self> {
        let program = require_tool(&options.tool)?;
        Ok(Self { program, options })
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    pub fn options(&self) -> &PagedRendererOptions {
        &self.options
    }

    /// `<tool> <html> -o <pdf>`
    pub fn command(&self, html: &Path, pdf: &Path) -> ToolCommand {
        ToolCommand::new(&self.options.tool, &self.program)
            .arg(html)
            .arg("-o")
            .arg(pdf)
            .timeout(self.options.timeout)
    }

    pub async fn render(&self, html: impl AsRef<Path>, pdf: impl AsRef<Path>) -> Result<()> {
        let (html, pdf) = (html.as_ref(), pdf.as_ref());

        require_input(html).await?;
        prepare_output_dir(pdf).await?;

        self.command(html, pdf).run().await?;

        let size = verify_output(pdf).await?;
        log::info!("Rendered {} ({} bytes)", pdf.display(), size);
        Ok(())
    }
}
