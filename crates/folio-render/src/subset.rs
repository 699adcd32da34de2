//! Font subsetting through fontTools' `pyftsubset`

use crate::tool::{ToolCommand, prepare_output_dir, require_input, require_tool, verify_output};
use crate::types::*;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::time::Duration;

const PYFTSUBSET: &str = "pyftsubset";
const DEFAULT_PYTHON: &str = "python3";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubsetOptions {
    pub input: PathBuf,
    pub output: PathBuf,
    /// Characters to keep; everything when `None`
    pub text: Option<String>,
    pub flavor: String,
    pub layout_features: String,
    pub desubroutinize: bool,
}

impl SubsetOptions {
    /// WOFF2 with all layout features kept
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
            text: None,
            flavor: "woff2".to_string(),
            layout_features: "*".to_string(),
            desubroutinize: true,
        }
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn to_args(&self) -> Vec<String> {
        let mut args = vec![
            self.input.display().to_string(),
            format!("--output-file={}", self.output.display()),
            format!("--flavor={}", self.flavor),
            format!("--layout-features={}", self.layout_features),
        ];
        if self.desubroutinize {
            args.push("--desubroutinize".to_string());
        }
        if let Some(text) = self.text.as_deref().filter(|t| !t.is_empty()) {
            args.push(format!("--text={}", text));
        }
        args
    }
}

#[derive(Debug, Clone)]
pub struct FontSubsetter {
    python: PathBuf,
    program: PathBuf,
    timeout: Option<Duration>,
}

impl FontSubsetter {
    /// Interpreter from `PYTHON_PATH`, else `python3`
    pub fn new() -> Result<Self> {
        let python = std::env::var_os("PYTHON_PATH")
            .filter(|p| !p.is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_PYTHON));
        log::debug!("Font subsetter interpreter: {}", python.display());

        Ok(Self {
            python,
            program: require_tool(PYFTSUBSET)?,
            timeout: None,
        })
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn python(&self) -> &Path {
        &self.python
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    pub async fn subset(&self, options: &SubsetOptions) -> Result<()> {
        require_input(&options.input).await?;
        prepare_output_dir(&options.output).await?;

        let mut command = ToolCommand::new(PYFTSUBSET, &self.program).args(options.to_args());
        if let Some(timeout) = self.timeout {
            command = command.timeout(timeout);
        }
        command.run().await?;

        let size = verify_output(&options.output).await?;
        log::info!("Subset font written to {} ({} bytes)", options.output.display(), size);
        Ok(())
    }

    /// Keep only the characters that occur in `html`
    pub async fn subset_for_html(
        &self,
        font: impl AsRef<Path>,
        html: &str,
        output: impl AsRef<Path>,
    ) -> Result<()> {
        let chars = extract_used_chars(html);
        log::debug!("Subsetting to {} distinct characters", chars.chars().count());

        let options =
            SubsetOptions::new(font.as_ref(), output.as_ref()).with_text(chars);
        self.subset(&options).await
    }
}

/// Distinct characters of `text` in first-occurrence order
pub fn extract_used_chars(text: &str) -> String {
    let mut seen = HashSet::new();
    text.chars().filter(|c| seen.insert(*c)).collect()
}
