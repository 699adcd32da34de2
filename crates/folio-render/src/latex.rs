//! Two-pass LaTeX compilation in a scoped work directory

use crate::tool::{ToolCommand, prepare_output_dir, require_tool, verify_output};
use crate::types::*;
use folio_latex::{Diagnostic, LogReport, parse_log};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::{Duration, Instant};
use tempfile::TempDir;

const TEX_FILE: &str = "document.tex";
const LOG_FILE: &str = "document.log";
const PDF_FILE: &str = "document.pdf";
const PASSES: u8 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LatexEngine {
    #[default]
    Pdflatex,
    Xelatex,
    Lualatex,
}

impl LatexEngine {
    pub fn binary(self) -> &'static str {
        match self {
            LatexEngine::Pdflatex => "pdflatex",
            LatexEngine::Xelatex => "xelatex",
            LatexEngine::Lualatex => "lualatex",
        }
    }

    pub fn all() -> &'static [LatexEngine] {
        &[
            LatexEngine::Pdflatex,
            LatexEngine::Xelatex,
            LatexEngine::Lualatex,
        ]
    }
}

impl fmt::Display for LatexEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.binary())
    }
}

impl FromStr for LatexEngine {
    type Err = RenderError;

    fn from_str(s: &str) -> Result<Self> {
        LatexEngine::all()
            .iter()
            .copied()
            .find(|engine| engine.binary().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| RenderError::UnknownEngine(s.to_string()))
    }
}

/// What happens to the work directory when the compiler goes away
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CleanupPolicy {
    #[default]
    Always,
    /// Retain after a failed compile, for inspection
    KeepOnFailure,
    Never,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompilerOptions {
    pub engine: LatexEngine,
    /// Per pass
    pub timeout: Duration,
    pub cleanup: CleanupPolicy,
    /// Appended verbatim before the source file
    pub extra_args: Vec<String>,
}

impl Default for CompilerOptions {
    fn default() -> Self {
        Self {
            engine: LatexEngine::default(),
            timeout: Duration::from_secs(30),
            cleanup: CleanupPolicy::default(),
            extra_args: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CompileOutcome {
    pub pdf_path: PathBuf,
    pub log_path: PathBuf,
    pub warnings: Vec<Diagnostic>,
    pub duration: Duration,
    /// Everything the engine left in the work directory
    pub temp_files: Vec<PathBuf>,
}

#[derive(Debug)]
pub struct LatexCompiler {
    program: PathBuf,
    options: CompilerOptions,
    work_dir: Option<TempDir>,
    failed: bool,
}

impl LatexCompiler {
    pub fn new(options: CompilerOptions) -> Result<Self> {
        let program = require_tool(options.engine.binary())?;
        let work_dir = tempfile::Builder::new().prefix("folio-latex-").tempdir()?;
        log::debug!(
            "{} work directory: {}",
            options.engine,
            work_dir.path().display()
        );

        Ok(Self {
            program,
            options,
            work_dir: Some(work_dir),
            failed: false,
        })
    }

    pub fn options(&self) -> &CompilerOptions {
        &self.options
    }

    pub fn work_dir(&self) -> Result<&Path> {
        self.work_dir
            .as_ref()
            .map(TempDir::path)
            .ok_or_else(|| std::io::Error::other("work directory already released").into())
    }

    /// Argument vector for one pass, run from inside the work directory
    pub fn pass_args(&self) -> Result<Vec<String>> {
        let mut args = vec![
            "-interaction=nonstopmode".to_string(),
            "-halt-on-error".to_string(),
            "-file-line-error".to_string(),
            format!("-output-directory={}", self.work_dir()?.display()),
        ];
        args.extend(self.options.extra_args.iter().cloned());
        args.push(TEX_FILE.to_string());
        Ok(args)
    }

    /// Write `source` into the work directory and compile it twice.
    pub async fn compile(&mut self, source: &str) -> Result<CompileOutcome> {
        let result = self.compile_inner(source).await;
        self.failed = result.is_err();
        result
    }

    async fn compile_inner(&self, source: &str) -> Result<CompileOutcome> {
        let started = Instant::now();
        let dir = self.work_dir()?.to_path_buf();
        tokio::fs::write(dir.join(TEX_FILE), source).await?;

        let args = self.pass_args()?;
        let engine = self.options.engine.binary();

        for pass in 1..=PASSES {
            log::debug!("{} pass {}/{}", engine, pass, PASSES);
            let run = ToolCommand::new(engine, &self.program)
                .args(&args)
                .current_dir(&dir)
                .timeout(self.options.timeout)
                .run()
                .await;

            match run {
                Ok(_) => {}
                Err(err @ RenderError::ToolFailed { .. }) => {
                    let diagnostics = self.read_log().await.unwrap_or_default();
                    return Err(RenderError::Compilation {
                        pass,
                        diagnostics,
                        source: Box::new(err),
                    });
                }
                Err(other) => return Err(other),
            }
        }

        let pdf_path = dir.join(PDF_FILE);
        verify_output(&pdf_path).await?;

        let warnings = self
            .read_log()
            .await
            .map(|report| report.warnings)
            .unwrap_or_default();

        let outcome = CompileOutcome {
            pdf_path,
            log_path: dir.join(LOG_FILE),
            warnings,
            duration: started.elapsed(),
            temp_files: list_files(&dir).await?,
        };
        log::info!(
            "Compiled with {} in {:.2?} ({} warning(s))",
            engine,
            outcome.duration,
            outcome.warnings.len()
        );
        Ok(outcome)
    }

    /// Best effort; `None` when the engine left no log
    async fn read_log(&self) -> Option<LogReport> {
        let path = self.work_dir().ok()?.join(LOG_FILE);
        match tokio::fs::read(&path).await {
            Ok(bytes) => Some(parse_log(&String::from_utf8_lossy(&bytes))),
            Err(e) => {
                log::warn!("Could not read {}: {}", path.display(), e);
                None
            }
        }
    }

    pub async fn copy_pdf(&self, outcome: &CompileOutcome, dest: impl AsRef<Path>) -> Result<()> {
        let dest = dest.as_ref();
        prepare_output_dir(dest).await?;
        tokio::fs::copy(&outcome.pdf_path, dest).await?;
        log::info!("Wrote {}", dest.display());
        Ok(())
    }

    fn retain_work_dir(&self) -> bool {
        match self.options.cleanup {
            CleanupPolicy::Always => false,
            CleanupPolicy::KeepOnFailure => self.failed,
            CleanupPolicy::Never => true,
        }
    }

    /// Remove the work directory unless the cleanup policy retains it.
    /// Returns the retained path, if any.
    pub fn cleanup(mut self) -> Result<Option<PathBuf>> {
        let Some(dir) = self.work_dir.take() else {
            return Ok(None);
        };

        if self.retain_work_dir() {
            let path = dir.keep();
            log::info!("Kept LaTeX work directory {}", path.display());
            return Ok(Some(path));
        }

        dir.close()?;
        Ok(None)
    }
}

impl Drop for LatexCompiler {
    fn drop(&mut self) {
        if let Some(dir) = self.work_dir.take() {
            if self.retain_work_dir() {
                let path = dir.keep();
                log::info!("Kept LaTeX work directory {}", path.display());
            }
        }
    }
}

async fn list_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut entries = tokio::fs::read_dir(dir).await?;
    let mut files = Vec::new();
    while let Some(entry) = entries.next_entry().await? {
        if entry.file_type().await?.is_file() {
            files.push(entry.path());
        }
    }
    files.sort();
    Ok(files)
}
