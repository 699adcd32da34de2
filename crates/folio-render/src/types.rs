use folio_latex::LogReport;
use std::path::PathBuf;
use std::process::ExitStatus;
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PdfValidationError {
    #[error("PDF is too small ({size} bytes, need at least 500)")]
    TooSmall { size: u64 },
    #[error("Missing %PDF- header, found {found:?}")]
    BadHeader { found: Vec<u8> },
}

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("{tool} not found on PATH")]
    ToolNotFound { tool: String },
    #[error("Input file not found: {}", .0.display())]
    InputNotFound(PathBuf),
    #[error("{tool} failed ({status}): {output}")]
    ToolFailed {
        tool: String,
        status: ExitStatus,
        output: String,
    },
    #[error("{tool} exceeded its deadline of {timeout:?}")]
    DeadlineExceeded { tool: String, timeout: Duration },
    #[error("Expected output was not produced: {}", .0.display())]
    OutputMissing(PathBuf),
    #[error("Output file is empty: {}", .0.display())]
    OutputEmpty(PathBuf),
    #[error("LaTeX compilation failed on pass {pass}: {source}")]
    Compilation {
        pass: u8,
        diagnostics: LogReport,
        #[source]
        source: Box<RenderError>,
    },
    #[error("Invalid PDF: {0}")]
    InvalidPdf(#[from] PdfValidationError),
    #[error("Unknown LaTeX engine: {0}")]
    UnknownEngine(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Task join error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
}

pub type Result<T> = std::result::Result<T, RenderError>;
