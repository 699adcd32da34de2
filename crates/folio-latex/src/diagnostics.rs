//! Compiler log scanning

use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

static FILE_LINE_ERROR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\./(.*?):(\d+):\s*(.*)$").expect("valid regex"));
static FATAL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^!\s+(.*)$").expect("valid regex"));
static LATEX_WARNING_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^LaTeX Warning:\s*(.*)$").expect("valid regex"));
static PACKAGE_WARNING_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^Package \w+ Warning:\s*(.*)$").expect("valid regex"));

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum DiagnosticKind {
    /// `./file.tex:12: message`
    Error,
    /// `! message`
    Fatal,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub file: Option<String>,
    pub line: Option<u32>,
    pub message: String,
}

impl Diagnostic {
    fn new(kind: DiagnosticKind, message: &str) -> Self {
        Self {
            kind,
            file: None,
            line: None,
            message: message.trim_end().to_string(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self.kind {
            DiagnosticKind::Error => "error",
            DiagnosticKind::Fatal => "fatal",
            DiagnosticKind::Warning => "warning",
        };
        match (&self.file, self.line) {
            (Some(file), Some(line)) => write!(f, "{}:{}: {}: {}", file, line, label, self.message),
            (Some(file), None) => write!(f, "{}: {}: {}", file, label, self.message),
            _ => write!(f, "{}: {}", label, self.message),
        }
    }
}

/// Errors and warnings found in a log, each list in the order the lines appear
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LogReport {
    pub errors: Vec<Diagnostic>,
    pub warnings: Vec<Diagnostic>,
}

impl LogReport {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn is_clean(&self) -> bool {
        self.errors.is_empty() && self.warnings.is_empty()
    }
}

/// Scan compiler log text. Never fails; lines that match nothing are skipped.
pub fn parse_log(log: &str) -> LogReport {
    let mut report = LogReport::default();

    for line in log.lines() {
        if let Some(caps) = FILE_LINE_ERROR_RE.captures(line) {
            report.errors.push(Diagnostic {
                file: Some(caps[1].to_string()),
                line: caps[2].parse().ok(),
                ..Diagnostic::new(DiagnosticKind::Error, &caps[3])
            });
        } else if let Some(caps) = FATAL_RE.captures(line) {
            report
                .errors
                .push(Diagnostic::new(DiagnosticKind::Fatal, &caps[1]));
        } else if let Some(caps) = LATEX_WARNING_RE
            .captures(line)
            .or_else(|| PACKAGE_WARNING_RE.captures(line))
        {
            report
                .warnings
                .push(Diagnostic::new(DiagnosticKind::Warning, &caps[1]));
        }
    }

    log::debug!(
        "Log scan: {} error(s), {} warning(s)",
        report.errors.len(),
        report.warnings.len()
    );

    report
}
