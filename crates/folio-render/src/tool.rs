//! External tool discovery and invocation

use crate::types::*;
use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};
use std::process::{Output, Stdio};
use std::time::Duration;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;

/// Look `name` up on PATH.
///
/// On Windows only the bare name and `name.exe` are tried; `PATHEXT` is
/// not consulted, so `.cmd` and `.bat` shims are not found.
pub fn find_executable(name: &str) -> Option<PathBuf> {
    let candidate = Path::new(name);
    if candidate.components().count() > 1 {
        return is_executable(candidate).then(|| candidate.to_path_buf());
    }

    let paths = std::env::var_os("PATH")?;
    std::env::split_paths(&paths).find_map(|dir| {
        let path = dir.join(name);
        if is_executable(&path) {
            return Some(path);
        }
        if cfg!(windows) {
            let exe = path.with_extension("exe");
            if is_executable(&exe) {
                return Some(exe);
            }
        }
        None
    })
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    std::fs::metadata(path)
        .map(|m| m.is_file() && m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.is_file()
}

pub(crate) fn require_tool(name: &str) -> Result<PathBuf> {
    find_executable(name).ok_or_else(|| RenderError::ToolNotFound {
        tool: name.to_string(),
    })
}

/// One invocation of an external tool.
///
/// The child is killed if the deadline passes or the future running it
/// is dropped.
#[derive(Debug, Clone)]
pub struct ToolCommand {
    tool: String,
    program: PathBuf,
    args: Vec<OsString>,
    stdin: Option<Vec<u8>>,
    timeout: Option<Duration>,
    current_dir: Option<PathBuf>,
}

impl ToolCommand {
    /// `tool` names the command in errors and logs; `program` is what runs
    pub fn new(tool: impl Into<String>, program: impl Into<PathBuf>) -> Self {
        Self {
            tool: tool.into(),
            program: program.into(),
            args: Vec::new(),
            stdin: None,
            timeout: None,
            current_dir: None,
        }
    }

    pub fn arg(mut self, arg: impl AsRef<OsStr>) -> Self {
        self.args.push(arg.as_ref().to_owned());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        self.args
            .extend(args.into_iter().map(|a| a.as_ref().to_owned()));
        self
    }

    pub fn stdin(mut self, input: impl Into<Vec<u8>>) -> Self {
        self.stdin = Some(input.into());
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn current_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.current_dir = Some(dir.into());
        self
    }

    pub fn arguments(&self) -> &[OsString] {
        &self.args
    }

    /// Run to completion. A non-zero exit becomes `ToolFailed` carrying
    /// stdout and stderr.
    pub async fn run(self) -> Result<Output> {
        log::debug!("Running {} {:?}", self.program.display(), self.args);

        let mut command = Command::new(&self.program);
        command
            .args(&self.args)
            .stdin(if self.stdin.is_some() {
                Stdio::piped()
            } else {
                Stdio::null()
            })
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);
        if let Some(dir) = &self.current_dir {
            command.current_dir(dir);
        }

        let mut child = command.spawn()?;

        let writer = match (self.stdin, child.stdin.take()) {
            (Some(input), Some(mut pipe)) => Some(tokio::spawn(async move {
                pipe.write_all(&input).await?;
                pipe.shutdown().await
            })),
            _ => None,
        };

        let output = match self.timeout {
            Some(limit) => tokio::time::timeout(limit, child.wait_with_output())
                .await
                .map_err(|_| RenderError::DeadlineExceeded {
                    tool: self.tool.clone(),
                    timeout: limit,
                })??,
            None => child.wait_with_output().await?,
        };

        if let Some(writer) = writer {
            // A tool may exit before draining its input
            if let Err(e) = writer.await? {
                log::debug!("{}: stdin not fully written: {}", self.tool, e);
            }
        }

        if !output.status.success() {
            return Err(RenderError::ToolFailed {
                tool: self.tool,
                status: output.status,
                output: combined_output(&output),
            });
        }

        Ok(output)
    }
}

/// stdout followed by stderr, lossily decoded and trimmed
pub(crate) fn combined_output(output: &Output) -> String {
    let mut text = String::from_utf8_lossy(&output.stdout).into_owned();
    let stderr = String::from_utf8_lossy(&output.stderr);
    if !text.is_empty() && !stderr.is_empty() && !text.ends_with('\n') {
        text.push('\n');
    }
    text.push_str(&stderr);
    text.trim().to_string()
}

pub(crate) async fn require_input(path: &Path) -> Result<()> {
    if !tokio::fs::try_exists(path).await? {
        return Err(RenderError::InputNotFound(path.to_path_buf()));
    }
    Ok(())
}

pub(crate) async fn prepare_output_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent).await?;
    }
    Ok(())
}

/// Output must exist and be non-empty
pub(crate) async fn verify_output(path: &Path) -> Result<u64> {
    let metadata = match tokio::fs::metadata(path).await {
        Ok(m) => m,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(RenderError::OutputMissing(path.to_path_buf()));
        }
        Err(e) => return Err(e.into()),
    };
    if metadata.len() == 0 {
        return Err(RenderError::OutputEmpty(path.to_path_buf()));
    }
    Ok(metadata.len())
}
