use folio_render::*;
use std::time::Duration;

fn shell() -> Option<std::path::PathBuf> {
    find_executable("sh")
}

#[test]
fn test_missing_executable() {
    assert_eq!(find_executable("folio-no-such-tool-anywhere"), None);
}

#[cfg(unix)]
#[test]
fn test_explicit_path_needs_exec_bit() {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempfile::tempdir().unwrap();
    let script = dir.path().join("tool.sh");
    std::fs::write(&script, "#!/bin/sh\n").unwrap();
    let name = script.to_str().unwrap();

    std::fs::set_permissions(&script, std::fs::Permissions::from_mode(0o644)).unwrap();
    assert_eq!(find_executable(name), None);

    std::fs::set_permissions(&script, std::fs::Permissions::from_mode(0o755)).unwrap();
    assert_eq!(find_executable(name), Some(script.clone()));
}

#[tokio::test]
async fn test_successful_run_captures_stdout() {
    let Some(sh) = shell() else { return };

    let output = ToolCommand::new("sh", sh)
        .args(["-c", "printf hello"])
        .run()
        .await
        .unwrap();
    assert_eq!(output.stdout, b"hello");
}

#[tokio::test]
async fn test_stdin_is_forwarded() {
    let Some(cat) = find_executable("cat") else { return };

    let output = ToolCommand::new("cat", cat)
        .stdin("piped through")
        .run()
        .await
        .unwrap();
    assert_eq!(String::from_utf8_lossy(&output.stdout), "piped through");
}

#[tokio::test]
async fn test_failure_carries_merged_output() {
    let Some(sh) = shell() else { return };

    let err = ToolCommand::new("sh", sh)
        .args(["-c", "echo partial; echo broken >&2; exit 3"])
        .run()
        .await
        .unwrap_err();

    match err {
        RenderError::ToolFailed {
            tool,
            status,
            output,
        } => {
            assert_eq!(tool, "sh");
            assert_eq!(status.code(), Some(3));
            assert_eq!(output, "partial\nbroken");
        }
        other => panic!("unexpected error: {}", other),
    }
}

#[tokio::test]
async fn test_deadline_exceeded_is_distinct() {
    let Some(sh) = shell() else { return };

    let err = ToolCommand::new("sh", sh)
        .args(["-c", "sleep 5"])
        .timeout(Duration::from_millis(100))
        .run()
        .await
        .unwrap_err();

    match err {
        RenderError::DeadlineExceeded { tool, timeout } => {
            assert_eq!(tool, "sh");
            assert_eq!(timeout, Duration::from_millis(100));
        }
        other => panic!("unexpected error: {}", other),
    }
}

#[tokio::test]
async fn test_current_dir() {
    let Some(sh) = shell() else { return };
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("marker.txt"), "here").unwrap();

    let output = ToolCommand::new("sh", sh)
        .args(["-c", "cat marker.txt"])
        .current_dir(dir.path())
        .run()
        .await
        .unwrap();
    assert_eq!(output.stdout, b"here");
}
