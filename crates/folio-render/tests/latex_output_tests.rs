//! Runs stand-in engines from a private PATH, so it lives in its own
//! test binary.
#![cfg(unix)]

use folio_render::*;
use std::os::unix::fs::PermissionsExt;
use std::path::Path;

fn install_engine(dir: &Path, name: &str, body: &str) {
    let path = dir.join(name);
    std::fs::write(&path, format!("#!/bin/sh\n{}\n", body)).unwrap();
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
}

async fn compile_with(engine: LatexEngine) -> RenderError {
    let mut compiler = LatexCompiler::new(CompilerOptions {
        engine,
        ..Default::default()
    })
    .unwrap();
    compiler.compile("x").await.unwrap_err()
}

#[tokio::test]
async fn test_engine_output_must_exist_and_be_non_empty() {
    let bin = tempfile::tempdir().unwrap();
    install_engine(bin.path(), "pdflatex", ": > document.pdf\nexit 0");
    install_engine(bin.path(), "xelatex", "exit 0");

    // Only test in this binary, nothing else reads PATH concurrently.
    unsafe { std::env::set_var("PATH", bin.path()) };

    match compile_with(LatexEngine::Pdflatex).await {
        RenderError::OutputEmpty(path) => assert!(path.ends_with("document.pdf")),
        other => panic!("Expected OutputEmpty, got {}", other),
    }
    match compile_with(LatexEngine::Xelatex).await {
        RenderError::OutputMissing(path) => assert!(path.ends_with("document.pdf")),
        other => panic!("Expected OutputMissing, got {}", other),
    }
}
