use folio_latex::{Document, DocumentClass, DiagnosticKind};
use folio_render::*;
use std::time::Duration;

#[test]
fn test_default_options() {
    let options = CompilerOptions::default();
    assert_eq!(options.engine, LatexEngine::Pdflatex);
    assert_eq!(options.timeout, Duration::from_secs(30));
    assert_eq!(options.cleanup, CleanupPolicy::Always);
    assert!(options.extra_args.is_empty());
}

#[test]
fn test_engine_parse() {
    assert_eq!("xelatex".parse::<LatexEngine>().unwrap(), LatexEngine::Xelatex);
    assert_eq!("LuaLaTeX".parse::<LatexEngine>().unwrap(), LatexEngine::Lualatex);
    let err = "context".parse::<LatexEngine>().unwrap_err();
    assert!(matches!(err, RenderError::UnknownEngine(name) if name == "context"));
}

fn compiler(cleanup: CleanupPolicy) -> Option<LatexCompiler> {
    LatexCompiler::new(CompilerOptions {
        cleanup,
        extra_args: vec!["-draftmode".to_string()],
        ..Default::default()
    })
    .ok()
}

#[test]
fn test_pass_args() {
    let Some(compiler) = compiler(CleanupPolicy::Always) else { return };
    let dir = compiler.work_dir().unwrap().display().to_string();

    assert_eq!(
        compiler.pass_args().unwrap(),
        [
            "-interaction=nonstopmode".to_string(),
            "-halt-on-error".to_string(),
            "-file-line-error".to_string(),
            format!("-output-directory={}", dir),
            "-draftmode".to_string(),
            "document.tex".to_string(),
        ]
    );
}

#[tokio::test]
async fn test_compile_and_copy() {
    let Ok(mut compiler) = LatexCompiler::new(CompilerOptions::default()) else { return };
    let source = Document::builder(DocumentClass::Article)
        .title("Folio")
        .section("Start", "Hello.")
        .build()
        .to_latex();

    let outcome = compiler.compile(&source).await.unwrap();
    assert!(outcome.pdf_path.ends_with("document.pdf"));
    assert!(outcome.temp_files.iter().any(|p| p.ends_with("document.log")));

    let out = tempfile::tempdir().unwrap();
    let dest = out.path().join("copies/folio.pdf");
    compiler.copy_pdf(&outcome, &dest).await.unwrap();
    validate_pdf(&dest).await.unwrap();

    let work_dir = compiler.work_dir().unwrap().to_path_buf();
    assert_eq!(compiler.cleanup().unwrap(), None);
    assert!(!work_dir.exists());
}

#[tokio::test]
async fn test_compile_failure_reports_diagnostics() {
    let Some(mut compiler) = compiler(CleanupPolicy::KeepOnFailure) else { return };
    let source = "\\documentclass{article}\n\\begin{document}\n\\undefinedmacro\n\\end{document}\n";

    let err = compiler.compile(source).await.unwrap_err();
    match err {
        RenderError::Compilation {
            pass, diagnostics, ..
        } => {
            assert_eq!(pass, 1);
            assert!(diagnostics.has_errors());
            let first = &diagnostics.errors[0];
            assert_eq!(first.kind, DiagnosticKind::Error);
            assert_eq!(first.line, Some(3));
        }
        other => panic!("unexpected error: {}", other),
    }

    let kept = compiler.cleanup().unwrap().expect("kept after failure");
    assert!(kept.join("document.tex").exists());
    std::fs::remove_dir_all(kept).unwrap();
}

#[test]
fn test_never_policy_keeps_directory() {
    let Some(compiler) = compiler(CleanupPolicy::Never) else { return };
    let dir = compiler.work_dir().unwrap().to_path_buf();

    drop(compiler);
    assert!(dir.is_dir());
    std::fs::remove_dir_all(dir).unwrap();
}
