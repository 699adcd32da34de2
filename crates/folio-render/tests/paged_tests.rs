use folio_render::*;
use std::path::Path;
use std::time::Duration;

#[test]
fn test_default_options() {
    let options = PagedRendererOptions::default();
    assert_eq!(options.tool, "pagedjs-cli");
    assert_eq!(options.timeout, Duration::from_secs(60));
}

#[test]
fn test_missing_tool() {
    let options = PagedRendererOptions {
        tool: "folio-no-such-renderer".to_string(),
        ..Default::default()
    };
    let err = PagedRenderer::with_options(options).unwrap_err();
    assert!(matches!(err, RenderError::ToolNotFound { tool } if tool == "folio-no-such-renderer"));
}

/// Any executable will do for checks that run before the tool
fn stand_in_renderer() -> Option<PagedRenderer> {
    find_executable("true")?;
    PagedRenderer::with_options(PagedRendererOptions {
        tool: "true".to_string(),
        timeout: Duration::from_secs(5),
    })
    .ok()
}

#[test]
fn test_command_shape() {
    let Some(renderer) = stand_in_renderer() else { return };
    let command = renderer.command(Path::new("in.html"), Path::new("out/book.pdf"));
    let args: Vec<_> = command
        .arguments()
        .iter()
        .map(|a| a.to_string_lossy().into_owned())
        .collect();
    assert_eq!(args, ["in.html", "-o", "out/book.pdf"]);
}

#[tokio::test]
async fn test_missing_input() {
    let Some(renderer) = stand_in_renderer() else { return };
    let dir = tempfile::tempdir().unwrap();

    let err = renderer
        .render(dir.path().join("missing.html"), dir.path().join("out.pdf"))
        .await
        .unwrap_err();
    assert!(matches!(err, RenderError::InputNotFound(_)));
}

#[tokio::test]
async fn test_tool_that_writes_nothing() {
    let Some(renderer) = stand_in_renderer() else { return };
    let dir = tempfile::tempdir().unwrap();
    let html = dir.path().join("book.html");
    std::fs::write(&html, "<html></html>").unwrap();
    let pdf = dir.path().join("nested/out/book.pdf");

    let err = renderer.render(&html, &pdf).await.unwrap_err();
    assert!(matches!(err, RenderError::OutputMissing(p) if p == pdf));
    assert!(pdf.parent().unwrap().is_dir());
}

#[tokio::test]
async fn test_real_render() {
    let Ok(renderer) = PagedRenderer::new() else { return };
    let dir = tempfile::tempdir().unwrap();
    let html = dir.path().join("page.html");
    std::fs::write(
        &html,
        "<!DOCTYPE html><html><head><title>t</title></head><body><p>Hello</p></body></html>",
    )
    .unwrap();
    let pdf = dir.path().join("page.pdf");

    renderer.render(&html, &pdf).await.unwrap();
    validate_pdf(&pdf).await.unwrap();
}
