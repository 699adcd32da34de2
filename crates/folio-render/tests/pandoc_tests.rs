use folio_render::*;
use std::collections::BTreeMap;

#[test]
fn test_html_default_args() {
    let args = ConvertOptions::html_defaults().to_args();
    assert_eq!(
        args,
        [
            "--from",
            "markdown+smart",
            "--to",
            "html5",
            "--standalone",
            "--toc",
            "--toc-depth=3",
        ]
    );
}

#[test]
fn test_full_args() {
    let mut options = ConvertOptions::html_defaults();
    options.template = Some("book.html".into());
    options.variables.insert("lang".to_string(), "en".to_string());
    options.metadata.insert("title".to_string(), "Folio".to_string());
    options.css = vec!["a.css".to_string(), "b.css".to_string()];

    let args = options.to_args();
    assert_eq!(
        &args[7..],
        [
            "--template",
            "book.html",
            "--variable",
            "lang=en",
            "--metadata",
            "title=Folio",
            "--css",
            "a.css",
            "--css",
            "b.css",
        ]
    );
}

#[test]
fn test_inject_css_variables() {
    let html = "<html><head><title>x</title></head><body></body></html>";
    let mut vars = BTreeMap::new();
    vars.insert("--color-accent".to_string(), "#3498db".to_string());
    vars.insert("--base".to_string(), "11pt".to_string());

    let out = inject_css_variables(html, &vars);
    assert_eq!(
        out,
        "<html><head><title>x</title><style>\n:root {\n  --base: 11pt;\n  --color-accent: #3498db;\n}\n</style>\n</head><body></body></html>"
    );
}

#[test]
fn test_inject_without_head_or_vars() {
    let mut vars = BTreeMap::new();
    assert_eq!(inject_css_variables("<p>x</p>", &vars), "<p>x</p>");

    vars.insert("--a".to_string(), "1".to_string());
    assert_eq!(inject_css_variables("<p>x</p>", &vars), "<p>x</p>");
}

#[tokio::test]
async fn test_convert_with_pandoc() {
    let Ok(pandoc) = PandocConverter::new() else { return };

    let version = pandoc.version().await.unwrap();
    assert!(version.starts_with("pandoc"));

    let html = pandoc
        .convert("# Title\n\nSome \"quoted\" text.\n", &ConvertOptions::html_defaults())
        .await
        .unwrap();
    assert!(html.contains("<!DOCTYPE html>"));
    assert!(html.contains("Title"));
}

#[tokio::test]
async fn test_convert_file_missing_input() {
    let Ok(pandoc) = PandocConverter::new() else { return };
    let dir = tempfile::tempdir().unwrap();

    let err = pandoc
        .convert_file(
            dir.path().join("none.md"),
            dir.path().join("out.html"),
            &ConvertOptions::default(),
        )
        .await
        .unwrap_err();
    assert!(matches!(err, RenderError::InputNotFound(_)));
}
