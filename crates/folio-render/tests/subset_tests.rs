use folio_render::*;

#[test]
fn test_extract_used_chars() {
    assert_eq!(extract_used_chars("hello world"), "helo wrd");
    assert_eq!(extract_used_chars("ÄäÄ ä"), "Ää ");
    assert_eq!(extract_used_chars(""), "");
}

#[test]
fn test_subset_args() {
    let options = SubsetOptions::new("fonts/Body.ttf", "out/Body.woff2");
    assert_eq!(
        options.to_args(),
        [
            "fonts/Body.ttf",
            "--output-file=out/Body.woff2",
            "--flavor=woff2",
            "--layout-features=*",
            "--desubroutinize",
        ]
    );

    let with_text = options.with_text("abc");
    assert_eq!(with_text.to_args().last().unwrap(), "--text=abc");
}

#[tokio::test]
async fn test_subset_missing_font() {
    let Ok(subsetter) = FontSubsetter::new() else { return };
    let dir = tempfile::tempdir().unwrap();

    let err = subsetter
        .subset_for_html(dir.path().join("none.ttf"), "<p>hi</p>", dir.path().join("o.woff2"))
        .await
        .unwrap_err();
    assert!(matches!(err, RenderError::InputNotFound(_)));
}
