use folio_style::*;

#[test]
fn test_envelope_structure() {
    let html = HtmlEnvelope::new("My Book", "<h1>One</h1>\n<p>Text</p>", "body { color: red; }")
        .with_author("A. Writer")
        .with_language("pt-BR")
        .render();

    assert!(html.starts_with("<!DOCTYPE html>\n<html lang=\"pt-BR\">"));
    assert!(html.contains("<meta charset=\"UTF-8\">"));
    assert!(html.contains("<meta name=\"author\" content=\"A. Writer\">"));
    assert!(html.contains("<title>My Book</title>"));
    assert!(html.contains(
        "<script src=\"https://unpkg.com/pagedjs/dist/paged.polyfill.js\"></script>"
    ));
    assert!(html.contains("<style>\nbody { color: red; }\n  </style>"));
    assert!(html.contains("<main class=\"content\">\n<h1>One</h1>\n<p>Text</p>\n  </main>"));
    assert!(html.trim_end().ends_with("</html>"));
}

#[test]
fn test_envelope_without_author() {
    let html = HtmlEnvelope::new("T", "", "").render();
    assert!(!html.contains("name=\"author\""));
    assert!(html.contains("<html lang=\"en\">"));
}

#[test]
fn test_envelope_metadata_sorted_and_escaped() {
    let html = HtmlEnvelope::new("Tom & Jerry", "", "")
        .with_metadata("subject", "Cats \"and\" mice")
        .with_metadata("keywords", "a, b")
        .render();

    let keywords = html.find("name=\"keywords\"").unwrap();
    let subject = html.find("name=\"subject\"").unwrap();
    assert!(keywords < subject);
    assert!(html.contains("content=\"Cats &quot;and&quot; mice\""));
    assert!(html.contains("<title>Tom &amp; Jerry</title>"));
}

#[test]
fn test_envelope_embeds_composed_css() {
    let css = StyleConfig::default().stylesheet().unwrap();
    let html = HtmlEnvelope::new("Book", "<p>x</p>", css.clone()).render();
    assert!(html.contains(&css));
}

#[test]
fn test_envelope_head_lines_in_order() {
    let html = HtmlEnvelope::new("T", "", "")
        .with_author("A")
        .with_metadata("subject", "S")
        .render();

    assert!(html.contains(
        "<meta name=\"generator\" content=\"folio typesetting toolchain\">\n  <meta name=\"author\" content=\"A\">\n  <title>T</title>\n"
    ));
    assert!(html.contains("  </style>\n  <meta name=\"subject\" content=\"S\">\n</head>\n<body>\n"));
}
