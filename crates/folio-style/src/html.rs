//! HTML5 envelope for the paged-media renderer

use crate::constants::{DEFAULT_LANGUAGE, GENERATOR, PAGED_POLYFILL_URL};
use std::collections::BTreeMap;

/// A complete standalone document: generated CSS inline, body fragment
/// under `<main class="content">`, and the paged-media polyfill.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmlEnvelope {
    pub title: String,
    pub author: Option<String>,
    pub language: String,
    /// Pre-rendered HTML fragment, inserted verbatim
    pub content: String,
    /// Generated stylesheet, inserted verbatim
    pub css: String,
    /// Extra `<meta name=… content=…>` pairs, emitted in key order
    pub metadata: BTreeMap<String, String>,
}

impl HtmlEnvelope {
    pub fn new(title: impl Into<String>, content: impl Into<String>, css: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            author: None,
            language: DEFAULT_LANGUAGE.to_string(),
            content: content.into(),
            css: css.into(),
            metadata: BTreeMap::new(),
        }
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    pub fn render(&self) -> String {
        let attr = |s: &str| html_escape::encode_double_quoted_attribute(s).into_owned();

        let mut html = format!(
            r#"<!DOCTYPE html>
<html lang="{lang}">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <meta name="generator" content="{generator}">
"#,
            lang = attr(&self.language),
            generator = GENERATOR,
        );

        if let Some(author) = self.author.as_deref().filter(|a| !a.is_empty()) {
            html.push_str(&format!(
                "  <meta name=\"author\" content=\"{}\">\n",
                attr(author)
            ));
        }

        html.push_str(&format!(
            r#"  <title>{title}</title>

  <script src="{polyfill}"></script>

  <style>
{css}
  </style>
"#,
            title = html_escape::encode_text(&self.title),
            polyfill = PAGED_POLYFILL_URL,
            css = self.css,
        ));

        for (key, value) in &self.metadata {
            html.push_str(&format!(
                "  <meta name=\"{}\" content=\"{}\">\n",
                attr(key),
                attr(value)
            ));
        }

        html.push_str(&format!(
            r#"</head>
<body>
  <main class="content">
{content}
  </main>
</body>
</html>
"#,
            content = self.content,
        ));

        html
    }
}
