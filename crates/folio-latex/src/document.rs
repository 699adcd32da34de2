//! LaTeX document model and serializer

use crate::packages::{Package, PackageBundle};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum DocumentClass {
    #[default]
    Article,
    Book,
    Report,
    Beamer,
}

impl DocumentClass {
    pub fn name(self) -> &'static str {
        match self {
            DocumentClass::Article => "article",
            DocumentClass::Book => "book",
            DocumentClass::Report => "report",
            DocumentClass::Beamer => "beamer",
        }
    }

    /// Only book and report define `\chapter`
    pub fn supports_chapters(self) -> bool {
        matches!(self, DocumentClass::Book | DocumentClass::Report)
    }

    pub fn all() -> &'static [DocumentClass] {
        &[
            DocumentClass::Article,
            DocumentClass::Book,
            DocumentClass::Report,
            DocumentClass::Beamer,
        ]
    }
}

impl fmt::Display for DocumentClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DocumentClass {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        DocumentClass::all()
            .iter()
            .copied()
            .find(|class| class.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("Unknown document class: {}", s))
    }
}

/// Title block. Empty strings count as unset.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Metadata {
    pub title: Option<String>,
    pub author: Option<String>,
    pub date: Option<String>,
    /// Carried for PDF metadata; not part of the title block
    pub subject: Option<String>,
}

impl Metadata {
    pub fn title(&self) -> Option<&str> {
        non_empty(&self.title)
    }

    pub fn author(&self) -> Option<&str> {
        non_empty(&self.author)
    }

    pub fn date(&self) -> Option<&str> {
        non_empty(&self.date)
    }

    fn has_title_block(&self) -> bool {
        self.title().is_some() || self.author().is_some() || self.date().is_some()
    }
}

fn non_empty(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.is_empty())
}

/// A finished document. Built through [`DocumentBuilder`], immutable after.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    class: DocumentClass,
    class_options: Vec<String>,
    packages: Vec<Package>,
    metadata: Metadata,
    content: Vec<String>,
}

impl Document {
    pub fn builder(class: DocumentClass) -> DocumentBuilder {
        DocumentBuilder::new(class)
    }

    pub fn class(&self) -> DocumentClass {
        self.class
    }

    pub fn class_options(&self) -> &[String] {
        &self.class_options
    }

    pub fn packages(&self) -> &[Package] {
        &self.packages
    }

    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    pub fn content(&self) -> &[String] {
        &self.content
    }

    /// Serialize to LaTeX source
    pub fn to_latex(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.class_options.is_empty() {
            writeln!(f, "\\documentclass{{{}}}", self.class)?;
        } else {
            writeln!(
                f,
                "\\documentclass[{}]{{{}}}",
                self.class_options.join(","),
                self.class
            )?;
        }
        writeln!(f)?;

        for package in &self.packages {
            writeln!(f, "{}", package)?;
        }
        if !self.packages.is_empty() {
            writeln!(f)?;
        }

        let meta = &self.metadata;
        if let Some(title) = meta.title() {
            writeln!(f, "\\title{{{}}}", title)?;
        }
        if let Some(author) = meta.author() {
            writeln!(f, "\\author{{{}}}", author)?;
        }
        if let Some(date) = meta.date() {
            writeln!(f, "\\date{{{}}}", date)?;
        }
        if meta.has_title_block() {
            writeln!(f)?;
        }

        f.write_str("\\begin{document}\n\n")?;

        if meta.title().is_some() || meta.author().is_some() {
            f.write_str("\\maketitle\n\n")?;
        }

        for fragment in &self.content {
            write!(f, "{}\n\n", fragment)?;
        }

        f.write_str("\\end{document}\n")
    }
}

/// Incremental construction of a [`Document`]
#[derive(Debug, Clone)]
pub struct DocumentBuilder {
    document: Document,
}

impl DocumentBuilder {
    pub fn new(class: DocumentClass) -> Self {
        Self {
            document: Document {
                class,
                class_options: Vec::new(),
                packages: Vec::new(),
                metadata: Metadata::default(),
                content: Vec::new(),
            },
        }
    }

    /// Class option such as `12pt` or `twoside`
    pub fn class_option(mut self, option: impl Into<String>) -> Self {
        self.document.class_options.push(option.into());
        self
    }

    pub fn package(mut self, package: Package) -> Self {
        self.document.packages.push(package);
        self
    }

    pub fn packages(mut self, packages: impl IntoIterator<Item = Package>) -> Self {
        self.document.packages.extend(packages);
        self
    }

    pub fn bundle(self, bundle: PackageBundle) -> Self {
        self.packages(bundle.packages())
    }

    pub fn metadata(mut self, metadata: Metadata) -> Self {
        self.document.metadata = metadata;
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.document.metadata.title = Some(title.into());
        self
    }

    pub fn author(mut self, author: impl Into<String>) -> Self {
        self.document.metadata.author = Some(author.into());
        self
    }

    pub fn date(mut self, date: impl Into<String>) -> Self {
        self.document.metadata.date = Some(date.into());
        self
    }

    pub fn subject(mut self, subject: impl Into<String>) -> Self {
        self.document.metadata.subject = Some(subject.into());
        self
    }

    /// Raw LaTeX fragment, emitted verbatim
    pub fn content(mut self, fragment: impl Into<String>) -> Self {
        self.document.content.push(fragment.into());
        self
    }

    pub fn section(self, title: &str, body: &str) -> Self {
        self.content(format!("\\section{{{}}}\n{}", title, body))
    }

    pub fn subsection(self, title: &str, body: &str) -> Self {
        self.content(format!("\\subsection{{{}}}\n{}", title, body))
    }

    /// Ignored for classes without chapters
    pub fn chapter(self, title: &str, body: &str) -> Self {
        if !self.document.class.supports_chapters() {
            log::warn!(
                "Dropping chapter '{}': document class {} has no chapters",
                title,
                self.document.class
            );
            return self;
        }
        self.content(format!("\\chapter{{{}}}\n{}", title, body))
    }

    pub fn build(self) -> Document {
        self.document
    }
}
