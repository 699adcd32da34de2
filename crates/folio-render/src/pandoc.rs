//! Markdown to HTML through pandoc

use crate::tool::{
    ToolCommand, combined_output, prepare_output_dir, require_input, require_tool,
};
use crate::types::*;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

const PANDOC: &str = "pandoc";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertOptions {
    pub from: String,
    pub to: String,
    pub standalone: bool,
    pub toc: bool,
    pub toc_depth: u8,
    pub template: Option<PathBuf>,
    /// `--variable k=v`
    pub variables: BTreeMap<String, String>,
    /// `--metadata k=v`
    pub metadata: BTreeMap<String, String>,
    /// `--css path`, in order
    pub css: Vec<String>,
    pub timeout: Option<Duration>,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self::html_defaults()
    }
}

impl ConvertOptions {
    /// Smart-punctuation Markdown to standalone HTML5 with a 3-level TOC
    pub fn html_defaults() -> Self {
        Self {
            from: "markdown+smart".to_string(),
            to: "html5".to_string(),
            standalone: true,
            toc: true,
            toc_depth: 3,
            template: None,
            variables: BTreeMap::new(),
            metadata: BTreeMap::new(),
            css: Vec::new(),
            timeout: None,
        }
    }

    pub fn to_args(&self) -> Vec<String> {
        let mut args = vec![
            "--from".to_string(),
            self.from.clone(),
            "--to".to_string(),
            self.to.clone(),
        ];

        if self.standalone {
            args.push("--standalone".to_string());
        }
        if self.toc {
            args.push("--toc".to_string());
            args.push(format!("--toc-depth={}", self.toc_depth));
        }
        if let Some(template) = &self.template {
            args.push("--template".to_string());
            args.push(template.display().to_string());
        }
        for (key, value) in &self.variables {
            args.push("--variable".to_string());
            args.push(format!("{}={}", key, value));
        }
        for (key, value) in &self.metadata {
            args.push("--metadata".to_string());
            args.push(format!("{}={}", key, value));
        }
        for css in &self.css {
            args.push("--css".to_string());
            args.push(css.clone());
        }

        args
    }
}

#[derive(Debug, Clone)]
pub struct PandocConverter {
    program: PathBuf,
}

impl PandocConverter {
    pub fn new() -> Result<Self> {
        Ok(Self {
            program: require_tool(PANDOC)?,
        })
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    /// Markdown in on stdin, document out on stdout
    pub async fn convert(&self, markdown: &str, options: &ConvertOptions) -> Result<String> {
        let mut command = ToolCommand::new(PANDOC, &self.program)
            .args(options.to_args())
            .stdin(markdown.as_bytes());
        if let Some(timeout) = options.timeout {
            command = command.timeout(timeout);
        }

        let output = command.run().await?;
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    pub async fn convert_file(
        &self,
        input: impl AsRef<Path>,
        output: impl AsRef<Path>,
        options: &ConvertOptions,
    ) -> Result<()> {
        let (input, output) = (input.as_ref(), output.as_ref());

        require_input(input).await?;
        let markdown = tokio::fs::read_to_string(input).await?;
        let html = self.convert(&markdown, options).await?;

        prepare_output_dir(output).await?;
        tokio::fs::write(output, &html).await?;
        log::info!("Converted {} -> {}", input.display(), output.display());
        Ok(())
    }

    /// First line of `pandoc --version`
    pub async fn version(&self) -> Result<String> {
        let output = ToolCommand::new(PANDOC, &self.program)
            .arg("--version")
            .run()
            .await?;
        let text = combined_output(&output);
        Ok(text.lines().next().unwrap_or_default().to_string())
    }
}

/// Insert a `:root` block of custom properties before `</head>`.
///
/// Returns the input unchanged when there are no variables or no head.
pub fn inject_css_variables(html: &str, variables: &BTreeMap<String, String>) -> String {
    if variables.is_empty() {
        return html.to_string();
    }
    let Some(at) = html.find("</head>") else {
        log::warn!("No </head> found; CSS variables not injected");
        return html.to_string();
    };

    let mut style = String::from("<style>\n:root {\n");
    for (key, value) in variables {
        style.push_str(&format!("  {}: {};\n", key, value));
    }
    style.push_str("}\n</style>\n");

    let mut out = String::with_capacity(html.len() + style.len());
    out.push_str(&html[..at]);
    out.push_str(&style);
    out.push_str(&html[at..]);
    out
}
