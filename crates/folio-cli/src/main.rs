mod logger;

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand, ValueEnum};
use folio_latex::{Template, Value};
use folio_render::{
    CleanupPolicy, CompilerOptions, ConvertOptions, FontSubsetter, LatexCompiler, LatexEngine,
    PagedRenderer, PagedRendererOptions, PandocConverter, RenderError, SubsetOptions,
    validate_pdf,
};
use folio_style::constants::in_to_pt;
use folio_style::{
    CanonGeometry, GridVariant, HtmlEnvelope, PageNumberPosition, PageNumberStyle, PageSize,
    StyleConfig,
};
use log::LevelFilter;
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Parser)]
#[command(name = "folio", about = "Book typography and PDF production", version)]
struct Cli {
    /// Log debug output
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,

    /// Only log warnings and errors
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the Van de Graaf canon for a page
    Geometry {
        /// Named page size (5x8, 5.5x8.5, 6x9, 7x10, 8.5x11, A4, A5, crown_quarto)
        #[arg(long, conflicts_with_all = ["width", "height"])]
        size: Option<String>,

        /// Page width in inches
        #[arg(long, requires = "height")]
        width: Option<f64>,

        /// Page height in inches
        #[arg(long, requires = "width")]
        height: Option<f64>,

        /// Print the @page CSS instead of the table
        #[arg(long)]
        css: bool,
    },

    /// Compose a print stylesheet
    Css {
        #[command(flatten)]
        style: StyleArgs,

        /// Output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Wrap an HTML body fragment in a styled document
    Html {
        /// HTML fragment for the body
        #[arg(long)]
        body: PathBuf,

        #[arg(long)]
        title: String,

        #[arg(long)]
        author: Option<String>,

        /// Document language
        #[arg(long, default_value = "en")]
        lang: String,

        /// Use this stylesheet instead of composing one
        #[arg(long)]
        css: Option<PathBuf>,

        /// Extra <meta> entry, repeatable
        #[arg(long = "meta", value_parser = parse_key_val)]
        meta: Vec<(String, String)>,

        #[command(flatten)]
        style: StyleArgs,

        /// Output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Convert Markdown to standalone HTML with pandoc
    Markdown {
        input: PathBuf,

        #[arg(short, long)]
        output: PathBuf,

        /// Stylesheet link, repeatable
        #[arg(long)]
        css: Vec<String>,

        /// pandoc template
        #[arg(long)]
        template: Option<PathBuf>,

        /// pandoc metadata entry, repeatable
        #[arg(long = "metadata", value_parser = parse_key_val)]
        metadata: Vec<(String, String)>,

        /// Skip the table of contents
        #[arg(long)]
        no_toc: bool,
    },

    /// Render HTML to PDF with the paged-media renderer
    Pdf {
        input: PathBuf,

        #[arg(short, long)]
        output: PathBuf,

        /// Deadline in seconds
        #[arg(long, default_value = "60")]
        timeout: u64,

        /// Renderer executable
        #[arg(long, default_value = "pagedjs-cli")]
        renderer: String,
    },

    /// Compile a LaTeX source to PDF
    Latex {
        input: PathBuf,

        #[arg(short, long)]
        output: PathBuf,

        #[arg(long, default_value = "pdflatex", value_enum)]
        engine: EngineArg,

        /// Per-pass deadline in seconds
        #[arg(long, default_value = "30")]
        timeout: u64,

        /// Keep the work directory
        #[arg(long, conflicts_with = "keep_on_failure")]
        keep_temp: bool,

        /// Keep the work directory only when compilation fails
        #[arg(long)]
        keep_on_failure: bool,

        /// Argument passed to the engine, repeatable
        #[arg(long = "extra-arg", allow_hyphen_values = true)]
        extra_args: Vec<String>,

        /// Render the input as a template with variables from this JSON object
        #[arg(long)]
        vars: Option<PathBuf>,
    },

    /// Subset a font to WOFF2
    Subset {
        font: PathBuf,

        #[arg(short, long)]
        output: PathBuf,

        /// Characters to keep
        #[arg(long, conflicts_with = "html")]
        text: Option<String>,

        /// Keep the characters used in this HTML file
        #[arg(long)]
        html: Option<PathBuf>,
    },

    /// Check that a file looks like a PDF
    Validate { file: PathBuf },
}

/// Style overrides shared by `css` and `html`
#[derive(Args)]
struct StyleArgs {
    /// JSON style configuration
    #[arg(long)]
    config: Option<PathBuf>,

    /// Named page size
    #[arg(long)]
    size: Option<String>,

    #[arg(long, value_enum)]
    grid: Option<GridArg>,

    /// Body size in points
    #[arg(long)]
    base: Option<f64>,

    /// Type scale ratio
    #[arg(long)]
    ratio: Option<f64>,

    #[arg(long)]
    font_family: Option<String>,

    #[arg(long)]
    line_height: Option<f64>,

    /// Page number counter style
    #[arg(long, value_enum)]
    page_numbers: Option<PageNumberArg>,

    #[arg(long, value_enum, default_value = "bottom-center")]
    page_number_position: PositionArg,

    /// Chapter and section titles in the top margins
    #[arg(long)]
    running_headers: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum GridArg {
    Single,
    Two,
    Three,
    Six,
    Twelve,
}

#[derive(Clone, Copy, ValueEnum)]
enum PageNumberArg {
    Decimal,
    LowerRoman,
    UpperRoman,
    LowerAlpha,
}

#[derive(Clone, Copy, ValueEnum)]
enum PositionArg {
    BottomCenter,
    BottomRight,
    TopRight,
}

#[derive(Clone, Copy, ValueEnum)]
enum EngineArg {
    Pdflatex,
    Xelatex,
    Lualatex,
}

impl From<GridArg> for GridVariant {
    fn from(arg: GridArg) -> Self {
        match arg {
            GridArg::Single => Self::Single,
            GridArg::Two => Self::Two,
            GridArg::Three => Self::Three,
            GridArg::Six => Self::Six,
            GridArg::Twelve => Self::Twelve,
        }
    }
}

impl From<PageNumberArg> for PageNumberStyle {
    fn from(arg: PageNumberArg) -> Self {
        match arg {
            PageNumberArg::Decimal => Self::Decimal,
            PageNumberArg::LowerRoman => Self::LowerRoman,
            PageNumberArg::UpperRoman => Self::UpperRoman,
            PageNumberArg::LowerAlpha => Self::LowerAlpha,
        }
    }
}

impl From<PositionArg> for PageNumberPosition {
    fn from(arg: PositionArg) -> Self {
        match arg {
            PositionArg::BottomCenter => Self::BottomCenter,
            PositionArg::BottomRight => Self::BottomRight,
            PositionArg::TopRight => Self::TopRight,
        }
    }
}

impl From<EngineArg> for LatexEngine {
    fn from(arg: EngineArg) -> Self {
        match arg {
            EngineArg::Pdflatex => Self::Pdflatex,
            EngineArg::Xelatex => Self::Xelatex,
            EngineArg::Lualatex => Self::Lualatex,
        }
    }
}

impl StyleArgs {
    /// Config file (or defaults) with command-line overrides applied
    fn resolve(&self) -> Result<StyleConfig> {
        let mut config = match &self.config {
            Some(path) => StyleConfig::load(path)
                .with_context(|| format!("Failed to load style config {}", path.display()))?,
            None => StyleConfig::default(),
        };

        if let Some(size) = &self.size {
            config.page_size = size.parse::<PageSize>()?;
        }
        if let Some(grid) = self.grid {
            config.grid = grid.into();
        }
        if let Some(base) = self.base {
            config.font_size_pt = base;
        }
        if let Some(ratio) = self.ratio {
            config.scale_ratio = ratio;
        }
        if let Some(family) = &self.font_family {
            config.font_family = family.clone();
        }
        if let Some(line_height) = self.line_height {
            config.line_height = line_height;
        }
        if let Some(style) = self.page_numbers {
            config.paged.page_numbers = true;
            config.paged.page_number_style = style.into();
            config.paged.page_number_position = self.page_number_position.into();
        }
        if self.running_headers {
            config.paged.running_headers = true;
        }

        config.validate()?;
        Ok(config)
    }
}

fn parse_key_val(s: &str) -> std::result::Result<(String, String), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got '{}'", s))?;
    if key.is_empty() {
        return Err(format!("empty key in '{}'", s));
    }
    Ok((key.to_string(), value.to_string()))
}

async fn write_or_print(output: Option<&Path>, text: &str) -> Result<()> {
    match output {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                tokio::fs::create_dir_all(parent).await?;
            }
            tokio::fs::write(path, text)
                .await
                .with_context(|| format!("Failed to write {}", path.display()))?;
            log::info!("Wrote {}", path.display());
        }
        None => print!("{}", text),
    }
    Ok(())
}

async fn load_template_vars(path: &Path) -> Result<Vec<(String, Value)>> {
    let text = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let json: serde_json::Value = serde_json::from_str(&text)
        .with_context(|| format!("Failed to parse {}", path.display()))?;

    let serde_json::Value::Object(map) = json else {
        bail!("{} must contain a JSON object", path.display());
    };
    Ok(map.into_iter().map(|(k, v)| (k, Value::from(v))).collect())
}

fn print_geometry(canon: &CanonGeometry) {
    let rows = [
        ("Page width", canon.page_width_in),
        ("Page height", canon.page_height_in),
        ("Text block width", canon.text_block_width_in),
        ("Text block height", canon.text_block_height_in),
        ("Inner margin", canon.margin_inner_in),
        ("Top margin", canon.margin_top_in),
        ("Outer margin", canon.margin_outer_in),
        ("Bottom margin", canon.margin_bottom_in),
    ];

    println!("Van de Graaf canon:");
    for (label, inches) in rows {
        println!("  {:<18} {:>6.2} in  {:>7.1} pt", label, inches, in_to_pt(inches));
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        LevelFilter::Debug
    } else if cli.quiet {
        LevelFilter::Warn
    } else {
        LevelFilter::Info
    };
    logger::StderrLogger::new(level).init()?;

    match cli.command {
        Commands::Geometry {
            size,
            width,
            height,
            css,
        } => {
            let canon = match (size, width, height) {
                (Some(name), _, _) => CanonGeometry::for_named(&name)?,
                (None, Some(w), Some(h)) => CanonGeometry::van_de_graaf(w, h)?,
                _ => CanonGeometry::for_page(StyleConfig::default().page_size)?,
            };

            if css {
                print!("{}", canon.to_css());
            } else {
                print_geometry(&canon);
            }
        }

        Commands::Css { style, output } => {
            let stylesheet = style.resolve()?.stylesheet()?;
            write_or_print(output.as_deref(), &stylesheet).await?;
        }

        Commands::Html {
            body,
            title,
            author,
            lang,
            css,
            meta,
            style,
            output,
        } => {
            let content = tokio::fs::read_to_string(&body)
                .await
                .with_context(|| format!("Failed to read {}", body.display()))?;
            let stylesheet = match css {
                Some(path) => tokio::fs::read_to_string(&path)
                    .await
                    .with_context(|| format!("Failed to read {}", path.display()))?,
                None => style.resolve()?.stylesheet()?,
            };

            let mut envelope = HtmlEnvelope::new(title, content, stylesheet).with_language(lang);
            if let Some(author) = author {
                envelope = envelope.with_author(author);
            }
            for (key, value) in meta {
                envelope = envelope.with_metadata(key, value);
            }

            write_or_print(output.as_deref(), &envelope.render()).await?;
        }

        Commands::Markdown {
            input,
            output,
            css,
            template,
            metadata,
            no_toc,
        } => {
            let pandoc = PandocConverter::new()?;
            log::debug!("{}", pandoc.version().await?);

            let options = ConvertOptions {
                toc: !no_toc,
                template,
                metadata: metadata.into_iter().collect(),
                css,
                ..ConvertOptions::html_defaults()
            };
            pandoc.convert_file(&input, &output, &options).await?;
            println!("Converted → {}", output.display());
        }

        Commands::Pdf {
            input,
            output,
            timeout,
            renderer,
        } => {
            let renderer = PagedRenderer::with_options(PagedRendererOptions {
                tool: renderer,
                timeout: Duration::from_secs(timeout),
            })?;
            renderer.render(&input, &output).await?;
            validate_pdf(&output)
                .await
                .with_context(|| format!("{} is not a usable PDF", output.display()))?;
            println!("Rendered → {}", output.display());
        }

        Commands::Latex {
            input,
            output,
            engine,
            timeout,
            keep_temp,
            keep_on_failure,
            extra_args,
            vars,
        } => {
            let mut source = tokio::fs::read_to_string(&input)
                .await
                .with_context(|| format!("Failed to read {}", input.display()))?;

            if let Some(vars) = vars {
                let mut template = Template::with_standard_functions(source);
                template.set_variables(load_template_vars(&vars).await?);
                source = template.render().context("Template rendering failed")?;
            }

            let cleanup = if keep_temp {
                CleanupPolicy::Never
            } else if keep_on_failure {
                CleanupPolicy::KeepOnFailure
            } else {
                CleanupPolicy::Always
            };
            let mut compiler = LatexCompiler::new(CompilerOptions {
                engine: engine.into(),
                timeout: Duration::from_secs(timeout),
                cleanup,
                extra_args,
            })?;

            let outcome = match compiler.compile(&source).await {
                Ok(outcome) => outcome,
                Err(err) => {
                    if let RenderError::Compilation { diagnostics, .. } = &err {
                        for diagnostic in &diagnostics.errors {
                            eprintln!("{}", diagnostic);
                        }
                    }
                    compiler.cleanup()?;
                    return Err(err.into());
                }
            };

            for warning in &outcome.warnings {
                eprintln!("{}", warning);
            }
            compiler.copy_pdf(&outcome, &output).await?;
            compiler.cleanup()?;
            println!(
                "Compiled → {} in {:.2?} ({} warning(s))",
                output.display(),
                outcome.duration,
                outcome.warnings.len()
            );
        }

        Commands::Subset {
            font,
            output,
            text,
            html,
        } => {
            let subsetter = FontSubsetter::new()?;
            match html {
                Some(path) => {
                    let html = tokio::fs::read_to_string(&path)
                        .await
                        .with_context(|| format!("Failed to read {}", path.display()))?;
                    subsetter.subset_for_html(&font, &html, &output).await?;
                }
                None => {
                    let mut options = SubsetOptions::new(&font, &output);
                    options.text = text;
                    subsetter.subset(&options).await?;
                }
            }
            println!("Subset → {}", output.display());
        }

        Commands::Validate { file } => {
            validate_pdf(&file).await?;
            println!("{}: OK", file.display());
        }
    }

    Ok(())
}
