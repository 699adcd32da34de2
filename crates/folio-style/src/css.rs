//! Stylesheet composition
//!
//! Combines a canon page, a grid, a type scale and a palette into one
//! print stylesheet. Output is a pure function of the configuration, so
//! equal inputs give byte-identical CSS.

use crate::canon::CanonGeometry;
use crate::constants::{DEFAULT_FONT_FAMILY, DEFAULT_LINE_HEIGHT, WIDOW_ORPHAN_FLOOR};
use crate::grid::GridSystem;
use crate::paged::PagedMediaOptions;
use crate::palette::ColorPalette;
use crate::scale::TypeScale;

/// Everything the composer reads
#[derive(Debug, Clone, PartialEq)]
pub struct CssConfig {
    pub canon: CanonGeometry,
    pub grid: GridSystem,
    pub scale: TypeScale,
    pub palette: ColorPalette,
    /// Substituted verbatim into `--font-family`
    pub font_family: String,
    /// Unitless paragraph leading
    pub line_height: f64,
    pub paged: PagedMediaOptions,
}

impl CssConfig {
    pub fn new(canon: CanonGeometry, grid: GridSystem, scale: TypeScale) -> Self {
        Self {
            canon,
            grid,
            scale,
            palette: ColorPalette::default(),
            font_family: DEFAULT_FONT_FAMILY.to_string(),
            line_height: DEFAULT_LINE_HEIGHT,
            paged: PagedMediaOptions::default(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CssComposer {
    config: CssConfig,
}

impl CssComposer {
    pub fn new(config: CssConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CssConfig {
        &self.config
    }

    /// Render the complete stylesheet.
    pub fn compose(&self) -> String {
        let CssConfig {
            canon,
            grid,
            scale,
            palette,
            font_family,
            line_height,
            paged,
        } = &self.config;

        let mut css = String::with_capacity(8192);

        css.push_str(
            r#"/* ========================================
   Generated stylesheet
   Van de Graaf canon, Müller-Brockmann grid,
   modular type scale
   ======================================== */

/* === Page setup === */"#,
        );
        css.push_str(&canon.to_css());

        css.push_str("\n/* === Grid === */");
        css.push_str(&grid.to_css());

        css.push_str(&format!(
            r#"
/* === Type scale === */
:root {{
  --font-family: {font_family};
  --font-size-base: {body}pt;
  --line-height-base: {line_height};

  --font-size-h1: {h1}pt;
  --font-size-h2: {h2}pt;
  --font-size-h3: {h3}pt;
  --font-size-h4: {h4}pt;
  --font-size-body: {body}pt;

  --color-primary: {primary};
  --color-secondary: {secondary};
  --color-accent: {accent};
  --color-text: {text};
  --color-background: {background};
}}
"#,
            body = fmt_number(scale.body),
            h1 = fmt_number(scale.h1),
            h2 = fmt_number(scale.h2),
            h3 = fmt_number(scale.h3),
            h4 = fmt_number(scale.h4),
            line_height = fmt_number(*line_height),
            primary = palette.primary,
            secondary = palette.secondary,
            accent = palette.accent,
            text = palette.text,
            background = palette.background,
        ));

        css.push_str(&body_styles());

        let paged_css = paged.to_css();
        if !paged_css.is_empty() {
            css.push_str("\n/* === Paged media === */");
            css.push_str(&paged_css);
        }

        css
    }
}

/// Up to three decimals with trailing zeros removed: `12`, `14.4`, `20.736`
fn fmt_number(value: f64) -> String {
    let fixed = format!("{:.3}", value);
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    if trimmed == "-0" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Element styling; refers to the custom properties only.
fn body_styles() -> String {
    let floor = WIDOW_ORPHAN_FLOOR;
    format!(
        r#"
/* === Base === */
* {{
  margin: 0;
  padding: 0;
  box-sizing: border-box;
}}

body {{
  font-family: var(--font-family);
  font-size: var(--font-size-base);
  line-height: var(--line-height-base);
  color: var(--color-text);
  background-color: var(--color-background);
}}

/* === Headings === */
h1 {{
  font-size: var(--font-size-h1);
  margin-bottom: calc(var(--line-height-base) * 2em);
  color: var(--color-primary);
}}

h2 {{
  font-size: var(--font-size-h2);
  margin-top: calc(var(--line-height-base) * 2em);
  margin-bottom: calc(var(--line-height-base) * 1em);
  color: var(--color-primary);
}}

h3 {{
  font-size: var(--font-size-h3);
  margin-top: calc(var(--line-height-base) * 1.5em);
  margin-bottom: calc(var(--line-height-base) * 0.75em);
}}

h4 {{
  font-size: var(--font-size-h4);
  margin-top: calc(var(--line-height-base) * 1em);
  margin-bottom: calc(var(--line-height-base) * 0.5em);
}}

/* === Paragraphs === */
p {{
  margin-bottom: calc(var(--line-height-base) * 1em);
  text-align: justify;
  hyphens: auto;
  orphans: {floor};
  widows: {floor};
}}

p:first-child {{
  text-indent: 0;
}}

p + p {{
  text-indent: 1.5em;
}}

h1, h2, h3, h4, h5, h6 {{
  page-break-after: avoid;
  orphans: {floor};
  widows: {floor};
}}

/* === Code === */
pre {{
  margin: calc(var(--line-height-base) * 1em) 0;
  padding: 1em;
  background-color: #f5f5f5;
  border-left: 4px solid var(--color-accent);
  overflow-x: auto;
  font-family: 'Courier New', monospace;
  font-size: 0.9em;
}}

code {{
  font-family: 'Courier New', monospace;
  background-color: #f5f5f5;
  padding: 0.2em 0.4em;
}}

/* === Quotes === */
blockquote {{
  margin: calc(var(--line-height-base) * 1em) 2em;
  padding-left: 1em;
  border-left: 4px solid var(--color-accent);
  font-style: italic;
  color: var(--color-secondary);
}}

/* === Lists === */
ul, ol {{
  margin: calc(var(--line-height-base) * 1em) 0;
  padding-left: 2em;
}}

li {{
  margin-bottom: calc(var(--line-height-base) * 0.5em);
}}

/* === Figures === */
img {{
  max-width: 100%;
  height: auto;
  display: block;
  margin: calc(var(--line-height-base) * 1em) auto;
}}

figure {{
  margin: calc(var(--line-height-base) * 1.5em) 0;
  text-align: center;
}}

figcaption {{
  font-size: 0.9em;
  font-style: italic;
  color: var(--color-secondary);
  margin-top: 0.5em;
}}

/* === Tables === */
table {{
  width: 100%;
  margin: calc(var(--line-height-base) * 1em) 0;
  border-collapse: collapse;
}}

th, td {{
  padding: 0.5em;
  border: 1px solid #ddd;
  text-align: left;
}}

th {{
  background-color: var(--color-primary);
  color: white;
}}

/* === Links === */
a {{
  color: var(--color-accent);
  text-decoration: none;
}}

/* === Print === */
@media print {{
  body {{
    background-color: white;
  }}

  a {{
    color: var(--color-text);
  }}
}}
"#
    )
}

#[cfg(test)]
mod tests {
    use super::fmt_number;

    #[test]
    fn test_fmt_number_trims() {
        assert_eq!(fmt_number(12.0), "12");
        assert_eq!(fmt_number(14.399999999999999), "14.4");
        assert_eq!(fmt_number(20.736000000000004), "20.736");
        assert_eq!(fmt_number(1.5), "1.5");
        assert_eq!(fmt_number(0.0), "0");
    }
}
