//! Müller-Brockmann column grids
//!
//! A fixed set of column counts, each with a default gutter and baseline
//! rhythm, plus the rule that picks a grid from what the content contains.

use crate::constants::{DEFAULT_BASELINE_EM, GRID_SPANS};
use std::fmt;
use std::str::FromStr;

/// Predefined grid variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum GridVariant {
    /// Plain prose
    #[default]
    Single,
    /// Manuals, magazines
    Two,
    /// Newspapers, magazines
    Three,
    /// Complex image/table layouts
    Six,
    /// Maximum flexibility
    Twelve,
}

impl GridVariant {
    pub fn columns(self) -> u32 {
        match self {
            GridVariant::Single => 1,
            GridVariant::Two => 2,
            GridVariant::Three => 3,
            GridVariant::Six => 6,
            GridVariant::Twelve => 12,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            GridVariant::Single => "single",
            GridVariant::Two => "two",
            GridVariant::Three => "three",
            GridVariant::Six => "six",
            GridVariant::Twelve => "twelve",
        }
    }

    pub fn all() -> &'static [GridVariant] {
        &[
            GridVariant::Single,
            GridVariant::Two,
            GridVariant::Three,
            GridVariant::Six,
            GridVariant::Twelve,
        ]
    }

    pub fn from_columns(columns: u32) -> Option<GridVariant> {
        Self::all().iter().copied().find(|v| v.columns() == columns)
    }

    /// Parse a variant name or column count, falling back to `Single`.
    pub fn parse_or_single(s: &str) -> GridVariant {
        s.parse().unwrap_or_else(|_| {
            log::warn!("Unknown grid variant '{}', using single column", s);
            GridVariant::Single
        })
    }
}

impl fmt::Display for GridVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for GridVariant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_ascii_lowercase();
        if let Ok(columns) = lowered.parse::<u32>() {
            return GridVariant::from_columns(columns)
                .ok_or_else(|| format!("no predefined grid with {} columns", columns));
        }
        GridVariant::all()
            .iter()
            .copied()
            .find(|v| v.name() == lowered)
            .ok_or_else(|| format!("unknown grid variant '{}'", s))
    }
}

/// Grid parameters consumed by the stylesheet composer
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridSystem {
    pub columns: u32,
    /// Space between columns (em)
    pub gutter_width_em: f64,
    /// Space between rows (em)
    pub gutter_height_em: Option<f64>,
    /// Baseline rhythm (em)
    pub baseline_em: f64,
}

impl GridSystem {
    pub fn new(variant: GridVariant) -> Self {
        let gutter_width_em = match variant {
            GridVariant::Single => 0.0,
            GridVariant::Two => 1.5,
            GridVariant::Three => 1.0,
            GridVariant::Six => 0.75,
            GridVariant::Twelve => 0.5,
        };

        Self {
            columns: variant.columns(),
            gutter_width_em,
            gutter_height_em: None,
            baseline_em: DEFAULT_BASELINE_EM,
        }
    }

    /// Grid for a column count; counts without a predefined variant
    /// fall back to a single column.
    pub fn for_columns(columns: u32) -> Self {
        match GridVariant::from_columns(columns) {
            Some(variant) => Self::new(variant),
            None => {
                log::warn!("No grid with {} columns, using single column", columns);
                Self::new(GridVariant::Single)
            }
        }
    }

    pub fn is_single_column(&self) -> bool {
        self.columns <= 1
    }

    /// `1fr` repeated once per column, space separated
    pub fn column_template(&self) -> String {
        vec!["1fr"; self.columns.max(1) as usize].join(" ")
    }

    /// CSS for the grid.
    ///
    /// Single-column grids only lock the content line-height to the baseline.
    pub fn to_css(&self) -> String {
        if self.is_single_column() {
            return format!(
                r#"
.content {{
  line-height: {:.2}em;
}}
"#,
                self.baseline_em
            );
        }

        let mut css = format!(
            r#"
.grid-container {{
  display: grid;
  grid-template-columns: {};
  gap: {:.2}em;
"#,
            self.column_template(),
            self.gutter_width_em,
        );
        if let Some(row_gap) = self.gutter_height_em {
            css.push_str(&format!("  row-gap: {:.2}em;\n", row_gap));
        }
        css.push_str(&format!("  line-height: {:.2}em;\n", self.baseline_em));
        css.push_str("}\n");

        for span in GRID_SPANS {
            css.push_str(&format!(
                "\n.grid-span-{span} {{\n  grid-column: span {span};\n}}\n"
            ));
        }

        css
    }
}

impl Default for GridSystem {
    fn default() -> Self {
        Self::new(GridVariant::Single)
    }
}

/// How involved the content structure is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Complexity {
    #[default]
    Low,
    High,
}

/// What the manuscript contains, as reported by content analysis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ContentSignals {
    pub has_images: bool,
    pub has_code: bool,
    pub has_tables: bool,
    pub complexity: Complexity,
}

/// Pick a grid variant from content signals.
///
/// Text only → single; high-complexity code → two; images with tables →
/// six; images → three; anything else → two.
pub fn select_grid(signals: &ContentSignals) -> GridVariant {
    let ContentSignals {
        has_images,
        has_code,
        has_tables,
        complexity,
    } = *signals;

    if !has_images && !has_code && !has_tables {
        return GridVariant::Single;
    }

    if has_code && complexity == Complexity::High {
        return GridVariant::Two;
    }

    if has_images && has_tables {
        return GridVariant::Six;
    }

    if has_images {
        return GridVariant::Three;
    }

    GridVariant::Two
}
