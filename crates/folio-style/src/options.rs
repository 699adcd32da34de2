use crate::canon::CanonGeometry;
use crate::constants::*;
use crate::css::{CssComposer, CssConfig};
use crate::grid::{GridSystem, GridVariant};
use crate::paged::PagedMediaOptions;
use crate::palette::ColorPalette;
use crate::scale::TypeScale;
use crate::types::*;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Book style configuration
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct StyleConfig {
    // Page
    pub page_size: PageSize,
    pub grid: GridVariant,

    // Type
    pub font_family: String,
    /// Body size, also the base of the modular scale
    pub font_size_pt: f64,
    pub scale_ratio: f64,
    pub line_height: f64,

    // Colour
    pub palette: ColorPalette,

    // Paged media
    pub paged: PagedMediaOptions,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            page_size: PageSize::UsTrade,
            grid: GridVariant::Single,
            font_family: DEFAULT_FONT_FAMILY.to_string(),
            font_size_pt: DEFAULT_BASE_SIZE_PT,
            scale_ratio: RATIO_MINOR_THIRD,
            line_height: DEFAULT_LINE_HEIGHT,
            palette: ColorPalette::default(),
            paged: PagedMediaOptions::default(),
        }
    }
}

impl StyleConfig {
    /// Load configuration from a JSON file
    #[cfg(feature = "serde")]
    pub fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let bytes = std::fs::read(path)?;
        let config = serde_json::from_slice(&bytes)
            .map_err(|e| StyleError::Config(format!("Failed to parse config: {}", e)))?;
        Ok(config)
    }

    /// Save configuration to a JSON file
    #[cfg(feature = "serde")]
    pub fn save(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.font_family.trim().is_empty() {
            return Err(StyleError::Config("Font family is empty".to_string()));
        }

        if !(self.line_height.is_finite() && self.line_height > 0.0) {
            return Err(StyleError::Config(format!(
                "Line height must be positive, got {}",
                self.line_height
            )));
        }

        // Surfaces InvalidDimensions / InvalidScale
        CanonGeometry::for_page(self.page_size)?;
        TypeScale::new(self.font_size_pt, self.scale_ratio)?;

        self.palette.validate()
    }

    /// Resolve the geometry, grid and scale records for the composer
    pub fn css_config(&self) -> Result<CssConfig> {
        self.validate()?;

        Ok(CssConfig {
            canon: CanonGeometry::for_page(self.page_size)?,
            grid: GridSystem::new(self.grid),
            scale: TypeScale::new(self.font_size_pt, self.scale_ratio)?,
            palette: self.palette.clone(),
            font_family: self.font_family.clone(),
            line_height: self.line_height,
            paged: self.paged,
        })
    }

    /// Validate and compose the stylesheet in one step
    pub fn stylesheet(&self) -> Result<String> {
        let composer = CssComposer::new(self.css_config()?);
        log::debug!(
            "Composing stylesheet for {} page, {} grid",
            self.page_size,
            self.grid
        );
        Ok(composer.compose())
    }
}
