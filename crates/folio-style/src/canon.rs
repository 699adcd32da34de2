//! Van de Graaf canon page geometry
//!
//! The canon places a text block similar to the page whose height equals
//! the page width. On a 2:3 page the margins come out in the proportion
//! 2:3:4:6 (inner:top:outer:bottom).

use crate::types::*;

/// Page, text block and margin lengths, all in inches.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CanonGeometry {
    pub page_width_in: f64,
    pub page_height_in: f64,
    pub text_block_width_in: f64,
    pub text_block_height_in: f64,
    /// Spine-side margin
    pub margin_inner_in: f64,
    /// Head margin
    pub margin_top_in: f64,
    /// Fore-edge margin
    pub margin_outer_in: f64,
    /// Tail margin
    pub margin_bottom_in: f64,
}

impl CanonGeometry {
    /// Construct the canon for a page of the given size.
    ///
    /// # Errors
    /// `InvalidDimensions` when either side is zero, negative or not finite.
    pub fn van_de_graaf(page_width_in: f64, page_height_in: f64) -> Result<Self> {
        let valid = |v: f64| v.is_finite() && v > 0.0;
        if !valid(page_width_in) || !valid(page_height_in) {
            return Err(StyleError::InvalidDimensions {
                width: page_width_in,
                height: page_height_in,
            });
        }

        let ratio = page_height_in / page_width_in;

        let text_block_height_in = page_width_in;
        let text_block_width_in = text_block_height_in / ratio;

        let margin_top_in = (page_height_in - text_block_height_in) / (1.0 + ratio);
        let margin_bottom_in = margin_top_in * ratio;
        let margin_inner_in = (page_width_in - text_block_width_in) / (1.0 + ratio);
        let margin_outer_in = margin_inner_in * ratio;

        Ok(Self {
            page_width_in,
            page_height_in,
            text_block_width_in,
            text_block_height_in,
            margin_inner_in,
            margin_top_in,
            margin_outer_in,
            margin_bottom_in,
        })
    }

    /// Canon for a registry or custom page size
    pub fn for_page(size: PageSize) -> Result<Self> {
        let (w, h) = size.dimensions_in();
        Self::van_de_graaf(w, h)
    }

    /// Canon for a registry name such as `6x9` or `A4`.
    ///
    /// # Errors
    /// `UnknownPageSize` when the name is not in the registry.
    pub fn for_named(name: &str) -> Result<Self> {
        Self::for_page(name.parse()?)
    }

    /// Page height over page width
    pub fn page_ratio(&self) -> f64 {
        self.page_height_in / self.page_width_in
    }

    /// `@page` box plus a `.text-block` rule sized to the computed block.
    ///
    /// Inner margin maps to `margin-left`, outer to `margin-right`.
    pub fn to_css(&self) -> String {
        format!(
            r#"
@page {{
  size: {:.2}in {:.2}in;
  margin-top: {:.2}in;
  margin-right: {:.2}in;
  margin-bottom: {:.2}in;
  margin-left: {:.2}in;
}}

.text-block {{
  width: {:.2}in;
  height: {:.2}in;
}}
"#,
            self.page_width_in,
            self.page_height_in,
            self.margin_top_in,
            self.margin_outer_in,
            self.margin_bottom_in,
            self.margin_inner_in,
            self.text_block_width_in,
            self.text_block_height_in,
        )
    }
}
