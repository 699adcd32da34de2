//! Shared constants for stylesheet generation
//!
//! This module centralizes the defaults and fixed values used when
//! composing page geometry, grids and type scales into CSS.

// =============================================================================
// Unit Conversion
// =============================================================================

/// Points per inch
pub const POINTS_PER_INCH: f64 = 72.0;

/// Convert inches to points
#[inline]
pub fn in_to_pt(inches: f64) -> f64 {
    inches * POINTS_PER_INCH
}

// =============================================================================
// Type Scale
// =============================================================================

/// Default body size (points)
pub const DEFAULT_BASE_SIZE_PT: f64 = 11.0;

/// Minor third
pub const RATIO_MINOR_THIRD: f64 = 1.2;

/// Perfect fourth
pub const RATIO_PERFECT_FOURTH: f64 = 1.333;

/// Golden section
pub const RATIO_GOLDEN: f64 = 1.618;

/// Default paragraph leading (unitless line-height)
pub const DEFAULT_LINE_HEIGHT: f64 = 1.5;

/// Default font stack
pub const DEFAULT_FONT_FAMILY: &str = "Georgia, 'Times New Roman', serif";

// =============================================================================
// Grid
// =============================================================================

/// Baseline rhythm shared by every predefined grid (em)
pub const DEFAULT_BASELINE_EM: f64 = 1.5;

/// Column spans that get a `.grid-span-N` helper class
pub const GRID_SPANS: [u32; 5] = [2, 3, 4, 6, 12];

// =============================================================================
// Microtypography
// =============================================================================

/// Minimum lines left at the bottom (orphans) or top (widows) of a page
pub const WIDOW_ORPHAN_FLOOR: u32 = 3;

// =============================================================================
// HTML Envelope
// =============================================================================

/// Paged-media polyfill loaded by every generated document
pub const PAGED_POLYFILL_URL: &str = "https://unpkg.com/pagedjs/dist/paged.polyfill.js";

/// Value of the `generator` meta tag
pub const GENERATOR: &str = "folio typesetting toolchain";

/// Default document language tag
pub const DEFAULT_LANGUAGE: &str = "en";
