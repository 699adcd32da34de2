//! Modular type scale

use crate::types::*;

/// Heading and body sizes in points, generated by repeated
/// multiplication of the base size by the ratio.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TypeScale {
    pub base_pt: f64,
    pub ratio: f64,
    pub body: f64,
    pub h4: f64,
    pub h3: f64,
    pub h2: f64,
    pub h1: f64,
}

impl TypeScale {
    /// Build the scale for a base size (points) and ratio, e.g. 1.2 for a
    /// minor third or 1.618 for the golden section.
    ///
    /// # Errors
    /// `InvalidScale` unless the base is positive and the ratio is
    /// greater than one, both finite.
    pub fn new(base_pt: f64, ratio: f64) -> Result<Self> {
        let base_ok = base_pt.is_finite() && base_pt > 0.0;
        let ratio_ok = ratio.is_finite() && ratio > 1.0;
        if !base_ok || !ratio_ok {
            return Err(StyleError::InvalidScale {
                base: base_pt,
                ratio,
            });
        }

        let h4 = base_pt * ratio;
        let h3 = h4 * ratio;
        let h2 = h3 * ratio;
        let h1 = h2 * ratio;

        Ok(Self {
            base_pt,
            ratio,
            body: base_pt,
            h4,
            h3,
            h2,
            h1,
        })
    }

    /// Sizes from smallest to largest: body, h4, h3, h2, h1
    pub fn steps(&self) -> [f64; 5] {
        [self.body, self.h4, self.h3, self.h2, self.h1]
    }
}
