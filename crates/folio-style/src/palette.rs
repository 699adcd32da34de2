use crate::types::*;

/// Named document colours, any CSS colour syntax
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ColorPalette {
    pub primary: String,
    pub secondary: String,
    pub accent: String,
    pub text: String,
    pub background: String,
}

impl Default for ColorPalette {
    fn default() -> Self {
        Self {
            primary: "#2c3e50".to_string(),
            secondary: "#34495e".to_string(),
            accent: "#3498db".to_string(),
            text: "#2c3e50".to_string(),
            background: "#ffffff".to_string(),
        }
    }
}

impl ColorPalette {
    /// Every entry must be non-empty
    pub fn validate(&self) -> Result<()> {
        let entries = [
            ("primary", &self.primary),
            ("secondary", &self.secondary),
            ("accent", &self.accent),
            ("text", &self.text),
            ("background", &self.background),
        ];
        for (name, value) in entries {
            if value.trim().is_empty() {
                return Err(StyleError::Config(format!(
                    "Palette colour '{}' is empty",
                    name
                )));
            }
        }
        Ok(())
    }
}
