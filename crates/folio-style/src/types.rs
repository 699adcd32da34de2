use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StyleError {
    #[error("Unknown page size: {0}")]
    UnknownPageSize(String),
    #[error("Invalid page dimensions: {width}in x {height}in (both must be positive)")]
    InvalidDimensions { width: f64, height: f64 },
    #[error("Invalid type scale: base {base}pt, ratio {ratio} (both must be positive)")]
    InvalidScale { base: f64, ratio: f64 },
    #[error("Invalid configuration: {0}")]
    Config(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[cfg(feature = "serde")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, StyleError>;

/// Trim sizes known by name.
///
/// Dimensions are in inches, always portrait.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PageSize {
    /// 5" × 8" trade paperback
    Digest,
    /// 5.5" × 8.5"
    Statement,
    /// 6" × 9" US trade
    UsTrade,
    /// 7" × 10"
    Executive,
    /// 8.5" × 11"
    Letter,
    A4,
    A5,
    /// 7.44" × 9.69"
    CrownQuarto,
    Custom { width_in: f64, height_in: f64 },
}

impl PageSize {
    /// Get dimensions as (width, height) in inches
    pub fn dimensions_in(self) -> (f64, f64) {
        match self {
            PageSize::Digest => (5.0, 8.0),
            PageSize::Statement => (5.5, 8.5),
            PageSize::UsTrade => (6.0, 9.0),
            PageSize::Executive => (7.0, 10.0),
            PageSize::Letter => (8.5, 11.0),
            PageSize::A4 => (8.27, 11.69),
            PageSize::A5 => (5.83, 8.27),
            PageSize::CrownQuarto => (7.44, 9.69),
            PageSize::Custom {
                width_in,
                height_in,
            } => (width_in, height_in),
        }
    }

    /// Registry name, e.g. `6x9` or `crown_quarto`
    pub fn name(self) -> &'static str {
        match self {
            PageSize::Digest => "5x8",
            PageSize::Statement => "5.5x8.5",
            PageSize::UsTrade => "6x9",
            PageSize::Executive => "7x10",
            PageSize::Letter => "8.5x11",
            PageSize::A4 => "A4",
            PageSize::A5 => "A5",
            PageSize::CrownQuarto => "crown_quarto",
            PageSize::Custom { .. } => "custom",
        }
    }

    /// Every named size in the registry (excludes `Custom`)
    pub fn all() -> &'static [PageSize] {
        &[
            PageSize::Digest,
            PageSize::Statement,
            PageSize::UsTrade,
            PageSize::Executive,
            PageSize::Letter,
            PageSize::A4,
            PageSize::A5,
            PageSize::CrownQuarto,
        ]
    }

    /// Look up a registry entry by name.
    pub fn named(name: &str) -> Option<PageSize> {
        Self::all().iter().copied().find(|size| size.name() == name)
    }
}

impl fmt::Display for PageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageSize::Custom {
                width_in,
                height_in,
            } => write!(f, "{}x{}", width_in, height_in),
            named => f.write_str(named.name()),
        }
    }
}

impl FromStr for PageSize {
    type Err = StyleError;

    fn from_str(s: &str) -> Result<Self> {
        PageSize::named(s).ok_or_else(|| StyleError::UnknownPageSize(s.to_string()))
    }
}

#[cfg(feature = "serde")]
mod serde_impls {
    use super::*;
    use serde::{Deserialize, Serialize};

    impl Serialize for PageSize {
        fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
        where
            S: serde::Serializer,
        {
            use serde::ser::SerializeStruct;
            match self {
                PageSize::Custom {
                    width_in,
                    height_in,
                } => {
                    let mut s = serializer.serialize_struct("Custom", 2)?;
                    s.serialize_field("width_in", width_in)?;
                    s.serialize_field("height_in", height_in)?;
                    s.end()
                }
                named => serializer.serialize_str(named.name()),
            }
        }
    }

    impl<'de> Deserialize<'de> for PageSize {
        fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
        where
            D: serde::Deserializer<'de>,
        {
            use serde::de::{self, MapAccess, Visitor};

            struct PageSizeVisitor;

            impl<'de> Visitor<'de> for PageSizeVisitor {
                type Value = PageSize;

                fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                    formatter.write_str("a page size name or {width_in, height_in}")
                }

                fn visit_str<E>(self, value: &str) -> std::result::Result<PageSize, E>
                where
                    E: de::Error,
                {
                    PageSize::named(value).ok_or_else(|| {
                        de::Error::unknown_variant(
                            value,
                            &[
                                "5x8",
                                "5.5x8.5",
                                "6x9",
                                "7x10",
                                "8.5x11",
                                "A4",
                                "A5",
                                "crown_quarto",
                            ],
                        )
                    })
                }

                fn visit_map<M>(self, mut map: M) -> std::result::Result<PageSize, M::Error>
                where
                    M: MapAccess<'de>,
                {
                    let mut width_in = None;
                    let mut height_in = None;

                    while let Some(key) = map.next_key::<String>()? {
                        match key.as_str() {
                            "width_in" => width_in = Some(map.next_value()?),
                            "height_in" => height_in = Some(map.next_value()?),
                            _ => {
                                let _: de::IgnoredAny = map.next_value()?;
                            }
                        }
                    }

                    match (width_in, height_in) {
                        (Some(w), Some(h)) => Ok(PageSize::Custom {
                            width_in: w,
                            height_in: h,
                        }),
                        _ => Err(de::Error::missing_field("width_in or height_in")),
                    }
                }
            }

            deserializer.deserialize_any(PageSizeVisitor)
        }
    }
}
