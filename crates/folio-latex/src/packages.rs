use std::fmt;

/// A `\usepackage` line: name plus bracketed options
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Package {
    pub name: String,
    pub options: Vec<String>,
}

impl Package {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            options: Vec::new(),
        }
    }

    pub fn with_options<I, S>(name: impl Into<String>, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            options: options.into_iter().map(Into::into).collect(),
        }
    }
}

impl fmt::Display for Package {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.options.is_empty() {
            write!(f, "\\usepackage{{{}}}", self.name)
        } else {
            write!(f, "\\usepackage[{}]{{{}}}", self.options.join(","), self.name)
        }
    }
}

/// Predefined package sets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackageBundle {
    /// Encoding, language, geometry, graphics, links and AMS math
    Standard,
    /// Standard plus bibliography, algorithms, listings and table rules
    Academic,
    /// Standard plus headers/footers, title and TOC styling
    Book,
}

impl PackageBundle {
    pub fn packages(self) -> Vec<Package> {
        let mut packages = vec![
            Package::with_options("inputenc", ["utf8"]),
            Package::with_options("fontenc", ["T1"]),
            Package::with_options("babel", ["english"]),
            Package::with_options("geometry", ["margin=1in"]),
            Package::new("graphicx"),
            Package::new("hyperref"),
            Package::new("amsmath"),
            Package::new("amsfonts"),
            Package::new("amssymb"),
        ];

        let extra: &[&str] = match self {
            PackageBundle::Standard => &[],
            PackageBundle::Academic => &[
                "natbib",
                "algorithm",
                "algorithmic",
                "listings",
                "booktabs",
                "caption",
            ],
            PackageBundle::Book => &["fancyhdr", "titlesec", "tocloft"],
        };
        packages.extend(extra.iter().copied().map(Package::new));

        packages
    }
}
