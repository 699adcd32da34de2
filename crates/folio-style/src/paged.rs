//! Optional paged-media blocks: page counters and running headers

/// Counter style for page numbers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum PageNumberStyle {
    #[default]
    Decimal,
    LowerRoman,
    UpperRoman,
    LowerAlpha,
}

impl PageNumberStyle {
    pub fn css_name(self) -> &'static str {
        match self {
            PageNumberStyle::Decimal => "decimal",
            PageNumberStyle::LowerRoman => "lower-roman",
            PageNumberStyle::UpperRoman => "upper-roman",
            PageNumberStyle::LowerAlpha => "lower-alpha",
        }
    }
}

/// Page margin box that holds the page number
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum PageNumberPosition {
    #[default]
    BottomCenter,
    BottomRight,
    TopRight,
}

impl PageNumberPosition {
    pub fn margin_box(self) -> &'static str {
        match self {
            PageNumberPosition::BottomCenter => "bottom-center",
            PageNumberPosition::BottomRight => "bottom-right",
            PageNumberPosition::TopRight => "top-right",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PagedMediaOptions {
    pub page_numbers: bool,
    pub page_number_style: PageNumberStyle,
    pub page_number_position: PageNumberPosition,
    /// Chapter title on verso heads, section title on recto heads
    pub running_headers: bool,
}

impl PagedMediaOptions {
    /// Empty when nothing is enabled
    pub fn to_css(&self) -> String {
        let mut css = String::new();

        if self.page_numbers {
            css.push_str(&format!(
                r#"
/* Page numbers */
@page {{
  @{position} {{
    content: counter(page, {style});
  }}
}}
"#,
                position = self.page_number_position.margin_box(),
                style = self.page_number_style.css_name(),
            ));
        }

        if self.running_headers {
            css.push_str(
                r#"
/* Running headers */
@page :left {
  @top-left {
    content: string(chapter);
    font-style: italic;
  }
}

@page :right {
  @top-right {
    content: string(section);
    font-style: italic;
  }
}

h1 { string-set: chapter content(); }
h2 { string-set: section content(); }
"#,
            );
        }

        css
    }
}
