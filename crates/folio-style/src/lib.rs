mod canon;
pub mod constants;
mod css;
mod grid;
mod html;
mod options;
mod paged;
mod palette;
mod scale;
mod types;

pub use canon::CanonGeometry;
pub use css::{CssComposer, CssConfig};
pub use grid::{Complexity, ContentSignals, GridSystem, GridVariant, select_grid};
pub use html::HtmlEnvelope;
pub use options::StyleConfig;
pub use paged::{PageNumberPosition, PageNumberStyle, PagedMediaOptions};
pub use palette::ColorPalette;
pub use scale::TypeScale;
pub use types::*;
