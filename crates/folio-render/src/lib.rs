mod latex;
mod paged;
mod pandoc;
mod subset;
mod tool;
mod types;
mod validate;

pub use latex::{CleanupPolicy, CompileOutcome, CompilerOptions, LatexCompiler, LatexEngine};
pub use paged::{PagedRenderer, PagedRendererOptions};
pub use pandoc::{ConvertOptions, PandocConverter, inject_css_variables};
pub use subset::{FontSubsetter, SubsetOptions, extract_used_chars};
pub use tool::{ToolCommand, find_executable};
pub use types::*;
pub use validate::{check_pdf_header, validate_pdf};
