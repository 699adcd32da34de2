mod diagnostics;
mod document;
mod escape;
mod functions;
mod packages;
mod template;
mod types;
mod value;

pub use diagnostics::{Diagnostic, DiagnosticKind, LogReport, parse_log};
pub use document::{Document, DocumentBuilder, DocumentClass, Metadata};
pub use escape::escape;
pub use functions::{TemplateFn, standard_functions};
pub use packages::{Package, PackageBundle};
pub use template::{Template, TemplateBuilder};
pub use types::*;
pub use value::Value;
