use thiserror::Error;

/// Failure raised by a template function
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FunctionError {
    #[error("expected {expected} argument(s), got {got}")]
    Arity { expected: usize, got: usize },
    #[error("argument {index} must be {expected}, got {found}")]
    ArgumentType {
        index: usize,
        expected: &'static str,
        found: &'static str,
    },
    #[error("{0}")]
    Failed(String),
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum TemplateError {
    #[error("range variable '{name}' must be a sequence, got {found}")]
    RangeNotSequence { name: String, found: &'static str },
    #[error("function '{name}' error: {source}")]
    Function {
        name: String,
        #[source]
        source: FunctionError,
    },
}

pub type Result<T> = std::result::Result<T, TemplateError>;
