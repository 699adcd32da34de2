//! Template functions and the standard set

use crate::escape::escape;
use crate::types::FunctionError;
use crate::value::Value;
use std::collections::HashMap;
use std::sync::Arc;

/// A named template function: resolved arguments in, text out
pub type TemplateFn = Arc<dyn Fn(&[Value]) -> Result<String, FunctionError> + Send + Sync>;

/// `upper`, `lower`, `title`, `escape` and `repeat`
pub fn standard_functions() -> HashMap<String, TemplateFn> {
    let mut functions: HashMap<String, TemplateFn> = HashMap::new();
    functions.insert("upper".to_string(), Arc::new(upper));
    functions.insert("lower".to_string(), Arc::new(lower));
    functions.insert("title".to_string(), Arc::new(title));
    functions.insert("escape".to_string(), Arc::new(escape_fn));
    functions.insert("repeat".to_string(), Arc::new(repeat));
    functions
}

fn upper(args: &[Value]) -> Result<String, FunctionError> {
    Ok(single_text(args)?.to_uppercase())
}

fn lower(args: &[Value]) -> Result<String, FunctionError> {
    Ok(single_text(args)?.to_lowercase())
}

fn title(args: &[Value]) -> Result<String, FunctionError> {
    Ok(title_case(&single_text(args)?))
}

fn escape_fn(args: &[Value]) -> Result<String, FunctionError> {
    Ok(escape(&single_text(args)?))
}

fn arity(args: &[Value], expected: usize) -> Result<(), FunctionError> {
    if args.len() != expected {
        return Err(FunctionError::Arity {
            expected,
            got: args.len(),
        });
    }
    Ok(())
}

/// Any value reads as its display text
fn single_text(args: &[Value]) -> Result<String, FunctionError> {
    arity(args, 1)?;
    Ok(args[0].to_string())
}

/// Lower-cased, then the first letter of every whitespace-separated word upper-cased
fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut at_word_start = true;

    for c in s.to_lowercase().chars() {
        if c.is_whitespace() {
            at_word_start = true;
            out.push(c);
        } else if at_word_start {
            out.extend(c.to_uppercase());
            at_word_start = false;
        } else {
            out.push(c);
        }
    }

    out
}

fn repeat(args: &[Value]) -> Result<String, FunctionError> {
    arity(args, 2)?;
    let text = args[0].to_string();
    let count = args[1].as_int().ok_or_else(|| FunctionError::ArgumentType {
        index: 1,
        expected: "int",
        found: args[1].type_name(),
    })?;
    let count = usize::try_from(count)
        .map_err(|_| FunctionError::Failed(format!("repeat count must not be negative, got {}", count)))?;

    Ok(text.repeat(count))
}
