//! Minimal text templates for LaTeX sources
//!
//! Rendering runs fixed passes over the text, in this order:
//!
//! 1. `{{if name}}…{{else}}…{{end}}`
//! 2. `{{if name}}…{{end}}`
//! 3. `{{range name}}…{{.}}…{{end}}`
//! 4. `{{func arg …}}`
//! 5. `{{name}}`
//!
//! Blocks of the same kind do not nest. Blocks of different kinds nest as
//! far as the pass order allows.

use crate::functions::{TemplateFn, standard_functions};
use crate::types::*;
use crate::value::Value;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

static IF_ELSE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)\{\{if\s+([a-zA-Z0-9_]+)\}\}(.*?)\{\{else\}\}(.*?)\{\{end\}\}")
        .expect("valid regex")
});
static IF_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)\{\{if\s+([a-zA-Z0-9_]+)\}\}(.*?)\{\{end\}\}").expect("valid regex")
});
static RANGE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)\{\{range\s+([a-zA-Z0-9_]+)\}\}(.*?)\{\{end\}\}").expect("valid regex")
});
static FUNCTION_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{\{([a-zA-Z0-9_]+)\s+([^}]+)\}\}").expect("valid regex"));
static VARIABLE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{\{([a-zA-Z0-9_]+)\}\}").expect("valid regex"));

const RANGE_ITEM: &str = "{{.}}";

#[derive(Clone, Default)]
pub struct Template {
    source: String,
    variables: HashMap<String, Value>,
    functions: HashMap<String, TemplateFn>,
}

impl fmt::Debug for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut functions: Vec<_> = self.functions.keys().collect();
        functions.sort();
        f.debug_struct("Template")
            .field("source", &self.source)
            .field("variables", &self.variables)
            .field("functions", &functions)
            .finish()
    }
}

impl Template {
    /// A template with no variables and no functions
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            ..Self::default()
        }
    }

    /// A template with the standard functions registered
    pub fn with_standard_functions(source: impl Into<String>) -> Self {
        let mut template = Self::new(source);
        template.functions = standard_functions();
        template
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn set_variable(&mut self, name: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        self.variables.insert(name.into(), value.into());
        self
    }

    pub fn set_variables<I, K, V>(&mut self, variables: I) -> &mut Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        for (name, value) in variables {
            self.set_variable(name, value);
        }
        self
    }

    pub fn variable(&self, name: &str) -> Option<&Value> {
        self.variables.get(name)
    }

    pub fn register_function<F>(&mut self, name: impl Into<String>, function: F) -> &mut Self
    where
        F: Fn(&[Value]) -> std::result::Result<String, FunctionError> + Send + Sync + 'static,
    {
        self.functions.insert(name.into(), Arc::new(function));
        self
    }

    pub fn has_function(&self, name: &str) -> bool {
        self.functions.contains_key(name)
    }

    /// Render against the current variables and functions.
    pub fn render(&self) -> Result<String> {
        let text = replace_all(&IF_ELSE_RE, &self.source, |caps| {
            let branch = if self.is_truthy(&caps[1]) { &caps[2] } else { &caps[3] };
            Ok(branch.to_string())
        })?;

        let text = replace_all(&IF_RE, &text, |caps| {
            Ok(if self.is_truthy(&caps[1]) {
                caps[2].to_string()
            } else {
                String::new()
            })
        })?;

        let text = replace_all(&RANGE_RE, &text, |caps| {
            let name = &caps[1];
            let body = &caps[2];
            match self.variables.get(name) {
                None => Ok(String::new()),
                Some(Value::List(items)) => Ok(items
                    .iter()
                    .map(|item| body.replace(RANGE_ITEM, &item.to_string()))
                    .collect()),
                Some(other) => Err(TemplateError::RangeNotSequence {
                    name: name.to_string(),
                    found: other.type_name(),
                }),
            }
        })?;

        let text = replace_all(&FUNCTION_RE, &text, |caps| {
            let name = &caps[1];
            let Some(function) = self.functions.get(name) else {
                return Ok(caps[0].to_string());
            };

            let args: Vec<Value> = caps[2]
                .split_whitespace()
                .map(|token| {
                    self.variables
                        .get(token)
                        .cloned()
                        .unwrap_or_else(|| Value::Str(token.to_string()))
                })
                .collect();

            function(&args).map_err(|source| TemplateError::Function {
                name: name.to_string(),
                source,
            })
        })?;

        replace_all(&VARIABLE_RE, &text, |caps| {
            Ok(match self.variables.get(&caps[1]) {
                Some(value) => value.to_string(),
                None => caps[0].to_string(),
            })
        })
    }

    fn is_truthy(&self, name: &str) -> bool {
        self.variables.get(name).is_some_and(Value::is_truthy)
    }
}

/// `Regex::replace_all` with a fallible replacer
fn replace_all<F>(re: &Regex, text: &str, mut replace: F) -> Result<String>
where
    F: FnMut(&Captures<'_>) -> Result<String>,
{
    let mut out = String::with_capacity(text.len());
    let mut last = 0;

    for caps in re.captures_iter(text) {
        let Some(whole) = caps.get(0) else { continue };
        out.push_str(&text[last..whole.start()]);
        out.push_str(&replace(&caps)?);
        last = whole.end();
    }
    out.push_str(&text[last..]);

    Ok(out)
}

/// Assembles template source from parts joined by newlines
#[derive(Debug, Clone, Default)]
pub struct TemplateBuilder {
    parts: Vec<String>,
}

impl TemplateBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_section(mut self, text: impl Into<String>) -> Self {
        self.parts.push(text.into());
        self
    }

    /// `{{name}}`
    pub fn add_variable(self, name: &str) -> Self {
        self.add_section(format!("{{{{{}}}}}", name))
    }

    /// `{{if name}}body{{end}}`
    pub fn add_conditional(self, name: &str, body: &str) -> Self {
        self.add_section(format!("{{{{if {}}}}}{}{{{{end}}}}", name, body))
    }

    /// `{{range name}}item_template{{end}}`
    pub fn add_loop(self, name: &str, item_template: &str) -> Self {
        self.add_section(format!("{{{{range {}}}}}{}{{{{end}}}}", name, item_template))
    }

    pub fn build(&self) -> String {
        self.parts.join("\n")
    }

    /// The assembled source with the standard functions registered
    pub fn into_template(self) -> Template {
        Template::with_standard_functions(self.build())
    }
}
