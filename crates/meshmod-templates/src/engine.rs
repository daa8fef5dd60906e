//! Template rendering
//!
//! Composes the scanner, expression parser, and resolver into a single
//! render pass: scan, parse each placeholder, resolve, concatenate.

use std::collections::hash_map::Entry;
use std::collections::{HashMap, HashSet};

use crate::error::TemplateError;
use crate::expr::PlaceholderExpr;
use crate::resolver::ParameterMap;
use crate::scanner::{Scanner, Segment};

/// Render a template against a parameter mapping
///
/// Pure function of its inputs: identical `(template, params)` pairs produce
/// byte-identical output, and every literal span appears unmodified in its
/// original position. The first error aborts the render; no partial output
/// is returned.
pub fn render(template: &str, params: &ParameterMap) -> Result<String, TemplateError> {
    let mut output = String::with_capacity(template.len());
    // Parsed expressions keyed by raw body text. Repeated placeholders such
    // as {{upper module_name}} dominate the corpus, so each distinct body is
    // parsed once per render.
    let mut parsed: HashMap<&str, PlaceholderExpr> = HashMap::new();

    for segment in Scanner::new(template) {
        match segment? {
            Segment::Literal(text) => output.push_str(text),
            Segment::Placeholder { raw, offset, line } => {
                let expr = match parsed.entry(raw) {
                    Entry::Occupied(entry) => entry.into_mut(),
                    Entry::Vacant(entry) => entry.insert(PlaceholderExpr::parse(raw, line)?),
                };
                output.push_str(&params.resolve(expr, offset, line)?);
            }
        }
    }

    Ok(output)
}

/// Collect the distinct parameter names a template references
///
/// Names are returned in first-appearance order. Fails on the same
/// structural errors as rendering, but never needs a mapping.
pub fn extract_parameters(template: &str) -> Result<Vec<String>, TemplateError> {
    let mut seen = HashSet::new();
    let mut names = Vec::new();

    for segment in Scanner::new(template) {
        if let Segment::Placeholder { raw, line, .. } = segment? {
            let expr = PlaceholderExpr::parse(raw, line)?;
            if seen.insert(expr.parameter.clone()) {
                names.push(expr.parameter);
            }
        }
    }

    Ok(names)
}

/// Stateful wrapper for callers that build the mapping incrementally
///
/// Holds a [`ParameterMap`] and renders any number of templates against it.
/// No state is carried between renders beyond the mapping itself.
pub struct TemplateEngine {
    params: ParameterMap,
}

impl TemplateEngine {
    /// Create an engine with an empty mapping
    pub fn new() -> Self {
        Self {
            params: ParameterMap::new(),
        }
    }

    /// Create an engine with a prepared mapping
    pub fn with_params(params: ParameterMap) -> Self {
        Self { params }
    }

    /// Add a value for placeholder substitution
    pub fn add_value(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.params.insert(name, value);
    }

    /// Add multiple values at once
    pub fn add_values(&mut self, values: HashMap<String, String>) {
        self.params.extend(values);
    }

    /// The current parameter mapping
    pub fn params(&self) -> &ParameterMap {
        &self.params
    }

    /// Render a template with the engine's mapping
    pub fn render(&self, template: &str) -> Result<String, TemplateError> {
        render(template, &self.params)
    }
}

impl Default for TemplateEngine {
    fn default() -> Self {
        Self::new()
    }
}
