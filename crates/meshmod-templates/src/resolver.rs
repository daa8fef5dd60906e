//! Parameter mapping and placeholder resolution

use std::collections::HashMap;

use crate::error::TemplateError;
use crate::expr::PlaceholderExpr;

/// Caller-supplied mapping from parameter name to value
///
/// Names are case-sensitive and never aliased by the renderer. The corpus
/// mixes `module_name` and `moduleName` spellings; a caller that wants both
/// resolvable inserts both.
#[derive(Debug, Clone, Default)]
pub struct ParameterMap {
    values: HashMap<String, String>,
}

impl ParameterMap {
    /// Create an empty mapping
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a value for a parameter name
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.values.insert(name.into(), value.into());
    }

    /// Insert every pair from a map
    pub fn extend(&mut self, values: HashMap<String, String>) {
        self.values.extend(values);
    }

    /// Look up the raw, untransformed value for a name
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    /// Whether a value is present for the given name
    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Number of parameters in the mapping
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the mapping is empty
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Produce the substitution text for one parsed expression
    ///
    /// `offset` and `line` locate the placeholder in the source document and
    /// are carried into the error when the name is missing. Resolution is a
    /// pure function of the mapping; transforms apply sequentially in the
    /// expression's canonical order.
    pub fn resolve(
        &self,
        expr: &PlaceholderExpr,
        offset: usize,
        line: usize,
    ) -> Result<String, TemplateError> {
        let value =
            self.values
                .get(&expr.parameter)
                .ok_or_else(|| TemplateError::UndefinedParameter {
                    name: expr.parameter.clone(),
                    offset,
                    line,
                })?;

        let mut resolved = value.clone();
        for transform in &expr.transforms {
            resolved = transform.apply(&resolved);
        }
        Ok(resolved)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ParameterMap {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut map = Self::new();
        for (name, value) in iter {
            map.insert(name, value);
        }
        map
    }
}
