//! Placeholder expression parsing
//!
//! Interprets the raw text between delimiters into a parameter name plus
//! case transforms. Both corpus spellings, `{{upper module_name}}` and
//! `{{module_name upper}}`, parse to the same expression.

use crate::error::TemplateError;

/// A case transform applied to a resolved parameter value
///
/// The enum order is the canonical application order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum CaseTransform {
    /// ASCII uppercase: `a`–`z` map to `A`–`Z`, every other character is
    /// unchanged. Locale-independent and idempotent.
    Upper,
}

impl CaseTransform {
    /// Look up a transform keyword, if the token is one
    pub fn from_keyword(token: &str) -> Option<Self> {
        match token {
            "upper" => Some(CaseTransform::Upper),
            _ => None,
        }
    }

    /// Apply the transform to a value
    pub fn apply(&self, input: &str) -> String {
        match self {
            CaseTransform::Upper => input.to_ascii_uppercase(),
        }
    }
}

/// A parsed placeholder expression
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceholderExpr {
    /// Parameter name looked up in the mapping, case-sensitive
    pub parameter: String,
    /// Transforms in canonical application order
    pub transforms: Vec<CaseTransform>,
}

impl PlaceholderExpr {
    /// Parse the raw text found between delimiters
    ///
    /// Tokens are split on whitespace. The first token that is not a
    /// transform keyword is the parameter name; any further non-keyword
    /// token fails as an unknown modifier. A body with no parameter name
    /// candidate at all is malformed. Transform order is canonicalized, so
    /// modifier position relative to the name is not significant.
    pub fn parse(raw: &str, line: usize) -> Result<Self, TemplateError> {
        let mut parameter: Option<&str> = None;
        let mut transforms = Vec::new();

        for token in raw.split_whitespace() {
            match CaseTransform::from_keyword(token) {
                Some(transform) => transforms.push(transform),
                None => {
                    if parameter.is_some() {
                        return Err(TemplateError::UnknownModifier {
                            token: token.to_string(),
                            line,
                        });
                    }
                    parameter = Some(token);
                }
            }
        }

        let parameter = parameter.ok_or_else(|| TemplateError::MalformedExpression {
            line,
            message: format!("no parameter name in '{}'", raw.trim()),
        })?;

        transforms.sort();
        transforms.dedup();

        Ok(Self {
            parameter: parameter.to_string(),
            transforms,
        })
    }
}
