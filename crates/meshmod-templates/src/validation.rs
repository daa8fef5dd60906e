//! Pre-flight template validation
//!
//! Structural checks that run before anything is rendered, so a scaffolding
//! tool can reject a bad template or an incomplete mapping up front.

use crate::error::TemplateError;
use crate::expr::PlaceholderExpr;
use crate::resolver::ParameterMap;
use crate::scanner::{Scanner, Segment};

/// Check template syntax without resolving anything
///
/// Scans the whole document and parses every placeholder expression.
pub fn validate_syntax(content: &str) -> Result<(), TemplateError> {
    for segment in Scanner::new(content) {
        if let Segment::Placeholder { raw, line, .. } = segment? {
            PlaceholderExpr::parse(raw, line)?;
        }
    }
    Ok(())
}

/// Verify that a mapping covers every parameter a template references
///
/// Fails with the first missing parameter, carrying its position, so the
/// caller can report it before any rendering happens.
pub fn check_parameters(content: &str, params: &ParameterMap) -> Result<(), TemplateError> {
    for segment in Scanner::new(content) {
        if let Segment::Placeholder { raw, offset, line } = segment? {
            let expr = PlaceholderExpr::parse(raw, line)?;
            if !params.contains(&expr.parameter) {
                return Err(TemplateError::UndefinedParameter {
                    name: expr.parameter,
                    offset,
                    line,
                });
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_valid_syntax() {
        assert!(validate_syntax("class {{name}} : {{upper name}}").is_ok());
    }

    #[test]
    fn test_validate_unterminated() {
        assert!(matches!(
            validate_syntax("Hello {{name"),
            Err(TemplateError::UnterminatedPlaceholder { .. })
        ));
    }

    #[test]
    fn test_validate_unknown_modifier() {
        assert!(matches!(
            validate_syntax("{{name lower}}"),
            Err(TemplateError::UnknownModifier { .. })
        ));
    }

    #[test]
    fn test_validate_empty_expression() {
        assert!(matches!(
            validate_syntax("{{ }}"),
            Err(TemplateError::MalformedExpression { .. })
        ));
    }

    #[test]
    fn test_check_parameters_all_provided() {
        let params: ParameterMap = [("name", "Button")].into_iter().collect();
        assert!(check_parameters("{{name}} {{name upper}}", &params).is_ok());
    }

    #[test]
    fn test_check_parameters_missing() {
        let params: ParameterMap = [("name", "Button")].into_iter().collect();
        match check_parameters("{{name}} {{vendor_id}}", &params) {
            Err(TemplateError::UndefinedParameter { name, .. }) => {
                assert_eq!(name, "vendor_id");
            }
            other => panic!("expected UndefinedParameter, got {:?}", other),
        }
    }
}
