//! Error types for template rendering

use thiserror::Error;

/// Errors that can occur while scanning, parsing, or rendering a template
///
/// All variants are fatal for the render that produced them: the first error
/// aborts the call and no partial output is returned.
#[derive(Debug, Error)]
pub enum TemplateError {
    /// Opening delimiter without a matching close before end of document
    #[error("unterminated placeholder at byte {offset} (line {line})")]
    UnterminatedPlaceholder {
        /// Byte offset of the unmatched opening delimiter
        offset: usize,
        /// 1-based line of the unmatched opening delimiter
        line: usize,
    },

    /// Placeholder body with no parameter name candidate
    #[error("malformed placeholder expression at line {line}: {message}")]
    MalformedExpression {
        /// 1-based line of the placeholder
        line: usize,
        /// Description of what was wrong with the body
        message: String,
    },

    /// Token that is neither the parameter name nor a known transform keyword
    #[error("unknown modifier '{token}' at line {line}")]
    UnknownModifier {
        /// The offending token
        token: String,
        /// 1-based line of the placeholder
        line: usize,
    },

    /// Parameter name not present in the supplied mapping
    #[error("undefined parameter '{name}' at byte {offset} (line {line})")]
    UndefinedParameter {
        /// The missing parameter name
        name: String,
        /// Byte offset of the placeholder in the source document
        offset: usize,
        /// 1-based line of the placeholder
        line: usize,
    },

    /// IO error while loading a template file
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
