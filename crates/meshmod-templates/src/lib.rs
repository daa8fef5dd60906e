#![warn(missing_docs)]

//! Template rendering engine for meshmod
//!
//! Renders the module scaffolding templates: plain text mixed with
//! `{{…}}` placeholder expressions is resolved against a caller-supplied
//! parameter mapping to produce the final source file text. Rendering is a
//! pure, synchronous function of (template, mapping); everything outside a
//! placeholder is preserved byte-for-byte.

pub mod engine;
pub mod error;
pub mod expr;
pub mod loader;
pub mod resolver;
pub mod scanner;
pub mod validation;

// Re-export public API
pub use engine::{extract_parameters, render, TemplateEngine};
pub use error::TemplateError;
pub use expr::{CaseTransform, PlaceholderExpr};
pub use loader::{Template, TemplateLoader};
pub use resolver::ParameterMap;
pub use scanner::{Scanner, Segment};
pub use validation::{check_parameters, validate_syntax};
