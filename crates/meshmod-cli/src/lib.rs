//! Scaffolding CLI for mesh firmware modules
//!
//! Thin wrapper around `meshmod-templates`: collects the module parameters,
//! renders the template corpus, and writes the generated source files.

pub mod logging;
pub mod output;
pub mod scaffold;

pub use scaffold::{ScaffoldError, ScaffoldParams};
