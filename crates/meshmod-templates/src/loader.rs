//! Template loading from `.tmpl` files
//!
//! A template file is named `<output name>.tmpl`; the id keeps the output
//! extension (`Module.h.tmpl` → `Module.h`) so a scaffolding tool knows what
//! file to emit. Syntax is validated at load time.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::TemplateError;
use crate::validation;

/// A loaded, syntax-checked template document
#[derive(Debug, Clone)]
pub struct Template {
    /// File name without the `.tmpl` suffix
    pub id: String,
    /// Raw template text, immutable for the life of the template
    pub content: String,
    /// Path the template was loaded from
    pub source: PathBuf,
}

/// Loads and caches templates from `.tmpl` files
pub struct TemplateLoader {
    cache: HashMap<PathBuf, Template>,
}

impl TemplateLoader {
    /// Create a new loader with an empty cache
    pub fn new() -> Self {
        Self {
            cache: HashMap::new(),
        }
    }

    /// Load a single template file, validating its syntax
    pub fn load_from_file(&mut self, path: &Path) -> Result<Template, TemplateError> {
        if let Some(cached) = self.cache.get(path) {
            return Ok(cached.clone());
        }

        let content = fs::read_to_string(path)?;
        validation::validate_syntax(&content)?;

        let id = path
            .file_name()
            .and_then(|name| name.to_str())
            .map(|name| name.strip_suffix(".tmpl").unwrap_or(name))
            .unwrap_or("unknown")
            .to_string();

        debug!(template = %id, path = %path.display(), "loaded template");

        let template = Template {
            id,
            content,
            source: path.to_path_buf(),
        };
        self.cache.insert(path.to_path_buf(), template.clone());

        Ok(template)
    }

    /// Load every `.tmpl` file under a directory
    ///
    /// A missing directory yields an empty set. Files that fail to load are
    /// skipped with a warning so one broken template does not hide the rest.
    /// Results are sorted by id for a stable order.
    pub fn load_from_directory(&mut self, dir: &Path) -> Result<Vec<Template>, TemplateError> {
        if !dir.exists() {
            return Ok(Vec::new());
        }

        let mut templates = Vec::new();
        self.scan_directory(dir, &mut templates)?;
        templates.sort_by(|a, b| a.id.cmp(&b.id));

        Ok(templates)
    }

    fn scan_directory(
        &mut self,
        dir: &Path,
        templates: &mut Vec<Template>,
    ) -> Result<(), TemplateError> {
        for entry in fs::read_dir(dir)? {
            let path = entry?.path();

            if path.is_dir() {
                self.scan_directory(&path, templates)?;
            } else if path.extension().and_then(|s| s.to_str()) == Some("tmpl") {
                match self.load_from_file(&path) {
                    Ok(template) => templates.push(template),
                    Err(e) => {
                        warn!(path = %path.display(), error = %e, "skipping template");
                    }
                }
            }
        }

        Ok(())
    }

    /// Drop all cached templates
    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    /// Number of templates currently cached
    pub fn cached(&self) -> usize {
        self.cache.len()
    }
}

impl Default for TemplateLoader {
    fn default() -> Self {
        Self::new()
    }
}
