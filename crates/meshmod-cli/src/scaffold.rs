//! Module scaffolding
//!
//! Renders the template corpus for one new module and writes the resulting
//! source files. Everything is rendered in memory first; files are only
//! written once every template has rendered successfully, so a failure never
//! leaves a half-generated module on disk.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use meshmod_templates::{render, ParameterMap, TemplateError, TemplateLoader};

/// Embedded template corpus, used when no `--templates-dir` is given
///
/// Each entry pairs an output-name template with the file content template;
/// the output name is rendered through the same engine, so
/// `{{module_name}}.h` becomes `Button.h`.
const EMBEDDED_TEMPLATES: &[(&str, &str)] = &[
    (
        "{{module_name}}.h",
        include_str!("../templates/VendorModule.h.tmpl"),
    ),
    (
        "{{module_name}}.cpp",
        include_str!("../templates/VendorModule.cpp.tmpl"),
    ),
    (
        "Global{{moduleName}}Module.h",
        include_str!("../templates/GlobalModule.h.tmpl"),
    ),
];

/// Errors produced while scaffolding a module
#[derive(Debug, Error)]
pub enum ScaffoldError {
    /// A required parameter was not supplied by flags or config file
    #[error("missing required parameter: {0}")]
    MissingParameter(&'static str),

    /// The parameter config file could not be parsed
    #[error("invalid config file: {0}")]
    InvalidConfig(#[from] toml::de::Error),

    /// An output file already exists and --force was not given
    #[error("refusing to overwrite {0} (use --force)")]
    OutputExists(PathBuf),

    /// A template failed to load
    #[error(transparent)]
    Template(#[from] TemplateError),

    /// A template failed to render
    #[error("failed to render template {template}")]
    Render {
        /// Identity of the failing template (its output-name template)
        template: String,
        /// The underlying render error with offset and line
        #[source]
        source: TemplateError,
    },

    /// Filesystem error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Parameters for one new module, from flags or a TOML config file
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScaffoldParams {
    /// Module class name, e.g. `Button`
    pub name: Option<String>,
    /// Vendor id, e.g. `0x024D`
    pub vendor_id: Option<String>,
    /// Vendor-local module id (sub id)
    pub module_id: Option<String>,
    /// Short module description
    pub description: Option<String>,
}

impl ScaffoldParams {
    /// Read parameters from a TOML file
    pub fn from_config_file(path: &Path) -> Result<Self, ScaffoldError> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Overlay values from `overrides`, which win where present
    pub fn apply_overrides(&mut self, overrides: ScaffoldParams) {
        if overrides.name.is_some() {
            self.name = overrides.name;
        }
        if overrides.vendor_id.is_some() {
            self.vendor_id = overrides.vendor_id;
        }
        if overrides.module_id.is_some() {
            self.module_id = overrides.module_id;
        }
        if overrides.description.is_some() {
            self.description = overrides.description;
        }
    }

    /// Build the parameter mapping handed to the renderer
    ///
    /// The corpus mixes snake_case and camelCase spellings of the same
    /// parameters, so this is where the alias table lives: both spellings
    /// are inserted for every value. The renderer itself never aliases.
    pub fn into_parameter_map(self) -> Result<ParameterMap, ScaffoldError> {
        let name = self.name.ok_or(ScaffoldError::MissingParameter("name"))?;
        let vendor_id = self
            .vendor_id
            .ok_or(ScaffoldError::MissingParameter("vendor-id"))?;
        let module_id = self
            .module_id
            .ok_or(ScaffoldError::MissingParameter("module-id"))?;
        let description = self
            .description
            .unwrap_or_else(|| format!("The {} module", name));

        let mut params = ParameterMap::new();
        params.insert("module_name", name.clone());
        params.insert("moduleName", name);
        params.insert("vendor_id", vendor_id.clone());
        params.insert("vendorId", vendor_id);
        params.insert("vendor_module_id", module_id.clone());
        params.insert("vendorModuleId", module_id);
        params.insert("module_description", description.clone());
        params.insert("moduleDescription", description);

        Ok(params)
    }
}

/// Load the template corpus as (output-name template, content) pairs
///
/// With a directory, every `.tmpl` file is loaded and its id (the file name
/// without `.tmpl`) is used as the output-name template. Without one, the
/// embedded corpus is used.
pub fn load_templates(dir: Option<&Path>) -> Result<Vec<(String, String)>, ScaffoldError> {
    match dir {
        Some(dir) => {
            let mut loader = TemplateLoader::new();
            let templates = loader.load_from_directory(dir)?;
            Ok(templates
                .into_iter()
                .map(|t| (t.id, t.content))
                .collect())
        }
        None => Ok(EMBEDDED_TEMPLATES
            .iter()
            .map(|(id, content)| (id.to_string(), content.to_string()))
            .collect()),
    }
}

/// Render the corpus for one module and write the files
///
/// Returns the paths written, in corpus order. Nothing is written unless
/// every template (and every output name) renders successfully and no target
/// file collides with an existing one (unless `force`).
pub fn scaffold_module(
    templates: &[(String, String)],
    params: &ParameterMap,
    out_dir: &Path,
    force: bool,
) -> Result<Vec<PathBuf>, ScaffoldError> {
    let mut rendered: Vec<(PathBuf, String)> = Vec::with_capacity(templates.len());

    for (name_template, content_template) in templates {
        // The error must name the failing template, not just the offset
        // inside it
        let file_name =
            render(name_template, params).map_err(|source| ScaffoldError::Render {
                template: name_template.clone(),
                source,
            })?;
        let content =
            render(content_template, params).map_err(|source| ScaffoldError::Render {
                template: name_template.clone(),
                source,
            })?;
        debug!(template = %name_template, output = %file_name, "rendered template");
        rendered.push((out_dir.join(file_name), content));
    }

    if !force {
        for (path, _) in &rendered {
            if path.exists() {
                return Err(ScaffoldError::OutputExists(path.clone()));
            }
        }
    }

    fs::create_dir_all(out_dir)?;

    let mut written = Vec::with_capacity(rendered.len());
    for (path, content) in rendered {
        fs::write(&path, content)?;
        written.push(path);
    }

    Ok(written)
}
