//! st-config: property file format and validation.
//!
//! A property file names a set of transport components, each stored as a
//! configuration record. Files are read and written as YAML or JSON and are
//! validated on every load and save.

pub mod schema;
pub mod validate;

pub use schema::*;
pub use validate::{ValidationError, validate_file};

use st_transport::{SpecieThermo, TransportError, WaterTransport};
use std::path::Path;

pub type ProjectResult<T> = Result<T, ProjectError>;

#[derive(thiserror::Error, Debug)]
pub enum ProjectError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Unknown component: {name}")]
    UnknownComponent { name: String },

    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub fn load_yaml(path: &Path) -> ProjectResult<PropertyFile> {
    let content = std::fs::read_to_string(path)?;
    let file: PropertyFile = serde_yaml::from_str(&content)?;
    validate_file(&file)?;
    tracing::debug!(path = %path.display(), components = file.components.len(), "loaded YAML property file");
    Ok(file)
}

pub fn save_yaml(path: &Path, file: &PropertyFile) -> ProjectResult<()> {
    validate_file(file)?;
    let content = serde_yaml::to_string(file)?;
    std::fs::write(path, content)?;
    Ok(())
}

pub fn load_json(path: &Path) -> ProjectResult<PropertyFile> {
    let content = std::fs::read_to_string(path)?;
    let file: PropertyFile = serde_json::from_str(&content)?;
    validate_file(&file)?;
    tracing::debug!(path = %path.display(), components = file.components.len(), "loaded JSON property file");
    Ok(file)
}

pub fn save_json(path: &Path, file: &PropertyFile) -> ProjectResult<()> {
    validate_file(file)?;
    let content = serde_json::to_string_pretty(file)?;
    std::fs::write(path, content)?;
    Ok(())
}

/// Load by extension: `.json` as JSON, anything else as YAML.
pub fn load(path: &Path) -> ProjectResult<PropertyFile> {
    if is_json(path) {
        load_json(path)
    } else {
        load_yaml(path)
    }
}

/// Save by extension: `.json` as JSON, anything else as YAML.
pub fn save(path: &Path, file: &PropertyFile) -> ProjectResult<()> {
    if is_json(path) {
        save_json(path, file)
    } else {
        save_yaml(path, file)
    }
}

fn is_json(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}

/// Build the evaluator for component `name`.
///
/// A record without its own `name` field is labelled with the component key.
pub fn evaluator(file: &PropertyFile, name: &str) -> ProjectResult<WaterTransport> {
    let record = file
        .component(name)
        .ok_or_else(|| ProjectError::UnknownComponent {
            name: name.to_string(),
        })?;
    let eval = WaterTransport::from_config(record)?;
    if record.contains_key(SpecieThermo::NAME) {
        Ok(eval)
    } else {
        Ok(eval.with_name(name))
    }
}
