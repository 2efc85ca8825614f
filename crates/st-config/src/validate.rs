//! Property file validation logic.

use crate::schema::{LATEST_VERSION, PropertyFile};
use st_transport::{TransportError, WaterTransport};

#[derive(thiserror::Error, Debug)]
pub enum ValidationError {
    #[error("Unsupported version: {version}")]
    UnsupportedVersion { version: u32 },

    #[error("Property file '{name}' has no components")]
    NoComponents { name: String },

    #[error("Invalid component '{name}': {source}")]
    InvalidComponent {
        name: String,
        #[source]
        source: TransportError,
    },
}

/// Check the version and that every component builds an evaluator.
pub fn validate_file(file: &PropertyFile) -> Result<(), ValidationError> {
    if file.version == 0 || file.version > LATEST_VERSION {
        return Err(ValidationError::UnsupportedVersion {
            version: file.version,
        });
    }

    if file.components.is_empty() {
        return Err(ValidationError::NoComponents {
            name: file.name.clone(),
        });
    }

    for (name, record) in &file.components {
        WaterTransport::from_config(record).map_err(|source| ValidationError::InvalidComponent {
            name: name.clone(),
            source,
        })?;
    }

    Ok(())
}
