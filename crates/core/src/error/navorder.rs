/// Unified error type for navorder
use thiserror::Error;

#[derive(Error, Debug)]
pub enum NavError {
    // Ordering errors
    #[error("Invalid neighbor: {0} is not in the candidate list")]
    InvalidNeighbor(String),

    /// No value fits strictly between the chosen neighbor and its successor.
    ///
    /// Raised both when repeated bisection runs out of `f64` precision and
    /// when the two neighbors carry the same legacy `NavPos` (a tie), so a
    /// folder with many identical values hits this on the first insert
    /// between them. `api::renumber_folder` clears both cases.
    #[error("No position left between {low} and {high}; renumber the folder")]
    PrecisionExhausted { low: f64, high: f64 },

    // Repository errors
    #[error("Failed to write property '{property}' on {resource}: {reason}")]
    PropertyWrite {
        resource: String,
        property: String,
        reason: String,
    },

    #[error("{resource} is not a child of {folder}")]
    NotInFolder { resource: String, folder: String },

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Repository error: {0}")]
    Repository(String),

    // Configuration errors
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    // I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // Parsing errors
    #[error("Parse error: {0}")]
    Parse(String),
}

/// Result type alias using NavError
pub type Result<T> = std::result::Result<T, NavError>;

impl NavError {
    /// Create an invalid neighbor error
    pub fn invalid_neighbor(key: impl Into<String>) -> Self {
        Self::InvalidNeighbor(key.into())
    }

    /// Create a property write error
    pub fn property_write(
        resource: impl Into<String>,
        property: impl Into<String>,
        reason: impl ToString,
    ) -> Self {
        Self::PropertyWrite {
            resource: resource.into(),
            property: property.into(),
            reason: reason.to_string(),
        }
    }

    /// Create an error for a resource positioned within a foreign folder
    pub fn not_in_folder(resource: impl Into<String>, folder: impl Into<String>) -> Self {
        Self::NotInFolder {
            resource: resource.into(),
            folder: folder.into(),
        }
    }

    /// Create a not found error
    pub fn not_found(key: impl Into<String>) -> Self {
        Self::NotFound(key.into())
    }

    /// Create a repository error
    pub fn repository(msg: impl Into<String>) -> Self {
        Self::Repository(msg.into())
    }

    /// Create an invalid config error
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }

    /// Create a parse error
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }
}

// Conversion from serde_json::Error
impl From<serde_json::Error> for NavError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}
