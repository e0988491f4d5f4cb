use crate::core::entry::ResourceChild;
use crate::error::Result;
/// Collaborator interfaces consumed by the orderer

/// Repository access needed to order a folder
pub trait ResourceRepository: Send + Sync {
    /// Every file and subfolder directly inside `folder`, in discovery order
    fn list_children(&self, folder: &str) -> Result<Vec<ResourceChild>>;

    /// The spelling of `key` that `list_children` reports.
    ///
    /// Keys are compared as plain strings when a resource is excluded from
    /// its own candidate list, so repositories that accept several
    /// spellings of one path must map them onto a single form here.
    fn canonical_key(&self, key: &str) -> Result<String> {
        Ok(key.to_string())
    }

    fn read_property(&self, resource: &str, name: &str) -> Result<Option<String>>;

    /// Failures surface as `NavError::PropertyWrite`
    fn write_property(&self, resource: &str, name: &str, value: &str) -> Result<()>;
}

/// Maps fixed message keys to display strings
pub trait Localizer: Send + Sync {
    fn translate(&self, key: &str) -> String;
}
