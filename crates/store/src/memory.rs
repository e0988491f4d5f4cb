/// In-memory repository for tests and embedding
use indexmap::IndexMap;
use navorder_core::api::parent_folder;
use navorder_core::config::constants::{NAV_POS_PROPERTY, NAV_TEXT_PROPERTY};
use navorder_core::context::ResourceRepository;
use navorder_core::core::ResourceChild;
use navorder_core::error::{NavError, Result};
use parking_lot::RwLock;
use tracing::debug;

#[derive(Debug, Clone, Default)]
struct Resource {
    name: String,
    parent: String,
    is_folder: bool,
    deleted: bool,
    read_only: bool,
    properties: IndexMap<String, String>,
}

/// Resources keyed by path, listed in insertion order
#[derive(Debug, Default)]
pub struct InMemoryRepository {
    resources: RwLock<IndexMap<String, Resource>>,
}

impl InMemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a file with the given properties
    pub fn with_file(self, key: &str, properties: &[(&str, &str)]) -> Self {
        self.insert(key, false, properties);
        self
    }

    /// Add a folder with the given properties
    pub fn with_folder(self, key: &str, properties: &[(&str, &str)]) -> Self {
        self.insert(key, true, properties);
        self
    }

    /// Shorthand for a file carrying only a navigation position
    pub fn with_positioned(self, key: &str, position: &str) -> Self {
        self.with_file(key, &[(NAV_POS_PROPERTY, position)])
    }

    pub fn insert(&self, key: &str, is_folder: bool, properties: &[(&str, &str)]) {
        let key = key.trim_end_matches('/').to_string();
        let resource = Resource {
            name: key.rsplit('/').next().unwrap_or_default().to_string(),
            parent: parent_folder(&key).to_string(),
            is_folder,
            deleted: false,
            read_only: false,
            properties: properties
                .iter()
                .map(|(name, value)| (name.to_string(), value.to_string()))
                .collect(),
        };
        self.resources.write().insert(key, resource);
    }

    pub fn set_deleted(&self, key: &str, deleted: bool) -> Result<()> {
        self.update(key, |resource| resource.deleted = deleted)
    }

    /// Make property writes on `key` fail, as a locked resource would
    pub fn set_read_only(&self, key: &str, read_only: bool) -> Result<()> {
        self.update(key, |resource| resource.read_only = read_only)
    }

    pub fn len(&self) -> usize {
        self.resources.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.resources.read().is_empty()
    }

    fn update(&self, key: &str, apply: impl FnOnce(&mut Resource)) -> Result<()> {
        let mut resources = self.resources.write();
        let resource = resources
            .get_mut(key)
            .ok_or_else(|| NavError::not_found(key))?;
        apply(resource);
        Ok(())
    }

    fn folder_exists(&self, folder: &str) -> bool {
        folder == "/"
            || self
                .resources
                .read()
                .get(folder)
                .is_some_and(|resource| resource.is_folder)
    }
}

impl ResourceRepository for InMemoryRepository {
    fn list_children(&self, folder: &str) -> Result<Vec<ResourceChild>> {
        let folder = if folder == "/" {
            folder
        } else {
            folder.trim_end_matches('/')
        };
        if !self.folder_exists(folder) {
            return Err(NavError::not_found(folder));
        }

        let resources = self.resources.read();
        let children: Vec<_> = resources
            .iter()
            .filter(|(_, resource)| resource.parent == folder)
            .map(|(key, resource)| ResourceChild {
                key: key.clone(),
                name: resource.name.clone(),
                is_folder: resource.is_folder,
                nav_position: resource.properties.get(NAV_POS_PROPERTY).cloned(),
                nav_text: resource.properties.get(NAV_TEXT_PROPERTY).cloned(),
                is_deleted: resource.deleted,
            })
            .collect();
        debug!("{} has {} children in memory", folder, children.len());
        Ok(children)
    }

    /// Keys are stored without a trailing slash
    fn canonical_key(&self, key: &str) -> Result<String> {
        match key.trim_end_matches('/') {
            "" => Ok("/".to_string()),
            trimmed => Ok(trimmed.to_string()),
        }
    }

    fn read_property(&self, resource: &str, name: &str) -> Result<Option<String>> {
        self.resources
            .read()
            .get(resource)
            .map(|found| found.properties.get(name).cloned())
            .ok_or_else(|| NavError::not_found(resource))
    }

    fn write_property(&self, resource: &str, name: &str, value: &str) -> Result<()> {
        let mut resources = self.resources.write();
        let found = resources
            .get_mut(resource)
            .ok_or_else(|| NavError::not_found(resource))?;
        if found.read_only {
            return Err(NavError::property_write(resource, name, "resource is read-only"));
        }
        found.properties.insert(name.to_string(), value.to_string());
        Ok(())
    }
}
