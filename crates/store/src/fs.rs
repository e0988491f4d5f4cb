//! Filesystem-backed repository
//!
//! Folders and files map onto a directory tree below a root. Properties and
//! the deleted flag of every child live in a per-directory JSON sidecar,
//! `.navprops.json`, keyed by child name:
//!
//! ```json
//! { "intro.html": { "properties": { "NavPos": "1.5", "NavText": "Intro" }, "deleted": false } }
//! ```

use indexmap::IndexMap;
use navorder_core::config::constants::{NAV_POS_PROPERTY, NAV_TEXT_PROPERTY};
use navorder_core::context::ResourceRepository;
use navorder_core::core::ResourceChild;
use navorder_core::error::{NavError, Result};
use navorder_core::util::sort::compare_children;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Component, Path, PathBuf};
use tracing::{debug, info};

/// Sidecar file holding the properties of a directory's children
pub const SIDECAR_FILE: &str = ".navprops.json";

/// Scratch file a sidecar is written to before it replaces the old one
pub const SIDECAR_TMP_FILE: &str = ".navprops.json.tmp";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SidecarRecord {
    #[serde(default)]
    pub properties: IndexMap<String, String>,
    #[serde(default)]
    pub deleted: bool,
}

type Sidecar = IndexMap<String, SidecarRecord>;

pub struct FsRepository {
    root: PathBuf,
}

impl FsRepository {
    pub fn new(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        if !root.is_dir() {
            return Err(NavError::not_found(root.display().to_string()));
        }
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Map a repository path to a filesystem path below the root
    pub fn resolve(&self, key: &str) -> Result<PathBuf> {
        let mut path = self.root.clone();
        for part in key_parts(key)? {
            path.push(part);
        }
        Ok(path)
    }

    /// Mark or unmark a resource as deleted
    pub fn set_deleted(&self, resource: &str, deleted: bool) -> Result<()> {
        let (dir, name) = self.locate(resource)?;
        let mut sidecar = load_sidecar(&dir)?;
        sidecar.entry(name).or_default().deleted = deleted;
        store_sidecar(&dir, &sidecar).map_err(|e| NavError::repository(e.to_string()))
    }

    /// Directory and child name of an existing resource
    fn locate(&self, resource: &str) -> Result<(PathBuf, String)> {
        let path = self.resolve(resource)?;
        if path == self.root || !path.exists() {
            return Err(NavError::not_found(resource));
        }
        let name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .ok_or_else(|| NavError::not_found(resource))?;
        let dir = path
            .parent()
            .map(Path::to_path_buf)
            .ok_or_else(|| NavError::not_found(resource))?;
        Ok((dir, name))
    }
}

/// Normal components of a repository path; `.` is dropped, `..` and
/// absolute prefixes are refused so keys stay below the root
fn key_parts(key: &str) -> Result<Vec<&str>> {
    let mut parts = Vec::new();
    for component in Path::new(key.trim_start_matches('/')).components() {
        match component {
            Component::Normal(part) => parts.push(
                part.to_str()
                    .ok_or_else(|| NavError::repository(format!("Invalid resource path: {key}")))?,
            ),
            Component::CurDir => {}
            _ => return Err(NavError::repository(format!("Invalid resource path: {key}"))),
        }
    }
    Ok(parts)
}

/// `/`-rooted form of a key: `docs/./a.html`, `/docs/a.html/` -> `/docs/a.html`
fn canonical(key: &str) -> Result<String> {
    Ok(format!("/{}", key_parts(key)?.join("/")))
}

fn child_key(folder: &str, name: &str) -> String {
    if folder == "/" {
        format!("/{name}")
    } else {
        format!("{folder}/{name}")
    }
}

fn load_sidecar(dir: &Path) -> Result<Sidecar> {
    let path = dir.join(SIDECAR_FILE);
    if !path.exists() {
        return Ok(Sidecar::new());
    }
    let text = fs::read_to_string(&path)?;
    let sidecar = serde_json::from_str(&text)
        .map_err(|e| NavError::parse(format!("{}: {}", path.display(), e)))?;
    Ok(sidecar)
}

/// Replace the sidecar atomically: write a temp file, then rename it
fn store_sidecar(dir: &Path, sidecar: &Sidecar) -> std::io::Result<()> {
    let path = dir.join(SIDECAR_FILE);
    let tmp = dir.join(SIDECAR_TMP_FILE);
    let text = serde_json::to_string_pretty(sidecar)?;
    fs::write(&tmp, text)?;
    fs::rename(&tmp, &path)
}

impl ResourceRepository for FsRepository {
    fn list_children(&self, folder: &str) -> Result<Vec<ResourceChild>> {
        let folder = canonical(folder)?;
        let dir = self.resolve(&folder)?;
        if !dir.is_dir() {
            return Err(NavError::not_found(folder));
        }

        let sidecar = load_sidecar(&dir)?;
        let mut children = Vec::new();
        for entry in fs::read_dir(&dir)? {
            let entry = entry?;
            let name = entry.file_name().to_string_lossy().into_owned();
            if name == SIDECAR_FILE || name == SIDECAR_TMP_FILE {
                continue;
            }

            let record = sidecar.get(&name);
            children.push(ResourceChild {
                key: child_key(&folder, &name),
                is_folder: entry.file_type()?.is_dir(),
                nav_position: record.and_then(|r| r.properties.get(NAV_POS_PROPERTY).cloned()),
                nav_text: record.and_then(|r| r.properties.get(NAV_TEXT_PROPERTY).cloned()),
                is_deleted: record.is_some_and(|r| r.deleted),
                name,
            });
        }

        children.sort_by(compare_children);
        debug!("Listed {} children in {}", children.len(), dir.display());
        Ok(children)
    }

    fn canonical_key(&self, key: &str) -> Result<String> {
        canonical(key)
    }

    fn read_property(&self, resource: &str, name: &str) -> Result<Option<String>> {
        let (dir, child) = self.locate(resource)?;
        let sidecar = load_sidecar(&dir)?;
        Ok(sidecar
            .get(&child)
            .and_then(|record| record.properties.get(name).cloned()))
    }

    fn write_property(&self, resource: &str, name: &str, value: &str) -> Result<()> {
        let (dir, child) = self.locate(resource)?;
        let mut sidecar = load_sidecar(&dir)?;
        sidecar
            .entry(child)
            .or_default()
            .properties
            .insert(name.to_string(), value.to_string());

        store_sidecar(&dir, &sidecar).map_err(|e| NavError::property_write(resource, name, e))?;
        info!("Set {}={} on {}", name, value, resource);
        Ok(())
    }
}
