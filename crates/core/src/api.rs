// Stable API facade for callers - ordering flows over the collaborator traits

use crate::config::constants::{NAV_POS_PROPERTY, NAV_TEXT_PROPERTY, NO_CHANGE_KEY};
use crate::context::ResourceRepository;
use crate::core::{
    CandidateList, NavKey, NavigationOrderer, PositionChange, format_position, renumber_plan,
};
use crate::error::{NavError, Result};
use serde::Serialize;
use tracing::{debug, info};

/// What the user picked in the neighbor selection
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NeighborChoice {
    /// Keep the current position
    Unchanged,
    /// Place directly after this entry
    After(NavKey),
}

impl NeighborChoice {
    /// Parse a submitted selection value
    pub fn parse(raw: &str) -> Self {
        if raw == NO_CHANGE_KEY {
            Self::Unchanged
        } else {
            Self::After(NavKey::parse(raw))
        }
    }
}

impl From<&str> for NeighborChoice {
    fn from(raw: &str) -> Self {
        Self::parse(raw)
    }
}

/// Result of a reposition request
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Outcome {
    Unchanged,
    Moved { position: f64 },
}

/// Folder part of a resource path: `/docs/a.html` -> `/docs`, `/a.html` -> `/`
pub fn parent_folder(key: &str) -> &str {
    let trimmed = key.trim_end_matches('/');
    match trimmed.rfind('/') {
        Some(0) | None => "/",
        Some(index) => &trimmed[..index],
    }
}

/// Canonical `(folder, resource)` pair, checking that `resource` lives in `folder`
fn locate_in_folder<R: ResourceRepository + ?Sized>(
    repo: &R,
    folder: &str,
    resource: &str,
) -> Result<(String, String)> {
    let folder = repo.canonical_key(folder)?;
    let resource = repo.canonical_key(resource)?;
    if parent_folder(&resource) != folder {
        return Err(NavError::not_in_folder(resource, folder));
    }
    Ok((folder, resource))
}

fn canonical_neighbor<R: ResourceRepository + ?Sized>(
    repo: &R,
    neighbor: &NavKey,
) -> Result<NavKey> {
    match neighbor {
        NavKey::Resource(key) => Ok(NavKey::resource(repo.canonical_key(key)?)),
        sentinel => Ok(sentinel.clone()),
    }
}

/// Candidate neighbors for `folder`, leaving out `exclude`
pub fn candidates<R: ResourceRepository + ?Sized>(
    repo: &R,
    orderer: &NavigationOrderer<'_>,
    folder: &str,
    exclude: Option<&str>,
) -> Result<CandidateList> {
    let folder = repo.canonical_key(folder)?;
    let exclude = exclude.map(|key| repo.canonical_key(key)).transpose()?;
    let children = repo.list_children(&folder)?;
    debug!("Listed {} children of {}", children.len(), folder);
    Ok(orderer.build_candidate_list(&children, exclude.as_deref()))
}

/// Move an existing resource to directly after the chosen neighbor
pub fn reposition<R: ResourceRepository + ?Sized>(
    repo: &R,
    orderer: &NavigationOrderer<'_>,
    folder: &str,
    target: &str,
    choice: &NeighborChoice,
) -> Result<Outcome> {
    let NeighborChoice::After(neighbor) = choice else {
        debug!("Keeping navigation position of {}", target);
        return Ok(Outcome::Unchanged);
    };

    let (folder, target) = locate_in_folder(repo, folder, target)?;
    let neighbor = canonical_neighbor(repo, neighbor)?;
    let list = candidates(repo, orderer, &folder, Some(target.as_str()))?;
    let position = orderer.compute_insertion_position(&list, &neighbor)?;
    repo.write_property(&target, NAV_POS_PROPERTY, &format_position(position))?;

    info!("Moved {} after {} (position {})", target, neighbor, position);
    Ok(Outcome::Moved { position })
}

/// Position a newly created resource and store its navigation label.
///
/// `NeighborChoice::Unchanged` appends the resource after LAST. `new_key`
/// must be a direct child of `folder`.
pub fn place_new<R: ResourceRepository + ?Sized>(
    repo: &R,
    orderer: &NavigationOrderer<'_>,
    folder: &str,
    new_key: &str,
    nav_text: Option<&str>,
    choice: &NeighborChoice,
) -> Result<f64> {
    let (folder, new_key) = locate_in_folder(repo, folder, new_key)?;
    let list = candidates(repo, orderer, &folder, Some(new_key.as_str()))?;
    let position = match choice {
        NeighborChoice::Unchanged => list.append_position(),
        NeighborChoice::After(neighbor) => {
            let neighbor = canonical_neighbor(repo, neighbor)?;
            orderer.compute_insertion_position(&list, &neighbor)?
        }
    };

    repo.write_property(&new_key, NAV_POS_PROPERTY, &format_position(position))?;
    if let Some(text) = nav_text.filter(|text| !text.trim().is_empty()) {
        repo.write_property(&new_key, NAV_TEXT_PROPERTY, text)?;
    }

    info!("Placed {} at position {}", new_key, position);
    Ok(position)
}

/// Rewrite the folder's positions to `1.0, 2.0, ...` in current order
pub fn renumber_folder<R: ResourceRepository + ?Sized>(
    repo: &R,
    orderer: &NavigationOrderer<'_>,
    folder: &str,
    dry_run: bool,
) -> Result<Vec<PositionChange>> {
    let list = candidates(repo, orderer, folder, None)?;
    let plan = renumber_plan(&list);

    if dry_run {
        debug!("Dry run: {} positions in {} would change", plan.len(), folder);
        return Ok(plan);
    }

    for change in &plan {
        repo.write_property(change.key.as_str(), NAV_POS_PROPERTY, &format_position(change.new))?;
    }
    info!("Renumbered {} entries in {}", plan.len(), folder);
    Ok(plan)
}
