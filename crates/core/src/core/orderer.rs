//! Navigation ordering: candidate lists and insertion positions
//!
//! Every resource in a folder may carry a floating point `NavPos`. The
//! orderer turns a folder listing into a sorted list framed by two
//! sentinels, FIRST at 0 and LAST one past the largest position, and
//! places a new or moved resource directly after a chosen neighbor by
//! taking the midpoint to the next entry. Existing positions are never
//! rewritten by an insertion.

use super::entry::{NavEntry, NavKey, ResourceChild};
use super::position::parse_position;
use crate::config::constants::{FIRST_ELEMENT_KEY, LAST_ELEMENT_KEY};
use crate::config::{MissingNeighborPolicy, OrdererConfig};
use crate::context::Localizer;
use crate::error::{NavError, Result};
use serde::Serialize;
use tracing::{debug, warn};

/// Sorted candidate neighbors for one folder, sentinels included
#[derive(Debug, Clone, Serialize)]
pub struct CandidateList {
    entries: Vec<NavEntry>,
    count: usize,
}

impl CandidateList {
    fn new(entries: Vec<NavEntry>) -> Self {
        let count = entries.len();
        Self { entries, count }
    }

    pub fn entries(&self) -> &[NavEntry] {
        &self.entries
    }

    /// Number of entries, sentinels included
    pub fn count(&self) -> usize {
        self.count
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false for a built list; FIRST and LAST are always present
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&NavEntry> {
        self.entries.get(index)
    }

    /// Index of the first entry with `key`
    pub fn index_of(&self, key: &NavKey) -> Option<usize> {
        self.entries.iter().position(|entry| &entry.key == key)
    }

    pub fn is_last_index(&self, index: usize) -> bool {
        index + 1 == self.entries.len()
    }

    pub fn labels(&self) -> Vec<&str> {
        self.entries
            .iter()
            .map(|entry| entry.display_name.as_str())
            .collect()
    }

    /// Resource entries only, in list order
    pub fn resources(&self) -> impl Iterator<Item = &NavEntry> {
        self.entries.iter().filter(|entry| !entry.key.is_sentinel())
    }

    /// Position just past LAST, for appending at the end
    pub fn append_position(&self) -> f64 {
        self.entries.last().map_or(1.0, |last| last.position + 1.0)
    }
}

/// Builds candidate lists and computes insertion positions
pub struct NavigationOrderer<'a> {
    localizer: &'a dyn Localizer,
    policy: MissingNeighborPolicy,
}

impl<'a> NavigationOrderer<'a> {
    pub fn new(localizer: &'a dyn Localizer) -> Self {
        Self {
            localizer,
            policy: MissingNeighborPolicy::default(),
        }
    }

    pub fn from_config(localizer: &'a dyn Localizer, config: &OrdererConfig) -> Self {
        Self::new(localizer).with_policy(config.missing_neighbor)
    }

    pub fn with_policy(mut self, policy: MissingNeighborPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn policy(&self) -> MissingNeighborPolicy {
        self.policy
    }

    /// Build the sorted candidate list for a folder's children.
    ///
    /// Deleted children, children without a usable `NavPos` and the child
    /// keyed `exclude_key` are left out. FIRST (position 0) and LAST (one
    /// past the largest retained position, or 1) frame the result, which is
    /// stable-sorted by position so duplicate legacy values keep listing
    /// order.
    pub fn build_candidate_list(
        &self,
        children: &[ResourceChild],
        exclude_key: Option<&str>,
    ) -> CandidateList {
        let mut entries = Vec::with_capacity(children.len() + 2);
        entries.push(NavEntry::new(
            NavKey::First,
            self.localizer.translate(FIRST_ELEMENT_KEY),
            0.0,
        ));

        let mut max_position: Option<f64> = None;
        for child in children {
            if child.is_deleted {
                debug!("Skipping deleted resource {}", child.key);
                continue;
            }
            let Some(position) = child.nav_position.as_deref().and_then(parse_position) else {
                debug!("Skipping {} without navigation position", child.key);
                continue;
            };
            if exclude_key == Some(child.key.as_str()) {
                debug!("Excluding {} from its own candidate list", child.key);
                continue;
            }

            max_position = Some(max_position.map_or(position, |max| max.max(position)));
            entries.push(NavEntry::new(
                NavKey::resource(child.key.clone()),
                child.display_name(),
                position,
            ));
        }

        entries.push(NavEntry::new(
            NavKey::Last,
            self.localizer.translate(LAST_ELEMENT_KEY),
            max_position.map_or(1.0, |max| max + 1.0),
        ));

        entries.sort_by(|a, b| a.position.total_cmp(&b.position));

        debug!(
            "Built candidate list with {} entries from {} children",
            entries.len(),
            children.len()
        );
        CandidateList::new(entries)
    }

    /// Position for an entry placed directly after `chosen`.
    ///
    /// Midpoint between `chosen` and its successor, or `chosen + 1` when
    /// `chosen` is the last entry. "Keep current position" is the caller's
    /// business and must be handled before calling this.
    pub fn compute_insertion_position(&self, list: &CandidateList, chosen: &NavKey) -> Result<f64> {
        let index = match list.index_of(chosen) {
            Some(index) => index,
            None => match self.policy {
                MissingNeighborPolicy::Reject => {
                    return Err(NavError::invalid_neighbor(chosen.as_str()));
                }
                MissingNeighborPolicy::InsertAtFront => {
                    warn!("Neighbor {} not found, inserting at front", chosen);
                    0
                }
            },
        };

        let Some(low) = list.get(index).map(|entry| entry.position) else {
            return Err(NavError::invalid_neighbor(chosen.as_str()));
        };
        let (high, position) = match list.entries.get(index + 1) {
            Some(next) => (next.position, (low + next.position) / 2.0),
            None => (f64::INFINITY, low + 1.0),
        };

        if !(low < position && position < high) {
            return Err(NavError::PrecisionExhausted {
                low,
                high: if high.is_finite() { high } else { position },
            });
        }

        debug!(
            "Insertion after {} (index {}) gets position {}",
            chosen, index, position
        );
        Ok(position)
    }
}
