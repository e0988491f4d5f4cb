//! Dense renumbering of a folder's navigation positions

use super::entry::NavKey;
use super::orderer::CandidateList;
use serde::Serialize;

/// A position rewrite produced by [`renumber_plan`]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PositionChange {
    pub key: NavKey,
    pub old: f64,
    pub new: f64,
}

/// Assign `1.0, 2.0, ...` to the resource entries of `list` in list order.
///
/// Only entries whose value actually changes are returned, so a folder that
/// is already dense yields an empty plan.
pub fn renumber_plan(list: &CandidateList) -> Vec<PositionChange> {
    list.resources()
        .zip(1u32..)
        .filter_map(|(entry, ordinal)| {
            let new = f64::from(ordinal);
            (entry.position != new).then(|| PositionChange {
                key: entry.key.clone(),
                old: entry.position,
                new,
            })
        })
        .collect()
}
