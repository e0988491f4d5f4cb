//! Navigation ordering core.
//!
//! Pure logic only: repositories and localizers are passed in through the
//! traits in `crate::context`.

pub mod entry;
pub mod orderer;
pub mod position;
pub mod renumber;

pub use entry::{NavEntry, NavKey, ResourceChild};
pub use orderer::{CandidateList, NavigationOrderer};
pub use position::{format_position, parse_position};
pub use renumber::{PositionChange, renumber_plan};
