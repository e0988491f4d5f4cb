//! Navigation position ordering for CMS folders.
//!
//! `core` holds the orderer, `context` the collaborator traits it consumes,
//! and `api` the caller flows (reposition, place, renumber) built on both.

pub mod api;
pub mod config;
pub mod context;
pub mod core;
pub mod error;
pub mod util;

pub use api::{NeighborChoice, Outcome};
pub use config::{MissingNeighborPolicy, OrdererConfig};
pub use context::{Localizer, ResourceRepository};
pub use crate::core::{CandidateList, NavEntry, NavKey, NavigationOrderer, ResourceChild};
pub use error::{NavError, Result};
