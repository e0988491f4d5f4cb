/// Centralized error handling for navorder
pub mod navorder;

pub use navorder::{NavError, Result};
