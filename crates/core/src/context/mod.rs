/// Collaborator contracts
pub mod traits;

pub use traits::{Localizer, ResourceRepository};
