pub mod error;
mod plan;
pub mod types;

pub use error::*;
pub use plan::{CleanupPlan, DEFAULT_BASE_PATH, DEFAULT_TARGETS, DEFAULT_VISIBLE_FILES};
pub use types::*;
