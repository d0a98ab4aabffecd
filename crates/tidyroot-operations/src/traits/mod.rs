mod file_system;
mod reporter;

pub use file_system::FileSystem;
pub use reporter::{CleanupReporter, NoopReporter};
