mod cleanup;

pub use cleanup::{CleanupOperation, CleanupOutput};
