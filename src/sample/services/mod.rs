//! Query services for the sample directory.

mod directory;

pub use directory::{SampleDirectoryError, SampleDirectoryResult, SampleDirectoryService};
