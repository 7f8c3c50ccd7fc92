pub mod diff;
pub mod error;
pub mod loader;
pub mod manifest;

pub use diff::{DiffContent, DiffRecord};
pub use error::CoreError;
pub use loader::{expand_tilde, load_file, FileContent, Placeholder};
pub use manifest::{ContextFile, ManifestEntry, ManifestFormat};
