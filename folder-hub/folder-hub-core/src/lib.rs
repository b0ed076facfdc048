//! Multi-tenant folder hierarchy addressed by dot-delimited materialized
//! paths: descendant queries and subtree moves over immutable snapshots.

pub mod driver;
pub mod error;
pub mod folder;
pub mod index;
pub mod mutate;
pub mod query;
pub mod snapshot;

pub use driver::{Driver, FolderDriver};
pub use error::{ErrorKind, FolderError};
pub use folder::Folder;
pub use index::{is_descendant_path, PathIndex};
