use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Separator between segments of a materialized path.
pub const PATH_SEPARATOR: char = '.';

/// A folder in an organization's hierarchy. `path` is the authoritative
/// position: a dot-joined chain of ancestor segments ending in the folder's
/// own segment.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Folder {
    pub name: String,
    #[serde(rename = "paths")]
    pub path: String,
    pub org_id: Uuid,
}

impl Folder {
    pub fn new(name: impl Into<String>, path: impl Into<String>, org_id: Uuid) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            org_id,
        }
    }
}
