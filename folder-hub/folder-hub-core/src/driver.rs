use crate::error::Result;
use crate::folder::Folder;
use crate::index::PathIndex;
use crate::{mutate, query};
use std::sync::Arc;
use uuid::Uuid;

/// Operations offered over one folder snapshot.
pub trait FolderDriver: Send + Sync {
    /// All folders belonging to an organization.
    fn get_folders_by_org_id(&self, org_id: Uuid) -> Vec<Folder>;

    /// All descendants of a folder within its organization.
    fn get_all_child_folders(&self, org_id: Uuid, name: &str) -> Result<Vec<Folder>>;

    /// Move a folder and its subtree beneath another folder, returning the
    /// resulting snapshot. The driver's own snapshot is left unchanged.
    fn move_folder(&self, name: &str, destination: &str) -> Result<Vec<Folder>>;
}

/// Driver over an immutable snapshot with its index built once up front.
#[derive(Clone, Debug)]
pub struct Driver {
    index: PathIndex,
}

impl Driver {
    pub fn new(folders: impl Into<Arc<[Folder]>>) -> Self {
        Self {
            index: PathIndex::build(folders),
        }
    }

    pub fn folders(&self) -> &[Folder] {
        self.index.folders()
    }
}

impl FolderDriver for Driver {
    fn get_folders_by_org_id(&self, org_id: Uuid) -> Vec<Folder> {
        query::folders_by_org(&self.index, org_id)
    }

    fn get_all_child_folders(&self, org_id: Uuid, name: &str) -> Result<Vec<Folder>> {
        query::child_folders(&self.index, org_id, name)
    }

    fn move_folder(&self, name: &str, destination: &str) -> Result<Vec<Folder>> {
        mutate::move_folder(&self.index, name, destination)
    }
}
