//! Subtree moves over a snapshot.
//!
//! A move never touches the snapshot it was given; it returns a fresh
//! collection in which the moved folder and its descendants carry rebased
//! paths.

use crate::error::{FolderError, Result};
use crate::folder::{Folder, PATH_SEPARATOR};
use crate::index::{is_descendant_path, rebase_path, PathIndex};

/// Move the folder named `name` beneath the folder named `destination`.
///
/// Both folders are resolved by name alone (first match in snapshot order)
/// and must then belong to the same organization. Descendants are matched by
/// path alone.
pub fn move_folder(index: &PathIndex, name: &str, destination: &str) -> Result<Vec<Folder>> {
    if name == destination {
        return Err(FolderError::MoveToSelf);
    }
    let source_pos = index
        .position_by_name(name)
        .ok_or_else(|| FolderError::SourceNotFound(name.to_string()))?;
    let dest = index
        .first_by_name(destination)
        .ok_or_else(|| FolderError::DestinationNotFound(destination.to_string()))?;

    let folders = index.folders();
    let source = &folders[source_pos];
    if source.org_id != dest.org_id {
        return Err(FolderError::CrossOrganization);
    }
    if is_descendant_path(&dest.path, &source.path) {
        return Err(FolderError::MoveIntoDescendant);
    }

    let old_prefix = source.path.as_str();
    let new_prefix = format!("{}{}{}", dest.path, PATH_SEPARATOR, source.name);

    Ok(folders
        .iter()
        .enumerate()
        .map(|(pos, folder)| {
            if pos == source_pos {
                return Folder {
                    path: new_prefix.clone(),
                    ..folder.clone()
                };
            }
            match rebase_path(&folder.path, old_prefix, &new_prefix) {
                Some(path) => Folder {
                    path,
                    ..folder.clone()
                },
                None => folder.clone(),
            }
        })
        .collect())
}
