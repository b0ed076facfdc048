use crate::error::{FolderError, Result};
use crate::folder::Folder;
use crate::index::{is_descendant_path, PathIndex};
use uuid::Uuid;

/// All folders belonging to `org_id`, in snapshot order.
pub fn folders_by_org(index: &PathIndex, org_id: Uuid) -> Vec<Folder> {
    index
        .folders()
        .iter()
        .filter(|f| f.org_id == org_id)
        .cloned()
        .collect()
}

/// Every folder strictly below `name` within `org_id`, in snapshot order.
///
/// A folder without descendants yields an empty vector.
pub fn child_folders(index: &PathIndex, org_id: Uuid, name: &str) -> Result<Vec<Folder>> {
    if org_id.is_nil() {
        return Err(FolderError::NilOrgId);
    }
    if name.is_empty() {
        return Err(FolderError::EmptyName);
    }
    let parent = index
        .get(org_id, name)
        .ok_or_else(|| FolderError::FolderNotFound(name.to_string()))?;

    Ok(index
        .folders()
        .iter()
        .filter(|f| f.org_id == org_id && is_descendant_path(&f.path, &parent.path))
        .cloned()
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    const ORG_A: Uuid = Uuid::from_u128(0xa1234567_b7c0_45a3_a6ae_9546248fb17a);
    const ORG_B: Uuid = Uuid::from_u128(0xb1234567_b7c0_45a3_a6ae_9546248fb17b);

    fn sample() -> PathIndex {
        PathIndex::build(vec![
            Folder::new("alpha", "alpha", ORG_A),
            Folder::new("bravo", "alpha.bravo", ORG_A),
            Folder::new("charlie", "alpha.bravo.charlie", ORG_A),
            Folder::new("delta", "alpha.delta", ORG_A),
            Folder::new("echo", "echo", ORG_A),
            Folder::new("foxtrot", "foxtrot", ORG_B),
        ])
    }

    fn names(folders: &[Folder]) -> Vec<&str> {
        folders.iter().map(|f| f.name.as_str()).collect()
    }

    #[test]
    fn lists_descendants_in_input_order() {
        let children = child_folders(&sample(), ORG_A, "alpha").unwrap();
        assert_eq!(names(&children), ["bravo", "charlie", "delta"]);
    }

    #[test]
    fn nested_folder_only_sees_its_subtree() {
        let children = child_folders(&sample(), ORG_A, "bravo").unwrap();
        assert_eq!(names(&children), ["charlie"]);
    }

    #[test]
    fn childless_folder_is_empty_not_error() {
        let children = child_folders(&sample(), ORG_A, "echo").unwrap();
        assert!(children.is_empty());
    }

    #[test]
    fn nil_org_checked_before_name() {
        let err = child_folders(&sample(), Uuid::nil(), "").unwrap_err();
        assert_eq!(err, FolderError::NilOrgId);
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }

    #[test]
    fn empty_name_rejected() {
        let err = child_folders(&sample(), ORG_A, "").unwrap_err();
        assert_eq!(err.to_string(), "invalid name: folder name cannot be empty");
    }

    #[test]
    fn folder_in_other_org_is_not_found() {
        let err = child_folders(&sample(), ORG_B, "alpha").unwrap_err();
        assert_eq!(
            err.to_string(),
            "folder 'alpha' does not exist in the specified organization"
        );
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }

    #[test]
    fn same_path_in_other_org_is_excluded() {
        let index = PathIndex::build(vec![
            Folder::new("alpha", "alpha", ORG_A),
            Folder::new("bravo", "alpha.bravo", ORG_A),
            Folder::new("bravo", "alpha.bravo", ORG_B),
        ]);
        let children = child_folders(&index, ORG_A, "alpha").unwrap();
        assert_eq!(children, vec![Folder::new("bravo", "alpha.bravo", ORG_A)]);
    }

    #[test]
    fn by_org_filters() {
        let folders = folders_by_org(&sample(), ORG_B);
        assert_eq!(names(&folders), ["foxtrot"]);
        assert!(folders_by_org(&sample(), Uuid::nil()).is_empty());
    }
}
