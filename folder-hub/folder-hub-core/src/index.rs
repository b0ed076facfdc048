//! Name lookup over a folder snapshot and the path ancestry predicate.

use crate::folder::{Folder, PATH_SEPARATOR};
use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;

/// Returns true when `child` lies strictly below `parent`, i.e. `child` is
/// `parent` followed by a separator and at least one more segment.
/// `"alphabet"` is not below `"alpha"`.
pub fn is_descendant_path(child: &str, parent: &str) -> bool {
    child.len() > parent.len()
        && child.starts_with(parent)
        && child.as_bytes()[parent.len()] == PATH_SEPARATOR as u8
}

/// Replace the leading `old_prefix` of `path` with `new_prefix`, keeping the
/// remaining suffix verbatim. Returns `None` unless `path` descends from
/// `old_prefix`.
pub fn rebase_path(path: &str, old_prefix: &str, new_prefix: &str) -> Option<String> {
    if !is_descendant_path(path, old_prefix) {
        return None;
    }
    let suffix = &path[old_prefix.len()..];
    let mut rebased = String::with_capacity(new_prefix.len() + suffix.len());
    rebased.push_str(new_prefix);
    rebased.push_str(suffix);
    Some(rebased)
}

/// Read-only index over an immutable snapshot.
///
/// Lookups are keyed on organization and name. Duplicate keys are a caller
/// error: the last folder in snapshot order wins. The index also remembers the
/// first folder carrying each bare name, regardless of organization.
#[derive(Clone, Debug)]
pub struct PathIndex {
    folders: Arc<[Folder]>,
    by_org: HashMap<Uuid, HashMap<String, usize>>,
    first_by_name: HashMap<String, usize>,
}

impl PathIndex {
    pub fn build(folders: impl Into<Arc<[Folder]>>) -> Self {
        let folders = folders.into();
        let mut by_org: HashMap<Uuid, HashMap<String, usize>> = HashMap::new();
        let mut first_by_name = HashMap::with_capacity(folders.len());
        for (idx, folder) in folders.iter().enumerate() {
            by_org
                .entry(folder.org_id)
                .or_default()
                .insert(folder.name.clone(), idx);
            first_by_name.entry(folder.name.clone()).or_insert(idx);
        }
        Self {
            folders,
            by_org,
            first_by_name,
        }
    }

    /// The snapshot the index was built from, in input order.
    pub fn folders(&self) -> &[Folder] {
        &self.folders
    }

    pub fn len(&self) -> usize {
        self.folders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.folders.is_empty()
    }

    /// Resolve a folder by organization and name.
    pub fn get(&self, org_id: Uuid, name: &str) -> Option<&Folder> {
        let idx = *self.by_org.get(&org_id)?.get(name)?;
        self.folders.get(idx)
    }

    /// Position of the first folder named `name` in snapshot order.
    pub fn position_by_name(&self, name: &str) -> Option<usize> {
        self.first_by_name.get(name).copied()
    }

    /// First folder named `name` in snapshot order, in any organization.
    pub fn first_by_name(&self, name: &str) -> Option<&Folder> {
        self.position_by_name(name)
            .and_then(|idx| self.folders.get(idx))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn org(n: u128) -> Uuid {
        Uuid::from_u128(n)
    }

    #[test]
    fn descendant_requires_separator_boundary() {
        assert!(is_descendant_path("alpha.bravo", "alpha"));
        assert!(is_descendant_path("alpha.bravo.charlie", "alpha"));
        assert!(!is_descendant_path("alphabet", "alpha"));
        assert!(!is_descendant_path("alpha.", "alpha.bravo"));
        assert!(!is_descendant_path("alpha", "alpha.bravo"));
        assert!(!is_descendant_path("bravo.alpha", "alpha"));
    }

    #[test]
    fn descendant_is_irreflexive() {
        for path in ["alpha", "alpha.bravo", "a.b.c.d", ""] {
            assert!(!is_descendant_path(path, path), "{path} below itself");
        }
    }

    #[test]
    fn descendant_is_transitive() {
        let chain = ["alpha", "alpha.bravo", "alpha.bravo.charlie", "alpha.bravo.charlie.delta"];
        for (i, a) in chain.iter().enumerate() {
            for (j, b) in chain.iter().enumerate().skip(i + 1) {
                assert!(is_descendant_path(b, a));
                for c in chain.iter().skip(j + 1) {
                    assert!(is_descendant_path(c, b));
                    assert!(is_descendant_path(c, a));
                }
            }
        }
    }

    #[test]
    fn rebase_keeps_suffix() {
        assert_eq!(
            rebase_path("alpha.bravo.charlie", "alpha.bravo", "golf.bravo").as_deref(),
            Some("golf.bravo.charlie")
        );
        assert_eq!(rebase_path("alpha.bravo", "alpha.bravo", "golf.bravo"), None);
        assert_eq!(rebase_path("alpha.bravox", "alpha.bravo", "golf.bravo"), None);
    }

    #[test]
    fn lookup_is_scoped_by_org() {
        let index = PathIndex::build(vec![
            Folder::new("alpha", "alpha", org(1)),
            Folder::new("alpha", "alpha", org(2)),
            Folder::new("bravo", "alpha.bravo", org(1)),
        ]);
        assert_eq!(index.len(), 3);
        assert_eq!(index.get(org(2), "alpha").unwrap().org_id, org(2));
        assert_eq!(index.get(org(1), "bravo").unwrap().path, "alpha.bravo");
        assert!(index.get(org(2), "bravo").is_none());
        assert!(index.get(org(3), "alpha").is_none());
    }

    #[test]
    fn duplicate_keys_last_write_wins() {
        let index = PathIndex::build(vec![
            Folder::new("alpha", "alpha", org(1)),
            Folder::new("alpha", "echo.alpha", org(1)),
        ]);
        assert_eq!(index.get(org(1), "alpha").unwrap().path, "echo.alpha");
        // bare-name lookup keeps the first occurrence
        assert_eq!(index.first_by_name("alpha").unwrap().path, "alpha");
        assert_eq!(index.position_by_name("alpha"), Some(0));
    }

    #[test]
    fn empty_snapshot() {
        let index = PathIndex::build(Vec::<Folder>::new());
        assert!(index.is_empty());
        assert!(index.first_by_name("alpha").is_none());
    }
}
