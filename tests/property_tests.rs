use ccpack::utils::{relative_to, to_url_path};
use proptest::prelude::*;
use std::path::{Component, Path, PathBuf};

/// Resolve `..` components lexically
fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::ParentDir => {
                out.pop();
            }
            Component::CurDir => {}
            other => out.push(other),
        }
    }
    out
}

fn segments() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-z][a-z0-9_]{0,7}", 0..5)
}

proptest! {
    #[test]
    fn test_relative_path_resolves_back(
        shared in segments(),
        base_tail in segments(),
        path_tail in prop::collection::vec("[a-z][a-z0-9_]{0,7}", 1..5),
    ) {
        // Test invariant: base joined with the relative path is the input path
        let base: PathBuf = shared.iter().chain(&base_tail).collect();
        let path: PathBuf = shared.iter().chain(&path_tail).collect();

        let relative = relative_to(&path, &base);
        prop_assert_eq!(normalize(&base.join(&relative)), normalize(&path));
    }

    #[test]
    fn test_descendant_never_climbs(
        base in segments(),
        tail in prop::collection::vec("[a-z][a-z0-9_]{0,7}", 1..5),
    ) {
        // Test invariant: files beneath the base never need `..`
        let base: PathBuf = base.iter().collect();
        let path = base.join(tail.iter().collect::<PathBuf>());

        let relative = relative_to(&path, &base);
        prop_assert!(relative.components().all(|c| c != Component::ParentDir));
        prop_assert_eq!(to_url_path(&relative), tail.join("/"));
    }
}
