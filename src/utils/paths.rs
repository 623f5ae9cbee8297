use std::path::{Component, Path, PathBuf};

/// Expresses `path` relative to `base`, climbing out with `..` when `path`
/// is not beneath `base`
///
/// Both paths must be relative to the same root and free of `.` and `..`
/// components, which holds for every path produced by the scanner.
#[must_use]
pub fn relative_to(path: &Path, base: &Path) -> PathBuf {
    let path_parts: Vec<Component<'_>> = path.components().collect();
    let base_parts: Vec<Component<'_>> = base.components().collect();

    let common = path_parts
        .iter()
        .zip(&base_parts)
        .take_while(|(a, b)| a == b)
        .count();

    let mut relative = PathBuf::new();
    for _ in common..base_parts.len() {
        relative.push("..");
    }
    for part in &path_parts[common..] {
        relative.push(part);
    }

    if relative.as_os_str().is_empty() {
        PathBuf::from(".")
    } else {
        relative
    }
}

/// Renders a relative path with `/` separators regardless of platform
#[must_use]
pub fn to_url_path(path: &Path) -> String {
    path.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

/// Strips `root` from a walked entry path
///
/// Entries yielded by a walk always start with the walk root; anything else
/// is returned unchanged.
#[must_use]
pub fn normalize_to_relative(path: &Path, root: &Path) -> PathBuf {
    path.strip_prefix(root).unwrap_or(path).to_path_buf()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relative_to_descendant() {
        let result = relative_to(Path::new("deps/lib/util.lua"), Path::new("deps"));
        assert_eq!(result, PathBuf::from("lib/util.lua"));
    }

    #[test]
    fn test_relative_to_empty_base() {
        let result = relative_to(Path::new("init.lua"), Path::new(""));
        assert_eq!(result, PathBuf::from("init.lua"));
    }

    #[test]
    fn test_relative_to_sibling_climbs_out() {
        let result = relative_to(Path::new("src/main.lua"), Path::new("deps/json"));
        assert_eq!(result, PathBuf::from("../../src/main.lua"));
    }

    #[test]
    fn test_relative_to_self() {
        assert_eq!(relative_to(Path::new("a/b"), Path::new("a/b")), PathBuf::from("."));
    }

    #[test]
    fn test_to_url_path_uses_forward_slashes() {
        let path: PathBuf = ["lib", "net", "http.lua"].iter().collect();
        assert_eq!(to_url_path(&path), "lib/net/http.lua");
    }

    #[test]
    fn test_to_url_path_keeps_parent_components() {
        assert_eq!(to_url_path(Path::new("../x.lua")), "../x.lua");
    }

    #[test]
    fn test_normalize_to_relative() {
        let root = PathBuf::from("/home/user/pkg");
        let path = PathBuf::from("/home/user/pkg/lib/file.lua");
        assert_eq!(normalize_to_relative(&path, &root), PathBuf::from("lib/file.lua"));
        assert_eq!(normalize_to_relative(&root, &root), PathBuf::new());
    }
}
