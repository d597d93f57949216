//! Lexical path arithmetic for sysroot-relative link targets.
//!
//! Nothing here touches the filesystem. Link targets frequently point at files
//! that do not exist yet (or only exist on the target machine), so all of the
//! work is done on path components.

use std::path::{Component, Path, PathBuf};

/// Collapse `.` and `..` components without consulting the filesystem.
///
/// `..` never climbs above the root of an absolute path, so `/../etc`
/// normalizes to `/etc`. Leading `..` components of a relative path are kept.
#[must_use]
pub fn normalize_lexically(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.components().next_back() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => out.push(".."),
            },
            other => out.push(other.as_os_str()),
        }
    }

    out
}

/// Resolve an absolute link target as if `root` were `/`.
///
/// A sysroot built for another machine stores targets like `/lib/libc.so.6`
/// meaning `<root>/lib/libc.so.6`. The target is normalized first so `..`
/// cannot walk out of the sysroot.
#[must_use]
pub fn sysroot_target(root: &Path, raw_target: &Path) -> PathBuf {
    let normalized = normalize_lexically(raw_target);
    let inside = normalized
        .strip_prefix("/")
        .unwrap_or(normalized.as_path());
    root.join(inside)
}

/// Relative path that reaches `to` when resolved from the directory `from_dir`.
///
/// Both paths should be absolute; they are normalized before comparison.
/// Returns `.` when they name the same directory.
#[must_use]
pub fn relative_path(from_dir: &Path, to: &Path) -> PathBuf {
    let from = normalize_lexically(from_dir);
    let to = normalize_lexically(to);

    let from_parts: Vec<Component<'_>> = from.components().collect();
    let to_parts: Vec<Component<'_>> = to.components().collect();

    let common = from_parts
        .iter()
        .zip(&to_parts)
        .take_while(|(a, b)| a == b)
        .count();

    let mut rel = PathBuf::new();
    for _ in common..from_parts.len() {
        rel.push("..");
    }
    for part in &to_parts[common..] {
        rel.push(part.as_os_str());
    }

    if rel.as_os_str().is_empty() {
        rel.push(".");
    }
    rel
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_drops_cur_dir() {
        assert_eq!(
            normalize_lexically(Path::new("/usr/./lib/./x")),
            PathBuf::from("/usr/lib/x")
        );
    }

    #[test]
    fn test_normalize_parent_dir() {
        assert_eq!(
            normalize_lexically(Path::new("/usr/lib/../share")),
            PathBuf::from("/usr/share")
        );
    }

    #[test]
    fn test_normalize_parent_stops_at_root() {
        assert_eq!(
            normalize_lexically(Path::new("/../../etc/passwd")),
            PathBuf::from("/etc/passwd")
        );
    }

    #[test]
    fn test_normalize_keeps_leading_parent_on_relative() {
        assert_eq!(
            normalize_lexically(Path::new("../../lib/x")),
            PathBuf::from("../../lib/x")
        );
    }

    #[test]
    fn test_sysroot_target_joins_under_root() {
        assert_eq!(
            sysroot_target(Path::new("/tmp/sysroot"), Path::new("/lib/bar.so")),
            PathBuf::from("/tmp/sysroot/lib/bar.so")
        );
    }

    #[test]
    fn test_sysroot_target_cannot_escape() {
        assert_eq!(
            sysroot_target(Path::new("/tmp/sysroot"), Path::new("/../../etc/shadow")),
            PathBuf::from("/tmp/sysroot/etc/shadow")
        );
    }

    #[test]
    fn test_sysroot_target_bare_root() {
        assert_eq!(
            sysroot_target(Path::new("/tmp/sysroot"), Path::new("/")),
            PathBuf::from("/tmp/sysroot")
        );
    }

    #[test]
    fn test_relative_path_sibling_tree() {
        assert_eq!(
            relative_path(
                Path::new("/tmp/sysroot/usr/lib"),
                Path::new("/tmp/sysroot/lib/bar.so")
            ),
            PathBuf::from("../../lib/bar.so")
        );
    }

    #[test]
    fn test_relative_path_same_dir_file() {
        assert_eq!(
            relative_path(Path::new("/r/usr/lib"), Path::new("/r/usr/lib/libz.so.1")),
            PathBuf::from("libz.so.1")
        );
    }

    #[test]
    fn test_relative_path_same_dir() {
        assert_eq!(
            relative_path(Path::new("/r/usr/lib"), Path::new("/r/usr/lib")),
            PathBuf::from(".")
        );
    }

    #[test]
    fn test_relative_path_to_ancestor() {
        assert_eq!(
            relative_path(Path::new("/r/usr/lib/x86_64"), Path::new("/r/usr")),
            PathBuf::from("../..")
        );
    }

    #[test]
    fn test_relative_path_resolves_back() {
        let from = Path::new("/tmp/sysroot/a/b");
        let to = Path::new("/tmp/sysroot/c/d");
        let rel = relative_path(from, to);
        assert_eq!(normalize_lexically(&from.join(rel)), to);
    }
}
