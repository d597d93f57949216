//! Per-link decision: keep the link or compute its relative replacement.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::paths::{relative_path, sysroot_target};

/// What to do with a single symlink found in the sysroot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkAction {
    /// Target is already relative.
    KeepRelative,
    /// Target is absolute but already names a path under the sysroot's
    /// current location.
    KeepInsideRoot,
    /// Target is absolute and meant relative to the sysroot root.
    Rewrite { new_target: PathBuf },
}

/// Decide what to do with a link stored in `link_dir` whose raw target is
/// `raw_target`.
///
/// `root` must be the canonical sysroot path.
#[must_use = "the link action decides whether the link is replaced"]
pub fn classify_link(root: &Path, link_dir: &Path, raw_target: &Path) -> LinkAction {
    if !raw_target.is_absolute() {
        return LinkAction::KeepRelative;
    }

    // Left alone even though it breaks if the sysroot moves again.
    if raw_target.starts_with(root) {
        return LinkAction::KeepInsideRoot;
    }

    let intended = sysroot_target(root, raw_target);
    LinkAction::Rewrite {
        new_target: relative_path(link_dir, &intended),
    }
}

/// A link that was replaced with a relative one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Relink {
    /// Path of the symlink itself, under the canonical sysroot.
    pub link: PathBuf,
    /// Absolute target the link held before the rewrite.
    pub old_target: PathBuf,
    /// Relative target the link holds now.
    pub new_target: PathBuf,
}

impl fmt::Display for Relink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Replacing {} with {} for {}",
            self.old_target.display(),
            self.new_target.display(),
            self.link.display()
        )
    }
}
