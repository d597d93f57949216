//! Sysroot traversal and in-place symlink replacement.

use anyhow::{bail, Context, Result};
use std::fs;
use std::io::Write;
use std::path::Path;
use tracing::{debug, info};
use walkdir::WalkDir;

use crate::link::{classify_link, LinkAction, Relink};

/// Rewrite every absolute symlink under `root` into a relative one.
///
/// `root` is canonicalized first and treated as `/` for absolute targets, so
/// a link holding `/lib/libc.so.6` ends up pointing at `<root>/lib/libc.so.6`
/// through a relative path. Relative links, and absolute links that already
/// point under the canonical root, are left untouched.
///
/// Each replacement writes one `Replacing <old> with <new> for <link>` line
/// to `out` as soon as it happens. Symlinked directories are not descended
/// into.
///
/// # Errors
///
/// Returns an error if:
/// - `root` cannot be canonicalized or is not a directory
/// - a directory in the tree cannot be read
/// - a link cannot be read, removed or recreated
/// - writing to `out` fails
///
/// Links replaced before the failure stay replaced.
pub fn relink_sysroot(root: &Path, out: &mut impl Write) -> Result<Vec<Relink>> {
    let root = fs::canonicalize(root)
        .with_context(|| format!("Failed to resolve sysroot: {}", root.display()))?;
    if !root.is_dir() {
        bail!("Sysroot is not a directory: {}", root.display());
    }

    info!("Relinking sysroot {}", root.display());

    let mut relinked = Vec::new();

    // sort_by_file_name reads each directory fully before yielding from it,
    // so replacing a link never disturbs the listing being iterated.
    let walker = WalkDir::new(&root).follow_links(false).sort_by_file_name();
    for entry in walker {
        let entry =
            entry.with_context(|| format!("Failed to walk sysroot: {}", root.display()))?;
        if !entry.file_type().is_symlink() {
            continue;
        }

        if let Some(relink) = relink_symlink(&root, entry.path())? {
            writeln!(out, "{relink}").context("Failed to write relink report")?;
            relinked.push(relink);
        }
    }

    info!("Relinked {} symlinks under {}", relinked.len(), root.display());
    Ok(relinked)
}

/// Inspect one symlink and replace it if its target is sysroot-absolute.
///
/// `root` must already be canonical. Returns `Ok(None)` when the link is left
/// as it is.
pub fn relink_symlink(root: &Path, link: &Path) -> Result<Option<Relink>> {
    let old_target = fs::read_link(link)
        .with_context(|| format!("Failed to read symlink: {}", link.display()))?;
    let link_dir = link
        .parent()
        .with_context(|| format!("Symlink has no parent directory: {}", link.display()))?;

    match classify_link(root, link_dir, &old_target) {
        LinkAction::KeepRelative => {
            debug!("Keeping relative link {}", link.display());
            Ok(None)
        }
        LinkAction::KeepInsideRoot => {
            debug!(
                "Keeping {} -> {} (already under sysroot)",
                link.display(),
                old_target.display()
            );
            Ok(None)
        }
        LinkAction::Rewrite { new_target } => {
            replace_symlink(link, &new_target)?;
            Ok(Some(Relink {
                link: link.to_path_buf(),
                old_target,
                new_target,
            }))
        }
    }
}

/// Replace the symlink at `link` with one pointing at `target`.
///
/// The old link is removed and a new one created under the same name.
pub fn replace_symlink(link: &Path, target: &Path) -> Result<()> {
    fs::remove_file(link)
        .with_context(|| format!("Failed to remove symlink: {}", link.display()))?;
    std::os::unix::fs::symlink(target, link).with_context(|| {
        format!(
            "Failed to create symlink {} -> {}",
            link.display(),
            target.display()
        )
    })?;
    Ok(())
}
