//! Sysroot symlink relocation.
//!
//! Sysroots assembled for cross-compilation often contain absolute symlinks
//! such as `usr/lib/libfoo.so -> /lib/libfoo.so.1`. Those resolve against the
//! host's `/` instead of the sysroot. This crate rewrites them into relative
//! links so the tree keeps working wherever it is mounted.

pub mod cli;
mod link;
pub mod logging;
mod paths;
mod relink;

pub use link::{classify_link, LinkAction, Relink};
pub use paths::{normalize_lexically, relative_path, sysroot_target};
pub use relink::{relink_symlink, relink_sysroot, replace_symlink};
