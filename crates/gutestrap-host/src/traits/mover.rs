//! Filesystem relocation trait.

use std::path::Path;

use crate::HostResult;

/// Moves directory trees.
pub trait FileMover {
    /// Moves the contents of `from` to `to`, replacing anything already at `to`.
    ///
    /// # Errors
    ///
    /// Returns an error if the move fails. A failed move may leave `to`
    /// partially written; no rollback is attempted.
    fn move_dir(&self, from: &Path, to: &Path) -> HostResult<()>;
}
