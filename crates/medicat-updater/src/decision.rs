//! Add-or-skip decision.

use crate::VersionToken;

/// What to do with the version announced in the thread.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// The version is already in the client.
    Skip,
    /// The version is missing from the client and should be added.
    Add,
}

/// Skips exactly when `thread_version` is one of `inventory`.
///
/// This is a membership test, not a comparison: a version older than everything in the client
/// is still added if it is absent.
pub fn decide(thread_version: &VersionToken, inventory: &[VersionToken]) -> Decision {
    if inventory.contains(thread_version) {
        Decision::Skip
    } else {
        Decision::Add
    }
}
