//! Per-subtree statistics and their aggregation
//!
//! A [`Summary`] is a plain value: each traversal call builds its own,
//! folds in the summaries returned by its recursive calls with
//! [`Summary::merge`], and hands the result back to its caller.

use serde::Serialize;

use crate::entry::EntryKind;

/// Additive counters for a subtree.
///
/// Character and block devices are classified but not counted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub directories: u64,
    pub files: u64,
    pub links: u64,
    pub fifos: u64,
    pub sockets: u64,
    /// Sum of regular-file sizes in bytes
    pub size: u64,
}

impl Summary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one directly listed entry.
    pub fn record(&mut self, kind: EntryKind, size: u64) {
        match kind {
            EntryKind::Directory => self.directories += 1,
            EntryKind::RegularFile => {
                self.files += 1;
                self.size += size;
            }
            EntryKind::Symlink => self.links += 1,
            EntryKind::Fifo => self.fifos += 1,
            EntryKind::Socket => self.sockets += 1,
            EntryKind::CharDevice | EntryKind::BlockDevice | EntryKind::Unknown => {}
        }
    }

    /// Pairwise sum of every field.
    pub fn merge(self, other: Summary) -> Summary {
        Summary {
            directories: self.directories + other.directories,
            files: self.files + other.files,
            links: self.links + other.links,
            fifos: self.fifos + other.fifos,
            sockets: self.sockets + other.sockets,
            size: self.size + other.size,
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Summary::default()
    }
}

impl std::iter::Sum for Summary {
    fn sum<I: Iterator<Item = Summary>>(iter: I) -> Self {
        iter.fold(Summary::default(), Summary::merge)
    }
}

/// Running total over all root paths.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct GrandTotal {
    /// Number of roots folded in
    pub roots: usize,
    pub summary: Summary,
}

impl GrandTotal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_root(&mut self, summary: Summary) {
        self.roots += 1;
        self.summary = self.summary.merge(summary);
    }

    /// The grand total is only worth showing when it differs from the single
    /// per-root footer.
    pub fn should_report(&self) -> bool {
        self.roots > 1
    }
}
