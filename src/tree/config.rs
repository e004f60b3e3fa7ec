//! Configuration types for the tree walker

/// Traversal mode flags, fixed for the whole run.
#[derive(Debug, Clone)]
pub struct WalkerConfig {
    /// Only list (and count) directories
    pub dirs_only: bool,
    /// Print the column header and per-root footer
    pub summary: bool,
    /// Print owner, size, permissions and type columns
    pub verbose: bool,
    /// Number of parallel workers for subtree traversal.
    /// 0 = auto-detect (rayon's global pool)
    /// 1 = sequential (no parallelism)
    /// N = use N worker threads
    pub parallel_workers: usize,
    /// Per-directory listing limit; `None` lists everything
    pub max_entries: Option<usize>,
}

impl WalkerConfig {
    pub fn is_parallel(&self) -> bool {
        self.parallel_workers != 1
    }
}

impl Default for WalkerConfig {
    fn default() -> Self {
        Self {
            dirs_only: false,
            summary: false,
            verbose: false,
            parallel_workers: 1,
            max_entries: None,
        }
    }
}
