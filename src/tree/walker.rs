//! TreeWalker - the recursive listing and counting engine

use std::io;
use std::path::Path;

use rayon::prelude::*;
use termcolor::{Buffer, WriteColor};

use crate::entry::Entry;
use crate::error::{TraversalIssue, TraverseError};
use crate::identity::IdentityResolver;
use crate::output::{EntryFormatter, OutputConfig, ReportWriter};
use crate::stats::Summary;

use super::config::WalkerConfig;
use super::utils::{Listing, read_entries};

/// Outcome of walking one subtree.
#[derive(Debug, Default)]
pub struct WalkResult {
    /// Counts for everything listed below the walked directory
    pub summary: Summary,
    /// Every recoverable failure in the subtree, in output order
    pub issues: Vec<TraversalIssue>,
}

impl WalkResult {
    fn failed(issue: TraversalIssue) -> Self {
        Self {
            summary: Summary::default(),
            issues: vec![issue],
        }
    }

    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }
}

/// A subtree rendered off-thread, waiting to be stitched into its parent.
type RenderedSubtree = (Buffer, WalkResult);

/// Walks directory trees depth-first, writing one line per entry.
pub struct TreeWalker<'r> {
    config: WalkerConfig,
    formatter: EntryFormatter<'r>,
    report: ReportWriter,
}

impl<'r> TreeWalker<'r> {
    pub fn new(
        config: WalkerConfig,
        output: OutputConfig,
        resolver: &'r dyn IdentityResolver,
    ) -> Self {
        let report = ReportWriter::new(config.dirs_only, config.verbose, output.name_width);
        let formatter = EntryFormatter::new(output, config.verbose, resolver);
        Self {
            config,
            formatter,
            report,
        }
    }

    pub fn config(&self) -> &WalkerConfig {
        &self.config
    }

    pub fn report(&self) -> &ReportWriter {
        &self.report
    }

    /// Walk one root path, including header and footer in summary mode.
    ///
    /// Filesystem failures never make this return `Err`; they are reported
    /// inline and collected in [`WalkResult::issues`]. `Err` means writing
    /// to `out` failed.
    pub fn walk<W: WriteColor>(&self, root: &Path, out: &mut W) -> io::Result<WalkResult> {
        if self.config.summary {
            self.report.write_header(out)?;
        }
        self.formatter.write_root(out, root)?;

        let result = match self.config.parallel_workers {
            0 | 1 => self.walk_dir(root, 0, out)?,
            n => match rayon::ThreadPoolBuilder::new().num_threads(n).build() {
                Ok(pool) => {
                    let mut buf = self.formatter.config().buffer();
                    let result = pool.install(|| self.walk_dir(root, 0, &mut buf))?;
                    out.write_all(buf.as_slice())?;
                    result
                }
                Err(e) => {
                    // Fall back to rayon's global pool
                    tracing::warn!(workers = n, error = %e, "could not build thread pool");
                    self.walk_dir(root, 0, out)?
                }
            },
        };

        if self.config.summary {
            self.report.write_footer(out, &result.summary)?;
        }
        Ok(result)
    }

    /// List `path`, print its children at `depth + 1` indentation, and
    /// recurse exactly once into each child directory.
    fn walk_dir<W: WriteColor>(
        &self,
        path: &Path,
        depth: usize,
        out: &mut W,
    ) -> io::Result<WalkResult> {
        let level = depth + 1;
        tracing::debug!(path = %path.display(), depth, "listing directory");

        match read_entries(path) {
            Ok(listing) => self.walk_listing(path, depth, listing, out),
            Err(source) => {
                let issue = TraversalIssue::new(path, TraverseError::OpenDir { source });
                tracing::warn!(path = %path.display(), error = %issue.error, "skipping directory");
                self.formatter.write_issue(out, &issue.error, level)?;
                Ok(WalkResult::failed(issue))
            }
        }
    }

    /// Print an already-read listing of `path` and recurse into its directories.
    fn walk_listing<W: WriteColor>(
        &self,
        path: &Path,
        depth: usize,
        listing: Listing,
        out: &mut W,
    ) -> io::Result<WalkResult> {
        let level = depth + 1;
        let mut issues = Vec::new();
        for error in listing.failures {
            tracing::warn!(path = %path.display(), %error, "skipping entry");
            self.formatter.write_issue(out, &error, level)?;
            issues.push(TraversalIssue::new(path, error));
        }

        let mut entries: Vec<Entry> = listing
            .entries
            .into_iter()
            .filter(|e| !self.config.dirs_only || e.is_dir())
            .collect();

        let truncated = self.truncate(&mut entries);

        let mut rendered = if self.config.is_parallel() {
            self.render_subtrees(path, depth, &entries)?.into_iter()
        } else {
            Vec::new().into_iter()
        };

        let mut summary = Summary::new();
        for entry in &entries {
            let subtree = rendered.next().flatten();

            self.formatter.write_entry(out, entry, level)?;
            summary.record(entry.kind, entry.counted_size());
            if !entry.is_dir() {
                continue;
            }

            let child = match subtree {
                Some((buf, result)) => {
                    out.write_all(buf.as_slice())?;
                    result
                }
                None => self.walk_dir(&path.join(entry.name()), depth + 1, out)?,
            };
            summary = summary.merge(child.summary);
            issues.extend(child.issues);
        }

        if let Some(error) = truncated {
            self.formatter.write_issue(out, &error, level)?;
            issues.push(TraversalIssue::new(path, error));
        }

        Ok(WalkResult { summary, issues })
    }

    /// Apply `max_entries`, returning the warning to show if anything was cut.
    fn truncate(&self, entries: &mut Vec<Entry>) -> Option<TraverseError> {
        let limit = self.config.max_entries?;
        let total = entries.len();
        if total <= limit {
            return None;
        }
        entries.truncate(limit);
        Some(TraverseError::Truncated {
            omitted: total - limit,
            total,
            limit,
        })
    }

    /// Walk every child directory concurrently into its own buffer.
    ///
    /// The result is index-aligned with `entries`; non-directories get `None`.
    fn render_subtrees(
        &self,
        path: &Path,
        depth: usize,
        entries: &[Entry],
    ) -> io::Result<Vec<Option<RenderedSubtree>>> {
        entries
            .par_iter()
            .map(|entry| {
                if !entry.is_dir() {
                    return Ok(None);
                }
                let mut buf = self.formatter.config().buffer();
                let result = self.walk_dir(&path.join(entry.name()), depth + 1, &mut buf)?;
                Ok(Some((buf, result)))
            })
            .collect()
    }
}
