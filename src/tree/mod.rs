//! Directory tree walking logic
//!
//! `TreeWalker` lists a directory, orders its children (directories first,
//! then byte-wise by name), prints one line per child and recurses into
//! child directories, returning a `Summary` for the subtree. Filesystem
//! failures are reported inline and never abort the walk.

mod config;
mod json_types;
mod utils;
mod walker;

// Re-export public types
pub use config::WalkerConfig;
pub use json_types::{JsonIssue, JsonReport, JsonRoot};
pub use utils::{Listing, compare_entries, indent, read_entries, sort_entries};
pub use walker::{TreeWalker, WalkResult};
