//! Directory listing and sibling ordering

use std::cmp::Ordering;
use std::ffi::OsStr;
use std::io;
use std::path::Path;

use crate::entry::Entry;
use crate::error::TraverseError;

/// Children of one directory, plus the entries that could not be stat'd.
#[derive(Debug, Default)]
pub struct Listing {
    pub entries: Vec<Entry>,
    pub failures: Vec<TraverseError>,
}

/// Read and `lstat` every child of `path`, skipping `.` and `..`.
///
/// Fails only if the directory itself cannot be opened. Per-entry failures
/// are collected in [`Listing::failures`]; the handle is closed before this
/// returns.
pub fn read_entries(path: &Path) -> io::Result<Listing> {
    let mut listing = Listing::default();

    for item in std::fs::read_dir(path)? {
        let item = match item {
            Ok(item) => item,
            Err(source) => {
                listing.failures.push(TraverseError::ReadDir { source });
                continue;
            }
        };

        let name = item.file_name();
        if is_pseudo_entry(&name) {
            continue;
        }

        match std::fs::symlink_metadata(path.join(&name)) {
            Ok(meta) => listing.entries.push(Entry::from_metadata(name, &meta)),
            Err(source) => listing.failures.push(TraverseError::Stat {
                name: name.to_string_lossy().into_owned(),
                source,
            }),
        }
    }

    sort_entries(&mut listing.entries);
    Ok(listing)
}

/// `.` and `..`
pub fn is_pseudo_entry(name: &OsStr) -> bool {
    name == "." || name == ".."
}

/// Directories first, then byte-wise name order within each class.
pub fn compare_entries(a: &Entry, b: &Entry) -> Ordering {
    b.is_dir()
        .cmp(&a.is_dir())
        .then_with(|| a.name().as_encoded_bytes().cmp(b.name().as_encoded_bytes()))
}

pub fn sort_entries(entries: &mut [Entry]) {
    entries.sort_by(compare_entries);
}

/// Indentation for a nesting level, two spaces per level.
pub fn indent(level: usize) -> String {
    "  ".repeat(level)
}
