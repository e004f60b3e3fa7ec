//! Entry classification
//!
//! Maps the raw (non-following) metadata of a directory child to an
//! [`EntryKind`], a 9-character permission string, and the numeric owner
//! identity used by the formatter.

use std::ffi::{OsStr, OsString};
use std::fs::Metadata;
use std::os::unix::fs::MetadataExt;

use serde::Serialize;

/// Type of a filesystem entry, as reported by `lstat`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryKind {
    Directory,
    RegularFile,
    Symlink,
    CharDevice,
    BlockDevice,
    Fifo,
    Socket,
    Unknown,
}

impl EntryKind {
    /// Classify raw `st_mode` bits. Unrecognized file types map to `Unknown`.
    pub fn from_mode(mode: u32) -> Self {
        match mode & S_IFMT {
            S_IFDIR => EntryKind::Directory,
            S_IFREG => EntryKind::RegularFile,
            S_IFLNK => EntryKind::Symlink,
            S_IFCHR => EntryKind::CharDevice,
            S_IFBLK => EntryKind::BlockDevice,
            S_IFIFO => EntryKind::Fifo,
            S_IFSOCK => EntryKind::Socket,
            _ => EntryKind::Unknown,
        }
    }

    /// Single-character tag shown in the type column.
    ///
    /// Regular files have no tag.
    pub fn tag(self) -> &'static str {
        match self {
            EntryKind::Directory => "d",
            EntryKind::Symlink => "l",
            EntryKind::CharDevice => "c",
            EntryKind::BlockDevice => "b",
            EntryKind::Fifo => "f",
            EntryKind::Socket => "s",
            EntryKind::RegularFile => "",
            EntryKind::Unknown => "?",
        }
    }

    pub fn is_dir(self) -> bool {
        self == EntryKind::Directory
    }
}

const S_IFMT: u32 = 0o170000;
const S_IFSOCK: u32 = 0o140000;
const S_IFLNK: u32 = 0o120000;
const S_IFREG: u32 = 0o100000;
const S_IFBLK: u32 = 0o060000;
const S_IFDIR: u32 = 0o040000;
const S_IFCHR: u32 = 0o020000;
const S_IFIFO: u32 = 0o010000;

/// The user/group/other rwx bits of a mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Permissions(u32);

impl Permissions {
    pub fn from_mode(mode: u32) -> Self {
        Self(mode & 0o777)
    }

    /// Render as `rwxr-x---` style text, always 9 characters.
    pub fn render(self) -> String {
        const LETTERS: [char; 3] = ['r', 'w', 'x'];
        (0..9)
            .map(|i| {
                let bit = 0o400 >> i;
                if self.0 & bit != 0 { LETTERS[i % 3] } else { '-' }
            })
            .collect()
    }
}

impl std::fmt::Display for Permissions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render())
    }
}

/// One child of a directory listing, stat'd once.
#[derive(Debug, Clone)]
pub struct Entry {
    pub name: OsString,
    pub kind: EntryKind,
    pub size: u64,
    pub uid: u32,
    pub gid: u32,
    pub permissions: Permissions,
}

impl Entry {
    /// Build an entry from `symlink_metadata` output. Symlinks are never resolved.
    pub fn from_metadata(name: OsString, meta: &Metadata) -> Self {
        Self {
            name,
            kind: EntryKind::from_mode(meta.mode()),
            size: meta.len(),
            uid: meta.uid(),
            gid: meta.gid(),
            permissions: Permissions::from_mode(meta.mode()),
        }
    }

    pub fn name(&self) -> &OsStr {
        &self.name
    }

    /// Lossy display name.
    pub fn display_name(&self) -> String {
        self.name.to_string_lossy().into_owned()
    }

    pub fn is_dir(&self) -> bool {
        self.kind.is_dir()
    }

    /// Size as it counts toward totals: regular files only.
    pub fn counted_size(&self) -> u64 {
        if self.kind == EntryKind::RegularFile {
            self.size
        } else {
            0
        }
    }
}
