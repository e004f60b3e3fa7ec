//! Per-entry line rendering
//!
//! Non-verbose lines are just the indented name. Verbose lines add
//! right-justified `owner:group`, size, permission and type columns:
//!
//! ```text
//! src                                                       alice:staff                    rwxr-xr-x  d
//!   main.rs                                                 alice:staff        1234  rw-r--r--
//! ```

use std::io;
use std::path::Path;

use termcolor::{Color, ColorSpec, WriteColor};

use crate::entry::{Entry, EntryKind};
use crate::error::TraverseError;
use crate::identity::IdentityResolver;
use crate::tree::indent;

use super::config::OutputConfig;

const IDENT_WIDTH: usize = 20;
const SIZE_WIDTH: usize = 10;
const PERMS_WIDTH: usize = 9;
/// Names always get at least this much room, even when deep indentation
/// pushes the row past the name column.
const MIN_NAME_WIDTH: usize = 16;

/// Everything to the right of the name column.
pub fn column_tail(ident: &str, size: &str, perms: &str, tag: &str) -> String {
    format!(
        "  {:>iw$}  {:>sw$}  {:<pw$}  {}",
        ident,
        size,
        perms,
        tag,
        iw = IDENT_WIDTH,
        sw = SIZE_WIDTH,
        pw = PERMS_WIDTH,
    )
}

/// A rendered line split so the name can be colored on its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryLine {
    pub indent: String,
    pub name: String,
    /// Padding plus metadata columns; empty in non-verbose mode
    pub rest: String,
}

impl EntryLine {
    pub fn plain(&self) -> String {
        format!("{}{}{}", self.indent, self.name, self.rest)
    }
}

/// Renders entry lines, issue markers and root labels.
pub struct EntryFormatter<'r> {
    config: OutputConfig,
    verbose: bool,
    resolver: &'r dyn IdentityResolver,
}

impl<'r> EntryFormatter<'r> {
    pub fn new(config: OutputConfig, verbose: bool, resolver: &'r dyn IdentityResolver) -> Self {
        Self {
            config,
            verbose,
            resolver,
        }
    }

    pub fn config(&self) -> &OutputConfig {
        &self.config
    }

    /// Lay out one entry at the given nesting level.
    pub fn layout(&self, entry: &Entry, level: usize) -> EntryLine {
        let indent = indent(level);
        let full_name = entry.display_name();

        if !self.verbose {
            return EntryLine {
                indent,
                name: full_name,
                rest: String::new(),
            };
        }

        let available = self
            .config
            .name_width
            .saturating_sub(indent.len())
            .max(MIN_NAME_WIDTH);
        let name = truncate_name(&full_name, available);
        let padding = available.saturating_sub(name.chars().count());

        let size = if entry.kind == EntryKind::RegularFile {
            entry.size.to_string()
        } else {
            String::new()
        };
        let ident = self.resolver.owner_group(entry.uid, entry.gid);
        let tail = column_tail(&ident, &size, &entry.permissions.render(), entry.kind.tag());
        let rest = format!("{}{}", " ".repeat(padding), tail.trim_end());

        EntryLine { indent, name, rest }
    }

    pub fn write_entry<W: WriteColor>(
        &self,
        out: &mut W,
        entry: &Entry,
        level: usize,
    ) -> io::Result<()> {
        let line = self.layout(entry, level);
        write!(out, "{}", line.indent)?;
        match kind_color(entry.kind) {
            Some(color) => {
                out.set_color(&color)?;
                write!(out, "{}", line.name)?;
                out.reset()?;
            }
            None => write!(out, "{}", line.name)?,
        }
        writeln!(out, "{}", line.rest)
    }

    /// The label line printed for a root path before its children.
    pub fn write_root<W: WriteColor>(&self, out: &mut W, root: &Path) -> io::Result<()> {
        out.set_color(ColorSpec::new().set_fg(Some(Color::Blue)).set_bold(true))?;
        write!(out, "{}", root.display())?;
        out.reset()?;
        writeln!(out)
    }

    /// Inline marker for a recoverable failure.
    pub fn write_issue<W: WriteColor>(
        &self,
        out: &mut W,
        error: &TraverseError,
        level: usize,
    ) -> io::Result<()> {
        let (label, color) = if error.is_warning() {
            ("WARNING", Color::Yellow)
        } else {
            ("ERROR", Color::Red)
        };
        write!(out, "{}", indent(level))?;
        out.set_color(ColorSpec::new().set_fg(Some(color)).set_bold(true))?;
        write!(out, "{}:", label)?;
        out.reset()?;
        writeln!(out, " {}", error)
    }
}

fn kind_color(kind: EntryKind) -> Option<ColorSpec> {
    let mut color = ColorSpec::new();
    match kind {
        EntryKind::Directory => color.set_fg(Some(Color::Blue)).set_bold(true),
        EntryKind::Symlink => color.set_fg(Some(Color::Cyan)),
        EntryKind::Fifo | EntryKind::Socket => color.set_fg(Some(Color::Magenta)),
        EntryKind::CharDevice | EntryKind::BlockDevice => color.set_fg(Some(Color::Yellow)),
        EntryKind::RegularFile | EntryKind::Unknown => return None,
    };
    Some(color)
}

/// Fit `name` into `width` characters, marking cut names with `...`.
pub fn truncate_name(name: &str, width: usize) -> String {
    if name.chars().count() <= width {
        return name.to_string();
    }
    if width <= 3 {
        return name.chars().take(width).collect();
    }
    let mut cut: String = name.chars().take(width - 3).collect();
    cut.push_str("...");
    cut
}
