//! Header, per-root footer and grand-total rendering

use std::io;

use termcolor::{ColorSpec, WriteColor};

use crate::stats::{GrandTotal, Summary};

use super::entry::column_tail;

/// `1 file`, `0 files`, `2 files`.
pub fn pluralize(count: u64, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("1 {}", singular)
    } else {
        format!("{} {}", count, plural)
    }
}

/// Stateless renderer for the summary-mode report blocks.
#[derive(Debug, Clone, Copy)]
pub struct ReportWriter {
    dirs_only: bool,
    verbose: bool,
    name_width: usize,
}

impl ReportWriter {
    pub fn new(dirs_only: bool, verbose: bool, name_width: usize) -> Self {
        Self {
            dirs_only,
            verbose,
            name_width,
        }
    }

    /// Column titles, aligned with verbose entry rows.
    pub fn header_line(&self) -> String {
        format!(
            "{:<width$}{}",
            "Name",
            column_tail("User:Group", "Size", "Perms", "Type"),
            width = self.name_width
        )
    }

    pub fn separator(&self) -> String {
        "-".repeat(self.header_line().chars().count())
    }

    /// The footer lines for one root.
    pub fn footer_lines(&self, summary: &Summary) -> Vec<String> {
        if self.dirs_only {
            return vec![pluralize(summary.directories, "directory", "directories")];
        }

        let mut lines = vec![format!(
            "{}, {}, {}, {}, and {}",
            pluralize(summary.files, "file", "files"),
            pluralize(summary.directories, "directory", "directories"),
            pluralize(summary.links, "link", "links"),
            pluralize(summary.fifos, "pipe", "pipes"),
            pluralize(summary.sockets, "socket", "sockets"),
        )];
        if self.verbose {
            lines.push(format!("Total size: {}", pluralize(summary.size, "byte", "bytes")));
        }
        lines
    }

    /// The block printed after all roots when more than one was analyzed.
    pub fn grand_total_lines(&self, total: &GrandTotal) -> Vec<String> {
        let s = &total.summary;
        let mut lines = vec![format!("Analyzed {} directories:", total.roots)];
        if self.dirs_only {
            lines.push(total_row("total # of directories:", s.directories));
            return lines;
        }

        lines.push(total_row("total # of files:", s.files));
        lines.push(total_row("total # of directories:", s.directories));
        lines.push(total_row("total # of links:", s.links));
        lines.push(total_row("total # of pipes:", s.fifos));
        lines.push(total_row("total # of sockets:", s.sockets));
        if self.verbose {
            lines.push(total_row("total file size:", s.size));
        }
        lines
    }

    pub fn write_header<W: WriteColor>(&self, out: &mut W) -> io::Result<()> {
        out.set_color(ColorSpec::new().set_bold(true))?;
        write!(out, "{}", self.header_line())?;
        out.reset()?;
        writeln!(out)?;
        writeln!(out, "{}", self.separator())
    }

    pub fn write_footer<W: WriteColor>(&self, out: &mut W, summary: &Summary) -> io::Result<()> {
        writeln!(out, "{}", self.separator())?;
        for line in self.footer_lines(summary) {
            writeln!(out, "{}", line)?;
        }
        Ok(())
    }

    pub fn write_grand_total<W: WriteColor>(
        &self,
        out: &mut W,
        total: &GrandTotal,
    ) -> io::Result<()> {
        for line in self.grand_total_lines(total) {
            writeln!(out, "{}", line)?;
        }
        Ok(())
    }
}

fn total_row(label: &str, value: u64) -> String {
    format!("  {:<25}{:>16}", label, value)
}

#[cfg(test)]
mod tests {
    use termcolor::Buffer;

    use super::*;
    use crate::output::config::DEFAULT_NAME_WIDTH;

    fn writer(dirs_only: bool, verbose: bool) -> ReportWriter {
        ReportWriter::new(dirs_only, verbose, DEFAULT_NAME_WIDTH)
    }

    fn summary(files: u64, directories: u64, links: u64, fifos: u64, sockets: u64) -> Summary {
        Summary {
            directories,
            files,
            links,
            fifos,
            sockets,
            size: 0,
        }
    }

    #[test]
    fn test_pluralize() {
        assert_eq!(pluralize(0, "file", "files"), "0 files");
        assert_eq!(pluralize(1, "file", "files"), "1 file");
        assert_eq!(pluralize(2, "file", "files"), "2 files");
        assert_eq!(pluralize(1, "directory", "directories"), "1 directory");
    }

    #[test]
    fn test_footer_one_file_one_directory() {
        let lines = writer(false, false).footer_lines(&summary(1, 1, 0, 0, 0));
        assert_eq!(lines, ["1 file, 1 directory, 0 links, 0 pipes, and 0 sockets"]);
    }

    #[test]
    fn test_footer_all_singular() {
        let lines = writer(false, false).footer_lines(&summary(1, 1, 1, 1, 1));
        assert_eq!(lines, ["1 file, 1 directory, 1 link, 1 pipe, and 1 socket"]);
    }

    #[test]
    fn test_footer_all_zero_is_plural() {
        let lines = writer(false, false).footer_lines(&Summary::default());
        assert_eq!(lines, ["0 files, 0 directories, 0 links, 0 pipes, and 0 sockets"]);
    }

    #[test]
    fn test_footer_dirs_only() {
        assert_eq!(writer(true, false).footer_lines(&summary(5, 1, 0, 0, 0)), ["1 directory"]);
        assert_eq!(writer(true, true).footer_lines(&summary(5, 3, 0, 0, 0)), ["3 directories"]);
    }

    #[test]
    fn test_footer_verbose_size_line() {
        let mut s = summary(2, 0, 0, 0, 0);
        s.size = 1;
        let lines = writer(false, true).footer_lines(&s);
        assert_eq!(lines[1], "Total size: 1 byte");
        s.size = 1536;
        let lines = writer(false, true).footer_lines(&s);
        assert_eq!(lines[1], "Total size: 1536 bytes");
    }

    #[test]
    fn test_header_and_separator_same_width() {
        let w = writer(false, true);
        let header = w.header_line();
        assert!(header.starts_with("Name "));
        assert!(header.ends_with("Perms      Type"));
        assert_eq!(w.separator().len(), header.len());
        assert!(w.separator().chars().all(|c| c == '-'));
    }

    #[test]
    fn test_grand_total_block() {
        let mut total = GrandTotal::new();
        total.add_root(summary(3, 1, 0, 0, 0));
        total.add_root(summary(2, 4, 1, 0, 0));

        let lines = writer(false, false).grand_total_lines(&total);
        assert_eq!(
            lines,
            [
                "Analyzed 2 directories:",
                "  total # of files:                       5",
                "  total # of directories:                 5",
                "  total # of links:                       1",
                "  total # of pipes:                       0",
                "  total # of sockets:                     0",
            ]
        );

        let lines = writer(true, false).grand_total_lines(&total);
        assert_eq!(lines.len(), 2);
        assert!(lines[1].starts_with("  total # of directories:"));

        let lines = writer(false, true).grand_total_lines(&total);
        assert!(lines.last().unwrap().starts_with("  total file size:"));
    }

    #[test]
    fn test_write_footer() {
        let mut buf = Buffer::no_color();
        let w = writer(true, false);
        w.write_footer(&mut buf, &summary(0, 2, 0, 0, 0)).unwrap();
        let text = String::from_utf8(buf.into_inner()).unwrap();
        assert_eq!(text, format!("{}\n2 directories\n", w.separator()));
    }
}
