//! Output configuration types

use termcolor::{Buffer, ColorChoice};

/// Width of the name column in verbose rows, indentation included.
pub const DEFAULT_NAME_WIDTH: usize = 54;

/// Configuration for output formatting.
#[derive(Debug, Clone)]
pub struct OutputConfig {
    pub use_color: bool,
    pub name_width: usize,
}

impl OutputConfig {
    /// Color choice for a `StandardStream`. Detection has already happened
    /// by the time this config exists.
    pub fn color_choice(&self) -> ColorChoice {
        if self.use_color {
            ColorChoice::Always
        } else {
            ColorChoice::Never
        }
    }

    /// An in-memory buffer that renders the same way stdout would.
    pub fn buffer(&self) -> Buffer {
        if self.use_color {
            Buffer::ansi()
        } else {
            Buffer::no_color()
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            use_color: true,
            name_width: DEFAULT_NAME_WIDTH,
        }
    }
}
