//! Indenting output buffer.
//!
//! [`XmlWriter`] is the append-only buffer the stringifier writes into,
//! together with the current indentation depth. One writer is created per
//! stringify call and consumed by [`XmlWriter::finish`].

/// An append-only, line-oriented output buffer.
#[derive(Debug, Clone)]
pub struct XmlWriter {
    output: String,
    /// Current indentation level.
    depth: usize,
    /// Spaces per indentation level.
    indent_size: usize,
}

impl XmlWriter {
    /// Creates a new writer with the given indentation width.
    #[inline]
    pub fn new(indent_size: usize) -> Self {
        Self {
            output: String::new(),
            depth: 0,
            indent_size,
        }
    }

    /// Returns the current nesting depth.
    #[inline]
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Returns the length of the output written so far, in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.output.len()
    }

    /// Returns true if nothing has been written yet.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.output.is_empty()
    }

    /// Appends `text`, optionally preceded by indentation for the current
    /// depth and followed by a newline.
    pub fn write(&mut self, text: &str, newline: bool, indent: bool) {
        if indent {
            self.write_indent();
        }
        self.output.push_str(text);
        if newline {
            self.output.push('\n');
        }
    }

    /// Appends an indented line.
    #[inline]
    pub fn write_line(&mut self, text: &str) {
        self.write(text, true, true);
    }

    /// Increases the indentation depth.
    #[inline]
    pub fn down(&mut self) {
        self.depth += 1;
    }

    /// Decreases the indentation depth, stopping at zero.
    #[inline]
    pub fn up(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    /// Strips the whitespace surrounding the output written so far.
    ///
    /// Used to pull inline text up onto the line of the tag just opened.
    pub fn trim(&mut self) {
        let end = self.output.trim_end().len();
        self.output.truncate(end);

        let start = self.output.len() - self.output.trim_start().len();
        if start > 0 {
            self.output.drain(..start);
        }
    }

    /// Terminates the current line unless it is already terminated.
    pub fn break_line(&mut self) {
        if !self.output.is_empty() && !self.output.ends_with('\n') {
            self.output.push('\n');
        }
    }

    /// Consumes the writer and returns the trimmed output.
    pub fn finish(mut self) -> String {
        self.trim();
        self.output
    }

    fn write_indent(&mut self) {
        let width = self.indent_size * self.depth;
        self.output.extend(std::iter::repeat(' ').take(width));
    }
}

impl Default for XmlWriter {
    fn default() -> Self {
        Self::new(2)
    }
}
