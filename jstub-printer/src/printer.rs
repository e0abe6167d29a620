use std::fmt;

/// End-of-block marker for [`Printer::append_multi_line`]. A block ending in
/// this marker is always terminated by a line break.
pub const FORCE_NEWLINE: &str = "\u{1e}";

const INDENT: &str = "    ";

/// Ordered, indentation-aware text accumulator.
///
/// The current indent is applied to every non-empty line as it starts. The
/// accumulated text is returned verbatim; nothing is reformatted afterwards.
#[derive(Debug, Default, Clone)]
pub struct Printer {
    out: String,
    indent: usize,
    /// The last appended fragment left the cursor mid-line.
    pending: bool,
}

impl Printer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn indent(&mut self) {
        self.indent += 1;
    }

    pub fn dedent(&mut self) {
        self.indent = self.indent.saturating_sub(1);
    }

    /// Append `text` followed by exactly one line break.
    pub fn append_line(&mut self, text: &str) {
        self.write(text);
        self.out.push('\n');
        self.pending = false;
    }

    /// Append a blank line.
    pub fn newline(&mut self) {
        self.append_line("");
    }

    /// Append a block that may span several lines.
    ///
    /// Without a trailing [`FORCE_NEWLINE`], a block that does not end in a
    /// line break leaves the cursor on its last line.
    pub fn append_multi_line(&mut self, text: &str) {
        let (body, force) = match text.strip_suffix(FORCE_NEWLINE) {
            Some(body) => (body, true),
            None => (text, false),
        };
        for piece in body.split_inclusive('\n') {
            match piece.strip_suffix('\n') {
                Some(line) => self.append_line(line),
                None => {
                    self.write(piece);
                    self.pending = true;
                }
            }
        }
        if force && self.pending {
            self.out.push('\n');
            self.pending = false;
        }
    }

    pub fn into_string(self) -> String {
        self.out
    }

    fn write(&mut self, text: &str) {
        if !self.pending && !text.is_empty() {
            for _ in 0..self.indent {
                self.out.push_str(INDENT);
            }
        }
        self.out.push_str(text);
    }
}

impl fmt::Display for Printer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.out)
    }
}
