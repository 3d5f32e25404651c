//! Indentation-aware text buffer.
//!
//! [`CodeWriter`] owns an append-only buffer, a stack of pushed indent units
//! and a flag recording whether the last indented write ended a line. The
//! flag decides whether the next [`CodeWriter::write`] must be prefixed with
//! the current indent, which keeps indentation at exactly one application per
//! physical line.

/// Indent unit used by scopes and by the template control characters.
pub const DEFAULT_INDENT: &str = "    ";

/// Template control character that pushes one [`DEFAULT_INDENT`] unit.
pub const PUSH_INDENT: char = '\u{7}';

/// Template control character that pops one indent unit.
pub const POP_INDENT: char = '\u{8}';

/// Observable position of the writer relative to line boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriterState {
    /// Nothing has been written yet.
    Fresh,
    /// The last indented write ended with a line break.
    AfterNewline,
    /// The writer is in the middle of a line.
    MidLine,
}

/// Buffered source text writer with an indentation stack.
///
/// # Examples
///
/// ```
/// use switchboard_emit::CodeWriter;
///
/// let mut writer = CodeWriter::new();
/// writer.write_line("class Example");
/// writer.open_scope("{");
/// writer.write("int first;\nint second;");
/// writer.newline();
/// writer.close_scope("}", false);
///
/// assert_eq!(
///     writer.output(),
///     "class Example\n{\n    int first;\n    int second;\n}\n"
/// );
/// ```
#[derive(Debug, Default)]
pub struct CodeWriter {
    output: String,
    indent: String,
    indent_lengths: Vec<usize>,
    ends_with_newline: bool,
    using_count: usize,
}

impl CodeWriter {
    /// Creates an empty writer.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            output: String::new(),
            indent: String::new(),
            indent_lengths: Vec::new(),
            ends_with_newline: false,
            using_count: 0,
        }
    }

    /// Returns the text written so far.
    #[must_use]
    pub fn output(&self) -> &str {
        &self.output
    }

    /// Consumes the writer, returning the text.
    #[must_use]
    pub fn into_output(self) -> String {
        self.output
    }

    /// Returns the concatenation of every pushed indent unit.
    #[must_use]
    pub fn current_indent(&self) -> &str {
        &self.indent
    }

    /// Returns the number of indent units on the stack.
    #[must_use]
    pub fn indent_depth(&self) -> usize {
        self.indent_lengths.len()
    }

    /// Returns the number of `using` directives written.
    #[must_use]
    pub const fn using_count(&self) -> usize {
        self.using_count
    }

    pub(crate) const fn record_using(&mut self) {
        self.using_count = self.using_count.saturating_add(1);
    }

    /// Reports where the writer currently stands relative to line breaks.
    #[must_use]
    pub fn state(&self) -> WriterState {
        if self.output.is_empty() {
            WriterState::Fresh
        } else if self.ends_with_newline {
            WriterState::AfterNewline
        } else {
            WriterState::MidLine
        }
    }

    /// Returns the writer to its freshly constructed state.
    pub fn reset(&mut self) {
        self.output.clear();
        self.indent.clear();
        self.indent_lengths.clear();
        self.ends_with_newline = false;
        self.using_count = 0;
    }

    /// Appends `text`, applying the current indent at the start of each line.
    ///
    /// Newlines embedded in `text` are followed by the current indent. A
    /// trailing newline defers its indent to the next write, so a line is
    /// never indented twice.
    pub fn write(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }

        if self.output.is_empty() || self.ends_with_newline {
            self.output.push_str(&self.indent);
            self.ends_with_newline = false;
        }

        if text.ends_with('\n') {
            self.ends_with_newline = true;
        }

        if self.indent.is_empty() {
            self.output.push_str(text);
            return;
        }

        let mut segments = text.split_inclusive('\n').peekable();
        while let Some(segment) = segments.next() {
            self.output.push_str(segment);
            if segment.ends_with('\n') && segments.peek().is_some() {
                self.output.push_str(&self.indent);
            }
        }
    }

    /// Appends a single character through [`CodeWriter::write`].
    pub fn write_char(&mut self, ch: char) {
        let mut buffer = [0_u8; 4];
        self.write(ch.encode_utf8(&mut buffer));
    }

    /// Writes `text` followed by a line break.
    pub fn write_line(&mut self, text: &str) {
        self.write(text);
        self.output.push('\n');
        self.ends_with_newline = true;
    }

    /// Ends the current line.
    pub fn newline(&mut self) {
        self.write_line("");
    }

    /// Appends `count` bare line breaks.
    ///
    /// Blank lines bypass indentation and leave the newline-tracking state
    /// untouched.
    pub fn blank_line(&mut self, count: usize) {
        for _ in 0..count {
            self.output.push('\n');
        }
    }

    /// Appends `text` verbatim, bypassing indentation and state tracking.
    pub fn raw_write(&mut self, text: &str) {
        self.output.push_str(text);
    }

    /// Appends `text` and a line break verbatim.
    pub fn raw_write_line(&mut self, text: &str) {
        self.output.push_str(text);
        self.output.push('\n');
    }

    /// Pushes an indent unit onto the stack.
    pub fn push_indent(&mut self, unit: &str) {
        self.indent.push_str(unit);
        self.indent_lengths.push(unit.len());
    }

    /// Pops the most recently pushed indent unit and returns it.
    ///
    /// Popping an empty stack is a no-op that returns an empty string.
    pub fn pop_indent(&mut self) -> String {
        match self.indent_lengths.pop() {
            Some(length) if length > 0 => {
                let start = self.indent.len().saturating_sub(length);
                self.indent.split_off(start)
            }
            _ => String::new(),
        }
    }

    /// Drops every indent unit.
    pub fn clear_indent(&mut self) {
        self.indent.clear();
        self.indent_lengths.clear();
    }

    /// Writes `tag` on its own line and indents what follows.
    pub fn open_scope(&mut self, tag: &str) {
        self.write_line(tag);
        self.push_indent(DEFAULT_INDENT);
    }

    /// Outdents and writes `tag` on its own line, optionally followed by a
    /// blank line.
    pub fn close_scope(&mut self, tag: &str, trailing_blank_line: bool) {
        self.pop_indent();
        self.write_line(tag);
        if trailing_blank_line {
            self.raw_write_line("");
        }
    }

    /// Interprets template lines character by character.
    ///
    /// [`PUSH_INDENT`] and [`POP_INDENT`] adjust the indent and are consumed.
    /// `\n` ends the current line. A doubled brace writes one literal brace;
    /// a single brace ends any unfinished line and then opens or closes a
    /// scope. An empty entry writes an empty line.
    ///
    /// # Examples
    ///
    /// ```
    /// use switchboard_emit::CodeWriter;
    ///
    /// let mut writer = CodeWriter::new();
    /// writer.block(&["default:\u{7}\nthrow new Failure(\"{{x}}\");\u{8}\n"]);
    ///
    /// assert_eq!(writer.output(), "default:\n    throw new Failure(\"{x}\");\n");
    /// ```
    pub fn block(&mut self, lines: &[&str]) {
        for line in lines {
            if line.is_empty() {
                self.newline();
                continue;
            }

            let mut chars = line.chars().peekable();
            while let Some(ch) = chars.next() {
                match ch {
                    PUSH_INDENT => self.push_indent(DEFAULT_INDENT),
                    POP_INDENT => {
                        self.pop_indent();
                    }
                    '\n' => self.newline(),
                    '{' | '}' => {
                        if chars.next_if_eq(&ch).is_some() {
                            self.write_char(ch);
                            continue;
                        }
                        if !self.ends_with_newline {
                            self.newline();
                        }
                        if ch == '{' {
                            self.open_scope("{");
                        } else {
                            self.close_scope("}", false);
                        }
                    }
                    other => self.write_char(other),
                }
            }
        }
    }
}
