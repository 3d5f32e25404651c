//! Scope guards that close braces when dropped.
//!
//! Every construct that opens a scope hands back a guard holding the writer
//! mutably. Body writes go through the guard via `Deref`, and the closing
//! delimiter is written in `Drop`, so a scope is closed even when the caller
//! leaves early through `?` or a panic.

use std::ops::{Deref, DerefMut};

use crate::modifiers::Modifiers;
use crate::visibility::Visibility;
use crate::writer::{CodeWriter, DEFAULT_INDENT};

/// Statement written before a `case` scope closes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CaseExit {
    /// `break;`
    #[default]
    Break,
    /// `return;`
    Return,
}

impl CaseExit {
    const fn statement(self) -> &'static str {
        match self {
            Self::Break => "break;",
            Self::Return => "return;",
        }
    }
}

/// Closing behaviour of a [`Scope`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScopeOptions {
    closing_tag: &'static str,
    trailing_blank_line: bool,
    exit: Option<CaseExit>,
}

impl Default for ScopeOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl ScopeOptions {
    /// Closes with a bare `}`.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            closing_tag: "}",
            trailing_blank_line: false,
            exit: None,
        }
    }

    /// Closes with `};`, for scopes that are themselves expressions such as
    /// initialisers.
    #[must_use]
    pub const fn statement(mut self) -> Self {
        self.closing_tag = "};";
        self
    }

    /// Writes a blank line after the closing tag.
    #[must_use]
    pub const fn trailing_blank_line(mut self) -> Self {
        self.trailing_blank_line = true;
        self
    }

    pub(crate) const fn closing_tag(mut self, tag: &'static str) -> Self {
        self.closing_tag = tag;
        self
    }

    pub(crate) const fn case_exit(mut self, exit: CaseExit) -> Self {
        self.exit = Some(exit);
        self
    }
}

/// Guard for an open scope. Dereferences to the underlying [`CodeWriter`].
#[derive(Debug)]
#[must_use = "dropping the guard closes the scope immediately"]
pub struct Scope<'w> {
    writer: &'w mut CodeWriter,
    options: ScopeOptions,
}

impl<'w> Scope<'w> {
    pub(crate) const fn new(writer: &'w mut CodeWriter, options: ScopeOptions) -> Self {
        Self { writer, options }
    }

    /// Closes the current branch and opens an `else` branch, leaving a blank
    /// line after the closing brace.
    pub fn else_block(&mut self) {
        self.reopen("else", true);
    }

    /// Closes the current block and opens a catch-all handler.
    pub fn catch_all(&mut self) {
        self.reopen("catch", false);
    }

    /// Closes the current block and opens a typed exception handler.
    pub fn catch(&mut self, exception: &str, variable: Option<&str>) {
        let header = match variable {
            Some(name) => format!("catch ({exception} {name})"),
            None => format!("catch ({exception})"),
        };
        self.reopen(&header, false);
    }

    /// Closes the current block and opens a `finally` block.
    pub fn finally(&mut self) {
        self.reopen("finally", false);
    }

    /// Switches a conditional compilation region to its `#else` arm.
    pub fn pragma_else(&mut self) {
        self.writer.pop_indent();
        self.writer.write_line("#else");
        self.writer.push_indent(DEFAULT_INDENT);
    }

    fn reopen(&mut self, header: &str, trailing_blank_line: bool) {
        self.writer.close_scope("}", trailing_blank_line);
        self.writer.write_line(header);
        self.writer.open_scope("{");
    }
}

impl Deref for Scope<'_> {
    type Target = CodeWriter;

    fn deref(&self) -> &Self::Target {
        self.writer
    }
}

impl DerefMut for Scope<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.writer
    }
}

impl Drop for Scope<'_> {
    fn drop(&mut self) {
        if let Some(exit) = self.options.exit {
            self.writer.write_line(exit.statement());
        }
        self.writer
            .close_scope(self.options.closing_tag, self.options.trailing_blank_line);
    }
}

/// Guard for a property body offering accessor helpers.
///
/// Accessors omit their visibility keyword when it matches the property's.
#[derive(Debug)]
#[must_use = "dropping the guard closes the property immediately"]
pub struct PropertyScope<'w> {
    scope: Scope<'w>,
    visibility: Visibility,
    getter_written: bool,
}

impl<'w> PropertyScope<'w> {
    pub(crate) const fn new(scope: Scope<'w>, visibility: Visibility) -> Self {
        Self {
            scope,
            visibility,
            getter_written: false,
        }
    }

    /// Opens a `get` accessor body.
    pub fn get(&mut self, visibility: Visibility, modifiers: &Modifiers) -> Scope<'_> {
        self.getter_written = true;
        let header = self.accessor_header(visibility, modifiers, "get");
        self.scope.write_line(&header);
        self.scope.open_scope("{");
        Scope::new(&mut self.scope, ScopeOptions::new())
    }

    /// Opens a `set` accessor body, separated from a preceding getter by an
    /// empty line.
    pub fn set(&mut self, visibility: Visibility, modifiers: &Modifiers) -> Scope<'_> {
        if self.getter_written {
            self.scope.newline();
        }
        let header = self.accessor_header(visibility, modifiers, "set");
        self.scope.write_line(&header);
        self.scope.open_scope("{");
        Scope::new(&mut self.scope, ScopeOptions::new())
    }

    /// Writes an expression-bodied `get` accessor.
    pub fn get_expression(&mut self, expression: &str, visibility: Visibility, modifiers: &Modifiers) {
        let header = self.accessor_header(visibility, modifiers, "get");
        self.scope.write_line(&format!("{header} => {expression};"));
    }

    /// Writes an expression-bodied `set` accessor.
    pub fn set_expression(&mut self, expression: &str, visibility: Visibility, modifiers: &Modifiers) {
        let header = self.accessor_header(visibility, modifiers, "set");
        self.scope.write_line(&format!("{header} => {expression};"));
    }

    fn accessor_header(&self, visibility: Visibility, modifiers: &Modifiers, keyword: &str) -> String {
        let access = if visibility == self.visibility {
            ""
        } else {
            visibility.keyword()
        };
        let rendered = modifiers.render();
        [access, rendered.as_str(), keyword]
            .into_iter()
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl Deref for PropertyScope<'_> {
    type Target = CodeWriter;

    fn deref(&self) -> &Self::Target {
        &self.scope
    }
}

impl DerefMut for PropertyScope<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.scope
    }
}

impl CodeWriter {
    /// Returns a guard that closes a scope on drop, opening one first when
    /// `open` is set.
    pub fn scope(&mut self, open: bool, options: ScopeOptions) -> Scope<'_> {
        if open {
            self.open_scope("{");
        }
        Scope::new(self, options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guard_closes_scope_on_drop() {
        let mut writer = CodeWriter::new();
        {
            let mut scope = writer.scope(true, ScopeOptions::new());
            scope.write_line("body();");
        }
        assert_eq!(writer.output(), "{\n    body();\n}\n");
        assert_eq!(writer.indent_depth(), 0);
    }

    #[test]
    fn statement_scope_closes_with_semicolon() {
        let mut writer = CodeWriter::new();
        {
            let mut scope = writer.scope(true, ScopeOptions::new().statement());
            scope.write_line("1, 2");
        }
        assert_eq!(writer.output(), "{\n    1, 2\n};\n");
    }

    #[test]
    fn trailing_blank_line_follows_closing_tag() {
        let mut writer = CodeWriter::new();
        drop(writer.scope(true, ScopeOptions::new().trailing_blank_line()));
        assert_eq!(writer.output(), "{\n}\n\n");
    }

    #[test]
    fn guard_closes_scope_when_body_fails_early() {
        fn emit(writer: &mut CodeWriter) -> Result<(), String> {
            let mut scope = writer.scope(true, ScopeOptions::new());
            scope.write_line("first();");
            let count: u8 = "many".parse().map_err(|_| String::from("abandoned"))?;
            scope.write_line(&format!("second({count});"));
            Ok(())
        }

        let mut writer = CodeWriter::new();
        assert!(emit(&mut writer).is_err());
        assert_eq!(writer.output(), "{\n    first();\n}\n");
    }

    #[test]
    fn nested_guards_close_in_reverse_order() {
        let mut writer = CodeWriter::new();
        {
            let mut outer = writer.scope(true, ScopeOptions::new());
            {
                let mut inner = outer.scope(true, ScopeOptions::new());
                inner.write_line("x();");
            }
            outer.write_line("y();");
        }
        assert_eq!(
            writer.output(),
            "{\n    {\n        x();\n    }\n    y();\n}\n"
        );
    }
}
