//! Composite constructs built on the core writer.
//!
//! Each construct renders one declaration or statement head and, where the
//! construct has a body, returns a [`Scope`](crate::Scope) guard that closes
//! it. Head lines are assembled from their non-empty parts, so an empty
//! visibility or modifier list never leaves a doubled or leading space.

mod flow;
mod members;
mod types;

pub use members::ConstructorInitializer;
pub use types::EnumMember;

use crate::scope::{Scope, ScopeOptions};
use crate::writer::CodeWriter;

/// Joins the non-empty parts of a declaration head with single spaces.
pub(crate) fn head_line(parts: &[&str]) -> String {
    parts
        .iter()
        .copied()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

impl CodeWriter {
    /// Writes a line comment. The text follows `//` verbatim.
    pub fn comment(&mut self, text: &str) {
        self.write_line(&format!("//{text}"));
    }

    /// Writes a `using` directive and counts it.
    pub fn using(&mut self, namespace: &str) {
        self.write_line(&format!("using {namespace};"));
        self.record_using();
    }

    /// Writes an attribute line such as `[Flags]`.
    pub fn attribute(&mut self, attribute: &str) {
        self.write_line(&format!("[{attribute}]"));
    }

    /// Writes `text` terminated by a semicolon.
    pub fn statement(&mut self, text: &str) {
        self.write_line(&format!("{text};"));
    }

    /// Writes a `return` statement, with a value when one is given.
    pub fn return_value(&mut self, value: Option<&str>) {
        match value.filter(|text| !text.is_empty()) {
            Some(text) => self.write_line(&format!("return {text};")),
            None => self.write_line("return;"),
        }
    }

    /// Opens a block-scoped namespace.
    pub fn namespace(&mut self, namespace: &str) -> Scope<'_> {
        self.write_line(&format!("namespace {namespace}"));
        self.scope(true, ScopeOptions::new())
    }

    /// Writes a file-scoped namespace declaration.
    pub fn file_scoped_namespace(&mut self, namespace: &str) {
        self.write_line(&format!("namespace {namespace};"));
    }
}
