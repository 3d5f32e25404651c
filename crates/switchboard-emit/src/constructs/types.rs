//! Type declarations: classes, interfaces, structs and enums.

use crate::constructs::head_line;
use crate::modifiers::{Modifier, Modifiers};
use crate::scope::{Scope, ScopeOptions};
use crate::visibility::Visibility;
use crate::writer::CodeWriter;

/// One member of an emitted enum.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumMember {
    name: String,
    value: Option<String>,
}

impl EnumMember {
    /// Creates a member with an implicit value.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: None,
        }
    }

    /// Creates a member with an explicit value.
    #[must_use]
    pub fn with_value(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: Some(value.into()),
        }
    }

    /// Returns the member name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the explicit value, if any.
    #[must_use]
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }
}

fn with_base(head: String, base: Option<&str>) -> String {
    match base.filter(|text| !text.is_empty()) {
        Some(text) => format!("{head} : {text}"),
        None => head,
    }
}

impl CodeWriter {
    /// Opens a class declaration.
    pub fn class(
        &mut self,
        name: &str,
        base: Option<&str>,
        visibility: Visibility,
        modifiers: &Modifiers,
    ) -> Scope<'_> {
        let rendered = modifiers.render();
        let head = head_line(&[visibility.keyword(), &rendered, "class", name]);
        self.write_line(&with_base(head, base));
        self.scope(true, ScopeOptions::new())
    }

    /// Opens an interface declaration.
    pub fn interface(&mut self, name: &str, base: Option<&str>, visibility: Visibility) -> Scope<'_> {
        let head = head_line(&[visibility.keyword(), "interface", name]);
        self.write_line(&with_base(head, base));
        self.scope(true, ScopeOptions::new())
    }

    /// Opens a struct declaration.
    ///
    /// When `modifiers` contains [`Modifier::SequentialLayout`] a
    /// `StructLayout` attribute precedes the declaration, extended by
    /// [`Modifier::Pack8`], [`Modifier::Size`] (using `size`) and
    /// [`Modifier::Ansi`].
    pub fn structure(
        &mut self,
        name: &str,
        visibility: Visibility,
        size: Option<&str>,
        modifiers: &Modifiers,
    ) -> Scope<'_> {
        if modifiers.contains(Modifier::SequentialLayout) {
            let mut layout = String::from("StructLayout(LayoutKind.Sequential");
            if modifiers.contains(Modifier::Pack8) {
                layout.push_str(", Pack = 8");
            }
            if let Some(bytes) = size.filter(|_| modifiers.contains(Modifier::Size)) {
                layout.push_str(", Size = ");
                layout.push_str(bytes);
            }
            if modifiers.contains(Modifier::Ansi) {
                layout.push_str(", CharSet = CharSet.Ansi");
            }
            layout.push(')');
            self.attribute(&layout);
        }

        let rendered = modifiers.render();
        self.write_line(&head_line(&[visibility.keyword(), &rendered, "struct", name]));
        self.scope(true, ScopeOptions::new())
    }

    /// Writes a complete enum declaration.
    pub fn enumeration(
        &mut self,
        name: &str,
        base: Option<&str>,
        visibility: Visibility,
        members: &[EnumMember],
    ) {
        let head = head_line(&[visibility.keyword(), "enum", name]);
        self.write_line(&with_base(head, base));
        let mut body = self.scope(true, ScopeOptions::new());
        let last = members.len().saturating_sub(1);
        for (index, member) in members.iter().enumerate() {
            body.enumerant(member.name(), member.value(), index == last);
        }
    }

    /// Writes one enum member, followed by a comma unless it is the last.
    pub fn enumerant(&mut self, name: &str, value: Option<&str>, is_last: bool) {
        self.write(name);
        if let Some(text) = value.filter(|text| !text.is_empty()) {
            self.write(&format!(" = {text}"));
        }
        if is_last {
            self.newline();
        } else {
            self.write_line(",");
        }
    }
}
