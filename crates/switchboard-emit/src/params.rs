//! Method and constructor parameters.

use std::collections::BTreeSet;
use std::fmt;

/// Passing mode of a parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ParamModifier {
    /// `in`
    In,
    /// `out`
    Out,
    /// `ref`
    Ref,
}

/// Set of [`ParamModifier`] values attached to one parameter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ParamModifiers(BTreeSet<ParamModifier>);

impl ParamModifiers {
    /// Creates an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self(BTreeSet::new())
    }

    /// Returns the set with `modifier` added.
    #[must_use]
    pub fn with(mut self, modifier: ParamModifier) -> Self {
        self.0.insert(modifier);
        self
    }

    /// Returns whether the set contains `modifier`.
    #[must_use]
    pub fn contains(&self, modifier: ParamModifier) -> bool {
        self.0.contains(&modifier)
    }

    /// Renders the passing mode.
    ///
    /// `out` takes precedence over everything else; `ref` combined with `in`
    /// renders as `ref in`.
    #[must_use]
    pub fn render(&self) -> &'static str {
        let has_in = self.contains(ParamModifier::In);
        let has_ref = self.contains(ParamModifier::Ref);

        if self.contains(ParamModifier::Out) {
            "out"
        } else if has_in && has_ref {
            "ref in"
        } else if has_in {
            "in"
        } else if has_ref {
            "ref"
        } else {
            ""
        }
    }
}

impl FromIterator<ParamModifier> for ParamModifiers {
    fn from_iter<I: IntoIterator<Item = ParamModifier>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// A single declared parameter: `[mode ]type name`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Parameter {
    name: String,
    ty: String,
    modifiers: ParamModifiers,
}

impl Parameter {
    /// Creates a by-value parameter.
    #[must_use]
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            modifiers: ParamModifiers::new(),
        }
    }

    /// Marks the parameter as `out`.
    #[must_use]
    pub fn out(self) -> Self {
        self.with_modifier(ParamModifier::Out)
    }

    /// Adds a passing-mode modifier.
    #[must_use]
    pub fn with_modifier(mut self, modifier: ParamModifier) -> Self {
        self.modifiers = self.modifiers.with(modifier);
        self
    }

    /// Returns the parameter name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the declared type.
    #[must_use]
    pub fn ty(&self) -> &str {
        &self.ty
    }

    /// Returns the passing-mode modifiers.
    #[must_use]
    pub const fn modifiers(&self) -> &ParamModifiers {
        &self.modifiers
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mode = self.modifiers.render();
        if mode.is_empty() {
            write!(f, "{} {}", self.ty, self.name)
        } else {
            write!(f, "{mode} {} {}", self.ty, self.name)
        }
    }
}

/// Renders a comma-separated parameter list without the parentheses.
pub(crate) fn render_list(parameters: &[Parameter]) -> String {
    parameters
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
