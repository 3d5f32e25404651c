//! Declaration modifiers and their canonical rendering.
//!
//! Modifiers are held in an ordered set rather than as bit flags. The variant
//! declaration order of [`Modifier`] is the canonical rendering order, so
//! iterating a [`Modifiers`] set always yields keywords in the same sequence
//! regardless of insertion order.

use std::collections::BTreeSet;
use std::fmt;

use strum::EnumString;

/// A single declaration modifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, EnumString)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Modifier {
    /// `virtual`
    Virtual,
    /// `abstract`
    Abstract,
    /// `override`
    Override,
    /// `sealed`
    Sealed,
    /// `partial`
    Partial,
    /// `static`
    Static,
    /// Sequential struct layout; rendered as a `StructLayout` attribute.
    SequentialLayout,
    /// `unsafe`
    Unsafe,
    /// Eight-byte packing; part of the `StructLayout` attribute.
    Pack8,
    /// Explicit struct size; part of the `StructLayout` attribute.
    Size,
    /// Explicit field offsets; layout only.
    Offset,
    /// ANSI character set; part of the `StructLayout` attribute.
    Ansi,
    /// `readonly`
    #[strum(serialize = "readonly", serialize = "read_only")]
    ReadOnly,
    /// `async`
    Async,
}

impl Modifier {
    /// Returns the keyword for this modifier, or `None` when the modifier
    /// only affects layout and has no keyword of its own.
    #[must_use]
    pub const fn keyword(self) -> Option<&'static str> {
        match self {
            Self::Virtual => Some("virtual"),
            Self::Abstract => Some("abstract"),
            Self::Override => Some("override"),
            Self::Sealed => Some("sealed"),
            Self::Partial => Some("partial"),
            Self::Static => Some("static"),
            Self::Unsafe => Some("unsafe"),
            Self::ReadOnly => Some("readonly"),
            Self::Async => Some("async"),
            Self::SequentialLayout | Self::Pack8 | Self::Size | Self::Offset | Self::Ansi => None,
        }
    }

    /// Returns `true` for modifiers that drive the struct layout attribute
    /// instead of rendering a keyword.
    #[must_use]
    pub const fn is_layout(self) -> bool {
        self.keyword().is_none()
    }
}

/// Ordered set of [`Modifier`] values.
///
/// # Examples
///
/// ```
/// use switchboard_emit::{Modifier, Modifiers};
///
/// let modifiers: Modifiers = [Modifier::Async, Modifier::Static].into_iter().collect();
/// assert_eq!(modifiers.render(), "static async");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Modifiers(BTreeSet<Modifier>);

impl Modifiers {
    /// Creates an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self(BTreeSet::new())
    }

    /// Returns the set with `modifier` added.
    #[must_use]
    pub fn with(mut self, modifier: Modifier) -> Self {
        self.0.insert(modifier);
        self
    }

    /// Adds a modifier. Inserting an existing modifier is a no-op.
    pub fn insert(&mut self, modifier: Modifier) {
        self.0.insert(modifier);
    }

    /// Returns whether the set contains `modifier`.
    #[must_use]
    pub fn contains(&self, modifier: Modifier) -> bool {
        self.0.contains(&modifier)
    }

    /// Returns the union of both sets.
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        Self(self.0.union(&other.0).copied().collect())
    }

    /// Returns whether the set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates the modifiers in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = Modifier> + '_ {
        self.0.iter().copied()
    }

    /// Renders the keywords in canonical order, joined by single spaces.
    ///
    /// Layout-only modifiers are skipped.
    #[must_use]
    pub fn render(&self) -> String {
        self.iter()
            .filter_map(Modifier::keyword)
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Renders like [`Modifiers::render`], adding a leading and/or trailing
    /// space only when the rendered text is non-empty.
    #[must_use]
    pub fn render_padded(&self, prepend_space: bool, append_space: bool) -> String {
        let text = self.render();
        if text.is_empty() {
            return text;
        }
        let prefix = if prepend_space { " " } else { "" };
        let suffix = if append_space { " " } else { "" };
        format!("{prefix}{text}{suffix}")
    }
}

impl fmt::Display for Modifiers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl From<Modifier> for Modifiers {
    fn from(modifier: Modifier) -> Self {
        Self::new().with(modifier)
    }
}

impl<const N: usize> From<[Modifier; N]> for Modifiers {
    fn from(modifiers: [Modifier; N]) -> Self {
        modifiers.into_iter().collect()
    }
}

impl FromIterator<Modifier> for Modifiers {
    fn from_iter<I: IntoIterator<Item = Modifier>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Extend<Modifier> for Modifiers {
    fn extend<I: IntoIterator<Item = Modifier>>(&mut self, iter: I) {
        self.0.extend(iter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn empty_set_renders_nothing() {
        assert_eq!(Modifiers::new().render(), "");
        assert_eq!(Modifiers::new().render_padded(true, true), "");
    }

    #[test]
    fn insertion_order_does_not_affect_rendering() {
        let forwards = Modifiers::from([Modifier::Sealed, Modifier::Partial, Modifier::Async]);
        let backwards = Modifiers::from([Modifier::Async, Modifier::Partial, Modifier::Sealed]);

        assert_eq!(forwards.render(), "sealed partial async");
        assert_eq!(forwards, backwards);
    }

    #[test]
    fn layout_modifiers_are_not_rendered() {
        let modifiers = Modifiers::from([
            Modifier::SequentialLayout,
            Modifier::Pack8,
            Modifier::Unsafe,
            Modifier::Ansi,
        ]);
        assert_eq!(modifiers.render(), "unsafe");
        assert!(Modifier::SequentialLayout.is_layout());
        assert!(!Modifier::ReadOnly.is_layout());
    }

    #[test]
    fn duplicate_insertion_is_idempotent() {
        let mut modifiers = Modifiers::from(Modifier::Static);
        modifiers.insert(Modifier::Static);
        assert_eq!(modifiers.iter().count(), 1);
    }

    #[test]
    fn union_merges_both_sets() {
        let merged = Modifiers::from(Modifier::Async).union(&Modifiers::from(Modifier::Override));
        assert_eq!(merged.render(), "override async");
    }

    #[rstest]
    #[case(true, false, " static")]
    #[case(false, true, "static ")]
    #[case(true, true, " static ")]
    fn padded_rendering_adds_requested_spaces(
        #[case] prepend: bool,
        #[case] append: bool,
        #[case] expected: &str,
    ) {
        let modifiers = Modifiers::from(Modifier::Static);
        assert_eq!(modifiers.render_padded(prepend, append), expected);
    }

    #[rstest]
    #[case("sealed", Modifier::Sealed)]
    #[case("readonly", Modifier::ReadOnly)]
    #[case("Sequential_Layout", Modifier::SequentialLayout)]
    fn parses_modifier_names(#[case] input: &str, #[case] expected: Modifier) {
        assert_eq!(input.parse::<Modifier>(), Ok(expected));
    }
}
