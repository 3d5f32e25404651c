//! Accessibility levels for emitted declarations.
//!
//! [`Visibility`] is a closed, totally ordered set: variants are declared from
//! least to most visible so that [`most_visible`] and [`least_visible`] reduce
//! to `max` and `min`.

use std::fmt;

use strum::EnumString;

/// Accessibility level of a declaration, ordered from least to most visible.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum Visibility {
    /// No accessibility keyword is rendered.
    #[strum(serialize = "none", serialize = "")]
    None,
    /// `private`
    #[strum(serialize = "private")]
    Private,
    /// `protected`
    #[strum(serialize = "protected")]
    Protected,
    /// `protected internal`
    #[strum(serialize = "protected internal", serialize = "protected_internal")]
    ProtectedInternal,
    /// `internal`
    #[strum(serialize = "internal")]
    Internal,
    /// `public`
    #[default]
    #[strum(serialize = "public")]
    Public,
}

impl Visibility {
    /// Returns the canonical keyword for this level.
    ///
    /// [`Visibility::None`] renders as the empty string.
    #[must_use]
    pub const fn keyword(self) -> &'static str {
        match self {
            Self::None => "",
            Self::Private => "private",
            Self::Protected => "protected",
            Self::ProtectedInternal => "protected internal",
            Self::Internal => "internal",
            Self::Public => "public",
        }
    }
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// Returns whichever of the two levels exposes the declaration more widely.
#[must_use]
pub fn most_visible(lhs: Visibility, rhs: Visibility) -> Visibility {
    lhs.max(rhs)
}

/// Returns whichever of the two levels exposes the declaration more narrowly.
#[must_use]
pub fn least_visible(lhs: Visibility, rhs: Visibility) -> Visibility {
    lhs.min(rhs)
}
