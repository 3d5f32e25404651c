//! Read-only view of the host's declaration and type model.
//!
//! The generator never inspects syntax itself. Declarations and symbols are
//! opaque handles issued by the host, and every question the classifier or
//! synthesizer asks goes through [`DeclarationModel`].

mod memory;

use std::fmt;

pub use memory::InMemoryModel;

/// Handle to one type declaration in the host codebase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DeclarationId(u32);

impl DeclarationId {
    /// Wraps a host-issued declaration index.
    #[must_use]
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// Returns the host-issued index.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for DeclarationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "declaration#{}", self.0)
    }
}

/// Handle to one resolved type symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SymbolId(u32);

impl SymbolId {
    /// Wraps a host-issued symbol index.
    #[must_use]
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// Returns the host-issued index.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for SymbolId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "symbol#{}", self.0)
    }
}

/// An interface directly implemented by a symbol.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImplementedMarker {
    symbol: SymbolId,
    base_name: String,
    arity: usize,
    type_arguments: Vec<SymbolId>,
}

impl ImplementedMarker {
    /// Describes an implemented interface.
    ///
    /// `arity` is the number of type parameters the interface declares;
    /// `type_arguments` are the symbols it is instantiated with.
    #[must_use]
    pub fn new(
        symbol: SymbolId,
        base_name: impl Into<String>,
        arity: usize,
        type_arguments: Vec<SymbolId>,
    ) -> Self {
        Self {
            symbol,
            base_name: base_name.into(),
            arity,
            type_arguments,
        }
    }

    /// Returns the interface symbol.
    #[must_use]
    pub const fn symbol(&self) -> SymbolId {
        self.symbol
    }

    /// Returns the simple interface name without type arguments.
    #[must_use]
    pub fn base_name(&self) -> &str {
        &self.base_name
    }

    /// Returns the number of type parameters.
    #[must_use]
    pub const fn arity(&self) -> usize {
        self.arity
    }

    /// Returns the type arguments in declaration order.
    #[must_use]
    pub fn type_arguments(&self) -> &[SymbolId] {
        &self.type_arguments
    }
}

/// Queries the generator issues against the host model.
pub trait DeclarationModel {
    /// Resolves a declaration to its type symbol, or `None` when the host
    /// could not bind it.
    fn resolved_symbol(&self, declaration: DeclarationId) -> Option<SymbolId>;

    /// Returns the simple name of a symbol.
    fn symbol_name(&self, symbol: SymbolId) -> Option<String>;

    /// Returns the interfaces `symbol` implements directly, in declaration
    /// order.
    fn implemented_markers(&self, symbol: SymbolId) -> Vec<ImplementedMarker>;

    /// Returns the namespaces containing `symbol`, innermost first. Empty
    /// segments stand for the root namespace.
    fn containing_namespace_chain(&self, symbol: SymbolId) -> Vec<String>;

    /// Returns whether the declaration carries a `public` keyword.
    fn declares_public(&self, declaration: DeclarationId) -> bool;
}
