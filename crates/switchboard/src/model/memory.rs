//! In-memory declaration model.

use std::iter;

use super::{DeclarationId, DeclarationModel, ImplementedMarker, SymbolId};

#[derive(Debug, Clone)]
struct SymbolEntry {
    name: String,
    namespace_chain: Vec<String>,
    markers: Vec<ImplementedMarker>,
}

#[derive(Debug, Clone, Copy)]
struct DeclarationEntry {
    symbol: Option<SymbolId>,
    public: bool,
}

/// A [`DeclarationModel`] built up front, for hosts that extract their
/// declarations ahead of generation and for tests.
///
/// # Examples
///
/// ```
/// use switchboard::{DeclarationModel, InMemoryModel};
///
/// let mut model = InMemoryModel::new();
/// let marker = model.add_type("Messaging", "IMessageHandler");
/// let payload = model.add_type("Messaging.Data", "Ping");
/// let handler = model.add_type("Messaging.Handlers", "PingHandler");
/// model.implement(handler, marker, &[payload]);
/// let declaration = model.declare(handler, true);
///
/// assert_eq!(model.resolved_symbol(declaration), Some(handler));
/// assert_eq!(model.implemented_markers(handler).len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemoryModel {
    symbols: Vec<SymbolEntry>,
    declarations: Vec<DeclarationEntry>,
}

fn next_index(len: usize) -> u32 {
    u32::try_from(len).unwrap_or(u32::MAX)
}

impl InMemoryModel {
    /// Creates an empty model.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            symbols: Vec::new(),
            declarations: Vec::new(),
        }
    }

    /// Registers a type symbol. `namespace` is dotted, outermost first, and
    /// may be empty for the root namespace.
    pub fn add_type(&mut self, namespace: &str, name: &str) -> SymbolId {
        let namespace_chain = namespace
            .split('.')
            .filter(|segment| !segment.is_empty())
            .rev()
            .map(String::from)
            .chain(iter::once(String::new()))
            .collect();
        let id = SymbolId::new(next_index(self.symbols.len()));
        self.symbols.push(SymbolEntry {
            name: String::from(name),
            namespace_chain,
            markers: Vec::new(),
        });
        id
    }

    /// Records that `implementor` implements the interface `marker`,
    /// instantiated with `type_arguments`.
    ///
    /// Unknown symbols are ignored.
    pub fn implement(&mut self, implementor: SymbolId, marker: SymbolId, type_arguments: &[SymbolId]) {
        let Some(base_name) = self.symbol(marker).map(|entry| entry.name.clone()) else {
            return;
        };
        if let Some(entry) = self.symbol_mut(implementor) {
            entry.markers.push(ImplementedMarker::new(
                marker,
                base_name,
                type_arguments.len(),
                type_arguments.to_vec(),
            ));
        }
    }

    /// Adds a declaration bound to `symbol`.
    pub fn declare(&mut self, symbol: SymbolId, public: bool) -> DeclarationId {
        self.push_declaration(DeclarationEntry {
            symbol: Some(symbol),
            public,
        })
    }

    /// Adds a declaration the host could not bind to a symbol.
    pub fn declare_unresolved(&mut self) -> DeclarationId {
        self.push_declaration(DeclarationEntry {
            symbol: None,
            public: false,
        })
    }

    /// Returns every declaration in the order it was added.
    #[must_use]
    pub fn declarations(&self) -> Vec<DeclarationId> {
        (0..self.declarations.len())
            .map(|index| DeclarationId::new(next_index(index)))
            .collect()
    }

    fn push_declaration(&mut self, entry: DeclarationEntry) -> DeclarationId {
        let id = DeclarationId::new(next_index(self.declarations.len()));
        self.declarations.push(entry);
        id
    }

    fn symbol(&self, id: SymbolId) -> Option<&SymbolEntry> {
        usize::try_from(id.get())
            .ok()
            .and_then(|index| self.symbols.get(index))
    }

    fn symbol_mut(&mut self, id: SymbolId) -> Option<&mut SymbolEntry> {
        usize::try_from(id.get())
            .ok()
            .and_then(|index| self.symbols.get_mut(index))
    }

    fn declaration(&self, id: DeclarationId) -> Option<&DeclarationEntry> {
        usize::try_from(id.get())
            .ok()
            .and_then(|index| self.declarations.get(index))
    }
}

impl DeclarationModel for InMemoryModel {
    fn resolved_symbol(&self, declaration: DeclarationId) -> Option<SymbolId> {
        self.declaration(declaration).and_then(|entry| entry.symbol)
    }

    fn symbol_name(&self, symbol: SymbolId) -> Option<String> {
        self.symbol(symbol).map(|entry| entry.name.clone())
    }

    fn implemented_markers(&self, symbol: SymbolId) -> Vec<ImplementedMarker> {
        self.symbol(symbol)
            .map(|entry| entry.markers.clone())
            .unwrap_or_default()
    }

    fn containing_namespace_chain(&self, symbol: SymbolId) -> Vec<String> {
        self.symbol(symbol)
            .map(|entry| entry.namespace_chain.clone())
            .unwrap_or_default()
    }

    fn declares_public(&self, declaration: DeclarationId) -> bool {
        self.declaration(declaration).is_some_and(|entry| entry.public)
    }
}
