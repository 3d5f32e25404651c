//! Records produced by table synthesis and consumed by emission.

use std::fmt;

use switchboard_emit::{Modifier, Modifiers, Visibility};

use crate::error::AnalysisError;
use crate::markers::{DISPATCHER_MARKER, HANDLER_MARKER};
use crate::model::{DeclarationId, DeclarationModel, SymbolId};

/// Namespace of the dispatcher emitted when none is declared.
pub const FALLBACK_NAMESPACE: &str = "WayCoolStuff";

/// Interface name of the dispatcher emitted when none is declared.
pub const FALLBACK_INTERFACE: &str = DISPATCHER_MARKER;

/// Implementation name of the dispatcher emitted when none is declared.
pub const FALLBACK_IMPLEMENTATION: &str = "ThingWithBigSwitch";

/// A type name paired with its dotted namespace.
///
/// The namespace is empty for types in the root namespace.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QualifiedType {
    namespace: String,
    name: String,
}

impl QualifiedType {
    /// Creates a qualified type from its parts.
    #[must_use]
    pub fn new(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            name: name.into(),
        }
    }

    /// Builds the dotted namespace from a leaf-to-root chain, skipping empty
    /// segments.
    #[must_use]
    pub fn from_chain(chain: &[String], name: impl Into<String>) -> Self {
        let namespace = chain
            .iter()
            .rev()
            .filter(|segment| !segment.is_empty())
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(".");
        Self::new(namespace, name)
    }

    /// Resolves `symbol` through the host model.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::UnknownSymbol`] when the model has no name
    /// for `symbol`.
    pub fn resolve<M>(model: &M, symbol: SymbolId) -> Result<Self, AnalysisError>
    where
        M: DeclarationModel + ?Sized,
    {
        let name = model
            .symbol_name(symbol)
            .filter(|text| !text.is_empty())
            .ok_or_else(|| AnalysisError::unknown_symbol(symbol))?;
        Ok(Self::from_chain(&model.containing_namespace_chain(symbol), name))
    }

    /// Returns the dotted namespace.
    #[must_use]
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Returns the simple name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for QualifiedType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.namespace.is_empty() {
            f.write_str(&self.name)
        } else {
            write!(f, "{}.{}", self.namespace, self.name)
        }
    }
}

/// A discovered handler and the payload it accepts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandlerRecord {
    declaration: DeclarationId,
    symbol: SymbolId,
    implementation: QualifiedType,
    interface: QualifiedType,
    payload: QualifiedType,
}

impl HandlerRecord {
    /// Creates a handler record.
    #[must_use]
    pub const fn new(
        declaration: DeclarationId,
        symbol: SymbolId,
        implementation: QualifiedType,
        interface: QualifiedType,
        payload: QualifiedType,
    ) -> Self {
        Self {
            declaration,
            symbol,
            implementation,
            interface,
            payload,
        }
    }

    /// Returns the originating declaration.
    #[must_use]
    pub const fn declaration(&self) -> DeclarationId {
        self.declaration
    }

    /// Returns the handler's symbol.
    #[must_use]
    pub const fn symbol(&self) -> SymbolId {
        self.symbol
    }

    /// Returns the handler implementation type.
    #[must_use]
    pub const fn implementation(&self) -> &QualifiedType {
        &self.implementation
    }

    /// Returns the handler marker interface type.
    #[must_use]
    pub const fn interface(&self) -> &QualifiedType {
        &self.interface
    }

    /// Returns the payload type the handler accepts.
    #[must_use]
    pub const fn payload(&self) -> &QualifiedType {
        &self.payload
    }

    /// Namespaces referenced by this handler: implementation, interface,
    /// payload.
    #[must_use]
    pub fn namespaces(&self) -> [&str; 3] {
        [
            self.implementation.namespace(),
            self.interface.namespace(),
            self.payload.namespace(),
        ]
    }
}

/// The dispatcher that receives the generated routing method.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatcherRecord {
    present: bool,
    interface: QualifiedType,
    implementation: QualifiedType,
    visibility: Visibility,
    modifiers: Modifiers,
}

impl DispatcherRecord {
    /// A dispatcher declared by the host. The generated code augments it,
    /// so it is always `partial`.
    #[must_use]
    pub fn discovered(interface: QualifiedType, implementation: QualifiedType, public: bool) -> Self {
        Self {
            present: true,
            interface,
            implementation,
            visibility: if public {
                Visibility::Public
            } else {
                Visibility::Internal
            },
            modifiers: Modifiers::from(Modifier::Partial),
        }
    }

    /// The public sealed dispatcher emitted when the host declares none.
    #[must_use]
    pub fn fallback() -> Self {
        Self {
            present: false,
            interface: QualifiedType::new(FALLBACK_NAMESPACE, FALLBACK_INTERFACE),
            implementation: QualifiedType::new(FALLBACK_NAMESPACE, FALLBACK_IMPLEMENTATION),
            visibility: Visibility::Public,
            modifiers: Modifiers::from(Modifier::Sealed),
        }
    }

    /// Returns whether the host declared this dispatcher.
    #[must_use]
    pub const fn is_present(&self) -> bool {
        self.present
    }

    /// Returns the dispatcher interface type.
    #[must_use]
    pub const fn interface(&self) -> &QualifiedType {
        &self.interface
    }

    /// Returns the dispatcher implementation type.
    #[must_use]
    pub const fn implementation(&self) -> &QualifiedType {
        &self.implementation
    }

    /// Returns the class visibility.
    #[must_use]
    pub const fn visibility(&self) -> Visibility {
        self.visibility
    }

    /// Returns the class modifiers.
    #[must_use]
    pub const fn modifiers(&self) -> &Modifiers {
        &self.modifiers
    }

    /// Namespaces referenced by the dispatcher: interface, implementation.
    #[must_use]
    pub fn namespaces(&self) -> [&str; 2] {
        [self.interface.namespace(), self.implementation.namespace()]
    }
}

/// The dispatcher and its handlers in branch order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchTable {
    dispatcher: DispatcherRecord,
    handlers: Vec<HandlerRecord>,
    handler_service: String,
}

impl DispatchTable {
    /// Creates a table. Handlers keep the given order and are looked up as
    /// [`HANDLER_MARKER`] services.
    #[must_use]
    pub fn new(dispatcher: DispatcherRecord, handlers: Vec<HandlerRecord>) -> Self {
        Self {
            dispatcher,
            handlers,
            handler_service: String::from(HANDLER_MARKER),
        }
    }

    /// Sets the generic interface name branches resolve handlers through.
    #[must_use]
    pub fn with_handler_service(mut self, name: impl Into<String>) -> Self {
        self.handler_service = name.into();
        self
    }

    /// Returns the generic interface name branches resolve handlers through.
    #[must_use]
    pub fn handler_service(&self) -> &str {
        &self.handler_service
    }

    /// Returns the dispatcher record.
    #[must_use]
    pub const fn dispatcher(&self) -> &DispatcherRecord {
        &self.dispatcher
    }

    /// Returns the handlers in branch order.
    #[must_use]
    pub fn handlers(&self) -> &[HandlerRecord] {
        &self.handlers
    }

    /// Returns every distinct non-empty namespace the table references, in
    /// first-seen order: handler namespaces, then the dispatcher's.
    #[must_use]
    pub fn namespaces(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        let referenced = self
            .handlers
            .iter()
            .flat_map(HandlerRecord::namespaces)
            .chain(self.dispatcher.namespaces());
        for namespace in referenced {
            if !namespace.is_empty() && !seen.contains(&namespace) {
                seen.push(namespace);
            }
        }
        seen
    }
}
