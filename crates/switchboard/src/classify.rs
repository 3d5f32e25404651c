//! Per-declaration classification against the marker capabilities.

use crate::markers::{Capability, MarkerResolver};
use crate::model::{DeclarationId, DeclarationModel, SymbolId};

/// What one declaration announces about itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    /// The declaration is irrelevant to dispatch, or could not be resolved.
    None,
    /// The declaration implements the dispatcher marker.
    Dispatcher {
        /// The classified declaration.
        declaration: DeclarationId,
        /// Its resolved symbol.
        symbol: SymbolId,
    },
    /// The declaration implements the handler marker.
    Handler {
        /// The classified declaration.
        declaration: DeclarationId,
        /// Its resolved symbol.
        symbol: SymbolId,
    },
}

impl Classification {
    /// Returns the capability the declaration announced, if any.
    #[must_use]
    pub const fn capability(&self) -> Option<Capability> {
        match self {
            Self::None => None,
            Self::Dispatcher { .. } => Some(Capability::Dispatcher),
            Self::Handler { .. } => Some(Capability::Handler),
        }
    }

    /// Returns the classified declaration.
    #[must_use]
    pub const fn declaration(&self) -> Option<DeclarationId> {
        match self {
            Self::None => None,
            Self::Dispatcher { declaration, .. } | Self::Handler { declaration, .. } => {
                Some(*declaration)
            }
        }
    }

    /// Returns the resolved symbol.
    #[must_use]
    pub const fn symbol(&self) -> Option<SymbolId> {
        match self {
            Self::None => None,
            Self::Dispatcher { symbol, .. } | Self::Handler { symbol, .. } => Some(*symbol),
        }
    }

    /// Returns `true` for [`Classification::None`].
    #[must_use]
    pub const fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }
}

/// Classifies one declaration.
///
/// Unresolved declarations are [`Classification::None`]. A symbol that
/// implements both markers is a handler.
#[must_use]
pub fn classify<M, R>(model: &M, resolver: &R, declaration: DeclarationId) -> Classification
where
    M: DeclarationModel + ?Sized,
    R: MarkerResolver + ?Sized,
{
    let Some(symbol) = model.resolved_symbol(declaration) else {
        return Classification::None;
    };

    let markers = model.implemented_markers(symbol);
    if markers
        .iter()
        .any(|marker| resolver.matches(Capability::Handler, marker))
    {
        Classification::Handler {
            declaration,
            symbol,
        }
    } else if markers
        .iter()
        .any(|marker| resolver.matches(Capability::Dispatcher, marker))
    {
        Classification::Dispatcher {
            declaration,
            symbol,
        }
    } else {
        Classification::None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markers::MarkerNames;
    use crate::model::InMemoryModel;
    use rstest::{fixture, rstest};

    struct Fixture {
        model: InMemoryModel,
        handler_marker: SymbolId,
        dispatcher_marker: SymbolId,
        payload: SymbolId,
    }

    #[fixture]
    fn fixture() -> Fixture {
        let mut model = InMemoryModel::new();
        let handler_marker = model.add_type("Messaging", "IMessageHandler");
        let dispatcher_marker = model.add_type("Messaging", "IMessageDispatcher");
        let payload = model.add_type("Messaging.Data", "Ping");
        Fixture {
            model,
            handler_marker,
            dispatcher_marker,
            payload,
        }
    }

    #[rstest]
    fn handler_marker_classifies_as_handler(mut fixture: Fixture) {
        let handler = fixture.model.add_type("App", "PingHandler");
        fixture
            .model
            .implement(handler, fixture.handler_marker, &[fixture.payload]);
        let declaration = fixture.model.declare(handler, true);

        let result = classify(&fixture.model, &MarkerNames::default(), declaration);
        assert_eq!(
            result,
            Classification::Handler {
                declaration,
                symbol: handler
            }
        );
        assert_eq!(result.capability(), Some(Capability::Handler));
    }

    #[rstest]
    fn dispatcher_marker_classifies_as_dispatcher(mut fixture: Fixture) {
        let router = fixture.model.add_type("App", "Router");
        fixture.model.implement(router, fixture.dispatcher_marker, &[]);
        let declaration = fixture.model.declare(router, false);

        let result = classify(&fixture.model, &MarkerNames::default(), declaration);
        assert_eq!(result.capability(), Some(Capability::Dispatcher));
        assert_eq!(result.symbol(), Some(router));
        assert_eq!(result.declaration(), Some(declaration));
    }

    #[rstest]
    fn both_markers_classify_as_handler(mut fixture: Fixture) {
        let hybrid = fixture.model.add_type("App", "Hybrid");
        fixture.model.implement(hybrid, fixture.dispatcher_marker, &[]);
        fixture
            .model
            .implement(hybrid, fixture.handler_marker, &[fixture.payload]);
        let declaration = fixture.model.declare(hybrid, true);

        let result = classify(&fixture.model, &MarkerNames::default(), declaration);
        assert_eq!(result.capability(), Some(Capability::Handler));
    }

    #[rstest]
    fn handler_marker_without_type_argument_is_ignored(mut fixture: Fixture) {
        let odd = fixture.model.add_type("App", "Odd");
        fixture.model.implement(odd, fixture.handler_marker, &[]);
        let declaration = fixture.model.declare(odd, true);

        assert!(classify(&fixture.model, &MarkerNames::default(), declaration).is_none());
    }

    #[rstest]
    fn unrelated_and_unresolved_declarations_are_none(mut fixture: Fixture) {
        let plain = fixture.model.add_type("App", "Plain");
        let plain_declaration = fixture.model.declare(plain, true);
        let unresolved = fixture.model.declare_unresolved();

        for declaration in [plain_declaration, unresolved] {
            let result = classify(&fixture.model, &MarkerNames::default(), declaration);
            assert!(result.is_none());
            assert_eq!(result.symbol(), None);
            assert_eq!(result.declaration(), None);
        }
    }
}
