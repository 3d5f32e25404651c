//! Error types for dispatcher generation.
//!
//! Analysis errors describe declaration sets the generator refuses to guess
//! about. Generator errors wrap them together with pass-level failures such
//! as cancellation.

use thiserror::Error;

use crate::model::SymbolId;

/// Declaration sets that cannot be turned into a dispatch table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum AnalysisError {
    /// A handler implements the handler marker for more than one payload.
    #[error("handler {handler} accepts more than one payload type: {first} and {second}")]
    AmbiguousHandler {
        /// The handler implementation type.
        handler: String,
        /// The first payload type found.
        first: String,
        /// The conflicting payload type.
        second: String,
    },

    /// More than one declaration implements the dispatcher marker.
    #[error("more than one dispatcher declared: {first} and {second}")]
    MultipleDispatchers {
        /// The first dispatcher found.
        first: String,
        /// The next dispatcher found.
        second: String,
    },

    /// A classified symbol no longer exposes the marker it was classified by.
    #[error("{symbol} no longer implements a usable {marker} marker")]
    MarkerVanished {
        /// The symbol that was classified.
        symbol: String,
        /// The expected marker capability.
        marker: String,
    },

    /// The host model does not know the name of a symbol.
    #[error("the host model has no name for {symbol}")]
    UnknownSymbol {
        /// The unnamed symbol.
        symbol: SymbolId,
    },
}

impl AnalysisError {
    /// Creates an ambiguous handler error.
    #[must_use]
    pub fn ambiguous_handler(
        handler: impl Into<String>,
        first: impl Into<String>,
        second: impl Into<String>,
    ) -> Self {
        Self::AmbiguousHandler {
            handler: handler.into(),
            first: first.into(),
            second: second.into(),
        }
    }

    /// Creates a multiple dispatchers error.
    #[must_use]
    pub fn multiple_dispatchers(first: impl Into<String>, second: impl Into<String>) -> Self {
        Self::MultipleDispatchers {
            first: first.into(),
            second: second.into(),
        }
    }

    /// Creates a vanished marker error.
    #[must_use]
    pub fn marker_vanished(symbol: impl Into<String>, marker: impl Into<String>) -> Self {
        Self::MarkerVanished {
            symbol: symbol.into(),
            marker: marker.into(),
        }
    }

    /// Creates an unknown symbol error.
    #[must_use]
    pub const fn unknown_symbol(symbol: SymbolId) -> Self {
        Self::UnknownSymbol { symbol }
    }
}

/// Errors that abandon a generation pass.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum GeneratorError {
    /// The declaration set could not be analysed.
    #[error(transparent)]
    Analysis(#[from] AnalysisError),

    /// The host cancelled the pass.
    #[error("generation was cancelled")]
    Cancelled,

    /// The banner timestamp could not be formatted.
    #[error("failed to format generation timestamp: {0}")]
    Timestamp(#[from] time::error::Format),
}

impl GeneratorError {
    /// Returns whether the pass ended through cancellation.
    #[must_use]
    pub const fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}
