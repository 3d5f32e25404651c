//! Builds the dispatch table from classified declarations.

use tracing::{debug, warn};

use crate::cancel::CancellationToken;
use crate::classify::Classification;
use crate::error::{AnalysisError, GeneratorError};
use crate::markers::{Capability, MarkerResolver};
use crate::model::{DeclarationId, DeclarationModel, SymbolId};
use crate::types::{DispatchTable, DispatcherRecord, HandlerRecord, QualifiedType};

const SYNTHESIS_TARGET: &str = concat!(env!("CARGO_PKG_NAME"), "::synthesize");

/// Resolves every handler and the dispatcher into a [`DispatchTable`].
///
/// Handlers keep the order of `classifications`. Returns `Ok(None)` when no
/// handler was classified, even if a dispatcher was.
///
/// # Errors
///
/// - [`AnalysisError::AmbiguousHandler`] when a handler accepts two payload
///   types.
/// - [`AnalysisError::MultipleDispatchers`] when more than one declaration
///   was classified as a dispatcher.
/// - [`AnalysisError::MarkerVanished`] when a classified symbol no longer
///   exposes a usable marker.
/// - [`GeneratorError::Cancelled`] when `cancellation` fires between
///   handlers.
pub fn synthesize<M, R>(
    model: &M,
    resolver: &R,
    classifications: &[Classification],
    cancellation: &CancellationToken,
) -> Result<Option<DispatchTable>, GeneratorError>
where
    M: DeclarationModel + ?Sized,
    R: MarkerResolver + ?Sized,
{
    let mut handlers = Vec::new();
    let mut dispatchers = Vec::new();
    for classification in classifications {
        match *classification {
            Classification::Handler {
                declaration,
                symbol,
            } => {
                cancellation.check()?;
                handlers.push(handler_record(model, resolver, declaration, symbol)?);
            }
            Classification::Dispatcher {
                declaration,
                symbol,
            } => dispatchers.push((declaration, symbol)),
            Classification::None => {}
        }
    }

    if handlers.is_empty() {
        debug!(
            target: SYNTHESIS_TARGET,
            dispatchers = dispatchers.len(),
            "no handlers classified; nothing to generate"
        );
        return Ok(None);
    }

    warn_unreachable_handlers(&handlers);
    let dispatcher = dispatcher_record(model, resolver, &dispatchers)?;
    debug!(
        target: SYNTHESIS_TARGET,
        handlers = handlers.len(),
        dispatcher = %dispatcher.implementation(),
        present = dispatcher.is_present(),
        "dispatch table synthesized"
    );
    Ok(Some(
        DispatchTable::new(dispatcher, handlers)
            .with_handler_service(resolver.marker_name(Capability::Handler)),
    ))
}

fn handler_record<M, R>(
    model: &M,
    resolver: &R,
    declaration: DeclarationId,
    symbol: SymbolId,
) -> Result<HandlerRecord, AnalysisError>
where
    M: DeclarationModel + ?Sized,
    R: MarkerResolver + ?Sized,
{
    let implementation = QualifiedType::resolve(model, symbol)?;

    let mut accepted: Option<(QualifiedType, QualifiedType)> = None;
    for marker in model
        .implemented_markers(symbol)
        .iter()
        .filter(|marker| resolver.matches(Capability::Handler, marker))
    {
        let Some(&argument) = marker.type_arguments().first() else {
            continue;
        };
        let payload = QualifiedType::resolve(model, argument)?;
        if let Some((_, first)) = &accepted {
            if *first != payload {
                return Err(AnalysisError::ambiguous_handler(
                    implementation.to_string(),
                    first.to_string(),
                    payload.to_string(),
                ));
            }
            continue;
        }
        let interface = QualifiedType::resolve(model, marker.symbol())?;
        accepted = Some((interface, payload));
    }

    let (interface, payload) = accepted.ok_or_else(|| {
        AnalysisError::marker_vanished(implementation.to_string(), Capability::Handler.to_string())
    })?;
    Ok(HandlerRecord::new(
        declaration,
        symbol,
        implementation,
        interface,
        payload,
    ))
}

fn dispatcher_record<M, R>(
    model: &M,
    resolver: &R,
    dispatchers: &[(DeclarationId, SymbolId)],
) -> Result<DispatcherRecord, AnalysisError>
where
    M: DeclarationModel + ?Sized,
    R: MarkerResolver + ?Sized,
{
    let mut found = dispatchers.iter();
    let Some(&(declaration, symbol)) = found.next() else {
        return Ok(DispatcherRecord::fallback());
    };
    let implementation = QualifiedType::resolve(model, symbol)?;
    if let Some(&(_, other)) = found.next() {
        let second = QualifiedType::resolve(model, other)?;
        return Err(AnalysisError::multiple_dispatchers(
            implementation.to_string(),
            second.to_string(),
        ));
    }

    let marker = model
        .implemented_markers(symbol)
        .into_iter()
        .find(|marker| resolver.matches(Capability::Dispatcher, marker))
        .ok_or_else(|| {
            AnalysisError::marker_vanished(
                implementation.to_string(),
                Capability::Dispatcher.to_string(),
            )
        })?;
    let interface = QualifiedType::resolve(model, marker.symbol())?;
    Ok(DispatcherRecord::discovered(
        interface,
        implementation,
        model.declares_public(declaration),
    ))
}

fn warn_unreachable_handlers(handlers: &[HandlerRecord]) {
    for (index, handler) in handlers.iter().enumerate() {
        let earlier = handlers
            .iter()
            .take(index)
            .find(|candidate| candidate.payload() == handler.payload());
        if let Some(first) = earlier {
            warn!(
                target: SYNTHESIS_TARGET,
                payload = %handler.payload(),
                handler = %handler.implementation(),
                shadowed_by = %first.implementation(),
                "handler is unreachable; an earlier branch accepts the same payload"
            );
        }
    }
}
