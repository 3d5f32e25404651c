//! Dispatcher source generation from marker-interface declarations.
//!
//! A host hands the generator a set of type declarations and a read-only view
//! of its type model. Declarations implementing the handler marker
//! (`IMessageHandler<T>`) become branches of a generated `DispatchAsync`
//! method; a declaration implementing the dispatcher marker
//! (`IMessageDispatcher`) receives that method, and when none exists a
//! standalone dispatcher class is emitted instead.
//!
//! The pass runs in three stages:
//!
//! - **Classification** via [`classify`]: one [`Classification`] per
//!   declaration, decided by a [`MarkerResolver`]
//! - **Synthesis** via [`synthesize`]: an ordered [`DispatchTable`], or
//!   nothing when no handler exists
//! - **Emission** via [`emit`]: C# text written through
//!   [`switchboard_emit::CodeWriter`]
//!
//! [`DispatcherGenerator`] runs all three and names the artifact.
//!
//! # Example
//!
//! ```
//! use std::collections::HashMap;
//! use switchboard::{CancellationToken, DispatcherGenerator, GeneratorOptions, InMemoryModel};
//!
//! let mut model = InMemoryModel::new();
//! let marker = model.add_type("Messaging", "IMessageHandler");
//! let payload = model.add_type("Messaging.Data", "Ping");
//! let handler = model.add_type("Messaging.Handlers", "PingHandler");
//! model.implement(handler, marker, &[payload]);
//! model.declare(handler, true);
//!
//! let mut build_options = HashMap::new();
//! build_options.insert("DispatcherErrorClassName".to_owned(), "RoutingError".to_owned());
//!
//! let generated = DispatcherGenerator::new().generate(
//!     &model,
//!     &model.declarations(),
//!     &GeneratorOptions::from_provider(&build_options),
//!     &CancellationToken::new(),
//! )?;
//! assert!(generated.is_some_and(|source| source.text().contains("throw new RoutingError")));
//! # Ok::<(), switchboard::GeneratorError>(())
//! ```

mod cancel;
mod classify;
mod clock;
mod emit;
mod error;
mod generator;
mod markers;
mod model;
mod options;
mod synthesize;
mod types;

pub use cancel::CancellationToken;
pub use classify::{Classification, classify};
pub use clock::{Clock, FixedClock, SystemClock, rfc1123};
pub use emit::{DISPATCH_METHOD, INFRASTRUCTURE_USINGS, emit, hint_name};
pub use error::{AnalysisError, GeneratorError};
pub use generator::{DispatcherGenerator, GeneratedSource};
pub use markers::{
    Capability, DISPATCHER_MARKER, HANDLER_MARKER, MarkerNames, MarkerResolver, NameMatch,
};
pub use model::{DeclarationId, DeclarationModel, ImplementedMarker, InMemoryModel, SymbolId};
pub use options::{DEFAULT_ERROR_CLASS_NAME, ERROR_CLASS_NAME_KEY, GeneratorOptions, OptionsProvider};
pub use synthesize::synthesize;
pub use types::{
    DispatchTable, DispatcherRecord, FALLBACK_IMPLEMENTATION, FALLBACK_INTERFACE,
    FALLBACK_NAMESPACE, HandlerRecord, QualifiedType,
};

#[cfg(test)]
mod tests;
