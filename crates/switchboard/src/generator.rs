//! One generation pass: classify, synthesize, emit.

use tracing::debug;

use crate::cancel::CancellationToken;
use crate::classify::classify;
use crate::clock::{Clock, SystemClock, rfc1123};
use crate::emit::{emit, hint_name};
use crate::error::GeneratorError;
use crate::markers::{MarkerNames, MarkerResolver};
use crate::model::{DeclarationId, DeclarationModel};
use crate::options::GeneratorOptions;
use crate::synthesize::synthesize;

const GENERATOR_TARGET: &str = concat!(env!("CARGO_PKG_NAME"), "::generator");

/// A generated source file handed back to the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedSource {
    hint_name: String,
    text: String,
}

impl GeneratedSource {
    /// Returns the artifact name, for example
    /// `WayCoolStuffThingWithBigSwitch.g.cs`.
    #[must_use]
    pub fn hint_name(&self) -> &str {
        &self.hint_name
    }

    /// Returns the generated text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Splits the artifact into its name and text.
    #[must_use]
    pub fn into_parts(self) -> (String, String) {
        (self.hint_name, self.text)
    }
}

/// Generates dispatcher source from a declaration set.
///
/// The generator holds no per-pass state, so one instance can serve any
/// number of passes, including concurrent ones.
///
/// # Examples
///
/// ```
/// use switchboard::{CancellationToken, DispatcherGenerator, GeneratorOptions, InMemoryModel};
///
/// let mut model = InMemoryModel::new();
/// let marker = model.add_type("Messaging", "IMessageHandler");
/// let payload = model.add_type("Messaging", "Ping");
/// let handler = model.add_type("Messaging", "PingHandler");
/// model.implement(handler, marker, &[payload]);
/// model.declare(handler, true);
///
/// let source = DispatcherGenerator::default()
///     .generate(&model, &model.declarations(), &GeneratorOptions::default(), &CancellationToken::new())?
///     .expect("a handler is declared");
/// assert_eq!(source.hint_name(), "WayCoolStuffThingWithBigSwitch.g.cs");
/// # Ok::<(), switchboard::GeneratorError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct DispatcherGenerator<R = MarkerNames, C = SystemClock> {
    resolver: R,
    clock: C,
}

impl DispatcherGenerator {
    /// Creates a generator with the default markers and the system clock.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl<R, C> DispatcherGenerator<R, C>
where
    R: MarkerResolver,
    C: Clock,
{
    /// Creates a generator from a marker resolver and a clock.
    #[must_use]
    pub const fn with_parts(resolver: R, clock: C) -> Self {
        Self { resolver, clock }
    }

    /// Returns the marker resolver.
    #[must_use]
    pub const fn resolver(&self) -> &R {
        &self.resolver
    }

    /// Runs one pass over `declarations`.
    ///
    /// Returns `Ok(None)` when no handler is declared.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::Analysis`] when the declarations cannot be
    /// turned into a dispatch table, [`GeneratorError::Cancelled`] when the
    /// host cancels, and [`GeneratorError::Timestamp`] when the banner
    /// timestamp cannot be formatted.
    pub fn generate<M>(
        &self,
        model: &M,
        declarations: &[DeclarationId],
        options: &GeneratorOptions,
        cancellation: &CancellationToken,
    ) -> Result<Option<GeneratedSource>, GeneratorError>
    where
        M: DeclarationModel + ?Sized,
    {
        debug!(
            target: GENERATOR_TARGET,
            declarations = declarations.len(),
            "generation pass started"
        );

        let mut classifications = Vec::with_capacity(declarations.len());
        for declaration in declarations {
            cancellation.check()?;
            classifications.push(classify(model, &self.resolver, *declaration));
        }

        let Some(table) = synthesize(model, &self.resolver, &classifications, cancellation)?
        else {
            debug!(target: GENERATOR_TARGET, "no handlers declared; nothing emitted");
            return Ok(None);
        };

        cancellation.check()?;
        let timestamp = rfc1123(self.clock.now())?;
        let text = emit(&table, options, &timestamp, cancellation)?;
        let source = GeneratedSource {
            hint_name: hint_name(table.dispatcher()),
            text,
        };
        debug!(
            target: GENERATOR_TARGET,
            artifact = source.hint_name(),
            branches = table.handlers().len(),
            "generation pass finished"
        );
        Ok(Some(source))
    }
}
