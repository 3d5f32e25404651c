//! Recognition of the dispatcher and handler marker interfaces.

use strum::{Display, EnumString};

use crate::model::ImplementedMarker;

/// Default simple name of the dispatcher marker interface.
pub const DISPATCHER_MARKER: &str = "IMessageDispatcher";

/// Default simple name of the handler marker interface.
pub const HANDLER_MARKER: &str = "IMessageHandler";

/// A role a declaration can announce through a marker interface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[strum(serialize_all = "lowercase")]
pub enum Capability {
    /// The single routing declaration.
    Dispatcher,
    /// A declaration handling exactly one payload type.
    Handler,
}

impl Capability {
    /// Number of type parameters the marker for this capability carries.
    #[must_use]
    pub const fn arity(self) -> usize {
        match self {
            Self::Dispatcher => 0,
            Self::Handler => 1,
        }
    }
}

/// How an implemented interface name is compared with a marker name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum NameMatch {
    /// The interface name starts with the marker name, so
    /// `IMessageHandlerBase<T>` also counts as a handler marker.
    #[default]
    Prefix,
    /// The interface name equals the marker name.
    Exact,
}

impl NameMatch {
    /// Compares an implemented interface name against a marker name.
    #[must_use]
    pub fn matches(self, candidate: &str, marker: &str) -> bool {
        match self {
            Self::Prefix => candidate.starts_with(marker),
            Self::Exact => candidate == marker,
        }
    }
}

/// Decides whether an implemented interface announces a capability.
pub trait MarkerResolver {
    /// Returns whether `marker` announces `capability`.
    fn matches(&self, capability: Capability, marker: &ImplementedMarker) -> bool;

    /// Returns the configured marker name for `capability`.
    ///
    /// Generated service lookups use this name, not the name of the
    /// interface that happened to match.
    fn marker_name(&self, capability: Capability) -> &str;
}

/// Name-based marker recognition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkerNames {
    dispatcher: String,
    handler: String,
    matching: NameMatch,
}

impl Default for MarkerNames {
    fn default() -> Self {
        Self::new(DISPATCHER_MARKER, HANDLER_MARKER, NameMatch::default())
    }
}

impl MarkerNames {
    /// Creates a resolver for the given marker names.
    #[must_use]
    pub fn new(dispatcher: impl Into<String>, handler: impl Into<String>, matching: NameMatch) -> Self {
        Self {
            dispatcher: dispatcher.into(),
            handler: handler.into(),
            matching,
        }
    }

    /// Returns the default names with a different matching mode.
    #[must_use]
    pub fn with_matching(mut self, matching: NameMatch) -> Self {
        self.matching = matching;
        self
    }

    /// Returns the marker name for `capability`.
    #[must_use]
    pub fn name(&self, capability: Capability) -> &str {
        match capability {
            Capability::Dispatcher => &self.dispatcher,
            Capability::Handler => &self.handler,
        }
    }

    /// Returns the matching mode.
    #[must_use]
    pub const fn matching(&self) -> NameMatch {
        self.matching
    }
}

impl MarkerResolver for MarkerNames {
    fn matches(&self, capability: Capability, marker: &ImplementedMarker) -> bool {
        marker.arity() == capability.arity()
            && self
                .matching
                .matches(marker.base_name(), self.name(capability))
    }

    fn marker_name(&self, capability: Capability) -> &str {
        self.name(capability)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::SymbolId;
    use rstest::rstest;

    fn marker(name: &str, arity: usize) -> ImplementedMarker {
        let arguments = (0..arity)
            .map(|index| SymbolId::new(u32::try_from(index).unwrap_or(u32::MAX)))
            .collect();
        ImplementedMarker::new(SymbolId::new(100), name, arity, arguments)
    }

    #[rstest]
    #[case(Capability::Handler, "IMessageHandler", 1, true)]
    #[case(Capability::Handler, "IMessageHandlerBase", 1, true)]
    #[case(Capability::Handler, "IMessageHandler", 0, false)]
    #[case(Capability::Handler, "IMessageHandler", 2, false)]
    #[case(Capability::Dispatcher, "IMessageDispatcher", 0, true)]
    #[case(Capability::Dispatcher, "IMessageDispatcher", 1, false)]
    #[case(Capability::Dispatcher, "IDispatcher", 0, false)]
    fn prefix_matching_checks_name_and_arity(
        #[case] capability: Capability,
        #[case] name: &str,
        #[case] arity: usize,
        #[case] expected: bool,
    ) {
        let names = MarkerNames::default();
        assert_eq!(names.matches(capability, &marker(name, arity)), expected);
    }

    #[test]
    fn exact_matching_rejects_longer_names() {
        let names = MarkerNames::default().with_matching(NameMatch::Exact);
        assert!(names.matches(Capability::Handler, &marker("IMessageHandler", 1)));
        assert!(!names.matches(Capability::Handler, &marker("IMessageHandlerBase", 1)));
    }

    #[test]
    fn custom_names_are_honoured() {
        let names = MarkerNames::new("IRouter", "IConsumer", NameMatch::Exact);
        assert!(names.matches(Capability::Dispatcher, &marker("IRouter", 0)));
        assert!(names.matches(Capability::Handler, &marker("IConsumer", 1)));
        assert!(!names.matches(Capability::Handler, &marker("IMessageHandler", 1)));
    }

    #[test]
    fn marker_name_reports_configured_names() {
        let names = MarkerNames::new("IRouter", "IConsumer", NameMatch::Prefix);
        assert_eq!(names.marker_name(Capability::Dispatcher), "IRouter");
        assert_eq!(names.marker_name(Capability::Handler), "IConsumer");
    }

    #[rstest]
    #[case("prefix", NameMatch::Prefix)]
    #[case("Exact", NameMatch::Exact)]
    fn name_match_parses_case_insensitively(#[case] input: &str, #[case] expected: NameMatch) {
        assert_eq!(input.parse::<NameMatch>(), Ok(expected));
    }
}
