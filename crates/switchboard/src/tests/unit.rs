//! Pass-level unit tests against a mocked host model.

use mockall::mock;
use mockall::predicate::eq;
use rstest::{fixture, rstest};
use time::macros::datetime;

use crate::{
    AnalysisError, CancellationToken, Classification, DeclarationId, DeclarationModel,
    DispatcherGenerator, FixedClock, GeneratorError, GeneratorOptions, ImplementedMarker,
    InMemoryModel, MarkerNames, NameMatch, SymbolId, classify,
};

mock! {
    Model {}
    impl DeclarationModel for Model {
        fn resolved_symbol(&self, declaration: DeclarationId) -> Option<SymbolId>;
        fn symbol_name(&self, symbol: SymbolId) -> Option<String>;
        fn implemented_markers(&self, symbol: SymbolId) -> Vec<ImplementedMarker>;
        fn containing_namespace_chain(&self, symbol: SymbolId) -> Vec<String>;
        fn declares_public(&self, declaration: DeclarationId) -> bool;
    }
}

const HANDLER: SymbolId = SymbolId::new(1);
const PAYLOAD: SymbolId = SymbolId::new(2);
const MARKER: SymbolId = SymbolId::new(10);
const DECLARATION: DeclarationId = DeclarationId::new(0);

fn fixed_generator() -> DispatcherGenerator<MarkerNames, FixedClock> {
    DispatcherGenerator::with_parts(
        MarkerNames::default(),
        FixedClock::new(datetime!(2026-10-19 12:00:00 UTC)),
    )
}

/// A model holding one public handler for `Ping`.
#[fixture]
fn handler_model() -> MockModel {
    let mut model = MockModel::new();
    model
        .expect_resolved_symbol()
        .with(eq(DECLARATION))
        .return_const(Some(HANDLER));
    model
        .expect_implemented_markers()
        .with(eq(HANDLER))
        .returning(|_| vec![ImplementedMarker::new(MARKER, "IMessageHandler", 1, vec![PAYLOAD])]);
    model.expect_symbol_name().returning(|symbol| {
        let name = match symbol.get() {
            1 => "PingHandler",
            2 => "Ping",
            10 => "IMessageHandler",
            _ => return None,
        };
        Some(String::from(name))
    });
    model
        .expect_containing_namespace_chain()
        .returning(|_| vec![String::from("App"), String::new()]);
    model
}

#[test]
fn unresolved_declaration_never_queries_markers() {
    let mut model = MockModel::new();
    model.expect_resolved_symbol().once().return_const(None::<SymbolId>);
    model.expect_implemented_markers().never();

    let result = classify(&model, &MarkerNames::default(), DECLARATION);
    assert_eq!(result, Classification::None);
}

#[rstest]
fn fallback_pass_never_asks_for_visibility(mut handler_model: MockModel) {
    handler_model.expect_declares_public().never();

    let source = fixed_generator()
        .generate(
            &handler_model,
            &[DECLARATION],
            &GeneratorOptions::default(),
            &CancellationToken::new(),
        )
        .unwrap_or_else(|err| panic!("generation failed: {err}"))
        .unwrap_or_else(|| panic!("expected a generated source"));

    assert_eq!(source.hint_name(), "WayCoolStuffThingWithBigSwitch.g.cs");
    assert!(source.text().contains("using App;\n"));
    assert!(source.text().contains("case Ping type0:"));
}

#[test]
fn cancelled_pass_never_touches_the_model() {
    let mut model = MockModel::new();
    model.expect_resolved_symbol().never();
    let token = CancellationToken::new();
    token.cancel();

    let result = fixed_generator().generate(
        &model,
        &[DECLARATION],
        &GeneratorOptions::default(),
        &token,
    );
    assert!(result.is_err_and(|err| err.is_cancelled()));
}

#[test]
fn nameless_payload_is_reported() {
    let mut model = MockModel::new();
    model.expect_resolved_symbol().return_const(Some(HANDLER));
    model
        .expect_implemented_markers()
        .returning(|_| vec![ImplementedMarker::new(MARKER, "IMessageHandler", 1, vec![PAYLOAD])]);
    model
        .expect_symbol_name()
        .returning(|symbol| (symbol == HANDLER).then(|| String::from("PingHandler")));
    model
        .expect_containing_namespace_chain()
        .returning(|_| Vec::new());

    let err = fixed_generator()
        .generate(
            &model,
            &[DECLARATION],
            &GeneratorOptions::default(),
            &CancellationToken::new(),
        )
        .err()
        .unwrap_or_else(|| panic!("expected an unknown symbol"));
    assert!(matches!(
        err,
        GeneratorError::Analysis(AnalysisError::UnknownSymbol { symbol }) if symbol == PAYLOAD
    ));
}

#[test]
fn custom_marker_names_drive_discovery() {
    let mut model = InMemoryModel::new();
    let consumer = model.add_type("Bus", "IConsumer");
    let router = model.add_type("Bus", "IRouter");
    let payload = model.add_type("Bus.Events", "OrderPlaced");
    let handler = model.add_type("Bus.Consumers", "OrderConsumer");
    let dispatcher = model.add_type("Bus", "OrderRouter");
    model.implement(handler, consumer, &[payload]);
    model.implement(dispatcher, router, &[]);
    model.declare(handler, true);
    model.declare(dispatcher, true);

    let generator = DispatcherGenerator::with_parts(
        MarkerNames::new("IRouter", "IConsumer", NameMatch::Exact),
        FixedClock::new(datetime!(2026-10-19 12:00:00 UTC)),
    );
    let source = generator
        .generate(
            &model,
            &model.declarations(),
            &GeneratorOptions::default(),
            &CancellationToken::new(),
        )
        .unwrap_or_else(|err| panic!("generation failed: {err}"))
        .unwrap_or_else(|| panic!("expected a generated source"));

    assert_eq!(source.hint_name(), "BusOrderRouter.g.cs");
    assert!(source.text().contains("public partial class OrderRouter\n"));
    assert!(
        source
            .text()
            .contains("GetRequiredService<IConsumer<OrderPlaced>>();")
    );
}

#[test]
fn default_markers_ignore_custom_interfaces() {
    let mut model = InMemoryModel::new();
    let consumer = model.add_type("Bus", "IConsumer");
    let payload = model.add_type("Bus.Events", "OrderPlaced");
    let handler = model.add_type("Bus.Consumers", "OrderConsumer");
    model.implement(handler, consumer, &[payload]);
    model.declare(handler, true);

    let generated = fixed_generator()
        .generate(
            &model,
            &model.declarations(),
            &GeneratorOptions::default(),
            &CancellationToken::new(),
        )
        .unwrap_or_else(|err| panic!("generation failed: {err}"));
    assert!(generated.is_none());
}
