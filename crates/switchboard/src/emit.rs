//! Renders a [`DispatchTable`] as C# source.

use switchboard_emit::{CaseExit, CodeWriter, Modifier, Modifiers, Parameter, Visibility};

use crate::cancel::CancellationToken;
use crate::error::GeneratorError;
use crate::options::GeneratorOptions;
use crate::types::{DispatchTable, DispatcherRecord, HandlerRecord};

/// Namespaces every generated file imports before the table's own.
pub const INFRASTRUCTURE_USINGS: [&str; 3] = [
    "System",
    "System.Threading.Tasks",
    "Microsoft.Extensions.DependencyInjection",
];

/// Name of the generated routing method.
pub const DISPATCH_METHOD: &str = "DispatchAsync";

const SERVICES_FIELD: &str = "_services";
const SERVICE_PROVIDER: &str = "IServiceProvider";
const FALLBACK_MESSAGE: &str =
    "($\"Cannot handle messages of type '{{data.GetType().FullName}}'\");\u{8}\n";

/// Returns the artifact name for `dispatcher`: namespace and name joined
/// without a separator, suffixed with `.g.cs`.
#[must_use]
pub fn hint_name(dispatcher: &DispatcherRecord) -> String {
    let implementation = dispatcher.implementation();
    format!(
        "{}{}.g.cs",
        implementation.namespace(),
        implementation.name()
    )
}

/// Renders the dispatcher class for `table`.
///
/// `timestamp` is written into the banner comment verbatim.
///
/// # Errors
///
/// Returns [`GeneratorError::Cancelled`] when `cancellation` fires before
/// the class or between two branches. Nothing is returned in that case.
pub fn emit(
    table: &DispatchTable,
    options: &GeneratorOptions,
    timestamp: &str,
    cancellation: &CancellationToken,
) -> Result<String, GeneratorError> {
    let dispatcher = table.dispatcher();
    let mut writer = CodeWriter::new();

    writer.comment(&format!(" <auto-generated when=\"{timestamp}\"/>"));
    writer.blank_line(1);

    for namespace in INFRASTRUCTURE_USINGS {
        writer.using(namespace);
    }
    writer.block(&["\n#nullable enable\n\n"]);
    for namespace in table.namespaces() {
        writer.using(namespace);
    }
    writer.blank_line(1);

    let namespace = dispatcher.implementation().namespace();
    if !namespace.is_empty() {
        writer.file_scoped_namespace(namespace);
        writer.blank_line(1);
    }

    cancellation.check()?;

    {
        let mut class = writer.class(
            dispatcher.implementation().name(),
            None,
            dispatcher.visibility(),
            dispatcher.modifiers(),
        );
        if !dispatcher.is_present() {
            write_service_plumbing(&mut class, dispatcher);
        }

        let mut method = class.async_method(
            DISPATCH_METHOD,
            None,
            Visibility::Public,
            &Modifiers::new(),
            &[Parameter::new("data", "object")],
        );
        method.statement("ArgumentNullException.ThrowIfNull(data)");
        method.blank_line(1);

        let mut switch = method.switch("data");
        for (index, handler) in table.handlers().iter().enumerate() {
            cancellation.check()?;
            write_branch(&mut switch, table.handler_service(), index, handler);
        }
        let default_branch = format!(
            "default:\u{7}\nthrow new {}",
            options.error_class_name()
        );
        switch.block(&[default_branch.as_str(), FALLBACK_MESSAGE]);
    }

    Ok(writer.into_output())
}

fn write_service_plumbing(writer: &mut CodeWriter, dispatcher: &DispatcherRecord) {
    writer.field(
        SERVICE_PROVIDER,
        SERVICES_FIELD,
        None,
        Visibility::Private,
        &Modifiers::from(Modifier::ReadOnly),
    );
    writer.blank_line(1);
    {
        let mut constructor = writer.constructor(
            dispatcher.implementation().name(),
            None,
            Visibility::Public,
            &Modifiers::new(),
            &[Parameter::new("services", SERVICE_PROVIDER)],
        );
        constructor.statement(&format!("{SERVICES_FIELD} = services"));
    }
    writer.blank_line(1);
}

fn write_branch(
    writer: &mut CodeWriter,
    service: &str,
    index: usize,
    handler: &HandlerRecord,
) {
    let binding = format!("type{index}");
    let payload = handler.payload().name();
    let mut case = writer.case(&format!("{payload} {binding}"), CaseExit::Break);
    case.statement(&format!(
        "var handler = {SERVICES_FIELD}.GetRequiredService<{service}<{payload}>>()"
    ));
    case.statement(&format!("await handler.HandleMessage({binding})"));
}
