//! Member declarations: methods, constructors, fields and properties.

use crate::constructs::head_line;
use crate::modifiers::{Modifier, Modifiers};
use crate::params::{Parameter, render_list};
use crate::scope::{PropertyScope, Scope, ScopeOptions};
use crate::visibility::Visibility;
use crate::writer::{CodeWriter, DEFAULT_INDENT};

/// Chained constructor call written under a constructor signature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConstructorInitializer {
    /// `: base()`
    Base,
    /// `: this()`
    This,
    /// `: base(...)` forwarding every parameter by name.
    ForwardToBase,
    /// `: ` followed by the given text, for example `this(0)`.
    Custom(String),
}

impl ConstructorInitializer {
    fn render(&self, parameters: &[Parameter]) -> String {
        match self {
            Self::Base => String::from(": base()"),
            Self::This => String::from(": this()"),
            Self::ForwardToBase => {
                let names = parameters
                    .iter()
                    .map(Parameter::name)
                    .collect::<Vec<_>>()
                    .join(", ");
                format!(": base({names})")
            }
            Self::Custom(text) => format!(": {text}"),
        }
    }
}

impl CodeWriter {
    /// Opens a method body.
    pub fn method(
        &mut self,
        name: &str,
        return_type: &str,
        visibility: Visibility,
        modifiers: &Modifiers,
        parameters: &[Parameter],
    ) -> Scope<'_> {
        self.method_head(name, return_type, visibility, modifiers, parameters);
        self.scope(true, ScopeOptions::new())
    }

    /// Opens an `async` method body returning `Task`, or `Task<T>` when a
    /// result type is given.
    pub fn async_method(
        &mut self,
        name: &str,
        result_type: Option<&str>,
        visibility: Visibility,
        modifiers: &Modifiers,
        parameters: &[Parameter],
    ) -> Scope<'_> {
        let return_type = result_type.map_or_else(|| String::from("Task"), |ty| format!("Task<{ty}>"));
        let with_async = modifiers.clone().with(Modifier::Async);
        self.method(name, &return_type, visibility, &with_async, parameters)
    }

    /// Writes a method with an empty body followed by a blank line.
    pub fn empty_method(
        &mut self,
        name: &str,
        return_type: &str,
        visibility: Visibility,
        modifiers: &Modifiers,
        parameters: &[Parameter],
    ) {
        self.method_head(name, return_type, visibility, modifiers, parameters);
        self.open_scope("{");
        self.close_scope("}", true);
    }

    fn method_head(
        &mut self,
        name: &str,
        return_type: &str,
        visibility: Visibility,
        modifiers: &Modifiers,
        parameters: &[Parameter],
    ) {
        let rendered = modifiers.render();
        let signature = format!("{name}({})", render_list(parameters));
        self.write_line(&head_line(&[
            visibility.keyword(),
            &rendered,
            return_type,
            &signature,
        ]));
    }

    /// Opens a constructor body.
    ///
    /// The initializer, when present, is written on its own line one indent
    /// unit below the signature.
    pub fn constructor(
        &mut self,
        name: &str,
        initializer: Option<&ConstructorInitializer>,
        visibility: Visibility,
        modifiers: &Modifiers,
        parameters: &[Parameter],
    ) -> Scope<'_> {
        let rendered = modifiers.render();
        let signature = format!("{name}({})", render_list(parameters));
        self.write_line(&head_line(&[visibility.keyword(), &rendered, &signature]));
        if let Some(chained) = initializer {
            self.push_indent(DEFAULT_INDENT);
            self.write_line(&chained.render(parameters));
            self.pop_indent();
        }
        self.scope(true, ScopeOptions::new())
    }

    /// Writes a field declaration with an optional initializer.
    pub fn field(
        &mut self,
        ty: &str,
        name: &str,
        initializer: Option<&str>,
        visibility: Visibility,
        modifiers: &Modifiers,
    ) {
        let rendered = modifiers.render();
        let head = head_line(&[visibility.keyword(), &rendered, ty, name]);
        match initializer.filter(|text| !text.is_empty()) {
            Some(text) => self.write_line(&format!("{head} = {text};")),
            None => self.write_line(&format!("{head};")),
        }
    }

    /// Writes a property with a single expression-bodied getter.
    pub fn readonly_property(
        &mut self,
        ty: &str,
        name: &str,
        value: &str,
        visibility: Visibility,
        modifiers: &Modifiers,
    ) {
        let rendered = modifiers.render();
        self.write_line(&head_line(&[visibility.keyword(), &rendered, ty, name]));
        let mut body = self.scope(true, ScopeOptions::new());
        body.write_line(&format!("get => {value};"));
    }

    /// Writes an expression-bodied property.
    pub fn property_expression(
        &mut self,
        ty: &str,
        name: &str,
        value: &str,
        visibility: Visibility,
        modifiers: &Modifiers,
    ) {
        let rendered = modifiers.render();
        let head = head_line(&[visibility.keyword(), &rendered, ty, name]);
        self.write_line(&format!("{head} => {value};"));
    }

    /// Writes an auto-implemented property. The setter carries its own
    /// visibility keyword only when it differs from the property's.
    pub fn auto_property(
        &mut self,
        ty: &str,
        name: &str,
        visibility: Visibility,
        setter_visibility: Visibility,
        modifiers: &Modifiers,
    ) {
        let rendered = modifiers.render();
        let head = head_line(&[visibility.keyword(), &rendered, ty, name]);
        let setter = if setter_visibility == visibility {
            String::from("set;")
        } else {
            head_line(&[setter_visibility.keyword(), "set;"])
        };
        self.write_line(&format!("{head} {{ get; {setter} }}"));
    }

    /// Opens a property body with accessor helpers.
    pub fn property(
        &mut self,
        ty: &str,
        name: &str,
        visibility: Visibility,
        modifiers: &Modifiers,
    ) -> PropertyScope<'_> {
        let rendered = modifiers.render();
        self.write_line(&head_line(&[visibility.keyword(), &rendered, ty, name]));
        PropertyScope::new(self.scope(true, ScopeOptions::new()), visibility)
    }
}
