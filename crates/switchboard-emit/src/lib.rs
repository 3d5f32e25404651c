//! Indentation-aware source text emission for generated C# code.
//!
//! This crate provides the text layer used by the dispatcher generator:
//!
//! - **Core writer** via [`CodeWriter`]: an append-only buffer with an indent
//!   stack that applies the current indent exactly once per physical line
//! - **Scope guards** via [`Scope`] and [`PropertyScope`]: every construct
//!   that opens a brace returns a guard that closes it when dropped
//! - **Template blocks** via [`CodeWriter::block`]: literal skeletons with
//!   control characters for indentation and single braces for scopes
//! - **Lexical helpers** via [`Visibility`], [`Modifiers`] and
//!   [`Parameter`]: canonical keyword rendering for declaration heads
//!
//! # Example
//!
//! ```
//! use switchboard_emit::{CaseExit, CodeWriter, Modifier, Modifiers, Parameter, Visibility};
//!
//! let mut writer = CodeWriter::new();
//! {
//!     let mut class = writer.class("Router", None, Visibility::Public, &Modifiers::from(Modifier::Sealed));
//!     let mut method = class.async_method(
//!         "RouteAsync",
//!         None,
//!         Visibility::Public,
//!         &Modifiers::new(),
//!         &[Parameter::new("data", "object")],
//!     );
//!     let mut switch = method.switch("data");
//!     let mut case = switch.case("string text", CaseExit::Break);
//!     case.statement("Console.WriteLine(text)");
//! }
//! assert!(writer.output().starts_with("public sealed class Router\n{\n"));
//! ```

mod constructs;
mod modifiers;
mod params;
mod scope;
mod visibility;
mod writer;

pub use constructs::{ConstructorInitializer, EnumMember};
pub use modifiers::{Modifier, Modifiers};
pub use params::{ParamModifier, ParamModifiers, Parameter};
pub use scope::{CaseExit, PropertyScope, Scope, ScopeOptions};
pub use visibility::{Visibility, least_visible, most_visible};
pub use writer::{CodeWriter, DEFAULT_INDENT, POP_INDENT, PUSH_INDENT, WriterState};

#[cfg(test)]
mod tests;
