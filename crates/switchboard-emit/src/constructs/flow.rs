//! Control flow and preprocessor regions.

use crate::scope::{CaseExit, Scope, ScopeOptions};
use crate::writer::{CodeWriter, DEFAULT_INDENT};

impl CodeWriter {
    /// Opens an `if` block. Call [`Scope::else_block`] on the guard to add
    /// an `else` branch.
    pub fn if_block(&mut self, condition: &str) -> Scope<'_> {
        self.write_line(&format!("if ({condition})"));
        self.scope(true, ScopeOptions::new())
    }

    /// Opens a `try` block. Handlers are added through the guard.
    pub fn try_block(&mut self) -> Scope<'_> {
        self.write_line("try");
        self.scope(true, ScopeOptions::new())
    }

    /// Opens a `switch` block, which is followed by a blank line once
    /// closed.
    pub fn switch(&mut self, expression: &str) -> Scope<'_> {
        self.write_line(&format!("switch ({expression})"));
        self.scope(true, ScopeOptions::new().trailing_blank_line())
    }

    /// Opens a braced `case` section that ends with `exit` before its
    /// closing brace.
    pub fn case(&mut self, pattern: &str, exit: CaseExit) -> Scope<'_> {
        self.write_line(&format!("case {pattern}:"));
        self.scope(true, ScopeOptions::new().case_exit(exit))
    }

    /// Opens an `#if` region closed by `#endif` and a blank line.
    pub fn pragma_if(&mut self, condition: &str) -> Scope<'_> {
        self.write_line(&format!("#if {condition}"));
        self.push_indent(DEFAULT_INDENT);
        self.scope(
            false,
            ScopeOptions::new()
                .closing_tag("#endif")
                .trailing_blank_line(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn if_else_closes_each_branch() {
        let mut writer = CodeWriter::new();
        {
            let mut branch = writer.if_block("ready");
            branch.statement("Go()");
            branch.else_block();
            branch.statement("Wait()");
        }
        assert_eq!(
            writer.output(),
            "if (ready)\n{\n    Go();\n}\n\nelse\n{\n    Wait();\n}\n"
        );
    }

    #[test]
    fn try_catch_finally_chain() {
        let mut writer = CodeWriter::new();
        {
            let mut block = writer.try_block();
            block.statement("Run()");
            block.catch("IOException", Some("error"));
            block.statement("Log(error)");
            block.catch_all();
            block.statement("throw");
            block.finally();
            block.statement("Close()");
        }
        assert_eq!(
            writer.output(),
            concat!(
                "try\n{\n    Run();\n}\n",
                "catch (IOException error)\n{\n    Log(error);\n}\n",
                "catch\n{\n    throw;\n}\n",
                "finally\n{\n    Close();\n}\n",
            )
        );
    }

    #[test]
    fn typed_catch_without_variable() {
        let mut writer = CodeWriter::new();
        {
            let mut block = writer.try_block();
            block.catch("TimeoutException", None);
        }
        assert_eq!(
            writer.output(),
            "try\n{\n}\ncatch (TimeoutException)\n{\n}\n"
        );
    }

    #[rstest]
    #[case(CaseExit::Break, "break;")]
    #[case(CaseExit::Return, "return;")]
    fn case_writes_exit_statement_before_brace(#[case] exit: CaseExit, #[case] statement: &str) {
        let mut writer = CodeWriter::new();
        {
            let mut section = writer.case("1", exit);
            section.statement("Handle()");
        }
        let expected = format!("case 1:\n{{\n    Handle();\n    {statement}\n}}\n");
        assert_eq!(writer.output(), expected);
    }

    #[test]
    fn switch_is_followed_by_blank_line() {
        let mut writer = CodeWriter::new();
        {
            let mut switch = writer.switch("kind");
            drop(switch.case("0", CaseExit::Break));
        }
        assert_eq!(
            writer.output(),
            "switch (kind)\n{\n    case 0:\n    {\n        break;\n    }\n}\n\n"
        );
    }

    #[test]
    fn pragma_region_indents_and_switches_arm() {
        let mut writer = CodeWriter::new();
        {
            let mut region = writer.pragma_if("DEBUG");
            region.statement("Trace()");
            region.pragma_else();
            region.statement("Skip()");
        }
        assert_eq!(
            writer.output(),
            "#if DEBUG\n    Trace();\n#else\n    Skip();\n#endif\n\n"
        );
        assert_eq!(writer.indent_depth(), 0);
    }
}
