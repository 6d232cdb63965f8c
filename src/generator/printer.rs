//! # Printer
//!
//! The single-pass recursive walker that turns a [`Program`] into text
//! (spec §4). Binary-expression chains fall back to an explicit stack
//! ([`Printer::print_binary_chain`]) instead of recursing so a
//! pathologically deep `a + b + c + ...` doesn't blow the Rust call stack.
//!
//! Operator precedence and parenthesization follow [`super::operators`];
//! numeric/string/identifier formatting are delegated to their leaf
//! modules; late local rewrites (constant folding, IIFE collapsing) apply
//! only under `minify_syntax`.

use std::collections::HashSet;

use tracing::{debug, trace};

use crate::generator::operators::{
    self, Associativity, OperatorToken, Precedence,
};
use crate::generator::{source_maps, GeneratorConfig, IndentStyle, LegalCommentsMode, PrintError, UnsupportedFeatures};
use crate::import_records::{ImportRecord, ImportRecordFlags, InternalModuleKind};
use crate::parser::ast_types::*;
use crate::renamer::Renamer;
use crate::symbols::{SymbolFlags, SymbolTable};

type Result<T> = std::result::Result<T, PrintError>;

bitflags::bitflags! {
    /// Context propagated down into child expressions while printing (spec
    /// §4's "context-flag bitset").
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    struct ExprFlags: u32 {
        /// A bare call at this position would be misparsed (e.g. the callee
        /// of `new`); force it to be parenthesized.
        const FORBID_CALL = 1 << 0;
        /// Inside a `for (... in ...)` head, a bare `in` operator at the top
        /// level of the init expression would be ambiguous with the loop's
        /// own `in` keyword.
        const FORBID_IN = 1 << 1;
        /// Set by a parent `print_dot`/`print_index`/`print_call`/`print_new`
        /// on the flags it passes down to its (non-optional) target/callee:
        /// a `.`/`[]`/`()` is about to be glued directly onto whatever
        /// prints here. An explicitly-parenthesized optional chain in that
        /// position (`(a?.b).c`) must keep its parens — unwrapping it would
        /// silently extend the short-circuit to cover `.c` too, changing
        /// what the expression evaluates to.
        const HAS_NON_OPTIONAL_CHAIN_PARENT = 1 << 2;
        /// This expression's value is discarded (statement-level); permits
        /// dropping parens that would only matter for a used result.
        const EXPR_RESULT_UNUSED = 1 << 3;
        /// Direct operand of `delete`; affects whether a bare identifier
        /// must stay unparenthesized for `delete x` vs `delete (x, y)`.
        const IS_DELETE_TARGET = 1 << 4;
    }
}

impl Default for ExprFlags {
    fn default() -> Self {
        ExprFlags::empty()
    }
}

#[derive(Debug, Clone, Copy)]
struct BinaryFrame {
    operator_token: &'static str,
    needs_parens: bool,
}

pub struct Printer<'a> {
    output: String,
    indent_level: usize,
    next_indent_as_space: bool,
    options: &'a GeneratorConfig,
    symbols: &'a SymbolTable,
    renamer: &'a dyn Renamer,
    import_records: &'a [ImportRecord],

    stmt_start: Option<usize>,
    export_default_start: Option<usize>,
    arrow_expr_start: Option<usize>,
    for_of_init_start: Option<usize>,
    /// `with` blocks can shadow `NaN`/`Infinity` as ordinary properties, so
    /// a `Literal::Number` resolving to one of those while inside a `with`
    /// body must print a with-safe arithmetic spelling instead of the bare
    /// keyword. Printer-local because [`GeneratorConfig`] is held immutably
    /// and can't track traversal-position state.
    inside_with_scope: bool,

    prev_op: Option<OperatorToken>,
    prev_regexp_end: Option<usize>,

    current_line: u32,
    current_line_start_offset: usize,
    original_source: Option<&'a str>,
    original_line_offsets: Vec<u32>,

    printed_comments: HashSet<Span>,
    binary_stack: Vec<BinaryFrame>,

    legal_comments: super::legal_comments::LegalCommentCollector,
    metafile_imports: Vec<serde_json::Value>,
    source_map: Option<source_maps::ChunkBuilder>,
}

impl<'a> Printer<'a> {
    pub fn new(
        options: &'a GeneratorConfig,
        symbols: &'a SymbolTable,
        renamer: &'a dyn Renamer,
        import_records: &'a [ImportRecord],
        original_source: Option<&'a str>,
    ) -> Self {
        let source_map = if options.add_source_mappings {
            Some(source_maps::ChunkBuilder::new())
        } else {
            None
        };
        let original_line_offsets = original_source.map(compute_line_offsets).unwrap_or_default();

        Self {
            output: String::with_capacity(1024),
            indent_level: 0,
            next_indent_as_space: false,
            options,
            symbols,
            renamer,
            import_records,
            stmt_start: None,
            export_default_start: None,
            arrow_expr_start: None,
            for_of_init_start: None,
            inside_with_scope: false,
            prev_op: None,
            prev_regexp_end: None,
            current_line: 0,
            current_line_start_offset: 0,
            original_source,
            original_line_offsets,
            printed_comments: HashSet::new(),
            binary_stack: Vec::new(),
            legal_comments: super::legal_comments::LegalCommentCollector::new(),
            metafile_imports: Vec::new(),
            source_map,
        }
    }

    pub fn output_len(&self) -> usize {
        self.output.len()
    }

    pub fn into_output(self) -> String {
        self.output
    }

    pub fn take_source_map(&mut self) -> Option<source_maps::SourceMap> {
        self.source_map.take().map(|b| b.build())
    }

    pub fn take_metafile_imports(&mut self) -> Vec<serde_json::Value> {
        std::mem::take(&mut self.metafile_imports)
    }

    pub fn take_legal_comments(&mut self) -> Vec<String> {
        std::mem::take(&mut self.legal_comments).into_ordered()
    }

    // -----------------------------------------------------------------
    // Top level
    // -----------------------------------------------------------------

    pub fn print_program(&mut self, program: &Program) -> Result<()> {
        debug!(statements = program.body.len(), "printing program");

        for directive in &program.directives {
            self.write_indent()?;
            self.write(&strings_format_directive(directive, self.options));
            self.write_semicolon();
            self.newline();
        }

        let merged;
        let body: &[Statement] = if self.options.minify_syntax {
            merged = crate::generator::late_rewrites::merge_statements(&program.body);
            &merged
        } else {
            &program.body
        };

        for (i, stmt) in body.iter().enumerate() {
            if i > 0 {
                self.statement_separator();
            }
            self.write_indent()?;
            self.print_statement(stmt)?;
        }

        if !body.is_empty() && !self.options.minify_whitespace {
            self.newline();
        }

        if matches!(self.options.legal_comments, LegalCommentsMode::EndOfFile) {
            let trailer =
                super::legal_comments::render_end_of_file_trailer(&self.legal_comments.clone_ordered());
            self.output.push_str(&trailer);
        }

        Ok(())
    }

    // -----------------------------------------------------------------
    // Statements
    // -----------------------------------------------------------------

    fn print_statement(&mut self, stmt: &Statement) -> Result<()> {
        self.mark_stmt_start();
        self.record_mapping(self.statement_span(stmt));

        match stmt {
            Statement::VariableDeclaration(decl) => self.print_variable_declaration(decl),
            Statement::FunctionDeclaration(func) => self.print_function(func, true),
            Statement::ClassDeclaration(class) => self.print_class(class),
            Statement::ExpressionStatement { expression, .. } => {
                self.print_expression_statement(expression)
            }
            Statement::BlockStatement { body, .. } => self.print_block(body),
            Statement::EmptyStatement { .. } => {
                self.write(";");
                Ok(())
            }
            Statement::ReturnStatement { argument, .. } => {
                self.write("return");
                if let Some(arg) = argument {
                    self.write(" ");
                    self.print_expression(arg, Precedence::Sequence, ExprFlags::empty())?;
                }
                self.write_semicolon();
                Ok(())
            }
            Statement::IfStatement { test, consequent, alternate, .. } => {
                self.print_if(test, consequent, alternate.as_deref())
            }
            Statement::WhileStatement { test, body, .. } => {
                self.write("while(");
                self.print_expression(test, Precedence::Sequence, ExprFlags::empty())?;
                self.write(")");
                self.print_loop_body(body)
            }
            Statement::DoWhileStatement { body, test, .. } => {
                self.write("do");
                self.print_loop_body(body)?;
                self.write("while(");
                self.print_expression(test, Precedence::Sequence, ExprFlags::empty())?;
                self.write(")");
                self.write_semicolon();
                Ok(())
            }
            Statement::ForStatement { init, test, update, body, .. } => {
                self.print_for(init.as_ref(), test.as_ref(), update.as_ref(), body)
            }
            Statement::ForInStatement { left, right, body, .. } => {
                self.write("for(");
                self.print_for_init(left, true, true)?;
                self.write(" in ");
                self.print_expression(right, Precedence::Sequence, ExprFlags::empty())?;
                self.write(")");
                self.print_loop_body(body)
            }
            Statement::ForOfStatement { left, right, body, is_await, .. } => {
                self.write(if *is_await { "for await(" } else { "for(" });
                self.print_for_init(left, false, true)?;
                self.write(" of ");
                self.print_expression(right, Precedence::Assign, ExprFlags::empty())?;
                self.write(")");
                self.print_loop_body(body)
            }
            Statement::SwitchStatement { discriminant, cases, .. } => {
                self.print_switch(discriminant, cases)
            }
            Statement::TryStatement { block, handler, finalizer, .. } => {
                self.print_try(block, handler.as_ref(), finalizer.as_ref())
            }
            Statement::ThrowStatement { argument, .. } => {
                self.write("throw ");
                self.print_expression(argument, Precedence::Sequence, ExprFlags::empty())?;
                self.write_semicolon();
                Ok(())
            }
            Statement::BreakStatement { label, .. } => {
                self.write("break");
                if let Some(l) = label {
                    self.write(" ");
                    self.write(&l.name);
                }
                self.write_semicolon();
                Ok(())
            }
            Statement::ContinueStatement { label, .. } => {
                self.write("continue");
                if let Some(l) = label {
                    self.write(" ");
                    self.write(&l.name);
                }
                self.write_semicolon();
                Ok(())
            }
            Statement::LabeledStatement { label, body, .. } => {
                self.write(&label.name);
                self.write(":");
                self.print_statement(body)
            }
            Statement::WithStatement { object, body, .. } => {
                self.write("with(");
                self.print_expression(object, Precedence::Sequence, ExprFlags::empty())?;
                self.write(")");
                let outer = self.inside_with_scope;
                self.inside_with_scope = true;
                let result = self.print_loop_body(body);
                self.inside_with_scope = outer;
                result
            }
            Statement::DebuggerStatement { .. } => {
                self.write("debugger");
                self.write_semicolon();
                Ok(())
            }
            Statement::ImportDeclaration { specifiers, record_index, with_clause, .. } => {
                self.print_import_declaration(specifiers, *record_index, with_clause.as_ref())
            }
            Statement::ExportNamedDeclaration { declaration, specifiers, source_record_index, .. } => {
                self.print_export_named(declaration.as_deref(), specifiers, *source_record_index)
            }
            Statement::ExportDefaultDeclaration { declaration, .. } => {
                self.write("export default ");
                self.export_default_start = Some(self.output.len());
                match declaration {
                    ExportDefaultKind::Function(f) => self.print_function(f, true)?,
                    ExportDefaultKind::Class(c) => self.print_class(c)?,
                    ExportDefaultKind::Expression(e) => {
                        let anchor = self.export_default_start.unwrap_or(self.output.len());
                        let needs_wrap = expression_starts_ambiguously(e.unwrap_parens());
                        if needs_wrap {
                            self.write("(");
                        }
                        self.print_expression(e, Precedence::Assign, ExprFlags::empty())?;
                        if needs_wrap {
                            self.write(")");
                        }
                        debug_assert!(anchor <= self.output.len());
                        self.write_semicolon();
                    }
                }
                Ok(())
            }
            Statement::ExportAllDeclaration { exported, record_index, .. } => {
                self.write("export*");
                if let Some(name) = exported {
                    self.write(" as ");
                    self.write(&name.name);
                }
                self.write(" from");
                self.print_module_specifier(*record_index)?;
                self.write_semicolon();
                Ok(())
            }
            Statement::CommentStatement(comment) => self.print_standalone_comment(comment),
        }
    }

    fn print_variable_declaration(&mut self, decl: &VariableDeclaration) -> Result<()> {
        self.write(match decl.kind {
            VariableDeclarationKind::Var => "var ",
            VariableDeclarationKind::Let => "let ",
            VariableDeclarationKind::Const => "const ",
            VariableDeclarationKind::Using => "using ",
            VariableDeclarationKind::AwaitUsing => "await using ",
        });
        for (i, declarator) in decl.declarations.iter().enumerate() {
            if i > 0 {
                self.write(",");
            }
            self.print_pattern(&declarator.id)?;
            if let Some(init) = &declarator.init {
                self.write("=");
                self.print_expression(init, Precedence::Assign, ExprFlags::empty())?;
            }
        }
        self.write_semicolon();
        Ok(())
    }

    fn print_expression_statement(&mut self, expr: &Expression) -> Result<()> {
        let anchor = self.stmt_start.unwrap_or(self.output.len());
        let needs_wrap = expression_starts_ambiguously(expr.unwrap_parens());
        if needs_wrap {
            self.write("(");
        }
        self.print_expression(expr, Precedence::Sequence, ExprFlags::EXPR_RESULT_UNUSED)?;
        if needs_wrap {
            self.write(")");
        }
        debug_assert!(anchor <= self.output.len());
        self.write_semicolon();
        Ok(())
    }

    fn print_if(
        &mut self,
        test: &Expression,
        consequent: &Statement,
        alternate: Option<&Statement>,
    ) -> Result<()> {
        self.write("if(");
        self.print_expression(test, Precedence::Sequence, ExprFlags::empty())?;
        self.write(")");

        // Dangling-else hazard: a consequent that is itself an unbraced `if`
        // without an alternate must be wrapped in a block when *this* `if`
        // has an alternate, or the `else` would bind to the inner `if`.
        let needs_block =
            alternate.is_some() && matches!(consequent, Statement::IfStatement { alternate: None, .. });

        if needs_block {
            self.write("{");
            self.print_statement(consequent)?;
            self.write("}");
        } else {
            self.print_statement(consequent)?;
        }

        if let Some(alt) = alternate {
            if !matches!(consequent, Statement::BlockStatement { .. }) {
                self.write_semicolon();
            }
            self.write("else ");
            self.print_statement(alt)?;
        }
        Ok(())
    }

    fn print_loop_body(&mut self, body: &Statement) -> Result<()> {
        self.print_statement(body)
    }

    fn print_for(
        &mut self,
        init: Option<&ForInit>,
        test: Option<&Expression>,
        update: Option<&Expression>,
        body: &Statement,
    ) -> Result<()> {
        self.write("for(");
        if let Some(init) = init {
            self.print_for_init(init, false, false)?;
        }
        self.write(";");
        if let Some(test) = test {
            self.print_expression(test, Precedence::Sequence, ExprFlags::empty())?;
        }
        self.write(";");
        if let Some(update) = update {
            self.print_expression(update, Precedence::Sequence, ExprFlags::empty())?;
        }
        self.write(")");
        self.print_loop_body(body)
    }

    /// `needs_let_guard` is set for `for-in`/`for-of` heads, where a bare
    /// `let`/`async` expression at the start would be misparsed as the
    /// start of a `let`/`async` declaration or arrow function rather than a
    /// reference to a variable named `let`/`async` (spec §4 statement-start
    /// anchors).
    fn print_for_init(&mut self, init: &ForInit, forbid_in: bool, needs_let_guard: bool) -> Result<()> {
        self.for_of_init_start = Some(self.output.len());
        let flags = if forbid_in { ExprFlags::FORBID_IN } else { ExprFlags::empty() };
        match init {
            ForInit::VariableDeclaration(decl) => {
                self.write(match decl.kind {
                    VariableDeclarationKind::Var => "var ",
                    VariableDeclarationKind::Let => "let ",
                    VariableDeclarationKind::Const => "const ",
                    VariableDeclarationKind::Using => "using ",
                    VariableDeclarationKind::AwaitUsing => "await using ",
                });
                for (i, declarator) in decl.declarations.iter().enumerate() {
                    if i > 0 {
                        self.write(",");
                    }
                    self.print_pattern(&declarator.id)?;
                    if let Some(init_expr) = &declarator.init {
                        self.write("=");
                        self.print_expression(init_expr, Precedence::Assign, flags)?;
                    }
                }
                Ok(())
            }
            ForInit::Expression(expr) => {
                let needs_wrap =
                    needs_let_guard && expression_starts_for_of_ambiguously(expr.unwrap_parens());
                if needs_wrap {
                    self.write("(");
                }
                self.print_expression(expr, Precedence::Sequence, flags)?;
                if needs_wrap {
                    self.write(")");
                }
                Ok(())
            }
        }
    }

    fn print_switch(&mut self, discriminant: &Expression, cases: &[SwitchCase]) -> Result<()> {
        self.write("switch(");
        self.print_expression(discriminant, Precedence::Sequence, ExprFlags::empty())?;
        self.write("){");
        for case in cases {
            match &case.test {
                Some(test) => {
                    self.write("case ");
                    self.print_expression(test, Precedence::Sequence, ExprFlags::empty())?;
                    self.write(":");
                }
                None => self.write("default:"),
            }
            for stmt in &case.consequent {
                self.print_statement(stmt)?;
            }
        }
        self.write("}");
        Ok(())
    }

    fn print_try(
        &mut self,
        block: &[Statement],
        handler: Option<&CatchClause>,
        finalizer: Option<&Vec<Statement>>,
    ) -> Result<()> {
        self.write("try");
        self.print_block(block)?;
        if let Some(catch) = handler {
            self.write("catch");
            if let Some(param) = &catch.param {
                self.write("(");
                self.print_pattern(param)?;
                self.write(")");
            }
            self.print_block(&catch.body)?;
        }
        if let Some(fin) = finalizer {
            self.write("finally");
            self.print_block(fin)?;
        }
        Ok(())
    }

    fn print_block(&mut self, body: &[Statement]) -> Result<()> {
        let merged;
        let body: &[Statement] = if self.options.minify_syntax {
            merged = crate::generator::late_rewrites::merge_statements(body);
            &merged
        } else {
            body
        };
        self.write("{");
        if !body.is_empty() {
            self.newline();
            self.indent_level += 1;
            for stmt in body {
                self.write_indent()?;
                self.print_statement(stmt)?;
                self.newline();
            }
            self.indent_level -= 1;
            self.write_indent()?;
        }
        self.write("}");
        Ok(())
    }

    fn print_import_declaration(
        &mut self,
        specifiers: &[ImportSpecifier],
        record_index: u32,
        with_clause: Option<&WithClause>,
    ) -> Result<()> {
        if specifiers.is_empty() && with_clause.is_none() {
            self.write("import");
            self.print_module_specifier(record_index)?;
            self.write_semicolon();
            return Ok(());
        }

        self.write("import ");
        let mut default_printed = false;
        let mut named: Vec<&ImportSpecifier> = Vec::new();
        for spec in specifiers {
            match spec {
                ImportSpecifier::ImportDefaultSpecifier { local } => {
                    self.write(&local.name);
                    default_printed = true;
                }
                ImportSpecifier::ImportNamespaceSpecifier { local } => {
                    if default_printed {
                        self.write(",");
                    }
                    self.write("* as ");
                    self.write(&local.name);
                }
                ImportSpecifier::ImportSpecifier { .. } => named.push(spec),
            }
        }
        if !named.is_empty() {
            if default_printed {
                self.write(",");
            }
            self.write("{");
            for (i, spec) in named.iter().enumerate() {
                if i > 0 {
                    self.write(",");
                }
                if let ImportSpecifier::ImportSpecifier { imported, local, .. } = spec {
                    if imported.name == local.name {
                        self.write(&local.name);
                    } else {
                        self.write(&imported.name);
                        self.write(" as ");
                        self.write(&local.name);
                    }
                }
            }
            self.write("}");
        }
        self.write(" from");
        self.print_module_specifier(record_index)?;
        if let Some(with) = with_clause {
            self.print_with_clause(with);
        }
        self.write_semicolon();
        Ok(())
    }

    fn print_export_named(
        &mut self,
        declaration: Option<&Statement>,
        specifiers: &[ExportSpecifier],
        source_record_index: Option<u32>,
    ) -> Result<()> {
        self.write("export ");
        if let Some(decl) = declaration {
            return self.print_statement(decl);
        }
        self.write("{");
        for (i, spec) in specifiers.iter().enumerate() {
            if i > 0 {
                self.write(",");
            }
            let ExportSpecifier::ExportSpecifier { local, exported, .. } = spec;
            if local.name == exported.name {
                self.write(&local.name);
            } else {
                self.write(&local.name);
                self.write(" as ");
                self.write(&exported.name);
            }
        }
        self.write("}");
        if let Some(record_index) = source_record_index {
            self.write(" from");
            self.print_module_specifier(record_index)?;
        }
        self.write_semicolon();
        Ok(())
    }

    fn print_module_specifier(&mut self, record_index: u32) -> Result<()> {
        let record = self.import_records.get(record_index as usize).ok_or_else(|| {
            PrintError::InvalidImportRecordIndex { index: record_index, len: self.import_records.len() }
        })?;
        self.write(" ");
        self.write(&crate::generator::strings::format_string_literal(
            &record.module_specifier,
            self.options.quote,
            self.options.ascii_only,
        ));
        if self.options.needs_metafile
            && crate::generator::imports::included_in_metafile(record)
        {
            self.metafile_imports.push(serde_json::json!({ "path": record.module_specifier }));
        }
        Ok(())
    }

    fn print_with_clause(&mut self, with: &WithClause) {
        self.write(if with.is_legacy_assert { " assert{" } else { " with{" });
        for (i, (key, value)) in with.entries.iter().enumerate() {
            if i > 0 {
                self.write(",");
            }
            self.write(key);
            self.write(":");
            self.write(&crate::generator::strings::format_string_literal(
                value,
                self.options.quote,
                self.options.ascii_only,
            ));
        }
        self.write("}");
    }

    fn print_standalone_comment(&mut self, comment: &Comment) -> Result<()> {
        if !self.printed_comments.insert(comment.span) {
            return Ok(());
        }
        if comment.is_legal {
            self.legal_comments.record(&comment.text);
            match self.options.legal_comments {
                LegalCommentsMode::None => {}
                LegalCommentsMode::Inline => {
                    if comment.is_block {
                        self.write(&format!("/*!{}*/", comment.text));
                    } else {
                        self.write(&format!("//!{}", comment.text));
                    }
                }
                // Already recorded into `self.legal_comments` above; these
                // modes place the text elsewhere (end-of-file trailer or a
                // side file assembled from `take_legal_comments`), never
                // inline at the comment's original position.
                LegalCommentsMode::EndOfFile | LegalCommentsMode::Linked | LegalCommentsMode::External => {}
            }
        } else if !self.options.minify_whitespace {
            if comment.is_block {
                self.write(&format!("/*{}*/", comment.text));
            } else {
                self.write(&format!("//{}", comment.text));
            }
        }
        Ok(())
    }

    // -----------------------------------------------------------------
    // Functions & classes
    // -----------------------------------------------------------------

    fn print_function(&mut self, func: &FunctionNode, is_declaration: bool) -> Result<()> {
        let _ = is_declaration;
        if func.is_async {
            self.write("async ");
        }
        self.write("function");
        if func.is_generator {
            self.write("*");
        }
        if let Some(id) = &func.id {
            self.write(" ");
            self.write(&self.resolve_name(id));
        } else {
            self.write(" ");
        }
        self.write("(");
        self.print_param_list(&func.params)?;
        self.write(")");
        self.print_block(&func.body)
    }

    fn print_class(&mut self, class: &ClassNode) -> Result<()> {
        self.write("class");
        if let Some(id) = &class.id {
            self.write(" ");
            self.write(&self.resolve_name(id));
        }
        if let Some(super_class) = &class.super_class {
            self.write(" extends ");
            self.print_expression(super_class, Precedence::Call, ExprFlags::empty())?;
        }
        self.write("{");
        for element in &class.body {
            self.print_class_element(element)?;
        }
        self.write("}");
        Ok(())
    }

    fn print_class_element(&mut self, element: &ClassElement) -> Result<()> {
        match element {
            ClassElement::PropertyDefinition { key, value, is_static, .. } => {
                if *is_static {
                    self.write("static ");
                }
                self.print_property_key(key)?;
                if let Some(value) = value {
                    self.write("=");
                    self.print_expression(value, Precedence::Assign, ExprFlags::empty())?;
                }
                self.write(";");
                Ok(())
            }
            ClassElement::MethodDefinition { key, value, kind, is_static, .. } => {
                if *is_static {
                    self.write("static ");
                }
                match kind {
                    MethodKind::Get => self.write("get "),
                    MethodKind::Set => self.write("set "),
                    MethodKind::Constructor | MethodKind::Method => {}
                }
                if value.is_async {
                    self.write("async ");
                }
                if value.is_generator {
                    self.write("*");
                }
                self.print_property_key(key)?;
                self.write("(");
                self.print_param_list(&value.params)?;
                self.write(")");
                self.print_block(&value.body)
            }
            ClassElement::StaticBlock { body, .. } => {
                self.write("static");
                self.print_block(body)
            }
        }
    }

    fn print_property_key(&mut self, key: &PropertyKey) -> Result<()> {
        match key {
            PropertyKey::Identifier(id) => {
                self.write(&crate::generator::identifiers::format_identifier(&id.name, self.options.ascii_only));
                Ok(())
            }
            PropertyKey::Literal(lit) => self.print_literal(lit),
            PropertyKey::PrivateName(name) => {
                self.write("#");
                self.write(&name.name);
                Ok(())
            }
            PropertyKey::Computed(expr) => {
                self.write("[");
                self.print_expression(expr, Precedence::Assign, ExprFlags::empty())?;
                self.write("]");
                Ok(())
            }
            PropertyKey::MangledName { mangled, original, .. } => {
                self.write(&crate::generator::identifiers::format_identifier(mangled, self.options.ascii_only));
                if !self.options.minify_whitespace {
                    self.write(&format!("/* {original} */"));
                }
                Ok(())
            }
        }
    }

    fn print_param_list(&mut self, params: &[Pattern]) -> Result<()> {
        for (i, param) in params.iter().enumerate() {
            if i > 0 {
                self.write(",");
            }
            self.print_pattern(param)?;
        }
        Ok(())
    }

    // -----------------------------------------------------------------
    // Patterns
    // -----------------------------------------------------------------

    fn print_pattern(&mut self, pattern: &Pattern) -> Result<()> {
        match pattern {
            Pattern::Identifier(id) => {
                self.write(&self.resolve_name(id));
                Ok(())
            }
            Pattern::ArrayPattern { elements, .. } => {
                self.write("[");
                for (i, el) in elements.iter().enumerate() {
                    if i > 0 {
                        self.write(",");
                    }
                    if let Some(p) = el {
                        self.print_pattern(p)?;
                    }
                }
                self.write("]");
                Ok(())
            }
            Pattern::ObjectPattern { properties, .. } => {
                self.write("{");
                for (i, prop) in properties.iter().enumerate() {
                    if i > 0 {
                        self.write(",");
                    }
                    match prop {
                        ObjectPatternProperty::Property { key, value, shorthand, .. } => {
                            if *shorthand {
                                self.print_pattern(value)?;
                            } else {
                                self.print_property_key(key)?;
                                self.write(":");
                                self.print_pattern(value)?;
                            }
                        }
                        ObjectPatternProperty::RestElement { argument, .. } => {
                            self.write("...");
                            self.print_pattern(argument)?;
                        }
                    }
                }
                self.write("}");
                Ok(())
            }
            Pattern::AssignmentPattern { left, right, .. } => {
                self.print_pattern(left)?;
                self.write("=");
                self.print_expression(right, Precedence::Assign, ExprFlags::empty())
            }
            Pattern::RestElement { argument, .. } => {
                self.write("...");
                self.print_pattern(argument)
            }
        }
    }

    // -----------------------------------------------------------------
    // Expressions
    // -----------------------------------------------------------------

    fn print_expression(&mut self, expr: &Expression, parent_prec: Precedence, flags: ExprFlags) -> Result<()> {
        // `(a?.b).c` is not the same expression as `a?.b.c`: unwrapping the
        // explicit parens here would let `.c` join the optional chain and
        // silently extend its short-circuit. Only a parent that is about to
        // glue a non-optional `.`/`[]`/`()` onto this position cares.
        if flags.contains(ExprFlags::HAS_NON_OPTIONAL_CHAIN_PARENT) {
            if let Expression::Parenthesized { inner, .. } = expr {
                if is_optional_chain(inner.unwrap_parens()) {
                    self.write("(");
                    let inner_flags = flags.difference(ExprFlags::HAS_NON_OPTIONAL_CHAIN_PARENT);
                    self.print_expression(inner, Precedence::Sequence, inner_flags)?;
                    self.write(")");
                    return Ok(());
                }
            }
        }
        let expr = expr.unwrap_parens();

        if self.options.minify_syntax {
            if let Expression::BinaryExpression { left, operator, right, .. } = expr {
                if let Some(folded) =
                    crate::generator::late_rewrites::fold_binary_numeric(left, *operator, right)
                {
                    return self.print_expression(&folded, parent_prec, flags);
                }
            }
            if let Expression::UnaryExpression { operator, argument, .. } = expr {
                if let Some(folded) = crate::generator::late_rewrites::fold_unary_numeric(*operator, argument) {
                    return self.print_expression(&folded, parent_prec, flags);
                }
            }
            if let Expression::LogicalExpression { left, operator, right, .. } = expr {
                if let Some(survivor) = crate::generator::late_rewrites::short_circuit_logical(left, *operator, right) {
                    return self.print_expression(survivor, parent_prec, flags);
                }
            }
            if let Expression::ConditionalExpression { test, consequent, alternate, .. } = expr {
                if let Some(branch) =
                    crate::generator::late_rewrites::collapse_conditional_constant_test(test, consequent, alternate)
                {
                    return self.print_expression(branch, parent_prec, flags);
                }
            }
        }

        // Cross-module constant/enum inlining is a linking decision carried
        // in `GeneratorConfig`, not a `minify_syntax` stylistic choice, so it
        // applies unconditionally whenever the linker populated a table.
        if let Expression::DotExpression { target, property, optional: false, .. } = expr {
            if let Some(target_symbol) = expression_symbol_ref(target.unwrap_parens()) {
                if let Some(inlined) = crate::generator::late_rewrites::try_inline_enum_member(
                    &self.options.ts_enums,
                    self.symbols,
                    target_symbol,
                    &property.name,
                    expr.span(),
                ) {
                    return self.print_expression(&inlined, parent_prec, flags);
                }
            }
        }
        if let Some(target_symbol) = expression_symbol_ref(expr) {
            if let Some(inlined) = crate::generator::late_rewrites::try_inline_const_value(
                &self.options.const_values,
                self.symbols,
                target_symbol,
                expr.span(),
            ) {
                return self.print_expression(&inlined, parent_prec, flags);
            }
        }

        match expr {
            Expression::Identifier(id) => {
                self.write(&self.resolve_name(id));
                Ok(())
            }
            Expression::Literal(lit) => self.print_literal(lit),
            Expression::TemplateLiteral(t) => self.print_template_literal(t),
            Expression::TaggedTemplate { tag, quasi, .. } => {
                self.print_expression(tag, Precedence::Call, ExprFlags::empty())?;
                self.print_template_literal(quasi)
            }
            Expression::Super { .. } => {
                self.write("super");
                Ok(())
            }
            Expression::This { .. } => {
                self.write("this");
                Ok(())
            }
            Expression::NewTarget { .. } => {
                self.write("new.target");
                Ok(())
            }
            Expression::ImportMeta { .. } => {
                self.write("import.meta");
                Ok(())
            }
            Expression::ArrayExpression { elements, .. } => self.print_array_expression(elements),
            Expression::ObjectExpression { properties, .. } => {
                self.print_object_expression(properties, flags)
            }
            Expression::SpreadElement { argument, .. } => {
                self.write("...");
                self.print_expression(argument, Precedence::Assign, ExprFlags::empty())
            }
            Expression::FunctionExpression(func) => self.print_function(func, false),
            Expression::ArrowFunctionExpression(arrow) => self.print_arrow(arrow),
            Expression::ClassExpression(class) => self.print_class(class),
            Expression::CallExpression { callee, arguments, optional, .. } => {
                self.print_call(callee, arguments, *optional, parent_prec, flags)
            }
            Expression::NewExpression { callee, arguments, .. } => {
                self.print_new(callee, arguments.as_deref(), parent_prec)
            }
            Expression::DotExpression { target, property, optional, .. } => {
                self.print_dot(target, property, *optional, parent_prec, flags)
            }
            Expression::IndexExpression { target, property, optional, .. } => {
                self.print_index(target, property, *optional, parent_prec, flags)
            }
            Expression::ConditionalExpression { test, consequent, alternate, .. } => {
                self.print_conditional(test, consequent, alternate, parent_prec)
            }
            Expression::BinaryExpression { left, operator, right, .. } => {
                self.print_binary_chain(left, *operator, right, parent_prec, flags)
            }
            Expression::LogicalExpression { left, operator, right, .. } => {
                self.print_logical(left, *operator, right, parent_prec)
            }
            Expression::UnaryExpression { operator, argument, .. } => {
                self.print_unary(*operator, argument, parent_prec, flags)
            }
            Expression::UpdateExpression { operator, argument, prefix, .. } => {
                self.print_update(*operator, argument, *prefix, parent_prec)
            }
            Expression::AssignmentExpression { left, operator, right, .. } => {
                self.print_assignment(left, *operator, right, parent_prec)
            }
            Expression::SequenceExpression { expressions, .. } => {
                let needs_parens = parent_prec > Precedence::Sequence;
                if needs_parens {
                    self.write("(");
                }
                for (i, e) in expressions.iter().enumerate() {
                    if i > 0 {
                        self.write(",");
                    }
                    self.print_expression(e, Precedence::Assign, ExprFlags::empty())?;
                }
                if needs_parens {
                    self.write(")");
                }
                Ok(())
            }
            Expression::YieldExpression { argument, delegate, .. } => {
                let needs_parens = parent_prec > Precedence::Yield;
                if needs_parens {
                    self.write("(");
                }
                self.write(if *delegate { "yield*" } else { "yield" });
                if let Some(arg) = argument {
                    self.write(" ");
                    self.print_expression(arg, Precedence::Yield, ExprFlags::empty())?;
                }
                if needs_parens {
                    self.write(")");
                }
                Ok(())
            }
            Expression::AwaitExpression { argument, .. } => {
                let needs_parens = parent_prec > Precedence::Prefix;
                if needs_parens {
                    self.write("(");
                }
                self.write("await ");
                self.print_expression(argument, Precedence::Prefix, ExprFlags::empty())?;
                if needs_parens {
                    self.write(")");
                }
                Ok(())
            }
            Expression::JsxElement(el) => self.print_jsx_element(el),
            Expression::JsxFragment { children, .. } => {
                self.write("<>");
                for child in children {
                    self.print_jsx_child(child)?;
                }
                self.write("</>");
                Ok(())
            }
            Expression::RequireString { record_index, .. } => {
                self.print_require(*record_index, !flags.contains(ExprFlags::EXPR_RESULT_UNUSED))
            }
            Expression::RequireResolveString { record_index, .. } => {
                self.write("require.resolve(");
                self.print_module_specifier_bare(*record_index)?;
                self.write(")");
                Ok(())
            }
            Expression::ImportCall { record_index, options, .. } => {
                self.print_import_call(*record_index, options.as_deref())
            }
            Expression::ImportIdentifier { symbol, .. } => {
                let resolved = self.symbols.follow(*symbol);
                let namespace_alias = self.symbols.get(resolved).and_then(|s| s.namespace_alias.as_ref());
                match namespace_alias {
                    Some((ns_symbol, prop)) => {
                        let ns_name = self.renamer.name_for_symbol(self.symbols.follow(*ns_symbol)).to_string();
                        self.write(&ns_name);
                        if crate::generator::identifiers::is_identifier_name(prop) {
                            self.write(".");
                            self.write(prop);
                        } else {
                            self.write("[");
                            self.write(&crate::generator::strings::format_string_literal(
                                prop,
                                self.options.quote,
                                self.options.ascii_only,
                            ));
                            self.write("]");
                        }
                    }
                    None => self.write(self.renamer.name_for_symbol(resolved)),
                }
                Ok(())
            }
            Expression::NameOfSymbol { symbol, .. } => {
                let resolved = self.symbols.follow(*symbol);
                let original_name =
                    self.symbols.get(resolved).map(|s| s.original_name.as_str()).unwrap_or_default();
                let mangled = self.options.mangled_props.get(original_name).map(String::as_str);
                self.write(&crate::generator::strings::format_string_literal(
                    mangled.unwrap_or(original_name),
                    self.options.quote,
                    self.options.ascii_only,
                ));
                Ok(())
            }
            Expression::InlinedEnum { value, original_name, .. } => {
                self.print_literal(value)?;
                if !self.options.minify_whitespace {
                    self.write(&format!("/* {original_name} */"));
                }
                Ok(())
            }
            Expression::Annotated { inner, comment, .. } => {
                self.print_expression(inner, parent_prec, flags)?;
                if !self.options.minify_whitespace {
                    self.write(&format!("/* {comment} */"));
                }
                Ok(())
            }
            Expression::Parenthesized { .. } => unreachable!("unwrapped above"),
        }
    }

    fn print_array_expression(&mut self, elements: &[Option<ArrayElement>]) -> Result<()> {
        self.write("[");
        for (i, el) in elements.iter().enumerate() {
            if i > 0 {
                self.write(",");
            }
            match el {
                Some(ArrayElement::Expression(e)) => {
                    self.print_expression(e, Precedence::Assign, ExprFlags::empty())?;
                }
                Some(ArrayElement::Spread(e)) => {
                    self.write("...");
                    self.print_expression(e, Precedence::Assign, ExprFlags::empty())?;
                }
                Some(ArrayElement::Elision) | None => {}
            }
        }
        self.write("]");
        Ok(())
    }

    fn print_object_expression(&mut self, properties: &[ObjectProperty], flags: ExprFlags) -> Result<()> {
        let needs_wrap = self.stmt_start == Some(self.output.len())
            || self.arrow_expr_start == Some(self.output.len());
        let _ = flags;
        if needs_wrap {
            self.write("(");
        }
        self.write("{");
        for (i, prop) in properties.iter().enumerate() {
            if i > 0 {
                self.write(",");
            }
            match prop {
                ObjectProperty::Property { key, value, kind, method, shorthand, .. } => {
                    match kind {
                        PropertyKind::Get => self.write("get "),
                        PropertyKind::Set => self.write("set "),
                        PropertyKind::Init => {}
                    }
                    if *shorthand {
                        let key_name = match key {
                            PropertyKey::Identifier(id) => Some(id.name.as_str()),
                            _ => None,
                        };
                        let resolved_value_name = match value.unwrap_parens() {
                            Expression::Identifier(id) => Some(self.resolve_name(id)),
                            _ => None,
                        };
                        let still_shorthand =
                            resolved_value_name.as_deref() == key_name;
                        if still_shorthand {
                            self.print_property_key(key)?;
                        } else {
                            // Renaming forced this shorthand property back
                            // out to long form. A literal `__proto__: value`
                            // (unlike the shorthand it replaces) sets the
                            // object's prototype, so spell the key as a
                            // computed string to keep it a plain own
                            // property instead.
                            if key_name == Some("__proto__") {
                                self.write("[\"__proto__\"]");
                            } else {
                                self.print_property_key(key)?;
                            }
                            self.write(":");
                            self.print_expression(value, Precedence::Assign, ExprFlags::empty())?;
                        }
                    } else if *method {
                        self.print_property_key(key)?;
                        if let Expression::FunctionExpression(func) = value {
                            if func.is_async {
                                self.write("async ");
                            }
                            if func.is_generator {
                                self.write("*");
                            }
                            self.write("(");
                            self.print_param_list(&func.params)?;
                            self.write(")");
                            self.print_block(&func.body)?;
                        }
                    } else {
                        self.print_property_key(key)?;
                        self.write(":");
                        self.print_expression(value, Precedence::Assign, ExprFlags::empty())?;
                    }
                }
                ObjectProperty::SpreadElement { argument, .. } => {
                    self.write("...");
                    self.print_expression(argument, Precedence::Assign, ExprFlags::empty())?;
                }
            }
        }
        self.write("}");
        if needs_wrap {
            self.write(")");
        }
        Ok(())
    }

    fn print_arrow(&mut self, arrow: &ArrowFunction) -> Result<()> {
        if arrow.is_async {
            self.write("async ");
        }
        self.write("(");
        self.print_param_list(&arrow.params)?;
        self.write(")=>");
        self.arrow_expr_start = Some(self.output.len());
        match &arrow.body {
            ArrowFunctionBody::BlockStatement(body) => self.print_block(body),
            ArrowFunctionBody::Expression(expr) => {
                self.print_expression(expr, Precedence::Assign, ExprFlags::empty())
            }
        }
    }

    fn print_collapsed_iife_result(
        &mut self,
        collapsed: crate::generator::late_rewrites::Collapsed<'_>,
        parent_prec: Precedence,
        flags: ExprFlags,
    ) -> Result<()> {
        match collapsed {
            crate::generator::late_rewrites::Collapsed::Borrowed(expr) => {
                self.print_expression(expr, parent_prec, flags)
            }
            crate::generator::late_rewrites::Collapsed::Owned(expr) => {
                self.print_expression(&expr, parent_prec, flags)
            }
        }
    }

    fn print_call(
        &mut self,
        callee: &Expression,
        arguments: &[Argument],
        optional: bool,
        parent_prec: Precedence,
        flags: ExprFlags,
    ) -> Result<()> {
        if self.options.minify_syntax && !optional {
            let unwrapped = callee.unwrap_parens();
            if let Expression::FunctionExpression(func) = unwrapped {
                if let Some(inlined) = crate::generator::late_rewrites::inline_identity_iife(
                    &func.params,
                    &func.body,
                    arguments,
                ) {
                    return self.print_expression(inlined, parent_prec, flags);
                }
                if let Some(collapsed) = crate::generator::late_rewrites::try_collapse_zero_arg_function_iife(
                    func.is_async,
                    &func.params,
                    &func.body,
                    arguments,
                ) {
                    return self.print_collapsed_iife_result(collapsed, parent_prec, flags);
                }
            }
            if let Expression::ArrowFunctionExpression(arrow) = unwrapped {
                if let Some(collapsed) = crate::generator::late_rewrites::try_collapse_zero_arg_arrow_iife(
                    arrow.is_async,
                    &arrow.params,
                    &arrow.body,
                    arguments,
                ) {
                    return self.print_collapsed_iife_result(collapsed, parent_prec, flags);
                }
            }
            if let Some(symbol) = expression_symbol_ref(unwrapped) {
                let resolved = self.symbols.follow(symbol);
                let symbol_flags =
                    self.symbols.get(resolved).map(|s| s.flags).unwrap_or(SymbolFlags::empty());
                if let Some(collapsed) =
                    crate::generator::late_rewrites::try_collapse_symbol_referenced_empty_function_call(
                        symbol_flags,
                        arguments,
                    )
                {
                    return self.print_expression(&collapsed, parent_prec, flags);
                }
            }
        }

        let needs_parens = parent_prec > Precedence::Call || flags.contains(ExprFlags::FORBID_CALL);
        if needs_parens {
            self.write("(");
        }

        // A conditional/logical callee with a constant-foldable test can
        // collapse down to a bare reference (e.g. `(1 ? eval : 2)(x)`); if it
        // does, the callee is no longer syntactically wrapped the way it was
        // in the source, so a guard keeps an indirect call indirect.
        let mut resolved_callee = callee.unwrap_parens();
        let mut was_collapsed = false;
        if self.options.minify_syntax && !optional {
            loop {
                let next = match resolved_callee {
                    Expression::ConditionalExpression { test, consequent, alternate, .. } => {
                        crate::generator::late_rewrites::collapse_conditional_constant_test(test, consequent, alternate)
                    }
                    Expression::LogicalExpression { left, operator, right, .. } => {
                        crate::generator::late_rewrites::short_circuit_logical(left, *operator, right)
                    }
                    _ => None,
                };
                match next {
                    Some(branch) => {
                        resolved_callee = branch.unwrap_parens();
                        was_collapsed = true;
                    }
                    None => break,
                }
            }
        }

        let needs_guard = was_collapsed
            && crate::generator::late_rewrites::collapsed_needs_indirect_call_guard(resolved_callee);
        if needs_guard {
            self.write("(0, ");
            self.print_expression(resolved_callee, Precedence::Assign, ExprFlags::empty())?;
            self.write(")");
        } else {
            // A non-optional call glues `(...)` directly onto its callee, so an
            // explicitly-parenthesized optional chain there (`(a?.b)()`) must
            // keep its parens — unlike `a?.b()`, it is not short-circuited by
            // a failed `a?.b` and instead throws calling `undefined`.
            let callee_flags = ExprFlags::FORBID_CALL
                | if optional { ExprFlags::empty() } else { ExprFlags::HAS_NON_OPTIONAL_CHAIN_PARENT };
            self.print_expression(resolved_callee, Precedence::Call, callee_flags)?;
        }
        self.write(if optional { "?.(" } else { "(" });
        for (i, arg) in arguments.iter().enumerate() {
            if i > 0 {
                self.write(",");
            }
            match arg {
                Argument::Expression(e) => self.print_expression(e, Precedence::Assign, ExprFlags::empty())?,
                Argument::Spread(e) => {
                    self.write("...");
                    self.print_expression(e, Precedence::Assign, ExprFlags::empty())?;
                }
            }
        }
        self.write(")");
        if needs_parens {
            self.write(")");
        }
        Ok(())
    }

    fn print_new(
        &mut self,
        callee: &Expression,
        arguments: Option<&[Argument]>,
        parent_prec: Precedence,
    ) -> Result<()> {
        let needs_parens = parent_prec > Precedence::New;
        if needs_parens {
            self.write("(");
        }
        self.write("new ");
        // `new` binds tighter than a bare call in its callee position, so a
        // callee that is itself a call must be parenthesized: `new (f())()`.
        self.print_expression(
            callee,
            Precedence::Member,
            ExprFlags::FORBID_CALL | ExprFlags::HAS_NON_OPTIONAL_CHAIN_PARENT,
        )?;
        self.write("(");
        if let Some(args) = arguments {
            for (i, arg) in args.iter().enumerate() {
                if i > 0 {
                    self.write(",");
                }
                match arg {
                    Argument::Expression(e) => self.print_expression(e, Precedence::Assign, ExprFlags::empty())?,
                    Argument::Spread(e) => {
                        self.write("...");
                        self.print_expression(e, Precedence::Assign, ExprFlags::empty())?;
                    }
                }
            }
        }
        self.write(")");
        if needs_parens {
            self.write(")");
        }
        Ok(())
    }

    fn print_dot(
        &mut self,
        target: &Expression,
        property: &Identifier,
        optional: bool,
        parent_prec: Precedence,
        flags: ExprFlags,
    ) -> Result<()> {
        let needs_parens = parent_prec > Precedence::Member;
        if needs_parens {
            self.write("(");
        }
        let target_flags = if optional { flags } else { flags | ExprFlags::HAS_NON_OPTIONAL_CHAIN_PARENT };
        self.print_expression(target, Precedence::Member, target_flags)?;
        self.write(if optional { "?." } else { "." });
        self.write(&property.name);
        if needs_parens {
            self.write(")");
        }
        Ok(())
    }

    fn print_index(
        &mut self,
        target: &Expression,
        property: &Expression,
        optional: bool,
        parent_prec: Precedence,
        flags: ExprFlags,
    ) -> Result<()> {
        let needs_parens = parent_prec > Precedence::Member;
        if needs_parens {
            self.write("(");
        }
        let target_flags = if optional { flags } else { flags | ExprFlags::HAS_NON_OPTIONAL_CHAIN_PARENT };
        self.print_expression(target, Precedence::Member, target_flags)?;
        self.write(if optional { "?.[" } else { "[" });
        self.print_expression(property, Precedence::Sequence, ExprFlags::empty())?;
        self.write("]");
        if needs_parens {
            self.write(")");
        }
        Ok(())
    }

    fn print_conditional(
        &mut self,
        test: &Expression,
        consequent: &Expression,
        alternate: &Expression,
        parent_prec: Precedence,
    ) -> Result<()> {
        let needs_parens = parent_prec > Precedence::Conditional;
        if needs_parens {
            self.write("(");
        }
        self.print_expression(test, Precedence::NullishCoalescing, ExprFlags::empty())?;
        self.write("?");
        self.print_expression(consequent, Precedence::Assign, ExprFlags::empty())?;
        self.write(":");
        self.print_expression(alternate, Precedence::Assign, ExprFlags::empty())?;
        if needs_parens {
            self.write(")");
        }
        Ok(())
    }

    /// Prints a (possibly deep) chain of same-precedence-class binary
    /// expressions iteratively, to avoid recursing once per operator on a
    /// long `a + b + c + ...` chain (spec §4's explicit-stack fallback).
    fn print_binary_chain(
        &mut self,
        left: &Expression,
        operator: BinaryOperator,
        right: &Expression,
        parent_prec: Precedence,
        flags: ExprFlags,
    ) -> Result<()> {
        let mut frames: Vec<(&Expression, BinaryOperator, &Expression)> = Vec::new();
        let mut cursor_left = left;
        let mut cursor_op = operator;
        let mut cursor_right = right;
        loop {
            frames.push((cursor_left, cursor_op, cursor_right));
            match cursor_left.unwrap_parens() {
                Expression::BinaryExpression { left: l2, operator: op2, right: r2, .. } => {
                    cursor_left = l2;
                    cursor_op = *op2;
                    cursor_right = r2;
                }
                _ => break,
            }
        }

        let outer_prec = operators::binary_operator_precedence(frames[0].1);
        let needs_parens = outer_prec < parent_prec;
        if needs_parens {
            self.write("(");
        }

        let deepest = frames.last().unwrap();
        let deepest_prec = operators::binary_operator_precedence(deepest.1);
        let deepest_assoc = operators::binary_operator_associativity(deepest.1);
        self.print_expression(
            deepest.0,
            deepest_prec.operand_floor(deepest_assoc, false),
            flags,
        )?;

        for (_, op, right) in frames.iter().rev() {
            let prec = operators::binary_operator_precedence(*op);
            let assoc = operators::binary_operator_associativity(*op);
            self.print_binary_operator_token(*op);
            self.print_expression(right, prec.operand_floor(assoc, true), ExprFlags::empty())?;
        }

        if needs_parens {
            self.write(")");
        }
        Ok(())
    }

    fn print_binary_operator_token(&mut self, op: BinaryOperator) {
        let token = operators::binary_operator_token(op);
        let is_word = matches!(op, BinaryOperator::In | BinaryOperator::Instanceof);
        if is_word {
            self.write(" ");
            self.write(token);
            self.write(" ");
        } else if self.options.minify_whitespace {
            if let (Some(prev), Some(lead)) = (self.prev_op, classify_leading_token(token)) {
                if operators::needs_adjacency_space(prev, lead) {
                    self.write(" ");
                }
            }
            self.write(token);
        } else {
            self.write(" ");
            self.write(token);
            self.write(" ");
        }
    }

    fn print_logical(
        &mut self,
        left: &Expression,
        operator: LogicalOperator,
        right: &Expression,
        parent_prec: Precedence,
    ) -> Result<()> {
        let prec = operators::logical_operator_precedence(operator);
        let needs_parens = prec < parent_prec;
        if needs_parens {
            self.write("(");
        }
        self.print_expression(left, prec, ExprFlags::empty())?;
        let token = operators::logical_operator_token(operator);
        if self.options.minify_whitespace {
            if let (Some(prev), Some(lead)) = (self.prev_op, classify_leading_token(token)) {
                if operators::needs_adjacency_space(prev, lead) {
                    self.write(" ");
                }
            }
            self.write(token);
        } else {
            self.write(" ");
            self.write(token);
            self.write(" ");
        }
        self.print_expression(right, prec.operand_floor(Associativity::Left, true), ExprFlags::empty())?;
        if needs_parens {
            self.write(")");
        }
        Ok(())
    }

    fn print_unary(
        &mut self,
        operator: UnaryOperator,
        argument: &Expression,
        parent_prec: Precedence,
        flags: ExprFlags,
    ) -> Result<()> {
        let needs_parens = parent_prec > Precedence::Prefix
            || (flags.contains(ExprFlags::IS_DELETE_TARGET) && operator != UnaryOperator::Delete);
        if needs_parens {
            self.write("(");
        }
        let token = operators::unary_operator_token(operator);
        self.write(token);
        if operators::unary_operator_is_word(operator) {
            self.write(" ");
        } else {
            let tok = match operator {
                UnaryOperator::Plus => OperatorToken::Plus,
                UnaryOperator::Minus => OperatorToken::Minus,
                _ => OperatorToken::Other,
            };
            if let Some(prev) = self.prev_op {
                if operators::needs_adjacency_space(prev, tok) {
                    self.write(" ");
                }
            }
        }
        let child_flags = if operator == UnaryOperator::Delete { ExprFlags::IS_DELETE_TARGET } else { ExprFlags::empty() };
        self.print_expression(argument, Precedence::Prefix, child_flags)?;
        if needs_parens {
            self.write(")");
        }
        Ok(())
    }

    fn print_update(
        &mut self,
        operator: UpdateOperator,
        argument: &Expression,
        prefix: bool,
        parent_prec: Precedence,
    ) -> Result<()> {
        let needs_parens = parent_prec > Precedence::Postfix;
        if needs_parens {
            self.write("(");
        }
        let token = match operator {
            UpdateOperator::Increment => "++",
            UpdateOperator::Decrement => "--",
        };
        if prefix {
            self.write(token);
            self.print_expression(argument, Precedence::Prefix, ExprFlags::empty())?;
        } else {
            self.print_expression(argument, Precedence::Postfix, ExprFlags::empty())?;
            self.write(token);
        }
        if needs_parens {
            self.write(")");
        }
        Ok(())
    }

    fn print_assignment(
        &mut self,
        left: &Expression,
        operator: AssignmentOperator,
        right: &Expression,
        parent_prec: Precedence,
    ) -> Result<()> {
        let needs_parens = parent_prec > Precedence::Assign;
        if needs_parens {
            self.write("(");
        }
        self.print_expression(left, Precedence::Conditional, ExprFlags::empty())?;
        self.write(operators::assignment_operator_token(operator));
        self.print_expression(right, Precedence::Assign, ExprFlags::empty())?;
        if needs_parens {
            self.write(")");
        }
        Ok(())
    }

    /// `result_used` lets a discarded `require("x");` (a side-effect-only
    /// import) skip the ESM/CJS interop wrapper that only exists to shape
    /// the value a caller reads — there's nothing to shape if nobody reads
    /// it, while the choice of *which* require function to call still
    /// matters and is preserved.
    fn print_require(&mut self, record_index: u32, result_used: bool) -> Result<()> {
        let record = self.import_records.get(record_index as usize).ok_or_else(|| {
            PrintError::InvalidImportRecordIndex { index: record_index, len: self.import_records.len() }
        })?;
        if record.internal_source.is_some() {
            return self.print_internal_import_reference(record_index);
        }
        if !result_used {
            let runtime = record.flags.contains(ImportRecordFlags::CALL_RUNTIME_REQUIRE);
            self.write(if runtime { "__require(" } else { "require(" });
            self.print_module_specifier_bare(record_index)?;
            self.write(")");
            return Ok(());
        }
        match crate::generator::imports::lower_require(record) {
            crate::generator::imports::RequireLowering::Bare => {
                self.write("require(");
                self.print_module_specifier_bare(record_index)?;
                self.write(")");
            }
            crate::generator::imports::RequireLowering::RuntimeRequire => {
                self.write("__require(");
                self.print_module_specifier_bare(record_index)?;
                self.write(")");
            }
            crate::generator::imports::RequireLowering::ToEsm => {
                self.write("__toESM(require(");
                self.print_module_specifier_bare(record_index)?;
                self.write("))");
            }
            crate::generator::imports::RequireLowering::ToCommonJs => {
                self.write("__toCommonJS(require(");
                self.print_module_specifier_bare(record_index)?;
                self.write("))");
            }
        }
        Ok(())
    }

    fn print_module_specifier_bare(&mut self, record_index: u32) -> Result<()> {
        let record = self.import_records.get(record_index as usize).ok_or_else(|| {
            PrintError::InvalidImportRecordIndex { index: record_index, len: self.import_records.len() }
        })?;
        self.write(&crate::generator::strings::format_string_literal(
            &record.module_specifier,
            self.options.quote,
            self.options.ascii_only,
        ));
        Ok(())
    }

    /// Builds the reference expression text for a bundled (non-external)
    /// module, resolving the generated wrapper names through
    /// `require_or_import_meta_for_source` (spec §4.4).
    fn internal_import_reference_text(&self, record_index: u32) -> Result<String> {
        let record = self.import_records.get(record_index as usize).ok_or_else(|| {
            PrintError::InvalidImportRecordIndex { index: record_index, len: self.import_records.len() }
        })?;
        let internal = record.internal_source.ok_or_else(|| PrintError::InvariantViolation {
            message: "internal import reference requested for a record with no internal_source".to_string(),
        })?;
        let resolver = self.options.require_or_import_meta_for_source.as_ref().ok_or_else(|| {
            PrintError::InvariantViolation {
                message: "internal import record present but no require_or_import_meta_for_source resolver configured"
                    .to_string(),
            }
        })?;
        let names = (resolver.0)(internal.source_index);
        Ok(match internal.kind {
            InternalModuleKind::CommonJs => format!("{}()", names.require_fn),
            InternalModuleKind::Esm if internal.is_async => {
                format!("{}().then(()=>{})", names.init_fn, names.exports_name)
            }
            InternalModuleKind::Esm => format!("({}(),{})", names.init_fn, names.exports_name),
        })
    }

    fn print_internal_import_reference(&mut self, record_index: u32) -> Result<()> {
        let text = self.internal_import_reference_text(record_index)?;
        self.write(&text);
        Ok(())
    }

    /// Spells a zero-argument thunk, downleveling to a `function` expression
    /// when the target engine lacks arrow functions (spec §4.4's dynamic
    /// `import()` fallback rows).
    fn zero_arg_lambda(&self, body: &str) -> String {
        if self.options.unsupported_features.contains(UnsupportedFeatures::ARROW_FUNCTIONS) {
            format!("function(){{return {body}}}")
        } else {
            format!("()=>{body}")
        }
    }

    fn one_arg_lambda(&self, param: &str, body: &str) -> String {
        if self.options.unsupported_features.contains(UnsupportedFeatures::ARROW_FUNCTIONS) {
            format!("function({param}){{return {body}}}")
        } else {
            format!("{param}=>{body}")
        }
    }

    fn print_import_call(&mut self, record_index: u32, options: Option<&Expression>) -> Result<()> {
        let record = self.import_records.get(record_index as usize).ok_or_else(|| {
            PrintError::InvalidImportRecordIndex { index: record_index, len: self.import_records.len() }
        })?;
        let is_internal = record.internal_source.is_some();
        let lowering = crate::generator::imports::lower_dynamic_import(record, self.options.unsupported_features);
        if let crate::generator::imports::DynamicImportLowering::Native { needs_then_wrapper } = lowering {
            if !is_internal {
                self.write("import(");
                self.print_module_specifier_bare(record_index)?;
                if let Some(opts) = options {
                    self.write(",");
                    self.print_expression(opts, Precedence::Assign, ExprFlags::empty())?;
                }
                self.write(")");
                if needs_then_wrapper {
                    let lambda = self.one_arg_lambda("m", "__toCommonJS(m)");
                    self.write(".then(");
                    self.write(&lambda);
                    self.write(")");
                }
                return Ok(());
            }
        }
        // Either the target engine lacks dynamic import entirely, or this
        // record resolved to a bundled module with no native `import()`
        // form at all — both fall back to the same lazy-promise shape.
        let reference = if is_internal {
            self.internal_import_reference_text(record_index)?
        } else {
            format!(
                "__require({})",
                crate::generator::strings::format_string_literal(
                    &record.module_specifier,
                    self.options.quote,
                    self.options.ascii_only,
                )
            )
        };
        let lambda = self.zero_arg_lambda(&reference);
        self.write("Promise.resolve().then(");
        self.write(&lambda);
        self.write(")");
        Ok(())
    }

    fn print_literal(&mut self, lit: &Literal) -> Result<()> {
        match lit {
            Literal::String(s) => {
                self.write(&crate::generator::strings::format_string_literal(
                    &s.value,
                    self.options.quote,
                    self.options.ascii_only,
                ));
                Ok(())
            }
            Literal::Number(n) => {
                if self.inside_with_scope && n.value.is_nan() {
                    self.write("(0/0)");
                } else if self.inside_with_scope && n.value.is_infinite() {
                    self.write(if n.value > 0.0 { "(1/0)" } else { "(-1/0)" });
                } else {
                    self.write(&crate::generator::numbers::format_number(n.value, self.options.minify_syntax));
                }
                Ok(())
            }
            Literal::BigInt(b) => {
                self.write(&b.value);
                self.write("n");
                Ok(())
            }
            Literal::Boolean(b) => {
                self.write(if b.value { "true" } else { "false" });
                Ok(())
            }
            Literal::Null { .. } => {
                self.write("null");
                Ok(())
            }
            Literal::Undefined { .. } => {
                self.write("void 0");
                Ok(())
            }
            Literal::RegExp(r) => {
                self.write("/");
                self.write(&r.pattern);
                self.write("/");
                self.write(&r.flags);
                Ok(())
            }
        }
    }

    fn print_template_literal(&mut self, t: &TemplateLiteral) -> Result<()> {
        self.write("`");
        for (i, quasi) in t.quasis.iter().enumerate() {
            let raw_or_cooked = quasi.cooked.as_deref().unwrap_or(&quasi.raw);
            self.write(&crate::generator::strings::escape_template_chunk(
                raw_or_cooked,
                self.options.ascii_only,
            ));
            if !quasi.tail {
                if let Some(expr) = t.expressions.get(i) {
                    self.write("${");
                    self.print_expression(expr, Precedence::Sequence, ExprFlags::empty())?;
                    self.write("}");
                }
            }
        }
        self.write("`");
        Ok(())
    }

    fn print_jsx_element(&mut self, el: &JsxElement) -> Result<()> {
        self.write("<");
        self.write(&el.name);
        for attr in &el.attributes {
            self.write(" ");
            self.write(&attr.name);
            if let Some(value) = &attr.value {
                self.write("=");
                match value {
                    JsxAttributeValue::StringLiteral(s) => {
                        self.write(&crate::generator::strings::format_string_literal(
                            s,
                            self.options.quote,
                            self.options.ascii_only,
                        ));
                    }
                    JsxAttributeValue::Expression(expr) => {
                        self.write("{");
                        self.print_expression(expr, Precedence::Assign, ExprFlags::empty())?;
                        self.write("}");
                    }
                    JsxAttributeValue::Spread(expr) => {
                        self.write("{...");
                        self.print_expression(expr, Precedence::Assign, ExprFlags::empty())?;
                        self.write("}");
                    }
                }
            }
        }
        if el.self_closing {
            self.write("/>");
            return Ok(());
        }
        self.write(">");
        for child in &el.children {
            self.print_jsx_child(child)?;
        }
        self.write("</");
        self.write(&el.name);
        self.write(">");
        Ok(())
    }

    fn print_jsx_child(&mut self, child: &JsxChild) -> Result<()> {
        match child {
            JsxChild::Text(text) => {
                self.write(text);
                Ok(())
            }
            JsxChild::Element(el) => self.print_jsx_element(el),
            JsxChild::Fragment(children) => {
                self.write("<>");
                for c in children {
                    self.print_jsx_child(c)?;
                }
                self.write("</>");
                Ok(())
            }
            JsxChild::Expression(expr) => {
                self.write("{");
                self.print_expression(expr, Precedence::Sequence, ExprFlags::empty())?;
                self.write("}");
                Ok(())
            }
        }
    }

    // -----------------------------------------------------------------
    // Low-level output helpers
    // -----------------------------------------------------------------

    fn resolve_name(&self, id: &Identifier) -> String {
        match id.symbol {
            Some(symbol) => {
                let resolved = self.symbols.follow(symbol);
                let name = self.renamer.name_for_symbol(resolved);
                crate::generator::identifiers::format_identifier(name, self.options.ascii_only)
            }
            None => crate::generator::identifiers::format_identifier(&id.name, self.options.ascii_only),
        }
    }

    fn mark_stmt_start(&mut self) {
        self.stmt_start = Some(self.output.len());
    }

    fn write(&mut self, s: &str) {
        if s.is_empty() {
            return;
        }
        trace!(token = s, "write");
        for segment in s.split_inclusive('\n') {
            self.output.push_str(segment);
            if segment.ends_with('\n') {
                self.current_line += 1;
                self.current_line_start_offset = self.output.len();
            }
        }
        self.prev_op = classify_trailing_token(s);
    }

    fn write_indent(&mut self) -> Result<()> {
        if self.options.minify_whitespace || self.indent_level == 0 {
            return Ok(());
        }
        let unit = match self.options.indent {
            IndentStyle::Spaces(n) => " ".repeat(n as usize),
            IndentStyle::Tab => "\t".to_string(),
        };
        self.output.push_str(&unit.repeat(self.indent_level));
        Ok(())
    }

    fn newline(&mut self) {
        if self.options.minify_whitespace {
            return;
        }
        self.write(match self.options.newline {
            crate::generator::NewlineStyle::Lf => "\n",
            crate::generator::NewlineStyle::Crlf => "\r\n",
        });
    }

    fn statement_separator(&mut self) {
        if self.options.minify_whitespace {
            // Statements are already semicolon-terminated; no extra separator.
        } else {
            self.newline();
        }
    }

    fn write_semicolon(&mut self) {
        self.write(";");
        self.maybe_soft_wrap();
    }

    /// Minified output has no newlines to wrap on, so a statement-terminating
    /// semicolon is the one place a bare `\n` is always syntactically safe to
    /// insert (spec §6 `line_limit`). Only active under `minify_whitespace` —
    /// with real indentation in play, lines wrap on their own.
    fn maybe_soft_wrap(&mut self) {
        if !self.options.minify_whitespace {
            return;
        }
        let Some(limit) = self.options.line_limit else { return };
        let column = self.output.len() - self.current_line_start_offset;
        if column >= limit {
            self.output.push('\n');
            self.current_line += 1;
            self.current_line_start_offset = self.output.len();
        }
    }

    fn statement_span(&self, stmt: &Statement) -> Span {
        use Statement::*;
        match stmt {
            VariableDeclaration(d) => d.span,
            FunctionDeclaration(f) => f.span,
            ClassDeclaration(c) => c.span,
            ExpressionStatement { span, .. }
            | BlockStatement { span, .. }
            | EmptyStatement { span }
            | ReturnStatement { span, .. }
            | IfStatement { span, .. }
            | WhileStatement { span, .. }
            | DoWhileStatement { span, .. }
            | ForStatement { span, .. }
            | ForInStatement { span, .. }
            | ForOfStatement { span, .. }
            | SwitchStatement { span, .. }
            | TryStatement { span, .. }
            | ThrowStatement { span, .. }
            | BreakStatement { span, .. }
            | ContinueStatement { span, .. }
            | LabeledStatement { span, .. }
            | WithStatement { span, .. }
            | DebuggerStatement { span }
            | ImportDeclaration { span, .. }
            | ExportNamedDeclaration { span, .. }
            | ExportDefaultDeclaration { span, .. }
            | ExportAllDeclaration { span, .. } => *span,
            CommentStatement(c) => c.span,
        }
    }

    fn record_mapping(&mut self, span: Span) {
        let Some(builder) = self.source_map.as_mut() else { return };
        let (orig_line, orig_col) = resolve_original_position(&self.original_line_offsets, span.start);
        let generated_column = (self.output.len() - self.current_line_start_offset) as u32;
        builder.add_mapping(source_maps::Mapping {
            generated: source_maps::Position { line: self.current_line, column: generated_column },
            original: Some(source_maps::Position { line: orig_line, column: orig_col }),
            source_index: Some(0),
            name_index: None,
        });
    }
}

fn compute_line_offsets(source: &str) -> Vec<u32> {
    let mut offsets = vec![0u32];
    for (i, b) in source.bytes().enumerate() {
        if b == b'\n' {
            offsets.push((i + 1) as u32);
        }
    }
    offsets
}

fn resolve_original_position(offsets: &[u32], byte_offset: u32) -> (u32, u32) {
    if offsets.is_empty() {
        return (0, byte_offset);
    }
    match offsets.binary_search(&byte_offset) {
        Ok(line) => (line as u32, 0),
        Err(insertion) => {
            let line = insertion.saturating_sub(1);
            let line_start = offsets[line];
            (line as u32, byte_offset - line_start)
        }
    }
}

fn classify_trailing_token(s: &str) -> Option<OperatorToken> {
    match s.chars().last()? {
        '+' => Some(OperatorToken::Plus),
        '-' => Some(OperatorToken::Minus),
        '!' => Some(OperatorToken::Exclaim),
        '<' => Some(OperatorToken::LessThan),
        '>' => Some(OperatorToken::GreaterThan),
        _ => Some(OperatorToken::Other),
    }
}

fn classify_leading_token(s: &str) -> Option<OperatorToken> {
    match s.chars().next()? {
        '+' => Some(OperatorToken::Plus),
        '-' => Some(OperatorToken::Minus),
        '!' => Some(OperatorToken::Exclaim),
        '<' => Some(OperatorToken::LessThan),
        '>' => Some(OperatorToken::GreaterThan),
        _ => Some(OperatorToken::Other),
    }
}

/// Extracts the symbol a bare variable reference resolves to, if `expr` is
/// one — the only expression forms `try_inline_enum_member`/
/// `try_inline_const_value` can possibly match against.
fn expression_symbol_ref(expr: &Expression) -> Option<crate::symbols::SymbolRef> {
    match expr {
        Expression::Identifier(id) => id.symbol,
        Expression::ImportIdentifier { symbol, .. } => Some(*symbol),
        _ => None,
    }
}

/// Whether `expr`'s spine reaches an optional `?.`/`?.[`/`?.(` without being
/// interrupted by an intervening explicit parenthesization.
fn is_optional_chain(expr: &Expression) -> bool {
    match expr {
        Expression::CallExpression { callee, optional, .. } => *optional || is_optional_chain(callee),
        Expression::DotExpression { target, optional, .. } => *optional || is_optional_chain(target),
        Expression::IndexExpression { target, optional, .. } => *optional || is_optional_chain(target),
        _ => false,
    }
}

/// Whether an expression statement beginning with `expr` needs wrapping in
/// parentheses to avoid being misparsed as a different statement form (spec
/// §4's four statement-start ambiguity anchors: `{`, `function`, `class`,
/// `let[`).
fn expression_starts_ambiguously(expr: &Expression) -> bool {
    match expr {
        Expression::ObjectExpression { .. } => true,
        Expression::FunctionExpression(_) => true,
        Expression::ClassExpression(_) => true,
        Expression::Identifier(id) if id.name == "let" => false,
        Expression::BinaryExpression { left, .. }
        | Expression::LogicalExpression { left, .. }
        | Expression::AssignmentExpression { left, .. } => expression_starts_ambiguously(left.unwrap_parens()),
        Expression::CallExpression { callee, .. }
        | Expression::DotExpression { target: callee, .. }
        | Expression::IndexExpression { target: callee, .. } => expression_starts_ambiguously(callee.unwrap_parens()),
        Expression::ConditionalExpression { test, .. } => expression_starts_ambiguously(test.unwrap_parens()),
        Expression::SequenceExpression { expressions, .. } => {
            expressions.first().is_some_and(|e| expression_starts_ambiguously(e.unwrap_parens()))
        }
        _ => false,
    }
}

/// Whether a `for-in`/`for-of` head's expression-form init needs wrapping
/// in parens because it leads with a bare `let` or `async` identifier (spec
/// §4's `for_of_init_start` anchor).
fn expression_starts_for_of_ambiguously(expr: &Expression) -> bool {
    match expr {
        Expression::Identifier(id) => id.name == "let" || id.name == "async",
        Expression::BinaryExpression { left, .. }
        | Expression::LogicalExpression { left, .. }
        | Expression::AssignmentExpression { left, .. } => {
            expression_starts_for_of_ambiguously(left.unwrap_parens())
        }
        Expression::CallExpression { callee, .. }
        | Expression::DotExpression { target: callee, .. }
        | Expression::IndexExpression { target: callee, .. } => {
            expression_starts_for_of_ambiguously(callee.unwrap_parens())
        }
        Expression::ConditionalExpression { test, .. } => {
            expression_starts_for_of_ambiguously(test.unwrap_parens())
        }
        Expression::SequenceExpression { expressions, .. } => {
            expressions.first().is_some_and(|e| expression_starts_for_of_ambiguously(e.unwrap_parens()))
        }
        _ => false,
    }
}

fn strings_format_directive(directive: &Directive, options: &GeneratorConfig) -> String {
    crate::generator::strings::format_string_literal(&directive.value, options.quote, options.ascii_only)
}

impl super::legal_comments::LegalCommentCollector {
    fn clone_ordered(&self) -> Vec<String> {
        // Only ever read while the collector is still live (end-of-file
        // trailer rendering happens before `take_legal_comments` drains it).
        self.peek_ordered()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::import_records::ImportRecord;
    use crate::renamer::SimpleRenamer;
    use crate::symbols::SymbolTable;

    fn print_program(program: &Program, options: &GeneratorConfig) -> String {
        let symbols = SymbolTable::new();
        let renamer = SimpleRenamer::new();
        let records: Vec<ImportRecord> = Vec::new();
        let mut printer = Printer::new(options, &symbols, &renamer, &records, None);
        printer.print_program(program).unwrap();
        printer.into_output()
    }

    fn minified() -> GeneratorConfig {
        GeneratorConfig { minify_whitespace: true, minify_syntax: true, ..GeneratorConfig::default() }
    }

    #[test]
    fn prints_empty_program_as_empty_string() {
        let program = Program { body: vec![], source_type: ProgramSourceType::Script, directives: vec![] };
        assert_eq!(print_program(&program, &minified()), "");
    }

    #[test]
    fn prints_simple_variable_declaration() {
        let program = Program {
            body: vec![Statement::VariableDeclaration(VariableDeclaration {
                declarations: vec![VariableDeclarator {
                    id: Pattern::Identifier(Identifier::new("x", Span::DUMMY)),
                    init: Some(Expression::Literal(Literal::Number(NumberLiteral { value: 5.0, span: Span::DUMMY }))),
                    span: Span::DUMMY,
                }],
                kind: VariableDeclarationKind::Let,
                span: Span::DUMMY,
            })],
            source_type: ProgramSourceType::Script,
            directives: vec![],
        };
        assert_eq!(print_program(&program, &minified()), "let x=5;");
    }

    #[test]
    fn wraps_object_literal_expression_statement_in_parens() {
        let program = Program {
            body: vec![Statement::ExpressionStatement {
                expression: Expression::ObjectExpression {
                    properties: vec![],
                    span: Span::DUMMY,
                    close_brace: Span::DUMMY,
                },
                span: Span::DUMMY,
            }],
            source_type: ProgramSourceType::Script,
            directives: vec![],
        };
        assert_eq!(print_program(&program, &minified()), "({});");
    }

    #[test]
    fn parenthesizes_lower_precedence_left_operand() {
        let left = Expression::BinaryExpression {
            left: Box::new(Expression::Identifier(Identifier::new("a", Span::DUMMY))),
            operator: BinaryOperator::Add,
            right: Box::new(Expression::Identifier(Identifier::new("b", Span::DUMMY))),
            span: Span::DUMMY,
        };
        let program = Program {
            body: vec![Statement::ExpressionStatement {
                expression: Expression::BinaryExpression {
                    left: Box::new(left),
                    operator: BinaryOperator::Multiply,
                    right: Box::new(Expression::Identifier(Identifier::new("c", Span::DUMMY))),
                    span: Span::DUMMY,
                },
                span: Span::DUMMY,
            }],
            source_type: ProgramSourceType::Script,
            directives: vec![],
        };
        assert_eq!(print_program(&program, &minified()), "(a+b)*c;");
    }

    #[test]
    fn exponentiation_right_associates_without_parens() {
        let inner = Expression::BinaryExpression {
            left: Box::new(Expression::Identifier(Identifier::new("b", Span::DUMMY))),
            operator: BinaryOperator::Exponentiation,
            right: Box::new(Expression::Identifier(Identifier::new("c", Span::DUMMY))),
            span: Span::DUMMY,
        };
        let program = Program {
            body: vec![Statement::ExpressionStatement {
                expression: Expression::BinaryExpression {
                    left: Box::new(Expression::Identifier(Identifier::new("a", Span::DUMMY))),
                    operator: BinaryOperator::Exponentiation,
                    right: Box::new(inner),
                    span: Span::DUMMY,
                },
                span: Span::DUMMY,
            }],
            source_type: ProgramSourceType::Script,
            directives: vec![],
        };
        assert_eq!(print_program(&program, &minified()), "a**b**c;");
    }

    #[test]
    fn dangling_else_wraps_consequent_if_in_block() {
        let inner_if = Statement::IfStatement {
            test: Expression::Identifier(Identifier::new("b", Span::DUMMY)),
            consequent: Box::new(Statement::EmptyStatement { span: Span::DUMMY }),
            alternate: None,
            span: Span::DUMMY,
        };
        let program = Program {
            body: vec![Statement::IfStatement {
                test: Expression::Identifier(Identifier::new("a", Span::DUMMY)),
                consequent: Box::new(inner_if),
                alternate: Some(Box::new(Statement::EmptyStatement { span: Span::DUMMY })),
                span: Span::DUMMY,
            }],
            source_type: ProgramSourceType::Script,
            directives: vec![],
        };
        let output = print_program(&program, &minified());
        assert!(output.contains("if(a){if(b);}else;"));
    }
}
