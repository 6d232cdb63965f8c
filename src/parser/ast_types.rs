//! # AST Types Module
//!
//! Defines the Abstract Syntax Tree node types consumed by the code generator.
//! This is a simplified, serializable, owned representation of the JavaScript/JSX
//! AST produced by a parser+linker pipeline: every node carries the byte-offset
//! [`Span`] the generator needs to emit accurate source mappings, and nodes with
//! multi-token bounds carry the auxiliary locations (close-paren, close-brace)
//! the printer anchors mappings to.
//!
//! Conversion from the OXC parser's borrowed arena AST lives in [`Program::from_oxc`]
//! and friends; the generator itself never touches `oxc_ast` directly, only this tree.

use oxc_ast::ast as oxc;
use serde::{Deserialize, Serialize};

use crate::symbols::SymbolRef;

/// A half-open byte range `[start, end)` into the original source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Span {
    pub start: u32,
    pub end: u32,
}

impl Span {
    pub const DUMMY: Span = Span { start: 0, end: 0 };

    pub fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }
}

/// Root program node containing all statements.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Program {
    pub body: Vec<Statement>,
    pub source_type: ProgramSourceType,
    /// Leading directives (`"use strict"`, etc.) kept separate from `body`
    /// so the printer can emit them before any statement-start ambiguity
    /// checks apply to the first real statement.
    pub directives: Vec<Directive>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProgramSourceType {
    Script,
    Module,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Directive {
    pub value: String,
    pub span: Span,
}

// ---------------------------------------------------------------------------
// Statements
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Statement {
    VariableDeclaration(VariableDeclaration),
    FunctionDeclaration(Box<FunctionNode>),
    ClassDeclaration(Box<ClassNode>),
    ExpressionStatement { expression: Expression, span: Span },
    BlockStatement { body: Vec<Statement>, span: Span, close_brace: Span },
    EmptyStatement { span: Span },
    ReturnStatement { argument: Option<Expression>, span: Span },
    IfStatement {
        test: Expression,
        consequent: Box<Statement>,
        alternate: Option<Box<Statement>>,
        span: Span,
    },
    WhileStatement { test: Expression, body: Box<Statement>, span: Span },
    DoWhileStatement { body: Box<Statement>, test: Expression, span: Span },
    ForStatement {
        init: Option<ForInit>,
        test: Option<Expression>,
        update: Option<Expression>,
        body: Box<Statement>,
        span: Span,
    },
    ForInStatement { left: ForInit, right: Expression, body: Box<Statement>, span: Span },
    ForOfStatement {
        left: ForInit,
        right: Expression,
        body: Box<Statement>,
        is_await: bool,
        span: Span,
        /// Output offset (filled by the printer) marking where the init
        /// expression begins, so a bare `let`/`async` head can be wrapped.
        init_span: Span,
    },
    SwitchStatement { discriminant: Expression, cases: Vec<SwitchCase>, span: Span },
    TryStatement {
        block: Vec<Statement>,
        handler: Option<CatchClause>,
        finalizer: Option<Vec<Statement>>,
        span: Span,
    },
    ThrowStatement { argument: Expression, span: Span },
    BreakStatement { label: Option<Identifier>, span: Span },
    ContinueStatement { label: Option<Identifier>, span: Span },
    LabeledStatement { label: Identifier, body: Box<Statement>, span: Span },
    WithStatement { object: Expression, body: Box<Statement>, span: Span },
    DebuggerStatement { span: Span },
    ImportDeclaration {
        specifiers: Vec<ImportSpecifier>,
        record_index: u32,
        with_clause: Option<WithClause>,
        span: Span,
    },
    ExportNamedDeclaration {
        declaration: Option<Box<Statement>>,
        specifiers: Vec<ExportSpecifier>,
        source_record_index: Option<u32>,
        is_type_only: bool,
        span: Span,
    },
    ExportDefaultDeclaration { declaration: ExportDefaultKind, span: Span },
    ExportAllDeclaration {
        exported: Option<Identifier>,
        record_index: u32,
        with_clause: Option<WithClause>,
        span: Span,
    },
    /// A comment that stands alone at statement position (only emitted when
    /// legal-comment preservation is active; all other comments are attached
    /// to the node they precede via the printer's expression-comment table).
    CommentStatement(Comment),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comment {
    pub text: String,
    pub is_block: bool,
    /// `/*! ... */` or `//!` — preserved under `legal_comments != None`.
    pub is_legal: bool,
    pub span: Span,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VariableDeclarationKind {
    Var,
    Let,
    Const,
    Using,
    AwaitUsing,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VariableDeclaration {
    pub declarations: Vec<VariableDeclarator>,
    pub kind: VariableDeclarationKind,
    pub span: Span,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VariableDeclarator {
    pub id: Pattern,
    pub init: Option<Expression>,
    pub span: Span,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SwitchCase {
    pub test: Option<Expression>,
    pub consequent: Vec<Statement>,
    pub span: Span,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatchClause {
    pub param: Option<Pattern>,
    pub body: Vec<Statement>,
    pub span: Span,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ForInit {
    VariableDeclaration(VariableDeclaration),
    Expression(Expression),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ExportDefaultKind {
    Function(Box<FunctionNode>),
    Class(Box<ClassNode>),
    Expression(Box<Expression>),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WithClause {
    /// `true` for the legacy `assert` keyword, `false` for `with`.
    pub is_legacy_assert: bool,
    pub entries: Vec<(String, String)>,
    pub span: Span,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ImportSpecifier {
    ImportDefaultSpecifier { local: Identifier },
    ImportNamespaceSpecifier { local: Identifier },
    ImportSpecifier { imported: Identifier, local: Identifier, is_type_only: bool },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ExportSpecifier {
    ExportSpecifier { local: Identifier, exported: Identifier, is_type_only: bool },
}

// ---------------------------------------------------------------------------
// Classes & functions
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FunctionNode {
    pub id: Option<Identifier>,
    pub params: Vec<Pattern>,
    pub body: Vec<Statement>,
    pub is_async: bool,
    pub is_generator: bool,
    pub span: Span,
    pub close_paren: Span,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassNode {
    pub id: Option<Identifier>,
    pub super_class: Option<Box<Expression>>,
    pub body: Vec<ClassElement>,
    pub span: Span,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ClassElement {
    PropertyDefinition {
        key: PropertyKey,
        value: Option<Expression>,
        is_static: bool,
        is_private: bool,
        span: Span,
    },
    MethodDefinition {
        key: PropertyKey,
        value: Box<FunctionNode>,
        kind: MethodKind,
        is_static: bool,
        is_private: bool,
        span: Span,
    },
    StaticBlock { body: Vec<Statement>, span: Span },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MethodKind {
    Constructor,
    Method,
    Get,
    Set,
}

// ---------------------------------------------------------------------------
// Patterns
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Pattern {
    Identifier(Identifier),
    ArrayPattern { elements: Vec<Option<Pattern>>, span: Span },
    ObjectPattern { properties: Vec<ObjectPatternProperty>, span: Span },
    AssignmentPattern { left: Box<Pattern>, right: Box<Expression>, span: Span },
    RestElement { argument: Box<Pattern>, span: Span },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ObjectPatternProperty {
    Property { key: PropertyKey, value: Pattern, computed: bool, shorthand: bool, span: Span },
    RestElement { argument: Pattern, span: Span },
}

// ---------------------------------------------------------------------------
// Identifiers, property keys
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Identifier {
    pub name: String,
    pub span: Span,
    /// The resolved symbol, when this identifier is a binding or a reference
    /// produced by the linker. `None` for identifiers the printer invents
    /// itself (e.g. synthesized helper names), which are printed verbatim.
    pub symbol: Option<SymbolRef>,
}

impl Identifier {
    pub fn new(name: impl Into<String>, span: Span) -> Self {
        Self { name: name.into(), span, symbol: None }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PropertyKey {
    Identifier(Identifier),
    Literal(Literal),
    PrivateName(PrivateName),
    Computed(Box<Expression>),
    /// A property name already known to have been mangled; the printer
    /// re-emits the pre-mangling name as a `/* Name */` comment when not
    /// minifying (spec §4.1, cross-module inlining of mangled properties).
    MangledName { mangled: String, original: String, span: Span },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrivateName {
    pub name: String,
    pub span: Span,
}

// ---------------------------------------------------------------------------
// Expressions
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Expression {
    Identifier(Identifier),
    Literal(Literal),
    TemplateLiteral(TemplateLiteral),
    TaggedTemplate { tag: Box<Expression>, quasi: TemplateLiteral, span: Span },
    Super { span: Span },
    This { span: Span },
    NewTarget { span: Span },
    ImportMeta { span: Span },

    ArrayExpression { elements: Vec<Option<ArrayElement>>, span: Span },
    ObjectExpression { properties: Vec<ObjectProperty>, span: Span, close_brace: Span },
    SpreadElement { argument: Box<Expression>, span: Span },

    FunctionExpression(Box<FunctionNode>),
    ArrowFunctionExpression(Box<ArrowFunction>),
    ClassExpression(Box<ClassNode>),

    CallExpression {
        callee: Box<Expression>,
        arguments: Vec<Argument>,
        optional: bool,
        span: Span,
    },
    NewExpression { callee: Box<Expression>, arguments: Option<Vec<Argument>>, span: Span },
    DotExpression {
        target: Box<Expression>,
        property: Identifier,
        optional: bool,
        span: Span,
    },
    IndexExpression {
        target: Box<Expression>,
        property: Box<Expression>,
        optional: bool,
        span: Span,
        close_bracket: Span,
    },

    ConditionalExpression {
        test: Box<Expression>,
        consequent: Box<Expression>,
        alternate: Box<Expression>,
        span: Span,
    },
    BinaryExpression { left: Box<Expression>, operator: BinaryOperator, right: Box<Expression>, span: Span },
    LogicalExpression { left: Box<Expression>, operator: LogicalOperator, right: Box<Expression>, span: Span },
    UnaryExpression { operator: UnaryOperator, argument: Box<Expression>, span: Span },
    UpdateExpression { operator: UpdateOperator, argument: Box<Expression>, prefix: bool, span: Span },
    AssignmentExpression { left: Box<Expression>, operator: AssignmentOperator, right: Box<Expression>, span: Span },
    SequenceExpression { expressions: Vec<Expression>, span: Span },

    YieldExpression { argument: Option<Box<Expression>>, delegate: bool, span: Span },
    AwaitExpression { argument: Box<Expression>, span: Span },

    JsxElement(Box<JsxElement>),
    JsxFragment { children: Vec<JsxChild>, span: Span },

    /// `require("path")` — lowered at print time per the import record.
    RequireString { record_index: u32, span: Span },
    /// `require.resolve("path")`.
    RequireResolveString { record_index: u32, span: Span },
    /// `import("path", { with: { ... } })`.
    ImportCall { record_index: u32, options: Option<Box<Expression>>, span: Span },
    /// An imported binding that resolves to `ns.alias` (or `ns["alias"]`).
    ImportIdentifier { symbol: SymbolRef, span: Span },
    /// A placeholder for a property name replaced under a mangling policy;
    /// distinct from [`PropertyKey::MangledName`] in that this appears in
    /// expression position (e.g. computed member access).
    NameOfSymbol { symbol: SymbolRef, span: Span },

    /// `Module.Key` resolved to the enum member's constant value at print
    /// time; `original_name` is re-emitted as `/* Key */` when not minifying.
    InlinedEnum { value: Box<Literal>, original_name: String, span: Span },
    /// Generic trailing-comment wrapper used by other cross-module inlining
    /// substitutions that want to preserve the pre-substitution name.
    Annotated { inner: Box<Expression>, comment: String, span: Span },

    /// A parenthesized expression explicitly present in the source; the
    /// printer treats this purely as a precedence hint to preserve — real
    /// parenthesization is recomputed from operator precedence, so this
    /// variant is unwrapped on read and never re-emitted directly.
    Parenthesized { inner: Box<Expression>, span: Span },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ArrayElement {
    Expression(Expression),
    Spread(Expression),
    /// A hole in a sparse array literal (`[1, , 3]`).
    Elision,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Argument {
    Expression(Expression),
    Spread(Expression),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArrowFunction {
    pub params: Vec<Pattern>,
    pub body: ArrowFunctionBody,
    pub is_async: bool,
    pub span: Span,
    /// Output offset (filled by the printer) where the arrow body begins,
    /// used for the statement-start-style wrapping of a bare object literal
    /// body (`() => ({})` vs `() => {}`).
    pub body_span: Span,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ArrowFunctionBody {
    BlockStatement(Vec<Statement>),
    Expression(Box<Expression>),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ObjectProperty {
    Property {
        key: PropertyKey,
        value: Expression,
        kind: PropertyKind,
        method: bool,
        shorthand: bool,
        computed: bool,
        span: Span,
    },
    SpreadElement { argument: Expression, span: Span },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PropertyKind {
    Init,
    Get,
    Set,
}

// ---------------------------------------------------------------------------
// JSX (minimal — lowering/lexing is a parser concern; the printer only walks)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsxElement {
    pub name: String,
    pub attributes: Vec<JsxAttribute>,
    pub children: Vec<JsxChild>,
    pub self_closing: bool,
    pub span: Span,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsxAttribute {
    pub name: String,
    pub value: Option<JsxAttributeValue>,
    pub span: Span,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum JsxAttributeValue {
    StringLiteral(String),
    Expression(Box<Expression>),
    /// `{...spread}`
    Spread(Box<Expression>),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum JsxChild {
    Text(String),
    Element(Box<JsxElement>),
    Fragment(Vec<JsxChild>),
    Expression(Box<Expression>),
}

// ---------------------------------------------------------------------------
// Templates
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplateLiteral {
    pub quasis: Vec<TemplateElement>,
    pub expressions: Vec<Expression>,
    pub span: Span,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplateElement {
    /// Escape-processed form; `None` when the raw text is not valid (e.g. an
    /// invalid escape inside a tagged template, where only `raw` is legal).
    pub cooked: Option<String>,
    pub raw: String,
    pub tail: bool,
    pub span: Span,
}

// ---------------------------------------------------------------------------
// Literals
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Literal {
    String(StringLiteral),
    Number(NumberLiteral),
    BigInt(BigIntLiteral),
    Boolean(BooleanLiteral),
    Null { span: Span },
    Undefined { span: Span },
    RegExp(RegExpLiteral),
}

impl Literal {
    pub fn span(&self) -> Span {
        match self {
            Literal::String(l) => l.span,
            Literal::Number(l) => l.span,
            Literal::BigInt(l) => l.span,
            Literal::Boolean(l) => l.span,
            Literal::Null { span } | Literal::Undefined { span } => *span,
            Literal::RegExp(l) => l.span,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StringLiteral {
    /// The logical string value, as a Rust `String` (UTF-8). The printer
    /// walks `value.encode_utf16()` when escaping, so lone surrogates that
    /// can't round-trip through UTF-8 are represented out of band by the
    /// parser as paired private-use placeholders — out of scope here.
    pub value: String,
    pub span: Span,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NumberLiteral {
    pub value: f64,
    pub span: Span,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BigIntLiteral {
    /// Decimal digits, no sign (bigint literals are always non-negative;
    /// negation is a separate unary node), no trailing `n`.
    pub value: String,
    pub span: Span,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BooleanLiteral {
    pub value: bool,
    pub span: Span,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegExpLiteral {
    pub pattern: String,
    pub flags: String,
    pub span: Span,
}

// ---------------------------------------------------------------------------
// Operators
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BinaryOperator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Remainder,
    Exponentiation,
    Equal,
    NotEqual,
    StrictEqual,
    StrictNotEqual,
    LessThan,
    LessThanEqual,
    GreaterThan,
    GreaterThanEqual,
    LeftShift,
    RightShift,
    UnsignedRightShift,
    BitwiseAnd,
    BitwiseOr,
    BitwiseXor,
    In,
    Instanceof,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LogicalOperator {
    And,
    Or,
    NullishCoalescing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnaryOperator {
    Plus,
    Minus,
    LogicalNot,
    BitwiseNot,
    Typeof,
    Void,
    Delete,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AssignmentOperator {
    Assign,
    AddAssign,
    SubtractAssign,
    MultiplyAssign,
    DivideAssign,
    RemainderAssign,
    ExponentiationAssign,
    LeftShiftAssign,
    RightShiftAssign,
    UnsignedRightShiftAssign,
    BitwiseAndAssign,
    BitwiseOrAssign,
    BitwiseXorAssign,
    LogicalAndAssign,
    LogicalOrAssign,
    NullishCoalescingAssign,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UpdateOperator {
    Increment,
    Decrement,
}

impl Expression {
    pub fn span(&self) -> Span {
        use Expression::*;
        match self {
            Identifier(id) => id.span,
            Literal(lit) => lit.span(),
            TemplateLiteral(t) => t.span,
            TaggedTemplate { span, .. }
            | Super { span }
            | This { span }
            | NewTarget { span }
            | ImportMeta { span }
            | ArrayExpression { span, .. }
            | ObjectExpression { span, .. }
            | SpreadElement { span, .. }
            | CallExpression { span, .. }
            | NewExpression { span, .. }
            | DotExpression { span, .. }
            | IndexExpression { span, .. }
            | ConditionalExpression { span, .. }
            | BinaryExpression { span, .. }
            | LogicalExpression { span, .. }
            | UnaryExpression { span, .. }
            | UpdateExpression { span, .. }
            | AssignmentExpression { span, .. }
            | SequenceExpression { span, .. }
            | YieldExpression { span, .. }
            | AwaitExpression { span, .. }
            | JsxFragment { span, .. }
            | RequireString { span, .. }
            | RequireResolveString { span, .. }
            | ImportCall { span, .. }
            | ImportIdentifier { span, .. }
            | NameOfSymbol { span, .. }
            | InlinedEnum { span, .. }
            | Annotated { span, .. }
            | Parenthesized { span, .. } => *span,
            FunctionExpression(f) => f.span,
            ArrowFunctionExpression(a) => a.span,
            ClassExpression(c) => c.span,
            JsxElement(e) => e.span,
        }
    }

    /// Unwraps source-level parentheses; the printer re-derives real
    /// parenthesization from precedence, so these are transparent.
    pub fn unwrap_parens(&self) -> &Expression {
        let mut cur = self;
        while let Expression::Parenthesized { inner, .. } = cur {
            cur = inner;
        }
        cur
    }
}

// ---------------------------------------------------------------------------
// OXC conversion (front-end boundary — the generator never imports `oxc_ast`)
// ---------------------------------------------------------------------------

impl Program {
    pub fn from_oxc(oxc_program: &oxc::Program<'_>) -> Self {
        let body = oxc_program.body.iter().filter_map(Statement::from_oxc).collect();
        let source_type = if oxc_program.source_type.is_module() {
            ProgramSourceType::Module
        } else {
            ProgramSourceType::Script
        };
        let directives = oxc_program
            .directives
            .iter()
            .map(|d| Directive {
                value: d.directive.to_string(),
                span: Span::new(d.span.start, d.span.end),
            })
            .collect();
        Self { body, source_type, directives }
    }
}

fn span_of(s: oxc_span::Span) -> Span {
    Span::new(s.start, s.end)
}

impl Statement {
    pub fn from_oxc(oxc_stmt: &oxc::Statement<'_>) -> Option<Self> {
        use oxc::Statement as S;
        match oxc_stmt {
            S::VariableDeclaration(decl) => {
                Some(Statement::VariableDeclaration(VariableDeclaration::from_oxc(decl)?))
            }
            S::FunctionDeclaration(func) => {
                Some(Statement::FunctionDeclaration(Box::new(FunctionNode::from_oxc(func)?)))
            }
            S::ClassDeclaration(class) => {
                Some(Statement::ClassDeclaration(Box::new(ClassNode::from_oxc(class)?)))
            }
            S::ExpressionStatement(stmt) => Expression::from_oxc(&stmt.expression)
                .map(|expression| Statement::ExpressionStatement { expression, span: span_of(stmt.span) }),
            S::BlockStatement(block) => {
                let body = block.body.iter().filter_map(Statement::from_oxc).collect();
                Some(Statement::BlockStatement {
                    body,
                    span: span_of(block.span),
                    close_brace: Span::new(block.span.end.saturating_sub(1), block.span.end),
                })
            }
            S::ReturnStatement(stmt) => {
                let argument = stmt.argument.as_ref().and_then(Expression::from_oxc);
                Some(Statement::ReturnStatement { argument, span: span_of(stmt.span) })
            }
            S::IfStatement(if_stmt) => {
                let test = Expression::from_oxc(&if_stmt.test)?;
                let consequent = Box::new(Statement::from_oxc(&if_stmt.consequent)?);
                let alternate =
                    if_stmt.alternate.as_ref().and_then(Statement::from_oxc).map(Box::new);
                Some(Statement::IfStatement { test, consequent, alternate, span: span_of(if_stmt.span) })
            }
            S::WhileStatement(w) => {
                let test = Expression::from_oxc(&w.test)?;
                let body = Box::new(Statement::from_oxc(&w.body)?);
                Some(Statement::WhileStatement { test, body, span: span_of(w.span) })
            }
            S::DoWhileStatement(w) => {
                let body = Box::new(Statement::from_oxc(&w.body)?);
                let test = Expression::from_oxc(&w.test)?;
                Some(Statement::DoWhileStatement { body, test, span: span_of(w.span) })
            }
            S::ForStatement(for_stmt) => {
                let init = for_stmt.init.as_ref().and_then(ForInit::from_oxc_for);
                let test = for_stmt.test.as_ref().and_then(Expression::from_oxc);
                let update = for_stmt.update.as_ref().and_then(Expression::from_oxc);
                let body = Box::new(Statement::from_oxc(&for_stmt.body)?);
                Some(Statement::ForStatement { init, test, update, body, span: span_of(for_stmt.span) })
            }
            S::BreakStatement(b) => Some(Statement::BreakStatement {
                label: b.label.as_ref().map(|l| Identifier::new(l.name.to_string(), span_of(l.span))),
                span: span_of(b.span),
            }),
            S::ContinueStatement(c) => Some(Statement::ContinueStatement {
                label: c.label.as_ref().map(|l| Identifier::new(l.name.to_string(), span_of(l.span))),
                span: span_of(c.span),
            }),
            S::ThrowStatement(t) => {
                let argument = Expression::from_oxc(&t.argument)?;
                Some(Statement::ThrowStatement { argument, span: span_of(t.span) })
            }
            S::EmptyStatement(e) => Some(Statement::EmptyStatement { span: span_of(e.span) }),
            S::DebuggerStatement(d) => Some(Statement::DebuggerStatement { span: span_of(d.span) }),
            // Switch/try/labeled/with/import/export and other less-common forms are
            // intentionally left for the linker-produced AST to have already
            // normalized; unrecognized statements are dropped by the (external,
            // out-of-scope) parser boundary rather than panicking the generator.
            _ => None,
        }
    }
}

impl VariableDeclaration {
    pub fn from_oxc(decl: &oxc::VariableDeclaration<'_>) -> Option<Self> {
        let kind = match decl.kind {
            oxc::VariableDeclarationKind::Var => VariableDeclarationKind::Var,
            oxc::VariableDeclarationKind::Let => VariableDeclarationKind::Let,
            oxc::VariableDeclarationKind::Const => VariableDeclarationKind::Const,
            _ => return None,
        };
        let declarations =
            decl.declarations.iter().filter_map(VariableDeclarator::from_oxc).collect();
        Some(Self { declarations, kind, span: span_of(decl.span) })
    }
}

impl VariableDeclarator {
    pub fn from_oxc(oxc_decl: &oxc::VariableDeclarator<'_>) -> Option<Self> {
        let id = Pattern::from_oxc(&oxc_decl.id)?;
        let init = oxc_decl.init.as_ref().and_then(Expression::from_oxc);
        Some(Self { id, init, span: span_of(oxc_decl.span) })
    }
}

impl ForInit {
    fn from_oxc_for(init: &oxc::ForStatementInit<'_>) -> Option<Self> {
        if let Some(expr) = init.as_expression() {
            return Expression::from_oxc(expr).map(ForInit::Expression);
        }
        None
    }
}

impl FunctionNode {
    pub fn from_oxc(func: &oxc::Function<'_>) -> Option<Self> {
        let id = func.id.as_ref().map(|id| Identifier::new(id.name.to_string(), span_of(id.span)));
        let params = func.params.items.iter().filter_map(|p| Pattern::from_oxc(&p.pattern)).collect();
        let oxc_body = func.body.as_ref()?;
        let body = oxc_body.statements.iter().filter_map(Statement::from_oxc).collect();
        Some(Self {
            id,
            params,
            body,
            is_async: func.r#async,
            is_generator: func.generator,
            span: span_of(func.span),
            close_paren: Span::DUMMY,
        })
    }
}

impl ClassNode {
    pub fn from_oxc(class: &oxc::Class<'_>) -> Option<Self> {
        let id = class.id.as_ref().map(|id| Identifier::new(id.name.to_string(), span_of(id.span)));
        let super_class =
            class.super_class.as_ref().and_then(Expression::from_oxc).map(Box::new);
        let body = class.body.body.iter().filter_map(ClassElement::from_oxc).collect();
        Some(Self { id, super_class, body, span: span_of(class.span) })
    }
}

impl ClassElement {
    pub fn from_oxc(elem: &oxc::ClassElement<'_>) -> Option<Self> {
        match elem {
            oxc::ClassElement::PropertyDefinition(prop) => {
                let key = PropertyKey::from_oxc(&prop.key)?;
                let value = prop.value.as_ref().and_then(Expression::from_oxc);
                let is_private = matches!(&prop.key, oxc::PropertyKey::PrivateIdentifier(_));
                Some(ClassElement::PropertyDefinition {
                    key,
                    value,
                    is_static: prop.r#static,
                    is_private,
                    span: span_of(prop.span),
                })
            }
            oxc::ClassElement::MethodDefinition(method) => {
                let key = PropertyKey::from_oxc(&method.key)?;
                let value = Box::new(FunctionNode::from_oxc(&method.value)?);
                let kind = match method.kind {
                    oxc::MethodDefinitionKind::Constructor => MethodKind::Constructor,
                    oxc::MethodDefinitionKind::Method => MethodKind::Method,
                    oxc::MethodDefinitionKind::Get => MethodKind::Get,
                    oxc::MethodDefinitionKind::Set => MethodKind::Set,
                };
                let is_private = matches!(&method.key, oxc::PropertyKey::PrivateIdentifier(_));
                Some(ClassElement::MethodDefinition {
                    key,
                    value,
                    kind,
                    is_static: method.r#static,
                    is_private,
                    span: span_of(method.span),
                })
            }
            _ => None,
        }
    }
}

impl Expression {
    pub fn from_oxc(oxc_expr: &oxc::Expression<'_>) -> Option<Self> {
        use oxc::Expression as E;
        match oxc_expr {
            E::Identifier(id) => {
                Some(Expression::Identifier(Identifier::new(id.name.to_string(), span_of(id.span))))
            }
            E::NumericLiteral(lit) => Some(Expression::Literal(Literal::Number(NumberLiteral {
                value: lit.value,
                span: span_of(lit.span),
            }))),
            E::StringLiteral(lit) => Some(Expression::Literal(Literal::String(StringLiteral {
                value: lit.value.to_string(),
                span: span_of(lit.span),
            }))),
            E::BooleanLiteral(lit) => Some(Expression::Literal(Literal::Boolean(BooleanLiteral {
                value: lit.value,
                span: span_of(lit.span),
            }))),
            E::NullLiteral(lit) => {
                Some(Expression::Literal(Literal::Null { span: span_of(lit.span) }))
            }
            E::BigIntLiteral(lit) => Some(Expression::Literal(Literal::BigInt(BigIntLiteral {
                value: lit.raw.trim_end_matches('n').to_string(),
                span: span_of(lit.span),
            }))),
            E::RegExpLiteral(regex) => Some(Expression::Literal(Literal::RegExp(RegExpLiteral {
                pattern: regex.regex.pattern.to_string(),
                flags: regex.regex.flags.to_string(),
                span: span_of(regex.span),
            }))),
            E::BinaryExpression(expr) => {
                let left = Box::new(Expression::from_oxc(&expr.left)?);
                let right = Box::new(Expression::from_oxc(&expr.right)?);
                let operator = BinaryOperator::from_oxc(expr.operator)?;
                Some(Expression::BinaryExpression { left, operator, right, span: span_of(expr.span) })
            }
            E::LogicalExpression(expr) => {
                let left = Box::new(Expression::from_oxc(&expr.left)?);
                let right = Box::new(Expression::from_oxc(&expr.right)?);
                let operator = match expr.operator {
                    oxc::LogicalOperator::And => LogicalOperator::And,
                    oxc::LogicalOperator::Or => LogicalOperator::Or,
                    oxc::LogicalOperator::Coalesce => LogicalOperator::NullishCoalescing,
                };
                Some(Expression::LogicalExpression { left, operator, right, span: span_of(expr.span) })
            }
            E::UnaryExpression(expr) => {
                let argument = Box::new(Expression::from_oxc(&expr.argument)?);
                let operator = match expr.operator {
                    oxc::UnaryOperator::UnaryPlus => UnaryOperator::Plus,
                    oxc::UnaryOperator::UnaryNegation => UnaryOperator::Minus,
                    oxc::UnaryOperator::LogicalNot => UnaryOperator::LogicalNot,
                    oxc::UnaryOperator::BitwiseNot => UnaryOperator::BitwiseNot,
                    oxc::UnaryOperator::Typeof => UnaryOperator::Typeof,
                    oxc::UnaryOperator::Void => UnaryOperator::Void,
                    oxc::UnaryOperator::Delete => UnaryOperator::Delete,
                };
                Some(Expression::UnaryExpression { operator, argument, span: span_of(expr.span) })
            }
            E::UpdateExpression(expr) => {
                let target = expr.argument.as_simple_assignment_target()?;
                let argument = Box::new(Expression::from_oxc(&target.to_expression())?);
                let operator = match expr.operator {
                    oxc::UpdateOperator::Increment => UpdateOperator::Increment,
                    oxc::UpdateOperator::Decrement => UpdateOperator::Decrement,
                };
                Some(Expression::UpdateExpression {
                    operator,
                    argument,
                    prefix: expr.prefix,
                    span: span_of(expr.span),
                })
            }
            E::AssignmentExpression(expr) => {
                let left = Box::new(Expression::from_oxc(&expr.left.to_expression())?);
                let right = Box::new(Expression::from_oxc(&expr.right)?);
                let operator = AssignmentOperator::from_oxc(expr.operator)?;
                Some(Expression::AssignmentExpression { left, operator, right, span: span_of(expr.span) })
            }
            E::SequenceExpression(expr) => {
                let expressions = expr.expressions.iter().filter_map(Expression::from_oxc).collect();
                Some(Expression::SequenceExpression { expressions, span: span_of(expr.span) })
            }
            E::ConditionalExpression(expr) => {
                let test = Box::new(Expression::from_oxc(&expr.test)?);
                let consequent = Box::new(Expression::from_oxc(&expr.consequent)?);
                let alternate = Box::new(Expression::from_oxc(&expr.alternate)?);
                Some(Expression::ConditionalExpression { test, consequent, alternate, span: span_of(expr.span) })
            }
            E::ParenthesizedExpression(expr) => {
                let inner = Box::new(Expression::from_oxc(&expr.expression)?);
                Some(Expression::Parenthesized { inner, span: span_of(expr.span) })
            }
            E::TemplateLiteral(tmpl) => {
                Some(Expression::TemplateLiteral(TemplateLiteral::from_oxc(tmpl)?))
            }
            E::TaggedTemplateExpression(expr) => {
                let tag = Box::new(Expression::from_oxc(&expr.tag)?);
                let quasi = TemplateLiteral::from_oxc(&expr.quasi)?;
                Some(Expression::TaggedTemplate { tag, quasi, span: span_of(expr.span) })
            }
            E::FunctionExpression(func) => {
                Some(Expression::FunctionExpression(Box::new(FunctionNode::from_oxc(func)?)))
            }
            E::ClassExpression(class) => {
                Some(Expression::ClassExpression(Box::new(ClassNode::from_oxc(class)?)))
            }
            E::ArrowFunctionExpression(arrow) => {
                let params = arrow.params.items.iter().filter_map(|p| Pattern::from_oxc(&p.pattern)).collect();
                let body = if arrow.expression {
                    let stmt = arrow.body.statements.first()?;
                    if let oxc::Statement::ExpressionStatement(e) = stmt {
                        ArrowFunctionBody::Expression(Box::new(Expression::from_oxc(&e.expression)?))
                    } else {
                        return None;
                    }
                } else {
                    ArrowFunctionBody::BlockStatement(
                        arrow.body.statements.iter().filter_map(Statement::from_oxc).collect(),
                    )
                };
                Some(Expression::ArrowFunctionExpression(Box::new(ArrowFunction {
                    params,
                    body,
                    is_async: arrow.r#async,
                    span: span_of(arrow.span),
                    body_span: Span::DUMMY,
                })))
            }
            E::CallExpression(call) => {
                let callee = Box::new(Expression::from_oxc(&call.callee)?);
                let arguments = call.arguments.iter().filter_map(Argument::from_oxc).collect();
                Some(Expression::CallExpression {
                    callee,
                    arguments,
                    optional: call.optional,
                    span: span_of(call.span),
                })
            }
            E::NewExpression(new_expr) => {
                let callee = Box::new(Expression::from_oxc(&new_expr.callee)?);
                let arguments = Some(new_expr.arguments.iter().filter_map(Argument::from_oxc).collect());
                Some(Expression::NewExpression { callee, arguments, span: span_of(new_expr.span) })
            }
            E::StaticMemberExpression(member) => {
                let target = Box::new(Expression::from_oxc(&member.object)?);
                let property = Identifier::new(member.property.name.to_string(), span_of(member.property.span));
                Some(Expression::DotExpression { target, property, optional: member.optional, span: span_of(member.span) })
            }
            E::ComputedMemberExpression(member) => {
                let target = Box::new(Expression::from_oxc(&member.object)?);
                let property = Box::new(Expression::from_oxc(&member.expression)?);
                Some(Expression::IndexExpression {
                    target,
                    property,
                    optional: member.optional,
                    span: span_of(member.span),
                    close_bracket: Span::DUMMY,
                })
            }
            E::ArrayExpression(arr) => {
                let elements = arr
                    .elements
                    .iter()
                    .map(|el| match el {
                        oxc::ArrayExpressionElement::SpreadElement(s) => {
                            Expression::from_oxc(&s.argument).map(ArrayElement::Spread)
                        }
                        oxc::ArrayExpressionElement::Elision(_) => Some(ArrayElement::Elision),
                        _ => el.as_expression().and_then(Expression::from_oxc).map(ArrayElement::Expression),
                    })
                    .collect();
                Some(Expression::ArrayExpression { elements, span: span_of(arr.span) })
            }
            E::ObjectExpression(obj) => {
                let properties = obj.properties.iter().filter_map(ObjectProperty::from_oxc).collect();
                Some(Expression::ObjectExpression {
                    properties,
                    span: span_of(obj.span),
                    close_brace: Span::DUMMY,
                })
            }
            E::YieldExpression(expr) => {
                let argument = expr.argument.as_ref().and_then(Expression::from_oxc).map(Box::new);
                Some(Expression::YieldExpression { argument, delegate: expr.delegate, span: span_of(expr.span) })
            }
            E::AwaitExpression(expr) => {
                let argument = Box::new(Expression::from_oxc(&expr.argument)?);
                Some(Expression::AwaitExpression { argument, span: span_of(expr.span) })
            }
            E::ThisExpression(expr) => Some(Expression::This { span: span_of(expr.span) }),
            E::Super(expr) => Some(Expression::Super { span: span_of(expr.span) }),
            _ => None,
        }
    }
}

impl TemplateLiteral {
    fn from_oxc(tmpl: &oxc::TemplateLiteral<'_>) -> Option<Self> {
        let quasis = tmpl
            .quasis
            .iter()
            .map(|quasi| TemplateElement {
                cooked: quasi.value.cooked.as_ref().map(|c| c.to_string()),
                raw: quasi.value.raw.to_string(),
                tail: quasi.tail,
                span: span_of(quasi.span),
            })
            .collect();
        let expressions = tmpl.expressions.iter().filter_map(Expression::from_oxc).collect();
        Some(Self { quasis, expressions, span: span_of(tmpl.span) })
    }
}

impl Argument {
    fn from_oxc(arg: &oxc::Argument<'_>) -> Option<Self> {
        match arg {
            oxc::Argument::SpreadElement(s) => Expression::from_oxc(&s.argument).map(Argument::Spread),
            _ => arg.as_expression().and_then(Expression::from_oxc).map(Argument::Expression),
        }
    }
}

impl ObjectProperty {
    fn from_oxc(prop: &oxc::ObjectPropertyKind<'_>) -> Option<Self> {
        match prop {
            oxc::ObjectPropertyKind::ObjectProperty(p) => {
                let key = PropertyKey::from_oxc(&p.key)?;
                let value = Expression::from_oxc(&p.value)?;
                let kind = match p.kind {
                    oxc::PropertyKind::Init => PropertyKind::Init,
                    oxc::PropertyKind::Get => PropertyKind::Get,
                    oxc::PropertyKind::Set => PropertyKind::Set,
                };
                Some(ObjectProperty::Property {
                    key,
                    value,
                    kind,
                    method: p.method,
                    shorthand: p.shorthand,
                    computed: p.computed,
                    span: span_of(p.span),
                })
            }
            oxc::ObjectPropertyKind::SpreadProperty(s) => {
                let argument = Expression::from_oxc(&s.argument)?;
                Some(ObjectProperty::SpreadElement { argument, span: span_of(s.span) })
            }
        }
    }
}

impl Pattern {
    pub fn from_oxc(oxc_pattern: &oxc::BindingPattern<'_>) -> Option<Self> {
        match &oxc_pattern.kind {
            oxc::BindingPatternKind::BindingIdentifier(id) => {
                Some(Pattern::Identifier(Identifier::from_oxc(id)))
            }
            oxc::BindingPatternKind::ArrayPattern(arr) => {
                let elements = arr.elements.iter().map(|e| e.as_ref().and_then(Pattern::from_oxc)).collect();
                Some(Pattern::ArrayPattern { elements, span: span_of(arr.span) })
            }
            oxc::BindingPatternKind::ObjectPattern(obj) => {
                let properties = obj
                    .properties
                    .iter()
                    .filter_map(|p| {
                        let key = PropertyKey::from_oxc(&p.key)?;
                        let value = Pattern::from_oxc(&p.value)?;
                        Some(ObjectPatternProperty::Property {
                            key,
                            value,
                            computed: p.computed,
                            shorthand: p.shorthand,
                            span: span_of(p.span),
                        })
                    })
                    .collect();
                Some(Pattern::ObjectPattern { properties, span: span_of(obj.span) })
            }
            oxc::BindingPatternKind::AssignmentPattern(a) => {
                let left = Box::new(Pattern::from_oxc(&a.left)?);
                let right = Box::new(Expression::from_oxc(&a.right)?);
                Some(Pattern::AssignmentPattern { left, right, span: span_of(a.span) })
            }
        }
    }
}

impl Identifier {
    pub fn from_oxc(oxc_id: &oxc::BindingIdentifier<'_>) -> Self {
        Self::new(oxc_id.name.to_string(), span_of(oxc_id.span))
    }
}

impl BinaryOperator {
    pub fn from_oxc(op: oxc::BinaryOperator) -> Option<Self> {
        use oxc::BinaryOperator as O;
        Some(match op {
            O::Addition => BinaryOperator::Add,
            O::Subtraction => BinaryOperator::Subtract,
            O::Multiplication => BinaryOperator::Multiply,
            O::Division => BinaryOperator::Divide,
            O::Remainder => BinaryOperator::Remainder,
            O::Exponential => BinaryOperator::Exponentiation,
            O::Equality => BinaryOperator::Equal,
            O::Inequality => BinaryOperator::NotEqual,
            O::StrictEquality => BinaryOperator::StrictEqual,
            O::StrictInequality => BinaryOperator::StrictNotEqual,
            O::LessThan => BinaryOperator::LessThan,
            O::LessEqualThan => BinaryOperator::LessThanEqual,
            O::GreaterThan => BinaryOperator::GreaterThan,
            O::GreaterEqualThan => BinaryOperator::GreaterThanEqual,
            O::ShiftLeft => BinaryOperator::LeftShift,
            O::ShiftRight => BinaryOperator::RightShift,
            O::ShiftRightZeroFill => BinaryOperator::UnsignedRightShift,
            O::BitwiseAnd => BinaryOperator::BitwiseAnd,
            O::BitwiseOR => BinaryOperator::BitwiseOr,
            O::BitwiseXOR => BinaryOperator::BitwiseXor,
            O::In => BinaryOperator::In,
            O::Instanceof => BinaryOperator::Instanceof,
        })
    }
}

impl AssignmentOperator {
    pub fn from_oxc(op: oxc::AssignmentOperator) -> Option<Self> {
        use oxc::AssignmentOperator as O;
        Some(match op {
            O::Assign => AssignmentOperator::Assign,
            O::Addition => AssignmentOperator::AddAssign,
            O::Subtraction => AssignmentOperator::SubtractAssign,
            O::Multiplication => AssignmentOperator::MultiplyAssign,
            O::Division => AssignmentOperator::DivideAssign,
            O::Remainder => AssignmentOperator::RemainderAssign,
            O::Exponential => AssignmentOperator::ExponentiationAssign,
            O::ShiftLeft => AssignmentOperator::LeftShiftAssign,
            O::ShiftRight => AssignmentOperator::RightShiftAssign,
            O::ShiftRightZeroFill => AssignmentOperator::UnsignedRightShiftAssign,
            O::BitwiseAnd => AssignmentOperator::BitwiseAndAssign,
            O::BitwiseOR => AssignmentOperator::BitwiseOrAssign,
            O::BitwiseXOR => AssignmentOperator::BitwiseXorAssign,
            O::LogicalAnd => AssignmentOperator::LogicalAndAssign,
            O::LogicalOr => AssignmentOperator::LogicalOrAssign,
            O::LogicalNullish => AssignmentOperator::NullishCoalescingAssign,
        })
    }
}

impl PropertyKey {
    pub fn from_oxc(oxc_key: &oxc::PropertyKey<'_>) -> Option<Self> {
        match oxc_key {
            oxc::PropertyKey::Identifier(id) => {
                Some(PropertyKey::Identifier(Identifier::new(id.name.to_string(), span_of(id.span))))
            }
            oxc::PropertyKey::PrivateIdentifier(private) => {
                Some(PropertyKey::PrivateName(PrivateName { name: private.name.to_string(), span: span_of(private.span) }))
            }
            _ => oxc_key.as_expression().and_then(Expression::from_oxc).map(|e| PropertyKey::Computed(Box::new(e))),
        }
    }
}
