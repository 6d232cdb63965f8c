//! # Code Generator Module
//!
//! Lowers a fully-resolved JS/JSX AST into text, optionally emitting
//! source-map mappings and extracted legal comments. This module owns the
//! configuration surface ([`GeneratorConfig`]), the closed error taxonomy
//! ([`PrintError`]), and the `print` entry point; the actual walking logic
//! lives in [`printer`] and its sibling leaf-formatter modules.
//!
//! ## Components
//!
//! - **Printer**: AST traversal and token emission.
//! - **Numbers / Strings / Identifiers**: leaf formatters for literal text.
//! - **Operators**: precedence/associativity model and adjacency rules.
//! - **Late rewrites**: minify-time constant folding and call-site inlining.
//! - **Imports**: the `require`/`import` lowering policy table.
//! - **Source maps**: VLQ mapping chunk assembly.
//! - **Legal comments**: `/*! ... */` extraction and placement.
//!
//! ## Safety guarantees
//!
//! - **Semantic preservation**: output must evaluate identically to input.
//! - **ASI safety**: never lets automatic semicolon insertion change meaning.
//! - **Precedence correctness**: parenthesizes exactly where required, no more.
//! - **Determinism**: same input + options always produce the same bytes.

use std::collections::HashMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::generator::imports::SourceWrapperNames;
use crate::import_records::ImportRecord;
use crate::parser::ast_types::{Literal, NumberLiteral, Program, Span, StringLiteral};
use crate::renamer::Renamer;
use crate::symbols::{SymbolRef, SymbolTable};

pub mod identifiers;
pub mod imports;
pub mod late_rewrites;
pub mod legal_comments;
pub mod numbers;
pub mod operators;
pub mod printer;
pub mod source_maps;
pub mod strings;

/// Generator configuration for output formatting and optimization, per the
/// options table in spec §6.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Remove insignificant whitespace (spaces, newlines, indentation).
    pub minify_whitespace: bool,
    /// Apply the local syntactic rewrites in spec §4.1/§4.2 (constant
    /// folding, IIFE collapsing, if/ternary collapsing, statement merging).
    pub minify_syntax: bool,
    /// Escape every non-ASCII code point instead of emitting it literally.
    pub ascii_only: bool,
    /// Soft line-wrap width; `None` means unbounded (spec §6 `line_limit`).
    pub line_limit: Option<usize>,
    /// Indentation unit used when `minify_whitespace` is false.
    pub indent: IndentStyle,
    /// Whether the printer should record source-map mapping entries.
    pub add_source_mappings: bool,
    /// Whether `PrintResult::metafile_imports` should be populated.
    pub needs_metafile: bool,
    /// Legal-comment (`/*! */`, `//!`) preservation policy.
    pub legal_comments: LegalCommentsMode,
    /// Target engines this output must remain syntactically valid for;
    /// drives operator-adjacency and feature-downleveling decisions that
    /// the (external) transform step didn't already perform.
    pub unsupported_features: UnsupportedFeatures,
    /// Whole-program output shape (script vs ESM vs CJS wrapper).
    pub output_format: OutputFormat,
    /// Quote character preference used as a tiebreaker when cost is equal.
    pub quote: QuoteStrategy,
    /// Newline style for emitted line breaks.
    pub newline: NewlineStyle,
    /// Per-symbol enum-member tables for cross-module `Module.Key` inlining
    /// (spec §4.1): `ts_enums[module_symbol][member_name]` is the constant
    /// value a `Module.Key` dot-access should be rewritten to.
    #[serde(skip)]
    pub ts_enums: HashMap<SymbolRef, HashMap<String, ConstValue>>,
    /// Per-symbol constant values for plain (non-enum) cross-module constant
    /// inlining, keyed the same way as `ts_enums` but one value per symbol
    /// rather than a member table.
    #[serde(skip)]
    pub const_values: HashMap<SymbolRef, ConstValue>,
    /// Property-mangling table: original property name -> mangled spelling,
    /// consulted when printing `Expression::NameOfSymbol` in computed member
    /// position (spec §4.1 "mangled properties").
    #[serde(skip)]
    pub mangled_props: HashMap<String, String>,
    /// Resolves a bundled (non-external) source index to the generated
    /// wrapper names the linker assigned it, used to print references to
    /// `ImportRecord`s carrying an `internal_source` (spec §4.4). `None`
    /// means the program never references a bundled module.
    #[serde(skip)]
    pub require_or_import_meta_for_source: Option<SourceWrapperResolver>,
}

/// A statically known value a cross-module inlining pass resolved a symbol
/// reference to (spec §4.1).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ConstValue {
    Number(f64),
    String(String),
}

impl ConstValue {
    pub fn to_literal(&self, span: Span) -> Literal {
        match self {
            ConstValue::Number(value) => Literal::Number(NumberLiteral { value: *value, span }),
            ConstValue::String(value) => Literal::String(StringLiteral { value: value.clone(), span }),
        }
    }
}

/// Callback form of [`SourceWrapperNames`] resolution. Wrapped so
/// `GeneratorConfig` can still derive `Debug`/`Clone` despite holding a
/// trait object — `dyn Fn` has neither impl on its own.
#[derive(Clone)]
pub struct SourceWrapperResolver(pub Arc<dyn Fn(u32) -> SourceWrapperNames + Send + Sync>);

impl std::fmt::Debug for SourceWrapperResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("SourceWrapperResolver(..)")
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub enum IndentStyle {
    Spaces(u8),
    Tab,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LegalCommentsMode {
    None,
    Inline,
    EndOfFile,
    /// Extracted to a side file, with a `/*! For license information please
    /// see FILE */` reference comment left in the main output.
    Linked,
    /// Extracted to a side file with no reference comment left behind.
    External,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub enum OutputFormat {
    /// Bare top-level statements (a `<script>` or CJS entry point).
    Preserve,
    /// Wrapped as an IIFE.
    Iife,
    /// Emitted as CommonJS (`module.exports`/`require`).
    CommonJs,
    /// Emitted as an ES module (`import`/`export`).
    Esm,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuoteStrategy {
    Auto,
    Single,
    Double,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NewlineStyle {
    Lf,
    Crlf,
}

bitflags::bitflags! {
    /// Which syntax forms the target engine(s) lack, forcing the printer to
    /// avoid them even when `minify_syntax` would otherwise prefer them
    /// (spec §1 "configurable target engines").
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
    pub struct UnsupportedFeatures: u32 {
        const NULLISH_COALESCING = 1 << 0;
        const OPTIONAL_CHAIN     = 1 << 1;
        const EXPONENT_OPERATOR  = 1 << 2;
        const ARROW_FUNCTIONS    = 1 << 3;
        const ASYNC_AWAIT        = 1 << 4;
        const BIGINT             = 1 << 5;
        const OBJECT_SPREAD      = 1 << 6;
        const DYNAMIC_IMPORT     = 1 << 7;
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            minify_whitespace: false,
            minify_syntax: false,
            ascii_only: false,
            line_limit: None,
            indent: IndentStyle::Spaces(2),
            add_source_mappings: false,
            needs_metafile: false,
            legal_comments: LegalCommentsMode::Inline,
            unsupported_features: UnsupportedFeatures::empty(),
            output_format: OutputFormat::Preserve,
            quote: QuoteStrategy::Auto,
            newline: NewlineStyle::Lf,
            ts_enums: HashMap::new(),
            const_values: HashMap::new(),
            mangled_props: HashMap::new(),
            require_or_import_meta_for_source: None,
        }
    }
}

impl GeneratorConfig {
    /// Builds a config from the demonstration CLI's flags (spec §1: CLI
    /// argument parsing itself is out of scope, this is just the seam).
    pub fn from_cli_args(minify: bool, ascii_only: bool, source_maps: bool) -> Self {
        Self {
            minify_whitespace: minify,
            minify_syntax: minify,
            ascii_only,
            add_source_mappings: source_maps,
            ..Self::default()
        }
    }
}

/// Result of a successful print (spec §6 `PrintResult`).
#[derive(Debug, Clone)]
pub struct PrintResult {
    pub code: String,
    pub source_map: Option<source_maps::SourceMap>,
    /// Extracted `/*! ... */` / `//!` text, already deduplicated, in the
    /// order their originating nodes were first printed.
    pub legal_comments: Vec<String>,
    /// One JSON snippet per import record, only populated when
    /// `needs_metafile` is set.
    pub metafile_imports: Vec<serde_json::Value>,
    pub diagnostics: GeneratorDiagnostics,
}

/// Ambient telemetry carried from the teacher's `GenerationResult`, useful
/// but not itself a spec requirement.
#[derive(Debug, Clone, Default)]
pub struct GeneratorDiagnostics {
    pub original_size: usize,
    pub generated_size: usize,
    pub mappings_emitted: usize,
    pub warning_count: usize,
    pub warnings: Vec<String>,
}

/// The closed, fatal-only error taxonomy from spec §7: every variant
/// represents an internal invariant violation in the AST or printer state,
/// never a recoverable/retryable condition. Printing either fully succeeds
/// or aborts with one of these — there is no partial output.
#[derive(Debug, Error)]
pub enum PrintError {
    #[error("malformed AST: {message} at node type {node_type}")]
    MalformedAst { message: String, node_type: String },
    #[error("unsupported node type for target: {node_type}")]
    UnsupportedNode { node_type: String },
    #[error("symbol {source_index}:{inner_index} has no entry in the symbol table")]
    UnresolvedSymbol { source_index: u32, inner_index: u32 },
    #[error("import record index {index} out of range ({len} records)")]
    InvalidImportRecordIndex { index: u32, len: usize },
    #[error("source map generation failed: {message}")]
    SourceMapError { message: String },
    #[error("numeric value error: {message} for value {value}")]
    NumericValueError { message: String, value: String },
    #[error("string processing error: {message}")]
    StringProcessingError { message: String },
    #[error("internal printer invariant violated: {message}")]
    InvariantViolation { message: String },
}

pub type PrintResultOuter<T> = Result<T, PrintError>;

/// Top-level entry point (spec §6 `Print(tree, symbols, renamer, options)`).
/// `original_source`, when given, lets the printer resolve source-map
/// original line/column pairs from the byte offsets carried in each node's
/// `Span`; without it, mappings still emit but original positions degrade
/// to line 0 (documented in DESIGN.md as an accepted simplification of the
/// demonstration entry point, not a change to the mapping format itself).
pub fn print(
    program: &Program,
    symbols: &SymbolTable,
    renamer: &dyn Renamer,
    import_records: &[ImportRecord],
    options: &GeneratorConfig,
    original_source: Option<&str>,
) -> PrintResultOuter<PrintResult> {
    let mut p = printer::Printer::new(options, symbols, renamer, import_records, original_source);
    p.print_program(program)?;

    let source_map = p.take_source_map();
    let mappings_emitted = source_map.as_ref().map(|m| m.mapping_count()).unwrap_or(0);
    let metafile_imports = if options.needs_metafile { p.take_metafile_imports() } else { Vec::new() };
    let code_len = p.output_len();

    Ok(PrintResult {
        code: p.into_output(),
        source_map,
        legal_comments: p.take_legal_comments(),
        metafile_imports,
        diagnostics: GeneratorDiagnostics {
            original_size: 0,
            generated_size: code_len,
            mappings_emitted,
            warning_count: 0,
            warnings: Vec::new(),
        },
    })
}

pub type MetafileImports = HashMap<String, serde_json::Value>;
