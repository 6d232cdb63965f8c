//! # rjs-codegen CLI
//!
//! A thin demonstration driver around [`rjs_codegen::generator::print`]: read
//! a JavaScript source file, parse it with the OXC front end, and print it
//! back out through the generator with the requested options. There is no
//! real linker or minifying renamer here — `symbols`/`renamer`/
//! `import_records` are built as empty/identity stand-ins (spec §1's
//! "configurable CLI flags" seam), matching how the teacher's CLI bottoms
//! out in a placeholder pipeline stage rather than a full compiler.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser as ClapParser, ValueEnum};
use thiserror::Error;
use tracing_subscriber::EnvFilter;

use rjs_codegen::generator::{self, GeneratorConfig, LegalCommentsMode, OutputFormat, QuoteStrategy};
use rjs_codegen::import_records::ImportRecord;
use rjs_codegen::parser::{self, ParserConfig};
use rjs_codegen::renamer::SimpleRenamer;
use rjs_codegen::symbols::SymbolTable;

/// Lowers a JavaScript source file into printed text, with optional
/// minification and source maps.
#[derive(Debug, ClapParser)]
#[command(name = "rjs-codegen", version, about)]
struct Cli {
    /// JavaScript source file to read and print.
    input: PathBuf,

    /// Write output here instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Strip insignificant whitespace.
    #[arg(long)]
    minify_whitespace: bool,

    /// Apply constant folding, IIFE collapsing, and statement merging.
    #[arg(long)]
    minify_syntax: bool,

    /// Shorthand for `--minify-whitespace --minify-syntax`.
    #[arg(short = 'm', long)]
    minify: bool,

    /// Escape every non-ASCII code point instead of emitting it literally.
    #[arg(long)]
    ascii_only: bool,

    /// Emit a `.map` file alongside the output.
    #[arg(long)]
    source_map: bool,

    /// Legal-comment (`/*! */`, `//!`) handling.
    #[arg(long, value_enum, default_value_t = LegalCommentsArg::Inline)]
    legal_comments: LegalCommentsArg,

    /// Whole-program output shape.
    #[arg(long, value_enum, default_value_t = OutputFormatArg::Preserve)]
    format: OutputFormatArg,

    /// Preferred quote character when cost is otherwise equal.
    #[arg(long, value_enum, default_value_t = QuoteArg::Auto)]
    quote: QuoteArg,

    /// Increase logging verbosity; repeat for more (`-v`, `-vv`).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LegalCommentsArg {
    None,
    Inline,
    EndOfFile,
    Linked,
    External,
}

impl From<LegalCommentsArg> for LegalCommentsMode {
    fn from(value: LegalCommentsArg) -> Self {
        match value {
            LegalCommentsArg::None => LegalCommentsMode::None,
            LegalCommentsArg::Inline => LegalCommentsMode::Inline,
            LegalCommentsArg::EndOfFile => LegalCommentsMode::EndOfFile,
            LegalCommentsArg::Linked => LegalCommentsMode::Linked,
            LegalCommentsArg::External => LegalCommentsMode::External,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormatArg {
    Preserve,
    Iife,
    CommonJs,
    Esm,
}

impl From<OutputFormatArg> for OutputFormat {
    fn from(value: OutputFormatArg) -> Self {
        match value {
            OutputFormatArg::Preserve => OutputFormat::Preserve,
            OutputFormatArg::Iife => OutputFormat::Iife,
            OutputFormatArg::CommonJs => OutputFormat::CommonJs,
            OutputFormatArg::Esm => OutputFormat::Esm,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum QuoteArg {
    Auto,
    Single,
    Double,
}

impl From<QuoteArg> for QuoteStrategy {
    fn from(value: QuoteArg) -> Self {
        match value {
            QuoteArg::Auto => QuoteStrategy::Auto,
            QuoteArg::Single => QuoteStrategy::Single,
            QuoteArg::Double => QuoteStrategy::Double,
        }
    }
}

#[derive(Debug, Error)]
enum CliError {
    #[error("failed to read {path}: {source}")]
    ReadInput { path: PathBuf, source: std::io::Error },
    #[error("{0} produced {1} parse error(s)")]
    Parse(PathBuf, usize),
    #[error("parser reported no errors but produced no AST for {0}")]
    MissingAst(PathBuf),
    #[error("failed to print {path}: {source}")]
    Print { path: PathBuf, source: generator::PrintError },
    #[error("failed to write {path}: {source}")]
    WriteOutput { path: PathBuf, source: std::io::Error },
    #[error("failed to serialize source map for {path}: {source}")]
    SourceMap { path: PathBuf, source: serde_json::Error },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            tracing::error!(%error, "rjs-codegen failed");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt().with_env_filter(filter).with_target(false).init();
}

fn run(cli: &Cli) -> Result<(), CliError> {
    let source = std::fs::read_to_string(&cli.input)
        .map_err(|source| CliError::ReadInput { path: cli.input.clone(), source })?;
    tracing::info!(path = %cli.input.display(), bytes = source.len(), "read input");

    let parser_config = ParserConfig::default();
    let filename = cli.input.to_string_lossy();
    let parse_result = parser::parse_js(&source, &filename, &parser_config);

    if !parse_result.errors.is_empty() {
        for error in &parse_result.errors {
            tracing::error!(%error, "parse error");
        }
        return Err(CliError::Parse(cli.input.clone(), parse_result.errors.len()));
    }
    let program = parse_result.ast.ok_or_else(|| CliError::MissingAst(cli.input.clone()))?;
    tracing::debug!(statements = program.body.len(), "parsed program");

    let options = build_generator_config(cli);
    let symbols = SymbolTable::new();
    let renamer = SimpleRenamer::new();
    let import_records: Vec<ImportRecord> = Vec::new();

    let result = generator::print(&program, &symbols, &renamer, &import_records, &options, Some(&source))
        .map_err(|source| CliError::Print { path: cli.input.clone(), source })?;
    tracing::info!(
        bytes_in = source.len(),
        bytes_out = result.diagnostics.generated_size,
        mappings = result.diagnostics.mappings_emitted,
        "printed output"
    );

    let mut code = result.code;

    if !result.legal_comments.is_empty()
        && matches!(cli.legal_comments, LegalCommentsArg::Linked | LegalCommentsArg::External)
    {
        let side_path = legal_comments_path(cli);
        let side_file_name = side_path.file_name().map(|n| n.to_string_lossy().into_owned()).unwrap_or_default();
        let side_file = rjs_codegen::generator::legal_comments::render_side_file(&result.legal_comments);
        std::fs::write(&side_path, side_file)
            .map_err(|source| CliError::WriteOutput { path: side_path.clone(), source })?;
        tracing::info!(path = %side_path.display(), "wrote legal comments");

        if matches!(cli.legal_comments, LegalCommentsArg::Linked) {
            code.push_str(&rjs_codegen::generator::legal_comments::render_linked_reference(&side_file_name));
        }
    } else {
        for comment in &result.legal_comments {
            tracing::debug!(%comment, "extracted legal comment");
        }
    }

    if let Some(source_map) = result.source_map {
        let map_path = source_map_path(cli);
        let map_file_name = map_path.file_name().map(|n| n.to_string_lossy().into_owned()).unwrap_or_default();
        let json = source_map
            .to_json()
            .map_err(|source| CliError::SourceMap { path: cli.input.clone(), source })?;
        std::fs::write(&map_path, json)
            .map_err(|source| CliError::WriteOutput { path: map_path.clone(), source })?;
        tracing::info!(path = %map_path.display(), "wrote source map");
        code.push_str(&format!("\n{}\n", source_map.source_mapping_url_comment(&map_file_name)));
    }

    write_output(cli, &code)?;

    Ok(())
}

fn build_generator_config(cli: &Cli) -> GeneratorConfig {
    GeneratorConfig {
        minify_whitespace: cli.minify_whitespace || cli.minify,
        minify_syntax: cli.minify_syntax || cli.minify,
        ascii_only: cli.ascii_only,
        add_source_mappings: cli.source_map,
        legal_comments: cli.legal_comments.into(),
        output_format: cli.format.into(),
        quote: cli.quote.into(),
        ..GeneratorConfig::default()
    }
}

fn write_output(cli: &Cli, code: &str) -> Result<(), CliError> {
    match &cli.output {
        Some(path) => std::fs::write(path, code)
            .map_err(|source| CliError::WriteOutput { path: path.clone(), source }),
        None => {
            print!("{code}");
            Ok(())
        }
    }
}

fn source_map_path(cli: &Cli) -> PathBuf {
    match &cli.output {
        Some(path) => {
            let mut path = path.clone();
            let extended = match path.extension().and_then(|ext| ext.to_str()) {
                Some(ext) => format!("{ext}.map"),
                None => "map".to_string(),
            };
            path.set_extension(extended);
            path
        }
        None => PathBuf::from(format!("{}.map", cli.input.display())),
    }
}

fn legal_comments_path(cli: &Cli) -> PathBuf {
    match &cli.output {
        Some(path) => {
            let mut path = path.clone();
            let extended = match path.extension().and_then(|ext| ext.to_str()) {
                Some(ext) => format!("{ext}.LEGAL.txt"),
                None => "LEGAL.txt".to_string(),
            };
            path.set_extension(extended);
            path
        }
        None => PathBuf::from(format!("{}.LEGAL.txt", cli.input.display())),
    }
}
