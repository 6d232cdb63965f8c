//! `rjs-codegen`: lowers a fully-resolved JavaScript/JSX AST into text.
//!
//! The crate is organized around the boundary between what a real bundler's
//! front end (parser, linker, renamer) decides and what the printer computes
//! itself. Everything upstream of [`generator::print`] is a thin contract —
//! traits and plain data — never a from-scratch reimplementation of a parser
//! or a minifying renamer.

pub mod generator;
pub mod import_records;
pub mod parser;
pub mod renamer;
pub mod symbols;
