//! # Symbol Table Module
//!
//! Stands in for the linker-produced symbol map (spec §3, §6, §9 Design Notes):
//! the printer never resolves bindings itself, it only reads [`SymbolRef`]s that
//! the AST carries and asks [`SymbolTable`] what each one means. A ref can be
//! aliased to another ref (`link`) — resolving that chain is a read-only
//! union-find `follow`, never a mutation, since the printer must never write to
//! shared state while walking the tree (spec §9 "Design Notes: avoid global
//! mutable state").
//!
//! A real linker builds this table across every input file during bundling.
//! Here we model just the contract plus a [`SymbolTableBuilder`] fixture so
//! tests can stand one up without depending on that external component.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A reference to a symbol, scoped to the source file it was declared in.
/// Mirrors the bundler concept of a per-file index space that only a linker
/// can resolve across files — printing never needs cross-file uniqueness,
/// only a stable `(source_index, inner_index)` pair to key into the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SymbolRef {
    pub source_index: u32,
    pub inner_index: u32,
}

impl SymbolRef {
    pub fn new(source_index: u32, inner_index: u32) -> Self {
        Self { source_index, inner_index }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SymbolKind {
    Variable,
    Function,
    Class,
    Import,
    /// A synthesized namespace object introduced for `import * as ns`.
    ImportNamespace,
    Label,
    CatchBinding,
    /// A mangled private/property name (spec's "mangled property" concept).
    PrivateName,
}

bitflags::bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
    pub struct SymbolFlags: u32 {
        /// Must never be renamed (e.g. bound by `with`, or referenced via `eval`).
        const MUST_NOT_BE_RENAMED = 1 << 0;
        /// Declared with `const`; purely informational for the printer (no
        /// const-reassignment checking is performed — that's the checker's job).
        const IS_CONST            = 1 << 1;
        /// This symbol is only ever read through `(0, ns.alias)(...)` call
        /// guards, i.e. it is a namespace member alias (spec §4.1, import
        /// inlining indirect-call guard).
        const IS_NAMESPACE_ALIAS  = 1 << 2;
        /// Top-level `var`/function declaration that must be hoisted above
        /// any dead-branch pruning performed during minify-time statement
        /// merging (spec §4.2).
        const MUST_BE_HOISTED     = 1 << 3;
        /// This symbol is statically known (by the linker) to always resolve
        /// to a function whose body never runs any code, e.g. `const noop =
        /// function(){}`. Lets a zero-argument call through the binding
        /// collapse the same way a literal IIFE does (spec §4.1).
        const IS_EMPTY_FUNCTION   = 1 << 4;
        /// The binding this symbol names is reassigned somewhere in its
        /// scope, so `IS_EMPTY_FUNCTION` can't be trusted at any particular
        /// call site — the value read there might not be the original
        /// empty function anymore.
        const COULD_BE_MUTATED    = 1 << 5;
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Symbol {
    pub kind: SymbolKind,
    pub original_name: String,
    /// Union-find parent: `Some(other)` means this symbol has been merged
    /// into `other` (e.g. two `var`s in different scopes unified by the
    /// linker). `follow` walks this chain to the representative symbol.
    pub link: Option<SymbolRef>,
    pub flags: SymbolFlags,
    /// For [`SymbolKind::Import`], the `(namespace_symbol, property_name)`
    /// pair this import resolves to once bundled into a single module, used
    /// by `generator::imports` to print `ns.alias` instead of a bare name.
    pub namespace_alias: Option<(SymbolRef, String)>,
}

impl Symbol {
    pub fn new(kind: SymbolKind, original_name: impl Into<String>) -> Self {
        Self {
            kind,
            original_name: original_name.into(),
            link: None,
            flags: SymbolFlags::empty(),
            namespace_alias: None,
        }
    }
}

/// Read-only view over the symbol graph the printer depends on.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SymbolTable {
    symbols: HashMap<SymbolRef, Symbol>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, r: SymbolRef) -> Option<&Symbol> {
        self.symbols.get(&r)
    }

    /// Follows the `link` union-find chain to the symbol that actually owns
    /// the binding. Cycles (which should never occur in a well-formed table
    /// but could appear in adversarial test fixtures) are bounded by scanning
    /// at most `len` hops so this never loops forever.
    pub fn follow(&self, r: SymbolRef) -> SymbolRef {
        let mut current = r;
        let mut hops = 0;
        while let Some(symbol) = self.symbols.get(&current) {
            match symbol.link {
                Some(next) if hops < self.symbols.len() + 1 => {
                    current = next;
                    hops += 1;
                }
                _ => break,
            }
        }
        current
    }

    pub fn resolved(&self, r: SymbolRef) -> Option<&Symbol> {
        self.get(self.follow(r))
    }
}

/// Builds a [`SymbolTable`] fixture for tests and the demonstration CLI,
/// where no real linker is available to produce one.
#[derive(Debug, Default)]
pub struct SymbolTableBuilder {
    table: SymbolTable,
    next_inner_index: u32,
}

impl SymbolTableBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares a fresh symbol in `source_index`'s namespace and returns its ref.
    pub fn declare(&mut self, source_index: u32, symbol: Symbol) -> SymbolRef {
        let r = SymbolRef::new(source_index, self.next_inner_index);
        self.next_inner_index += 1;
        self.table.symbols.insert(r, symbol);
        r
    }

    /// Merges `from` into `to`: future `follow(from)` calls resolve to `to`.
    pub fn link(&mut self, from: SymbolRef, to: SymbolRef) {
        if let Some(symbol) = self.table.symbols.get_mut(&from) {
            symbol.link = Some(to);
        }
    }

    pub fn build(self) -> SymbolTable {
        self.table
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn follow_resolves_simple_chain() {
        let mut builder = SymbolTableBuilder::new();
        let a = builder.declare(0, Symbol::new(SymbolKind::Variable, "a"));
        let b = builder.declare(0, Symbol::new(SymbolKind::Variable, "b"));
        builder.link(a, b);
        let table = builder.build();
        assert_eq!(table.follow(a), b);
        assert_eq!(table.follow(b), b);
    }

    #[test]
    fn follow_is_a_no_op_for_unlinked_symbols() {
        let mut builder = SymbolTableBuilder::new();
        let a = builder.declare(0, Symbol::new(SymbolKind::Variable, "a"));
        let table = builder.build();
        assert_eq!(table.follow(a), a);
    }

    #[test]
    fn follow_does_not_loop_forever_on_a_cycle() {
        let mut builder = SymbolTableBuilder::new();
        let a = builder.declare(0, Symbol::new(SymbolKind::Variable, "a"));
        let b = builder.declare(0, Symbol::new(SymbolKind::Variable, "b"));
        builder.link(a, b);
        builder.link(b, a);
        let table = builder.build();
        // Must terminate; which member of the cycle it lands on is unspecified.
        let _ = table.follow(a);
    }
}
