//! # Renamer Module
//!
//! Spec §1 treats the renamer as an external collaborator: some other pass
//! decided the final, print-ready spelling of every symbol (shortened,
//! minified, or left alone). The printer only needs to ask "what do I call
//! this ref", so it depends on the [`Renamer`] trait rather than a concrete
//! minifier, matching how the teacher keeps the generator decoupled from
//! the transform pipeline.

use std::collections::HashMap;

use crate::symbols::SymbolRef;

pub trait Renamer {
    /// Returns the name the printer should emit for `symbol`. Implementations
    /// must be pure and total for any ref the printer hands them — the
    /// printer never falls back to a default spelling on `None`, callers
    /// are expected to always have a name (spec §7: no recoverable errors).
    fn name_for_symbol(&self, symbol: SymbolRef) -> &str;
}

/// A renamer that returns each symbol's original declared name unless an
/// explicit override says otherwise. Enough to drive every precedence/ASI/
/// late-rewrite test without standing up a real minifying renamer.
#[derive(Debug, Default)]
pub struct SimpleRenamer {
    original_names: HashMap<SymbolRef, String>,
    overrides: HashMap<SymbolRef, String>,
}

impl SimpleRenamer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_original_name(mut self, symbol: SymbolRef, name: impl Into<String>) -> Self {
        self.original_names.insert(symbol, name.into());
        self
    }

    pub fn set_override(&mut self, symbol: SymbolRef, name: impl Into<String>) {
        self.overrides.insert(symbol, name.into());
    }
}

impl Renamer for SimpleRenamer {
    fn name_for_symbol(&self, symbol: SymbolRef) -> &str {
        if let Some(name) = self.overrides.get(&symbol) {
            return name;
        }
        self.original_names.get(&symbol).map(String::as_str).unwrap_or("_")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn override_takes_precedence_over_original_name() {
        let symbol = SymbolRef::new(0, 0);
        let mut renamer = SimpleRenamer::new().with_original_name(symbol, "longName");
        assert_eq!(renamer.name_for_symbol(symbol), "longName");
        renamer.set_override(symbol, "a");
        assert_eq!(renamer.name_for_symbol(symbol), "a");
    }
}
