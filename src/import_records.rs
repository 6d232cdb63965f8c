//! # Import Records Module
//!
//! Carries the lowering decisions the (external) linker already made for
//! each `import`/`require`/dynamic-`import()` appearing in the source, per
//! the policy table in spec §4.4. The printer consults `ImportRecord` only
//! to decide *how* to print a reference to it — it never resolves module
//! specifiers or touches the filesystem itself.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ImportRecordKind {
    /// A static `import ... from "..."` / `export ... from "..."` statement.
    Stmt,
    /// `require("...")`.
    Require,
    /// `require.resolve("...")`.
    RequireResolve,
    /// `import("...")`.
    DynamicImport,
}

bitflags::bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
    pub struct ImportRecordFlags: u32 {
        /// The target module stayed external (was not bundled in); print the
        /// reference as a literal module-specifier string.
        const IS_EXTERNAL                    = 1 << 0;
        /// Wrap a CommonJS external import's namespace object with the
        /// `__toESM` runtime helper.
        const WRAP_WITH_TO_ESM               = 1 << 1;
        /// Wrap an ESM external import's namespace object with the
        /// `__toCommonJS` runtime helper.
        const WRAP_WITH_TO_COMMONJS           = 1 << 2;
        /// Route the reference through the `__require` runtime shim instead
        /// of a bare `require` call (used when `require` itself might not
        /// exist in the target environment).
        const CALL_RUNTIME_REQUIRE           = 1 << 3;
        /// Keep this import out of `needs_metafile`'s import-list even
        /// though it is external (e.g. an injected helper import).
        const SHOULD_NOT_BE_EXTERNAL_IN_META = 1 << 4;
        /// A dynamic `import()` of an async ESM module that must be chained
        /// with `.then(...)` because the bundler could not prove it would
        /// resolve synchronously.
        const WAS_ORIGINALLY_BARE_IMPORT     = 1 << 5;
    }
}

/// An import attribute clause entry: `{ type: "json" }` in
/// `import x from "./x.json" with { type: "json" }`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportAttribute {
    pub key: String,
    pub value: String,
}

/// Which wrapper shape a bundled (non-external) module was compiled to,
/// per spec §4.4's internal-source lowering rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InternalModuleKind {
    /// Wrapped as `require_FOO = __commonJS(...)`; referenced via a call to
    /// the generated `require_FOO()` function.
    CommonJs,
    /// Wrapped as `init_FOO = __esm(...)`; referenced via `init_FOO()` plus
    /// the module's generated `exports_FOO` binding.
    Esm,
}

/// Identifies a bundled module this record resolved to, once the linker
/// decided not to leave it external. The printer never sees the bundled
/// module's own AST through this record — only enough to pick the right
/// reference shape and ask the generator's `require_or_import_meta_for_source`
/// resolver for the generated function/binding names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InternalSource {
    /// Index into the bundle's source list, passed to the resolver callback.
    pub source_index: u32,
    pub kind: InternalModuleKind,
    /// The ESM module's top-level body contains `await`, so its wrapper
    /// function returns a promise and every reference must be chained
    /// through `.then(...)`. Always `false` for `CommonJs`.
    pub is_async: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportRecord {
    pub kind: ImportRecordKind,
    /// The module specifier as written in source (or decided by the
    /// linker's resolution), printed verbatim when `IS_EXTERNAL` is set.
    pub module_specifier: String,
    pub flags: ImportRecordFlags,
    pub attributes: Vec<ImportAttribute>,
    /// `Some` when the linker bundled the target module in rather than
    /// leaving it external. Mutually exclusive with `IS_EXTERNAL` in
    /// practice, but nothing here enforces that — a record with neither is
    /// simply malformed and the printer reports it as such.
    pub internal_source: Option<InternalSource>,
}

impl ImportRecord {
    pub fn new(kind: ImportRecordKind, module_specifier: impl Into<String>) -> Self {
        Self {
            kind,
            module_specifier: module_specifier.into(),
            flags: ImportRecordFlags::empty(),
            attributes: Vec::new(),
            internal_source: None,
        }
    }

    pub fn with_internal_source(mut self, internal_source: InternalSource) -> Self {
        self.internal_source = Some(internal_source);
        self
    }

    pub fn is_external(&self) -> bool {
        self.flags.contains(ImportRecordFlags::IS_EXTERNAL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_record_has_no_flags_set() {
        let record = ImportRecord::new(ImportRecordKind::Stmt, "./a.js");
        assert!(!record.is_external());
    }

    #[test]
    fn external_flag_is_observable() {
        let mut record = ImportRecord::new(ImportRecordKind::Require, "fs");
        record.flags |= ImportRecordFlags::IS_EXTERNAL;
        assert!(record.is_external());
    }
}
