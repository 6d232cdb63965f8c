//! # Import/require lowering policy
//!
//! Given an [`ImportRecord`] (the linker's decision about how a module
//! reference resolved), decides the concrete token sequence the printer
//! should emit for a reference to it (spec §4.4). The printer calls
//! [`lower_require`]/[`lower_dynamic_import`] instead of hand-rolling this
//! per call site.

use crate::generator::UnsupportedFeatures;
use crate::import_records::{ImportRecord, ImportRecordFlags, ImportRecordKind};

/// What the printer should literally write for a `require(...)` call or a
/// static import's right-hand side, once lowered.
pub enum RequireLowering {
    /// Emit `require("specifier")` unchanged.
    Bare,
    /// Emit `__require("specifier")` — routed through the runtime shim.
    RuntimeRequire,
    /// Emit `__toESM(require("specifier"))`.
    ToEsm,
    /// Emit `__toCommonJS(require("specifier"))`.
    ToCommonJs,
}

pub fn lower_require(record: &ImportRecord) -> RequireLowering {
    if record.flags.contains(ImportRecordFlags::WRAP_WITH_TO_ESM) {
        RequireLowering::ToEsm
    } else if record.flags.contains(ImportRecordFlags::WRAP_WITH_TO_COMMONJS) {
        RequireLowering::ToCommonJs
    } else if record.flags.contains(ImportRecordFlags::CALL_RUNTIME_REQUIRE) {
        RequireLowering::RuntimeRequire
    } else {
        RequireLowering::Bare
    }
}

/// Whether a dynamic `import()` of this record must be chained through
/// `.then(x => __toCommonJS(x))`-style wrapping rather than printed as a
/// bare `import(...)` call.
pub fn dynamic_import_needs_then_wrapper(record: &ImportRecord) -> bool {
    record.kind == ImportRecordKind::DynamicImport
        && record.flags.contains(ImportRecordFlags::WRAP_WITH_TO_COMMONJS)
}

/// How the printer should lower an external `import(...)` call once the
/// target engine's support for dynamic import is taken into account (spec
/// §4.4's downlevel fallback row).
pub enum DynamicImportLowering {
    /// The target engine supports `import()` natively; print it as-is,
    /// optionally still chained through `.then` if the module needs
    /// CommonJS interop.
    Native { needs_then_wrapper: bool },
    /// The target engine lacks dynamic import entirely; fall back to
    /// `Promise.resolve().then(() => __require(specifier))`, the only way
    /// to preserve `import()`'s async-and-lazy evaluation semantics without
    /// the native syntax.
    PromiseResolveThenRequire,
}

pub fn lower_dynamic_import(record: &ImportRecord, unsupported: UnsupportedFeatures) -> DynamicImportLowering {
    if unsupported.contains(UnsupportedFeatures::DYNAMIC_IMPORT) {
        DynamicImportLowering::PromiseResolveThenRequire
    } else {
        DynamicImportLowering::Native { needs_then_wrapper: dynamic_import_needs_then_wrapper(record) }
    }
}

/// The generated names a bundler assigned to a bundled-in module's wrapper
/// function and exports binding, resolved by the generator's
/// `require_or_import_meta_for_source` callback (spec §4.4).
#[derive(Debug, Clone)]
pub struct SourceWrapperNames {
    /// Name of the `__commonJS`-wrapped require function, e.g. `require_foo`.
    pub require_fn: String,
    /// Name of the `__esm`-wrapped init function, e.g. `init_foo`.
    pub init_fn: String,
    /// Name of the generated exports binding populated by `init_fn`.
    pub exports_name: String,
}

/// Whether this record's specifier is printed literally (external) or has
/// already been replaced by the linker with a direct in-bundle reference
/// that the printer never sees as an `ImportRecord` at all.
pub fn prints_literal_specifier(record: &ImportRecord) -> bool {
    record.is_external()
}

/// Whether this import should appear in `needs_metafile`'s import list.
pub fn included_in_metafile(record: &ImportRecord) -> bool {
    record.is_external() && !record.flags.contains(ImportRecordFlags::SHOULD_NOT_BE_EXTERNAL_IN_META)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_external_require_lowers_to_bare() {
        let record = ImportRecord::new(ImportRecordKind::Require, "fs");
        assert!(matches!(lower_require(&record), RequireLowering::Bare));
    }

    #[test]
    fn to_esm_flag_wins_lowering_choice() {
        let mut record = ImportRecord::new(ImportRecordKind::Require, "react");
        record.flags |= ImportRecordFlags::WRAP_WITH_TO_ESM;
        assert!(matches!(lower_require(&record), RequireLowering::ToEsm));
    }

    #[test]
    fn metafile_excludes_injected_helper_imports() {
        let mut record = ImportRecord::new(ImportRecordKind::Require, "helpers");
        record.flags |= ImportRecordFlags::IS_EXTERNAL | ImportRecordFlags::SHOULD_NOT_BE_EXTERNAL_IN_META;
        assert!(!included_in_metafile(&record));
    }

    #[test]
    fn dynamic_import_lowers_natively_when_supported() {
        let record = ImportRecord::new(ImportRecordKind::DynamicImport, "./lazy.js");
        assert!(matches!(
            lower_dynamic_import(&record, UnsupportedFeatures::empty()),
            DynamicImportLowering::Native { needs_then_wrapper: false }
        ));
    }

    #[test]
    fn dynamic_import_falls_back_to_promise_resolve_when_unsupported() {
        let record = ImportRecord::new(ImportRecordKind::DynamicImport, "./lazy.js");
        assert!(matches!(
            lower_dynamic_import(&record, UnsupportedFeatures::DYNAMIC_IMPORT),
            DynamicImportLowering::PromiseResolveThenRequire
        ));
    }
}
