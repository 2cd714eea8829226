//! Configuration consumed by the conversion core.
//!
//! Option parsing and validation live with the host application; the core
//! only reads this struct.

use serde::{Deserialize, Serialize};

/// Settings gating visibility decisions and file-scope filtering.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ConverterOptions {
    /// Project name used for the root reflection.
    pub name: String,
    /// Glob patterns; reflections under matching paths are flagged external.
    pub external_pattern: Vec<String>,
    /// Convert declaration (`.d.ts`) files instead of skipping them.
    pub include_declarations: bool,
    /// Skip files flagged external entirely.
    pub exclude_externals: bool,
    /// Drop declarations without an export modifier.
    pub exclude_not_exported: bool,
    /// Drop private class members.
    pub exclude_private: bool,
    /// Drop protected class members.
    pub exclude_protected: bool,
}

impl Default for ConverterOptions {
    fn default() -> ConverterOptions {
        ConverterOptions {
            name: "Documentation".to_string(),
            external_pattern: Vec::new(),
            include_declarations: false,
            exclude_externals: false,
            exclude_not_exported: false,
            exclude_private: false,
            exclude_protected: false,
        }
    }
}
