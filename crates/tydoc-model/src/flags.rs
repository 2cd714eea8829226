//! Reflection flags.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

bitflags! {
    /// Modifier bitset carried by every reflection.
    ///
    /// `EXPORTED` and `EXTERNAL` are computed by the converter; the rest map
    /// directly onto source modifiers.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
    pub struct ReflectionFlags: u32 {
        const PRIVATE = 1 << 0;
        const PROTECTED = 1 << 1;
        const PUBLIC = 1 << 2;
        const STATIC = 1 << 3;
        const EXPORTED = 1 << 4;
        const EXTERNAL = 1 << 5;
        const OPTIONAL = 1 << 6;
        const REST = 1 << 7;
        const ABSTRACT = 1 << 8;
        const CONST_VARIABLE = 1 << 9;
        const LET_VARIABLE = 1 << 10;
        /// Property synthesized from a constructor parameter.
        const CONSTRUCTOR_PROPERTY = 1 << 11;
        /// Target of an `export =` assignment.
        const EXPORT_ASSIGNMENT = 1 << 12;
    }
}

impl ReflectionFlags {
    pub fn is_exported(self) -> bool {
        self.contains(ReflectionFlags::EXPORTED)
    }

    pub fn is_external(self) -> bool {
        self.contains(ReflectionFlags::EXTERNAL)
    }

    pub fn is_private(self) -> bool {
        self.contains(ReflectionFlags::PRIVATE)
    }

    pub fn is_static(self) -> bool {
        self.contains(ReflectionFlags::STATIC)
    }
}
