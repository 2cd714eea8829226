//! Interned resolved types, as produced by the host's type checker.
//!
//! The converter never computes types; it pattern-matches on this table and
//! falls back to the stored display string when nothing more specific
//! applies, so an entry's display text is mandatory at interning time.

use crate::symbols::SymbolId;
use bitflags::bitflags;
use serde::{Deserialize, Serialize};

/// Index of a resolved type in a [`TypeTable`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TypeId(pub u32);

bitflags! {
    /// Structural flags on object types.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
    pub struct ObjectFlags: u8 {
        const TUPLE = 1 << 0;
        const ANONYMOUS = 1 << 1;
        /// Instantiation of a generic target type.
        const REFERENCE = 1 << 2;
    }
}

/// The shape of a resolved type.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum TypeData {
    Intrinsic(String),
    StringLiteral(String),
    Object {
        symbol: Option<SymbolId>,
        /// Generic target when this is an instantiation (tuple detection
        /// looks through it).
        target: Option<TypeId>,
        type_arguments: Vec<TypeId>,
        object_flags: ObjectFlags,
    },
    Union(Vec<TypeId>),
    Intersection(Vec<TypeId>),
    TypeParameter {
        name: String,
    },
}

/// Interned type storage with per-type display strings.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct TypeTable {
    types: Vec<TypeData>,
    display: Vec<String>,
}

impl TypeTable {
    pub fn new() -> TypeTable {
        TypeTable {
            types: Vec::new(),
            display: Vec::new(),
        }
    }

    /// Intern a type along with the checker's rendering of it.
    pub fn intern(&mut self, data: TypeData, display: impl Into<String>) -> TypeId {
        let id = TypeId(self.types.len() as u32);
        self.types.push(data);
        self.display.push(display.into());
        id
    }

    pub fn intrinsic(&mut self, name: &str) -> TypeId {
        self.intern(TypeData::Intrinsic(name.to_string()), name)
    }

    pub fn string_literal(&mut self, value: &str) -> TypeId {
        self.intern(
            TypeData::StringLiteral(value.to_string()),
            format!("\"{value}\""),
        )
    }

    pub fn get(&self, id: TypeId) -> Option<&TypeData> {
        self.types.get(id.0 as usize)
    }

    /// The checker's display string for a type. Total: unknown ids render as
    /// an empty string rather than failing.
    pub fn type_to_string(&self, id: TypeId) -> String {
        self.display.get(id.0 as usize).cloned().unwrap_or_default()
    }

    /// The symbol behind a type, if it has one.
    pub fn symbol_of(&self, id: TypeId) -> Option<SymbolId> {
        match self.get(id)? {
            TypeData::Object { symbol, .. } => *symbol,
            _ => None,
        }
    }

    /// Whether a type is a tuple, directly or through its reference target.
    pub fn is_tuple(&self, id: TypeId) -> bool {
        match self.get(id) {
            Some(TypeData::Object {
                object_flags,
                target,
                ..
            }) => {
                if object_flags.contains(ObjectFlags::TUPLE) {
                    return true;
                }
                match target {
                    Some(t) => matches!(
                        self.get(*t),
                        Some(TypeData::Object { object_flags, .. })
                            if object_flags.contains(ObjectFlags::TUPLE)
                    ),
                    None => false,
                }
            }
            _ => false,
        }
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tuple_detection_looks_through_target() {
        let mut table = TypeTable::new();
        let target = table.intern(
            TypeData::Object {
                symbol: None,
                target: None,
                type_arguments: Vec::new(),
                object_flags: ObjectFlags::TUPLE,
            },
            "[string, number]",
        );
        let instance = table.intern(
            TypeData::Object {
                symbol: None,
                target: Some(target),
                type_arguments: Vec::new(),
                object_flags: ObjectFlags::REFERENCE,
            },
            "[string, number]",
        );

        assert!(table.is_tuple(target));
        assert!(table.is_tuple(instance));
    }
}
