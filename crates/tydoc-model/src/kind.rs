//! Reflection kinds.
//!
//! Kinds use power-of-two discriminants and serialize as plain integers so
//! the JSON schema stays stable even if variants are reordered here.

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize, Serializer};

/// What kind of program entity a reflection describes.
#[repr(u32)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ReflectionKind {
    Project = 1,
    Module = 2,
    Namespace = 4,
    Enum = 8,
    EnumMember = 16,
    Variable = 32,
    Function = 64,
    Class = 128,
    Interface = 256,
    Constructor = 512,
    Property = 1024,
    Method = 2048,
    CallSignature = 4096,
    IndexSignature = 8192,
    ConstructorSignature = 16384,
    Parameter = 32768,
    TypeLiteral = 65536,
    TypeParameter = 131072,
    Accessor = 262144,
    GetSignature = 524288,
    SetSignature = 1048576,
    ObjectLiteral = 2097152,
    TypeAlias = 4194304,
    Event = 8388608,
}

impl ReflectionKind {
    /// All kinds, used for integer deserialization and grouping.
    pub const ALL: [ReflectionKind; 24] = [
        ReflectionKind::Project,
        ReflectionKind::Module,
        ReflectionKind::Namespace,
        ReflectionKind::Enum,
        ReflectionKind::EnumMember,
        ReflectionKind::Variable,
        ReflectionKind::Function,
        ReflectionKind::Class,
        ReflectionKind::Interface,
        ReflectionKind::Constructor,
        ReflectionKind::Property,
        ReflectionKind::Method,
        ReflectionKind::CallSignature,
        ReflectionKind::IndexSignature,
        ReflectionKind::ConstructorSignature,
        ReflectionKind::Parameter,
        ReflectionKind::TypeLiteral,
        ReflectionKind::TypeParameter,
        ReflectionKind::Accessor,
        ReflectionKind::GetSignature,
        ReflectionKind::SetSignature,
        ReflectionKind::ObjectLiteral,
        ReflectionKind::TypeAlias,
        ReflectionKind::Event,
    ];

    pub fn from_u32(value: u32) -> Option<ReflectionKind> {
        ReflectionKind::ALL.iter().copied().find(|k| *k as u32 == value)
    }

    /// Containers may own named children.
    pub fn is_container(self) -> bool {
        matches!(
            self,
            ReflectionKind::Project
                | ReflectionKind::Module
                | ReflectionKind::Namespace
                | ReflectionKind::Class
                | ReflectionKind::Interface
                | ReflectionKind::Enum
                | ReflectionKind::ObjectLiteral
                | ReflectionKind::TypeLiteral
        )
    }

    pub fn is_signature(self) -> bool {
        matches!(
            self,
            ReflectionKind::CallSignature
                | ReflectionKind::ConstructorSignature
                | ReflectionKind::IndexSignature
                | ReflectionKind::GetSignature
                | ReflectionKind::SetSignature
        )
    }

    /// Weight used when two declarations of the same name merge with
    /// different kinds: the weaker kind yields to the stronger one.
    pub fn merge_weight(self) -> u32 {
        match self {
            ReflectionKind::Module | ReflectionKind::Namespace => 1,
            ReflectionKind::Enum => 2,
            ReflectionKind::Class => 3,
            _ => 0,
        }
    }

    /// Sort weight for the group pass; lower sorts first.
    pub fn sort_weight(self) -> u32 {
        match self {
            ReflectionKind::Project => 0,
            ReflectionKind::Module => 1,
            ReflectionKind::Namespace => 2,
            ReflectionKind::Enum => 3,
            ReflectionKind::EnumMember => 4,
            ReflectionKind::Class => 5,
            ReflectionKind::Interface => 6,
            ReflectionKind::TypeAlias => 7,
            ReflectionKind::Event => 8,
            ReflectionKind::Constructor => 9,
            ReflectionKind::Property => 10,
            ReflectionKind::Variable => 11,
            ReflectionKind::Accessor => 12,
            ReflectionKind::Method => 13,
            ReflectionKind::Function => 14,
            ReflectionKind::ObjectLiteral => 15,
            ReflectionKind::TypeLiteral => 16,
            ReflectionKind::IndexSignature => 17,
            ReflectionKind::ConstructorSignature => 18,
            ReflectionKind::CallSignature => 19,
            ReflectionKind::GetSignature => 20,
            ReflectionKind::SetSignature => 21,
            ReflectionKind::Parameter => 22,
            ReflectionKind::TypeParameter => 23,
        }
    }

    /// Group heading for children of this kind.
    pub fn plural_name(self) -> &'static str {
        match self {
            ReflectionKind::Project => "Projects",
            ReflectionKind::Module => "Modules",
            ReflectionKind::Namespace => "Namespaces",
            ReflectionKind::Enum => "Enumerations",
            ReflectionKind::EnumMember => "Enumeration members",
            ReflectionKind::Variable => "Variables",
            ReflectionKind::Function => "Functions",
            ReflectionKind::Class => "Classes",
            ReflectionKind::Interface => "Interfaces",
            ReflectionKind::Constructor => "Constructors",
            ReflectionKind::Property => "Properties",
            ReflectionKind::Method => "Methods",
            ReflectionKind::CallSignature => "Call signatures",
            ReflectionKind::IndexSignature => "Index signatures",
            ReflectionKind::ConstructorSignature => "Constructor signatures",
            ReflectionKind::Parameter => "Parameters",
            ReflectionKind::TypeLiteral => "Type literals",
            ReflectionKind::TypeParameter => "Type parameters",
            ReflectionKind::Accessor => "Accessors",
            ReflectionKind::GetSignature => "Get signatures",
            ReflectionKind::SetSignature => "Set signatures",
            ReflectionKind::ObjectLiteral => "Object literals",
            ReflectionKind::TypeAlias => "Type aliases",
            ReflectionKind::Event => "Events",
        }
    }
}

impl Serialize for ReflectionKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u32(*self as u32)
    }
}

impl<'de> Deserialize<'de> for ReflectionKind {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = u32::deserialize(deserializer)?;
        ReflectionKind::from_u32(value)
            .ok_or_else(|| de::Error::custom(format!("invalid reflection kind: {value}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_weights_order_module_enum_class() {
        assert!(ReflectionKind::Module.merge_weight() < ReflectionKind::Enum.merge_weight());
        assert!(ReflectionKind::Enum.merge_weight() < ReflectionKind::Class.merge_weight());
    }

    #[test]
    fn kind_integer_round_trip() {
        for kind in ReflectionKind::ALL {
            assert_eq!(ReflectionKind::from_u32(kind as u32), Some(kind));
        }
    }
}
