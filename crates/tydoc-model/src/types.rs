//! The type hierarchy referenced by reflections.
//!
//! Types are value-like and carry no identity of their own; a reference type
//! points back into the reflection table once resolved. Serialization uses a
//! tagged representation (`"type": "reference"` etc.) per the JSON schema.

use crate::reflection::ReflectionId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Resolution state of a reference type.
///
/// `Symbol` holds a placeholder id from the converter's symbol registry and
/// is resolved through the project's symbol mapping during the resolution
/// pass; `ByName` defers to a qualified-name lookup instead (used when the
/// written name is an alias for the canonical path).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "camelCase")]
pub enum ReferenceTarget {
    Resolved { id: ReflectionId },
    ByName,
    Symbol { id: i64 },
}

/// A type as rendered into documentation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum Type {
    Intrinsic {
        name: String,
    },
    StringLiteral {
        value: String,
    },
    Reference {
        name: String,
        target: ReferenceTarget,
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        type_arguments: Vec<Type>,
    },
    Array {
        element_type: Box<Type>,
    },
    Tuple {
        elements: Vec<Type>,
    },
    Union {
        types: Vec<Type>,
    },
    Intersection {
        types: Vec<Type>,
    },
    TypeOperator {
        operator: String,
        target: Box<Type>,
    },
    TypeParameter {
        name: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        constraint: Option<Box<Type>>,
    },
    /// An anonymous type literal, owned by the reflection table.
    Reflection {
        declaration: ReflectionId,
    },
    /// Opaque fallback carrying the checker's own rendering.
    Unknown {
        name: String,
    },
}

impl Type {
    pub fn intrinsic(name: &str) -> Type {
        Type::Intrinsic {
            name: name.to_string(),
        }
    }

    pub fn reference(name: impl Into<String>, target: ReferenceTarget) -> Type {
        Type::Reference {
            name: name.into(),
            target,
            type_arguments: Vec::new(),
        }
    }

    pub fn unknown(name: impl Into<String>) -> Type {
        Type::Unknown { name: name.into() }
    }

    /// The reflection a resolved reference points at, if any.
    pub fn resolved_target(&self) -> Option<ReflectionId> {
        match self {
            Type::Reference {
                target: ReferenceTarget::Resolved { id },
                ..
            } => Some(*id),
            _ => None,
        }
    }

    /// Resolve every reference target in this type tree.
    ///
    /// Already-resolved references are left untouched, which makes the
    /// operation idempotent. The resolver sees the written name and the
    /// pending target and returns the reflection to bind, or `None` to leave
    /// the reference unresolved.
    pub fn resolve_references<F>(&mut self, resolver: &F)
    where
        F: Fn(&str, &ReferenceTarget) -> Option<ReflectionId>,
    {
        match self {
            Type::Reference {
                name,
                target,
                type_arguments,
            } => {
                if !matches!(target, ReferenceTarget::Resolved { .. }) {
                    if let Some(id) = resolver(name, target) {
                        *target = ReferenceTarget::Resolved { id };
                    }
                }
                for arg in type_arguments {
                    arg.resolve_references(resolver);
                }
            }
            Type::Array { element_type } => element_type.resolve_references(resolver),
            Type::Tuple { elements } => {
                for t in elements {
                    t.resolve_references(resolver);
                }
            }
            Type::Union { types } | Type::Intersection { types } => {
                for t in types {
                    t.resolve_references(resolver);
                }
            }
            Type::TypeOperator { target, .. } => target.resolve_references(resolver),
            Type::TypeParameter { constraint, .. } => {
                if let Some(c) = constraint {
                    c.resolve_references(resolver);
                }
            }
            Type::Intrinsic { .. }
            | Type::StringLiteral { .. }
            | Type::Reflection { .. }
            | Type::Unknown { .. } => {}
        }
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Type::Intrinsic { name } | Type::Unknown { name } => write!(f, "{name}"),
            Type::StringLiteral { value } => write!(f, "\"{value}\""),
            Type::Reference {
                name,
                type_arguments,
                ..
            } => {
                write!(f, "{name}")?;
                if !type_arguments.is_empty() {
                    write!(f, "<")?;
                    for (i, arg) in type_arguments.iter().enumerate() {
                        if i > 0 {
                            write!(f, ", ")?;
                        }
                        write!(f, "{arg}")?;
                    }
                    write!(f, ">")?;
                }
                Ok(())
            }
            Type::Array { element_type } => write!(f, "{element_type}[]"),
            Type::Tuple { elements } => {
                write!(f, "[")?;
                for (i, t) in elements.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{t}")?;
                }
                write!(f, "]")
            }
            Type::Union { types } => {
                for (i, t) in types.iter().enumerate() {
                    if i > 0 {
                        write!(f, " | ")?;
                    }
                    write!(f, "{t}")?;
                }
                Ok(())
            }
            Type::Intersection { types } => {
                for (i, t) in types.iter().enumerate() {
                    if i > 0 {
                        write!(f, " & ")?;
                    }
                    write!(f, "{t}")?;
                }
                Ok(())
            }
            Type::TypeOperator { operator, target } => write!(f, "{operator} {target}"),
            Type::TypeParameter { name, .. } => write!(f, "{name}"),
            Type::Reflection { .. } => write!(f, "object"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_resolution_is_idempotent() {
        let mut ty = Type::reference("Widget", ReferenceTarget::Symbol { id: -1024 });
        let resolver = |_: &str, _: &ReferenceTarget| Some(ReflectionId(7));
        ty.resolve_references(&resolver);
        assert_eq!(ty.resolved_target(), Some(ReflectionId(7)));

        // A second pass with a different answer must not rebind.
        let other = |_: &str, _: &ReferenceTarget| Some(ReflectionId(99));
        ty.resolve_references(&other);
        assert_eq!(ty.resolved_target(), Some(ReflectionId(7)));
    }

    #[test]
    fn nested_references_are_visited() {
        let inner = Type::reference("Item", ReferenceTarget::Symbol { id: -1025 });
        let mut ty = Type::Array {
            element_type: Box::new(inner),
        };
        ty.resolve_references(&|_, _| Some(ReflectionId(3)));
        match ty {
            Type::Array { element_type } => {
                assert_eq!(element_type.resolved_target(), Some(ReflectionId(3)));
            }
            _ => unreachable!(),
        }
    }
}
