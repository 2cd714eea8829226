//! Bound type parameters resolve to whatever the context bound them to,
//! which is a concrete argument while a generic base is being re-entered.

use super::TypeConverter;
use crate::context::Context;
use anyhow::Result;
use tydoc_ast::{Node, NodeIndex, SyntaxKind, TypeData, TypeId};
use tydoc_model::Type;

pub struct TypeParameterConverter;

impl TypeConverter for TypeParameterConverter {
    fn name(&self) -> &'static str {
        "type-parameter"
    }

    fn priority(&self) -> i32 {
        110
    }

    fn supports_node(&self, ctx: &Context, _node: NodeIndex, n: &Node) -> bool {
        n.kind == SyntaxKind::TypeReference
            && n.name
                .as_deref()
                .is_some_and(|name| ctx.type_parameters.contains_key(name))
    }

    fn supports_type(&self, _ctx: &Context, _id: TypeId, data: &TypeData) -> bool {
        matches!(data, TypeData::TypeParameter { .. })
    }

    fn convert_node(&self, ctx: &mut Context, _node: NodeIndex, n: &Node) -> Result<Option<Type>> {
        let name = n.name.as_deref().unwrap_or_default();
        Ok(ctx.type_parameters.get(name).cloned())
    }

    fn convert_type(&self, ctx: &mut Context, _id: TypeId, data: &TypeData) -> Result<Option<Type>> {
        let TypeData::TypeParameter { name } = data else {
            return Ok(None);
        };
        if let Some(bound) = ctx.type_parameters.get(name) {
            return Ok(Some(bound.clone()));
        }
        // Unbound parameters leak out of signatures the checker synthesized;
        // keep the name rather than failing.
        Ok(Some(Type::TypeParameter {
            name: name.clone(),
            constraint: None,
        }))
    }
}
