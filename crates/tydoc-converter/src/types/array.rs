//! Arrays, in both of their spellings: the `T[]` syntax node and the
//! resolved `Array<T>` reference type.

use super::{TypeConverter, convert_type_ids};
use crate::context::Context;
use crate::converter::convert_type;
use anyhow::Result;
use tydoc_ast::{Node, NodeIndex, SyntaxKind, TypeData, TypeId};
use tydoc_model::Type;

pub struct ArrayConverter;

impl TypeConverter for ArrayConverter {
    fn name(&self) -> &'static str {
        "array"
    }

    fn priority(&self) -> i32 {
        50
    }

    fn supports_node(&self, _ctx: &Context, _node: NodeIndex, n: &Node) -> bool {
        n.kind == SyntaxKind::ArrayType
    }

    fn supports_type(&self, ctx: &Context, id: TypeId, data: &TypeData) -> bool {
        let TypeData::Object { type_arguments, .. } = data else {
            return false;
        };
        type_arguments.len() == 1
            && ctx
                .program
                .types
                .symbol_of(id)
                .and_then(|s| ctx.program.symbol(s))
                .is_some_and(|s| s.name == "Array")
    }

    fn convert_node(&self, ctx: &mut Context, _node: NodeIndex, n: &Node) -> Result<Option<Type>> {
        let element_node = n.type_node;
        let resolved = ctx.program.type_at(element_node);
        let element_type = convert_type(ctx, element_node, resolved)?;
        Ok(Some(Type::Array {
            element_type: Box::new(element_type),
        }))
    }

    fn convert_type(&self, ctx: &mut Context, _id: TypeId, data: &TypeData) -> Result<Option<Type>> {
        let TypeData::Object { type_arguments, .. } = data else {
            return Ok(None);
        };
        let mut elements = convert_type_ids(ctx, type_arguments)?;
        let element_type = elements.pop().unwrap_or_else(|| Type::intrinsic("any"));
        Ok(Some(Type::Array {
            element_type: Box::new(element_type),
        }))
    }
}
