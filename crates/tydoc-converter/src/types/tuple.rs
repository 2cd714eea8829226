//! Tuples. The resolved form is an instantiation whose tuple-ness may sit
//! on the generic target rather than the instantiation itself.

use super::{TypeConverter, convert_type_ids, convert_type_nodes};
use crate::context::Context;
use anyhow::Result;
use tydoc_ast::{Node, NodeIndex, SyntaxKind, TypeData, TypeId};
use tydoc_model::Type;

pub struct TupleConverter;

impl TypeConverter for TupleConverter {
    fn name(&self) -> &'static str {
        "tuple"
    }

    fn priority(&self) -> i32 {
        50
    }

    fn supports_node(&self, _ctx: &Context, _node: NodeIndex, n: &Node) -> bool {
        n.kind == SyntaxKind::TupleType
    }

    fn supports_type(&self, ctx: &Context, id: TypeId, _data: &TypeData) -> bool {
        ctx.program.types.is_tuple(id)
    }

    fn convert_node(&self, ctx: &mut Context, _node: NodeIndex, n: &Node) -> Result<Option<Type>> {
        let elements = convert_type_nodes(ctx, &n.children)?;
        Ok(Some(Type::Tuple { elements }))
    }

    fn convert_type(&self, ctx: &mut Context, _id: TypeId, data: &TypeData) -> Result<Option<Type>> {
        let TypeData::Object { type_arguments, .. } = data else {
            return Ok(None);
        };
        let elements = convert_type_ids(ctx, type_arguments)?;
        Ok(Some(Type::Tuple { elements }))
    }
}
