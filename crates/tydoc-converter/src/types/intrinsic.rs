//! Intrinsic keyword types (`string`, `number`, `void`, ...).

use super::TypeConverter;
use crate::context::Context;
use anyhow::Result;
use tydoc_ast::{Node, NodeIndex, TypeData, TypeId};
use tydoc_model::Type;

pub struct IntrinsicConverter;

impl TypeConverter for IntrinsicConverter {
    fn name(&self) -> &'static str {
        "intrinsic"
    }

    fn priority(&self) -> i32 {
        50
    }

    fn supports_node(&self, _ctx: &Context, _node: NodeIndex, n: &Node) -> bool {
        n.kind.intrinsic_name().is_some()
    }

    fn supports_type(&self, _ctx: &Context, _id: TypeId, data: &TypeData) -> bool {
        matches!(data, TypeData::Intrinsic(_))
    }

    fn convert_node(&self, _ctx: &mut Context, _node: NodeIndex, n: &Node) -> Result<Option<Type>> {
        Ok(n.kind.intrinsic_name().map(Type::intrinsic))
    }

    fn convert_type(&self, _ctx: &mut Context, _id: TypeId, data: &TypeData) -> Result<Option<Type>> {
        let TypeData::Intrinsic(name) = data else {
            return Ok(None);
        };
        Ok(Some(Type::intrinsic(name)))
    }
}
