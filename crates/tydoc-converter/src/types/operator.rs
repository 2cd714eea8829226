//! Type operators (`keyof T`).

use super::TypeConverter;
use crate::context::Context;
use crate::converter::convert_type;
use anyhow::Result;
use tydoc_ast::{Node, NodeIndex, SyntaxKind};
use tydoc_model::Type;

pub struct TypeOperatorConverter;

impl TypeConverter for TypeOperatorConverter {
    fn name(&self) -> &'static str {
        "type-operator"
    }

    fn priority(&self) -> i32 {
        50
    }

    fn supports_node(&self, _ctx: &Context, _node: NodeIndex, n: &Node) -> bool {
        n.kind == SyntaxKind::TypeOperator
    }

    fn convert_node(&self, ctx: &mut Context, _node: NodeIndex, n: &Node) -> Result<Option<Type>> {
        let target_node = n.type_node;
        let resolved = ctx.program.type_at(target_node);
        let target = convert_type(ctx, target_node, resolved)?;
        Ok(Some(Type::TypeOperator {
            operator: n.text.clone().unwrap_or_else(|| "keyof".to_string()),
            target: Box::new(target),
        }))
    }
}
