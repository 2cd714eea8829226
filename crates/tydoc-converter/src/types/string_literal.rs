//! String literal types.

use super::TypeConverter;
use crate::context::Context;
use anyhow::Result;
use tydoc_ast::{Node, NodeIndex, SyntaxKind, TypeData, TypeId};
use tydoc_model::Type;

pub struct StringLiteralConverter;

impl TypeConverter for StringLiteralConverter {
    fn name(&self) -> &'static str {
        "string-literal"
    }

    fn priority(&self) -> i32 {
        50
    }

    fn supports_node(&self, _ctx: &Context, _node: NodeIndex, n: &Node) -> bool {
        n.kind == SyntaxKind::StringLiteralType
    }

    fn supports_type(&self, _ctx: &Context, _id: TypeId, data: &TypeData) -> bool {
        matches!(data, TypeData::StringLiteral(_))
    }

    fn convert_node(&self, _ctx: &mut Context, _node: NodeIndex, n: &Node) -> Result<Option<Type>> {
        Ok(Some(Type::StringLiteral {
            value: n.text.clone().unwrap_or_default(),
        }))
    }

    fn convert_type(&self, _ctx: &mut Context, _id: TypeId, data: &TypeData) -> Result<Option<Type>> {
        let TypeData::StringLiteral(value) = data else {
            return Ok(None);
        };
        Ok(Some(Type::StringLiteral {
            value: value.clone(),
        }))
    }
}
