//! Union and intersection types.

use super::{TypeConverter, convert_type_ids, convert_type_nodes};
use crate::context::Context;
use anyhow::Result;
use tydoc_ast::{Node, NodeIndex, SyntaxKind, TypeData, TypeId};
use tydoc_model::Type;

pub struct UnionIntersectionConverter;

impl TypeConverter for UnionIntersectionConverter {
    fn name(&self) -> &'static str {
        "union-intersection"
    }

    fn priority(&self) -> i32 {
        50
    }

    fn supports_node(&self, _ctx: &Context, _node: NodeIndex, n: &Node) -> bool {
        matches!(n.kind, SyntaxKind::UnionType | SyntaxKind::IntersectionType)
    }

    fn supports_type(&self, _ctx: &Context, _id: TypeId, data: &TypeData) -> bool {
        matches!(data, TypeData::Union(_) | TypeData::Intersection(_))
    }

    fn convert_node(&self, ctx: &mut Context, _node: NodeIndex, n: &Node) -> Result<Option<Type>> {
        let types = convert_type_nodes(ctx, &n.children)?;
        Ok(Some(match n.kind {
            SyntaxKind::IntersectionType => Type::Intersection { types },
            _ => Type::Union { types },
        }))
    }

    fn convert_type(&self, ctx: &mut Context, _id: TypeId, data: &TypeData) -> Result<Option<Type>> {
        Ok(Some(match data {
            TypeData::Union(members) => Type::Union {
                types: convert_type_ids(ctx, members)?,
            },
            TypeData::Intersection(members) => Type::Intersection {
                types: convert_type_ids(ctx, members)?,
            },
            _ => return Ok(None),
        }))
    }
}
