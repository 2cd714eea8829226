//! Type converters.
//!
//! A priority-ordered table of converters, each claiming the syntax nodes
//! and/or resolved types it understands. Dispatch tries node-based
//! converters first (annotations carry authorial intent the resolved type
//! has lost, aliases most of all), then type-based converters. The
//! [`unknown::UnknownConverter`] accepts every resolved type, so type
//! conversion is total.

use crate::context::Context;
use anyhow::Result;
use once_cell::sync::Lazy;
use tydoc_ast::{Node, NodeIndex, TypeData, TypeId};
use tydoc_model::Type;

pub mod alias;
pub mod array;
pub mod enums;
pub mod intrinsic;
pub mod operator;
pub mod reference;
pub mod string_literal;
pub mod tuple;
pub mod type_parameter;
pub mod union_intersection;
pub mod unknown;

/// One entry in the type conversion table.
///
/// `supports_*` must be cheap and side-effect free; the `convert_*` pair is
/// only called after the matching `supports_*` returned true. Returning
/// `Ok(None)` from a convert hook passes the type on to the next converter.
pub trait TypeConverter: Send + Sync {
    fn name(&self) -> &'static str;

    /// Higher priorities are consulted first.
    fn priority(&self) -> i32 {
        0
    }

    fn supports_node(&self, _ctx: &Context, _node: NodeIndex, _n: &Node) -> bool {
        false
    }

    fn supports_type(&self, _ctx: &Context, _id: TypeId, _data: &TypeData) -> bool {
        false
    }

    fn convert_node(&self, _ctx: &mut Context, _node: NodeIndex, _n: &Node) -> Result<Option<Type>> {
        Ok(None)
    }

    fn convert_type(&self, _ctx: &mut Context, _id: TypeId, _data: &TypeData) -> Result<Option<Type>> {
        Ok(None)
    }
}

static TYPE_CONVERTERS: Lazy<Vec<Box<dyn TypeConverter>>> = Lazy::new(|| {
    let mut converters: Vec<Box<dyn TypeConverter>> = vec![
        Box::new(type_parameter::TypeParameterConverter),
        Box::new(alias::AliasConverter),
        Box::new(enums::EnumConverter),
        Box::new(array::ArrayConverter),
        Box::new(tuple::TupleConverter),
        Box::new(union_intersection::UnionIntersectionConverter),
        Box::new(string_literal::StringLiteralConverter),
        Box::new(operator::TypeOperatorConverter),
        Box::new(intrinsic::IntrinsicConverter),
        Box::new(reference::ReferenceConverter),
        Box::new(unknown::UnknownConverter),
    ];
    converters.sort_by_key(|c| -c.priority());
    converters
});

/// The converter table, sorted by priority with registration order as the
/// tie-break.
pub fn type_converters() -> &'static [Box<dyn TypeConverter>] {
    &TYPE_CONVERTERS
}

/// Convert a list of resolved type arguments.
pub fn convert_type_ids(ctx: &mut Context, ids: &[TypeId]) -> Result<Vec<Type>> {
    let mut result = Vec::with_capacity(ids.len());
    for &id in ids {
        result.push(crate::converter::convert_type(ctx, NodeIndex::NONE, Some(id))?);
    }
    Ok(result)
}

/// Convert a list of type argument nodes.
pub fn convert_type_nodes(ctx: &mut Context, nodes: &[NodeIndex]) -> Result<Vec<Type>> {
    let mut result = Vec::with_capacity(nodes.len());
    for &node in nodes {
        let resolved = ctx.program.type_at(node);
        result.push(crate::converter::convert_type(ctx, node, resolved)?);
    }
    Ok(result)
}
