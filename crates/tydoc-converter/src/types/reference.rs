//! The reference fallback for object types and type references nothing
//! more specific claimed.
//!
//! Three outcomes:
//! - no symbol behind the type: the checker synthesized it, rendered as the
//!   `Object` intrinsic
//! - an anonymous type or object literal symbol: a synthesized
//!   `TypeLiteral` reflection, memoized per symbol so repeated annotations
//!   share one declaration
//! - a named symbol: a reference carrying a registry placeholder id for the
//!   resolution pass to patch

use super::{TypeConverter, convert_type_ids, convert_type_nodes};
use crate::context::Context;
use crate::converter::convert_node;
use anyhow::Result;
use tydoc_ast::{Node, NodeIndex, SymbolId, SyntaxKind, TypeData, TypeId, symbol_flags};
use tydoc_model::{ReflectionId, ReflectionKind, Type};

pub struct ReferenceConverter;

impl TypeConverter for ReferenceConverter {
    fn name(&self) -> &'static str {
        "reference"
    }

    fn priority(&self) -> i32 {
        -50
    }

    fn supports_node(&self, _ctx: &Context, _node: NodeIndex, n: &Node) -> bool {
        n.kind == SyntaxKind::TypeReference
    }

    fn supports_type(&self, _ctx: &Context, _id: TypeId, data: &TypeData) -> bool {
        matches!(data, TypeData::Object { .. })
    }

    fn convert_node(&self, ctx: &mut Context, node: NodeIndex, n: &Node) -> Result<Option<Type>> {
        let symbol = ctx
            .program
            .type_at(node)
            .and_then(|ty| ctx.program.types.symbol_of(ty))
            .or(n.symbol);
        let Some(symbol_id) = symbol else {
            return Ok(Some(Type::intrinsic("Object")));
        };
        if is_literal_symbol(ctx, symbol_id) {
            return Ok(Some(literal_reflection(ctx, symbol_id)?));
        }
        let name = symbol_name(ctx, symbol_id);
        let mut reference = ctx.reference_to(name, Some(symbol_id));
        if let Type::Reference { type_arguments, .. } = &mut reference {
            *type_arguments = convert_type_nodes(ctx, &n.type_arguments)?;
        }
        Ok(Some(reference))
    }

    fn convert_type(&self, ctx: &mut Context, id: TypeId, data: &TypeData) -> Result<Option<Type>> {
        let TypeData::Object { type_arguments, .. } = data else {
            return Ok(None);
        };
        let Some(symbol_id) = ctx.program.types.symbol_of(id) else {
            return Ok(Some(Type::intrinsic("Object")));
        };
        if is_literal_symbol(ctx, symbol_id) {
            return Ok(Some(literal_reflection(ctx, symbol_id)?));
        }
        let name = symbol_name(ctx, symbol_id);
        let mut reference = ctx.reference_to(name, Some(symbol_id));
        if let Type::Reference {
            type_arguments: args,
            ..
        } = &mut reference
        {
            *args = convert_type_ids(ctx, type_arguments)?;
        }
        Ok(Some(reference))
    }
}

fn is_literal_symbol(ctx: &Context, symbol: SymbolId) -> bool {
    ctx.program
        .symbol(symbol)
        .is_some_and(|s| s.has_flag(symbol_flags::TYPE_LITERAL | symbol_flags::OBJECT_LITERAL))
}

fn symbol_name(ctx: &Context, symbol: SymbolId) -> String {
    ctx.program
        .symbol(symbol)
        .map(|s| s.name.clone())
        .unwrap_or_default()
}

/// Synthesize (or reuse) the `TypeLiteral` reflection for an anonymous
/// type's symbol. The memo entry is written before the members convert so a
/// self-referential literal terminates.
fn literal_reflection(ctx: &mut Context, symbol: SymbolId) -> Result<Type> {
    if let Some(&existing) = ctx.literal_memo.get(&symbol.0) {
        return Ok(Type::Reflection {
            declaration: existing,
        });
    }
    let declaration: ReflectionId =
        ctx.project
            .create_reflection("__type", ReflectionKind::TypeLiteral, Some(ctx.scope));
    ctx.literal_memo.insert(symbol.0, declaration);

    let members: Vec<NodeIndex> = ctx
        .program
        .declarations_of(symbol)
        .first()
        .and_then(|&decl| ctx.program.arena.get(decl))
        .map(|n| n.children.to_vec())
        .unwrap_or_default();
    ctx.with_scope(declaration, None, true, |ctx| {
        for member in members {
            convert_node(ctx, member)?;
        }
        Ok(())
    })?;

    Ok(Type::Reflection { declaration })
}
