//! Enum declarations and their members.

use crate::context::Context;
use crate::converter::convert_node;
use crate::factories::create_declaration;
use anyhow::Result;
use tydoc_ast::NodeIndex;
use tydoc_model::{ReflectionId, ReflectionKind};

pub fn convert_enum(ctx: &mut Context, node: NodeIndex) -> Result<Option<ReflectionId>> {
    let Some(id) = create_declaration(ctx, node, ReflectionKind::Enum, None)? else {
        return Ok(None);
    };
    let members = match ctx.program.arena.get(node) {
        Some(n) => n.children.to_vec(),
        None => Vec::new(),
    };
    ctx.with_scope(id, None, false, |ctx| {
        for member in members {
            convert_node(ctx, member)?;
        }
        Ok(())
    })?;
    Ok(Some(id))
}

pub fn convert_enum_member(ctx: &mut Context, node: NodeIndex) -> Result<Option<ReflectionId>> {
    let Some(id) = create_declaration(ctx, node, ReflectionKind::EnumMember, None)? else {
        return Ok(None);
    };
    let default_value = ctx
        .program
        .arena
        .get(node)
        .and_then(|n| ctx.program.arena.get(n.initializer))
        .and_then(|init| init.text.clone());
    if let Some(r) = ctx.project.get_mut(id) {
        r.default_value = default_value;
    }
    Ok(Some(id))
}
