//! Object literal and type literal bodies: their members convert directly
//! into the current scope.

use crate::context::Context;
use crate::converter::convert_node;
use anyhow::Result;
use tydoc_ast::NodeIndex;
use tydoc_model::ReflectionId;

pub fn convert_members(ctx: &mut Context, node: NodeIndex) -> Result<Option<ReflectionId>> {
    let members = match ctx.program.arena.get(node) {
        Some(n) => n.children.to_vec(),
        None => return Ok(None),
    };
    for member in members {
        convert_node(ctx, member)?;
    }
    Ok(Some(ctx.scope))
}
