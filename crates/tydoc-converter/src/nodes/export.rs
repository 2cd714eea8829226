//! Export assignments (`export = widget` / `export default widget`).
//!
//! The exported symbol's declarations are converted if they have not been
//! already, then the matching reflection and everything under it is marked
//! exported.

use crate::context::Context;
use crate::converter::convert_node;
use anyhow::Result;
use tracing::trace;
use tydoc_ast::{ModifierFlags, NodeIndex};
use tydoc_model::{ReflectionFlags, ReflectionId};

pub fn convert_export_assignment(
    ctx: &mut Context,
    node: NodeIndex,
) -> Result<Option<ReflectionId>> {
    let Some(n) = ctx.program.arena.get(node) else {
        return Ok(None);
    };
    let is_export_equals = n.has_modifier(ModifierFlags::EXPORT_EQUALS);
    let Some(symbol) = n.symbol.or_else(|| ctx.program.symbol_of(node)) else {
        trace!("export assignment without a resolved symbol, skipping");
        return Ok(None);
    };

    for &declaration in ctx.program.declarations_of(symbol) {
        convert_node(ctx, declaration)?;
    }

    let Some(placeholder) = ctx.registry.symbol_id(Some(symbol)) else {
        return Ok(None);
    };
    let Some(&target) = ctx.project.symbol_mapping.get(&placeholder) else {
        return Ok(None);
    };
    if let Some(r) = ctx.project.get_mut(target) {
        r.set_flag(ReflectionFlags::EXPORT_ASSIGNMENT, is_export_equals);
    }
    ctx.project.mark_exported_recursive(target);
    Ok(Some(target))
}
