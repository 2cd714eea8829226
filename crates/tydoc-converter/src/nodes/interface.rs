//! Interface declarations. Interfaces share the class heritage walk; their
//! `extends` clauses both record extended types and inherit members.

use crate::context::Context;
use crate::converter::convert_node;
use crate::factories::create_declaration;
use crate::nodes::class::convert_heritage;
use anyhow::Result;
use tydoc_ast::NodeIndex;
use tydoc_model::{ReflectionId, ReflectionKind};

pub fn convert_interface(ctx: &mut Context, node: NodeIndex) -> Result<Option<ReflectionId>> {
    let Some(id) = create_declaration(ctx, node, ReflectionKind::Interface, None)? else {
        return Ok(None);
    };
    let (type_params, members, heritage) = match ctx.program.arena.get(node) {
        Some(n) => (
            n.type_parameters.clone(),
            n.children.to_vec(),
            n.heritage_clauses.clone(),
        ),
        None => return Ok(Some(id)),
    };
    ctx.with_scope(id, Some(&type_params), false, |ctx| {
        for member in members {
            convert_node(ctx, member)?;
        }
        convert_heritage(ctx, id, &heritage)
    })?;
    Ok(Some(id))
}
