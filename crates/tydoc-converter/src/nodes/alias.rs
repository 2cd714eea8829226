//! Type alias declarations. The aliased definition becomes the
//! reflection's type; references to the alias elsewhere keep its name.

use crate::context::Context;
use crate::converter::convert_type;
use crate::factories::create_declaration;
use anyhow::Result;
use tydoc_ast::NodeIndex;
use tydoc_model::{ReflectionId, ReflectionKind};

pub fn convert_type_alias(ctx: &mut Context, node: NodeIndex) -> Result<Option<ReflectionId>> {
    let Some(id) = create_declaration(ctx, node, ReflectionKind::TypeAlias, None)? else {
        return Ok(None);
    };
    let (type_params, type_node) = match ctx.program.arena.get(node) {
        Some(n) => (n.type_parameters.clone(), n.type_node),
        None => return Ok(Some(id)),
    };
    ctx.with_scope(id, Some(&type_params), false, |ctx| {
        let resolved = ctx.program.type_at(type_node);
        let aliased = convert_type(ctx, type_node, resolved)?;
        if let Some(r) = ctx.project.get_mut(id) {
            r.type_ = Some(aliased);
        }
        Ok(())
    })?;
    Ok(Some(id))
}
