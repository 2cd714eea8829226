//! Get and set accessors. Both declarations of an accessor pair merge into
//! one `Accessor` reflection carrying up to one signature per direction.

use crate::context::Context;
use crate::factories::{create_declaration, create_signature};
use anyhow::Result;
use tydoc_ast::{NodeIndex, SyntaxKind};
use tydoc_model::{ReflectionId, ReflectionKind};

pub fn convert_accessor(ctx: &mut Context, node: NodeIndex) -> Result<Option<ReflectionId>> {
    let Some(id) = create_declaration(ctx, node, ReflectionKind::Accessor, None)? else {
        return Ok(None);
    };
    let name = ctx
        .project
        .get(id)
        .map(|r| r.name.clone())
        .unwrap_or_default();
    let kind = ctx.program.arena.kind(node);

    ctx.with_scope(id, None, true, |ctx| {
        match kind {
            Some(SyntaxKind::GetAccessor) => {
                let signature =
                    create_signature(ctx, node, &name, ReflectionKind::GetSignature)?;
                if let Some(r) = ctx.project.get_mut(id) {
                    r.get_signature = Some(signature);
                }
            }
            Some(SyntaxKind::SetAccessor) => {
                let signature =
                    create_signature(ctx, node, &name, ReflectionKind::SetSignature)?;
                if let Some(r) = ctx.project.get_mut(id) {
                    r.set_signature = Some(signature);
                }
            }
            _ => {}
        }
        Ok(())
    })?;
    Ok(Some(id))
}
