//! Namespace declarations.

use crate::context::Context;
use crate::converter::convert_node;
use crate::factories::create_declaration;
use anyhow::Result;
use tydoc_ast::NodeIndex;
use tydoc_model::{ReflectionId, ReflectionKind};

pub fn convert_module(ctx: &mut Context, node: NodeIndex) -> Result<Option<ReflectionId>> {
    let Some(id) = create_declaration(ctx, node, ReflectionKind::Namespace, None)? else {
        return Ok(None);
    };
    let statements = ctx.program.statements_of(node).to_vec();
    ctx.with_scope(id, None, false, |ctx| {
        for statement in statements {
            convert_node(ctx, statement)?;
        }
        Ok(())
    })?;
    Ok(Some(id))
}
