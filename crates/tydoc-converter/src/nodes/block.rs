//! Source files.
//!
//! Every file becomes a module reflection named with the quoted file path;
//! the dynamic-module plugin trims the common base path during resolution.
//! File modules are exported by definition (their members still need their
//! own `export`), except ambient declaration files.

use crate::context::Context;
use crate::converter::convert_node;
use anyhow::Result;
use tracing::debug;
use tydoc_ast::NodeIndex;
use tydoc_model::{ReflectionFlags, ReflectionId, ReflectionKind};

pub fn convert_source_file(ctx: &mut Context, node: NodeIndex) -> Result<Option<ReflectionId>> {
    let file_name = ctx
        .program
        .file_name_of(node)
        .unwrap_or_default()
        .to_string();
    debug!(file = %file_name, "converting source file");
    let name = format!("\"{file_name}\"");

    // Re-entry for the same file (export assignments reach back into it)
    // merges into the existing module.
    let id = match ctx.project.find_child(ctx.scope, &name, false) {
        Some(existing) => existing,
        None => {
            let id = ctx
                .project
                .create_reflection(&name, ReflectionKind::Module, Some(ctx.scope));
            if let Some(r) = ctx.project.get_mut(id) {
                r.set_flag(ReflectionFlags::EXPORTED, !ctx.is_declaration);
                r.set_flag(ReflectionFlags::EXTERNAL, ctx.is_external);
            }
            if let Some(root) = ctx.project.get_mut(ctx.scope) {
                root.children.push(id);
            }
            ctx.register_reflection(id, ctx.program.symbol_of(node));
            ctx.fire_create_declaration(id, node);
            id
        }
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
