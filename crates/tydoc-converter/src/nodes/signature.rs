//! Call, construct and index signature members of interfaces and type
//! literals. These attach directly to the containing reflection rather
//! than forming a named child.

use crate::context::Context;
use crate::factories::create_signature;
use anyhow::Result;
use tydoc_ast::{NodeIndex, SyntaxKind};
use tydoc_model::{ReflectionId, ReflectionKind};

pub fn convert_signature_member(
    ctx: &mut Context,
    node: NodeIndex,
) -> Result<Option<ReflectionId>> {
    let (name, kind) = match ctx.program.arena.kind(node) {
        Some(SyntaxKind::CallSignature) => ("__call", ReflectionKind::CallSignature),
        Some(SyntaxKind::ConstructSignature) => ("__new", ReflectionKind::ConstructorSignature),
        Some(SyntaxKind::IndexSignature) => ("__index", ReflectionKind::IndexSignature),
        _ => return Ok(None),
    };
    let signature = create_signature(ctx, node, name, kind)?;
    let container = ctx.scope;
    if let Some(r) = ctx.project.get_mut(container) {
        if kind == ReflectionKind::IndexSignature {
            r.index_signature = Some(signature);
        } else {
            r.signatures.push(signature);
        }
    }
    Ok(Some(signature))
}
