//! Signature factory. Signatures are never merged: every call, construct,
//! index or accessor signature node produces its own reflection.

use crate::context::Context;
use crate::converter::convert_type;
use crate::factories::create_parameter;
use anyhow::Result;
use tydoc_ast::NodeIndex;
use tydoc_model::{ReflectionId, ReflectionKind, Type};

/// Create a signature reflection for `node` under the current scope.
///
/// The signature opens its own scope for its type parameters (outer
/// bindings stay visible, a generic method can use its class's generics)
/// and converts its parameters and return type inside it. Attaching the
/// result to the parent's `signatures`/accessor slots is the caller's job.
pub fn create_signature(
    ctx: &mut Context,
    node: NodeIndex,
    name: &str,
    kind: ReflectionKind,
) -> Result<ReflectionId> {
    let id = ctx.project.create_reflection(name, kind, Some(ctx.scope));
    if ctx.is_inherit {
        let inherited_from = ctx.base_member_reference(node, name);
        if let Some(r) = ctx.project.get_mut(id) {
            r.inherited_from = Some(inherited_from);
        }
    }

    let (type_params, param_nodes) = match ctx.program.arena.get(node) {
        Some(n) => (n.type_parameters.clone(), n.parameters.clone()),
        None => (Vec::new(), Vec::new()),
    };

    ctx.with_scope(id, Some(&type_params), true, |ctx| {
        for &param in &param_nodes {
            create_parameter(ctx, param)?;
        }
        let return_type = convert_return_type(ctx, node)?;
        if let Some(r) = ctx.project.get_mut(id) {
            r.type_ = Some(return_type);
        }
        Ok(())
    })?;

    ctx.fire_create_signature(id, node);
    Ok(id)
}

/// The checker's resolved return type wins when it has one; otherwise the
/// declared annotation, then the resolved type of the whole declaration as
/// a last resort.
fn convert_return_type(ctx: &mut Context, node: NodeIndex) -> Result<Type> {
    if let Some(ty) = ctx.program.return_type_of(node) {
        return convert_type(ctx, NodeIndex::NONE, Some(ty));
    }
    let type_node = ctx
        .program
        .arena
        .get(node)
        .map(|n| n.type_node)
        .unwrap_or(NodeIndex::NONE);
    if type_node.is_some() {
        let resolved = ctx.program.type_at(type_node);
        return convert_type(ctx, type_node, resolved);
    }
    let resolved = ctx.type_at_location(node);
    convert_type(ctx, NodeIndex::NONE, resolved)
}
