//! Type-parameter factory.
//!
//! Binds each declared type parameter in the context, substituting a
//! pending type argument when one is available. Substitution happens while
//! re-entering a generic base with concrete arguments; in that mode the
//! parameter names resolve to the arguments and no reflections are created.

use crate::context::Context;
use crate::converter::convert_type;
use anyhow::Result;
use tydoc_ast::NodeIndex;
use tydoc_model::{ReflectionKind, Type};

pub fn create_type_parameters(
    ctx: &mut Context,
    nodes: &[NodeIndex],
    args: &[Type],
) -> Result<()> {
    for (index, &node) in nodes.iter().enumerate() {
        let Some(n) = ctx.program.arena.get(node) else {
            continue;
        };
        let Some(name) = n.name.clone() else {
            continue;
        };

        if let Some(arg) = args.get(index) {
            ctx.type_parameters.insert(name, arg.clone());
            continue;
        }

        let constraint_node = n.type_node;
        let constraint = if constraint_node.is_some() {
            let resolved = ctx.program.type_at(constraint_node);
            Some(convert_type(ctx, constraint_node, resolved)?)
        } else {
            None
        };

        ctx.type_parameters.insert(
            name.clone(),
            Type::TypeParameter {
                name: name.clone(),
                constraint: constraint.clone().map(Box::new),
            },
        );

        if !ctx.is_inherit {
            let id = ctx
                .project
                .create_reflection(&name, ReflectionKind::TypeParameter, Some(ctx.scope));
            if let Some(r) = ctx.project.get_mut(id) {
                r.type_ = constraint;
            }
            if let Some(parent) = ctx.project.get_mut(ctx.scope) {
                parent.type_parameters.push(id);
            }
            ctx.fire_create_type_parameter(id, node);
        }
    }
    Ok(())
}
