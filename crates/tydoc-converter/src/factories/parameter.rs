//! Parameter factory.

use crate::context::Context;
use crate::converter::convert_type;
use anyhow::{Result, bail};
use tydoc_ast::{ModifierFlags, NodeIndex};
use tydoc_model::{ReflectionFlags, ReflectionId, ReflectionKind};

/// Name given to destructuring parameters, which have no identifier of
/// their own.
const BINDING_PATTERN_NAME: &str = "__namedParameters";

pub fn create_parameter(ctx: &mut Context, node: NodeIndex) -> Result<Option<ReflectionId>> {
    let Some(signature) = ctx.scope_reflection() else {
        bail!("conversion scope {:?} no longer exists", ctx.scope);
    };
    if !signature.kind.is_signature() {
        bail!(
            "expected a signature scope for a parameter, found {:?} `{}`",
            signature.kind,
            signature.name
        );
    }

    let Some(n) = ctx.program.arena.get(node) else {
        return Ok(None);
    };
    // Destructuring parameters have a binding pattern where an identifier
    // would be.
    let name = n
        .name
        .clone()
        .unwrap_or_else(|| BINDING_PATTERN_NAME.to_string());

    let id = ctx
        .project
        .create_reflection(&name, ReflectionKind::Parameter, Some(ctx.scope));

    let mut flags = ReflectionFlags::empty();
    flags.set(
        ReflectionFlags::OPTIONAL,
        n.has_modifier(ModifierFlags::OPTIONAL) || n.initializer.is_some(),
    );
    flags.set(ReflectionFlags::REST, n.has_modifier(ModifierFlags::REST));

    let default_value = ctx
        .program
        .arena
        .get(n.initializer)
        .and_then(|init| init.text.clone());

    let type_node = n.type_node;
    let resolved = ctx.type_at_location(node);
    let parameter_type = convert_type(ctx, type_node, resolved)?;

    if let Some(r) = ctx.project.get_mut(id) {
        r.flags = flags;
        r.type_ = Some(parameter_type);
        r.default_value = default_value;
    }
    if let Some(parent) = ctx.project.get_mut(ctx.scope) {
        parent.parameters.push(id);
    }
    ctx.fire_create_parameter(id, node);
    Ok(Some(id))
}
