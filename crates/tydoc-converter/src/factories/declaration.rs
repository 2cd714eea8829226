//! Declaration factory: the single entry point through which every named
//! reflection is created or merged.

use crate::context::Context;
use anyhow::{Result, bail};
use tracing::trace;
use tydoc_ast::{ModifierFlags, NodeIndex};
use tydoc_model::{ReflectionFlags, ReflectionId, ReflectionKind};

/// Create a declaration reflection for `node` in the current scope, or
/// merge it into an existing child with the same name and staticness.
///
/// Returns `None` when the declaration is excluded by policy, carries no
/// usable name, or is an overwrite seen during an inherit pass.
pub fn create_declaration(
    ctx: &mut Context,
    node: NodeIndex,
    kind: ReflectionKind,
    name: Option<String>,
) -> Result<Option<ReflectionId>> {
    // The inherit pass re-enters the base declaration node itself; its
    // members belong to the current scope, not to a new child.
    if ctx.is_inherit && ctx.inherit_parent == node {
        return Ok(Some(ctx.scope));
    }

    let Some(container) = ctx.scope_reflection() else {
        bail!("conversion scope {:?} no longer exists", ctx.scope);
    };
    if !container.is_container() {
        bail!(
            "expected a container scope for {:?}, found {:?} `{}`",
            kind,
            container.kind,
            container.name
        );
    }
    let container_kind = container.kind;
    let container_exported = container.flags.is_exported();

    let Some(n) = ctx.program.arena.get(node) else {
        return Ok(None);
    };
    let name = match name
        .or_else(|| n.name.clone())
        .or_else(|| {
            n.symbol
                .and_then(|s| ctx.program.symbol(s))
                .map(|s| s.name.clone())
        }) {
        Some(name) => name,
        None => {
            trace!(kind = ?n.kind, "unnamed declaration, skipping");
            return Ok(None);
        }
    };

    // Members of namespaces and file modules must carry their own export
    // keyword; members of classes, interfaces and enums inherit the
    // container's visibility.
    let exported = if matches!(
        container_kind,
        ReflectionKind::Module | ReflectionKind::Namespace
    ) {
        n.has_modifier(ModifierFlags::EXPORT)
    } else {
        container_exported || n.has_modifier(ModifierFlags::EXPORT)
    };

    if !exported && ctx.options.exclude_not_exported && !ctx.is_inherit {
        return Ok(None);
    }
    let is_private = n.has_modifier(ModifierFlags::PRIVATE);
    if is_private && ctx.options.exclude_private {
        return Ok(None);
    }
    let is_protected = n.has_modifier(ModifierFlags::PROTECTED);
    if is_protected && ctx.options.exclude_protected {
        return Ok(None);
    }

    let is_static = n.has_modifier(ModifierFlags::STATIC);

    // A redeclaration of a member the scope already had before the inherit
    // pass started is an overwrite of the base member, not a new child.
    if ctx.is_inherit && ctx.inherited.iter().any(|i| *i == name) {
        if let Some(existing) = ctx.project.find_child(ctx.scope, &name, is_static) {
            let overwrites = ctx.base_member_reference(node, &name);
            if let Some(r) = ctx.project.get_mut(existing) {
                if r.overwrites.is_none() {
                    r.overwrites = Some(overwrites);
                }
            }
        }
        return Ok(None);
    }

    if let Some(existing) = ctx.project.find_child(ctx.scope, &name, is_static) {
        // Declaration merging: the strongest declared form wins the kind.
        if let Some(r) = ctx.project.get_mut(existing) {
            if kind.merge_weight() > r.kind.merge_weight() {
                trace!(name = %name, from = ?r.kind, to = ?kind, "merge upgrades kind");
                r.kind = kind;
            }
            if exported {
                r.set_flag(ReflectionFlags::EXPORTED, true);
            }
        }
        ctx.fire_create_declaration(existing, node);
        return Ok(Some(existing));
    }

    let id = ctx.project.create_reflection(&name, kind, Some(ctx.scope));
    let inherited_from = ctx
        .is_inherit
        .then(|| ctx.base_member_reference(node, &name));

    let flags = declaration_flags(ctx, n.flags, exported, is_private, is_protected);
    if let Some(r) = ctx.project.get_mut(id) {
        r.flags = flags;
        r.inherited_from = inherited_from;
    }
    if let Some(container) = ctx.project.get_mut(ctx.scope) {
        container.children.push(id);
    }
    ctx.register_reflection(id, n.symbol);
    ctx.fire_create_declaration(id, node);
    Ok(Some(id))
}

fn declaration_flags(
    ctx: &Context,
    modifiers: ModifierFlags,
    exported: bool,
    is_private: bool,
    is_protected: bool,
) -> ReflectionFlags {
    let mut flags = ReflectionFlags::empty();
    flags.set(ReflectionFlags::EXPORTED, exported);
    flags.set(ReflectionFlags::EXTERNAL, ctx.is_external);
    flags.set(ReflectionFlags::PRIVATE, is_private);
    flags.set(ReflectionFlags::PROTECTED, is_protected);
    flags.set(
        ReflectionFlags::PUBLIC,
        modifiers.contains(ModifierFlags::PUBLIC),
    );
    flags.set(
        ReflectionFlags::STATIC,
        modifiers.contains(ModifierFlags::STATIC),
    );
    flags.set(
        ReflectionFlags::OPTIONAL,
        modifiers.contains(ModifierFlags::OPTIONAL),
    );
    flags.set(
        ReflectionFlags::REST,
        modifiers.contains(ModifierFlags::REST),
    );
    flags.set(
        ReflectionFlags::ABSTRACT,
        modifiers.contains(ModifierFlags::ABSTRACT),
    );
    flags.set(
        ReflectionFlags::CONST_VARIABLE,
        modifiers.contains(ModifierFlags::CONST),
    );
    flags.set(
        ReflectionFlags::LET_VARIABLE,
        modifiers.contains(ModifierFlags::LET),
    );
    flags
}
