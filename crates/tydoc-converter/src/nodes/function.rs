//! Functions, methods and constructors.
//!
//! Overload accumulation: every bodyless declaration adds a call signature
//! to the same reflection. An implementation whose overloads were already
//! collected contributes no signature of its own and only announces itself
//! through the function-implementation event.

use crate::comment::parse_comment;
use crate::context::Context;
use crate::factories::{create_declaration, create_signature};
use anyhow::Result;
use tydoc_ast::{ModifierFlags, NodeIndex};
use tydoc_model::{Comment, ReferenceTarget, ReflectionFlags, ReflectionId, ReflectionKind, Type};

pub fn convert_function(ctx: &mut Context, node: NodeIndex) -> Result<Option<ReflectionId>> {
    let kind = if ctx
        .scope_reflection()
        .is_some_and(|scope| !matches!(scope.kind, ReflectionKind::Module | ReflectionKind::Namespace | ReflectionKind::Project))
    {
        ReflectionKind::Method
    } else {
        ReflectionKind::Function
    };
    let Some(id) = create_declaration(ctx, node, kind, None)? else {
        return Ok(None);
    };
    let name = ctx
        .project
        .get(id)
        .map(|r| r.name.clone())
        .unwrap_or_default();
    let has_body = ctx
        .program
        .arena
        .get(node)
        .is_some_and(|n| n.has_modifier(ModifierFlags::HAS_BODY));
    let has_signatures = ctx
        .project
        .get(id)
        .is_some_and(|r| !r.signatures.is_empty());

    if has_body && has_signatures {
        ctx.fire_function_implementation(id, node);
        return Ok(Some(id));
    }

    ctx.with_scope(id, None, true, |ctx| {
        let signature = create_signature(ctx, node, &name, ReflectionKind::CallSignature)?;
        if let Some(r) = ctx.project.get_mut(id) {
            r.signatures.push(signature);
        }
        Ok(())
    })?;
    Ok(Some(id))
}

pub fn convert_constructor(ctx: &mut Context, node: NodeIndex) -> Result<Option<ReflectionId>> {
    let class_name = ctx
        .scope_reflection()
        .map(|scope| scope.name.clone())
        .unwrap_or_default();

    // Parameter properties (`constructor(public name: string)`) declare
    // class members; they are created in the class scope before the
    // constructor opens its own.
    let param_nodes = ctx
        .program
        .arena
        .get(node)
        .map(|n| n.parameters.clone())
        .unwrap_or_default();
    // The constructor's own `@param` tags document the properties its
    // parameters declare.
    let param_tags = match ctx
        .program
        .arena
        .get(node)
        .and_then(|n| n.doc_comment.clone())
    {
        Some(doc) => parse_comment(&doc).remove_tags("param"),
        None => Vec::new(),
    };
    for &param in &param_nodes {
        let declares_property = ctx.program.arena.get(param).is_some_and(|p| {
            p.flags.intersects(
                ModifierFlags::PUBLIC
                    | ModifierFlags::PRIVATE
                    | ModifierFlags::PROTECTED
                    | ModifierFlags::READONLY,
            )
        });
        if declares_property {
            if let Some(property) =
                create_declaration(ctx, param, ReflectionKind::Property, None)?
            {
                let resolved = ctx.type_at_location(param);
                let type_node = ctx
                    .program
                    .arena
                    .get(param)
                    .map(|p| p.type_node)
                    .unwrap_or(NodeIndex::NONE);
                let property_type = crate::converter::convert_type(ctx, type_node, resolved)?;
                if let Some(r) = ctx.project.get_mut(property) {
                    r.set_flag(ReflectionFlags::CONSTRUCTOR_PROPERTY, true);
                    r.type_ = Some(property_type);
                    if r.comment.is_none() {
                        let tag = param_tags
                            .iter()
                            .find(|t| t.param_name.as_deref() == Some(r.name.as_str()));
                        if let Some(tag) = tag {
                            r.comment = Some(Comment {
                                short_text: Some(tag.text.clone()),
                                ..Comment::default()
                            });
                        }
                    }
                }
            }
        }
    }

    let Some(id) = create_declaration(
        ctx,
        node,
        ReflectionKind::Constructor,
        Some("constructor".to_string()),
    )?
    else {
        return Ok(None);
    };
    let has_body = ctx
        .program
        .arena
        .get(node)
        .is_some_and(|n| n.has_modifier(ModifierFlags::HAS_BODY));
    let has_signatures = ctx
        .project
        .get(id)
        .is_some_and(|r| !r.signatures.is_empty());
    if has_body && has_signatures {
        ctx.fire_function_implementation(id, node);
        return Ok(Some(id));
    }

    let class_reference = Type::reference(class_name.clone(), ReferenceTarget::ByName);
    ctx.with_scope(id, None, true, |ctx| {
        let name = format!("new {class_name}");
        let signature = create_signature(ctx, node, &name, ReflectionKind::ConstructorSignature)?;
        // A constructor produces an instance of its class, no matter what
        // the checker says about the declaration.
        if let Some(sig) = ctx.project.get_mut(signature) {
            sig.type_ = Some(class_reference);
        }
        if let Some(r) = ctx.project.get_mut(id) {
            r.signatures.push(signature);
        }
        Ok(())
    })?;
    Ok(Some(id))
}
