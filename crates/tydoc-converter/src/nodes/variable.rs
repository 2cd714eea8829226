//! Variables, properties and binding patterns.
//!
//! Initializers reclassify what a variable documents as: a function
//! expression makes it a function, an object literal makes it an object
//! literal container. A destructuring declaration fans out into one
//! variable per binding element.

use crate::comment::parse_comment;
use crate::context::Context;
use crate::converter::{convert_node, convert_type};
use crate::factories::{create_declaration, create_signature};
use anyhow::Result;
use tydoc_ast::{NodeIndex, SyntaxKind};
use tydoc_model::{ReflectionId, ReflectionKind};

pub fn convert_variable_statement(
    ctx: &mut Context,
    node: NodeIndex,
) -> Result<Option<ReflectionId>> {
    let declarations = match ctx.program.arena.get(node) {
        Some(n) => n.children.to_vec(),
        None => return Ok(None),
    };
    for declaration in declarations {
        convert_node(ctx, declaration)?;
    }
    Ok(None)
}

pub fn convert_variable(ctx: &mut Context, node: NodeIndex) -> Result<Option<ReflectionId>> {
    let Some(n) = ctx.program.arena.get(node) else {
        return Ok(None);
    };

    // `const { a, b } = ...` has a binding pattern where the name would be;
    // each element documents as its own variable.
    if n.name.is_none() {
        if let Some(&pattern) = n.children.first() {
            if matches!(
                ctx.program.arena.kind(pattern),
                Some(SyntaxKind::ObjectBindingPattern | SyntaxKind::ArrayBindingPattern)
            ) {
                let elements = ctx
                    .program
                    .arena
                    .get(pattern)
                    .map(|p| p.children.to_vec())
                    .unwrap_or_default();
                for element in elements {
                    convert_node(ctx, element)?;
                }
                return Ok(None);
            }
        }
    }

    // An `@resolve` tag re-targets documentation to the declaration of the
    // variable's resolved type, renamed to the variable's name.
    if let Some(doc) = &n.doc_comment {
        if parse_comment(doc).has_tag("resolve") {
            if let Some(id) = convert_resolve_target(ctx, node)? {
                return Ok(Some(id));
            }
        }
    }

    let in_type_scope = ctx.scope_reflection().is_some_and(|scope| {
        matches!(
            scope.kind,
            ReflectionKind::Class
                | ReflectionKind::Interface
                | ReflectionKind::TypeLiteral
                | ReflectionKind::ObjectLiteral
        )
    });
    let initializer = n.initializer;
    let initializer_kind = ctx.program.arena.kind(initializer);

    match initializer_kind {
        Some(SyntaxKind::ArrowFunction | SyntaxKind::FunctionExpression) => {
            let kind = if in_type_scope {
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
            ctx.with_scope(id, None, true, |ctx| {
                let signature =
                    create_signature(ctx, initializer, &name, ReflectionKind::CallSignature)?;
                if let Some(r) = ctx.project.get_mut(id) {
                    r.signatures.push(signature);
                }
                Ok(())
            })?;
            Ok(Some(id))
        }
        Some(SyntaxKind::ObjectLiteralExpression) => {
            let Some(id) = create_declaration(ctx, node, ReflectionKind::ObjectLiteral, None)?
            else {
                return Ok(None);
            };
            let members = ctx
                .program
                .arena
                .get(initializer)
                .map(|init| init.children.to_vec())
                .unwrap_or_default();
            ctx.with_scope(id, None, true, |ctx| {
                for member in members {
                    convert_node(ctx, member)?;
                }
                Ok(())
            })?;
            Ok(Some(id))
        }
        _ => {
            let kind = if in_type_scope {
                ReflectionKind::Property
            } else {
                ReflectionKind::Variable
            };
            let Some(id) = create_declaration(ctx, node, kind, None)? else {
                return Ok(None);
            };
            let type_node = ctx
                .program
                .arena
                .get(node)
                .map(|n| n.type_node)
                .unwrap_or(NodeIndex::NONE);
            let resolved = ctx.type_at_location(node);
            let variable_type = convert_type(ctx, type_node, resolved)?;
            let default_value = ctx
                .program
                .arena
                .get(initializer)
                .and_then(|init| init.text.clone());
            if let Some(r) = ctx.project.get_mut(id) {
                r.type_ = Some(variable_type);
                r.default_value = default_value;
            }
            Ok(Some(id))
        }
    }
}

/// Convert the declaration behind the variable's resolved type and give
/// the result the variable's name. Falls through to normal conversion when
/// the type, its symbol or its declaration cannot be found.
fn convert_resolve_target(ctx: &mut Context, node: NodeIndex) -> Result<Option<ReflectionId>> {
    let Some(name) = ctx.program.arena.get(node).and_then(|n| n.name.clone()) else {
        return Ok(None);
    };
    let Some(resolved) = ctx.type_at_location(node) else {
        return Ok(None);
    };
    let Some(symbol) = ctx.program.types.symbol_of(resolved) else {
        return Ok(None);
    };
    let Some(&declaration) = ctx.program.declarations_of(symbol).first() else {
        return Ok(None);
    };
    let Some(id) = convert_node(ctx, declaration)? else {
        return Ok(None);
    };
    if let Some(r) = ctx.project.get_mut(id) {
        r.name = name;
    }
    Ok(Some(id))
}
