//! Class declarations.
//!
//! Members convert before heritage clauses so that, when the base type is
//! re-entered through `inherit`, every member the class declares itself is
//! already present and base redeclarations register as overwrites.

use crate::context::Context;
use crate::converter::{convert_node, convert_type};
use crate::factories::create_declaration;
use anyhow::Result;
use tydoc_ast::{HeritageClause, HeritageToken, NodeIndex, SymbolId};
use tydoc_model::{ReflectionId, ReflectionKind};

pub fn convert_class(ctx: &mut Context, node: NodeIndex) -> Result<Option<ReflectionId>> {
    let Some(id) = create_declaration(ctx, node, ReflectionKind::Class, None)? else {
        return Ok(None);
    };
    let (type_params, members, heritage) = match ctx.program.arena.get(node) {
        Some(n) => (
            n.type_parameters.clone(),
            n.children.to_vec(),
            n.heritage_clauses.clone(),
        ),
        None => return Ok(Some(id)),
    };
    ctx.with_scope(id, Some(&type_params), false, |ctx| {
        for member in members {
            convert_node(ctx, member)?;
        }
        convert_heritage(ctx, id, &heritage)
    })?;
    Ok(Some(id))
}

/// Record extended/implemented types on `target` and walk `extends` bases
/// through the inherit pass. Recording only happens outside inherit mode so
/// a grandparent's heritage does not leak onto the inheriting class; both
/// lists stay free of duplicates across merged declarations.
pub(crate) fn convert_heritage(
    ctx: &mut Context,
    target: ReflectionId,
    clauses: &[HeritageClause],
) -> Result<()> {
    for clause in clauses {
        for &type_node in &clause.types {
            let resolved = ctx.program.type_at(type_node);
            let converted = convert_type(ctx, type_node, resolved)?;
            match clause.token {
                HeritageToken::Extends => {
                    if !ctx.is_inherit {
                        if let Some(r) = ctx.project.get_mut(target) {
                            if !r.extended_types.contains(&converted) {
                                r.extended_types.push(converted);
                            }
                        }
                    }
                    if let Some(symbol) = heritage_symbol(ctx, type_node) {
                        let args = ctx
                            .program
                            .arena
                            .get(type_node)
                            .map(|n| n.type_arguments.clone())
                            .unwrap_or_default();
                        // A merged base symbol contributes members from
                        // every one of its declarations.
                        for declaration in ctx.program.declarations_of(symbol).to_vec() {
                            ctx.inherit(declaration, Some(&args))?;
                        }
                    }
                }
                HeritageToken::Implements => {
                    if !ctx.is_inherit {
                        if let Some(r) = ctx.project.get_mut(target) {
                            if !r.implemented_types.contains(&converted) {
                                r.implemented_types.push(converted);
                            }
                        }
                    }
                }
            }
        }
    }
    Ok(())
}

fn heritage_symbol(ctx: &Context, type_node: NodeIndex) -> Option<SymbolId> {
    ctx.program.symbol_of(type_node).or_else(|| {
        ctx.program
            .type_at(type_node)
            .and_then(|ty| ctx.program.types.symbol_of(ty))
    })
}
