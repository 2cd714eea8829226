//! Alias detection.
//!
//! The checker resolves `type Callback = () => void` away: a `Callback`
//! annotation resolves to the function type, and converting the resolved
//! type would document the alias's definition instead of its name. When the
//! name written at the annotation does not match the symbol the type
//! resolved to, the written name wins and becomes a by-name reference.

use super::{TypeConverter, convert_type_nodes};
use crate::context::Context;
use anyhow::Result;
use tydoc_ast::{Node, NodeIndex, SyntaxKind};
use tydoc_model::{ReferenceTarget, Type};

pub struct AliasConverter;

impl TypeConverter for AliasConverter {
    fn name(&self) -> &'static str {
        "alias"
    }

    fn priority(&self) -> i32 {
        100
    }

    fn supports_node(&self, ctx: &Context, node: NodeIndex, n: &Node) -> bool {
        if n.kind != SyntaxKind::TypeReference {
            return false;
        }
        let Some(written) = n.name.as_deref() else {
            return false;
        };
        let Some(ty) = ctx.program.type_at(node) else {
            return false;
        };
        let Some(symbol) = ctx
            .program
            .types
            .symbol_of(ty)
            .and_then(|s| ctx.program.symbol(s))
        else {
            // No symbol to compare against; the written name is all we have.
            return true;
        };
        !trailing_segments_match(written, &symbol.fully_qualified_name)
    }

    fn convert_node(&self, ctx: &mut Context, _node: NodeIndex, n: &Node) -> Result<Option<Type>> {
        let name = n.name.clone().unwrap_or_default();
        let type_arguments = convert_type_nodes(ctx, &n.type_arguments)?;
        Ok(Some(Type::Reference {
            name,
            target: ReferenceTarget::ByName,
            type_arguments,
        }))
    }
}

/// Whether the (possibly qualified) written name matches the trailing
/// segments of a fully qualified symbol name.
fn trailing_segments_match(written: &str, qualified: &str) -> bool {
    let written: Vec<&str> = written.split('.').collect();
    let qualified: Vec<&str> = qualified.split('.').collect();
    if written.len() > qualified.len() {
        return false;
    }
    qualified[qualified.len() - written.len()..] == written[..]
}

#[cfg(test)]
mod tests {
    use super::trailing_segments_match;

    #[test]
    fn qualified_tails_match() {
        assert!(trailing_segments_match("Widget", "\"app\".ui.Widget"));
        assert!(trailing_segments_match("ui.Widget", "\"app\".ui.Widget"));
        assert!(!trailing_segments_match("Callback", "\"app\".ui.Widget"));
        assert!(!trailing_segments_match("a.b.c.d", "c.d"));
    }
}
