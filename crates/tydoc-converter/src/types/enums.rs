//! Enum types become references to the enum's reflection.

use super::TypeConverter;
use crate::context::Context;
use anyhow::Result;
use tydoc_ast::{TypeData, TypeId, symbol_flags};
use tydoc_model::Type;

pub struct EnumConverter;

impl TypeConverter for EnumConverter {
    fn name(&self) -> &'static str {
        "enum"
    }

    fn priority(&self) -> i32 {
        60
    }

    fn supports_type(&self, ctx: &Context, id: TypeId, _data: &TypeData) -> bool {
        ctx.program
            .types
            .symbol_of(id)
            .and_then(|s| ctx.program.symbol(s))
            .is_some_and(|s| s.has_flag(symbol_flags::ENUM))
    }

    fn convert_type(&self, ctx: &mut Context, id: TypeId, _data: &TypeData) -> Result<Option<Type>> {
        let Some(symbol_id) = ctx.program.types.symbol_of(id) else {
            return Ok(None);
        };
        let name = ctx
            .program
            .symbol(symbol_id)
            .map(|s| s.name.clone())
            .unwrap_or_default();
        Ok(Some(ctx.reference_to(name, Some(symbol_id))))
    }
}
