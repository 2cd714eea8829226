//! The terminal fallback: accepts every resolved type and renders the
//! checker's own display string, so type conversion can never fail to
//! produce a value.

use super::TypeConverter;
use crate::context::Context;
use anyhow::Result;
use tracing::trace;
use tydoc_ast::{TypeData, TypeId};
use tydoc_model::Type;

pub struct UnknownConverter;

impl TypeConverter for UnknownConverter {
    fn name(&self) -> &'static str {
        "unknown"
    }

    fn priority(&self) -> i32 {
        -100
    }

    fn supports_type(&self, _ctx: &Context, _id: TypeId, _data: &TypeData) -> bool {
        true
    }

    fn convert_type(&self, ctx: &mut Context, id: TypeId, _data: &TypeData) -> Result<Option<Type>> {
        let name = ctx.program.type_to_string(id);
        trace!(type_id = id.0, name = %name, "no type converter matched");
        Ok(Some(Type::unknown(name)))
    }
}
