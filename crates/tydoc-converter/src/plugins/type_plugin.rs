//! Reference resolution.
//!
//! Conversion leaves reference types pointing at registry placeholders or
//! bare names; this pass patches each one to the reflection id it denotes,
//! and mirrors resolved heritage into `extended_by`/`implemented_by`
//! back-links. Resolution is idempotent: already-resolved references are
//! left alone.

use crate::plugins::ConverterPlugin;
use tydoc_model::{Project, ReferenceTarget, ReflectionId, Type};

pub struct TypePlugin;

impl TypePlugin {
    pub fn new() -> TypePlugin {
        TypePlugin
    }
}

impl Default for TypePlugin {
    fn default() -> Self {
        TypePlugin::new()
    }
}

fn resolve_target(
    project: &Project,
    name: &str,
    target: &ReferenceTarget,
) -> Option<ReflectionId> {
    match target {
        ReferenceTarget::Resolved { id } => Some(*id),
        ReferenceTarget::Symbol { id } => project.symbol_mapping.get(id).copied(),
        ReferenceTarget::ByName => {
            let segments: Vec<&str> = name.split('.').collect();
            project.find_reflection_by_name(&segments)
        }
    }
}

impl ConverterPlugin for TypePlugin {
    fn name(&self) -> &'static str {
        "type"
    }

    fn priority(&self) -> i32 {
        10
    }

    fn on_resolve(&mut self, project: &mut Project, id: ReflectionId) {
        let Some(r) = project.get(id) else {
            return;
        };
        let mut type_ = r.type_.clone();
        let mut extended_types = r.extended_types.clone();
        let mut implemented_types = r.implemented_types.clone();
        let mut inherited_from = r.inherited_from.clone();
        let mut overwrites = r.overwrites.clone();
        let mut implementation_of = r.implementation_of.clone();

        {
            let resolver =
                |name: &str, target: &ReferenceTarget| resolve_target(project, name, target);
            for ty in type_
                .iter_mut()
                .chain(extended_types.iter_mut())
                .chain(implemented_types.iter_mut())
                .chain(inherited_from.iter_mut())
                .chain(overwrites.iter_mut())
                .chain(implementation_of.iter_mut())
            {
                ty.resolve_references(&resolver);
            }
        }

        // Back-links from resolved heritage.
        let own_name = r.name.clone();
        let mut back_links: Vec<(ReflectionId, bool)> = Vec::new();
        for base in extended_types.iter().filter_map(Type::resolved_target) {
            back_links.push((base, true));
        }
        for interface in implemented_types.iter().filter_map(Type::resolved_target) {
            back_links.push((interface, false));
        }

        if let Some(r) = project.get_mut(id) {
            r.type_ = type_;
            r.extended_types = extended_types;
            r.implemented_types = implemented_types;
            r.inherited_from = inherited_from;
            r.overwrites = overwrites;
            r.implementation_of = implementation_of;
        }

        for (target, extends) in back_links {
            let link = Type::reference(own_name.clone(), ReferenceTarget::Resolved { id });
            let Some(base) = project.get_mut(target) else {
                continue;
            };
            let list = if extends {
                &mut base.extended_by
            } else {
                &mut base.implemented_by
            };
            if !list.contains(&link) {
                list.push(link);
            }
        }
    }
}
