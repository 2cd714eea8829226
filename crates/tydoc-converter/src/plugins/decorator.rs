//! Decorator extraction and the `decorates` back-links.
//!
//! Decorator names are captured as by-name references while declarations
//! are created; once the graph is complete they resolve to the decorator
//! functions, which receive back-links to everything they decorate.

use crate::plugins::ConverterPlugin;
use tydoc_ast::{NodeIndex, Program};
use tydoc_model::{Decorator, Project, ReferenceTarget, ReflectionId, Type};

pub struct DecoratorPlugin {
    usages: Vec<(ReflectionId, String)>,
}

impl DecoratorPlugin {
    pub fn new() -> DecoratorPlugin {
        DecoratorPlugin { usages: Vec::new() }
    }
}

impl Default for DecoratorPlugin {
    fn default() -> Self {
        DecoratorPlugin::new()
    }
}

impl ConverterPlugin for DecoratorPlugin {
    fn name(&self) -> &'static str {
        "decorator"
    }

    fn priority(&self) -> i32 {
        90
    }

    fn on_create_declaration(
        &mut self,
        project: &mut Project,
        program: &Program,
        id: ReflectionId,
        node: NodeIndex,
    ) {
        let Some(n) = program.arena.get(node) else {
            return;
        };
        for &decorator_node in &n.decorators {
            let Some(d) = program.arena.get(decorator_node) else {
                continue;
            };
            let Some(name) = d.name.clone() else {
                continue;
            };
            let arguments = d
                .children
                .iter()
                .filter_map(|&arg| program.arena.get(arg))
                .filter_map(|arg| arg.text.clone())
                .collect();
            let Some(r) = project.get_mut(id) else {
                continue;
            };
            if r.decorators.iter().any(|existing| existing.name == name) {
                continue;
            }
            r.decorators.push(Decorator {
                name: name.clone(),
                decorator_type: Some(Type::reference(name.clone(), ReferenceTarget::ByName)),
                arguments,
            });
            self.usages.push((id, name));
        }
    }

    fn on_resolve_end(&mut self, project: &mut Project) {
        for (decorated, name) in std::mem::take(&mut self.usages) {
            let segments: Vec<&str> = name.split('.').collect();
            let Some(target) = project.find_reflection_by_name(&segments) else {
                continue;
            };
            if let Some(r) = project.get_mut(decorated) {
                for decorator in &mut r.decorators {
                    if decorator.name == name {
                        decorator.decorator_type = Some(Type::reference(
                            name.clone(),
                            ReferenceTarget::Resolved { id: target },
                        ));
                    }
                }
            }
            let decorated_name = project
                .get(decorated)
                .map(|r| r.name.clone())
                .unwrap_or_default();
            if let Some(function) = project.get_mut(target) {
                let back_link = Type::reference(
                    decorated_name,
                    ReferenceTarget::Resolved { id: decorated },
                );
                if !function.decorates.contains(&back_link) {
                    function.decorates.push(back_link);
                }
            }
        }
    }
}
