//! Links class members to the interface members they implement.
//!
//! Runs after reference resolution so `implemented_types` already point at
//! interface reflections. Undocumented class members borrow the comment of
//! the interface member they implement.

use crate::plugins::ConverterPlugin;
use tydoc_model::{Project, ReferenceTarget, ReflectionId, ReflectionKind, Type};

pub struct ImplementsPlugin;

impl ImplementsPlugin {
    pub fn new() -> ImplementsPlugin {
        ImplementsPlugin
    }
}

impl Default for ImplementsPlugin {
    fn default() -> Self {
        ImplementsPlugin::new()
    }
}

impl ConverterPlugin for ImplementsPlugin {
    fn name(&self) -> &'static str {
        "implements"
    }

    fn priority(&self) -> i32 {
        5
    }

    fn on_resolve(&mut self, project: &mut Project, id: ReflectionId) {
        let Some(class) = project.get(id) else {
            return;
        };
        if class.kind != ReflectionKind::Class {
            return;
        }
        let interfaces: Vec<ReflectionId> = class
            .implemented_types
            .iter()
            .filter_map(Type::resolved_target)
            .collect();
        for interface in interfaces {
            link_members(project, id, interface);
        }
    }
}

fn link_members(project: &mut Project, class: ReflectionId, interface: ReflectionId) {
    let Some(interface_name) = project.get(interface).map(|r| r.name.clone()) else {
        return;
    };
    let members = match project.get(interface) {
        Some(r) => r.children.clone(),
        None => return,
    };
    for member in members {
        let Some(member_name) = project.get(member).map(|r| r.name.clone()) else {
            continue;
        };
        let Some(implementing) = project.find_child(class, &member_name, false) else {
            continue;
        };
        let qualified = format!("{interface_name}.{member_name}");
        let link = Type::reference(
            qualified.clone(),
            ReferenceTarget::Resolved { id: member },
        );
        let borrowed_comment = project.get(member).and_then(|r| r.comment.clone());

        let interface_signatures = project
            .get(member)
            .map(|r| r.signatures.clone())
            .unwrap_or_default();
        let class_signatures = project
            .get(implementing)
            .map(|r| r.signatures.clone())
            .unwrap_or_default();

        if let Some(r) = project.get_mut(implementing) {
            if r.implementation_of.is_none() {
                r.implementation_of = Some(link);
            }
            if r.comment.is_none() {
                r.comment = borrowed_comment.clone();
            }
        }
        for (class_sig, interface_sig) in class_signatures.iter().zip(&interface_signatures) {
            let sig_link = Type::reference(
                qualified.clone(),
                ReferenceTarget::Resolved { id: *interface_sig },
            );
            let sig_comment = project.get(*interface_sig).and_then(|r| r.comment.clone());
            if let Some(sig) = project.get_mut(*class_sig) {
                if sig.implementation_of.is_none() {
                    sig.implementation_of = Some(sig_link);
                }
                if sig.comment.is_none() {
                    sig.comment = sig_comment;
                }
            }
        }
    }
}
