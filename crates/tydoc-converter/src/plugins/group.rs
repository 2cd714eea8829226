//! Child ordering and kind groups.
//!
//! Children sort by kind weight, then alphabetically; each container then
//! gets one group per distinct child kind, titled with the kind's plural
//! name. Runs at resolve-end so removals and kind changes are final.

use crate::plugins::ConverterPlugin;
use tydoc_model::{Project, ReflectionGroup, ReflectionId};

pub struct GroupPlugin;

impl GroupPlugin {
    pub fn new() -> GroupPlugin {
        GroupPlugin
    }
}

impl Default for GroupPlugin {
    fn default() -> Self {
        GroupPlugin::new()
    }
}

impl ConverterPlugin for GroupPlugin {
    fn name(&self) -> &'static str {
        "group"
    }

    fn on_resolve_end(&mut self, project: &mut Project) {
        for id in project.reflection_ids() {
            group_children(project, id);
        }
    }
}

fn group_children(project: &mut Project, id: ReflectionId) {
    let children = match project.get(id) {
        Some(r) if !r.children.is_empty() => r.children.clone(),
        _ => return,
    };

    let mut sortable: Vec<(u32, String, ReflectionId)> = children
        .iter()
        .filter_map(|&child| {
            project
                .get(child)
                .map(|r| (r.kind.sort_weight(), r.name.clone(), child))
        })
        .collect();
    sortable.sort_by(|a, b| a.0.cmp(&b.0).then_with(|| a.1.cmp(&b.1)));

    let mut groups: Vec<ReflectionGroup> = Vec::new();
    for &(_, _, child) in &sortable {
        let Some(kind) = project.get(child).map(|r| r.kind) else {
            continue;
        };
        match groups.iter_mut().find(|g| g.kind == kind) {
            Some(group) => group.children.push(child),
            None => {
                let mut group = ReflectionGroup::new(kind);
                group.children.push(child);
                groups.push(group);
            }
        }
    }

    if let Some(r) = project.get_mut(id) {
        r.children = sortable.into_iter().map(|(_, _, child)| child).collect();
        r.groups = groups;
    }
}
