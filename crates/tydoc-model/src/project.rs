//! The project: root of the graph and sole owner of every reflection.

use crate::flags::ReflectionFlags;
use crate::kind::ReflectionKind;
use crate::reflection::{Reflection, ReflectionId};
use crate::sources::{SourceDirectory, SourceFile};
use indexmap::IndexMap;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use tracing::trace;

/// The authoritative reflection store plus the cross-reference tables built
/// during conversion.
///
/// Ids are monotonic and never reused, even after removal, so a stale id can
/// at worst miss, never alias.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub name: String,
    reflections: IndexMap<ReflectionId, Reflection>,
    /// Registry symbol id -> first reflection created for that symbol.
    pub symbol_mapping: FxHashMap<i64, ReflectionId>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub files: Vec<SourceFile>,
    #[serde(default)]
    pub directory: SourceDirectory,
    next_id: u32,
}

impl Project {
    pub const ROOT: ReflectionId = ReflectionId(0);

    pub fn new(name: impl Into<String>) -> Project {
        let name = name.into();
        let mut reflections = IndexMap::new();
        reflections.insert(
            Project::ROOT,
            Reflection::new(Project::ROOT, name.clone(), ReflectionKind::Project),
        );
        Project {
            name,
            reflections,
            symbol_mapping: FxHashMap::default(),
            files: Vec::new(),
            directory: SourceDirectory::default(),
            next_id: 1,
        }
    }

    /// Allocate a reflection under `parent`. The child is appended to the
    /// parent's child list only by the caller (factories decide whether the
    /// new reflection is a child, a signature, or a parameter).
    pub fn create_reflection(
        &mut self,
        name: impl Into<String>,
        kind: ReflectionKind,
        parent: Option<ReflectionId>,
    ) -> ReflectionId {
        let id = ReflectionId(self.next_id);
        self.next_id += 1;
        let mut reflection = Reflection::new(id, name, kind);
        reflection.parent = parent;
        trace!(id = id.0, name = %reflection.name, ?kind, "create reflection");
        self.reflections.insert(id, reflection);
        id
    }

    pub fn get(&self, id: ReflectionId) -> Option<&Reflection> {
        self.reflections.get(&id)
    }

    pub fn get_mut(&mut self, id: ReflectionId) -> Option<&mut Reflection> {
        self.reflections.get_mut(&id)
    }

    pub fn contains(&self, id: ReflectionId) -> bool {
        self.reflections.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.reflections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reflections.is_empty()
    }

    /// Snapshot of every live id, in creation order. Taken up front so
    /// callers may remove reflections while iterating.
    pub fn reflection_ids(&self) -> Vec<ReflectionId> {
        self.reflections.keys().copied().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ReflectionId, &Reflection)> {
        self.reflections.iter()
    }

    /// Name, staticness-aware child lookup used by declaration merging.
    pub fn find_child(
        &self,
        container: ReflectionId,
        name: &str,
        is_static: bool,
    ) -> Option<ReflectionId> {
        let parent = self.get(container)?;
        parent.children.iter().copied().find(|id| {
            self.get(*id)
                .map(|r| r.name == name && r.flags.is_static() == is_static)
                .unwrap_or(false)
        })
    }

    /// Dotted path of a reflection, for diagnostics and name lookups.
    pub fn full_name(&self, id: ReflectionId) -> String {
        let mut parts = Vec::new();
        let mut cursor = Some(id);
        while let Some(current) = cursor {
            let Some(reflection) = self.get(current) else {
                break;
            };
            if current != Project::ROOT {
                parts.push(reflection.name.clone());
            }
            cursor = reflection.parent;
        }
        parts.reverse();
        parts.join(".")
    }

    /// Find a reflection by dotted name segments, searching from the root
    /// and, failing that, from each module so module-qualified and bare
    /// paths both work.
    pub fn find_reflection_by_name(&self, segments: &[&str]) -> Option<ReflectionId> {
        if segments.is_empty() {
            return None;
        }
        if let Some(found) = self.match_segments(Project::ROOT, segments) {
            return Some(found);
        }
        for (id, reflection) in self.reflections.iter() {
            if reflection.kind == ReflectionKind::Module {
                if let Some(found) = self.match_segments(*id, segments) {
                    return Some(found);
                }
            }
        }
        None
    }

    fn match_segments(&self, from: ReflectionId, segments: &[&str]) -> Option<ReflectionId> {
        let container = self.get(from)?;
        for &child_id in &container.children {
            let child = self.get(child_id)?;
            if child.name == segments[0] || child.original_name == segments[0] {
                if segments.len() == 1 {
                    return Some(child_id);
                }
                if let Some(found) = self.match_segments(child_id, &segments[1..]) {
                    return Some(found);
                }
            }
        }
        None
    }

    /// Remove a reflection and everything it owns, sweeping every dependent
    /// table so no structural reference survives.
    pub fn remove_reflection(&mut self, id: ReflectionId) {
        let mut removed = Vec::new();
        self.collect_subtree(id, &mut removed);

        for rid in &removed {
            self.reflections.shift_remove(rid);
        }
        self.symbol_mapping.retain(|_, target| !removed.contains(target));
        for reflection in self.reflections.values_mut() {
            for rid in &removed {
                reflection.sweep_reference(*rid);
            }
        }
        for file in &mut self.files {
            file.reflections.retain(|rid| !removed.contains(rid));
        }
        trace!(id = id.0, count = removed.len(), "removed reflection subtree");
    }

    fn collect_subtree(&self, id: ReflectionId, out: &mut Vec<ReflectionId>) {
        if out.contains(&id) {
            return;
        }
        out.push(id);
        if let Some(reflection) = self.get(id) {
            for owned in reflection.owned_ids() {
                self.collect_subtree(owned, out);
            }
        }
    }

    /// Mark a reflection and every descendant as exported.
    pub fn mark_exported_recursive(&mut self, id: ReflectionId) {
        let mut stack = vec![id];
        while let Some(current) = stack.pop() {
            if let Some(reflection) = self.get_mut(current) {
                reflection.set_flag(ReflectionFlags::EXPORTED, true);
                stack.extend(reflection.owned_ids());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique_and_never_reused() {
        let mut project = Project::new("test");
        let a = project.create_reflection("a", ReflectionKind::Class, Some(Project::ROOT));
        project.remove_reflection(a);
        let b = project.create_reflection("b", ReflectionKind::Class, Some(Project::ROOT));
        assert_ne!(a, b);
        assert!(project.get(a).is_none());
    }

    #[test]
    fn remove_reflection_cascades_and_sweeps() {
        let mut project = Project::new("test");
        let class = project.create_reflection("Widget", ReflectionKind::Class, Some(Project::ROOT));
        project.get_mut(Project::ROOT).unwrap().children.push(class);
        let method = project.create_reflection("render", ReflectionKind::Method, Some(class));
        project.get_mut(class).unwrap().children.push(method);
        let signature =
            project.create_reflection("render", ReflectionKind::CallSignature, Some(method));
        project.get_mut(method).unwrap().signatures.push(signature);
        project.symbol_mapping.insert(-1024, class);
        project.symbol_mapping.insert(-1025, method);

        project.remove_reflection(class);

        assert!(project.get(class).is_none());
        assert!(project.get(method).is_none());
        assert!(project.get(signature).is_none());
        assert!(project.symbol_mapping.is_empty());
        assert!(project.get(Project::ROOT).unwrap().children.is_empty());
    }

    #[test]
    fn find_reflection_by_name_walks_segments() {
        let mut project = Project::new("test");
        let ns = project.create_reflection("app", ReflectionKind::Namespace, Some(Project::ROOT));
        project.get_mut(Project::ROOT).unwrap().children.push(ns);
        let class = project.create_reflection("Widget", ReflectionKind::Class, Some(ns));
        project.get_mut(ns).unwrap().children.push(class);

        assert_eq!(
            project.find_reflection_by_name(&["app", "Widget"]),
            Some(class)
        );
        assert_eq!(project.find_reflection_by_name(&["Widget"]), None);
        assert_eq!(project.full_name(class), "app.Widget");
    }
}
