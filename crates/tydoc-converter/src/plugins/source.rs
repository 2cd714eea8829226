//! Source references, file aggregates and the directory tree.

use crate::plugins::ConverterPlugin;
use rustc_hash::FxHashMap;
use tydoc_ast::{NodeIndex, Program};
use tydoc_model::{Project, ReflectionId, SourceFile, SourceReference};

pub struct SourcePlugin;

impl SourcePlugin {
    pub fn new() -> SourcePlugin {
        SourcePlugin
    }

    fn attach(project: &mut Project, program: &Program, id: ReflectionId, node: NodeIndex) {
        let Some(file) = program.file_of(node) else {
            return;
        };
        let Some(file_name) = program.file_name_of(file) else {
            return;
        };
        let line = program.arena.get(node).map(|n| n.line).unwrap_or(0);
        let reference = SourceReference {
            file_name: file_name.to_string(),
            line,
        };
        if let Some(r) = project.get_mut(id) {
            if !r.sources.contains(&reference) {
                r.sources.push(reference);
            }
        }
    }
}

impl Default for SourcePlugin {
    fn default() -> Self {
        SourcePlugin::new()
    }
}

impl ConverterPlugin for SourcePlugin {
    fn name(&self) -> &'static str {
        "source"
    }

    fn priority(&self) -> i32 {
        50
    }

    fn on_create_declaration(
        &mut self,
        project: &mut Project,
        program: &Program,
        id: ReflectionId,
        node: NodeIndex,
    ) {
        SourcePlugin::attach(project, program, id, node);
    }

    fn on_create_signature(
        &mut self,
        project: &mut Project,
        program: &Program,
        id: ReflectionId,
        node: NodeIndex,
    ) {
        SourcePlugin::attach(project, program, id, node);
    }

    fn on_create_parameter(
        &mut self,
        project: &mut Project,
        program: &Program,
        id: ReflectionId,
        node: NodeIndex,
    ) {
        SourcePlugin::attach(project, program, id, node);
    }

    /// Build the per-file aggregates and the directory tree from the
    /// references gathered during conversion.
    fn on_resolve_begin(&mut self, project: &mut Project) {
        let mut indices: FxHashMap<String, usize> = FxHashMap::default();
        let mut files: Vec<SourceFile> = Vec::new();

        for id in project.reflection_ids() {
            let Some(first) = project.get(id).and_then(|r| r.sources.first().cloned()) else {
                continue;
            };
            let index = *indices.entry(first.file_name.clone()).or_insert_with(|| {
                files.push(SourceFile::new(first.file_name.clone()));
                files.len() - 1
            });
            files[index].reflections.push(id);
        }

        for (index, file) in files.iter().enumerate() {
            project.directory.insert(&file.file_name, index);
        }
        project.files = files;
    }
}
