//! Renames file modules from full quoted paths to project-relative names.
//!
//! Conversion names each file module `"path/to/file.ts"`; once every module
//! is known, the longest common directory prefix and the file extension are
//! stripped, so `src/widgets/button.ts` documents as `"widgets/button"`.

use crate::plugins::ConverterPlugin;
use tracing::trace;
use tydoc_ast::{NodeIndex, Program};
use tydoc_model::{Project, ReflectionId, ReflectionKind};

const STRIPPED_EXTENSIONS: &[&str] = &[".d.ts", ".tsx", ".ts", ".js"];

pub struct DynamicModulePlugin {
    modules: Vec<(ReflectionId, String)>,
}

impl DynamicModulePlugin {
    pub fn new() -> DynamicModulePlugin {
        DynamicModulePlugin {
            modules: Vec::new(),
        }
    }
}

impl Default for DynamicModulePlugin {
    fn default() -> Self {
        DynamicModulePlugin::new()
    }
}

impl ConverterPlugin for DynamicModulePlugin {
    fn name(&self) -> &'static str {
        "dynamic-module"
    }

    fn priority(&self) -> i32 {
        25
    }

    fn on_create_declaration(
        &mut self,
        project: &mut Project,
        _program: &Program,
        id: ReflectionId,
        _node: NodeIndex,
    ) {
        let Some(r) = project.get(id) else {
            return;
        };
        if r.kind == ReflectionKind::Module && r.name.starts_with('"') {
            let path = r.name.trim_matches('"').to_string();
            if !self.modules.iter().any(|(existing, _)| *existing == id) {
                self.modules.push((id, path));
            }
        }
    }

    fn on_resolve_begin(&mut self, project: &mut Project) {
        if self.modules.is_empty() {
            return;
        }
        let base = common_directory(self.modules.iter().map(|(_, path)| path.as_str()));
        for (id, path) in std::mem::take(&mut self.modules) {
            let mut name = path.strip_prefix(&base).unwrap_or(&path).to_string();
            for extension in STRIPPED_EXTENSIONS {
                if let Some(stripped) = name.strip_suffix(extension) {
                    name = stripped.to_string();
                    break;
                }
            }
            let quoted = format!("\"{name}\"");
            trace!(id = id.0, from = %path, to = %quoted, "renaming file module");
            if let Some(r) = project.get_mut(id) {
                r.rename(&quoted);
            }
            for file in &mut project.files {
                if file.file_name == path {
                    file.name = name.clone();
                }
            }
        }
    }
}

/// Longest directory prefix (ending in `/`) shared by every path. A single
/// file keeps only its file name.
fn common_directory<'a>(mut paths: impl Iterator<Item = &'a str>) -> String {
    let Some(first) = paths.next() else {
        return String::new();
    };
    let mut base: &str = match first.rfind('/') {
        Some(slash) => &first[..=slash],
        None => return String::new(),
    };
    for path in paths {
        while !path.starts_with(base) {
            let trimmed = &base[..base.len() - 1];
            base = match trimmed.rfind('/') {
                Some(slash) => &trimmed[..=slash],
                None => return String::new(),
            };
        }
    }
    base.to_string()
}

#[cfg(test)]
mod tests {
    use super::common_directory;

    #[test]
    fn common_base_is_a_directory_prefix() {
        let paths = ["src/widgets/button.ts", "src/widgets/input.ts", "src/app.ts"];
        assert_eq!(common_directory(paths.into_iter()), "src/");
    }

    #[test]
    fn single_file_keeps_its_name() {
        assert_eq!(common_directory(["src/app.ts"].into_iter()), "src/");
        assert_eq!(common_directory(["app.ts"].into_iter()), "");
    }
}
