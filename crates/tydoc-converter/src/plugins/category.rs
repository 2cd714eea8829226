//! `@category` tags become named categories on the containing reflection.

use crate::plugins::ConverterPlugin;
use tydoc_model::{Project, ReflectionCategory, ReflectionId};

pub struct CategoryPlugin;

impl CategoryPlugin {
    pub fn new() -> CategoryPlugin {
        CategoryPlugin
    }
}

impl Default for CategoryPlugin {
    fn default() -> Self {
        CategoryPlugin::new()
    }
}

impl ConverterPlugin for CategoryPlugin {
    fn name(&self) -> &'static str {
        "category"
    }

    fn priority(&self) -> i32 {
        -10
    }

    fn on_resolve_end(&mut self, project: &mut Project) {
        for id in project.reflection_ids() {
            categorize_children(project, id);
        }
    }
}

fn categorize_children(project: &mut Project, id: ReflectionId) {
    let children = match project.get(id) {
        Some(r) if !r.children.is_empty() => r.children.clone(),
        _ => return,
    };

    let mut categories: Vec<ReflectionCategory> = Vec::new();
    for child in children {
        let titles: Vec<String> = match project.get_mut(child) {
            Some(r) => match r.comment.as_mut() {
                Some(comment) => comment
                    .remove_tags("category")
                    .into_iter()
                    .map(|tag| tag.text.trim().to_string())
                    .filter(|title| !title.is_empty())
                    .collect(),
                None => continue,
            },
            None => continue,
        };
        for title in titles {
            match categories.iter_mut().find(|c| c.title == title) {
                Some(category) => category.children.push(child),
                None => {
                    let mut category = ReflectionCategory::new(title);
                    category.children.push(child);
                    categories.push(category);
                }
            }
        }
    }

    if !categories.is_empty() {
        categories.sort_by(|a, b| a.title.cmp(&b.title));
        if let Some(r) = project.get_mut(id) {
            r.categories = categories;
        }
    }
}
