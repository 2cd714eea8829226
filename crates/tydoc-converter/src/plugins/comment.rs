//! Doc-comment collection and application.
//!
//! Raw comment text is captured while reflections are created; parsing and
//! the visibility modifiers (`@private`, `@protected`, `@public`,
//! `@event`, `@hidden`, `@ignore`) apply at resolve-begin, before any other
//! plugin reads comments. The per-reflection resolve step then moves
//! `@param` and `@returns` text down onto signatures and parameters.

use crate::comment::parse_comment;
use crate::plugins::ConverterPlugin;
use rustc_hash::FxHashMap;
use tracing::debug;
use tydoc_ast::{NodeIndex, Program};
use tydoc_model::{Comment, Project, ReflectionFlags, ReflectionId, ReflectionKind};

pub struct CommentPlugin {
    raw: FxHashMap<u32, String>,
}

impl CommentPlugin {
    pub fn new() -> CommentPlugin {
        CommentPlugin {
            raw: FxHashMap::default(),
        }
    }

    fn collect(&mut self, program: &Program, id: ReflectionId, node: NodeIndex) {
        let Some(n) = program.arena.get(node) else {
            return;
        };
        let doc = match &n.doc_comment {
            Some(doc) if !doc.trim().is_empty() => doc.clone(),
            _ => return,
        };
        // First comment wins; merged redeclarations do not overwrite it.
        self.raw.entry(id.0).or_insert(doc);
    }
}

impl Default for CommentPlugin {
    fn default() -> Self {
        CommentPlugin::new()
    }
}

impl ConverterPlugin for CommentPlugin {
    fn name(&self) -> &'static str {
        "comment"
    }

    fn priority(&self) -> i32 {
        100
    }

    fn on_create_declaration(
        &mut self,
        _project: &mut Project,
        program: &Program,
        id: ReflectionId,
        node: NodeIndex,
    ) {
        self.collect(program, id, node);
    }

    fn on_create_type_parameter(
        &mut self,
        _project: &mut Project,
        program: &Program,
        id: ReflectionId,
        node: NodeIndex,
    ) {
        self.collect(program, id, node);
    }

    fn on_function_implementation(
        &mut self,
        _project: &mut Project,
        program: &Program,
        id: ReflectionId,
        node: NodeIndex,
    ) {
        // The implementation's comment documents the whole overload set
        // when none of the overloads carried one.
        self.collect(program, id, node);
    }

    fn on_resolve_begin(&mut self, project: &mut Project) {
        let mut hidden: Vec<ReflectionId> = Vec::new();
        for (id, raw) in std::mem::take(&mut self.raw) {
            let id = ReflectionId(id);
            let mut comment = parse_comment(&raw);
            if !comment.remove_tags("hidden").is_empty()
                || !comment.remove_tags("ignore").is_empty()
            {
                hidden.push(id);
                continue;
            }
            let Some(r) = project.get_mut(id) else {
                continue;
            };
            if !comment.remove_tags("private").is_empty() {
                r.set_flag(ReflectionFlags::PRIVATE, true);
                r.set_flag(ReflectionFlags::PUBLIC, false);
            }
            if !comment.remove_tags("protected").is_empty() {
                r.set_flag(ReflectionFlags::PROTECTED, true);
            }
            if !comment.remove_tags("public").is_empty() {
                r.set_flag(ReflectionFlags::PUBLIC, true);
                r.set_flag(ReflectionFlags::PRIVATE, false);
            }
            if !comment.remove_tags("event").is_empty() {
                r.kind = ReflectionKind::Event;
            }
            if comment.has_visible_component() {
                r.comment = Some(comment);
            }
        }
        for id in hidden {
            debug!(id = id.0, "removing hidden reflection");
            project.remove_reflection(id);
        }
    }

    fn on_resolve(&mut self, project: &mut Project, id: ReflectionId) {
        let Some(r) = project.get(id) else {
            return;
        };
        if r.signatures.is_empty() {
            return;
        }
        let Some(mut comment) = r.comment.clone() else {
            return;
        };
        let signatures = r.signatures.clone();
        let param_tags = comment.remove_tags("param");
        if comment.returns.is_none() {
            if let Some(tag) = comment.remove_tags("returns").into_iter().next() {
                comment.returns = Some(tag.text);
            }
        }

        for signature in &signatures {
            let parameters = match project.get(*signature) {
                Some(sig) => sig.parameters.clone(),
                None => continue,
            };
            for parameter in parameters {
                let Some(param) = project.get(parameter) else {
                    continue;
                };
                if param.comment.is_some() {
                    continue;
                }
                let name = param.name.clone();
                if let Some(tag) = param_tags.iter().find(|t| t.param_name.as_deref() == Some(name.as_str())) {
                    if let Some(param) = project.get_mut(parameter) {
                        param.comment = Some(Comment {
                            short_text: Some(tag.text.clone()),
                            ..Comment::default()
                        });
                    }
                }
            }
            if let Some(sig) = project.get_mut(*signature) {
                if sig.comment.is_none() {
                    sig.comment = Some(comment.clone());
                }
            }
        }
        if let Some(r) = project.get_mut(id) {
            r.comment = Some(comment);
        }
    }
}
