//! The traversal context: one mutable cursor threaded through every
//! conversion call.
//!
//! Execution never interleaves, so correctness rests entirely on stack
//! discipline: every `with_scope`/`with_source_file`/`inherit` entry saves
//! the cursor state before descending and restores it on every exit path,
//! including `Err` propagation.

use crate::converter::{convert_node, convert_type};
use crate::options::ConverterOptions;
use crate::plugins::ConverterPlugin;
use crate::registry::SymbolRegistry;
use anyhow::{Context as _, Result};
use globset::{Glob, GlobSet, GlobSetBuilder};
use rustc_hash::{FxHashMap, FxHashSet};
use tracing::{debug, trace, warn};
use tydoc_ast::{NodeIndex, Program, SymbolId, TypeId};
use tydoc_model::{Project, ReferenceTarget, Reflection, ReflectionId, Type};

/// The scoped state object behind every conversion call.
pub struct Context<'a> {
    pub program: &'a Program,
    pub project: Project,
    pub options: &'a ConverterOptions,
    plugins: &'a mut Vec<Box<dyn ConverterPlugin>>,

    /// The container (or signature) currently being populated.
    pub scope: ReflectionId,
    pub registry: SymbolRegistry,

    /// Currently bound generics, by name.
    pub type_parameters: FxHashMap<String, Type>,
    /// Substituted arguments while re-entering a generic base.
    pub type_arguments: Vec<Type>,

    pub is_inherit: bool,
    pub inherit_parent: NodeIndex,
    /// Member names present in the target scope before the inherit pass
    /// began; redeclarations of these are overwrites, not inherited members.
    pub inherited: Vec<String>,
    inherited_children: FxHashSet<u32>,

    pub is_external: bool,
    pub is_declaration: bool,

    /// Cycle guard for node conversion.
    pub visit_stack: Vec<NodeIndex>,
    /// Memoized anonymous type literals, keyed by their declaration node.
    pub literal_memo: FxHashMap<u32, ReflectionId>,

    external_matcher: Option<GlobSet>,
}

impl<'a> Context<'a> {
    pub fn new(
        program: &'a Program,
        options: &'a ConverterOptions,
        plugins: &'a mut Vec<Box<dyn ConverterPlugin>>,
    ) -> Result<Context<'a>> {
        let external_matcher = if options.external_pattern.is_empty() {
            None
        } else {
            let mut builder = GlobSetBuilder::new();
            for pattern in &options.external_pattern {
                builder.add(
                    Glob::new(pattern)
                        .with_context(|| format!("invalid external pattern `{pattern}`"))?,
                );
            }
            Some(builder.build()?)
        };
        Ok(Context {
            program,
            project: Project::new(&options.name),
            options,
            plugins,
            scope: Project::ROOT,
            registry: SymbolRegistry::new(),
            type_parameters: FxHashMap::default(),
            type_arguments: Vec::new(),
            is_inherit: false,
            inherit_parent: NodeIndex::NONE,
            inherited: Vec::new(),
            inherited_children: FxHashSet::default(),
            is_external: false,
            is_declaration: false,
            visit_stack: Vec::new(),
            literal_memo: FxHashMap::default(),
            external_matcher,
        })
    }

    /// Consume the context and hand back the built project.
    pub fn finish(self) -> Project {
        self.project
    }

    pub fn scope_reflection(&self) -> Option<&Reflection> {
        self.project.get(self.scope)
    }

    /// Run `f` with `scope` as the cursor, optionally binding the given
    /// type-parameter declarations first. When `preserve_outer` is set,
    /// outer bindings not shadowed by the new declarations stay visible
    /// (a generic method inside a generic class). The prior scope, bindings
    /// and pending type arguments are restored on every exit path.
    pub fn with_scope<R>(
        &mut self,
        scope: ReflectionId,
        type_params: Option<&[NodeIndex]>,
        preserve_outer: bool,
        f: impl FnOnce(&mut Context<'a>) -> Result<R>,
    ) -> Result<R> {
        let saved_scope = self.scope;
        let saved_params = self.type_parameters.clone();
        let saved_args = std::mem::take(&mut self.type_arguments);

        self.scope = scope;
        let result = (|| {
            if let Some(nodes) = type_params {
                if !preserve_outer {
                    self.type_parameters.clear();
                }
                crate::factories::create_type_parameters(self, nodes, &saved_args)?;
            }
            f(self)
        })();

        self.scope = saved_scope;
        self.type_parameters = saved_params;
        self.type_arguments = saved_args;
        result
    }

    /// Open a source-file scope: compute the external/declaration flags for
    /// the file, fire the file-begin event, and skip the callback entirely
    /// when the file is excluded. This is the filtering policy, enforced
    /// once per file rather than per declaration.
    pub fn with_source_file<R>(
        &mut self,
        file: NodeIndex,
        f: impl FnOnce(&mut Context<'a>) -> Result<Option<R>>,
    ) -> Result<Option<R>> {
        let file_name = self
            .program
            .file_name_of(file)
            .unwrap_or_default()
            .to_string();
        let requested = self.program.file_names.iter().any(|n| *n == file_name);
        let mut is_external = !requested;
        if let Some(matcher) = &self.external_matcher {
            if matcher.is_match(&file_name) {
                is_external = true;
            }
        }
        let is_declaration = self.program.is_declaration_file(file);

        self.fire_file_begin(file);

        if is_external && self.options.exclude_externals {
            debug!(file = %file_name, "skipping external file");
            return Ok(None);
        }
        if is_declaration
            && (!self.options.include_declarations || self.program.is_default_lib(file))
        {
            debug!(file = %file_name, "skipping declaration file");
            return Ok(None);
        }

        let saved = (self.is_external, self.is_declaration);
        self.is_external = is_external;
        self.is_declaration = is_declaration;
        let result = f(self);
        (self.is_external, self.is_declaration) = saved;
        result
    }

    /// Re-enter conversion of an already-processed base declaration so its
    /// members merge into the current scope instead of forming a new
    /// container. Returns the current scope. A base symbol already inherited
    /// on this chain short-circuits without error.
    pub fn inherit(
        &mut self,
        base: NodeIndex,
        type_arg_nodes: Option<&[NodeIndex]>,
    ) -> Result<ReflectionId> {
        // Convert type arguments in the *current* context, before the
        // inherit flags flip the binding rules.
        let converted_args = match type_arg_nodes {
            Some(nodes) => {
                let mut args = Vec::with_capacity(nodes.len());
                for &node in nodes {
                    let ty = self.program.type_at(node);
                    args.push(convert_type(self, node, ty)?);
                }
                args
            }
            None => Vec::new(),
        };

        // Keyed by declaration node, not symbol: a cycle revisits the same
        // declaration, while a merged symbol's declarations are all distinct
        // and must each contribute their members.
        if self.inherited_children.contains(&base.0) {
            warn!(
                scope = %self.project.full_name(self.scope),
                "circular inheritance detected, skipping"
            );
            return Ok(self.scope);
        }
        self.inherited_children.insert(base.0);

        let inherited_names: Vec<String> = match self.project.get(self.scope) {
            Some(scope) => scope
                .children
                .iter()
                .filter_map(|id| self.project.get(*id).map(|r| r.name.clone()))
                .collect(),
            None => Vec::new(),
        };

        let was_inherit = self.is_inherit;
        let saved_parent = self.inherit_parent;
        let saved_inherited = std::mem::take(&mut self.inherited);
        let saved_args = std::mem::take(&mut self.type_arguments);

        self.is_inherit = true;
        self.inherit_parent = base;
        self.inherited = inherited_names;
        self.type_arguments = converted_args;

        let result = convert_node(self, base);

        self.is_inherit = was_inherit;
        self.inherit_parent = saved_parent;
        self.inherited = saved_inherited;
        self.type_arguments = saved_args;
        // The guard set spans one inherit chain; only the outermost call
        // clears it.
        if !was_inherit {
            self.inherited_children.clear();
        }

        result?;
        Ok(self.scope)
    }

    /// Register the symbol behind a freshly created reflection. The mapping
    /// is first-write-wins and synthetic re-visits never write it.
    pub fn register_reflection(&mut self, id: ReflectionId, symbol: Option<SymbolId>) {
        if let Some(symbol_id) = self.registry.symbol_id(symbol) {
            if !self.is_inherit {
                self.project.symbol_mapping.entry(symbol_id).or_insert(id);
            }
        }
    }

    /// Best-effort type resolution: the node's own type, then the declared
    /// type of its symbol, its parent's, and its grandparent's. Absence is a
    /// valid outcome, never an error.
    pub fn type_at_location(&self, node: NodeIndex) -> Option<TypeId> {
        if let Some(ty) = self.program.type_at(node) {
            return Some(ty);
        }
        let mut cursor = node;
        for _ in 0..3 {
            let n = self.program.arena.get(cursor)?;
            if let Some(symbol) = n.symbol {
                if let Some(ty) = self.program.declared_type_of(symbol) {
                    return Some(ty);
                }
            }
            cursor = n.parent;
        }
        None
    }

    /// A reference type for a symbol: a registry placeholder when the symbol
    /// is known, a by-name reference otherwise.
    pub fn reference_to(&mut self, name: impl Into<String>, symbol: Option<SymbolId>) -> Type {
        match self.registry.symbol_id(symbol) {
            Some(id) => Type::reference(name, ReferenceTarget::Symbol { id }),
            None => Type::reference(name, ReferenceTarget::ByName),
        }
    }

    /// Reference to a member of the base type currently being inherited.
    pub fn base_member_reference(&mut self, member: NodeIndex, member_name: &str) -> Type {
        let base_name = self
            .program
            .arena
            .get(self.inherit_parent)
            .and_then(|n| n.name.clone())
            .unwrap_or_default();
        let symbol = self.program.symbol_of(member);
        self.reference_to(format!("{base_name}.{member_name}"), symbol)
    }

    // Event firing. Plugins are pre-sorted by priority.

    pub fn fire_begin(&mut self) {
        for plugin in self.plugins.iter_mut() {
            plugin.on_begin(&mut self.project, self.program);
        }
    }

    pub fn fire_end(&mut self) {
        for plugin in self.plugins.iter_mut() {
            plugin.on_end(&mut self.project, self.program);
        }
    }

    pub fn fire_file_begin(&mut self, file: NodeIndex) {
        for plugin in self.plugins.iter_mut() {
            plugin.on_file_begin(&mut self.project, self.program, file);
        }
    }

    pub fn fire_create_declaration(&mut self, id: ReflectionId, node: NodeIndex) {
        trace!(id = id.0, "create declaration");
        for plugin in self.plugins.iter_mut() {
            plugin.on_create_declaration(&mut self.project, self.program, id, node);
        }
    }

    pub fn fire_create_signature(&mut self, id: ReflectionId, node: NodeIndex) {
        for plugin in self.plugins.iter_mut() {
            plugin.on_create_signature(&mut self.project, self.program, id, node);
        }
    }

    pub fn fire_create_parameter(&mut self, id: ReflectionId, node: NodeIndex) {
        for plugin in self.plugins.iter_mut() {
            plugin.on_create_parameter(&mut self.project, self.program, id, node);
        }
    }

    pub fn fire_create_type_parameter(&mut self, id: ReflectionId, node: NodeIndex) {
        for plugin in self.plugins.iter_mut() {
            plugin.on_create_type_parameter(&mut self.project, self.program, id, node);
        }
    }

    pub fn fire_function_implementation(&mut self, id: ReflectionId, node: NodeIndex) {
        for plugin in self.plugins.iter_mut() {
            plugin.on_function_implementation(&mut self.project, self.program, id, node);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::bail;
    use tydoc_ast::{Node, SyntaxKind, symbol_flags};
    use tydoc_model::ReflectionKind;

    #[test]
    fn with_scope_restores_cursor_after_error() {
        let program = Program::new();
        let options = ConverterOptions::default();
        let mut plugins: Vec<Box<dyn ConverterPlugin>> = Vec::new();
        let mut ctx = Context::new(&program, &options, &mut plugins).unwrap();
        ctx.type_parameters
            .insert("T".to_string(), Type::intrinsic("any"));
        let class = ctx
            .project
            .create_reflection("Widget", ReflectionKind::Class, Some(Project::ROOT));

        let result: Result<()> = ctx.with_scope(class, None, true, |ctx| {
            ctx.type_parameters
                .insert("U".to_string(), Type::intrinsic("any"));
            ctx.type_arguments.push(Type::intrinsic("string"));
            bail!("member conversion failed")
        });

        assert!(result.is_err());
        assert_eq!(ctx.scope, Project::ROOT);
        assert!(ctx.type_parameters.contains_key("T"));
        assert!(!ctx.type_parameters.contains_key("U"));
        assert!(ctx.type_arguments.is_empty());
    }

    #[test]
    fn inherit_restores_flags_after_error() {
        let mut program = Program::new();
        let (base, _) = program.alloc_symbolic(
            Node::new(SyntaxKind::InterfaceDeclaration).with_name("Base"),
            symbol_flags::INTERFACE,
        );
        let (member, _) = program.alloc_symbolic(
            Node::new(SyntaxKind::PropertySignature).with_name("size"),
            symbol_flags::PROPERTY,
        );
        program.arena.add_child(base, member);
        let options = ConverterOptions::default();
        let mut plugins: Vec<Box<dyn ConverterPlugin>> = Vec::new();
        let mut ctx = Context::new(&program, &options, &mut plugins).unwrap();
        // A scope that does not exist makes the re-entered member
        // conversion fail.
        ctx.scope = ReflectionId(404);

        assert!(ctx.inherit(base, None).is_err());
        assert!(!ctx.is_inherit);
        assert_eq!(ctx.inherit_parent, NodeIndex::NONE);
        assert!(ctx.inherited.is_empty());
        assert!(ctx.type_arguments.is_empty());
    }
}
