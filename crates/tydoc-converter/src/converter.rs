//! The conversion orchestrator.
//!
//! Drives the begin -> per-file -> resolve -> end sequence and owns the two
//! recursive entry points every converter uses: [`convert_node`] for syntax
//! nodes and [`convert_type`] for syntax/resolved type pairs.

use crate::context::Context;
use crate::nodes;
use crate::options::ConverterOptions;
use crate::plugins::{ConverterPlugin, default_plugins};
use crate::types::type_converters;
use anyhow::Result;
use tracing::{debug, trace};
use tydoc_ast::{NodeIndex, Program, SyntaxKind, TypeId};
use tydoc_model::{Project, ReflectionId, Type};

/// Converts programs into projects.
pub struct Converter {
    options: ConverterOptions,
    plugins: Vec<Box<dyn ConverterPlugin>>,
}

impl Converter {
    pub fn new(options: ConverterOptions) -> Converter {
        let mut converter = Converter {
            options,
            plugins: default_plugins(),
        };
        converter.sort_plugins();
        converter
    }

    /// Register an additional plugin; listener order is by priority, with
    /// ties broken by registration order.
    pub fn add_plugin(&mut self, plugin: Box<dyn ConverterPlugin>) {
        self.plugins.push(plugin);
        self.sort_plugins();
    }

    fn sort_plugins(&mut self) {
        self.plugins.sort_by_key(|p| -p.priority());
    }

    /// Convert a program into a finished, resolved project.
    pub fn convert(&mut self, program: &Program) -> Result<Project> {
        let Converter { options, plugins } = self;
        let mut ctx = Context::new(program, options, plugins)?;

        ctx.fire_begin();
        for &file in &program.files {
            ctx.with_source_file(file, |ctx| convert_node(ctx, file))?;
        }
        ctx.fire_end();

        let mut project = ctx.finish();
        debug!(reflections = project.len(), "conversion finished, resolving");
        self.resolve(&mut project);
        Ok(project)
    }

    /// The resolution phase: resolve-begin, one resolve event per
    /// reflection alive at the start of the pass, then resolve-end. The id
    /// snapshot is taken up front so plugins may remove reflections while
    /// the pass runs.
    fn resolve(&mut self, project: &mut Project) {
        for plugin in self.plugins.iter_mut() {
            plugin.on_resolve_begin(project);
        }
        for id in project.reflection_ids() {
            if !project.contains(id) {
                continue;
            }
            for plugin in self.plugins.iter_mut() {
                plugin.on_resolve(project, id);
            }
        }
        for plugin in self.plugins.iter_mut() {
            plugin.on_resolve_end(project);
        }
    }
}

/// Convert a single syntax node in the current context.
///
/// Returns the reflection the node produced (or merged into), or `None`
/// when the node is filtered out or of an unsupported kind. Nodes already on
/// the visit stack are skipped, which breaks conversion cycles.
pub fn convert_node(ctx: &mut Context, node: NodeIndex) -> Result<Option<ReflectionId>> {
    let Some(n) = ctx.program.arena.get(node) else {
        return Ok(None);
    };
    if ctx.visit_stack.contains(&node) {
        return Ok(None);
    }
    let kind = n.kind;
    ctx.visit_stack.push(node);
    let result = dispatch_node(ctx, node, kind);
    ctx.visit_stack.pop();
    result
}

fn dispatch_node(
    ctx: &mut Context,
    node: NodeIndex,
    kind: SyntaxKind,
) -> Result<Option<ReflectionId>> {
    match kind {
        SyntaxKind::SourceFile => nodes::block::convert_source_file(ctx, node),
        SyntaxKind::ModuleDeclaration => nodes::module::convert_module(ctx, node),
        SyntaxKind::ClassDeclaration => nodes::class::convert_class(ctx, node),
        SyntaxKind::InterfaceDeclaration => nodes::interface::convert_interface(ctx, node),
        SyntaxKind::FunctionDeclaration
        | SyntaxKind::MethodDeclaration
        | SyntaxKind::MethodSignature
        | SyntaxKind::ArrowFunction
        | SyntaxKind::FunctionExpression => nodes::function::convert_function(ctx, node),
        SyntaxKind::Constructor => nodes::function::convert_constructor(ctx, node),
        SyntaxKind::GetAccessor | SyntaxKind::SetAccessor => {
            nodes::accessor::convert_accessor(ctx, node)
        }
        SyntaxKind::EnumDeclaration => nodes::enums::convert_enum(ctx, node),
        SyntaxKind::EnumMember => nodes::enums::convert_enum_member(ctx, node),
        SyntaxKind::VariableStatement => nodes::variable::convert_variable_statement(ctx, node),
        SyntaxKind::VariableDeclaration
        | SyntaxKind::PropertyDeclaration
        | SyntaxKind::PropertySignature
        | SyntaxKind::PropertyAssignment
        | SyntaxKind::BindingElement => nodes::variable::convert_variable(ctx, node),
        SyntaxKind::TypeAliasDeclaration => nodes::alias::convert_type_alias(ctx, node),
        SyntaxKind::ExportAssignment => nodes::export::convert_export_assignment(ctx, node),
        SyntaxKind::CallSignature | SyntaxKind::ConstructSignature | SyntaxKind::IndexSignature => {
            nodes::signature::convert_signature_member(ctx, node)
        }
        SyntaxKind::ObjectLiteralExpression | SyntaxKind::TypeLiteral => {
            nodes::literal::convert_members(ctx, node)
        }
        _ => {
            trace!(?kind, "no node converter, skipping");
            Ok(None)
        }
    }
}

/// Convert a syntax type node and/or a resolved type into a documentation
/// type.
///
/// Node-based converters run first in priority order, then type-based
/// converters against the resolved type; the unconditional fallback renders
/// the checker's own string, so the result is total whenever a resolved
/// type was supplied.
pub fn convert_type(ctx: &mut Context, node: NodeIndex, ty: Option<TypeId>) -> Result<Type> {
    if node.is_some() {
        if let Some(n) = ctx.program.arena.get(node) {
            let n = n.clone();
            for converter in type_converters() {
                if converter.supports_node(ctx, node, &n) {
                    if let Some(result) = converter.convert_node(ctx, node, &n)? {
                        return Ok(result);
                    }
                }
            }
        }
    }
    if let Some(id) = ty {
        if let Some(data) = ctx.program.types.get(id) {
            let data = data.clone();
            for converter in type_converters() {
                if converter.supports_type(ctx, id, &data) {
                    if let Some(result) = converter.convert_type(ctx, id, &data)? {
                        return Ok(result);
                    }
                }
            }
        }
        // The unknown fallback always matches, so reaching this point means
        // the id itself was invalid. Degrade the same way.
        return Ok(Type::unknown(ctx.program.type_to_string(id)));
    }
    trace!("untyped node with no resolved type, treating as any");
    Ok(Type::intrinsic("any"))
}
