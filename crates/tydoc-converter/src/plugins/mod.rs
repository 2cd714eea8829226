//! The event-driven resolution pass.
//!
//! Plugins listen to creation events while the graph is being built and to
//! resolve events once it is complete. Listener order is an explicit,
//! declared priority per plugin (higher runs first, ties broken by
//! registration order) because the pass has load-bearing inter-plugin
//! dependencies: comment modifiers must be applied before grouping reads
//! them, grouping before categorization.

use tydoc_ast::{NodeIndex, Program};
use tydoc_model::{Project, ReflectionId};

pub mod category;
pub mod comment;
pub mod decorator;
pub mod dynamic_module;
pub mod group;
pub mod implements;
pub mod source;
pub mod type_plugin;

pub use category::CategoryPlugin;
pub use comment::CommentPlugin;
pub use decorator::DecoratorPlugin;
pub use dynamic_module::DynamicModulePlugin;
pub use group::GroupPlugin;
pub use implements::ImplementsPlugin;
pub use source::SourcePlugin;
pub use type_plugin::TypePlugin;

/// A listener on the conversion and resolution event stream.
///
/// Every hook defaults to a no-op; plugins implement only what they need.
/// Creation hooks fire while the traversal cursor is live, resolve hooks
/// fire over the completed graph.
pub trait ConverterPlugin {
    fn name(&self) -> &'static str;

    /// Higher priorities run first within each event.
    fn priority(&self) -> i32 {
        0
    }

    fn on_begin(&mut self, _project: &mut Project, _program: &Program) {}

    fn on_file_begin(&mut self, _project: &mut Project, _program: &Program, _file: NodeIndex) {}

    fn on_create_declaration(
        &mut self,
        _project: &mut Project,
        _program: &Program,
        _id: ReflectionId,
        _node: NodeIndex,
    ) {
    }

    fn on_create_signature(
        &mut self,
        _project: &mut Project,
        _program: &Program,
        _id: ReflectionId,
        _node: NodeIndex,
    ) {
    }

    fn on_create_parameter(
        &mut self,
        _project: &mut Project,
        _program: &Program,
        _id: ReflectionId,
        _node: NodeIndex,
    ) {
    }

    fn on_create_type_parameter(
        &mut self,
        _project: &mut Project,
        _program: &Program,
        _id: ReflectionId,
        _node: NodeIndex,
    ) {
    }

    /// A function declaration with a body was seen after its overload
    /// signatures were already collected.
    fn on_function_implementation(
        &mut self,
        _project: &mut Project,
        _program: &Program,
        _id: ReflectionId,
        _node: NodeIndex,
    ) {
    }

    fn on_end(&mut self, _project: &mut Project, _program: &Program) {}

    fn on_resolve_begin(&mut self, _project: &mut Project) {}

    /// Fired once per reflection alive at the start of the resolve pass.
    fn on_resolve(&mut self, _project: &mut Project, _id: ReflectionId) {}

    fn on_resolve_end(&mut self, _project: &mut Project) {}
}

/// The default plugin set in registration order. The converter sorts by
/// priority, so the order here only breaks ties.
pub fn default_plugins() -> Vec<Box<dyn ConverterPlugin>> {
    vec![
        Box::new(CommentPlugin::new()),
        Box::new(DecoratorPlugin::new()),
        Box::new(SourcePlugin::new()),
        Box::new(DynamicModulePlugin::new()),
        Box::new(TypePlugin::new()),
        Box::new(ImplementsPlugin::new()),
        Box::new(GroupPlugin::new()),
        Box::new(CategoryPlugin::new()),
    ]
}
