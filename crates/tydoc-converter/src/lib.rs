//! The tydoc conversion core.
//!
//! This crate is organized into several submodules:
//! - `options` - configuration the core consumes (owned elsewhere)
//! - `registry` - symbol identity -> placeholder id registry
//! - `context` - the stack-scoped traversal cursor
//! - `converter` - the orchestrator and the `convert_node`/`convert_type`
//!   entry points
//! - `factories` - declaration/signature/parameter/type-parameter creation
//! - `nodes` - one converter per syntax-node category
//! - `types` - priority-dispatched type converters
//! - `comment` - doc-comment parsing
//! - `plugins` - the event-driven resolution pass
//!
//! Conversion is single-threaded and synchronous: one mutable cursor walks
//! the program depth-first, then an ordered plugin pass patches
//! cross-references over the finished graph.

pub mod comment;
pub mod context;
pub mod converter;
pub mod factories;
pub mod nodes;
pub mod options;
pub mod plugins;
pub mod registry;
pub mod types;

pub use context::Context;
pub use converter::{Converter, convert_node, convert_type};
pub use options::ConverterOptions;
pub use plugins::ConverterPlugin;
pub use registry::SymbolRegistry;
pub use types::TypeConverter;
