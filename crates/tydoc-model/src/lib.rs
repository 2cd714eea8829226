//! The reflection graph: tydoc's output data model.
//!
//! This crate is organized into several submodules:
//! - `kind` - `ReflectionKind` and its containment/grouping behavior
//! - `flags` - `ReflectionFlags` bitset
//! - `types` - the value-like `Type` hierarchy referenced by reflections
//! - `comment` - structured doc comments
//! - `reflection` - the `Reflection` entity
//! - `project` - the central reflection arena and symbol mapping
//! - `group` - presentation partitions built by the resolution pass
//! - `sources` - source references, file aggregates, directory tree
//!
//! All cross-references between reflections are `ReflectionId`s into the
//! project's table; the table is the only owner.

pub mod comment;
pub mod flags;
pub mod group;
pub mod kind;
pub mod project;
pub mod reflection;
pub mod sources;
pub mod types;

pub use comment::{Comment, CommentTag};
pub use flags::ReflectionFlags;
pub use group::{ReflectionCategory, ReflectionGroup};
pub use kind::ReflectionKind;
pub use project::Project;
pub use reflection::{Decorator, Reflection, ReflectionId};
pub use sources::{SourceDirectory, SourceFile, SourceReference};
pub use types::{ReferenceTarget, Type};
