//! Program abstraction consumed by the tydoc conversion core.
//!
//! This crate provides the "given" side of the pipeline: the host parses and
//! type-checks source files by whatever means it likes and hands the core a
//! [`Program`] made of:
//! - A thin syntax-node arena (`Node`, `NodeArena`, `NodeIndex`)
//! - Symbols (`Symbol`, `SymbolArena`, `SymbolId`)
//! - An interned resolved-type table (`TypeData`, `TypeTable`, `TypeId`)
//!
//! The converter never re-implements parsing or checking; it only reads this
//! structure.

pub mod arena;
pub mod program;
pub mod symbols;
pub mod syntax_kind;
pub mod types;

pub use arena::{HeritageClause, HeritageToken, ModifierFlags, Node, NodeArena, NodeIndex};
pub use program::Program;
pub use symbols::{Symbol, SymbolArena, SymbolId, symbol_flags};
pub use syntax_kind::SyntaxKind;
pub use types::{ObjectFlags, TypeData, TypeId, TypeTable};
