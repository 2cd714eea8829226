//! The program facade handed to the converter.

use crate::arena::{Node, NodeArena, NodeIndex};
use crate::symbols::{Symbol, SymbolArena, SymbolId};
use crate::syntax_kind::SyntaxKind;
use crate::types::{TypeId, TypeTable};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// A parsed, type-checked program: the converter's only input.
///
/// The maps from nodes and symbols to resolved types are sparse on purpose;
/// the checker is free to leave a node untyped and the converter must treat
/// that as a valid outcome.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Program {
    pub arena: NodeArena,
    pub symbols: SymbolArena,
    pub types: TypeTable,
    /// Source-file nodes, in compilation order.
    pub files: Vec<NodeIndex>,
    /// File names the user actually asked for; everything else is external.
    pub file_names: Vec<String>,
    /// Name of the default library file, if one was loaded.
    pub default_lib: Option<String>,
    node_types: FxHashMap<u32, TypeId>,
    symbol_types: FxHashMap<u32, TypeId>,
    return_types: FxHashMap<u32, TypeId>,
}

impl Program {
    pub fn new() -> Program {
        Program::default()
    }

    /// Register a parsed source file. `requested` marks it as part of the
    /// user's input set rather than a dependency.
    pub fn add_file(&mut self, file: NodeIndex, requested: bool) {
        self.files.push(file);
        if requested {
            if let Some(name) = self.file_name_of(file) {
                self.file_names.push(name.to_string());
            }
        }
    }

    pub fn file_name_of(&self, file: NodeIndex) -> Option<&str> {
        self.arena.get(file).and_then(|n| n.name.as_deref())
    }

    pub fn is_default_lib(&self, file: NodeIndex) -> bool {
        match (&self.default_lib, self.file_name_of(file)) {
            (Some(lib), Some(name)) => lib == name,
            _ => false,
        }
    }

    pub fn set_type_at(&mut self, node: NodeIndex, ty: TypeId) {
        self.node_types.insert(node.0, ty);
    }

    /// Checker-resolved type at a node. Absence is not an error.
    pub fn type_at(&self, node: NodeIndex) -> Option<TypeId> {
        self.node_types.get(&node.0).copied()
    }

    pub fn set_declared_type(&mut self, symbol: SymbolId, ty: TypeId) {
        self.symbol_types.insert(symbol.0, ty);
    }

    /// Declared type of a symbol, the fallback when a node itself is untyped.
    pub fn declared_type_of(&self, symbol: SymbolId) -> Option<TypeId> {
        self.symbol_types.get(&symbol.0).copied()
    }

    pub fn set_return_type(&mut self, signature: NodeIndex, ty: TypeId) {
        self.return_types.insert(signature.0, ty);
    }

    /// Resolved return type of a call/construct signature node.
    pub fn return_type_of(&self, signature: NodeIndex) -> Option<TypeId> {
        self.return_types.get(&signature.0).copied()
    }

    pub fn symbol_of(&self, node: NodeIndex) -> Option<SymbolId> {
        self.arena.get(node).and_then(|n| n.symbol)
    }

    pub fn symbol(&self, id: SymbolId) -> Option<&Symbol> {
        self.symbols.get(id)
    }

    pub fn declarations_of(&self, symbol: SymbolId) -> &[NodeIndex] {
        self.symbols
            .get(symbol)
            .map(|s| s.declarations.as_slice())
            .unwrap_or(&[])
    }

    pub fn type_to_string(&self, ty: TypeId) -> String {
        self.types.type_to_string(ty)
    }

    /// Convenience for hosts and tests: allocate a node and bind it to a
    /// fresh symbol in one step.
    pub fn alloc_symbolic(&mut self, node: Node, flags: u32) -> (NodeIndex, SymbolId) {
        let name = node.name.clone().unwrap_or_default();
        let symbol = self.symbols.alloc(name, flags);
        let idx = self.arena.alloc(node);
        if let Some(n) = self.arena.get_mut(idx) {
            n.symbol = Some(symbol);
        }
        self.symbols.add_declaration(symbol, idx);
        (idx, symbol)
    }

    /// A source file is a declaration file when its name says so.
    pub fn is_declaration_file(&self, file: NodeIndex) -> bool {
        self.file_name_of(file)
            .map(|n| n.ends_with(".d.ts"))
            .unwrap_or(false)
    }

    /// Statements of a source file or module body.
    pub fn statements_of(&self, node: NodeIndex) -> &[NodeIndex] {
        self.arena
            .get(node)
            .map(|n| n.children.as_slice())
            .unwrap_or(&[])
    }

    /// Walk up parent links until a node of the given kind is found.
    pub fn enclosing(&self, mut node: NodeIndex, kind: SyntaxKind) -> Option<NodeIndex> {
        while let Some(n) = self.arena.get(node) {
            if n.kind == kind {
                return Some(node);
            }
            node = n.parent;
        }
        None
    }

    /// The source file a node belongs to.
    pub fn file_of(&self, node: NodeIndex) -> Option<NodeIndex> {
        self.enclosing(node, SyntaxKind::SourceFile)
    }
}
