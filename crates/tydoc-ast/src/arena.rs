//! Thin syntax-node arena.
//!
//! Nodes live in one flat `Vec` and reference each other through
//! [`NodeIndex`] values with a `u32::MAX` sentinel for "no node", so the
//! whole tree is cheap to clone and trivially serializable. Child lists keep
//! source order; every node carries a parent link so the converter can walk
//! upward when recovering from missing type information.

use crate::symbols::SymbolId;
use crate::syntax_kind::SyntaxKind;
use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Index of a node in a [`NodeArena`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeIndex(pub u32);

impl NodeIndex {
    pub const NONE: NodeIndex = NodeIndex(u32::MAX);

    #[inline]
    pub fn is_none(self) -> bool {
        self.0 == u32::MAX
    }

    #[inline]
    pub fn is_some(self) -> bool {
        !self.is_none()
    }
}

bitflags! {
    /// Modifier and structural flags packed into 16 bits per node.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
    pub struct ModifierFlags: u16 {
        const EXPORT = 1 << 0;
        const DEFAULT = 1 << 1;
        const DECLARE = 1 << 2;
        const PRIVATE = 1 << 3;
        const PROTECTED = 1 << 4;
        const PUBLIC = 1 << 5;
        const STATIC = 1 << 6;
        const ABSTRACT = 1 << 7;
        const READONLY = 1 << 8;
        const OPTIONAL = 1 << 9;
        const REST = 1 << 10;
        const CONST = 1 << 11;
        const LET = 1 << 12;
        /// Function-like node has an implementation body.
        const HAS_BODY = 1 << 13;
        /// `export =` form of an export assignment.
        const EXPORT_EQUALS = 1 << 14;
    }
}

/// Which heritage keyword introduced a clause.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum HeritageToken {
    Extends,
    Implements,
}

/// One `extends`/`implements` clause with its type-reference nodes.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct HeritageClause {
    pub token: HeritageToken,
    pub types: Vec<NodeIndex>,
}

/// A syntax node.
///
/// Deliberately wider than a parser-internal node: this is a host-facing
/// abstraction and the converter reads most of these fields on most kinds,
/// so the typed-pool indirection a real parser wants buys nothing here.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Node {
    pub kind: SyntaxKind,
    pub flags: ModifierFlags,
    /// Identifier text for named nodes, file path for source files.
    pub name: Option<String>,
    pub parent: NodeIndex,
    /// Statements, members, enum members, binding elements, literal
    /// properties, or union/tuple element type nodes, in source order.
    pub children: SmallVec<[NodeIndex; 4]>,
    pub parameters: Vec<NodeIndex>,
    pub type_parameters: Vec<NodeIndex>,
    /// Type arguments on a type-reference node.
    pub type_arguments: Vec<NodeIndex>,
    pub heritage_clauses: Vec<HeritageClause>,
    pub decorators: Vec<NodeIndex>,
    /// Declared type annotation, type-operator target, array element type,
    /// or type-parameter constraint.
    pub type_node: NodeIndex,
    pub initializer: NodeIndex,
    /// Literal text, default-value text, or a type operator keyword.
    pub text: Option<String>,
    /// Raw doc comment attached to this node, `/** ... */` included.
    pub doc_comment: Option<String>,
    pub symbol: Option<SymbolId>,
    /// 1-based line in the owning source file.
    pub line: u32,
}

impl Node {
    pub fn new(kind: SyntaxKind) -> Node {
        Node {
            kind,
            flags: ModifierFlags::empty(),
            name: None,
            parent: NodeIndex::NONE,
            children: SmallVec::new(),
            parameters: Vec::new(),
            type_parameters: Vec::new(),
            type_arguments: Vec::new(),
            heritage_clauses: Vec::new(),
            decorators: Vec::new(),
            type_node: NodeIndex::NONE,
            initializer: NodeIndex::NONE,
            text: None,
            doc_comment: None,
            symbol: None,
            line: 0,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Node {
        self.name = Some(name.into());
        self
    }

    pub fn with_flags(mut self, flags: ModifierFlags) -> Node {
        self.flags |= flags;
        self
    }

    pub fn with_type(mut self, type_node: NodeIndex) -> Node {
        self.type_node = type_node;
        self
    }

    pub fn with_initializer(mut self, initializer: NodeIndex) -> Node {
        self.initializer = initializer;
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Node {
        self.text = Some(text.into());
        self
    }

    pub fn with_doc(mut self, doc: impl Into<String>) -> Node {
        self.doc_comment = Some(doc.into());
        self
    }

    pub fn with_symbol(mut self, symbol: SymbolId) -> Node {
        self.symbol = Some(symbol);
        self
    }

    pub fn with_line(mut self, line: u32) -> Node {
        self.line = line;
        self
    }

    pub fn has_modifier(&self, flag: ModifierFlags) -> bool {
        self.flags.contains(flag)
    }
}

/// Flat storage for all nodes of a program.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct NodeArena {
    nodes: Vec<Node>,
}

impl NodeArena {
    pub fn new() -> NodeArena {
        NodeArena { nodes: Vec::new() }
    }

    pub fn alloc(&mut self, node: Node) -> NodeIndex {
        let idx = NodeIndex(self.nodes.len() as u32);
        self.nodes.push(node);
        idx
    }

    pub fn get(&self, idx: NodeIndex) -> Option<&Node> {
        if idx.is_none() {
            return None;
        }
        self.nodes.get(idx.0 as usize)
    }

    pub fn get_mut(&mut self, idx: NodeIndex) -> Option<&mut Node> {
        if idx.is_none() {
            return None;
        }
        self.nodes.get_mut(idx.0 as usize)
    }

    /// Append `child` to `parent`'s child list and set its parent link.
    pub fn add_child(&mut self, parent: NodeIndex, child: NodeIndex) {
        if let Some(node) = self.get_mut(child) {
            node.parent = parent;
        }
        if let Some(node) = self.get_mut(parent) {
            node.children.push(child);
        }
    }

    /// Record `child` as a parameter of `parent`.
    pub fn add_parameter(&mut self, parent: NodeIndex, child: NodeIndex) {
        if let Some(node) = self.get_mut(child) {
            node.parent = parent;
        }
        if let Some(node) = self.get_mut(parent) {
            node.parameters.push(child);
        }
    }

    /// Record `child` as a type parameter of `parent`.
    pub fn add_type_parameter(&mut self, parent: NodeIndex, child: NodeIndex) {
        if let Some(node) = self.get_mut(child) {
            node.parent = parent;
        }
        if let Some(node) = self.get_mut(parent) {
            node.type_parameters.push(child);
        }
    }

    /// Attach a heritage clause to a class or interface node.
    pub fn add_heritage(&mut self, parent: NodeIndex, token: HeritageToken, types: Vec<NodeIndex>) {
        for &t in &types {
            if let Some(node) = self.get_mut(t) {
                node.parent = parent;
            }
        }
        if let Some(node) = self.get_mut(parent) {
            node.heritage_clauses.push(HeritageClause { token, types });
        }
    }

    pub fn kind(&self, idx: NodeIndex) -> Option<SyntaxKind> {
        self.get(idx).map(|n| n.kind)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_child_sets_parent_link() {
        let mut arena = NodeArena::new();
        let file = arena.alloc(Node::new(SyntaxKind::SourceFile).with_name("a.ts"));
        let class = arena.alloc(Node::new(SyntaxKind::ClassDeclaration).with_name("A"));
        arena.add_child(file, class);

        assert_eq!(arena.get(class).unwrap().parent, file);
        assert_eq!(arena.get(file).unwrap().children.as_slice(), &[class]);
    }

    #[test]
    fn none_index_resolves_to_nothing() {
        let arena = NodeArena::new();
        assert!(arena.get(NodeIndex::NONE).is_none());
        assert!(NodeIndex::NONE.is_none());
    }
}
