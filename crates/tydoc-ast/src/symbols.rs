//! Symbols: the identity of a named entity across its declarations.

use crate::arena::NodeIndex;
use serde::{Deserialize, Serialize};

/// Flags describing what a symbol declares.
pub mod symbol_flags {
    pub const CLASS: u32 = 1 << 0;
    pub const INTERFACE: u32 = 1 << 1;
    pub const FUNCTION: u32 = 1 << 2;
    pub const VARIABLE: u32 = 1 << 3;
    pub const NAMESPACE: u32 = 1 << 4;
    pub const ENUM: u32 = 1 << 5;
    pub const TYPE_ALIAS: u32 = 1 << 6;
    pub const PROPERTY: u32 = 1 << 7;
    pub const METHOD: u32 = 1 << 8;
    /// Anonymous type literal (`{ a: string }` in type position).
    pub const TYPE_LITERAL: u32 = 1 << 9;
    /// Anonymous object literal value.
    pub const OBJECT_LITERAL: u32 = 1 << 10;
    pub const TYPE_PARAMETER: u32 = 1 << 11;
}

/// Index of a symbol in a [`SymbolArena`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SymbolId(pub u32);

/// A named entity's identity, shared by all of its declarations.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Symbol {
    pub name: String,
    pub flags: u32,
    /// Every syntactic declaration of this symbol, in binding order.
    pub declarations: Vec<NodeIndex>,
    /// Dotted canonical path, e.g. `"app".Widget.render`.
    pub fully_qualified_name: String,
}

impl Symbol {
    pub fn has_flag(&self, flag: u32) -> bool {
        self.flags & flag != 0
    }
}

/// Flat storage for all symbols of a program.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SymbolArena {
    symbols: Vec<Symbol>,
}

impl SymbolArena {
    pub fn new() -> SymbolArena {
        SymbolArena {
            symbols: Vec::new(),
        }
    }

    pub fn alloc(&mut self, name: impl Into<String>, flags: u32) -> SymbolId {
        let name = name.into();
        let id = SymbolId(self.symbols.len() as u32);
        self.symbols.push(Symbol {
            fully_qualified_name: name.clone(),
            name,
            flags,
            declarations: Vec::new(),
        });
        id
    }

    pub fn alloc_qualified(
        &mut self,
        name: impl Into<String>,
        fully_qualified_name: impl Into<String>,
        flags: u32,
    ) -> SymbolId {
        let id = SymbolId(self.symbols.len() as u32);
        self.symbols.push(Symbol {
            name: name.into(),
            flags,
            declarations: Vec::new(),
            fully_qualified_name: fully_qualified_name.into(),
        });
        id
    }

    pub fn get(&self, id: SymbolId) -> Option<&Symbol> {
        self.symbols.get(id.0 as usize)
    }

    pub fn get_mut(&mut self, id: SymbolId) -> Option<&mut Symbol> {
        self.symbols.get_mut(id.0 as usize)
    }

    pub fn add_declaration(&mut self, id: SymbolId, node: NodeIndex) {
        if let Some(symbol) = self.get_mut(id) {
            symbol.declarations.push(node);
        }
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}
