//! Placeholder ids for symbols seen before their reflections exist.
//!
//! Reference types created mid-conversion cannot point at final reflection
//! ids, so every symbol gets a stable negative placeholder on first sight;
//! the resolution pass maps placeholders to reflections through the
//! project's symbol mapping. The registry is per conversion run so ids from
//! independent conversions never collide.

use rustc_hash::FxHashMap;
use tydoc_ast::SymbolId;

const FIRST_PLACEHOLDER: i64 = -1024;

/// Allocates and caches one placeholder id per symbol identity.
#[derive(Debug)]
pub struct SymbolRegistry {
    ids: FxHashMap<u32, i64>,
    next: i64,
}

impl SymbolRegistry {
    pub fn new() -> SymbolRegistry {
        SymbolRegistry {
            ids: FxHashMap::default(),
            next: FIRST_PLACEHOLDER,
        }
    }

    /// The placeholder id for a symbol; allocated on first call, cached
    /// afterwards. `None` in, `None` out.
    pub fn symbol_id(&mut self, symbol: Option<SymbolId>) -> Option<i64> {
        let symbol = symbol?;
        let next = &mut self.next;
        Some(*self.ids.entry(symbol.0).or_insert_with(|| {
            let id = *next;
            *next -= 1;
            id
        }))
    }
}

impl Default for SymbolRegistry {
    fn default() -> Self {
        SymbolRegistry::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_allocation_starts_at_minus_1024() {
        let mut registry = SymbolRegistry::new();
        assert_eq!(registry.symbol_id(Some(SymbolId(0))), Some(-1024));
        assert_eq!(registry.symbol_id(Some(SymbolId(1))), Some(-1025));
    }

    #[test]
    fn ids_are_cached_per_symbol() {
        let mut registry = SymbolRegistry::new();
        let first = registry.symbol_id(Some(SymbolId(3)));
        let second = registry.symbol_id(Some(SymbolId(3)));
        assert_eq!(first, second);
    }

    #[test]
    fn missing_symbol_yields_nothing() {
        let mut registry = SymbolRegistry::new();
        assert_eq!(registry.symbol_id(None), None);
    }
}
