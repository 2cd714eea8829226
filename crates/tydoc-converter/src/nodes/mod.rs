//! Node converters, one module per syntax-node category.
//!
//! Each converter decides whether its node becomes documentation and with
//! what kind, then delegates creation to the factories and recurses into
//! the members that belong to the new scope.

pub mod accessor;
pub mod alias;
pub mod block;
pub mod class;
pub mod enums;
pub mod export;
pub mod function;
pub mod interface;
pub mod literal;
pub mod module;
pub mod signature;
pub mod variable;
