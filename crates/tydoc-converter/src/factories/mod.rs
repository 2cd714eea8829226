//! Factories for the reflection graph.
//!
//! Node converters describe *which* nodes become documentation; the
//! factories own *how* a reflection comes into being: merging, inheritance
//! bookkeeping, exclusion policies, and event firing all live here so every
//! converter creates reflections through the same door.

pub mod declaration;
pub mod parameter;
pub mod signature;
pub mod type_parameter;

pub use declaration::create_declaration;
pub use parameter::create_parameter;
pub use signature::create_signature;
pub use type_parameter::create_type_parameters;
