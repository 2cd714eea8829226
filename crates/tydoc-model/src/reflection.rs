//! The reflection entity.
//!
//! One struct covers every kind; kind-specific fields are optional and empty
//! collections are skipped during serialization. Ownership is exclusively
//! the project table's; every field that points at another reflection holds
//! an id, never the reflection itself.

use crate::comment::Comment;
use crate::flags::ReflectionFlags;
use crate::group::{ReflectionCategory, ReflectionGroup};
use crate::kind::ReflectionKind;
use crate::sources::SourceReference;
use crate::types::Type;
use serde::{Deserialize, Serialize};

/// Unique id of a reflection within one project.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ReflectionId(pub u32);

/// A decorator applied to a declaration.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Decorator {
    pub name: String,
    /// Reference to the decorator function, resolved during the resolution
    /// pass.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub decorator_type: Option<Type>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub arguments: Vec<String>,
}

/// One node of the documentation graph.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reflection {
    pub id: ReflectionId,
    pub name: String,
    /// Name before any rename (used for doc-comment path lookups).
    pub original_name: String,
    pub kind: ReflectionKind,
    #[serde(default)]
    pub flags: ReflectionFlags,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<ReflectionId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<Comment>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sources: Vec<SourceReference>,

    // Container fields
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<ReflectionId>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub groups: Vec<ReflectionGroup>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub categories: Vec<ReflectionCategory>,

    // Declaration fields
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub type_: Option<Type>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub signatures: Vec<ReflectionId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index_signature: Option<ReflectionId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub get_signature: Option<ReflectionId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub set_signature: Option<ReflectionId>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub parameters: Vec<ReflectionId>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub type_parameters: Vec<ReflectionId>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extended_types: Vec<Type>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extended_by: Vec<Type>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub implemented_types: Vec<Type>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub implemented_by: Vec<Type>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inherited_from: Option<Type>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overwrites: Option<Type>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub implementation_of: Option<Type>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub decorators: Vec<Decorator>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub decorates: Vec<Type>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,
}

impl Reflection {
    pub fn new(id: ReflectionId, name: impl Into<String>, kind: ReflectionKind) -> Reflection {
        let name = name.into();
        Reflection {
            id,
            original_name: name.clone(),
            name,
            kind,
            flags: ReflectionFlags::empty(),
            parent: None,
            comment: None,
            sources: Vec::new(),
            children: Vec::new(),
            groups: Vec::new(),
            categories: Vec::new(),
            type_: None,
            signatures: Vec::new(),
            index_signature: None,
            get_signature: None,
            set_signature: None,
            parameters: Vec::new(),
            type_parameters: Vec::new(),
            extended_types: Vec::new(),
            extended_by: Vec::new(),
            implemented_types: Vec::new(),
            implemented_by: Vec::new(),
            inherited_from: None,
            overwrites: None,
            implementation_of: None,
            decorators: Vec::new(),
            decorates: Vec::new(),
            default_value: None,
        }
    }

    pub fn is_container(&self) -> bool {
        self.kind.is_container()
    }

    pub fn set_flag(&mut self, flag: ReflectionFlags, value: bool) {
        self.flags.set(flag, value);
    }

    /// Rename, preserving the original name for path lookups.
    pub fn rename(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Every id slot that structurally belongs to this reflection, in a
    /// stable order. Cascade removal walks this.
    pub fn owned_ids(&self) -> Vec<ReflectionId> {
        let mut out = Vec::new();
        out.extend(&self.children);
        out.extend(&self.signatures);
        out.extend(&self.parameters);
        out.extend(&self.type_parameters);
        out.extend(self.index_signature);
        out.extend(self.get_signature);
        out.extend(self.set_signature);
        out
    }

    /// Drop every structural reference to `id` without touching ownership of
    /// anything else.
    pub fn sweep_reference(&mut self, id: ReflectionId) {
        self.children.retain(|c| *c != id);
        self.signatures.retain(|c| *c != id);
        self.parameters.retain(|c| *c != id);
        self.type_parameters.retain(|c| *c != id);
        if self.index_signature == Some(id) {
            self.index_signature = None;
        }
        if self.get_signature == Some(id) {
            self.get_signature = None;
        }
        if self.set_signature == Some(id) {
            self.set_signature = None;
        }
        for group in &mut self.groups {
            group.children.retain(|c| *c != id);
        }
        for category in &mut self.categories {
            category.children.retain(|c| *c != id);
        }
    }
}
