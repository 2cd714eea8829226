//! Presentation partitions built by the resolution pass.
//!
//! Groups and categories never own children; they index into a container's
//! already-owned child list.

use crate::kind::ReflectionKind;
use crate::reflection::ReflectionId;
use serde::{Deserialize, Serialize};

/// Children of a container partitioned by kind.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReflectionGroup {
    pub title: String,
    pub kind: ReflectionKind,
    pub children: Vec<ReflectionId>,
}

impl ReflectionGroup {
    pub fn new(kind: ReflectionKind) -> ReflectionGroup {
        ReflectionGroup {
            title: kind.plural_name().to_string(),
            kind,
            children: Vec::new(),
        }
    }
}

/// Children of a container partitioned by `@category` tag.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReflectionCategory {
    pub title: String,
    pub children: Vec<ReflectionId>,
}

impl ReflectionCategory {
    pub fn new(title: impl Into<String>) -> ReflectionCategory {
        ReflectionCategory {
            title: title.into(),
            children: Vec::new(),
        }
    }
}
