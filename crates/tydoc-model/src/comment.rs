//! Structured doc comments.

use serde::{Deserialize, Serialize};

/// One `@tag` extracted from a doc comment.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentTag {
    pub tag_name: String,
    /// Parameter name for `@param`-style tags.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub param_name: Option<String>,
    pub text: String,
}

impl CommentTag {
    pub fn new(tag_name: impl Into<String>, param_name: Option<String>, text: impl Into<String>) -> CommentTag {
        CommentTag {
            tag_name: tag_name.into(),
            param_name,
            text: text.into(),
        }
    }
}

/// A parsed doc comment: first paragraph, remaining text, and tags.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub returns: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<CommentTag>,
}

impl Comment {
    pub fn has_visible_component(&self) -> bool {
        self.short_text.is_some() || self.text.is_some() || !self.tags.is_empty()
    }

    pub fn has_tag(&self, tag_name: &str) -> bool {
        self.tags.iter().any(|t| t.tag_name == tag_name)
    }

    pub fn get_tag(&self, tag_name: &str, param_name: Option<&str>) -> Option<&CommentTag> {
        self.tags.iter().find(|t| {
            t.tag_name == tag_name
                && match param_name {
                    Some(p) => t.param_name.as_deref() == Some(p),
                    None => true,
                }
        })
    }

    /// Remove every tag with the given name, returning the removed tags.
    pub fn remove_tags(&mut self, tag_name: &str) -> Vec<CommentTag> {
        let mut removed = Vec::new();
        self.tags.retain(|t| {
            if t.tag_name == tag_name {
                removed.push(t.clone());
                false
            } else {
                true
            }
        });
        removed
    }

    /// Copy visible text from another comment, as when an inherited member
    /// adopts its base member's documentation.
    pub fn copy_from(&mut self, other: &Comment) {
        self.short_text = other.short_text.clone();
        self.text = other.text.clone();
        self.returns = other.returns.clone();
    }
}
