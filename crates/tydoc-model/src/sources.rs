//! Source locations: per-reflection references, per-file aggregates, and the
//! directory tree mirroring the file system.

use crate::reflection::ReflectionId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A single "declared at" location on a reflection.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceReference {
    pub file_name: String,
    pub line: u32,
}

/// Aggregate of every reflection declared in one source file.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceFile {
    pub file_name: String,
    /// Display name after dynamic-module truncation.
    pub name: String,
    pub reflections: Vec<ReflectionId>,
}

impl SourceFile {
    pub fn new(file_name: impl Into<String>) -> SourceFile {
        let file_name = file_name.into();
        SourceFile {
            name: file_name.clone(),
            file_name,
            reflections: Vec::new(),
        }
    }
}

/// Directory tree over the project's source files. `files` holds indices
/// into the project's file list, keeping the tree free of ownership.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SourceDirectory {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub directories: BTreeMap<String, SourceDirectory>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub files: Vec<usize>,
}

impl SourceDirectory {
    /// Insert a file index at the directory path of `file_name`.
    pub fn insert(&mut self, file_name: &str, file_index: usize) {
        let mut dir = self;
        let parts: Vec<&str> = file_name.split('/').collect();
        for part in &parts[..parts.len().saturating_sub(1)] {
            if part.is_empty() || *part == "." {
                continue;
            }
            dir = dir
                .directories
                .entry((*part).to_string())
                .or_insert_with(|| SourceDirectory {
                    name: Some((*part).to_string()),
                    ..SourceDirectory::default()
                });
        }
        dir.files.push(file_index);
    }
}
