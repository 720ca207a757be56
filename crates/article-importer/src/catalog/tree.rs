use std::collections::HashSet;
use std::path::Path;

use tracing::warn;

use crate::error::CatalogError;

use super::node::{project_options, CategoryNode, CategoryOption};

const BUILTIN_CATEGORIES_JSON: &str = include_str!("../../data/categories.json");

/// The read-only category taxonomy, supplied once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryTree {
    roots: Vec<CategoryNode>,
}

impl CategoryTree {
    pub fn new(roots: Vec<CategoryNode>) -> Result<Self, CatalogError> {
        if roots.is_empty() {
            return Err(CatalogError::Empty);
        }
        warn_duplicate_siblings(&roots, &mut Vec::new());
        Ok(Self { roots })
    }

    pub fn from_json_str(content: &str) -> Result<Self, CatalogError> {
        let roots: Vec<CategoryNode> = serde_json::from_str(content)?;
        Self::new(roots)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| CatalogError::ReadFile {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_json_str(&content)
    }

    /// The taxonomy compiled into the binary.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_json_str(BUILTIN_CATEGORIES_JSON)
    }

    pub fn roots(&self) -> &[CategoryNode] {
        &self.roots
    }

    pub fn root_options(&self) -> Vec<CategoryOption> {
        project_options(&self.roots)
    }

    /// Walks the tree along `path` and returns the children of the last
    /// resolved node.
    ///
    /// Each step takes the first sibling whose value matches. Any step that
    /// fails to match yields an empty slice. An empty path yields the roots.
    pub fn children_along<S: AsRef<str>>(&self, path: &[S]) -> &[CategoryNode] {
        let mut children: &[CategoryNode] = &self.roots;
        for value in path {
            match children.iter().find(|node| node.value == value.as_ref()) {
                Some(node) => children = &node.children,
                None => return &[],
            }
        }
        children
    }

    /// Length of the longest root-to-leaf walk.
    pub fn depth(&self) -> usize {
        fn depth_of(nodes: &[CategoryNode]) -> usize {
            nodes
                .iter()
                .map(|node| 1 + depth_of(&node.children))
                .max()
                .unwrap_or(0)
        }
        depth_of(&self.roots)
    }
}

fn warn_duplicate_siblings(nodes: &[CategoryNode], trail: &mut Vec<String>) {
    let mut seen = HashSet::new();
    for node in nodes {
        if !seen.insert(node.value.as_str()) {
            warn!(
                parent = %trail.join(" > "),
                value = %node.value,
                "Duplicate sibling category; the first occurrence wins"
            );
        }
    }
    for node in nodes {
        trail.push(node.value.clone());
        warn_duplicate_siblings(&node.children, trail);
        trail.pop();
    }
}
