//! Builder patterns for creating test data programmatically.

#![allow(dead_code)]

use std::sync::Arc;

use article_importer::{CategoryNode, CategoryTree, ImportRequest};

/// Builder for a single `CategoryNode` and its subtree.
pub struct NodeBuilder {
    value: String,
    children: Vec<CategoryNode>,
}

impl NodeBuilder {
    pub fn new(value: &str) -> Self {
        Self {
            value: value.to_string(),
            children: vec![],
        }
    }

    /// Add a child subtree.
    pub fn child(mut self, child: NodeBuilder) -> Self {
        self.children.push(child.build());
        self
    }

    /// Add several leaf children at once.
    pub fn leaves(mut self, values: &[&str]) -> Self {
        self.children
            .extend(values.iter().map(|v| CategoryNode::leaf(*v)));
        self
    }

    pub fn build(self) -> CategoryNode {
        CategoryNode::with_children(self.value, self.children)
    }
}

/// Shorthand for `NodeBuilder::new`.
pub fn node(value: &str) -> NodeBuilder {
    NodeBuilder::new(value)
}

/// Builds a shared tree from root builders.
pub fn tree(roots: Vec<NodeBuilder>) -> Arc<CategoryTree> {
    let roots = roots.into_iter().map(NodeBuilder::build).collect();
    Arc::new(CategoryTree::new(roots).expect("test tree must have roots"))
}

/// A three-level taxonomy used across tests.
///
/// ```text
/// Tech
///   AI
///     LLM
///     Vision
///   Databases
///     Graph
/// Science
///   Physics
/// Travel
/// ```
pub fn sample_tree() -> Arc<CategoryTree> {
    tree(vec![
        node("Tech")
            .child(node("AI").leaves(&["LLM", "Vision"]))
            .child(node("Databases").leaves(&["Graph"])),
        node("Science").leaves(&["Physics"]),
        node("Travel"),
    ])
}

/// Builder for `ImportRequest` values.
pub struct RequestBuilder {
    request: ImportRequest,
}

impl RequestBuilder {
    pub fn new() -> Self {
        Self {
            request: ImportRequest::default(),
        }
    }

    pub fn text(mut self, text: &str) -> Self {
        self.request.text = text.to_string();
        self
    }

    pub fn category(mut self, category: &str) -> Self {
        self.request.category = category.to_string();
        self
    }

    pub fn tag(mut self, tag: &str) -> Self {
        self.request.tag = tag.to_string();
        self
    }

    pub fn size(mut self, size: i64) -> Self {
        self.request.size = size;
        self
    }

    pub fn build(self) -> ImportRequest {
        self.request
    }
}

impl Default for RequestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
