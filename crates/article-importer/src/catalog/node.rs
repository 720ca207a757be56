use serde::{Deserialize, Serialize};

/// One node of the category taxonomy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryNode {
    pub value: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<CategoryNode>,
}

impl CategoryNode {
    pub fn leaf(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            children: vec![],
        }
    }

    pub fn with_children(value: impl Into<String>, children: Vec<CategoryNode>) -> Self {
        Self {
            value: value.into(),
            children,
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

/// A selectable entry in one selector level.
///
/// The catalog has no separate display names, so `label` always mirrors
/// `value`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryOption {
    pub value: String,
    pub label: String,
}

impl From<&CategoryNode> for CategoryOption {
    fn from(node: &CategoryNode) -> Self {
        Self {
            value: node.value.clone(),
            label: node.value.clone(),
        }
    }
}

/// Projects a list of sibling nodes into selector options, preserving order.
pub fn project_options(nodes: &[CategoryNode]) -> Vec<CategoryOption> {
    nodes.iter().map(CategoryOption::from).collect()
}
