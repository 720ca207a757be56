//! Cascading category selector engine.
//!
//! The selection path is the only mutable state; option levels are always
//! re-derived from it, so they can never drift from the path.

use std::sync::Arc;

use tracing::{debug, warn};

use super::node::{project_options, CategoryOption};
use super::tree::CategoryTree;

/// Receiver of the effective category value.
///
/// This is the one write channel from the cascade into the request model.
pub trait CategorySink {
    fn set_category(&mut self, value: &str);
}

/// Derives the option list for every depth reachable by `path`.
///
/// The result always has `path.len() + 1` entries: entry `0` holds the roots,
/// entry `i` the children of the node resolved by `path[..i]`. Unresolvable
/// prefixes produce empty entries.
pub fn derive_option_levels<S: AsRef<str>>(
    tree: &CategoryTree,
    path: &[S],
) -> Vec<Vec<CategoryOption>> {
    (0..=path.len())
        .map(|depth| project_options(tree.children_along(&path[..depth])))
        .collect()
}

/// One selector the caller should render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectorSlot<'a> {
    pub depth: usize,
    pub options: &'a [CategoryOption],
    pub selected: Option<&'a str>,
}

/// The user's current walk through the category tree.
#[derive(Debug, Clone)]
pub struct CategoryCascade {
    tree: Arc<CategoryTree>,
    path: Vec<String>,
    levels: Vec<Vec<CategoryOption>>,
}

impl CategoryCascade {
    pub fn new(tree: Arc<CategoryTree>) -> Self {
        let levels = vec![tree.root_options()];
        Self {
            tree,
            path: Vec::new(),
            levels,
        }
    }

    pub fn tree(&self) -> &CategoryTree {
        &self.tree
    }

    pub fn selection_path(&self) -> &[String] {
        &self.path
    }

    pub fn option_levels(&self) -> &[Vec<CategoryOption>] {
        &self.levels
    }

    /// Options available at `depth`, or `None` when that depth is not
    /// currently derived.
    pub fn options_at(&self, depth: usize) -> Option<&[CategoryOption]> {
        self.levels.get(depth).map(Vec::as_slice)
    }

    pub fn selected_at(&self, depth: usize) -> Option<&str> {
        self.path.get(depth).map(String::as_str)
    }

    /// Records `value` as the selection at `level`, discards every deeper
    /// selection, re-derives the option levels and publishes `value` to
    /// `sink`.
    ///
    /// A value that is not among the current options at `level` is still
    /// recorded; it simply has no children. Levels past the end of the
    /// current path are clamped to the next free depth.
    pub fn select_at<S>(&mut self, level: usize, value: impl Into<String>, sink: &mut S)
    where
        S: CategorySink + ?Sized,
    {
        let value = value.into();
        let level = if level > self.path.len() {
            warn!(
                requested = level,
                depth = self.path.len(),
                "Category selected below an unselected level; clamping"
            );
            self.path.len()
        } else {
            level
        };

        let known = self
            .levels
            .get(level)
            .is_some_and(|options| options.iter().any(|o| o.value == value));
        if !known {
            debug!(level, value = %value, "Selected category is not among current options");
        }

        self.path.truncate(level);
        self.path.push(value);
        self.levels = derive_option_levels(&self.tree, &self.path);

        debug!(
            level,
            path = %self.path.join(" > "),
            next_options = self.levels[level + 1].len(),
            "Category selection updated"
        );

        sink.set_category(&self.path[level]);
    }

    /// Selectors to render, shallowest first.
    ///
    /// Depth 0 is always present. A selector at depth `i + 1` appears only
    /// when depth `i` has a selection and its option list is non-empty.
    pub fn selectors(&self) -> Vec<SelectorSlot<'_>> {
        let mut slots = vec![SelectorSlot {
            depth: 0,
            options: &self.levels[0],
            selected: self.selected_at(0),
        }];
        for depth in 1..=self.path.len() {
            let options = &self.levels[depth];
            if !options.is_empty() {
                slots.push(SelectorSlot {
                    depth,
                    options,
                    selected: self.selected_at(depth),
                });
            }
        }
        slots
    }

    /// Drops every selection, leaving only the root options.
    pub fn reset(&mut self) {
        self.path.clear();
        self.levels = vec![self.tree.root_options()];
    }
}
