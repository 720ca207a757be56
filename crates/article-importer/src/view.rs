//! Render-ready projection of the import form.
//!
//! Nothing here holds state; every call re-projects the cascade and the
//! workflow, so a frontend can re-render from scratch after each event.

use serde::Serialize;

use crate::catalog::{CategoryCascade, CategoryOption};
use crate::workflow::ImportWorkflow;

pub const FORM_TITLE: &str = "Article Importer";

pub const FORM_INTRO: &str = "Fetch recent news articles matching a keyword, category or tag \
     and store them as a lexical graph of articles and their text chunks.";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectorView {
    pub depth: usize,
    pub label: &'static str,
    pub placeholder: &'static str,
    pub options: Vec<CategoryOption>,
    pub selected: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextFieldView {
    pub label: &'static str,
    pub placeholder: &'static str,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SizeFieldView {
    pub label: &'static str,
    pub value: i64,
    pub min: i64,
    pub max: i64,
    pub required: bool,
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BannerView {
    pub title: &'static str,
    pub message: String,
    pub dismissible: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmitView {
    pub label: &'static str,
    /// Shown while a submission is in flight; the control ignores presses.
    pub loading: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormView {
    pub title: &'static str,
    pub intro: &'static str,
    /// False while the success banner is shown; the banner replaces the form.
    pub form_visible: bool,
    pub text: TextFieldView,
    pub selectors: Vec<SelectorView>,
    pub tag: TextFieldView,
    pub size: SizeFieldView,
    pub error_banner: Option<BannerView>,
    pub validation_banner: Option<BannerView>,
    pub success_banner: Option<BannerView>,
    pub submit: SubmitView,
}

impl FormView {
    pub fn project(cascade: &CategoryCascade, workflow: &ImportWorkflow) -> Self {
        let request = workflow.request();
        let limits = workflow.limits();

        let selectors = cascade
            .selectors()
            .into_iter()
            .map(|slot| {
                let (label, placeholder) = if slot.depth == 0 {
                    ("Category", "Select a category")
                } else {
                    ("Subcategory", "Select a subcategory")
                };
                SelectorView {
                    depth: slot.depth,
                    label,
                    placeholder,
                    options: slot.options.to_vec(),
                    selected: slot.selected.map(str::to_string),
                }
            })
            .collect();

        let success_banner = workflow.success_message().map(|message| BannerView {
            title: "Done!",
            message: message.to_string(),
            dismissible: true,
        });
        let error_banner = workflow.error_message().map(|message| BannerView {
            title: "Error!",
            message: message.to_string(),
            dismissible: true,
        });
        let validation_banner = workflow.errors().search_terms.as_ref().map(|message| {
            BannerView {
                title: "Error!",
                message: message.clone(),
                dismissible: false,
            }
        });

        Self {
            title: FORM_TITLE,
            intro: FORM_INTRO,
            form_visible: success_banner.is_none(),
            text: TextFieldView {
                label: "Keyword text search",
                placeholder: "Example: Neo4j Inc",
                value: request.text.clone(),
            },
            selectors,
            tag: TextFieldView {
                label: "Tag",
                placeholder:
                    "Examples: LLM, Artificial Intelligence, Natural Language Processing, Semantic Web",
                value: request.tag.clone(),
            },
            size: SizeFieldView {
                label: "Number of articles",
                value: request.size,
                min: limits.min,
                max: limits.max,
                required: true,
                error: workflow.errors().size.clone(),
            },
            error_banner,
            validation_banner,
            success_banner,
            submit: SubmitView {
                label: "Submit",
                loading: workflow.is_in_flight(),
            },
        }
    }
}
