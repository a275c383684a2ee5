use serde::{Deserialize, Serialize};
use std::fmt;

/// A backend model the user can pick.
///
/// `label` is the identifier sent to the inference endpoint; `description` is
/// the human readable name shown in pickers and notifications.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelOption {
    pub label: String,
    pub description: String,
}

impl ModelOption {
    pub fn new(label: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            description: description.into(),
        }
    }
}

impl fmt::Display for ModelOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.description, self.label)
    }
}

/// Model used until the user picks another one.
pub const DEFAULT_MODEL: &str = "deepseek-ai/deepseek-coder-1.3b-instruct";

/// Built-in model catalog.
pub fn default_models() -> Vec<ModelOption> {
    vec![
        ModelOption::new("01-ai/Yi-Coder-1.5B-Chat", "Yi Coder 1.5B"),
        ModelOption::new(DEFAULT_MODEL, "DeepSeek Coder 1.3B"),
        ModelOption::new("Qwen/Qwen2.5-Coder-1.5B-Instruct", "Qwen2.5 Coder 1.5B"),
    ]
}

/// Find a catalog entry by its backend identifier.
pub fn find_model<'a>(models: &'a [ModelOption], label: &str) -> Option<&'a ModelOption> {
    models.iter().find(|m| m.label == label)
}
