use serde::Serialize;

use crate::conversation::ConversationEntry;

/// Request lifecycle of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum RequestState {
    #[default]
    Idle,
    Loading,
}

/// Everything a panel needs to draw itself.
///
/// Hosts that render with their own components can ship this as JSON; the
/// bundled HTML renderer lives in [`crate::render`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct PanelView {
    pub entries: Vec<ConversationEntry>,
    pub loading: bool,
}

impl PanelView {
    pub fn new(entries: Vec<ConversationEntry>, loading: bool) -> Self {
        Self { entries, loading }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
