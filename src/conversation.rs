use serde::{Deserialize, Serialize};

/// One exchange shown in the panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversationEntry {
    pub user_input: String,
    pub ai_response: String,
}

impl ConversationEntry {
    pub fn new(user_input: impl Into<String>, ai_response: impl Into<String>) -> Self {
        Self {
            user_input: user_input.into(),
            ai_response: ai_response.into(),
        }
    }
}

/// Append-only history of exchanges for one session.
///
/// Entries are kept in insertion order, which is also display order. There is
/// no way to edit or drop an entry once it has been appended; the whole store
/// goes away with the session that owns it.
#[derive(Debug, Default, Clone)]
pub struct ConversationStore {
    entries: Vec<ConversationEntry>,
}

impl ConversationStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Push one exchange onto the end of the history.
    pub fn append(&mut self, user_input: impl Into<String>, ai_response: impl Into<String>) {
        self.entries
            .push(ConversationEntry::new(user_input, ai_response));
    }

    /// Owned copy of the history, oldest first.
    pub fn snapshot(&self) -> Vec<ConversationEntry> {
        self.entries.clone()
    }

    /// Borrowed view of the history, oldest first.
    pub fn entries(&self) -> &[ConversationEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_is_detached() {
        let mut store = ConversationStore::new();
        store.append("a", "1");
        let mut snap = store.snapshot();
        snap[0].ai_response = "changed".into();
        snap.clear();
        assert_eq!(store.len(), 1);
        assert_eq!(store.entries()[0].ai_response, "1");
    }

    #[test]
    fn serializes_camel_case() {
        let entry = ConversationEntry::new("q", "a");
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["userInput"], "q");
        assert_eq!(json["aiResponse"], "a");
    }
}
