//! In-memory feedback storage.
//!
//! An append-only list of feedback records that lives for the process
//! lifetime. Writes are serialized through an async RwLock so concurrent
//! submissions never lose entries; insertion order is the only ordering.

use std::sync::Arc;

use tokio::sync::RwLock;

/// A single feedback submission. Fields are stored verbatim; rating is a
/// free-form string, not validated as numeric.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedbackEntry {
    pub name: String,
    pub comment: String,
    pub rating: String,
}

impl FeedbackEntry {
    /// Build an entry from optional form fields.
    ///
    /// Defaults apply only when a field is absent; a submitted empty
    /// string is stored verbatim.
    pub fn from_form(
        name: Option<String>,
        comment: Option<String>,
        rating: Option<String>,
    ) -> Self {
        Self {
            name: name.unwrap_or_else(|| "Anonymous".to_string()),
            comment: comment.unwrap_or_default(),
            rating: rating.unwrap_or_else(|| "5".to_string()),
        }
    }
}

/// Shared, synchronized, append-only feedback list.
#[derive(Debug, Clone, Default)]
pub struct FeedbackStore {
    entries: Arc<RwLock<Vec<FeedbackEntry>>>,
}

impl FeedbackStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry. Entries are never mutated or removed.
    pub async fn append(&self, entry: FeedbackEntry) {
        self.entries.write().await.push(entry);
    }

    /// Snapshot of all entries in insertion order.
    pub async fn entries(&self) -> Vec<FeedbackEntry> {
        self.entries.read().await.clone()
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_applied_to_missing_fields() {
        let entry = FeedbackEntry::from_form(None, None, None);
        assert_eq!(entry.name, "Anonymous");
        assert_eq!(entry.comment, "");
        assert_eq!(entry.rating, "5");
    }

    #[test]
    fn empty_submitted_fields_are_stored_verbatim() {
        let entry = FeedbackEntry::from_form(
            Some(String::new()),
            Some(String::new()),
            Some(String::new()),
        );
        assert_eq!(entry.name, "");
        assert_eq!(entry.comment, "");
        assert_eq!(entry.rating, "");
    }

    #[test]
    fn provided_fields_kept_verbatim() {
        let entry = FeedbackEntry::from_form(
            Some("Alice".to_string()),
            Some("Great".to_string()),
            Some("4".to_string()),
        );
        assert_eq!(entry.name, "Alice");
        assert_eq!(entry.comment, "Great");
        assert_eq!(entry.rating, "4");
    }

    #[tokio::test]
    async fn preserves_insertion_order() {
        let store = FeedbackStore::new();
        store
            .append(FeedbackEntry::from_form(
                Some("Alice".to_string()),
                Some("Great".to_string()),
                Some("4".to_string()),
            ))
            .await;
        store
            .append(FeedbackEntry::from_form(
                Some("Bob".to_string()),
                Some("Meh".to_string()),
                Some("2".to_string()),
            ))
            .await;

        let entries = store.entries().await;
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].name, "Alice");
        assert_eq!(entries[1].name, "Bob");
        assert_eq!(entries[1].rating, "2");
    }

    #[tokio::test]
    async fn concurrent_appends_lose_nothing() {
        let store = FeedbackStore::new();
        let mut handles = Vec::new();

        for i in 0..50 {
            let store = store.clone();
            handles.push(tokio::spawn(async move {
                store
                    .append(FeedbackEntry::from_form(
                        Some(format!("user-{i}")),
                        Some("comment".to_string()),
                        None,
                    ))
                    .await;
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }

        assert_eq!(store.len().await, 50);
    }
}
