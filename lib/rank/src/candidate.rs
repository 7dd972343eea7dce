use librix_core::Embedding;
use serde::{Deserialize, Serialize};

/// A book in the retrieval corpus: identifier, embedding, display payload.
///
/// The payload is an opaque JSON bag owned by the caller; the ranker only
/// reads it when building context blocks (`title` and `authors` fields).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Candidate {
    /// Stable identifier, e.g. an ISBN.
    pub id: String,
    pub embedding: Embedding,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payload: Option<serde_json::Value>,
}

impl Candidate {
    #[inline]
    #[must_use]
    pub fn new(id: impl Into<String>, embedding: Embedding) -> Self {
        Self {
            id: id.into(),
            embedding,
            payload: None,
        }
    }

    #[inline]
    #[must_use]
    pub fn with_payload(mut self, payload: serde_json::Value) -> Self {
        self.payload = Some(payload);
        self
    }

    /// Title from the display payload, or empty string if absent.
    #[must_use]
    pub fn title(&self) -> &str {
        self.payload
            .as_ref()
            .and_then(|p| p.get("title"))
            .and_then(|t| t.as_str())
            .unwrap_or("")
    }

    /// First author from the display payload, or empty string if none.
    #[must_use]
    pub fn first_author(&self) -> &str {
        self.payload
            .as_ref()
            .and_then(|p| p.get("authors"))
            .and_then(|a| a.get(0))
            .and_then(|a| a.as_str())
            .unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_display_fields() {
        let c = Candidate::new("978-0", Embedding::new(vec![1.0])).with_payload(json!({
            "title": "Dune",
            "authors": ["Frank Herbert", "Someone Else"]
        }));
        assert_eq!(c.title(), "Dune");
        assert_eq!(c.first_author(), "Frank Herbert");
    }

    #[test]
    fn test_missing_payload_fields_are_empty() {
        let c = Candidate::new("978-1", Embedding::new(vec![1.0]));
        assert_eq!(c.title(), "");
        assert_eq!(c.first_author(), "");

        let c = c.with_payload(json!({ "title": "Untitled", "authors": [] }));
        assert_eq!(c.first_author(), "");
    }
}
