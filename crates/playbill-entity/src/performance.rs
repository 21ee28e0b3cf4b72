//! Performance entity model.
//!
//! Same shape as a movie minus `originalName` and `releaseDate`.

use bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// A theatre performance as stored in the performances collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceDocument {
    /// Store-assigned identifier.
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// Cover image reference.
    pub cover: String,
    /// Performance title.
    pub name: String,
    /// Synopsis.
    pub description: String,
    /// Running time, free-form.
    pub duration: String,
    /// Age rating, free-form.
    pub age: String,
    /// Genre labels.
    #[serde(default)]
    pub categories: Vec<String>,
    /// Labels used by the tag filter.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Media URLs (trailers, stills).
    #[serde(default)]
    pub media: Vec<String>,
}

impl PerformanceDocument {
    /// Build a document from a create request, identifier unset.
    pub fn from_request(req: CreatePerformanceRequest) -> Self {
        Self {
            id: None,
            cover: req.cover,
            name: req.name,
            description: req.description,
            duration: req.duration,
            age: req.age,
            categories: req.categories,
            tags: req.tags,
            media: req.media,
        }
    }

    /// Map this document to its API response shape. `None` when the
    /// document carries no identifier.
    pub fn into_response(self) -> Option<Performance> {
        Some(Performance {
            id: self.id?.to_hex(),
            cover: self.cover,
            name: self.name,
            description: self.description,
            duration: self.duration,
            age: self.age,
            categories: self.categories,
            tags: self.tags,
            media: self.media,
        })
    }
}

/// A performance as returned to API clients.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Performance {
    /// Hex-encoded identifier.
    #[serde(rename = "_id")]
    pub id: String,
    /// Cover image reference.
    pub cover: String,
    /// Performance title.
    pub name: String,
    /// Synopsis.
    pub description: String,
    /// Running time, free-form.
    pub duration: String,
    /// Age rating, free-form.
    pub age: String,
    /// Genre labels.
    pub categories: Vec<String>,
    /// Labels used by the tag filter.
    pub tags: Vec<String>,
    /// Media URLs (trailers, stills).
    pub media: Vec<String>,
}

/// Request body for `POST /api/performance`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreatePerformanceRequest {
    pub cover: String,
    pub name: String,
    pub description: String,
    pub duration: String,
    pub age: String,
    pub categories: Vec<String>,
    pub tags: Vec<String>,
    pub media: Vec<String>,
}

/// Request body for `PUT /api/performance/{id}`, partial semantics.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UpdatePerformanceRequest {
    pub cover: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub duration: Option<String>,
    pub age: Option<String>,
    pub categories: Option<Vec<String>>,
    pub tags: Option<Vec<String>>,
    pub media: Option<Vec<String>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn response_id_is_hex_encoded() {
        let doc = PerformanceDocument {
            id: Some(ObjectId::parse_str("65b2f0a1c3d4e5f601234567").unwrap()),
            cover: String::new(),
            name: "Гамлет".into(),
            description: "Tragedy".into(),
            duration: "3h".into(),
            age: "16+".into(),
            categories: vec![],
            tags: vec!["classic".into()],
            media: vec![],
        };
        let perf = doc.into_response().unwrap();
        assert_eq!(perf.id, "65b2f0a1c3d4e5f601234567");
        assert_eq!(perf.tags, vec!["classic"]);
    }

    #[test]
    fn document_without_id_yields_no_response() {
        let doc = PerformanceDocument::from_request(CreatePerformanceRequest::default());
        assert!(doc.into_response().is_none());
    }
}
