//! Movie entity model.

use bson::oid::ObjectId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A movie as stored in the movies collection.
///
/// BSON keys use the same camelCase names as the JSON wire format.
/// `_id` is `None` only before the first insert; the store assigns it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieDocument {
    /// Store-assigned identifier.
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// Cover image reference.
    pub cover: String,
    /// Localized title.
    pub name: String,
    /// Title in the original language.
    pub original_name: String,
    /// Synopsis.
    pub description: String,
    /// Running time, free-form (e.g. "2h 15m").
    pub duration: String,
    /// Theatrical release date.
    #[serde(with = "bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub release_date: DateTime<Utc>,
    /// Age rating, free-form (e.g. "16+").
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

impl MovieDocument {
    /// Build a document from a create request. The identifier is left
    /// unset for the store to assign.
    pub fn from_request(req: CreateMovieRequest) -> Self {
        Self {
            id: None,
            cover: req.cover,
            name: req.name,
            original_name: req.original_name,
            description: req.description,
            duration: req.duration,
            release_date: req.release_date,
            age: req.age,
            categories: req.categories,
            tags: req.tags,
            media: req.media,
        }
    }

    /// Map this document to its API response shape. `None` when the
    /// document carries no identifier, which only a document that never
    /// went through the store can do.
    pub fn into_response(self) -> Option<Movie> {
        Some(Movie {
            id: self.id?.to_hex(),
            cover: self.cover,
            name: self.name,
            original_name: self.original_name,
            description: self.description,
            duration: self.duration,
            release_date: self.release_date,
            age: self.age,
            categories: self.categories,
            tags: self.tags,
            media: self.media,
        })
    }
}

/// A movie as returned to API clients. The identifier is the
/// 24-character hex form of the store object id.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    /// Hex-encoded identifier.
    #[serde(rename = "_id")]
    pub id: String,
    /// Cover image reference.
    pub cover: String,
    /// Localized title.
    pub name: String,
    /// Title in the original language.
    pub original_name: String,
    /// Synopsis.
    pub description: String,
    /// Running time, free-form.
    pub duration: String,
    /// Theatrical release date (RFC 3339 on the wire).
    pub release_date: DateTime<Utc>,
    /// Age rating, free-form.
    pub age: String,
    /// Genre labels.
    pub categories: Vec<String>,
    /// Labels used by the tag filter.
    pub tags: Vec<String>,
    /// Media URLs (trailers, stills).
    pub media: Vec<String>,
}

/// Request body for `POST /api/movie`. Carries no identifier.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMovieRequest {
    #[serde(default)]
    pub cover: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub original_name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub duration: String,
    /// Theatrical release date (RFC 3339).
    pub release_date: DateTime<Utc>,
    #[serde(default)]
    pub age: String,
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub media: Vec<String>,
}

/// Request body for `PUT /api/movie/{id}`.
///
/// Partial semantics: only fields that are present and non-empty are
/// applied; everything else leaves the stored value unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UpdateMovieRequest {
    pub cover: Option<String>,
    pub name: Option<String>,
    pub original_name: Option<String>,
    pub description: Option<String>,
    pub duration: Option<String>,
    pub release_date: Option<DateTime<Utc>>,
    pub age: Option<String>,
    pub categories: Option<Vec<String>>,
    pub tags: Option<Vec<String>>,
    pub media: Option<Vec<String>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample_request() -> CreateMovieRequest {
        CreateMovieRequest {
            cover: "cover.jpg".into(),
            name: "Дюна".into(),
            original_name: "Dune".into(),
            description: "Spice and sand".into(),
            duration: "2h 35m".into(),
            release_date: Utc.with_ymd_and_hms(2021, 10, 22, 0, 0, 0).unwrap(),
            age: "12+".into(),
            categories: vec!["sci-fi".into()],
            tags: vec!["epic".into(), "desert".into()],
            media: vec!["https://example.com/trailer".into()],
        }
    }

    #[test]
    fn document_from_request_has_no_id() {
        let doc = MovieDocument::from_request(sample_request());
        assert!(doc.id.is_none());
        assert_eq!(doc.name, "Дюна");
        assert_eq!(doc.tags, vec!["epic", "desert"]);
    }

    #[test]
    fn response_id_is_hex_encoded() {
        let oid = ObjectId::parse_str("507f1f77bcf86cd799439011").unwrap();
        let mut doc = MovieDocument::from_request(sample_request());
        doc.id = Some(oid);

        let movie = doc.into_response().unwrap();
        assert_eq!(movie.id, "507f1f77bcf86cd799439011");

        let json = serde_json::to_value(&movie).unwrap();
        assert_eq!(json["_id"], "507f1f77bcf86cd799439011");
        assert_eq!(json["originalName"], "Dune");
    }

    #[test]
    fn document_without_id_yields_no_response() {
        let doc = MovieDocument::from_request(sample_request());
        assert!(doc.into_response().is_none());
    }

    #[test]
    fn update_request_fields_default_to_absent() {
        let req: UpdateMovieRequest = serde_json::from_str(r#"{"name":"B"}"#).unwrap();
        assert_eq!(req.name.as_deref(), Some("B"));
        assert!(req.cover.is_none());
        assert!(req.tags.is_none());
        assert!(req.release_date.is_none());
    }
}
