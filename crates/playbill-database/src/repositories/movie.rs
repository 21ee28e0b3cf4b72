//! Movie repository implementation.

use futures::TryStreamExt;
use mongodb::bson::oid::ObjectId;
use mongodb::bson::{doc, Bson, Document};
use mongodb::Collection;
use tracing::warn;

use playbill_core::error::{AppError, ErrorKind};
use playbill_core::result::AppResult;
use playbill_core::types::pagination::PageRequest;
use playbill_entity::movie::{CreateMovieRequest, Movie, MovieDocument, UpdateMovieRequest};

use super::{set_nonempty_list, set_nonempty_str, substring_match, tags_filter};

use crate::connection::MongoStore;

/// Repository for movie CRUD and query operations.
#[derive(Debug, Clone)]
pub struct MovieRepository {
    collection: Collection<MovieDocument>,
}

impl MovieRepository {
    /// Create a new movie repository backed by the shared store handle.
    pub fn new(store: &MongoStore) -> Self {
        Self {
            collection: store.movies(),
        }
    }

    /// List movies with an empty filter. Returns the page of movies and
    /// the total count of all movies.
    pub async fn list(&self, page: PageRequest) -> AppResult<(Vec<Movie>, u64)> {
        self.find_page(doc! {}, page).await
    }

    /// Case-insensitive substring search against `name` or `originalName`.
    pub async fn search(&self, query: &str, page: PageRequest) -> AppResult<(Vec<Movie>, u64)> {
        let filter = doc! {
            "$or": [
                substring_match("name", query),
                substring_match("originalName", query),
            ]
        };
        self.find_page(filter, page).await
    }

    /// Movies whose `tags` array contains every requested tag.
    pub async fn filter_by_tags(
        &self,
        tags: &[String],
        page: PageRequest,
    ) -> AppResult<(Vec<Movie>, u64)> {
        self.find_page(tags_filter(tags), page).await
    }

    /// Find a movie by id. `Ok(None)` when no document matches.
    pub async fn find_by_id(&self, id: ObjectId) -> AppResult<Option<Movie>> {
        let document = self
            .collection
            .find_one(doc! { "_id": id })
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find movie", e))?;
        document.map(into_movie).transpose()
    }

    /// Insert a new movie and return it with the store-assigned id.
    pub async fn create(&self, request: CreateMovieRequest) -> AppResult<Movie> {
        let mut document = MovieDocument::from_request(request);

        let result = self
            .collection
            .insert_one(&document)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to insert movie", e))?;

        let id = match result.inserted_id {
            Bson::ObjectId(id) => id,
            other => {
                return Err(AppError::internal(format!(
                    "Store returned a non-object-id for the inserted movie: {other}"
                )))
            }
        };

        document.id = Some(id);
        into_movie(document)
    }

    /// Apply a partial update and return the full updated movie.
    ///
    /// Only non-empty request fields are written. A target id with no
    /// matching document is a typed not-found, distinct from store
    /// failures.
    pub async fn update(&self, id: ObjectId, request: &UpdateMovieRequest) -> AppResult<Movie> {
        let fields = update_fields(request);
        if fields.is_empty() {
            // Nothing to write; an empty $set would be a server error.
            warn!(id = %id, "Movie update request carried no applicable fields");
            return self.require(id).await;
        }

        let result = self
            .collection
            .update_one(doc! { "_id": id }, doc! { "$set": fields })
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update movie", e))?;

        if result.matched_count == 0 {
            return Err(AppError::not_found("Movie not found"));
        }

        self.require(id).await
    }

    /// Delete a movie by id. Zero deleted documents is a typed not-found.
    pub async fn delete(&self, id: ObjectId) -> AppResult<()> {
        let result = self
            .collection
            .delete_one(doc! { "_id": id })
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete movie", e))?;

        if result.deleted_count == 0 {
            return Err(AppError::not_found("Movie not found"));
        }
        Ok(())
    }

    /// Count + find on the same filter, mapping documents to responses.
    async fn find_page(&self, filter: Document, page: PageRequest) -> AppResult<(Vec<Movie>, u64)> {
        let total = self
            .collection
            .count_documents(filter.clone())
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count movies", e))?;

        let documents: Vec<MovieDocument> = self
            .collection
            .find(filter)
            .skip(page.offset())
            .limit(page.limit() as i64)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list movies", e))?
            .try_collect()
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to decode movie", e))?;

        let movies = documents
            .into_iter()
            .map(into_movie)
            .collect::<AppResult<Vec<_>>>()?;
        Ok((movies, total))
    }

    async fn require(&self, id: ObjectId) -> AppResult<Movie> {
        self.find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Movie not found"))
    }
}

/// Map a stored document to its response shape. A document with no
/// identifier never came out of the store intact, so it surfaces as an
/// internal error rather than an empty `_id`.
fn into_movie(document: MovieDocument) -> AppResult<Movie> {
    document
        .into_response()
        .ok_or_else(|| AppError::internal("Movie document missing an identifier"))
}

/// Build the `$set` document from the non-empty fields of a request.
fn update_fields(request: &UpdateMovieRequest) -> Document {
    let mut fields = Document::new();
    set_nonempty_str(&mut fields, "cover", &request.cover);
    set_nonempty_str(&mut fields, "name", &request.name);
    set_nonempty_str(&mut fields, "originalName", &request.original_name);
    set_nonempty_str(&mut fields, "description", &request.description);
    set_nonempty_str(&mut fields, "duration", &request.duration);
    if let Some(date) = request.release_date {
        fields.insert(
            "releaseDate",
            Bson::DateTime(mongodb::bson::DateTime::from_chrono(date)),
        );
    }
    set_nonempty_str(&mut fields, "age", &request.age);
    set_nonempty_list(&mut fields, "categories", &request.categories);
    set_nonempty_list(&mut fields, "tags", &request.tags);
    set_nonempty_list(&mut fields, "media", &request.media);
    fields
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn sample_document() -> MovieDocument {
        MovieDocument::from_request(CreateMovieRequest {
            cover: String::new(),
            name: "Solaris".into(),
            original_name: "Солярис".into(),
            description: String::new(),
            duration: "2h 47m".into(),
            release_date: Utc.with_ymd_and_hms(1972, 3, 20, 0, 0, 0).unwrap(),
            age: "12+".into(),
            categories: vec![],
            tags: vec![],
            media: vec![],
        })
    }

    #[test]
    fn document_missing_an_id_is_an_internal_error() {
        let err = into_movie(sample_document()).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Internal);

        let mut document = sample_document();
        document.id = Some(ObjectId::new());
        let movie = into_movie(document).unwrap();
        assert_eq!(movie.id.len(), 24);
    }

    #[test]
    fn update_fields_applies_only_present_nonempty_fields() {
        // name="B" against a movie with name="A", tags=["x"]: the $set
        // touches name only, tags stay untouched.
        let request = UpdateMovieRequest {
            name: Some("B".into()),
            ..Default::default()
        };
        assert_eq!(update_fields(&request), doc! { "name": "B" });
    }

    #[test]
    fn update_fields_skips_empty_strings_and_lists() {
        let request = UpdateMovieRequest {
            cover: Some(String::new()),
            tags: Some(vec![]),
            duration: Some("1h 48m".into()),
            ..Default::default()
        };
        assert_eq!(update_fields(&request), doc! { "duration": "1h 48m" });
    }

    #[test]
    fn update_fields_converts_release_date_to_bson_datetime() {
        let date = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
        let request = UpdateMovieRequest {
            release_date: Some(date),
            ..Default::default()
        };
        let fields = update_fields(&request);
        assert!(matches!(
            fields.get("releaseDate"),
            Some(Bson::DateTime(_))
        ));
    }

    #[test]
    fn update_fields_empty_request_builds_empty_set() {
        assert!(update_fields(&UpdateMovieRequest::default()).is_empty());
    }

    #[test]
    fn search_filter_covers_both_name_fields() {
        let filter = doc! {
            "$or": [
                substring_match("name", "dune"),
                substring_match("originalName", "dune"),
            ]
        };
        let alternatives = filter.get_array("$or").unwrap();
        assert_eq!(alternatives.len(), 2);
    }
}
