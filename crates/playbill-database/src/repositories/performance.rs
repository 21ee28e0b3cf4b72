//! Performance repository implementation.

use futures::TryStreamExt;
use mongodb::bson::oid::ObjectId;
use mongodb::bson::{doc, Bson, Document};
use mongodb::Collection;
use tracing::warn;

use playbill_core::error::{AppError, ErrorKind};
use playbill_core::result::AppResult;
use playbill_core::types::pagination::PageRequest;
use playbill_entity::performance::{
    CreatePerformanceRequest, Performance, PerformanceDocument, UpdatePerformanceRequest,
};

use super::{set_nonempty_list, set_nonempty_str, substring_match, tags_filter};

use crate::connection::MongoStore;

/// Repository for performance CRUD and query operations.
#[derive(Debug, Clone)]
pub struct PerformanceRepository {
    collection: Collection<PerformanceDocument>,
}

impl PerformanceRepository {
    /// Create a new performance repository backed by the shared store handle.
    pub fn new(store: &MongoStore) -> Self {
        Self {
            collection: store.performances(),
        }
    }

    /// List performances with an empty filter.
    pub async fn list(&self, page: PageRequest) -> AppResult<(Vec<Performance>, u64)> {
        self.find_page(doc! {}, page).await
    }

    /// Case-insensitive substring search against `name` or `description`.
    pub async fn search(
        &self,
        query: &str,
        page: PageRequest,
    ) -> AppResult<(Vec<Performance>, u64)> {
        let filter = doc! {
            "$or": [
                substring_match("name", query),
                substring_match("description", query),
            ]
        };
        self.find_page(filter, page).await
    }

    /// Performances whose `tags` array contains every requested tag.
    pub async fn filter_by_tags(
        &self,
        tags: &[String],
        page: PageRequest,
    ) -> AppResult<(Vec<Performance>, u64)> {
        self.find_page(tags_filter(tags), page).await
    }

    /// Find a performance by id. `Ok(None)` when no document matches.
    pub async fn find_by_id(&self, id: ObjectId) -> AppResult<Option<Performance>> {
        let document = self
            .collection
            .find_one(doc! { "_id": id })
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find performance", e)
            })?;
        document.map(into_performance).transpose()
    }

    /// Insert a new performance and return it with the store-assigned id.
    pub async fn create(&self, request: CreatePerformanceRequest) -> AppResult<Performance> {
        let mut document = PerformanceDocument::from_request(request);

        let result = self.collection.insert_one(&document).await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to insert performance", e)
        })?;

        let id = match result.inserted_id {
            Bson::ObjectId(id) => id,
            other => {
                return Err(AppError::internal(format!(
                    "Store returned a non-object-id for the inserted performance: {other}"
                )))
            }
        };

        document.id = Some(id);
        into_performance(document)
    }

    /// Apply a partial update and return the full updated performance.
    pub async fn update(
        &self,
        id: ObjectId,
        request: &UpdatePerformanceRequest,
    ) -> AppResult<Performance> {
        let fields = update_fields(request);
        if fields.is_empty() {
            warn!(id = %id, "Performance update request carried no applicable fields");
            return self.require(id).await;
        }

        let result = self
            .collection
            .update_one(doc! { "_id": id }, doc! { "$set": fields })
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to update performance", e)
            })?;

        if result.matched_count == 0 {
            return Err(AppError::not_found("Performance not found"));
        }

        self.require(id).await
    }

    /// Delete a performance by id. Zero deleted documents is a typed
    /// not-found.
    pub async fn delete(&self, id: ObjectId) -> AppResult<()> {
        let result = self
            .collection
            .delete_one(doc! { "_id": id })
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete performance", e)
            })?;

        if result.deleted_count == 0 {
            return Err(AppError::not_found("Performance not found"));
        }
        Ok(())
    }

    async fn find_page(
        &self,
        filter: Document,
        page: PageRequest,
    ) -> AppResult<(Vec<Performance>, u64)> {
        let total = self
            .collection
            .count_documents(filter.clone())
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to count performances", e)
            })?;

        let documents: Vec<PerformanceDocument> = self
            .collection
            .find(filter)
            .skip(page.offset())
            .limit(page.limit() as i64)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to list performances", e)
            })?
            .try_collect()
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to decode performance", e)
            })?;

        let performances = documents
            .into_iter()
            .map(into_performance)
            .collect::<AppResult<Vec<_>>>()?;
        Ok((performances, total))
    }

    async fn require(&self, id: ObjectId) -> AppResult<Performance> {
        self.find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Performance not found"))
    }
}

/// Map a stored document to its response shape. A document with no
/// identifier never came out of the store intact, so it surfaces as an
/// internal error rather than an empty `_id`.
fn into_performance(document: PerformanceDocument) -> AppResult<Performance> {
    document
        .into_response()
        .ok_or_else(|| AppError::internal("Performance document missing an identifier"))
}

/// Build the `$set` document from the non-empty fields of a request.
fn update_fields(request: &UpdatePerformanceRequest) -> Document {
    let mut fields = Document::new();
    set_nonempty_str(&mut fields, "cover", &request.cover);
    set_nonempty_str(&mut fields, "name", &request.name);
    set_nonempty_str(&mut fields, "description", &request.description);
    set_nonempty_str(&mut fields, "duration", &request.duration);
    set_nonempty_str(&mut fields, "age", &request.age);
    set_nonempty_list(&mut fields, "categories", &request.categories);
    set_nonempty_list(&mut fields, "tags", &request.tags);
    set_nonempty_list(&mut fields, "media", &request.media);
    fields
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_fields_applies_only_present_nonempty_fields() {
        let request = UpdatePerformanceRequest {
            name: Some("The Cherry Orchard".into()),
            cover: Some(String::new()),
            media: Some(vec![]),
            ..Default::default()
        };
        assert_eq!(
            update_fields(&request),
            doc! { "name": "The Cherry Orchard" }
        );
    }

    #[test]
    fn update_fields_empty_request_builds_empty_set() {
        assert!(update_fields(&UpdatePerformanceRequest::default()).is_empty());
    }

    #[test]
    fn document_missing_an_id_is_an_internal_error() {
        let document = PerformanceDocument::from_request(CreatePerformanceRequest::default());
        let err = into_performance(document).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Internal);

        let mut document = PerformanceDocument::from_request(CreatePerformanceRequest::default());
        document.id = Some(ObjectId::new());
        assert!(into_performance(document).is_ok());
    }
}
