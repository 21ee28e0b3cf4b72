//! List-query parameter parsing.
//!
//! Parsed from raw key/value pairs rather than a typed `Query<T>`
//! extractor so that repeated `tags=` keys survive and malformed values
//! produce the service's own error body with a specific message.

use bson::oid::ObjectId;

use playbill_core::error::AppError;
use playbill_core::types::pagination::{PageRequest, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};

/// Parsed query parameters for list endpoints.
#[derive(Debug, Clone, PartialEq)]
pub struct ListParams {
    /// Validated pagination request.
    pub page: PageRequest,
    /// Free-text search query, when supplied.
    pub query: Option<String>,
    /// Repeated `tags` values, in request order.
    pub tags: Vec<String>,
}

/// Parse `page`, `pageSize`, `query`, and repeated `tags` parameters.
///
/// A non-integer or sub-1 `page` is a validation error ("Invalid
/// page"), likewise `pageSize` ("Invalid page size"); `pageSize` is
/// capped at [`MAX_PAGE_SIZE`]. Unknown keys are ignored.
pub fn parse_list_params(pairs: &[(String, String)]) -> Result<ListParams, AppError> {
    let mut page: u64 = 1;
    let mut page_size: u64 = DEFAULT_PAGE_SIZE;
    let mut query = None;
    let mut tags = Vec::new();

    for (key, value) in pairs {
        match key.as_str() {
            "page" => {
                page = value
                    .parse()
                    .ok()
                    .filter(|p| *p >= 1)
                    .ok_or_else(|| AppError::validation("Invalid page"))?;
            }
            "pageSize" => {
                page_size = value
                    .parse()
                    .ok()
                    .filter(|s| *s >= 1)
                    .ok_or_else(|| AppError::validation("Invalid page size"))?;
            }
            "query" => query = Some(value.clone()),
            "tags" => tags.push(value.clone()),
            _ => {}
        }
    }

    Ok(ListParams {
        page: PageRequest::new(page, page_size),
        query,
        tags,
    })
}

/// Parse a 24-character hex object id from a path segment, yielding a
/// validation error with the entity-specific message on failure.
pub fn parse_object_id(raw: &str, invalid_message: &str) -> Result<ObjectId, AppError> {
    ObjectId::parse_str(raw).map_err(|_| AppError::validation(invalid_message))
}

#[cfg(test)]
mod tests {
    use super::*;
    use playbill_core::error::ErrorKind;

    fn pairs(input: &[(&str, &str)]) -> Vec<(String, String)> {
        input
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn defaults_when_no_parameters() {
        let params = parse_list_params(&[]).unwrap();
        assert_eq!(params.page.page, 1);
        assert_eq!(params.page.page_size, DEFAULT_PAGE_SIZE);
        assert!(params.query.is_none());
        assert!(params.tags.is_empty());
    }

    #[test]
    fn repeated_tags_are_all_kept() {
        let params = parse_list_params(&pairs(&[("tags", "a"), ("tags", "b"), ("page", "2")]))
            .unwrap();
        assert_eq!(params.tags, vec!["a", "b"]);
        assert_eq!(params.page.page, 2);
    }

    #[test]
    fn malformed_page_is_a_validation_error() {
        for bad in ["abc", "0", "-1", "1.5"] {
            let err = parse_list_params(&pairs(&[("page", bad)])).unwrap_err();
            assert_eq!(err.kind, ErrorKind::Validation);
            assert_eq!(err.message, "Invalid page");
        }
    }

    #[test]
    fn extreme_page_and_page_size_values_stay_in_range() {
        let max = u64::MAX.to_string();
        let params =
            parse_list_params(&pairs(&[("page", max.as_str()), ("pageSize", max.as_str())]))
                .unwrap();
        assert_eq!(params.page.page_size, MAX_PAGE_SIZE);
        assert_eq!(params.page.offset(), u64::MAX);
        assert!(i64::try_from(params.page.limit()).is_ok());
    }

    #[test]
    fn malformed_page_size_is_a_validation_error() {
        let err = parse_list_params(&pairs(&[("pageSize", "0")])).unwrap_err();
        assert_eq!(err.message, "Invalid page size");
    }

    #[test]
    fn object_id_round_trips_and_rejects_bad_hex() {
        let id = parse_object_id("507f1f77bcf86cd799439011", "Invalid movie id").unwrap();
        assert_eq!(id.to_hex(), "507f1f77bcf86cd799439011");

        let err = parse_object_id("badhex", "Invalid movie id").unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
        assert_eq!(err.message, "Invalid movie id");
    }
}
