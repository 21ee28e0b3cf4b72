//! Concrete repository implementations.

pub mod movie;
pub mod performance;

pub use movie::MovieRepository;
pub use performance::PerformanceRepository;

use mongodb::bson::Document;

/// Insert `key` into a `$set` document when the request carries a
/// non-empty string for it. Absent or empty values leave the stored
/// field unchanged (partial-update semantics).
pub(crate) fn set_nonempty_str(fields: &mut Document, key: &str, value: &Option<String>) {
    if let Some(v) = value {
        if !v.is_empty() {
            fields.insert(key, v.clone());
        }
    }
}

/// Insert `key` into a `$set` document when the request carries a
/// non-empty list for it.
pub(crate) fn set_nonempty_list(fields: &mut Document, key: &str, value: &Option<Vec<String>>) {
    if let Some(v) = value {
        if !v.is_empty() {
            fields.insert(key, v.clone());
        }
    }
}

/// Case-insensitive substring predicate for a single field. The query
/// text is escaped so regex metacharacters match literally.
pub(crate) fn substring_match(field: &str, query: &str) -> Document {
    let mut predicate = Document::new();
    predicate.insert(
        field,
        mongodb::bson::doc! { "$regex": regex::escape(query), "$options": "i" },
    );
    predicate
}

/// Tag filter with AND semantics: a document matches only when its
/// `tags` array contains every requested tag.
pub(crate) fn tags_filter(tags: &[String]) -> Document {
    mongodb::bson::doc! { "tags": { "$all": tags.to_vec() } }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::doc;

    #[test]
    fn set_nonempty_str_skips_absent_and_empty() {
        let mut fields = Document::new();
        set_nonempty_str(&mut fields, "name", &Some("B".into()));
        set_nonempty_str(&mut fields, "cover", &Some(String::new()));
        set_nonempty_str(&mut fields, "description", &None);
        assert_eq!(fields, doc! { "name": "B" });
    }

    #[test]
    fn set_nonempty_list_skips_absent_and_empty() {
        let mut fields = Document::new();
        set_nonempty_list(&mut fields, "tags", &Some(vec!["a".into()]));
        set_nonempty_list(&mut fields, "media", &Some(vec![]));
        set_nonempty_list(&mut fields, "categories", &None);
        assert_eq!(fields, doc! { "tags": ["a"] });
    }

    #[test]
    fn substring_match_escapes_regex_metacharacters() {
        let predicate = substring_match("name", "Mission: Impossible (1996)");
        let inner = predicate.get_document("name").unwrap();
        assert_eq!(
            inner.get_str("$regex").unwrap(),
            r"Mission: Impossible \(1996\)"
        );
        assert_eq!(inner.get_str("$options").unwrap(), "i");
    }

    #[test]
    fn tags_filter_uses_all_semantics() {
        let tags = vec!["a".to_string(), "b".to_string()];
        assert_eq!(tags_filter(&tags), doc! { "tags": { "$all": ["a", "b"] } });
    }
}
