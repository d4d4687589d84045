//! Response envelope unwrapping.

use salonledger_core::report::FetchError;
use salonledger_shared::types::PageMeta;
use serde_json::{Map, Value};

/// Keys that may hold the record array, before the resource name.
const LIST_KEYS: [&str; 2] = ["data", "items"];

/// Records of one page plus pagination metadata when the upstream sent any.
#[derive(Debug, Clone, PartialEq)]
pub struct ListPage {
    /// Raw records, not yet decoded.
    pub records: Vec<Value>,
    /// Pagination metadata.
    pub meta: Option<PageMeta>,
}

/// Extracts the record array from a listing response.
///
/// Accepts a bare array, `{data: [...]}`, `{items: [...]}`,
/// `{<resource>: [...]}`, and one level of nesting such as
/// `{data: {data: [...], meta: {...}}}`. A key holding an array is preferred
/// over one holding an object. Metadata is read from a `meta`
/// object or from top-level `page`/`limit`/`total`/`totalPages` fields; the
/// innermost metadata wins.
pub fn unwrap_list(body: Value, resource: &str) -> Result<ListPage, FetchError> {
    match body {
        Value::Array(records) => Ok(ListPage {
            records,
            meta: None,
        }),
        Value::Object(map) => unwrap_object(map, resource, true),
        other => Err(FetchError::Decode(format!(
            "expected a {resource} list, got {}",
            kind(&other)
        ))),
    }
}

fn unwrap_object(
    mut map: Map<String, Value>,
    resource: &str,
    allow_nested: bool,
) -> Result<ListPage, FetchError> {
    let meta = read_meta(&map);

    let keys = || LIST_KEYS.into_iter().chain(std::iter::once(resource));

    if let Some(key) = keys().find(|key| map.get(*key).is_some_and(Value::is_array))
        && let Some(Value::Array(records)) = map.remove(key)
    {
        return Ok(ListPage { records, meta });
    }

    if allow_nested {
        for key in keys() {
            if let Some(Value::Object(inner)) = map.remove(key)
                && let Ok(mut page) = unwrap_object(inner, resource, false)
            {
                page.meta = page.meta.or(meta);
                return Ok(page);
            }
        }
    }

    Err(FetchError::Decode(format!(
        "no {resource} list in response object"
    )))
}

fn read_meta(map: &Map<String, Value>) -> Option<PageMeta> {
    if let Some(meta) = map.get("meta").or_else(|| map.get("pagination")) {
        return serde_json::from_value(meta.clone()).ok();
    }

    let has_counts = ["total", "totalPages", "total_pages"]
        .iter()
        .any(|key| map.get(*key).is_some_and(Value::is_number));
    if !has_counts {
        return None;
    }

    let mut fields = Map::new();
    for key in ["page", "limit", "perPage", "total", "totalPages", "total_pages"] {
        if let Some(value) = map.get(key).filter(|v| v.is_number()) {
            fields.insert(key.to_string(), value.clone());
        }
    }
    serde_json::from_value(Value::Object(fields)).ok()
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case::bare_array(json!([{"id": 1}, {"id": 2}]))]
    #[case::data(json!({"data": [{"id": 1}, {"id": 2}]}))]
    #[case::items(json!({"items": [{"id": 1}, {"id": 2}]}))]
    #[case::resource_key(json!({"sales": [{"id": 1}, {"id": 2}]}))]
    #[case::nested(json!({"success": true, "data": {"data": [{"id": 1}, {"id": 2}]}}))]
    #[case::nested_resource(json!({"data": {"sales": [{"id": 1}, {"id": 2}]}}))]
    #[case::array_beside_object(json!({"data": {"total": 2}, "items": [{"id": 1}, {"id": 2}]}))]
    #[case::second_object_holds_list(json!({"data": {"total": 2}, "items": {"items": [{"id": 1}, {"id": 2}]}}))]
    fn test_accepted_shapes(#[case] body: Value) {
        let page = unwrap_list(body, "sales").unwrap();
        assert_eq!(page.records.len(), 2);
    }

    #[test]
    fn test_meta_object() {
        let body = json!({
            "data": [],
            "meta": {"page": 2, "limit": 50, "total": 120, "totalPages": 3}
        });

        let meta = unwrap_list(body, "sales").unwrap().meta.unwrap();

        assert_eq!(meta.page, 2);
        assert_eq!(meta.total_pages, 3);
        assert!(meta.has_next());
    }

    #[test]
    fn test_top_level_counts() {
        let body = json!({"data": [], "page": 1, "limit": 100, "total": 250});

        let meta = unwrap_list(body, "sales").unwrap().meta.unwrap();

        assert_eq!(meta.total, 250);
        assert!(meta.has_next());
    }

    #[test]
    fn test_inner_meta_wins() {
        let body = json!({
            "meta": {"page": 1, "totalPages": 1},
            "data": {"data": [], "meta": {"page": 1, "totalPages": 4}}
        });

        let meta = unwrap_list(body, "sales").unwrap().meta.unwrap();

        assert_eq!(meta.total_pages, 4);
    }

    #[test]
    fn test_no_meta_for_bare_list() {
        let page = unwrap_list(json!({"data": [{"id": 1}]}), "sales").unwrap();
        assert!(page.meta.is_none());
    }

    #[rstest]
    #[case(json!("nope"))]
    #[case(json!(null))]
    #[case(json!({"message": "ok"}))]
    #[case(json!({"data": {"data": {"data": []}}}))]
    fn test_rejected_shapes(#[case] body: Value) {
        assert!(matches!(unwrap_list(body, "sales"), Err(FetchError::Decode(_))));
    }
}
