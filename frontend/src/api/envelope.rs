//! Normalization of the API response envelope.
//!
//! Every endpoint answers `{ success, message, data }`, but listings have
//! been seen nesting the payload up to three levels deep
//! (`{ data: { data: { data: [...], pagination } } }`). All unwrapping
//! happens here, in this order:
//!
//! 1. `success: false` at the root is a business failure carrying `message`
//!    (`error` and `msg` are accepted as fallbacks).
//! 2. Entities: descend through `data` while the current value is an object
//!    holding a non-null `data`, at most [`MAX_DEPTH`] times.
//! 3. Lists: starting at the root and visiting at most [`MAX_DEPTH`]
//!    levels, take the value itself when it is an array, else the first
//!    array found under `data`, `items`, `results`, `rows`; otherwise
//!    descend into an object `data`. Pagination is taken from a
//!    `pagination`/`meta` object next to the array, or from flat
//!    `total`/`page` fields on the same object.
//! 4. No array located means an empty page, never an error.
//! 5. List items that do not match the expected schema are dropped with a
//!    warning.

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use super::types::{ApiError, Page, Pagination, GENERIC_ERROR_MESSAGE};

pub const MAX_DEPTH: usize = 3;

const LIST_KEYS: [&str; 4] = ["data", "items", "results", "rows"];
const MESSAGE_KEYS: [&str; 3] = ["message", "error", "msg"];

/// Human readable message carried by an error or business-failure body.
pub fn message_from_body(body: &Value) -> Option<String> {
    let object = body.as_object()?;
    MESSAGE_KEYS.iter().find_map(|key| match object.get(*key) {
        Some(Value::String(text)) if !text.trim().is_empty() => Some(text.clone()),
        Some(Value::Object(inner)) => inner
            .get("message")
            .and_then(Value::as_str)
            .map(str::to_string),
        _ => None,
    })
}

fn reject_business_failure(body: &Value) -> Result<(), ApiError> {
    if body.get("success").and_then(Value::as_bool) == Some(false) {
        let message = message_from_body(body).unwrap_or_else(|| GENERIC_ERROR_MESSAGE.into());
        let mut error = ApiError::request_failed(message);
        error.details = body.get("errors").cloned();
        return Err(error);
    }
    Ok(())
}

/// Payload of a single-entity response.
pub fn unwrap_data(body: Value) -> Result<Value, ApiError> {
    reject_business_failure(&body)?;
    let mut current = body;
    for _ in 0..MAX_DEPTH {
        match current {
            Value::Object(mut object)
                if object.get("data").map(|data| !data.is_null()).unwrap_or(false) =>
            {
                current = object.remove("data").unwrap_or(Value::Null);
            }
            other => return Ok(other),
        }
    }
    Ok(current)
}

/// Locates the list inside `body` and the pagination that travels with it.
pub fn locate_list(body: &Value) -> Option<(&Vec<Value>, Option<Pagination>)> {
    let mut current = body;
    for _ in 0..MAX_DEPTH {
        match current {
            Value::Array(items) => return Some((items, None)),
            Value::Object(object) => {
                if let Some(items) = LIST_KEYS
                    .iter()
                    .find_map(|key| object.get(*key).and_then(Value::as_array))
                {
                    return Some((items, pagination_beside(object)));
                }
                match object.get("data") {
                    Some(next @ Value::Object(_)) => current = next,
                    _ => return None,
                }
            }
            _ => return None,
        }
    }
    None
}

fn pagination_beside(object: &Map<String, Value>) -> Option<Pagination> {
    let explicit = ["pagination", "meta"]
        .iter()
        .find_map(|key| object.get(*key).filter(|value| value.is_object()));
    if let Some(value) = explicit {
        return serde_json::from_value(value.clone()).ok();
    }
    let flat = ["total", "page", "current_page", "last_page"]
        .iter()
        .any(|key| object.contains_key(*key));
    if flat {
        let mut fields = object.clone();
        for key in LIST_KEYS {
            fields.remove(key);
        }
        return serde_json::from_value(Value::Object(fields)).ok();
    }
    None
}

/// Paginated listing, tolerant to nesting depth and bad items.
pub fn normalize_page<T: DeserializeOwned>(body: Value) -> Result<Page<T>, ApiError> {
    reject_business_failure(&body)?;
    let Some((raw_items, pagination)) = locate_list(&body) else {
        log::warn!("no list found in response envelope, treating as empty");
        return Ok(Page::empty());
    };
    let items: Vec<T> = raw_items
        .iter()
        .filter_map(|item| match serde_json::from_value::<T>(item.clone()) {
            Ok(parsed) => Some(parsed),
            Err(err) => {
                log::warn!("dropping list item that does not match schema: {}", err);
                None
            }
        })
        .collect();
    let pagination = pagination.unwrap_or_else(|| Pagination::single(items.len()));
    Ok(Page { items, pagination })
}

/// Non-paginated listing (catalogues, availability).
pub fn normalize_list<T: DeserializeOwned>(body: Value) -> Result<Vec<T>, ApiError> {
    normalize_page(body).map(|page| page.items)
}

/// Entity payload decoded into `T`.
pub fn decode_entity<T: DeserializeOwned>(body: Value) -> Result<T, ApiError> {
    let data = unwrap_data(body)?;
    serde_json::from_value(data).map_err(|err| {
        log::warn!("unexpected response shape: {}", err);
        ApiError::unknown(GENERIC_ERROR_MESSAGE)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Item {
        id: i64,
    }

    fn ids(page: &Page<Item>) -> Vec<i64> {
        page.items.iter().map(|item| item.id).collect()
    }

    #[test]
    fn lists_are_found_at_every_nesting_depth() {
        let shapes = [
            json!([{ "id": 1 }, { "id": 2 }]),
            json!({ "success": true, "data": [{ "id": 1 }, { "id": 2 }] }),
            json!({ "success": true, "data": { "data": [{ "id": 1 }, { "id": 2 }] } }),
            json!({ "data": { "data": { "data": [{ "id": 1 }, { "id": 2 }] } } }),
            json!({ "data": { "items": [{ "id": 1 }, { "id": 2 }] } }),
        ];
        for shape in shapes {
            let page: Page<Item> = normalize_page(shape.clone()).unwrap();
            assert_eq!(ids(&page), vec![1, 2], "{}", shape);
        }
    }

    #[test]
    fn nesting_beyond_three_levels_is_empty() {
        let deep = json!({ "data": { "data": { "data": { "data": [{ "id": 1 }] } } } });
        assert!(normalize_page::<Item>(deep).unwrap().is_empty());
    }

    #[test]
    fn pagination_is_read_next_to_the_list() {
        let body = json!({
            "success": true,
            "data": {
                "data": [{ "id": 3 }],
                "pagination": { "current_page": 2, "per_page": 10, "total": 11, "last_page": 2 }
            }
        });
        let page: Page<Item> = normalize_page(body).unwrap();
        assert_eq!(page.pagination.page, 2);
        assert_eq!(page.pagination.total_pages, 2);
        assert!(page.pagination.has_previous());
        assert!(!page.pagination.has_next());
    }

    #[test]
    fn flat_pagination_fields_are_accepted() {
        let body = json!({ "data": { "data": [{ "id": 1 }], "current_page": 1, "last_page": 4, "total": 40 } });
        let page: Page<Item> = normalize_page(body).unwrap();
        assert_eq!(page.pagination.total, 40);
        assert!(page.pagination.has_next());
    }

    #[test]
    fn missing_pagination_describes_a_single_page() {
        let page: Page<Item> = normalize_page(json!({ "data": [{ "id": 1 }] })).unwrap();
        assert_eq!(page.pagination, Pagination::single(1));
    }

    #[test]
    fn unlocatable_list_is_an_empty_page() {
        for shape in [json!({ "success": true, "data": null }), json!("ok"), json!({ "data": 5 })] {
            assert!(normalize_page::<Item>(shape).unwrap().is_empty());
        }
    }

    #[test]
    fn malformed_items_are_dropped() {
        let body = json!({ "data": [{ "id": 1 }, { "id": "x" }, { "nombre": "sin id" }, { "id": 4 }] });
        let page: Page<Item> = normalize_page(body).unwrap();
        assert_eq!(ids(&page), vec![1, 4]);
    }

    #[test]
    fn business_failure_surfaces_message() {
        let body = json!({ "success": false, "message": "El correo ya está registrado", "errors": { "email": ["duplicado"] } });
        let error = normalize_page::<Item>(body.clone()).unwrap_err();
        assert_eq!(error.error, "El correo ya está registrado");
        assert!(error.details.is_some());
        assert_eq!(unwrap_data(body).unwrap_err().code, "REQUEST_FAILED");
        let silent = unwrap_data(json!({ "success": false })).unwrap_err();
        assert_eq!(silent.error, GENERIC_ERROR_MESSAGE);
    }

    #[test]
    fn entities_unwrap_nested_data() {
        let item: Item = decode_entity(json!({ "success": true, "data": { "data": { "id": 9 } } })).unwrap();
        assert_eq!(item, Item { id: 9 });
        let bare: Item = decode_entity(json!({ "id": 2 })).unwrap();
        assert_eq!(bare.id, 2);
        assert!(decode_entity::<Item>(json!({ "data": { "nombre": "x" } })).is_err());
    }

    #[test]
    fn message_keys_are_checked_in_order() {
        assert_eq!(message_from_body(&json!({ "msg": "c", "error": "b" })).as_deref(), Some("b"));
        assert_eq!(
            message_from_body(&json!({ "error": { "message": "anidado" } })).as_deref(),
            Some("anidado")
        );
        assert_eq!(message_from_body(&json!({ "message": "  " })), None);
    }
}
