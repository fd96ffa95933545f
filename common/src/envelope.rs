//! Response gateway: turns the backend's assorted envelope shapes into one
//! canonical form before anything else touches the data.
//!
//! List responses arrive as a bare array, as `{items: [...], total, page,
//! limit}`, or with either of those nested under `data`. Entity responses
//! may or may not be wrapped in `data`, and identifiers show up as `id` or
//! `_id` (plain string or Mongo's `{"$oid": "..."}`). Everything is
//! resolved here, once, by matching against a closed set of envelope
//! variants; call sites only ever see `Page<T>` and entities with a
//! guaranteed `id`.

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use thiserror::Error;

use crate::model::page::Page;

#[derive(Debug, Error)]
pub enum ShapeError {
    /// A list-shaped response matched none of the known envelope patterns.
    #[error("unexpected response shape: {0}")]
    UnexpectedShape(String),
    #[error("failed to decode entity: {0}")]
    Decode(#[from] serde_json::Error),
}

/// The closed set of list envelope shapes the backend is known to emit.
#[derive(Debug)]
enum ListEnvelope {
    /// A bare JSON array.
    Array(Vec<Value>),
    /// An object carrying an `items` array plus optional paging fields.
    Items(Map<String, Value>),
    /// Either of the above nested one level under `data`.
    NestedData(Box<ListEnvelope>),
}

impl ListEnvelope {
    fn classify(value: Value) -> Result<ListEnvelope, ShapeError> {
        match value {
            Value::Array(items) => Ok(ListEnvelope::Array(items)),
            Value::Object(mut map) => {
                if map.contains_key("items") && map["items"].is_array() {
                    Ok(ListEnvelope::Items(map))
                } else if let Some(inner) = map.remove("data") {
                    Ok(ListEnvelope::NestedData(Box::new(Self::classify(inner)?)))
                } else {
                    Err(ShapeError::UnexpectedShape(format!(
                        "object with keys [{}] is not a list envelope",
                        map.keys().cloned().collect::<Vec<_>>().join(", ")
                    )))
                }
            }
            other => Err(ShapeError::UnexpectedShape(format!(
                "expected array or object, got {other}"
            ))),
        }
    }

    fn into_page(self) -> Page<Value> {
        match self {
            ListEnvelope::Array(items) => {
                let len = items.len() as u64;
                Page {
                    items,
                    total: len,
                    page: 1,
                    limit: len,
                }
            }
            ListEnvelope::Items(mut map) => {
                let items = match map.remove("items") {
                    Some(Value::Array(items)) => items,
                    _ => Vec::new(),
                };
                let len = items.len() as u64;
                Page {
                    total: read_u64(&map, "total").unwrap_or(len),
                    page: read_u64(&map, "page").unwrap_or(1),
                    limit: read_u64(&map, "limit").unwrap_or(len),
                    items,
                }
            }
            ListEnvelope::NestedData(inner) => inner.into_page(),
        }
    }
}

fn read_u64(map: &Map<String, Value>, key: &str) -> Option<u64> {
    map.get(key).and_then(Value::as_u64)
}

/// Normalizes a raw list response into the canonical `Page` shape with ids
/// guaranteed on every item. The only failure mode is a body that matches
/// no known envelope pattern.
pub fn normalize_list(value: Value) -> Result<Page<Value>, ShapeError> {
    let mut page = ListEnvelope::classify(value)?.into_page();
    for item in &mut page.items {
        ensure_ids(item);
    }
    Ok(page)
}

/// Normalizes a raw entity response: unwraps an optional `data` envelope
/// and guarantees `id` keys. Never fails on missing optional fields.
pub fn normalize_entity(value: Value) -> Value {
    let mut value = match value {
        Value::Object(mut map) => match map.remove("data") {
            Some(inner @ Value::Object(_)) => inner,
            Some(inner) => {
                // data was present but not an object: keep the outer map
                // untouched so nothing is silently lost.
                map.insert("data".into(), inner);
                Value::Object(map)
            }
            None => Value::Object(map),
        },
        other => other,
    };
    ensure_ids(&mut value);
    value
}

pub fn decode_list<T: DeserializeOwned>(value: Value) -> Result<Page<T>, ShapeError> {
    let page = normalize_list(value)?;
    let mut items = Vec::with_capacity(page.items.len());
    for item in page.items {
        items.push(serde_json::from_value(item)?);
    }
    Ok(Page {
        items,
        total: page.total,
        page: page.page,
        limit: page.limit,
    })
}

pub fn decode_entity<T: DeserializeOwned>(value: Value) -> Result<T, ShapeError> {
    Ok(serde_json::from_value(normalize_entity(value))?)
}

/// Recursively guarantees an `id` key on every object that carries `_id`,
/// accepting both plain strings and Mongo's `{"$oid": "..."}` wrapper.
fn ensure_ids(value: &mut Value) {
    match value {
        Value::Object(map) => {
            if !map.contains_key("id") {
                if let Some(raw) = map.get("_id") {
                    let id = match raw {
                        Value::Object(oid) => oid.get("$oid").cloned().unwrap_or_else(|| raw.clone()),
                        other => other.clone(),
                    };
                    map.insert("id".into(), id);
                }
            }
            for nested in map.values_mut() {
                ensure_ids(nested);
            }
        }
        Value::Array(items) => {
            for item in items {
                ensure_ids(item);
            }
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn bare_array_and_nested_items_normalize_to_the_same_shape() {
        let bare = normalize_list(json!([{"id": "a"}, {"id": "b"}])).unwrap();
        let nested = normalize_list(json!({
            "data": {"items": [{"id": "a"}, {"id": "b"}], "total": 5}
        }))
        .unwrap();
        assert_eq!(bare.items, nested.items);
        assert_eq!(bare.total, 2);
        assert_eq!(nested.total, 5);
        assert_eq!(nested.page, 1);
    }

    #[test]
    fn items_envelope_reads_paging_fields() {
        let page = normalize_list(json!({
            "items": [{"id": "a"}],
            "total": 40,
            "page": 3,
            "limit": 10
        }))
        .unwrap();
        assert_eq!(page.total, 40);
        assert_eq!(page.page, 3);
        assert_eq!(page.limit, 10);
    }

    #[test]
    fn missing_paging_fields_default_from_the_item_count() {
        let page = normalize_list(json!({"items": [{}, {}, {}]})).unwrap();
        assert_eq!(page.total, 3);
        assert_eq!(page.limit, 3);
    }

    #[test]
    fn unknown_list_shape_is_rejected() {
        let err = normalize_list(json!({"count": 3, "rows": []})).unwrap_err();
        assert!(matches!(err, ShapeError::UnexpectedShape(_)));
        let err = normalize_list(json!("nope")).unwrap_err();
        assert!(matches!(err, ShapeError::UnexpectedShape(_)));
    }

    #[test]
    fn underscore_ids_are_lifted_recursively() {
        let page = normalize_list(json!({
            "data": [{"_id": "s1", "lessons": [{"_id": {"$oid": "l1"}}]}]
        }))
        .unwrap();
        assert_eq!(page.items[0]["id"], "s1");
        assert_eq!(page.items[0]["lessons"][0]["id"], "l1");
    }

    #[test]
    fn entity_unwraps_data_and_keeps_existing_id() {
        let entity = normalize_entity(json!({"data": {"id": "c1", "_id": "other"}}));
        assert_eq!(entity["id"], "c1");
        let entity = normalize_entity(json!({"_id": "c2", "title": "T"}));
        assert_eq!(entity["id"], "c2");
        assert_eq!(entity["title"], "T");
    }

    #[test]
    fn decode_list_produces_typed_items() {
        use crate::model::course::Course;
        let page: Page<Course> = decode_list(json!({
            "data": {"items": [{"_id": "c1", "title": "Rust"}], "total": 1}
        }))
        .unwrap();
        assert_eq!(page.items[0].id, "c1");
        assert_eq!(page.items[0].title, "Rust");
    }
}
