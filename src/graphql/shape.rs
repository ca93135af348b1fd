//! Request shaping and mutation-result unwrapping.
//!
//! Every mutation on the API takes a single `*Input` object type, so call
//! arguments are wrapped in an `{"input": {...}}` variables envelope. The
//! one exception is the Relay `node` lookup, whose variables are a bare
//! `{"id": ...}` map. On the way back, all mutations answer with an
//! `{ok, err}` envelope that [`unwrap_payload`] resolves into either the
//! payload or an [`ApiError::Mutation`].

use serde_json::{json, Map, Value};

use crate::clients::ApiError;

/// Builds variables for the single-node lookup call shape.
///
/// The `node` query's input type has no wrapper, so the id is passed
/// directly.
#[must_use]
pub fn node_variables(id: &str) -> Value {
    json!({ "id": id })
}

/// Wraps mutation arguments in the `{"input": {...}}` variables envelope.
///
/// Null members are removed first so server-side defaults apply; typed
/// inputs never produce them (serde skips `None` fields), but raw
/// `serde_json::json!` arguments can.
#[must_use]
pub fn input_variables(arguments: Value) -> Value {
    let arguments = match arguments {
        Value::Object(map) => Value::Object(
            map.into_iter()
                .filter(|(_, value)| !value.is_null())
                .collect(),
        ),
        Value::Null => Value::Object(Map::new()),
        other => other,
    };
    json!({ "input": arguments })
}

/// Resolves a normalized response into the call's payload.
///
/// Three shapes are recognized, in order:
///
/// 1. a mapping with exactly one key whose value is a sequence — the bare
///    list result of queries like `userNames`; the sequence is returned
///    directly;
/// 2. a mapping whose values contain an inner `{ok, err}` mutation
///    envelope — a truthy `err` becomes [`ApiError::Mutation`], otherwise
///    the `ok` value is the payload;
/// 3. anything else — a plain query result, returned unchanged.
///
/// The detection is heuristic: it inspects shape, not a declared result
/// type, so a query result that happens to contain a nested `{ok, err}`
/// mapping would be misread as a mutation envelope. Known ambiguity,
/// kept for compatibility with the platform's result convention.
///
/// # Errors
///
/// Returns [`ApiError::Mutation`] carrying the server's error message when
/// the mutation envelope has a populated `err` field.
pub fn unwrap_payload(normalized: Value) -> Result<Value, ApiError> {
    let Value::Object(map) = normalized else {
        return Ok(normalized);
    };

    let single_list = map.len() == 1 && matches!(map.values().next(), Some(Value::Array(_)));
    if single_list {
        return Ok(map.into_iter().next().map_or(Value::Null, |(_, v)| v));
    }

    for value in map.values() {
        let Value::Object(inner) = value else {
            continue;
        };
        if let Some(err) = inner.get("err") {
            if is_truthy(err) {
                return Err(ApiError::Mutation(error_message(err)));
            }
        }
        if let Some(ok) = inner.get("ok") {
            return Ok(ok.clone());
        }
    }

    Ok(Value::Object(map))
}

/// Truthiness in the Python-client sense: null, `false`, `0`, `""`, `[]`
/// and `{}` are all falsy.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64() != Some(0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}

/// Renders the `err` value as a plain message, without JSON string quotes.
fn error_message(err: &Value) -> String {
    match err {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
