//! Response envelope normalization.
//!
//! The API wraps every result in GraphQL ceremony: a `data` envelope, a
//! `user` root field, Relay `edges`/`node` connection wrappers and
//! single-field objects that carry only an `id` next to the payload.
//! [`normalize`] collapses all of it into plain nested maps and arrays that
//! mirror the requested fields, so callers never see the wire shape.

use serde_json::{Map, Value};

/// The wrapper shapes a mapping node can take, in collapse priority order.
///
/// A node is classified once per visit instead of re-probing the map at
/// every branch. `SingleField` wins over the keyed envelopes so that
/// `{id, <field>}` wrapper objects collapse fully before structural
/// unwrapping proceeds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Wrapper {
    /// Exactly two keys, one of them `id`: replace with the other value.
    SingleField,
    /// A keyed envelope (`data`, `user`, `node` or `edges`): replace with
    /// the value under that key.
    Keyed(&'static str),
}

/// Envelope keys checked at each mapping node, in tie-break order.
const ENVELOPE_KEYS: [&str; 4] = ["data", "user", "node", "edges"];

fn classify(map: &Map<String, Value>) -> Option<Wrapper> {
    if map.len() == 2 && map.contains_key("id") {
        return Some(Wrapper::SingleField);
    }
    ENVELOPE_KEYS
        .into_iter()
        .find(|key| map.contains_key(*key))
        .map(Wrapper::Keyed)
}

/// Recursively strips the GraphQL response envelope from a value.
///
/// Pure and side-effect free. Arbitrarily deep stacks of wrapper layers
/// collapse to the innermost payload, and the function is idempotent:
/// `normalize(normalize(x)) == normalize(x)`.
#[must_use]
pub fn normalize(value: Value) -> Value {
    match value {
        Value::Object(map) => match classify(&map) {
            Some(Wrapper::SingleField) => {
                let inner = map
                    .into_iter()
                    .find(|(key, _)| key != "id")
                    .map_or(Value::Null, |(_, value)| value);
                normalize(inner)
            }
            Some(Wrapper::Keyed(key)) => {
                let inner = map
                    .into_iter()
                    .find(|(candidate, _)| candidate == key)
                    .map_or(Value::Null, |(_, value)| value);
                normalize(inner)
            }
            None => Value::Object(
                map.into_iter()
                    .map(|(key, value)| (key, normalize(value)))
                    .collect(),
            ),
        },
        Value::Array(items) => Value::Array(items.into_iter().map(normalize).collect()),
        scalar => scalar,
    }
}
