//! Dotted-path lookup into schema-less JSON documents.

use serde_json::Value;

/// Resolve a dotted `path` (e.g. `invoice.buyer.vatNumber`) against `document`.
///
/// Each segment is looked up as an object key. Resolution stops with `None`
/// as soon as the current value is not an object: scalars, `null` and arrays
/// all end the walk. There is no array-index syntax, so `lines.0` never
/// reaches into an array.
pub fn resolve_path<'a>(document: &'a Value, path: &str) -> Option<&'a Value> {
    path.split('.')
        .try_fold(document, |current, segment| current.as_object()?.get(segment))
}
