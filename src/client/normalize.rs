use serde_json::Value;

use crate::models::is_truthy;

/// Reconcile paginated and bare-array responses into one sequence.
///
/// A truthy `results` field wins over the body itself; whatever is chosen
/// must be an array, otherwise the collection is empty.
pub fn normalize_collection(body: Value) -> Vec<Value> {
    let resolved = match body {
        // An object without usable results is never a sequence itself
        Value::Object(mut map) => map
            .remove("results")
            .filter(|results| is_truthy(results))
            .unwrap_or(Value::Null),
        other => other,
    };

    match resolved {
        Value::Array(items) => items,
        _ => Vec::new(),
    }
}
