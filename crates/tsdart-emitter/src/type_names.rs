//! TypeScript to Dart names for well-known built-in types.

use once_cell::sync::Lazy;
use rustc_hash::FxHashMap;

static TS_TO_DART_TYPENAMES: Lazy<FxHashMap<&'static str, &'static str>> = Lazy::new(|| {
    let mut map = FxHashMap::default();
    map.insert("Promise", "Future");
    map.insert("Observable", "Stream");
    map.insert("ObservableController", "StreamController");
    map.insert("Date", "DateTime");
    map.insert("StringMap", "Map");
    map.insert("Array", "List");
    map
});

/// Dart name for a TypeScript type name; names not in the table pass
/// through unchanged.
pub fn remap_type_name(name: &str) -> &str {
    TS_TO_DART_TYPENAMES.get(name).copied().unwrap_or(name)
}

/// Whether `name` has a Dart replacement.
pub fn is_remapped(name: &str) -> bool {
    TS_TO_DART_TYPENAMES.contains_key(name)
}
