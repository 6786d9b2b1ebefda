pub fn combine_paths(prefix: &str, nested: &str) -> String {
    let prefix = prefix.trim_end_matches('/');
    let nested = nested.trim_start_matches('/');

    let prefix_is_root = prefix.is_empty() || prefix == "/";
    let nested_is_root = nested.is_empty() || nested == "/";

    match (prefix_is_root, nested_is_root) {
        (true, true) => "/".to_string(),
        (true, false) => format!("/{}", nested),
        (false, true) => prefix.to_string(),
        (false, false) => format!("{}/{}", prefix, nested),
    }
}

/// Brings a base URL into the form `leptos_router` expects: `""` for the root,
/// otherwise a leading `/` and no trailing `/`.
pub fn normalize_base(base: &str) -> String {
    let trimmed = base.trim().trim_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("/{}", trimmed)
    }
}

/// Drops the query, the fragment and one trailing `/` (except for the root).
pub fn normalize_path(path: &str) -> &str {
    let end = path.find(|c: char| c == '?' || c == '#').unwrap_or(path.len());
    let path = &path[..end];
    match path.strip_suffix('/') {
        Some(stripped) if !stripped.is_empty() => stripped,
        _ => path,
    }
}
