// Cache filename derivation.
// Every logical request maps deterministically to one flat filename, so a
// repeated request always resolves to the same cache entry.

/// Filename for a `list` response: `{database}_{option}_list`.
/// The option token is empty when no option was given.
pub fn list_filename(database: &str, option: Option<&str>) -> String {
    format!(
        "{}_{}_list",
        sanitize_name(database),
        sanitize_name(option.unwrap_or(""))
    )
}

/// Filename for a `find` response: `{database}_{query}_{option}`.
pub fn find_filename(database: &str, query: &str, option: Option<&str>) -> String {
    format!(
        "{}_{}_{}",
        sanitize_name(database),
        sanitize_name(query),
        sanitize_name(option.unwrap_or(""))
    )
}

/// Filename for a `get` response: `{entry}_{option}`.
/// Callers pass `description` as the option token when none was requested.
pub fn get_filename(entry: &str, option: &str) -> String {
    format!("{}_{}", sanitize_name(entry), sanitize_name(option))
}

/// Filename for a `link` response: `{target}_{source}_link`.
pub fn link_filename(target: &str, source: &str) -> String {
    format!(
        "{}_{}_link",
        sanitize_name(target),
        sanitize_name(source)
    )
}

/// Filename for the organism code listing.
pub fn organism_filename() -> String {
    "organism_code_list".to_string()
}

/// Sanitize a token for use in filesystem paths.
/// Replaces problematic characters with underscores.
pub fn sanitize_name(name: &str) -> String {
    name.chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            _ => c,
        })
        .collect()
}
