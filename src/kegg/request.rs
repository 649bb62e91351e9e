// Request validation and URL construction.
// Arguments are checked against the fixed vocabularies before any I/O, then
// joined into the REST path; absent options contribute no path segment.

use crate::cache::paths;
use crate::error::{KeggError, Result};

use super::types::{ContentKind, FindOption, GetOption, ListOption};
use super::vocab::Vocabulary;

/// A validated request: the URL to fetch, the cache filename the response is
/// stored under, and how the body is decoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub url: String,
    pub filename: String,
    pub kind: ContentKind,
}

/// Build a `list` request.
///
/// `database` must be a valid category; [`ListOption::Xl`] is only legal for
/// `brite`, and [`ListOption::Organism`] only for `pathway` and `module`.
pub fn list(
    base_url: &str,
    vocab: &Vocabulary,
    database: &str,
    option: Option<&ListOption>,
) -> Result<Request> {
    if !vocab.contains(database) {
        return Err(KeggError::invalid_key(
            database,
            "not a valid KEGG database",
        ));
    }
    match option {
        Some(ListOption::Xl) if database != "brite" => {
            return Err(KeggError::invalid_key(
                database,
                "option xl can only be used with the brite database",
            ));
        }
        Some(ListOption::Organism(code)) if database != "pathway" && database != "module" => {
            return Err(KeggError::invalid_key(
                database,
                format!("only pathway and module lists are available for organism {code}"),
            ));
        }
        _ => {}
    }

    let option_token = option.map(ListOption::as_str);
    Ok(Request {
        url: join_url(base_url, "list", &[Some(database), option_token]),
        filename: paths::list_filename(database, option_token),
        kind: ContentKind::Text,
    })
}

/// Build a `find` request.
///
/// `database` must be a valid category; an option is only legal when the
/// database is `compound` or `drug`.
pub fn find(
    base_url: &str,
    vocab: &Vocabulary,
    database: &str,
    query: &str,
    option: Option<FindOption>,
) -> Result<Request> {
    if !vocab.contains(database) {
        return Err(KeggError::invalid_key(
            database,
            "not a valid KEGG database",
        ));
    }
    if let Some(option) = option {
        if database != "compound" && database != "drug" {
            return Err(KeggError::invalid_key(
                database,
                format!(
                    "option {} is only available for the compound and drug databases",
                    option.as_str()
                ),
            ));
        }
    }

    let option_token = option.map(|o| o.as_str());
    Ok(Request {
        url: join_url(base_url, "find", &[Some(database), Some(query), option_token]),
        filename: paths::find_filename(database, query, option_token),
        kind: ContentKind::Text,
    })
}

/// Build a `get` request.
///
/// The option vocabulary is closed by [`GetOption`]; no option means a plain
/// text description, cached under the `description` token.
pub fn get(base_url: &str, entry: &str, option: Option<GetOption>) -> Request {
    let option_token = option.map(|o| o.as_str());
    Request {
        url: join_url(base_url, "get", &[Some(entry), option_token]),
        filename: paths::get_filename(entry, option_token.unwrap_or("description")),
        kind: option.map(|o| o.kind()).unwrap_or(ContentKind::Text),
    }
}

/// Build a `link` request.
///
/// Only `target` is validated against the vocabulary; `source` is passed
/// through unchecked. This asymmetry mirrors the upstream API surface and is
/// deliberate, not an omission.
pub fn link(base_url: &str, vocab: &Vocabulary, source: &str, target: &str) -> Result<Request> {
    if !vocab.contains(target) {
        return Err(KeggError::invalid_key(
            target,
            "not a valid KEGG database for a link target",
        ));
    }

    Ok(Request {
        url: join_url(base_url, "link", &[Some(target), Some(source)]),
        filename: paths::link_filename(target, source),
        kind: ContentKind::Text,
    })
}

/// Build the organism-listing request backing `organism_codes`.
pub fn organism(base_url: &str) -> Request {
    Request {
        url: join_url(base_url, "list", &[Some("organism")]),
        filename: paths::organism_filename(),
        kind: ContentKind::Text,
    }
}

/// Join the base endpoint path with slash-separated, present-only segments.
fn join_url(base_url: &str, operation: &str, segments: &[Option<&str>]) -> String {
    let mut url = format!("{base_url}/{operation}");
    for segment in segments.iter().flatten() {
        url.push('/');
        url.push_str(segment);
    }
    url
}
