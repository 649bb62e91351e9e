// Parsing of tab-separated KEGG response bodies.

use crate::error::{KeggError, Result};

use super::types::Listing;

/// Parse an item/description body into a [`Listing`].
///
/// Each line must hold exactly two tab-separated fields. Line order is
/// preserved; when descriptions are requested the two sequences have equal
/// length by construction.
pub fn parse_listing(text: &str, want_descriptions: bool) -> Result<Listing> {
    let (entries, descriptions) = split_pairs(text)?;
    Ok(Listing {
        entries,
        descriptions: want_descriptions.then_some(descriptions),
    })
}

/// Split every line into its (item, description) pair.
/// A line with zero or more than one tab is malformed.
pub fn split_pairs(text: &str) -> Result<(Vec<String>, Vec<String>)> {
    let mut items = Vec::new();
    let mut descriptions = Vec::new();

    for line in text.lines() {
        let line = line.trim();
        let mut fields = line.splitn(3, '\t');
        match (fields.next(), fields.next(), fields.next()) {
            (Some(item), Some(description), None) => {
                items.push(item.to_string());
                descriptions.push(description.to_string());
            }
            _ => {
                return Err(KeggError::MalformedResponse {
                    line: line.to_string(),
                });
            }
        }
    }

    Ok((items, descriptions))
}

/// Extract organism codes from the `list/organism` body.
/// Rows carry four tab-separated fields; the code is the second.
pub fn parse_organism_codes(text: &str) -> Result<Vec<String>> {
    let mut codes = Vec::new();

    for line in text.lines() {
        let line = line.trim();
        let fields: Vec<&str> = line.split('\t').collect();
        // T number, organism code, description, lineage
        if fields.len() != 4 {
            return Err(KeggError::MalformedResponse {
                line: line.to_string(),
            });
        }
        codes.push(fields[1].to_string());
    }

    Ok(codes)
}
