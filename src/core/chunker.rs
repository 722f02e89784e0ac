//! Identifier de-duplication and chunking

use std::collections::HashSet;

/// Drop repeated identifiers, keeping the first occurrence of each in input order
pub fn dedupe<I, S>(identifiers: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut seen = HashSet::new();
    let mut unique = Vec::new();
    for id in identifiers {
        let id = id.into();
        if seen.insert(id.clone()) {
            unique.push(id);
        }
    }
    unique
}

/// Split identifiers into contiguous groups of at most `limit` elements
///
/// The last group may be smaller. A `limit` of zero is treated as one.
pub fn chunk(identifiers: &[String], limit: usize) -> Vec<Vec<String>> {
    identifiers
        .chunks(limit.max(1))
        .map(<[String]>::to_vec)
        .collect()
}
