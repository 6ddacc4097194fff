// Codec - short vector string parsing and canonical serialization
//
// Grammar: vector := "" | segment ("/" segment)*
//          segment := group-abbrev ":" value-abbrev

use crate::catalog::CATALOG;
use crate::error::CvssError;
use crate::vector::VectorSet;
use crate::Result;

/// Parse a short vector string such as `"AV:N/AC:H/I:N/A:N"`.
///
/// Accepts any segment ordering and any subset of groups; an empty string
/// parses to an empty set. Two segments targeting the same group resolve
/// last-write-wins. On failure no partial set is returned.
pub fn parse(input: &str) -> Result<VectorSet> {
    let mut set = VectorSet::new();
    if input.is_empty() {
        return Ok(set);
    }

    for segment in input.split('/') {
        if segment.matches(':').count() != 1 {
            return Err(CvssError::MalformedSegment {
                segment: segment.to_string(),
            });
        }
        let value = CATALOG
            .lookup(segment)
            .ok_or_else(|| CvssError::UnknownToken {
                token: segment.to_string(),
            })?;
        set.add(*value);
    }

    tracing::debug!("parsed {} metric(s) from vector string", set.len());
    Ok(set)
}

/// Serialize a set to its canonical string form: full tokens sorted in
/// ascending byte order, joined with `/`. Sorting makes the output
/// independent of insertion order; an empty set yields an empty string.
pub fn serialize(set: &VectorSet) -> String {
    let mut tokens: Vec<&str> = set.iter().map(|v| v.token).collect();
    tokens.sort_unstable();
    tokens.join("/")
}
