// Error types for cvss2
//
// Structured error types using thiserror. Parsing is the only fallible
// surface in this crate; score computation is total over any vector set.

use thiserror::Error;

/// Errors raised while parsing a short vector string.
///
/// Both variants carry the offending input fragment so callers can report
/// it back to the user for correction. A failed parse never returns a
/// partial [`VectorSet`](crate::VectorSet).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CvssError {
    /// A `/`-delimited segment did not contain exactly one `:` separator.
    #[error("malformed vector segment {segment:?}: expected GROUP:VALUE")]
    MalformedSegment { segment: String },

    /// A segment was well-formed but its token matches no registered metric.
    #[error("unrecognized metric token {token:?}")]
    UnknownToken { token: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_segment_message_names_offender() {
        let err = CvssError::MalformedSegment {
            segment: "AVN".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("AVN"));
        assert!(msg.contains("malformed"));
    }

    #[test]
    fn test_unknown_token_message_names_offender() {
        let err = CvssError::UnknownToken {
            token: "AV:X".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("AV:X"));
        assert!(msg.contains("unrecognized"));
    }
}
