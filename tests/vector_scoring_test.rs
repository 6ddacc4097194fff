//! CVSS v2 Scoring Integration Tests
//!
//! End-to-end tests over the public API: parse a short vector string, add
//! temporal and environmental metrics, and check the computed score triple
//! against reference values derived from published CVE scorings. Score
//! comparisons are exact: the formula chain and its one-decimal rounding
//! must reproduce the reference doubles bit-for-bit.

use cvss2::catalog::{
    AR_HIGH, AR_LOW, AR_MEDIUM, AV_LOCAL, AV_NETWORK, CDP_HIGH, CDP_NONE, CR_HIGH, CR_MEDIUM,
    E_FUNCTIONAL, E_PROOF_OF_CONCEPT, IR_HIGH, IR_MEDIUM, RC_CONFIRMED, RL_OFFICIAL_FIX, TD_HIGH,
    TD_NONE,
};
use cvss2::{codec, CvssError, Score, ScoreCalculator, Severity, VectorSet};

// ============================================================================
// CVE Regression Vectors
// ============================================================================

#[test]
fn test_cve_2002_0392_high_env() {
    let mut set = codec::parse("AV:N/AC:L/Au:N/C:N/I:N/A:C").unwrap();
    // Temporal
    set.add(E_FUNCTIONAL);
    set.add(RL_OFFICIAL_FIX);
    set.add(RC_CONFIRMED);
    // Environmental
    set.add(CDP_HIGH);
    set.add(TD_HIGH);
    set.add(CR_HIGH);
    set.add(IR_HIGH);
    set.add(AR_HIGH);

    assert_eq!(
        ScoreCalculator::compute(&set),
        Score {
            base: 7.8,
            temporal: 6.4,
            environmental: 9.2
        }
    );
}

#[test]
fn test_cve_2002_0392_low_env() {
    let mut set = codec::parse("AV:N/AC:L/Au:N/C:N/I:N/A:C").unwrap();
    set.add(E_FUNCTIONAL);
    set.add(RL_OFFICIAL_FIX);
    set.add(RC_CONFIRMED);
    set.add(CDP_NONE);
    set.add(TD_NONE);
    set.add(CR_MEDIUM);
    set.add(IR_MEDIUM);
    set.add(AR_HIGH);

    assert_eq!(
        ScoreCalculator::compute(&set),
        Score {
            base: 7.8,
            temporal: 6.4,
            environmental: 0.0
        }
    );
}

#[test]
fn test_cve_2003_0818_high_env() {
    let mut set = codec::parse("AV:N/AC:L/Au:N/C:C/I:C/A:C").unwrap();
    set.add(E_FUNCTIONAL);
    set.add(RL_OFFICIAL_FIX);
    set.add(RC_CONFIRMED);
    set.add(CDP_HIGH);
    set.add(TD_HIGH);
    set.add(CR_MEDIUM);
    set.add(IR_MEDIUM);
    set.add(AR_LOW);

    assert_eq!(
        ScoreCalculator::compute(&set),
        Score {
            base: 10.0,
            temporal: 8.3,
            environmental: 9.0
        }
    );
}

#[test]
fn test_cve_2003_0818_low_env() {
    let mut set = codec::parse("AV:N/AC:L/Au:N/C:C/I:C/A:C").unwrap();
    set.add(E_FUNCTIONAL);
    set.add(RL_OFFICIAL_FIX);
    set.add(RC_CONFIRMED);
    set.add(CDP_NONE);
    set.add(TD_NONE);
    set.add(CR_MEDIUM);
    set.add(IR_MEDIUM);
    set.add(AR_LOW);

    assert_eq!(
        ScoreCalculator::compute(&set),
        Score {
            base: 10.0,
            temporal: 8.3,
            environmental: 0.0
        }
    );
}

#[test]
fn test_cve_2003_0062_high_env() {
    let mut set = codec::parse("AV:L/AC:H/Au:N/C:C/I:C/A:C").unwrap();
    set.add(E_PROOF_OF_CONCEPT);
    set.add(RL_OFFICIAL_FIX);
    set.add(RC_CONFIRMED);
    set.add(CDP_HIGH);
    set.add(TD_HIGH);
    set.add(CR_HIGH);
    set.add(IR_HIGH);
    set.add(AR_HIGH);

    assert_eq!(
        ScoreCalculator::compute(&set),
        Score {
            base: 6.2,
            temporal: 4.9,
            environmental: 7.5
        }
    );
}

#[test]
fn test_cve_2003_0062_low_env() {
    let mut set = codec::parse("AV:L/AC:H/Au:N/C:C/I:C/A:C").unwrap();
    set.add(E_PROOF_OF_CONCEPT);
    set.add(RL_OFFICIAL_FIX);
    set.add(RC_CONFIRMED);
    set.add(CDP_NONE);
    set.add(TD_NONE);
    set.add(CR_MEDIUM);
    set.add(IR_MEDIUM);
    set.add(AR_MEDIUM);

    assert_eq!(
        ScoreCalculator::compute(&set),
        Score {
            base: 6.2,
            temporal: 4.9,
            environmental: 0.0
        }
    );
}

// ============================================================================
// Parsing and Canonicalization
// ============================================================================

#[test]
fn test_parse_round_trip_is_canonical() {
    let set = codec::parse("AV:L/AC:H/Au:N/C:C/I:C/A:C").unwrap();
    // Output is always sorted to be predictable, regardless of input order.
    assert_eq!(codec::serialize(&set), "A:C/AC:H/AV:L/Au:N/C:C/I:C");

    let shuffled = codec::parse("I:C/AV:L/C:C/A:C/Au:N/AC:H").unwrap();
    assert_eq!(shuffled, set);
    assert_eq!(shuffled.to_string(), "A:C/AC:H/AV:L/Au:N/C:C/I:C");
}

#[test]
fn test_empty_vector_parses_and_scores_zero() {
    let set = codec::parse("").unwrap();
    assert!(set.is_empty());
    assert_eq!(ScoreCalculator::compute(&set).base, 0.0);
}

#[test]
fn test_invalid_vector_is_rejected() {
    let err = codec::parse("This is not valid").unwrap_err();
    assert!(matches!(
        err,
        CvssError::MalformedSegment { .. } | CvssError::UnknownToken { .. }
    ));
}

#[test]
fn test_from_str_and_display_mirror_codec() {
    let set: VectorSet = "AV:N/AC:H/I:N/A:N".parse().unwrap();
    assert_eq!(set.to_string(), "A:N/AC:H/AV:N/I:N");
    assert!("AV:Q".parse::<VectorSet>().is_err());
}

// ============================================================================
// Metric Selection Semantics
// ============================================================================

#[test]
fn test_add_removes_already_present_metrics() {
    let mut set = VectorSet::new();
    set.add(AV_NETWORK);
    assert!(set.has(AV_NETWORK));

    set.add(AV_LOCAL);
    assert!(!set.has(AV_NETWORK));
    assert!(set.has(AV_LOCAL));
}

#[test]
fn test_severity_of_computed_scores() {
    let low = codec::parse("AV:L/AC:H/Au:M/C:P/I:N/A:N").unwrap();
    assert_eq!(ScoreCalculator::compute(&low).severity(), Severity::Low);

    let high = codec::parse("AV:N/AC:L/Au:N/C:C/I:C/A:C").unwrap();
    assert_eq!(ScoreCalculator::compute(&high).severity(), Severity::High);
}

// ============================================================================
// Serialization of Results
// ============================================================================

#[test]
fn test_score_serializes_to_json() {
    let set = codec::parse("AV:N/AC:L/Au:N/C:N/I:N/A:C").unwrap();
    let score = ScoreCalculator::compute(&set);

    let json = serde_json::to_string(&score).unwrap();
    let back: Score = serde_json::from_str(&json).unwrap();
    assert_eq!(back, score);
    assert!(json.contains("\"base\":7.8"));
}
