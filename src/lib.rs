// cvss2 - CVSS v2 vector parsing and severity score computation
// Licensed under GPL-3.0

//! Compute CVSS v2 severity scores from short vector strings.
//!
//! A vector string such as `AV:N/AC:H/Au:N/C:N/I:N/A:C` selects one value
//! per metric group; [`codec::parse`] turns it into a [`VectorSet`] and
//! [`ScoreCalculator::compute`] derives the base, temporal, and
//! environmental scores per the formulas in the CVSS v2 guide
//! (<https://www.first.org/cvss/v2/guide>).
//!
//! ```
//! use cvss2::{catalog, codec, ScoreCalculator};
//!
//! let mut set = codec::parse("AV:N/AC:L/Au:N/C:N/I:N/A:C").unwrap();
//! set.add(catalog::E_FUNCTIONAL);
//! set.add(catalog::RL_OFFICIAL_FIX);
//! set.add(catalog::RC_CONFIRMED);
//!
//! let score = ScoreCalculator::compute(&set);
//! assert_eq!(score.base, 7.8);
//! assert_eq!(score.temporal, 6.4);
//! ```

pub mod catalog;
pub mod codec;
pub mod error;
pub mod scoring;
pub mod vector;

// Re-export commonly used types
pub use crate::catalog::{MetricCatalog, MetricGroup, MetricValue, CATALOG};
pub use crate::error::CvssError;
pub use crate::scoring::{Score, ScoreBreakdown, ScoreCalculator, Severity};
pub use crate::vector::VectorSet;

/// Result type for cvss2 operations
pub type Result<T> = std::result::Result<T, CvssError>;
