// Metric Catalog - CVSS v2 metric groups, values, and scoring weights
// Reference: https://www.first.org/cvss/v2/guide
//
// Weights are taken verbatim from the CVSS v2 specification tables. Scores
// are compared for floating-point equality in tests, so every constant here
// must be reproduced exactly.

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// The 14 CVSS v2 metric groups. Closed set, never extended at runtime.
///
/// The first six are the mandatory base metrics; the next three feed the
/// temporal score and the last five the environmental score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum MetricGroup {
    AccessVector,
    AccessComplexity,
    Authentication,
    Confidentiality,
    Integrity,
    Availability,
    Exploitability,
    RemediationLevel,
    ReportConfidence,
    CollateralDamagePotential,
    TargetDistribution,
    ConfidentialityRequirement,
    IntegrityRequirement,
    AvailabilityRequirement,
}

impl MetricGroup {
    /// Number of metric groups.
    pub const COUNT: usize = 14;

    /// All groups in canonical specification order.
    pub const ALL: [MetricGroup; Self::COUNT] = [
        MetricGroup::AccessVector,
        MetricGroup::AccessComplexity,
        MetricGroup::Authentication,
        MetricGroup::Confidentiality,
        MetricGroup::Integrity,
        MetricGroup::Availability,
        MetricGroup::Exploitability,
        MetricGroup::RemediationLevel,
        MetricGroup::ReportConfidence,
        MetricGroup::CollateralDamagePotential,
        MetricGroup::TargetDistribution,
        MetricGroup::ConfidentialityRequirement,
        MetricGroup::IntegrityRequirement,
        MetricGroup::AvailabilityRequirement,
    ];

    /// Group abbreviation as it appears in vector strings (e.g. `AV`).
    pub fn abbrev(&self) -> &'static str {
        match self {
            MetricGroup::AccessVector => "AV",
            MetricGroup::AccessComplexity => "AC",
            MetricGroup::Authentication => "Au",
            MetricGroup::Confidentiality => "C",
            MetricGroup::Integrity => "I",
            MetricGroup::Availability => "A",
            MetricGroup::Exploitability => "E",
            MetricGroup::RemediationLevel => "RL",
            MetricGroup::ReportConfidence => "RC",
            MetricGroup::CollateralDamagePotential => "CDP",
            MetricGroup::TargetDistribution => "TD",
            MetricGroup::ConfidentialityRequirement => "CR",
            MetricGroup::IntegrityRequirement => "IR",
            MetricGroup::AvailabilityRequirement => "AR",
        }
    }

    /// Human-readable group name.
    pub fn name(&self) -> &'static str {
        match self {
            MetricGroup::AccessVector => "Access Vector",
            MetricGroup::AccessComplexity => "Access Complexity",
            MetricGroup::Authentication => "Authentication",
            MetricGroup::Confidentiality => "Confidentiality Impact",
            MetricGroup::Integrity => "Integrity Impact",
            MetricGroup::Availability => "Availability Impact",
            MetricGroup::Exploitability => "Exploitability",
            MetricGroup::RemediationLevel => "Remediation Level",
            MetricGroup::ReportConfidence => "Report Confidence",
            MetricGroup::CollateralDamagePotential => "Collateral Damage Potential",
            MetricGroup::TargetDistribution => "Target Distribution",
            MetricGroup::ConfidentialityRequirement => "Confidentiality Requirement",
            MetricGroup::IntegrityRequirement => "Integrity Requirement",
            MetricGroup::AvailabilityRequirement => "Availability Requirement",
        }
    }

    /// Whether this is one of the six mandatory base metrics. Absent base
    /// metrics default to weight 0.0 in the score formulas; all other
    /// groups default to their NotDefined weight.
    pub fn is_base(&self) -> bool {
        matches!(
            self,
            MetricGroup::AccessVector
                | MetricGroup::AccessComplexity
                | MetricGroup::Authentication
                | MetricGroup::Confidentiality
                | MetricGroup::Integrity
                | MetricGroup::Availability
        )
    }

    /// Slot index for fixed-size per-group storage.
    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

impl std::fmt::Display for MetricGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.abbrev())
    }
}

/// A single legal value of one metric group.
///
/// Carries the human-readable label, the value abbreviation unique within
/// its group (e.g. `N`), the full token used on the wire (e.g. `AV:N`), and
/// the numeric weight fed into the score formulas.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct MetricValue {
    pub group: MetricGroup,
    pub label: &'static str,
    pub abbrev: &'static str,
    pub token: &'static str,
    pub weight: f64,
}

// Full tokens are unique across the whole catalog, so token identity is
// value identity.
impl PartialEq for MetricValue {
    fn eq(&self, other: &Self) -> bool {
        self.token == other.token
    }
}

impl Eq for MetricValue {}

impl std::fmt::Display for MetricValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.token)
    }
}

const fn value(
    group: MetricGroup,
    label: &'static str,
    abbrev: &'static str,
    token: &'static str,
    weight: f64,
) -> MetricValue {
    MetricValue {
        group,
        label,
        abbrev,
        token,
        weight,
    }
}

pub const AV_LOCAL: MetricValue = value(
    MetricGroup::AccessVector,
    "Access vector: local",
    "L",
    "AV:L",
    0.395,
);
pub const AV_ADJACENT: MetricValue = value(
    MetricGroup::AccessVector,
    "Access vector: adjacent network",
    "A",
    "AV:A",
    0.646,
);
pub const AV_NETWORK: MetricValue = value(
    MetricGroup::AccessVector,
    "Access vector: network",
    "N",
    "AV:N",
    1.0,
);

pub const AC_HIGH: MetricValue = value(
    MetricGroup::AccessComplexity,
    "Access complexity: high",
    "H",
    "AC:H",
    0.35,
);
pub const AC_MEDIUM: MetricValue = value(
    MetricGroup::AccessComplexity,
    "Access complexity: medium",
    "M",
    "AC:M",
    0.61,
);
pub const AC_LOW: MetricValue = value(
    MetricGroup::AccessComplexity,
    "Access complexity: low",
    "L",
    "AC:L",
    0.71,
);

pub const AU_MULTIPLE: MetricValue = value(
    MetricGroup::Authentication,
    "Authentication: multiple",
    "M",
    "Au:M",
    0.45,
);
pub const AU_SINGLE: MetricValue = value(
    MetricGroup::Authentication,
    "Authentication: single",
    "S",
    "Au:S",
    0.56,
);
pub const AU_NONE: MetricValue = value(
    MetricGroup::Authentication,
    "Authentication: none",
    "N",
    "Au:N",
    0.704,
);

pub const C_NONE: MetricValue = value(
    MetricGroup::Confidentiality,
    "Confidentiality impact: none",
    "N",
    "C:N",
    0.0,
);
pub const C_PARTIAL: MetricValue = value(
    MetricGroup::Confidentiality,
    "Confidentiality impact: partial",
    "P",
    "C:P",
    0.275,
);
pub const C_COMPLETE: MetricValue = value(
    MetricGroup::Confidentiality,
    "Confidentiality impact: complete",
    "C",
    "C:C",
    0.660,
);

pub const I_NONE: MetricValue = value(
    MetricGroup::Integrity,
    "Integrity impact: none",
    "N",
    "I:N",
    0.0,
);
pub const I_PARTIAL: MetricValue = value(
    MetricGroup::Integrity,
    "Integrity impact: partial",
    "P",
    "I:P",
    0.275,
);
pub const I_COMPLETE: MetricValue = value(
    MetricGroup::Integrity,
    "Integrity impact: complete",
    "C",
    "I:C",
    0.660,
);

pub const A_NONE: MetricValue = value(
    MetricGroup::Availability,
    "Availability impact: none",
    "N",
    "A:N",
    0.0,
);
pub const A_PARTIAL: MetricValue = value(
    MetricGroup::Availability,
    "Availability impact: partial",
    "P",
    "A:P",
    0.275,
);
pub const A_COMPLETE: MetricValue = value(
    MetricGroup::Availability,
    "Availability impact: complete",
    "C",
    "A:C",
    0.660,
);

pub const E_UNPROVEN: MetricValue = value(
    MetricGroup::Exploitability,
    "Exploitability: unproven",
    "U",
    "E:U",
    0.85,
);
pub const E_PROOF_OF_CONCEPT: MetricValue = value(
    MetricGroup::Exploitability,
    "Exploitability: proof of concept",
    "POC",
    "E:POC",
    0.9,
);
pub const E_FUNCTIONAL: MetricValue = value(
    MetricGroup::Exploitability,
    "Exploitability: functional",
    "F",
    "E:F",
    0.95,
);
pub const E_HIGH: MetricValue = value(
    MetricGroup::Exploitability,
    "Exploitability: high",
    "H",
    "E:H",
    1.0,
);
pub const E_NOT_DEFINED: MetricValue = value(
    MetricGroup::Exploitability,
    "Exploitability: not defined",
    "ND",
    "E:ND",
    1.0,
);

pub const RL_OFFICIAL_FIX: MetricValue = value(
    MetricGroup::RemediationLevel,
    "Remediation level: official fix",
    "OF",
    "RL:OF",
    0.87,
);
pub const RL_TEMPORARY_FIX: MetricValue = value(
    MetricGroup::RemediationLevel,
    "Remediation level: temporary fix",
    "TF",
    "RL:TF",
    0.9,
);
pub const RL_WORKAROUND: MetricValue = value(
    MetricGroup::RemediationLevel,
    "Remediation level: workaround",
    "W",
    "RL:W",
    0.95,
);
pub const RL_UNAVAILABLE: MetricValue = value(
    MetricGroup::RemediationLevel,
    "Remediation level: unavailable",
    "U",
    "RL:U",
    1.0,
);
pub const RL_NOT_DEFINED: MetricValue = value(
    MetricGroup::RemediationLevel,
    "Remediation level: not defined",
    "ND",
    "RL:ND",
    1.0,
);

pub const RC_UNCONFIRMED: MetricValue = value(
    MetricGroup::ReportConfidence,
    "Report confidence: unconfirmed",
    "UC",
    "RC:UC",
    0.9,
);
pub const RC_UNCORROBORATED: MetricValue = value(
    MetricGroup::ReportConfidence,
    "Report confidence: uncorroborated",
    "UR",
    "RC:UR",
    0.95,
);
pub const RC_CONFIRMED: MetricValue = value(
    MetricGroup::ReportConfidence,
    "Report confidence: confirmed",
    "C",
    "RC:C",
    1.0,
);
pub const RC_NOT_DEFINED: MetricValue = value(
    MetricGroup::ReportConfidence,
    "Report confidence: not defined",
    "ND",
    "RC:ND",
    1.0,
);

// The NotDefined weight for CDP and TD is 0, not 1 like every other group.
// This asymmetry comes straight from the v2 tables and is load-bearing: it
// collapses the environmental score to 0 when CDP or TD is unset.
pub const CDP_NONE: MetricValue = value(
    MetricGroup::CollateralDamagePotential,
    "Collateral damage potential: none",
    "N",
    "CDP:N",
    0.0,
);
pub const CDP_LOW: MetricValue = value(
    MetricGroup::CollateralDamagePotential,
    "Collateral damage potential: low",
    "L",
    "CDP:L",
    0.1,
);
pub const CDP_LOW_MEDIUM: MetricValue = value(
    MetricGroup::CollateralDamagePotential,
    "Collateral damage potential: low/medium",
    "LM",
    "CDP:LM",
    0.3,
);
pub const CDP_MEDIUM_HIGH: MetricValue = value(
    MetricGroup::CollateralDamagePotential,
    "Collateral damage potential: medium/high",
    "MH",
    "CDP:MH",
    0.4,
);
pub const CDP_HIGH: MetricValue = value(
    MetricGroup::CollateralDamagePotential,
    "Collateral damage potential: high",
    "H",
    "CDP:H",
    0.5,
);
pub const CDP_NOT_DEFINED: MetricValue = value(
    MetricGroup::CollateralDamagePotential,
    "Collateral damage potential: not defined",
    "ND",
    "CDP:ND",
    0.0,
);

pub const TD_NONE: MetricValue = value(
    MetricGroup::TargetDistribution,
    "Target distribution: none",
    "N",
    "TD:N",
    0.0,
);
pub const TD_LOW: MetricValue = value(
    MetricGroup::TargetDistribution,
    "Target distribution: low",
    "L",
    "TD:L",
    0.25,
);
pub const TD_MEDIUM: MetricValue = value(
    MetricGroup::TargetDistribution,
    "Target distribution: medium",
    "M",
    "TD:M",
    0.75,
);
pub const TD_HIGH: MetricValue = value(
    MetricGroup::TargetDistribution,
    "Target distribution: high",
    "H",
    "TD:H",
    1.0,
);
pub const TD_NOT_DEFINED: MetricValue = value(
    MetricGroup::TargetDistribution,
    "Target distribution: not defined",
    "ND",
    "TD:ND",
    0.0,
);

pub const CR_LOW: MetricValue = value(
    MetricGroup::ConfidentialityRequirement,
    "Confidentiality requirement: low",
    "L",
    "CR:L",
    0.5,
);
pub const CR_MEDIUM: MetricValue = value(
    MetricGroup::ConfidentialityRequirement,
    "Confidentiality requirement: medium",
    "M",
    "CR:M",
    1.0,
);
pub const CR_HIGH: MetricValue = value(
    MetricGroup::ConfidentialityRequirement,
    "Confidentiality requirement: high",
    "H",
    "CR:H",
    1.51,
);
pub const CR_NOT_DEFINED: MetricValue = value(
    MetricGroup::ConfidentialityRequirement,
    "Confidentiality requirement: not defined",
    "ND",
    "CR:ND",
    1.0,
);

pub const IR_LOW: MetricValue = value(
    MetricGroup::IntegrityRequirement,
    "Integrity requirement: low",
    "L",
    "IR:L",
    0.5,
);
pub const IR_MEDIUM: MetricValue = value(
    MetricGroup::IntegrityRequirement,
    "Integrity requirement: medium",
    "M",
    "IR:M",
    1.0,
);
pub const IR_HIGH: MetricValue = value(
    MetricGroup::IntegrityRequirement,
    "Integrity requirement: high",
    "H",
    "IR:H",
    1.51,
);
pub const IR_NOT_DEFINED: MetricValue = value(
    MetricGroup::IntegrityRequirement,
    "Integrity requirement: not defined",
    "ND",
    "IR:ND",
    1.0,
);

pub const AR_LOW: MetricValue = value(
    MetricGroup::AvailabilityRequirement,
    "Availability requirement: low",
    "L",
    "AR:L",
    0.5,
);
pub const AR_MEDIUM: MetricValue = value(
    MetricGroup::AvailabilityRequirement,
    "Availability requirement: medium",
    "M",
    "AR:M",
    1.0,
);
pub const AR_HIGH: MetricValue = value(
    MetricGroup::AvailabilityRequirement,
    "Availability requirement: high",
    "H",
    "AR:H",
    1.51,
);
pub const AR_NOT_DEFINED: MetricValue = value(
    MetricGroup::AvailabilityRequirement,
    "Availability requirement: not defined",
    "ND",
    "AR:ND",
    1.0,
);

// Per-group value tables in canonical specification order. values_of()
// hands these out; NotDefined always sits last where the group has one.
static ACCESS_VECTOR: [MetricValue; 3] = [AV_LOCAL, AV_ADJACENT, AV_NETWORK];
static ACCESS_COMPLEXITY: [MetricValue; 3] = [AC_HIGH, AC_MEDIUM, AC_LOW];
static AUTHENTICATION: [MetricValue; 3] = [AU_MULTIPLE, AU_SINGLE, AU_NONE];
static CONFIDENTIALITY: [MetricValue; 3] = [C_NONE, C_PARTIAL, C_COMPLETE];
static INTEGRITY: [MetricValue; 3] = [I_NONE, I_PARTIAL, I_COMPLETE];
static AVAILABILITY: [MetricValue; 3] = [A_NONE, A_PARTIAL, A_COMPLETE];
static EXPLOITABILITY: [MetricValue; 5] = [
    E_UNPROVEN,
    E_PROOF_OF_CONCEPT,
    E_FUNCTIONAL,
    E_HIGH,
    E_NOT_DEFINED,
];
static REMEDIATION_LEVEL: [MetricValue; 5] = [
    RL_OFFICIAL_FIX,
    RL_TEMPORARY_FIX,
    RL_WORKAROUND,
    RL_UNAVAILABLE,
    RL_NOT_DEFINED,
];
static REPORT_CONFIDENCE: [MetricValue; 4] = [
    RC_UNCONFIRMED,
    RC_UNCORROBORATED,
    RC_CONFIRMED,
    RC_NOT_DEFINED,
];
static COLLATERAL_DAMAGE_POTENTIAL: [MetricValue; 6] = [
    CDP_NONE,
    CDP_LOW,
    CDP_LOW_MEDIUM,
    CDP_MEDIUM_HIGH,
    CDP_HIGH,
    CDP_NOT_DEFINED,
];
static TARGET_DISTRIBUTION: [MetricValue; 5] =
    [TD_NONE, TD_LOW, TD_MEDIUM, TD_HIGH, TD_NOT_DEFINED];
static CONFIDENTIALITY_REQUIREMENT: [MetricValue; 4] =
    [CR_LOW, CR_MEDIUM, CR_HIGH, CR_NOT_DEFINED];
static INTEGRITY_REQUIREMENT: [MetricValue; 4] = [IR_LOW, IR_MEDIUM, IR_HIGH, IR_NOT_DEFINED];
static AVAILABILITY_REQUIREMENT: [MetricValue; 4] = [AR_LOW, AR_MEDIUM, AR_HIGH, AR_NOT_DEFINED];

lazy_static! {
    /// Process-wide metric catalog, built once on first use and read-only
    /// afterwards. Safe for unsynchronized concurrent reads.
    pub static ref CATALOG: MetricCatalog = MetricCatalog::new();
}

/// Read-only registry mapping every full token to its metric value and
/// enumerating each group's legal values in canonical order.
pub struct MetricCatalog {
    by_token: HashMap<&'static str, &'static MetricValue>,
}

impl MetricCatalog {
    /// Build the catalog from the static value tables.
    pub fn new() -> Self {
        let mut by_token = HashMap::new();
        for group in MetricGroup::ALL {
            for value in Self::table(group) {
                by_token.insert(value.token, value);
            }
        }
        MetricCatalog { by_token }
    }

    /// Exact, case-sensitive lookup of a full token such as `"AV:N"`.
    pub fn lookup(&self, token: &str) -> Option<&'static MetricValue> {
        self.by_token.get(token).copied()
    }

    /// All legal values of a group, in canonical specification order.
    pub fn values_of(&self, group: MetricGroup) -> &'static [MetricValue] {
        Self::table(group)
    }

    /// The NotDefined sentinel of a group, if the group has one. The six
    /// base groups do not.
    pub fn not_defined(&self, group: MetricGroup) -> Option<&'static MetricValue> {
        Self::table(group).iter().find(|v| v.abbrev == "ND")
    }

    fn table(group: MetricGroup) -> &'static [MetricValue] {
        match group {
            MetricGroup::AccessVector => &ACCESS_VECTOR,
            MetricGroup::AccessComplexity => &ACCESS_COMPLEXITY,
            MetricGroup::Authentication => &AUTHENTICATION,
            MetricGroup::Confidentiality => &CONFIDENTIALITY,
            MetricGroup::Integrity => &INTEGRITY,
            MetricGroup::Availability => &AVAILABILITY,
            MetricGroup::Exploitability => &EXPLOITABILITY,
            MetricGroup::RemediationLevel => &REMEDIATION_LEVEL,
            MetricGroup::ReportConfidence => &REPORT_CONFIDENCE,
            MetricGroup::CollateralDamagePotential => &COLLATERAL_DAMAGE_POTENTIAL,
            MetricGroup::TargetDistribution => &TARGET_DISTRIBUTION,
            MetricGroup::ConfidentialityRequirement => &CONFIDENTIALITY_REQUIREMENT,
            MetricGroup::IntegrityRequirement => &INTEGRITY_REQUIREMENT,
            MetricGroup::AvailabilityRequirement => &AVAILABILITY_REQUIREMENT,
        }
    }
}

impl Default for MetricCatalog {
    fn default() -> Self {
        Self::new()
    }
}
