// Score Calculator - CVSS v2 base, temporal, and environmental scores
// Reference: https://www.first.org/cvss/v2/guide section 3.2
//
// All intermediates are IEEE-754 doubles. The only rounding is the explicit
// one-decimal step where the formula chain calls for it; intermediate
// products are never pre-rounded.

use crate::catalog::{MetricGroup, CATALOG};
use crate::vector::VectorSet;
use serde::{Deserialize, Serialize};

/// The three computed scores, each rounded to one decimal, each in
/// [0.0, 10.0].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Score {
    pub base: f64,
    pub temporal: f64,
    pub environmental: f64,
}

impl Score {
    /// Qualitative severity band of the base score.
    pub fn severity(&self) -> Severity {
        Severity::from_score(self.base)
    }
}

impl std::fmt::Display for Score {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "base {:.1} / temporal {:.1} / environmental {:.1}",
            self.base, self.temporal, self.environmental
        )
    }
}

/// NVD qualitative severity rating for CVSS v2 scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Severity {
    Low,    // 0.0 - 3.9
    Medium, // 4.0 - 6.9
    High,   // 7.0 - 10.0
}

impl Severity {
    pub fn from_score(score: f64) -> Self {
        match score {
            s if s < 4.0 => Severity::Low,
            s if s < 7.0 => Severity::Medium,
            _ => Severity::High,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Low => "Low",
            Severity::Medium => "Medium",
            Severity::High => "High",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Round to one decimal, half away from zero: scale by 10, shift by 0.5
/// toward the sign, truncate, scale back. This is the rounding the v2
/// guide uses; banker's rounding would disagree on exact x.x5 boundaries.
fn round1(x: f64) -> f64 {
    let scaled = x * 10.0;
    let shifted = if scaled < 0.0 {
        scaled - 0.5
    } else {
        scaled + 0.5
    };
    (shifted as i64) as f64 / 10.0
}

/// Pure score computation over a [`VectorSet`].
///
/// Every function here is total: absent base-impact metrics contribute 0.0
/// and absent optional metrics contribute their group's NotDefined weight,
/// so even an empty set scores (to 0.0 across the board).
pub struct ScoreCalculator;

impl ScoreCalculator {
    /// Compute all three scores.
    pub fn compute(set: &VectorSet) -> Score {
        Score {
            base: Self::base_score(set),
            temporal: Self::temporal_score(set),
            environmental: Self::environmental_score(set),
        }
    }

    /// Base score: severity intrinsic to the vulnerability.
    pub fn base_score(set: &VectorSet) -> f64 {
        let impact = Self::impact(set);
        round1(
            (0.6 * impact + 0.4 * Self::base_exploitability(set) - 1.5) * impact_mod(impact),
        )
    }

    /// Temporal score: base adjusted for exploit maturity, fix
    /// availability, and report confidence.
    pub fn temporal_score(set: &VectorSet) -> f64 {
        round1(Self::base_score(set) * temporal_multiplier(set))
    }

    /// Environmental score: temporal further adjusted for
    /// deployment-specific impact and exposure.
    pub fn environmental_score(set: &VectorSet) -> f64 {
        let adjusted = Self::adjusted_temporal(set);
        let cdp = weight(set, MetricGroup::CollateralDamagePotential);
        let td = weight(set, MetricGroup::TargetDistribution);
        round1((adjusted + (10.0 - adjusted) * cdp) * td)
    }

    /// Full per-component breakdown of one scoring pass.
    pub fn breakdown(set: &VectorSet) -> ScoreBreakdown {
        ScoreBreakdown {
            base: Self::base_score(set),
            access_vector: weight(set, MetricGroup::AccessVector),
            access_complexity: weight(set, MetricGroup::AccessComplexity),
            authentication: weight(set, MetricGroup::Authentication),
            confidentiality_impact: weight(set, MetricGroup::Confidentiality),
            integrity_impact: weight(set, MetricGroup::Integrity),
            availability_impact: weight(set, MetricGroup::Availability),
            temporal: Self::temporal_score(set),
            exploitability: weight(set, MetricGroup::Exploitability),
            remediation_level: weight(set, MetricGroup::RemediationLevel),
            report_confidence: weight(set, MetricGroup::ReportConfidence),
            environmental: Self::environmental_score(set),
            collateral_damage_potential: weight(set, MetricGroup::CollateralDamagePotential),
            target_distribution: weight(set, MetricGroup::TargetDistribution),
            confidentiality_requirement: weight(set, MetricGroup::ConfidentialityRequirement),
            integrity_requirement: weight(set, MetricGroup::IntegrityRequirement),
            availability_requirement: weight(set, MetricGroup::AvailabilityRequirement),
        }
    }

    fn impact(set: &VectorSet) -> f64 {
        let c = weight(set, MetricGroup::Confidentiality);
        let i = weight(set, MetricGroup::Integrity);
        let a = weight(set, MetricGroup::Availability);
        10.41 * (1.0 - (1.0 - c) * (1.0 - i) * (1.0 - a))
    }

    fn base_exploitability(set: &VectorSet) -> f64 {
        20.0 * weight(set, MetricGroup::AccessVector)
            * weight(set, MetricGroup::AccessComplexity)
            * weight(set, MetricGroup::Authentication)
    }

    fn adjusted_impact(set: &VectorSet) -> f64 {
        let c = weight(set, MetricGroup::Confidentiality);
        let i = weight(set, MetricGroup::Integrity);
        let a = weight(set, MetricGroup::Availability);
        let cr = weight(set, MetricGroup::ConfidentialityRequirement);
        let ir = weight(set, MetricGroup::IntegrityRequirement);
        let ar = weight(set, MetricGroup::AvailabilityRequirement);
        f64::min(
            10.0,
            10.41 * (1.0 - (1.0 - c * cr) * (1.0 - i * ir) * (1.0 - a * ar)),
        )
    }

    fn adjusted_temporal(set: &VectorSet) -> f64 {
        let adjusted_impact = Self::adjusted_impact(set);
        round1(
            (0.6 * adjusted_impact + 0.4 * Self::base_exploitability(set) - 1.5)
                * impact_mod(adjusted_impact)
                * temporal_multiplier(set),
        )
    }
}

/// Weight of the selected value for `group`, or the group's default when
/// unselected: 0.0 for the six base groups, the NotDefined weight
/// otherwise. Note CDP and TD define that weight as 0, so an environmental
/// score collapses to 0 when they are unset.
fn weight(set: &VectorSet, group: MetricGroup) -> f64 {
    match set.get(group) {
        Some(value) => value.weight,
        None if group.is_base() => 0.0,
        None => CATALOG.not_defined(group).map_or(0.0, |v| v.weight),
    }
}

fn impact_mod(impact: f64) -> f64 {
    if impact == 0.0 {
        0.0
    } else {
        1.176
    }
}

fn temporal_multiplier(set: &VectorSet) -> f64 {
    weight(set, MetricGroup::Exploitability)
        * weight(set, MetricGroup::RemediationLevel)
        * weight(set, MetricGroup::ReportConfidence)
}

/// Every component score of one scoring pass, for display and reporting.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub base: f64,
    pub access_vector: f64,
    pub access_complexity: f64,
    pub authentication: f64,
    pub confidentiality_impact: f64,
    pub integrity_impact: f64,
    pub availability_impact: f64,
    pub temporal: f64,
    pub exploitability: f64,
    pub remediation_level: f64,
    pub report_confidence: f64,
    pub environmental: f64,
    pub collateral_damage_potential: f64,
    pub target_distribution: f64,
    pub confidentiality_requirement: f64,
    pub integrity_requirement: f64,
    pub availability_requirement: f64,
}

impl std::fmt::Display for ScoreBreakdown {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "base score                     {:.1}", self.base)?;
        writeln!(f, "  access vector                {:.3}", self.access_vector)?;
        writeln!(f, "  access complexity            {:.3}", self.access_complexity)?;
        writeln!(f, "  authentication               {:.3}", self.authentication)?;
        writeln!(f, "  confidentiality impact       {:.3}", self.confidentiality_impact)?;
        writeln!(f, "  integrity impact             {:.3}", self.integrity_impact)?;
        writeln!(f, "  availability impact          {:.3}", self.availability_impact)?;
        writeln!(f)?;
        writeln!(f, "temporal score                 {:.1}", self.temporal)?;
        writeln!(f, "  exploitability               {:.3}", self.exploitability)?;
        writeln!(f, "  remediation level            {:.3}", self.remediation_level)?;
        writeln!(f, "  report confidence            {:.3}", self.report_confidence)?;
        writeln!(f)?;
        writeln!(f, "environmental score            {:.1}", self.environmental)?;
        writeln!(f, "  collateral damage potential  {:.3}", self.collateral_damage_potential)?;
        writeln!(f, "  target distribution          {:.3}", self.target_distribution)?;
        writeln!(f, "  confidentiality requirement  {:.3}", self.confidentiality_requirement)?;
        writeln!(f, "  integrity requirement        {:.3}", self.integrity_requirement)?;
        writeln!(f, "  availability requirement     {:.3}", self.availability_requirement)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec;

    #[test]
    fn test_round1_half_away_from_zero() {
        assert_eq!(round1(1.24), 1.2);
        assert_eq!(round1(1.25), 1.3);
        assert_eq!(round1(1.26), 1.3);
        assert_eq!(round1(-1.24), -1.2);
        assert_eq!(round1(-1.25), -1.3);
        assert_eq!(round1(0.0), 0.0);
        // Half-to-even would give 7.4 here.
        assert_eq!(round1(7.45), 7.5);
    }

    #[test]
    fn test_empty_set_scores_zero() {
        let score = ScoreCalculator::compute(&VectorSet::new());
        assert_eq!(
            score,
            Score {
                base: 0.0,
                temporal: 0.0,
                environmental: 0.0
            }
        );
    }

    #[test]
    fn test_no_impact_means_zero_base() {
        // impact_mod zeroes the whole base term when C, I, and A are all
        // none, regardless of exploitability.
        let set = codec::parse("AV:N/AC:L/Au:N/C:N/I:N/A:N").unwrap();
        assert_eq!(ScoreCalculator::base_score(&set), 0.0);
    }

    #[test]
    fn test_temporal_defaults_to_base() {
        // E, RL, RC default to the NotDefined weight 1.0 when unset.
        let set = codec::parse("AV:N/AC:L/Au:N/C:N/I:N/A:C").unwrap();
        let score = ScoreCalculator::compute(&set);
        assert_eq!(score.base, 7.8);
        assert_eq!(score.temporal, score.base);
    }

    #[test]
    fn test_environmental_is_zero_when_cdp_and_td_unset() {
        // The NotDefined weight for CDP and TD is 0, so leaving the
        // environmental metrics out collapses the score to 0.
        let set = codec::parse("AV:N/AC:L/Au:N/C:C/I:C/A:C").unwrap();
        let score = ScoreCalculator::compute(&set);
        assert_eq!(score.base, 10.0);
        assert_eq!(score.environmental, 0.0);
    }

    #[test]
    fn test_severity_bands() {
        assert_eq!(Severity::from_score(0.0), Severity::Low);
        assert_eq!(Severity::from_score(3.9), Severity::Low);
        assert_eq!(Severity::from_score(4.0), Severity::Medium);
        assert_eq!(Severity::from_score(6.9), Severity::Medium);
        assert_eq!(Severity::from_score(7.0), Severity::High);
        assert_eq!(Severity::from_score(10.0), Severity::High);
    }

    #[test]
    fn test_breakdown_reports_weights_and_scores() {
        let set = codec::parse("AV:N/AC:L/Au:N/C:N/I:N/A:C/E:F/RL:OF/RC:C").unwrap();
        let breakdown = ScoreCalculator::breakdown(&set);
        assert_eq!(breakdown.base, 7.8);
        assert_eq!(breakdown.temporal, 6.4);
        assert_eq!(breakdown.access_vector, 1.0);
        assert_eq!(breakdown.availability_impact, 0.660);
        assert_eq!(breakdown.exploitability, 0.95);
        // Unset environmental metrics report their defaults.
        assert_eq!(breakdown.collateral_damage_potential, 0.0);
        assert_eq!(breakdown.confidentiality_requirement, 1.0);

        let report = breakdown.to_string();
        assert!(report.contains("base score"));
        assert!(report.contains("7.8"));
        assert!(report.contains("collateral damage potential"));
    }
}
