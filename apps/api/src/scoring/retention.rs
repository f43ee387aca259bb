//! Retention risk engine.
//!
//! Four independent 0-100 components (stability, personality, engagement,
//! fitment factor) are blended into a composite retention score, which is
//! then classified and annotated with risk flags and recommendations.

use serde::{Deserialize, Serialize};

use crate::models::candidate::{BigFiveTraits, CandidateSignals};
use crate::scoring::buckets::BucketTable;
use crate::scoring::category::Category;
use crate::scoring::round2;

const STABILITY: BucketTable = BucketTable::new(
    &[(4.0, 100.0), (2.5, 80.0), (1.5, 60.0), (1.0, 40.0)],
    20.0,
);

const ENGAGEMENT: BucketTable = BucketTable::new(
    &[(5.0, 100.0), (3.0, 85.0), (2.0, 70.0), (1.0, 55.0)],
    40.0,
);

const STABILITY_WEIGHT: f64 = 0.30;
const PERSONALITY_WEIGHT: f64 = 0.35;
const ENGAGEMENT_WEIGHT: f64 = 0.20;
const FITMENT_FACTOR_WEIGHT: f64 = 0.15;

const SHORT_TENURE_YEARS: f64 = 1.5;
const LOW_FITMENT: f64 = 45.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn from_score(retention_score: f64) -> Self {
        if retention_score >= 70.0 {
            RiskLevel::Low
        } else if retention_score >= 50.0 {
            RiskLevel::Medium
        } else {
            RiskLevel::High
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            RiskLevel::Low => "Low Risk - High retention likelihood",
            RiskLevel::Medium => "Medium Risk - Monitor and support",
            RiskLevel::High => "High Risk - Intervention recommended",
        }
    }

    fn recommendations(self) -> &'static [&'static str] {
        match self {
            RiskLevel::High => &[
                "⚠️ HIGH RETENTION RISK - Immediate intervention recommended",
                "→ Consider structured onboarding and mentorship program",
                "→ Schedule regular check-ins (bi-weekly for first 6 months)",
                "→ Assess role fit and career development opportunities",
            ],
            RiskLevel::Medium => &[
                "⚡ MEDIUM RETENTION RISK - Active monitoring advised",
                "→ Provide clear career progression path",
                "→ Encourage participation in professional development",
                "→ Monthly check-ins to assess satisfaction",
            ],
            RiskLevel::Low => &[
                "✅ LOW RETENTION RISK - Strong retention indicators",
                "→ Leverage for team stability and mentorship roles",
                "→ Consider for long-term projects and leadership development",
            ],
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Qualitative retention warnings. Declaration order is the reporting order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskFlag {
    #[serde(rename = "Job Hopper Pattern")]
    JobHopper,
    #[serde(rename = "Low Professional Development")]
    LowProfessionalDevelopment,
    #[serde(rename = "Low Conscientiousness (Retention Risk)")]
    LowConscientiousness,
    #[serde(rename = "High Emotional Instability")]
    HighEmotionalInstability,
    #[serde(rename = "Low Overall Fitment")]
    LowOverallFitment,
    #[serde(rename = "Short Average Tenure")]
    ShortAverageTenure,
}

impl RiskFlag {
    pub fn label(self) -> &'static str {
        match self {
            RiskFlag::JobHopper => "Job Hopper Pattern",
            RiskFlag::LowProfessionalDevelopment => "Low Professional Development",
            RiskFlag::LowConscientiousness => "Low Conscientiousness (Retention Risk)",
            RiskFlag::HighEmotionalInstability => "High Emotional Instability",
            RiskFlag::LowOverallFitment => "Low Overall Fitment",
            RiskFlag::ShortAverageTenure => "Short Average Tenure",
        }
    }

    /// Advice line for the insights. Short tenure carries none.
    pub fn remediation(self) -> Option<&'static str> {
        match self {
            RiskFlag::JobHopper => {
                Some("→ Address: Frequent job changes - Discuss long-term goals early")
            }
            RiskFlag::LowProfessionalDevelopment => {
                Some("→ Address: Limited development activities - Offer training stipend")
            }
            RiskFlag::LowConscientiousness => {
                Some("→ Address: May need structured environment and clear expectations")
            }
            RiskFlag::HighEmotionalInstability => {
                Some("→ Address: May benefit from wellness programs and stress management")
            }
            RiskFlag::LowOverallFitment => {
                Some("→ Address: Poor role match - Consider alternative positions")
            }
            RiskFlag::ShortAverageTenure => None,
        }
    }
}

impl std::fmt::Display for RiskFlag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ComponentScores {
    pub stability: f64,
    pub personality: f64,
    pub engagement: f64,
    pub fitment_factor: f64,
}

impl ComponentScores {
    pub fn composite(&self) -> f64 {
        self.stability * STABILITY_WEIGHT
            + self.personality * PERSONALITY_WEIGHT
            + self.engagement * ENGAGEMENT_WEIGHT
            + self.fitment_factor * FITMENT_FACTOR_WEIGHT
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RetentionResult {
    pub retention_score: f64,
    pub retention_risk: RiskLevel,
    pub risk_description: String,
    pub component_scores: ComponentScores,
    pub risk_flags: Vec<RiskFlag>,
    pub flag_count: usize,
    pub insights: Vec<String>,
}

pub fn stability_score(signals: &CandidateSignals) -> f64 {
    STABILITY.score(signals.average_tenure())
}

/// Conscientiousness and agreeableness dominate; neuroticism counts inverted.
pub fn personality_retention_score(traits: &BigFiveTraits) -> f64 {
    let max = BigFiveTraits::MAX_TOTAL;
    let conscientiousness = traits.conscientiousness / max * 100.0;
    let agreeableness = traits.agreeableness / max * 100.0;
    let stability = (max - traits.neuroticism) / max * 100.0;
    conscientiousness * 0.50 + agreeableness * 0.35 + stability * 0.15
}

/// Development activity per year of experience, with research output
/// weighted up.
pub fn engagement_score(signals: &CandidateSignals) -> f64 {
    let activity = f64::from(signals.workshops)
        + f64::from(signals.trainings)
        + 2.0 * f64::from(signals.total_papers)
        + 3.0 * f64::from(signals.total_patents)
        + f64::from(signals.achievements);
    ENGAGEMENT.score(activity / signals.average_experience.max(1.0))
}

pub fn fitment_factor(fitment_score: f64, category: Category) -> f64 {
    category.profile().fitment_factor.score(fitment_score)
}

/// Every check runs; any subset may fire. Job-hopper and short-tenure share
/// the tenure test and can both appear.
pub fn identify_risk_flags(
    signals: &CandidateSignals,
    traits: &BigFiveTraits,
    fitment_score: f64,
) -> Vec<RiskFlag> {
    let avg_tenure = signals.average_tenure();
    let checks = [
        (
            RiskFlag::JobHopper,
            signals.number_of_unique_designations >= 4 && avg_tenure < SHORT_TENURE_YEARS,
        ),
        (
            RiskFlag::LowProfessionalDevelopment,
            u64::from(signals.workshops) + u64::from(signals.trainings) < 2,
        ),
        (
            RiskFlag::LowConscientiousness,
            traits.conscientiousness < 20.0,
        ),
        (RiskFlag::HighEmotionalInstability, traits.neuroticism > 30.0),
        (RiskFlag::LowOverallFitment, fitment_score < LOW_FITMENT),
        (RiskFlag::ShortAverageTenure, avg_tenure < SHORT_TENURE_YEARS),
    ];
    checks
        .into_iter()
        .filter_map(|(flag, fired)| fired.then_some(flag))
        .collect()
}

/// Risk banner and general advice, then one line per flag that carries
/// advice, then a priority line keyed off the (rounded) retention score.
pub fn generate_insights(level: RiskLevel, retention_score: f64, flags: &[RiskFlag]) -> Vec<String> {
    let mut insights: Vec<String> = level
        .recommendations()
        .iter()
        .map(|s| s.to_string())
        .collect();

    insights.extend(
        flags
            .iter()
            .filter_map(|f| f.remediation())
            .map(str::to_string),
    );

    let priority = if retention_score < 50.0 {
        "→ Priority: High - Requires immediate attention and support"
    } else if retention_score < 65.0 {
        "→ Priority: Medium - Regular monitoring and engagement needed"
    } else {
        "→ Priority: Low - Standard engagement practices sufficient"
    };
    insights.push(priority.to_string());
    insights
}

/// `fitment_score` is the overall fitment attached to the candidate record
/// (normally the freshly recomputed overall score). It drives both the
/// fitment factor and the low-fitment flag.
pub fn compute_retention(
    signals: &CandidateSignals,
    fitment_score: f64,
    traits: &BigFiveTraits,
    category: Category,
) -> RetentionResult {
    let components = ComponentScores {
        stability: stability_score(signals),
        personality: personality_retention_score(traits),
        engagement: engagement_score(signals),
        fitment_factor: fitment_factor(fitment_score, category),
    };

    let composite = components.composite();
    let retention_risk = RiskLevel::from_score(composite);
    let retention_score = round2(composite);
    let risk_flags = identify_risk_flags(signals, traits, fitment_score);
    let insights = generate_insights(retention_risk, retention_score, &risk_flags);

    RetentionResult {
        retention_score,
        retention_risk,
        risk_description: retention_risk.description().to_string(),
        component_scores: ComponentScores {
            stability: round2(components.stability),
            personality: round2(components.personality),
            engagement: round2(components.engagement),
            fitment_factor: round2(components.fitment_factor),
        },
        flag_count: risk_flags.len(),
        risk_flags,
        insights,
    }
}

impl RetentionResult {
    /// Plain-text report used in notification emails.
    pub fn summary(&self) -> String {
        let rule = "=".repeat(50);
        let c = &self.component_scores;
        let mut out = format!(
            "RETENTION ANALYSIS SUMMARY\n{rule}\n\
             Retention Score: {score}/100\n\
             Risk Level: {risk}\n\
             Risk Flags: {count}\n\n\
             {description}\n\n\
             COMPONENT BREAKDOWN:\n\
             • Job Stability: {stability}/100\n\
             • Personality Fit: {personality}/100\n\
             • Professional Engagement: {engagement}/100\n\
             • Fitment Factor: {factor}/100\n\n\
             RISK FLAGS:\n",
            score = self.retention_score,
            risk = self.retention_risk,
            count = self.flag_count,
            description = self.risk_description,
            stability = c.stability,
            personality = c.personality,
            engagement = c.engagement,
            factor = c.fitment_factor,
        );

        if self.risk_flags.is_empty() {
            out.push_str("  ✓ No significant risk flags identified\n");
        } else {
            for flag in &self.risk_flags {
                out.push_str(&format!("  ⚠ {flag}\n"));
            }
        }

        out.push_str("\nRECOMMENDATIONS:\n");
        for insight in self.insights.iter().take(5) {
            out.push_str(&format!("  {insight}\n"));
        }
        out
    }
}
