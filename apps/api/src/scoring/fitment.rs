//! Fitment engine: resume signals plus personality into one 0-100 score.
//!
//! category -> raw dataset score -> category-scaled dataset share
//!          -> personality share -> sum

use serde::{Deserialize, Serialize};

use crate::models::candidate::{BigFiveTraits, CandidateSignals};
use crate::scoring::buckets::weighted_signals;
use crate::scoring::category::Category;
use crate::scoring::personality::{personality_score, TraitBuckets};
use crate::scoring::round2;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FitmentBreakdown {
    pub dataset_contribution: String,
    pub big5_contribution: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FitmentResult {
    pub category: Category,
    pub raw_dataset_score: f64,
    pub fitment_score: f64,
    pub big5_score: f64,
    pub big5_trait_scores: TraitBuckets,
    pub overall_fitment_score: f64,
    /// True while the score still rests on the neutral personality placeholder.
    pub provisional: bool,
    pub breakdown: FitmentBreakdown,
}

/// Weighted sum of the bucketed signals, on a 0-100 scale.
pub fn dataset_score(signals: &CandidateSignals) -> f64 {
    weighted_signals(signals)
        .iter()
        .map(|s| s.contribution())
        .sum()
}

/// Rescales the raw dataset score onto the category's dataset share.
pub fn scale_dataset(raw: f64, category: Category) -> f64 {
    raw / 100.0 * category.profile().dataset_points
}

/// Computes the fitment for one candidate. Without `traits` the neutral
/// placeholder is used and the result is marked provisional.
pub fn compute_fitment(
    signals: &CandidateSignals,
    traits: Option<&BigFiveTraits>,
) -> FitmentResult {
    let category = Category::classify(signals.longevity_years, signals.average_experience);
    let raw = dataset_score(signals);
    let fitment = scale_dataset(raw, category);

    let personality = personality_score(traits.unwrap_or(&BigFiveTraits::NEUTRAL), category);
    let overall = fitment + personality.total;

    let profile = category.profile();
    FitmentResult {
        category,
        raw_dataset_score: round2(raw),
        fitment_score: round2(fitment),
        big5_score: round2(personality.total),
        big5_trait_scores: personality.buckets,
        overall_fitment_score: round2(overall),
        provisional: traits.is_none(),
        breakdown: FitmentBreakdown {
            dataset_contribution: format!(
                "{fitment:.2} ({:.0}% weight)",
                profile.dataset_points
            ),
            big5_contribution: format!(
                "{:.2} ({:.0}% weight)",
                personality.total, profile.personality_points
            ),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strong_experienced() -> CandidateSignals {
        CandidateSignals {
            longevity_years: 6.0,
            average_experience: 4.0,
            number_of_unique_designations: 1,
            workshops: 13,
            trainings: 13,
            total_papers: 2,
            total_patents: 1,
            books: 1,
            achievements: 8,
            state_jk: 1,
            ug_institute: 1,
            pg_institute: 1,
            phd_institute: 1,
        }
    }

    #[test]
    fn test_all_max_signals_with_neutral_personality() {
        let result = compute_fitment(&strong_experienced(), None);
        assert_eq!(result.category, Category::Experienced);
        assert_eq!(result.raw_dataset_score, 100.0);
        assert_eq!(result.fitment_score, 70.0);
        // 0.75 + 0.75 + 1.0 + 1.0 + 0.5 = 4.0 at 6 points per trait
        assert_eq!(result.big5_score, 24.0);
        assert_eq!(result.overall_fitment_score, 94.0);
        assert!(result.provisional);
    }

    #[test]
    fn test_missing_phd_costs_its_weight() {
        let signals = CandidateSignals {
            phd_institute: 0,
            ..strong_experienced()
        };
        let result = compute_fitment(&signals, None);
        assert_eq!(result.raw_dataset_score, 95.0);
        assert_eq!(result.fitment_score, 66.5);
        assert_eq!(result.overall_fitment_score, 90.5);
    }

    #[test]
    fn test_empty_record_hits_floors() {
        // longevity 20*0.3 + avg_exp 20*0.3 + workshops 20*0.045 + trainings 20*0.045
        let raw = dataset_score(&CandidateSignals::default());
        assert!((raw - 13.8).abs() < 1e-9, "raw was {raw}");

        let result = compute_fitment(&CandidateSignals::default(), None);
        assert_eq!(result.category, Category::Fresher);
        assert_eq!(result.fitment_score, 4.14);
        assert_eq!(result.big5_score, 56.0);
    }

    #[test]
    fn test_real_traits_replace_placeholder() {
        let traits = BigFiveTraits {
            openness: 35.0,
            conscientiousness: 35.0,
            extraversion: 25.0,
            agreeableness: 25.0,
            neuroticism: 5.0,
        };
        let result = compute_fitment(&strong_experienced(), Some(&traits));
        assert!(!result.provisional);
        assert_eq!(result.big5_score, 30.0);
        assert_eq!(result.overall_fitment_score, 100.0);
    }

    #[test]
    fn test_scale_caps_by_category() {
        assert_eq!(scale_dataset(100.0, Category::Experienced), 70.0);
        assert_eq!(scale_dataset(100.0, Category::Inexperienced), 30.0);
        assert_eq!(scale_dataset(50.0, Category::Fresher), 15.0);
    }

    #[test]
    fn test_breakdown_strings_name_the_split() {
        let result = compute_fitment(&strong_experienced(), None);
        assert_eq!(result.breakdown.dataset_contribution, "70.00 (70% weight)");
        assert_eq!(result.breakdown.big5_contribution, "24.00 (30% weight)");

        let result = compute_fitment(&CandidateSignals::default(), None);
        assert!(result.breakdown.dataset_contribution.ends_with("(30% weight)"));
        assert!(result.breakdown.big5_contribution.ends_with("(70% weight)"));
    }

    #[test]
    fn test_dataset_score_monotonic_per_signal() {
        let base = CandidateSignals::default();
        let before = dataset_score(&base);
        let bumps = [
            CandidateSignals { longevity_years: 6.0, ..base.clone() },
            CandidateSignals { average_experience: 3.0, ..base.clone() },
            CandidateSignals { workshops: 20, ..base.clone() },
            CandidateSignals { trainings: 20, ..base.clone() },
            CandidateSignals { total_papers: 3, ..base.clone() },
            CandidateSignals { total_patents: 1, ..base.clone() },
            CandidateSignals { books: 1, ..base.clone() },
            CandidateSignals { achievements: 9, ..base.clone() },
            CandidateSignals { state_jk: 1, ..base.clone() },
            CandidateSignals { number_of_unique_designations: 2, ..base.clone() },
            CandidateSignals { ug_institute: 1, ..base.clone() },
            CandidateSignals { pg_institute: 1, ..base.clone() },
            CandidateSignals { phd_institute: 1, ..base.clone() },
        ];
        for bumped in bumps {
            let after = dataset_score(&bumped);
            assert!(after > before, "{bumped:?} did not raise the score");
            assert!(after <= 100.0);
        }
    }

    #[test]
    fn test_overall_never_exceeds_hundred() {
        let best = BigFiveTraits {
            openness: 40.0,
            conscientiousness: 40.0,
            extraversion: 30.0,
            agreeableness: 30.0,
            neuroticism: 0.0,
        };
        for signals in [strong_experienced(), CandidateSignals::default()] {
            let result = compute_fitment(&signals, Some(&best));
            assert!(result.overall_fitment_score <= 100.0);
        }
    }
}
