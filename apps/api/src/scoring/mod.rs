//! Scoring core: fitment and retention risk for a single candidate.
//!
//! Pure, synchronous and stateless. Inputs are validated at the system
//! boundary (see `intake` and `workflow`); nothing in here performs I/O or
//! reads configuration.

pub mod buckets;
pub mod category;
pub mod fitment;
pub mod personality;
pub mod retention;

pub use category::Category;
pub use fitment::{compute_fitment, FitmentResult};
pub use retention::{compute_retention, RetentionResult};

/// Rounds a reported score to two decimals.
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::candidate::{BigFiveTraits, CandidateSignals};
    use crate::scoring::retention::RiskLevel;

    #[test]
    fn test_round2() {
        assert_eq!(round2(66.500000000001), 66.5);
        assert_eq!(round2(4.140000000000001), 4.14);
        assert_eq!(round2(0.0), 0.0);
    }

    #[test]
    fn test_preliminary_then_final_pipeline() {
        let signals = CandidateSignals {
            longevity_years: 2.0,
            average_experience: 3.0,
            number_of_unique_designations: 2,
            workshops: 5,
            trainings: 3,
            total_papers: 2,
            achievements: 3,
            ug_institute: 1,
            ..Default::default()
        };

        let preliminary = compute_fitment(&signals, None);
        assert_eq!(preliminary.category, Category::Inexperienced);
        assert!(preliminary.provisional);

        let traits = BigFiveTraits {
            openness: 32.0,
            conscientiousness: 34.0,
            extraversion: 22.0,
            agreeableness: 27.0,
            neuroticism: 12.0,
        };
        let fitment = compute_fitment(&signals, Some(&traits));
        assert!(!fitment.provisional);
        assert_eq!(fitment.raw_dataset_score, preliminary.raw_dataset_score);
        assert!(fitment.overall_fitment_score > preliminary.overall_fitment_score);

        let retention = compute_retention(
            &signals,
            fitment.overall_fitment_score,
            &traits,
            fitment.category,
        );
        assert!((0.0..=100.0).contains(&retention.retention_score));
        assert_eq!(
            retention.retention_risk,
            RiskLevel::from_score(retention.retention_score)
        );
    }
}
