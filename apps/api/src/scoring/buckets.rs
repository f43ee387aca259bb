//! Tier tables that map a raw candidate signal onto a 0-100 score.
//!
//! Every table is scanned highest threshold first and the first tier the
//! value reaches wins. Anything below the last threshold (including negative
//! and NaN input) lands on the floor.

use crate::models::candidate::CandidateSignals;

#[derive(Debug, Clone, Copy)]
pub struct BucketTable {
    /// `(threshold, score)` pairs in descending threshold order.
    tiers: &'static [(f64, f64)],
    floor: f64,
}

impl BucketTable {
    pub const fn new(tiers: &'static [(f64, f64)], floor: f64) -> Self {
        Self { tiers, floor }
    }

    pub fn score(&self, value: f64) -> f64 {
        self.tiers
            .iter()
            .find(|(threshold, _)| value >= *threshold)
            .map(|(_, score)| *score)
            .unwrap_or(self.floor)
    }
}

pub const LONGEVITY: BucketTable =
    BucketTable::new(&[(6.0, 100.0), (4.0, 75.0), (1.0, 50.0)], 20.0);
pub const AVERAGE_EXPERIENCE: BucketTable =
    BucketTable::new(&[(3.0, 100.0), (1.8, 75.0), (1.0, 50.0)], 20.0);
pub const WORKSHOPS: BucketTable =
    BucketTable::new(&[(12.73, 100.0), (7.0, 75.0), (3.0, 50.0)], 20.0);
pub const TRAININGS: BucketTable =
    BucketTable::new(&[(12.90, 100.0), (7.0, 75.0), (3.0, 50.0)], 20.0);
pub const PAPERS: BucketTable = BucketTable::new(&[(1.18, 100.0), (0.5, 75.0), (0.2, 50.0)], 0.0);
pub const PATENTS: BucketTable = BucketTable::new(&[(0.04, 100.0)], 0.0);
pub const ACHIEVEMENTS: BucketTable =
    BucketTable::new(&[(7.54, 100.0), (4.0, 75.0), (1.0, 50.0)], 0.0);
pub const BOOKS: BucketTable = BucketTable::new(&[(0.81, 100.0)], 0.0);
pub const DESIGNATIONS: BucketTable = BucketTable::new(&[(0.17, 100.0)], 0.0);

/// Categorical flags score all-or-nothing on an exact 1.
pub fn flag_score(value: u8) -> f64 {
    if value == 1 {
        100.0
    } else {
        0.0
    }
}

/// One weighted term of the dataset score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeightedSignal {
    pub name: &'static str,
    pub bucket_score: f64,
    pub weight: f64,
}

impl WeightedSignal {
    pub fn contribution(&self) -> f64 {
        self.bucket_score * self.weight
    }
}

/// Bucket scores for all thirteen dataset terms, paired with their weights.
/// The weights sum to 1.0, so the weighted sum stays on the 0-100 scale.
pub fn weighted_signals(signals: &CandidateSignals) -> [WeightedSignal; 13] {
    let term = |name, bucket_score, weight| WeightedSignal {
        name,
        bucket_score,
        weight,
    };
    [
        term("longevity", LONGEVITY.score(signals.longevity_years), 0.30),
        term(
            "avg_exp",
            AVERAGE_EXPERIENCE.score(signals.average_experience),
            0.30,
        ),
        term("workshops", WORKSHOPS.score(f64::from(signals.workshops)), 0.045),
        term("trainings", TRAININGS.score(f64::from(signals.trainings)), 0.045),
        term("papers", PAPERS.score(f64::from(signals.total_papers)), 0.05),
        term("patents", PATENTS.score(f64::from(signals.total_patents)), 0.07),
        term(
            "achievements",
            ACHIEVEMENTS.score(f64::from(signals.achievements)),
            0.04,
        ),
        term("books", BOOKS.score(f64::from(signals.books)), 0.02),
        term("state", flag_score(signals.state_jk), 0.02),
        term(
            "jobs",
            DESIGNATIONS.score(f64::from(signals.number_of_unique_designations)),
            0.01,
        ),
        term("ug", flag_score(signals.ug_institute), 0.02),
        term("pg", flag_score(signals.pg_institute), 0.03),
        term("phd", flag_score(signals.phd_institute), 0.05),
    ]
}
