//! Big-Five personality contribution to the fitment score.
//!
//! Each raw trait total (0-40) is banded into a multiplier. Extraversion and
//! agreeableness peak in the 21-30 band and drop back for very high totals;
//! neuroticism is reverse-keyed.

use serde::{Deserialize, Serialize};

use crate::models::candidate::BigFiveTraits;
use crate::scoring::category::Category;

/// Multipliers for the bands `<=10`, `<=20`, `<=30` and `>30`.
#[derive(Debug, Clone, Copy)]
struct TraitBands([f64; 4]);

impl TraitBands {
    fn multiplier(&self, total: f64) -> f64 {
        let [low, mid, high, top] = self.0;
        if total <= 10.0 {
            low
        } else if total <= 20.0 {
            mid
        } else if total <= 30.0 {
            high
        } else {
            top
        }
    }
}

const OPENNESS: TraitBands = TraitBands([0.25, 0.50, 0.75, 1.00]);
const CONSCIENTIOUSNESS: TraitBands = TraitBands([0.25, 0.50, 0.75, 1.00]);
const EXTRAVERSION: TraitBands = TraitBands([0.50, 0.75, 1.00, 0.75]);
const AGREEABLENESS: TraitBands = TraitBands([0.25, 0.50, 1.00, 0.75]);
const NEUROTICISM: TraitBands = TraitBands([1.00, 0.75, 0.50, 0.25]);

/// Per-trait multipliers, serialized with the single-letter keys the
/// reports and the `fitment_scores` table use.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TraitBuckets {
    #[serde(rename = "O")]
    pub openness: f64,
    #[serde(rename = "C")]
    pub conscientiousness: f64,
    #[serde(rename = "E")]
    pub extraversion: f64,
    #[serde(rename = "A")]
    pub agreeableness: f64,
    #[serde(rename = "N")]
    pub neuroticism: f64,
}

impl TraitBuckets {
    pub fn from_traits(traits: &BigFiveTraits) -> Self {
        Self {
            openness: OPENNESS.multiplier(traits.openness),
            conscientiousness: CONSCIENTIOUSNESS.multiplier(traits.conscientiousness),
            extraversion: EXTRAVERSION.multiplier(traits.extraversion),
            agreeableness: AGREEABLENESS.multiplier(traits.agreeableness),
            neuroticism: NEUROTICISM.multiplier(traits.neuroticism),
        }
    }

    pub fn sum(&self) -> f64 {
        self.openness
            + self.conscientiousness
            + self.extraversion
            + self.agreeableness
            + self.neuroticism
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PersonalityScore {
    pub buckets: TraitBuckets,
    pub weight_per_trait: f64,
    pub total: f64,
}

/// Scores the traits on the personality share of the category's 100 points.
pub fn personality_score(traits: &BigFiveTraits, category: Category) -> PersonalityScore {
    let buckets = TraitBuckets::from_traits(traits);
    let weight_per_trait = category.profile().personality_points / 5.0;
    PersonalityScore {
        buckets,
        weight_per_trait,
        total: buckets.sum() * weight_per_trait,
    }
}
