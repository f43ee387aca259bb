use serde::{Deserialize, Serialize};

use crate::scoring::buckets::BucketTable;

/// Tenure/experience classification that decides how the fitment score is
/// split between resume data and personality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Experienced,
    Inexperienced,
    Fresher,
}

/// Everything that varies by category, in one place so the fitment and
/// retention engines cannot drift apart.
#[derive(Debug, Clone, Copy)]
pub struct CategoryProfile {
    /// Points of the 100-point fitment scale filled by the dataset score.
    pub dataset_points: f64,
    /// Points filled by the Big-Five score. Complements `dataset_points`.
    pub personality_points: f64,
    /// Retention fitment-factor tiers over the overall fitment score.
    pub fitment_factor: BucketTable,
}

const EXPERIENCED: CategoryProfile = CategoryProfile {
    dataset_points: 70.0,
    personality_points: 30.0,
    fitment_factor: BucketTable::new(&[(75.0, 100.0), (60.0, 80.0), (45.0, 60.0)], 40.0),
};

const EARLY_CAREER: CategoryProfile = CategoryProfile {
    dataset_points: 30.0,
    personality_points: 70.0,
    fitment_factor: BucketTable::new(&[(70.0, 100.0), (55.0, 80.0), (40.0, 60.0)], 40.0),
};

impl Category {
    /// Conditions are checked in order; the first match wins.
    pub fn classify(longevity_years: f64, average_experience: f64) -> Self {
        if longevity_years >= 5.0 && average_experience >= 3.0 {
            Category::Experienced
        } else if longevity_years > 1.0 && average_experience > 1.0 {
            Category::Inexperienced
        } else {
            Category::Fresher
        }
    }

    pub fn profile(self) -> &'static CategoryProfile {
        match self {
            Category::Experienced => &EXPERIENCED,
            Category::Inexperienced | Category::Fresher => &EARLY_CAREER,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Experienced => "Experienced",
            Category::Inexperienced => "Inexperienced",
            Category::Fresher => "Fresher",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Experienced" => Ok(Category::Experienced),
            "Inexperienced" => Ok(Category::Inexperienced),
            "Fresher" => Ok(Category::Fresher),
            other => Err(format!("unknown candidate category '{other}'")),
        }
    }
}
