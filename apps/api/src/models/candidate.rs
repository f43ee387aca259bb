use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::lenient;

/// Data-contract violation in a candidate record. These are caller bugs:
/// records are checked once at the boundary, never inside the scoring core.
#[derive(Debug, Error, PartialEq)]
pub enum SignalError {
    #[error("{field} must be a finite, non-negative number (got {value})")]
    InvalidMeasure { field: &'static str, value: f64 },

    #[error("{field} must be 0 or 1 (got {value})")]
    InvalidFlag { field: &'static str, value: u8 },

    #[error("{trait_name} must be within 0..=40 (got {value})")]
    TraitOutOfRange { trait_name: &'static str, value: f64 },
}

/// Scalar signals the fitment and retention engines read from a candidate.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CandidateSignals {
    /// Average tenure per job, in years.
    #[serde(deserialize_with = "lenient::years")]
    pub longevity_years: f64,
    /// Total professional experience, in years.
    #[serde(deserialize_with = "lenient::years")]
    pub average_experience: f64,
    #[serde(deserialize_with = "lenient::count")]
    pub number_of_unique_designations: u32,
    #[serde(deserialize_with = "lenient::count")]
    pub workshops: u32,
    #[serde(deserialize_with = "lenient::count")]
    pub trainings: u32,
    #[serde(deserialize_with = "lenient::count")]
    pub total_papers: u32,
    #[serde(deserialize_with = "lenient::count")]
    pub total_patents: u32,
    #[serde(deserialize_with = "lenient::count")]
    pub books: u32,
    #[serde(deserialize_with = "lenient::count")]
    pub achievements: u32,
    #[serde(deserialize_with = "lenient::flag")]
    pub state_jk: u8,
    #[serde(deserialize_with = "lenient::flag")]
    pub ug_institute: u8,
    #[serde(deserialize_with = "lenient::flag")]
    pub pg_institute: u8,
    #[serde(deserialize_with = "lenient::flag")]
    pub phd_institute: u8,
}

impl CandidateSignals {
    /// Checks the invariants serde cannot express for hand-built records.
    pub fn validate(&self) -> Result<(), SignalError> {
        for (field, value) in [
            ("longevity_years", self.longevity_years),
            ("average_experience", self.average_experience),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(SignalError::InvalidMeasure { field, value });
            }
        }
        for (field, value) in [
            ("state_jk", self.state_jk),
            ("ug_institute", self.ug_institute),
            ("pg_institute", self.pg_institute),
            ("phd_institute", self.phd_institute),
        ] {
            if value > 1 {
                return Err(SignalError::InvalidFlag { field, value });
            }
        }
        Ok(())
    }

    /// Years per distinct role held. Shared by the stability score and the
    /// tenure risk flags.
    pub fn average_tenure(&self) -> f64 {
        self.longevity_years / f64::from(self.number_of_unique_designations.max(1))
    }
}

/// Raw Big-Five trait totals on the 0..=40 questionnaire scale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BigFiveTraits {
    pub openness: f64,
    pub conscientiousness: f64,
    pub extraversion: f64,
    pub agreeableness: f64,
    pub neuroticism: f64,
}

impl BigFiveTraits {
    /// Placeholder used for the preliminary fitment before the candidate has
    /// taken the questionnaire.
    pub const NEUTRAL: BigFiveTraits = BigFiveTraits {
        openness: 25.0,
        conscientiousness: 25.0,
        extraversion: 25.0,
        agreeableness: 25.0,
        neuroticism: 25.0,
    };

    pub const MAX_TOTAL: f64 = 40.0;

    pub fn validate(&self) -> Result<(), SignalError> {
        for (trait_name, value) in [
            ("openness", self.openness),
            ("conscientiousness", self.conscientiousness),
            ("extraversion", self.extraversion),
            ("agreeableness", self.agreeableness),
            ("neuroticism", self.neuroticism),
        ] {
            if !(0.0..=Self::MAX_TOTAL).contains(&value) {
                return Err(SignalError::TraitOutOfRange { trait_name, value });
            }
        }
        Ok(())
    }
}

fn none_text() -> String {
    "None".to_string()
}

/// Full candidate record as extracted from a resume and confirmed by the
/// candidate. The scoring signals are flattened into the same JSON object.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CandidateProfile {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub summary: String,

    #[serde(default)]
    pub ug_institute_name: String,
    #[serde(default)]
    pub ug_institute_code: String,
    #[serde(default = "none_text")]
    pub pg_institute_name: String,
    #[serde(default = "none_text")]
    pub pg_institute_code: String,
    #[serde(default = "none_text")]
    pub phd_institute_name: String,
    #[serde(default = "none_text")]
    pub phd_institute_code: String,

    #[serde(flatten)]
    pub signals: CandidateSignals,

    #[serde(default)]
    pub workshops_list: Vec<String>,
    #[serde(default)]
    pub trainings_list: Vec<String>,
    #[serde(default)]
    pub research_papers_list: Vec<String>,
    #[serde(default)]
    pub patents_list: Vec<String>,
    #[serde(default)]
    pub books_list: Vec<String>,
    #[serde(default)]
    pub achievements_list: Vec<String>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default, deserialize_with = "lenient::count")]
    pub skills_count: u32,
    #[serde(default)]
    pub projects: Vec<String>,
    #[serde(default, deserialize_with = "lenient::count")]
    pub projects_count: u32,
    #[serde(default)]
    pub best_fit_for: String,
}
