use serde_json::{json, Map, Value};
use tracing::{info, warn};

use crate::intake::prompts::RESUME_EXTRACT_PROMPT;
use crate::intake::IntakeError;
use crate::llm_client::prompts::JSON_ONLY_SYSTEM;
use crate::llm_client::LlmClient;
use crate::models::candidate::CandidateProfile;

/// Value substituted for every field the model left out or set to null.
fn field_defaults() -> Map<String, Value> {
    let defaults = json!({
        "name": "", "email": "", "phone": "", "address": "", "summary": "",
        "ug_institute_name": "", "ug_institute_code": "",
        "pg_institute_name": "None", "pg_institute_code": "None",
        "phd_institute_name": "None", "phd_institute_code": "None",
        "longevity_years": 0.0, "average_experience": 0.0,
        "number_of_unique_designations": 0,
        "workshops": 0, "trainings": 0, "total_papers": 0, "total_patents": 0,
        "books": 0, "achievements": 0,
        "state_jk": 0, "ug_institute": 0, "pg_institute": 0, "phd_institute": 0,
        "workshops_list": [], "trainings_list": [], "research_papers_list": [],
        "patents_list": [], "books_list": [], "achievements_list": [],
        "skills": [], "skills_count": 0, "projects": [], "projects_count": 0,
        "best_fit_for": ""
    });
    match defaults {
        Value::Object(map) => map,
        _ => Map::new(),
    }
}

/// Fills missing or null keys with their defaults. Unknown keys are kept.
pub fn apply_defaults(raw: Value) -> Result<Map<String, Value>, IntakeError> {
    let Value::Object(mut fields) = raw else {
        return Err(IntakeError::Malformed(
            "expected a JSON object at the top level".to_string(),
        ));
    };

    for (key, default) in field_defaults() {
        match fields.get(&key) {
            None | Some(Value::Null) => {
                fields.insert(key, default);
            }
            Some(_) => {}
        }
    }
    Ok(fields)
}

/// Turns raw model output into a validated profile.
pub fn profile_from_output(raw: Value) -> Result<CandidateProfile, IntakeError> {
    let fields = apply_defaults(raw)?;
    let profile: CandidateProfile = serde_json::from_value(Value::Object(fields))
        .map_err(|e| IntakeError::Malformed(e.to_string()))?;
    profile.signals.validate()?;

    if profile.email.trim().is_empty() {
        warn!("Extracted profile for '{}' has no email address", profile.name);
    }
    Ok(profile)
}

/// Runs the resume text through the extraction model.
pub async fn extract_profile(
    llm: &LlmClient,
    resume_text: &str,
) -> Result<CandidateProfile, IntakeError> {
    let prompt = RESUME_EXTRACT_PROMPT.replace("{resume_text}", resume_text);
    let raw: Value = llm.call_json(&prompt, JSON_ONLY_SYSTEM).await?;
    let profile = profile_from_output(raw)?;

    info!(
        "Extracted profile for '{}' ({} designations, {:.1} years)",
        profile.name,
        profile.signals.number_of_unique_designations,
        profile.signals.average_experience
    );
    Ok(profile)
}
