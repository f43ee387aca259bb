//! Plain-text bodies for the two candidate emails.

use crate::scoring::{FitmentResult, RetentionResult};

pub const CONFIRMATION: &str = "confirmation";
pub const RESULTS: &str = "assessment_results";

#[derive(Debug, Clone, PartialEq)]
pub struct Email {
    /// Stored in `email_logs.email_type`.
    pub kind: &'static str,
    pub subject: String,
    pub body: String,
}

pub fn confirmation(candidate_name: &str, assessment_link: &str) -> Email {
    let body = format!(
        "Hello {candidate_name},\n\n\
         Thank you for submitting your application! We have received and processed your resume.\n\n\
         Application status: preliminary review complete\n\n\
         NEXT STEP: COMPLETE YOUR PERSONALITY ASSESSMENT\n\n\
         To finalize your application, please complete our Big Five personality test:\n\
         - 50 questions about your personality traits\n\
         - Takes approximately 10 minutes\n\
         - No right or wrong answers, just be honest\n\
         - Your final fitment score is calculated automatically\n\n\
         Your personal test link:\n{assessment_link}\n\n\
         The link can be used once. Please keep it until you have finished the test.\n\n\
         What happens after?\n\
         1. Complete the personality test\n\
         2. Your final fitment score is calculated\n\
         3. You receive detailed results by email\n\
         4. Our team reviews your complete profile\n\
         5. We contact you if there's a match (5-7 business days)\n\n\
         This is an automated email from the recruitment system.\n"
    );

    Email {
        kind: CONFIRMATION,
        subject: "Application Received - Complete Your Personality Test".to_string(),
        body,
    }
}

fn fit_label(overall: f64) -> &'static str {
    if overall >= 80.0 {
        "Excellent Fit"
    } else if overall >= 60.0 {
        "Good Fit"
    } else {
        "Developing Profile"
    }
}

pub fn results(candidate_name: &str, fitment: &FitmentResult, retention: &RetentionResult) -> Email {
    let subject = format!(
        "Complete Assessment Results: Fitment {:.0}/100 | {} Retention Risk",
        fitment.overall_fitment_score, retention.retention_risk
    );

    let traits = &fitment.big5_trait_scores;
    let body = format!(
        "Hello {candidate_name},\n\n\
         Thank you for completing your personality assessment!\n\
         Your final fitment score has been calculated from your profile and personality traits.\n\n\
         FINAL FITMENT SCORE: {overall:.0}/100 ({label})\n\
         Category: {category}\n\n\
         SCORE BREAKDOWN:\n\
         • Dataset Score: {dataset:.2} - {dataset_share}\n\
         • Personality Score: {big5:.2} - {big5_share}\n\n\
         PERSONALITY PROFILE:\n\
         • Openness: {o:.0}%\n\
         • Conscientiousness: {c:.0}%\n\
         • Extraversion: {e:.0}%\n\
         • Agreeableness: {a:.0}%\n\
         • Emotional Stability: {n:.0}%\n\n\
         {summary}\n\
         Our team will review your fitment score and profile. If your profile matches our \
         requirements, we'll contact you within 5-7 business days.\n\n\
         This is an automated email from the recruitment system.\n",
        overall = fitment.overall_fitment_score,
        label = fit_label(fitment.overall_fitment_score),
        category = fitment.category,
        dataset = fitment.fitment_score,
        dataset_share = fitment.breakdown.dataset_contribution,
        big5 = fitment.big5_score,
        big5_share = fitment.breakdown.big5_contribution,
        o = traits.openness * 100.0,
        c = traits.conscientiousness * 100.0,
        e = traits.extraversion * 100.0,
        a = traits.agreeableness * 100.0,
        n = traits.neuroticism * 100.0,
        summary = retention.summary(),
    );

    Email {
        kind: RESULTS,
        subject,
        body,
    }
}
