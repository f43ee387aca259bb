pub mod handlers;
pub mod questionnaire;

pub use questionnaire::AnswerError;
