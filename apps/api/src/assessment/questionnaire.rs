//! The 50-item Big-Five questionnaire (IPIP short form) and its scoring.

use serde::Serialize;
use thiserror::Error;

use crate::models::candidate::BigFiveTraits;

pub const ITEM_COUNT: usize = 50;
const ITEMS_PER_TRAIT: f64 = 10.0;

#[derive(Debug, Error, PartialEq)]
pub enum AnswerError {
    #[error("expected {ITEM_COUNT} answers, got {0}")]
    WrongCount(usize),

    #[error("answer to question {question} must be between 1 and 5 (got {value})")]
    OutOfRange { question: usize, value: u8 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Trait {
    Openness,
    Conscientiousness,
    Extraversion,
    Agreeableness,
    Neuroticism,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Question {
    pub id: u8,
    pub text: &'static str,
    #[serde(rename = "trait")]
    pub trait_: Trait,
    pub reverse: bool,
}

const fn q(id: u8, text: &'static str, trait_: Trait, reverse: bool) -> Question {
    Question {
        id,
        text,
        trait_,
        reverse,
    }
}

use Trait::*;

pub const QUESTIONS: [Question; ITEM_COUNT] = [
    q(1, "I have a vivid imagination", Openness, false),
    q(2, "I am interested in abstract ideas", Openness, false),
    q(3, "I have difficulty understanding abstract ideas", Openness, true),
    q(4, "I have a rich vocabulary", Openness, false),
    q(5, "I enjoy thinking about complex topics", Openness, false),
    q(6, "I am not interested in theoretical discussions", Openness, true),
    q(7, "I enjoy hearing new ideas", Openness, false),
    q(8, "I prefer routine to variety", Openness, true),
    q(9, "I am curious about many different things", Openness, false),
    q(10, "I avoid philosophical discussions", Openness, true),
    q(11, "I am always prepared", Conscientiousness, false),
    q(12, "I pay attention to details", Conscientiousness, false),
    q(13, "I make a mess of things", Conscientiousness, true),
    q(14, "I get chores done right away", Conscientiousness, false),
    q(15, "I often forget to put things back", Conscientiousness, true),
    q(16, "I like order", Conscientiousness, false),
    q(17, "I shirk my duties", Conscientiousness, true),
    q(18, "I follow a schedule", Conscientiousness, false),
    q(19, "I am exacting in my work", Conscientiousness, false),
    q(20, "I leave my belongings around", Conscientiousness, true),
    q(21, "I am the life of the party", Extraversion, false),
    q(22, "I don't talk a lot", Extraversion, true),
    q(23, "I feel comfortable around people", Extraversion, false),
    q(24, "I keep in the background", Extraversion, true),
    q(25, "I start conversations", Extraversion, false),
    q(26, "I have little to say", Extraversion, true),
    q(27, "I talk to a lot of different people at parties", Extraversion, false),
    q(28, "I don't like to draw attention to myself", Extraversion, true),
    q(29, "I don't mind being the center of attention", Extraversion, false),
    q(30, "I am quiet around strangers", Extraversion, true),
    q(31, "I feel others' emotions", Agreeableness, false),
    q(32, "I am not really interested in others", Agreeableness, true),
    q(33, "I make people feel at ease", Agreeableness, false),
    q(34, "I insult people", Agreeableness, true),
    q(35, "I sympathize with others' feelings", Agreeableness, false),
    q(36, "I am not interested in other people's problems", Agreeableness, true),
    q(37, "I have a soft heart", Agreeableness, false),
    q(38, "I take time out for others", Agreeableness, false),
    q(39, "I feel little concern for others", Agreeableness, true),
    q(40, "I make people feel welcome", Agreeableness, false),
    q(41, "I get stressed out easily", Neuroticism, false),
    q(42, "I am relaxed most of the time", Neuroticism, true),
    q(43, "I worry about things", Neuroticism, false),
    q(44, "I seldom feel blue", Neuroticism, true),
    q(45, "I am easily disturbed", Neuroticism, false),
    q(46, "I get upset easily", Neuroticism, false),
    q(47, "I change my mood a lot", Neuroticism, false),
    q(48, "I have frequent mood swings", Neuroticism, false),
    q(49, "I get irritated easily", Neuroticism, false),
    q(50, "I often feel blue", Neuroticism, false),
];

/// Checks an answer sheet: one Likert answer (1..=5) per question, in
/// question order.
pub fn validate_answers(answers: &[u8]) -> Result<(), AnswerError> {
    if answers.len() != ITEM_COUNT {
        return Err(AnswerError::WrongCount(answers.len()));
    }
    for (i, &value) in answers.iter().enumerate() {
        if !(1..=5).contains(&value) {
            return Err(AnswerError::OutOfRange {
                question: i + 1,
                value,
            });
        }
    }
    Ok(())
}

/// Scores an answer sheet into trait totals on the 0-40 scale.
///
/// Reverse-keyed items count `6 - answer`. Each trait's ten items sum to
/// 10..=50, shifted down by 10.
pub fn score_answers(answers: &[u8]) -> Result<BigFiveTraits, AnswerError> {
    validate_answers(answers)?;

    let mut sums = [0u32; 5];
    for (question, &answer) in QUESTIONS.iter().zip(answers) {
        let value = if question.reverse { 6 - answer } else { answer };
        sums[question.trait_ as usize] += u32::from(value);
    }

    let scaled = |t: Trait| f64::from(sums[t as usize]) - ITEMS_PER_TRAIT;
    Ok(BigFiveTraits {
        openness: scaled(Openness),
        conscientiousness: scaled(Conscientiousness),
        extraversion: scaled(Extraversion),
        agreeableness: scaled(Agreeableness),
        neuroticism: scaled(Neuroticism),
    })
}
