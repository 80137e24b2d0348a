use anyhow::{anyhow, Error, Result};
use serde::Deserialize;
use std::convert::TryFrom;

#[derive(Deserialize)]
pub struct RawQuestion {
    pub prompt: String,
    pub choice_1: String,
    pub choice_2: String,
    pub choice_3: String,
    pub choice_4: String,
    pub correct_choice: usize,
    pub topic: String,
}

#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct TriviaQuestion {
    pub prompt: String,
    pub choices: Vec<String>,
    pub correct_choice: usize,
    pub topic: String,
}

impl TriviaQuestion {
    pub fn new(prompt: &str, choices: [&str; 4], correct_choice: usize, topic: &str) -> Self {
        TriviaQuestion {
            prompt: prompt.to_owned(),
            choices: choices.iter().map(|c| c.to_string()).collect(),
            correct_choice,
            topic: topic.to_owned(),
        }
    }

    pub fn is_answer_correct(&self, answer: usize) -> bool {
        answer == self.correct_choice
    }

    pub fn get_correct_answer(&self) -> &str {
        self.correct_choice
            .checked_sub(1)
            .and_then(|index| self.choices.get(index))
            .map(|c| c.as_str())
            .unwrap_or("")
    }
}

impl TryFrom<RawQuestion> for TriviaQuestion {
    type Error = Error;

    fn try_from(raw_question: RawQuestion) -> Result<Self> {
        let choices = vec![
            raw_question.choice_1,
            raw_question.choice_2,
            raw_question.choice_3,
            raw_question.choice_4,
        ];

        if raw_question.correct_choice < 1 || raw_question.correct_choice > choices.len() {
            return Err(anyhow!(
                "Correct choice {} is out of range for question `{}` (expected 1-{})",
                raw_question.correct_choice,
                raw_question.prompt,
                choices.len()
            ));
        }

        Ok(TriviaQuestion {
            prompt: raw_question.prompt,
            choices,
            correct_choice: raw_question.correct_choice,
            topic: raw_question.topic,
        })
    }
}
