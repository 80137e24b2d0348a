use anyhow::{Context, Result};
use itertools::Itertools;
use std::convert::TryFrom;
use std::fs::File;
use std::path::Path;

pub mod question;

pub use question::{RawQuestion, TriviaQuestion};


#[derive(Clone, Debug)]
pub struct QuestionBank {
    questions: Vec<TriviaQuestion>,
}

impl QuestionBank {
    pub fn new(questions: Vec<TriviaQuestion>) -> Self {
        QuestionBank { questions }
    }

    pub fn open(source: &Path) -> Result<QuestionBank> {
        let mut questions = Vec::new();

        let file = File::open(source)
            .with_context(|| format!("Could not open question bank {}", source.display()))?;
        let mut csv_reader = csv::Reader::from_reader(file);
        for (index, question) in csv_reader.deserialize().enumerate() {
            let row = index + 2; // Header is row 1
            let raw_question: RawQuestion =
                question.with_context(|| format!("Invalid question on row {}", row))?;
            let question = TriviaQuestion::try_from(raw_question)
                .with_context(|| format!("Invalid question on row {}", row))?;
            questions.push(question);
        }

        Ok(QuestionBank { questions })
    }

    pub fn all_questions(&self) -> &[TriviaQuestion] {
        &self.questions
    }

    pub fn questions_for_topic<'a>(
        &'a self,
        topic: &str,
    ) -> impl Iterator<Item = &'a TriviaQuestion> + Clone + 'a {
        let topic = topic.to_owned();
        self.questions.iter().filter(move |q| q.topic == topic)
    }

    /// Distinct topics, in the order they first appear in the bank.
    pub fn topics(&self) -> Vec<&str> {
        self.questions
            .iter()
            .map(|q| q.topic.as_str())
            .unique()
            .collect()
    }
}

impl Default for QuestionBank {
    fn default() -> Self {
        QuestionBank::new(vec![
            TriviaQuestion::new(
                "Which is the largest desert in the world?",
                ["Sahara", "Arctic", "Antarctic", "Gobi"],
                3,
                "Geography",
            ),
            TriviaQuestion::new(
                "Who is known as the father of computers?",
                ["Alan Turing", "Charles Babbage", "John Von Neumann", "Bill Gates"],
                2,
                "Technology",
            ),
            TriviaQuestion::new(
                "Which country won the FIFA World Cup in 2018?",
                ["Germany", "Brazil", "France", "Argentina"],
                3,
                "Sports",
            ),
            TriviaQuestion::new(
                "What is the capital of Australia?",
                ["Sydney", "Melbourne", "Canberra", "Perth"],
                3,
                "Geography",
            ),
        ])
    }
}
