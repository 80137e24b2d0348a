use anyhow::Result;
use tracing::debug;

use self::definition::*;
use crate::console::{read_int_in_range, GameInput, GameOutput, Message};
use crate::game::profile::PlayerProfile;

pub mod definition;


#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum SessionState {
    NotStarted,
    AskingQuestion(usize),
    Scored,
    Done,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SessionResult {
    pub topic: String,
    pub score: u32,
    pub total_questions: u32,
    pub correct_answers: u32,
    pub incorrect_answers: u32,
    pub accuracy: f64,
}

pub fn compute_accuracy(correct_answers: u32, total_questions: u32) -> f64 {
    if total_questions == 0 {
        0.0
    } else {
        f64::from(correct_answers) * 100.0 / f64::from(total_questions)
    }
}

/// One pass over the questions of a single topic.
pub struct QuizSession<'a> {
    topic: String,
    questions: Vec<&'a TriviaQuestion>,
    state: SessionState,
    score: u32,
    total_questions: u32,
    correct_answers: u32,
    incorrect_answers: u32,
}

impl<'a> QuizSession<'a> {
    pub fn new(topic: &str, bank: &'a QuestionBank) -> Self {
        QuizSession {
            topic: topic.to_owned(),
            questions: bank.questions_for_topic(topic).collect(),
            state: SessionState::NotStarted,
            score: 0,
            total_questions: 0,
            correct_answers: 0,
            incorrect_answers: 0,
        }
    }

    pub fn is_over(&self) -> bool {
        self.state == SessionState::Done
    }

    /// Asks every question, then records the outcome on `profile`.
    /// Only fails if `input` is closed, in which case `profile` is left untouched.
    pub fn run<I: GameInput, O: GameOutput>(
        &mut self,
        input: &mut I,
        output: &O,
        profile: &mut PlayerProfile,
    ) -> Result<SessionResult> {
        while !self.is_over() {
            self.advance(input, output, profile)?;
        }
        Ok(self.result())
    }

    fn set_state(&mut self, state: SessionState) {
        debug!("Quiz session on {}: {:?}", self.topic, state);
        self.state = state;
    }

    fn advance<I: GameInput, O: GameOutput>(
        &mut self,
        input: &mut I,
        output: &O,
        profile: &mut PlayerProfile,
    ) -> Result<()> {
        match self.state {
            SessionState::NotStarted => {
                if self.questions.is_empty() {
                    self.set_state(SessionState::Scored);
                } else {
                    self.set_state(SessionState::AskingQuestion(0));
                }
            }
            SessionState::AskingQuestion(index) => {
                self.ask_question(index, input, output)?;
                if index + 1 < self.questions.len() {
                    self.set_state(SessionState::AskingQuestion(index + 1));
                } else {
                    self.set_state(SessionState::Scored);
                }
            }
            SessionState::Scored => {
                let result = self.result();
                output.say(&Message::QuizResults(result.clone()));
                profile.record_session(result.score, result.accuracy);
                self.set_state(SessionState::Done);
            }
            SessionState::Done => (),
        }
        Ok(())
    }

    fn ask_question<I: GameInput, O: GameOutput>(
        &mut self,
        index: usize,
        input: &mut I,
        output: &O,
    ) -> Result<()> {
        let question = self.questions[index];
        let choice_count = question.choices.len();
        output.say(&Message::QuestionBegins(question.clone()));
        output.say(&Message::AnswerPrompt(choice_count));

        let answer = read_int_in_range(input, output, 1, choice_count)?;

        self.total_questions += 1;
        if question.is_answer_correct(answer) {
            output.say(&Message::AnswerCorrect);
            self.score += 1;
            self.correct_answers += 1;
        } else {
            output.say(&Message::AnswerIncorrect(question.clone()));
            self.incorrect_answers += 1;
        }
        Ok(())
    }

    pub fn result(&self) -> SessionResult {
        SessionResult {
            topic: self.topic.clone(),
            score: self.score,
            total_questions: self.total_questions,
            correct_answers: self.correct_answers,
            incorrect_answers: self.incorrect_answers,
            accuracy: compute_accuracy(self.correct_answers, self.total_questions),
        }
    }
}
