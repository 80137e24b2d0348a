use anyhow::Result;

use crate::game::profile::PlayerProfile;
use crate::game::quiz::definition::TriviaQuestion;
use crate::game::quiz::SessionResult;

#[cfg(test)]
pub mod mock;
pub mod terminal;

#[cfg(test)]
mod tests;

#[derive(Clone, Debug, PartialEq)]
pub enum Message {
    AnswerCorrect,
    AnswerIncorrect(TriviaQuestion),
    AnswerPrompt(usize),
    Farewell,
    InvalidInput,
    NamePrompt,
    NewPlayer(String),
    ProfileRecap(PlayerProfile),
    QuestionBegins(TriviaQuestion),
    QuizBegins(String),
    QuizResults(SessionResult),
    ReplayPrompt,
    ReturningPlayer(String),
    TopicMenu(Vec<String>),
    Welcome,
}

pub trait GameInput {
    /// Blocks until a full line is available. Fails once the input stream is closed.
    fn read_line(&mut self) -> Result<String>;
}

pub trait GameOutput {
    fn say(&self, message: &Message);
}

pub fn read_int_in_range<I: GameInput, O: GameOutput>(
    input: &mut I,
    output: &O,
    min: usize,
    max: usize,
) -> Result<usize> {
    loop {
        let line = input.read_line()?;
        match line.trim().parse::<usize>() {
            Ok(value) if value >= min && value <= max => return Ok(value),
            _ => output.say(&Message::InvalidInput),
        }
    }
}
