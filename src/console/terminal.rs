use anyhow::{anyhow, Context, Result};
use std::io::{self, BufRead, Write};

use crate::console::{GameInput, GameOutput, Message};
use crate::game::profile::round_percentage;

const SEPARATOR: &str = "------------------------------------------------------------";

#[derive(Debug, Default)]
pub struct TerminalInput;

impl GameInput for TerminalInput {
    fn read_line(&mut self) -> Result<String> {
        let mut line = String::new();
        let bytes_read = io::stdin()
            .lock()
            .read_line(&mut line)
            .context("Could not read from standard input")?;
        if bytes_read == 0 {
            return Err(anyhow!("Standard input was closed"));
        }
        Ok(line)
    }
}

#[derive(Clone, Debug, Default)]
pub struct TerminalOutput;

impl TerminalOutput {
    pub fn interpret_message(&self, message: &Message) -> String {
        use Message::*;
        match message {
            Welcome => format!(
                "{}\n          Welcome to the Ultimate Trivia Challenge!\n     Test your knowledge across exciting topics and win!\n{}",
                SEPARATOR, SEPARATOR
            ),
            NamePrompt => format!("\n{}\nEnter your name:\n{}", SEPARATOR, SEPARATOR),
            NewPlayer(_name) => "New player profile created.".into(),
            ReturningPlayer(name) => format!("Welcome back, {}!", name),
            TopicMenu(topics) => {
                let mut menu = format!("\n{}\nPick a topic:", SEPARATOR);
                for (index, topic) in topics.iter().enumerate() {
                    menu += &format!("\n{}. {}", index + 1, topic);
                }
                menu += &format!("\n{}. Exit\n{}", topics.len() + 1, SEPARATOR);
                menu
            }
            QuizBegins(topic) => format!(
                "\n{}\nStarting quiz on topic: {}\n{}",
                SEPARATOR, topic, SEPARATOR
            ),
            QuestionBegins(question) => {
                let mut text = format!("\n{}", question.prompt);
                for (index, choice) in question.choices.iter().enumerate() {
                    text += &format!("\n{}. {}", index + 1, choice);
                }
                text
            }
            AnswerPrompt(choice_count) => format!(
                "{}\nEnter your answer (1-{}):\n{}",
                SEPARATOR, choice_count, SEPARATOR
            ),
            AnswerCorrect => "Correct!".into(),
            AnswerIncorrect(question) => format!(
                "Wrong! The correct answer was: {}. {}",
                question.correct_choice,
                question.get_correct_answer()
            ),
            QuizResults(result) => format!(
                "\n{}\nQuiz Over!\nYour Score: {}\nAccuracy: {:.2}%\n{}",
                SEPARATOR,
                result.score,
                round_percentage(result.accuracy),
                SEPARATOR
            ),
            ProfileRecap(profile) => {
                format!("\n{}\nYour Profile:\n{}\n{}", SEPARATOR, profile, SEPARATOR)
            }
            ReplayPrompt => "Do you want to play another quiz? (yes/no)".into(),
            InvalidInput => "Invalid input. Please try again:".into(),
            Farewell => format!(
                "\n{}\n      Thank you for playing! Come back soon!\n{}",
                SEPARATOR, SEPARATOR
            ),
        }
    }
}

impl GameOutput for TerminalOutput {
    fn say(&self, message: &Message) {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        if let Err(e) = writeln!(handle, "{}", self.interpret_message(message)) {
            tracing::warn!("Could not write to standard output: {}", e);
        }
        handle.flush().ok();
    }
}

