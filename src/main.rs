use clap::Parser;
use std::path::PathBuf;
use std::process;
use tracing::info;

mod console;
mod game;
mod settings;

use crate::console::terminal::{TerminalInput, TerminalOutput};
use crate::game::quiz::definition::QuestionBank;
use crate::game::Game;
use crate::settings::{Settings, DEFAULT_PROFILES_PATH};

#[derive(Parser)]
#[command(name = "trivia-challenge", version, about = "Console trivia quiz")]
struct Cli {
    /// File where player profiles are kept between sessions
    #[arg(long, default_value = DEFAULT_PROFILES_PATH)]
    profiles: PathBuf,

    /// CSV question bank to use instead of the built-in questions
    #[arg(long)]
    questions: Option<PathBuf>,
}

impl From<Cli> for Settings {
    fn from(cli: Cli) -> Self {
        Settings {
            profiles_path: cli.profiles,
            questions_path: cli.questions,
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let settings: Settings = Cli::parse().into();

    let questions = match &settings.questions_path {
        Some(path) => match QuestionBank::open(path) {
            Ok(questions) => questions,
            Err(e) => {
                eprintln!("Error loading questions: {:#}", e);
                process::exit(1);
            }
        },
        None => QuestionBank::default(),
    };
    info!(
        "{} questions across {} topics",
        questions.all_questions().len(),
        questions.topics().len()
    );

    let mut game = Game::new(settings, questions, TerminalInput, TerminalOutput);
    game.run();
}
