use anyhow::{Context, Result};
use tracing::{debug, info};

pub mod profile;
pub mod quiz;
pub mod store;

use crate::console::{read_int_in_range, GameInput, GameOutput, Message};
use crate::game::quiz::definition::QuestionBank;
use crate::game::quiz::QuizSession;
use crate::game::store::ProfileStore;
use crate::settings::Settings;


#[derive(Clone, Debug, Eq, PartialEq)]
enum Phase {
    Login,
    TopicMenu,
    InQuiz(String),
    ProfileDisplay,
    ReplayPrompt,
    Exit,
}

pub struct Game<I, O> {
    current_phase: Phase,
    settings: Settings,
    questions: QuestionBank,
    profiles: ProfileStore,
    player: Option<String>,
    input: I,
    output: O,
}

impl<I: GameInput, O: GameOutput> Game<I, O> {
    pub fn new(settings: Settings, questions: QuestionBank, input: I, output: O) -> Self {
        let mut profiles = ProfileStore::default();
        if let Err(e) = profiles.load(&settings.profiles_path) {
            eprintln!("Error loading player profiles: {:#}", e);
        }
        if profiles.is_empty() {
            debug!("No saved profiles, every player will be new");
        }
        Game {
            current_phase: Phase::Login,
            settings,
            questions,
            profiles,
            player: None,
            input,
            output,
        }
    }

    #[cfg(test)]
    pub fn get_profiles(&self) -> &ProfileStore {
        &self.profiles
    }

    fn set_current_phase(&mut self, phase: Phase) {
        debug!("Entering game phase: {:?}", phase);
        self.current_phase = phase;
    }

    /// Plays until the player exits or input runs out, then saves profiles.
    pub fn run(&mut self) {
        self.output.say(&Message::Welcome);

        while self.current_phase != Phase::Exit {
            if let Err(e) = self.advance() {
                info!("Ending game early: {:#}", e);
                self.set_current_phase(Phase::Exit);
            }
        }

        self.shutdown();
    }

    fn advance(&mut self) -> Result<()> {
        match self.current_phase.clone() {
            Phase::Login => {
                self.login()?;
                self.set_current_phase(Phase::TopicMenu);
            }
            Phase::TopicMenu => {
                let topics: Vec<String> = self
                    .questions
                    .topics()
                    .into_iter()
                    .map(|t| t.to_owned())
                    .collect();
                let exit_choice = topics.len() + 1;
                self.output.say(&Message::TopicMenu(topics.clone()));
                let choice = read_int_in_range(&mut self.input, &self.output, 1, exit_choice)?;
                if choice == exit_choice {
                    self.set_current_phase(Phase::Exit);
                } else {
                    self.set_current_phase(Phase::InQuiz(topics[choice - 1].clone()));
                }
            }
            Phase::InQuiz(topic) => {
                self.output.say(&Message::QuizBegins(topic.clone()));
                let player = self.player.as_deref().context("No player is logged in")?;
                let profile = self
                    .profiles
                    .get_mut(player)
                    .context("Player profile not found")?;
                let mut session = QuizSession::new(&topic, &self.questions);
                let result = session.run(&mut self.input, &self.output, profile)?;
                info!(
                    "{} scored {}/{} on {}",
                    player, result.score, result.total_questions, topic
                );
                self.set_current_phase(Phase::ProfileDisplay);
            }
            Phase::ProfileDisplay => {
                let player = self.player.as_deref().context("No player is logged in")?;
                let profile = self
                    .profiles
                    .get(player)
                    .context("Player profile not found")?;
                self.output.say(&Message::ProfileRecap(profile.clone()));
                self.set_current_phase(Phase::ReplayPrompt);
            }
            Phase::ReplayPrompt => {
                self.output.say(&Message::ReplayPrompt);
                let response = self.input.read_line()?;
                if response.trim().eq_ignore_ascii_case("yes") {
                    self.set_current_phase(Phase::TopicMenu);
                } else {
                    self.set_current_phase(Phase::Exit);
                }
            }
            Phase::Exit => (),
        }
        Ok(())
    }

    fn login(&mut self) -> Result<()> {
        self.output.say(&Message::NamePrompt);
        let name = self.input.read_line()?.trim().to_owned();
        let (_profile, is_new) = self.profiles.get_or_create(&name);
        if is_new {
            self.output.say(&Message::NewPlayer(name.clone()));
        } else {
            self.output.say(&Message::ReturningPlayer(name.clone()));
        }
        self.player = Some(name);
        Ok(())
    }

    fn shutdown(&mut self) {
        if let Err(e) = self.profiles.save(&self.settings.profiles_path) {
            eprintln!("Error saving player profiles: {:#}", e);
        }
        self.output.say(&Message::Farewell);
    }
}
