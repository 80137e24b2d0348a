use itertools::Itertools;
use std::collections::BTreeSet;
use std::fmt;


pub const TRIVIA_GENIUS_MIN_SCORE: u32 = 5;
pub const FLAWLESS_VICTORY_ACCURACY: f64 = 100.0;

/// Rounds to two decimals with ties going up, so `{:.2}` prints 3.125 as 3.13.
pub fn round_percentage(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Badge {
    TriviaGenius,
    FlawlessVictory,
}

impl fmt::Display for Badge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Badge::TriviaGenius => write!(f, "Trivia Genius"),
            Badge::FlawlessVictory => write!(f, "Flawless Victory"),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct PlayerProfile {
    pub name: String,
    pub games_played: u32,
    pub best_score: u32,
    pub avg_score: f64,
    pub badges: BTreeSet<Badge>,
}

impl PlayerProfile {
    pub fn new(name: String) -> Self {
        PlayerProfile {
            name,
            games_played: 0,
            best_score: 0,
            avg_score: 0.0,
            badges: BTreeSet::new(),
        }
    }

    /// `accuracy` is a percentage in [0, 100].
    pub fn record_session(&mut self, score: u32, accuracy: f64) {
        self.games_played = self.games_played.saturating_add(1);
        self.best_score = self.best_score.max(score);

        let games_played = f64::from(self.games_played);
        self.avg_score = (self.avg_score * (games_played - 1.0) + accuracy) / games_played;

        // Not scaled to the number of questions in the topic
        if score >= TRIVIA_GENIUS_MIN_SCORE {
            self.badges.insert(Badge::TriviaGenius);
        }
        if accuracy == FLAWLESS_VICTORY_ACCURACY {
            self.badges.insert(Badge::FlawlessVictory);
        }
    }

    #[cfg(test)]
    pub fn has_badge(&self, badge: Badge) -> bool {
        self.badges.contains(&badge)
    }
}

impl fmt::Display for PlayerProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Player Name: {}", self.name)?;
        writeln!(f, "Games Played: {}", self.games_played)?;
        writeln!(f, "Best Score: {}", self.best_score)?;
        writeln!(f, "Average Accuracy: {:.2}%", round_percentage(self.avg_score))?;
        write!(f, "Badges: [{}]", self.badges.iter().join(", "))
    }
}
