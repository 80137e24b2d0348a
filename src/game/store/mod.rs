use anyhow::{anyhow, Context, Result};
use std::fs::File;
use std::path::Path;
use std::str::FromStr;
use tracing::debug;

use crate::game::profile::PlayerProfile;


#[derive(Clone, Debug, Default)]
pub struct ProfileStore {
    profiles: Vec<PlayerProfile>,
}

fn parse_field<T: FromStr>(record: &csv::StringRecord, index: usize, name: &str) -> Result<T>
where
    T::Err: std::error::Error + Send + Sync + 'static,
{
    let field = record
        .get(index)
        .with_context(|| format!("Missing {}", name))?;
    field
        .parse::<T>()
        .with_context(|| format!("Invalid {} `{}`", name, field))
}

fn parse_profile(record: &csv::StringRecord) -> Result<PlayerProfile> {
    let name = record.get(0).context("Missing player name")?;
    let mut profile = PlayerProfile::new(name.to_owned());
    profile.games_played = parse_field(record, 1, "games played")?;
    profile.best_score = parse_field(record, 2, "best score")?;
    profile.avg_score = parse_field(record, 3, "average score")?;
    Ok(profile)
}

impl ProfileStore {
    /// Reads profiles from `source` into the store. A missing file leaves the store untouched.
    /// On a malformed record, profiles read before it are kept and the error is returned.
    pub fn load(&mut self, source: &Path) -> Result<()> {
        if !source.exists() {
            debug!("No profile file at {}", source.display());
            return Ok(());
        }

        let file = File::open(source)
            .with_context(|| format!("Could not open {}", source.display()))?;
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .quoting(false)
            .from_reader(file);

        for record in csv_reader.records() {
            let record = record?;
            let line = record
                .position()
                .map(|p| p.line())
                .ok_or_else(|| anyhow!("Unknown record position"))?;
            let profile = parse_profile(&record).with_context(|| format!("Line {}", line))?;
            self.insert(profile);
        }

        debug!("Loaded {} profiles from {}", self.len(), source.display());
        Ok(())
    }

    /// Overwrites `destination` with every profile, in store order. Badges are not written.
    pub fn save(&self, destination: &Path) -> Result<()> {
        let mut csv_writer = csv::WriterBuilder::new()
            .has_headers(false)
            .quote_style(csv::QuoteStyle::Never)
            .terminator(csv::Terminator::Any(b'\n'))
            .from_path(destination)
            .with_context(|| format!("Could not create {}", destination.display()))?;

        for profile in &self.profiles {
            csv_writer.write_record(&[
                profile.name.clone(),
                profile.games_played.to_string(),
                profile.best_score.to_string(),
                format!("{:?}", profile.avg_score),
            ])?;
        }
        csv_writer.flush()?;

        debug!("Saved {} profiles to {}", self.len(), destination.display());
        Ok(())
    }

    /// Returns the profile for `name` and whether it was just created.
    pub fn get_or_create(&mut self, name: &str) -> (&mut PlayerProfile, bool) {
        let (index, is_new) = match self.profiles.iter().position(|p| p.name == name) {
            Some(index) => (index, false),
            None => {
                self.profiles.push(PlayerProfile::new(name.to_owned()));
                (self.profiles.len() - 1, true)
            }
        };
        (&mut self.profiles[index], is_new)
    }

    pub fn insert(&mut self, profile: PlayerProfile) {
        match self.profiles.iter_mut().find(|p| p.name == profile.name) {
            Some(existing) => *existing = profile,
            None => self.profiles.push(profile),
        }
    }

    pub fn get(&self, name: &str) -> Option<&PlayerProfile> {
        self.profiles.iter().find(|p| p.name == name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut PlayerProfile> {
        self.profiles.iter_mut().find(|p| p.name == name)
    }

    #[cfg(test)]
    pub fn profiles(&self) -> &[PlayerProfile] {
        &self.profiles
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}
