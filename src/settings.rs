use std::path::PathBuf;

pub const DEFAULT_PROFILES_PATH: &str = "playerProfiles.txt";

#[derive(Clone, Debug)]
pub struct Settings {
    pub profiles_path: PathBuf,
    pub questions_path: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            profiles_path: PathBuf::from(DEFAULT_PROFILES_PATH),
            questions_path: None,
        }
    }
}
