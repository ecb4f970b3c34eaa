//! Settings persistence: a single JSON blob per game key, tolerant of
//! missing or corrupt data.

use crate::config::{Difficulty, MAX_WORD_COUNT};
use crate::wordlist::RANDOM_CATEGORY;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Player-chosen round settings. Doubles as the round-start request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    pub category: String,
    pub difficulty: Difficulty,
    pub count: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            category: RANDOM_CATEGORY.to_string(),
            difficulty: Difficulty::Easy,
            count: 4,
        }
    }
}

/// Directory-backed store keeping one `config_<key>.json` file per game.
pub struct SettingsStore {
    dir: PathBuf,
}

impl SettingsStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        SettingsStore { dir: dir.into() }
    }

    fn path(&self, game_key: &str) -> PathBuf {
        self.dir.join(format!("config_{game_key}.json"))
    }

    /// Load settings for `game_key`, falling back to defaults when the file
    /// is missing or unreadable. A restored count outside the valid range is
    /// clamped here; only round-start input is hard-validated.
    pub fn load(&self, game_key: &str) -> Settings {
        let restored = fs::read_to_string(self.path(game_key))
            .ok()
            .and_then(|text| serde_json::from_str::<Settings>(&text).ok());
        let mut settings = match restored {
            Some(s) => s,
            None => {
                log::debug!("no saved settings for {:?}, using defaults", game_key);
                return Settings::default();
            }
        };
        if settings.count == 0 {
            settings.count = Settings::default().count;
        } else if settings.count > MAX_WORD_COUNT {
            settings.count = MAX_WORD_COUNT;
        }
        settings
    }

    /// Persist settings for `game_key`. Failures are logged, never raised.
    pub fn save(&self, game_key: &str, settings: &Settings) {
        let write = || -> std::io::Result<()> {
            fs::create_dir_all(&self.dir)?;
            let text = serde_json::to_string_pretty(settings).map_err(std::io::Error::other)?;
            fs::write(self.path(game_key), text)
        };
        if let Err(e) = write() {
            log::warn!("could not save settings for {:?}: {}", game_key, e);
        }
    }
}
