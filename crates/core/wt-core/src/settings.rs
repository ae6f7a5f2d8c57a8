use crate::env::SETTINGS_FILE;
use crate::error::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

pub const DEFAULT_LANGUAGE: &str = "en";

/// Tracked cities and display language, persisted as `settings.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserSettings {
    #[serde(alias = "Cities")]
    pub cities: Vec<String>,
    #[serde(alias = "Language")]
    pub language: String,
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            cities: Vec::new(),
            language: DEFAULT_LANGUAGE.to_string(),
        }
    }
}

impl UserSettings {
    pub fn contains_city(&self, city: &str) -> bool {
        self.cities.iter().any(|c| c == city)
    }

    /// Appends `city` unless an identical entry exists. Returns whether the list changed.
    pub fn add_city(&mut self, city: &str) -> bool {
        if self.contains_city(city) {
            return false;
        }
        self.cities.push(city.to_string());
        true
    }

    /// Removes the exact entry `city`. Returns whether the list changed.
    pub fn remove_city(&mut self, city: &str) -> bool {
        match self.cities.iter().position(|c| c == city) {
            Some(idx) => {
                self.cities.remove(idx);
                true
            }
            None => false,
        }
    }

    /// The code is stored as given; unknown codes fall back to raw keys at display time.
    pub fn set_language(&mut self, code: &str) {
        self.language = code.to_string();
    }
}

/// Reads and writes the settings document. No locking: last writer wins.
pub struct SettingsStore {
    settings_path: PathBuf,
}

impl SettingsStore {
    /// Opens the store rooted at `base_dir`, creating the directory if needed.
    pub fn open(base_dir: &Path) -> AppResult<Self> {
        fs::create_dir_all(base_dir).map_err(|source| AppError::Io {
            path: base_dir.to_path_buf(),
            source,
        })?;

        Ok(Self {
            settings_path: base_dir.join(SETTINGS_FILE),
        })
    }

    pub fn path(&self) -> &Path {
        &self.settings_path
    }

    /// Loads the settings, falling back to defaults when the file is
    /// missing, unreadable or not a valid settings document.
    pub fn load(&self) -> UserSettings {
        let content = match fs::read_to_string(&self.settings_path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::debug!("No settings at {}, using defaults", self.settings_path.display());
                return UserSettings::default();
            }
            Err(e) => {
                log::warn!(
                    "Failed to read settings at {}: {}",
                    self.settings_path.display(),
                    e
                );
                return UserSettings::default();
            }
        };

        parse_settings(&content).unwrap_or_else(|e| {
            log::warn!(
                "Ignoring corrupt settings at {}: {}",
                self.settings_path.display(),
                e
            );
            UserSettings::default()
        })
    }

    pub fn save(&self, settings: &UserSettings) -> AppResult<()> {
        let content = serde_json::to_string_pretty(settings)?;

        // Atomic write: tempfile in the same directory, then rename over the target
        let parent = self.settings_path.parent().unwrap_or(Path::new("."));
        let temp = tempfile::NamedTempFile::new_in(parent).map_err(|source| AppError::Io {
            path: parent.to_path_buf(),
            source,
        })?;
        fs::write(temp.path(), &content).map_err(AppError::IoGeneric)?;
        temp.persist(&self.settings_path)
            .map_err(|e| AppError::Io {
                path: self.settings_path.clone(),
                source: e.error,
            })?;

        log::debug!("Saved settings to {}", self.settings_path.display());
        Ok(())
    }
}

/// Blank documents and a bare `null` count as "no settings".
fn parse_settings(content: &str) -> Result<UserSettings, serde_json::Error> {
    if content.trim().is_empty() {
        return Ok(UserSettings::default());
    }
    let parsed: Option<UserSettings> = serde_json::from_str(content)?;
    Ok(parsed.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn add_city_rejects_duplicates() {
        let mut settings = UserSettings::default();
        assert!(settings.add_city("Paris"));
        assert!(!settings.add_city("Paris"));
        assert_eq!(settings.cities, vec!["Paris".to_string()]);
    }

    #[test]
    fn add_city_is_case_sensitive() {
        let mut settings = UserSettings::default();
        assert!(settings.add_city("Paris"));
        assert!(settings.add_city("paris"));
        assert_eq!(settings.cities.len(), 2);
    }

    #[test]
    fn remove_missing_city_leaves_list_unchanged() {
        let mut settings = UserSettings {
            cities: vec!["Tokyo".into()],
            language: "en".into(),
        };
        assert!(!settings.remove_city("Paris"));
        assert_eq!(settings.cities, vec!["Tokyo".to_string()]);
    }

    #[test]
    fn remove_preserves_order_of_the_rest() {
        let mut settings = UserSettings {
            cities: vec!["Paris".into(), "Tokyo".into(), "Lima".into()],
            language: "en".into(),
        };
        assert!(settings.remove_city("Tokyo"));
        assert_eq!(settings.cities, vec!["Paris".to_string(), "Lima".to_string()]);
    }

    #[test]
    fn unknown_language_is_stored_verbatim() {
        let mut settings = UserSettings::default();
        settings.set_language("xx");
        assert_eq!(settings.language, "xx");
    }

    #[test]
    fn parse_blank_and_null_documents() {
        assert_eq!(parse_settings("").unwrap(), UserSettings::default());
        assert_eq!(parse_settings("  \n").unwrap(), UserSettings::default());
        assert_eq!(parse_settings("null").unwrap(), UserSettings::default());
    }

    #[test]
    fn parse_fills_missing_fields() {
        let settings = parse_settings(r#"{ "cities": ["Oslo"] }"#).unwrap();
        assert_eq!(settings.cities, vec!["Oslo".to_string()]);
        assert_eq!(settings.language, "en");
    }

    #[test]
    fn parse_accepts_pascal_case_fields() {
        let settings =
            parse_settings(r#"{ "Cities": ["Tashkent"], "Language": "uz" }"#).unwrap();
        assert_eq!(settings.cities, vec!["Tashkent".to_string()]);
        assert_eq!(settings.language, "uz");
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(parse_settings("{ not json").is_err());
        assert!(parse_settings("[1, 2, 3]").is_err());
    }

    #[test]
    fn open_creates_missing_directory() {
        let dir = TempDir::new().unwrap();
        let base = dir.path().join("nested").join("WTApp");
        let store = SettingsStore::open(&base).unwrap();
        assert!(base.is_dir());
        assert_eq!(store.path(), base.join("settings.json"));
    }

    #[test]
    fn save_writes_indented_json() {
        let dir = TempDir::new().unwrap();
        let store = SettingsStore::open(dir.path()).unwrap();
        let settings = UserSettings {
            cities: vec!["Paris".into()],
            language: "ru".into(),
        };
        store.save(&settings).unwrap();

        let raw = fs::read_to_string(store.path()).unwrap();
        assert!(raw.contains('\n'));
        assert!(raw.contains("\"cities\""));
        assert!(raw.contains("\"language\": \"ru\""));
    }

    #[test]
    fn load_corrupt_file_yields_defaults() {
        let dir = TempDir::new().unwrap();
        let store = SettingsStore::open(dir.path()).unwrap();
        fs::write(store.path(), "{{{{").unwrap();
        assert_eq!(store.load(), UserSettings::default());
    }
}
