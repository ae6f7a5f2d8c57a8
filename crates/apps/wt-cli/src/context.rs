use crate::theme::Theme;
use crate::ui::Table;
use anyhow::Result;
use crossterm::style::Stylize;
use std::io::IsTerminal;
use std::path::Path;
use wt_core::{SettingsStore, Translator, UserSettings, env::get_base_dir};

/// Everything one command invocation works with: the loaded settings, the
/// store they persist to, and how output should look.
pub struct Context {
    /// Settings loaded once at start-up
    pub settings: UserSettings,
    store: SettingsStore,
    /// UI theme, `None` when stdout is not a terminal
    theme: Option<Theme>,
}

impl Context {
    /// Open the context in the user's application directory
    pub fn new() -> Result<Self> {
        let base_dir = get_base_dir()?;
        let theme = std::io::stdout().is_terminal().then(Theme::default);
        Self::open(&base_dir, theme)
    }

    pub fn open(base_dir: &Path, theme: Option<Theme>) -> Result<Self> {
        let store = SettingsStore::open(base_dir)?;
        let settings = store.load();
        log::debug!(
            "Loaded {} tracked cities, language '{}'",
            settings.cities.len(),
            settings.language
        );

        Ok(Self {
            settings,
            store,
            theme,
        })
    }

    /// Persist the current settings
    pub fn save_settings(&self) -> Result<()> {
        self.store.save(&self.settings)?;
        Ok(())
    }

    /// Translator for the current display language
    pub fn translator(&self) -> Translator {
        Translator::new(&self.settings.language)
    }

    /// Empty table styled with the context theme
    pub fn table(&self) -> Table {
        match &self.theme {
            Some(theme) => Table::themed(theme.clone()),
            None => Table::new(),
        }
    }

    pub fn print(&self, message: &str) {
        println!("{}", message);
    }

    /// Errors go to stdout like every other message
    pub fn print_error(&self, message: &str) {
        match &self.theme {
            Some(theme) => println!("{}", message.with(theme.error)),
            None => println!("{}", message),
        }
    }
}
