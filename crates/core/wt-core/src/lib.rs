pub mod clock;
pub mod env;
pub mod error;
pub mod i18n;
pub mod settings;
pub mod zones;

pub use error::{AppError, AppResult};
pub use i18n::{Translator, translate};
pub use settings::{SettingsStore, UserSettings};
pub use zones::{TzDatabase, ZoneDatabase, resolve_timezone};
