pub mod files;
pub mod platform;
pub mod settings;

pub use files::{config_file, log_file};
pub use platform::detect_color_scheme;
pub use settings::{load_settings, resolve_theme, Settings, ThemePreference};
