use dioxus::prelude::*;

/// Colour schemes shipped with the application.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

pub const ALL_MODES: &[ThemeMode] = &[ThemeMode::Light, ThemeMode::Dark];

impl ThemeMode {
    /// Value of the `data-theme` attribute on `<html>`.
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    /// Parse a theme key, falling back to Light.
    pub fn from_key(s: &str) -> Self {
        match s.trim() {
            "dark" => ThemeMode::Dark,
            _ => ThemeMode::Light,
        }
    }
}

/// Apply the configured theme and document language on startup.
///
/// Call this once in the top-level App component.
#[component]
pub fn ThemeSeed(
    #[props(default)] mode: ThemeMode,
    #[props(default = "es".to_string())] lang: String,
) -> Element {
    use_effect(move || {
        document::eval(&seed_script(mode, &lang));
    });

    rsx! {}
}

fn seed_script(mode: ThemeMode, lang: &str) -> String {
    let lang: String = lang
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '-')
        .collect();
    format!(
        r#"
        (function() {{
            document.documentElement.setAttribute('data-theme', '{theme}');
            document.documentElement.setAttribute('lang', '{lang}');
        }})();
        "#,
        theme = mode.as_str(),
    )
}
