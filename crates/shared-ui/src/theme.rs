use dioxus::prelude::*;

/// Color modes available in the application.
///
/// Clinical is the light default; Midnight is the dark reading mode.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ThemeMode {
    #[default]
    Clinical,
    Midnight,
}

/// All available modes in display order.
pub const ALL_MODES: &[ThemeMode] = &[ThemeMode::Clinical, ThemeMode::Midnight];

impl ThemeMode {
    /// Internal key used for persistence and the `data-theme` attribute.
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeMode::Clinical => "clinical",
            ThemeMode::Midnight => "midnight",
        }
    }

    /// Human-readable name for display in UI.
    pub fn display_name(&self) -> &'static str {
        match self {
            ThemeMode::Clinical => "Clinical",
            ThemeMode::Midnight => "Midnight",
        }
    }

    /// Parse a persisted key, falling back to Clinical.
    pub fn from_key(s: &str) -> Self {
        match s {
            "midnight" => ThemeMode::Midnight,
            _ => ThemeMode::Clinical,
        }
    }

    /// The mode the toggle switches to from this one.
    pub fn toggled(&self) -> Self {
        match self {
            ThemeMode::Clinical => ThemeMode::Midnight,
            ThemeMode::Midnight => ThemeMode::Clinical,
        }
    }
}

/// Shared theme state provided as context.
///
/// The header toggle reads and writes this signal; changes call
/// [`set_theme`] to apply.
#[derive(Clone, Copy)]
pub struct ThemeState {
    pub mode: Signal<ThemeMode>,
}

impl ThemeState {
    /// Flip between the two modes and apply to the document.
    pub fn toggle(&mut self) {
        let next = self.mode.read().toggled();
        self.mode.set(next);
        set_theme(next.as_str());
    }
}

/// Seed the theme on application startup.
///
/// Reads the persisted mode from a cookie and applies it to the document
/// root. Call this once in the top-level App component.
#[component]
pub fn ThemeSeed() -> Element {
    use_effect(|| {
        document::eval(
            r#"
            (function() {
                var match = document.cookie.match(/(?:^|;\s*)theme=([^;]*)/);
                var theme = match ? match[1] : 'clinical';
                document.documentElement.setAttribute('data-theme', theme);
            })();
            "#,
        );
    });

    rsx! {}
}

/// Set the active theme, persisting to a cookie and updating the document.
///
/// Uses BroadcastChannel to sync across tabs when available.
pub fn set_theme(theme: &str) {
    document::eval(&format!(
        r#"
        (function() {{
            document.cookie = 'theme={theme};path=/;max-age=2592000;SameSite=Lax';
            document.documentElement.setAttribute('data-theme', '{theme}');
            try {{
                var bc = new BroadcastChannel('theme-sync');
                bc.postMessage('{theme}');
                bc.close();
            }} catch(e) {{}}
        }})();
        "#,
    ));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_mode_is_clinical() {
        assert_eq!(ThemeMode::default(), ThemeMode::Clinical);
    }

    #[test]
    fn mode_keys_roundtrip() {
        for mode in ALL_MODES {
            assert_eq!(ThemeMode::from_key(mode.as_str()), *mode);
        }
    }

    #[test]
    fn unknown_keys_fall_back_to_clinical() {
        assert_eq!(ThemeMode::from_key("solarized"), ThemeMode::Clinical);
        assert_eq!(ThemeMode::from_key(""), ThemeMode::Clinical);
    }

    #[test]
    fn toggle_alternates_between_modes() {
        assert_eq!(ThemeMode::Clinical.toggled(), ThemeMode::Midnight);
        assert_eq!(ThemeMode::Midnight.toggled(), ThemeMode::Clinical);
        assert_eq!(ThemeMode::Clinical.toggled().toggled(), ThemeMode::Clinical);
    }

    #[test]
    fn all_modes_list_is_complete() {
        assert_eq!(ALL_MODES.len(), 2);
    }
}
