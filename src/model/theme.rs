pub const THEME_KEY: &str = "portfolio-theme";
pub const THEME_ATTRIBUTE: &str = "data-theme";
pub const THEME_STYLE_ID: &str = "theme-style";
pub const THEME_TOGGLE_ID: &str = "theme-toggle";

pub const THEME_STYLE: &str = r#"
:root[data-theme="light"] { color-scheme: light; --bg: #fbfaf7; --fg: #1d1d1f; --muted: #6b6b70; --accent: #2f5bd3; --surface: #ffffff; }
:root[data-theme="dark"] { color-scheme: dark; --bg: #121214; --fg: #ececef; --muted: #9a9aa2; --accent: #8aa8ff; --surface: #1c1c20; }
body { background: var(--bg); color: var(--fg); transition: background-color 0.25s ease, color 0.25s ease; }
"#;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn from_str(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn toggle_label(self) -> String {
        let next = self.toggled().as_str();
        format!("Switch to {next} theme")
    }

    pub fn pressed(self) -> bool {
        matches!(self, Self::Dark)
    }

    /// Icon shows the theme a click switches to.
    pub fn icon(self) -> &'static str {
        match self {
            Self::Light => "☾",
            Self::Dark => "☀",
        }
    }

    /// Stored preference first, then the OS dark-mode signal, then light.
    /// `system_prefers_dark` is `None` when the media query is unsupported.
    pub fn resolve(stored: Option<&str>, system_prefers_dark: Option<bool>) -> Self {
        stored
            .and_then(Self::from_str)
            .unwrap_or(match system_prefers_dark {
                Some(true) => Self::Dark,
                _ => Self::Light,
            })
    }
}
