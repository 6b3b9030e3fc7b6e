#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ThemeMode {
    Dark,
    #[default]
    Light,
}

impl ThemeMode {
    pub fn from_dark(is_dark: bool) -> Self {
        if is_dark { ThemeMode::Dark } else { ThemeMode::Light }
    }

    /// Value written to the preference store.
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeMode::Dark => "dark",
            ThemeMode::Light => "light",
        }
    }

    /// Reads a stored preference. Empty means nothing was stored; any value
    /// other than "dark" counts as light.
    pub fn from_stored(value: &str) -> Option<Self> {
        match value {
            "" => None,
            "dark" => Some(ThemeMode::Dark),
            "light" => Some(ThemeMode::Light),
            other => {
                log::warn!("Unrecognised stored theme {:?}, using light", other);
                Some(ThemeMode::Light)
            }
        }
    }

    pub fn inverse(self) -> Self {
        match self {
            ThemeMode::Dark => ThemeMode::Light,
            ThemeMode::Light => ThemeMode::Dark,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct ThemeState {
    pub mode: ThemeMode,
}

/// What the page should look like for a given theme.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ThemeView {
    pub root_dark: bool,
    pub sun_hidden: bool,
    pub moon_hidden: bool,
}

impl ThemeState {
    pub fn new(mode: ThemeMode) -> Self {
        Self { mode }
    }

    pub fn is_dark(&self) -> bool {
        self.mode == ThemeMode::Dark
    }

    pub fn toggled(self) -> Self {
        Self { mode: self.mode.inverse() }
    }

    /// Exactly one icon is visible: moon in dark mode, sun in light mode.
    pub fn project(&self) -> ThemeView {
        let dark = self.is_dark();
        ThemeView {
            root_dark: dark,
            sun_hidden: dark,
            moon_hidden: !dark,
        }
    }
}
