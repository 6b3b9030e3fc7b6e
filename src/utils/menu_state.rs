#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

impl MenuState {
    /// The panel's hidden class is the only record of menu state.
    pub fn from_panel_hidden(hidden: bool) -> Self {
        if hidden { MenuState::Closed } else { MenuState::Open }
    }

    pub fn is_open(&self) -> bool {
        *self == MenuState::Open
    }

    pub fn toggled(self) -> Self {
        match self {
            MenuState::Closed => MenuState::Open,
            MenuState::Open => MenuState::Closed,
        }
    }

    pub fn panel_hidden(&self) -> bool {
        !self.is_open()
    }

    pub fn expanded_value(&self) -> &'static str {
        if self.is_open() { "true" } else { "false" }
    }
}
