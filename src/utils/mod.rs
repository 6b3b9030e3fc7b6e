mod menu_state;
mod theme_state;

pub use menu_state::MenuState;
pub use theme_state::{ ThemeMode, ThemeState, ThemeView };
