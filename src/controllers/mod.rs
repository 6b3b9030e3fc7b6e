mod menu;
mod theme;

pub use menu::MenuController;
pub use theme::ThemeController;

#[cfg(target_arch = "wasm32")]
pub use boot::boot;

#[cfg(target_arch = "wasm32")]
mod boot {
    use std::rc::Rc;

    use super::{ MenuController, ThemeController };
    use crate::binding::{ DomView, LocalStorageStore, MediaQueryScheme };
    use crate::configs::PageConfig;
    use crate::error::PageError;

    /// Wires both controllers against the live document. Call once, after
    /// the page has rendered.
    pub fn boot(config: PageConfig) -> Result<(), PageError> {
        config.validate()?;
        let config = Rc::new(config);

        let view = Rc::new(DomView::from_window(config.hidden_class.clone())?);
        let store = Rc::new(LocalStorageStore::from_window());
        let scheme = MediaQueryScheme::from_window(config.dark_media_query.clone());

        let theme = ThemeController::init(Rc::clone(&view), store, &scheme, Rc::clone(&config));
        let menu = MenuController::init(view, config);
        log::info!(
            "Page chrome ready (theme toggle: {}, menu toggle: {})",
            theme.is_bound(),
            menu.is_some()
        );
        Ok(())
    }
}
