use std::rc::Rc;

use crate::binding::{ ColorSchemeQuery, PreferenceStore, ViewBinding };
use crate::configs::PageConfig;
use crate::utils::{ ThemeMode, ThemeState };

/// Resolves the initial theme, keeps the root marker, icons and stored
/// preference in step, and flips them when the toggle control is clicked.
pub struct ThemeController<V, S> {
    view: Rc<V>,
    store: Rc<S>,
    config: Rc<PageConfig>,
    bound: bool,
}

impl<V, S> Clone for ThemeController<V, S> {
    fn clone(&self) -> Self {
        Self {
            view: Rc::clone(&self.view),
            store: Rc::clone(&self.store),
            config: Rc::clone(&self.config),
            bound: self.bound,
        }
    }
}

impl<V, S> ThemeController<V, S>
where
    V: ViewBinding + 'static,
    S: PreferenceStore + 'static,
{
    pub fn init<Q: ColorSchemeQuery>(
        view: Rc<V>,
        store: Rc<S>,
        scheme: &Q,
        config: Rc<PageConfig>,
    ) -> Self {
        let mut controller = Self { view, store, config, bound: false };

        let initial = controller.resolve(scheme);
        log::info!("Initial theme: {}", initial.mode.as_str());
        controller.apply(initial);
        controller.bound = controller.bind();
        controller
    }

    /// Stored preference first, then the OS signal. Nothing is written here.
    pub fn resolve<Q: ColorSchemeQuery>(&self, scheme: &Q) -> ThemeState {
        let stored = match self.store.get(&self.config.storage_key) {
            Ok(value) => value.as_deref().and_then(ThemeMode::from_stored),
            Err(e) => {
                log::warn!("Failed to read theme preference: {}", e);
                None
            }
        };

        let mode = stored.unwrap_or_else(|| {
            let prefers_dark = scheme.prefers_dark().unwrap_or_else(|| {
                log::debug!("Colour scheme query unsupported, assuming light");
                false
            });
            ThemeMode::from_dark(prefers_dark)
        });
        ThemeState::new(mode)
    }

    /// Projects `state` onto the page and persists it. Each step is
    /// independent; a failure only skips that step.
    pub fn apply(&self, state: ThemeState) {
        let view = state.project();
        let config = &self.config;

        if let Err(e) = self.view.set_root_marker(&config.dark_class, view.root_dark) {
            log::debug!("Skipping root marker: {}", e);
        }
        if let Err(e) = self.store.set(&config.storage_key, state.mode.as_str()) {
            log::warn!("Failed to persist theme preference: {}", e);
        }
        for (id, hidden) in [
            (&config.sun_icon_id, view.sun_hidden),
            (&config.moon_icon_id, view.moon_hidden),
        ] {
            if let Err(e) = self.view.set_hidden(id, hidden) {
                log::debug!("Skipping icon: {}", e);
            }
        }
    }

    /// Current theme as read from the root marker.
    pub fn current(&self) -> ThemeState {
        ThemeState::new(ThemeMode::from_dark(self.view.root_marker(&self.config.dark_class)))
    }

    pub fn toggle(&self) -> ThemeState {
        let next = self.current().toggled();
        log::info!("Theme toggled to {}", next.mode.as_str());
        self.apply(next);
        next
    }

    /// Whether a click handler was attached to the toggle control.
    pub fn is_bound(&self) -> bool {
        self.bound
    }

    fn bind(&self) -> bool {
        let id = &self.config.theme_toggle_id;
        if !self.view.contains(id) {
            log::debug!("No #{} on page, theme toggle not wired", id);
            return false;
        }

        let controller = self.clone();
        match self.view.on_activate(id, Box::new(move || {
            controller.toggle();
        })) {
            Ok(()) => true,
            Err(e) => {
                log::debug!("Could not wire theme toggle: {}", e);
                false
            }
        }
    }
}
