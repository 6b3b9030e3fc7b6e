use std::rc::Rc;

use crate::binding::ViewBinding;
use crate::configs::PageConfig;
use crate::utils::MenuState;

/// Shows and hides the mobile navigation panel.
pub struct MenuController<V> {
    view: Rc<V>,
    config: Rc<PageConfig>,
}

impl<V> Clone for MenuController<V> {
    fn clone(&self) -> Self {
        Self { view: Rc::clone(&self.view), config: Rc::clone(&self.config) }
    }
}

impl<V: ViewBinding + 'static> MenuController<V> {
    /// Returns `None`, and wires nothing, unless both the toggle control and
    /// the panel are on the page.
    pub fn init(view: Rc<V>, config: Rc<PageConfig>) -> Option<Self> {
        if !view.contains(&config.menu_toggle_id) || !view.contains(&config.menu_panel_id) {
            log::debug!("Menu elements missing, menu toggle not wired");
            return None;
        }

        let controller = Self { view, config };
        let handler = controller.clone();
        if let Err(e) = controller.view.on_activate(
            &controller.config.menu_toggle_id,
            Box::new(move || {
                handler.toggle();
            })
        ) {
            log::debug!("Could not wire menu toggle: {}", e);
            return None;
        }
        Some(controller)
    }

    pub fn state(&self) -> MenuState {
        // An unreadable panel is treated as closed.
        let hidden = self.view.is_hidden(&self.config.menu_panel_id).unwrap_or(true);
        MenuState::from_panel_hidden(hidden)
    }

    pub fn toggle(&self) -> MenuState {
        let next = self.state().toggled();
        let config = &self.config;

        if let Err(e) = self.view.set_hidden(&config.menu_panel_id, next.panel_hidden()) {
            log::debug!("Skipping menu panel: {}", e);
        }
        if let Err(e) = self.view.set_attribute(
            &config.menu_toggle_id,
            &config.expanded_attribute,
            next.expanded_value()
        ) {
            log::debug!("Skipping {}: {}", config.expanded_attribute, e);
        }
        next
    }
}
