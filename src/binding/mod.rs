//! Capabilities the controllers are handed instead of reaching for the
//! global document and storage.
//!
//! Everything takes `&self`: the page is single-threaded and handlers need
//! to share the same binding through an `Rc`.

#[cfg(target_arch = "wasm32")]
mod dom;

#[cfg(target_arch = "wasm32")]
pub use dom::{ DomView, LocalStorageStore, MediaQueryScheme };

use crate::error::PageError;

/// Callback invoked when a control is activated.
pub type Handler = Box<dyn FnMut()>;

/// Durable key-value store for the theme preference.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>, PageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), PageError>;
}

/// OS level colour scheme signal. `None` when the host cannot answer.
pub trait ColorSchemeQuery {
    fn prefers_dark(&self) -> Option<bool>;
}

/// Element lookup and the handful of mutations the page needs.
pub trait ViewBinding {
    fn contains(&self, id: &str) -> bool;

    fn is_hidden(&self, id: &str) -> Result<bool, PageError>;
    fn set_hidden(&self, id: &str, hidden: bool) -> Result<(), PageError>;

    fn set_attribute(&self, id: &str, name: &str, value: &str) -> Result<(), PageError>;

    /// Whether the document root carries `marker`.
    fn root_marker(&self, marker: &str) -> bool;
    fn set_root_marker(&self, marker: &str, on: bool) -> Result<(), PageError>;

    fn on_activate(&self, id: &str, handler: Handler) -> Result<(), PageError>;
}
