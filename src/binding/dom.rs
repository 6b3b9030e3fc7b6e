use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{ Document, Element, Storage, Window };

use super::{ ColorSchemeQuery, Handler, PreferenceStore, ViewBinding };
use crate::error::PageError;

/// `ViewBinding` over the live document. Hidden state is class based.
pub struct DomView {
    document: Document,
    hidden_class: String,
}

impl DomView {
    pub fn new(document: Document, hidden_class: impl Into<String>) -> Self {
        Self { document, hidden_class: hidden_class.into() }
    }

    pub fn from_window(hidden_class: impl Into<String>) -> Result<Self, PageError> {
        let document = window()?
            .document()
            .ok_or_else(|| PageError::ElementMissing("document".to_string()))?;
        Ok(Self::new(document, hidden_class))
    }

    fn element(&self, id: &str) -> Result<Element, PageError> {
        self.document
            .get_element_by_id(id)
            .ok_or_else(|| PageError::ElementMissing(id.to_string()))
    }

    fn root(&self) -> Result<Element, PageError> {
        self.document
            .document_element()
            .ok_or_else(|| PageError::ElementMissing("documentElement".to_string()))
    }
}

impl ViewBinding for DomView {
    fn contains(&self, id: &str) -> bool {
        self.document.get_element_by_id(id).is_some()
    }

    fn is_hidden(&self, id: &str) -> Result<bool, PageError> {
        Ok(self.element(id)?.class_list().contains(&self.hidden_class))
    }

    fn set_hidden(&self, id: &str, hidden: bool) -> Result<(), PageError> {
        self.element(id)?
            .class_list()
            .toggle_with_force(&self.hidden_class, hidden)?;
        Ok(())
    }

    fn set_attribute(&self, id: &str, name: &str, value: &str) -> Result<(), PageError> {
        self.element(id)?.set_attribute(name, value)?;
        Ok(())
    }

    fn root_marker(&self, marker: &str) -> bool {
        self.root().map(|root| root.class_list().contains(marker)).unwrap_or(false)
    }

    fn set_root_marker(&self, marker: &str, on: bool) -> Result<(), PageError> {
        self.root()?.class_list().toggle_with_force(marker, on)?;
        Ok(())
    }

    fn on_activate(&self, id: &str, handler: Handler) -> Result<(), PageError> {
        let element = self.element(id)?;
        let callback = Closure::wrap(handler);
        element.add_event_listener_with_callback("click", callback.as_ref().unchecked_ref())?;
        // Listeners live as long as the page.
        callback.forget();
        Ok(())
    }
}

/// `PreferenceStore` backed by `window.localStorage`. When storage is
/// unavailable reads come back empty and writes fail.
pub struct LocalStorageStore {
    storage: Option<Storage>,
}

impl LocalStorageStore {
    pub fn from_window() -> Self {
        let storage = match window().and_then(|w| w.local_storage().map_err(PageError::from)) {
            Ok(storage) => storage,
            Err(e) => {
                log::warn!("localStorage unavailable: {}", e);
                None
            }
        };
        Self { storage }
    }

    fn storage(&self) -> Result<&Storage, PageError> {
        self.storage
            .as_ref()
            .ok_or_else(|| PageError::Storage("localStorage unavailable".to_string()))
    }
}

impl PreferenceStore for LocalStorageStore {
    fn get(&self, key: &str) -> Result<Option<String>, PageError> {
        match &self.storage {
            Some(storage) => storage.get_item(key).map_err(|e| PageError::Storage(format!("{:?}", e))),
            None => Ok(None),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), PageError> {
        self.storage()?
            .set_item(key, value)
            .map_err(|e| PageError::Storage(format!("{:?}", e)))
    }
}

/// `ColorSchemeQuery` answered by `window.matchMedia`.
pub struct MediaQueryScheme {
    window: Option<Window>,
    query: String,
}

impl MediaQueryScheme {
    pub fn from_window(query: impl Into<String>) -> Self {
        Self { window: web_sys::window(), query: query.into() }
    }
}

impl ColorSchemeQuery for MediaQueryScheme {
    fn prefers_dark(&self) -> Option<bool> {
        match self.window.as_ref()?.match_media(&self.query) {
            Ok(Some(list)) => Some(list.matches()),
            _ => None,
        }
    }
}

fn window() -> Result<Window, PageError> {
    web_sys::window().ok_or_else(|| PageError::Script("no global window".to_string()))
}
