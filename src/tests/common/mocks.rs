use std::cell::{ Cell, RefCell };
use std::collections::{ HashMap, HashSet };

use crate::binding::{ ColorSchemeQuery, Handler, PreferenceStore, ViewBinding };
use crate::error::PageError;

#[derive(Default)]
struct MockElement {
    hidden: bool,
    attributes: HashMap<String, String>,
}

/// In-memory document: a set of ids, a root class list and click handlers.
pub struct MockView {
    elements: RefCell<HashMap<String, MockElement>>,
    root: RefCell<Option<HashSet<String>>>,
    handlers: RefCell<HashMap<String, Vec<Handler>>>,
}

impl MockView {
    pub fn new(ids: &[&str]) -> Self {
        let elements = ids
            .iter()
            .map(|id| (id.to_string(), MockElement::default()))
            .collect();
        Self {
            elements: RefCell::new(elements),
            root: RefCell::new(Some(HashSet::new())),
            handlers: RefCell::new(HashMap::new()),
        }
    }

    /// The five elements the navbar renders, with the panel hidden.
    pub fn full_page() -> Self {
        let view = Self::new(&["themeToggle", "iconSun", "iconMoon", "menuToggle", "mobileMenu"]);
        view.set_hidden("mobileMenu", true).unwrap();
        view
    }

    pub fn without_root(self) -> Self {
        *self.root.borrow_mut() = None;
        self
    }

    pub fn hidden(&self, id: &str) -> Option<bool> {
        self.elements.borrow().get(id).map(|e| e.hidden)
    }

    pub fn attribute(&self, id: &str, name: &str) -> Option<String> {
        self.elements.borrow().get(id).and_then(|e| e.attributes.get(name).cloned())
    }

    pub fn root_marker_dark(&self) -> bool {
        self.root_marker("dark")
    }

    pub fn listener_count(&self, id: &str) -> usize {
        self.handlers.borrow().get(id).map_or(0, Vec::len)
    }

    pub fn total_listeners(&self) -> usize {
        self.handlers.borrow().values().map(Vec::len).sum()
    }

    /// Runs every handler registered on `id`, like a user click.
    pub fn click(&self, id: &str) {
        let mut taken = self.handlers.borrow_mut().remove(id).unwrap_or_default();
        for handler in taken.iter_mut() {
            handler();
        }
        let mut handlers = self.handlers.borrow_mut();
        let slot = handlers.entry(id.to_string()).or_default();
        taken.append(slot);
        *slot = taken;
    }
}

impl ViewBinding for MockView {
    fn contains(&self, id: &str) -> bool {
        self.elements.borrow().contains_key(id)
    }

    fn is_hidden(&self, id: &str) -> Result<bool, PageError> {
        self.hidden(id).ok_or_else(|| PageError::ElementMissing(id.to_string()))
    }

    fn set_hidden(&self, id: &str, hidden: bool) -> Result<(), PageError> {
        let mut elements = self.elements.borrow_mut();
        let element = elements
            .get_mut(id)
            .ok_or_else(|| PageError::ElementMissing(id.to_string()))?;
        element.hidden = hidden;
        Ok(())
    }

    fn set_attribute(&self, id: &str, name: &str, value: &str) -> Result<(), PageError> {
        let mut elements = self.elements.borrow_mut();
        let element = elements
            .get_mut(id)
            .ok_or_else(|| PageError::ElementMissing(id.to_string()))?;
        element.attributes.insert(name.to_string(), value.to_string());
        Ok(())
    }

    fn root_marker(&self, marker: &str) -> bool {
        self.root.borrow().as_ref().map_or(false, |classes| classes.contains(marker))
    }

    fn set_root_marker(&self, marker: &str, on: bool) -> Result<(), PageError> {
        let mut root = self.root.borrow_mut();
        let classes = root
            .as_mut()
            .ok_or_else(|| PageError::ElementMissing("documentElement".to_string()))?;
        if on {
            classes.insert(marker.to_string());
        } else {
            classes.remove(marker);
        }
        Ok(())
    }

    fn on_activate(&self, id: &str, handler: Handler) -> Result<(), PageError> {
        if !self.contains(id) {
            return Err(PageError::ElementMissing(id.to_string()));
        }
        self.handlers.borrow_mut().entry(id.to_string()).or_default().push(handler);
        Ok(())
    }
}

#[derive(Default)]
pub struct MockStore {
    values: RefCell<HashMap<String, String>>,
    pub fail_reads: Cell<bool>,
    pub fail_writes: Cell<bool>,
    pub writes: Cell<usize>,
}

impl MockStore {
    pub fn with(key: &str, value: &str) -> Self {
        let store = Self::default();
        store.values.borrow_mut().insert(key.to_string(), value.to_string());
        store
    }

    pub fn value(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }
}

impl PreferenceStore for MockStore {
    fn get(&self, key: &str) -> Result<Option<String>, PageError> {
        if self.fail_reads.get() {
            return Err(PageError::Storage("read refused".to_string()));
        }
        Ok(self.value(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), PageError> {
        if self.fail_writes.get() {
            return Err(PageError::Storage("quota exceeded".to_string()));
        }
        self.writes.set(self.writes.get() + 1);
        self.values.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// `None` models a host without `matchMedia`.
pub struct MockScheme(pub Option<bool>);

impl ColorSchemeQuery for MockScheme {
    fn prefers_dark(&self) -> Option<bool> {
        self.0
    }
}
