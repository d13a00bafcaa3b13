//! Thin owner around `IntersectionObserver`.
//!
//! The JS callback closure lives as long as the [`Observer`]; dropping it
//! disconnects the observer, which is what component effects rely on for
//! cleanup.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::error::PageError;

#[derive(Clone, Debug, PartialEq)]
pub struct ObserverOptions {
    pub threshold: f64,
    pub root_margin: Option<String>,
}

impl ObserverOptions {
    pub fn threshold(threshold: f64) -> Self {
        Self { threshold, root_margin: None }
    }

    pub fn with_root_margin(mut self, margin: impl Into<String>) -> Self {
        self.root_margin = Some(margin.into());
        self
    }
}

pub struct Observer {
    inner: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl Observer {
    /// `on_entry` runs once per entry, in the order the browser reports them.
    pub fn new<F>(options: &ObserverOptions, mut on_entry: F) -> Result<Self, PageError>
    where
        F: FnMut(&IntersectionObserverEntry, &IntersectionObserver) + 'static,
    {
        let callback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                on_entry(&entry, &observer);
            }
        }) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(options.threshold));
        if let Some(margin) = &options.root_margin {
            init.set_root_margin(margin);
        }

        let inner = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
            .map_err(PageError::js("creating IntersectionObserver"))?;

        Ok(Self { inner, _callback: callback })
    }

    pub fn observe(&self, target: &Element) {
        self.inner.observe(target);
    }
}

impl Drop for Observer {
    fn drop(&mut self) {
        self.inner.disconnect();
    }
}

/// Fires on the first intersecting entry and never again.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OneShot {
    fired: bool,
}

impl OneShot {
    /// True only for the entry that should act (and then unobserve).
    pub fn fire(&mut self, is_intersecting: bool) -> bool {
        if !is_intersecting || self.fired {
            return false;
        }
        self.fired = true;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ignores_non_intersecting_entries() {
        let mut shot = OneShot::default();
        assert!(!shot.fire(false));
        assert!(shot.fire(true));
    }

    #[test]
    fn test_fires_once() {
        let mut shot = OneShot::default();
        assert!(!shot.fire(false));
        assert!(shot.fire(true));
        assert!(!shot.fire(true));
        assert!(!shot.fire(false));
    }

    #[test]
    fn test_options_builder() {
        let options = ObserverOptions::threshold(0.0).with_root_margin("-90px");
        assert_eq!(options.threshold, 0.0);
        assert_eq!(options.root_margin.as_deref(), Some("-90px"));
    }
}
