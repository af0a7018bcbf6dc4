//! Viewport visibility: a pure "who is active" rule plus a thin wrapper
//! over the browser's `IntersectionObserver`.

use js_sys::Array;
use log::debug;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::content::Section;
use crate::error::SiteError;

/// One entry of an observation batch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Visibility {
    pub id: String,
    pub is_intersecting: bool,
}

impl Visibility {
    pub fn new(id: impl Into<String>, is_intersecting: bool) -> Self {
        Self { id: id.into(), is_intersecting }
    }
}

/// Section that should become active after `batch`, if any.
///
/// Every intersecting entry overwrites the previous one, so the last one
/// in the batch wins. Unknown ids are skipped.
pub fn winning_section(batch: &[Visibility]) -> Option<Section> {
    batch
        .iter()
        .filter(|entry| entry.is_intersecting)
        .filter_map(|entry| Section::from_id(&entry.id))
        .last()
}

/// Owns an `IntersectionObserver` and its callback. Dropping it disconnects.
pub struct VisibilityObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array)>,
}

impl VisibilityObserver {
    pub fn new(threshold: f64, mut on_batch: impl FnMut(Vec<Visibility>) + 'static) -> Result<Self, SiteError> {
        let callback = Closure::wrap(Box::new(move |entries: Array| {
            let batch = entries
                .iter()
                .filter_map(|value| value.dyn_into::<IntersectionObserverEntry>().ok())
                .map(|entry| Visibility::new(entry.target().id(), entry.is_intersecting()))
                .collect();
            on_batch(batch);
        }) as Box<dyn FnMut(Array)>);

        let mut options = IntersectionObserverInit::new();
        #[allow(deprecated)]
        options.threshold(&JsValue::from_f64(threshold));

        let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
            .map_err(|e| SiteError::Observer(SiteError::describe(&e)))?;

        Ok(Self { observer, _callback: callback })
    }

    pub fn observe(&self, element: &Element) {
        self.observer.observe(element);
    }

    pub fn observe_id(&self, document: &Document, id: &str) -> Result<(), SiteError> {
        let element = document
            .get_element_by_id(id)
            .ok_or_else(|| SiteError::MissingElement(id.to_string()))?;
        self.observe(&element);
        Ok(())
    }

    /// Observes every section present in the document, skipping missing ones.
    pub fn observe_sections(&self, document: &Document) {
        for section in Section::ALL {
            if let Err(e) = self.observe_id(document, section.id()) {
                debug!("Not tracking section: {}", e);
            }
        }
    }
}

impl Drop for VisibilityObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_crossing_section_wins() {
        let batch = [Visibility::new("faq", false), Visibility::new("reviews", true)];
        assert_eq!(winning_section(&batch), Some(Section::Reviews));
    }

    #[test]
    fn last_intersecting_entry_in_batch_wins() {
        let batch = [
            Visibility::new("gallery", true),
            Visibility::new("types", true),
            Visibility::new("faq", false),
        ];
        assert_eq!(winning_section(&batch), Some(Section::Types));
    }

    #[test]
    fn exits_only_leave_active_section_alone() {
        let batch = [Visibility::new("home", false), Visibility::new("services", false)];
        assert_eq!(winning_section(&batch), None);
        assert_eq!(winning_section(&[]), None);
    }

    #[test]
    fn unknown_ids_are_ignored() {
        let batch = [Visibility::new("footer", true), Visibility::new("hero-image", true)];
        assert_eq!(winning_section(&batch), Some(Section::Footer));
    }
}
