//! DOM rendering for the browser build.
//!
//! Element lookups go by the fixed identifiers the page guarantees. A
//! missing element is a page-contract violation; it is logged and the
//! write dropped rather than surfaced to the user.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, HtmlInputElement, HtmlSelectElement};

use super::{Region, Section, ViewSink};

pub(crate) fn document() -> Option<Document> {
    web_sys::window().and_then(|window| window.document())
}

pub(crate) fn element_by_id(id: &str) -> Option<Element> {
    document().and_then(|doc| doc.get_element_by_id(id))
}

/// Current value of an input or select element, empty when absent.
pub(crate) fn field_value(id: &str) -> String {
    let Some(element) = element_by_id(id) else {
        log::warn!("missing form field #{id}");
        return String::new();
    };

    if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
        input.value()
    } else if let Some(select) = element.dyn_ref::<HtmlSelectElement>() {
        select.value()
    } else {
        log::warn!("form field #{id} is not an input");
        String::new()
    }
}

/// Writes controller output into the page by element id.
#[derive(Debug, Clone, Copy, Default)]
pub struct DomView;

impl DomView {
    pub fn new() -> Self {
        Self
    }
}

impl ViewSink for DomView {
    fn set_text(&self, region: Region, text: &str) {
        match element_by_id(region.element_id()) {
            Some(element) => element.set_text_content(Some(text)),
            None => log::warn!("missing display region #{}", region.element_id()),
        }
    }

    fn set_markup(&self, region: Region, markup: &str) {
        match element_by_id(region.element_id()) {
            Some(element) => element.set_inner_html(markup),
            None => log::warn!("missing display region #{}", region.element_id()),
        }
    }

    fn reveal(&self, section: Section) {
        let Some(element) = element_by_id(section.element_id()) else {
            log::warn!("missing section #{}", section.element_id());
            return;
        };

        let Some(html) = element.dyn_ref::<HtmlElement>() else {
            return;
        };
        if let Err(e) = html.style().set_property("display", "block") {
            log::warn!("failed to reveal #{}: {e:?}", section.element_id());
        }
    }
}
