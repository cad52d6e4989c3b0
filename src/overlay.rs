use crate::constants::HIDDEN_CLASS;
use web_sys as web;

#[inline]
pub fn show(document: &web::Document, id: &str) {
    if let Some(el) = document.get_element_by_id(id) {
        _ = el.class_list().remove_1(HIDDEN_CLASS);
        // fallback for environments without CSS class
        _ = el.set_attribute("style", "");
    }
}

#[inline]
pub fn hide(document: &web::Document, id: &str) {
    if let Some(el) = document.get_element_by_id(id) {
        _ = el.class_list().add_1(HIDDEN_CLASS);
        // fallback
        _ = el.set_attribute("style", "display:none");
    }
}

#[inline]
pub fn set_visible(document: &web::Document, id: &str, visible: bool) {
    if visible {
        show(document, id);
    } else {
        hide(document, id);
    }
}

#[inline]
pub fn is_hidden(document: &web::Document, id: &str) -> bool {
    if let Some(el) = document.get_element_by_id(id) {
        if el.class_list().contains(HIDDEN_CLASS) {
            return true;
        }
        return el
            .get_attribute("style")
            .map(|s| s.contains("display:none"))
            .unwrap_or(false);
    }
    false
}

#[inline]
pub fn toggle(document: &web::Document, id: &str) {
    if is_hidden(document, id) {
        show(document, id);
    } else {
        hide(document, id);
    }
}

/// Show `text` in the message element, hiding it when empty.
pub fn set_message(document: &web::Document, id: &str, text: &str) {
    crate::dom::set_text(document, id, text);
    set_visible(document, id, !text.is_empty());
}
