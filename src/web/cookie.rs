//! Cookie access helpers.
//!
//! Thin wrapper over `document.cookie` so raw cookie-string handling
//! stays out of the rest of the crate.

use wasm_bindgen::JsCast;
use web_sys::HtmlDocument;

fn html_document() -> Option<HtmlDocument> {
    web_sys::window()?
        .document()?
        .dyn_into::<HtmlDocument>()
        .ok()
}

/// The raw `document.cookie` string, or empty when unavailable.
pub fn read_all() -> String {
    html_document()
        .and_then(|doc| doc.cookie().ok())
        .unwrap_or_default()
}

/// Writes a cookie assignment string (`name=value; attribute; ...`).
///
/// Best effort: a document that refuses the write (sandboxed frame,
/// cookie-less context) is left alone.
pub fn write(assignment: &str) {
    if let Some(doc) = html_document() {
        let _ = doc.set_cookie(assignment);
    }
}
