use web_sys::{wasm_bindgen::JsValue, Document, HtmlElement, Window};

use crate::{error::Error, matrix::Viewport};

/// Returns the global window.
pub(crate) fn get_window() -> Result<Window, Error> {
    web_sys::window().ok_or(Error::UnableToRetrieveWindow)
}

/// Returns the document of the global window.
pub(crate) fn get_document() -> Result<Document, Error> {
    get_window()?
        .document()
        .ok_or(Error::UnableToRetrieveDocument)
}

/// Returns the body of `document`.
pub(crate) fn get_body(document: &Document) -> Result<HtmlElement, Error> {
    document.body().ok_or(Error::UnableToRetrieveBody)
}

/// Returns the size of the window's layout viewport in pixels.
pub(crate) fn get_viewport(window: &Window) -> Result<Viewport, Error> {
    fn js_val_to_f64(val: JsValue) -> f64 {
        val.as_f64().unwrap_or_default()
    }

    Ok(Viewport::new(
        js_val_to_f64(window.inner_width()?),
        js_val_to_f64(window.inner_height()?),
    ))
}

/// Converts a duration to the millisecond delay `setTimeout` expects.
pub(crate) fn timeout_millis(delay: std::time::Duration) -> i32 {
    i32::try_from(delay.as_millis()).unwrap_or(i32::MAX)
}

/// Returns a seed for the background generator.
pub(crate) fn random_seed() -> u64 {
    (web_sys::js_sys::Math::random() * u64::MAX as f64) as u64
}
