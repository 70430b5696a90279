use web_sys::{
    wasm_bindgen::{closure::Closure, JsCast},
    Window,
};

use crate::{
    backend::utils::{get_viewport, get_window},
    error::Error,
    matrix::Viewport,
};

/// Manages a window `resize` listener with automatic cleanup.
///
/// The listener is removed from the window when the struct is dropped.
#[derive(Debug)]
pub struct ResizeListener {
    window: Window,
    closure: Closure<dyn FnMut(web_sys::Event)>,
}

impl ResizeListener {
    /// Calls `callback` with the new viewport whenever the window is resized.
    pub fn new<F>(mut callback: F) -> Result<Self, Error>
    where
        F: FnMut(Viewport) + 'static,
    {
        let window = get_window()?;
        let target = window.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_: web_sys::Event| {
            match get_viewport(&target) {
                Ok(viewport) => callback(viewport),
                Err(e) => tracing::warn!("unable to read the viewport: {e}"),
            }
        });

        window
            .add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref())
            .map_err(Error::from)?;

        Ok(Self { window, closure })
    }
}

impl Drop for ResizeListener {
    fn drop(&mut self) {
        let _ = self
            .window
            .remove_event_listener_with_callback("resize", self.closure.as_ref().unchecked_ref());
    }
}
