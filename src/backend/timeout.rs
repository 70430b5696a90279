use std::time::Duration;

use web_sys::{
    wasm_bindgen::{closure::Closure, JsCast},
    Window,
};

use crate::{
    backend::utils::{get_window, timeout_millis},
    error::Error,
    timer::Scheduler,
};

/// [`Scheduler`] backed by `window.setTimeout`.
#[derive(Debug, Clone)]
pub struct BrowserScheduler {
    window: Window,
}

impl BrowserScheduler {
    /// Constructs a new [`BrowserScheduler`] on the global window.
    pub fn new() -> Result<Self, Error> {
        Ok(Self {
            window: get_window()?,
        })
    }
}

impl Scheduler for BrowserScheduler {
    type Handle = Timeout;

    fn schedule(&self, delay: Duration, callback: Box<dyn FnOnce()>) -> Result<Timeout, Error> {
        let mut callback = Some(callback);
        let closure = Closure::<dyn FnMut()>::new(move || {
            if let Some(callback) = callback.take() {
                callback();
            }
        });
        let id = self
            .window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                closure.as_ref().unchecked_ref(),
                timeout_millis(delay),
            )?;
        Ok(Timeout {
            id,
            window: self.window.clone(),
            _closure: closure,
        })
    }
}

/// A pending `setTimeout` call.
///
/// Clears the timeout and releases its closure when dropped.
#[derive(Debug)]
pub struct Timeout {
    id: i32,
    window: Window,
    _closure: Closure<dyn FnMut()>,
}

impl Drop for Timeout {
    fn drop(&mut self) {
        self.window.clear_timeout_with_handle(self.id);
    }
}
