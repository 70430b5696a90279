//! ## Browser backend
//!
//! Everything that touches the DOM lives here:
//!
//! - [`BrowserScheduler`]: timers on `window.setTimeout`, cancelled on drop.
//! - [`ResizeListener`]: a window `resize` listener, removed on drop.
//! - [`CanvasPainter`]: the background canvas, removed on drop.
//! - [`SandboxedFrame`]: the playground preview `<iframe>`, removed on drop.
//!
//! [`BrowserHost`] hands these to the [`App`](crate::app::App) and
//! [`mount_background`] wires up the background rain.

use std::rc::Rc;

use web_sys::Document;

use crate::{
    app::Host,
    background::{Background, BackgroundRenderer},
    config::MatrixOptions,
    error::Error,
};

/// Background canvas.
mod canvas;
/// Preview frame.
mod frame;
/// Resize listener.
mod listener;
/// Timers.
mod timeout;
/// Backend utilities.
pub(crate) mod utils;

pub use canvas::CanvasPainter;
pub use frame::SandboxedFrame;
pub use listener::ResizeListener;
pub use timeout::{BrowserScheduler, Timeout};

use utils::{get_document, get_viewport, get_window, random_seed};

/// [`Host`] running in the current browser window.
#[derive(Debug, Clone)]
pub struct BrowserHost {
    scheduler: BrowserScheduler,
    document: Document,
}

impl BrowserHost {
    /// Constructs a new [`BrowserHost`].
    pub fn new() -> Result<Self, Error> {
        Ok(Self {
            scheduler: BrowserScheduler::new()?,
            document: get_document()?,
        })
    }
}

impl Host for BrowserHost {
    type Scheduler = BrowserScheduler;
    type Surface = SandboxedFrame;

    fn scheduler(&self) -> BrowserScheduler {
        self.scheduler.clone()
    }

    fn create_surface(&self) -> Result<SandboxedFrame, Error> {
        SandboxedFrame::new(&self.document)
    }
}

/// The background rain mounted on the page.
///
/// Dropping it removes the resize listener, stops the timer and removes
/// the canvas, in that order.
pub struct BrowserBackground {
    _resize: ResizeListener,
    _background: Background<BrowserScheduler, CanvasPainter>,
}

/// Mounts the background rain behind the page.
pub fn mount_background(options: &MatrixOptions) -> Result<BrowserBackground, Error> {
    let window = get_window()?;
    let document = get_document()?;
    let viewport = get_viewport(&window)?;

    let painter = CanvasPainter::new(&document, options, viewport)?;
    let renderer = BackgroundRenderer::new(options, viewport, painter, random_seed());
    let background = Background::mount(BrowserScheduler::new()?, renderer)?;

    let renderer = Rc::downgrade(background.renderer());
    let resize = ResizeListener::new(move |viewport| {
        if let Some(renderer) = renderer.upgrade() {
            renderer.borrow_mut().resize(viewport);
        }
    })?;

    Ok(BrowserBackground {
        _resize: resize,
        _background: background,
    })
}
