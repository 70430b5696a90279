//! ## Background
//!
//! Paints the [`MatrixRain`] behind the page. The renderer is an
//! [`Animation`], so mounting it on a [`Ticker`] keeps it running until the
//! returned [`Background`] is dropped.

use std::{cell::RefCell, rc::Rc, time::Duration};

use rand::{rngs::SmallRng, SeedableRng};

use crate::{
    config::MatrixOptions,
    error::Error,
    matrix::{Glyph, MatrixRain, Viewport},
    timer::{Animation, Scheduler, Ticker},
};

/// A drawing surface for the rain.
pub trait GlyphPainter {
    /// Resizes the surface.
    fn resize(&mut self, viewport: Viewport) -> Result<(), Error>;

    /// Darkens the whole surface a little, leaving a fading trail.
    fn fade(&mut self) -> Result<(), Error>;

    /// Draws `glyph` with its baseline at `(x, y)` in pixels.
    fn paint(&mut self, glyph: &Glyph, x: f64, y: f64) -> Result<(), Error>;
}

/// Steps the rain and paints every tick.
#[derive(Debug)]
pub struct BackgroundRenderer<P> {
    rain: MatrixRain,
    painter: P,
    rng: SmallRng,
    tick: Duration,
}

impl<P: GlyphPainter> BackgroundRenderer<P> {
    /// Constructs a new [`BackgroundRenderer`] covering `viewport`.
    pub fn new(options: &MatrixOptions, viewport: Viewport, painter: P, seed: u64) -> Self {
        Self {
            rain: MatrixRain::new(options, viewport),
            painter,
            rng: SmallRng::seed_from_u64(seed),
            tick: options.tick,
        }
    }

    /// Follows a viewport change.
    pub fn resize(&mut self, viewport: Viewport) {
        tracing::debug!(width = viewport.width, height = viewport.height, "background resized");
        if let Err(e) = self.painter.resize(viewport) {
            tracing::warn!("unable to resize the background: {e}");
        }
        self.rain.resize(viewport);
    }

    /// Returns the rain state.
    pub fn rain(&self) -> &MatrixRain {
        &self.rain
    }

    /// Returns the painter.
    pub fn painter(&self) -> &P {
        &self.painter
    }

    fn paint(&mut self) -> Result<(), Error> {
        self.painter.fade()?;
        let cell_size = self.rain.cell_size();
        for glyph in self.rain.tick(&mut self.rng) {
            let (x, y) = glyph.position(cell_size);
            self.painter.paint(&glyph, x, y)?;
        }
        Ok(())
    }
}

impl<P: GlyphPainter> Animation for BackgroundRenderer<P> {
    fn first_delay(&self) -> Duration {
        self.tick
    }

    fn step(&mut self) -> Option<Duration> {
        if let Err(e) = self.paint() {
            tracing::warn!("unable to paint the background: {e}");
        }
        Some(self.tick)
    }
}

/// A mounted background. Dropping it stops the animation.
pub struct Background<S: Scheduler, P> {
    renderer: Rc<RefCell<BackgroundRenderer<P>>>,
    _ticker: Ticker<S>,
}

impl<S: Scheduler, P: GlyphPainter + 'static> Background<S, P> {
    /// Starts painting `renderer` on `scheduler`.
    pub fn mount(scheduler: S, renderer: BackgroundRenderer<P>) -> Result<Self, Error> {
        let renderer = Rc::new(RefCell::new(renderer));
        let ticker = Ticker::start(scheduler, renderer.clone())?;
        tracing::debug!("background mounted");
        Ok(Self {
            renderer,
            _ticker: ticker,
        })
    }

    /// Returns the shared renderer, e.g. for a resize listener.
    pub fn renderer(&self) -> &Rc<RefCell<BackgroundRenderer<P>>> {
        &self.renderer
    }

    /// Follows a viewport change.
    pub fn resize(&self, viewport: Viewport) {
        self.renderer.borrow_mut().resize(viewport);
    }
}

impl<S: Scheduler, P> Drop for Background<S, P> {
    fn drop(&mut self) {
        tracing::debug!("background unmounted");
    }
}
