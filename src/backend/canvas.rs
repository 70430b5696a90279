use web_sys::{
    wasm_bindgen::JsCast, CanvasRenderingContext2d, Document, HtmlCanvasElement,
};

use super::utils::get_body;
use crate::{
    background::GlyphPainter,
    config::MatrixOptions,
    error::Error,
    matrix::{Glyph, Viewport},
};

/// Full-viewport canvas fixed behind the page.
///
/// The element is removed from the document when the painter is dropped.
#[derive(Debug)]
pub struct CanvasPainter {
    /// Canvas element.
    inner: HtmlCanvasElement,
    /// Rendering context.
    context: CanvasRenderingContext2d,
    /// Current size in pixels.
    viewport: Viewport,
    glyph_color: String,
    trail_color: String,
    /// Resizing resets the context, so the font is reapplied each time.
    font: String,
}

impl CanvasPainter {
    /// Creates the canvas and appends it to the body.
    pub fn new(document: &Document, options: &MatrixOptions, viewport: Viewport) -> Result<Self, Error> {
        let element = document.create_element("canvas")?;
        element.set_attribute(
            "style",
            &format!(
                "position: fixed; top: 0; left: 0; z-index: -10; pointer-events: none; opacity: {};",
                options.opacity
            ),
        )?;
        let inner = element
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| Error::UnableToRetrieveCanvasContext)?;

        let context = inner
            .get_context("2d")?
            .ok_or(Error::UnableToRetrieveCanvasContext)?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| Error::UnableToRetrieveCanvasContext)?;

        let body = get_body(document)?;
        body.append_child(&inner)?;

        let mut painter = Self {
            inner,
            context,
            viewport,
            glyph_color: options.glyph_color.clone(),
            trail_color: options.trail_color.clone(),
            font: format!("{}px monospace", options.cell_size),
        };
        painter.resize(viewport)?;
        Ok(painter)
    }
}

impl GlyphPainter for CanvasPainter {
    fn resize(&mut self, viewport: Viewport) -> Result<(), Error> {
        self.viewport = viewport;
        self.inner.set_width(viewport.width.max(0.0) as u32);
        self.inner.set_height(viewport.height.max(0.0) as u32);
        self.context.set_font(&self.font);
        Ok(())
    }

    fn fade(&mut self) -> Result<(), Error> {
        self.context.set_fill_style_str(&self.trail_color);
        self.context
            .fill_rect(0.0, 0.0, self.viewport.width, self.viewport.height);
        Ok(())
    }

    fn paint(&mut self, glyph: &Glyph, x: f64, y: f64) -> Result<(), Error> {
        let mut buffer = [0; 4];
        self.context.set_fill_style_str(&self.glyph_color);
        self.context
            .fill_text(glyph.symbol.encode_utf8(&mut buffer), x, y)?;
        Ok(())
    }
}

impl Drop for CanvasPainter {
    fn drop(&mut self) {
        self.inner.remove();
    }
}
