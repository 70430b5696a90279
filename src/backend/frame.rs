use web_sys::{Document, Element};

use super::utils::get_body;
use crate::{compositor::ComposedDocument, error::Error, playground::RenderingSurface};

/// Layout of the preview frame: the right half of the window below the
/// navigation bar. Hidden until the first document is loaded.
const FRAME_STYLE: &str = "position: fixed; top: 4.5em; right: 1.5%; width: 47%; height: 70%; \
                           border: 0; border-radius: 8px; background: white; z-index: 10;";

/// A sandboxed `<iframe>` showing the playground output.
///
/// The frame may run scripts but cannot reach the host page or navigate
/// it. It is removed from the document when dropped, which also stops any
/// script still running inside it.
#[derive(Debug)]
pub struct SandboxedFrame {
    element: Element,
}

impl SandboxedFrame {
    /// Creates the frame and appends it to the body.
    pub fn new(document: &Document) -> Result<Self, Error> {
        let element = document.create_element("iframe")?;
        element.set_attribute("sandbox", "allow-scripts")?;
        element.set_attribute("title", "output")?;
        element.set_attribute("style", &format!("{FRAME_STYLE} display: none;"))?;

        let body = get_body(document)?;
        body.append_child(&element)?;
        Ok(Self { element })
    }
}

impl RenderingSurface for SandboxedFrame {
    fn load(&mut self, document: &ComposedDocument) -> Result<(), Error> {
        self.element.set_attribute("srcdoc", document.as_str())?;
        self.element.set_attribute("style", FRAME_STYLE)?;
        Ok(())
    }
}

impl Drop for SandboxedFrame {
    fn drop(&mut self) {
        self.element.remove();
    }
}
