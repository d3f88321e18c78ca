use std::convert::Infallible;

use sidenav_app_shell::{Frame, Renderer};

/// Renderer that records every published frame instead of drawing it.
#[derive(Clone, Debug, Default)]
pub struct HeadlessRenderer {
    frames: Vec<Frame>,
}

impl HeadlessRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    pub fn last_frame(&self) -> Option<&Frame> {
        self.frames.last()
    }

    pub fn clear(&mut self) {
        self.frames.clear();
    }
}

impl Renderer for HeadlessRenderer {
    type Error = Infallible;

    fn render(&mut self, frame: &Frame) -> Result<(), Self::Error> {
        self.frames.push(*frame);
        Ok(())
    }
}
