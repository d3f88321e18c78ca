use sidenav_core::Destination;
use sidenav_foundation::Rect;

/// Everything a renderer needs to draw one frame of the shell.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Frame {
    /// Current screen; also the highlighted drawer item.
    pub destination: Destination,
    pub title: &'static str,
    pub drawer_open: bool,
    pub drag_offset: f32,
    pub overlay_opacity: f32,
    /// Drawer surface in window coordinates while the drawer is shown.
    pub drawer_bounds: Option<Rect>,
}

/// Output seam of the shell.
pub trait Renderer {
    type Error;

    fn render(&mut self, frame: &Frame) -> Result<(), Self::Error>;
}
