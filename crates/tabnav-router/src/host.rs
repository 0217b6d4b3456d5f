/// The window or surface that draws the views.
///
/// Called from whichever thread navigated, so implementations only schedule
/// work (e.g. `winit::window::Window::request_redraw`).
pub trait RenderHost: Send + Sync {
    /// Ask for a repaint.
    fn invalidate(&self);

    /// Reflect the current view's title, e.g. in the window title bar.
    /// Called with the manager unlocked, so it may read the manager.
    fn set_title(&self, _title: &str) {}
}

/// Host for headless use and tests.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopHost;

impl RenderHost for NoopHost {
    fn invalidate(&self) {}
}

/// Repaints when dropped, so every exit path of a navigation invalidates.
pub(crate) struct Repaint<'a>(pub(crate) &'a dyn RenderHost);

impl Drop for Repaint<'_> {
    fn drop(&mut self) {
        self.0.invalidate();
    }
}
