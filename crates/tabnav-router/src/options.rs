#[derive(Clone, Copy, Debug)]
pub struct ManagerOptions {
    /// Push the current view's title to the host whenever it is read.
    pub sync_window_title: bool,
}

impl Default for ManagerOptions {
    fn default() -> Self {
        Self {
            sync_window_title: true,
        }
    }
}
