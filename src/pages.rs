//! Page navigation for the simulator window.
//!
//! Press `Y` to toggle between the watch face and the debug page. Returning to
//! the face invalidates the orchestrator so every field is repainted over the
//! debug page's pixels.

/// Pages the simulator can show.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub enum Page {
    /// LCARS watch face driven by the refresh orchestrator.
    #[default]
    Face,

    /// Refresh metrics, pass timing and the debug log terminal.
    Debug,
}

impl Page {
    /// Toggle to the other page.
    #[inline]
    pub const fn toggle(self) -> Self {
        match self {
            Self::Face => Self::Debug,
            Self::Debug => Self::Face,
        }
    }
}
