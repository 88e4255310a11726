//! Simulator-only screens.
//!
//! - **Debug Page** ([`debug`]): refresh metrics, pass timing and the debug log
//!   terminal (toggle with `Y`)
//!
//! The watch face itself is not a screen here: it is the library's
//! [`LcarsScreen`](lcars_watchface::widgets::LcarsScreen), driven by the
//! orchestrator.

mod debug;

pub use debug::draw_debug_page;
