//! LCARS drawing of face updates onto any `DrawTarget<Color = Rgb565>`.
//!
//! - [`face`]: [`LcarsScreen`], the [`FaceView`](crate::render::FaceView) implementation
//! - [`primitives`]: region clearing, LCARS bars, pills and elbows, text anchors
//!
//! # Region Discipline
//!
//! Every routine clears its own region from [`config`](crate::config) and draws
//! inside it. Regions never overlap, so an update for one field cannot disturb
//! the pixels of another; this is what makes partial redraws safe.
//!
//! All formatting uses `heapless::String` with `core::fmt::Write`, so the widgets
//! stay `no_std` and allocation-free.

mod face;
mod primitives;

pub use face::LcarsScreen;
