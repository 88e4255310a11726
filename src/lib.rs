//! LCARS watch face library - the refresh engine behind the clock display.
//!
//! This library contains the platform-agnostic core that decides, once per tick,
//! exactly which parts of the face changed and must be redrawn. The simulator
//! binary (`main.rs`) and firmware targets only provide collaborators and a
//! [`FaceView`](render::FaceView) that turns updates into pixels.
//!
//! - [`dirty`]: Change-tracked value cells
//! - [`bank`]: The full set of cells for every externally-sourced field
//! - [`arbiter`]: Heart-rate vs. weather ownership of the shared vitals slot
//! - [`carousel`]: Incremental seconds readout (tens and ones rings)
//! - [`orchestrator`]: The per-tick refresh pass
//! - [`render`]: Field identities, dispatch order and widget updates
//! - [`sources`]: Collaborator traits and the values they report
//! - [`widgets`]: LCARS drawing of [`FaceUpdate`](render::FaceUpdate)s onto any `DrawTarget`
//!
//! # Testing
//!
//! Run tests on host with:
//! ```bash
//! cargo test --lib
//! ```
//!
//! Tests run with `std` enabled (via `cfg_attr`), allowing use of the standard
//! test framework while the firmware builds stay `no_std`.
//!
//! # Crate Features
//!
//! - **`defmt`**: structured logging via [`defmt`](https://docs.rs/defmt).
//! - **`simulator`**: builds the desktop simulator binary (requires SDL2).

// Use no_std only when NOT testing (tests need std for the test harness)
#![cfg_attr(not(test), no_std)]
// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

// Refresh engine
pub mod arbiter;
pub mod bank;
pub mod carousel;
pub mod dirty;
pub mod orchestrator;
pub mod render;

// Collaborator boundary
pub mod error;
pub mod probe;
pub mod settings;
pub mod sources;

// Configuration and styling
pub mod colors;
pub mod config;
pub mod styles;
pub mod thresholds;

// Presentation
pub mod pages;
pub mod profiling;
pub mod widgets;

// Re-export commonly used items
pub use error::FaceError;
pub use orchestrator::{PassReport, RefreshOrchestrator};
pub use render::{FaceUpdate, FaceView, Field};
pub use settings::FaceSettings;
pub use sources::Controllers;
