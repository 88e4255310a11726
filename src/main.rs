// Crate-level lints: Allow common simulator patterns that pedantic lints flag
#![allow(clippy::cast_possible_truncation)] // Intentional f32->u8, u32->u8 casts for simulated signals
#![allow(clippy::cast_possible_wrap)] // u32->i32 wrapping is acceptable for our value ranges
#![allow(clippy::cast_sign_loss)] // f32/i64->unsigned where we know sign is positive
#![allow(clippy::too_many_lines)] // main() is long but well-structured

//! LCARS watch face simulator.
//!
//! Hosts the [`lcars_watchface`] refresh engine in a desktop window. Simulated
//! collaborators ([`sim::SimWorld`]) are advanced from the host wall clock, and
//! the orchestrator runs one refresh pass per [`timing::TICK_PERIOD`] or right
//! after a key press. Only the fields that changed are redrawn.
//!
//! # Controls
//!
//! | Key | Action |
//! |-----|--------|
//! | `H` | Heart-rate sensor on/off |
//! | `W` | Weather data present/absent |
//! | `C` | Charger connected/disconnected |
//! | `R` | Radio enabled/disabled |
//! | `B` | Phone link connected/disconnected |
//! | `N` | New notification (wraps to none after 5) |
//! | `T` | Clock set: jump forward 37 min 23 s |
//! | `Y` | Switch between Face and Debug page |
//!
//! Key repeat is ignored to prevent toggle spam when holding keys.
//!
//! # Layout
//!
//! ```text
//! ┌────┬──────────────────────────────┐
//! │    │ 2026.290          [BATT  87%]│
//! │ SYS│ [BT]  [MSG 2]                │
//! ├────┤ 13:37            AM   4 2    │
//! │TIME│                              │
//! ├────┤ SAT 17 OCT        WK 42      │
//! │DATE│ [VITALS]                     │
//! ├────┤ HR     72 BPM                │
//! │ VIT│ STEPS 4120                   │
//! └────┴──────────────────────────────┘
//! ```

mod screens;
mod sim;
mod timing;

use std::thread;
use std::time::Instant;

use chrono::Utc;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::sdl2::Keycode;
use embedded_graphics_simulator::{OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window};
use lcars_watchface::colors::BLACK;
use lcars_watchface::config::{SCREEN_HEIGHT, SCREEN_WIDTH};
use lcars_watchface::pages::Page;
use lcars_watchface::probe::AssetProbe;
use lcars_watchface::profiling::{DebugLog, RefreshMetrics, push_u32};
use lcars_watchface::widgets::LcarsScreen;
use lcars_watchface::{Controllers, FaceSettings, RefreshOrchestrator};
use screens::draw_debug_page;
use sim::SimWorld;
use timing::{CLOCK_JUMP_SECS, TickScheduler};

/// The simulator renders with fonts compiled into the binary.
struct BundledFonts;

impl AssetProbe for BundledFonts {
    fn exists(
        &self,
        _path: &str,
    ) -> bool {
        true
    }
}

fn main() {
    // Initialize display and window (simulator mode)
    let mut display: SimulatorDisplay<Rgb565> = SimulatorDisplay::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));
    let output_settings = OutputSettingsBuilder::new().scale(2).build();
    let mut window = Window::new("LCARS Watch Face", &output_settings);

    display.clear(BLACK).ok();
    window.update(&display);

    // ==========================================================================
    // Simulated Watch
    // ==========================================================================

    let world = SimWorld::new(Utc::now());
    let controllers = Controllers {
        clock: &world,
        power: &world,
        radio: &world,
        motion: &world,
        heart_rate: &world,
        weather: &world,
        notifications: &world,
    };

    let mut orchestrator = match RefreshOrchestrator::try_new(controllers, FaceSettings::default(), &BundledFonts) {
        Ok(orchestrator) => orchestrator,
        Err(err) => {
            eprintln!("watch face unavailable: {err}");
            return;
        }
    };

    // ==========================================================================
    // Main Loop State
    // ==========================================================================

    let started = Instant::now();
    let mut scheduler = TickScheduler::new(started);

    // Page navigation state (Face is default, Y button toggles to Debug)
    let mut current_page = Page::default();
    let mut page_just_switched = true;

    // Profiling metrics and debug log
    let mut metrics = RefreshMetrics::new();
    let mut debug_log = DebugLog::new();
    debug_log.push("System started");

    // ==========================================================================
    // Main Loop
    // ==========================================================================

    loop {
        // Any key press wakes the face for an on-demand pass
        let mut woken = false;

        for ev in window.events() {
            match ev {
                SimulatorEvent::Quit => return,
                SimulatorEvent::KeyDown { keycode, repeat, .. } => {
                    // Ignore OS key repeat to prevent toggle spam when holding keys
                    if repeat {
                        continue;
                    }
                    woken = true;
                    match keycode {
                        Keycode::H => {
                            let on = world.toggle_heart_rate();
                            debug_log.push(if on { "Heart rate: ON" } else { "Heart rate: OFF" });
                        }
                        Keycode::W => {
                            let on = world.toggle_weather();
                            debug_log.push(if on { "Weather: fresh" } else { "Weather: expired" });
                        }
                        Keycode::C => {
                            let on = world.toggle_charging();
                            debug_log.push(if on { "Charger: ON" } else { "Charger: OFF" });
                        }
                        Keycode::R => {
                            let on = world.toggle_radio();
                            debug_log.push(if on { "Radio: enabled" } else { "Radio: disabled" });
                        }
                        Keycode::B => {
                            let on = world.toggle_connected();
                            debug_log.push(if on { "Link: connected" } else { "Link: lost" });
                        }
                        Keycode::N => {
                            let count = world.push_notification();
                            let mut line: heapless::String<24> = heapless::String::new();
                            line.push_str("Notifications: ").ok();
                            push_u32(&mut line, u32::from(count));
                            debug_log.push(&line);
                        }
                        Keycode::T => {
                            world.jump_clock(CLOCK_JUMP_SECS);
                            debug_log.push("Clock set +37:23");
                        }
                        // Y button: Switch page (works on any page)
                        Keycode::Y => {
                            current_page = current_page.toggle();
                            page_just_switched = true;
                            debug_log.push(match current_page {
                                Page::Face => "Page: Face",
                                Page::Debug => "Page: Debug",
                            });
                        }
                        _ => {}
                    }
                }
                _ => {}
            }
        }

        let now = Instant::now();
        if !(woken || page_just_switched || scheduler.is_due(now)) {
            thread::sleep(scheduler.sleep_time(now));
            continue;
        }
        scheduler.mark_pass(now);
        world.tick(Utc::now());

        // ======================================================================
        // Page-Based Rendering
        // ======================================================================

        match current_page {
            Page::Face => {
                let mut screen = LcarsScreen::new(&mut display);

                // Another page covered the face: repaint the frame and every field
                if page_just_switched {
                    screen.draw_chrome();
                    orchestrator.invalidate();
                }

                let pass_start = Instant::now();
                let report = orchestrator.refresh(&mut screen);
                metrics.record(&report, pass_start.elapsed());

                if report.vitals_rebuilt {
                    debug_log.push("Vitals rebuilt");
                }
                if report.seconds_reset && !page_just_switched {
                    debug_log.push("Seconds reset");
                }
            }

            Page::Debug => {
                draw_debug_page(&mut display, &metrics, &debug_log, started.elapsed().as_secs());
            }
        }

        page_just_switched = false;

        // Update window with rendered frame
        window.update(&display);
    }
}
