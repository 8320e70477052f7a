//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the visible
//! screen, and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Event Loop
//!
//! ```text
//!   poll key ──▶ Action ──▶ top screen ──▶ NavHandle ─┐
//!                                                     ▼
//!   poll every screen's Pending ◀── draw ◀── Navigator::drain
//! ```
//!
//! Screens below the top keep their requests; results that land while they
//! are covered are applied and shown when they come back into view.
//!
//! ## Redraw Strategy
//!
//! - **Loading** (a request in flight on any live screen): polls every
//!   ~80ms so settled results land promptly. Only the visible screen's
//!   requests drive the spinner and force a redraw each tick.
//! - **Idle**: sleeps up to 500ms, only redraws on input, resize, a settled
//!   request or a navigation change.

mod component;
mod components;
mod event;
mod ui;

use log::info;
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::api::{Api, ApiClient, ApiResult, Catalog};
use crate::core::config::ResolvedConfig;
use crate::core::navigation::{Navigator, Route, Transition};
use crate::core::screens::ScreenBuilder;
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

const LOADING_POLL: Duration = Duration::from_millis(80);
const IDLE_POLL: Duration = Duration::from_millis(500);

/// Build the REST catalog from a resolved config.
pub fn build_catalog(config: &ResolvedConfig) -> ApiResult<Arc<dyn Catalog>> {
    let client = ApiClient::new(&config.api_base_url)?;
    info!("Using API at {}", client.base_url());
    Ok(Arc::new(Api::new(client)))
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let catalog = build_catalog(&config).map_err(std::io::Error::other)?;
    let mut navigator = Navigator::new(
        ScreenBuilder::new(catalog, config.featured_product.clone()),
        Route::Home,
    );

    let mut terminal = ratatui::init();

    let start_time = Instant::now();
    let mut needs_redraw = true; // Force first frame

    'main: loop {
        // Settle whatever finished, on every live screen
        for screen in navigator.screens_mut() {
            needs_redraw |= screen.poll();
        }

        // Covered screens count too: their results must still be polled
        let loading = navigator.any_screen(|s| s.is_loading());
        if navigator.top().is_some_and(|s| s.is_loading()) {
            needs_redraw = true; // Spinner
        }

        if needs_redraw
            && let (Some(route), Some(screen)) = (navigator.top_route(), navigator.top())
        {
            let spinner_frame = (start_time.elapsed().as_secs_f32() * 12.0) as usize;
            terminal.draw(|f| ui::draw_ui(f, route, screen, spinner_frame))?;
            needs_redraw = false;
        }

        let timeout = if loading { LOADING_POLL } else { IDLE_POLL };
        let first_event = poll_event_timeout(timeout);
        if first_event.is_some() {
            needs_redraw = true;
        }

        // Process first event + drain ALL pending events before next draw
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            if event == TuiEvent::ForceQuit {
                info!("Ctrl+C, quitting");
                break 'main;
            }
            if let Some(action) = event.action()
                && let Some(screen) = navigator.top_mut()
            {
                screen.handle(action);
            }

            // Apply navigation before the next key so it reaches the new top
            match navigator.drain() {
                Transition::Exit => break 'main,
                Transition::Changed => needs_redraw = true,
                Transition::Stay => {}
            }
        }

        // Overlays dropped by settled requests or popped screens
        match navigator.drain() {
            Transition::Exit => break,
            Transition::Changed => needs_redraw = true,
            Transition::Stay => {}
        }
    }

    // Drop every screen (and abort its requests) before leaving the terminal
    drop(navigator);
    ratatui::restore();
    Ok(())
}
