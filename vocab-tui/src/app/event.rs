//! Input events for the quiz loop
//!
//! Crossterm reports more than the quiz cares about. [`TuiEvent::from_crossterm`]
//! keeps key presses and resizes and turns everything else into a tick.

use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEvent, KeyEventKind};

use crate::app::Action;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TuiEvent {
    Key(KeyEvent),
    Resize(u16, u16),
    /// Nothing happened within the tick rate
    Tick,
}

impl TuiEvent {
    /// Key releases, reported on some platforms, become ticks so a key acts
    /// once per press.
    pub fn from_crossterm(event: Event) -> Self {
        match event {
            Event::Key(key) if key.kind != KeyEventKind::Release => TuiEvent::Key(key),
            Event::Resize(width, height) => TuiEvent::Resize(width, height),
            _ => TuiEvent::Tick,
        }
    }
}

impl From<TuiEvent> for Action {
    fn from(event: TuiEvent) -> Self {
        match event {
            TuiEvent::Key(key) => Action::Key(key),
            TuiEvent::Resize(width, height) => Action::Resize(width, height),
            TuiEvent::Tick => Action::Tick,
        }
    }
}

/// Blocking source of [`TuiEvent`]s
pub struct EventSource {
    tick_rate: Duration,
}

impl EventSource {
    pub fn new(tick_rate_ms: u64) -> Self {
        Self {
            tick_rate: Duration::from_millis(tick_rate_ms),
        }
    }

    /// Wait up to one tick for input
    pub fn next(&self) -> io::Result<TuiEvent> {
        if !event::poll(self.tick_rate)? {
            return Ok(TuiEvent::Tick);
        }
        Ok(TuiEvent::from_crossterm(event::read()?))
    }
}
