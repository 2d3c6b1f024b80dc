use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind, MouseEvent};

/// Event handler for terminal events
pub struct EventHandler {
    tick_rate: Duration,
    frame_rate: Duration,
}

impl EventHandler {
    pub fn new(tick_rate_ms: u64) -> Self {
        Self {
            tick_rate: Duration::from_millis(tick_rate_ms),
            frame_rate: Duration::from_millis(16),
        }
    }

    /// Use `frame_rate` between frames while something is moving
    pub fn with_frame_rate(mut self, frame_rate: Duration) -> Self {
        self.frame_rate = frame_rate;
        self
    }

    /// Frame interval for the current state
    pub fn interval(&self, animating: bool) -> Duration {
        if animating {
            self.frame_rate
        } else {
            self.tick_rate
        }
    }

    /// Wait up to `timeout` for input, then take everything already queued
    ///
    /// Mouse drags produce bursts of move events; draining them here lets
    /// the caller hand the whole burst to the drag controller before the
    /// next frame runs.
    pub fn drain(&self, timeout: Duration) -> Result<Vec<AppEvent>> {
        let mut events = Vec::new();
        if !event::poll(timeout)? {
            return Ok(events);
        }
        loop {
            if let Some(event) = Self::translate(event::read()?) {
                events.push(event);
            }
            if !event::poll(Duration::ZERO)? {
                break;
            }
        }
        Ok(events)
    }

    fn translate(event: Event) -> Option<AppEvent> {
        match event {
            // Only handle key press events, ignore release events
            // (crossterm 0.27+ sends release events on some systems)
            Event::Key(key) if key.kind == KeyEventKind::Press => Some(AppEvent::Key(key)),
            Event::Mouse(mouse) => Some(AppEvent::Mouse(mouse)),
            Event::Resize(w, h) => Some(AppEvent::Resize(w, h)),
            _ => None,
        }
    }
}

/// Application events
#[derive(Debug)]
pub enum AppEvent {
    /// A key was pressed
    Key(KeyEvent),
    /// Mouse button, motion or wheel
    Mouse(MouseEvent),
    /// Terminal was resized
    Resize(u16, u16),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interval() {
        let events = EventHandler::new(100).with_frame_rate(Duration::from_millis(33));
        assert_eq!(events.interval(false), Duration::from_millis(100));
        assert_eq!(events.interval(true), Duration::from_millis(33));
    }
}
