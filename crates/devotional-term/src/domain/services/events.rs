use anyhow::Result;
use crossterm::event::Event as CrosstermEvent;
use crossterm::event::EventStream;
use crossterm::event::KeyCode;
use crossterm::event::KeyEvent;
use crossterm::event::KeyEventKind;
use crossterm::event::KeyModifiers;
use crossterm::event::MouseEventKind;
use futures::StreamExt;
use tokio::sync::mpsc;
use tokio::time;

use crate::domain::models::Event;

const TICK_INTERVAL: time::Duration = time::Duration::from_millis(150);

fn handle_key(keyevent: KeyEvent) -> Option<Event> {
    if keyevent.kind == KeyEventKind::Release {
        return None;
    }

    let ctrl = keyevent.modifiers.contains(KeyModifiers::CONTROL);
    match keyevent.code {
        KeyCode::Char('c') if ctrl => {
            return Some(Event::KeyboardCTRLC);
        }
        KeyCode::Char('n') if ctrl => {
            return Some(Event::KeyboardCTRLN);
        }
        KeyCode::Char('p') if ctrl => {
            return Some(Event::KeyboardCTRLP);
        }
        KeyCode::Char(_) if ctrl => {
            return None;
        }
        KeyCode::Char(c) => {
            return Some(Event::KeyboardChar(c));
        }
        KeyCode::Backspace => {
            return Some(Event::KeyboardBackspace);
        }
        KeyCode::Enter => {
            return Some(Event::KeyboardEnter);
        }
        KeyCode::Tab => {
            return Some(Event::KeyboardTab);
        }
        KeyCode::BackTab => {
            return Some(Event::KeyboardBackTab);
        }
        KeyCode::Left => {
            return Some(Event::KeyboardLeft);
        }
        KeyCode::Right => {
            return Some(Event::KeyboardRight);
        }
        KeyCode::Up | KeyCode::PageUp => {
            return Some(Event::UIScrollUp);
        }
        KeyCode::Down | KeyCode::PageDown => {
            return Some(Event::UIScrollDown);
        }
        _ => {
            return None;
        }
    }
}

/// Translate a raw terminal event into an app event, if it maps to one.
pub fn handle_crossterm(event: CrosstermEvent) -> Option<Event> {
    match event {
        CrosstermEvent::Paste(text) => {
            return Some(Event::KeyboardPaste(text));
        }
        CrosstermEvent::Mouse(mouseevent) => match mouseevent.kind {
            MouseEventKind::ScrollUp => {
                return Some(Event::UIScrollUp);
            }
            MouseEventKind::ScrollDown => {
                return Some(Event::UIScrollDown);
            }
            _ => {
                return None;
            }
        },
        CrosstermEvent::Key(keyevent) => {
            return handle_key(keyevent);
        }
        _ => return None,
    }
}

pub struct EventsService {
    crossterm_events: EventStream,
    events: mpsc::UnboundedReceiver<Event>,
}

impl EventsService {
    pub fn new(events: mpsc::UnboundedReceiver<Event>) -> EventsService {
        return EventsService {
            crossterm_events: EventStream::new(),
            events,
        };
    }

    /// Wait for the next worker event, key press or tick.
    pub async fn next(&mut self) -> Result<Event> {
        loop {
            let evt = tokio::select! {
                event = self.events.recv() => event,
                event = self.crossterm_events.next() => match event {
                    Some(Ok(input)) => handle_crossterm(input),
                    Some(Err(_)) => None,
                    None => None
                },
                _ = time::sleep(TICK_INTERVAL) => Some(Event::UITick)
            };

            if let Some(event) = evt {
                return Ok(event);
            }
        }
    }
}
