//! Platform abstraction layer
//!
//! Turns a wall clock and a keyboard into one ordered stream of events:
//! - fixed-period tick thread
//! - keyboard thread, using `input` for key mapping
//!
//! Both producers write into the same channel, so the consumer sees events in
//! arrival order and never runs two transitions at once.

pub mod input;

use std::sync::mpsc::{self, Receiver, Sender};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyEventKind};

use crate::sim::GameEvent;

/// Anything the host loop reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostEvent {
    Game(GameEvent),
    Quit,
}

/// Single-consumer merge of the tick clock and keyboard
pub struct EventSource {
    rx: Receiver<HostEvent>,
}

impl EventSource {
    /// Start both producer threads
    pub fn start(tick_period: Duration) -> Self {
        let (tx, rx) = mpsc::channel();
        spawn_ticker(tx.clone(), tick_period);
        spawn_keyboard(tx);
        log::debug!("Event source started ({:?} per tick)", tick_period);
        Self { rx }
    }

    /// Next event; `None` once every producer has stopped
    pub fn recv(&self) -> Option<HostEvent> {
        self.rx.recv().ok()
    }
}

/// Send a tick every `period` until the receiver goes away
///
/// Deadlines advance by whole periods so sleeps do not accumulate drift.
pub fn spawn_ticker(tx: Sender<HostEvent>, period: Duration) -> JoinHandle<()> {
    thread::spawn(move || {
        let mut next = Instant::now() + period;
        loop {
            thread::sleep(next.saturating_duration_since(Instant::now()));
            next += period;
            if tx.send(HostEvent::Game(GameEvent::Tick)).is_err() {
                break;
            }
        }
    })
}

fn spawn_keyboard(tx: Sender<HostEvent>) -> JoinHandle<()> {
    thread::spawn(move || {
        loop {
            match event::read() {
                Ok(Event::Key(key)) => {
                    let Some(host_event) = input::map_key(key) else {
                        continue;
                    };
                    if tx.send(host_event).is_err() || host_event == HostEvent::Quit {
                        break;
                    }
                }
                Ok(_) => {}
                Err(e) => {
                    log::error!("Keyboard read failed: {e}");
                    let _ = tx.send(HostEvent::Quit);
                    break;
                }
            }
        }
    })
}

/// Block until the first key press; `false` if that press was a quit key
pub fn wait_for_start() -> std::io::Result<bool> {
    loop {
        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            return Ok(!input::should_quit(key));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ticker_sends_ticks_and_stops() {
        let (tx, rx) = mpsc::channel();
        let handle = spawn_ticker(tx, Duration::from_millis(1));
        for _ in 0..3 {
            assert_eq!(
                rx.recv_timeout(Duration::from_secs(1)),
                Ok(HostEvent::Game(GameEvent::Tick))
            );
        }
        drop(rx);
        handle.join().unwrap();
    }
}
