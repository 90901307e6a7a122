use std::time::Duration;

use crossterm::event::{EventStream, KeyEventKind};
use futures::StreamExt;
use ratatui::crossterm::event::KeyEvent;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Events consumed by the picker loop.
#[derive(Debug, Clone)]
pub enum Event {
    /// Periodic tick; only triggers a redraw.
    Tick,
    /// A key was pressed.
    Key(KeyEvent),
    /// Terminal was resized.
    Resize(u16, u16),
    /// Input ended (channel closed).
    Quit,
}

/// Async event handler that interleaves terminal input and a tick timer
/// onto one channel using `tokio::select!`.
///
/// The loop reading from [`EventHandler::next`] sees exactly one event at a
/// time, so no two handlers ever run concurrently.
pub struct EventHandler {
    _tx: mpsc::UnboundedSender<Event>,
    rx: mpsc::UnboundedReceiver<Event>,
    task: JoinHandle<()>,
}

impl EventHandler {
    /// Create a new EventHandler sending `Event::Tick` every `tick_rate`.
    pub fn new(tick_rate: Duration) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        let event_tx = tx.clone();

        let task = tokio::spawn(async move {
            let mut reader = EventStream::new();
            let mut tick_interval = tokio::time::interval(tick_rate);

            loop {
                let tick_delay = tick_interval.tick();
                let crossterm_event = reader.next();

                tokio::select! {
                    maybe_event = crossterm_event => {
                        let event = match maybe_event {
                            Some(Ok(crossterm::event::Event::Key(key)))
                                if key.kind == KeyEventKind::Press => Event::Key(key),
                            Some(Ok(crossterm::event::Event::Resize(x, y))) => Event::Resize(x, y),
                            // Logging here would draw over the alternate screen
                            Some(Ok(_)) | Some(Err(_)) => continue,
                            None => return,
                        };
                        if event_tx.send(event).is_err() {
                            return;
                        }
                    }
                    _ = tick_delay => {
                        if event_tx.send(Event::Tick).is_err() {
                            return;
                        }
                    }
                }
            }
        });

        Self {
            _tx: tx,
            rx,
            task,
        }
    }

    /// Wait for the next event from the event handler.
    ///
    /// Returns `Event::Quit` if the channel is closed.
    pub async fn next(&mut self) -> Event {
        self.rx.recv().await.unwrap_or(Event::Quit)
    }
}

impl Drop for EventHandler {
    fn drop(&mut self) {
        self.task.abort();
    }
}
