use std::{io, time::Duration, time::Instant};

use crossterm::event::{self, Event};
use tokio::sync::mpsc::{self, UnboundedReceiver};

const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Reads terminal events on a blocking thread and forwards them. The reader
/// stops once the receiver is dropped.
pub fn spawn_reader() -> UnboundedReceiver<io::Result<Event>> {
    let (tx, rx) = mpsc::unbounded_channel();

    tokio::task::spawn_blocking(move || {
        while !tx.is_closed() {
            match event::poll(POLL_INTERVAL) {
                Ok(true) => {
                    if tx.send(event::read()).is_err() {
                        break;
                    }
                }
                Ok(false) => {}
                Err(err) => {
                    let _ = tx.send(Err(err));
                    break;
                }
            }
        }
    });

    rx
}

/// Resolves at `deadline`, or never when there is nothing scheduled.
pub async fn sleep_until(deadline: Option<Instant>) {
    match deadline {
        Some(deadline) => tokio::time::sleep_until(deadline.into()).await,
        None => std::future::pending().await,
    }
}
