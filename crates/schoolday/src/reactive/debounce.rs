//! Timer-based debounce gate.
//!
//! Values pushed in quick succession are coalesced: each push replaces the
//! pending value and restarts the timer, and only the value that survives a
//! full quiet interval is published to subscribers.

use std::time::Duration;

use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tokio::time::{self, Instant};

use crate::error::{AppError, Result};

/// Debounces values of type `T` onto a `watch` channel.
///
/// Subscribers only observe settled values that differ from the previously
/// published one. Must be created inside a tokio runtime.
#[derive(Debug)]
pub struct Debouncer<T> {
    input: mpsc::UnboundedSender<T>,
    output: watch::Receiver<T>,
    task: JoinHandle<()>,
}

impl<T> Debouncer<T>
where
    T: Clone + PartialEq + Send + Sync + 'static,
{
    /// Spawns the debounce task with an initial published value.
    pub fn new(interval: Duration, initial: T) -> Self {
        let (input, input_rx) = mpsc::unbounded_channel();
        let (output_tx, output) = watch::channel(initial);
        let task = tokio::spawn(run(interval, input_rx, output_tx));

        Self {
            input,
            output,
            task,
        }
    }

    /// Replaces the pending value and restarts the timer.
    pub fn push(&self, value: T) -> Result<()> {
        self.input.send(value).map_err(|_| AppError::DebounceClosed)
    }

    /// Returns a receiver for settled values.
    pub fn subscribe(&self) -> watch::Receiver<T> {
        self.output.clone()
    }

    /// Returns the last settled value.
    pub fn current(&self) -> T {
        self.output.borrow().clone()
    }

    /// Publishes any pending value immediately and stops the task.
    pub async fn finish(self) -> Result<()> {
        drop(self.input);
        self.task.await?;
        Ok(())
    }
}

async fn run<T>(interval: Duration, mut input: mpsc::UnboundedReceiver<T>, output: watch::Sender<T>)
where
    T: PartialEq,
{
    let mut pending: Option<T> = None;
    let timer = time::sleep(interval);
    tokio::pin!(timer);

    loop {
        tokio::select! {
            value = input.recv() => match value {
                Some(value) => {
                    pending = Some(value);
                    timer.as_mut().reset(Instant::now() + interval);
                }
                None => {
                    if let Some(value) = pending.take() {
                        publish(&output, value);
                    }
                    break;
                }
            },
            () = &mut timer, if pending.is_some() => {
                if let Some(value) = pending.take() {
                    publish(&output, value);
                }
            }
        }
    }
}

fn publish<T: PartialEq>(output: &watch::Sender<T>, value: T) {
    output.send_if_modified(|current| {
        if *current == value {
            false
        } else {
            *current = value;
            true
        }
    });
}
