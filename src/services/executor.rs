//! # Command Executor
//!
//! Runs `Command`s off the update loop. Each command becomes one tokio task,
//! and each task sends exactly one `Event` back through the shared channel.
//! The loop is the only receiver, so events are folded into state one at a
//! time in arrival order. Independently issued commands may finish in any
//! order.
//!
//! There is no cancellation: a task runs until it completes or its timeout
//! elapses.

use std::sync::Arc;
use std::time::Duration;

use log::{debug, info, warn};
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;

use crate::core::action::{Command, Event};
use crate::core::config::ResolvedConfig;
use crate::services::{Dictionary, Flashcards, ServiceError};

/// Upper bounds for the network-backed commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timeouts {
    /// `None` waits for the dictionary indefinitely.
    pub dictionary: Option<Duration>,
    pub flashcards: Duration,
}

impl Timeouts {
    pub fn from_config(config: &ResolvedConfig) -> Self {
        Self {
            dictionary: config.dictionary_timeout,
            flashcards: config.flashcard_timeout,
        }
    }
}

pub struct Executor {
    dictionary: Arc<dyn Dictionary>,
    flashcards: Arc<dyn Flashcards>,
    timeouts: Timeouts,
    events: UnboundedSender<Event>,
}

impl Executor {
    pub fn new(
        dictionary: Arc<dyn Dictionary>,
        flashcards: Arc<dyn Flashcards>,
        timeouts: Timeouts,
        events: UnboundedSender<Event>,
    ) -> Self {
        Self {
            dictionary,
            flashcards,
            timeouts,
            events,
        }
    }

    /// Spawn the task for `command`. Must be called inside a tokio runtime.
    pub fn dispatch(&self, command: Command) -> JoinHandle<()> {
        debug!("Dispatching {}", command.label());
        let tx = self.events.clone();

        match command {
            Command::StartTimerTick {
                interval,
                generation,
            } => tokio::spawn(async move {
                tokio::time::sleep(interval).await;
                send(&tx, Event::TimerFired { generation });
            }),
            Command::StartSpinnerTick {
                interval,
                generation,
            } => tokio::spawn(async move {
                tokio::time::sleep(interval).await;
                send(&tx, Event::SpinnerFired { generation });
            }),
            Command::DictionaryLookup { term } => {
                let dictionary = self.dictionary.clone();
                let limit = self.timeouts.dictionary;
                tokio::spawn(async move {
                    info!("Looking up {:?} via {}", term, dictionary.name());
                    let result = match limit {
                        Some(limit) => with_timeout(limit, dictionary.lookup(&term)).await,
                        None => dictionary.lookup(&term).await,
                    };
                    send(&tx, Event::DictionaryResult { term, result });
                })
            }
            Command::CreateFlashcard { front, back } => {
                let flashcards = self.flashcards.clone();
                let limit = self.timeouts.flashcards;
                tokio::spawn(async move {
                    info!("Creating flashcard {:?} via {}", front, flashcards.name());
                    let result = with_timeout(limit, flashcards.create_card(&front, &back))
                        .await
                        .map(|id| debug!("Flashcard {:?} stored as note {}", front, id));
                    send(&tx, Event::FlashcardResult { front, result });
                })
            }
            Command::PrepareDeck { deck } => {
                let flashcards = self.flashcards.clone();
                let limit = self.timeouts.flashcards;
                tokio::spawn(async move {
                    let result = with_timeout(limit, flashcards.prepare_deck(&deck))
                        .await
                        .map(|()| deck);
                    send(&tx, Event::DeckReady(result));
                })
            }
        }
    }
}

async fn with_timeout<T>(
    limit: Duration,
    fut: impl Future<Output = Result<T, ServiceError>>,
) -> Result<T, ServiceError> {
    match tokio::time::timeout(limit, fut).await {
        Ok(result) => result,
        Err(_) => {
            warn!("Request timed out after {:?}", limit);
            Err(ServiceError::Network(format!(
                "timed out after {}ms",
                limit.as_millis()
            )))
        }
    }
}

fn send(tx: &UnboundedSender<Event>, event: Event) {
    if tx.send(event).is_err() {
        warn!("Failed to deliver event: receiver dropped");
    }
}
