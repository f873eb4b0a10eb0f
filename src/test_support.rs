//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;

use crate::services::{Dictionary, Flashcards, ServiceError};

/// Dictionary that answers from a canned result after an optional delay.
pub struct FakeDictionary {
    pub result: Result<String, ServiceError>,
    pub delay: Duration,
    pub lookups: Mutex<Vec<String>>,
}

impl FakeDictionary {
    pub fn answering(result: Result<String, ServiceError>) -> Self {
        Self {
            result,
            delay: Duration::ZERO,
            lookups: Mutex::new(Vec::new()),
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

#[async_trait]
impl Dictionary for FakeDictionary {
    fn name(&self) -> &str {
        "fake-dictionary"
    }

    async fn lookup(&self, term: &str) -> Result<String, ServiceError> {
        self.lookups.lock().unwrap().push(term.to_string());
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        self.result.clone()
    }
}

/// Flashcard store that records every card it is asked to create.
pub struct FakeFlashcards {
    pub result: Result<i64, ServiceError>,
    pub delay: Duration,
    pub cards: Mutex<Vec<(String, String)>>,
    pub decks: Mutex<Vec<String>>,
}

impl FakeFlashcards {
    pub fn answering(result: Result<i64, ServiceError>) -> Self {
        Self {
            result,
            delay: Duration::ZERO,
            cards: Mutex::new(Vec::new()),
            decks: Mutex::new(Vec::new()),
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

#[async_trait]
impl Flashcards for FakeFlashcards {
    fn name(&self) -> &str {
        "fake-flashcards"
    }

    async fn prepare_deck(&self, deck: &str) -> Result<(), ServiceError> {
        self.decks.lock().unwrap().push(deck.to_string());
        self.result.clone().map(|_| ())
    }

    async fn create_card(&self, front: &str, back: &str) -> Result<i64, ServiceError> {
        self.cards
            .lock()
            .unwrap()
            .push((front.to_string(), back.to_string()));
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        self.result.clone()
    }
}
