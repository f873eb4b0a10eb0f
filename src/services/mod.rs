pub mod executor;
pub mod provider;
pub mod providers;

pub use executor::{Executor, Timeouts};
pub use provider::{Dictionary, Flashcards, ServiceError};
pub use providers::{AnkiConnect, CollinsDictionary};
