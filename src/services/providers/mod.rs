pub mod anki_connect;
pub mod collins;

pub use anki_connect::AnkiConnect;
pub use collins::CollinsDictionary;
