//! AnkiConnect client.
//!
//! Every call is a `POST` of `{"action", "version": 6, "params"}` to a single
//! local endpoint. Replies are `{"result", "error"}`; a non-null `error` is
//! reported as `ServiceError::Service` and the `result` is decoded into the
//! type the action promises (note id, deck id, deck names).

use async_trait::async_trait;
use log::{debug, info, warn};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::services::{Flashcards, ServiceError};

pub const API_VERSION: u8 = 6;

// ============================================================================
// Wire Types
// ============================================================================

#[derive(Serialize, Debug)]
struct AnkiRequest<'a, P> {
    action: &'a str,
    version: u8,
    params: P,
}

#[derive(Deserialize, Debug)]
struct AnkiResponse<R> {
    result: Option<R>,
    #[serde(default)]
    error: Option<String>,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub deck_name: String,
    pub model_name: String,
    pub fields: NoteFields,
    pub options: NoteOptions,
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub audio: Vec<Media>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub video: Vec<Media>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub picture: Vec<Media>,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct NoteFields {
    #[serde(rename = "Front")]
    pub front: String,
    #[serde(rename = "Back")]
    pub back: String,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NoteOptions {
    pub allow_duplicate: bool,
    pub duplicate_scope: String,
    pub duplicate_scope_options: DuplicateScopeOptions,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DuplicateScopeOptions {
    pub deck_name: String,
    pub check_children: bool,
    pub check_all_models: bool,
}

/// Audio, video or picture attached to a note field.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Media {
    pub url: String,
    pub filename: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip_hash: Option<String>,
    pub fields: Vec<String>,
}

// ============================================================================
// Client
// ============================================================================

pub struct AnkiConnect {
    url: String,
    deck_name: String,
    model_name: String,
    tags: Vec<String>,
    allow_duplicate: bool,
    client: reqwest::Client,
}

impl AnkiConnect {
    pub fn new(url: String, deck_name: String, model_name: String) -> Self {
        Self {
            url,
            deck_name,
            model_name,
            tags: Vec::new(),
            allow_duplicate: false,
            client: reqwest::Client::new(),
        }
    }

    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }

    pub fn with_allow_duplicate(mut self, allow: bool) -> Self {
        self.allow_duplicate = allow;
        self
    }

    /// Build the basic front/back note for the configured deck.
    pub fn note(&self, front: &str, back: &str) -> Note {
        Note {
            deck_name: self.deck_name.clone(),
            model_name: self.model_name.clone(),
            fields: NoteFields {
                front: front.to_string(),
                back: back.to_string(),
            },
            options: NoteOptions {
                allow_duplicate: self.allow_duplicate,
                duplicate_scope: "deck".to_string(),
                duplicate_scope_options: DuplicateScopeOptions {
                    deck_name: self.deck_name.clone(),
                    check_children: false,
                    check_all_models: false,
                },
            },
            tags: self.tags.clone(),
            audio: Vec::new(),
            video: Vec::new(),
            picture: Vec::new(),
        }
    }

    /// Send one action and decode its `result` as `R`.
    pub async fn invoke<P, R>(&self, action: &str, params: P) -> Result<R, ServiceError>
    where
        P: Serialize,
        R: DeserializeOwned,
    {
        let request = AnkiRequest {
            action,
            version: API_VERSION,
            params,
        };
        let body = serde_json::to_vec(&request).map_err(|e| ServiceError::Encode(e.to_string()))?;

        debug!("AnkiConnect request: action={}, {} bytes", action, body.len());

        let response = self
            .client
            .post(&self.url)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            warn!("AnkiConnect HTTP error: {} - {}", status, message);
            return Err(ServiceError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let text = response.text().await?;
        let reply: AnkiResponse<R> =
            serde_json::from_str(&text).map_err(|e| ServiceError::Decode(e.to_string()))?;

        if let Some(error) = reply.error {
            warn!("AnkiConnect {} failed: {}", action, error);
            return Err(ServiceError::Service(error));
        }

        reply
            .result
            .ok_or_else(|| ServiceError::Decode(format!("{action}: response has no result")))
    }

    pub async fn add_note(&self, note: &Note) -> Result<i64, ServiceError> {
        #[derive(Serialize)]
        struct Params<'a> {
            note: &'a Note,
        }
        self.invoke("addNote", Params { note }).await
    }

    pub async fn create_deck(&self, deck: &str) -> Result<i64, ServiceError> {
        self.invoke("createDeck", json!({ "deck": deck })).await
    }

    pub async fn deck_names(&self) -> Result<Vec<String>, ServiceError> {
        self.invoke("deckNames", json!({})).await
    }
}

#[async_trait]
impl Flashcards for AnkiConnect {
    fn name(&self) -> &str {
        "anki-connect"
    }

    async fn prepare_deck(&self, deck: &str) -> Result<(), ServiceError> {
        let decks = self.deck_names().await?;
        if decks.iter().any(|d| d == deck) {
            debug!("Deck '{}' already exists", deck);
            return Ok(());
        }
        let id = self.create_deck(deck).await?;
        info!("Created deck '{}' (id={})", deck, id);
        Ok(())
    }

    async fn create_card(&self, front: &str, back: &str) -> Result<i64, ServiceError> {
        let note = self.note(front, back);
        let id = self.add_note(&note).await?;
        info!("Added note {} to deck '{}'", id, self.deck_name);
        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> AnkiConnect {
        AnkiConnect::new(
            "http://localhost:8765".to_string(),
            "test1".to_string(),
            "Basic".to_string(),
        )
        .with_tags(vec!["wordcard".to_string()])
    }

    #[test]
    fn test_note_wire_format() {
        let note = client().note("hello", "back");
        let value = serde_json::to_value(&note).unwrap();
        assert_eq!(
            value,
            json!({
                "deckName": "test1",
                "modelName": "Basic",
                "fields": { "Front": "hello", "Back": "back" },
                "options": {
                    "allowDuplicate": false,
                    "duplicateScope": "deck",
                    "duplicateScopeOptions": {
                        "deckName": "test1",
                        "checkChildren": false,
                        "checkAllModels": false
                    }
                },
                "tags": ["wordcard"]
            })
        );
    }

    #[test]
    fn test_media_serializes_camel_case() {
        let media = Media {
            url: "https://example.com/cat.mp3".to_string(),
            filename: "cat.mp3".to_string(),
            skip_hash: Some("7e2c".to_string()),
            fields: vec!["Front".to_string()],
        };
        let value = serde_json::to_value(&media).unwrap();
        assert_eq!(value["skipHash"], "7e2c");
        assert_eq!(value["fields"][0], "Front");
    }

    #[test]
    fn test_request_envelope() {
        let request = AnkiRequest {
            action: "deckNames",
            version: API_VERSION,
            params: json!({}),
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value, json!({ "action": "deckNames", "version": 6, "params": {} }));
    }

    #[test]
    fn test_response_error_field_optional() {
        let reply: AnkiResponse<i64> = serde_json::from_str(r#"{"result": 42}"#).unwrap();
        assert_eq!(reply.result, Some(42));
        assert!(reply.error.is_none());

        let reply: AnkiResponse<Vec<String>> =
            serde_json::from_str(r#"{"result": null, "error": "boom"}"#).unwrap();
        assert!(reply.result.is_none());
        assert_eq!(reply.error.as_deref(), Some("boom"));
    }
}
