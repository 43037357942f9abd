//! HTTP API Client
//!
//! Functions for communicating with the EmotionAI REST API. Field names on
//! the wire (`respuesta`, `diario`, `fecha`, `editar`, `perfil`, `objetivo`)
//! are the backend's contract and are kept verbatim, including the
//! capitalized `/Objetivo` path.

use gloo_net::http::Request;
use std::collections::BTreeMap;

use crate::state::session::Credentials;

/// Default API base URL
pub const DEFAULT_API_BASE: &str = "http://localhost:8000";

/// Get the API base URL from local storage or use default. Deployments
/// override the default by setting the `emotionai_api_url` key.
pub fn get_api_base() -> String {
    let url = if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(url)) = storage.get_item("emotionai_api_url") {
                url
            } else {
                DEFAULT_API_BASE.to_string()
            }
        } else {
            DEFAULT_API_BASE.to_string()
        }
    } else {
        DEFAULT_API_BASE.to_string()
    };
    // Normalize: remove trailing slash
    url.trim_end_matches('/').to_string()
}

// ============ Wire Types ============

/// Speaker of a chat turn
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// One turn of the conversation thread.
///
/// `failed` is a client-only marker for an optimistic user turn whose send
/// never reached the server; it is skipped on the wire.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ChatTurn {
    pub role: Role,
    pub content: String,
    #[serde(skip)]
    pub failed: bool,
}

impl ChatTurn {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
            failed: false,
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
            failed: false,
        }
    }
}

/// A journal entry keyed by calendar day (`YYYY-MM-DD`)
#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
pub struct JournalEntry {
    pub date: String,
    pub entry: String,
}

/// Server-computed personality profile. Every field is optional; an absent
/// field degrades only its own panel in the profile view.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize)]
pub struct Profile {
    #[serde(default)]
    pub perfil_emocional: Option<BTreeMap<String, f64>>,
    #[serde(default)]
    pub tendencia: Option<String>,
    #[serde(default)]
    pub big_five: Option<BTreeMap<String, f64>>,
    #[serde(default)]
    pub eneagrama: Option<Enneagram>,
}

/// Enneagram result within a profile
#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
pub struct Enneagram {
    #[serde(rename = "eneagrama_type")]
    pub enneagram_type: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub recommendation: String,
}

// ============ Response Types ============

#[derive(Debug, serde::Deserialize)]
struct ConversationResponse {
    #[serde(default)]
    conversation: Vec<ChatTurn>,
}

#[derive(Debug, serde::Deserialize)]
struct ChatResponse {
    respuesta: String,
}

#[derive(Debug, serde::Deserialize)]
struct JournalResponse {
    #[serde(default)]
    diario: Vec<JournalEntry>,
}

#[derive(Debug, serde::Deserialize)]
struct JournalUpsertResponse {
    #[serde(default)]
    mensaje: String,
}

#[derive(Debug, serde::Deserialize)]
struct ProfileResponse {
    #[serde(default)]
    perfil: Option<Profile>,
}

#[derive(Debug, serde::Deserialize)]
struct GoalsResponse {
    #[serde(default)]
    objetivo: Option<GoalList>,
}

#[derive(Debug, Default, serde::Deserialize)]
struct GoalList {
    #[serde(default)]
    objetivos: Vec<String>,
}

// ============ API Functions ============

/// Log in. Only the HTTP status matters; the backend does not distinguish
/// unknown user from wrong password and neither does the client.
pub async fn login(credentials: &Credentials) -> Result<(), String> {
    let api_base = get_api_base();

    let response = Request::post(&format!("{}/login", api_base))
        .json(credentials)
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err("Invalid credentials or login error".to_string());
    }

    Ok(())
}

/// Register a new user. Status-only response, like [`login`].
pub async fn register(credentials: &Credentials) -> Result<(), String> {
    let api_base = get_api_base();

    let response = Request::post(&format!("{}/register", api_base))
        .json(credentials)
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err("Registration failed. The username may already exist".to_string());
    }

    Ok(())
}

/// Fetch the stored conversation for a user
pub async fn fetch_conversation(username: &str) -> Result<Vec<ChatTurn>, String> {
    let api_base = get_api_base();

    let response = Request::get(&format!("{}/start_chat", api_base))
        .query([("username", username)])
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err("Could not load the conversation".to_string());
    }

    let result: ConversationResponse = response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))?;

    Ok(result.conversation)
}

/// Send the full conversation thread and receive the assistant's reply.
///
/// Turns marked `failed` never reached the server and are excluded from the
/// payload so the thread the backend sees stays consistent with its own
/// history.
pub async fn send_chat_turn(messages: &[ChatTurn], username: &str) -> Result<String, String> {
    #[derive(serde::Serialize)]
    struct ChatRequest<'a> {
        messages: Vec<&'a ChatTurn>,
        username: &'a str,
    }

    let api_base = get_api_base();

    let request = ChatRequest {
        messages: messages.iter().filter(|m| !m.failed).collect(),
        username,
    };

    let response = Request::post(&format!("{}/chat", api_base))
        .json(&request)
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err("The chatbot did not answer".to_string());
    }

    let result: ChatResponse = response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))?;

    Ok(result.respuesta)
}

/// Fetch the complete journal collection for a user
pub async fn fetch_journal(credentials: &Credentials) -> Result<Vec<JournalEntry>, String> {
    let api_base = get_api_base();

    let response = Request::get(&format!("{}/diario", api_base))
        .query([
            ("username", credentials.username.as_str()),
            ("password", credentials.password.as_str()),
        ])
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err("Could not load the journal".to_string());
    }

    let result: JournalResponse = response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))?;

    Ok(result.diario)
}

/// Create or update the journal entry for a date
pub async fn upsert_journal_entry(
    credentials: &Credentials,
    date: &str,
    entry: &str,
) -> Result<String, String> {
    #[derive(serde::Serialize)]
    struct UpsertRequest<'a> {
        username: &'a str,
        password: &'a str,
        entry: &'a str,
        fecha: &'a str,
        editar: bool,
    }

    let api_base = get_api_base();

    let response = Request::post(&format!("{}/diario", api_base))
        .json(&UpsertRequest {
            username: &credentials.username,
            password: &credentials.password,
            entry,
            fecha: date,
            editar: true,
        })
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err("Could not save the entry".to_string());
    }

    let result: JournalUpsertResponse = response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))?;

    Ok(result.mensaje)
}

/// Fetch the server-computed personality profile, if one exists yet
pub async fn fetch_profile(credentials: &Credentials) -> Result<Option<Profile>, String> {
    let api_base = get_api_base();

    let response = Request::get(&format!("{}/perfilado", api_base))
        .query([
            ("username", credentials.username.as_str()),
            ("password", credentials.password.as_str()),
        ])
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err("Could not load the profile".to_string());
    }

    let result: ProfileResponse = response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))?;

    Ok(result.perfil)
}

/// Fetch the server-generated goal list
pub async fn fetch_goals(credentials: &Credentials) -> Result<Vec<String>, String> {
    let api_base = get_api_base();

    let response = Request::get(&format!("{}/Objetivo", api_base))
        .query([
            ("username", credentials.username.as_str()),
            ("password", credentials.password.as_str()),
        ])
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err("Could not load the goals".to_string());
    }

    let result: GoalsResponse = response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))?;

    Ok(result.objetivo.unwrap_or_default().objetivos)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_turn_wire_shape() {
        let mut turn = ChatTurn::user("hola");
        turn.failed = true;

        // The failed marker never leaves the client
        let json = serde_json::to_value(&turn).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"role": "user", "content": "hola"})
        );

        // Deserialized turns default to not-failed
        let back: ChatTurn = serde_json::from_value(json).unwrap();
        assert!(!back.failed);
        assert_eq!(back.role, Role::User);
    }

    #[test]
    fn test_conversation_response_defaults_to_empty() {
        let result: ConversationResponse = serde_json::from_str("{}").unwrap();
        assert!(result.conversation.is_empty());

        let result: ConversationResponse = serde_json::from_str(
            r#"{"conversation": [{"role": "assistant", "content": "hola"}]}"#,
        )
        .unwrap();
        assert_eq!(result.conversation.len(), 1);
        assert_eq!(result.conversation[0].role, Role::Assistant);
    }

    #[test]
    fn test_profile_tolerates_missing_fields() {
        let json = r#"{
            "perfil_emocional": {"alegria": 0.7, "tristeza": 0.1},
            "big_five": {"apertura": 62.0}
        }"#;
        let profile: Profile = serde_json::from_str(json).unwrap();

        assert!(profile.perfil_emocional.is_some());
        assert!(profile.big_five.is_some());
        assert!(profile.tendencia.is_none());
        assert!(profile.eneagrama.is_none());

        // A fully empty object parses too
        let empty: Profile = serde_json::from_str("{}").unwrap();
        assert_eq!(empty, Profile::default());
    }

    #[test]
    fn test_enneagram_field_names() {
        let json = r#"{
            "eneagrama_type": "Tipo 4",
            "description": "Individualista",
            "recommendation": "Cultiva la rutina"
        }"#;
        let enneagram: Enneagram = serde_json::from_str(json).unwrap();
        assert_eq!(enneagram.enneagram_type, "Tipo 4");
        assert_eq!(enneagram.recommendation, "Cultiva la rutina");
    }

    #[test]
    fn test_goals_response_unwraps_nested_list() {
        let result: GoalsResponse =
            serde_json::from_str(r#"{"objetivo": {"objetivos": ["a", "b"]}}"#).unwrap();
        assert_eq!(result.objetivo.unwrap().objetivos, vec!["a", "b"]);

        // Missing or empty shapes collapse to an empty list
        let result: GoalsResponse = serde_json::from_str("{}").unwrap();
        assert!(result.objetivo.unwrap_or_default().objetivos.is_empty());

        let result: GoalsResponse = serde_json::from_str(r#"{"objetivo": {}}"#).unwrap();
        assert!(result.objetivo.unwrap_or_default().objetivos.is_empty());
    }
}
