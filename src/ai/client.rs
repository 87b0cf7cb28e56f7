use serde::{Deserialize, Serialize};
use thiserror::Error;

const GENERATE_URL: &str =
    "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.0-flash:generateContent";

/// One suggested song from the generative model, exactly the tuple the AI
/// radio renders. Accepting a recommendation turns it into a
/// `PlayRequest::External`; nothing here ever reaches the player directly.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Recommendation {
    pub title: String,
    pub artist: String,
    pub reason: String,
}

#[derive(Error, Debug)]
pub enum AiError {
    #[error("GEMINI_API_KEY is not set")]
    MissingApiKey,

    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("malformed response: {0}")]
    Malformed(String),
}

/// Thin client for the Gemini `generateContent` endpoint. The response is
/// constrained to a JSON array of `{title, artist, reason}` objects via a
/// response schema, so parsing is a single `serde_json` pass over the
/// first candidate's text part.
pub struct AiClient {
    http: reqwest::Client,
    api_key: String,
}

impl AiClient {
    pub fn from_env() -> Result<Self, AiError> {
        let api_key = std::env::var("GEMINI_API_KEY").map_err(|_| AiError::MissingApiKey)?;
        Ok(Self {
            http: reqwest::Client::new(),
            api_key,
        })
    }

    /// Asks for five songs matching the user's mood text. Callers in the
    /// UI map any error to an empty recommendation set; no failure here is
    /// allowed to propagate into the player.
    pub async fn recommend(&self, mood: &str) -> Result<Vec<Recommendation>, AiError> {
        let response: GenerateResponse = self
            .http
            .post(GENERATE_URL)
            .query(&[("key", self.api_key.as_str())])
            .json(&GenerateRequest::for_mood(mood))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        parse_recommendations(response)
    }
}

pub(crate) fn parse_recommendations(
    response: GenerateResponse,
) -> Result<Vec<Recommendation>, AiError> {
    let text = response
        .candidates
        .into_iter()
        .next()
        .and_then(|candidate| candidate.content.parts.into_iter().next())
        .map(|part| part.text)
        .ok_or_else(|| AiError::Malformed("no candidates in response".into()))?;

    serde_json::from_str(&text).map_err(|err| AiError::Malformed(err.to_string()))
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GenerateRequest {
    contents: Vec<Content>,
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Serialize)]
struct Part {
    text: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_mime_type: String,
    response_schema: serde_json::Value,
}

impl GenerateRequest {
    fn for_mood(mood: &str) -> Self {
        let prompt = format!(
            "你是一位资深音乐评论家和情感电台主持人。请根据以下关键词或描述，\
             推荐 5 首最契合的音乐，并给出简短的推荐理由。\n\n用户描述: \"{mood}\""
        );

        Self {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json".into(),
                response_schema: serde_json::json!({
                    "type": "ARRAY",
                    "items": {
                        "type": "OBJECT",
                        "properties": {
                            "title": { "type": "STRING", "description": "歌曲名称" },
                            "artist": { "type": "STRING", "description": "艺人名称" },
                            "reason": { "type": "STRING", "description": "推荐理由，控制在 30 字以内" }
                        },
                        "required": ["title", "artist", "reason"]
                    }
                }),
            },
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct GenerateResponse {
    #[serde(default)]
    pub(crate) candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Candidate {
    pub(crate) content: CandidateContent,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CandidateContent {
    #[serde(default)]
    pub(crate) parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ResponsePart {
    pub(crate) text: String,
}
