// src/services/gemini.rs

use std::sync::LazyLock;
use std::time::Duration;

use regex::Regex;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::{
    config::Config,
    error::AppError,
    models::question::{QUESTIONS_PER_QUIZ, Question, RawQuestion},
};

/// Greedy match from the first '[' to the last ']' in the model output,
/// across newlines. Lenient toward models that wrap the array in prose;
/// correct as long as the reply carries a single top-level array.
static JSON_ARRAY_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?s)\[.*\]").unwrap());

/// Upper bound on one model round-trip. Expiry surfaces as an upstream
/// error like any other transport failure.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(90);

/// Client for the Gemini `generateContent` REST endpoint.
///
/// Owns the free-text-to-JSON extraction heuristic, so callers only ever
/// see a fully validated quiz or a typed error. Swapping the heuristic
/// for a structured-output mode would not touch any caller.
#[derive(Clone)]
pub struct QuizGenerator {
    client: Client,
    api_key: String,
    model: String,
    api_base: String,
}

/// Request body for the Gemini API.
#[derive(Serialize)]
struct GeminiRequest {
    contents: Vec<Content>,
}

#[derive(Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Serialize)]
struct Part {
    text: String,
}

/// Response from the Gemini API.
#[derive(Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: ContentResponse,
}

#[derive(Deserialize)]
struct ContentResponse {
    #[serde(default)]
    parts: Vec<PartResponse>,
}

#[derive(Deserialize)]
struct PartResponse {
    text: String,
}

impl QuizGenerator {
    pub fn new(config: &Config) -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            api_key: config.gemini_api_key.clone(),
            model: config.gemini_model.clone(),
            api_base: config.gemini_api_base.clone(),
        }
    }

    /// Generates a quiz from the submitted study text.
    ///
    /// Returns the full set of validated questions or a typed error,
    /// never a partially-formed quiz. Empty input is rejected before any
    /// upstream call.
    pub async fn generate(&self, source_text: &str) -> Result<Vec<Question>, AppError> {
        if source_text.trim().is_empty() {
            return Err(AppError::BadRequest("No text provided".to_string()));
        }

        let reply = self.request_completion(&build_prompt(source_text)).await?;
        parse_questions(&reply)
    }

    /// One round-trip to the model. No retry: recovery is the caller
    /// re-submitting the request.
    async fn request_completion(&self, prompt: &str) -> Result<String, AppError> {
        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.api_base, self.model, self.api_key
        );

        let body = GeminiRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
        };

        let response = self.client.post(&url).json(&body).send().await?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            tracing::error!("Gemini call failed with {}: {}", status, detail);
            return Err(AppError::UpstreamService(format!(
                "AI service returned {}",
                status
            )));
        }

        let payload: GeminiResponse = response.json().await?;

        let text: String = payload
            .candidates
            .into_iter()
            .next()
            .map(|c| {
                c.content
                    .parts
                    .into_iter()
                    .map(|p| p.text)
                    .collect::<Vec<_>>()
                    .join("")
            })
            .unwrap_or_default();

        if text.is_empty() {
            return Err(AppError::UpstreamService(
                "AI service returned an empty completion".to_string(),
            ));
        }

        Ok(text)
    }
}

/// The fixed instructional prompt, in the students' language. The model
/// is told to answer with the JSON array only; extraction below still
/// tolerates surrounding commentary.
fn build_prompt(source_text: &str) -> String {
    format!(
        "На основе следующего текста сгенерируй {n} тестовых вопросов с 4 вариантами ответа, \
         где только один правильный.\n\
         Ответ должен быть строго в формате JSON. Каждый вопрос должен быть объектом с полями:\n\
         - \"question\"\n\
         - \"options\"\n\
         - \"correct_option\"\n\
         Начни свой ответ сразу с JSON-массива.\n\
         Текст:\n{text}",
        n = QUESTIONS_PER_QUIZ,
        text = source_text
    )
}

/// Pulls the question array out of the raw model text.
fn extract_json_array(text: &str) -> Option<&str> {
    JSON_ARRAY_RE.find(text).map(|m| m.as_str())
}

/// Parses and validates the model output into a complete quiz.
///
/// Any defect (no array, unparsable JSON, a malformed question, a
/// question count other than [`QUESTIONS_PER_QUIZ`]) rejects the whole
/// response and hands the raw text back for diagnostics.
fn parse_questions(reply: &str) -> Result<Vec<Question>, AppError> {
    let malformed = || AppError::MalformedAiResponse {
        raw: reply.to_string(),
    };

    let array = extract_json_array(reply).ok_or_else(malformed)?;

    let parsed: Vec<RawQuestion> = serde_json::from_str(array).map_err(|e| {
        tracing::warn!("Model output failed to parse as a question array: {}", e);
        malformed()
    })?;

    if parsed.len() != QUESTIONS_PER_QUIZ {
        tracing::warn!(
            "Model returned {} questions instead of {}",
            parsed.len(),
            QUESTIONS_PER_QUIZ
        );
        return Err(malformed());
    }

    let mut questions = Vec::with_capacity(parsed.len());
    for raw_question in parsed {
        questions.push(raw_question.normalize().ok_or_else(malformed)?);
    }

    Ok(questions)
}
