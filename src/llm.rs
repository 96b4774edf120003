use serde::Serialize;
use serde_json::{json, Value};
use reqwest::Client;
use tracing::{debug, error};
use crate::api::models::ScanResult;
use crate::error::{AppError, Result};

pub const GEMINI_MODEL: &str = "gemini-2.0-flash";

#[derive(Serialize)]
struct Part {
    text: String,
}

#[derive(Serialize)]
struct Content {
    role: String,
    parts: Vec<Part>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_mime_type: String,
    response_schema: Value,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest {
    contents: Vec<Content>,
    generation_config: GenerationConfig,
}

/// Structured-output schema: an object with a `trends` array whose elements
/// carry the six required record fields.
fn trend_response_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "trends": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "slogan": { "type": "STRING" },
                        "relatedKeyword": { "type": "STRING" },
                        "source": { "type": "STRING" },
                        "searchVolume": { "type": "NUMBER" },
                        "startedTrending": { "type": "STRING" },
                        "competition": { "type": "STRING" }
                    },
                    "required": [
                        "slogan", "relatedKeyword", "source",
                        "searchVolume", "startedTrending", "competition"
                    ]
                }
            }
        },
        "required": ["trends"]
    })
}

/// Submits a prompt to the Gemini generateContent endpoint and parses the
/// generated JSON text into a [`ScanResult`]. The model is constrained by the
/// structured-output schema; its conformance is trusted beyond JSON parsing.
pub async fn generate_trends(api_key: &str, base_url: &str, prompt: &str) -> Result<ScanResult> {
    let client = Client::new();
    let body = GenerateRequest {
        contents: vec![Content {
            role: "user".into(),
            parts: vec![Part {
                text: prompt.into(),
            }],
        }],
        generation_config: GenerationConfig {
            response_mime_type: "application/json".into(),
            response_schema: trend_response_schema(),
        },
    };

    let url = format!(
        "{}/v1beta/models/{}:generateContent?key={}",
        base_url, GEMINI_MODEL, api_key
    );

    let res = client.post(&url).json(&body).send().await?;

    let status = res.status();
    if !status.is_success() {
        // Log the upstream body for diagnosis but keep it out of the client-facing error
        let error_body = res.text().await.unwrap_or_default();
        error!("AI API response error body: {}", error_body);
        return Err(AppError::UpstreamCall {
            status: status.as_u16(),
        });
    }

    let json: Value = res.json().await?;
    let generated = extract_generated_text(&json)?;
    debug!("Generated text length: {} chars", generated.len());

    parse_scan_result(generated)
}

/// Pulls the first candidate's first content part out of a generateContent
/// response.
fn extract_generated_text(response: &Value) -> Result<&str> {
    response["candidates"][0]["content"]["parts"][0]["text"]
        .as_str()
        .ok_or_else(|| {
            AppError::MalformedResponse("missing candidate content".to_string())
        })
}

fn parse_scan_result(text: &str) -> Result<ScanResult> {
    serde_json::from_str(text)
        .map_err(|e| AppError::MalformedResponse(format!("generated text is not valid JSON: {}", e)))
}
