use async_trait::async_trait;
use log::{ debug, error };
use reqwest::{ Client as HttpClient, header::{ HeaderMap, HeaderValue, CONTENT_TYPE, AUTHORIZATION } };
use serde::{ Deserialize, Serialize };
use serde_json::Value;

use super::ChatGateway;
use crate::config::GatewayConfig;
use crate::error::GatewayError;

pub struct QianfanGateway {
    http: HttpClient,
    app_id: String,
    conversation_url: String,
    runs_url: String,
}

#[derive(Serialize)]
struct CreateConversationRequest<'a> {
    app_id: &'a str,
}

#[derive(Deserialize)]
struct CreateConversationResponse {
    conversation_id: Option<String>,
}

#[derive(Serialize)]
struct RunRequest<'a> {
    app_id: &'a str,
    query: &'a str,
    conversation_id: &'a str,
    stream: bool,
}

#[derive(Deserialize)]
struct RunResponse {
    #[serde(default)]
    answer: Option<String>,
}

impl QianfanGateway {
    pub fn from_config(config: &GatewayConfig) -> Result<Self, GatewayError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&config.auth_token)
                .map_err(|e| GatewayError::InvalidConfig(format!("Invalid auth token format: {}", e)))?
        );

        let mut builder = HttpClient::builder().default_headers(headers);
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            http: builder.build()?,
            app_id: config.app_id.clone(),
            conversation_url: config.conversation_url.clone(),
            runs_url: config.runs_url.clone(),
        })
    }

    async fn post_json<T: Serialize + ?Sized>(&self, url: &str, body: &T) -> Result<String, GatewayError> {
        let resp = self.http.post(url).json(body).send().await?;
        let status = resp.status();
        let text = resp.text().await?;
        if !status.is_success() {
            error!("Gateway {} returned {}: {}", url, status, text);
            return Err(GatewayError::Status { status: status.as_u16(), body: text });
        }
        Ok(text)
    }
}

#[async_trait]
impl ChatGateway for QianfanGateway {
    async fn create_conversation(&self) -> Result<String, GatewayError> {
        let body = self.post_json(
            &self.conversation_url,
            &CreateConversationRequest { app_id: &self.app_id }
        ).await?;
        let parsed: CreateConversationResponse = serde_json::from_str(&body).map_err(GatewayError::Decode)?;

        match parsed.conversation_id.filter(|id| !id.trim().is_empty()) {
            Some(id) => {
                debug!("Created remote conversation {}", id);
                Ok(id)
            }
            None => Err(GatewayError::MissingConversationId),
        }
    }

    async fn query(&self, query: &str, conversation_id: &str) -> Result<String, GatewayError> {
        let req = RunRequest {
            app_id: &self.app_id,
            query,
            conversation_id,
            stream: false,
        };
        let body = self.post_json(&self.runs_url, &req).await?;
        let parsed: RunResponse = serde_json::from_str(&body).map_err(GatewayError::Decode)?;

        extract_answer(parsed.answer.as_deref().unwrap_or("")).ok_or(GatewayError::EmptyAnswer)
    }
}

/// The `answer` field is usually itself a JSON object whose `result` holds
/// the reply. Anything that is not a JSON object is taken verbatim.
pub fn extract_answer(raw: &str) -> Option<String> {
    match serde_json::from_str::<Value>(raw) {
        Ok(Value::Object(map)) =>
            map
                .get("result")
                .and_then(Value::as_str)
                .filter(|s| !s.trim().is_empty())
                .map(str::to_string),
        _ if raw.trim().is_empty() => None,
        _ => Some(raw.to_string()),
    }
}
