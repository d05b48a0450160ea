//! HTTP API Client
//!
//! Functions for communicating with the MedScan classification API.
//! Every function issues a single request against the configured base
//! URL; authenticated calls attach the stored bearer credential when
//! one is present and proceed unauthenticated otherwise.

use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

use crate::config;
use crate::state::session;

/// Error carried back from any API call: the HTTP status (0 for
/// transport failures that never produced a response) and a short
/// human-readable message.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{message}")]
pub struct ApiError {
    pub status: u16,
    pub message: String,
}

impl ApiError {
    fn transport(err: gloo_net::Error) -> Self {
        Self {
            status: 0,
            message: format!("Network error: {}", err),
        }
    }
}

/// Error body shape used by the backend
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    detail: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

/// Pull the `detail`/`message` field out of an error body, falling
/// back to the HTTP status text
fn error_message(body: &str, fallback: String) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.detail.or(b.message))
        .unwrap_or(fallback)
}

/// Decode a response, converting non-2xx statuses into `ApiError`.
/// Empty bodies are treated as `{}`.
async fn handle_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let status = response.status();
    let text = response.text().await.unwrap_or_default();

    if !response.ok() {
        return Err(ApiError {
            status,
            message: error_message(&text, response.status_text()),
        });
    }

    let body = if text.is_empty() { "{}" } else { text.as_str() };
    serde_json::from_str(body).map_err(|e| ApiError {
        status,
        message: format!("Parse error: {}", e),
    })
}

/// Attach the stored bearer credential, if any
fn with_auth(builder: RequestBuilder) -> RequestBuilder {
    match session::auth_header() {
        Some(value) => builder.header("Authorization", &value),
        None => builder,
    }
}

/// URI-component encoding for path segments (emails contain `@`)
fn encode(segment: &str) -> String {
    String::from(js_sys::encode_uri_component(segment))
}

// ============================================
// Response Types
// ============================================

/// Service info from `GET /`
#[derive(Debug, Clone, Deserialize)]
pub struct ApiInfo {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// Classification output for one uploaded image
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    pub prediction_id: String,
    pub predicted_class: String,
    pub confidence_score: f64,
    pub all_predictions: HashMap<String, f64>,
    pub processing_time: f64,
    pub created_at: String,
}

/// A previously recorded prediction for the signed-in user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryItem {
    pub prediction_id: String,
    pub predicted_class: String,
    pub confidence_score: f64,
    #[serde(default)]
    pub all_predictions: HashMap<String, f64>,
    pub processing_time: f64,
    pub created_at: String,
    /// Set when the backend exposes a URL for the stored image
    #[serde(default)]
    pub image_url: Option<String>,
}

impl HistoryItem {
    /// Whether this item embeds the full per-class distribution
    pub fn has_full_payload(&self) -> bool {
        !self.all_predictions.is_empty()
    }

    /// Rebuild the prediction payload embedded in this item.
    ///
    /// Pure: selecting a history item never issues a network call.
    pub fn to_result(&self) -> PredictionResult {
        PredictionResult {
            prediction_id: self.prediction_id.clone(),
            predicted_class: self.predicted_class.clone(),
            confidence_score: self.confidence_score,
            all_predictions: self.all_predictions.clone(),
            processing_time: self.processing_time,
            created_at: self.created_at.clone(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    // The backend reports these as either strings or booleans
    #[allow(dead_code)]
    #[serde(default)]
    pub database: Option<serde_json::Value>,
    #[allow(dead_code)]
    #[serde(default)]
    pub model: Option<serde_json::Value>,
    #[allow(dead_code)]
    #[serde(default)]
    pub timestamp: Option<String>,
}

impl HealthResponse {
    /// The backend reports either "healthy" or "ok" when serving
    pub fn is_ok(&self) -> bool {
        matches!(self.status.as_str(), "healthy" | "ok")
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct StatsResponse {
    pub total_predictions: u64,
    #[allow(dead_code)]
    #[serde(default)]
    pub recent_predictions: Vec<serde_json::Value>,
    #[allow(dead_code)]
    #[serde(default)]
    pub model_info: HashMap<String, serde_json::Value>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UserStatsResponse {
    pub total_predictions: u64,
    #[serde(default)]
    pub most_common_prediction: Option<String>,
    #[serde(default)]
    pub average_confidence: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AuthResponse {
    pub access_token: String,
    #[serde(default)]
    pub token_type: String,
}

// ============================================
// API Functions
// ============================================

/// Fetch service info
pub async fn get_api_info() -> Result<ApiInfo, ApiError> {
    let response = Request::get(&format!("{}/", config::api_base()))
        .send()
        .await
        .map_err(ApiError::transport)?;
    handle_json(response).await
}

/// Check backend health
pub async fn get_health() -> Result<HealthResponse, ApiError> {
    let response = Request::get(&format!("{}/health", config::api_base()))
        .send()
        .await
        .map_err(ApiError::transport)?;
    handle_json(response).await
}

/// Fetch service-wide prediction stats
pub async fn get_stats() -> Result<StatsResponse, ApiError> {
    let response = with_auth(Request::get(&format!("{}/stats", config::api_base())))
        .send()
        .await
        .map_err(ApiError::transport)?;
    handle_json(response).await
}

/// Fetch prediction stats for one user
pub async fn get_user_stats(email: &str) -> Result<UserStatsResponse, ApiError> {
    let url = format!("{}/user/{}/stats", config::api_base(), encode(email));
    let response = with_auth(Request::get(&url))
        .send()
        .await
        .map_err(ApiError::transport)?;
    handle_json(response).await
}

/// Page parameters the backend accepts: limit must land in [1, 100]
pub fn effective_limit(limit: u32) -> u32 {
    limit.clamp(1, 100)
}

/// Fetch the user's prediction history, newest first (server order)
pub async fn get_user_predictions(
    email: &str,
    skip: u32,
    limit: u32,
) -> Result<Vec<HistoryItem>, ApiError> {
    let url = format!(
        "{}/user/{}/predictions?skip={}&limit={}",
        config::api_base(),
        encode(email),
        skip,
        effective_limit(limit)
    );
    let response = with_auth(Request::get(&url))
        .send()
        .await
        .map_err(ApiError::transport)?;
    handle_json(response).await
}

/// Upload an X-ray for classification.
///
/// Sends multipart form data: the file plus the signed-in user's name
/// and email when known, so the backend can associate the prediction.
pub async fn predict_image(file: &web_sys::File) -> Result<PredictionResult, ApiError> {
    let form = web_sys::FormData::new().map_err(|_| ApiError {
        status: 0,
        message: "Failed to build upload form".to_string(),
    })?;
    form.append_with_blob_and_filename("file", file, &file.name())
        .map_err(|_| ApiError {
            status: 0,
            message: "Failed to attach file".to_string(),
        })?;
    if let Some(name) = session::stored_name() {
        let _ = form.append_with_str("user_name", &name);
    }
    if let Some(email) = session::stored_email() {
        let _ = form.append_with_str("user_email", &email);
    }

    let response = with_auth(Request::post(&format!("{}/predict", config::api_base())))
        .body(form)
        .map_err(ApiError::transport)?
        .send()
        .await
        .map_err(ApiError::transport)?;
    handle_json(response).await
}

/// Create an account. On success the issued credential is written to
/// the session store so the next authenticated call carries it.
pub async fn register_user(
    name: &str,
    email: &str,
    password: &str,
) -> Result<AuthResponse, ApiError> {
    #[derive(Serialize)]
    struct RegisterRequest<'a> {
        name: &'a str,
        email: &'a str,
        password: &'a str,
    }

    let response = Request::post(&format!("{}/auth/register", config::api_base()))
        .json(&RegisterRequest { name, email, password })
        .map_err(ApiError::transport)?
        .send()
        .await
        .map_err(ApiError::transport)?;

    let auth: AuthResponse = handle_json(response).await?;
    session::store_credentials(&auth.access_token, &auth.token_type);
    Ok(auth)
}

/// Log in. Same credential side effect as `register_user`; a failed
/// login returns before any session write.
pub async fn login_user(email: &str, password: &str) -> Result<AuthResponse, ApiError> {
    #[derive(Serialize)]
    struct LoginRequest<'a> {
        email: &'a str,
        password: &'a str,
    }

    let response = Request::post(&format!("{}/auth/login", config::api_base()))
        .json(&LoginRequest { email, password })
        .map_err(ApiError::transport)?
        .send()
        .await
        .map_err(ApiError::transport)?;

    let auth: AuthResponse = handle_json(response).await?;
    session::store_credentials(&auth.access_token, &auth.token_type);
    Ok(auth)
}

/// Drop the stored bearer credential. Local only: the backend has no
/// logout endpoint, bearer tokens simply stop being sent.
pub fn logout_user() {
    session::clear_credentials();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_effective_limit_clamps() {
        assert_eq!(effective_limit(150), 100);
        assert_eq!(effective_limit(0), 1);
        assert_eq!(effective_limit(50), 50);
        assert_eq!(effective_limit(1), 1);
        assert_eq!(effective_limit(100), 100);
    }

    #[test]
    fn test_error_message_prefers_detail() {
        let msg = error_message(
            r#"{"detail": "Invalid credentials", "message": "other"}"#,
            "Unauthorized".to_string(),
        );
        assert_eq!(msg, "Invalid credentials");
    }

    #[test]
    fn test_error_message_falls_back_to_message_field() {
        let msg = error_message(r#"{"message": "boom"}"#, "Bad Request".to_string());
        assert_eq!(msg, "boom");
    }

    #[test]
    fn test_error_message_falls_back_to_status_text() {
        assert_eq!(
            error_message("not json", "Internal Server Error".to_string()),
            "Internal Server Error"
        );
        assert_eq!(error_message("", "Bad Gateway".to_string()), "Bad Gateway");
    }

    #[test]
    fn test_auth_response_token_type_optional() {
        let auth: AuthResponse = serde_json::from_str(r#"{"access_token": "tok"}"#).unwrap();
        assert_eq!(auth.access_token, "tok");
        assert!(auth.token_type.is_empty());

        let auth: AuthResponse =
            serde_json::from_str(r#"{"access_token": "tok", "token_type": "bearer"}"#).unwrap();
        assert_eq!(auth.token_type, "bearer");
    }

    #[test]
    fn test_prediction_result_wire_format() {
        let json = r#"{
            "prediction_id": "abc-123",
            "predicted_class": "Pneumonia",
            "confidence_score": 0.8421,
            "all_predictions": {"Pneumonia": 0.8421, "Normal": 0.1204, "COVID": 0.0375},
            "processing_time": 0.153,
            "created_at": "2024-05-01T12:00:00Z"
        }"#;
        let result: PredictionResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.predicted_class, "Pneumonia");
        assert_eq!(result.all_predictions.len(), 3);
        assert!((result.confidence_score - 0.8421).abs() < f64::EPSILON);
    }

    #[test]
    fn test_history_item_to_result_is_pure() {
        let json = r#"{
            "prediction_id": "abc-123",
            "predicted_class": "Normal",
            "confidence_score": 0.91,
            "all_predictions": {"Normal": 0.91, "Pneumonia": 0.09},
            "processing_time": 0.2,
            "created_at": "2024-05-01T12:00:00Z"
        }"#;
        let item: HistoryItem = serde_json::from_str(json).unwrap();
        assert!(item.image_url.is_none());
        assert!(item.has_full_payload());

        let result = item.to_result();
        assert_eq!(result.prediction_id, item.prediction_id);
        assert_eq!(result.all_predictions, item.all_predictions);
    }

    #[test]
    fn test_history_item_without_distribution() {
        let json = r#"{
            "prediction_id": "abc-123",
            "predicted_class": "Normal",
            "confidence_score": 0.91,
            "processing_time": 0.2,
            "created_at": "2024-05-01T12:00:00Z"
        }"#;
        let item: HistoryItem = serde_json::from_str(json).unwrap();
        assert!(!item.has_full_payload());
    }

    #[test]
    fn test_health_status() {
        let health: HealthResponse = serde_json::from_str(
            r#"{"status": "healthy", "database": true, "model": "loaded", "timestamp": "t"}"#,
        )
        .unwrap();
        assert!(health.is_ok());

        let health: HealthResponse = serde_json::from_str(r#"{"status": "degraded"}"#).unwrap();
        assert!(!health.is_ok());
    }
}
