//! HTTP Suggestions Client Implementation
//!
//! POSTs the clinical context to `{base_url}/ai/medical-suggestions` with the
//! persisted session token as a bearer credential. One attempt per call, no
//! timeout beyond reqwest's defaults.

use reqwest::header::AUTHORIZATION;
use reqwest::StatusCode;
use sysmedic_auth::{bearer_header, TokenManager};

use crate::{
    ApiEnvelope, MedicalSuggestionRequest, MedicalSuggestions, SuggestionConfig, SuggestionError,
    SuggestionService, SUGGESTIONS_PATH,
};

/// HTTP client for the backend suggestions endpoint
pub struct SuggestionClient {
    http: reqwest::Client,
    endpoint: String,
    tokens: TokenManager,
}

impl SuggestionClient {
    /// Create a new suggestions client from configuration
    pub fn new(config: SuggestionConfig, tokens: TokenManager) -> Self {
        let endpoint = format!(
            "{}{}",
            config.base_url.trim_end_matches('/'),
            SUGGESTIONS_PATH
        );
        Self {
            http: reqwest::Client::new(),
            endpoint,
            tokens,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait::async_trait]
impl SuggestionService for SuggestionClient {
    async fn medical_suggestions(
        &self,
        request: MedicalSuggestionRequest,
    ) -> Result<MedicalSuggestions, SuggestionError> {
        let token = self.tokens.retrieve().ok_or(SuggestionError::MissingToken)?;
        request.validate()?;

        tracing::debug!(specialty = %request.specialty, "Sending medical suggestions request");

        let response = self
            .http
            .post(&self.endpoint)
            .header(AUTHORIZATION, bearer_header(&token))
            .json(&request)
            .send()
            .await
            .map_err(|e| SuggestionError::Request(format!("HTTP request failed: {}", e)))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| SuggestionError::Request(format!("Failed to read response: {}", e)))?;

        if status == StatusCode::UNAUTHORIZED {
            tracing::warn!("Suggestions API rejected the session token");
            return Err(SuggestionError::Unauthorized);
        }

        if !status.is_success() {
            // Error responses normally use the same envelope
            if let Ok(envelope) = serde_json::from_str::<ApiEnvelope<serde_json::Value>>(&body) {
                if let Some(message) = envelope.message {
                    return Err(SuggestionError::Rejected(message));
                }
            }

            return Err(SuggestionError::Response(format!(
                "Suggestions API returned {}: {}",
                status, body
            )));
        }

        let envelope: ApiEnvelope<MedicalSuggestions> = serde_json::from_str(&body)
            .map_err(|e| SuggestionError::Response(format!("Failed to parse response: {}", e)))?;

        let suggestions = envelope.into_result()?;

        tracing::debug!(
            diagnoses = suggestions.differential_diagnosis.len(),
            red_flags = suggestions.red_flags.len(),
            "Medical suggestions received"
        );

        Ok(suggestions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use sysmedic_auth::MemoryStore;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const TOKEN: &str = "a.eyJleHAiOjk5OTk5OTk5OTl9.sig";

    fn client_for(server: &MockServer, token: Option<&str>) -> SuggestionClient {
        let tokens = TokenManager::with_store(MemoryStore::new());
        if let Some(token) = token {
            tokens.store(token);
        }
        SuggestionClient::new(
            SuggestionConfig {
                provider: "http".to_string(),
                base_url: format!("{}/api/", server.uri()),
            },
            tokens,
        )
    }

    fn request() -> MedicalSuggestionRequest {
        MedicalSuggestionRequest::new("fiebre, odinofagia", "otorrinolaringologia")
            .with_patient_age(7)
    }

    #[test]
    fn test_endpoint_joins_base_url() {
        let client = SuggestionClient::new(
            SuggestionConfig {
                provider: "http".to_string(),
                base_url: "http://localhost:3000/api/".to_string(),
            },
            TokenManager::without_storage(),
        );
        assert_eq!(
            client.endpoint(),
            "http://localhost:3000/api/ai/medical-suggestions"
        );
    }

    #[tokio::test]
    async fn test_sends_bearer_token_and_body() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/ai/medical-suggestions"))
            .and(header("authorization", format!("Bearer {}", TOKEN).as_str()))
            .and(body_json(json!({
                "symptoms": "fiebre, odinofagia",
                "specialty": "otorrinolaringologia",
                "patientAge": 7
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "success": true,
                "data": {
                    "differentialDiagnosis": ["Faringoamigdalitis estreptococica"],
                    "recommendedTests": ["Test rapido de estreptococo"],
                    "treatmentSuggestions": ["Amoxicilina"],
                    "redFlags": ["Dificultad respiratoria"],
                    "physicalExamFocus": ["Orofaringe"],
                    "followUpRecommendations": ["Control en 72h"]
                }
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server, Some(TOKEN));
        let suggestions = client.medical_suggestions(request()).await.unwrap();

        assert_eq!(
            suggestions.differential_diagnosis,
            vec!["Faringoamigdalitis estreptococica"]
        );
        assert_eq!(suggestions.follow_up_recommendations, vec!["Control en 72h"]);
    }

    #[tokio::test]
    async fn test_missing_token_sends_nothing() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let client = client_for(&server, None);
        let result = client.medical_suggestions(request()).await;
        assert!(matches!(result, Err(SuggestionError::MissingToken)));
    }

    #[tokio::test]
    async fn test_unsuccessful_envelope_surfaces_message() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/ai/medical-suggestions"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "success": false,
                "message": "El servicio de IA no esta disponible"
            })))
            .mount(&server)
            .await;

        let client = client_for(&server, Some(TOKEN));
        let err = client.medical_suggestions(request()).await.unwrap_err();
        assert!(matches!(err, SuggestionError::Rejected(_)));
        assert_eq!(err.to_string(), "El servicio de IA no esta disponible");
    }

    #[tokio::test]
    async fn test_error_status_with_envelope_message() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(400).set_body_json(json!({
                "success": false,
                "message": "symptoms is required"
            })))
            .mount(&server)
            .await;

        let client = client_for(&server, Some(TOKEN));
        let err = client.medical_suggestions(request()).await.unwrap_err();
        assert_eq!(err.to_string(), "symptoms is required");
    }

    #[tokio::test]
    async fn test_error_status_without_envelope() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(502).set_body_string("Bad Gateway"))
            .mount(&server)
            .await;

        let client = client_for(&server, Some(TOKEN));
        let err = client.medical_suggestions(request()).await.unwrap_err();
        assert!(matches!(err, SuggestionError::Response(_)));
        assert!(err.to_string().contains("502"));
        assert!(err.to_string().contains("Bad Gateway"));
    }

    #[tokio::test]
    async fn test_unauthorized_status() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(401).set_body_json(json!({
                "success": false,
                "message": "Token expirado"
            })))
            .mount(&server)
            .await;

        let client = client_for(&server, Some(TOKEN));
        let err = client.medical_suggestions(request()).await.unwrap_err();
        assert!(matches!(err, SuggestionError::Unauthorized));
    }

    #[tokio::test]
    async fn test_unparseable_success_body() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>ok</html>"))
            .mount(&server)
            .await;

        let client = client_for(&server, Some(TOKEN));
        let err = client.medical_suggestions(request()).await.unwrap_err();
        assert!(matches!(err, SuggestionError::Response(_)));
    }

    #[tokio::test]
    async fn test_transport_failure() {
        // Nothing listens on the port once the listener is dropped
        let port = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().port()
        };
        let uri = format!("http://127.0.0.1:{}", port);

        let tokens = TokenManager::with_store(MemoryStore::new());
        tokens.store(TOKEN);
        let client = SuggestionClient::new(
            SuggestionConfig {
                provider: "http".to_string(),
                base_url: uri,
            },
            tokens,
        );

        let err = client.medical_suggestions(request()).await.unwrap_err();
        assert!(matches!(err, SuggestionError::Request(_)));
    }

    #[tokio::test]
    async fn test_invalid_request_is_not_sent() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let client = client_for(&server, Some(TOKEN));
        let result = client
            .medical_suggestions(MedicalSuggestionRequest::new("", "pediatria"))
            .await;
        assert!(matches!(result, Err(SuggestionError::Validation(_))));
    }
}
