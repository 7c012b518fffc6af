//! SYSMEDIC Medical Suggestions Service
//!
//! Provides AI-assisted differential diagnosis suggestions with support for:
//! - HTTP client for the backend's `/ai/medical-suggestions` endpoint
//! - Mock suggestion service for testing and development
//! - Bearer authentication using the persisted session token

pub mod client;
pub mod mock;

use serde::{Deserialize, Serialize};
use sysmedic_auth::TokenManager;
use sysmedic_common::Config;
use thiserror::Error;

/// Path of the suggestions endpoint, relative to the API base URL
pub const SUGGESTIONS_PATH: &str = "/ai/medical-suggestions";

const DEFAULT_FAILURE_MESSAGE: &str = "Failed to get medical suggestions";

#[derive(Error, Debug)]
pub enum SuggestionError {
    #[error("No authentication token available, please log in")]
    MissingToken,

    #[error("Session rejected by the server, please log in again")]
    Unauthorized,

    #[error("Invalid suggestion request: {0}")]
    Validation(String),

    #[error("Suggestions configuration error: {0}")]
    Configuration(String),

    #[error("Suggestions request error: {0}")]
    Request(String),

    #[error("{0}")]
    Rejected(String),

    #[error("Suggestions response error: {0}")]
    Response(String),
}

/// Clinical context sent to the suggestions endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MedicalSuggestionRequest {
    /// Free-text description of the presenting symptoms
    pub symptoms: String,
    pub specialty: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub patient_age: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub patient_gender: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_findings: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vital_signs: Option<String>,
}

impl MedicalSuggestionRequest {
    pub fn new(symptoms: impl Into<String>, specialty: impl Into<String>) -> Self {
        Self {
            symptoms: symptoms.into(),
            specialty: specialty.into(),
            patient_age: None,
            patient_gender: None,
            current_findings: None,
            vital_signs: None,
        }
    }

    pub fn with_patient_age(mut self, age: u32) -> Self {
        self.patient_age = Some(age);
        self
    }

    pub fn with_patient_gender(mut self, gender: impl Into<String>) -> Self {
        self.patient_gender = Some(gender.into());
        self
    }

    pub fn with_current_findings(mut self, findings: impl Into<String>) -> Self {
        self.current_findings = Some(findings.into());
        self
    }

    pub fn with_vital_signs(mut self, vital_signs: impl Into<String>) -> Self {
        self.vital_signs = Some(vital_signs.into());
        self
    }

    /// Symptoms and specialty must be non-blank
    pub fn validate(&self) -> Result<(), SuggestionError> {
        if self.symptoms.trim().is_empty() {
            return Err(SuggestionError::Validation(
                "symptoms must not be empty".to_string(),
            ));
        }
        if self.specialty.trim().is_empty() {
            return Err(SuggestionError::Validation(
                "specialty must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// Suggestions returned by the backend
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MedicalSuggestions {
    #[serde(default)]
    pub differential_diagnosis: Vec<String>,
    #[serde(default)]
    pub recommended_tests: Vec<String>,
    #[serde(default)]
    pub treatment_suggestions: Vec<String>,
    #[serde(default)]
    pub red_flags: Vec<String>,
    #[serde(default)]
    pub physical_exam_focus: Vec<String>,
    #[serde(default)]
    pub follow_up_recommendations: Vec<String>,
}

impl MedicalSuggestions {
    /// Sections as (title, items) pairs, in display order
    pub fn sections(&self) -> [(&'static str, &[String]); 6] {
        [
            ("Differential diagnosis", self.differential_diagnosis.as_slice()),
            ("Recommended tests", self.recommended_tests.as_slice()),
            ("Treatment suggestions", self.treatment_suggestions.as_slice()),
            ("Red flags", self.red_flags.as_slice()),
            ("Physical exam focus", self.physical_exam_focus.as_slice()),
            ("Follow-up recommendations", self.follow_up_recommendations.as_slice()),
        ]
    }
}

/// Backend response wrapper carrying logical success independent of HTTP status
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> ApiEnvelope<T> {
    /// Unwrap the payload of a successful envelope
    pub fn into_result(self) -> Result<T, SuggestionError> {
        if !self.success {
            return Err(SuggestionError::Rejected(
                self.message
                    .unwrap_or_else(|| DEFAULT_FAILURE_MESSAGE.to_string()),
            ));
        }

        self.data.ok_or_else(|| {
            SuggestionError::Response("successful response carried no data".to_string())
        })
    }
}

/// Suggestions service configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestionConfig {
    /// Suggestions provider (http, mock)
    pub provider: String,
    /// API base URL, without trailing slash
    pub base_url: String,
}

impl From<&Config> for SuggestionConfig {
    fn from(config: &Config) -> Self {
        Self {
            provider: config.suggestions_provider.clone(),
            base_url: config.api_base_url.clone(),
        }
    }
}

/// Medical suggestions service trait for different implementations
#[async_trait::async_trait]
pub trait SuggestionService: Send + Sync {
    /// Ask the backend for suggestions for the given clinical context
    async fn medical_suggestions(
        &self,
        request: MedicalSuggestionRequest,
    ) -> Result<MedicalSuggestions, SuggestionError>;
}

/// Factory for creating SuggestionService implementations
pub struct SuggestionServiceFactory;

impl SuggestionServiceFactory {
    /// Create a SuggestionService based on configuration
    pub fn create(
        config: SuggestionConfig,
        tokens: TokenManager,
    ) -> Result<Box<dyn SuggestionService>, SuggestionError> {
        match config.provider.as_str() {
            "http" => {
                tracing::info!(base_url = %config.base_url, "Creating HTTP suggestions client");
                Ok(Box::new(client::SuggestionClient::new(config, tokens)))
            }
            "mock" => {
                tracing::info!("Creating mock suggestions service");
                Ok(Box::new(mock::MockSuggestionService::new()))
            }
            provider => Err(SuggestionError::Configuration(format!(
                "Unknown suggestions provider: {}. Supported providers: http, mock",
                provider
            ))),
        }
    }
}
