//! Mock Suggestions Service Implementation
//!
//! Records requests in memory and returns deterministic suggestions derived
//! from the request, or a scripted failure.

use std::sync::{Arc, Mutex};

use crate::{MedicalSuggestionRequest, MedicalSuggestions, SuggestionError, SuggestionService};

/// Mock suggestions service for testing and offline development
#[derive(Debug, Clone, Default)]
pub struct MockSuggestionService {
    requests: Arc<Mutex<Vec<MedicalSuggestionRequest>>>,
    failure: Arc<Mutex<Option<String>>>,
}

impl MockSuggestionService {
    /// Create a new mock suggestions service
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every following call fail with `message`
    pub fn fail_with(&self, message: impl Into<String>) {
        if let Ok(mut failure) = self.failure.lock() {
            *failure = Some(message.into());
        }
    }

    /// Return all recorded requests.
    pub fn recorded_requests(&self) -> Vec<MedicalSuggestionRequest> {
        self.requests
            .lock()
            .expect("requests lock poisoned, prior test panicked")
            .clone()
    }
}

#[async_trait::async_trait]
impl SuggestionService for MockSuggestionService {
    async fn medical_suggestions(
        &self,
        request: MedicalSuggestionRequest,
    ) -> Result<MedicalSuggestions, SuggestionError> {
        tracing::info!("Mock suggestions service processing request");
        request.validate()?;

        self.requests
            .lock()
            .map_err(|e| SuggestionError::Request(format!("requests lock poisoned: {e}")))?
            .push(request.clone());

        let failure = self
            .failure
            .lock()
            .map_err(|e| SuggestionError::Request(format!("failure lock poisoned: {e}")))?
            .clone();
        if let Some(message) = failure {
            return Err(SuggestionError::Rejected(message));
        }

        Ok(MedicalSuggestions {
            differential_diagnosis: vec![format!("Mock diagnosis for: {}", request.symptoms)],
            recommended_tests: vec!["Complete blood count".to_string()],
            treatment_suggestions: vec![format!(
                "Refer to {} protocol",
                request.specialty
            )],
            red_flags: Vec::new(),
            physical_exam_focus: vec!["General examination".to_string()],
            follow_up_recommendations: vec!["Follow up in 7 days".to_string()],
        })
    }
}
