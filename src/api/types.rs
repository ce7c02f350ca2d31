//! API Request/Response Types

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::models::errors::{AppError, AppResult};
use crate::models::types::Topic;

/// API Response wrapper
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ApiError>,
    pub latency_ms: f64,
    pub timestamp: i64,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(data: T, latency_ms: f64) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            latency_ms,
            timestamp: chrono::Utc::now().timestamp(),
        }
    }
}

impl ApiResponse<()> {
    pub fn error(error: ApiError, latency_ms: f64) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error),
            latency_ms,
            timestamp: chrono::Utc::now().timestamp(),
        }
    }
}

/// API Error
#[derive(Debug, Serialize)]
pub struct ApiError {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

// ============================================
// Questions
// ============================================

/// Raw body of a question request.
///
/// `difficulty` and `num_questions` are kept untyped here because browsers
/// send them either as numbers or as form strings; [`Self::validate`]
/// turns them into a [`QuestionQuery`].
#[derive(Debug, Default, Deserialize)]
pub struct QuestionsRequest {
    #[serde(default)]
    pub topic: Option<String>,
    #[serde(default)]
    pub difficulty: Option<Value>,
    #[serde(default)]
    pub num_questions: Option<Value>,
}

/// Validated question request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionQuery {
    pub topic: String,
    pub difficulty: i64,
    pub num_questions: usize,
}

impl QuestionsRequest {
    pub fn validate(self) -> AppResult<QuestionQuery> {
        let difficulty = coerce_int("difficulty", self.difficulty.as_ref())?;
        let num_questions = coerce_int("num_questions", self.num_questions.as_ref())?;
        let num_questions = usize::try_from(num_questions).map_err(|_| {
            AppError::bad_request(format!(
                "num_questions must not be negative, got {}",
                num_questions
            ))
        })?;

        Ok(QuestionQuery {
            // A missing topic matches nothing
            topic: self.topic.unwrap_or_default(),
            difficulty,
            num_questions,
        })
    }
}

/// Accepts `3`, `3.0`, `"3"` and `" 3 "`; fractional numbers truncate
fn coerce_int(field: &str, value: Option<&Value>) -> AppResult<i64> {
    let invalid = || AppError::bad_request(format!("{} must be an integer", field));

    match value {
        None | Some(Value::Null) => Err(AppError::bad_request(format!("{} is required", field))),
        Some(Value::Number(n)) => n
            .as_i64()
            .or_else(|| {
                n.as_f64()
                    .filter(|f| f.is_finite() && f.abs() < i64::MAX as f64)
                    .map(|f| f.trunc() as i64)
            })
            .ok_or_else(invalid),
        Some(Value::String(s)) => s.trim().parse::<i64>().map_err(|_| invalid()),
        Some(_) => Err(invalid()),
    }
}

// ============================================
// Topics
// ============================================

#[derive(Debug, Serialize)]
pub struct TopicInfo {
    pub name: &'static str,
    pub min_values: usize,
    pub max_values: usize,
    pub layout: &'static str,
}

impl From<Topic> for TopicInfo {
    fn from(topic: Topic) -> Self {
        let len = topic.fixture_len();
        Self {
            name: topic.as_str(),
            min_values: *len.start(),
            max_values: *len.end(),
            layout: topic.layout(),
        }
    }
}

// ============================================
// Health Check
// ============================================

#[derive(Debug, Serialize)]
pub struct HealthData {
    pub status: String,
    pub version: String,
    pub uptime_seconds: u64,
    pub question_bank_present: bool,
}
