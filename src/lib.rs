//! dsquiz Library
//!
//! Serves quiz questions about data structures to a browser client:
//! - Question bank read from a CSV file on every request
//! - Exact topic/difficulty filtering with sampling without replacement
//! - Random array, linked-list and tree fixtures for visualization

pub mod api;
pub mod core;
pub mod models;
pub mod utils;

pub use crate::core::{fixture, generate, select, QuestionStore};
pub use models::{
    AppError, AppResult, EnrichedQuestion, ErrorCode, QuestionRecord, QuestionTable,
    ServerConfig, Topic,
};
pub use utils::telemetry::{TelemetryCollector, TelemetryStats};
